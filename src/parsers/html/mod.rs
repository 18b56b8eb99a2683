//! HTML解析和DOM访问模块
//!
//! - `dom`: 基础DOM操作（解析、属性、父子兄弟关系、按id查找）
//! - `utils`: 空白处理等工具函数

pub mod dom;
pub mod utils;

pub use dom::{
    find_all_descendants, find_descendant, find_nodes, first_child, get_child_node_by_name,
    get_children, get_document_root, get_element_by_id, get_node_attr, get_node_name,
    get_parent_element, get_parent_node, get_text_content, has_node_attr, html_to_dom,
    is_document, is_document_element, is_element, is_tag, is_text, last_child, next_sibling,
    previous_sibling,
};
pub use utils::{collapse_whitespace, is_blank};
