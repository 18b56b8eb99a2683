//! # 无障碍查询模块
//!
//! 屏幕阅读器针对 DOM 的各类查询，数据单向流动：
//!
//! - `visibility`、`traverse` - 可见性判定与树导航
//! - `leaf` - 叶子与控件分类
//! - `name`、`role` - 可访问名称、角色与状态
//! - `table` - 布局表格启发式
//! - `describe` - 组合为朗读描述
//!
//! 所有查询都通过一个 [`Query`] 进行，它持有本次查询的记忆化缓存。

pub mod aria;
pub mod cache;
pub mod describe;
pub mod kind;
pub mod leaf;
pub mod messages;
pub mod name;
pub mod query;
pub mod role;
pub mod table;
pub mod traverse;
pub mod visibility;

pub use aria::{AriaRole, StateMsg};
pub use cache::{node_key, NodeKey, QueryCache};
pub use describe::NavDescription;
pub use kind::{ElementKind, InputType};
pub use leaf::{
    is_content_editable, is_control, is_focusable, is_heading, is_leaf_level_control, is_link,
    is_math,
};
pub use messages::{EnglishMessages, MessageCatalog};
pub use name::{get_image_title, is_input_type_text, NameOptions};
pub use query::Query;
pub use role::{has_long_desc, is_disabled, is_internal_link};
pub use table::{count_previous_tags, table_rows};
pub use traverse::{
    compare_ancestors, directed_first_child, directed_next_sibling, get_ancestors,
    get_unique_ancestors, is_descendant_of, is_descendant_of_node, ContentLeaves,
};
pub use visibility::{is_invisible_style, VisibilityCheck};
