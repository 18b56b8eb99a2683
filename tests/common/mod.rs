// 集成测试公共模块
//
// 解析 HTML 片段并按 id 取元素

use markup5ever_rcdom::{Handle, RcDom};

use voxdom::parsers::html::dom::{get_element_by_id, html_to_dom};

pub fn parse(html: &str) -> RcDom {
    html_to_dom(html.as_bytes(), None).unwrap()
}

pub fn element(dom: &RcDom, id: &str) -> Handle {
    get_element_by_id(&dom.document, id).unwrap_or_else(|| panic!("no element with id {id}"))
}
