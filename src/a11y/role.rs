//! 角色与状态
//!
//! 把节点映射为角色消息键（ARIA 角色优先，其次是 `<input type>` 表、链接、
//! 标签表）和一组状态消息，再经由消息目录展开为字符串。

use markup5ever_rcdom::Handle;

use super::aria::{self, StateMsg};
use super::kind::{ElementKind, InputType};
use super::leaf::is_link;
use super::name::selected_options;
use super::query::Query;
use crate::core::Verbosity;
use crate::parsers::html::dom::{
    find_all_descendants, get_children, get_node_attr, get_node_name, get_parent_element,
    has_node_attr, is_element, is_tag,
};
use crate::utils::url::{get_document_path, resolve_url};

/// 支持 `disabled` 属性的表单元素
const DISABLEABLE: &[&str] = &[
    "button", "fieldset", "input", "optgroup", "option", "select", "textarea",
];

/// 指向当前文档内锚点的链接
pub fn is_internal_link(node: &Handle, document_url: Option<&str>) -> bool {
    if !is_element(node) {
        return false;
    }
    let Some(href) = get_node_attr(node, "href") else {
        return false;
    };
    let Some((path, _)) = href.split_once('#') else {
        return false;
    };
    path.is_empty() || document_url.and_then(get_document_path).as_deref() == Some(path)
}

pub fn is_disabled(node: &Handle) -> bool {
    let disabled = |n: &Handle| {
        get_node_name(n).is_some_and(|tag| DISABLEABLE.contains(&tag))
            && has_node_attr(n, "disabled")
    };
    if disabled(node) {
        return true;
    }

    let mut ancestor = get_parent_element(node);
    while let Some(a) = ancestor {
        if is_tag(&a, "fieldset") && disabled(&a) {
            return true;
        }
        ancestor = get_parent_element(&a);
    }
    false
}

pub fn has_long_desc(node: &Handle) -> bool {
    is_tag(node, "img") && has_node_attr(node, "longdesc")
}

impl Query<'_> {
    fn is_visited(&self, node: &Handle) -> bool {
        get_node_attr(node, "href").is_some_and(|href| {
            let resolved = resolve_url(self.options().document_url.as_deref(), &href);
            self.options().visited_urls.contains(&resolved)
        })
    }

    pub fn get_role_msg(&self, node: &Handle) -> Option<&'static str> {
        if let Some(key) = aria::get_role_name_msg(node) {
            return Some(key);
        }
        let kind = ElementKind::of(node)?;

        match kind {
            ElementKind::Input(input_type) => return Some(input_type.msg_key()),
            ElementKind::Anchor => {
                if is_internal_link(node, self.options().document_url.as_deref()) {
                    return Some("internal_link");
                }
                if self.is_visited(node) {
                    return Some("visited_link");
                }
                // 命名锚点没有角色
                if has_node_attr(node, "name") && !has_node_attr(node, "href") {
                    return None;
                }
            }
            ElementKind::Table if self.is_layout_table(node) => return None,
            _ => {}
        }

        match self.options().verbosity {
            Verbosity::Brief => kind.brief_msg(),
            Verbosity::Verbose => {
                if has_long_desc(node) {
                    return Some("image_with_long_desc");
                }
                kind.verbose_msg().or_else(|| {
                    (has_node_attr(node, "onclick") && aria::get_role(node).is_none())
                        .then_some("clickable")
                })
            }
        }
    }

    /// 本地化的角色名称，没有角色时为空串
    pub fn get_role(&self, node: &Handle) -> String {
        self.get_role_msg(node)
            .map(|key| self.msg(key, &[]))
            .unwrap_or_default()
    }

    pub fn get_state_msgs(&self, node: &Handle) -> Vec<StateMsg> {
        if let Some(active) = aria::get_active_descendant(node) {
            if !Handle::ptr_eq(&active, node) {
                return self.native_state_msgs(&active);
            }
        }
        self.native_state_msgs(node)
    }

    fn native_state_msgs(&self, node: &Handle) -> Vec<StateMsg> {
        let mut msgs = aria::get_state_msgs(node);
        // 带 ARIA 角色的节点忽略原生状态
        if has_node_attr(node, "role") {
            return msgs;
        }

        match ElementKind::of(node) {
            Some(ElementKind::Input(input_type)) if !has_node_attr(node, "aria-checked") => {
                let checked = has_node_attr(node, "checked");
                let key = match (input_type, checked) {
                    (InputType::Checkbox, true) => Some("checkbox_checked_state"),
                    (InputType::Checkbox, false) => Some("checkbox_unchecked_state"),
                    (InputType::Radio, true) => Some("radio_selected_state"),
                    (InputType::Radio, false) => Some("radio_unselected_state"),
                    _ => None,
                };
                msgs.extend(key.map(StateMsg::new));
            }
            Some(ElementKind::Select) => {
                let options = find_all_descendants(node, &mut |n| is_tag(n, "option"));
                let selected = selected_options(node);
                if selected.len() <= 1 {
                    let position = selected
                        .first()
                        .and_then(|s| options.iter().position(|o| Handle::ptr_eq(o, s)))
                        .map_or(0, |index| index + 1);
                    msgs.push(StateMsg::with_args(
                        "list_position",
                        vec![position.to_string(), options.len().to_string()],
                    ));
                } else {
                    msgs.push(StateMsg::with_args(
                        "selected_options_state",
                        vec![selected.len().to_string()],
                    ));
                }
            }
            Some(ElementKind::OrderedList | ElementKind::UnorderedList | ElementKind::Menu) => {
                let items = get_children(node)
                    .iter()
                    .filter(|n| is_tag(n, "li"))
                    .count();
                msgs.push(StateMsg::with_args("list_with_items", vec![items.to_string()]));
            }
            _ => {}
        }

        if is_disabled(node) {
            msgs.push(StateMsg::new("aria_disabled_true"));
        }
        if is_link(node) && self.is_visited(node) {
            msgs.push(StateMsg::new("visited_url"));
        }
        if let Some(key) = get_node_attr(node, "accesskey").filter(|k| !k.is_empty()) {
            msgs.push(StateMsg::with_args("access_key", vec![key]));
        }

        msgs
    }

    /// 展开后的状态描述，以空格连接
    pub fn get_state(&self, node: &Handle) -> String {
        self.get_state_msgs(node)
            .iter()
            .map(|m| self.msg(m.key, &m.args))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
