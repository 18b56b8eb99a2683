//! 叶子与控件分类
//!
//! 判断节点是否是遍历叶子、是否是控件、线性导航是否会停在它上面。

use markup5ever_rcdom::Handle;

use super::aria::{self, AriaRole};
use super::kind::{ElementKind, InputType};
use super::query::Query;
use super::traverse::is_descendant_of;
use super::visibility::VisibilityCheck;
use crate::parsers::html::dom::{
    find_descendant, first_child, get_node_attr, get_node_name, get_parent_element,
    has_node_attr, is_element, is_tag, is_text,
};
use crate::parsers::html::utils::is_blank;

const NO_CONTENT_CONTAINERS: &[&str] = &["head", "script", "noscript", "noembed", "style"];
const NATIVE_CONTROLS: &[&str] = &["button", "input", "select", "textarea"];

/// `contenteditable` 向下继承，最近的有效声明决定结果
pub fn is_content_editable(node: &Handle) -> bool {
    let mut current = if is_element(node) {
        Some(node.clone())
    } else {
        return false;
    };
    while let Some(n) = current {
        if let Some(value) = get_node_attr(&n, "contenteditable") {
            match value.trim().to_ascii_lowercase().as_str() {
                "" | "true" | "plaintext-only" => return true,
                "false" => return false,
                _ => {}
            }
        }
        current = get_parent_element(&n);
    }
    false
}

fn is_natively_focusable(node: &Handle, tag: &str) -> bool {
    match tag {
        "a" | "area" => has_node_attr(node, "href"),
        "button" | "select" | "textarea" | "iframe" => true,
        "input" => InputType::of(node) != InputType::Hidden,
        _ => is_content_editable(node),
    }
}

pub fn is_focusable(node: &Handle) -> bool {
    let Some(tag) = get_node_name(node) else {
        return false;
    };
    if tag == "a" && !has_node_attr(node, "href") && !has_node_attr(node, "tabindex") {
        return false;
    }

    match get_node_attr(node, "tabindex").and_then(|t| t.trim().parse::<i32>().ok()) {
        Some(tabindex) => tabindex >= 0 || tabindex == -1,
        None => is_natively_focusable(node, tag),
    }
}

pub fn is_control(node: &Handle) -> bool {
    if aria::is_control_widget(node) && is_focusable(node) {
        return true;
    }
    match ElementKind::of(node) {
        Some(ElementKind::Button | ElementKind::TextArea | ElementKind::Select) => true,
        Some(ElementKind::Input(input_type)) => input_type != InputType::Hidden,
        Some(_) => is_content_editable(node),
        None => false,
    }
}

/// 复合控件若暴露了真正可聚焦的子节点，则不是叶子级控件
pub fn is_leaf_level_control(node: &Handle) -> bool {
    is_control(node)
        && !(aria::is_composite_control(node)
            && find_descendant(node, &mut |n| is_focusable(n)).is_some())
}

pub fn is_math(node: &Handle) -> bool {
    is_tag(node, "math") || aria::has_role(node, AriaRole::Math)
}

pub fn is_link(node: &Handle) -> bool {
    (is_tag(node, "a") && has_node_attr(node, "href")) || aria::has_role(node, AriaRole::Link)
}

pub fn is_heading(node: &Handle) -> bool {
    matches!(ElementKind::of(node), Some(ElementKind::Heading(_)))
        || aria::has_role(node, AriaRole::Heading)
}

/// `<input>` 的类型，其他节点为 `None`
pub fn input_type(node: &Handle) -> Option<InputType> {
    match ElementKind::of(node) {
        Some(ElementKind::Input(input_type)) => Some(input_type),
        _ => None,
    }
}

/// 距离最近的 `tag` 祖先元素（不含节点本身）
fn enclosing(node: &Handle, tag: &str) -> Option<Handle> {
    let mut current = get_parent_element(node);
    while let Some(n) = current {
        if is_tag(&n, tag) {
            return Some(n);
        }
        current = get_parent_element(&n);
    }
    None
}

fn embedded_control(container: &Handle) -> Option<Handle> {
    find_descendant(container, &mut |n| {
        get_node_name(n).is_some_and(|tag| NATIVE_CONTROLS.contains(&tag))
    })
}

impl Query<'_> {
    pub fn is_leaf_node(&self, node: &Handle, allow_hidden: bool) -> bool {
        let Some(kind) = ElementKind::of(node) else {
            return first_child(node).is_none();
        };

        if !allow_hidden
            && (!self.is_visible(node, VisibilityCheck::without_ancestors())
                || aria::is_hidden(node))
        {
            return true;
        }
        if aria::is_leaf_element(node) || kind.is_embedded() {
            return true;
        }
        if is_link(node) {
            return find_descendant(node, &mut |n| is_heading(n)).is_none();
        }
        if is_leaf_level_control(node) || first_child(node).is_none() || is_math(node) {
            return true;
        }
        if is_heading(node) {
            return find_descendant(node, &mut |n| is_control(n)).is_none();
        }
        false
    }

    /// 线性导航是否会停在这个节点上
    pub fn has_content(&self, node: &Handle) -> bool {
        self.cache()
            .memoize("hasContent", node, || self.compute_has_content(node))
    }

    fn compute_has_content(&self, node: &Handle) -> bool {
        // 注释等
        if !is_element(node) && !is_text(node) {
            return false;
        }
        if NO_CONTENT_CONTAINERS
            .iter()
            .any(|tag| is_descendant_of(node, tag))
        {
            return false;
        }
        if !self.options().allow_hidden
            && (!self.is_visible(node, VisibilityCheck::default())
                || aria::is_hidden_recursive(node))
        {
            return false;
        }
        if is_control(node) {
            return true;
        }
        if is_descendant_of(node, "video") || is_descendant_of(node, "audio") {
            return true;
        }
        if is_tag(node, "iframe")
            && get_node_attr(node, "src")
                .is_some_and(|src| !src.is_empty() && !src.starts_with("javascript:"))
        {
            return true;
        }

        // 已正确关联到控件的 label 中的非控件内容，会在到达控件时朗读
        if let Some(label) = enclosing(node, "label") {
            let embedded = embedded_control(&label);
            match get_node_attr(&label, "for") {
                Some(target_id) => {
                    let target = self.element_by_id(&target_id);
                    if target.is_some_and(|t| is_control(&t)) && embedded.is_none() {
                        return false;
                    }
                }
                None if embedded.is_some() => return false,
                None => {}
            }
        }

        // fieldset 中的 legend 会在到达其中的控件时朗读
        if let Some(legend) = enclosing(node, "legend") {
            if enclosing(&legend, "fieldset").is_some_and(|f| embedded_control(&f).is_some()) {
                return false;
            }
        }

        if is_link(node) {
            return true;
        }
        if is_tag(node, "table") && !self.is_layout_table(node) {
            return true;
        }
        if is_math(node) || is_heading(node) || is_focusable(node) {
            return true;
        }
        if self.is_labelled_by_target(node) {
            return false;
        }

        let text = format!("{} {}", self.get_value(node), self.name(node));
        !(is_blank(&text) && self.get_state(node).is_empty())
    }
}
