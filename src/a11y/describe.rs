//! 朗读描述
//!
//! 把一个叶子节点组合成屏幕阅读器朗读的内容：进入的容器、名称、值、角色与状态。

use std::fmt;

use markup5ever_rcdom::Handle;

use super::aria;
use super::kind::ElementKind;
use super::leaf::{is_control, is_heading};
use super::query::Query;
use super::traverse::{get_ancestors, get_unique_ancestors};
use crate::parsers::html::utils::collapse_whitespace;

/// 一个导航位置的朗读描述
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavDescription {
    /// 从上一个位置移动过来时进入的容器
    pub context: String,
    pub text: String,
    pub user_value: String,
    /// 角色和状态
    pub annotation: String,
}

impl NavDescription {
    pub fn is_empty(&self) -> bool {
        self.context.is_empty()
            && self.text.is_empty()
            && self.user_value.is_empty()
            && self.annotation.is_empty()
    }
}

impl fmt::Display for NavDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            self.context.as_str(),
            self.text.as_str(),
            self.user_value.as_str(),
            self.annotation.as_str(),
        ];
        let joined = parts
            .iter()
            .filter(|p| !p.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{joined}")
    }
}

fn join_non_empty(parts: &[String]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}

impl Query<'_> {
    fn is_context_container(&self, node: &Handle) -> bool {
        if aria::is_landmark(node) || is_heading(node) {
            return true;
        }
        match ElementKind::of(node) {
            Some(
                ElementKind::Nav
                | ElementKind::Main
                | ElementKind::Aside
                | ElementKind::Form
                | ElementKind::Fieldset
                | ElementKind::OrderedList
                | ElementKind::UnorderedList,
            ) => true,
            Some(ElementKind::Table) => !self.is_layout_table(node),
            _ => false,
        }
    }

    fn describe_container(&self, node: &Handle) -> String {
        if is_tag_fieldset(node) {
            return self.name(node);
        }
        join_non_empty(&[self.get_role(node), self.get_state(node)])
    }

    /// 描述 `node`，`prev` 是上一个朗读的位置
    pub fn describe(&self, node: &Handle, prev: Option<&Handle>) -> NavDescription {
        let entered = match prev {
            Some(prev) => get_unique_ancestors(prev, node, false),
            None => get_ancestors(node),
        };
        let context = join_non_empty(
            &entered
                .iter()
                .filter(|n| !Handle::ptr_eq(n, node) && self.is_context_container(n))
                .map(|n| self.describe_container(n))
                .collect::<Vec<_>>(),
        );

        let mut text = self.name(node);
        if text.is_empty() && is_control(node) {
            text = self.get_control_label_heuristics(node);
        }

        NavDescription {
            context,
            text,
            user_value: collapse_whitespace(&self.get_value(node)),
            annotation: join_non_empty(&[self.get_role(node), self.get_state(node)]),
        }
    }

    /// 依次描述 `<body>` 中所有有内容的叶子
    pub fn describe_walk(&self, reverse: bool) -> Vec<NavDescription> {
        let mut prev: Option<Handle> = None;
        let mut descriptions = Vec::new();
        for leaf in self.content_leaves(reverse) {
            let description = self.describe(&leaf, prev.as_ref());
            if !description.is_empty() {
                descriptions.push(description);
            }
            prev = Some(leaf);
        }
        descriptions
    }
}

fn is_tag_fieldset(node: &Handle) -> bool {
    matches!(ElementKind::of(node), Some(ElementKind::Fieldset))
}
