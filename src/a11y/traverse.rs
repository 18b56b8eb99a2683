//! 树导航
//!
//! 祖先链比较和有方向的叶子到叶子遍历。遍历以 `<body>` 为边界：
//! 不会返回 `<body>` 本身，也不会越过它向上攀升。

use markup5ever_rcdom::Handle;
use tracing::trace;

use super::query::Query;
use crate::parsers::html::dom::{
    first_child, get_parent_element, get_parent_node, is_document, is_tag, last_child,
    next_sibling, previous_sibling,
};

/// 从根到节点本身的祖先链（包含节点，去掉文档节点）
pub fn get_ancestors(node: &Handle) -> Vec<Handle> {
    let mut ancestors = vec![node.clone()];
    let mut current = get_parent_node(node);
    while let Some(parent) = current {
        current = get_parent_node(&parent);
        ancestors.push(parent);
    }
    ancestors.reverse();

    while ancestors.first().is_some_and(is_document) {
        ancestors.remove(0);
    }
    ancestors
}

/// 两条祖先链第一个不同的位置；完全相同时为 `None`
pub fn compare_ancestors(a: &[Handle], b: &[Handle]) -> Option<usize> {
    let shared = a.len().min(b.len());
    match (0..shared).find(|&i| !Handle::ptr_eq(&a[i], &b[i])) {
        Some(i) => Some(i),
        None if a.len() == b.len() => None,
        None => Some(shared),
    }
}

/// `current` 的祖先中不与 `prev` 共享的部分
///
/// `current` 与 `prev` 相同时总是返回空；差集为空且设置了 `fallback` 时返回完整的祖先链。
pub fn get_unique_ancestors(prev: &Handle, current: &Handle, fallback: bool) -> Vec<Handle> {
    if Handle::ptr_eq(prev, current) {
        return Vec::new();
    }

    let prev_ancestors = get_ancestors(prev);
    let current_ancestors = get_ancestors(current);
    let divergence = compare_ancestors(&prev_ancestors, &current_ancestors)
        .unwrap_or(current_ancestors.len());

    let unique: Vec<Handle> = current_ancestors
        .iter()
        .skip(divergence)
        .cloned()
        .collect();
    if unique.is_empty() && fallback {
        return current_ancestors;
    }
    unique
}

/// 节点是否是 `ancestor` 的后代；节点也算作自己的后代
pub fn is_descendant_of_node(node: &Handle, ancestor: &Handle) -> bool {
    let mut current = Some(node.clone());
    while let Some(n) = current {
        if Handle::ptr_eq(&n, ancestor) {
            return true;
        }
        current = get_parent_node(&n);
    }
    false
}

/// 节点本身或某个祖先是否为 `tag` 元素
pub fn is_descendant_of(node: &Handle, tag: &str) -> bool {
    let mut current = Some(node.clone());
    while let Some(n) = current {
        if is_tag(&n, tag) {
            return true;
        }
        current = get_parent_element(&n);
    }
    false
}

pub fn directed_next_sibling(node: &Handle, reverse: bool) -> Option<Handle> {
    if reverse {
        previous_sibling(node)
    } else {
        next_sibling(node)
    }
}

pub fn directed_first_child(node: &Handle, reverse: bool) -> Option<Handle> {
    if reverse {
        last_child(node)
    } else {
        first_child(node)
    }
}

impl Query<'_> {
    /// 下一个（`reverse` 时为上一个）满足 `is_leaf` 的类叶子节点
    ///
    /// 从 `<body>` 出发时返回第一个（或最后一个）叶子。
    pub fn directed_next_leaf_like_node(
        &self,
        node: &Handle,
        reverse: bool,
        is_leaf: &dyn Fn(&Handle) -> bool,
    ) -> Option<Handle> {
        let mut node = node.clone();

        if !self.is_body(&node) {
            // 向上攀升直到在遍历方向上存在兄弟节点
            loop {
                if let Some(sibling) = directed_next_sibling(&node, reverse) {
                    node = sibling;
                    break;
                }
                node = get_parent_node(&node)?;
                if self.is_body(&node) || is_document(&node) {
                    trace!("end of document");
                    return None;
                }
            }
        }

        // 沿第一个（或最后一个）子节点下降到叶子
        while !is_leaf(&node) {
            match directed_first_child(&node, reverse) {
                Some(child) => node = child,
                None => break,
            }
        }

        if self.is_body(&node) {
            return None;
        }
        Some(node)
    }

    pub fn directed_next_leaf_node(&self, node: &Handle, reverse: bool) -> Option<Handle> {
        let allow_hidden = self.options().allow_hidden;
        self.directed_next_leaf_like_node(node, reverse, &|n| self.is_leaf_node(n, allow_hidden))
    }

    pub fn previous_leaf_node(&self, node: &Handle) -> Option<Handle> {
        self.directed_next_leaf_node(node, true)
    }

    /// 沿第一个子节点下降直到叶子
    pub fn first_leaf_node(&self, node: &Handle) -> Handle {
        let mut current = node.clone();
        while !self.is_leaf_node(&current, false) {
            match first_child(&current) {
                Some(child) => current = child,
                None => break,
            }
        }
        current
    }

    /// `<body>` 中有内容的叶子，按文档顺序（`reverse` 时逆序）
    pub fn content_leaves(&self, reverse: bool) -> ContentLeaves<'_, '_> {
        ContentLeaves {
            query: self,
            current: self.body().cloned(),
            reverse,
        }
    }
}

pub struct ContentLeaves<'q, 'a> {
    query: &'q Query<'a>,
    current: Option<Handle>,
    reverse: bool,
}

impl Iterator for ContentLeaves<'_, '_> {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        loop {
            let current = self.current.take()?;
            let next = self.query.directed_next_leaf_node(&current, self.reverse)?;
            self.current = Some(next.clone());
            if self.query.has_content(&next) {
                return Some(next);
            }
        }
    }
}
