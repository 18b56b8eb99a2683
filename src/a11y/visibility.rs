//! 可见性判定
//!
//! 依据计算样式（`display`、`opacity`、`visibility`）和 `aria-hidden` 判断节点是否可见。
//! `visibility:hidden` 不会让后代不可见（后代可以重新设为 visible），
//! 所以区分两种检查：
//!
//! - 严格：`display:none` 或 `opacity:0`，整棵子树都不可见
//! - 非严格：另外包括 `visibility:hidden|collapse`，只说明该元素本身不可见

use markup5ever_rcdom::Handle;
use tracing::trace;

use super::aria::is_forced_visible_recursive;
use super::query::Query;
use crate::parsers::css::ComputedStyle;
use crate::parsers::html::dom::{
    get_children, get_node_attr, get_parent_element, is_document_element, is_element, is_tag,
};

/// [`Query::is_visible`] 的检查范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityCheck {
    /// 祖先元素严格不可见时节点不可见
    pub check_ancestors: bool,
    /// 元素本身不可见时，仍可因后代可见而可见
    pub check_descendants: bool,
}

impl Default for VisibilityCheck {
    fn default() -> Self {
        VisibilityCheck {
            check_ancestors: true,
            check_descendants: true,
        }
    }
}

impl VisibilityCheck {
    pub fn without_ancestors() -> Self {
        VisibilityCheck {
            check_ancestors: false,
            ..Default::default()
        }
    }

    fn memo_key(self) -> &'static str {
        match (self.check_ancestors, self.check_descendants) {
            (true, true) => "isVisible-true-true",
            (true, false) => "isVisible-true-false",
            (false, true) => "isVisible-false-true",
            (false, false) => "isVisible-false-false",
        }
    }
}

pub fn is_invisible_style(style: &ComputedStyle, strict: bool) -> bool {
    if style.display == "none" || style.opacity == 0.0 {
        return true;
    }
    !strict && matches!(style.visibility.as_str(), "hidden" | "collapse")
}

impl Query<'_> {
    pub fn is_visible(&self, node: &Handle, check: VisibilityCheck) -> bool {
        self.cache()
            .memoize(check.memo_key(), node, || self.compute_visible(node, check))
    }

    fn compute_visible(&self, node: &Handle, check: VisibilityCheck) -> bool {
        // 无法检查内容的 iframe
        if is_tag(node, "iframe") && get_node_attr(node, "src").map_or(true, |s| s.is_empty()) {
            return false;
        }

        // display:none 的元素本身无论如何都不可见
        if self.style(node).is_some_and(|s| s.display == "none") {
            return false;
        }

        if is_forced_visible_recursive(node) {
            return true;
        }

        if check.check_ancestors && self.has_invisible_ancestor(node) {
            trace!("invisible ancestor");
            return false;
        }

        self.has_visible_node_subtree(node, check.check_descendants)
    }

    /// 是否有严格不可见的祖先元素；祖先链到不了文档元素（游离子树）也视为不可见
    pub fn has_invisible_ancestor(&self, node: &Handle) -> bool {
        let mut ancestor = get_parent_element(node);
        while let Some(current) = ancestor {
            if self
                .style(&current)
                .is_some_and(|style| is_invisible_style(&style, true))
            {
                return true;
            }
            if is_document_element(&current) {
                return false;
            }
            ancestor = get_parent_element(&current);
        }
        // 节点本身就是文档元素时没有祖先元素
        !is_document_element(node)
    }

    pub fn has_visible_node_subtree(&self, root: &Handle, recursive: bool) -> bool {
        if !is_element(root) {
            return get_parent_element(root)
                .and_then(|parent| self.style(&parent))
                .is_some_and(|style| !is_invisible_style(&style, false));
        }

        let Some(style) = self.style(root) else {
            return false;
        };
        if !is_invisible_style(&style, false) {
            return true;
        }
        if is_invisible_style(&style, true) || !recursive {
            return false;
        }

        get_children(root)
            .iter()
            .any(|child| is_element(child) && self.has_visible_node_subtree(child, recursive))
    }
}
