//! 可访问名称
//!
//! 按固定的优先级链计算节点的可访问名称，第一个非空的结果胜出：
//!
//! 1. 文本节点的内容
//! 2. `aria-labelledby` 引用的元素的名称
//! 3. `aria-label`
//! 4. `<img>` 的 alt / title / 文件名
//! 5. `<fieldset>` 中所有 `<legend>` 的名称
//! 6. `for` 指向本节点的 `<label>`
//! 7. 控件外层没有 `for` 的 `<label>`
//! 8. 按钮类 `<input>` 的 `value`
//! 9. 可编辑文本框的 `placeholder`
//! 10. 文本内容为空时的 `title`
//! 11. 非递归或复合控件：空
//! 12. 子节点名称的拼接
//!
//! 有序列表项最左边的叶子会加上列表序号前缀（`3. `、`C. `）。
//! 所有结果都会折叠空白。

use markup5ever_rcdom::{Handle, NodeData};
use tracing::debug;

use super::aria;
use super::kind::{ElementKind, InputType};
use super::leaf::{input_type, is_content_editable, is_control, is_heading, is_link};
use super::query::Query;
use super::traverse::{get_ancestors, is_descendant_of_node};
use super::visibility::VisibilityCheck;
use crate::parsers::html::dom::{
    find_all_descendants, first_child, get_children, get_node_attr, get_parent_element,
    get_parent_node, get_text_content, has_node_attr, is_tag,
};
use crate::parsers::html::utils::{collapse_whitespace, is_blank};
use crate::utils::url::{get_image_file_name, is_data_url};

/// 名称计算选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameOptions {
    /// 允许由子节点拼接名称
    pub recursive: bool,
    /// 拼接子节点时包含控件
    pub include_controls: bool,
    /// 拼接子节点时包含隐藏节点
    pub allow_hidden: bool,
}

impl Default for NameOptions {
    fn default() -> Self {
        NameOptions {
            recursive: true,
            include_controls: true,
            allow_hidden: false,
        }
    }
}

impl NameOptions {
    /// 解析 `aria-labelledby` 目标时使用
    fn labelled_by() -> Self {
        NameOptions {
            recursive: true,
            include_controls: false,
            allow_hidden: true,
        }
    }
}

/// 图片的标题：alt、title，或由文件名推断
pub fn get_image_title(node: &Handle) -> String {
    if let Some(alt) = get_node_attr(node, "alt") {
        return alt;
    }
    if let Some(title) = get_node_attr(node, "title") {
        return title;
    }

    let src = get_node_attr(node, "src").unwrap_or_default();
    if is_data_url(&src) {
        return "Image".to_string();
    }
    let file_name = get_image_file_name(&src);
    // 文件名过长时不朗读
    match file_name.chars().count() {
        1..=16 => format!("{file_name} Image"),
        _ => "Image".to_string(),
    }
}

/// 可编辑文本类的 `<input>` 或 `<textarea>`
pub fn is_input_type_text(node: &Handle) -> bool {
    is_tag(node, "textarea") || input_type(node).is_some_and(InputType::is_text_entry)
}

/// 用户已经输入的值
fn has_user_value(node: &Handle) -> bool {
    if is_tag(node, "textarea") {
        return !get_text_content(node).is_empty();
    }
    get_node_attr(node, "value").is_some_and(|v| !v.is_empty())
}

impl Query<'_> {
    /// 使用默认选项计算名称
    pub fn name(&self, node: &Handle) -> String {
        let options = NameOptions {
            allow_hidden: self.options().allow_hidden,
            ..Default::default()
        };
        self.get_name(node, options)
    }

    pub fn get_name(&self, node: &Handle, options: NameOptions) -> String {
        if !self.enter(node) {
            debug!("name already being resolved, breaking cycle");
            return String::new();
        }
        let name = self.name_unguarded(node, options);
        self.leave(node);

        let prefix = self.get_prefix_text(node);
        collapse_whitespace(&format!("{prefix}{name}"))
    }

    fn name_unguarded(&self, node: &Handle, options: NameOptions) -> String {
        match &node.data {
            NodeData::Text { contents } => return contents.borrow().to_string(),
            NodeData::Element { .. } => {}
            _ => return String::new(),
        }

        let label = self.base_label(node, options);

        if is_input_type_text(node) {
            if let Some(placeholder) = get_node_attr(node, "placeholder").filter(|p| !is_blank(p))
            {
                if is_blank(&label) {
                    return placeholder;
                }
                if has_user_value(node) {
                    return label;
                }
                return self.msg("input_hint", &[label, placeholder]);
            }
        }
        if !is_blank(&label) {
            return label;
        }

        if is_blank(&get_text_content(node)) {
            if let Some(title) = get_node_attr(node, "title").filter(|t| !is_blank(t)) {
                return title;
            }
        }

        // 复合控件的子节点是内部状态，不是名称
        if !options.recursive || aria::is_composite_control(node) {
            return String::new();
        }
        if self.has_children_based_name(node, options.allow_hidden) {
            return self.get_name_from_children(node, options.include_controls, options.allow_hidden);
        }
        String::new()
    }

    /// 优先级链中由属性和关联元素给出的部分（步骤 2 到 8）
    pub fn base_label(&self, node: &Handle, options: NameOptions) -> String {
        if let Some(ids) = get_node_attr(node, "aria-labelledby") {
            let label = ids
                .split_whitespace()
                .filter_map(|id| self.element_by_id(id))
                .map(|target| self.get_name(&target, NameOptions::labelled_by()))
                .collect::<Vec<_>>()
                .join(" ");
            if !is_blank(&label) {
                return label;
            }
        }

        if let Some(label) = get_node_attr(node, "aria-label").filter(|l| !is_blank(l)) {
            return label;
        }

        let kind = ElementKind::of(node);
        match kind {
            Some(ElementKind::Image) => {
                let title = get_image_title(node);
                if !is_blank(&title) {
                    return title;
                }
            }
            Some(ElementKind::Fieldset) => {
                let legends = find_all_descendants(node, &mut |n| is_tag(n, "legend"))
                    .iter()
                    .map(|legend| self.get_name(legend, options))
                    .collect::<Vec<_>>()
                    .join(" ");
                if !is_blank(&legends) {
                    return legends;
                }
            }
            _ => {}
        }

        let label_options = NameOptions {
            include_controls: false,
            ..options
        };

        if let Some(label) = get_node_attr(node, "id").and_then(|id| self.label_for(&id)) {
            let name = self.get_name(&label, label_options);
            if !is_blank(&name) {
                return name;
            }
        }

        if is_control(node) {
            if let Some(label) = self.enclosing_implicit_label(node) {
                let name = self.get_name(&label, label_options);
                if !is_blank(&name) {
                    return name;
                }
            }
        }

        if let Some(ElementKind::Input(input_type)) = kind {
            let value = get_node_attr(node, "value");
            let label = match input_type {
                InputType::Submit => value.unwrap_or_else(|| self.msg("input_submit", &[])),
                InputType::Reset => value.unwrap_or_else(|| self.msg("input_reset", &[])),
                InputType::Button => value.unwrap_or_default(),
                InputType::Image => value
                    .filter(|v| !is_blank(v))
                    .unwrap_or_else(|| get_image_title(node)),
                _ => String::new(),
            };
            if !is_blank(&label) {
                return label;
            }
        }

        String::new()
    }

    /// 最近的外层 `<label>`，带 `for` 属性时不算隐式关联
    fn enclosing_implicit_label(&self, node: &Handle) -> Option<Handle> {
        let mut current = get_parent_element(node);
        while let Some(n) = current {
            if is_tag(&n, "label") {
                return (!has_node_attr(&n, "for")).then_some(n);
            }
            current = get_parent_element(&n);
        }
        None
    }

    fn has_children_based_name(&self, node: &Handle, allow_hidden: bool) -> bool {
        is_link(node)
            || is_heading(node)
            || is_tag(node, "button")
            || aria::is_control_widget(node)
            || !self.is_leaf_node(node, allow_hidden)
    }

    /// 拼接子节点的名称
    ///
    /// 子节点之间用空格分隔，但与 `<span>` 相邻（或父节点是 `<span>`）时不加空格。
    pub fn get_name_from_children(
        &self,
        node: &Handle,
        include_controls: bool,
        allow_hidden: bool,
    ) -> String {
        let children = get_children(node);
        let mut name = String::new();

        for (i, child) in children.iter().enumerate() {
            let prev = if i == 0 { child } else { &children[i - 1] };
            if !include_controls && is_control(child) {
                continue;
            }

            let visible = self.is_visible(child, VisibilityCheck::without_ancestors());
            if allow_hidden || (visible && !aria::is_hidden(child)) {
                let inline = is_tag(prev, "span") || is_tag(child, "span") || is_tag(node, "span");
                if !inline {
                    name.push(' ');
                }
                let child_options = NameOptions {
                    recursive: true,
                    include_controls,
                    allow_hidden,
                };
                name.push_str(&self.get_name(child, child_options));
            }
        }

        name
    }

    /// 有序列表项最左边的叶子的序号前缀
    pub fn get_prefix_text(&self, node: &Handle) -> String {
        let ancestors = get_ancestors(node);
        let Some(list_item) = ancestors.iter().find(|n| is_tag(n, "li")) else {
            return String::new();
        };

        let mut leftmost = list_item.clone();
        while let Some(child) = first_child(&leftmost) {
            leftmost = child;
        }
        if !Handle::ptr_eq(&leftmost, node) {
            return String::new();
        }

        let Some(list) = get_parent_node(list_item).filter(|p| is_tag(p, "ol")) else {
            return String::new();
        };
        let list_style_type = self
            .style(&list)
            .map(|style| style.list_style_type.clone())
            .unwrap_or_default();
        if list_style_type == "none" {
            return String::new();
        }

        let position = get_children(&list)
            .iter()
            .filter(|n| is_tag(n, "li"))
            .position(|n| Handle::ptr_eq(n, list_item))
            .map_or(0, |index| index + 1);

        if list_style_type.contains("latin") {
            let offset = (position.saturating_sub(1) % 26) as u8;
            format!("{}. ", (b'A' + offset) as char)
        } else {
            format!("{position}. ")
        }
    }

    /// 控件的值（用户输入或选择的内容）
    pub fn get_value(&self, node: &Handle) -> String {
        if let Some(active) = aria::get_active_descendant(node) {
            if !Handle::ptr_eq(&active, node) {
                return collapse_whitespace(&format!(
                    "{} {}",
                    self.own_value(&active),
                    self.name(&active)
                ));
            }
        }
        self.own_value(node)
    }

    fn own_value(&self, node: &Handle) -> String {
        match ElementKind::of(node) {
            Some(ElementKind::Select) => self.selected_options_value(node),
            Some(ElementKind::TextArea) => get_text_content(node),
            Some(ElementKind::Input(input_type)) if !input_type.has_spoken_value() => String::new(),
            Some(ElementKind::Input(InputType::Password)) => {
                "dot ".repeat(get_node_attr(node, "value").unwrap_or_default().chars().count())
            }
            Some(ElementKind::Input(_)) => get_node_attr(node, "value").unwrap_or_default(),
            Some(_) if is_content_editable(node) => self.get_name_from_children(node, true, false),
            _ => String::new(),
        }
    }

    fn selected_options_value(&self, select: &Handle) -> String {
        let selected = selected_options(select);
        let text = |option: &Handle| collapse_whitespace(&get_text_content(option));
        match selected.as_slice() {
            [] => String::new(),
            [only] => text(only),
            [first, .., last] => self.msg("selected_options_value", &[text(first), text(last)]),
        }
    }

    /// 猜测没有名称的控件的标签
    ///
    /// 在前后两个方向上找最近的有内容且不是控件的叶子，两边都有时取与控件
    /// 共享祖先所需攀升层数较少的一边，相同则取前一个。
    pub fn get_control_label_heuristics(&self, node: &Handle) -> String {
        let explicitly_empty = |attr: &str| get_node_attr(node, attr).is_some_and(|v| v.is_empty());
        if explicitly_empty("aria-label") || explicitly_empty("aria-title") {
            return String::new();
        }

        let is_candidate = |n: &Handle| self.has_content(n) && !is_control(n);

        let mut prev = self.previous_leaf_node(node);
        while let Some(p) = prev.as_ref().filter(|p| !is_candidate(p)) {
            prev = self.previous_leaf_node(p);
        }
        let mut next = self.directed_next_leaf_node(node, false);
        while let Some(n) = next.as_ref().filter(|n| !is_candidate(n)) {
            next = self.directed_next_leaf_node(n, false);
        }

        let guessed = match (prev, next) {
            (Some(prev), Some(next)) => {
                if hops_to_shared_ancestor(node, &next) < hops_to_shared_ancestor(node, &prev) {
                    next
                } else {
                    prev
                }
            }
            (Some(prev), None) => prev,
            (None, Some(next)) => next,
            (None, None) => return String::new(),
        };

        collapse_whitespace(&format!("{} {}", self.get_value(&guessed), self.name(&guessed)))
    }
}

/// `select` 中选中的选项；单选且没有显式选中时为第一个选项
pub(crate) fn selected_options(select: &Handle) -> Vec<Handle> {
    let options = find_all_descendants(select, &mut |n| is_tag(n, "option"));
    let selected: Vec<Handle> = options
        .iter()
        .filter(|o| has_node_attr(o, "selected"))
        .cloned()
        .collect();
    if selected.is_empty() && !has_node_attr(select, "multiple") {
        return options.into_iter().take(1).collect();
    }
    selected
}

/// 从 `node` 向上攀升多少层才能成为 `other` 的祖先
fn hops_to_shared_ancestor(node: &Handle, other: &Handle) -> usize {
    let mut hops = 0;
    let mut current = Some(node.clone());
    while let Some(n) = current {
        if is_descendant_of_node(other, &n) {
            break;
        }
        current = get_parent_node(&n);
        hops += 1;
    }
    hops
}
