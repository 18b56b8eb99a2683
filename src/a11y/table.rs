//! 布局表格启发式
//!
//! 判断 `<table>` 只是用于排版还是承载表格数据。阈值沿用已有的经验值，
//! 结果与其测试期望保持一致，不做改进。

use markup5ever_rcdom::Handle;
use tracing::trace;

use super::aria;
use super::query::Query;
use super::traverse::get_ancestors;
use crate::parsers::css::{is_zero_length, parse_border_shorthand, ComputedStyle};
use crate::parsers::html::dom::{
    find_nodes, get_child_node_by_name, get_children, get_node_attr, is_element, is_tag,
    previous_sibling,
};

/// 单元格中出现即视为布局表格的嵌入元素
const EMBEDDED_IN_CELL: &[&str] = &["embed", "object", "iframe", "applet"];

/// 表格的行：直接的 `tr` 以及 `thead`/`tbody`/`tfoot` 中的 `tr`
pub fn table_rows(table: &Handle) -> Vec<Handle> {
    let mut rows = Vec::new();
    for child in get_children(table) {
        if is_tag(&child, "tr") {
            rows.push(child);
        } else if ["thead", "tbody", "tfoot"].iter().any(|t| is_tag(&child, t)) {
            rows.extend(get_children(&child).into_iter().filter(|n| is_tag(n, "tr")));
        }
    }
    rows
}

/// 祖先数（含节点本身）加上之前的元素兄弟数
pub fn count_previous_tags(node: &Handle) -> usize {
    let mut siblings = 0;
    let mut prev = previous_sibling(node);
    while let Some(p) = prev {
        if is_element(&p) {
            siblings += 1;
        }
        prev = previous_sibling(&p);
    }
    get_ancestors(node).len() + siblings
}

/// `tbody/tr/<path>` 形式的相对路径是否存在
fn has_body_path(table: &Handle, path: &[&str]) -> bool {
    get_children(table)
        .iter()
        .filter(|n| is_tag(n, "tbody"))
        .any(|tbody| {
            get_children(tbody)
                .iter()
                .filter(|n| is_tag(n, "tr"))
                .any(|tr| has_child_path(tr, path))
        })
}

fn has_child_path(node: &Handle, path: &[&str]) -> bool {
    match path.split_first() {
        None => true,
        Some((tag, rest)) => get_children(node)
            .iter()
            .any(|child| is_tag(child, tag) && has_child_path(child, rest)),
    }
}

fn border_value(style: &ComputedStyle, part: &str) -> Option<String> {
    if let Some(value) = style.inline_value(&format!("border-{part}")) {
        return Some(value.to_string());
    }
    let shorthand = parse_border_shorthand(style.inline_value("border")?);
    match part {
        "style" => shorthand.style,
        "width" => shorthand.width,
        _ => shorthand.color,
    }
}

impl Query<'_> {
    pub fn has_border(&self, table: &Handle) -> bool {
        if let Some(frame) = get_node_attr(table, "frame").filter(|f| !f.is_empty()) {
            return !frame.contains("void");
        }

        if let Some(border) = get_node_attr(table, "border").filter(|b| !b.is_empty()) {
            let chars: Vec<char> = border.chars().collect();
            if chars.len() == 1 {
                return border != "0";
            }
            // 去掉单位（最后两个字符）后比较数值
            let head: String = chars[..chars.len() - 2].iter().collect();
            let head = head.trim();
            if head.is_empty() {
                return false;
            }
            return head.parse::<f64>().map_or(true, |v| v != 0.0);
        }

        let Some(style) = self.style(table) else {
            return false;
        };
        if border_value(&style, "style").is_some_and(|s| s.eq_ignore_ascii_case("none")) {
            return false;
        }
        if let Some(width) = border_value(&style, "width") {
            return !is_zero_length(&width);
        }
        border_value(&style, "color").is_some()
    }

    pub fn is_layout_table(&self, table: &Handle) -> bool {
        if !is_tag(table, "table") {
            return false;
        }
        self.cache()
            .memoize("isLayoutTable", table, || self.compute_layout_table(table))
    }

    fn compute_layout_table(&self, table: &Handle) -> bool {
        let rows = table_rows(table);
        let first_row_cells = rows.first().map_or(0, |row| {
            get_children(row).iter().filter(|n| is_element(n)).count()
        });
        if rows.len() <= 1 || first_row_cells == 1 {
            trace!(rows = rows.len(), "layout table: single row or column");
            return true;
        }

        if aria::is_grid(table) || aria::is_landmark(table) {
            return false;
        }
        if get_child_node_by_name(table, "caption").is_some()
            || get_node_attr(table, "summary").is_some_and(|s| !s.is_empty())
        {
            return false;
        }
        if has_body_path(table, &["th"]) && has_body_path(table, &["td"]) {
            return false;
        }
        if ["colgroup", "thead", "tfoot"]
            .iter()
            .any(|tag| get_child_node_by_name(table, tag).is_some())
        {
            return false;
        }
        if EMBEDDED_IN_CELL
            .iter()
            .any(|tag| has_body_path(table, &["td", tag]))
        {
            trace!("layout table: embedded content in cell");
            return true;
        }

        let mut points = 0;
        if !self.has_border(table) {
            points += 1;
        }
        if rows.len() <= 6 {
            points += 1;
        }
        if count_previous_tags(table) <= 12 {
            points += 1;
        }
        if has_body_path(table, &["td", "table"]) {
            points += 1;
        }
        trace!(points, "layout table score");
        points >= 3
    }

    /// 文档中的全部数据表格
    pub fn data_tables(&self) -> Vec<Handle> {
        find_nodes(self.document(), &["table"])
            .into_iter()
            .filter(|t| !self.is_layout_table(t))
            .collect()
    }
}
