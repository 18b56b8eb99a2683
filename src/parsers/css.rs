//! CSS 解析器模块
//!
//! 此模块提供无障碍查询所需的最小“计算样式”：解析元素的内联 `style` 属性，
//! 结合用户代理默认值、表现性属性（`hidden`、`<ol type>`）以及可继承属性，
//! 得到 `display`、`visibility`、`opacity`、`list-style-type` 四个属性的计算值。
//! 语法解析使用 cssparser 库，不合法的声明会被跳过而不是报错。
//!
//! 完整的层叠、选择器匹配与布局不在此模块的范围之内。
//!
//! # 使用示例
//!
//! ```rust
//! use voxdom::parsers::css::parse_declarations;
//!
//! let declarations = parse_declarations("display: none; opacity: .5");
//! assert_eq!(declarations[0], ("display".to_string(), "none".to_string()));
//! ```

use cssparser::{Delimiter, ParseError, Parser, ParserInput, Token};
use markup5ever_rcdom::Handle;

use crate::parsers::html::dom::{get_node_attr, get_node_name, has_node_attr};

/// 默认不显示的元素（用户代理样式表中 `display: none`）
const UA_DISPLAY_NONE: &[&str] = &[
    "base", "datalist", "head", "link", "meta", "noscript", "param", "script", "style",
    "template", "title",
];

/// 默认为块级的元素
const UA_DISPLAY_BLOCK: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "details", "dialog", "dd", "div", "dl",
    "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "hgroup", "hr", "html", "legend", "main", "menu", "nav", "ol", "p", "pre",
    "section", "summary", "ul",
];

/// `list-style-type` 关键字
const LIST_STYLE_TYPES: &[&str] = &[
    "none",
    "disc",
    "circle",
    "square",
    "decimal",
    "decimal-leading-zero",
    "lower-roman",
    "upper-roman",
    "lower-greek",
    "lower-alpha",
    "lower-latin",
    "upper-alpha",
    "upper-latin",
    "armenian",
    "georgian",
];

/// `border-style` 关键字
const BORDER_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// 元素的计算样式快照
///
/// 每次查询时重新计算，不跨用户操作缓存。
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub display: String,
    pub visibility: String,
    pub opacity: f32,
    pub list_style_type: String,
    /// 原始内联声明（按出现顺序），供表格边框启发式使用
    pub inline: Vec<(String, String)>,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        ComputedStyle {
            display: "inline".to_string(),
            visibility: "visible".to_string(),
            opacity: 1.0,
            list_style_type: "disc".to_string(),
            inline: Vec::new(),
        }
    }
}

impl ComputedStyle {
    /// 获取内联声明的值（后出现的声明覆盖先出现的）
    pub fn inline_value(&self, property: &str) -> Option<&str> {
        self.inline
            .iter()
            .rev()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }
}

/// `border` 简写属性拆分后的各部分
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BorderDeclaration {
    pub style: Option<String>,
    pub width: Option<String>,
    pub color: Option<String>,
}

/// 解析声明列表（内联 `style` 属性的内容）
///
/// 属性名统一转换为小写，值去掉首尾空白和 `!important`。
pub fn parse_declarations(css: &str) -> Vec<(String, String)> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut declarations = Vec::new();

    loop {
        let result: Result<(String, String), ParseError<()>> =
            parser.parse_until_after(Delimiter::Semicolon, |p| {
                let name = p.expect_ident()?.to_ascii_lowercase();
                p.expect_colon()?;
                let start = p.position();
                while p.next().is_ok() {}
                let value = p.slice_from(start).trim();
                let value = value
                    .strip_suffix("!important")
                    .unwrap_or(value)
                    .trim()
                    .to_string();
                Ok((name, value))
            });

        if let Ok(declaration) = result {
            declarations.push(declaration);
        }

        if parser.is_exhausted() {
            break;
        }
    }

    declarations
}

/// 解析不透明度，支持数字与百分比，结果限制在 `[0, 1]`
pub fn parse_opacity(value: &str) -> Option<f32> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    let opacity = match parser.next() {
        Ok(Token::Number { value, .. }) => *value,
        Ok(Token::Percentage { unit_value, .. }) => *unit_value,
        _ => return None,
    };

    Some(opacity.clamp(0.0, 1.0))
}

/// 长度值是否为零（`0`、`0px`、`0em` 等）
pub fn is_zero_length(value: &str) -> bool {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    matches!(
        parser.next(),
        Ok(Token::Number { value, .. }) | Ok(Token::Dimension { value, .. }) if *value == 0.0
    )
}

/// 拆分 `border` 简写属性
pub fn parse_border_shorthand(value: &str) -> BorderDeclaration {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let mut border = BorderDeclaration::default();

    loop {
        let start = parser.position();
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        let text = parser.slice_from(start).trim().to_string();

        match token {
            Token::Ident(ref ident) if BORDER_STYLES.contains(&&*ident.to_ascii_lowercase()) => {
                border.style = Some(ident.to_ascii_lowercase());
            }
            Token::Ident(ref ident)
                if matches!(&*ident.to_ascii_lowercase(), "thin" | "medium" | "thick") =>
            {
                border.width = Some(text);
            }
            Token::Number { .. } | Token::Dimension { .. } => border.width = Some(text),
            _ => border.color = Some(text),
        }
    }

    border
}

/// 从 `list-style` 简写中提取列表样式类型
fn list_style_type_from_shorthand(value: &str) -> Option<String> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    while let Ok(token) = parser.next() {
        if let Token::Ident(ident) = token {
            let ident = ident.to_ascii_lowercase();
            if LIST_STYLE_TYPES.contains(&ident.as_str()) {
                return Some(ident);
            }
        }
    }

    None
}

/// `<ol type>` / `<ul type>` 表现性属性对应的列表样式
fn list_style_type_from_attr(value: &str) -> Option<&'static str> {
    Some(match value {
        "1" => "decimal",
        "a" => "lower-alpha",
        "A" => "upper-alpha",
        "i" => "lower-roman",
        "I" => "upper-roman",
        _ => match value.to_ascii_lowercase().as_str() {
            "disc" => "disc",
            "circle" => "circle",
            "square" => "square",
            "none" => "none",
            _ => return None,
        },
    })
}

fn default_display(node: &Handle, tag: &str) -> &'static str {
    if UA_DISPLAY_NONE.contains(&tag) || has_node_attr(node, "hidden") {
        return "none";
    }
    if tag == "input"
        && get_node_attr(node, "type").is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
    {
        return "none";
    }
    match tag {
        "li" => "list-item",
        "table" => "table",
        "tr" => "table-row",
        "td" | "th" => "table-cell",
        "thead" => "table-header-group",
        "tbody" => "table-row-group",
        "tfoot" => "table-footer-group",
        "caption" => "table-caption",
        "colgroup" => "table-column-group",
        "col" => "table-column",
        _ if UA_DISPLAY_BLOCK.contains(&tag) => "block",
        _ => "inline",
    }
}

/// 计算元素的样式
///
/// 非元素节点没有计算样式，返回 `None`。`parent` 是父元素的计算样式，
/// 用于继承 `visibility` 和 `list-style-type`。
pub fn compute_style(node: &Handle, parent: Option<&ComputedStyle>) -> Option<ComputedStyle> {
    let tag = get_node_name(node)?;
    let inline = get_node_attr(node, "style")
        .map(|style| parse_declarations(&style))
        .unwrap_or_default();

    let inherited = parent.cloned().unwrap_or_default();
    let mut style = ComputedStyle {
        display: default_display(node, tag).to_string(),
        visibility: inherited.visibility,
        opacity: 1.0,
        list_style_type: inherited.list_style_type,
        inline: Vec::new(),
    };

    if matches!(tag, "ol" | "ul") {
        let from_attr = get_node_attr(node, "type")
            .and_then(|t| list_style_type_from_attr(t.trim()))
            .unwrap_or(if tag == "ol" { "decimal" } else { "disc" });
        style.list_style_type = from_attr.to_string();
    }

    for (name, value) in &inline {
        let keyword = value.to_ascii_lowercase();
        match name.as_str() {
            "display" => style.display = keyword,
            "visibility" => style.visibility = keyword,
            "opacity" => style.opacity = parse_opacity(value).unwrap_or(1.0),
            "list-style-type" => style.list_style_type = keyword,
            "list-style" => {
                if let Some(list_style_type) = list_style_type_from_shorthand(value) {
                    style.list_style_type = list_style_type;
                }
            }
            _ => {}
        }
    }

    style.inline = inline;
    Some(style)
}
