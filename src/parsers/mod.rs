//! # 解析器模块
//!
//! - `html` - HTML文档解析与DOM访问
//! - `css` - 内联样式解析与计算样式

pub mod css;
pub mod html;

pub use css::{compute_style, parse_declarations, ComputedStyle};
pub use html::{collapse_whitespace, html_to_dom};
