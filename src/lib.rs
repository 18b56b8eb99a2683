//! # voxdom
//!
//! 屏幕阅读器风格的 DOM 无障碍查询库：判断节点是否可见、是否为叶子或控件，
//! 计算可访问名称、角色与状态，识别布局表格，并按朗读顺序遍历文档。
//!
//! ## 模块组织
//!
//! - `a11y` - 无障碍查询（可见性、名称、角色、表格、遍历）
//! - `core` - 错误类型、查询选项与文档级入口
//! - `env` - 环境变量配置
//! - `parsers` - HTML 解析与内联样式计算
//! - `utils` - 工具函数

pub mod a11y;
pub mod core;
pub mod env;
pub mod parsers;
pub mod utils;

// Re-export commonly used items for convenience
pub use a11y::*;
pub use crate::core::*;
pub use parsers::*;
pub use utils::*;
