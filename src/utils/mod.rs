//! # 工具模块
//!
//! - `url` - 图片文件名提取、链接解析、文档路径等 URL 工具函数

pub mod url;

pub use url::{
    get_document_path, get_image_file_name, is_data_url, resolve_url, Url,
};
