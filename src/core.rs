use std::collections::HashSet;

use markup5ever_rcdom::RcDom;
use thiserror::Error;
use tracing::debug;

use crate::a11y::{NavDescription, Query};
use crate::env::{self, EnvVar};

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// voxdom 处理过程中可能出现的错误
///
/// 查询本身从不失败，只有读取输入、解析文档和读取配置时才会产生错误。
#[derive(Debug, Error)]
pub enum VoxError {
    #[error("读取输入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("文档解析失败: {0}")]
    Parse(String),

    #[error("未找到元素: {0}")]
    NotFound(String),

    #[error("配置错误: {0}")]
    Config(String),
}

impl From<env::EnvError> for VoxError {
    fn from(err: env::EnvError) -> Self {
        VoxError::Config(err.to_string())
    }
}

/// 朗读的详细程度
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Verbose,
    Brief,
}

impl Verbosity {
    pub fn parse(value: &str) -> Option<Verbosity> {
        match value.to_ascii_lowercase().as_str() {
            "verbose" => Some(Verbosity::Verbose),
            "brief" => Some(Verbosity::Brief),
            _ => None,
        }
    }
}

/// 查询选项
///
/// 同一份选项在一次查询中保持不变，查询期间的缓存结果依赖于它。
#[derive(Default, Clone, Debug)]
pub struct VoxOptions {
    pub verbosity: Verbosity,
    /// 文档自身的地址，用于判断内部链接和解析相对链接
    pub document_url: Option<String>,
    /// 已访问过的绝对地址
    pub visited_urls: HashSet<String>,
    /// 导航和名称计算时包含隐藏节点
    pub allow_hidden: bool,
}

impl VoxOptions {
    /// 从环境变量读取选项，未设置的变量取默认值
    pub fn from_env() -> Result<VoxOptions, VoxError> {
        Ok(VoxOptions {
            verbosity: env::core::VerbosityLevel::get()?,
            document_url: env::core::DocumentUrl::get_optional()?,
            visited_urls: HashSet::new(),
            allow_hidden: env::core::AllowHidden::get()?,
        })
    }
}

/// 按文档顺序依次描述所有有内容的叶子
pub fn describe_document(dom: &RcDom, options: &VoxOptions) -> Vec<NavDescription> {
    walk_document(dom, options, false)
}

/// 按指定方向遍历文档
pub fn walk_document(dom: &RcDom, options: &VoxOptions, reverse: bool) -> Vec<NavDescription> {
    let query = Query::new(&dom.document, options);
    let descriptions = query.describe_walk(reverse);
    debug!(
        count = descriptions.len(),
        cached = query.cache().len(),
        "document walk finished"
    );
    descriptions
}

/// 描述 id 为 `id` 的元素
pub fn describe_element(
    dom: &RcDom,
    id: &str,
    options: &VoxOptions,
) -> Result<NavDescription, VoxError> {
    let query = Query::new(&dom.document, options);
    let node = query
        .element_by_id(id)
        .ok_or_else(|| VoxError::NotFound(id.to_string()))?;
    Ok(query.describe(&node, None))
}

fn use_color() -> bool {
    atty::is(atty::Stream::Stderr) && !env::core::NoColor::get_or_default(false)
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    if use_color() {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
