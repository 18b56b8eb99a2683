//! 统一的环境变量管理
//!
//! 命令行参数优先，其次是这里定义的环境变量，最后是默认值。

use std::env;
use std::fmt;

use url::Url;

use crate::core::Verbosity;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }

    /// 未设置时为 `None`，设置了但无法解析时报错
    fn get_optional() -> EnvResult<Option<T>> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value).map(Some),
            Err(_) => Ok(None),
        }
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "VOXDOM_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("warn".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }

    /// 朗读详细程度
    pub struct VerbosityLevel;
    impl EnvVar<Verbosity> for VerbosityLevel {
        const NAME: &'static str = "VOXDOM_VERBOSITY";
        const DEFAULT: Option<Verbosity> = Some(Verbosity::Verbose);
        const DESCRIPTION: &'static str = "Spoken verbosity: verbose, brief";

        fn parse(value: &str) -> EnvResult<Verbosity> {
            Verbosity::parse(value).ok_or_else(|| EnvError {
                variable: Self::NAME.to_string(),
                message: format!("Invalid verbosity '{}'. Use: verbose, brief", value),
            })
        }
    }

    /// 文档地址
    pub struct DocumentUrl;
    impl EnvVar<String> for DocumentUrl {
        const NAME: &'static str = "VOXDOM_DOCUMENT_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str =
            "Absolute URL of the document, used for internal and visited links";

        fn parse(value: &str) -> EnvResult<String> {
            match Url::parse(value) {
                Ok(_) => Ok(value.to_string()),
                Err(e) => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Invalid URL '{}': {}", value, e),
                }),
            }
        }
    }

    /// 包含隐藏节点
    pub struct AllowHidden;
    impl EnvVar<bool> for AllowHidden {
        const NAME: &'static str = "VOXDOM_ALLOW_HIDDEN";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Include hidden nodes in navigation and names";

        fn parse(value: &str) -> EnvResult<bool> {
            parse_bool(value, Self::NAME)
        }
    }

    /// 禁用颜色输出
    pub struct NoColor;
    impl EnvVar<bool> for NoColor {
        const NAME: &'static str = "NO_COLOR";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Disable colored output when set to any value";

        fn parse(value: &str) -> EnvResult<bool> {
            // NO_COLOR 遵循标准：任何值都表示禁用颜色
            Ok(!value.is_empty())
        }
    }
}

/// 辅助函数
fn parse_bool(value: &str, var_name: &str) -> EnvResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "enabled" => Ok(true),
        "false" | "0" | "no" | "off" | "disabled" => Ok(false),
        _ => Err(EnvError {
            variable: var_name.to_string(),
            message: format!(
                "Invalid boolean value '{}'. Use: true/false, 1/0, yes/no, on/off, enabled/disabled",
                value
            ),
        }),
    }
}

fn show_default<T: fmt::Debug>(default: Option<T>) -> String {
    match default {
        Some(value) => format!("{:?}", value).to_lowercase(),
        None => "none".to_string(),
    }
}

/// 环境变量说明
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("Environment variables:\n\n");
    docs.push_str(&format!(
        "  {:<22}{} (default: warn)\n",
        core::LogLevel::NAME,
        core::LogLevel::DESCRIPTION
    ));
    docs.push_str(&format!(
        "  {:<22}{} (default: {})\n",
        core::VerbosityLevel::NAME,
        core::VerbosityLevel::DESCRIPTION,
        show_default(core::VerbosityLevel::DEFAULT)
    ));
    docs.push_str(&format!(
        "  {:<22}{} (default: {})\n",
        core::DocumentUrl::NAME,
        core::DocumentUrl::DESCRIPTION,
        show_default(core::DocumentUrl::DEFAULT)
    ));
    docs.push_str(&format!(
        "  {:<22}{} (default: {})\n",
        core::AllowHidden::NAME,
        core::AllowHidden::DESCRIPTION,
        show_default(core::AllowHidden::DEFAULT)
    ));
    docs.push_str(&format!(
        "  {:<22}{} (default: {})\n",
        core::NoColor::NAME,
        core::NoColor::DESCRIPTION,
        show_default(core::NoColor::DEFAULT)
    ));
    docs
}

pub fn print_env_help() {
    print!("{}", generate_env_docs());
}
