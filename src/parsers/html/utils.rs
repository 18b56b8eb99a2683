/// 折叠空白：去掉首尾空白，并把内部连续的空白替换为单个空格
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// 只包含空白（或为空）
pub fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c.is_whitespace()).is_empty()
}
