pub use url::Url;

/// 是否为 `data:` URL
pub fn is_data_url(url: &str) -> bool {
    url.trim_start()
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}

/// 相对于文档地址解析链接，没有文档地址或解析失败时原样返回
pub fn resolve_url(document_url: Option<&str>, href: &str) -> String {
    let href = href.trim();
    if let Some(base) = document_url.and_then(|u| Url::parse(u).ok()) {
        if let Ok(resolved) = base.join(href) {
            return resolved.to_string();
        }
    }
    match Url::parse(href) {
        Ok(url) => url.to_string(),
        Err(_) => href.to_string(),
    }
}

/// 文档地址的路径部分
pub fn get_document_path(document_url: &str) -> Option<String> {
    Url::parse(document_url)
        .ok()
        .map(|url| url.path().to_string())
}

/// 图片地址最后一个路径段，保留扩展名
///
/// `http://x.com/img/rose.png?size=2` 得到 `rose.png`。
pub fn get_image_file_name(src: &str) -> String {
    let path = match Url::parse(src) {
        Ok(url) => url.path().to_string(),
        Err(_) => src
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    path.rsplit('/').next().unwrap_or_default().to_string()
}
