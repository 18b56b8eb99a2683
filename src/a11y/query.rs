//! 查询上下文
//!
//! 一次顶层查询（描述一个元素、遍历一遍文档）对应一个 [`Query`]。
//! 它持有文档根、选项、消息目录和记忆化缓存，丢弃时缓存随之清空。

use std::cell::{OnceCell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use markup5ever_rcdom::Handle;
use tracing::debug;

use super::cache::{index_first, node_key, NodeKey, QueryCache};
use super::messages::{EnglishMessages, MessageCatalog};
use crate::core::VoxOptions;
use crate::parsers::css::{compute_style, ComputedStyle};
use crate::parsers::html::dom::{
    find_all_descendants, find_nodes, get_document_root, get_node_attr, get_parent_element,
    is_tag,
};

static ENGLISH: EnglishMessages = EnglishMessages;

pub struct Query<'a> {
    document: Handle,
    options: &'a VoxOptions,
    messages: &'a dyn MessageCatalog,
    cache: QueryCache,
    body: OnceCell<Option<Handle>>,
    /// 正在解析名称的节点（递归保护）
    resolving: RefCell<HashSet<NodeKey>>,
}

impl<'a> Query<'a> {
    /// `node` 可以是文档中的任意节点，查询以其所在树的根为文档
    pub fn new(node: &Handle, options: &'a VoxOptions) -> Self {
        Query {
            document: get_document_root(node),
            options,
            messages: &ENGLISH,
            cache: QueryCache::new(),
            body: OnceCell::new(),
            resolving: RefCell::new(HashSet::new()),
        }
    }

    pub fn with_messages(mut self, messages: &'a dyn MessageCatalog) -> Self {
        self.messages = messages;
        self
    }

    pub fn options(&self) -> &VoxOptions {
        self.options
    }

    pub fn messages(&self) -> &dyn MessageCatalog {
        self.messages
    }

    pub fn document(&self) -> &Handle {
        &self.document
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// 文档的 `<body>`，没有时为 `None`
    pub fn body(&self) -> Option<&Handle> {
        self.body
            .get_or_init(|| find_nodes(&self.document, &["html", "body"]).into_iter().next())
            .as_ref()
    }

    pub fn is_body(&self, node: &Handle) -> bool {
        self.body().is_some_and(|body| Handle::ptr_eq(body, node))
    }

    /// 第一个 `id` 为 `id` 的元素，索引在首次调用时建立
    pub fn element_by_id(&self, id: &str) -> Option<Handle> {
        if id.is_empty() {
            return None;
        }
        let element = self
            .cache
            .ids(|| {
                index_first(
                    find_all_descendants(&self.document, &mut |n| {
                        get_node_attr(n, "id").is_some_and(|id| !id.is_empty())
                    })
                    .into_iter()
                    .filter_map(|n| get_node_attr(&n, "id").map(|id| (id, n))),
                )
            })
            .get(id)
            .cloned();
        if element.is_none() {
            debug!(id, "dangling id reference");
        }
        element
    }

    /// 元素的计算样式，沿父元素链递归计算并缓存
    pub fn style(&self, node: &Handle) -> Option<Rc<ComputedStyle>> {
        self.cache.style(node, || {
            let parent_style = get_parent_element(node).and_then(|parent| self.style(&parent));
            compute_style(node, parent_style.as_deref())
        })
    }

    /// 是否被文档中某个 `aria-labelledby` 引用
    pub fn is_labelled_by_target(&self, node: &Handle) -> bool {
        let Some(id) = get_node_attr(node, "id").filter(|id| !id.is_empty()) else {
            return false;
        };
        self.cache
            .labelled_by_targets(|| {
                find_all_descendants(&self.document, &mut |n| {
                    get_node_attr(n, "aria-labelledby").is_some()
                })
                .iter()
                .filter_map(|n| get_node_attr(n, "aria-labelledby"))
                .flat_map(|ids| {
                    ids.split_whitespace()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .collect()
            })
            .contains(&id)
    }

    /// 第一个 `for` 指向 `id` 的 `<label>`
    pub fn label_for(&self, id: &str) -> Option<Handle> {
        if id.is_empty() {
            return None;
        }
        self.cache
            .label_fors(|| {
                index_first(
                    find_all_descendants(&self.document, &mut |n| {
                        is_tag(n, "label") && get_node_attr(n, "for").is_some()
                    })
                    .into_iter()
                    .filter_map(|n| get_node_attr(&n, "for").map(|id| (id, n))),
                )
            })
            .get(id)
            .cloned()
    }

    /// 把节点加入递归保护集合，已在集合中时返回 `false`
    pub(crate) fn enter(&self, node: &Handle) -> bool {
        self.resolving.borrow_mut().insert(node_key(node))
    }

    pub(crate) fn leave(&self, node: &Handle) {
        self.resolving.borrow_mut().remove(&node_key(node));
    }

    /// 展开消息键，未知键返回空串
    pub fn msg(&self, key: &str, args: &[String]) -> String {
        self.messages.get(key, args).unwrap_or_default()
    }
}
