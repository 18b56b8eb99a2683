//! 单次查询范围内的记忆化缓存
//!
//! 缓存归属于一个 [`Query`](super::Query)，查询结束（`Query` 被丢弃）时自动清空，
//! 不存在跨查询的全局状态。

use std::cell::{OnceCell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use markup5ever_rcdom::Handle;

use crate::parsers::css::ComputedStyle;

/// 节点标识：节点分配的地址，仅在查询期间（文档存活时）有效
pub type NodeKey = usize;

pub fn node_key(node: &Handle) -> NodeKey {
    Rc::as_ptr(node) as NodeKey
}

#[derive(Debug, Default)]
pub struct QueryCache {
    flags: RefCell<HashMap<(NodeKey, &'static str), bool>>,
    styles: RefCell<HashMap<NodeKey, Option<Rc<ComputedStyle>>>>,
    labelled_by_targets: OnceCell<HashSet<String>>,
    ids: OnceCell<HashMap<String, Handle>>,
    label_fors: OnceCell<HashMap<String, Handle>>,
}

/// 按文档顺序建立索引，同一个键只保留第一个节点
pub fn index_first<I>(entries: I) -> HashMap<String, Handle>
where
    I: IntoIterator<Item = (String, Handle)>,
{
    let mut index = HashMap::new();
    for (key, node) in entries {
        index.entry(key).or_insert(node);
    }
    index
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以 `(节点, 函数名)` 为键记忆化布尔结果
    ///
    /// 计算期间不持有借用，`compute` 可以递归调用 `memoize`。
    pub fn memoize<F>(&self, name: &'static str, node: &Handle, compute: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        let key = (node_key(node), name);
        let cached = self.flags.borrow().get(&key).copied();
        if let Some(value) = cached {
            return value;
        }

        let value = compute();
        self.flags.borrow_mut().insert(key, value);
        value
    }

    pub fn style<F>(&self, node: &Handle, compute: F) -> Option<Rc<ComputedStyle>>
    where
        F: FnOnce() -> Option<ComputedStyle>,
    {
        let key = node_key(node);
        let cached = self.styles.borrow().get(&key).cloned();
        if let Some(style) = cached {
            return style;
        }

        let style = compute().map(Rc::new);
        self.styles.borrow_mut().insert(key, style.clone());
        style
    }

    pub fn labelled_by_targets<F>(&self, build: F) -> &HashSet<String>
    where
        F: FnOnce() -> HashSet<String>,
    {
        self.labelled_by_targets.get_or_init(build)
    }

    /// `id` 到元素的索引，首次使用时建立
    pub fn ids<F>(&self, build: F) -> &HashMap<String, Handle>
    where
        F: FnOnce() -> HashMap<String, Handle>,
    {
        self.ids.get_or_init(build)
    }

    /// `<label for>` 到标签的索引，首次使用时建立
    pub fn label_fors<F>(&self, build: F) -> &HashMap<String, Handle>
    where
        F: FnOnce() -> HashMap<String, Handle>,
    {
        self.label_fors.get_or_init(build)
    }

    pub fn len(&self) -> usize {
        self.flags.borrow().len() + self.styles.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
