use encoding_rs::Encoding;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::core::VoxError;

/// 将 HTML 字节转换为 DOM
pub fn html_to_dom(data: &[u8], document_encoding: Option<&str>) -> Result<RcDom, VoxError> {
    let s: String = match document_encoding.and_then(|label| Encoding::for_label(label.as_bytes())) {
        Some(encoding) => {
            let (string, _, _) = encoding.decode(data);
            string.to_string()
        }
        None => String::from_utf8_lossy(data).to_string(),
    };

    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut s.as_bytes())
        .map_err(|e| VoxError::Parse(e.to_string()))
}

/// 查找指定路径的DOM节点
pub fn find_nodes(node: &Handle, node_names: &[&str]) -> Vec<Handle> {
    let mut found_nodes = Vec::new();
    let Some((node_name, rest)) = node_names.split_first() else {
        return found_nodes;
    };

    if get_node_name(node) == Some(*node_name) {
        if rest.is_empty() {
            found_nodes.push(node.clone());
        } else {
            for child_node in node.children.borrow().iter() {
                found_nodes.append(&mut find_nodes(child_node, rest));
            }
            return found_nodes;
        }
    }

    for child_node in node.children.borrow().iter() {
        found_nodes.append(&mut find_nodes(child_node, node_names));
    }

    found_nodes
}

/// 根据名称获取子节点
pub fn get_child_node_by_name(parent: &Handle, node_name: &str) -> Option<Handle> {
    let children = parent.children.borrow();
    let matching_children = children
        .iter()
        .find(|child| get_node_name(child) == Some(node_name));
    matching_children.cloned()
}

/// 获取节点属性值
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => {
            for attr in attrs.borrow().iter() {
                if &*attr.name.local == attr_name {
                    return Some(attr.value.to_string());
                }
            }
            None
        }
        _ => None,
    }
}

/// 检查节点是否带有指定属性
pub fn has_node_attr(node: &Handle, attr_name: &str) -> bool {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .any(|attr| &*attr.name.local == attr_name),
        _ => false,
    }
}

/// 获取节点名称
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// 节点是否为指定标签的元素
pub fn is_tag(node: &Handle, tag: &str) -> bool {
    get_node_name(node) == Some(tag)
}

pub fn is_element(node: &Handle) -> bool {
    matches!(node.data, NodeData::Element { .. })
}

pub fn is_text(node: &Handle) -> bool {
    matches!(node.data, NodeData::Text { .. })
}

pub fn is_document(node: &Handle) -> bool {
    matches!(node.data, NodeData::Document)
}

/// 获取父节点
///
/// `parent` 是 `Cell<Option<Weak>>`，读取时需要取出再放回，否则会断开父子关系。
pub fn get_parent_node(child: &Handle) -> Option<Handle> {
    let parent = child.parent.take();
    child.parent.set(parent.clone());
    parent.and_then(|node| node.upgrade())
}

/// 获取父元素（文档节点不算元素）
pub fn get_parent_element(child: &Handle) -> Option<Handle> {
    get_parent_node(child).filter(is_element)
}

pub fn get_children(node: &Handle) -> Vec<Handle> {
    node.children.borrow().clone()
}

pub fn first_child(node: &Handle) -> Option<Handle> {
    node.children.borrow().first().cloned()
}

pub fn last_child(node: &Handle) -> Option<Handle> {
    node.children.borrow().last().cloned()
}

fn sibling_at(node: &Handle, offset: isize) -> Option<Handle> {
    let parent = get_parent_node(node)?;
    let siblings = parent.children.borrow();
    let index = siblings.iter().position(|s| Handle::ptr_eq(s, node))?;
    let target = index.checked_add_signed(offset)?;
    siblings.get(target).cloned()
}

pub fn next_sibling(node: &Handle) -> Option<Handle> {
    sibling_at(node, 1)
}

pub fn previous_sibling(node: &Handle) -> Option<Handle> {
    sibling_at(node, -1)
}

/// 获取最顶层的祖先节点（通常是文档节点）
pub fn get_document_root(node: &Handle) -> Handle {
    let mut root = node.clone();
    while let Some(parent) = get_parent_node(&root) {
        root = parent;
    }
    root
}

/// 文档元素（`<html>`）：父节点是文档节点的元素
pub fn is_document_element(node: &Handle) -> bool {
    is_element(node) && get_parent_node(node).is_some_and(|p| is_document(&p))
}

/// 获取节点的文本内容（所有文本后代按文档顺序拼接）
pub fn get_text_content(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Handle, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => {}
        _ => {
            for child in node.children.borrow().iter() {
                collect_text(child, out);
            }
        }
    }
}

/// 深度优先查找第一个满足条件的后代节点（不包括 `root` 本身）
pub fn find_descendant<F>(root: &Handle, predicate: &mut F) -> Option<Handle>
where
    F: FnMut(&Handle) -> bool,
{
    for child in root.children.borrow().iter() {
        if predicate(child) {
            return Some(child.clone());
        }
        if let Some(found) = find_descendant(child, predicate) {
            return Some(found);
        }
    }
    None
}

/// 按文档顺序收集所有满足条件的后代节点（不包括 `root` 本身）
pub fn find_all_descendants<F>(root: &Handle, predicate: &mut F) -> Vec<Handle>
where
    F: FnMut(&Handle) -> bool,
{
    let mut found = Vec::new();
    for child in root.children.borrow().iter() {
        if predicate(child) {
            found.push(child.clone());
        }
        found.append(&mut find_all_descendants(child, predicate));
    }
    found
}

/// 根据 id 查找元素
pub fn get_element_by_id(root: &Handle, id: &str) -> Option<Handle> {
    if id.is_empty() {
        return None;
    }
    find_descendant(root, &mut |node| {
        get_node_attr(node, "id").as_deref() == Some(id)
    })
}
