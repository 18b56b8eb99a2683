//! ARIA 支持
//!
//! ARIA 角色、`aria-hidden` 的隐藏/强制可见判定以及状态消息。

use markup5ever_rcdom::Handle;

use tracing::debug;

use crate::parsers::html::dom::{
    get_document_root, get_element_by_id, get_node_attr, get_parent_element,
};

/// ARIA 角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // 地标角色
    Application,
    Banner,
    Complementary,
    ContentInfo,
    Form,
    Main,
    Navigation,
    Region,
    Search,

    // 控件角色
    Alert,
    AlertDialog,
    Button,
    Checkbox,
    Combobox,
    Dialog,
    Grid,
    GridCell,
    Link,
    Listbox,
    Log,
    Marquee,
    Menu,
    MenuBar,
    MenuItem,
    MenuItemCheckbox,
    MenuItemRadio,
    Option,
    ProgressBar,
    Radio,
    RadioGroup,
    ScrollBar,
    Slider,
    SpinButton,
    Status,
    Tab,
    TabList,
    TabPanel,
    TextBox,
    Timer,
    Tooltip,
    Tree,
    TreeGrid,
    TreeItem,

    // 文档结构
    Article,
    Cell,
    ColumnHeader,
    Definition,
    Directory,
    Document,
    Group,
    Heading,
    Img,
    List,
    ListItem,
    Math,
    Note,
    Presentation,
    Row,
    RowGroup,
    RowHeader,
    Separator,
    Toolbar,
}

impl AriaRole {
    /// 解析单个角色标记
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "application" => Self::Application,
            "banner" => Self::Banner,
            "complementary" => Self::Complementary,
            "contentinfo" => Self::ContentInfo,
            "form" => Self::Form,
            "main" => Self::Main,
            "navigation" => Self::Navigation,
            "region" => Self::Region,
            "search" => Self::Search,
            "alert" => Self::Alert,
            "alertdialog" => Self::AlertDialog,
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "combobox" => Self::Combobox,
            "dialog" => Self::Dialog,
            "grid" => Self::Grid,
            "gridcell" => Self::GridCell,
            "link" => Self::Link,
            "listbox" => Self::Listbox,
            "log" => Self::Log,
            "marquee" => Self::Marquee,
            "menu" => Self::Menu,
            "menubar" => Self::MenuBar,
            "menuitem" => Self::MenuItem,
            "menuitemcheckbox" => Self::MenuItemCheckbox,
            "menuitemradio" => Self::MenuItemRadio,
            "option" => Self::Option,
            "progressbar" => Self::ProgressBar,
            "radio" => Self::Radio,
            "radiogroup" => Self::RadioGroup,
            "scrollbar" => Self::ScrollBar,
            "slider" => Self::Slider,
            "spinbutton" => Self::SpinButton,
            "status" => Self::Status,
            "tab" => Self::Tab,
            "tablist" => Self::TabList,
            "tabpanel" => Self::TabPanel,
            "textbox" => Self::TextBox,
            "timer" => Self::Timer,
            "tooltip" => Self::Tooltip,
            "tree" => Self::Tree,
            "treegrid" => Self::TreeGrid,
            "treeitem" => Self::TreeItem,
            "article" => Self::Article,
            "cell" => Self::Cell,
            "columnheader" => Self::ColumnHeader,
            "definition" => Self::Definition,
            "directory" => Self::Directory,
            "document" => Self::Document,
            "group" => Self::Group,
            "heading" => Self::Heading,
            "img" => Self::Img,
            "list" => Self::List,
            "listitem" => Self::ListItem,
            "math" => Self::Math,
            "note" => Self::Note,
            "none" | "presentation" => Self::Presentation,
            "row" => Self::Row,
            "rowgroup" => Self::RowGroup,
            "rowheader" => Self::RowHeader,
            "separator" => Self::Separator,
            "toolbar" => Self::Toolbar,
            _ => return None,
        })
    }

    /// 表现为表单控件的角色
    pub fn is_control_widget(&self) -> bool {
        matches!(
            self,
            Self::Button
                | Self::Checkbox
                | Self::Combobox
                | Self::Listbox
                | Self::Menu
                | Self::MenuItemCheckbox
                | Self::MenuItemRadio
                | Self::Radio
                | Self::Slider
                | Self::ProgressBar
                | Self::ScrollBar
                | Self::SpinButton
                | Self::Tab
                | Self::TabList
                | Self::TextBox
        )
    }

    /// 复合控件：子节点是内部状态，焦点由 aria-activedescendant 管理
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Self::Combobox
                | Self::Grid
                | Self::Listbox
                | Self::Menu
                | Self::MenuBar
                | Self::RadioGroup
                | Self::TabList
                | Self::Tree
                | Self::TreeGrid
        )
    }

    pub fn is_landmark(&self) -> bool {
        matches!(
            self,
            Self::Application
                | Self::Banner
                | Self::Complementary
                | Self::ContentInfo
                | Self::Form
                | Self::Main
                | Self::Navigation
                | Self::Search
        )
    }

    pub fn is_grid(&self) -> bool {
        matches!(self, Self::Grid | Self::TreeGrid)
    }

    /// 无论有无子节点都作为遍历叶子的角色
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Img | Self::Math)
    }

    pub fn msg_key(&self) -> Option<&'static str> {
        Some(match self {
            Self::Application => "aria_role_application",
            Self::Banner => "aria_role_banner",
            Self::Complementary => "aria_role_complementary",
            Self::ContentInfo => "aria_role_contentinfo",
            Self::Form => "aria_role_form",
            Self::Main => "aria_role_main",
            Self::Navigation => "aria_role_navigation",
            Self::Region => "aria_role_region",
            Self::Search => "aria_role_search",
            Self::Alert => "aria_role_alert",
            Self::AlertDialog => "aria_role_alertdialog",
            Self::Button => "aria_role_button",
            Self::Checkbox => "aria_role_checkbox",
            Self::Combobox => "aria_role_combobox",
            Self::Dialog => "aria_role_dialog",
            Self::Grid => "aria_role_grid",
            Self::GridCell => "aria_role_gridcell",
            Self::Link => "aria_role_link",
            Self::Listbox => "aria_role_listbox",
            Self::Log => "aria_role_log",
            Self::Marquee => "aria_role_marquee",
            Self::Menu => "aria_role_menu",
            Self::MenuBar => "aria_role_menubar",
            Self::MenuItem => "aria_role_menuitem",
            Self::MenuItemCheckbox => "aria_role_menuitemcheckbox",
            Self::MenuItemRadio => "aria_role_menuitemradio",
            Self::Option => "aria_role_option",
            Self::ProgressBar => "aria_role_progressbar",
            Self::Radio => "aria_role_radio",
            Self::RadioGroup => "aria_role_radiogroup",
            Self::ScrollBar => "aria_role_scrollbar",
            Self::Slider => "aria_role_slider",
            Self::SpinButton => "aria_role_spinbutton",
            Self::Status => "aria_role_status",
            Self::Tab => "aria_role_tab",
            Self::TabList => "aria_role_tablist",
            Self::TabPanel => "aria_role_tabpanel",
            Self::TextBox => "aria_role_textbox",
            Self::Timer => "aria_role_timer",
            Self::Tooltip => "aria_role_tooltip",
            Self::Tree => "aria_role_tree",
            Self::TreeGrid => "aria_role_treegrid",
            Self::TreeItem => "aria_role_treeitem",
            Self::Article => "aria_role_article",
            Self::Cell => "aria_role_cell",
            Self::ColumnHeader => "aria_role_columnheader",
            Self::Definition => "aria_role_definition",
            Self::Directory => "aria_role_directory",
            Self::Document => "aria_role_document",
            Self::Group => "aria_role_group",
            Self::Heading => "aria_role_heading",
            Self::Img => "aria_role_img",
            Self::List => "aria_role_list",
            Self::ListItem => "aria_role_listitem",
            Self::Math => "aria_role_math",
            Self::Note => "aria_role_note",
            Self::Row => "aria_role_row",
            Self::RowGroup => "aria_role_rowgroup",
            Self::RowHeader => "aria_role_rowheader",
            Self::Separator => "aria_role_separator",
            Self::Toolbar => "aria_role_toolbar",
            Self::Presentation => return None,
        })
    }
}

/// 消息键及其替换参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMsg {
    pub key: &'static str,
    pub args: Vec<String>,
}

impl StateMsg {
    pub fn new(key: &'static str) -> Self {
        StateMsg {
            key,
            args: Vec::new(),
        }
    }

    pub fn with_args(key: &'static str, args: Vec<String>) -> Self {
        StateMsg { key, args }
    }
}

/// `role` 属性中第一个可识别的角色
pub fn get_role(node: &Handle) -> Option<AriaRole> {
    get_node_attr(node, "role")?
        .split_whitespace()
        .find_map(AriaRole::parse)
}

pub fn has_role(node: &Handle, role: AriaRole) -> bool {
    get_role(node) == Some(role)
}

pub fn is_control_widget(node: &Handle) -> bool {
    get_role(node).is_some_and(|r| r.is_control_widget())
}

pub fn is_composite_control(node: &Handle) -> bool {
    get_role(node).is_some_and(|r| r.is_composite())
}

pub fn is_landmark(node: &Handle) -> bool {
    get_role(node).is_some_and(|r| r.is_landmark())
}

pub fn is_grid(node: &Handle) -> bool {
    get_role(node).is_some_and(|r| r.is_grid())
}

pub fn is_leaf_element(node: &Handle) -> bool {
    get_role(node).is_some_and(|r| r.is_leaf())
}

/// 节点自身带有 `aria-hidden="true"`（且未声明忽略）
pub fn is_hidden(node: &Handle) -> bool {
    get_node_attr(node, "aria-hidden").as_deref() == Some("true")
        && get_node_attr(node, "chromevoxignoreariahidden").is_none()
}

/// 最近的显式 `aria-hidden` 决定结果，`"false"` 强制整棵子树可见
pub fn is_forced_visible_recursive(node: &Handle) -> bool {
    let mut current = Some(node.clone());
    while let Some(n) = current {
        match get_node_attr(&n, "aria-hidden").as_deref() {
            Some("false") => return true,
            Some("true") => return false,
            _ => {}
        }
        current = get_parent_element(&n);
    }
    false
}

pub fn is_hidden_recursive(node: &Handle) -> bool {
    if is_forced_visible_recursive(node) {
        return false;
    }
    let mut current = Some(node.clone());
    while let Some(n) = current {
        if is_hidden(&n) {
            return true;
        }
        current = get_parent_element(&n);
    }
    false
}

/// `aria-activedescendant` 引用的元素
pub fn get_active_descendant(node: &Handle) -> Option<Handle> {
    let id = get_node_attr(node, "aria-activedescendant")?;
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    let found = get_element_by_id(&get_document_root(node), id);
    if found.is_none() {
        debug!(id, "dangling aria-activedescendant");
    }
    found
}

pub fn get_role_name_msg(node: &Handle) -> Option<&'static str> {
    get_role(node).and_then(|r| r.msg_key())
}

fn tri_state(value: Option<String>, on: &'static str, off: &'static str, mixed: &'static str) -> Option<StateMsg> {
    match value.as_deref() {
        Some("true") => Some(StateMsg::new(on)),
        Some("false") => Some(StateMsg::new(off)),
        Some("mixed") => Some(StateMsg::new(mixed)),
        _ => None,
    }
}

/// 由 `aria-*` 属性得到的状态消息
pub fn get_state_msgs(node: &Handle) -> Vec<StateMsg> {
    let mut msgs = Vec::new();

    if let Some(msg) = tri_state(
        get_node_attr(node, "aria-checked"),
        "aria_checked_true",
        "aria_checked_false",
        "aria_checked_mixed",
    ) {
        msgs.push(msg);
    }
    if get_node_attr(node, "aria-disabled").as_deref() == Some("true") {
        msgs.push(StateMsg::new("aria_disabled_true"));
    }
    match get_node_attr(node, "aria-expanded").as_deref() {
        Some("true") => msgs.push(StateMsg::new("aria_expanded_true")),
        Some("false") => msgs.push(StateMsg::new("aria_expanded_false")),
        _ => {}
    }
    if let Some(msg) = tri_state(
        get_node_attr(node, "aria-pressed"),
        "aria_pressed_true",
        "aria_pressed_false",
        "aria_pressed_mixed",
    ) {
        msgs.push(msg);
    }
    match get_node_attr(node, "aria-selected").as_deref() {
        Some("true") => msgs.push(StateMsg::new("aria_selected_true")),
        Some("false") => msgs.push(StateMsg::new("aria_selected_false")),
        _ => {}
    }
    if matches!(
        get_node_attr(node, "aria-invalid").as_deref(),
        Some("true" | "grammar" | "spelling")
    ) {
        msgs.push(StateMsg::new("aria_invalid_true"));
    }
    if get_node_attr(node, "aria-required").as_deref() == Some("true") {
        msgs.push(StateMsg::new("aria_required_true"));
    }

    if let Some(text) = get_node_attr(node, "aria-valuetext").filter(|t| !t.is_empty()) {
        msgs.push(StateMsg::with_args("aria_value_text", vec![text]));
    } else if let Some(now) = get_node_attr(node, "aria-valuenow").filter(|t| !t.is_empty()) {
        msgs.push(StateMsg::with_args("aria_value_now", vec![now]));
    }

    if let (Some(pos), Some(size)) = (
        get_node_attr(node, "aria-posinset"),
        get_node_attr(node, "aria-setsize"),
    ) {
        msgs.push(StateMsg::with_args("list_position", vec![pos, size]));
    }

    msgs
}
