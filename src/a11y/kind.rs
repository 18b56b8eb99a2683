//! 元素种类
//!
//! 把标签名（以及 `<input type>`）映射为封闭的枚举，名称、角色和叶子判定都基于它分派。

use markup5ever_rcdom::Handle;

use crate::parsers::html::dom::{get_node_attr, get_node_name};

/// `<input>` 的类型，未知或缺省的值按 `text` 处理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Button,
    Checkbox,
    Color,
    Date,
    DateTime,
    DateTimeLocal,
    Email,
    File,
    Hidden,
    Image,
    Month,
    Number,
    Password,
    Radio,
    Range,
    Reset,
    Search,
    Submit,
    Tel,
    Text,
    Time,
    Url,
    Week,
}

impl InputType {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "color" => Self::Color,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "datetime-local" => Self::DateTimeLocal,
            "email" => Self::Email,
            "file" => Self::File,
            "hidden" => Self::Hidden,
            "image" => Self::Image,
            "month" => Self::Month,
            "number" => Self::Number,
            "password" => Self::Password,
            "radio" => Self::Radio,
            "range" => Self::Range,
            "reset" => Self::Reset,
            "search" => Self::Search,
            "submit" => Self::Submit,
            "tel" => Self::Tel,
            "time" => Self::Time,
            "url" => Self::Url,
            "week" => Self::Week,
            _ => Self::Text,
        }
    }

    pub fn of(node: &Handle) -> Self {
        Self::parse(&get_node_attr(node, "type").unwrap_or_default())
    }

    /// 可编辑文本类输入框
    pub fn is_text_entry(self) -> bool {
        matches!(
            self,
            Self::Email | Self::Number | Self::Password | Self::Search | Self::Text | Self::Tel | Self::Url
        )
    }

    /// `value` 属性作为用户输入朗读
    pub fn has_spoken_value(self) -> bool {
        !matches!(
            self,
            Self::Hidden
                | Self::Image
                | Self::Submit
                | Self::Reset
                | Self::Button
                | Self::Checkbox
                | Self::Radio
        )
    }

    pub fn msg_key(self) -> &'static str {
        match self {
            Self::Button => "input_type_button",
            Self::Checkbox => "input_type_checkbox",
            Self::Color => "input_type_color",
            Self::Date => "input_type_date",
            Self::DateTime => "input_type_datetime",
            Self::DateTimeLocal => "input_type_datetime_local",
            Self::Email => "input_type_email",
            Self::File => "input_type_file",
            Self::Hidden => "input_type_hidden",
            Self::Image => "input_type_image",
            Self::Month => "input_type_month",
            Self::Number => "input_type_number",
            Self::Password => "input_type_password",
            Self::Radio => "input_type_radio",
            Self::Range => "input_type_range",
            Self::Reset => "input_type_reset",
            Self::Search => "input_type_search",
            Self::Submit => "input_type_submit",
            Self::Tel => "input_type_tel",
            Self::Text => "input_type_text",
            Self::Time => "input_type_time",
            Self::Url => "input_type_url",
            Self::Week => "input_type_week",
        }
    }
}

/// 元素种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Anchor,
    Applet,
    Article,
    Aside,
    Audio,
    Button,
    Caption,
    Details,
    Dialog,
    Embed,
    Fieldset,
    Footer,
    Form,
    Frame,
    Header,
    Heading(u8),
    HGroup,
    IFrame,
    Image,
    Input(InputType),
    Label,
    Legend,
    ListItem,
    Main,
    Math,
    Menu,
    Meter,
    Nav,
    Object,
    OrderedList,
    Progress,
    Section,
    Select,
    Span,
    Summary,
    Table,
    TextArea,
    Time,
    UnorderedList,
    Video,
    Other,
}

impl ElementKind {
    /// 非元素节点返回 `None`
    pub fn of(node: &Handle) -> Option<Self> {
        let tag = get_node_name(node)?;
        Some(match tag {
            "a" => Self::Anchor,
            "applet" => Self::Applet,
            "article" => Self::Article,
            "aside" => Self::Aside,
            "audio" => Self::Audio,
            "button" => Self::Button,
            "caption" => Self::Caption,
            "details" => Self::Details,
            "dialog" => Self::Dialog,
            "embed" => Self::Embed,
            "fieldset" => Self::Fieldset,
            "footer" => Self::Footer,
            "form" => Self::Form,
            "frame" => Self::Frame,
            "header" => Self::Header,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "hgroup" => Self::HGroup,
            "iframe" => Self::IFrame,
            "img" => Self::Image,
            "input" => Self::Input(InputType::of(node)),
            "label" => Self::Label,
            "legend" => Self::Legend,
            "li" => Self::ListItem,
            "main" => Self::Main,
            "math" => Self::Math,
            "menu" => Self::Menu,
            "meter" => Self::Meter,
            "nav" => Self::Nav,
            "object" => Self::Object,
            "ol" => Self::OrderedList,
            "progress" => Self::Progress,
            "section" => Self::Section,
            "select" => Self::Select,
            "span" => Self::Span,
            "summary" => Self::Summary,
            "table" => Self::Table,
            "textarea" => Self::TextArea,
            "time" => Self::Time,
            "ul" => Self::UnorderedList,
            "video" => Self::Video,
            _ => Self::Other,
        })
    }

    /// 总是作为遍历叶子的嵌入/媒体元素
    pub fn is_embedded(self) -> bool {
        matches!(
            self,
            Self::Object | Self::Embed | Self::Video | Self::Audio | Self::IFrame | Self::Frame
        )
    }

    /// 详细模式下的标签角色消息
    pub fn verbose_msg(self) -> Option<&'static str> {
        Some(match self {
            Self::Anchor => "tag_link",
            Self::Article => "tag_article",
            Self::Aside => "tag_aside",
            Self::Audio => "tag_audio",
            Self::Button => "tag_button",
            Self::Details => "tag_details",
            Self::Dialog => "tag_dialog",
            Self::Footer => "tag_footer",
            Self::Form => "tag_form",
            Self::Header => "tag_header",
            Self::Heading(1) => "tag_h1",
            Self::Heading(2) => "tag_h2",
            Self::Heading(3) => "tag_h3",
            Self::Heading(4) => "tag_h4",
            Self::Heading(5) => "tag_h5",
            Self::Heading(_) => "tag_h6",
            Self::HGroup => "tag_hgroup",
            Self::Image => "tag_img",
            Self::Main => "tag_main",
            Self::Math => "tag_math",
            Self::Meter => "tag_meter",
            Self::Nav => "tag_nav",
            Self::OrderedList => "tag_ol",
            Self::Progress => "tag_progress",
            Self::Section => "tag_section",
            Self::Select => "tag_select",
            Self::Summary => "tag_summary",
            Self::Table => "tag_table",
            Self::TextArea => "tag_textarea",
            Self::Time => "tag_time",
            Self::UnorderedList => "tag_ul",
            Self::Video => "tag_video",
            _ => return None,
        })
    }

    /// 简洁模式下的标签角色消息
    pub fn brief_msg(self) -> Option<&'static str> {
        Some(match self {
            Self::Anchor => "tag_link",
            Self::Audio => "tag_audio",
            Self::Button => "tag_button",
            Self::Heading(1) => "tag_h1_brief",
            Self::Heading(2) => "tag_h2_brief",
            Self::Heading(3) => "tag_h3_brief",
            Self::Heading(4) => "tag_h4_brief",
            Self::Heading(5) => "tag_h5_brief",
            Self::Heading(_) => "tag_h6_brief",
            Self::Image => "tag_img",
            Self::Progress => "tag_progress",
            Self::Select => "tag_select",
            Self::Table => "tag_table",
            Self::TextArea => "tag_textarea",
            Self::Video => "tag_video",
            _ => return None,
        })
    }
}
