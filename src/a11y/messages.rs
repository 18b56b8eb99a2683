//! 本地化消息
//!
//! 角色和状态以消息键的形式产生，由 [`MessageCatalog`] 展开为面向用户的字符串。
//! 消息中的 `$1`、`$2` 等占位符按参数顺序替换。

/// 消息目录
pub trait MessageCatalog {
    /// 未替换占位符的原始消息
    fn lookup(&self, key: &str) -> Option<&str>;

    fn get(&self, key: &str, args: &[String]) -> Option<String> {
        self.lookup(key).map(|template| substitute(template, args))
    }
}

/// 把 `$N` 替换为第 N 个参数（从 1 开始），缺失的参数替换为空串
pub fn substitute(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        let mut digits = String::new();
        while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
            digits.push(d);
            chars.next();
        }

        match digits.parse::<usize>() {
            Ok(n) if n >= 1 => {
                if let Some(arg) = args.get(n - 1) {
                    out.push_str(arg);
                }
            }
            _ => {
                out.push('$');
                out.push_str(&digits);
            }
        }
    }

    out
}

/// 内置英文消息
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishMessages;

const ENGLISH_MESSAGES: &[(&str, &str)] = &[
    // ARIA 角色
    ("aria_role_alert", "Alert"),
    ("aria_role_alertdialog", "Alert dialog"),
    ("aria_role_application", "Application"),
    ("aria_role_article", "Article"),
    ("aria_role_banner", "Banner"),
    ("aria_role_button", "Button"),
    ("aria_role_cell", "Cell"),
    ("aria_role_checkbox", "Check box"),
    ("aria_role_columnheader", "Column header"),
    ("aria_role_combobox", "Combo box"),
    ("aria_role_complementary", "Complementary"),
    ("aria_role_contentinfo", "Content info"),
    ("aria_role_definition", "Definition"),
    ("aria_role_dialog", "Dialog"),
    ("aria_role_directory", "Directory"),
    ("aria_role_document", "Document"),
    ("aria_role_form", "Form"),
    ("aria_role_grid", "Grid"),
    ("aria_role_gridcell", "Cell"),
    ("aria_role_group", "Group"),
    ("aria_role_heading", "Heading"),
    ("aria_role_img", "Image"),
    ("aria_role_link", "Link"),
    ("aria_role_list", "List"),
    ("aria_role_listbox", "List box"),
    ("aria_role_listitem", "List item"),
    ("aria_role_log", "Log"),
    ("aria_role_main", "Main"),
    ("aria_role_marquee", "Marquee"),
    ("aria_role_math", "Math"),
    ("aria_role_menu", "Menu"),
    ("aria_role_menubar", "Menu bar"),
    ("aria_role_menuitem", "Menu item"),
    ("aria_role_menuitemcheckbox", "Check box menu item"),
    ("aria_role_menuitemradio", "Radio button menu item"),
    ("aria_role_navigation", "Navigation"),
    ("aria_role_note", "Note"),
    ("aria_role_option", "Option"),
    ("aria_role_progressbar", "Progress bar"),
    ("aria_role_radio", "Radio button"),
    ("aria_role_radiogroup", "Radio button group"),
    ("aria_role_region", "Region"),
    ("aria_role_row", "Row"),
    ("aria_role_rowgroup", "Row group"),
    ("aria_role_rowheader", "Row header"),
    ("aria_role_scrollbar", "Scroll bar"),
    ("aria_role_search", "Search"),
    ("aria_role_separator", "Separator"),
    ("aria_role_slider", "Slider"),
    ("aria_role_spinbutton", "Spin button"),
    ("aria_role_status", "Status"),
    ("aria_role_tab", "Tab"),
    ("aria_role_tablist", "Tab list"),
    ("aria_role_tabpanel", "Tab panel"),
    ("aria_role_textbox", "Text box"),
    ("aria_role_timer", "Timer"),
    ("aria_role_toolbar", "Tool bar"),
    ("aria_role_tooltip", "Tool tip"),
    ("aria_role_tree", "Tree"),
    ("aria_role_treegrid", "Tree grid"),
    ("aria_role_treeitem", "Tree item"),
    // <input type>
    ("input_type_button", "Button"),
    ("input_type_checkbox", "Check box"),
    ("input_type_color", "Color picker"),
    ("input_type_date", "Date control"),
    ("input_type_datetime", "Date time control"),
    ("input_type_datetime_local", "Date time control"),
    ("input_type_email", "Edit text, email entry"),
    ("input_type_file", "File selection"),
    ("input_type_hidden", ""),
    ("input_type_image", "Button"),
    ("input_type_month", "Month control"),
    ("input_type_number", "Edit text numeric only"),
    ("input_type_password", "Password edit text"),
    ("input_type_radio", "Radio button"),
    ("input_type_range", "Slider"),
    ("input_type_reset", "Reset"),
    ("input_type_search", "Edit text, search entry"),
    ("input_type_submit", "Button"),
    ("input_type_tel", "Telephone number entry"),
    ("input_type_text", "Edit text"),
    ("input_type_time", "Time control"),
    ("input_type_url", "Edit text, URL entry"),
    ("input_type_week", "Week of the year control"),
    // 标签
    ("tag_article", "Article"),
    ("tag_aside", "Aside"),
    ("tag_audio", "Audio"),
    ("tag_button", "Button"),
    ("tag_details", "Details"),
    ("tag_dialog", "Dialog"),
    ("tag_footer", "Footer"),
    ("tag_form", "Form"),
    ("tag_h1", "Heading 1"),
    ("tag_h2", "Heading 2"),
    ("tag_h3", "Heading 3"),
    ("tag_h4", "Heading 4"),
    ("tag_h5", "Heading 5"),
    ("tag_h6", "Heading 6"),
    ("tag_h1_brief", "H1"),
    ("tag_h2_brief", "H2"),
    ("tag_h3_brief", "H3"),
    ("tag_h4_brief", "H4"),
    ("tag_h5_brief", "H5"),
    ("tag_h6_brief", "H6"),
    ("tag_header", "Header"),
    ("tag_hgroup", "Heading group"),
    ("tag_img", "Image"),
    ("tag_link", "Link"),
    ("tag_main", "Main"),
    ("tag_math", "Math"),
    ("tag_meter", "Meter"),
    ("tag_nav", "Navigation"),
    ("tag_ol", "Ordered list"),
    ("tag_progress", "Progress bar"),
    ("tag_section", "Section"),
    ("tag_select", "Combo box"),
    ("tag_summary", "Summary"),
    ("tag_table", "Table"),
    ("tag_textarea", "Text area"),
    ("tag_time", "Time"),
    ("tag_ul", "List"),
    ("tag_video", "Video"),
    // 其他角色
    ("clickable", "Clickable"),
    ("image_with_long_desc", "Image with long description"),
    ("internal_link", "Internal link"),
    ("visited_link", "Visited link"),
    // 状态
    ("access_key", "has access key, $1"),
    ("aria_checked_false", "not checked"),
    ("aria_checked_mixed", "partially checked"),
    ("aria_checked_true", "checked"),
    ("aria_disabled_true", "disabled"),
    ("aria_expanded_false", "collapsed"),
    ("aria_expanded_true", "expanded"),
    ("aria_invalid_true", "invalid input"),
    ("aria_pressed_false", "not pressed"),
    ("aria_pressed_mixed", "partially pressed"),
    ("aria_pressed_true", "pressed"),
    ("aria_required_true", "required"),
    ("aria_selected_false", "not selected"),
    ("aria_selected_true", "selected"),
    ("aria_value_now", "$1"),
    ("aria_value_text", "$1"),
    ("checkbox_checked_state", "checked"),
    ("checkbox_unchecked_state", "not checked"),
    ("list_position", "$1 of $2"),
    ("list_with_items", "with $1 items"),
    ("radio_selected_state", "selected"),
    ("radio_unselected_state", "not selected"),
    ("selected_options_state", "$1 selected"),
    ("selected_options_value", "$1 to $2"),
    ("visited_url", "visited"),
    // 名称
    ("input_hint", "$1 with hint $2"),
    ("input_reset", "Reset"),
    ("input_submit", "Submit"),
];

impl MessageCatalog for EnglishMessages {
    fn lookup(&self, key: &str) -> Option<&str> {
        ENGLISH_MESSAGES
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}
