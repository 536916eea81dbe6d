//! Localized interface text

use crate::config::Language;

/// Every piece of user-visible text on the form
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    pub title: &'static str,
    pub project_label: &'static str,
    pub project_hint: &'static str,
    pub component_label: &'static str,
    pub component_hint: &'static str,
    pub save_as: &'static str,
    pub time_word: &'static str,
    pub start_button: &'static str,
    pub stop_button: &'static str,
    pub ready: &'static str,
    pub missing_project: &'static str,
    pub missing_component: &'static str,
    pub recording: &'static str,
    pub saved: &'static str,
    pub usage_title: &'static str,
    pub usage_steps: [&'static str; 3],
    pub status_title: &'static str,
    pub help_title: &'static str,
    pub help_heading: &'static str,
    pub help_close: &'static str,
    /// (key, action) rows of the help popup
    pub shortcuts: [(&'static str, &'static str); 6],
    /// Help bar words for Tab, F5, F1 and Esc
    pub bar_next: &'static str,
    pub bar_record: &'static str,
    pub bar_help: &'static str,
    pub bar_quit: &'static str,
}

const EN: Strings = Strings {
    title: "Site Recording Manager",
    project_label: "Project name:",
    project_hint: "Enter the project name",
    component_label: "Component name:",
    component_hint: "Enter the component name",
    save_as: "File will be saved as: ",
    time_word: "time",
    start_button: "Start recording",
    stop_button: "Stop recording",
    ready: "Ready. Fill in the project and component names",
    missing_project: "Error: please fill in the project name",
    missing_component: "Error: please fill in the component name",
    recording: "Recording...",
    saved: "Saved to the recordings folder",
    usage_title: "How to use:",
    usage_steps: [
        "1. Fill in the project and component names",
        "2. Press the button to start recording",
        "3. Press it again to stop",
    ],
    status_title: " Status ",
    help_title: " Help ",
    help_heading: "Form Shortcuts",
    help_close: "Press any key to close",
    shortcuts: [
        ("Tab/↓", "Next field"),
        ("S-Tab/↑", "Previous field"),
        ("Enter", "Toggle recording (on button)"),
        ("F5", "Toggle recording"),
        ("F1", "Show this help"),
        ("Esc", "Quit application"),
    ],
    bar_next: "Next",
    bar_record: "Record",
    bar_help: "Help",
    bar_quit: "Quit",
};

const ZH: Strings = Strings {
    title: "工程录音管理",
    project_label: "项目名称:",
    project_hint: "请输入项目名称",
    component_label: "构件名称:",
    component_hint: "请输入构件名称",
    save_as: "文件将保存为: ",
    time_word: "时间",
    start_button: "开始录音",
    stop_button: "停止录音",
    ready: "准备就绪，请填写项目名称和构件名称",
    missing_project: "错误: 请填写项目名称",
    missing_component: "错误: 请填写构件名称",
    recording: "录音中...",
    saved: "已保存到录音文件夹",
    usage_title: "使用方法:",
    usage_steps: [
        "1. 填写项目名称和构件名称",
        "2. 点击按钮开始录音",
        "3. 再次点击停止录音",
    ],
    status_title: " 状态 ",
    help_title: " 帮助 ",
    help_heading: "表单快捷键",
    help_close: "按任意键关闭",
    shortcuts: [
        ("Tab/↓", "下一项"),
        ("S-Tab/↑", "上一项"),
        ("Enter", "开始/停止录音（按钮上）"),
        ("F5", "开始/停止录音"),
        ("F1", "显示帮助"),
        ("Esc", "退出程序"),
    ],
    bar_next: "下一项",
    bar_record: "录音",
    bar_help: "帮助",
    bar_quit: "退出",
};

impl Strings {
    pub fn for_language(language: Language) -> &'static Strings {
        match language {
            Language::En => &EN,
            Language::Zh => &ZH,
        }
    }
}
