//! Named console styles for the roster shell.
//!
//! Rendering code asks for a style by what the text *is* (a label, a header,
//! an error) and never picks colors itself, so the palette lives here only.

use console::Style;
use once_cell::sync::Lazy;
use roster::api::MessageLevel;

pub struct RosterTheme {
    pub title: Style,
    pub menu_key: Style,
    pub prompt: Style,
    pub label: Style,
    pub header: Style,
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

impl RosterTheme {
    pub fn for_level(&self, level: MessageLevel) -> &Style {
        match level {
            MessageLevel::Info => &self.info,
            MessageLevel::Success => &self.success,
            MessageLevel::Warning => &self.warning,
            MessageLevel::Error => &self.error,
        }
    }
}

pub static ROSTER_THEME: Lazy<RosterTheme> = Lazy::new(|| RosterTheme {
    title: Style::new().bold().cyan(),
    menu_key: Style::new().yellow(),
    prompt: Style::new().bold(),
    label: Style::new().dim(),
    header: Style::new().bold().underlined(),
    info: Style::new().dim(),
    success: Style::new().green(),
    warning: Style::new().yellow(),
    error: Style::new().red(),
});
