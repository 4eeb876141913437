//! Status badges and text styles.

use owo_colors::{OwoColorize, Style};

/// Leading tag of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
}

impl Badge {
    /// Bracketed tag; with unicode the word becomes a symbol.
    pub fn label(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, false) => "[OK]",
            (Self::Warn, false) => "[WARN]",
            (Self::Err, false) => "[ERR]",
            (Self::Info, false) => "[INFO]",
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Warn, true) => "[\u{26A0}]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Info, true) => "[\u{2139}]",
        }
    }

    pub fn style(self) -> Style {
        let base = Style::new().bold();
        match self {
            Self::Ok => base.green(),
            Self::Warn => base.yellow(),
            Self::Err => base.red(),
            Self::Info => base.cyan(),
        }
    }
}

pub fn title_style() -> Style {
    Style::new().bold()
}

pub fn label_style() -> Style {
    Style::new().dimmed()
}

/// `text` in `style` when color is on, untouched otherwise.
pub fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
