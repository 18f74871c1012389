use crate::config::DisplayConfig;

/// Box-drawing characters for borders, separators and markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub horizontal: &'static str,
    pub double_horizontal: &'static str,
    pub vertical: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub selector: &'static str,
    pub check: &'static str,
    pub close: &'static str,
    pub arrow: &'static str,
    pub placeholder: &'static str,
}

impl BoxChars {
    pub const fn unicode() -> Self {
        Self {
            horizontal: "─",
            double_horizontal: "═",
            vertical: "│",
            top_left: "╭",
            top_right: "╮",
            bottom_left: "╰",
            bottom_right: "╯",
            selector: "►",
            check: "✓",
            close: "✕",
            arrow: "→",
            placeholder: "—",
        }
    }

    pub const fn ascii() -> Self {
        Self {
            horizontal: "-",
            double_horizontal: "=",
            vertical: "|",
            top_left: "+",
            top_right: "+",
            bottom_left: "+",
            bottom_right: "+",
            selector: ">",
            check: "*",
            close: "x",
            arrow: "->",
            placeholder: "-",
        }
    }

    pub const fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
///
/// # Returns
/// A formatted string with the header text and underline separator matching the text length
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let chars = display.box_chars();
    let separator_char = if double_line {
        chars.double_horizontal
    } else {
        chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_header_single_line_unicode() {
        let display = DisplayConfig { use_unicode: true, ..Default::default() };
        let result = format_header("March 2025", false, &display);
        assert_eq!(result, "March 2025\n──────────\n");
    }

    #[test]
    fn test_format_header_double_line_unicode() {
        let display = DisplayConfig { use_unicode: true, ..Default::default() };
        let result = format_header("March 2025", true, &display);
        assert_eq!(result, "March 2025\n══════════\n");
    }

    #[test]
    fn test_format_header_ascii() {
        let display = DisplayConfig { use_unicode: false, ..Default::default() };
        assert_eq!(format_header("May 2025", false, &display), "May 2025\n--------\n");
        assert_eq!(format_header("May 2025", true, &display), "May 2025\n========\n");
    }

    #[test]
    fn test_empty_header() {
        let display = DisplayConfig::default();
        let result = format_header("", false, &display);
        assert_eq!(result, "\n\n");
    }

    #[test]
    fn test_from_use_unicode() {
        assert_eq!(BoxChars::from_use_unicode(true), BoxChars::unicode());
        assert_eq!(BoxChars::from_use_unicode(false).selector, ">");
    }
}
