//! Removal of terminal escape sequences and prompt noise from captured output.

use once_cell::sync::Lazy;
use regex::Regex;

/// Single-character escapes (`ESC @` .. `ESC _`) and CSI sequences.
static ANSI_ESCAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").expect("escape pattern is valid")
});

/// Prompt prefixes dropped when no others are configured.
///
/// These do not match the GS1900 prompt (`GS1900#`); see
/// [`Sanitizer::with_prompt_markers`].
pub const DEFAULT_PROMPT_MARKERS: [&str; 2] = ["Switch>", "Switch#"];

/// Cleans a raw capture into line-oriented text.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    prompt_markers: Vec<String>,
}

impl Sanitizer {
    /// Create a sanitizer with the default prompt markers.
    pub fn new() -> Self {
        Self::with_prompt_markers(DEFAULT_PROMPT_MARKERS)
    }

    /// Create a sanitizer that drops lines starting with any of `markers`.
    pub fn with_prompt_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompt_markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
        }
    }

    /// The prompt markers in effect.
    pub fn prompt_markers(&self) -> &[String] {
        &self.prompt_markers
    }

    /// Strip escape sequences, blank lines and prompt lines.
    ///
    /// Surviving lines keep their original content and relative order and
    /// are joined with `\n`.
    pub fn sanitize(&self, raw: &str) -> String {
        let stripped = strip_escapes(raw);
        stripped
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !self.is_prompt(trimmed)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn is_prompt(&self, trimmed: &str) -> bool {
        self.prompt_markers
            .iter()
            .any(|marker| trimmed.starts_with(marker.as_str()))
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove terminal escape sequences only.
pub fn strip_escapes(raw: &str) -> std::borrow::Cow<'_, str> {
    ANSI_ESCAPE.replace_all(raw, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_colors_and_default_prompts() {
        let raw = "\x1b[31mHello\x1b[0m\nSwitch> show version\nVersion 1.2.3\n";
        let cleaned = Sanitizer::new().sanitize(raw);
        assert!(cleaned.contains("Hello"));
        assert!(cleaned.contains("Version 1.2.3"));
        assert!(!cleaned.contains("Switch>"));
        assert_eq!(cleaned, "Hello\nVersion 1.2.3");
    }

    #[test]
    fn test_drops_blank_and_whitespace_lines() {
        let cleaned = Sanitizer::new().sanitize("\r\n   \r\nline one\r\n\t\nline two\r\n");
        assert_eq!(cleaned, "line one\nline two");
    }

    #[test]
    fn test_keeps_device_prompt_by_default() {
        let cleaned = Sanitizer::new().sanitize("Boot Version : V2.00\r\nGS1900# ");
        assert_eq!(cleaned, "Boot Version : V2.00\nGS1900# ");
    }

    #[test]
    fn test_custom_prompt_markers() {
        let sanitizer = Sanitizer::with_prompt_markers(["GS1900#"]);
        let cleaned = sanitizer.sanitize("  GS1900# show vlan\r\nrow\r\nGS1900# ");
        assert_eq!(cleaned, "row");
    }

    #[test]
    fn test_empty_markers_are_ignored() {
        let sanitizer = Sanitizer::with_prompt_markers([""]);
        assert!(sanitizer.prompt_markers().is_empty());
        assert_eq!(sanitizer.sanitize("kept\n"), "kept");
    }

    #[test]
    fn test_single_character_escapes() {
        // ESC M (reverse index) plus two CSI forms
        assert_eq!(strip_escapes("a\x1bMb\x1b[2Kc\x1b[?25hd"), "abcd");
    }

    #[test]
    fn test_indented_lines_keep_indentation() {
        let cleaned =
            Sanitizer::new().sanitize("GigabitEthernet1 is up\n  Hardware is Gigabit Ethernet\n");
        assert_eq!(cleaned, "GigabitEthernet1 is up\n  Hardware is Gigabit Ethernet");
    }
}
