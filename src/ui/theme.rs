//! Visual theme and styling.

use console::Style;

/// Upkeep's visual theme.
#[derive(Debug, Clone)]
pub struct UpkeepTheme {
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (fuchsia bold).
    pub header: Style,
    /// Style for contextual hints (fuchsia dim).
    pub hint: Style,
}

impl Default for UpkeepTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl UpkeepTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a hint line.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(msg))
    }

    /// Format a section header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format one task row, padding the name to `width`.
    pub fn format_task(&self, name: &str, description: Option<&str>, width: usize) -> String {
        match description {
            Some(desc) => format!(
                "  {}  {}",
                self.highlight.apply_to(format!("{name:<width$}")),
                self.dim.apply_to(desc)
            ),
            None => format!("  {}", self.highlight.apply_to(name)),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
