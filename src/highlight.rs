use inksac::prelude::*;

/// Styling for the stdio front-end. Output stays plain when the terminal
/// reports no color support.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color_support: ColorSupport,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// Prompt lines in bold cyan.
    pub fn prompt(&self, text: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text.to_string();
        }

        let prompt_style = Style::builder().foreground(Color::Cyan).bold().build();
        text.style(prompt_style).to_string()
    }

    /// Failure messages in bold red.
    pub fn error(&self, text: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        text.style(error_style).to_string()
    }

    /// The welcome banner in green.
    pub fn banner(&self, text: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text.to_string();
        }

        let banner_style = Style::builder().foreground(Color::Green).build();
        text.style(banner_style).to_string()
    }
}
