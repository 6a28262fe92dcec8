use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = if std::env::var_os("NO_COLOR").is_some() {
            ColorSupport::NoColor
        } else {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        };
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    pub fn highlight_command(&self, input: &str, known: bool) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let start = input.len() - input.trim_start().len();
        let end = input[start..]
            .find(char::is_whitespace)
            .map_or(input.len(), |pos| start + pos);
        if start == end {
            return input.to_string();
        }

        let command_style = if known {
            Style::builder().foreground(Color::Cyan).bold().build()
        } else {
            Style::builder().foreground(Color::Red).build()
        };

        format!(
            "{}{}{}",
            &input[..start],
            input[start..end].style(command_style),
            &input[end..]
        )
    }

    pub fn highlight_directory(&self, name: &str) -> String {
        if !self.enabled() {
            return name.to_string();
        }

        let dir_style = Style::builder().foreground(Color::Blue).bold().build();
        name.style(dir_style).to_string()
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.enabled() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();

        error.style(error_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if !self.enabled() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        hint.style(hint_style).to_string()
    }
}
