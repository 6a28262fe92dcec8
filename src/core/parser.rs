#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    // None when the line had no separator, unlike Some("")
    pub argument: Option<String>,
}

impl ParsedCommand {
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }
}

pub fn parse_line(line: &str) -> Option<ParsedCommand> {
    let line = line.trim_start().trim_end_matches(&['\r', '\n'][..]);
    if line.trim().is_empty() {
        return None;
    }

    match line.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((pos, separator)) => Some(ParsedCommand {
            name: line[..pos].to_string(),
            argument: Some(line[pos + separator.len_utf8()..].to_string()),
        }),
        None => Some(ParsedCommand {
            name: line.to_string(),
            argument: None,
        }),
    }
}
