//! RPI command parsing

/// A single protocol line split into its command word and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    pub fn args(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// Parse an RPI command line. Blank lines and `#` comments yield `None`.
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    if input.is_empty() || input.starts_with('#') {
        return None;
    }

    let mut parts = input.split_whitespace();
    let name = parts.next()?.to_ascii_lowercase();
    let args = parts.map(str::to_string).collect();

    Some(Command { name, args })
}
