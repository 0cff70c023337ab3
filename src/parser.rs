use std::collections::HashSet;

/// A submitted line split into its command name, positional arguments and
/// flag tokens. Flag tokens are kept in `args` as well so commands that pick
/// positionally (e.g. the last non-flag token) still see the original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
    pub flags: HashSet<String>,
}

impl ParsedCommand {
    pub fn has_flag(&self, short: &str, long: &str) -> bool {
        self.flags.contains(short) || self.flags.contains(long)
    }

    /// Last token that is not a flag, used as the target of `rmdir`.
    pub fn last_positional(&self) -> Option<&str> {
        self.args
            .iter()
            .rev()
            .find(|tok| !tok.starts_with('-'))
            .map(String::as_str)
    }
}

/// Split a raw line on whitespace. No quoting or escaping happens here;
/// surrounding quotes on write-content are stripped at the point of use.
pub fn parse(line: &str) -> ParsedCommand {
    let mut tokens = line.split_whitespace();
    let name = tokens.next().unwrap_or("").to_string();

    let mut args = Vec::new();
    let mut flags = HashSet::new();
    for tok in tokens {
        if tok.starts_with('-') {
            flags.insert(tok.to_string());
        }
        args.push(tok.to_string());
    }

    ParsedCommand { name, args, flags }
}
