//! Command line parser.
//!
//! Splits a raw line into a verb and its arguments. Words are separated by
//! whitespace; single and double quotes group words containing spaces, and join
//! with adjacent unquoted text.

mod lexer;

pub use lexer::Lexer;

/// A command name with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Parse one input line. Returns `None` for blank input.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let mut words = Lexer::new(input);
    let name = words.next()?;
    Some(ParsedCommand {
        name,
        args: words.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   \t "), None);
    }

    #[test]
    fn test_verb_and_args() {
        let parsed = parse_input("find f?.txt extra").unwrap();
        assert_eq!(parsed.name, "find");
        assert_eq!(parsed.args, vec!["f?.txt", "extra"]);
    }

    #[test]
    fn test_quoted_piece_stays_in_word() {
        let parsed = parse_input(r#"cd b"/d""#).unwrap();
        assert_eq!(parsed.name, "cd");
        assert_eq!(parsed.args, vec!["b/d"]);
    }

    #[test]
    fn test_verb_only() {
        let parsed = parse_input("whoami").unwrap();
        assert_eq!(parsed.name, "whoami");
        assert!(parsed.args.is_empty());
    }
}
