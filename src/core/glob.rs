//! Glob pattern matching for `find`.
//!
//! Supports shell-style wildcards:
//! - `*` matches zero or more characters
//! - `?` matches exactly one character
//!
//! Every other character is literal. Patterns are anchored at both ends and
//! applied to an entry's basename.

use regex::Regex;

use crate::config::SEPARATOR;
use crate::core::VirtualFs;

/// A compiled glob pattern.
#[derive(Clone, Debug)]
pub struct GlobPattern {
    source: String,
    regex: Regex,
}

impl GlobPattern {
    /// Compile a glob into an anchored regex.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&glob_to_regex(pattern))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Check whether a name matches the whole pattern.
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Full paths of every index entry whose basename matches, in index order.
    pub fn filter<'f>(&self, fs: &'f VirtualFs) -> impl Iterator<Item = &'f str> {
        fs.iter()
            .map(|(path, _)| path)
            .filter(move |path| self.is_match(basename(path)))
    }
}

/// Translate a glob into anchored regex source.
pub fn glob_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    out.push_str("^(?s:");

    let mut literal = String::new();
    for c in pattern.chars() {
        match c {
            '*' | '?' => {
                out.push_str(&regex::escape(&literal));
                literal.clear();
                out.push_str(if c == '*' { ".*" } else { "." });
            }
            _ => literal.push(c),
        }
    }
    out.push_str(&regex::escape(&literal));

    out.push_str(")$");
    out
}

/// Final segment of a canonical path.
pub fn basename(path: &str) -> &str {
    path.rsplit(SEPARATOR).next().unwrap_or(path)
}
