//! Lexer for tokenizing shell input.
//!
//! Handles:
//! - Word tokenization on whitespace
//! - Quote handling (single and double quotes)
//!
//! Quoted and unquoted pieces with no whitespace between them form a single
//! word, so `b"/d"` and `'b'/d` both lex to `b/d`.

// =============================================================================
// Lexer
// =============================================================================

/// Lexer for tokenizing shell input into words
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() {
            let c = self.current_char();
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn current_char(&self) -> char {
        self.input[self.pos..].chars().next().unwrap_or('\0')
    }

    /// Read one word, stopping at unquoted whitespace.
    fn next_word(&mut self) -> String {
        let mut word = String::new();

        while self.pos < self.input.len() {
            match self.current_char() {
                c if c.is_whitespace() => break,
                '"' => self.read_double_quoted(&mut word),
                '\'' => self.read_single_quoted(&mut word),
                c => {
                    word.push(c);
                    self.pos += c.len_utf8();
                }
            }
        }

        word
    }

    fn read_double_quoted(&mut self, word: &mut String) {
        self.pos += 1; // skip opening "

        while self.pos < self.input.len() {
            let c = self.current_char();
            self.pos += c.len_utf8();

            if c == '"' {
                return;
            } else if c == '\\' && self.pos < self.input.len() {
                let escaped = self.current_char();
                self.pos += escaped.len_utf8();
                match escaped {
                    '"' | '\\' => word.push(escaped),
                    // Keep unknown escapes so Windows-style paths survive.
                    _ => {
                        word.push('\\');
                        word.push(escaped);
                    }
                }
            } else {
                word.push(c);
            }
        }
    }

    fn read_single_quoted(&mut self, word: &mut String) {
        self.pos += 1; // skip opening '
        let start = self.pos;

        while self.pos < self.input.len() {
            let c = self.current_char();
            if c == '\'' {
                word.push_str(&self.input[start..self.pos]);
                self.pos += 1;
                return;
            }
            self.pos += c.len_utf8();
        }

        // Unclosed quote, keep what we have
        word.push_str(&self.input[start..]);
    }
}

impl Iterator for Lexer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        if self.pos >= self.input.len() {
            return None;
        }
        Some(self.next_word())
    }
}

// =============================================================================
// Tests
// =============================================================================
