//! Terminal-related data types for output rendering.

use std::fmt;

/// Represents a single line of output in the terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLine {
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLineData {
    /// Plain text output
    Text(String),
    /// Error message
    Error(String),
}

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self { data }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn is_error(&self) -> bool {
        matches!(self.data, OutputLineData::Error(_))
    }

    /// Text content of the line, without styling.
    pub fn as_str(&self) -> &str {
        match &self.data {
            OutputLineData::Text(s) | OutputLineData::Error(s) => s,
        }
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_line_constructors() {
        assert_eq!(
            OutputLine::text("hello").data,
            OutputLineData::Text("hello".to_string())
        );
        assert_eq!(
            OutputLine::error("error").data,
            OutputLineData::Error("error".to_string())
        );
    }

    #[test]
    fn test_is_error() {
        assert!(OutputLine::error("boom").is_error());
        assert!(!OutputLine::text("fine").is_error());
    }

    #[test]
    fn test_display_strips_styling() {
        assert_eq!(OutputLine::error("boom").to_string(), "boom");
        assert_eq!(OutputLine::text("b c").to_string(), "b c");
    }
}
