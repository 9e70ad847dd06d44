use std::fmt;

/// Error codes for all recognizer diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: lex errors
/// - E1xxx: syntax errors
/// - E2xxx: value errors (token shape fine, value out of range)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lex Errors (E0xxx)
    /// Unrecognized character in input
    E0001,
    /// Unrecognized token
    E0002,

    // Syntax Errors (E1xxx)
    /// Unexpected token (wrong kind at a grammar position)
    E1001,
    /// Program must start with HI
    E1002,
    /// Program must end with BYE
    E1003,
    /// Extra tokens after BYE
    E1004,
    /// Action not valid
    E1005,

    // Value Errors (E2xxx)
    /// Coordinate letter outside A–E
    E2001,
    /// Coordinate digit outside 1–5
    E2002,
}

/// The broad error kind a code belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCategory {
    Lex,
    Syntax,
    Value,
}

impl ErrorCode {
    /// Map a code to its error kind.
    pub fn category(self) -> ErrorCategory {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 => ErrorCategory::Lex,
            ErrorCode::E1001
            | ErrorCode::E1002
            | ErrorCode::E1003
            | ErrorCode::E1004
            | ErrorCode::E1005 => ErrorCategory::Syntax,
            ErrorCode::E2001 | ErrorCode::E2002 => ErrorCategory::Value,
        }
    }

    /// The code as it appears in rendered diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Lex => write!(f, "lex error"),
            ErrorCategory::Syntax => write!(f, "syntax error"),
            ErrorCategory::Value => write!(f, "value error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_mapping() {
        assert_eq!(ErrorCode::E0001.category(), ErrorCategory::Lex);
        assert_eq!(ErrorCode::E1005.category(), ErrorCategory::Syntax);
        assert_eq!(ErrorCode::E2001.category(), ErrorCategory::Value);
        assert_eq!(ErrorCode::E2002.category(), ErrorCategory::Value);
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::E1001.to_string(), "E1001");
        assert_eq!(ErrorCategory::Value.to_string(), "value error");
    }
}
