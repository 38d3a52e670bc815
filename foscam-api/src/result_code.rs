//! The `result` field every CGI reply carries.

use std::fmt;

/// Outcome code reported by the camera inside `<CGI_Result>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CgiResult {
    /// `0`
    Success,
    /// `-1`: malformed CGI request
    FormatError,
    /// `-2`: bad username or password
    AuthFailed,
    /// `-3`: the account lacks the privilege for this command
    AccessDenied,
    /// `-4`: the command was accepted but failed on the device
    ExecutionFailed,
    /// `-5`: the device timed out
    Timeout,
    /// `-6` and `-8`
    Reserved(i64),
    /// `-7`
    Unknown,
    /// Anything the firmware documentation does not list
    Other(i64),
}

impl CgiResult {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => CgiResult::Success,
            -1 => CgiResult::FormatError,
            -2 => CgiResult::AuthFailed,
            -3 => CgiResult::AccessDenied,
            -4 => CgiResult::ExecutionFailed,
            -5 => CgiResult::Timeout,
            -6 | -8 => CgiResult::Reserved(code),
            -7 => CgiResult::Unknown,
            other => CgiResult::Other(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            CgiResult::Success => 0,
            CgiResult::FormatError => -1,
            CgiResult::AuthFailed => -2,
            CgiResult::AccessDenied => -3,
            CgiResult::ExecutionFailed => -4,
            CgiResult::Timeout => -5,
            CgiResult::Unknown => -7,
            CgiResult::Reserved(code) | CgiResult::Other(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CgiResult::Success)
    }
}

impl fmt::Display for CgiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            CgiResult::Success => "success",
            CgiResult::FormatError => "CGI request string format error",
            CgiResult::AuthFailed => "username or password error",
            CgiResult::AccessDenied => "access denied",
            CgiResult::ExecutionFailed => "CGI execute failure",
            CgiResult::Timeout => "timeout",
            CgiResult::Reserved(_) => "reserved",
            CgiResult::Unknown => "unknown error",
            CgiResult::Other(_) => "unrecognized result",
        };
        write!(f, "{} ({})", description, self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, CgiResult::Success)]
    #[case(-1, CgiResult::FormatError)]
    #[case(-2, CgiResult::AuthFailed)]
    #[case(-3, CgiResult::AccessDenied)]
    #[case(-4, CgiResult::ExecutionFailed)]
    #[case(-5, CgiResult::Timeout)]
    #[case(-6, CgiResult::Reserved(-6))]
    #[case(-7, CgiResult::Unknown)]
    #[case(-8, CgiResult::Reserved(-8))]
    #[case(12, CgiResult::Other(12))]
    fn test_code_mapping(#[case] code: i64, #[case] expected: CgiResult) {
        let result = CgiResult::from_code(code);
        assert_eq!(result, expected);
        assert_eq!(result.code(), code);
    }

    #[test]
    fn test_only_zero_is_success() {
        assert!(CgiResult::from_code(0).is_success());
        assert!(!CgiResult::from_code(-1).is_success());
        assert!(!CgiResult::from_code(1).is_success());
    }
}
