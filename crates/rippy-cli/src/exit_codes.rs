//! Exit codes for the rippy CLI.
//!
//! - 0: success
//! - 10-19: user/input errors, fixed by changing the invocation or the spec

/// Exit codes for rippy invocations.
///
/// These codes are a stable contract for scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// All inputs rendered.
    Clean = 0,

    /// Invalid arguments, unsupported input format or invalid table spec.
    ArgsError = 10,

    /// An input could not be read or the output could not be written.
    IoError = 12,

    /// An input was not valid JSON or TOML.
    ParseError = 13,
}

impl ExitCode {
    /// Numeric process exit status.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Get the code name as a string constant.
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::IoError => "ERR_IO",
            ExitCode::ParseError => "ERR_PARSE",
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.code())
    }
}
