//! vaxtrack error types

use crate::{ErrorCode, RecordLocation, VAX0401, VAX0402, VAX0404};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Information - informational message
    Info,
    /// Warning - suspicious data, queries still answer
    Warning,
    /// Error - the data cannot be used
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message about the loaded data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Record the diagnostic refers to, if known
    pub location: Option<RecordLocation>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, code, message)
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, code, message)
    }

    /// Create a new informational diagnostic
    pub fn info(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Info, code, message)
    }

    fn with_severity(severity: Severity, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            location: None,
            help: code.info().help.map(str::to_string),
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: RecordLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render the diagnostic for a terminal, with the severity colored
    #[cfg(feature = "colored")]
    pub fn render_colored(&self) -> String {
        use colored::Colorize;

        let severity = match self.severity {
            Severity::Error => self.severity.to_string().red().bold(),
            Severity::Warning => self.severity.to_string().yellow().bold(),
            Severity::Info => self.severity.to_string().blue().bold(),
        };
        let mut out = format!("{}[{}]: {}", severity, self.code, self.message);
        if let Some(loc) = &self.location {
            out.push_str(&format!("\n  --> {}", loc.to_string().cyan()));
        }
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  = help: {}", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}", loc)?;
        }
        Ok(())
    }
}

/// Main vaxtrack error type
#[derive(Debug, Clone, Error)]
pub enum VaxError {
    /// A source record that cannot be turned into a bottle or dose
    #[error("{code}: {message}{}", fmt_location(.location))]
    Record {
        code: ErrorCode,
        message: String,
        location: Option<RecordLocation>,
        context: Option<String>,
    },

    /// Configuration error
    #[error("{code}: {message}")]
    Config { code: ErrorCode, message: String },

    /// System error
    #[error("{code}: {message}")]
    System {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// Multiple errors collected
    #[error("Multiple errors: {}", .0.len())]
    Multiple(Vec<VaxError>),
}

fn fmt_location(location: &Option<RecordLocation>) -> String {
    location
        .as_ref()
        .map(|loc| format!(" at {}", loc))
        .unwrap_or_default()
}

impl VaxError {
    /// Create a record error
    pub fn record(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Record {
            code,
            message: message.into(),
            location: None,
            context: None,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: VAX0402,
            message: message.into(),
        }
    }

    /// Wrap an I/O error raised while reading `path`
    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        let code = if err.kind() == std::io::ErrorKind::NotFound {
            VAX0404
        } else {
            VAX0401
        };
        Self::System {
            code,
            message: format!("{}: {}", path.display(), err),
            context: None,
        }
    }

    /// Attach a record location, if this is a record error without one
    pub fn at(self, loc: RecordLocation) -> Self {
        match self {
            Self::Record {
                code,
                message,
                location: None,
                context,
            } => Self::Record {
                code,
                message,
                location: Some(loc),
                context,
            },
            other => other,
        }
    }

    /// Attach context information
    pub fn with_context(self, ctx: impl Into<String>) -> Self {
        match self {
            Self::Record {
                code,
                message,
                location,
                ..
            } => Self::Record {
                code,
                message,
                location,
                context: Some(ctx.into()),
            },
            Self::System { code, message, .. } => Self::System {
                code,
                message,
                context: Some(ctx.into()),
            },
            other => other,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Record { code, .. } => *code,
            Self::Config { code, .. } => *code,
            Self::System { code, .. } => *code,
            Self::Multiple(errors) => errors.first().map(|e| e.code()).unwrap_or(ErrorCode::new(0)),
        }
    }

    /// Get the record location if available
    pub fn location(&self) -> Option<&RecordLocation> {
        match self {
            Self::Record { location, .. } => location.as_ref(),
            _ => None,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Record {
                code,
                message,
                location,
                context,
            } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(loc) = location {
                    diag = diag.with_location(loc.clone());
                }
                if let Some(ctx) = context {
                    diag = diag.with_help(ctx.clone());
                }
                diag
            }
            Self::Config { code, message } => Diagnostic::error(*code, message.clone()),
            Self::System {
                code,
                message,
                context,
            } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(ctx) = context {
                    diag = diag.with_help(ctx.clone());
                }
                diag
            }
            Self::Multiple(errors) => match errors.first() {
                Some(first) => first.to_diagnostic(),
                None => Diagnostic::error(ErrorCode::new(0), "Unknown error"),
            },
        }
    }
}
