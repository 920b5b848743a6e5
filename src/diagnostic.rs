//! Advisory messages for everything that falls back to a default
//!
//! Nothing here changes what an accessor returns. It only decides where the complaint goes

use std::{fmt, path::PathBuf};

/// Target that every diagnostic is logged under
pub const LOG_TARGET: &str = "fontprefs";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    LoadFailed { path: PathBuf, reason: String },
    FontNotFound { requested: String },
    InvalidFontSize { value: String },
    InvalidBoolean { property: String, value: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadFailed { reason, .. } => f.write_str(reason),
            Self::FontNotFound { requested } => write!(f, "cannot find font.name \"{requested}\""),
            Self::InvalidFontSize { .. } => {
                f.write_str("font.size must be an integer greater than zero")
            }
            Self::InvalidBoolean { property, .. } => {
                write!(f, "{property} must be either \"true\" or \"false\"")
            }
        }
    }
}

pub trait Diagnostics {
    fn report(&self, diagnostic: Diagnostic);
}

impl<F: Fn(Diagnostic)> Diagnostics for F {
    fn report(&self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}

/// The default sink which logs everything as a warning
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::LoadFailed { path, .. } => {
                tracing::warn!(target: LOG_TARGET, path = %path.display(), "{diagnostic}")
            }
            Diagnostic::FontNotFound { .. } => tracing::warn!(target: LOG_TARGET, "{diagnostic}"),
            Diagnostic::InvalidFontSize { value } | Diagnostic::InvalidBoolean { value, .. } => {
                tracing::warn!(target: LOG_TARGET, %value, "{diagnostic}")
            }
        }
    }
}
