//! Centralized error handling for wordhop
//! Defines the error kinds navigation and segmentation can produce

use std::fmt;

/// Category of a navigation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A position outside the document's line/column bounds was passed in.
    /// Integration bug: propagated to the caller, never silently clamped.
    OutOfRange,
    /// No segmentation oracle has been configured
    NoOracleConfigured,
    /// The configured oracle failed to initialize or execute
    SegmentationUnavailable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "OutOfRange"),
            Self::NoOracleConfigured => write!(f, "NoOracleConfigured"),
            Self::SegmentationUnavailable => write!(f, "SegmentationUnavailable"),
        }
    }
}

/// A structured error in wordhop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavError {
    /// What kind of error occurred
    pub kind: ErrorKind,
    /// Human-readable description
    pub message: String,
}

impl NavError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        NavError {
            kind,
            message: message.into(),
        }
    }

    /// Position outside the document bounds
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OutOfRange, message)
    }

    /// `segment` was called before any oracle was configured
    pub fn no_oracle() -> Self {
        Self::new(
            ErrorKind::NoOracleConfigured,
            "no segmentation oracle configured",
        )
    }

    /// The active oracle failed
    pub fn segmentation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SegmentationUnavailable, message)
    }

    /// Recoverable errors degrade a CJK fallback to "no match" so that
    /// delimited-script navigation keeps working; the rest fail the call.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::NoOracleConfigured | ErrorKind::SegmentationUnavailable
        )
    }
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for NavError {}

/// Result alias for wordhop operations
pub type Result<T> = std::result::Result<T, NavError>;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
