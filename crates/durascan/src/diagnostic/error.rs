//! Assessment error types.
#![allow(unused_assignments)]

use std::io;

use miette::Diagnostic;
use thiserror::Error;

use crate::measurement::Criterion;

/// Errors that can occur while collecting readings.
#[derive(Error, Diagnostic, Debug)]
pub enum DurascanError {
    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Invalid {criterion} reading: '{input}' is not a number")]
    #[diagnostic(
        code(durascan::input::invalid_number),
        help("Enter a plain decimal number, e.g. 2.5")
    )]
    InvalidNumber {
        criterion: Criterion,
        input: String,
    },

    #[error("Input closed while waiting for the {prompt}")]
    #[diagnostic(
        code(durascan::input::closed),
        help("DuraScan is interactive. Run it in a terminal or pipe in every answer.")
    )]
    InputClosed {
        prompt: String,
    },

    // =========================================================================
    // Terminal Errors
    // =========================================================================
    #[error("Terminal I/O failed: {message}")]
    #[diagnostic(code(durascan::io::terminal))]
    Io {
        message: String,
    },
}

impl DurascanError {
    /// Creates an input-closed error for the named prompt.
    pub fn input_closed(prompt: impl Into<String>) -> Self {
        Self::InputClosed {
            prompt: prompt.into(),
        }
    }
}

impl From<io::Error> for DurascanError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}
