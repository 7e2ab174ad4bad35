// src/output/mod.rs
//! Where fetched data ends up when the CLI is asked for it.
//!
//! Callers describe the destination as a [`DeliveryTarget`] value and
//! hand it to [`deliver`], the only place that performs the I/O.

mod writer;

use std::path::PathBuf;

pub use writer::deliver;

/// A single output operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryTarget {
    /// Write content to a file, creating parent directories
    WriteFile { path: PathBuf, content: String },
    /// Print to stdout
    PrintToStdout { content: String },
}

impl DeliveryTarget {
    /// A file when `path` is given, stdout otherwise.
    pub fn file_or_stdout(path: Option<PathBuf>, content: String) -> Self {
        match path {
            Some(path) => Self::WriteFile { path, content },
            None => Self::PrintToStdout { content },
        }
    }
}
