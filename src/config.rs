//! Conversion configuration.

use std::path::PathBuf;

use crate::{Error, Result};

/// Input file read when no path is given.
pub const DEFAULT_INPUT_FILE: &str = "firewall.txt";

/// Base name of the numbered output files.
pub const DEFAULT_OUTPUT_FILE: &str = "littlesnitch_rules.lsrules";

/// Number of rules per output file.
pub const DEFAULT_FLUSH_THRESHOLD: usize = 200_000;

/// `name` field of every written rule group.
pub const DOCUMENT_NAME: &str = "Test";

/// `description` field of every written rule group.
pub const DOCUMENT_DESCRIPTION: &str = "";

/// Configuration for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Newline-delimited CIDR list
    pub input: PathBuf,
    /// Base output path; files are written as `{N}_{file name}`
    pub output: PathBuf,
    /// Rules per output file
    pub flush_threshold: usize,
}

impl ConvertConfig {
    /// Create a ConvertConfig with the default flush threshold.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            flush_threshold: DEFAULT_FLUSH_THRESHOLD,
        }
    }

    /// Set the number of rules per output file.
    pub fn with_flush_threshold(mut self, flush_threshold: usize) -> Self {
        self.flush_threshold = flush_threshold;
        self
    }

    /// Check the configuration before any file is touched.
    pub fn validate(&self) -> Result<()> {
        if self.flush_threshold == 0 {
            return Err(Error::Config(
                "flush threshold must be greater than zero".to_string(),
            ));
        }
        if self.output.file_name().is_none() {
            return Err(Error::Config(format!(
                "output path {:?} has no file name",
                self.output
            )));
        }
        Ok(())
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE)
    }
}
