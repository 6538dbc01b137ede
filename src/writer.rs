//! Batch writer for numbered rule group files.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::ConvertConfig;
use crate::rule::{Rule, RuleDocument};
use crate::{Error, Result};

/// Write a batch of rules to `output_file` as a pretty-printed rule group.
///
/// The file is created or truncated. An empty batch still produces a
/// document with an empty `rules` array.
pub fn flush(rules: &[Rule], output_file: impl AsRef<Path>) -> Result<()> {
    let output_file = output_file.as_ref();
    let content = serde_json::to_string_pretty(&RuleDocument::borrowed(rules))?;

    fs::write(output_file, content).map_err(|source| Error::OutputWrite {
        path: output_file.to_path_buf(),
        source,
    })?;

    info!("Wrote {} rules to {:?}", rules.len(), output_file);
    Ok(())
}

/// Path of the `index`-th output file: `{index}_{file name}` next to `base`.
///
/// # Examples
/// ```
/// use cidr2lsrules::writer::numbered_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(numbered_path(Path::new("out.lsrules"), 1), PathBuf::from("1_out.lsrules"));
/// assert_eq!(numbered_path(Path::new("dir/out.lsrules"), 2), PathBuf::from("dir/2_out.lsrules"));
/// ```
pub fn numbered_path(base: &Path, index: usize) -> PathBuf {
    let name = base.file_name().unwrap_or(base.as_os_str());
    let mut numbered = OsString::from(format!("{}_", index));
    numbered.push(name);
    base.with_file_name(numbered)
}

/// Outcome of a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Written files in flush order
    pub files: Vec<PathBuf>,
    /// Total rules across all files
    pub rule_count: usize,
}

impl ConvertSummary {
    /// Get the number of files written.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Accumulates rules and flushes them to numbered files.
///
/// A file is written every time the batch reaches the threshold, and once
/// more by [`BatchWriter::finish`] for the remainder, even when it is empty.
pub struct BatchWriter {
    base: PathBuf,
    threshold: usize,
    /// Index of the next file to write, starting at 1
    index: usize,
    rules: Vec<Rule>,
    summary: ConvertSummary,
}

impl BatchWriter {
    /// Create a BatchWriter writing `threshold` rules per file.
    ///
    /// Returns [`Error::Config`] for a zero threshold.
    pub fn new(base: impl Into<PathBuf>, threshold: usize) -> Result<Self> {
        if threshold == 0 {
            return Err(Error::Config(
                "flush threshold must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            base: base.into(),
            threshold,
            index: 1,
            rules: Vec::new(),
            summary: ConvertSummary::default(),
        })
    }

    /// Create a BatchWriter from a validated configuration.
    pub fn from_config(config: &ConvertConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.output.clone(), config.flush_threshold)
    }

    /// Get the number of rules waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.rules.len()
    }

    /// Get the files written so far.
    pub fn written_files(&self) -> &[PathBuf] {
        &self.summary.files
    }

    /// Append a rule, flushing when the batch reaches the threshold.
    pub fn push(&mut self, rule: Rule) -> Result<()> {
        self.rules.push(rule);
        if self.rules.len() >= self.threshold {
            self.flush_batch()?;
        }
        Ok(())
    }

    /// Flush the remaining rules and return the run summary.
    pub fn finish(mut self) -> Result<ConvertSummary> {
        self.flush_batch()?;
        Ok(self.summary)
    }

    fn flush_batch(&mut self) -> Result<()> {
        let path = numbered_path(&self.base, self.index);
        debug!("Flushing batch {} ({} rules)", self.index, self.rules.len());
        flush(&self.rules, &path)?;

        self.summary.rule_count += self.rules.len();
        self.summary.files.push(path);
        self.index += 1;
        self.rules.clear();
        Ok(())
    }
}
