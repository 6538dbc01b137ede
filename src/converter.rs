//! CIDR list to rule group conversion.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::cidr::parse_cidr_line;
use crate::config::ConvertConfig;
use crate::rule::Rule;
use crate::writer::{BatchWriter, ConvertSummary};
use crate::{Error, Result};

/// Convert `input_file` into numbered rule group files based on `output_file`,
/// using the default flush threshold.
pub fn convert(
    input_file: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
) -> Result<ConvertSummary> {
    convert_with(&ConvertConfig::new(
        input_file.as_ref(),
        output_file.as_ref(),
    ))
}

/// Run one conversion pass for `config`.
///
/// The whole input is read before any output is written, so a missing input
/// file never leaves files behind.
pub fn convert_with(config: &ConvertConfig) -> Result<ConvertSummary> {
    let writer = BatchWriter::from_config(config)?;

    info!(
        "Converting {:?} -> {:?} ({} rules per file)",
        config.input, config.output, config.flush_threshold
    );

    let text = fs::read_to_string(&config.input).map_err(|source| Error::InputNotFound {
        path: config.input.clone(),
        source,
    })?;

    let summary = convert_text(&text, writer)?;
    info!(
        "Converted {} rules into {} files",
        summary.rule_count,
        summary.file_count()
    );
    Ok(summary)
}

/// Convert already loaded CIDR list text through `writer`.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Empty lines are skipped. The
/// first malformed line aborts the run; files flushed before it stay on disk.
pub fn convert_text(text: &str, mut writer: BatchWriter) -> Result<ConvertSummary> {
    for (idx, line) in split_lines(text).enumerate() {
        if line.is_empty() {
            debug!("Skipping empty line {}", idx + 1);
            continue;
        }

        let entry = parse_cidr_line(line).map_err(|source| Error::Parse {
            line: idx + 1,
            source,
        })?;
        writer.push(Rule::from(entry))?;
    }

    writer.finish()
}

/// Split text into lines, accepting Unix, Windows and classic Mac endings.
///
/// A trailing line break does not produce an extra empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(pos) => {
                let line = &rest[..pos];
                let eol = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + eol..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}
