//! cidr2lsrules - convert CIDR lists into Little Snitch rule group files.
//!
//! Each line of the input (`<address>/<prefix>`) becomes one high priority
//! deny rule. Rules are written in batches to numbered `.lsrules` JSON files,
//! a new file every time a batch reaches the flush threshold.
//!
//! # Quick Start
//!
//! ```ignore
//! use cidr2lsrules::{convert_with, ConvertConfig};
//!
//! let config = ConvertConfig::new("firewall.txt", "littlesnitch_rules.lsrules")
//!     .with_flush_threshold(200_000);
//! let summary = convert_with(&config)?;
//! println!("{} rules in {} files", summary.rule_count, summary.file_count());
//! ```
//!
//! # Output
//!
//! Files are named `{N}_{output file name}` with `N` starting at 1. A final
//! file is always written for the remainder, so an input whose length is a
//! multiple of the threshold ends with a file holding an empty `rules` array.
//!
//! ```text
//! {
//!   "description": "",
//!   "name": "Test",
//!   "rules": [
//!     {
//!       "action": "deny",
//!       "priority": "high",
//!       "remote-addresses": "10.0.0.0/8"
//!     }
//!   ]
//! }
//! ```

mod error;

pub mod cidr;
pub mod config;
pub mod converter;
pub mod rule;
pub mod writer;

// Re-export core types
pub use cidr::{parse_cidr_line, CidrEntry};
pub use config::ConvertConfig;
pub use error::{CidrParseError, Error, Result};
pub use rule::{Action, Priority, Rule, RuleDocument};

// Re-export conversion entry points
pub use converter::{convert, convert_text, convert_with};
pub use writer::{flush, BatchWriter, ConvertSummary};
