//! Integration tests for the CIDR list conversion.

use cidr2lsrules::{
    convert, convert_with, parse_cidr_line, CidrEntry, ConvertConfig, Error, RuleDocument,
};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Write `lines` to an input file inside a fresh temp dir.
fn setup(lines: &[String]) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempdir().unwrap();
    let input = dir.path().join("firewall.txt");
    let output = dir.path().join("out.lsrules");
    let mut text = lines.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    fs::write(&input, text).unwrap();
    (dir, input, output)
}

fn cidr_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{}.{}.{}.0/24", (i >> 16) & 0xff, (i >> 8) & 0xff, i & 0xff))
        .collect()
}

fn load(path: &Path) -> RuleDocument {
    RuleDocument::from_json(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_two_line_document() {
    let (dir, input, output) = setup(&["10.0.0.0/8".to_string(), "192.168.1.0/24".to_string()]);

    let summary = convert(&input, &output).unwrap();
    assert_eq!(summary.files, vec![dir.path().join("1_out.lsrules")]);

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary.files[0]).unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "description": "",
            "name": "Test",
            "rules": [
                {"action": "deny", "priority": "high", "remote-addresses": "10.0.0.0/8"},
                {"action": "deny", "priority": "high", "remote-addresses": "192.168.1.0/24"}
            ]
        })
    );
}

#[test]
fn test_empty_input() {
    let (dir, input, output) = setup(&[]);

    let summary = convert(&input, &output).unwrap();

    assert_eq!(summary.files, vec![dir.path().join("1_out.lsrules")]);
    assert!(load(&summary.files[0]).rules.is_empty());
}

#[test]
fn test_order_and_count_across_files() {
    let lines = cidr_lines(50);
    let (_dir, input, output) = setup(&lines);

    let config = ConvertConfig::new(&input, &output).with_flush_threshold(7);
    let summary = convert_with(&config).unwrap();

    // 7 full files plus the remainder of 1
    assert_eq!(summary.file_count(), 8);
    assert_eq!(summary.rule_count, 50);

    let written: Vec<String> = summary
        .files
        .iter()
        .flat_map(|p| load(p).rules)
        .map(|r| r.remote_addresses)
        .collect();
    assert_eq!(written, lines);
}

#[test]
fn test_exact_threshold_writes_empty_tail() {
    let (dir, input, output) = setup(&cidr_lines(200_000));

    let summary = convert(&input, &output).unwrap();

    assert_eq!(
        summary.files,
        vec![
            dir.path().join("1_out.lsrules"),
            dir.path().join("2_out.lsrules")
        ]
    );
    assert_eq!(load(&summary.files[0]).rules.len(), 200_000);
    assert!(load(&summary.files[1]).rules.is_empty());
}

#[test]
fn test_threshold_plus_one() {
    let (_dir, input, output) = setup(&cidr_lines(200_001));

    let summary = convert(&input, &output).unwrap();

    assert_eq!(summary.file_count(), 2);
    assert_eq!(load(&summary.files[0]).rules.len(), 200_000);
    let tail = load(&summary.files[1]);
    assert_eq!(tail.rules.len(), 1);
    assert_eq!(tail.rules[0].remote_addresses, "3.13.64.0/24");
}

#[test]
fn test_remote_addresses_roundtrip() {
    let lines: Vec<String> = ["10.0.0.0/8", "2001:db8::/32", "172.16.0.0/12"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let (_dir, input, output) = setup(&lines);

    let summary = convert(&input, &output).unwrap();
    let doc = load(&summary.files[0]);

    for (rule, line) in doc.rules.iter().zip(&lines) {
        let (address, prefix_len) = line.split_once('/').unwrap();
        assert_eq!(
            parse_cidr_line(&rule.remote_addresses).unwrap(),
            CidrEntry::new(address, prefix_len)
        );
    }
}

#[test]
fn test_missing_separator_aborts_with_partial_output() {
    let mut lines = cidr_lines(5);
    lines.push("10.0.0.0".to_string());
    lines.extend(cidr_lines(5));
    let (dir, input, output) = setup(&lines);

    let config = ConvertConfig::new(&input, &output).with_flush_threshold(2);
    let err = convert_with(&config).unwrap_err();

    assert!(matches!(err, Error::Parse { line: 6, .. }));
    // Two full batches were flushed before the bad line
    assert!(dir.path().join("1_out.lsrules").exists());
    assert!(dir.path().join("2_out.lsrules").exists());
    assert!(!dir.path().join("3_out.lsrules").exists());
}

#[test]
fn test_too_many_separators_aborts() {
    let (dir, input, output) = setup(&["10.0.0.0/8/8".to_string()]);

    let err = convert(&input, &output).unwrap_err();

    assert!(matches!(err, Error::Parse { line: 1, .. }));
    assert!(!dir.path().join("1_out.lsrules").exists());
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempdir().unwrap();

    let err = convert(dir.path().join("firewall.txt"), dir.path().join("out.lsrules"))
        .unwrap_err();

    assert!(matches!(err, Error::InputNotFound { .. }));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_existing_output_is_overwritten() {
    let (dir, input, output) = setup(&["10.0.0.0/8".to_string()]);
    fs::write(dir.path().join("1_out.lsrules"), "garbage").unwrap();

    convert(&input, &output).unwrap();

    let doc = load(&dir.path().join("1_out.lsrules"));
    assert_eq!(doc.rules.len(), 1);
}
