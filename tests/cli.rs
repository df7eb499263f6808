//! CLI integration tests for base-rc
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn base_rc() -> Command {
    let mut cmd = Command::cargo_bin("base-rc").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// A fresh scratch directory under the system temp dir.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("base-rc-cli-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    base_rc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Range-coded base-N encoder"));
}

#[test]
fn test_version() {
    base_rc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("base-rc"));
}

#[test]
fn test_config_list() {
    base_rc()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base85"))
        .stdout(predicate::str::contains("hangul"))
        .stdout(predicate::str::contains("* default dictionary"));
}

#[test]
fn test_config_list_json() {
    base_rc()
        .args(["config", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"default\": \"base85\""))
        .stdout(predicate::str::contains("\"name\": \"base58\""))
        .stdout(predicate::str::contains("\"size\": 256"));
}

#[test]
fn test_config_show() {
    base_rc()
        .args(["config", "show", "base85"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dictionary: base85"))
        .stdout(predicate::str::contains("Size: 85 characters"))
        .stdout(predicate::str::contains("Digits per byte: at most 2"));
}

#[test]
fn test_config_show_range() {
    base_rc()
        .args(["config", "show", "hangul"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: Range-based"))
        .stdout(predicate::str::contains("U+AC00"))
        .stdout(predicate::str::contains("Size: 256 characters"));
}

// ============================================================================
// Encode/Decode Round-trips
// ============================================================================

#[test]
fn test_encode_default_dictionary() {
    base_rc()
        .arg("encode")
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("yUsXPJ1\n");
}

#[test]
fn test_encode_empty_input() {
    base_rc()
        .arg("encode")
        .write_stdin("")
        .assert()
        .success()
        .stdout("#0\n");
}

#[test]
fn test_encode_named_dictionary() {
    base_rc()
        .args(["encode", "-d", "base16"])
        .write_stdin("hi")
        .assert()
        .success()
        .stdout("68690\n");

    base_rc()
        .args(["encode", "--dictionary", "base2"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("01101000011001010110110001101100011011111\n");
}

#[test]
fn test_decode_trims_newline() {
    base_rc()
        .arg("decode")
        .write_stdin("yUsXPJ1\n")
        .assert()
        .success()
        .stdout("hello");
}

#[test]
fn test_decode_with_line_breaks() {
    base_rc()
        .args(["decode", "-d", "base85"])
        .write_stdin("o3i6E)\n&j51n.\nDpKCL1\n")
        .assert()
        .success()
        .stdout("Hello, World!");
}

#[test]
fn test_roundtrip_hangul() {
    let encoded = base_rc()
        .args(["encode", "-d", "hangul"])
        .write_stdin("test data 123")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    base_rc()
        .args(["decode", "-d", "hangul"])
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("test data 123");
}

#[test]
fn test_roundtrip_binary_files() {
    let dir = scratch_dir("files");
    let input = dir.join("input.bin");
    let encoded = dir.join("encoded.txt");
    let decoded = dir.join("decoded.bin");
    let data: Vec<u8> = (0..=255).chain([0, 0, 0]).collect();
    fs::write(&input, &data).unwrap();

    base_rc()
        .args(["encode", "-d", "base58"])
        .arg(&input)
        .arg("-o")
        .arg(&encoded)
        .assert()
        .success()
        .stdout("");

    base_rc()
        .args(["decode", "-d", "base58"])
        .arg(&encoded)
        .arg("--output")
        .arg(&decoded)
        .assert()
        .success();

    assert_eq!(fs::read(&decoded).unwrap(), data);
    let _ = fs::remove_dir_all(&dir);
}

// ============================================================================
// Custom Dictionaries
// ============================================================================

#[test]
fn test_dictionaries_file() {
    let dir = scratch_dir("dictionaries");
    let file = dir.join("extra.toml");
    fs::write(
        &file,
        "[settings]\ndefault_dictionary = \"dna\"\n\n[dictionaries.dna]\nchars = \"ACGT\"\ndescription = \"Nucleotides\"\n",
    )
    .unwrap();

    let encoded = base_rc()
        .arg("--dictionaries")
        .arg(&file)
        .arg("encode")
        .write_stdin("dna")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[ACGT]+\n$").unwrap())
        .get_output()
        .stdout
        .clone();

    base_rc()
        .arg("--dictionaries")
        .arg(&file)
        .args(["decode", "-d", "dna"])
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("dna");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_whitespace_symbols_survive_decode() {
    let dir = scratch_dir("whitespace-symbols");
    let file = dir.join("spacey.toml");
    let encoded = dir.join("encoded.txt");
    let decoded = dir.join("decoded.bin");
    fs::write(&file, "[dictionaries.spacey]\nchars = \"01 \"\n").unwrap();

    base_rc()
        .arg("--dictionaries")
        .arg(&file)
        .args(["encode", "-d", "spacey", "-o"])
        .arg(&encoded)
        .write_stdin(vec![0xFF, 0x10])
        .assert()
        .success();
    assert!(fs::read_to_string(&encoded).unwrap().starts_with(' '));

    base_rc()
        .arg("--dictionaries")
        .arg(&file)
        .args(["decode", "-d", "spacey"])
        .arg(&encoded)
        .arg("-o")
        .arg(&decoded)
        .assert()
        .success();
    assert_eq!(fs::read(&decoded).unwrap(), [0xFF, 0x10]);

    // Printed output carries a newline, which is not a symbol.
    let printed = base_rc()
        .arg("--dictionaries")
        .arg(&file)
        .args(["encode", "-d", "spacey"])
        .write_stdin(vec![0xFF, 0x10])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    base_rc()
        .arg("--dictionaries")
        .arg(&file)
        .args(["decode", "-d", "spacey"])
        .write_stdin(printed)
        .assert()
        .success()
        .stdout(vec![0xFF, 0x10]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_dictionaries_file() {
    base_rc()
        .args(["--dictionaries", "/nonexistent/base-rc.toml", "config", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load dictionaries"));
}

#[test]
fn test_invalid_custom_dictionary() {
    let dir = scratch_dir("invalid");
    let file = dir.join("bad.toml");
    fs::write(&file, "[dictionaries.twice]\nchars = \"abca\"\n").unwrap();

    base_rc()
        .arg("--dictionaries")
        .arg(&file)
        .args(["encode", "-d", "twice"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dictionary 'twice'"))
        .stderr(predicate::str::contains("symbol 'a'"));

    let _ = fs::remove_dir_all(&dir);
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_invalid_dictionary() {
    base_rc()
        .args(["encode", "-d", "bas85"])
        .write_stdin("test")
        .assert()
        .failure()
        .stderr(predicate::str::contains("dictionary 'bas85' not found"))
        .stderr(predicate::str::contains("did you mean 'base85'?"));
}

#[test]
fn test_decode_invalid_character() {
    base_rc()
        .arg("decode")
        .write_stdin("yU~sXPJ1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input string"))
        .stderr(predicate::str::contains("invalid character '~' at position 2"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_decode_invalid_terminator() {
    base_rc()
        .args(["decode", "-d", "base16"])
        .write_stdin("6869f")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid terminator 'f'"));
}

#[test]
fn test_decode_empty_input() {
    base_rc()
        .arg("decode")
        .write_stdin("  \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot decode empty input"));
}

#[test]
fn test_file_not_found() {
    base_rc()
        .args(["encode", "/nonexistent/file.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn test_missing_subcommand() {
    base_rc().assert().failure();
}

// ============================================================================
// Size Limits
// ============================================================================

#[test]
fn test_max_size_flag() {
    base_rc()
        .args(["--max-size", "4", "encode"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum"));
}

#[test]
fn test_max_size_force() {
    base_rc()
        .args(["--max-size", "4", "--force", "encode"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("yUsXPJ1\n");
}

#[test]
fn test_max_size_zero_unlimited() {
    base_rc()
        .args(["--max-size", "0", "encode"])
        .write_stdin("hello")
        .assert()
        .success();
}

#[test]
fn test_max_size_file() {
    let dir = scratch_dir("max-size");
    let input = dir.join("big.bin");
    fs::write(&input, vec![7u8; 64]).unwrap();

    base_rc()
        .args(["--max-size", "16", "encode"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File size (64 bytes) exceeds limit"));

    let _ = fs::remove_dir_all(&dir);
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr() {
    base_rc()
        .args(["-vv", "encode"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("yUsXPJ1\n")
        .stderr(predicate::str::contains("encoded input"));
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    base_rc().args(["-q", "-v", "encode"]).assert().failure();
}
