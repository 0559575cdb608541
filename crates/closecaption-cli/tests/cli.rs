#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end tests for the `closecaption` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn write_source(dir: &Path, text: &str) -> PathBuf {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let path = dir.join("closecaption_english.txt");
    std::fs::write(&path, bytes).unwrap();
    path
}

fn closecaption() -> Command {
    let mut cmd = Command::cargo_bin("closecaption").unwrap();
    cmd.env_remove("CLOSECAPTION_BLOCK_SIZE")
        .env_remove("CLOSECAPTION_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

const SOURCE: &str = "\"lang\"\n{\n\t\"Language\" \"english\"\n\t\"Tokens\"\n{\n\
    \t\t\"Caption_001\"\t\"Hello\"\n\
    \t\t\"[english]Caption_001\"\t\"Hello\"\n\
    \t\t\"NPC_Alyx.Hey\"\t\"<clr:255,212,0>Hey, Gordon!\"\n\
    }\n}\n";

fn compiled(dir: &Path) -> PathBuf {
    let source = write_source(dir, SOURCE);
    let target = dir.join("closecaption_english.dat");
    closecaption()
        .arg("-c")
        .arg(&source)
        .arg(&target)
        .assert()
        .success();
    target
}

#[test]
fn create_writes_aligned_container() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), SOURCE);
    let target = dir.path().join("closecaption_english.dat");

    closecaption()
        .arg("--create")
        .arg(&source)
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory size:  2"))
        .stdout(predicate::str::contains("Data offset:     512"));

    let data = std::fs::read(&target).unwrap();
    assert_eq!(&data[..4], b"VCCD");
    assert_eq!(data.len(), 8704);
}

#[test]
fn summary_is_default_mode() {
    let dir = tempfile::tempdir().unwrap();
    let target = compiled(dir.path());

    closecaption()
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Version:         1"))
        .stdout(predicate::str::contains("Block size:      8192"))
        .stdout(predicate::str::contains("Hello").not());
}

#[test]
fn dir_lists_every_caption() {
    let dir = tempfile::tempdir().unwrap();
    let target = compiled(dir.path());

    closecaption()
        .arg("-d")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello"))
        .stdout(predicate::str::contains("<clr:255,212,0>Hey, Gordon!"));
}

#[test]
fn dir_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let target = compiled(dir.path());

    let output = closecaption()
        .args(["-d", "-o", "json"])
        .arg(&target)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["header"]["directory_count"], 2);
    let captions = value["captions"].as_array().unwrap();
    assert_eq!(captions.len(), 2);
    let hashes: Vec<u64> = captions
        .iter()
        .map(|c| c["hash"].as_u64().unwrap())
        .collect();
    assert!(hashes.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn format_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let target = compiled(dir.path());

    closecaption()
        .env("CLOSECAPTION_FORMAT", "json")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn lookup_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let target = compiled(dir.path());

    closecaption()
        .args(["-l", "npc_alyx.hey"])
        .arg(&target)
        .assert()
        .success()
        .stdout("<clr:255,212,0>Hey, Gordon!\n");
}

#[test]
fn lookup_missing_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let target = compiled(dir.path());

    closecaption()
        .args(["-l", "Caption_404"])
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No caption found for key 'Caption_404'"));
}

#[test]
fn small_block_size_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), SOURCE);
    let target = dir.path().join("out.dat");

    closecaption()
        .env("CLOSECAPTION_BLOCK_SIZE", "64")
        .arg("-c")
        .arg(&source)
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Blocks:          2"))
        .stdout(predicate::str::contains("Block size:      64"));
}

#[test]
fn oversized_caption_fails() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "\"Caption_001\" \"This caption is far too long\"\n");
    let target = dir.path().join("out.dat");

    closecaption()
        .args(["--block-size", "32", "-c"])
        .arg(&source)
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Caption_001"));
}

#[test]
fn missing_source_fails() {
    let dir = tempfile::tempdir().unwrap();

    closecaption()
        .arg("-c")
        .arg(dir.path().join("missing.txt"))
        .arg(dir.path().join("out.dat"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Caption source not found"));
}

#[test]
fn invalid_block_size_fails() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), SOURCE);

    closecaption()
        .args(["--block-size", "70000", "-c"])
        .arg(&source)
        .arg(dir.path().join("out.dat"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid block size 70000"));
}

#[test]
fn garbage_container_fails() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("garbage.dat");
    std::fs::write(&target, vec![0u8; 1024]).unwrap();

    closecaption().arg(&target).assert().failure();
}
