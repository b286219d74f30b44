use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use cannon_simulation::BitmapHeader;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "cannon_sim_cli_{}_{}",
        std::process::id(),
        name
    ));
    fs::create_dir_all(&dir).expect("scratch directory should be creatable");
    dir
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cannon"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_writes_bitmap() {
    let dir = scratch_dir("ok");
    let output = dir.join("shot.bmp");
    let result = run_cli(&["45", "50", output.to_str().unwrap()]);

    assert_eq!(result.status.code(), Some(0), "Command should succeed");
    let bytes = fs::read(&output).unwrap();
    let header = BitmapHeader::parse(&bytes).unwrap();
    assert_eq!((header.width, header.height), (320, 320));
    assert_eq!(bytes.len(), 54 + 320 * 320 * 3);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_cli_reads_config() {
    let dir = scratch_dir("config");
    let config = dir.join("shot.cfg");
    fs::write(&config, "resolution 64 48\npps 10\n").unwrap();
    let output = dir.join("shot.bmp");

    let result = run_cli(&[
        "-30",
        "80",
        output.to_str().unwrap(),
        config.to_str().unwrap(),
    ]);

    assert_eq!(result.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("resolution set to 64:48"));
    assert!(stderr.contains("2 missing or incorrect entries"));

    let header = BitmapHeader::parse(&fs::read(&output).unwrap()).unwrap();
    assert_eq!((header.width, header.height), (64, 48));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_cli_pad_rows() {
    let dir = scratch_dir("pad");
    let config = dir.join("odd.cfg");
    fs::write(&config, "resolution 15 10").unwrap();
    let output = dir.join("shot.bmp");

    let result = run_cli(&[
        "--pad-rows",
        "45",
        "50",
        output.to_str().unwrap(),
        config.to_str().unwrap(),
    ]);

    assert_eq!(result.status.code(), Some(0));
    assert_eq!(fs::read(&output).unwrap().len(), 54 + 48 * 10);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_cli_usage_error() {
    let result = run_cli(&["45", "50"]);
    assert_eq!(result.status.code(), Some(1));

    let result = run_cli(&["45", "50", "a.bmp", "b.cfg", "extra"]);
    assert_eq!(result.status.code(), Some(1));
}

#[test]
fn test_cli_invalid_speed() {
    let dir = scratch_dir("speed");
    let output = dir.join("shot.bmp");
    let result = run_cli(&["45", "0", output.to_str().unwrap()]);

    assert_eq!(result.status.code(), Some(4));
    assert!(!output.exists(), "no file should be created");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_cli_unwritable_output() {
    let dir = scratch_dir("unwritable");
    let output = dir.join("missing").join("shot.bmp");
    let result = run_cli(&["45", "50", output.to_str().unwrap()]);

    assert_eq!(result.status.code(), Some(3));
    assert!(!output.exists());
    fs::remove_dir_all(&dir).unwrap();
}
