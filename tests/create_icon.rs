//! Runs the `create_icon` binary in a scratch directory and inspects the PNG it leaves behind.

use image::{Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const TILE_COLOR: Rgba<u8> = Rgba([237, 194, 46, 255]);

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("icon2048_cli_{}_{}", tag, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_create_icon"))
        .current_dir(dir)
        .output()
        .expect("failed to launch create_icon")
}

fn load_icon(dir: &Path) -> RgbaImage {
    image::open(dir.join("icon.png")).unwrap().to_rgba8()
}

#[test]
fn writes_icon_and_reports_it() {
    let dir = scratch_dir("basic");
    let output = run_in(&dir);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "Icon created: icon.png");
    assert!(dir.join("icon.png").is_file());

    let icon = load_icon(&dir);
    assert_eq!(icon.dimensions(), (128, 128));
    for (x, y) in [(0, 0), (0, 127), (127, 0), (127, 127)] {
        assert_eq!(icon.get_pixel(x, y)[3], 0, "corner ({}, {})", x, y);
    }
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn label_ink_sits_on_the_tile() {
    let dir = scratch_dir("label");
    assert!(run_in(&dir).status.success());
    let icon = load_icon(&dir);

    // Whichever font was found, the label replaces some tile pixels in the middle band.
    let inked = (32..96)
        .flat_map(|y| (32..96).map(move |x| (x, y)))
        .filter(|&(x, y)| *icon.get_pixel(x, y) != TILE_COLOR)
        .count();
    assert!(inked > 20, "only {} label pixels", inked);

    // The tile still shows at the center and above and below the label.
    assert_eq!(*icon.get_pixel(64, 64), TILE_COLOR);
    assert_eq!(*icon.get_pixel(64, 28), TILE_COLOR);
    assert_eq!(*icon.get_pixel(64, 100), TILE_COLOR);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn second_run_overwrites_with_identical_output() {
    let dir = scratch_dir("rerun");
    assert!(run_in(&dir).status.success());
    let first = fs::read(dir.join("icon.png")).unwrap();

    assert!(run_in(&dir).status.success());
    let second = fs::read(dir.join("icon.png")).unwrap();
    assert_eq!(first, second);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unwritable_target_fails_without_confirmation() {
    let dir = scratch_dir("blocked");
    // A directory in the way of the output file makes the write fail.
    fs::create_dir_all(dir.join("icon.png")).unwrap();

    let output = run_in(&dir);
    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Icon created"));
    fs::remove_dir_all(&dir).unwrap();
}
