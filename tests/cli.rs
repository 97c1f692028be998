use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn chordshift() -> Command {
    let mut cmd = Command::cargo_bin("chordshift").unwrap();
    cmd.env_remove("CHORDSHIFT_SEMITONES")
        .env_remove("CHORDSHIFT_CAPO")
        .env_remove("CHORDSHIFT_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn transposes_stdin_as_html() {
    chordshift()
        .args(["--semitones", "2"])
        .write_stdin("Am F\nG  C")
        .assert()
        .success()
        .stdout(
            "<span class=\"chord\">Bm</span> <span class=\"chord\">G</span>\n\
             <span class=\"chord\">A</span>  <span class=\"chord\">D</span>",
        );
}

#[test]
fn negative_shift_plain() {
    chordshift()
        .args(["-s", "-3", "--format", "plain"])
        .write_stdin("C  G\nhello Am\n")
        .assert()
        .success()
        .stdout("A  E\nhello F#m\n");
}

#[test]
fn capo_is_subtracted() {
    chordshift()
        .args(["--capo", "2", "-f", "plain"])
        .write_stdin("G D Em C")
        .assert()
        .success()
        .stdout("F C Dm A#");
}

#[test]
fn settings_from_environment() {
    chordshift()
        .env("CHORDSHIFT_SEMITONES", "5")
        .env("CHORDSHIFT_FORMAT", "plain")
        .write_stdin("E B")
        .assert()
        .success()
        .stdout("A E");
}

#[test]
fn lists_chords() {
    chordshift()
        .args(["--list", "-s", "1"])
        .write_stdin("Intro: Am (F)\nla la C\n")
        .assert()
        .success()
        .stdout("A#m\n(F)\nC#\n");
}

#[test]
fn reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "Bb  Eb\nsing it\n").unwrap();

    chordshift()
        .arg(file.path())
        .args(["-s", "0", "-f", "plain"])
        .assert()
        .success()
        .stdout("A#  D#\nsing it\n");
}

#[test]
fn byte_order_mark_before_first_chord() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "\u{feff}Am F\n").unwrap();

    chordshift()
        .arg(file.path())
        .args(["-s", "2", "-f", "plain"])
        .assert()
        .success()
        .stdout("\u{feff}Bm G\n");
}

#[test]
fn extreme_shift_with_capo() {
    chordshift()
        .args(["--semitones=-2147483648", "--capo", "1", "-f", "plain"])
        .write_stdin("C")
        .assert()
        .success()
        .stdout("D#");
}

#[test]
fn missing_file_fails() {
    chordshift()
        .arg("/definitely/not/here.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn rejects_unknown_format() {
    chordshift()
        .args(["--format", "pdf"])
        .write_stdin("C")
        .assert()
        .failure();
}
