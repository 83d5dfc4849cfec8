// Tests for the xcfgc binary
//
//  Copyright (C) 2026 The xcfg Authors.
//
//  This file is part of xcfg.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const SRC: &str = r#"<config>
  /+ limits +/
  <constant name="x">10</constant>
  <dictionary name="myDict">
    <item key="a">100</item>
    <item key="b">200</item>
  </dictionary>
  <value>@[+ x 2 pow(2)]</value>
</config>
"#;

const EXPECTED: &str = "<# limits #>\n\
                        x is 10.0\n\
                        { myDict = {\n  a = 100.0,\n  b = 200.0,\n}}\n\
                        144.0\n";

#[test]
fn help_prints_usage() -> TestResult {
    let mut cmd = Command::cargo_bin("xcfgc")?;
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--input"));

    Ok(())
}

#[test]
fn invalid_argument() -> TestResult {
    let mut cmd = Command::cargo_bin("xcfgc")?;
    cmd.arg("-q");
    cmd.assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("Unrecognized option:"));

    Ok(())
}

#[test]
fn missing_output_path() -> TestResult {
    let mut cmd = Command::cargo_bin("xcfgc")?;
    cmd.assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("OUTPUT"));

    Ok(())
}

#[test]
fn translates_input_file() -> TestResult {
    let dir = TempDir::new()?;
    let input = dir.path().join("src.xml");
    let output = dir.path().join("out.conf");
    fs::write(&input, SRC)?;

    let mut cmd = Command::cargo_bin("xcfgc")?;
    cmd.arg("--input").arg(&input).arg(&output);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&output)?, EXPECTED);

    Ok(())
}

#[test]
fn reads_input_xml_from_working_directory_by_default() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("input.xml"), SRC)?;

    let mut cmd = Command::cargo_bin("xcfgc")?;
    cmd.current_dir(dir.path()).arg("out.conf");
    cmd.assert().success();

    assert_eq!(fs::read_to_string(dir.path().join("out.conf"))?, EXPECTED);

    Ok(())
}

#[test]
fn reads_stdin() -> TestResult {
    let dir = TempDir::new()?;
    let output = dir.path().join("out.conf");

    let mut cmd = Command::cargo_bin("xcfgc")?;
    cmd.arg("-i").arg("-").arg(&output).write_stdin(SRC);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&output)?, EXPECTED);

    Ok(())
}

#[test]
fn invalid_name_fails_without_output() -> TestResult {
    let dir = TempDir::new()?;
    let output = dir.path().join("out.conf");

    let mut cmd = Command::cargo_bin("xcfgc")?;
    cmd.arg("-i")
        .arg("-")
        .arg(&output)
        .write_stdin(r#"<config><constant name="123">10</constant></config>"#);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid constant name `123`"));

    assert!(!output.exists());

    Ok(())
}

#[test]
fn malformed_markup_fails() -> TestResult {
    let dir = TempDir::new()?;

    let mut cmd = Command::cargo_bin("xcfgc")?;
    cmd.arg("-i")
        .arg("-")
        .arg(dir.path().join("out.conf"))
        .write_stdin("<config><constant name=\"x\">1</config>");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("parse error"));

    Ok(())
}

#[test]
fn input_file_does_not_exist() -> TestResult {
    let dir = TempDir::new()?;

    let mut cmd = Command::cargo_bin("xcfgc")?;
    cmd.current_dir(dir.path()).arg("out.conf");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("input.xml"));

    Ok(())
}

#[test]
fn verbose_logs_to_stderr() -> TestResult {
    let dir = TempDir::new()?;

    let mut cmd = Command::cargo_bin("xcfgc")?;
    cmd.arg("-v")
        .arg("-i")
        .arg("-")
        .arg(dir.path().join("out.conf"))
        .write_stdin(SRC);
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("analyzed declarations"));

    Ok(())
}
