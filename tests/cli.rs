//! Command line tests.

use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn fail_missing_source_document() -> Result<()> {
    let dir = assert_fs::TempDir::new()?;

    Command::cargo_bin("patine")?
        .args(["build"])
        .current_dir(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("index.html"));

    Ok(())
}

#[test]
fn fail_config_file_not_found() -> Result<()> {
    let dir = assert_fs::TempDir::new()?;

    Command::cargo_bin("patine")?
        .args(["build", "--config", "not_found.toml"])
        .current_dir(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading configuration"));

    Ok(())
}

#[test]
fn fail_invalid_mangle_property() -> Result<()> {
    let dir = assert_fs::TempDir::new()?;
    dir.child("patine.toml").write_str(concat!(
        "[mangle]\n",
        "properties = [\"not a name\"]\n",
    ))?;
    dir.child("index.html").write_str("<html></html>")?;

    Command::cargo_bin("patine")?
        .args(["build"])
        .current_dir(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a name"));

    Ok(())
}

#[test]
fn input_and_output_flags_override_the_defaults() -> Result<()> {
    let dir = assert_fs::TempDir::new()?;
    dir.child("page.html")
        .write_str("<html>\n<p>flagged</p>\n</html>")?;

    Command::cargo_bin("patine")?
        .args(["build", "--input", "page.html", "--output", "built.html"])
        .current_dir(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("built.html"));

    dir.child("built.html")
        .assert(predicate::path::is_file())
        .assert(predicate::str::contains("<html><p>flagged</p></html>"));

    Ok(())
}

#[test]
fn report_runs_over_flagged_paths() -> Result<()> {
    let dir = assert_fs::TempDir::new()?;
    dir.child("empty.html").write_str("")?;

    Command::cargo_bin("patine")?
        .args(["report", "--input", "empty.html"])
        .current_dir(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("raw:    0 B (0.00 KB)"));

    Ok(())
}
