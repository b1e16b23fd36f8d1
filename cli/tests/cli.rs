//! End-to-end tests of the `mesa-explorer-tools` binary.
//!
//! ## Exit Codes
//! - 0: Success
//! - 1: Any error (missing input, unset MESA_DIR, unreadable page)

use std::fs;
use std::path::Path;

use anyhow::Result;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const PROFILE_LIST: &str = "\
!# Structure
   zone ! numbers start with 1 at the surface
   !logR_cm ! log10 radius in cm
!--------------------------------------------
   mass
   center_lg_T
";

const PAGE: &str = "<head>\n\
\t<!-- <script src=\"/js/color-modes.js\"></script> -->\n\
\t<script src=\"/mesa-explorer/js/color-modes.js\"></script>\n\
</head>\n\
<body>\n\
\t\t<!-- <script src=\"/js/mesa-explorer.js\"></script> -->\n\
\t\t<script src=\"/mesa-explorer/js/mesa-explorer.js\"></script>\n\
</body>\n";

/// Tool command with a clean environment and custom working directory.
fn tools_command(cwd: &Path) -> Result<assert_cmd::Command> {
    let mut cmd = assert_cmd::Command::cargo_bin("mesa-explorer-tools")?;
    cmd.env_remove("MESA_DIR");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(cwd);
    Ok(cmd)
}

fn write_mesa_tree(root: &Path) -> std::io::Result<()> {
    let defaults = root.join("star").join("defaults");
    fs::create_dir_all(&defaults)?;
    fs::write(defaults.join("profile_columns.list"), PROFILE_LIST)
}

#[test]
fn gen_columns_reads_mesa_dir_from_env() -> Result<()> {
    let mesa = TempDir::new()?;
    let site = TempDir::new()?;
    write_mesa_tree(mesa.path())?;

    tools_command(site.path())?
        .arg("gen-columns")
        .env("MESA_DIR", mesa.path())
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(site.path().join("profile_columns.csv"))?,
        "key,scale,html_name,html_units\n\
         zone,linear,,\n\
         logR_cm,log,,\n\
         mass,linear,,\n\
         center_lg_T,log,,\n"
    );
    Ok(())
}

#[test]
fn gen_columns_honours_input_and_output_flags() -> Result<()> {
    let site = TempDir::new()?;
    fs::write(site.path().join("mine.list"), "lgL\nage\n")?;

    tools_command(site.path())?
        .args(["gen-columns", "--input", "mine.list", "--output", "out.csv"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(site.path().join("out.csv"))?,
        "key,scale,html_name,html_units\nlgL,log,,\nage,linear,,\n"
    );
    Ok(())
}

#[test]
fn gen_columns_without_mesa_dir_fails() -> Result<()> {
    let site = TempDir::new()?;

    tools_command(site.path())?
        .arg("gen-columns")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("MESA_DIR"));

    assert!(!site.path().join("profile_columns.csv").exists());
    Ok(())
}

#[test]
fn gen_columns_with_missing_list_fails() -> Result<()> {
    let mesa = TempDir::new()?;
    let site = TempDir::new()?;

    tools_command(site.path())?
        .arg("gen-columns")
        .env("MESA_DIR", mesa.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile_columns.list"));
    Ok(())
}

#[test]
fn switch_round_trip_through_the_binary() -> Result<()> {
    let site = TempDir::new()?;
    let index = site.path().join("index.html");
    fs::write(&index, PAGE)?;

    tools_command(site.path())?
        .arg("mode")
        .assert()
        .success()
        .stdout("production\n");

    tools_command(site.path())?
        .arg("switch-to-dev")
        .assert()
        .success()
        .stdout("Switched to development mode. Development scripts are now active.\n");

    let dev = fs::read_to_string(&index)?;
    assert!(dev.contains("\t\t<script src=\"/js/mesa-explorer.js\"></script>\n"));
    assert!(dev.contains("\t<script src=\"/js/color-modes.js\"></script>\n"));

    tools_command(site.path())?
        .arg("mode")
        .assert()
        .success()
        .stdout("development\n");

    tools_command(site.path())?
        .arg("switch-to-prod")
        .assert()
        .success()
        .stdout("Switched to production mode. Production scripts are now active.\n");

    assert_eq!(fs::read_to_string(&index)?, PAGE);
    Ok(())
}

#[test]
fn switch_without_page_fails() -> Result<()> {
    let site = TempDir::new()?;

    tools_command(site.path())?
        .arg("switch-to-dev")
        .assert()
        .failure()
        .stderr(predicate::str::contains("index.html"));
    Ok(())
}

#[test]
fn mode_reports_mixed_pages() -> Result<()> {
    let site = TempDir::new()?;
    fs::write(site.path().join("page.html"), "<html></html>\n")?;

    tools_command(site.path())?
        .args(["mode", "--index", "page.html"])
        .assert()
        .success()
        .stdout("mixed\n");
    Ok(())
}

#[test]
fn verbose_flag_logs_debug_to_stderr() -> Result<()> {
    let mesa = TempDir::new()?;
    let site = TempDir::new()?;
    write_mesa_tree(mesa.path())?;

    tools_command(site.path())?
        .args(["-v", "gen-columns"])
        .env("MESA_DIR", mesa.path())
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("reading profile list"));

    tools_command(site.path())?
        .arg("gen-columns")
        .env("MESA_DIR", mesa.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("reading profile list").not());
    Ok(())
}

#[test]
fn rust_log_overrides_verbose_flag() -> Result<()> {
    let mesa = TempDir::new()?;
    let site = TempDir::new()?;
    write_mesa_tree(mesa.path())?;

    tools_command(site.path())?
        .args(["gen-columns", "--verbose"])
        .env("MESA_DIR", mesa.path())
        .env("RUST_LOG", "error")
        .assert()
        .success()
        .stderr(predicate::str::contains("reading profile list").not());
    Ok(())
}
