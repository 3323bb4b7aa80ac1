//! End-to-End CLI Tests for landing-sitegen

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the generator binary, isolated from any
/// landing.toml or RUST_LOG in the developer's environment.
fn sitegen(cwd: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("landing-sitegen");
    cmd.current_dir(cwd.path()).env_remove("RUST_LOG");
    cmd
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let temp = TempDir::new().expect("temp dir");
        sitegen(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("content"));
    }

    #[test]
    fn shows_version() {
        let temp = TempDir::new().expect("temp dir");
        sitegen(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let temp = TempDir::new().expect("temp dir");
        sitegen(&temp)
            .args(["--log-level", "bogus", "list"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("bogus"));
    }

    #[test]
    fn lists_sites_with_root_routes() {
        let temp = TempDir::new().expect("temp dir");
        sitegen(&temp)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("propertypro\tPropertyPro\t/"))
            .stdout(predicate::str::contains("dietitianlab\tDietitianLab\t/"));
    }
}

// ============================================
// Build Tests
// ============================================

mod build {
    use super::*;

    #[test]
    fn builds_every_site_by_default() {
        let temp = TempDir::new().expect("temp dir");
        sitegen(&temp)
            .args(["build", "--year", "2025"])
            .assert()
            .success()
            .stdout(predicate::str::contains("propertypro"))
            .stdout(predicate::str::contains("dietitianlab"));

        for slug in ["propertypro", "dietitianlab"] {
            let page = temp.path().join("dist").join(slug).join("index.html");
            let html = std::fs::read_to_string(&page).expect("page written");
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains("2025"));
        }
    }

    #[test]
    fn builds_selected_site_into_custom_dir() {
        let temp = TempDir::new().expect("temp dir");
        sitegen(&temp)
            .args(["build", "--site", "DietitianLab", "--out", "public"])
            .assert()
            .success();

        assert!(temp.path().join("public/dietitianlab/index.html").exists());
        assert!(!temp.path().join("public/propertypro").exists());
    }

    #[test]
    fn repeated_site_flags_build_once() {
        let temp = TempDir::new().expect("temp dir");
        let output = sitegen(&temp)
            .args(["build", "--site", "propertypro", "--site", "PropertyPro"])
            .output()
            .expect("run");
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.lines().count(), 1, "unexpected output: {stdout}");
        assert!(stdout.starts_with("propertypro\t"));
    }

    #[test]
    fn rejects_unknown_site() {
        let temp = TempDir::new().expect("temp dir");
        sitegen(&temp)
            .args(["build", "--site", "bakery"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown site 'bakery'"));
    }

    #[test]
    fn reads_landing_toml_from_working_dir() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("landing.toml"),
            "out_dir = \"site\"\nsites = [\"propertypro\"]\ncopyright_year = 2031\n",
        )
        .expect("write config");

        sitegen(&temp).arg("build").assert().success();

        let html = std::fs::read_to_string(temp.path().join("site/propertypro/index.html"))
            .expect("page written");
        assert!(html.contains("2031 PropertyPro. All rights reserved."));
        assert!(!temp.path().join("site/dietitianlab").exists());
    }

    #[test]
    fn cli_flags_override_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("landing.toml"), "copyright_year = 2031\n")
            .expect("write config");

        sitegen(&temp)
            .args(["build", "--site", "propertypro", "--year", "2040"])
            .assert()
            .success();

        let html = std::fs::read_to_string(temp.path().join("dist/propertypro/index.html"))
            .expect("page written");
        assert!(html.contains("2040 PropertyPro"));
    }

    #[test]
    fn missing_explicit_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        sitegen(&temp)
            .args(["--config", "missing.toml", "build"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("[landing-sitegen] Error"))
            .stderr(predicate::str::contains("missing.toml"));
    }

    #[test]
    fn malformed_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("landing.toml"), "sites = 42\n").expect("write config");

        sitegen(&temp)
            .arg("build")
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid config"));
    }
}

// ============================================
// Content Dump Tests
// ============================================

mod content {
    use super::*;

    #[test]
    fn dumps_site_as_json() {
        let temp = TempDir::new().expect("temp dir");
        let output = sitegen(&temp)
            .args(["content", "propertypro"])
            .output()
            .expect("run");
        assert!(output.status.success());

        let value: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("valid json");
        assert_eq!(value["brand"], "PropertyPro");
        assert_eq!(value["testimonials"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["contact"]["email"], "info@propertypro.com");
    }

    #[test]
    fn pretty_flag_indents() {
        let temp = TempDir::new().expect("temp dir");
        sitegen(&temp)
            .args(["content", "dietitianlab", "--pretty"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\n  \"brand\": \"DietitianLab\""));
    }
}
