//! End-to-end tests for the `portfolio` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn portfolio() -> Command {
    cargo_bin_cmd!("portfolio")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        portfolio()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        portfolio()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_theme() {
        portfolio()
            .args(["render", "--theme", "sepia"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown theme"));
    }
}

mod render {
    use super::*;

    #[test]
    fn renders_builtin_page_to_stdout() {
        portfolio()
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("portfolio theme-dark"))
            .stdout(predicate::str::contains("https://github.com/Yashraj-sherke"));
    }

    #[test]
    fn writes_page_with_requested_state() {
        let dir = TempDir::new().expect("temp dir");
        let out = dir.path().join("dist/index.html");

        portfolio()
            .args(["render", "--theme", "light", "--section", "contact", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).expect("page written");
        assert!(html.contains("portfolio theme-light"));
        assert!(html.contains("nav-link nav-contact active"));
    }

    #[test]
    fn renders_custom_content() {
        let dir = TempDir::new().expect("temp dir");
        let content = dir.path().join("site.toml");
        std::fs::write(
            &content,
            "[profile]\nname = \"Grace Hopper\"\nshort_name = \"Grace\"\n",
        )
        .expect("write content");

        portfolio()
            .args(["render", "--content"])
            .arg(&content)
            .assert()
            .success()
            .stdout(predicate::str::contains("Grace Hopper | Portfolio"));
    }

    #[test]
    fn missing_content_file_fails() {
        portfolio()
            .args(["render", "--content", "/nonexistent/site.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("[portfolio] Error"))
            .stderr(predicate::str::contains("failed to read"));
    }
}

mod content {
    use super::*;

    #[test]
    fn exported_content_passes_check() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("site.json");

        let exported = portfolio()
            .args(["content", "--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        std::fs::write(&path, exported).expect("write export");

        portfolio()
            .arg("check")
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("3 projects"));
    }

    #[test]
    fn check_reports_invalid_links() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("site.toml");
        std::fs::write(
            &path,
            "[[projects]]\ntitle = \"Bad\"\ndescription = \"\"\nimage_url = \"\"\nlink = \"javascript:void(0)\"\n",
        )
        .expect("write content");

        portfolio()
            .arg("check")
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("unsupported scheme"));
    }
}
