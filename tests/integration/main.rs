//! Integration tests for fritzctl

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn fritzctl(config: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("fritzctl");
        cmd.env_remove("FRITZ_PASSWORD")
            .env_remove("FRITZ_URL")
            .env_remove("FRITZ_USERNAME")
            .arg("--config")
            .arg(config);
        cmd
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        fritzctl(&temp.path().join("config.toml"))
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("smart-home client"));
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        fritzctl(&temp.path().join("config.toml"))
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("fritzctl"));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fritzctl(&path)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_redacts_password() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[device]\npassword = \"geheim\"\n").unwrap();

        fritzctl(&path)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[device]"))
            .stdout(predicate::str::contains("geheim").not());
    }

    #[test]
    fn config_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        fritzctl(&path).args(["config", "init"]).assert().success();
        fritzctl(&path)
            .args(["config", "init"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn config_set_persists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        fritzctl(&path)
            .args(["config", "set", "device.base_url", "http://192.168.178.1"])
            .assert()
            .success();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("http://192.168.178.1"));
    }

    #[test]
    fn invalid_config_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[device\n").unwrap();

        fritzctl(&path)
            .args(["config", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn config_init_force_replaces_broken_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[device\n").unwrap();

        fritzctl(&path)
            .args(["config", "init", "--force"])
            .assert()
            .success();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[device]"));
        fritzctl(&path).args(["config", "show"]).assert().success();
    }

    #[test]
    fn verbose_reports_missing_config() {
        let temp = TempDir::new().unwrap();
        fritzctl(&temp.path().join("config.toml"))
            .args(["-vv", "config", "path"])
            .assert()
            .success()
            .stderr(predicate::str::contains("not found, using defaults"));
    }

    #[test]
    fn temperature_without_password() {
        let temp = TempDir::new().unwrap();
        fritzctl(&temp.path().join("config.toml"))
            .args(["temperature", "087610000434"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No device password configured"))
            .stderr(predicate::str::contains("FRITZ_PASSWORD"));
    }
}
