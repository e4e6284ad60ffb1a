use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run `nexa` from an empty directory so no local or user config is picked up
fn nexa(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nexa").unwrap();
    cmd.current_dir(workdir.path())
        .env("XDG_CONFIG_HOME", workdir.path())
        .env("NO_COLOR", "1")
        .env_remove("NEXA_NOTIFICATION_MS")
        .env_remove("NEXA_INSTANT_DEMOS")
        .env_remove("NEXA_COUNTER_EASING");
    cmd
}

#[test]
fn test_demos_lists_every_demo() {
    let workdir = TempDir::new().unwrap();
    nexa(&workdir)
        .arg("demos")
        .assert()
        .success()
        .stdout(predicate::str::contains("job-package"))
        .stdout(predicate::str::contains("compliance"))
        .stdout(predicate::str::contains("crew-scheduling"))
        .stdout(predicate::str::contains("underground-design"))
        .stdout(predicate::str::contains("supply-chain"));
}

#[test]
fn test_demo_walkthrough_with_restart() {
    let workdir = TempDir::new().unwrap();
    nexa(&workdir)
        .args(["--instant", "demo", "job-package", "--restart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 4/4"))
        .stdout(predicate::str::contains("#restart-jp-demo"))
        .stdout(predicate::str::contains("restart"));
}

#[test]
fn test_instant_mode_from_environment() {
    let workdir = TempDir::new().unwrap();
    nexa(&workdir)
        .env("NEXA_INSTANT_DEMOS", "1")
        .args(["demos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("delays: 0ms, 0ms"))
        .stdout(predicate::str::contains("1500ms").not());
}

#[test]
fn test_unknown_demo_fails() {
    let workdir = TempDir::new().unwrap();
    nexa(&workdir)
        .args(["--instant", "demo", "payroll"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("payroll"));
}

#[test]
fn test_pillars_lists_in_page_order() {
    let workdir = TempDir::new().unwrap();
    nexa(&workdir)
        .arg("pillars")
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)core.*storm.*grid.*supply.*field.*design.*insights.*vault").unwrap());
}

#[test]
fn test_pillar_overlay() {
    let workdir = TempDir::new().unwrap();
    nexa(&workdir)
        .args(["pillar", "vault"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NEXA Vault"))
        .stdout(predicate::str::contains("Ransomware Risk"))
        .stdout(predicate::str::contains("Security Features"));
}

#[test]
fn test_unknown_pillar_fails() {
    let workdir = TempDir::new().unwrap();
    nexa(&workdir)
        .args(["pillar", "weather"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown pillar: weather"));
}

#[test]
fn test_pillar_demo_button_runs_supply_chain() {
    let workdir = TempDir::new().unwrap();
    nexa(&workdir)
        .args(["--instant", "pillar", "supply", "--launch-demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(overlay closed)"))
        .stdout(predicate::str::contains("#restart-supply-demo"));
}

#[test]
fn test_contact_success() {
    let workdir = TempDir::new().unwrap();
    nexa(&workdir)
        .args([
            "contact",
            "--name",
            "Ann",
            "--email",
            "ann@example.com",
            "--message",
            "Hi",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Thank you for your message! We will get back to you soon.",
        ))
        .stdout(predicate::str::contains("ann@example.com"));
}

#[test]
fn test_contact_missing_fields() {
    let workdir = TempDir::new().unwrap();
    nexa(&workdir)
        .args(["contact", "--email", "ann@example.com"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Please fill in all required fields"));
}

#[test]
fn test_contact_invalid_email() {
    let workdir = TempDir::new().unwrap();
    nexa(&workdir)
        .args([
            "contact",
            "--name",
            "Ann",
            "--email",
            "not-an-email",
            "--message",
            "Hi",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Please enter a valid email address"));
}

#[test]
fn test_count_reaches_target() {
    let workdir = TempDir::new().unwrap();
    nexa(&workdir)
        .args(["--instant", "count", "500+"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\r500\n"));
}

#[test]
fn test_invalid_config_file_fails() {
    let workdir = TempDir::new().unwrap();
    std::fs::write(workdir.path().join("nexa.json"), "{ not json").unwrap();
    nexa(&workdir)
        .arg("demos")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
