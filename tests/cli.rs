use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "portal-cli";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Terminal sign-in client"))
        .stdout(contains("start"));
}

#[test]
/// Start subcommand help should list the headless flags.
fn start_help_lists_headless_flags() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start").arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("--headless"))
        .stdout(contains("--email"))
        .stdout(contains("--password"));
}

#[test]
/// The credential flags only make sense together with --headless.
fn email_flag_requires_headless() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start").arg("--email").arg("a@b.com");
    cmd.assert().failure().stderr(contains("--headless"));
}

#[test]
/// A malformed email address stops the run before anything is submitted.
fn headless_rejects_invalid_email() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start")
        .arg("--headless")
        .arg("--email")
        .arg("bad")
        .arg("--password")
        .arg("secret1");
    cmd.assert()
        .failure()
        .stdout(contains("Sign-in attempt rejected"))
        .stdout(contains("Enter a valid email address"))
        .stdout(contains("Starting headless mode").not());
}

#[test]
/// Omitted credential flags fail validation like empty form fields.
fn headless_rejects_missing_credentials() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start").arg("--headless");
    cmd.assert()
        .failure()
        .stdout(contains("Email is required"))
        .stdout(contains("Password is required"));
}

#[test]
/// A valid headless run simulates the sign-in and exits on its own.
fn headless_sign_in_completes() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start")
        .arg("--headless")
        .arg("--email")
        .arg("a@b.com")
        .arg("--password")
        .arg("secret1")
        .env("PORTAL_ENVIRONMENT", "local")
        .env("RUST_LOG", "info");
    cmd.assert()
        .success()
        .stdout(contains("Starting headless mode in the Local environment"))
        .stdout(contains("Signing in as a@b.com"))
        .stdout(contains("Sign-in simulation complete for a@b.com"))
        .stdout(contains("Portal CLI exited successfully"))
        // The submitted-values record is debug level and stays hidden
        .stdout(contains("Login data").not());
}

#[test]
/// RUST_LOG=debug surfaces the submitted-values record.
fn headless_debug_logging_prints_submitted_values() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start")
        .arg("--headless")
        .arg("--email")
        .arg("a@b.com")
        .arg("--password")
        .arg("secret1")
        .env("RUST_LOG", "debug");
    cmd.assert()
        .success()
        .stdout(contains("Login data:"))
        .stdout(contains(r#""email":"a@b.com""#));
}

#[test]
/// The environment variable selects which environment the session reports.
fn headless_honors_environment_variable() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start")
        .arg("--headless")
        .arg("--email")
        .arg("a@b.com")
        .arg("--password")
        .arg("secret1")
        .env("PORTAL_ENVIRONMENT", "staging")
        .env("RUST_LOG", "info");
    cmd.assert()
        .success()
        .stdout(contains("Starting headless mode in the Staging environment"))
        .stdout(contains("staging.portal.example.com"));
}
