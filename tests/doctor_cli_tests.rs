mod common;

use common::TestEnv;

#[test]
fn doctor_subcommand_is_available() {
    let output = TestEnv::new().run(&["doctor", "--help"]);

    assert!(
        output.status.success(),
        "doctor --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn doctor_command_runs() {
    let env = TestEnv::new();
    let output = env.run(&["doctor"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "doctor should run successfully\nstdout:\n{}\nstderr:\n{}",
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("provider: desktop"));
    assert!(stdout.contains("writable"));
}

#[test]
fn doctor_json_is_parseable() {
    let env = TestEnv::new();
    let output = env.run(&["doctor", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("doctor --json should print JSON");
    assert_eq!(report["provider"], "desktop");
    assert_eq!(report["language"], "en");
    assert!(report["checks"].as_array().is_some_and(|c| !c.is_empty()));
}
