use predicates::prelude::*;
use serde_json::json;

use super::fixtures::TestEnvironment;

/// Status is non-fatal when nothing is installed.
#[test]
fn test_status_not_installed() {
    let env = TestEnvironment::new();

    env.scopilot()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not installed"));
}

/// Status is non-fatal even when the Copilot directory itself is absent.
#[test]
fn test_status_without_copilot_dir() {
    let env = TestEnvironment::without_copilot_dir();

    env.scopilot()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not installed"));
}

/// Status reports version, selection, and the configured servers.
#[test]
fn test_status_after_install() {
    let env = TestEnvironment::new();
    env.scopilot().args(["install", "--servers", "context7"]).assert().success();

    env.scopilot()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("installed: SuperClaude"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("context7"))
        .stdout(predicate::str::contains("Default agent: superclaude"));
}

/// Uninstall requires a prior install.
#[test]
fn test_uninstall_without_install() {
    let env = TestEnvironment::new();

    env.scopilot()
        .arg("uninstall")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not installed"));
}

/// Uninstall removes the marker and copied assets, but preserves MCP server
/// entries.
#[test]
fn test_uninstall_preserves_server_configs() {
    let env = TestEnvironment::new();
    env.scopilot()
        .args(["install", "--servers", "magic", "--api-key", "magic=sk-1"])
        .assert()
        .success();

    env.scopilot()
        .arg("uninstall")
        .assert()
        .success()
        .stdout(predicate::str::contains("server configurations were preserved"));

    assert!(!env.copilot_dir().join(".superclaude.json").exists());
    assert!(!env.copilot_dir().join("agents").join("superclaude.json").exists());
    assert!(!env.copilot_dir().join("prompts").join("superclaude.md").exists());

    // The entry, including the stored key, is still there for a reinstall.
    let mcp = env.read_copilot_json("mcp-config.json");
    assert_eq!(mcp["mcpServers"]["magic"]["env"]["TWENTYFIRST_API_KEY"], "sk-1");
}

/// Uninstall unsets the default agent only when it is still ours.
#[test]
fn test_uninstall_default_agent_guard() {
    let env = TestEnvironment::new();
    env.scopilot().arg("install").assert().success();

    // User switched agents after install.
    let mut settings = env.read_copilot_json("config.json");
    settings["chat.defaultAgent"] = json!("other-agent");
    env.write_copilot_json("config.json", &settings);

    env.scopilot().arg("uninstall").assert().success();

    let settings = env.read_copilot_json("config.json");
    assert_eq!(settings["chat.defaultAgent"], "other-agent");
}

/// The normal path: our default agent is unset on uninstall.
#[test]
fn test_uninstall_unsets_our_default_agent() {
    let env = TestEnvironment::new();
    env.scopilot().arg("install").assert().success();

    env.scopilot().arg("uninstall").assert().success();

    let settings = env.read_copilot_json("config.json");
    assert!(settings.get("chat.defaultAgent").is_none());
    // First-run defaults are user settings now; they stay.
    assert_eq!(settings["chat.thinkingEnabled"], true);
}

/// Install -> uninstall -> install round trip works.
#[test]
fn test_reinstall_after_uninstall() {
    let env = TestEnvironment::new();

    env.scopilot().arg("install").assert().success();
    env.scopilot().arg("uninstall").assert().success();
    env.scopilot().arg("install").assert().success();

    assert!(env.copilot_dir().join(".superclaude.json").exists());
}
