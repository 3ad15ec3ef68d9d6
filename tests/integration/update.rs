use predicates::prelude::*;
use serde_json::json;

use super::fixtures::TestEnvironment;

/// Update requires a prior install.
#[test]
fn test_update_without_install() {
    let env = TestEnvironment::new();

    env.scopilot()
        .arg("update")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not installed"))
        .stderr(predicate::str::contains("scopilot install"));
}

/// Update reuses the selection recorded at install time.
#[test]
fn test_update_reuses_recorded_selection() {
    let env = TestEnvironment::new();
    env.scopilot()
        .args(["install", "--servers", "magic", "--api-key", "magic=sk-1"])
        .assert()
        .success();

    env.scopilot()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated SuperClaude"));

    let marker = env.read_copilot_json(".superclaude.json");
    assert_eq!(marker["servers"], json!(["magic"]));

    // Credential stored at install time survives the refresh.
    let mcp = env.read_copilot_json("mcp-config.json");
    assert_eq!(mcp["mcpServers"]["magic"]["env"]["TWENTYFIRST_API_KEY"], "sk-1");
}

/// A marker recorded against a newer registry may name servers we no longer
/// know; update tolerates them.
#[test]
fn test_update_tolerates_stale_selection() {
    let env = TestEnvironment::new();
    env.scopilot().args(["install", "--servers", "context7"]).assert().success();

    // Simulate a selection recorded by a release with a larger registry.
    let mut marker = env.read_copilot_json(".superclaude.json");
    marker["servers"] = json!(["context7", "retired-server"]);
    env.write_copilot_json(".superclaude.json", &marker);

    env.scopilot().arg("update").assert().success();

    let mcp = env.read_copilot_json("mcp-config.json");
    assert!(mcp["mcpServers"].get("retired-server").is_none());
    assert!(mcp["mcpServers"]["context7"]["command"].is_string());
}

/// --servers on update switches the recorded selection going forward, but
/// does not remove the previously configured server's entry.
#[test]
fn test_update_deselect_keeps_entry() {
    let env = TestEnvironment::new();
    env.scopilot().args(["install", "--servers", "context7,playwright"]).assert().success();

    env.scopilot().args(["update", "--servers", "context7"]).assert().success();

    let marker = env.read_copilot_json(".superclaude.json");
    assert_eq!(marker["servers"], json!(["context7"]));

    // Deselection is not removal.
    let mcp = env.read_copilot_json("mcp-config.json");
    assert!(mcp["mcpServers"]["playwright"]["command"].is_string());
}

/// Running the same update twice yields identical files.
#[test]
fn test_update_is_idempotent_on_disk() {
    let env = TestEnvironment::new();
    env.scopilot().args(["install", "--servers", "context7,serena"]).assert().success();

    env.scopilot().arg("update").assert().success();
    let mcp_once = env.read_copilot_json("mcp-config.json");
    let settings_once = env.read_copilot_json("config.json");

    env.scopilot().arg("update").assert().success();

    assert_eq!(env.read_copilot_json("mcp-config.json"), mcp_once);
    assert_eq!(env.read_copilot_json("config.json"), settings_once);
}
