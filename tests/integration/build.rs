use predicates::prelude::*;
use serde_json::Value;
use std::fs;

use super::fixtures::TestEnvironment;

const SOURCE: &str = "---\nname: superclaude\ndescription: Orchestrator\nmodel: claude-sonnet-4\n---\n# SuperClaude\n\nOrchestrate tasks.\n";

/// Build converts a source tree into the assets layout.
#[test]
fn test_build_produces_assets_tree() {
    let env = TestEnvironment::new();
    let source = env.copilot_dir().parent().unwrap().join("framework");
    let out = env.copilot_dir().parent().unwrap().join("built");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("orchestrator.md"), SOURCE).unwrap();

    env.scopilot()
        .args(["build", "--source"])
        .arg(&source)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Built 1 agents"));

    let descriptor: Value =
        serde_json::from_str(&fs::read_to_string(out.join("agents").join("superclaude.json")).unwrap())
            .unwrap();
    assert_eq!(descriptor["description"], "Orchestrator");

    let prompt = fs::read_to_string(out.join("prompts").join("superclaude.md")).unwrap();
    assert!(prompt.starts_with("# SuperClaude"));
}

/// Build fails cleanly on a missing source directory.
#[test]
fn test_build_missing_source() {
    let env = TestEnvironment::new();

    env.scopilot()
        .args(["build", "--source", "/nonexistent-scopilot-src", "--out", "/tmp/out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("source directory not found"));
}

/// Assets produced by build are installable.
#[test]
fn test_build_then_install() {
    let env = TestEnvironment::new();
    let source = env.copilot_dir().parent().unwrap().join("framework");
    let out = env.copilot_dir().parent().unwrap().join("built");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("orchestrator.md"), SOURCE).unwrap();

    env.scopilot()
        .args(["build", "--source"])
        .arg(&source)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    env.scopilot()
        .args(["install", "--assets-dir"])
        .arg(&out)
        .assert()
        .success();

    assert!(env.copilot_dir().join("prompts").join("superclaude.md").exists());
}
