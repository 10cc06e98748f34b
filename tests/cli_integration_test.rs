//! Integration tests for the modmap binary.
//!
//! Each test runs the compiled binary against a small inventory export and
//! checks the command surface: formats, output files, config handling, and
//! error reporting.

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn modmap() -> Command {
    let mut cmd = Command::cargo_bin("modmap").expect("binary under test");
    cmd.env_remove("MODMAP_CONFIG");
    cmd
}

/// Two-module inventory: one hot-reloadable AI module with a route, one
/// route-less spec module
fn write_sample_inventory(dir: &Path) -> PathBuf {
    let path = dir.join("inventory.json");
    fs::write(
        &path,
        indoc! {r#"
            {
              "modules": [
                {"id": "codex.ai-analysis", "name": "AI Analysis", "features": ["AI", "Real-time"], "isHotReloadable": true},
                {"id": "codex.spec-driven", "name": "Spec Driven"}
              ],
              "routes": [
                {"id": "r1", "path": "/ai/analyze", "method": "POST", "moduleId": "codex.ai-analysis", "name": "ai-analyze"}
              ]
            }
        "#},
    )
    .expect("write inventory fixture");
    path
}

#[test]
fn init_creates_config_in_working_directory() {
    let temp = TempDir::new().unwrap();

    let output = modmap()
        .current_dir(temp.path())
        .arg("init")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created modmap.toml configuration file"));

    let written = fs::read_to_string(temp.path().join("modmap.toml")).unwrap();
    assert!(written.contains("[planner]"));
    assert!(written.contains("[cohesion]"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();

    modmap()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();

    let output = modmap()
        .current_dir(temp.path())
        .arg("init")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("already exists. Use --force to overwrite."),
        "stderr: {stderr}"
    );
}

#[test]
fn init_force_replaces_existing_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("modmap.toml"), "# stale\n").unwrap();

    modmap()
        .current_dir(temp.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join("modmap.toml")).unwrap();
    assert!(written.contains("[planner]"));
    assert!(!written.contains("# stale"));
}

#[test]
fn plan_json_reports_scored_candidates() {
    let temp = TempDir::new().unwrap();
    let inventory = write_sample_inventory(temp.path());

    let output = modmap()
        .args(["plan", inventory.to_str().unwrap(), "--format", "json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");
    assert!(json.get("generatedAt").is_some(), "missing generatedAt");
    assert!(json.get("overview").is_some(), "missing overview");
    assert!(json.get("recommendations").is_some(), "missing recommendations");
    assert_eq!(json["overview"]["totalModules"], 2);
    assert_eq!(json["totalCandidates"], 2);

    let first = &json["candidates"][0];
    assert_eq!(first["id"], "codex.ai-analysis");
    assert_eq!(first["priority"], 37);
    assert_eq!(first["strategy"], "hot-reload-ready");
    assert_eq!(first["isHotReloadable"], true);

    let indexes: Vec<u64> = json["phases"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["index"].as_u64().unwrap())
        .collect();
    assert_eq!(indexes, vec![1, 3]);
}

#[test]
fn plan_terminal_output_prints_the_report() {
    let temp = TempDir::new().unwrap();
    let inventory = write_sample_inventory(temp.path());

    let output = modmap()
        .args(["plan", inventory.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SPEC-DRIVEN MODULE CONVERSION PLAN"));
    assert!(stdout.contains("SYSTEM OVERVIEW"));
    assert!(stdout.contains("Total Modules: 2"));
    assert!(stdout.contains("Ready to begin spec-driven conversion!"));
}

#[test]
fn plan_writes_json_to_output_file() {
    let temp = TempDir::new().unwrap();
    let inventory = write_sample_inventory(temp.path());
    let out_path = temp.path().join("plan.json");

    modmap()
        .args([
            "plan",
            inventory.to_str().unwrap(),
            "--format",
            "json",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let contents = fs::read_to_string(&out_path).expect("output file was not written");
    let json: Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["candidates"].as_array().unwrap().len(), 2);
}

#[test]
fn plan_top_limits_reported_candidates() {
    let temp = TempDir::new().unwrap();
    let inventory = write_sample_inventory(temp.path());

    let output = modmap()
        .args([
            "plan",
            inventory.to_str().unwrap(),
            "--format",
            "json",
            "--top",
            "1",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let candidates = json["candidates"].as_array().unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0]["id"], "codex.ai-analysis");
    // The full count survives truncation
    assert_eq!(json["totalCandidates"], 2);
}

#[test]
fn plan_respects_config_file() {
    let temp = TempDir::new().unwrap();
    // Two spec modules, both priority 12, so a phase-3 capacity of one
    // forces the second into the catch-all phase
    let inventory = temp.path().join("inventory.json");
    fs::write(
        &inventory,
        indoc! {r#"
            {
              "modules": [
                {"id": "codex.spec-a", "name": "Spec A"},
                {"id": "codex.spec-b", "name": "Spec B"}
              ],
              "routes": []
            }
        "#},
    )
    .unwrap();
    let config_path = temp.path().join("custom.toml");
    fs::write(
        &config_path,
        indoc! {r#"
            [planner]
            phase3_capacity = 1
        "#},
    )
    .unwrap();

    let output = modmap()
        .args([
            "plan",
            inventory.to_str().unwrap(),
            "--format",
            "json",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let phases = json["phases"].as_array().unwrap();
    let modules_of = |index: u64| -> Vec<String> {
        phases
            .iter()
            .find(|p| p["index"] == index)
            .map(|p| {
                p["modules"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|m| m["id"].as_str().unwrap().to_string())
                    .collect()
            })
            .unwrap_or_default()
    };
    assert_eq!(modules_of(3), vec!["codex.spec-a".to_string()]);
    assert_eq!(modules_of(4), vec!["codex.spec-b".to_string()]);
}

#[test]
fn plan_rejects_missing_config_file() {
    let temp = TempDir::new().unwrap();
    let inventory = write_sample_inventory(temp.path());

    let output = modmap()
        .args([
            "plan",
            inventory.to_str().unwrap(),
            "--config",
            temp.path().join("absent.toml").to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"), "stderr: {stderr}");
}

#[test]
fn terminal_format_rejects_output_file() {
    let temp = TempDir::new().unwrap();
    let inventory = write_sample_inventory(temp.path());

    let output = modmap()
        .args([
            "plan",
            inventory.to_str().unwrap(),
            "--output",
            temp.path().join("plan.txt").to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("terminal format writes to stdout"),
        "stderr: {stderr}"
    );
}

#[test]
fn missing_inventory_file_is_reported() {
    let temp = TempDir::new().unwrap();

    let output = modmap()
        .args(["plan", temp.path().join("absent.json").to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Inventory unavailable"), "stderr: {stderr}");
}

#[test]
fn cohesion_terminal_prints_the_survey() {
    let temp = TempDir::new().unwrap();
    let inventory = write_sample_inventory(temp.path());

    let output = modmap()
        .args(["cohesion", inventory.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DETAILED ROUTE ANALYSIS REPORT"));
    assert!(stdout.contains("SUMMARY STATISTICS:"));
    assert!(stdout.contains("Total Routes: 1"));
}

#[test]
fn cohesion_json_has_reports_and_summary() {
    let temp = TempDir::new().unwrap();
    let inventory = write_sample_inventory(temp.path());

    let output = modmap()
        .args(["cohesion", inventory.to_str().unwrap(), "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json.get("reports").is_some());
    assert!(json.get("placements").is_some());
    assert_eq!(json["summary"]["totalRoutes"], 1);
}

#[test]
fn blueprint_json_describes_the_conversion() {
    let temp = TempDir::new().unwrap();
    let inventory = write_sample_inventory(temp.path());

    let output = modmap()
        .args([
            "blueprint",
            inventory.to_str().unwrap(),
            "--module",
            "codex.ai-analysis",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["conversionType"], "hot-reload-to-spec-driven");
    assert_eq!(json["specReference"], "codex.spec.ai-analysis");
    assert_eq!(json["hotReloadReady"], true);
    assert_eq!(json["steps"].as_array().unwrap().len(), 6);
    assert_eq!(json["routes"].as_array().unwrap().len(), 1);
}

#[test]
fn blueprint_unknown_module_fails() {
    let temp = TempDir::new().unwrap();
    let inventory = write_sample_inventory(temp.path());

    let output = modmap()
        .args([
            "blueprint",
            inventory.to_str().unwrap(),
            "-m",
            "codex.missing",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown module: codex.missing"),
        "stderr: {stderr}"
    );
}
