use std::path::PathBuf;
use std::process::Command;

fn get_cli_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_landrun-cli"))
}

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);
    path
}

#[test]
fn test_cli_optimize_table() {
    let output = Command::new(get_cli_binary())
        .arg("optimize")
        .arg(fixture("wind_profile.csv"))
        .args(["--flight-time", "20"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("15:14"), "Should show climb time: {}", stdout);
    assert!(stdout.contains("1.02"), "Should show best area: {}", stdout);
    assert!(stdout.contains("Best trajectory"), "Should list best path");
}

#[test]
fn test_cli_output_format_json() {
    let output = Command::new(get_cli_binary())
        .arg("optimize")
        .arg(fixture("wind_profile.csv"))
        .args(["--flight-time", "20", "--output", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Should be JSON");
    let records = json["records"].as_array().expect("records array");
    assert_eq!(records.len(), 9);
    assert_eq!(records[0]["T1"], "2:22");
    assert_eq!(records[0]["Area_km2"], 1.02);
    assert_eq!(json["candidates_evaluated"], 9);
    assert!(json["best_path"].is_array());
}

#[test]
fn test_cli_split_count_parallel_verbose() {
    let output = Command::new(get_cli_binary())
        .arg("optimize")
        .arg(fixture("wind_profile.csv"))
        .args(["--flight-time", "20", "--splits", "3", "--parallel", "--verbose", "-o", "json"])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout should stay JSON");
    assert_eq!(json["candidates_evaluated"], 3);
    assert_eq!(json["records"].as_array().expect("records array").len(), 3);
    // Even split sits in the middle of three
    assert_eq!(json["records"][0]["T1"], "2:22");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("land run"), "Verbose logs go to stderr: {}", stderr);
}

#[test]
fn test_cli_output_format_csv() {
    let output = Command::new(get_cli_binary())
        .arg("optimize")
        .arg(fixture("sounding.csv"))
        .args(["-o", "csv", "-k", "5"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "h1,Speed_h1,h2,Speed_h2,T1,T2,Climb,Area_km2");
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_cli_no_feasible_combination() {
    let output = Command::new(get_cli_binary())
        .arg("optimize")
        .arg(fixture("wind_profile.csv"))
        .args(["--flight-time", "10"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Empty result is not a failure");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No feasible altitude combination"));
}

#[test]
fn test_cli_rejects_out_of_range_climb_rate() {
    let output = Command::new(get_cli_binary())
        .arg("optimize")
        .arg(fixture("wind_profile.csv"))
        .args(["--climb-rate", "12"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Should fail with invalid climb rate");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("climb_rate_mps"), "Should name the parameter: {}", stderr);
}

#[test]
fn test_cli_missing_profile_file() {
    let output = Command::new(get_cli_binary())
        .args(["optimize", "does-not-exist.csv"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Should fail for missing file");
}

#[test]
fn test_cli_help() {
    let output = Command::new(get_cli_binary())
        .args(["--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("optimize"), "Should list optimize command");
    assert!(stdout.contains("info"), "Should list info command");
}

#[test]
fn test_cli_invalid_command() {
    let output = Command::new(get_cli_binary())
        .args(["invalid-command"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid command should fail");
}
