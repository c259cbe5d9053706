//! E2E smoke tests for the CLI, run against the dev data directory.

mod common;

use common::{parse_json, run_cli_failure, run_cli_success};

#[test]
fn routes_list_covers_the_page_table() {
    let stdout = run_cli_success(&["routes", "list"]);
    let pages: Vec<serde_json::Value> = parse_json(&stdout);
    assert_eq!(pages.len(), 14);
    assert!(pages.iter().any(|p| p["path"] == "/journal"));
    assert!(pages.iter().any(|p| p["path"] == "/find-professional"));
}

#[test]
fn routes_resolve_rejects_unknown_paths() {
    let stdout = run_cli_success(&["routes", "resolve", "/dashboard"]);
    let page: serde_json::Value = parse_json(&stdout);
    assert_eq!(page["title"], "Dashboard");

    let (_stdout, stderr, _code) = run_cli_failure(&["routes", "resolve", "/nope"]);
    assert!(stderr.contains("no page"));
}

#[test]
fn quiz_scores_a_full_answer_set() {
    let stdout = run_cli_success(&["quiz", "answer", "--answers", "1,1,1,1,1"]);
    let outcome: serde_json::Value = parse_json(&stdout);
    assert_eq!(outcome["total_score"], 5);
    assert_eq!(outcome["profile"], "Low Stress");
}

#[test]
fn quiz_rejects_short_answer_sets() {
    let (_stdout, stderr, _code) = run_cli_failure(&["quiz", "answer", "--answers", "1,1"]);
    assert!(stderr.contains("error:"));
}

#[test]
fn resources_include_crisis_lifeline() {
    let stdout = run_cli_success(&["resources", "hotlines"]);
    let hotlines: Vec<serde_json::Value> = parse_json(&stdout);
    assert!(hotlines.iter().any(|h| h["number"] == "988"));
}

#[test]
fn directory_search_filters_by_specialty() {
    let stdout = run_cli_success(&[
        "directory",
        "search",
        "--specialty",
        "Trauma & PTSD",
    ]);
    let matches: Vec<serde_json::Value> = parse_json(&stdout);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["location"], "Los Angeles, CA");
}

#[test]
fn config_show_exposes_breathing_defaults() {
    let stdout = run_cli_success(&["config", "get", "breathing.exhale_secs"]);
    let value: serde_json::Value = parse_json(&stdout);
    assert_eq!(value, 8);
}

#[test]
fn breathe_status_reports_a_phase() {
    let stdout = run_cli_success(&["breathe", "status"]);
    let status: serde_json::Value = parse_json(&stdout);
    assert!(status["phase"].is_string());
    assert!(status["completed_cycles"].is_number());
}

// One test so the shared engine state and counter can't race under the
// parallel test harness.
#[test]
fn stop_moves_the_session_counter_iff_a_cycle_completed() {
    fn session_count() -> u64 {
        let stdout = run_cli_success(&["dashboard", "show"]);
        let summary: serde_json::Value = parse_json(&stdout);
        summary["session_count"].as_u64().unwrap()
    }

    run_cli_success(&["breathe", "reset"]);
    let before = session_count();

    // A full 4-7-8-1 cycle logs exactly one session.
    run_cli_success(&["breathe", "start"]);
    run_cli_success(&["breathe", "tick", "--seconds", "20"]);
    let stdout = run_cli_success(&["breathe", "stop"]);
    let event: serde_json::Value = parse_json(&stdout);
    assert_eq!(event["session_logged"], true);
    assert_eq!(session_count(), before + 1);

    // Stopping mid-cycle logs nothing.
    run_cli_success(&["breathe", "start"]);
    run_cli_success(&["breathe", "tick", "--seconds", "3"]);
    let stdout = run_cli_success(&["breathe", "stop"]);
    let event: serde_json::Value = parse_json(&stdout);
    assert_eq!(event["session_logged"], false);
    assert_eq!(session_count(), before + 1);
}

#[test]
fn guide_includes_grounding_steps() {
    let stdout = run_cli_success(&["breathe", "guide"]);
    let guide: serde_json::Value = parse_json(&stdout);
    let steps = guide["grounding"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0]["count"], 5);
    assert_eq!(guide["breathing"]["pattern"]["inhale_secs"], 4);
}

#[test]
fn admin_signin_rejects_a_wrong_password() {
    let (_stdout, stderr, code) = run_cli_failure(&["admin", "signin", "--password", "wrong"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("incorrect"));
}

#[test]
fn journal_list_is_valid_json() {
    let stdout = run_cli_success(&["journal", "list"]);
    let _entries: Vec<serde_json::Value> = parse_json(&stdout);
}

#[test]
fn journal_moods_lists_all_five() {
    let stdout = run_cli_success(&["journal", "moods"]);
    let moods: Vec<serde_json::Value> = parse_json(&stdout);
    assert_eq!(moods.len(), 5);
    assert!(moods.iter().any(|m| m["value"] == "terrible"));
}
