//! CLI integration tests
//!
//! Tests the complete CLI experience including:
//! - Help messages and examples
//! - Suggestion output in text and JSON
//! - Usage-position filtering and limits
//! - Configuration files and environment variables
//! - Error handling for bad pools

use assert_cmd::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const POOL: &str = r#"{
  "candidates": [
    { "key": "Length", "tier": "current_class",
      "symbol": { "kind": "property", "name": "Length", "container": "System.String" } },
    { "key": "LengthInBytes", "tier": "current_project",
      "symbol": { "kind": "property", "name": "LengthInBytes", "container": "Buffers.Span" } },
    { "key": "count", "tier": "local_scope",
      "symbol": { "kind": "local", "name": "count" } },
    { "key": "Counter", "tier": "current_project",
      "symbol": { "kind": "type", "name": "Counter", "namespace": "Acme", "type_kind": "class" } }
  ],
  "universe": [
    { "tier": "external_library",
      "tree": {
        "symbol": { "kind": "namespace", "path": "System" },
        "children": [
          { "symbol": { "kind": "type", "name": "String", "namespace": "System", "type_kind": "class" } },
          { "symbol": { "kind": "type", "name": "ObsoleteAttribute", "namespace": "System",
                        "type_kind": "class", "bases": ["System.Attribute"] } }
        ]
      } }
  ]
}"#;

/// Isolated working directory with a pool file and no global config
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pool.json"), POOL).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn pool(&self) -> PathBuf {
        self.path().join("pool.json")
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("hintwise").unwrap();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("HINTWISE_MAX_SUGGESTIONS")
            .env_remove("HINTWISE_PARALLEL_THRESHOLD")
            .env_remove("HINTWISE_OUTPUT")
            .env_remove("RUST_LOG");
        cmd
    }

    fn suggest(&self, query: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("suggest").arg(query).arg("--pool").arg(self.pool());
        cmd
    }
}

fn json_output(cmd: &mut Command) -> Vec<Value> {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

fn keys(suggestions: &[Value]) -> Vec<&str> {
    suggestions
        .iter()
        .map(|s| s["key"].as_str().unwrap())
        .collect()
}

// ══════════════════════════════════════════════════════════════════════════════
// HELP MESSAGE TESTS
// ══════════════════════════════════════════════════════════════════════════════

mod help_messages {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_main_help_shows_all_commands() {
        Workspace::new()
            .cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("suggest"))
            .stdout(predicate::str::contains("score"))
            .stdout(predicate::str::contains("completions"));
    }

    #[test]
    fn test_main_help_shows_examples_and_environment() {
        Workspace::new()
            .cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("EXAMPLES"))
            .stdout(predicate::str::contains("hintwise score Lenght Length"))
            .stdout(predicate::str::contains("ENVIRONMENT VARIABLES"))
            .stdout(predicate::str::contains("HINTWISE_MAX_SUGGESTIONS"))
            .stdout(predicate::str::contains("HINTWISE_NO_COLOR"));
    }

    #[test]
    fn test_suggest_help_lists_flags() {
        Workspace::new()
            .cmd()
            .args(["suggest", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--pool"))
            .stdout(predicate::str::contains("--usage"))
            .stdout(predicate::str::contains("--limit"))
            .stdout(predicate::str::contains("--json"));
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// SUGGEST TESTS
// ══════════════════════════════════════════════════════════════════════════════

mod suggest {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_output_best_first() {
        let ws = Workspace::new();
        let output = ws.suggest("Lenght").output().unwrap();
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let first = stdout.lines().next().unwrap();
        assert!(first.starts_with("did you mean 'Length'?"), "{}", first);
        assert!(stdout.contains("did you mean 'LengthInBytes'?"));
        assert!(stdout.lines().count() <= 5);
    }

    #[test]
    fn test_json_output() {
        let ws = Workspace::new();
        let suggestions = json_output(ws.suggest("Lenght").arg("--json"));

        assert_eq!(suggestions.len(), 5);
        assert_eq!(
            keys(&suggestions),
            vec!["Length", "LengthInBytes", "count", "Counter", "String"]
        );
        assert_eq!(suggestions[0]["identity_key"], "System.String.Length");
        assert_eq!(suggestions[0]["tier"], "current_class");
        assert_eq!(suggestions[0]["value"]["kind"], "property");

        let scores: Vec<f64> = suggestions
            .iter()
            .map(|s| s["final_score"].as_f64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_type_position_excludes_locals() {
        let ws = Workspace::new();
        let suggestions = json_output(ws.suggest("cont").args(["--usage", "type", "--json"]));

        assert_eq!(keys(&suggestions)[0], "Counter");
        assert!(suggestions.iter().all(|s| s["value"]["kind"] == "type"));
    }

    #[test]
    fn test_attribute_position() {
        let ws = Workspace::new();
        let suggestions =
            json_output(ws.suggest("Obsolet").args(["--usage", "attribute", "--json"]));

        assert_eq!(keys(&suggestions), vec!["ObsoleteAttribute"]);
    }

    #[test]
    fn test_query_is_excluded_from_its_own_suggestions() {
        let ws = Workspace::new();
        let suggestions = json_output(ws.suggest("count").arg("--json"));

        assert_eq!(keys(&suggestions)[0], "Counter");
        assert!(!keys(&suggestions).contains(&"count"));
    }

    #[test]
    fn test_limit_flag() {
        let ws = Workspace::new();
        ws.suggest("Lenght")
            .args(["--limit", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("'Length'"))
            .stdout(predicate::str::contains("LengthInBytes").not());
    }

    #[test]
    fn test_limit_out_of_range() {
        let ws = Workspace::new();
        ws.suggest("Lenght").args(["--limit", "0"]).assert().failure();
        ws.suggest("Lenght").args(["--limit", "51"]).assert().failure();
    }

    #[test]
    fn test_empty_query_has_no_suggestions() {
        let ws = Workspace::new();
        ws.suggest("")
            .assert()
            .success()
            .stdout(predicate::str::contains("no suggestions"));
    }

    #[test]
    fn test_nothing_above_threshold() {
        let ws = Workspace::new();
        ws.suggest("qqqqqqqq")
            .assert()
            .success()
            .stdout(predicate::str::contains("no suggestions for 'qqqqqqqq'"));
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// CONFIGURATION TESTS
// ══════════════════════════════════════════════════════════════════════════════

mod configuration {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_project_config_limits_suggestions() {
        let ws = Workspace::new();
        ws.write("hintwise.toml", "[ranking]\nmax_suggestions = 2\n");

        let suggestions = json_output(ws.suggest("Lenght").arg("--json"));
        assert_eq!(keys(&suggestions), vec!["Length", "LengthInBytes"]);
    }

    #[test]
    fn test_limit_flag_overrides_config() {
        let ws = Workspace::new();
        ws.write("hintwise.toml", "[ranking]\nmax_suggestions = 2\n");

        let suggestions = json_output(ws.suggest("Lenght").args(["--json", "--limit", "3"]));
        assert_eq!(suggestions.len(), 3);
    }

    #[test]
    fn test_env_max_suggestions() {
        let ws = Workspace::new();
        let suggestions = json_output(
            ws.suggest("Lenght")
                .arg("--json")
                .env("HINTWISE_MAX_SUGGESTIONS", "1"),
        );
        assert_eq!(keys(&suggestions), vec!["Length"]);
    }

    #[test]
    fn test_env_output_json() {
        let ws = Workspace::new();
        let suggestions = json_output(ws.suggest("Lenght").env("HINTWISE_OUTPUT", "json"));
        assert_eq!(keys(&suggestions)[0], "Length");
    }

    #[test]
    fn test_config_output_json() {
        let ws = Workspace::new();
        ws.write("hintwise.toml", "[output]\nformat = \"json\"\n");

        let suggestions = json_output(&mut ws.suggest("Lenght"));
        assert_eq!(keys(&suggestions)[0], "Length");
    }

    #[test]
    fn test_extra_well_known_from_global_config() {
        let ws = Workspace::new();
        fs::create_dir_all(ws.path().join(".hintwise")).unwrap();
        ws.write(".hintwise/config.toml", "[ranking]\nextra_well_known = [\"Counter\"]\n");

        // 'Counter' picks up the well-known bonus; the local still leads
        let suggestions = json_output(ws.suggest("cont").arg("--json"));
        assert_eq!(keys(&suggestions)[..2], ["count", "Counter"]);
        assert!(suggestions[1]["final_score"].as_f64().unwrap() > 1.2);
    }

    #[test]
    fn test_invalid_config_reported() {
        let ws = Workspace::new();
        ws.write("hintwise.toml", "[ranking]\nmax_suggestions = 0\n");

        ws.suggest("Lenght")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load configuration"));
    }

    #[test]
    fn test_invalid_env_reported() {
        let ws = Workspace::new();
        ws.suggest("Lenght")
            .env("HINTWISE_OUTPUT", "xml")
            .assert()
            .failure()
            .stderr(predicate::str::contains("HINTWISE_OUTPUT"));
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// ERROR HANDLING TESTS
// ══════════════════════════════════════════════════════════════════════════════

mod errors {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_pool_file() {
        let ws = Workspace::new();
        ws.cmd()
            .args(["suggest", "Lenght", "--pool", "missing.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read pool file"));
    }

    #[test]
    fn test_malformed_pool_file() {
        let ws = Workspace::new();
        let pool = ws.write("bad.json", "{ \"candidates\": [ ");
        ws.cmd()
            .args(["suggest", "Lenght", "--pool"])
            .arg(pool)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid pool file"));
    }

    #[test]
    fn test_unknown_tier_is_rejected() {
        let ws = Workspace::new();
        let pool = ws.write(
            "unknown.json",
            r#"{"candidates": [{"key": "Length", "tier": "unknown",
                "symbol": {"kind": "raw_name", "name": "Length"}}]}"#,
        );
        ws.cmd()
            .args(["suggest", "Lenght", "--pool"])
            .arg(pool)
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown provenance tier"));
    }

    #[test]
    fn test_unrecognized_usage() {
        let ws = Workspace::new();
        ws.suggest("Lenght")
            .args(["--usage", "statement"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unrecognized usage position"));
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// SCORE AND COMPLETIONS TESTS
// ══════════════════════════════════════════════════════════════════════════════

mod score_and_completions {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_score_text() {
        Workspace::new()
            .cmd()
            .args(["score", "Lenght", "Length"])
            .assert()
            .success()
            .stdout(predicate::str::contains("jaro-winkler     0.9667"))
            .stdout(predicate::str::contains("accepted"));
    }

    #[test]
    fn test_score_json() {
        let output = Workspace::new()
            .cmd()
            .args(["score", "getUsr", "getUserName", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let report: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["candidate"], "getUserName");
        assert_eq!(report["matched_token_pairs"], 1);
        assert_eq!(report["token_overlap"], 0.2);
        assert_eq!(report["multi_token"], 0.0);
        assert_eq!(report["accepted"], true);
        assert!((report["total"].as_f64().unwrap() - 0.9924).abs() < 1e-3);
    }

    #[test]
    fn test_completions_bash() {
        Workspace::new()
            .cmd()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("hintwise"));
    }

    #[test]
    fn test_log_level_flag_writes_to_stderr() {
        let ws = Workspace::new();
        ws.suggest("Lenght")
            .args(["--log-level", "debug"])
            .assert()
            .success()
            .stderr(predicate::str::contains("loaded candidate pool"));
    }
}
