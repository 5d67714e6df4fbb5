// kosei-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use kosei_core::Correction;
use kosei_ja::RuleEngine;

/// Environment variable naming the declarative rules directory.
const RULES_DIR_ENV: &str = "KOSEI_RULES_DIR";

/// Default rules directory relative to the working directory.
const DEFAULT_RULES_DIR: &str = "rules";

/// Locate the declarative rules directory and create a `RuleEngine`.
///
/// Search order:
/// 1. `rules_dir` argument (if provided)
/// 2. `KOSEI_RULES_DIR` environment variable
/// 3. `./rules` in the current working directory
///
/// Directories that do not exist are skipped; when none exists the
/// engine runs with the built-in checkers only. A directory that exists
/// but fails to load (malformed YAML, invalid regex) is an error.
pub fn load_engine(rules_dir: Option<&str>) -> Result<RuleEngine, String> {
    for dir in build_search_paths(rules_dir) {
        if dir.is_dir() {
            return RuleEngine::from_rules_dir(&dir)
                .map_err(|e| format!("failed to load rules from {}: {e}", dir.display()));
        }
    }
    Ok(RuleEngine::default())
}

/// Build the list of directories to search for rule files.
fn build_search_paths(rules_dir: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = rules_dir {
        paths.push(PathBuf::from(p));
    }

    // 2. KOSEI_RULES_DIR environment variable
    if let Ok(env_path) = std::env::var(RULES_DIR_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    // 3. ./rules
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DEFAULT_RULES_DIR));
    }

    paths
}

/// Parse a `--rules-dir=PATH` or `-r PATH` argument from command line args.
///
/// Returns `(rules_dir, remaining_args)`.
pub fn parse_rules_dir(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut rules_dir = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--rules-dir=") {
            rules_dir = Some(val.to_string());
        } else if arg == "--rules-dir" || arg == "-r" {
            if i + 1 < args.len() {
                rules_dir = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (rules_dir, remaining)
}

/// Format one correction candidate as a report line:
/// `START..END  ORIGINAL -> CORRECTED  RULE [CATEGORY] DESCRIPTION (CONFIDENCE)`.
pub fn format_correction(c: &Correction) -> String {
    format!(
        "{}..{}\t{} -> {}\t{} [{}] {} ({:.2})",
        c.start_pos,
        c.end_pos,
        c.original_text,
        c.corrected_text,
        c.rule_name,
        c.category,
        c.description,
        c.confidence
    )
}

/// Build the JSON document for a check report.
///
/// Without an escalation flag the document is the bare candidate array;
/// with one it is a single object holding `corrections` and `escalate`,
/// so the output stays one parseable JSON value either way.
pub fn check_report_json(
    corrections: &[Correction],
    escalate: Option<bool>,
) -> serde_json::Value {
    let candidates =
        serde_json::to_value(corrections).expect("corrections serialize without error");
    match escalate {
        Some(flag) => serde_json::json!({
            "corrections": candidates,
            "escalate": flag,
        }),
        None => candidates,
    }
}

/// Read the whole of stdin as one text.
pub fn read_stdin_text() -> Result<String, String> {
    let mut text = String::new();
    std::io::Read::read_to_string(&mut std::io::stdin().lock(), &mut text)
        .map_err(|e| format!("error reading stdin: {e}"))?;
    Ok(text)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_equals_form() {
        let (dir, rest) = parse_rules_dir(&args(&["--rules-dir=/tmp/r", "--json"]));
        assert_eq!(dir.as_deref(), Some("/tmp/r"));
        assert_eq!(rest, args(&["--json"]));
    }

    #[test]
    fn parses_separate_value_form() {
        let (dir, rest) = parse_rules_dir(&args(&["-r", "/tmp/r", "x"]));
        assert_eq!(dir.as_deref(), Some("/tmp/r"));
        assert_eq!(rest, args(&["x"]));
    }

    #[test]
    fn no_rules_dir_flag() {
        let (dir, rest) = parse_rules_dir(&args(&["--json"]));
        assert!(dir.is_none());
        assert_eq!(rest, args(&["--json"]));
    }

    #[test]
    fn help_detection() {
        assert!(wants_help(&args(&["-h"])));
        assert!(wants_help(&args(&["--json", "--help"])));
        assert!(!wants_help(&args(&["--json"])));
    }

    #[test]
    fn missing_dir_still_yields_engine() {
        let engine = load_engine(Some("/nonexistent/kosei-rules-dir")).unwrap();
        assert!(engine.rules().is_empty());
    }

    fn sample_correction() -> Correction {
        Correction {
            original_text: "すいません".to_string(),
            corrected_text: "すみません".to_string(),
            start_pos: 0,
            end_pos: 5,
            rule_name: "敬語修正".to_string(),
            category: "grammar".to_string(),
            description: "正しい謝罪表現".to_string(),
            confidence: 0.8,
        }
    }

    #[test]
    fn report_line_format() {
        let line = format_correction(&sample_correction());
        assert_eq!(
            line,
            "0..5\tすいません -> すみません\t敬語修正 [grammar] 正しい謝罪表現 (0.80)"
        );
    }

    #[test]
    fn json_report_without_escalation_is_the_candidate_array() {
        let json = check_report_json(&[sample_correction()], None);
        assert!(json.is_array());
        assert_eq!(json[0]["rule_name"], "敬語修正");
    }

    #[test]
    fn json_report_with_escalation_is_one_object() {
        let json = check_report_json(&[sample_correction()], Some(true));
        assert!(json.is_object());
        assert_eq!(json["escalate"], true);
        assert_eq!(json["corrections"][0]["start_pos"], 0);
    }

    #[test]
    fn json_report_with_no_candidates() {
        let json = check_report_json(&[], Some(false));
        assert_eq!(json["escalate"], false);
        assert_eq!(json["corrections"].as_array().unwrap().len(), 0);
    }
}
