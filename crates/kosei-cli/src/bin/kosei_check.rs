// kosei-check: report correction candidates for text from stdin.
//
// Reads the whole of stdin as one text and prints one line per
// correction candidate:
//   START..END  ORIGINAL -> CORRECTED  RULE [CATEGORY] DESCRIPTION (CONFIDENCE)
//
// Usage:
//   kosei-check [-r RULES_DIR] [OPTIONS]
//
// Options:
//   -r, --rules-dir PATH   Directory containing declarative rule files
//   --json                  Print candidates as a JSON array
//   --escalate              Also report the escalation flag; combined with
//                           --json the output is one object with both fields
//   -h, --help              Print help

use std::io::{self, Write};

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rules_dir, args) = kosei_cli::parse_rules_dir(&args);

    if kosei_cli::wants_help(&args) {
        println!("kosei-check: report correction candidates for text from stdin.");
        println!();
        println!("Usage: kosei-check [-r RULES_DIR] [OPTIONS]");
        println!();
        println!("Reads the whole of stdin as one text. Prints one line per candidate:");
        println!("  START..END  ORIGINAL -> CORRECTED  RULE [CATEGORY] DESCRIPTION (CONFIDENCE)");
        println!();
        println!("Options:");
        println!("  -r, --rules-dir PATH   Directory containing declarative rule files");
        println!("  --json                  Print candidates as a JSON array");
        println!("  --escalate              Also report the escalation flag (with --json,");
        println!("                          the output becomes one object holding both)");
        println!("  -h, --help              Print this help");
        return;
    }

    let as_json = args.iter().any(|a| a == "--json");
    let with_escalation = args.iter().any(|a| a == "--escalate");

    let engine = kosei_cli::load_engine(rules_dir.as_deref())
        .unwrap_or_else(|e| kosei_cli::fatal(&e));
    let text = kosei_cli::read_stdin_text().unwrap_or_else(|e| kosei_cli::fatal(&e));

    let corrections = engine.check(&text);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let escalate = with_escalation.then(|| engine.should_escalate_with(&text, &corrections));

    if as_json {
        let report = kosei_cli::check_report_json(&corrections, escalate);
        let json = serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| kosei_cli::fatal(&format!("failed to serialize: {e}")));
        let _ = writeln!(out, "{json}");
    } else {
        for c in &corrections {
            let _ = writeln!(out, "{}", kosei_cli::format_correction(c));
        }
        if let Some(flag) = escalate {
            let _ = writeln!(out, "escalate: {flag}");
        }
    }
}
