// kosei-rules: list the loaded declarative rules.
//
// Prints one line per rule:
//   PRIORITY  NAME [CATEGORY] N patterns
//
// Usage:
//   kosei-rules [-r RULES_DIR] [--json]
//
// Options:
//   -r, --rules-dir PATH   Directory containing declarative rule files
//   --json                  Print rules as a JSON array
//   -h, --help              Print help

use std::io::{self, Write};

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rules_dir, args) = kosei_cli::parse_rules_dir(&args);

    if kosei_cli::wants_help(&args) {
        println!("kosei-rules: list the loaded declarative rules.");
        println!();
        println!("Usage: kosei-rules [-r RULES_DIR] [--json]");
        println!();
        println!("Options:");
        println!("  -r, --rules-dir PATH   Directory containing declarative rule files");
        println!("  --json                  Print rules as a JSON array");
        println!("  -h, --help              Print this help");
        return;
    }

    let as_json = args.iter().any(|a| a == "--json");

    let engine = kosei_cli::load_engine(rules_dir.as_deref())
        .unwrap_or_else(|e| kosei_cli::fatal(&e));
    let infos = engine.rule_infos();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if as_json {
        let json = serde_json::to_string_pretty(&infos)
            .unwrap_or_else(|e| kosei_cli::fatal(&format!("failed to serialize: {e}")));
        let _ = writeln!(out, "{json}");
    } else if infos.is_empty() {
        let _ = writeln!(out, "no declarative rules loaded");
    } else {
        for info in &infos {
            let _ = writeln!(
                out,
                "{}\t{} [{}] {} patterns",
                info.priority, info.name, info.category, info.pattern_count
            );
        }
    }
}
