// kosei-fix: apply corrections to text from stdin.
//
// Reads the whole of stdin as one text, runs the proofreading engine,
// applies every candidate, and prints the corrected text.
//
// Usage:
//   kosei-fix [-r RULES_DIR]
//
// Options:
//   -r, --rules-dir PATH   Directory containing declarative rule files
//   -h, --help              Print help

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rules_dir, args) = kosei_cli::parse_rules_dir(&args);

    if kosei_cli::wants_help(&args) {
        println!("kosei-fix: apply corrections to text from stdin.");
        println!();
        println!("Usage: kosei-fix [-r RULES_DIR]");
        println!();
        println!("Reads the whole of stdin as one text and prints the corrected text.");
        println!();
        println!("Options:");
        println!("  -r, --rules-dir PATH   Directory containing declarative rule files");
        println!("  -h, --help              Print this help");
        return;
    }

    let engine = kosei_cli::load_engine(rules_dir.as_deref())
        .unwrap_or_else(|e| kosei_cli::fatal(&e));
    let text = kosei_cli::read_stdin_text().unwrap_or_else(|e| kosei_cli::fatal(&e));

    let corrections = engine.check(&text);
    let corrected = engine.apply(&text, &corrections);
    print!("{corrected}");
}
