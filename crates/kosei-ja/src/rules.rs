// Declarative replacement rules.
//
// Rules come from YAML files in a rules directory and are applied by the
// engine in ascending priority order. Regex patterns are compiled at load
// time; the matchers never see a partially constructed rule. A missing
// rules directory is not an error, it simply yields an empty rule set.
//
// File schema:
//
//   rules:
//     rule_id:
//       name: 冗長表現修正
//       category: redundancy
//       priority: 1
//       patterns:
//         - pattern: まず最初に
//           replacement: 最初に
//           description: 重言の修正
//           type: literal          # or regex (default literal)
//           regex: ...            # optional override when type is regex

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use kosei_core::correction::Correction;
use kosei_core::text::{find_literal_overlapping, to_char_offset};

/// How a declarative pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    #[default]
    Literal,
    Regex,
}

/// A single pattern within a rule. For `Regex` kind, `regex` holds the
/// compiled expression (from the `regex` override when given, otherwise
/// from `pattern`).
#[derive(Debug, Clone)]
pub struct RulePattern {
    pub pattern: String,
    pub replacement: String,
    pub description: String,
    pub kind: PatternKind,
    pub regex: Option<Regex>,
    pub confidence: f64,
}

/// A named declarative rule with an ordered pattern list.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub category: String,
    pub priority: i32,
    pub patterns: Vec<RulePattern>,
}

/// Summary of a loaded rule, for rule listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInfo {
    pub name: String,
    pub category: String,
    pub priority: i32,
    pub pattern_count: usize,
}

impl Rule {
    pub fn info(&self) -> RuleInfo {
        RuleInfo {
            name: self.name.clone(),
            category: self.category.clone(),
            priority: self.priority,
            pattern_count: self.patterns.len(),
        }
    }
}

/// Loader errors. The matching core never sees these: loading happens at
/// engine construction and either yields well-formed rules or fails.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("failed to read rule file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse rule file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid regex in rule {rule}: {source}")]
    InvalidRegex { rule: String, source: regex::Error },
}

// ---------------------------------------------------------------------------
// YAML schema
// ---------------------------------------------------------------------------

// The rule mapping is kept as a raw `serde_yaml::Mapping` so rules retain
// their file order; with equal priorities the stable priority sort then
// preserves it, which matters for first-wins span dedup downstream.
#[derive(Deserialize)]
struct RuleFileDoc {
    #[serde(default)]
    rules: serde_yaml::Mapping,
}

#[derive(Deserialize)]
struct RuleDoc {
    name: String,
    category: String,
    priority: i32,
    #[serde(default)]
    patterns: Vec<PatternDoc>,
}

#[derive(Deserialize)]
struct PatternDoc {
    pattern: String,
    replacement: String,
    description: String,
    #[serde(rename = "type", default)]
    kind: PatternKind,
    #[serde(default)]
    regex: Option<String>,
    #[serde(default = "default_confidence")]
    confidence: f64,
}

fn default_confidence() -> f64 {
    1.0
}

/// Load every `*.yml` / `*.yaml` file in `dir` and return the rules
/// sorted ascending by priority. The sort is stable and rules are read
/// in file order, so rules sharing a priority keep their declaration
/// order. A nonexistent directory yields an empty rule set.
pub fn load_rules_dir(dir: &Path) -> Result<Vec<Rule>, RuleError> {
    let mut rules = Vec::new();

    if !dir.is_dir() {
        debug!(dir = %dir.display(), "rules directory not found, using built-in checkers only");
        return Ok(rules);
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|source| RuleError::Io {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            matches!(
                p.extension().and_then(|e| e.to_str()),
                Some("yml") | Some("yaml")
            )
        })
        .collect();
    paths.sort();

    for path in paths {
        let contents = std::fs::read_to_string(&path).map_err(|source| RuleError::Io {
            path: path.clone(),
            source,
        })?;
        let doc: RuleFileDoc =
            serde_yaml::from_str(&contents).map_err(|source| RuleError::Parse {
                path: path.clone(),
                source,
            })?;
        for (_, value) in doc.rules {
            let rule_doc: RuleDoc =
                serde_yaml::from_value(value).map_err(|source| RuleError::Parse {
                    path: path.clone(),
                    source,
                })?;
            rules.push(build_rule(rule_doc)?);
        }
    }

    rules.sort_by_key(|r| r.priority);
    debug!(count = rules.len(), "loaded declarative rules");
    Ok(rules)
}

fn build_rule(doc: RuleDoc) -> Result<Rule, RuleError> {
    let mut patterns = Vec::with_capacity(doc.patterns.len());
    for p in doc.patterns {
        let regex = match p.kind {
            PatternKind::Literal => None,
            PatternKind::Regex => {
                let expr = p.regex.as_deref().unwrap_or(&p.pattern);
                Some(Regex::new(expr).map_err(|source| RuleError::InvalidRegex {
                    rule: doc.name.clone(),
                    source,
                })?)
            }
        };
        patterns.push(RulePattern {
            pattern: p.pattern,
            replacement: p.replacement,
            description: p.description,
            kind: p.kind,
            regex,
            confidence: p.confidence,
        });
    }
    Ok(Rule {
        name: doc.name,
        category: doc.category,
        priority: doc.priority,
        patterns,
    })
}

/// Apply a single rule to `text`.
///
/// Literal patterns restart the scan one character past each match start,
/// so overlapping occurrences all fire; the spans differ, so downstream
/// exact-span dedup keeps them all. Regex patterns produce one candidate
/// per non-overlapping match, using the matched text as `original_text`.
pub fn apply_rule(text: &str, rule: &Rule) -> Vec<Correction> {
    let mut corrections = Vec::new();

    for pattern in &rule.patterns {
        match pattern.kind {
            PatternKind::Literal => {
                for (start, end) in find_literal_overlapping(text, &pattern.pattern) {
                    corrections.push(Correction {
                        original_text: pattern.pattern.clone(),
                        corrected_text: pattern.replacement.clone(),
                        start_pos: start,
                        end_pos: end,
                        rule_name: rule.name.clone(),
                        category: rule.category.clone(),
                        description: pattern.description.clone(),
                        confidence: pattern.confidence,
                    });
                }
            }
            PatternKind::Regex => {
                let Some(regex) = &pattern.regex else {
                    continue;
                };
                for m in regex.find_iter(text) {
                    corrections.push(Correction {
                        original_text: m.as_str().to_string(),
                        corrected_text: pattern.replacement.clone(),
                        start_pos: to_char_offset(text, m.start()),
                        end_pos: to_char_offset(text, m.end()),
                        rule_name: rule.name.clone(),
                        category: rule.category.clone(),
                        description: pattern.description.clone(),
                        confidence: pattern.confidence,
                    });
                }
            }
        }
    }

    corrections
}

/// Build a literal rule directly, mainly for tests and embedding callers.
pub fn literal_rule(
    name: &str,
    category: &str,
    priority: i32,
    patterns: &[(&str, &str, &str)],
) -> Rule {
    Rule {
        name: name.to_string(),
        category: category.to_string(),
        priority,
        patterns: patterns
            .iter()
            .map(|&(pattern, replacement, description)| RulePattern {
                pattern: pattern.to_string(),
                replacement: replacement.to_string(),
                description: description.to_string(),
                kind: PatternKind::Literal,
                regex: None,
                confidence: 1.0,
            })
            .collect(),
    }
}
