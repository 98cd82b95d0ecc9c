//! Attribute filter rewrite from SQL-ish `where` to upstream search syntax.

use regex::Regex;
use std::sync::LazyLock;

/// Filter used when no `where` is given or nothing survives the rewrite.
pub const MATCH_ALL: &str = "*";

// Alternation order matters: bare `1=1` is tried first at each position.
static TAUTOLOGY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"1=1|(\(1=1\))|(AND\s1=1)|(AND\s\(1=1\))").expect("valid tautology regex")
});

static DANGLING_LEADING_AND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*AND\s+").expect("valid leading connective regex"));

static DANGLING_TRAILING_AND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+AND\s*$").expect("valid trailing connective regex"));

static EQUALITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+=\s+").expect("valid equality regex"));

/// Rewrites a `where` clause into upstream search text.
///
/// The steps run in a fixed order; the tautology strip must precede the
/// equality rewrite or `1 = 1` style clauses would become `1:1`.
pub fn rewrite_where(where_clause: Option<&str>) -> String {
    let raw = where_clause.unwrap_or(MATCH_ALL);

    let stripped = TAUTOLOGY.replace_all(raw, "");
    let stripped = DANGLING_LEADING_AND.replace(&stripped, "");
    let stripped = DANGLING_TRAILING_AND.replace(&stripped, "");

    let scoped = EQUALITY.replace_all(&stripped, ":");
    let quoted = scoped.replace('\'', "\"");
    let text = quoted.trim_start().trim_end_matches([' ', '\t']);

    if text.is_empty() {
        MATCH_ALL.to_string()
    } else {
        text.to_string()
    }
}
