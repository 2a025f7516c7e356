//! Pull SQL out of Markdown code fences.
//!
//! Generated answers often wrap DDL in prose. Lines outside fences are
//! blanked rather than dropped so diagnostic positions still match the input.

use std::borrow::Cow;

const FENCE: &str = "```";

fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

/// Keep only fenced blocks when the input has any, otherwise return it untouched.
pub fn extract_sql(input: &str) -> Cow<'_, str> {
    if !input.lines().any(is_fence) {
        return Cow::Borrowed(input);
    }

    let mut inside = false;
    let mut out = Vec::new();
    for line in input.lines() {
        if is_fence(line) {
            inside = !inside;
            out.push("");
        } else if inside {
            out.push(line);
        } else {
            out.push("");
        }
    }
    Cow::Owned(out.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_sql_is_borrowed() {
        let sql = "CREATE TABLE t (id INT);";
        assert!(matches!(extract_sql(sql), Cow::Borrowed(s) if s == sql));
    }

    #[test]
    fn test_prose_is_blanked() {
        let input = "Here's the schema:\n```sql\nCREATE TABLE t (id INT);\n```\nIt's normalized.";
        let extracted = extract_sql(input);

        assert_eq!(extracted, "\n\nCREATE TABLE t (id INT);\n\n");
        assert_eq!(extracted.split('\n').count(), input.split('\n').count());
    }

    #[test]
    fn test_multiple_blocks_and_unclosed_fence() {
        let input = "```\nCREATE TABLE a (id INT);\n```\nand\n```sql\nCREATE TABLE b (id INT);";
        let extracted = extract_sql(input);

        assert!(extracted.contains("CREATE TABLE a"));
        assert!(extracted.contains("CREATE TABLE b"));
        assert!(!extracted.contains("and"));
    }
}
