//! Side-by-side text comparison for the diff tool.
//!
//! The heavy lifting (minimal unchanged/removed/added line runs) comes from
//! the `similar` crate; this module's contribution is the display pass that
//! pairs a removed run with the addition run that immediately follows it
//! into "modified" rows and assigns stable per-side line numbers.

use serde::{Deserialize, Serialize};
use similar::{DiffTag, TextDiff};

/// One run of consecutive same-type lines produced by the diff primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Unchanged(Vec<String>),
    Removed(Vec<String>),
    Added(Vec<String>),
}

/// Classification of a single rendered line.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    /// Identical content on both sides.
    Same,
    /// Present only in the modified text.
    Added,
    /// Present only in the original text.
    Removed,
    /// A removed line paired with an added line at the same relative position.
    Modified,
}

/// One half of a comparison row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RowSide {
    /// 1-based line number on this side.
    pub line_number: usize,
    pub content: String,
    pub kind: RowKind,
}

/// One rendered line of the side-by-side comparison. At least one side is
/// always present; both sides present means `Same` or `Modified`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    pub left: Option<RowSide>,
    pub right: Option<RowSide>,
}

/// Aggregate counts. A modified row contributes to both additions and deletions.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub unchanged: usize,
}

/// Result of a comparison: the ordered rows plus summary counters.
#[derive(Serialize, Deserialize, Debug)]
pub struct DiffResult {
    pub rows: Vec<DiffRow>,
    pub stats: DiffStats,
}

/// Runs the line-diff primitive and flattens its ops into `Change` runs.
///
/// A `Replace` op is materialized as a removal run directly followed by an
/// addition run so the pairing pass sees two adjacent runs the same way
/// regardless of how the primitive batched them.
pub fn diff_changes(original: &str, modified: &str) -> Vec<Change> {
    let old_lines: Vec<&str> = original.lines().collect();
    let new_lines: Vec<&str> = modified.lines().collect();

    let diff = TextDiff::from_slices(&old_lines, &new_lines);

    let mut changes = Vec::new();
    for op in diff.ops() {
        let old_block = || {
            old_lines[op.old_range()]
                .iter()
                .map(|line| line.to_string())
                .collect::<Vec<_>>()
        };
        let new_block = || {
            new_lines[op.new_range()]
                .iter()
                .map(|line| line.to_string())
                .collect::<Vec<_>>()
        };
        match op.tag() {
            DiffTag::Equal => changes.push(Change::Unchanged(old_block())),
            DiffTag::Delete => changes.push(Change::Removed(old_block())),
            DiffTag::Insert => changes.push(Change::Added(new_block())),
            DiffTag::Replace => {
                changes.push(Change::Removed(old_block()));
                changes.push(Change::Added(new_block()));
            }
        }
    }
    changes
}

/// Computes the side-by-side comparison of two texts.
///
/// Total over all inputs: empty strings are fine and two empty strings
/// produce zero rows.
pub fn compute_diff(original: &str, modified: &str) -> DiffResult {
    pair_rows(&diff_changes(original, modified))
}

/// Walks the change runs with one-step lookahead, pairing each removal run
/// with an immediately following addition run. Pairing is positional: line
/// `k` of the removal always aligns with line `k` of the addition, no
/// similarity heuristic is applied.
fn pair_rows(changes: &[Change]) -> DiffResult {
    let mut rows = Vec::new();
    let mut stats = DiffStats::default();
    let mut left_num = 1usize;
    let mut right_num = 1usize;

    let mut idx = 0;
    while idx < changes.len() {
        match &changes[idx] {
            Change::Unchanged(lines) => {
                for line in lines {
                    rows.push(DiffRow {
                        left: Some(RowSide {
                            line_number: left_num,
                            content: line.clone(),
                            kind: RowKind::Same,
                        }),
                        right: Some(RowSide {
                            line_number: right_num,
                            content: line.clone(),
                            kind: RowKind::Same,
                        }),
                    });
                    left_num += 1;
                    right_num += 1;
                    stats.unchanged += 1;
                }
                idx += 1;
            }
            Change::Added(lines) => {
                // Only reached when no removal run precedes; a removal run
                // consumes its following addition run below.
                for line in lines {
                    rows.push(addition_row(&mut right_num, line));
                    stats.additions += 1;
                }
                idx += 1;
            }
            Change::Removed(removed) => {
                let added: &[String] = match changes.get(idx + 1) {
                    Some(Change::Added(lines)) => lines,
                    _ => &[],
                };
                let paired = removed.len().min(added.len());
                for k in 0..paired {
                    rows.push(DiffRow {
                        left: Some(RowSide {
                            line_number: left_num,
                            content: removed[k].clone(),
                            kind: RowKind::Modified,
                        }),
                        right: Some(RowSide {
                            line_number: right_num,
                            content: added[k].clone(),
                            kind: RowKind::Modified,
                        }),
                    });
                    left_num += 1;
                    right_num += 1;
                    stats.deletions += 1;
                    stats.additions += 1;
                }
                for line in &removed[paired..] {
                    rows.push(removal_row(&mut left_num, line));
                    stats.deletions += 1;
                }
                for line in &added[paired..] {
                    rows.push(addition_row(&mut right_num, line));
                    stats.additions += 1;
                }
                // Skip the consumed addition run too, if there was one.
                idx += if added.is_empty() { 1 } else { 2 };
            }
        }
    }

    DiffResult { rows, stats }
}

fn removal_row(left_num: &mut usize, line: &str) -> DiffRow {
    let row = DiffRow {
        left: Some(RowSide {
            line_number: *left_num,
            content: line.to_string(),
            kind: RowKind::Removed,
        }),
        right: None,
    };
    *left_num += 1;
    row
}

fn addition_row(right_num: &mut usize, line: &str) -> DiffRow {
    let row = DiffRow {
        left: None,
        right: Some(RowSide {
            line_number: *right_num,
            content: line.to_string(),
            kind: RowKind::Added,
        }),
    };
    *right_num += 1;
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(result: &DiffResult) -> Vec<(Option<RowKind>, Option<RowKind>)> {
        result
            .rows
            .iter()
            .map(|row| {
                (
                    row.left.as_ref().map(|side| side.kind),
                    row.right.as_ref().map(|side| side.kind),
                )
            })
            .collect()
    }

    #[test]
    fn identical_texts_yield_only_same_rows() {
        let text = "line 1\nline 2\nline 3";
        let result = compute_diff(text, text);

        assert_eq!(result.rows.len(), 3);
        for row in &result.rows {
            let left = row.left.as_ref().expect("left present");
            let right = row.right.as_ref().expect("right present");
            assert_eq!(left.kind, RowKind::Same);
            assert_eq!(right.kind, RowKind::Same);
            assert_eq!(left.content, right.content);
        }
        assert_eq!(
            result.stats,
            DiffStats {
                additions: 0,
                deletions: 0,
                unchanged: 3
            }
        );
    }

    #[test]
    fn empty_original_is_pure_insertion() {
        let result = compute_diff("", "a\nb\nc");

        assert_eq!(result.rows.len(), 3);
        for (i, row) in result.rows.iter().enumerate() {
            assert!(row.left.is_none());
            let right = row.right.as_ref().expect("right present");
            assert_eq!(right.kind, RowKind::Added);
            assert_eq!(right.line_number, i + 1);
        }
        assert_eq!(
            result.stats,
            DiffStats {
                additions: 3,
                deletions: 0,
                unchanged: 0
            }
        );
    }

    #[test]
    fn empty_modified_is_pure_deletion() {
        let result = compute_diff("a\nb\nc", "");

        assert_eq!(result.rows.len(), 3);
        for (i, row) in result.rows.iter().enumerate() {
            assert!(row.right.is_none());
            let left = row.left.as_ref().expect("left present");
            assert_eq!(left.kind, RowKind::Removed);
            assert_eq!(left.line_number, i + 1);
        }
        assert_eq!(
            result.stats,
            DiffStats {
                additions: 0,
                deletions: 3,
                unchanged: 0
            }
        );
    }

    #[test]
    fn both_empty_yields_no_rows() {
        let result = compute_diff("", "");
        assert!(result.rows.is_empty());
        assert_eq!(result.stats, DiffStats::default());
    }

    #[test]
    fn changed_line_becomes_one_modified_row() {
        let result = compute_diff("a\nb\nc", "a\nX\nc");

        assert_eq!(
            kinds(&result),
            vec![
                (Some(RowKind::Same), Some(RowKind::Same)),
                (Some(RowKind::Modified), Some(RowKind::Modified)),
                (Some(RowKind::Same), Some(RowKind::Same)),
            ]
        );
        let middle = &result.rows[1];
        assert_eq!(middle.left.as_ref().unwrap().content, "b");
        assert_eq!(middle.right.as_ref().unwrap().content, "X");
        assert_eq!(
            result.stats,
            DiffStats {
                additions: 1,
                deletions: 1,
                unchanged: 2
            }
        );
    }

    #[test]
    fn unequal_runs_pair_positionally_then_spill() {
        // Two removals against one addition: one modified pair, then a pure removal.
        let result = compute_diff("x\ny", "p");

        assert_eq!(
            kinds(&result),
            vec![
                (Some(RowKind::Modified), Some(RowKind::Modified)),
                (Some(RowKind::Removed), None),
            ]
        );
        assert_eq!(result.rows[0].left.as_ref().unwrap().content, "x");
        assert_eq!(result.rows[0].right.as_ref().unwrap().content, "p");
        assert_eq!(result.rows[1].left.as_ref().unwrap().content, "y");
        assert_eq!(
            result.stats,
            DiffStats {
                additions: 1,
                deletions: 2,
                unchanged: 0
            }
        );
    }

    #[test]
    fn longer_addition_run_spills_into_pure_additions() {
        let result = compute_diff("a\nold\nz", "a\nnew 1\nnew 2\nnew 3\nz");

        assert_eq!(
            kinds(&result),
            vec![
                (Some(RowKind::Same), Some(RowKind::Same)),
                (Some(RowKind::Modified), Some(RowKind::Modified)),
                (None, Some(RowKind::Added)),
                (None, Some(RowKind::Added)),
                (Some(RowKind::Same), Some(RowKind::Same)),
            ]
        );
        assert_eq!(
            result.stats,
            DiffStats {
                additions: 3,
                deletions: 1,
                unchanged: 2
            }
        );
    }

    #[test]
    fn line_numbers_increase_independently_per_side() {
        let result = compute_diff("a\nb\nc\nd", "a\nc\nd\ne");

        let mut prev_left = 0;
        let mut prev_right = 0;
        for row in &result.rows {
            if let Some(left) = &row.left {
                assert!(left.line_number > prev_left, "left numbers must increase");
                prev_left = left.line_number;
            }
            if let Some(right) = &row.right {
                assert!(right.line_number > prev_right, "right numbers must increase");
                prev_right = right.line_number;
            }
        }
    }

    #[test]
    fn sides_reconstruct_the_inputs() {
        let original = "fn main() {\n    println!(\"hi\");\n}\n";
        let modified = "fn main() {\n    println!(\"hello\");\n    run();\n}\n";
        let result = compute_diff(original, modified);

        let left: Vec<&str> = result
            .rows
            .iter()
            .filter_map(|row| row.left.as_ref().map(|side| side.content.as_str()))
            .collect();
        let right: Vec<&str> = result
            .rows
            .iter()
            .filter_map(|row| row.right.as_ref().map(|side| side.content.as_str()))
            .collect();

        let original_lines: Vec<&str> = original.lines().collect();
        let modified_lines: Vec<&str> = modified.lines().collect();
        assert_eq!(left, original_lines);
        assert_eq!(right, modified_lines);
    }

    #[test]
    fn every_row_has_at_least_one_side() {
        let result = compute_diff("a\nb", "b\nc");
        for row in &result.rows {
            assert!(row.left.is_some() || row.right.is_some());
        }
    }

    #[test]
    fn empty_lines_are_ordinary_content() {
        let result = compute_diff("a\n\nb", "a\n\nb");
        assert_eq!(result.stats.unchanged, 3);
        assert_eq!(result.rows[1].left.as_ref().unwrap().content, "");
    }

    #[test]
    fn replace_op_is_split_into_adjacent_runs() {
        let changes = diff_changes("a\nb", "a\nc");
        assert_eq!(
            changes,
            vec![
                Change::Unchanged(vec!["a".into()]),
                Change::Removed(vec!["b".into()]),
                Change::Added(vec!["c".into()]),
            ]
        );
    }
}
