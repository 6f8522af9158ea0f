//! Property tests for splitting, styling and the document diff engine.

use craft_diff::{
    compute_document_diff, original_text, revised_text, split_for_side_by_side, style_for,
    DiffKind, DiffSegment, DiffSummary, SegmentStyle, Side,
};
use craft_test_utils::{arb_prose, arb_segments, sample_revision, segments};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_split_reconstructs_both_sides(input in arb_segments()) {
        let split = split_for_side_by_side(&input);

        let expected_left: String = input
            .iter()
            .filter(|s| matches!(s.kind, DiffKind::Unchanged | DiffKind::Removed))
            .map(|s| s.text.as_str())
            .collect();
        let expected_right: String = input
            .iter()
            .filter(|s| matches!(s.kind, DiffKind::Unchanged | DiffKind::Added))
            .map(|s| s.text.as_str())
            .collect();

        prop_assert_eq!(original_text(&split.left), expected_left);
        prop_assert_eq!(revised_text(&split.right), expected_right);
    }

    #[test]
    fn prop_split_preserves_order(input in arb_segments()) {
        let split = split_for_side_by_side(&input);

        let left: Vec<&DiffSegment> = input.iter().filter(|s| s.kind.in_original()).collect();
        let right: Vec<&DiffSegment> = input.iter().filter(|s| s.kind.in_revised()).collect();

        prop_assert_eq!(split.left.iter().collect::<Vec<_>>(), left);
        prop_assert_eq!(split.right.iter().collect::<Vec<_>>(), right);
    }

    #[test]
    fn prop_split_sides_only_highlight_own_changes(input in arb_segments()) {
        let split = split_for_side_by_side(&input);

        for segment in &split.left {
            let style = style_for(segment.kind, Some(Side::Left));
            prop_assert_eq!(style.is_highlighted(), segment.kind == DiffKind::Removed);
        }
        for segment in &split.right {
            let style = style_for(segment.kind, Some(Side::Right));
            prop_assert_eq!(style.is_highlighted(), segment.kind == DiffKind::Added);
        }
    }

    #[test]
    fn prop_document_diff_reconstructs_trimmed_inputs(
        original in arb_prose(),
        revised in arb_prose(),
    ) {
        let diff = compute_document_diff(&original, &revised);

        if original.trim().is_empty() || revised.trim().is_empty() {
            prop_assert!(diff.len() <= 1);
        } else {
            prop_assert_eq!(original_text(&diff), original.trim());
            prop_assert_eq!(revised_text(&diff), revised.trim());
            prop_assert!(diff.iter().all(|s| !s.text.is_empty()));
        }
    }

    #[test]
    fn prop_summary_matches_word_totals(input in arb_segments()) {
        let summary = DiffSummary::from_segments(&input);
        let total: usize = input.iter().map(|s| s.text.split_whitespace().count()).sum();

        prop_assert_eq!(
            summary.words_added + summary.words_removed + summary.words_unchanged,
            total
        );
    }
}

#[test]
fn split_empty_returns_empty_panes() {
    let split = split_for_side_by_side(&[]);
    assert_eq!(split.left, Vec::new());
    assert_eq!(split.right, Vec::new());
}

#[test]
fn sample_revision_panes() {
    let split = split_for_side_by_side(&sample_revision());

    assert_eq!(
        original_text(&split.left),
        "The model underestimates default rates in scenarios."
    );
    assert_eq!(
        revised_text(&split.right),
        "The model overestimates default rates in stressed scenarios."
    );
}

#[test]
fn summary_of_mixed_segments() {
    let input = segments(&[
        (DiffKind::Unchanged, "a b"),
        (DiffKind::Added, "c"),
        (DiffKind::Removed, "d e"),
    ]);
    let summary = DiffSummary::from_segments(&input);

    assert_eq!(summary.words_added, 1);
    assert_eq!(summary.words_removed, 2);
    assert_eq!(summary.words_unchanged, 2);
}

#[test]
fn unified_styles_distinguish_all_kinds() {
    let added = style_for(DiffKind::Added, None);
    let removed = style_for(DiffKind::Removed, None);
    let unchanged = style_for(DiffKind::Unchanged, None);

    assert_ne!(added, removed);
    assert_eq!(unchanged, SegmentStyle::NEUTRAL);
    assert!(added.is_highlighted());
    assert!(removed.is_highlighted());
}

#[test]
fn segments_deserialize_from_backend_payload() {
    let payload = r#"[
        {"type": "unchanged", "text": "a ", "original": "a ", "revised": "a "},
        {"type": "removed", "text": "b", "original": "b", "revised": ""},
        {"type": "added", "text": "c", "original": "", "revised": "c"}
    ]"#;
    let parsed: Vec<DiffSegment> = serde_json::from_str(payload).unwrap();

    assert_eq!(
        parsed,
        vec![
            DiffSegment::unchanged("a "),
            DiffSegment::removed("b"),
            DiffSegment::added("c"),
        ]
    );
}

#[test]
fn table_rows_diff_line_by_line() {
    let original = "{\n  \"rows\": [\n    {\n      \"item\": \"Drift\"\n    }\n  ]\n}";
    let revised = "{\n  \"rows\": [\n    {\n      \"item\": \"Data drift\"\n    }\n  ]\n}";
    let diff = compute_document_diff(original, revised);

    let changed: Vec<_> = diff
        .iter()
        .filter(|s| s.kind != DiffKind::Unchanged)
        .cloned()
        .collect();
    assert_eq!(
        changed,
        vec![
            DiffSegment::removed("      \"item\": \"Drift\"\n"),
            DiffSegment::added("      \"item\": \"Data drift\"\n"),
        ]
    );
}
