//! Integration tests for hwdist.

#![allow(clippy::expect_used)]

use hwdist::transform::{TransformReport, rewrite_headings};
use hwdist::{transform, transform_with_report};
use test_case::test_case;

#[test]
fn test_hint_block_before_question() {
    assert_eq!(
        transform("**提示**：do X\nmore hint text\n1. Question\n"),
        "### 1. Question\n"
    );
}

#[test]
fn test_sub_item_promoted() {
    assert_eq!(
        transform("- (1) first sub-item\n"),
        "#### (1) first sub-item\n"
    );
}

#[test]
fn test_four_blank_lines_between_paragraphs() {
    let src = "Paragraph one.\n\n\n\n\nParagraph two.\n";
    assert_eq!(transform(src), "Paragraph one.\n\nParagraph two.\n");
}

#[test]
fn test_note_block_before_level_two_heading() {
    assert_eq!(
        transform("**说明**：note\n## Section Two\n"),
        "## Section Two\n"
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(transform(""), "");
}

#[test_case("1. Next question\n", "### 1. Next question\n" ; "numbered item")]
#[test_case("- (2) next sub\n", "#### (2) next sub\n" ; "sub item")]
#[test_case("-(b) tight sub\n", "#### (b) tight sub\n" ; "sub item without space")]
#[test_case("## Part B\n", "## Part B\n" ; "level two heading")]
#[test_case("", "" ; "end of document")]
fn test_boundary_precedence(boundary: &str, expected_tail: &str) {
    let src = format!("Intro\n**提示**：hint line\nstill hint\n{boundary}");
    assert_eq!(transform(&src), format!("Intro\n{expected_tail}"));
}

#[test_case("**提示**：" ; "hint")]
#[test_case("**说明**：" ; "note")]
fn test_block_stops_at_nearest_boundary(marker: &str) {
    let src = format!("{marker}a\n- (1) x\nbody\n2. y\n");
    assert_eq!(transform(&src), "#### (1) x\nbody\n### 2. y\n");
}

#[test]
fn test_report_counts() {
    let src = "1. A\n**提示**：h\n- (1) s\n**说明**：n\n\n\n\n## Next\n2. B\n";
    let out = transform_with_report(src);
    assert_eq!(
        out.report,
        TransformReport {
            hint_blocks: 1,
            note_blocks: 1,
            lines_removed: 2,
            blank_runs_collapsed: 1,
            items_promoted: 2,
            sub_items_promoted: 1,
        }
    );
    assert_eq!(out.text, "### 1. A\n#### (1) s\n\n## Next\n### 2. B\n");
}

#[test]
fn test_numbered_lines_outside_questions_are_promoted() {
    let src = "## References\n1. Knuth, TAOCP\n";
    assert_eq!(transform(src), "## References\n### 1. Knuth, TAOCP\n");
}

#[test]
fn test_rewritten_document_is_stable() {
    let once = transform("1. A\n- (1) b\n");
    assert_eq!(transform(&once), once);
}

mod property_tests {
    use super::{TransformReport, rewrite_headings, transform, transform_with_report};
    use hwdist::transform::{AnnotationKind, rewrite_line};
    use proptest::prelude::*;

    fn line() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("1. Question".to_string()),
            Just("  12. Indented".to_string()),
            Just("- (a) sub".to_string()),
            Just("**提示**：hint".to_string()),
            Just("**说明**：note".to_string()),
            Just("## Heading".to_string()),
            Just(String::new()),
            Just("   ".to_string()),
            "[a-z ]{0,12}",
        ]
    }

    /// Lines no step touches: near misses of every rule plus arbitrary text.
    fn untouched_line() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("- bullet".to_string()),
            Just("# Title".to_string()),
            Just("Chapter 1.".to_string()),
            Just("See **提示**：x".to_string()),
            Just("提示：没有加粗".to_string()),
            Just("计算下列各题".to_string()),
            Just("  indented text".to_string()),
            Just("(1) answer".to_string()),
            Just("1) first".to_string()),
            "\\PC{1,20}",
        ]
        .prop_filter("line would be rewritten or starts a block", |line| {
            !line.is_empty()
                && rewrite_line(line).1.is_none()
                && AnnotationKind::detect(line).is_none()
        })
    }

    fn document() -> impl Strategy<Value = String> {
        prop::collection::vec(line(), 0..40).prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        #[test]
        fn output_has_no_triple_newline(doc in document()) {
            prop_assert!(!transform(&doc).contains("\n\n\n"));
        }

        #[test]
        fn heading_rewrite_is_idempotent(doc in document()) {
            let mut report = TransformReport::default();
            let once = rewrite_headings(&doc, &mut report);
            let mut second = TransformReport::default();
            let twice = rewrite_headings(&once, &mut second);
            prop_assert_eq!(&twice, &once);
            prop_assert_eq!(second.items_promoted + second.sub_items_promoted, 0);
        }

        #[test]
        fn untouched_lines_pass_through(lines in prop::collection::vec(untouched_line(), 0..20)) {
            let doc = lines.join("\n");
            let out = transform_with_report(&doc);
            prop_assert_eq!(&out.text, &doc);
            prop_assert!(!out.report.changed());
        }

        #[test]
        fn markers_never_survive(doc in document()) {
            let out = transform(&doc);
            prop_assert!(!out.lines().any(|l| l.trim_start().starts_with("**提示**：")));
            prop_assert!(!out.lines().any(|l| l.trim_start().starts_with("**说明**：")));
        }
    }
}

/// Binary tests.
mod cli_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn hwdist() -> Command {
        Command::cargo_bin("hwdist").expect("binary builds")
    }

    #[test]
    fn test_no_arguments_prints_usage() {
        hwdist()
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        hwdist()
            .arg(dir.path().join("nope.md"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("file not found"));
    }

    #[test]
    fn test_converts_file_next_to_input() {
        let dir = TempDir::new().expect("temp dir");
        let input = dir.path().join("week1.md");
        std::fs::write(&input, "**提示**：think\n1. Q\n- (1) a\n").expect("write");

        hwdist()
            .arg(&input)
            .assert()
            .success()
            .stdout(predicate::str::contains("Transformation Summary"))
            .stdout(predicate::str::contains("week1_out.md"));

        let out = std::fs::read_to_string(dir.path().join("week1_out.md")).expect("output");
        assert_eq!(out, "### 1. Q\n#### (1) a\n");
    }

    #[test]
    fn test_stdout_mode() {
        let dir = TempDir::new().expect("temp dir");
        let input = dir.path().join("hw.md");
        std::fs::write(&input, "**说明**：n\n## S\n3. Q\n").expect("write");

        hwdist()
            .arg(&input)
            .arg("--stdout")
            .assert()
            .success()
            .stdout("## S\n### 3. Q\n");
    }

    #[test]
    fn test_json_error_output() {
        let dir = TempDir::new().expect("temp dir");
        hwdist()
            .arg(dir.path().join("nope.md"))
            .args(["--format", "json"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("\"error\""));
    }

    #[test]
    fn test_invalid_utf8_input() {
        let dir = TempDir::new().expect("temp dir");
        let input = dir.path().join("bad.md");
        std::fs::write(&input, [0xffu8, 0xfe, b'\n']).expect("write");

        hwdist()
            .arg(&input)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("invalid UTF-8"));
    }
}
