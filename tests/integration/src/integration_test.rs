//! End-to-end flows: scan a host document, resolve its directives against
//! real files on disk, and check the assembled output.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use graft_content::{FsSource, resolve, to_text};
use graft_parse::scan;

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

#[test]
fn markdown_document_imports_from_two_targets() {
    let dir = TempDir::new().unwrap();
    write(&dir, "alpha.md", "a1\na2\na3\na4\n");
    write(
        &dir,
        "beta.md",
        "\
junk
<!-- graft: export useful / begin -->
b1
b2
<!-- graft: export useful / end -->
junk
",
    );

    let host = "\
# Combined
<!-- graft: from-alpha / begin from: ./alpha.md#2~3 -->
<!-- graft: from-alpha / end -->
middle
<!-- graft: from-beta / begin from: ./beta.md#[useful] -->
old b content
<!-- graft: from-beta / end -->
";

    let document = scan("combined.md", host).unwrap();
    let processed = resolve(&document, &FsSource::new(dir.path())).unwrap();

    assert_eq!(
        to_text(&processed),
        "\
# Combined
<!-- graft: from-alpha / begin from: ./alpha.md#2~3 -->
a2
a3
<!-- graft: from-alpha / end -->
middle
<!-- graft: from-beta / begin from: ./beta.md#[useful] -->
b1
b2
<!-- graft: from-beta / end -->
"
    );
}

#[test]
fn updating_twice_is_stable() {
    // Processing the processed output again resolves to the same text: the
    // freshly imported payload purges away and comes back identical.
    let dir = TempDir::new().unwrap();
    write(&dir, "other.md", "x\ny\n");

    let host = "\
<!-- graft: pair / begin from: ./other.md#1~ -->
<!-- graft: pair / end -->
";

    let document = scan("doc.md", host).unwrap();
    let first = to_text(&resolve(&document, &FsSource::new(dir.path())).unwrap());

    let document = scan("doc.md", &first).unwrap();
    let second = to_text(&resolve(&document, &FsSource::new(dir.path())).unwrap());

    assert_eq!(first, second);
}

#[test]
fn imported_markers_of_other_names_are_left_for_the_target_pass() {
    // The target's own marker pair arrives verbatim in the processed view;
    // resolving it belongs to the target document's own processing.
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "nested.md",
        "\
<!-- graft: inner / begin from: ./deep.md#1 -->
<!-- graft: inner / end -->
",
    );

    let host = "\
<!-- graft: outer / begin from: ./nested.md#1~ -->
<!-- graft: outer / end -->
";

    let document = scan("doc.md", host).unwrap();
    let processed = resolve(&document, &FsSource::new(dir.path())).unwrap();

    assert_eq!(
        processed,
        vec![
            "<!-- graft: outer / begin from: ./nested.md#1~ -->",
            "<!-- graft: inner / begin from: ./deep.md#1 -->",
            "<!-- graft: inner / end -->",
            "<!-- graft: outer / end -->",
        ]
    );
}

#[test]
fn yaml_document_aligns_imported_fragment_under_its_marker() {
    let dir = TempDir::new().unwrap();
    write(&dir, "snippet.yaml", "name: fragment\nports:\n  - 8080\n");

    let host = "\
services:
  # graft: snippet / begin from: ./snippet.yaml#1~ indent: align
  # graft: snippet / end
";

    let document = scan("stack.yaml", host).unwrap();
    let processed = resolve(&document, &FsSource::new(dir.path())).unwrap();

    assert_eq!(
        processed,
        vec![
            "services:",
            "  # graft: snippet / begin from: ./snippet.yaml#1~ indent: align",
            "  name: fragment",
            "  ports:",
            "    - 8080",
            "  # graft: snippet / end",
        ]
    );
}

#[test]
fn purged_view_round_trips_through_processing() {
    let dir = TempDir::new().unwrap();
    write(&dir, "other.md", "payload\n");

    let host = "\
head
<!-- graft: p / begin from: ./other.md#1 -->
old payload
<!-- graft: p / end -->
tail
";

    let document = scan("doc.md", host).unwrap();

    // Purging drops only enclosed payload; scanning the purged text again
    // yields the same purged view and the same directive.
    let purged_text = document.purged_text();
    let rescanned = scan("doc.md", &purged_text).unwrap();

    assert_eq!(rescanned.purged, document.purged);
    assert_eq!(rescanned.directives.len(), 1);
    assert_eq!(
        rescanned.directives[&2].name,
        document.directives[&2].name
    );
}

#[test]
fn quote_and_wrap_compose_end_to_end() {
    let dir = TempDir::new().unwrap();
    write(&dir, "code.md", "let x = 1;\n");

    let host = "\
<!-- graft: sample / begin from: ./code.md#1 style: verbatim rust -->
<!-- graft: sample / end -->
";

    let document = scan("doc.md", host).unwrap();
    let processed = resolve(&document, &FsSource::new(dir.path())).unwrap();

    assert_eq!(
        processed,
        vec![
            "<!-- graft: sample / begin from: ./code.md#1 style: verbatim rust -->",
            "```rust",
            "let x = 1;",
            "```",
            "<!-- graft: sample / end -->",
        ]
    );
}
