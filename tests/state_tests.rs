use csvsheet::state::data_model::{self, Document, EditError, DEFAULT_COLUMN_NAME};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn sample_document() -> Document {
    Document::from_parts(
        strings(&["a", "b"]),
        vec![strings(&["1", "2"]), strings(&["3", "4"])],
    )
}

#[test]
fn test_insert_row_in_middle() {
    let mut doc = sample_document();
    doc.insert_row(1).unwrap();

    assert_eq!(doc.row_count(), 3);
    assert_eq!(doc.rows()[0], strings(&["1", "2"]));
    assert_eq!(doc.rows()[1], strings(&["", ""]));
    assert_eq!(doc.rows()[2], strings(&["3", "4"]));
}

#[test]
fn test_insert_row_at_end() {
    let mut doc = sample_document();
    doc.insert_row(2).unwrap();
    assert_eq!(doc.rows()[2], strings(&["", ""]));
}

#[test]
fn test_insert_row_out_of_range_leaves_document() {
    let mut doc = sample_document();
    let err = doc.insert_row(5).unwrap_err();
    assert_eq!(err, EditError::RowOutOfRange { index: 5, len: 2 });
    assert_eq!(doc, sample_document());
}

#[test]
fn test_delete_row() {
    let mut doc = sample_document();
    doc.delete_row(0).unwrap();
    assert_eq!(doc.rows(), &[strings(&["3", "4"])]);

    let err = doc.delete_row(1).unwrap_err();
    assert_eq!(err, EditError::RowOutOfRange { index: 1, len: 1 });
}

#[test]
fn test_insert_column_splices_every_row() {
    let mut doc = sample_document();
    doc.insert_column(1, DEFAULT_COLUMN_NAME).unwrap();

    assert_eq!(doc.headers(), strings(&["a", "New Column", "b"]).as_slice());
    assert_eq!(doc.rows()[0], strings(&["1", "", "2"]));
    assert_eq!(doc.rows()[1], strings(&["3", "", "4"]));
}

#[test]
fn test_insert_then_delete_column_is_noop() {
    for at in 0..=2 {
        let mut doc = sample_document();
        doc.insert_column(at, "tmp").unwrap();
        doc.delete_column(at).unwrap();
        assert_eq!(doc, sample_document());
    }
}

#[test]
fn test_delete_column_out_of_range() {
    let mut doc = sample_document();
    let err = doc.delete_column(2).unwrap_err();
    assert_eq!(err, EditError::ColumnOutOfRange { index: 2, len: 2 });
    assert_eq!(doc, sample_document());
}

#[test]
fn test_delete_last_column_keeps_rows_empty() {
    let mut doc = Document::from_parts(strings(&["only"]), vec![strings(&["x"])]);
    doc.delete_column(0).unwrap();
    assert_eq!(doc.column_count(), 0);
    assert_eq!(doc.row_count(), 1);
    assert!(doc.rows()[0].is_empty());
}

#[test]
fn test_set_cell_changes_only_target() {
    let mut doc = sample_document();
    doc.set_cell(1, 0, "z").unwrap();

    assert_eq!(doc.cell(1, 0), Some("z"));
    assert_eq!(doc.cell(0, 0), Some("1"));
    assert_eq!(doc.cell(0, 1), Some("2"));
    assert_eq!(doc.cell(1, 1), Some("4"));
}

#[test]
fn test_set_cell_out_of_range() {
    let mut doc = sample_document();
    assert_eq!(
        doc.set_cell(2, 0, "z").unwrap_err(),
        EditError::RowOutOfRange { index: 2, len: 2 }
    );
    assert_eq!(
        doc.set_cell(0, 3, "z").unwrap_err(),
        EditError::ColumnOutOfRange { index: 3, len: 2 }
    );
}

#[test]
fn test_set_header() {
    let mut doc = sample_document();
    doc.set_header(1, "beta").unwrap();
    assert_eq!(doc.header(1), Some("beta"));
    assert!(doc.set_header(2, "x").is_err());
}

#[test]
fn test_from_parts_pads_short_rows_and_widens_header() {
    let doc = Document::from_parts(
        strings(&["a", "b"]),
        vec![strings(&["1"]), strings(&["1", "2", "3"])],
    );

    assert_eq!(doc.headers(), strings(&["a", "b", ""]).as_slice());
    assert_eq!(doc.rows()[0], strings(&["1", "", ""]));
    assert_eq!(doc.rows()[1], strings(&["1", "2", "3"]));
}

#[test]
fn test_find_and_replace_first_only() {
    let mut doc = Document::from_parts(
        strings(&["x", "y"]),
        vec![strings(&["none", "foo foo"]), strings(&["foo", "bar"])],
    );

    assert_eq!(doc.find_and_replace("foo", "baz", false), 1);
    assert_eq!(doc.cell(0, 1), Some("baz foo"));
    assert_eq!(doc.cell(1, 0), Some("foo"));
}

#[test]
fn test_find_and_replace_all() {
    let mut doc = Document::from_parts(
        strings(&["x", "y"]),
        vec![strings(&["none", "foo foo"]), strings(&["foo", "bar"])],
    );

    assert_eq!(doc.find_and_replace("foo", "baz", true), 2);
    assert_eq!(doc.cell(0, 1), Some("baz baz"));
    assert_eq!(doc.cell(1, 0), Some("baz"));
    assert_eq!(doc.cell(0, 0), Some("none"));
}

#[test]
fn test_find_and_replace_is_literal() {
    let mut doc = Document::from_parts(
        strings(&["x"]),
        vec![strings(&["axb"]), strings(&["a.b (1)"])],
    );

    assert_eq!(doc.find_and_replace("a.b (1)", "$0", true), 1);
    assert_eq!(doc.cell(0, 0), Some("axb"));
    assert_eq!(doc.cell(1, 0), Some("$0"));
}

#[test]
fn test_find_and_replace_skips_unchanged_cells() {
    let mut doc = Document::from_parts(
        strings(&["x"]),
        vec![strings(&["aa"]), strings(&["ab"])],
    );

    assert_eq!(doc.find_and_replace("a", "a", true), 0);
    assert_eq!(doc.find_and_replace("b", "b", false), 0);
    assert_eq!(doc.rows()[1], strings(&["ab"]));
}

#[test]
fn test_find_and_replace_skips_headers() {
    let mut doc = Document::from_parts(strings(&["foo"]), vec![strings(&["bar"])]);
    assert_eq!(doc.find_and_replace("foo", "x", true), 0);
    assert_eq!(doc.header(0), Some("foo"));
}

#[test]
fn test_find_and_replace_empty_find_is_noop() {
    let mut doc = sample_document();
    assert_eq!(doc.find_and_replace("", "x", true), 0);
    assert_eq!(doc, sample_document());
}

#[test]
fn test_row_contains_ignores_case() {
    let doc = Document::from_parts(strings(&["name"]), vec![strings(&["Alice"])]);
    assert!(doc.row_contains(0, "ALI"));
    assert!(doc.row_contains(0, ""));
    assert!(!doc.row_contains(0, "bob"));
    assert!(!doc.row_contains(3, "a"));
}

#[test]
fn test_display_header_uppercases() {
    assert_eq!(data_model::display_header("city name"), "CITY NAME");
}

#[test]
fn test_looks_like_image_url() {
    assert!(data_model::looks_like_image_url("https://x.test/cat.PNG"));
    assert!(data_model::looks_like_image_url("/static/image?id=3"));
    assert!(!data_model::looks_like_image_url("https://x.test/page.html"));
    assert!(!data_model::looks_like_image_url(""));
}

#[test]
fn test_category_parts() {
    assert_eq!(
        data_model::category_parts("Tools > Garden >  > Hoses", ">"),
        vec!["Tools", "Garden", "Hoses"]
    );
    assert_eq!(data_model::category_parts("plain", ""), vec!["plain"]);
}

#[test]
fn test_document_serde_shape() {
    let json = serde_json::to_value(sample_document()).unwrap();
    assert_eq!(json["headers"], serde_json::json!(["a", "b"]));
    assert_eq!(json["rows"][1], serde_json::json!(["3", "4"]));
}

#[test]
fn test_document_deserialize_pads_ragged_rows() {
    let json = serde_json::json!({
        "headers": ["a", "b"],
        "rows": [["1"], ["2", "3", "4"]],
    });
    let mut doc: Document = serde_json::from_value(json).unwrap();

    assert_eq!(doc.headers(), strings(&["a", "b", ""]).as_slice());
    assert_eq!(doc.rows()[0], strings(&["1", "", ""]));
    assert_eq!(doc.rows()[1], strings(&["2", "3", "4"]));

    doc.set_cell(0, 1, "x").unwrap();
    assert_eq!(doc.cell(0, 1), Some("x"));
    doc.delete_column(1).unwrap();
    assert_eq!(doc.rows()[0], strings(&["1", ""]));
}
