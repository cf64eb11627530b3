use csvsheet::io::csv_io;
use csvsheet::state::command::{Command, EditTarget};
use csvsheet::state::delimiter::Delimiter;
use csvsheet::state::table_state::TableState;

fn load_fixture(name: &str) -> TableState {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir.join("tests").join("data").join(name);
    let content = csv_io::read_csv_file(&path).unwrap();

    let mut state = TableState::new();
    state
        .apply(Command::Load {
            file_name: csv_io::file_name_of(&path),
            content,
        })
        .unwrap();
    state
}

fn save_and_reload(state: &TableState) -> TableState {
    let dir = tempfile::tempdir().unwrap();
    let name = csv_io::export_file_name(state.file_name());
    let path = dir.path().join(name);
    csv_io::save_csv(&path, state.document(), state.delimiter()).unwrap();

    let content = csv_io::read_csv_file(&path).unwrap();
    let mut reloaded = TableState::new();
    reloaded
        .apply(Command::Load {
            file_name: csv_io::file_name_of(&path),
            content,
        })
        .unwrap();
    reloaded
}

#[test]
fn test_e2e_open_edit_save_roundtrip() {
    let mut state = load_fixture("semicolon.csv");
    assert_eq!(state.delimiter(), Delimiter::Semicolon);
    assert_eq!(state.file_name(), Some("semicolon.csv"));

    state
        .apply(Command::BeginEdit(EditTarget::Cell { row: 0, col: 0 }))
        .unwrap();
    state.apply(Command::UpdateDraft("Zoe".to_string())).unwrap();
    state.apply(Command::CommitEdit).unwrap();
    state
        .apply(Command::InsertColumn {
            at: 3,
            name: Some("team".to_string()),
        })
        .unwrap();
    state
        .apply(Command::SetCell {
            row: 1,
            col: 3,
            value: "R&D".to_string(),
        })
        .unwrap();
    state.apply(Command::InsertRow { at: 3 }).unwrap();
    state.apply(Command::DeleteRow { at: 2 }).unwrap();

    let reloaded = save_and_reload(&state);
    assert_eq!(reloaded.delimiter(), Delimiter::Semicolon);
    assert_eq!(reloaded.document(), state.document());
    assert_eq!(reloaded.file_name(), Some("semicolon.csv"));
}

#[test]
fn test_e2e_quoted_fixture_keeps_commas_and_quotes() {
    let state = load_fixture("comma.csv");
    assert_eq!(state.delimiter(), Delimiter::Comma);
    assert_eq!(state.document().cell(0, 1), Some("Hello, world"));
    assert_eq!(state.document().cell(1, 1), Some("Say \"hi\""));
    assert_eq!(state.document().cell(1, 2), Some(""));

    let reloaded = save_and_reload(&state);
    assert_eq!(reloaded.document(), state.document());
}

#[test]
fn test_e2e_export_with_changed_delimiter() {
    let mut state = load_fixture("comma.csv");
    state
        .apply(Command::FindAndReplace {
            find: "world".to_string(),
            replacement: "there".to_string(),
            all: true,
        })
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    csv_io::save_csv(&path, state.document(), Delimiter::Tab).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let first_line = content.lines().next().unwrap();
    assert_eq!(first_line, "\"id\"\t\"title\"\t\"image\"");
    assert!(content.contains("\"Hello, there\""));
}

#[test]
fn test_e2e_search_then_edit_targets_document_row() {
    let mut state = load_fixture("semicolon.csv");
    state.apply(Command::SetSearch("carol".to_string())).unwrap();
    let visible = state.visible_row_indices();
    assert_eq!(visible, vec![2]);

    state
        .apply(Command::SetCell {
            row: visible[0],
            col: 2,
            value: "99".to_string(),
        })
        .unwrap();
    assert_eq!(state.document().cell(2, 2), Some("99"));
    assert_eq!(state.document().cell(0, 2), Some("10"));
}
