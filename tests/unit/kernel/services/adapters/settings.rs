use super::*;
use crate::kernel::services::ports::CloseTabFocus;
use tempfile::tempdir;

#[test]
fn ensure_settings_file_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join(SETTINGS_FILE);

    ensure_settings_file_at(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap(), Settings::default());

    std::fs::write(&path, r#"{"reply_latency_ms": 5}"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap().reply_latency_ms, 5);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(&path, r#"{"close_tab_focus": "keep_active"}"#).unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.close_tab_focus, CloseTabFocus::KeepActive);
    assert_eq!(settings.reply_latency_ms, 600);
    assert_eq!(settings.context_snippet_chars, 240);
    assert_eq!(settings.new_file_name, "feature.tsx");
}

#[test]
fn malformed_file_is_a_settings_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        load_settings_from(&path),
        Err(WorkspaceError::Settings(_))
    ));
    assert!(matches!(
        load_settings_from(&dir.path().join("absent.json")),
        Err(WorkspaceError::Settings(_))
    ));
}

#[test]
fn load_settings_at_creates_defaults_then_reports_bad_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache").join(SETTINGS_FILE);

    assert_eq!(load_settings_at(&path).unwrap(), Settings::default());
    assert!(path.exists());

    std::fs::write(&path, r#"{"reply_latency_ms": "soon"}"#).unwrap();
    match load_settings_at(&path) {
        Err(WorkspaceError::Settings(message)) => assert!(message.contains(SETTINGS_FILE)),
        other => panic!("expected a settings error, got {other:?}"),
    }
}
