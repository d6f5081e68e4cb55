use tempfile::TempDir;

use mcpreg_core::prefs::PrefStore;

#[test]
fn missing_file_yields_none() {
    let temp = TempDir::new().unwrap();
    let store = PrefStore::from_path(temp.path().join("state").join("prefs.json"));

    assert_eq!(store.last_command(), None);
}

#[test]
fn remember_then_recall() {
    let temp = TempDir::new().unwrap();
    let store = PrefStore::from_path(temp.path().join("state").join("prefs.json"));

    store
        .remember_command("supabase -- npx -y @supabase/mcp")
        .unwrap();

    assert_eq!(
        store.last_command(),
        Some("supabase -- npx -y @supabase/mcp".to_string())
    );
}

#[test]
fn remember_overwrites_previous() {
    let temp = TempDir::new().unwrap();
    let store = PrefStore::from_path(temp.path().join("prefs.json"));

    store.remember_command("first -- npx a").unwrap();
    store.remember_command("second -- npx b").unwrap();

    assert_eq!(store.last_command(), Some("second -- npx b".to_string()));
}

#[test]
fn corrupt_file_is_treated_as_empty() {
    let temp = TempDir::new().unwrap();
    let prefs_path = temp.path().join("prefs.json");
    std::fs::write(&prefs_path, "not json").unwrap();
    let store = PrefStore::from_path(prefs_path);

    assert_eq!(store.last_command(), None);

    // and remembering over it recovers the file
    store.remember_command("svc -- npx x").unwrap();
    assert_eq!(store.last_command(), Some("svc -- npx x".to_string()));
}
