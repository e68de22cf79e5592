use std::fs;

use crudgen::generator::{merge_message_entry, MergeOutcome};

const KEY: &str = "producto.not-found";
const MESSAGE: &str = "El producto con id {0} no existe.";

#[test]
fn test_creates_missing_catalog_with_parents() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("src/main/resources/messages.properties");

    let outcome = merge_message_entry(&catalog, KEY, MESSAGE).unwrap();
    assert_eq!(outcome, MergeOutcome::Created);
    assert_eq!(
        fs::read_to_string(&catalog).unwrap(),
        "producto.not-found=El producto con id {0} no existe.\n"
    );
}

#[test]
fn test_appends_after_missing_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("messages.properties");
    fs::write(&catalog, "app.title=Inventario").unwrap();

    let outcome = merge_message_entry(&catalog, KEY, MESSAGE).unwrap();
    assert_eq!(outcome, MergeOutcome::Appended);
    assert_eq!(
        fs::read_to_string(&catalog).unwrap(),
        "app.title=Inventario\nproducto.not-found=El producto con id {0} no existe.\n"
    );
}

#[test]
fn test_existing_lines_are_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("messages.properties");
    let original = "# mensajes\nz.key=z\na.key=a\n";
    fs::write(&catalog, original).unwrap();

    merge_message_entry(&catalog, KEY, MESSAGE).unwrap();
    let content = fs::read_to_string(&catalog).unwrap();
    assert!(content.starts_with(original));
}

#[test]
fn test_repeated_merge_never_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("messages.properties");

    merge_message_entry(&catalog, KEY, MESSAGE).unwrap();
    for _ in 0..3 {
        let outcome = merge_message_entry(&catalog, KEY, "otro mensaje").unwrap();
        assert_eq!(outcome, MergeOutcome::EntryExists);
    }
    let content = fs::read_to_string(&catalog).unwrap();
    assert_eq!(content.matches("producto.not-found=").count(), 1);
    assert!(!content.contains("otro mensaje"));
}

#[test]
fn test_commented_key_does_not_count() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("messages.properties");
    fs::write(&catalog, "#producto.not-found=viejo\n").unwrap();

    let outcome = merge_message_entry(&catalog, KEY, MESSAGE).unwrap();
    assert_eq!(outcome, MergeOutcome::Appended);
    assert_eq!(
        fs::read_to_string(&catalog)
            .unwrap()
            .lines()
            .filter(|l| l.starts_with("producto.not-found="))
            .count(),
        1
    );
}

#[test]
fn test_unreadable_catalog_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    // a directory where the catalog file should be
    let catalog = dir.path().join("messages.properties");
    fs::create_dir(&catalog).unwrap();
    assert!(merge_message_entry(&catalog, KEY, MESSAGE).is_err());
}
