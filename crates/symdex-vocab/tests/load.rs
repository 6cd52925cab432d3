use std::io::Write;

use symdex_core::{IndexBuilder, check_collisions};
use symdex_vocab::{BUILTIN_SYMBOLS, VocabError, Vocabulary};

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_line_file() {
    let file = write_temp(".txt", "# vocabulary\nObject\nnew\n\nto_s\n");
    let vocabulary = Vocabulary::load(file.path()).unwrap();
    assert_eq!(vocabulary.names(), ["Object", "new", "to_s"]);
}

#[test]
fn loads_yaml_file() {
    let file = write_temp(".yml", "- Object\n- '<=>'\n- each_with_index\n");
    let vocabulary = Vocabulary::load(file.path()).unwrap();
    assert_eq!(vocabulary.names(), ["Object", "<=>", "each_with_index"]);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let err = Vocabulary::load(&path).unwrap_err();
    assert!(matches!(err, VocabError::Io { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn builtin_vocabulary_is_collision_free() {
    let vocabulary = Vocabulary::builtin();
    let sorted = check_collisions(vocabulary.names()).unwrap();
    assert_eq!(sorted.len(), BUILTIN_SYMBOLS.len() + 1);
}

#[test]
fn builtin_vocabulary_builds() {
    let table = IndexBuilder::from_iter(&Vocabulary::builtin())
        .build()
        .unwrap();
    assert_eq!(table.len(), 134);
    assert_eq!(table.max_depth(), 8);
    for name in &Vocabulary::builtin() {
        assert_eq!(table[table.find(name).unwrap()].text(), name);
    }
}
