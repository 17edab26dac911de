use super::*;

#[test]
fn from_name_maps_known_extensions() {
    assert_eq!(LanguageId::from_name("feature.tsx"), LanguageId::TypeScript);
    assert_eq!(LanguageId::from_name("ai.ts"), LanguageId::TypeScript);
    assert_eq!(LanguageId::from_name("README.md"), LanguageId::Markdown);
    assert_eq!(LanguageId::from_name("lib.RS"), LanguageId::Rust);
    assert_eq!(LanguageId::from_name("package.json"), LanguageId::Json);
}

#[test]
fn from_name_falls_back_to_plain_text() {
    assert_eq!(LanguageId::from_name("Makefile"), LanguageId::PlainText);
    assert_eq!(LanguageId::from_name(".gitignore"), LanguageId::PlainText);
    assert_eq!(LanguageId::from_name("notes.txt"), LanguageId::PlainText);
    assert_eq!(LanguageId::PlainText.language_id(), "plaintext");
}

#[test]
fn from_name_only_knows_the_listed_extensions() {
    assert_eq!(LanguageId::from_name(".ts"), LanguageId::TypeScript);
    assert_eq!(LanguageId::from_name("index.js"), LanguageId::PlainText);
    assert_eq!(LanguageId::from_name("mod.mts"), LanguageId::PlainText);
    assert_eq!(LanguageId::from_name("notes.markdown"), LanguageId::PlainText);
}
