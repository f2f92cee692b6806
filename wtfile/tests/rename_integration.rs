//! Integration tests for fragment renames on a real filesystem.
//!
//! Each test gets a fresh scratch directory holding `tmp.file`, renames it
//! through its name, stem and extension fragments, and checks what the
//! directory holds afterwards.

mod common;

use common::Scarecrow;
use wtfile::{Error, FilePath, FragmentKind};

#[test]
fn test_fragments_of_scratch_file() {
    let env = Scarecrow::new();

    assert_eq!(env.file.extension(), ".file");
    assert_eq!(env.file.extension().kind(), FragmentKind::Extension);
    assert_eq!(env.file.stem(), "tmp");
    assert_eq!(env.file.stem().kind(), FragmentKind::Stem);
    assert_eq!(env.file.name(), "tmp.file");
    assert_eq!(env.file.name().kind(), FragmentKind::Name);
}

#[test]
fn test_fragment_concatenation_keeps_kind() {
    let env = Scarecrow::new();

    let ext = env.file.extension() + "x";
    assert_eq!(ext, ".filex");
    assert_eq!(ext.kind(), FragmentKind::Extension);

    let stem = "x" + env.file.stem();
    assert_eq!(stem, "xtmp");
    assert_eq!(stem.kind(), FragmentKind::Stem);

    assert_eq!("x" + env.file.extension(), ".xfile");
    assert_eq!("x" + FilePath::from("file").extension(), ".x");
    assert_eq!("x" + env.file.name(), "xtmp.file");
}

#[test]
fn test_rename_chain_through_fragments() {
    let env = Scarecrow::new();

    let file = env.file.extension().call("xfile", false).unwrap();
    assert_eq!(file.extension(), ".xfile");
    assert_eq!(env.listing(), vec!["tmp.xfile"]);

    let file = file.stem().call("tmpx", false).unwrap();
    assert_eq!(file.stem(), "tmpx");
    assert_eq!(env.listing(), vec!["tmpx.xfile"]);

    let file = file.name().call("tmp.file", false).unwrap();
    assert_eq!(file.name(), "tmp.file");
    assert_eq!(env.listing(), vec!["tmp.file"]);
    assert_eq!(file, env.file);
}

#[test]
fn test_dry_rename_leaves_disk_alone() {
    let env = Scarecrow::new();

    let preview = env.file.extension().call("xfile", true).unwrap();
    assert_eq!(preview.extension(), ".xfile");
    assert_eq!(preview.extension().kind(), FragmentKind::Extension);
    assert_eq!(env.listing(), vec!["tmp.file"]);
}

#[test]
fn test_rename_methods_on_path() {
    let env = Scarecrow::new();

    let renamed = env.file.with_extension("md", false).unwrap();
    assert_eq!(renamed.name(), "tmp.md");
    let renamed = renamed.with_stem("notes", false).unwrap();
    assert_eq!(renamed.name(), "notes.md");
    let renamed = renamed.with_name("final.txt", false).unwrap();
    assert!(renamed.is_file());
    assert_eq!(env.listing(), vec!["final.txt"]);
}

#[test]
fn test_rename_missing_source_fails() {
    let env = Scarecrow::new();
    let ghost = env.dir.join("ghost.file");

    let err = ghost.name().call("spirit.file", false).unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, Error::Io { operation: "rename", .. }));
    assert_eq!(env.listing(), vec!["tmp.file"]);
}

#[test]
fn test_fragment_cannot_be_joined() {
    let env = Scarecrow::new();

    let err = (env.file.extension() / "x").unwrap_err();
    assert!(matches!(err, Error::NotJoinable { .. }));
}
