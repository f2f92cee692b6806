//! Integration tests for scoped working-directory changes.
//!
//! These tests change the real process working directory, which is
//! process-global, so every one of them is marked `#[serial]`.

mod common;

use std::env;
use std::fs;
use std::panic::{self, AssertUnwindSafe};

use common::Scarecrow;
use serial_test::serial;
use wtfile::{DirScope, Error, FilePath, GlobOptions};

/// The working directory with symlinks resolved, for comparing against
/// temp paths that may live behind a symlink.
fn cwd() -> std::path::PathBuf {
    fs::canonicalize(env::current_dir().unwrap()).unwrap()
}

#[test]
#[serial]
fn test_within_runs_in_directory_and_restores() {
    let env = Scarecrow::new();
    let before = env::current_dir().unwrap();
    let target = fs::canonicalize(&env.dir).unwrap();

    let seen = env.dir.within(|_| cwd()).unwrap();
    assert_eq!(seen, target);
    assert_eq!(env::current_dir().unwrap(), before);
}

#[test]
#[serial]
fn test_nested_scopes_unwind_in_order() {
    let env = Scarecrow::new();
    let inner = env.dir.join("inner").mkdir().unwrap();
    let before = env::current_dir().unwrap();

    env.dir
        .within(|outer| {
            let outer_dir = cwd();
            inner
                .within(|_| assert_eq!(cwd(), fs::canonicalize(&inner).unwrap()))
                .unwrap();
            assert_eq!(cwd(), outer_dir);
            assert_eq!(outer_dir, fs::canonicalize(outer).unwrap());
        })
        .unwrap();

    assert_eq!(env::current_dir().unwrap(), before);
}

#[test]
#[serial]
fn test_relative_paths_resolve_inside_scope() {
    let env = Scarecrow::new();

    let names = env
        .dir
        .within(|_| FilePath::empty().listdir(None))
        .unwrap()
        .unwrap();
    assert_eq!(names, vec!["tmp.file"]);
}

#[test]
#[serial]
fn test_error_inside_scope_still_restores() {
    let env = Scarecrow::new();
    let before = env::current_dir().unwrap();

    let result = env
        .dir
        .within(|_| FilePath::from("missing.txt").read_text())
        .unwrap();
    assert!(result.unwrap_err().is_not_found());
    assert_eq!(env::current_dir().unwrap(), before);
}

#[test]
#[serial]
fn test_panic_inside_scope_still_restores() {
    let env = Scarecrow::new();
    let before = env::current_dir().unwrap();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        env.dir.within(|_| panic!("boom")).unwrap();
    }));
    assert!(outcome.is_err());
    assert_eq!(env::current_dir().unwrap(), before);
}

#[test]
#[serial]
fn test_entering_missing_directory_fails() {
    let env = Scarecrow::new();
    let before = env::current_dir().unwrap();

    let err = env.dir.join("ghost").within(|_| ()).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(env::current_dir().unwrap(), before);
}

#[test]
#[serial]
fn test_explicit_scope_lifecycle() {
    let env = Scarecrow::new();
    let before = env::current_dir().unwrap();

    let mut scope = DirScope::new(env.dir.clone());
    assert!(!scope.is_entered());
    scope.enter().unwrap();
    assert!(matches!(scope.enter(), Err(Error::ScopeAlreadyEntered { .. })));
    scope.exit().unwrap();
    assert!(matches!(scope.exit(), Err(Error::ScopeNotEntered { .. })));
    assert_eq!(env::current_dir().unwrap(), before);
}

#[test]
#[serial]
fn test_relative_glob_from_untidy_relative_base() {
    let env = Scarecrow::new();
    env.dir.join("sub").mkdir().unwrap();
    env.dir.join("sub").join("a.rs").touch().unwrap();

    let found = env
        .dir
        .within(|_| {
            ["sub", "./sub", "sub//"].map(|base| {
                FilePath::from(base)
                    .glob("*.rs", GlobOptions::new().relative())
                    .unwrap()
            })
        })
        .unwrap();
    for names in found {
        assert_eq!(names, vec!["a.rs"]);
    }
}
