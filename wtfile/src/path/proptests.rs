//! Property-based tests for path values.
//!
//! The algebra module carries light properties for the operators; this
//! module runs the heavier structural properties.

use super::rules::{join, normpath};
use super::value::FilePath;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}(\\.[a-z]{1,4})?"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..8).prop_map(|parts| parts.join("/"))
}

fn messy_path_strategy() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        "[a-z]{1,6}",
        Just(".".to_string()),
        Just("..".to_string()),
        Just(String::new()),
    ];
    prop::collection::vec(segment, 0..10).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // parent + name reconstructs the path.
    #[test]
    fn parent_and_name_rebuild_path(path in absolute_path_strategy()) {
        let file = FilePath::from(path.as_str());
        let rebuilt = file.parent().join(file.name().as_str());
        prop_assert_eq!(rebuilt, file);
    }

    // stem + extension == name.
    #[test]
    fn stem_plus_extension_is_name(path in relative_path_strategy()) {
        let file = FilePath::from(path.as_str());
        let glued = format!("{}{}", file.stem(), file.extension());
        prop_assert_eq!(glued.as_str(), file.name().as_str());
    }

    // extension is empty iff the name has no extension dot.
    #[test]
    fn extension_empty_iff_no_dot(name in "[a-z]{1,8}(\\.[a-z]{1,4})?") {
        let file = FilePath::new(["/tmp", name.as_str()]);
        prop_assert_eq!(file.extension().is_empty(), !name.contains('.'));
    }

    // Climbing past the top stays put.
    #[test]
    fn grandparent_idempotent_at_top(path in absolute_path_strategy(), rel in relative_path_strategy()) {
        let mut abs = FilePath::from(path.as_str());
        let mut relative = FilePath::from(rel.as_str());
        for _ in 0..8 {
            abs = abs.cd("...");
            relative = relative.cd("...");
        }
        prop_assert_eq!(abs.as_str(), "/");
        prop_assert_eq!(relative.as_str(), "");
        prop_assert_eq!(abs.cd("..."), abs.clone());
        prop_assert_eq!(relative.cd("..."), relative.clone());
    }

    // normpath(normpath(p)) == normpath(p)
    #[test]
    fn normpath_idempotent(path in messy_path_strategy(), absolute in any::<bool>()) {
        let text = if absolute { format!("/{path}") } else { path };
        let once = normpath(&text);
        prop_assert_eq!(normpath(&once), once);
    }

    // Joining an absolute segment discards everything before it.
    #[test]
    fn join_absolute_resets(prefix in relative_path_strategy(), abs in absolute_path_strategy()) {
        prop_assert_eq!(join([prefix.as_str(), abs.as_str()]), abs);
    }

    // Dividing a path is joining it.
    #[test]
    fn div_is_join(base in absolute_path_strategy(), rel in relative_path_strategy()) {
        let file = FilePath::from(base.as_str());
        prop_assert_eq!(&file / rel.as_str(), file.join(rel.as_str()));
        prop_assert!((file.extension() / rel.as_str()).is_err());
    }
}
