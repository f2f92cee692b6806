//! Property-based tests for configuration merging and validation.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::{ConfigValidator, MAX_PERMISSIONS};
use crate::io::Newline;
use crate::path::Mode;
use proptest::prelude::*;

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Text), Just(Mode::Binary)]
}

fn newline_strategy() -> impl Strategy<Value = Newline> {
    prop_oneof![
        Just(Newline::Native),
        Just(Newline::Lf),
        Just(Newline::CrLf),
        Just(Newline::Cr),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(mode_strategy()),
        prop::option::of(newline_strategy()),
        prop::option::of(0u32..=0o7777),
        prop::option::of(0u32..=0o7777),
        prop::option::of(any::<bool>()),
    )
        .prop_map(
            |(mode, newline, dir_permissions, file_permissions, case_sensitive)| Config {
                mode,
                newline,
                dir_permissions,
                file_permissions,
                case_sensitive,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher source wins; unset fields fall through.
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.mode, high.mode.or(low.mode));
        prop_assert_eq!(result.newline, high.newline.or(low.newline));
        prop_assert_eq!(result.dir_permissions, high.dir_permissions.or(low.dir_permissions));
        prop_assert_eq!(result.file_permissions, high.file_permissions.or(low.file_permissions));
        prop_assert_eq!(result.case_sensitive, high.case_sensitive.or(low.case_sensitive));
    }

    // Merging a config into itself changes nothing.
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // Permission bits validate exactly when they fit in 0o7777.
    #[test]
    fn permissions_validate_iff_in_range(bits in 0u32..0o20000) {
        let config = Config { dir_permissions: Some(bits), ..Default::default() };
        prop_assert_eq!(ConfigValidator::validate(&config).is_ok(), bits <= MAX_PERMISSIONS);
    }
}
