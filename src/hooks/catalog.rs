//! The compiled-in hook catalog.
//!
//! Every hook the engine knows about is listed in [`ALL_GAMES_HOOKS`], tagged
//! with the game it was written for. Addresses are only meaningful for the
//! exact release the hook was written against; the fingerprint guards against
//! other releases of the same game.
//!
//! | Game | Address | Script | Object | Dispatch | Opcode | Handler |
//! |------|---------|--------|--------|----------|--------|---------|
//! | QFG1 | `0018:144d` | 58 | `egoRuns` | `changeState` | `push0` | [`die_after_running_on_ice`](qfg1::die_after_running_on_ice) |
//! | QFG1 | `0001:199e` | 0 | `egoRuns` | export 36 | `ret` | [`report_fatal_damage`](qfg1::report_fatal_damage) |

use std::collections::HashSet;

use crate::{
    engine::is_mnemonic,
    hooks::{handlers::qfg1, CatalogEntry, Dispatch, HookEntry, HookFingerprint, HookKey},
    Error, GameId, Result,
};

/// All hooks of all games.
pub static ALL_GAMES_HOOKS: &[CatalogEntry] = &[
    CatalogEntry {
        game: GameId::Qfg1,
        key: HookKey::new(0x0018, 0x144d),
        entry: HookEntry {
            name: "qfg1-die-after-running-on-ice",
            fingerprint: HookFingerprint {
                script: 58,
                obj_name: "egoRuns",
                dispatch: Dispatch::Selector("changeState"),
                opcode: "push0",
            },
            handler: qfg1::die_after_running_on_ice,
        },
    },
    CatalogEntry {
        game: GameId::Qfg1,
        key: HookKey::new(0x0001, 0x199e),
        entry: HookEntry {
            name: "qfg1-report-fatal-damage",
            fingerprint: HookFingerprint {
                script: 0,
                obj_name: "egoRuns",
                dispatch: Dispatch::Export(36),
                opcode: "ret",
            },
            handler: qfg1::report_fatal_damage,
        },
    },
];

/// Checks a catalog for entries that could never work.
///
/// # Errors
///
/// - [`Error::DuplicateHook`] if two entries of the same game share an address
/// - [`Error::Catalog`] if an entry names an opcode the VM does not have, or
///   has an empty name
pub fn validate_catalog(catalog: &[CatalogEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(catalog.len());

    for item in catalog {
        if !seen.insert((item.game, item.key)) {
            return Err(Error::DuplicateHook {
                game: item.game,
                key: item.key,
            });
        }

        let fingerprint = &item.entry.fingerprint;
        if !is_mnemonic(fingerprint.opcode) {
            return Err(catalog_error!(
                "hook {} at {} expects unknown opcode '{}'",
                item.entry.name,
                item.key,
                fingerprint.opcode
            ));
        }

        if item.entry.name.is_empty() {
            return Err(catalog_error!("hook at {} has no name", item.key));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ice() -> CatalogEntry {
        ALL_GAMES_HOOKS[0]
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        validate_catalog(ALL_GAMES_HOOKS).unwrap();
    }

    #[test]
    fn test_builtin_catalog_is_qfg1_only() {
        assert_eq!(ALL_GAMES_HOOKS.len(), 2);
        assert!(ALL_GAMES_HOOKS.iter().all(|c| c.game == GameId::Qfg1));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let catalog = [ice(), ice()];
        match validate_catalog(&catalog) {
            Err(Error::DuplicateHook { game, key }) => {
                assert_eq!(game, GameId::Qfg1);
                assert_eq!(key, HookKey::new(0x0018, 0x144d));
            }
            other => panic!("expected duplicate hook, got {other:?}"),
        }
    }

    #[test]
    fn test_same_key_other_game_accepted() {
        let mut other = ice();
        other.game = GameId::Qfg1Vga;
        validate_catalog(&[ice(), other]).unwrap();
    }

    #[test]
    fn test_unknown_opcode_rejected() {
        let mut bad = ice();
        bad.entry.fingerprint.opcode = "pushx";
        let err = validate_catalog(&[bad]).unwrap_err();
        assert!(matches!(err, Error::Catalog { .. }));
        assert!(err.to_string().contains("pushx"));
    }

    #[test]
    fn test_unnamed_hook_rejected() {
        let mut bad = ice();
        bad.entry.name = "";
        assert!(matches!(
            validate_catalog(&[bad]),
            Err(Error::Catalog { .. })
        ));
    }
}
