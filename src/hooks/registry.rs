//! Per-game hook lookup table.

use std::collections::HashMap;

use crate::{
    hooks::{CatalogEntry, HookConfig, HookEntry, HookKey},
    GameId,
};

/// The hooks of one game, indexed by address.
///
/// Built once when the game starts by filtering the catalog down to the
/// entries tagged with the running game, then only read. The invoker queries
/// it before every instruction, so lookups by [`HookKey`] are the hot path.
///
/// # Examples
///
/// ```rust
/// use scihooks::{hooks::{HookKey, HookRegistry, ALL_GAMES_HOOKS}, GameId};
///
/// let registry = HookRegistry::build(ALL_GAMES_HOOKS, GameId::Qfg1);
/// assert!(registry.get(HookKey::new(0x0018, 0x144d)).is_some());
///
/// let registry = HookRegistry::build(ALL_GAMES_HOOKS, GameId::Kq5);
/// assert!(registry.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct HookRegistry {
    game: GameId,
    hooks: HashMap<HookKey, HookEntry>,
}

impl HookRegistry {
    /// Builds the registry of `game` from `catalog`.
    ///
    /// Every entry tagged with `game` is inserted under its key; all other
    /// entries are skipped. An empty result is valid.
    #[must_use]
    pub fn build(catalog: &[CatalogEntry], game: GameId) -> Self {
        Self::build_with(catalog, game, &HookConfig::default())
    }

    /// Builds the registry of `game`, honouring `config`.
    ///
    /// A disabled config yields an empty registry, and keys listed in
    /// [`HookConfig::disabled`] are left out.
    #[must_use]
    pub fn build_with(catalog: &[CatalogEntry], game: GameId, config: &HookConfig) -> Self {
        let mut hooks = HashMap::new();
        if config.enabled {
            for item in catalog.iter().filter(|item| item.game == game) {
                if config.disabled.contains(&item.key) {
                    continue;
                }
                hooks.insert(item.key, item.entry);
            }
        }

        tracing::debug!(
            target: "scihooks::patcher",
            game = %game,
            hooks = hooks.len(),
            "built hook registry"
        );

        HookRegistry { game, hooks }
    }

    /// Returns the game this registry was built for.
    #[must_use]
    pub fn game(&self) -> GameId {
        self.game
    }

    /// Returns the hook registered at `key`.
    #[must_use]
    #[inline]
    pub fn get(&self, key: HookKey) -> Option<&HookEntry> {
        self.hooks.get(&key)
    }

    /// Returns the number of hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns `true` if no hooks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns an iterator over all hooks, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&HookKey, &HookEntry)> {
        self.hooks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::{EngineState, MethodInvoker},
        hooks::{Dispatch, HookFingerprint},
    };

    fn noop(_state: &mut EngineState, _invoker: &mut dyn MethodInvoker) {}

    const fn entry(game: GameId, segment: u32, offset: u32, name: &'static str) -> CatalogEntry {
        CatalogEntry {
            game,
            key: HookKey::new(segment, offset),
            entry: HookEntry {
                name,
                fingerprint: HookFingerprint {
                    script: 1,
                    obj_name: "rm1",
                    dispatch: Dispatch::Selector("init"),
                    opcode: "ret",
                },
                handler: noop,
            },
        }
    }

    const CATALOG: &[CatalogEntry] = &[
        entry(GameId::Qfg1, 0x10, 0x100, "a1"),
        entry(GameId::Sq4, 0x10, 0x100, "b1"),
        entry(GameId::Qfg1, 0x11, 0x200, "a2"),
        entry(GameId::Kq5, 0x12, 0x300, "c1"),
        entry(GameId::Sq4, 0x13, 0x400, "b2"),
    ];

    #[test]
    fn test_build_filters_by_game() {
        for game in [GameId::Qfg1, GameId::Sq4, GameId::Kq5, GameId::Lsl1] {
            let registry = HookRegistry::build(CATALOG, game);
            let expected: Vec<_> = CATALOG.iter().filter(|c| c.game == game).collect();

            assert_eq!(registry.game(), game);
            assert_eq!(registry.len(), expected.len());
            for item in expected {
                let hook = registry.get(item.key).unwrap();
                assert_eq!(hook.name, item.entry.name);
            }
        }
    }

    #[test]
    fn test_same_address_different_games() {
        let qfg1 = HookRegistry::build(CATALOG, GameId::Qfg1);
        let sq4 = HookRegistry::build(CATALOG, GameId::Sq4);
        let key = HookKey::new(0x10, 0x100);
        assert_eq!(qfg1.get(key).unwrap().name, "a1");
        assert_eq!(sq4.get(key).unwrap().name, "b1");
    }

    #[test]
    fn test_other_games_keys_miss() {
        let registry = HookRegistry::build(CATALOG, GameId::Qfg1);
        assert!(registry.get(HookKey::new(0x12, 0x300)).is_none());
        assert!(registry.get(HookKey::new(0x13, 0x400)).is_none());
    }

    #[test]
    fn test_empty_for_unknown_game() {
        let registry = HookRegistry::build(CATALOG, GameId::Pq2);
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }

    #[test]
    fn test_build_with_disabled_config() {
        let registry = HookRegistry::build_with(CATALOG, GameId::Qfg1, &HookConfig::disabled());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_build_with_disabled_key() {
        let config = HookConfig::default().with_disabled(HookKey::new(0x11, 0x200));
        let registry = HookRegistry::build_with(CATALOG, GameId::Qfg1, &config);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(HookKey::new(0x10, 0x100)).is_some());
        assert!(registry.get(HookKey::new(0x11, 0x200)).is_none());
    }
}
