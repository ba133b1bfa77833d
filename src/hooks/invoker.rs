//! The per-instruction hook entry point.
//!
//! [`VmHooks`] owns the registry of the running game and is consulted by the
//! interpreter immediately before each instruction executes.
//!
//! ```text
//! before_exec(state, host)
//!        │
//!        ▼
//!  key = HookKey::from(pc) ──► registry miss ──► NotHooked (no work)
//!        │ hit
//!        ▼
//!  LiveContext::capture ──► fingerprint differs ──► Mismatch (warn)
//!        │ match
//!        ▼
//!  handler(state, host) inside `hook` span ──► Applied
//! ```
//!
//! A hit that fails to match is a sign that the running game is a different
//! release than the one the hook was written for. It is logged and otherwise
//! ignored; the original instruction runs unpatched.

use crate::{
    engine::{EngineHost, EngineState},
    hooks::{
        CatalogEntry, HookConfig, HookKey, HookMatcher, HookOutcome, HookRegistry, LiveContext,
        LogChannels, ALL_GAMES_HOOKS,
    },
    GameId,
};

/// Hook dispatcher for one running game.
///
/// # Example
///
/// ```rust
/// use scihooks::{hooks::HookConfig, GameId, VmHooks};
///
/// let hooks = VmHooks::with_config(GameId::Qfg1, HookConfig::quiet());
/// assert_eq!(hooks.registry().len(), 2);
///
/// // Interpreter loop:
/// // hooks.before_exec(&mut state, &mut host);
/// // execute(state.pc());
/// ```
#[derive(Clone, Debug)]
pub struct VmHooks {
    registry: HookRegistry,
    config: HookConfig,
}

impl VmHooks {
    /// Creates the dispatcher for `game` from the built-in catalog.
    #[must_use]
    pub fn new(game: GameId) -> Self {
        Self::with_config(game, HookConfig::default())
    }

    /// Creates the dispatcher for `game` from the built-in catalog, using `config`.
    #[must_use]
    pub fn with_config(game: GameId, config: HookConfig) -> Self {
        Self::for_catalog(ALL_GAMES_HOOKS, game, config)
    }

    /// Creates the dispatcher for `game` from an arbitrary catalog.
    #[must_use]
    pub fn for_catalog(catalog: &[CatalogEntry], game: GameId, config: HookConfig) -> Self {
        let registry = HookRegistry::build_with(catalog, game, &config);
        VmHooks { registry, config }
    }

    /// Returns the registry of the running game.
    #[must_use]
    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    /// Runs the hook registered at the program counter, if any.
    ///
    /// Call this before every instruction. Hooks can only change the state;
    /// they never fail and never stop interpretation.
    #[inline]
    pub fn before_exec<H: EngineHost>(&self, state: &mut EngineState, host: &mut H) {
        let _ = self.intercept(state, host);
    }

    /// Runs the hook registered at the program counter and reports what happened.
    ///
    /// Unlike [`VmHooks::before_exec`], the outcome is returned so that callers
    /// can trace which instructions were patched.
    pub fn intercept<H: EngineHost>(&self, state: &mut EngineState, host: &mut H) -> HookOutcome {
        let pc = state.pc();
        let key = HookKey::from(pc);
        let Some(hook) = self.registry.get(key) else {
            return HookOutcome::NotHooked;
        };

        let context = LiveContext::capture(state, &*host);
        let matched = context.is_some_and(|c| hook.fingerprint.matches(&c));

        if !matched {
            if self.config.logs(LogChannels::MISMATCHES) {
                let fp = &hook.fingerprint;
                tracing::warn!(
                    target: "scihooks::patcher",
                    hook = hook.name,
                    %pc,
                    expected = %fp.description(),
                    live = ?context,
                    "vm_hook: failed to match!"
                );
            }
            return HookOutcome::Mismatch;
        }

        if self.config.logs(LogChannels::MATCHES) {
            let fp = &hook.fingerprint;
            tracing::debug!(
                target: "scihooks::patcher",
                "vm_hook: patching script: {}, PC: {}, obj: {}, selector: {}, extern: {}, opcode: {}",
                fp.script,
                pc,
                fp.obj_name,
                fp.dispatch.selector(),
                fp.dispatch.export_id(),
                fp.opcode
            );
        }

        let span = tracing::debug_span!(target: "scihooks::patcher", "hook", name = hook.name);
        let _enter = span.enter();
        (hook.handler)(state, host);

        HookOutcome::Applied
    }
}
