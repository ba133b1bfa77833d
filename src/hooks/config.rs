//! Hook system configuration.
//!
//! [`HookConfig`] controls which catalog entries are registered and which
//! diagnostics the invoker emits.
//!
//! # Presets
//!
//! - [`HookConfig::default()`] - All hooks, all diagnostics
//! - [`HookConfig::quiet()`] - All hooks, only mismatch warnings
//! - [`HookConfig::disabled()`] - No hooks at all
//!
//! # Example
//!
//! ```rust
//! use scihooks::hooks::{HookConfig, HookKey, LogChannels};
//!
//! let config = HookConfig::quiet()
//!     .with_log(LogChannels::MATCHES | LogChannels::MISMATCHES)
//!     .with_disabled(HookKey::new(0x0001, 0x199e));
//! assert!(config.log.contains(LogChannels::MATCHES));
//! ```

use bitflags::bitflags;

use crate::hooks::HookKey;

bitflags! {
    /// Diagnostic channels of the hook system.
    ///
    /// All channels log to the `scihooks::patcher` tracing target. Handlers
    /// log on their own, inside the `hook` span the invoker opens for them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LogChannels: u8 {
        /// A hook matched and its handler runs (`debug`).
        const MATCHES = 0x01;
        /// A hook address was hit but the fingerprint did not match (`warn`).
        const MISMATCHES = 0x02;
    }
}

/// Configuration for the hook system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HookConfig {
    /// Register catalog hooks at all.
    ///
    /// When `false`, the registry is built empty and every instruction takes
    /// the fast path.
    pub enabled: bool,

    /// Diagnostic channels to emit.
    pub log: LogChannels,

    /// Catalog entries to leave out, by address.
    ///
    /// Useful for isolating a single patch when a game behaves unexpectedly.
    pub disabled: Vec<HookKey>,
}

impl HookConfig {
    /// All hooks enabled, only mismatch warnings logged.
    #[must_use]
    pub fn quiet() -> Self {
        HookConfig {
            log: LogChannels::MISMATCHES,
            ..Self::default()
        }
    }

    /// No hooks registered.
    #[must_use]
    pub fn disabled() -> Self {
        HookConfig {
            enabled: false,
            ..Self::default()
        }
    }

    /// Sets the diagnostic channels.
    #[must_use]
    pub fn with_log(mut self, log: LogChannels) -> Self {
        self.log = log;
        self
    }

    /// Leaves the hook at `key` out of the registry.
    #[must_use]
    pub fn with_disabled(mut self, key: HookKey) -> Self {
        self.disabled.push(key);
        self
    }

    /// Checks whether `channel` is enabled.
    #[must_use]
    pub fn logs(&self, channel: LogChannels) -> bool {
        self.log.contains(channel)
    }
}

impl Default for HookConfig {
    /// All hooks enabled, all channels logged.
    fn default() -> Self {
        HookConfig {
            enabled: true,
            log: LogChannels::all(),
            disabled: Vec::new(),
        }
    }
}
