//! Runtime patching of game scripts.
//!
//! Some games ship with script bugs that cannot be fixed by patching the
//! script bytes. The hook system lets the engine run native code right before
//! a specific instruction of a specific game executes, and from there change
//! the engine state: adjust registers, push values, or start a call the script
//! forgot to make.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐       ┌─────────────────────────┐
//! │     ALL_GAMES_HOOKS      │       │       HookConfig        │
//! │ (game, key, fingerprint, │       │ enabled, log, disabled  │
//! │        handler)          │       └────────────┬────────────┘
//! └────────────┬─────────────┘                    │
//!              │ filter by running game           │
//!              ▼                                  ▼
//!        ┌────────────────────────────────────────────┐
//!        │              HookRegistry                  │
//!        │        HashMap<HookKey, HookEntry>         │
//!        └─────────────────────┬──────────────────────┘
//!                              │ lookup by PC
//!                              ▼
//!        ┌────────────────────────────────────────────┐
//!        │                 VmHooks                    │
//!        │  capture LiveContext → match → handler     │
//!        └────────────────────────────────────────────┘
//! ```
//!
//! # Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`key`] | [`HookKey`], the address of a hooked instruction |
//! | [`types`] | Fingerprints, handlers, catalog entries and outcomes |
//! | [`matcher`] | [`HookMatcher`] and the [`LiveContext`] it checks |
//! | [`registry`] | [`HookRegistry`], the per-game lookup table |
//! | [`config`] | [`HookConfig`] and the diagnostic channels |
//! | [`catalog`] | [`ALL_GAMES_HOOKS`] and [`validate_catalog`] |
//! | [`handlers`] | The patches, grouped by game |
//! | [`invoker`] | [`VmHooks`](crate::VmHooks), the per-instruction entry point |
//!
//! # Matching
//!
//! An address alone does not identify a patch site: the same game was released
//! in several versions, and the heap layout differs between them. Every hook
//! therefore carries a [`HookFingerprint`] which must match the live context
//! exactly before its handler runs. A hook whose address is hit but whose
//! fingerprint does not match is reported and skipped.
//!
//! # Logging
//!
//! All diagnostics use the `scihooks::patcher` tracing target. Applied hooks
//! log at `debug`, mismatches at `warn`. Handlers run inside a `hook` span
//! carrying the hook's name.

pub mod catalog;
pub mod config;
pub mod handlers;
pub mod invoker;
pub mod key;
pub mod matcher;
pub mod registry;
pub mod types;

pub use catalog::{validate_catalog, ALL_GAMES_HOOKS};
pub use config::{HookConfig, LogChannels};
pub use invoker::VmHooks;
pub use key::HookKey;
pub use matcher::{HookMatcher, LiveContext};
pub use registry::HookRegistry;
pub use types::{
    CatalogEntry, Dispatch, HookEntry, HookFingerprint, HookHandler, HookOutcome,
};
