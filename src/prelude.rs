//! # scihooks Prelude
//!
//! Re-exports of the types an interpreter needs to wire hooks in.
//!
//! ```rust
//! use scihooks::prelude::*;
//!
//! let hooks = VmHooks::with_config(GameId::Qfg1, HookConfig::quiet());
//! assert!(hooks.registry().get(HookKey::new(0x0018, 0x144d)).is_some());
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type
pub use crate::Error;

/// The result type used throughout scihooks
pub use crate::Result;

/// Identifier of a supported game
pub use crate::GameId;

// ================================================================================================
// Engine
// ================================================================================================

/// Engine state and the call builder handlers use
pub use crate::engine::{CallBuilder, EngineState};

/// VM values and stack addressing
pub use crate::engine::{DataStack, ExecStack, FrameId, Reg, StackPtr};

/// Services the interpreter provides
pub use crate::engine::{
    CallRequest, EngineHost, MethodInvoker, Script, SegmentManager, SelectorTable,
};

// ================================================================================================
// Hooks
// ================================================================================================

/// Per-instruction entry point
pub use crate::hooks::{HookOutcome, VmHooks};

/// Configuration
pub use crate::hooks::{HookConfig, LogChannels};

/// Catalog and registry
pub use crate::hooks::{
    validate_catalog, CatalogEntry, Dispatch, HookEntry, HookFingerprint, HookHandler, HookKey,
    HookRegistry, ALL_GAMES_HOOKS,
};

/// Matching
pub use crate::hooks::{HookMatcher, LiveContext};
