//! Hook handlers, one module per game.
//!
//! Every handler has the [`HookHandler`](crate::hooks::HookHandler) signature
//! and is referenced from the catalog. Handlers that inject a call go through
//! [`EngineState::begin_call`](crate::engine::EngineState::begin_call); they
//! never touch the stack pointer directly.

pub mod qfg1;
