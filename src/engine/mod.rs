//! The slice of the SCI virtual machine that hooks operate on.
//!
//! This module models the engine state a hook handler is allowed to touch,
//! together with the services it consumes from the rest of the engine.
//!
//! # Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`reg`] | [`Reg`] segment:offset values |
//! | [`opcode`] | Opcode mnemonic table |
//! | [`stack`] | [`DataStack`] and [`StackPtr`] |
//! | [`frame`] | [`ExecStack`] call frames |
//! | [`state`] | [`EngineState`] and the [`CallBuilder`] |
//! | [`host`] | Traits for the segment manager, selector table and call primitive |
//!
//! The interpreter's fetch-execute loop is not part of this crate. It owns an
//! [`EngineState`], implements [`EngineHost`], and calls
//! [`VmHooks::before_exec`](crate::VmHooks::before_exec) before each instruction.

mod frame;
mod host;
mod opcode;
mod reg;
mod stack;
mod state;

pub use frame::{ExecStack, FrameId};
pub use host::{
    CallRequest, EngineHost, MethodInvoker, Script, SegmentManager, SelectorTable,
};
pub use opcode::{is_mnemonic, opcode_name, OPCODE_NAMES};
pub use reg::{Reg, SegmentId};
pub use stack::{DataStack, StackPtr};
pub use state::{CallBuilder, EngineState};
