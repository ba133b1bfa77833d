//! Services the hook system consumes from the surrounding engine.
//!
//! The hook system does not own scripts, objects or the interpreter loop. It
//! reaches them through three narrow traits:
//!
//! | Trait | Engine component | Used for |
//! |-------|------------------|----------|
//! | [`SegmentManager`] | segment manager | script lookup, object names |
//! | [`SelectorTable`] | kernel symbol table | selector names |
//! | [`MethodInvoker`] | interpreter | starting a synthesized call |
//!
//! Anything implementing all three is an [`EngineHost`].

use crate::engine::{EngineState, FrameId, Reg, SegmentId, StackPtr};

/// A loaded script: its number and its raw bytecode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    number: u16,
    buf: Vec<u8>,
}

impl Script {
    /// Creates a script from its number and bytecode buffer.
    #[must_use]
    pub fn new(number: u16, buf: Vec<u8>) -> Self {
        Script { number, buf }
    }

    /// Returns the script number.
    #[must_use]
    pub fn number(&self) -> u16 {
        self.number
    }

    /// Returns the bytecode starting at `offset`, or `None` past the end.
    #[must_use]
    pub fn buf(&self, offset: u32) -> Option<&[u8]> {
        self.buf.get(usize::try_from(offset).ok()?..)
    }

    /// Returns the raw opcode byte at `offset`.
    #[must_use]
    pub fn opcode_at(&self, offset: u32) -> Option<u8> {
        self.buf(offset)?.first().copied()
    }
}

/// Lookup of scripts and objects by address.
pub trait SegmentManager {
    /// Returns the script loaded in `segment`, if that segment holds one.
    fn script(&self, segment: SegmentId) -> Option<&Script>;

    /// Returns the display name of the object `object` refers to.
    fn object_name(&self, object: Reg) -> Option<&str>;
}

/// Lookup of selector names.
pub trait SelectorTable {
    /// Returns the name of selector `selector`.
    fn selector_name(&self, selector: i32) -> Option<&str>;
}

/// Parameters of a call synthesized by a hook handler.
///
/// Mirrors the operands of the `calle` opcode after the interpreter has
/// adjusted the stack: arguments live in `argp + 1 ..= argp + argc`, with the
/// count itself stored at `argp`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallRequest {
    /// Script exporting the procedure.
    pub script: u16,
    /// Index into the script's export table.
    pub export: u16,
    /// Stack pointer after the arguments were pushed.
    pub frame_top: StackPtr,
    /// Object the call is made on behalf of.
    pub calling_obj: Reg,
    /// Number of arguments.
    pub argc: u16,
    /// Slot holding the argument count, which becomes the caller's stack pointer.
    pub argp: StackPtr,
}

/// The interpreter's call-initiation primitive.
pub trait MethodInvoker {
    /// Prepares a new frame for `request` on `state`'s execution stack.
    ///
    /// Returns the new frame, or `None` if the call cannot be started (for
    /// example because the export does not exist). The active frame is left
    /// for the caller to switch.
    fn execute_method(&mut self, state: &mut EngineState, request: &CallRequest)
        -> Option<FrameId>;
}

/// Everything the hook system needs from the engine.
pub trait EngineHost: SegmentManager + SelectorTable + MethodInvoker {}

impl<T: SegmentManager + SelectorTable + MethodInvoker> EngineHost for T {}
