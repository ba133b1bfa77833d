//! Execution stack frames.
//!
//! Each active call in the VM is described by an [`ExecStack`] entry: which
//! object it runs on, where its code is, and which region of the
//! [`DataStack`](crate::engine::DataStack) belongs to it.

use std::fmt;

use crate::engine::{Reg, StackPtr};

/// Handle of an entry on the execution stack.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Returns the position of the frame on the execution stack.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameId({})", self.0)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry of the execution stack.
///
/// `debug_selector` and `debug_export_id` record how the frame was entered: a
/// `send` sets the selector and leaves the export id at -1, a `calle` does the
/// opposite. Plain `call`s leave both at -1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecStack {
    /// The object whose method is running.
    pub objp: Reg,
    /// The object the message was originally sent to.
    pub send_obj: Reg,
    /// Address of the next instruction to execute.
    pub pc: Reg,
    /// Stack pointer: next free slot of the data stack.
    pub sp: StackPtr,
    /// Frame pointer: first temporary of this frame.
    pub fp: StackPtr,
    /// Slot holding the argument count; arguments follow it.
    pub argp: StackPtr,
    /// Number of arguments passed to this frame.
    pub argc: u16,
    /// Selector of the dispatch that created this frame, or -1.
    pub debug_selector: i32,
    /// Export index of the dispatch that created this frame, or -1.
    pub debug_export_id: i32,
    /// Script number owning the code, or -1 when unknown.
    pub debug_script: i32,
}

impl ExecStack {
    /// Creates a frame running `pc` on `objp` with no recorded dispatch.
    #[must_use]
    pub fn new(objp: Reg, pc: Reg, sp: StackPtr) -> Self {
        ExecStack {
            objp,
            send_obj: objp,
            pc,
            sp,
            fp: sp,
            argp: sp,
            argc: 0,
            debug_selector: -1,
            debug_export_id: -1,
            debug_script: -1,
        }
    }

    /// Records that the frame was entered by sending `selector`.
    #[must_use]
    pub fn with_selector(mut self, selector: i32) -> Self {
        self.debug_selector = selector;
        self.debug_export_id = -1;
        self
    }

    /// Records that the frame was entered by calling export `export_id`.
    #[must_use]
    pub fn with_export(mut self, export_id: i32) -> Self {
        self.debug_export_id = export_id;
        self.debug_selector = -1;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_kind_is_exclusive() {
        let frame = ExecStack::new(Reg::new(3, 0x10), Reg::new(0x18, 0), StackPtr(0))
            .with_selector(42)
            .with_export(7);
        assert_eq!(frame.debug_export_id, 7);
        assert_eq!(frame.debug_selector, -1);

        let frame = frame.with_selector(42);
        assert_eq!(frame.debug_selector, 42);
        assert_eq!(frame.debug_export_id, -1);
    }

    #[test]
    fn test_new_frame_defaults() {
        let frame = ExecStack::new(Reg::new(3, 0x10), Reg::new(0x18, 0x20), StackPtr(5));
        assert_eq!(frame.send_obj, frame.objp);
        assert_eq!(frame.fp, StackPtr(5));
        assert_eq!(frame.argc, 0);
        assert_eq!(frame.debug_script, -1);
    }
}
