//! Matching a hook fingerprint against the running VM.
//!
//! A [`LiveContext`] is captured from the engine state at the program counter
//! and compared field by field against a [`HookFingerprint`]. All fields must
//! agree; there is no partial match.
//!
//! | Field | Live source |
//! |-------|-------------|
//! | script | script loaded in the PC segment |
//! | object | name of the active frame's object |
//! | selector | name of the active frame's debug selector, if any |
//! | export | the active frame's debug export id, or -1 |
//! | opcode | mnemonic of the byte at the PC |

use crate::{
    engine::{opcode_name, EngineState, SegmentManager, SelectorTable},
    hooks::{Dispatch, HookFingerprint},
};

/// Trait for checking whether a hook applies to the live context.
///
/// [`HookFingerprint`] is the matcher used by the catalog. The trait keeps the
/// registry and the invoker independent of how a match is decided.
pub trait HookMatcher {
    /// Returns `true` if the hook applies to `context`.
    fn matches(&self, context: &LiveContext<'_>) -> bool;

    /// Returns a description of what this matcher checks, for diagnostics.
    fn description(&self) -> String;
}

/// The identity of the instruction about to execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiveContext<'a> {
    /// Number of the script containing the program counter.
    pub script: u16,
    /// Name of the object the active frame runs on.
    pub obj_name: &'a str,
    /// Name of the selector the active frame was entered through.
    pub selector: Option<&'a str>,
    /// Export the active frame was entered through, or -1.
    pub export_id: i32,
    /// Mnemonic of the instruction at the program counter.
    pub opcode: &'static str,
}

impl<'a> LiveContext<'a> {
    /// Derives the live context from the active frame.
    ///
    /// Returns `None` if the context cannot be derived: no script is loaded in
    /// the PC segment, the PC lies past the end of the script, the object has
    /// no name, or the debug selector has no name. Such a context never
    /// matches any hook.
    pub fn capture<H>(state: &EngineState, host: &'a H) -> Option<Self>
    where
        H: SegmentManager + SelectorTable + ?Sized,
    {
        let xs = state.xs();
        let script = host.script(xs.pc.segment())?;
        let opcode = opcode_name(script.opcode_at(xs.pc.offset())?);
        let obj_name = host.object_name(xs.objp)?;
        let selector = if xs.debug_selector == -1 {
            None
        } else {
            Some(host.selector_name(xs.debug_selector)?)
        };

        Some(LiveContext {
            script: script.number(),
            obj_name,
            selector,
            export_id: xs.debug_export_id,
            opcode,
        })
    }
}

impl HookMatcher for HookFingerprint {
    fn matches(&self, context: &LiveContext<'_>) -> bool {
        let dispatch_matches = match self.dispatch {
            Dispatch::Selector(name) => context.selector == Some(name),
            Dispatch::Export(_) => context.selector.is_none(),
        } && context.export_id == self.dispatch.export_id();

        context.script == self.script
            && context.obj_name == self.obj_name
            && dispatch_matches
            && context.opcode == self.opcode
    }

    fn description(&self) -> String {
        format!(
            "script={}, obj={}, selector={}, extern={}, opcode={}",
            self.script,
            self.obj_name,
            self.dispatch.selector(),
            self.dispatch.export_id(),
            self.opcode
        )
    }
}
