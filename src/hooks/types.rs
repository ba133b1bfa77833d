//! Core types for the hook system.
//!
//! - [`Dispatch`]: How the hooked code was entered (selector or export)
//! - [`HookFingerprint`]: The identity a live context must match
//! - [`HookHandler`]: The function run when a hook fires
//! - [`HookEntry`]: Fingerprint and handler, as stored in the registry
//! - [`CatalogEntry`]: A hook entry tagged with its game and address
//! - [`HookOutcome`]: What the invoker did for one instruction

use crate::{
    engine::{EngineState, MethodInvoker},
    hooks::HookKey,
    GameId,
};

/// How the frame running the hooked code was entered.
///
/// Scripts run either as a method reached by sending a selector to an object,
/// or as an exported procedure reached through `calle`. Exactly one of the two
/// identifies a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Entered by sending the named selector.
    Selector(&'static str),
    /// Entered by calling the export with this index.
    Export(i32),
}

impl Dispatch {
    /// Returns the selector name, or `""` for an export.
    #[must_use]
    pub fn selector(&self) -> &'static str {
        match self {
            Dispatch::Selector(name) => name,
            Dispatch::Export(_) => "",
        }
    }

    /// Returns the export id, or -1 for a selector.
    #[must_use]
    pub fn export_id(&self) -> i32 {
        match self {
            Dispatch::Selector(_) => -1,
            Dispatch::Export(id) => *id,
        }
    }
}

/// The identity the live context must have for a hook to fire.
///
/// Different releases of a game can place different code at the same address,
/// so a key hit is not enough: the script number, the object, the dispatch and
/// the instruction about to execute must all agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HookFingerprint {
    /// Number of the script containing the hooked instruction.
    pub script: u16,
    /// Name of the object the running frame belongs to.
    pub obj_name: &'static str,
    /// Selector or export the running frame was entered through.
    pub dispatch: Dispatch,
    /// Mnemonic of the instruction at the hooked address.
    pub opcode: &'static str,
}

/// Function run when a hook fires.
///
/// Handlers get the full engine state and the interpreter's call primitive.
/// They run synchronously before the hooked instruction and may change what
/// the interpreter executes next by switching the active frame.
pub type HookHandler = fn(&mut EngineState, &mut dyn MethodInvoker);

/// A registered hook: what to check, and what to do.
#[derive(Clone, Copy, Debug)]
pub struct HookEntry {
    /// Short name for diagnostics.
    pub name: &'static str,
    /// The identity to verify before running the handler.
    pub fingerprint: HookFingerprint,
    /// The patch itself.
    pub handler: HookHandler,
}

/// One line of the compiled-in hook catalog.
#[derive(Clone, Copy, Debug)]
pub struct CatalogEntry {
    /// The game the hook was written for.
    pub game: GameId,
    /// Address of the hooked instruction.
    pub key: HookKey,
    /// Fingerprint and handler.
    pub entry: HookEntry,
}

/// What [`VmHooks::intercept`](crate::VmHooks::intercept) did for one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookOutcome {
    /// No hook is registered at the program counter.
    NotHooked,
    /// A hook is registered here but the live context did not match its
    /// fingerprint. Nothing was changed.
    Mismatch,
    /// The hook matched and its handler ran.
    Applied,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_accessors() {
        let send = Dispatch::Selector("changeState");
        assert_eq!(send.selector(), "changeState");
        assert_eq!(send.export_id(), -1);

        let calle = Dispatch::Export(36);
        assert_eq!(calle.selector(), "");
        assert_eq!(calle.export_id(), 36);
    }
}
