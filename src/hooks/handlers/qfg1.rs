//! Quest for Glory I (EGA) patches.
//!
//! # Running on ice (room 58)
//!
//! Typing "run" on the ice in room 58 assigns the `egoRuns` script to the
//! hero. Its `changeState` calls `proc0_36`, which deducts the damage of the
//! fall from the hero's health and returns 0 once the hero should die. The
//! return value is never checked, so the hero keeps falling and losing health
//! without ever dying.
//!
//! The hook fires on the `push0` right after the `proc0_36` call returns and
//! does what the script forgot: if the accumulator says the hero is dead, it
//! calls the game's death handler `proc0_1` the same way `proc0_29` in the main
//! script does for "Death from Overwork".

use crate::{
    engine::{EngineState, FrameId, MethodInvoker},
    Result,
};

/// Script exporting the death handler.
const DEATH_SCRIPT: u16 = 0;
/// Export index of the death handler (`proc0_1`).
const DEATH_EXPORT: u16 = 1;

/// Kills the hero when the damage taken while running on ice was fatal.
///
/// Expects the result of `proc0_36` in the accumulator: 0 means the hero has
/// no health left. Any other value leaves the state untouched.
pub fn die_after_running_on_ice(state: &mut EngineState, invoker: &mut dyn MethodInvoker) {
    if state.acc.offset() != 0 {
        return;
    }

    match call_death_handler(state, invoker) {
        Ok(Some(frame)) => {
            tracing::debug!(target: "scihooks::patcher", %frame, "hero died running on ice");
        }
        Ok(None) => {
            tracing::warn!(
                target: "scihooks::patcher",
                "death handler could not be started, hero survives"
            );
        }
        Err(e) => {
            tracing::warn!(
                target: "scihooks::patcher",
                error = %e,
                "failed to build death handler call"
            );
        }
    }
}

/// Calls `proc0_1` with the arguments `proc0_29` passes for a death by overwork.
///
/// The script passes message 80 and the address of the "Death from Overwork"
/// string. The message number and string are not resolved here; 0 and the
/// current PC take their two slots.
fn call_death_handler(
    state: &mut EngineState,
    invoker: &mut dyn MethodInvoker,
) -> Result<Option<FrameId>> {
    let pc = state.pc();

    let mut call = state.begin_call();
    call.push_int(8)?;
    call.push_int(0)?;
    call.push_int(59)?;
    call.push_int(0)?;
    call.push(pc)?;
    call.push_int(82)?;
    call.push_int(800)?;
    call.push_int(1)?;
    call.push_int(4)?;
    call.call(invoker, DEATH_SCRIPT, DEATH_EXPORT)
}

/// Reports when `proc0_36` decided that the hero dies.
///
/// Inspection only: runs on the `ret` of `proc0_36` and never changes state.
pub fn report_fatal_damage(state: &mut EngineState, _invoker: &mut dyn MethodInvoker) {
    if state.acc.offset() == 0 {
        tracing::debug!(
            target: "scihooks::patcher",
            "0_36 has decided that you're going to die"
        );
    }
}
