use thiserror::Error;

use crate::{engine::StackPtr, hooks::HookKey};

macro_rules! catalog_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Catalog {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Catalog {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which covers every failure this library can report.
///
/// None of these errors ever reaches the per-instruction hook entry point.
/// Hook handlers, such as
/// [`die_after_running_on_ice`](crate::hooks::handlers::qfg1::die_after_running_on_ice),
/// log call builder failures at warning level themselves and return, so
/// [`VmHooks::before_exec`](crate::VmHooks::before_exec) never sees a `Result`
/// and interpretation continues unmodified. The errors are surfaced as values
/// by the lower-level building blocks (the call builder, catalog validation,
/// game id parsing) so that callers and tests can inspect them.
///
/// # Error Categories
///
/// ## Stack Errors
/// - [`Error::StackOverflow`] - A push would run past the end of the data stack
/// - [`Error::StackUnderflow`] - A frame boundary would fall below the stack base
/// - [`Error::InvalidCallFrame`] - An injected call lacks its argument count or forwarded block
/// - [`Error::InvalidStackPointer`] - A stack pointer does not address the data stack
///
/// ## Frame Errors
/// - [`Error::UnknownFrame`] - A frame handle does not name an execution stack entry
///
/// ## Catalog Errors
/// - [`Error::DuplicateHook`] - Two catalog entries of one game share a hook key
/// - [`Error::Catalog`] - Any other authoring defect in a catalog entry
///
/// ## Identity Errors
/// - [`Error::UnknownGame`] - A game id string names no supported game
///
/// # Examples
///
/// ```rust
/// use scihooks::{hooks::validate_catalog, Error};
///
/// match validate_catalog(scihooks::hooks::ALL_GAMES_HOOKS) {
///     Ok(()) => {}
///     Err(Error::DuplicateHook { game, key }) => eprintln!("{game}: {key} hooked twice"),
///     Err(e) => eprintln!("catalog defect: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    // Stack Errors
    /// A push would write past the end of the data stack.
    ///
    /// The call builder checks every push against the stack capacity instead of
    /// writing through a raw pointer.
    #[error("Stack overflow - pushing at {sp} exceeds capacity {capacity}")]
    StackOverflow {
        /// The stack pointer at which the push was attempted
        sp: StackPtr,
        /// The number of slots the data stack holds
        capacity: usize,
    },

    /// A new frame boundary would fall below the base of the data stack.
    #[error("Stack underflow - cannot move {sp} down by {words} words")]
    StackUnderflow {
        /// The stack pointer the boundary was computed from
        sp: StackPtr,
        /// The number of words the boundary was moved down by
        words: usize,
    },

    /// An injected call was started without room for its argument count and
    /// its forwarded `&rest` block.
    #[error("Invalid call frame - {pushed} pushed words cannot hold an argument count and {forwarded} forwarded words")]
    InvalidCallFrame {
        /// The number of words pushed for the call
        pushed: usize,
        /// The number of words declared as forwarded `&rest` block
        forwarded: usize,
    },

    /// A stack pointer does not address a slot of the data stack.
    #[error("Invalid stack pointer {0}")]
    InvalidStackPointer(StackPtr),

    // Frame Errors
    /// A frame handle does not name an entry of the execution stack.
    #[error("Unknown execution stack frame #{0}")]
    UnknownFrame(usize),

    // Catalog Errors
    /// Two catalog entries for the same game are registered at one address.
    ///
    /// The registry keeps one entry per key, so the second entry would silently
    /// shadow the first. This is an authoring defect of the compiled-in catalog.
    #[error("Duplicate hook for {game} at {key}")]
    DuplicateHook {
        /// The game both entries belong to
        game: crate::GameId,
        /// The shared hook address
        key: HookKey,
    },

    /// The hook catalog contains a malformed entry.
    ///
    /// The error includes the source location where the defect was detected.
    #[error("Catalog - {file}:{line}: {message}")]
    Catalog {
        /// The message to be printed for the Catalog error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    // Identity Errors
    /// A game identifier string does not name a supported game.
    #[error("Unknown game id '{0}'")]
    UnknownGame(String),
}
