// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # scihooks
//!
//! Runtime patches for SCI game scripts, applied from inside the bytecode
//! interpreter.
//!
//! Some script bugs in SCI games depend on runtime state and cannot be fixed
//! by rewriting script bytes. `scihooks` lets the interpreter run a small
//! native handler immediately before a specific instruction of a specific
//! game executes. The handler sees the full engine state and can change it,
//! including starting a call to another script procedure.
//!
//! ## Features
//!
//! - **Per-game registry** - Only the running game's hooks are consulted
//! - **Fingerprint matching** - Script, object, selector or export, and opcode
//!   must all agree before a patch runs, so other releases of a game are safe
//! - **Checked call injection** - The [`engine::CallBuilder`] reproduces the
//!   `calle` sequence with bounds-checked stack access
//! - **Structured diagnostics** - Applied and mismatched hooks are reported
//!   through [`tracing`]
//!
//! ## Quick Start
//!
//! ```rust
//! use scihooks::prelude::*;
//!
//! let hooks = VmHooks::new(GameId::Qfg1);
//! assert_eq!(hooks.registry().len(), 2);
//!
//! let kq5 = VmHooks::new("kq5".parse()?);
//! assert!(kq5.registry().is_empty());
//! # Ok::<(), strum::ParseError>(())
//! ```
//!
//! The interpreter calls [`VmHooks::before_exec`] once per instruction, before
//! decoding it, passing its [`engine::EngineState`] and a host implementing
//! [`engine::EngineHost`]:
//!
//! ```rust,ignore
//! loop {
//!     hooks.before_exec(&mut state, &mut engine);
//!     if state.execution_stack_pos_changed {
//!         // reload the active frame
//!     }
//!     step(&mut state, &mut engine);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`engine`] - The slice of VM state hooks operate on, and the traits the
//!   interpreter implements
//! - [`hooks`] - Catalog, registry, matching, handlers and the invoker
//! - [`prelude`] - Re-exports of the commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! The per-instruction entry point never fails: problems inside a handler are
//! logged and interpretation continues. The building blocks below it return
//! [`Result`]:
//!
//! ```rust
//! use scihooks::{Error, GameId};
//!
//! match GameId::parse("qfg9") {
//!     Ok(game) => println!("running {game}"),
//!     Err(Error::UnknownGame(id)) => println!("no hooks for {id}"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

#[macro_use]
pub(crate) mod error;

#[cfg(test)]
pub(crate) mod test;

mod game;

pub mod engine;
pub mod hooks;
pub mod prelude;

/// `scihooks` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `scihooks` Error type
///
/// The main error type for all operations in this crate. See [`Error`] for
/// the individual variants.
pub use error::Error;

/// Identifier of a supported game.
pub use game::GameId;

/// Per-instruction hook dispatcher.
pub use hooks::VmHooks;
