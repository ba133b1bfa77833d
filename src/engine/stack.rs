//! The VM data stack.
//!
//! SCI keeps parameters, temporaries and call arguments of all active frames on
//! one contiguous stack of [`Reg`] slots. Frames refer into it through
//! [`StackPtr`] indices rather than raw pointers, so every access is
//! bounds-checked.

use std::fmt;

use crate::{engine::Reg, Error, Result};

/// Index of a slot on the [`DataStack`].
///
/// A stack pointer addresses the next free slot: pushing writes at `sp` and
/// then increments it.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StackPtr(pub usize);

impl StackPtr {
    /// Returns the slot index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the pointer `words` slots further up the stack.
    #[must_use]
    pub fn up(self, words: usize) -> StackPtr {
        StackPtr(self.0 + words)
    }

    /// Returns the pointer `words` slots further down the stack, or `None` if
    /// that would fall below the stack base.
    #[must_use]
    pub fn down(self, words: usize) -> Option<StackPtr> {
        self.0.checked_sub(words).map(StackPtr)
    }
}

impl fmt::Debug for StackPtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StackPtr({})", self.0)
    }
}

impl fmt::Display for StackPtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ST:{:04x}", self.0)
    }
}

/// Fixed-capacity stack of register slots shared by all frames.
///
/// The stack never grows: SCI allocates it once when the game starts. Slots
/// above the active stack pointer keep stale values, exactly as the original
/// engine leaves them.
#[derive(Clone, Debug)]
pub struct DataStack {
    slots: Vec<Reg>,
}

impl DataStack {
    /// Default number of slots, the size SCI allocates for its stack segment.
    pub const DEFAULT_SIZE: usize = 0x1000;

    /// Creates a stack with `capacity` null-initialised slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        DataStack {
            slots: vec![Reg::NULL; capacity],
        }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Reads the slot at `sp`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStackPointer`] if `sp` is outside the stack.
    pub fn get(&self, sp: StackPtr) -> Result<Reg> {
        self.slots
            .get(sp.0)
            .copied()
            .ok_or(Error::InvalidStackPointer(sp))
    }

    /// Writes the slot at `sp`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StackOverflow`] if `sp` is outside the stack.
    pub fn set(&mut self, sp: StackPtr, value: Reg) -> Result<()> {
        let capacity = self.slots.len();
        let slot = self
            .slots
            .get_mut(sp.0)
            .ok_or(Error::StackOverflow { sp, capacity })?;
        *slot = value;
        Ok(())
    }

    /// Returns the slots in `[from, to)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStackPointer`] if the range is not inside the stack.
    pub fn slice(&self, from: StackPtr, to: StackPtr) -> Result<&[Reg]> {
        if from > to {
            return Err(Error::InvalidStackPointer(from));
        }
        self.slots
            .get(from.0..to.0)
            .ok_or(Error::InvalidStackPointer(to))
    }
}

impl Default for DataStack {
    fn default() -> Self {
        DataStack::new(Self::DEFAULT_SIZE)
    }
}
