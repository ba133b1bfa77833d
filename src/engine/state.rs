//! Mutable interpreter state visible to hook handlers.
//!
//! [`EngineState`] holds the registers, the data stack and the execution stack.
//! Handlers that need to inject a call go through [`CallBuilder`], which
//! performs the same push / shrink / call / swap sequence the `calle` opcode
//! performs, with every stack access bounds-checked.

use crate::{
    engine::{CallRequest, DataStack, ExecStack, FrameId, MethodInvoker, Reg, StackPtr},
    Error, Result,
};

/// Registers, data stack and execution stack of a running VM.
///
/// # Example
///
/// ```rust
/// use scihooks::engine::{DataStack, EngineState, ExecStack, Reg, StackPtr};
///
/// let root = ExecStack::new(Reg::new(3, 0x10), Reg::new(0x18, 0x144d), StackPtr(0));
/// let mut state = EngineState::new(DataStack::new(64), root);
///
/// state.push(Reg::from_int(5))?;
/// assert_eq!(state.xs().sp, StackPtr(1));
/// assert_eq!(state.pc(), Reg::new(0x18, 0x144d));
/// # Ok::<(), scihooks::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct EngineState {
    /// The accumulator.
    pub acc: Reg,
    /// Number of extra words forwarded by a preceding `&rest`.
    pub rest: u16,
    /// Set when the active frame was switched outside normal dispatch, telling
    /// the interpreter loop to reload its cached frame.
    pub execution_stack_pos_changed: bool,
    stack: DataStack,
    frames: Vec<ExecStack>,
    xs: FrameId,
}

impl EngineState {
    /// Creates a state whose only frame is `root`.
    #[must_use]
    pub fn new(stack: DataStack, root: ExecStack) -> Self {
        EngineState {
            acc: Reg::NULL,
            rest: 0,
            execution_stack_pos_changed: false,
            stack,
            frames: vec![root],
            xs: FrameId(0),
        }
    }

    /// Returns the data stack.
    #[must_use]
    pub fn stack(&self) -> &DataStack {
        &self.stack
    }

    /// Returns the handle of the active frame.
    #[must_use]
    pub fn active_frame(&self) -> FrameId {
        self.xs
    }

    /// Returns the active frame.
    #[must_use]
    pub fn xs(&self) -> &ExecStack {
        &self.frames[self.xs.0]
    }

    /// Returns the active frame mutably.
    pub fn xs_mut(&mut self) -> &mut ExecStack {
        &mut self.frames[self.xs.0]
    }

    /// Returns the program counter of the active frame.
    #[must_use]
    pub fn pc(&self) -> Reg {
        self.xs().pc
    }

    /// Returns the frame `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFrame`] if `id` names no frame.
    pub fn frame(&self, id: FrameId) -> Result<&ExecStack> {
        self.frames.get(id.0).ok_or(Error::UnknownFrame(id.0))
    }

    /// Returns the number of frames on the execution stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Appends a frame to the execution stack without activating it.
    pub fn push_frame(&mut self, frame: ExecStack) -> FrameId {
        self.frames.push(frame);
        FrameId(self.frames.len() - 1)
    }

    /// Makes `id` the active frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFrame`] if `id` names no frame.
    pub fn set_active_frame(&mut self, id: FrameId) -> Result<()> {
        if id.0 >= self.frames.len() {
            return Err(Error::UnknownFrame(id.0));
        }
        self.xs = id;
        Ok(())
    }

    /// Pushes `value` at the active frame's stack pointer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StackOverflow`] if the data stack is full.
    pub fn push(&mut self, value: Reg) -> Result<()> {
        let sp = self.xs().sp;
        self.stack.set(sp, value)?;
        self.xs_mut().sp = sp.up(1);
        Ok(())
    }

    /// Starts building a call on the active frame.
    pub fn begin_call(&mut self) -> CallBuilder<'_> {
        let start_sp = self.xs().sp;
        CallBuilder {
            state: self,
            start_sp,
            words: 0,
            forwarded: 0,
            patched: None,
        }
    }
}

/// Builds and starts a call to an exported procedure, `calle` style.
///
/// Arguments are pushed in order; the argument count must be pushed first.
/// [`CallBuilder::call`] then moves the stack pointer down over the pushed
/// block, asks the [`MethodInvoker`] for a new frame, and on success makes it
/// the active frame. If the call cannot be started the stack pointer and the
/// argument count slot are restored, so a failed attempt leaves no trace in
/// the active frame.
///
/// A forwarded `&rest` block is only sent when declared with
/// [`CallBuilder::forward_rest`]; a leftover `rest` register is never
/// forwarded implicitly.
///
/// # Example
///
/// ```rust,ignore
/// let mut call = state.begin_call();
/// call.push_int(2)?;
/// call.push_int(10)?;
/// call.push_int(20)?;
/// let frame = call.call(host, 0, 7)?;
/// ```
#[derive(Debug)]
pub struct CallBuilder<'s> {
    state: &'s mut EngineState,
    start_sp: StackPtr,
    words: usize,
    forwarded: u16,
    patched: Option<(StackPtr, Reg)>,
}

impl CallBuilder<'_> {
    /// Pushes a value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StackOverflow`] if the data stack is full. The builder
    /// is rolled back before returning.
    pub fn push(&mut self, value: Reg) -> Result<&mut Self> {
        if let Err(e) = self.state.push(value) {
            self.rollback();
            return Err(e);
        }
        self.words += 1;
        Ok(self)
    }

    /// Pushes an integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StackOverflow`] if the data stack is full.
    pub fn push_int(&mut self, value: i16) -> Result<&mut Self> {
        self.push(Reg::from_int(value))
    }

    /// Declares the last `words` pushed words as a forwarded `&rest` block.
    ///
    /// They count as arguments on top of the pushed argument count, as for a
    /// `calle` preceded by `&rest`.
    pub fn forward_rest(&mut self, words: u16) -> &mut Self {
        self.forwarded = words;
        self
    }

    /// Returns the number of words pushed so far.
    #[must_use]
    pub fn pushed(&self) -> usize {
        self.words
    }

    /// Starts the call to export `export` of script `script`.
    ///
    /// Everything pushed after the argument count is an argument. Words
    /// declared with [`CallBuilder::forward_rest`] are added to the argument
    /// count. The `rest` register is cleared by every attempt, as `calle`
    /// clears it.
    ///
    /// Returns the new active frame, or `None` if the invoker declined.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCallFrame`] if fewer words were pushed than the
    /// argument count plus the forwarded block, [`Error::StackUnderflow`] if
    /// the frame boundary falls below the stack base, or
    /// [`Error::InvalidStackPointer`] if the argument count slot cannot be
    /// read. The builder is rolled back in every case.
    pub fn call(
        mut self,
        invoker: &mut dyn MethodInvoker,
        script: u16,
        export: u16,
    ) -> Result<Option<FrameId>> {
        self.state.rest = 0;

        let forwarded = usize::from(self.forwarded);
        if forwarded + 1 > self.words {
            let pushed = self.words;
            self.rollback();
            return Err(Error::InvalidCallFrame { pushed, forwarded });
        }

        // Bytes, as encoded in the calle operand.
        let frame_size = (self.words - 1 - forwarded) * 2;
        let words = (frame_size >> 1) + forwarded + 1;

        let frame_top = self.state.xs().sp;
        let Some(argp) = frame_top.down(words) else {
            self.rollback();
            return Err(Error::StackUnderflow {
                sp: frame_top,
                words,
            });
        };
        self.state.xs_mut().sp = argp;

        let argc = match self.count_arguments(argp) {
            Ok(argc) => argc,
            Err(e) => {
                self.rollback();
                return Err(e);
            }
        };

        let request = CallRequest {
            script,
            export,
            frame_top,
            calling_obj: self.state.xs().objp,
            argc,
            argp,
        };

        match invoker.execute_method(self.state, &request) {
            Some(frame) => {
                if let Err(e) = self.state.set_active_frame(frame) {
                    self.rollback();
                    return Err(e);
                }
                self.state.execution_stack_pos_changed = true;
                Ok(Some(frame))
            }
            None => {
                self.rollback();
                Ok(None)
            }
        }
    }

    /// Abandons the call, restoring the stack pointer.
    pub fn abandon(mut self) {
        self.rollback();
    }

    /// Adds the forwarded words to the count stored at `argp`.
    fn count_arguments(&mut self, argp: StackPtr) -> Result<u16> {
        let count = self.state.stack().get(argp)?;
        #[allow(clippy::cast_possible_truncation)]
        let argc = count.offset() as u16;
        if self.forwarded == 0 {
            return Ok(argc);
        }

        let argc = argc.wrapping_add(self.forwarded);
        self.state
            .stack
            .set(argp, Reg::new(count.segment(), u32::from(argc)))?;
        self.patched = Some((argp, count));
        Ok(argc)
    }

    fn rollback(&mut self) {
        if let Some((slot, value)) = self.patched.take() {
            // The slot was read successfully, so it is in bounds.
            let _ = self.state.stack.set(slot, value);
        }
        self.state.xs_mut().sp = self.start_sp;
        self.words = 0;
    }
}
