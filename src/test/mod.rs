//! Shared fixtures for unit tests.
//!
//! [`TestHost`] is an in-memory engine: a handful of scripts, named objects and
//! selectors, and a call primitive that records every request and pushes a
//! frame for it.

use std::collections::HashMap;

use crate::engine::{
    CallRequest, DataStack, EngineState, ExecStack, FrameId, MethodInvoker, Reg, Script,
    SegmentId, SegmentManager, SelectorTable, StackPtr,
};

/// In-memory engine services.
#[derive(Debug, Default)]
pub struct TestHost {
    scripts: HashMap<SegmentId, Script>,
    objects: HashMap<Reg, String>,
    selectors: HashMap<i32, String>,
    /// Whether `execute_method` starts calls.
    pub accept_calls: bool,
    /// Every call request received, in order.
    pub calls: Vec<CallRequest>,
}

impl TestHost {
    /// The `egoRuns` script object of QFG1 room 58.
    pub const EGO_RUNS: Reg = Reg::new(0x0005, 0x0020);
    /// Selector id of `changeState`.
    pub const CHANGE_STATE: i32 = 0x52;
    /// Stack pointer of the hooked frame.
    pub const ICE_SP: StackPtr = StackPtr(0x20);

    pub fn new() -> Self {
        TestHost {
            accept_calls: true,
            ..Default::default()
        }
    }

    pub fn add_script(&mut self, segment: SegmentId, script: Script) {
        self.scripts.insert(segment, script);
    }

    pub fn add_object(&mut self, object: Reg, name: &str) {
        self.objects.insert(object, name.to_string());
    }

    pub fn add_selector(&mut self, selector: i32, name: &str) {
        self.selectors.insert(selector, name.to_string());
    }

    /// Overwrites one byte of the script loaded in `segment`.
    pub fn patch_byte(&mut self, segment: SegmentId, offset: usize, byte: u8) {
        let script = self.scripts.get_mut(&segment).unwrap();
        let mut buf = script.buf(0).unwrap().to_vec();
        buf[offset] = byte;
        *script = Script::new(script.number(), buf);
    }

    /// QFG1 paused on the `push0` at `0018:144d` in `egoRuns::changeState`,
    /// right after `proc0_36` reported fatal damage.
    ///
    /// Script 0 is loaded in segment 1 with a `ret` at `0001:199e`.
    pub fn qfg1_ice() -> (TestHost, EngineState) {
        let mut host = TestHost::new();

        let mut rm58 = vec![0u8; 0x1450];
        rm58[0x144d] = 0x76;
        host.add_script(0x0018, Script::new(58, rm58));

        let mut main = vec![0u8; 0x19a0];
        main[0x199e] = 0x48;
        host.add_script(0x0001, Script::new(0, main));

        host.add_object(Self::EGO_RUNS, "egoRuns");
        host.add_selector(Self::CHANGE_STATE, "changeState");

        let frame = ExecStack::new(Self::EGO_RUNS, Reg::new(0x0018, 0x144d), Self::ICE_SP)
            .with_selector(Self::CHANGE_STATE);
        let mut state = EngineState::new(DataStack::default(), frame);
        state.acc = Reg::from_int(0);

        (host, state)
    }
}

impl SegmentManager for TestHost {
    fn script(&self, segment: SegmentId) -> Option<&Script> {
        self.scripts.get(&segment)
    }

    fn object_name(&self, object: Reg) -> Option<&str> {
        self.objects.get(&object).map(String::as_str)
    }
}

impl SelectorTable for TestHost {
    fn selector_name(&self, selector: i32) -> Option<&str> {
        self.selectors.get(&selector).map(String::as_str)
    }
}

impl MethodInvoker for TestHost {
    fn execute_method(
        &mut self,
        state: &mut EngineState,
        request: &CallRequest,
    ) -> Option<FrameId> {
        self.calls.push(request.clone());
        if !self.accept_calls {
            return None;
        }

        let mut frame = ExecStack::new(
            request.calling_obj,
            Reg::new(SegmentId::from(request.script) + 1, 0x0010),
            request.frame_top,
        )
        .with_export(i32::from(request.export));
        frame.argp = request.argp;
        frame.argc = request.argc;
        Some(state.push_frame(frame))
    }
}
