#![allow(unused)]
extern crate scihooks;

use criterion::{criterion_group, criterion_main, Criterion};
use scihooks::{
    engine::{
        CallRequest, DataStack, EngineState, ExecStack, FrameId, MethodInvoker, Reg, Script,
        SegmentId, SegmentManager, SelectorTable, StackPtr,
    },
    hooks::HookConfig,
    GameId, VmHooks,
};
use std::hint::black_box;

const EGO_RUNS: Reg = Reg::new(0x0007, 0x03a2);
const CHANGE_STATE: i32 = 0x00a1;

struct Engine {
    rm58: Script,
}

impl SegmentManager for Engine {
    fn script(&self, segment: SegmentId) -> Option<&Script> {
        (segment == 0x0018).then_some(&self.rm58)
    }

    fn object_name(&self, object: Reg) -> Option<&str> {
        (object == EGO_RUNS).then_some("egoRuns")
    }
}

impl SelectorTable for Engine {
    fn selector_name(&self, selector: i32) -> Option<&str> {
        (selector == CHANGE_STATE).then_some("changeState")
    }
}

impl MethodInvoker for Engine {
    fn execute_method(
        &mut self,
        _state: &mut EngineState,
        _request: &CallRequest,
    ) -> Option<FrameId> {
        None
    }
}

fn state_at(pc: Reg, acc: i16) -> EngineState {
    let frame = ExecStack::new(EGO_RUNS, pc, StackPtr(0x40)).with_selector(CHANGE_STATE);
    let mut state = EngineState::new(DataStack::default(), frame);
    state.acc = Reg::from_int(acc);
    state
}

/// Benchmark the per-instruction cost of the hook check.
///
/// The miss path runs before every instruction the interpreter executes, so it
/// is the number that matters. The matched path includes context capture and
/// fingerprint comparison.
fn bench_before_exec(c: &mut Criterion) {
    let mut rm58 = vec![0u8; 0x1500];
    rm58[0x144d] = 0x76;
    let mut engine = Engine {
        rm58: Script::new(58, rm58),
    };
    let hooks = VmHooks::with_config(GameId::Qfg1, HookConfig::quiet());
    let no_hooks = VmHooks::with_config(GameId::Kq5, HookConfig::quiet());

    let mut group = c.benchmark_group("before_exec");

    let mut state = state_at(Reg::new(0x0018, 0x1000), 0);
    group.bench_function("miss", |b| {
        b.iter(|| hooks.before_exec(black_box(&mut state), &mut engine));
    });

    let mut state = state_at(Reg::new(0x0018, 0x1000), 0);
    group.bench_function("empty_registry", |b| {
        b.iter(|| no_hooks.before_exec(black_box(&mut state), &mut engine));
    });

    // acc != 0: the handler returns without injecting a call
    let mut state = state_at(Reg::new(0x0018, 0x144d), 1);
    group.bench_function("matched", |b| {
        b.iter(|| hooks.before_exec(black_box(&mut state), &mut engine));
    });

    group.finish();
}

criterion_group!(benches, bench_before_exec);
criterion_main!(benches);
