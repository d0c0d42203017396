//! Breakpoint Trigger Tests.
//!
//! Pass-counted table semantics, target parsing and resolution, and the one-shot
//! force-break.

use std::sync::Arc;

use bnsim_core::core::units::debug::{
    BreakTarget, Breakpoint, BreakpointTable, ForceBreak, ForceBreakState, ForceCondition,
};
use bnsim_core::isa::context::{AsmContext, SymbolTable};
use bnsim_core::{Machine, SimError};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::mocks::context::with_symbols;

// ══════════════════════════════════════════════════════════
// Breakpoint table
// ══════════════════════════════════════════════════════════

#[test]
fn fires_on_the_nth_arrival() {
    let mut t = BreakpointTable::new();
    assert!(t.toggle(5, 3).unwrap());
    assert_eq!(t.get(5).unwrap().counter, 1);
    assert_eq!(t.evaluate(5), None);
    assert_eq!(t.get(5).unwrap().counter, 2);
    assert_eq!(t.evaluate(5), None);
    assert_eq!(t.get(5).unwrap().counter, 3);
    assert_eq!(t.evaluate(5), Some(3));
    assert_eq!(t.get(5).unwrap().counter, 1);
    assert_eq!(t.evaluate(5), None);
    assert_eq!(t.get(5).unwrap().counter, 2);
}

#[test]
fn single_pass_fires_every_time() {
    let mut t = BreakpointTable::new();
    t.set(0, 1).unwrap();
    for _ in 0..4 {
        assert_eq!(t.evaluate(0), Some(1));
    }
    assert_eq!(t.evaluate(1), None);
}

#[test]
fn toggle_removes_existing_entry() {
    let mut t = BreakpointTable::new();
    assert!(t.toggle(7, 1).unwrap());
    assert!(!t.toggle(7, 1).unwrap());
    assert!(t.is_empty());
}

#[test]
fn set_overwrites_and_resets_counter() {
    let mut t = BreakpointTable::new();
    t.set(2, 4).unwrap();
    let _ = t.evaluate(2);
    t.set(2, 2).unwrap();
    assert_eq!(
        t.get(2),
        Some(&Breakpoint {
            passes: 2,
            counter: 1
        })
    );
    assert_eq!(t.len(), 1);
    assert_eq!(t.iter().map(|(a, _)| a).collect::<Vec<_>>(), vec![2]);
    assert!(t.remove(2).is_some());
}

#[test]
fn rejects_zero_passes_and_far_addresses() {
    let mut t = BreakpointTable::new();
    assert!(matches!(t.toggle(1, 0), Err(SimError::InvalidOperand(_))));
    assert!(matches!(
        t.toggle(1024, 1),
        Err(SimError::Index { index: 1024, .. })
    ));
    assert!(t.is_empty());
}

// ══════════════════════════════════════════════════════════
// Targets
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("12", BreakTarget::Addr(12))]
#[case("0x1f", BreakTarget::Addr(31))]
#[case(" main ", BreakTarget::Symbol("main".into()))]
fn parses_targets(#[case] text: &str, #[case] target: BreakTarget) {
    assert_eq!(text.parse::<BreakTarget>().unwrap(), target);
}

#[rstest]
#[case("")]
#[case("0xzz")]
fn rejects_bad_targets(#[case] text: &str) {
    assert!(matches!(
        text.parse::<BreakTarget>(),
        Err(SimError::InvalidOperand(_))
    ));
}

#[test]
fn symbol_needs_a_context() {
    let mut m = Machine::default();
    assert!(matches!(
        m.toggle_breakpoint("main", 1),
        Err(SimError::InvalidOperand(_))
    ));
    assert_eq!(BreakTarget::from(3usize).resolve(None).unwrap(), 3);
}

#[test]
fn symbols_resolve_through_the_context() {
    let mut m = Machine::default();
    let ctx: Arc<dyn AsmContext> = Arc::new(with_symbols((4, "main"), (9, "loop")));
    m.set_context(Some(ctx));
    assert!(m.toggle_breakpoint("main", 1).unwrap());
    assert!(m.toggle_breakpoint("loop", 2).unwrap());
    assert!(m.toggle_breakpoint("0x10", 1).unwrap());
    let addrs: Vec<usize> = m.breakpoints().iter().map(|(a, _)| a).collect();
    assert_eq!(addrs, vec![4, 9, 16]);
    assert!(matches!(
        m.toggle_breakpoint("nowhere", 1),
        Err(SimError::InvalidOperand(_))
    ));
}

#[test]
fn functions_shadow_labels() {
    let ctx = SymbolTable::new()
        .with_function(3, "entry")
        .with_label(8, "entry");
    let target: BreakTarget = "entry".parse().unwrap();
    assert_eq!(target.resolve(Some(&ctx as &dyn AsmContext)).unwrap(), 3);
}

// ══════════════════════════════════════════════════════════
// Force-break
// ══════════════════════════════════════════════════════════

#[test]
fn unconditional_force_break_fires_once() {
    let mut f = ForceBreak::new();
    assert!(!f.evaluate(0, 0));
    f.arm(ForceCondition::Always);
    assert!(f.is_armed());
    assert!(f.evaluate(3, 3));
    assert!(!f.is_armed());
    assert!(!f.evaluate(3, 3));
}

#[rstest]
#[case(ForceCondition::CallDepth(2), (1, 2), (2, 0))]
#[case(ForceCondition::LoopDepth(1), (1, 0), (0, 1))]
fn depth_conditions_wait_for_their_depth(
    #[case] cond: ForceCondition,
    #[case] miss: (usize, usize),
    #[case] hit: (usize, usize),
) {
    let mut f = ForceBreak::default();
    f.arm(cond);
    assert!(!f.evaluate(miss.0, miss.1));
    assert_eq!(f.condition(), Some(cond));
    assert!(f.evaluate(hit.0, hit.1));
    assert_eq!(f.condition(), None);
}

#[test]
fn observable_state_tuple() {
    let mut f = ForceBreak::new();
    assert_eq!(f.state(), ForceBreakState::default());
    f.arm(ForceCondition::LoopDepth(3));
    assert_eq!(
        f.state(),
        ForceBreakState {
            armed: true,
            consider_call_depth: false,
            call_depth_target: 0,
            consider_loop_depth: true,
            loop_depth_target: 3,
        }
    );
    f.arm(ForceCondition::CallDepth(1));
    let state = f.state();
    assert!(state.consider_call_depth && !state.consider_loop_depth);
    assert_eq!(state.call_depth_target, 1);
    f.disarm();
    assert!(!f.state().armed);
}
