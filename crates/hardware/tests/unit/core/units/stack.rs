//! Hardware Stack Tests.

use bnsim_core::common::error::StackKind;
use bnsim_core::core::units::stack::{CallStack, LoopFrame, LoopStack};
use bnsim_core::{Machine, SimError};
use pretty_assertions::assert_eq;

const LOOP_UNDERRUN: SimError = SimError::StackUnderrun {
    stack: StackKind::Loop,
};

#[test]
fn loop_counter_protocol() {
    let mut m = Machine::default();
    m.push_loop_stack(2, 10, 5).unwrap();
    assert!(m.dec_top_loop_cnt().unwrap());
    assert!(m.dec_top_loop_cnt().unwrap());
    assert!(!m.dec_top_loop_cnt().unwrap());
    assert_eq!(m.pop_loop_stack().unwrap(), 5);
    assert!(m.loop_stack().is_empty());
}

#[test]
fn loop_stack_overflows_at_sixteen() {
    let mut s = LoopStack::new();
    for i in 0..16 {
        s.push(1, i + 1, i).unwrap();
    }
    assert_eq!(
        s.push(1, 0, 0),
        Err(SimError::StackOverflow {
            stack: StackKind::Loop
        })
    );
    assert_eq!(s.depth(), 16);
}

#[test]
fn empty_loop_stack_underruns() {
    let mut s = LoopStack::default();
    assert_eq!(s.pop(), Err(LOOP_UNDERRUN));
    assert_eq!(s.top_end_addr(), Err(LOOP_UNDERRUN));
    assert_eq!(s.top_start_addr(), Err(LOOP_UNDERRUN));
    assert_eq!(s.decrement_top(), Err(LOOP_UNDERRUN));
}

#[test]
fn loop_frames_are_bottom_to_top() {
    let mut m = Machine::default();
    m.push_loop_stack(3, 20, 10).unwrap();
    m.push_loop_stack(1, 15, 12).unwrap();
    assert_eq!(m.get_top_loop_end_addr().unwrap(), 15);
    assert_eq!(m.get_top_loop_start_addr().unwrap(), 12);
    assert_eq!(
        m.loop_stack(),
        &[
            LoopFrame {
                count: 3,
                end: 20,
                start: 10
            },
            LoopFrame {
                count: 1,
                end: 15,
                start: 12
            },
        ]
    );
}

#[test]
fn call_stack_is_lifo() {
    let mut s = CallStack::new();
    s.push(4).unwrap();
    s.push(8).unwrap();
    assert_eq!(s.addrs(), &[4, 8]);
    assert_eq!(s.pop().unwrap(), 8);
    assert_eq!(s.depth(), 1);
    s.clear();
    assert!(s.pop().unwrap_err().is_call_stack_underrun());
}

#[test]
fn call_stack_overflows_at_sixteen() {
    let mut m = Machine::default();
    for addr in 0..16 {
        m.push_call_stack(addr).unwrap();
    }
    assert!(matches!(
        m.push_call_stack(99),
        Err(SimError::StackOverflow {
            stack: StackKind::Call
        })
    ));
    assert_eq!(m.pop_call_stack().unwrap(), 15);
}
