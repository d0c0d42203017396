use bnsim_core::common::error::StackKind;
use bnsim_core::SimError;

#[test]
fn messages_name_the_context() {
    let err = SimError::index("dmem address", 130, 128);
    assert_eq!(err.to_string(), "dmem address index 130 out of range (0 to 128)");

    let err = SimError::StackOverflow {
        stack: StackKind::Loop,
    };
    assert_eq!(err.to_string(), "loop stack overflow");

    let err = SimError::InvalidJump {
        target: 9,
        imem_len: 4,
    };
    assert!(err.to_string().contains("invalid jump address 9"));

    assert_eq!(
        SimError::Reentrant("step").to_string(),
        "step called while an instruction is executing"
    );
}

#[test]
fn call_stack_underrun_is_distinguished() {
    let call = SimError::StackUnderrun {
        stack: StackKind::Call,
    };
    let lp = SimError::StackUnderrun {
        stack: StackKind::Loop,
    };
    assert!(call.is_call_stack_underrun());
    assert!(!lp.is_call_stack_underrun());
    assert!(!SimError::InvalidOperand("x".into()).is_call_stack_underrun());
}
