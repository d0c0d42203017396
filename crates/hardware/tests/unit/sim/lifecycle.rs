//! Reset, Register Clearing and Reentrancy Tests.

use bnsim_core::common::constants::{DMEM_DEPTH, IMEM_DEPTH};
use bnsim_core::core::arch::flags::Flag;
use bnsim_core::core::arch::wdr::{RegisterFile, SpecialReg};
use bnsim_core::isa::instruction::Execution;
use bnsim_core::{MachineBuilder, SimError, WideWord};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::ScriptedInstr;
use crate::common::builder::program::{nops, program};

fn dirty_machine() -> bnsim_core::Machine {
    let mut m = MachineBuilder::new().instructions(nops(8)).build().unwrap();
    m.set_reg(4usize, WideWord::MAX).unwrap();
    m.set_reg(SpecialReg::Mod, WideWord::ONE).unwrap();
    m.set_acc(WideWord::ONE);
    m.set_gpr(3, 77).unwrap();
    m.set_gpr(16, 5).unwrap();
    m.set_flag(Flag::XZ, true);
    m.push_loop_stack(1, 2, 1).unwrap();
    m.push_call_stack(6).unwrap();
    m.set_pc(5, false).unwrap();
    m.finish();
    m
}

#[test]
fn reset_clears_control_state_and_keeps_values() {
    let mut m = dirty_machine();
    m.reset(&[WideWord::from(9u32)], program(nops(3)), 1, None, false)
        .unwrap();

    assert_eq!(m.flags().packed(), 0);
    assert!(m.loop_stack().is_empty());
    assert!(m.call_stack().is_empty());
    assert!(!m.finish_flag());
    assert_eq!(m.pc(), 1);
    assert_eq!(m.stop_addr(), Some(2));
    assert_eq!(m.imem_len(), 3);
    assert_eq!(m.get_dmem(0).unwrap(), WideWord::from(9u32));
    assert!(!m.dmem().is_initialized(1));

    assert_eq!(m.get_reg_valid_half_limbs(4).unwrap(), [false; 16]);
    assert_eq!(m.regs().wdrs()[4], WideWord::MAX);
    assert_eq!(m.get_gpr(3).unwrap(), 77);
}

#[test]
fn reset_with_clear_regs_zeroes_register_values() {
    let mut m = dirty_machine();
    m.reset(&[], program(nops(3)), 2, Some(1), true).unwrap();

    assert_eq!(m.regs().wdrs()[4], WideWord::ZERO);
    assert_eq!(m.get_reg(SpecialReg::Mod).unwrap(), WideWord::ZERO);
    assert_eq!(m.get_acc(), WideWord::ZERO);
    assert_eq!(m.get_reg(SpecialReg::Rnd).unwrap(), RegisterFile::rnd_reset_value());
    assert_eq!(m.gprs(), [0; 32]);
    assert_eq!(m.pc(), 2);
    assert_eq!(m.stop_addr(), Some(1));
}

#[rstest]
#[case::oversized_dmem(DMEM_DEPTH + 1, 3, 0)]
#[case::oversized_program(1, IMEM_DEPTH + 1, 0)]
#[case::start_pc_past_program(1, 3, 3)]
fn failed_reset_leaves_machine_untouched(
    #[case] dmem_len: usize,
    #[case] program_len: usize,
    #[case] start_pc: usize,
) {
    let mut m = dirty_machine();
    let before = m.snapshot();
    let image = vec![WideWord::ONE; dmem_len];
    let err = m
        .reset(&image, program(nops(program_len)), start_pc, None, true)
        .unwrap_err();
    assert!(matches!(err, SimError::Index { .. }));
    assert_eq!(m.snapshot(), before);
    assert_eq!(m.imem_len(), 8);
}

#[test]
fn reset_keeps_breakpoints() {
    let mut m = MachineBuilder::new()
        .instructions(nops(4))
        .breakpoint("2")
        .build()
        .unwrap();
    m.reset(&[], program(nops(4)), 0, None, false).unwrap();
    assert!(m.breakpoints().get(2).is_some());
}

#[test]
fn reset_to_empty_program_has_no_stop_address() {
    let mut m = dirty_machine();
    m.reset(&[], program(Vec::new()), 0, None, false).unwrap();
    assert_eq!(m.stop_addr(), None);
    assert_eq!(m.imem_len(), 0);
}

#[test]
fn clear_regs_zeroes_and_resets_pc() {
    let mut m = dirty_machine();
    m.clear_regs().unwrap();
    assert_eq!(m.pc(), 0);
    assert_eq!(m.get_gpr(3).unwrap(), 0);
    assert_eq!(m.get_gpr(16).unwrap(), 0);
    assert!(m.regs().wdrs().iter().all(WideWord::is_zero));
    assert_eq!(m.call_stack(), &[6]);
    assert!(m.get_flag(Flag::XZ));
}

#[test]
fn program_counter_bounds() {
    let mut m = MachineBuilder::new().instructions(nops(3)).build().unwrap();
    assert!(matches!(m.set_pc(3, false), Err(SimError::Index { .. })));
    m.set_pc(2, false).unwrap();
    assert!(m.inc_pc().is_err());
    m.set_pc(0, false).unwrap();
    m.inc_pc().unwrap();
    assert_eq!(m.pc(), 1);

    m.finish();
    m.set_pc(1, false).unwrap();
    assert!(m.finish_flag());
    m.set_pc(1, true).unwrap();
    assert!(!m.finish_flag());
    m.set_finish_flag(true);
    assert!(m.finish_flag());
}

#[test]
fn machine_wide_operations_are_not_reentrant() {
    let nested = ScriptedInstr::new("nested", |m| {
        assert_eq!(m.step().unwrap_err(), SimError::Reentrant("step"));
        assert_eq!(m.clear_regs().unwrap_err(), SimError::Reentrant("clear_regs"));
        let err = m.reset(&[], program(Vec::new()), 0, None, false).unwrap_err();
        assert_eq!(err, SimError::Reentrant("reset"));
        m.set_gpr(2, 1)?;
        Ok(Execution::next("nested"))
    });
    let mut m = MachineBuilder::new()
        .instructions(vec![nested.boxed()])
        .build()
        .unwrap();
    assert!(!m.step().unwrap().cont);
    assert_eq!(m.get_gpr(2).unwrap(), 1);
    assert!(m.clear_regs().is_ok());
}
