//! CSR and WSR Tests.

use bnsim_core::core::arch::csr::{Csr, Wsr};
use bnsim_core::core::arch::flags::Flag;
use bnsim_core::core::arch::wdr::{RegisterFile, SpecialReg};
use bnsim_core::{Machine, SimError, WideWord};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(0x7C0, Csr::Flags)]
#[case(0x7D0, Csr::ModLimb(0))]
#[case(0x7D7, Csr::ModLimb(7))]
#[case(0xFC0, Csr::Rng)]
fn decodes_mapped_addresses(#[case] addr: u32, #[case] csr: Csr) {
    assert_eq!(Csr::decode(addr).unwrap(), csr);
}

#[rstest]
#[case(0x7C1)]
#[case(0x7D8)]
#[case(0x7CF)]
#[case(0)]
#[case(0x17D0)]
#[case(0xFFFF_F7D0)]
#[case(0x17C0)]
fn rejects_unmapped_addresses(#[case] addr: u32) {
    assert!(matches!(Csr::decode(addr), Err(SimError::InvalidOperand(_))));
}

#[rstest]
#[case(0x17D0)]
#[case(0xFFFF_F7D0)]
fn machine_rejects_aliases_of_mod_limbs(#[case] addr: u32) {
    let mut m = Machine::default();
    assert!(matches!(m.get_csr(addr), Err(SimError::InvalidOperand(_))));
    assert!(matches!(m.set_csr(addr, 1), Err(SimError::InvalidOperand(_))));
    assert!(m.get_reg(SpecialReg::Mod).unwrap().is_zero());
}

#[test]
fn flag_csr_uses_low_byte() {
    let mut m = Machine::default();
    m.set_csr(0x7C0, 0xFFFF_FF09).unwrap();
    assert!(m.get_flag(Flag::C));
    assert!(m.get_flag(Flag::Z));
    assert_eq!(m.get_csr(0x7C0).unwrap(), 0x09);
}

#[test]
fn mod_limbs_through_csrs() {
    let mut m = Machine::default();
    m.set_csr(0x7D3, 0xCAFE_F00D).unwrap();
    assert_eq!(m.get_reg_limb(SpecialReg::Mod, 3).unwrap(), 0xCAFE_F00D);
    assert_eq!(m.get_wsr(0).unwrap().limb(3).unwrap(), 0xCAFE_F00D);
    assert_eq!(m.get_csr(0x7D3).unwrap(), 0xCAFE_F00D);
}

#[test]
fn rng_csr_reads_rnd_and_ignores_writes() {
    let mut m = Machine::default();
    m.set_csr(0xFC0, 0).unwrap();
    assert_eq!(m.get_csr(0xFC0).unwrap(), 0x9999_9999);
}

#[test]
fn wsr_views() {
    let mut m = Machine::default();
    m.set_wsr(0, WideWord::MAX).unwrap();
    assert_eq!(m.get_reg(SpecialReg::Mod).unwrap(), WideWord::MAX);
    m.set_wsr(1, WideWord::ZERO).unwrap();
    assert_eq!(m.get_wsr(1).unwrap(), RegisterFile::rnd_reset_value());
    assert!(matches!(m.get_wsr(2), Err(SimError::InvalidOperand(_))));
    assert!(matches!(Wsr::decode(5), Err(SimError::InvalidOperand(_))));
}
