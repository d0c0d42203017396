use bnsim_core::common::word::CarryWord;
use bnsim_core::core::arch::flags::{Flag, FlagGroup, FlagSet};
use bnsim_core::{SimError, WideWord};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(Flag::C, 0)]
#[case(Flag::L, 1)]
#[case(Flag::M, 2)]
#[case(Flag::Z, 3)]
#[case(Flag::XC, 4)]
#[case(Flag::XL, 5)]
#[case(Flag::XM, 6)]
#[case(Flag::XZ, 7)]
fn packed_bit_positions(#[case] flag: Flag, #[case] bit: u8) {
    let mut f = FlagSet::new();
    f.set(flag, true);
    assert_eq!(f.packed(), 1 << bit);
    assert_eq!(flag.name().parse::<Flag>().unwrap(), flag);
}

#[test]
fn set_packed_round_trips() {
    let mut f = FlagSet::new();
    f.set_packed(0b1010_0101);
    assert!(f.get(Flag::C));
    assert!(!f.get(Flag::L));
    assert!(f.get(Flag::M));
    assert!(f.get(Flag::XL));
    assert!(f.get(Flag::XZ));
    assert_eq!(f.packed(), 0b1010_0101);
    f.clear();
    assert_eq!(f.packed(), 0);
}

#[test]
fn name_lookup() {
    let mut f = FlagSet::new();
    f.set_by_name("XM", true).unwrap();
    assert!(f.get_by_name("XM").unwrap());
    assert!(!f.get_by_name("M").unwrap());
    assert!(matches!(f.get_by_name("Q"), Err(SimError::InvalidOperand(_))));
    assert!(f.set_by_name("c", true).is_err());
}

#[test]
fn set_from_wide_derives_all_four() {
    let mut f = FlagSet::new();
    f.set_from_wide((WideWord::ZERO, true));
    assert!(f.get(Flag::C));
    assert!(f.get(Flag::Z));
    assert!(!f.get(Flag::M));
    assert!(!f.get(Flag::L));

    f.set_from_wide(WideWord::MAX);
    assert!(!f.get(Flag::C));
    assert!(!f.get(Flag::Z));
    assert!(f.get(Flag::M));
    assert!(f.get(Flag::L));
    assert_eq!(f.packed() & 0xF0, 0);
}

#[test]
fn setx_targets_the_extended_group() {
    let mut f = FlagSet::new();
    f.setx_from_wide((WideWord::ONE, true));
    assert_eq!(f.packed(), Flag::XC.mask() | Flag::XL.mask());
}

#[test]
fn narrow_updates_leave_other_flags() {
    let v = CarryWord::new(WideWord::ZERO, true);
    let mut f = FlagSet::new();
    f.set_packed(0xFF);

    f.update_l(FlagGroup::Base, v);
    assert_eq!(f.packed(), 0xFF & !Flag::L.mask());

    f.update_cm(FlagGroup::Base, v);
    assert!(f.get(Flag::C));
    assert!(!f.get(Flag::M));

    f.update_zml(FlagGroup::Extended, CarryWord::from(WideWord::ONE));
    assert!(!f.get(Flag::XZ));
    assert!(f.get(Flag::XL));
    assert!(f.get(Flag::XC));
}

#[test]
fn display_lists_every_flag() {
    let mut f = FlagSet::new();
    f.set(Flag::Z, true);
    assert_eq!(
        f.to_string(),
        "C=0 L=0 M=0 Z=1 XC=0 XL=0 XM=0 XZ=0"
    );
}
