//! Data Memory Tests.

use std::fs;

use bnsim_core::common::constants::DEFAULT_DUMP_FILENAME;
use bnsim_core::soc::memory::Dmem;
use bnsim_core::{MachineBuilder, MachineConfig, SimError, UninitPolicy, WideWord};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::tempdir;

#[test]
fn load_pads_and_tracks_initialization() {
    let mut d = Dmem::default();
    d.load(&[WideWord::ONE, WideWord::MAX]).unwrap();
    assert_eq!(d.get(1).unwrap(), WideWord::MAX);
    assert!(d.is_initialized(1));
    assert!(!d.is_initialized(2));
    assert_eq!(d.get(2).unwrap(), WideWord::ZERO);
    assert!(!d.is_initialized(500));
}

#[test]
fn load_rejects_oversized_images() {
    let mut d = Dmem::default();
    assert!(matches!(
        d.load(&[WideWord::ZERO; 129]),
        Err(SimError::Index { index: 129, .. })
    ));
}

#[test]
fn reload_clears_previous_contents() {
    let mut d = Dmem::default();
    d.set(50, WideWord::ONE).unwrap();
    d.load(&[]).unwrap();
    assert_eq!(d.cells()[50], WideWord::ZERO);
    assert!(!d.init_bitmap()[50]);
}

#[test]
fn address_bounds() {
    let mut d = Dmem::default();
    assert!(d.set(127, WideWord::ONE).is_ok());
    assert!(matches!(
        d.set(128, WideWord::ONE),
        Err(SimError::Index { index: 128, bound: 128, .. })
    ));
    assert!(d.get(128).is_err());
}

#[test]
fn strict_policy_rejects_uninitialized_cells() {
    let mut d = Dmem::new(UninitPolicy::Strict);
    assert!(matches!(d.get(0), Err(SimError::Uninitialized(_))));
    d.set(0, WideWord::ONE).unwrap();
    assert_eq!(d.get(0).unwrap(), WideWord::ONE);
    d.set_uninit_policy(UninitPolicy::Ignore);
    assert_eq!(d.get(1).unwrap(), WideWord::ZERO);
}

#[rstest]
#[case(0, (0, 0))]
#[case(4, (0, 1))]
#[case(31, (0, 7))]
#[case(32, (1, 0))]
#[case(4095, (127, 7))]
fn byte_addresses_map_to_cell_and_limb(#[case] addr: usize, #[case] loc: (usize, usize)) {
    assert_eq!(Dmem::locate(addr).unwrap(), loc);
}

#[test]
fn byte_address_past_the_end() {
    assert!(Dmem::locate(4096).is_err());
}

#[test]
fn limb_access_through_byte_addresses() {
    let mut m = MachineBuilder::new().build().unwrap();
    m.set_dmem_limb(32 + 8, 0x1234_5678).unwrap();
    assert!(m.dmem().is_initialized(1));
    assert_eq!(m.get_dmem(1).unwrap().limb(2).unwrap(), 0x1234_5678);
    assert_eq!(m.get_dmem_limb(32 + 11).unwrap(), 0x1234_5678);
    assert_eq!(m.get_full_dmem().len(), 128);
}

#[test]
fn dump_writes_one_line_per_cell() {
    let m = MachineBuilder::new()
        .dmem(vec![WideWord::from(0xABu32)])
        .config(MachineConfig::default())
        .build()
        .unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_DUMP_FILENAME);
    m.dump_dmem(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 128);
    assert_eq!(lines[0], format!("{:064x}", 0xAB));
    assert!(lines[1..].iter().all(|l| *l == "0".repeat(64)));
}

#[test]
fn dump_into_a_buffer() {
    let mut d = Dmem::default();
    d.set(0, WideWord::MAX).unwrap();
    let mut out = Vec::new();
    d.dump_hex(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(&"f".repeat(64)));
}
