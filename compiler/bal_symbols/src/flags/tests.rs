use bal_ir::{PackageId, SharedInterner};
use bal_types::Idx;
use proptest::prelude::*;

use super::*;
use crate::factory::create_function_symbol;
use crate::SymbolTable;

#[test]
fn flags_size() {
    assert_eq!(std::mem::size_of::<Flags>(), 4);
    assert_eq!(std::mem::size_of::<AttachPoints>(), 4);
}

#[test]
fn single_bit_containment() {
    let mask = Flags::PUBLIC | Flags::NATIVE;
    assert!(is_flag_on(mask, Flags::PUBLIC));
    assert!(is_flag_on(mask, Flags::NATIVE));
    assert!(!is_flag_on(mask, Flags::FINAL));
}

#[test]
fn multi_bit_flag_needs_every_bit() {
    let wanted = Flags::PUBLIC | Flags::FINAL;
    assert!(!is_flag_on(Flags::PUBLIC, wanted));
    assert!(!is_flag_on(Flags::FINAL, wanted));
    assert!(is_flag_on(Flags::PUBLIC | Flags::FINAL | Flags::NATIVE, wanted));
}

#[test]
fn empty_flag_is_always_on() {
    assert!(is_flag_on(Flags::empty(), Flags::empty()));
    assert!(is_flag_on(Flags::NATIVE, Flags::empty()));
    assert!(is_attach_point_present(AttachPoints::empty(), AttachPoints::empty()));
}

#[test]
fn composite_attach_points() {
    let mask = AttachPoints::FUNCTION | AttachPoints::RESOURCE;
    assert!(is_attach_point_present(mask, AttachPoints::FUNCTION));
    assert!(!is_attach_point_present(mask, AttachPoints::INVOKABLES));
    assert!(is_attach_point_present(
        AttachPoints::INVOKABLES | AttachPoints::SERVICE,
        AttachPoints::INVOKABLES
    ));
}

#[test]
fn there_is_no_private_bit() {
    let table = SymbolTable::new(SharedInterner::new());
    let names = table.interner();
    let pkg = PackageId::from_parts(names, "acme", "util", "1.0.0");

    let every_bit_but_public = Flags::all().difference(Flags::PUBLIC);
    let sym = create_function_symbol(
        every_bit_but_public,
        names.intern("helper"),
        pkg,
        Idx::NO_TYPE,
        table.root_package(),
        true,
    );

    assert!(!is_public(&sym));
    assert!(is_private(&sym));
    assert!(is_native(&sym));
}

proptest! {
    #[test]
    fn is_flag_on_matches_bitwise_containment(mask in any::<u32>(), flag in any::<u32>()) {
        let m = Flags::from_bits_retain(mask);
        let f = Flags::from_bits_retain(flag);
        prop_assert_eq!(is_flag_on(m, f), mask & flag == flag);
    }

    #[test]
    fn attach_points_match_bitwise_containment(mask in any::<u32>(), point in any::<u32>()) {
        let m = AttachPoints::from_bits_retain(mask);
        let p = AttachPoints::from_bits_retain(point);
        prop_assert_eq!(is_attach_point_present(m, p), mask & point == point);
    }

    #[test]
    fn private_is_not_public(bits in any::<u32>()) {
        let table = SymbolTable::global();
        let pkg = table.builtin_package_id();
        let sym = create_function_symbol(
            Flags::from_bits_retain(bits),
            bal_ir::Name::EMPTY,
            pkg,
            Idx::NO_TYPE,
            table.root_package(),
            false,
        );
        prop_assert_eq!(is_private(&sym), !is_public(&sym));
        prop_assert_eq!(is_public(&sym), bits & 1 == 1);
    }
}
