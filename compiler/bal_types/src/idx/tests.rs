use super::*;

#[test]
fn builtin_indices_are_fixed() {
    assert_eq!(Idx::INT.raw(), 0);
    assert_eq!(Idx::BYTE.raw(), 1);
    assert_eq!(Idx::FLOAT.raw(), 2);
    assert_eq!(Idx::STRING.raw(), 3);
    assert_eq!(Idx::BOOLEAN.raw(), 4);
    assert_eq!(Idx::ERROR.raw(), 9);
    assert_eq!(Idx::FUTURE.raw(), Idx::BUILTIN_COUNT - 1);
}

#[test]
fn builtin_check_works() {
    assert!(Idx::INT.is_builtin());
    assert!(Idx::ERROR.is_builtin());
    assert!(!Idx::from_raw(Idx::FIRST_DYNAMIC).is_builtin());
    assert!(!Idx::NONE.is_builtin());
}

#[test]
fn none_sentinel_works() {
    assert!(Idx::NONE.is_none());
    assert!(Idx::default().is_none());
    assert!(!Idx::NO_TYPE.is_none());
}

#[test]
fn names_and_debug() {
    assert_eq!(Idx::STRING.name(), Some("string"));
    assert_eq!(Idx::from_raw(100).name(), None);
    assert_eq!(Idx::from_raw(100).display_name(), "<type>");
    assert_eq!(format!("{:?}", Idx::INT), "Idx(int)");
    assert_eq!(format!("{:?}", Idx::from_raw(70)), "Idx(70)");
    assert_eq!(format!("{:?}", Idx::NONE), "Idx::NONE");
}
