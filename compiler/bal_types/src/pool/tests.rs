use bal_ir::StringInterner;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn builtins_have_fixed_tags() {
    let pool = Pool::new();

    assert_eq!(pool.tag(Idx::INT), Tag::Int);
    assert_eq!(pool.tag(Idx::BYTE), Tag::Byte);
    assert_eq!(pool.tag(Idx::FLOAT), Tag::Float);
    assert_eq!(pool.tag(Idx::STRING), Tag::String);
    assert_eq!(pool.tag(Idx::BOOLEAN), Tag::Boolean);
    assert_eq!(pool.tag(Idx::ERROR), Tag::Error);
    assert_eq!(pool.tag(Idx::NO_TYPE), Tag::NoType);
    assert_eq!(pool.tag(Idx::MAP), Tag::Map);
    assert_eq!(pool.constraint(Idx::MAP), Idx::ANY);
    assert_eq!(pool.len(), Idx::FIRST_DYNAMIC as usize);
}

#[test]
fn reserved_range_is_not_live() {
    let pool = Pool::new();
    assert!(pool.contains(Idx::FUTURE));
    assert!(!pool.contains(Idx::from_raw(Idx::BUILTIN_COUNT)));
    assert!(!pool.contains(Idx::from_raw(Idx::FIRST_DYNAMIC)));
    assert!(!pool.contains(Idx::NONE));
}

#[test]
fn containers_are_deduplicated() {
    let mut pool = Pool::new();

    assert_eq!(pool.map(Idx::ANY), Idx::MAP);
    assert_eq!(pool.future(Idx::ANY), Idx::FUTURE);

    let a = pool.map(Idx::INT);
    let b = pool.map(Idx::INT);
    assert_eq!(a, b);
    assert_ne!(a, pool.array(Idx::INT));
}

#[test]
fn invokables_are_deduplicated() {
    let mut pool = Pool::new();

    let a = pool.invokable(&[Idx::ANY, Idx::INT], Idx::INT);
    let b = pool.invokable(&[Idx::ANY, Idx::INT], Idx::INT);
    let c = pool.invokable(&[Idx::ANY, Idx::INT], Idx::STRING);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(pool.params(a), vec![Idx::ANY, Idx::INT]);
    assert_eq!(pool.return_type(c), Idx::STRING);
}

#[test]
fn nullary_invokable_layout() {
    let mut pool = Pool::new();
    let f = pool.invokable(&[], Idx::BOOLEAN);
    assert!(pool.params(f).is_empty());
    assert_eq!(pool.return_type(f), Idx::BOOLEAN);
}

#[test]
fn unions_are_never_deduplicated() {
    let mut pool = Pool::new();

    let a = pool.union(&[Idx::INT, Idx::ERROR]);
    let b = pool.union(&[Idx::INT, Idx::ERROR]);
    assert_ne!(a, b);
    assert_eq!(pool.union_members(a), pool.union_members(b));
}

#[test]
fn union_members_have_set_semantics() {
    let mut pool = Pool::new();

    let u = pool.union(&[Idx::INT, Idx::STRING, Idx::INT]);
    assert_eq!(pool.union_members(u), &[Idx::INT, Idx::STRING]);

    assert!(pool.add_union_member(u, Idx::ERROR));
    assert!(!pool.add_union_member(u, Idx::ERROR));
    assert_eq!(pool.union_members(u), &[Idx::INT, Idx::STRING, Idx::ERROR]);
}

#[test]
fn add_union_member_ignores_non_unions() {
    let mut pool = Pool::new();
    assert!(!pool.add_union_member(Idx::INT, Idx::ERROR));
    assert!(pool.union_members(Idx::INT).is_empty());
    assert!(pool.union_type(Idx::INT).is_none());
}

#[test]
fn growth_is_visible_through_every_copy_of_the_handle() {
    let mut pool = Pool::new();
    let u = pool.union(&[Idx::INT, Idx::FLOAT]);
    let alias = u;

    pool.add_union_member(u, Idx::ERROR);
    assert!(pool.union_type(alias).is_some_and(|ty| ty.contains(Idx::ERROR)));
}

#[test]
fn clones_are_independent() {
    let mut base = Pool::new();
    let u = base.union(&[Idx::INT, Idx::FLOAT]);

    let mut unit = base.clone();
    unit.add_union_member(u, Idx::ERROR);

    assert_eq!(base.union_members(u).len(), 2);
    assert_eq!(unit.union_members(u).len(), 3);
}

#[test]
fn union_never_contains_itself() {
    let names = StringInterner::new();
    let mut pool = Pool::new();
    let u = pool.union(&[Idx::INT, Idx::STRING]);

    assert!(!pool.add_union_member(u, u));
    assert_eq!(pool.union_members(u), &[Idx::INT, Idx::STRING]);
    assert_eq!(pool.format_type(u, &names), "int|string");
}

#[test]
fn shared_pool_handles_see_one_store() {
    let shared = SharedPool::new(Pool::new());
    let unit_a = shared.clone();
    let unit_b = shared.clone();

    let person = unit_a.write().record(Name::from_raw(9));
    let local = unit_b.write().union(&[Idx::INT, Idx::STRING]);

    assert_ne!(person, local);
    assert_eq!(unit_b.read().tag(person), Tag::Record);
    assert!(SharedPool::ptr_eq(&unit_a, &unit_b));
}

#[test]
fn nominal_types_keep_their_names() {
    let mut pool = Pool::new();
    let names = StringInterner::new();
    let person = names.intern("Person");

    let a = pool.record(person);
    let b = pool.record(person);
    assert_ne!(a, b);
    assert_eq!(pool.tag(a), Tag::Record);
    assert_eq!(pool.type_name(a), Some(person));
    assert_eq!(pool.nominal(Idx::INT), None);

    let obj = pool.object(names.intern("Client"));
    assert_eq!(pool.tag(obj), Tag::Object);
}

#[test]
fn empty_tuple_is_nil() {
    let mut pool = Pool::new();
    assert_eq!(pool.tuple(&[]), Idx::NIL);
    let pair = pool.tuple(&[Idx::INT, Idx::STRING]);
    assert_eq!(pool.tuple_elems(pair), vec![Idx::INT, Idx::STRING]);
}
