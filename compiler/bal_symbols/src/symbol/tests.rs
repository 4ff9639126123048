use bal_ir::{PackageId, SharedInterner};
use bal_types::Idx;
use pretty_assertions::assert_eq;

use super::*;
use crate::factory::{
    create_annotation_symbol, create_function_symbol, create_record_symbol, create_xmlns_symbol,
};
use crate::SymbolTable;

fn fixture() -> (SymbolTable, PackageId) {
    let table = SymbolTable::new(SharedInterner::new());
    let pkg = PackageId::from_parts(table.interner(), "acme", "orders", "1.0.0");
    (table, pkg)
}

#[test]
fn payload_decides_kind() {
    assert_eq!(SymbolData::Record.kind(), SymKind::Record);
    assert_eq!(
        SymbolData::Invokable(Invokable {
            kind: InvokableKind::Resource,
            body_exists: true,
        })
        .kind(),
        SymKind::Resource
    );
    assert_eq!(
        SymbolData::XmlNs { uri: "urn:x".into() }.kind(),
        SymKind::XmlNs
    );
}

#[test]
fn accessors_are_kind_specific() {
    let (table, pkg) = fixture();
    let names = table.interner();

    let func = create_function_symbol(
        Flags::empty(),
        names.intern("run"),
        pkg,
        Idx::NO_TYPE,
        table.root_package(),
        false,
    );
    assert_eq!(func.body_exists(), Some(false));
    assert_eq!(func.attach_points(), None);
    assert!(func.conversion().is_none());

    let ann = create_annotation_symbol(
        Flags::PUBLIC,
        AttachPoints::SERVICE,
        names.intern("config"),
        pkg,
        Idx::NO_TYPE,
        table.root_package(),
    );
    assert_eq!(ann.attach_points(), Some(AttachPoints::SERVICE));
    assert_eq!(ann.body_exists(), None);

    let ns = create_xmlns_symbol(
        names.intern("ns0"),
        "http://acme.io/orders",
        pkg,
        table.root_package(),
    );
    assert_eq!(ns.xmlns_uri(), Some("http://acme.io/orders"));
    assert_eq!(func.xmlns_uri(), None);
}

#[test]
fn owner_is_weak() {
    let (table, pkg) = fixture();
    let names = table.interner();

    let record = create_record_symbol(
        Flags::empty(),
        names.intern("Order"),
        pkg,
        Idx::NO_TYPE,
        table.root_package(),
    );
    let line_scope = {
        let line = create_record_symbol(
            Flags::empty(),
            names.intern("Line"),
            pkg,
            Idx::NO_TYPE,
            &record,
        );
        assert_eq!(line.owner(), Some(record.clone()));
        let scope = line.scope().cloned();
        assert!(scope.as_ref().and_then(SharedScope::owner).is_some());
        scope
    };
    // The scope does not keep its owner alive.
    assert!(line_scope.is_some_and(|scope| scope.owner().is_none()));
}

#[test]
fn identity_equality() {
    let (table, pkg) = fixture();
    let name = table.interner().intern("Order");

    let a = create_record_symbol(Flags::empty(), name, pkg, Idx::NO_TYPE, table.root_package());
    let b = create_record_symbol(Flags::empty(), name, pkg, Idx::NO_TYPE, table.root_package());
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert_eq!(SymbolRef::downgrade(&a).upgrade(), Some(a.clone()));
}

#[test]
fn qualified_name() {
    let (table, pkg) = fixture();
    let names = table.interner();

    let func = create_function_symbol(
        Flags::PUBLIC,
        names.intern("placeOrder"),
        pkg,
        Idx::NO_TYPE,
        table.root_package(),
        true,
    );
    assert_eq!(func.qualified_name(names), "acme/orders:1.0.0:placeOrder");
}

#[test]
fn debug_output_does_not_recurse() {
    let (table, _) = fixture();
    let rendered = format!("{:?}", table.root_package());
    assert!(rendered.contains("Package"));
    assert!(rendered.contains("scope_len"));
}
