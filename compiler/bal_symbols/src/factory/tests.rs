use bal_ir::{PackageId, SharedInterner};
use bal_types::{Idx, Tag};
use pretty_assertions::assert_eq;

use super::*;
use crate::flags::{is_native, is_private, is_public};
use crate::SymTag;

struct Fixture {
    table: SymbolTable,
    pkg: PackageId,
}

impl Fixture {
    fn new() -> Self {
        let table = SymbolTable::new(SharedInterner::new());
        let pkg = PackageId::from_parts(table.interner(), "acme", "shop", "1.0.0");
        Fixture { table, pkg }
    }

    fn name(&self, s: &str) -> Name {
        self.table.interner().intern(s)
    }

    fn owner(&self) -> &SymbolRef {
        self.table.root_package()
    }
}

fn assert_consistent(sym: &SymbolRef, kind: SymKind) {
    assert_eq!(sym.kind(), kind);
    assert_eq!(sym.tag(), kind.tag());
    assert!(sym.tag().contains(kind.tag()));
    assert_eq!(sym.scope().is_some(), kind.is_scoped(), "{kind} scope presence");
    if let Some(scope) = sym.scope() {
        assert!(scope.is_empty(), "{kind} scope should start empty");
        assert_eq!(scope.owner(), Some(sym.clone()), "{kind} scope owner");
    }
}

#[test]
fn every_constructor_tags_consistently() {
    let fx = Fixture::new();
    let (flags, pkg, owner, ty) = (Flags::PUBLIC, fx.pkg, fx.owner(), Idx::NO_TYPE);
    let n = |s: &str| fx.name(s);

    let cases = [
        (create_object_symbol(flags, n("O"), pkg, ty, owner), SymKind::Object),
        (create_record_symbol(flags, n("R"), pkg, ty, owner), SymKind::Record),
        (create_enum_symbol(flags, n("E"), pkg, ty, owner), SymKind::Enum),
        (
            create_annotation_symbol(flags, AttachPoints::TYPE, n("A"), pkg, ty, owner),
            SymKind::Annotation,
        ),
        (create_worker_symbol(flags, n("w"), pkg, ty, owner), SymKind::Worker),
        (create_connector_symbol(flags, n("C"), pkg, ty, owner), SymKind::Connector),
        (create_service_symbol(flags, n("S"), pkg, ty, owner), SymKind::Service),
        (create_function_symbol(flags, n("f"), pkg, ty, owner, true), SymKind::Function),
        (create_action_symbol(flags, n("a"), pkg, ty, owner), SymKind::Action),
        (create_resource_symbol(flags, n("r"), pkg, ty, owner), SymKind::Resource),
        (create_xmlns_symbol(n("ns"), "urn:acme", pkg, owner), SymKind::XmlNs),
        (create_scope_symbol(n("block"), pkg, ty, owner), SymKind::Scope),
        (create_package_symbol(pkg, &fx.table), SymKind::Package),
    ];

    for (sym, kind) in &cases {
        assert_consistent(sym, *kind);
    }
}

#[test]
fn attributes_are_copied_verbatim() {
    let fx = Fixture::new();
    let mut pool = fx.table.types().write();
    let ty = pool.record(fx.name("Customer"));
    let flags = Flags::PUBLIC | Flags::READONLY | Flags::DEPRECATED;

    let sym = create_record_symbol(flags, fx.name("Customer"), fx.pkg, ty, fx.owner());

    assert_eq!(sym.name, fx.name("Customer"));
    assert_eq!(sym.flags, flags);
    assert_eq!(sym.pkg, Some(fx.pkg));
    assert_eq!(sym.ty, ty);
    assert_eq!(sym.owner(), Some(fx.owner().clone()));
}

#[test]
fn native_public_function_without_body() {
    let fx = Fixture::new();
    let mut pool = fx.table.types().write();
    let sig = pool.invokable(&[Idx::STRING], Idx::INT);

    let foo = create_function_symbol(
        Flags::PUBLIC | Flags::NATIVE,
        fx.name("foo"),
        fx.pkg,
        sig,
        fx.owner(),
        false,
    );

    assert_eq!(foo.kind(), SymKind::Function);
    assert!(is_public(&foo));
    assert!(is_native(&foo));
    assert!(!is_private(&foo));
    assert_eq!(foo.body_exists(), Some(false));
    assert_eq!(
        foo.invokable().map(|inv| inv.kind),
        Some(InvokableKind::Function)
    );
    assert_eq!(pool.tag(foo.ty), Tag::Invokable);
}

#[test]
fn non_function_invokables_have_bodies() {
    let fx = Fixture::new();
    for kind in [
        InvokableKind::Action,
        InvokableKind::Resource,
        InvokableKind::Worker,
        InvokableKind::Function,
    ] {
        let sym = create_invokable_symbol(
            kind,
            Flags::empty(),
            fx.name("x"),
            fx.pkg,
            Idx::NO_TYPE,
            fx.owner(),
        );
        assert_eq!(sym.kind(), kind.sym_kind());
        assert_eq!(sym.body_exists(), Some(true));
        assert!(sym.tag().contains(SymTag::INVOKABLE));
    }
}

#[test]
fn builtin_package_shares_root_scope() {
    let fx = Fixture::new();
    let builtin = create_package_symbol(fx.table.builtin_package_id(), &fx.table);

    let scope = builtin.scope().unwrap_or_else(|| panic!("packages are scoped"));
    assert!(SharedScope::ptr_eq(scope, fx.table.root_scope()));
    assert_eq!(builtin.owner(), Some(fx.owner().clone()));
    assert_eq!(builtin.ty, Idx::NO_TYPE);
    assert!(builtin.flags.is_empty());
}

#[test]
fn builtin_detection_uses_name_prefix() {
    let fx = Fixture::new();
    let core = PackageId::from_parts(
        fx.table.interner(),
        "ballerina",
        "ballerina.builtin.core",
        "0.0.0",
    );
    let sym = create_package_symbol(core, &fx.table);

    let scope = sym.scope().unwrap_or_else(|| panic!("packages are scoped"));
    assert!(SharedScope::ptr_eq(scope, fx.table.root_scope()));
}

#[test]
fn user_packages_get_private_scopes() {
    let fx = Fixture::new();
    let other = PackageId::from_parts(fx.table.interner(), "acme", "billing", "1.0.0");

    let shop = create_package_symbol(fx.pkg, &fx.table);
    let shop_again = create_package_symbol(fx.pkg, &fx.table);
    let billing = create_package_symbol(other, &fx.table);

    let scopes: Vec<_> = [&shop, &shop_again, &billing]
        .iter()
        .filter_map(|sym| sym.scope().cloned())
        .collect();
    assert_eq!(scopes.len(), 3);

    for (i, a) in scopes.iter().enumerate() {
        assert!(a.is_empty());
        assert!(!SharedScope::ptr_eq(a, fx.table.root_scope()));
        for b in &scopes[i + 1..] {
            assert!(!SharedScope::ptr_eq(a, b));
        }
    }
    assert_eq!(shop.name, fx.name("shop"));
    assert_eq!(shop.scope().and_then(SharedScope::owner), Some(shop.clone()));
}

#[test]
fn package_scopes_do_not_leak() {
    let fx = Fixture::new();
    let billing = PackageId::from_parts(fx.table.interner(), "acme", "billing", "1.0.0");
    let shop = create_package_symbol(fx.pkg, &fx.table);
    let bill = create_package_symbol(billing, &fx.table);

    let invoice = create_record_symbol(
        Flags::PUBLIC,
        fx.name("Invoice"),
        billing,
        Idx::NO_TYPE,
        &bill,
    );
    if let Some(scope) = bill.scope() {
        assert_eq!(scope.define(invoice.name, invoice), Ok(None));
    }

    assert!(shop.scope().is_some_and(|s| s.lookup(fx.name("Invoice")).is_none()));
    assert!(fx.table.root_scope().lookup(fx.name("Invoice")).is_none());
}

#[test]
fn type_symbols_follow_kind() {
    let fx = Fixture::new();
    for kind in [
        SymKind::Object,
        SymKind::Record,
        SymKind::Enum,
        SymKind::Connector,
        SymKind::Service,
        SymKind::Scope,
        SymKind::Type,
    ] {
        let sym = create_type_symbol(
            kind,
            Flags::empty(),
            fx.name("T"),
            fx.pkg,
            Idx::NO_TYPE,
            fx.owner(),
        );
        assert_consistent(&sym, kind);
    }
}

#[test]
fn non_type_kind_becomes_plain_type() {
    let fx = Fixture::new();
    let sym = create_type_symbol(
        SymKind::Function,
        Flags::empty(),
        fx.name("T"),
        fx.pkg,
        Idx::NO_TYPE,
        fx.owner(),
    );
    assert_eq!(sym.kind(), SymKind::Type);
}

#[test]
fn scope_symbol_has_no_flags() {
    let fx = Fixture::new();
    let block = create_scope_symbol(fx.name("txn"), fx.pkg, Idx::NO_TYPE, fx.owner());
    assert!(block.flags.is_empty());
    assert!(block.scope().is_some());
}

#[test]
fn annotation_keeps_attach_points() {
    let fx = Fixture::new();
    let points = AttachPoints::SERVICE | AttachPoints::RESOURCE;
    let ann = create_annotation_symbol(
        Flags::PUBLIC,
        points,
        fx.name("path"),
        fx.pkg,
        Idx::NO_TYPE,
        fx.owner(),
    );
    assert_eq!(ann.attach_points(), Some(points));
    assert!(ann.scope().is_none());
}

#[test]
fn attached_function_names() {
    assert_eq!(attached_func_symbol_name("Person", "getName"), "Person.getName");
    assert_eq!(attached_func_symbol_name("", "f"), ".f");
}
