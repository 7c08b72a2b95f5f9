/*
 * Canonical Form Tests
 *
 * Canonicalization expands names up to the first pointer and keeps
 * everything else, including qualifiers, exactly as it was.
 */

mod cases;

use basetype::{
    ArenaBuilder, BoxBuilder, SymbolTable, TyDisplay, TypeBuilder, canonicalize_type, types_equal,
};
use bumpalo::Bump;
use pretty_assertions::assert_eq;

fn canonical(build: impl FnOnce(BoxBuilder) -> basetype::Ty<BoxBuilder>) -> String {
    let builder = BoxBuilder::new();
    let symbols = cases::symbols(builder);
    canonicalize_type(build(builder), &symbols, builder).display(builder)
}

#[test]
fn scalar_alias() {
    assert_eq!(canonical(|b| b.named("myint")), "UInt32");
}

#[test]
fn alias_chain() {
    assert_eq!(canonical(|b| b.named("t1")), "Int32");
}

#[test]
fn recursive_struct_stops_at_pointer() {
    assert_eq!(
        canonical(|b| b.named("list_t")),
        "Struct[len: UInt64, next: Ptr[list]]"
    );
    assert_eq!(
        canonical(|b| b.named("tree")),
        "Struct[left: Ptr[tree], right: Ptr[tree], key: UInt32]"
    );
}

#[test]
fn pointers_and_signatures_are_kept() {
    assert_eq!(canonical(|b| b.pointer(b.named("t1"))), "Ptr[t1]");
    assert_eq!(
        canonical(|b| b.function([b.named("size_t")], b.named("myint"))),
        "(size_t) => myint"
    );
}

#[test]
fn nested_arrays() {
    assert_eq!(
        canonical(|b| b.array(b.array(b.named("myint"), Some(3)), Some(2))),
        "Array[Array[UInt32; 3]; 2]"
    );
    assert_eq!(
        canonical(|b| b.struct_type([("data", b.incomplete_array(b.named("size_t")))])),
        "Struct[data: Array[UInt64]]"
    );
}

#[test]
fn qualifiers_are_preserved() {
    assert_eq!(canonical(|b| b.constant(&b.named("t2"))), "const Int32");
    assert_eq!(
        canonical(|b| b.constant(&b.struct_type([("n", b.named("size_t"))]))),
        "const Struct[n: UInt64]"
    );
}

#[test]
fn unresolvable_names_are_kept() {
    assert_eq!(canonical(|b| b.named("FILE")), "FILE");
    assert_eq!(canonical(|b| b.named("undeclared")), "undeclared");
    assert_eq!(canonical(|b| b.named("main")), "main");
}

#[test]
fn canonical_forms_are_stable() {
    let builder = BoxBuilder::new();
    let symbols = cases::symbols(builder);

    for name in ["myint", "t1", "list", "list_t", "tree", "a1", "b2", "FILE"] {
        let once = canonicalize_type(builder.named(name), &symbols, builder);
        let twice = canonicalize_type(once.clone(), &symbols, builder);
        assert!(
            types_equal(once.clone(), builder, twice, builder),
            "{name} changed on the second pass"
        );
    }
}

#[test]
fn arena_and_box_builders_agree() {
    let arena = Bump::new();
    let arena_builder = ArenaBuilder::new(&arena);
    let mut arena_symbols = SymbolTable::new();
    arena_symbols.add_type("size_t", arena_builder.unsigned(64));
    arena_symbols.add_type(
        "list",
        arena_builder.struct_type([
            ("len", arena_builder.named("size_t")),
            ("next", arena_builder.pointer(arena_builder.named("list"))),
        ]),
    );

    let box_builder = BoxBuilder::new();
    let box_symbols = cases::symbols(box_builder);

    let from_arena = canonicalize_type(arena_builder.named("list"), &arena_symbols, arena_builder);
    let from_box = canonicalize_type(box_builder.named("list"), &box_symbols, box_builder);
    assert!(types_equal(from_arena, arena_builder, from_box, box_builder));
}
