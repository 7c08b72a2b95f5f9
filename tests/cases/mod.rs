#![allow(dead_code)]

use basetype::{BoxBuilder, Symbol, SymbolTable, Ty, TypeBuilder};

/// A small C program's worth of definitions.
///
/// ```c
/// typedef unsigned int myint;
/// typedef int int32_t;
/// typedef unsigned long size_t;
/// typedef int32_t t3; typedef t3 t2; typedef t2 t1;
///
/// struct list { size_t len; struct list *next; };
/// typedef struct list list_t;
/// struct tree { struct tree *left, *right; myint key; };
///
/// struct a1 { int x; struct b1 *next; }; struct b1 { int y; struct a1 *back; };
/// struct a2 { int x; struct b2 *next; }; struct b2 { t1 y; struct a2 *back; };
///
/// struct FILE;
/// int main();
/// ```
pub fn symbols(builder: BoxBuilder) -> SymbolTable<BoxBuilder> {
    let mut symbols = SymbolTable::new();

    symbols.add_type("myint", builder.unsigned(32));
    symbols.add_type("int32_t", builder.signed(32));
    symbols.add_type("size_t", builder.unsigned(64));
    symbols.add_type("t3", builder.named("int32_t"));
    symbols.add_type("t2", builder.named("t3"));
    symbols.add_type("t1", builder.named("t2"));

    symbols.add_type(
        "list",
        builder.struct_type([
            ("len", builder.named("size_t")),
            ("next", builder.pointer(builder.named("list"))),
        ]),
    );
    symbols.add_type("list_t", builder.named("list"));
    symbols.add_type(
        "tree",
        builder.struct_type([
            ("left", builder.pointer(builder.named("tree"))),
            ("right", builder.pointer(builder.named("tree"))),
            ("key", builder.named("myint")),
        ]),
    );

    add_pair(&mut symbols, builder, "a1", "b1", builder.signed(32));
    add_pair(&mut symbols, builder, "a2", "b2", builder.named("t1"));

    symbols.insert(Symbol::forward_decl("FILE"));
    symbols.add_value("main", builder.function([], builder.signed(32)));

    symbols
}

fn add_pair(
    symbols: &mut SymbolTable<BoxBuilder>,
    builder: BoxBuilder,
    a: &str,
    b: &str,
    field: Ty<BoxBuilder>,
) {
    symbols.add_type(
        a,
        builder.struct_type([
            ("x", builder.signed(32)),
            ("next", builder.pointer(builder.named(b))),
        ]),
    );
    symbols.add_type(
        b,
        builder.struct_type([("y", field), ("back", builder.pointer(builder.named(a)))]),
    );
}

/// Generates a test comparing two types built from `$builder` against
/// [`symbols`].
///
/// Both argument orders are checked, since equivalence is symmetric.
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        with: $builder:ident,
        left: $left:expr,
        right: $right:expr,
        equivalent: $expected:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            use basetype::TypeBuilder as _;

            let $builder = basetype::BoxBuilder::new();
            let symbols = $crate::cases::symbols($builder);
            let left = $left;
            let right = $right;

            pretty_assertions::assert_eq!(
                basetype::type_equivalent(left.clone(), right.clone(), &symbols, $builder),
                $expected,
                "left vs right"
            );
            pretty_assertions::assert_eq!(
                basetype::type_equivalent(right, left, &symbols, $builder),
                $expected,
                "right vs left"
            );
        }
    };
}
