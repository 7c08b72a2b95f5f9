//! Example demonstrating the Zip trait for comparing type shapes.
//!
//! This shows how to implement a Zipper that walks two types in parallel.
//! `Zip` decides whether two nodes have the same shape; the zipper decides
//! what to do with the children found in matching positions.
//!
//! Run with: cargo run --example zip_equality

use basetype_types::{BoxBuilder, Mismatch, Ty, TyDisplay, TypeBuilder, TypeView, Zip, Zipper};

/// A zipper that accepts two types when they have the same shape.
///
/// `Named` references are compared by identifier and never looked up.
struct ShapeZipper {
    builder: BoxBuilder,
    visited: usize,
}

impl ShapeZipper {
    fn same_shape(
        a: <BoxBuilder as TypeBuilder>::TypeView,
        b: <BoxBuilder as TypeBuilder>::TypeView,
        builder: BoxBuilder,
    ) -> (bool, usize) {
        let mut zipper = Self {
            builder,
            visited: 0,
        };
        let result = zipper.zip_tys(a, b).is_ok();
        (result, zipper.visited)
    }
}

impl Zipper<BoxBuilder> for ShapeZipper {
    type Error = Mismatch;

    fn zip_tys(
        &mut self,
        a: <BoxBuilder as TypeBuilder>::TypeView,
        b: <BoxBuilder as TypeBuilder>::TypeView,
    ) -> Result<(), Mismatch> {
        self.visited += 1;
        Zip::zip_with(self, a.view(self.builder), b.view(self.builder))
    }

    fn builder(&self) -> BoxBuilder {
        self.builder
    }
}

fn main() {
    println!("=== Zip Shape Checker Example ===\n");

    let builder = BoxBuilder::new();
    let report = |a: Ty<BoxBuilder>, b: Ty<BoxBuilder>| {
        let label = format!("{} ~ {}", a.display(builder), b.display(builder));
        let (equal, visited) = ShapeZipper::same_shape(a, b, builder);
        println!("{label}: {equal} ({visited} pairs visited)");
        equal
    };

    // Same scalars
    assert!(report(builder.signed(32), builder.signed(32)));

    // Different scalars
    assert!(!report(builder.signed(32), builder.unsigned(32)));

    // Array lengths are not part of the shape
    assert!(report(
        builder.array(builder.signed(8), Some(4)),
        builder.array(builder.signed(8), Some(16)),
    ));

    // Qualifiers are not part of the shape either
    assert!(report(
        builder.pointer(builder.constant(&builder.signed(8))),
        builder.pointer(builder.signed(8)),
    ));

    // Member names are
    assert!(!report(
        builder.struct_type([("x", builder.signed(32))]),
        builder.struct_type([("y", builder.signed(32))]),
    ));

    // Functions: parameter count, then parameters, then return type
    assert!(report(
        builder.function([builder.signed(32)], builder.bool()),
        builder.variadic_function([builder.signed(32)], builder.bool()),
    ));
    assert!(!report(
        builder.function([builder.signed(32)], builder.bool()),
        builder.function([builder.signed(32), builder.signed(32)], builder.bool()),
    ));

    // Self-referential structs close their cycle through a name
    let node = |builder: BoxBuilder| {
        builder.struct_type([
            ("value", builder.signed(32)),
            ("next", builder.pointer(builder.named("node"))),
        ])
    };
    assert!(report(node(builder), node(builder)));

    println!("\n=== All checks passed! ===");
}
