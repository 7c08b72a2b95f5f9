//! Type and expression IR with pluggable type builders.
//!
//! This crate provides a generic representation of the types and typed
//! expressions of a C-like verification front-end, and works with different
//! storage strategies (arena, reference counting).
//!
//! # Example
//!
//! ```
//! use basetype_types::{TypeBuilder, ArenaBuilder, TyDisplay};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let builder = ArenaBuilder::new(&arena);
//!
//! let node = builder.struct_type([
//!     ("value", builder.signed(32)),
//!     ("next", builder.pointer(builder.named("node"))),
//! ]);
//! assert_eq!(node.display(builder), "Struct[value: Int32, next: Ptr[node]]");
//! ```

#![no_std]
extern crate alloc;

// Intermediate Representation - generic type system
pub mod ir;

// Concrete builder implementations
pub mod arena_builder;
pub mod box_builder;

// Re-export IR types for convenience
pub use ir::{
    AggregateKind, BinaryOp, Constant, Expr, ExprKind, FloatKind, Mismatch, NamedRefCollector,
    Qualifiers, Scalar, Ty, TyData, TyDisplay, TypeBuilder, TypeFlags, TypeFolder, TypeFormatter,
    TypeKind, TypeKindDisplay, TypeView, TypeVisitor, UnaryOp, Zip, Zipper, exprs_equal,
    types_equal,
};

// Re-export concrete builders
pub use arena_builder::ArenaBuilder;
pub use box_builder::BoxBuilder;
