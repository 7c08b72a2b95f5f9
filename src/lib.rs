//! Basetype - canonical forms and structural equivalence for C-like types
//!
//! # Overview
//!
//! A verification front-end hands the solver layer types that refer to each
//! other by name: typedef chains, struct tags, self-referential lists and
//! trees. Two such types can be spelled very differently and still denote
//! the same thing. This crate answers two questions about them:
//!
//! - What does a type look like with every name expanded up to the first
//!   pointer? ([`canonicalize_type`], [`canonicalize_expr`])
//! - Do two types, or two typed expressions, denote the same thing?
//!   ([`type_equivalent`], [`expr_equivalent`])
//!
//! Names are resolved through a [`Namespace`]; [`SymbolTable`] is a ready
//! made one.
//!
//! # Quick Start
//!
//! ```
//! use basetype::{BoxBuilder, SymbolTable, TyDisplay, TypeBuilder};
//! use basetype::{canonicalize_type, type_equivalent};
//!
//! let builder = BoxBuilder::new();
//! let mut symbols = SymbolTable::new();
//!
//! // struct list { size_t len; struct list *next; }; typedef struct list list_t;
//! symbols.add_type("size_t", builder.unsigned(64));
//! symbols.add_type(
//!     "list",
//!     builder.struct_type([
//!         ("len", builder.named("size_t")),
//!         ("next", builder.pointer(builder.named("list"))),
//!     ]),
//! );
//! symbols.add_type("list_t", builder.named("list"));
//!
//! let canonical = canonicalize_type(builder.named("list_t"), &symbols, builder);
//! assert_eq!(canonical.display(builder), "Struct[len: UInt64, next: Ptr[list]]");
//!
//! let equal = type_equivalent(builder.named("list_t"), builder.named("list"), &symbols, builder);
//! assert_eq!(equal, Ok(true));
//! ```
//!
//! # Storage
//!
//! Types are built by a [`TypeBuilder`]. [`ArenaBuilder`] allocates in a
//! `bumpalo` arena and hands out `Copy` handles; [`BoxBuilder`] uses
//! reference counting. Everything in this crate is generic over the builder.

// Re-export the operations and the namespace from basetype_core
pub use basetype_core::{
    Equivalence, Error, Namespace, Symbol, SymbolTable, TypeCanonicalizer, UnionFind, ZipError,
    canonicalize_expr, canonicalize_type, expr_equivalent, type_equivalent,
};

// Re-export the type and expression IR
pub use basetype_types::{
    AggregateKind, ArenaBuilder, BinaryOp, BoxBuilder, Constant, Expr, ExprKind, FloatKind,
    Qualifiers, Scalar, Ty, TyDisplay, TypeBuilder, TypeKind, TypeView, UnaryOp, exprs_equal,
    types_equal,
};

pub use basetype_types as types;
