//! Intermediate Representation (IR) for types and typed expressions.
//!
//! This module contains the generic, builder-agnostic representation of types.
//! The IR is parameterized by the `TypeBuilder` trait, which allows different
//! implementations to choose how types are built and stored in memory.
//!
//! ## Structure
//!
//! - **Core types**: `TypeKind`, `Ty` - the logical structure of types
//! - **Expressions**: `Expr`, `ExprKind` - typed operator trees
//! - **TypeBuilder trait**: Abstract interface for type construction and storage
//! - **TypeView trait**: Unified view over types from different builders
//! - **Generic algorithms**: Visitor, folder and zip patterns over types
//! - **Display**: Pretty-printing support

pub mod builder;
pub mod display;
pub mod expr;
pub mod fold;
pub mod scalar;
pub mod ty;
pub mod view;
pub mod visit;
pub mod zip;

pub use builder::TypeBuilder;
pub use display::{TyDisplay, TypeFormatter, TypeKindDisplay};
pub use expr::{BinaryOp, Constant, Expr, ExprKind, UnaryOp, exprs_equal};
pub use fold::TypeFolder;
pub use scalar::{FloatKind, Scalar};
pub use ty::{AggregateKind, Qualifiers, Ty, TyData, TypeFlags, TypeKind};
pub use view::{TypeView, types_equal};
pub use visit::{NamedRefCollector, TypeVisitor};
pub use zip::{Mismatch, Zip, Zipper};
