//! Traits for "zipping" types, walking through two structures and checking that they match.
//!
//! This module is inspired by Chalk's zip implementation. The main use case is
//! structural equivalence, where resolving names and guarding against cycles
//! happens between two levels of the walk.
//!
//! ## Design
//!
//! The zip pattern separates two concerns:
//!
//! 1. **Structural recursion** - How to walk through matching shapes (`Zip` trait)
//! 2. **Child handling** - What to do with two types found in matching positions (`Zipper` trait)
//!
//! `Zip` for `TypeKind` compares the *shape* of two nodes: variant, member
//! names, parameter counts. Array lengths and function variadicity are not
//! part of the shape. Child types are handed to `Zipper::zip_tys`, which
//! decides whether to recurse, resolve names first, or stop early.
//!
//! ## Example
//!
//! ```
//! use basetype_types::{BoxBuilder, Mismatch, TypeBuilder, TypeView, Zip, Zipper};
//!
//! struct ShapeChecker {
//!     builder: BoxBuilder,
//! }
//!
//! impl Zipper<BoxBuilder> for ShapeChecker {
//!     type Error = Mismatch;
//!
//!     fn zip_tys(
//!         &mut self,
//!         a: <BoxBuilder as TypeBuilder>::TypeView,
//!         b: <BoxBuilder as TypeBuilder>::TypeView,
//!     ) -> Result<(), Mismatch> {
//!         Zip::zip_with(self, a.view(self.builder), b.view(self.builder))
//!     }
//!
//!     fn builder(&self) -> BoxBuilder {
//!         self.builder
//!     }
//! }
//!
//! let builder = BoxBuilder::new();
//! let mut checker = ShapeChecker { builder };
//!
//! let short = builder.array(builder.signed(32), Some(2));
//! let long = builder.array(builder.signed(32), Some(8));
//! assert!(checker.zip_tys(short, long).is_ok());
//! ```

use super::{Expr, Scalar, TypeBuilder, TypeKind};

/// Two structures did not match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mismatch;

/// Callback trait for zipping two types.
///
/// Implement this trait to define custom behavior when walking two types in parallel.
/// The `Zip` trait implementations will call your `zip_tys` method whenever they
/// encounter child types in matching positions.
///
/// `Error` lets a zipper abort with something other than a plain mismatch,
/// e.g. a malformed symbol table; `Zip` only ever produces `Mismatch`.
pub trait Zipper<B: TypeBuilder> {
    type Error: From<Mismatch>;

    /// Called when two types are found in matching positions.
    ///
    /// Typically this involves recursively zipping their structure via
    /// `Zip::zip_with`.
    fn zip_tys(&mut self, a: B::TypeView, b: B::TypeView) -> Result<(), Self::Error>;

    /// Get the type builder.
    fn builder(&self) -> B;
}

/// Trait for types that can be structurally zipped.
///
/// Implementations:
/// 1. Check that variants/discriminants match
/// 2. Hand child types to the zipper
/// 3. Return `Mismatch` otherwise
pub trait Zip<B: TypeBuilder> {
    /// Uses the zipper to walk through two values, ensuring that they match.
    fn zip_with<Z: Zipper<B>>(zipper: &mut Z, a: &Self, b: &Self) -> Result<(), Z::Error>;
}

// ============================================================================
// Generic Implementations
// ============================================================================

/// Zip for slices - check length, then zip elements in order.
impl<T, B> Zip<B> for [T]
where
    T: Zip<B>,
    B: TypeBuilder,
{
    fn zip_with<Z: Zipper<B>>(zipper: &mut Z, a: &Self, b: &Self) -> Result<(), Z::Error> {
        if a.len() != b.len() {
            return Err(Mismatch.into());
        }

        for (a_elem, b_elem) in a.iter().zip(b.iter()) {
            Zip::zip_with(zipper, a_elem, b_elem)?;
        }

        Ok(())
    }
}

/// Zip for vectors - same as slices.
impl<T, B> Zip<B> for alloc::vec::Vec<T>
where
    T: Zip<B>,
    B: TypeBuilder,
{
    fn zip_with<Z: Zipper<B>>(zipper: &mut Z, a: &Self, b: &Self) -> Result<(), Z::Error> {
        <[T] as Zip<B>>::zip_with(zipper, a, b)
    }
}

impl<B: TypeBuilder> Zip<B> for Scalar {
    fn zip_with<Z: Zipper<B>>(_zipper: &mut Z, a: &Self, b: &Self) -> Result<(), Z::Error> {
        if a == b { Ok(()) } else { Err(Mismatch.into()) }
    }
}

// ============================================================================
// TypeKind Implementation
// ============================================================================

impl<B: TypeBuilder> Zip<B> for TypeKind<B> {
    fn zip_with<Z: Zipper<B>>(zipper: &mut Z, a: &Self, b: &Self) -> Result<(), Z::Error> {
        match (a, b) {
            (TypeKind::Scalar(s1), TypeKind::Scalar(s2)) => Zip::zip_with(zipper, s1, s2),

            // References match by identifier only; resolving them is the zipper's job
            (TypeKind::Named(n1), TypeKind::Named(n2)) => {
                if n1.as_ref() == n2.as_ref() {
                    Ok(())
                } else {
                    Err(Mismatch.into())
                }
            }

            (TypeKind::IncompleteStruct, TypeKind::IncompleteStruct) => Ok(()),

            (TypeKind::Pointer(p1), TypeKind::Pointer(p2)) => {
                zipper.zip_tys(p1.clone(), p2.clone())
            }

            // Lengths are not part of the shape
            (TypeKind::Array { elem: e1, .. }, TypeKind::Array { elem: e2, .. }) => {
                zipper.zip_tys(e1.clone(), e2.clone())
            }

            (TypeKind::IncompleteArray(e1), TypeKind::IncompleteArray(e2)) => {
                zipper.zip_tys(e1.clone(), e2.clone())
            }

            // Aggregates - same kind, same arity, then member types and names in order
            (
                TypeKind::Aggregate {
                    kind: k1,
                    members: m1,
                },
                TypeKind::Aggregate {
                    kind: k2,
                    members: m2,
                },
            ) => {
                let builder = zipper.builder();
                let data1 = builder.members_data(m1);
                let data2 = builder.members_data(m2);

                if k1 != k2 || data1.len() != data2.len() {
                    return Err(Mismatch.into());
                }

                for ((name1, ty1), (name2, ty2)) in data1.iter().zip(data2.iter()) {
                    zipper.zip_tys(ty1.clone(), ty2.clone())?;

                    if name1.as_ref() != name2.as_ref() {
                        return Err(Mismatch.into());
                    }
                }

                Ok(())
            }

            // Functions - parameters in order, then return type
            (
                TypeKind::Function {
                    params: params1,
                    ret: ret1,
                    ..
                },
                TypeKind::Function {
                    params: params2,
                    ret: ret2,
                    ..
                },
            ) => {
                let builder = zipper.builder();
                let param_data1 = builder.types_data(params1);
                let param_data2 = builder.types_data(params2);

                if param_data1.len() != param_data2.len() {
                    return Err(Mismatch.into());
                }

                for (param1, param2) in param_data1.iter().zip(param_data2.iter()) {
                    zipper.zip_tys(param1.clone(), param2.clone())?;
                }

                zipper.zip_tys(ret1.clone(), ret2.clone())
            }

            // Mismatched variants
            _ => Err(Mismatch.into()),
        }
    }
}

// ============================================================================
// Expression Implementation
// ============================================================================

/// Expressions match when their tags are identical, the zipper accepts their
/// static types, and their operands match pairwise in order.
///
/// A tag includes its payload: `x` and `y` are different expressions even
/// when both are `int`, and so are `1` and `2`. Only types are compared up
/// to equivalence.
impl<B: TypeBuilder> Zip<B> for Expr<B> {
    fn zip_with<Z: Zipper<B>>(zipper: &mut Z, a: &Self, b: &Self) -> Result<(), Z::Error> {
        if a.kind != b.kind {
            return Err(Mismatch.into());
        }

        zipper.zip_tys(a.ty.clone(), b.ty.clone())?;

        Zip::zip_with(zipper, &a.operands, &b.operands)
    }
}
