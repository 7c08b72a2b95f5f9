//! Uniform access to types and structural equality.
//!
//! `types_equal` is deep structural equality: it compares every part of two
//! types, including array lengths and member names, but not qualifiers. It
//! never resolves `Named` references; two references are equal only if they
//! name the same identifier.

use super::{Ty, TyData, TypeBuilder, TypeKind};

/// Structurally compare two types from potentially different builders.
///
/// Returns `true` if the types have the same structure, regardless of
/// which builders were used to create them. Qualifiers are annotations and
/// do not take part in the comparison.
///
/// # Example
///
/// ```
/// use basetype_types::{types_equal, TypeBuilder, ArenaBuilder, BoxBuilder};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let arena_builder = ArenaBuilder::new(&arena);
/// let box_builder = BoxBuilder::new();
///
/// let arr1 = arena_builder.array(arena_builder.signed(32), Some(4));
/// let arr2 = box_builder.array(box_builder.signed(32), Some(4));
///
/// assert!(types_equal(arr1, arena_builder, arr2, box_builder));
/// ```
pub fn types_equal<I1: TypeBuilder, I2: TypeBuilder>(
    ty1: I1::TypeView,
    builder1: I1,
    ty2: I2::TypeView,
    builder2: I2,
) -> bool {
    match (ty1.view(builder1), ty2.view(builder2)) {
        // Base cases - direct comparison
        (TypeKind::Scalar(s1), TypeKind::Scalar(s2)) => s1 == s2,
        (TypeKind::IncompleteStruct, TypeKind::IncompleteStruct) => true,
        (TypeKind::Named(n1), TypeKind::Named(n2)) => n1.as_ref() == n2.as_ref(),

        (TypeKind::Pointer(p1), TypeKind::Pointer(p2)) => {
            types_equal(p1.clone(), builder1, p2.clone(), builder2)
        }

        // Arrays - element types and declared lengths
        (
            TypeKind::Array {
                elem: e1,
                size: s1,
            },
            TypeKind::Array {
                elem: e2,
                size: s2,
            },
        ) => s1 == s2 && types_equal(e1.clone(), builder1, e2.clone(), builder2),

        (TypeKind::IncompleteArray(e1), TypeKind::IncompleteArray(e2)) => {
            types_equal(e1.clone(), builder1, e2.clone(), builder2)
        }

        // Aggregates - same kind, then members pairwise in declaration order
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
            let data1 = builder1.members_data(m1);
            let data2 = builder2.members_data(m2);

            if k1 != k2 || data1.len() != data2.len() {
                return false;
            }

            data1.iter().zip(data2.iter()).all(|((n1, t1), (n2, t2))| {
                n1.as_ref() == n2.as_ref()
                    && types_equal(t1.clone(), builder1, t2.clone(), builder2)
            })
        }

        // Functions - compare parameters, return type and variadicity
        (
            TypeKind::Function {
                params: p1,
                ret: r1,
                variadic: v1,
            },
            TypeKind::Function {
                params: p2,
                ret: r2,
                variadic: v2,
            },
        ) => {
            let params1 = builder1.types_data(p1);
            let params2 = builder2.types_data(p2);

            if v1 != v2 || params1.len() != params2.len() {
                return false;
            }

            let params_match = params1
                .iter()
                .zip(params2.iter())
                .all(|(t1, t2)| types_equal(t1.clone(), builder1, t2.clone(), builder2));

            params_match && types_equal(r1.clone(), builder1, r2.clone(), builder2)
        }

        // Different kinds are not equal
        _ => false,
    }
}

/// TypeView trait for viewing types uniformly across different builders.
///
/// This trait provides a common interface for accessing type structure
/// regardless of which TypeBuilder was used to create the type.
pub trait TypeView<B: TypeBuilder>: Sized + Clone {
    /// View the structure of this type.
    fn view(&self, builder: B) -> &TypeKind<B>;

    /// Get the full type data including qualifiers and flags.
    fn data(&self, builder: B) -> &TyData<B>;

    /// Returns true if both views refer to the same stored node.
    fn ptr_eq(&self, other: &Self, builder: B) -> bool;
}

/// Implementation of TypeView for `Ty<B>`.
impl<B: TypeBuilder> TypeView<B> for Ty<B> {
    fn view(&self, builder: B) -> &TypeKind<B> {
        self.kind(builder)
    }

    fn data(&self, builder: B) -> &TyData<B> {
        self.data(builder)
    }

    fn ptr_eq(&self, other: &Self, builder: B) -> bool {
        self.ptr_eq(other, builder)
    }
}
