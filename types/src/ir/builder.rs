//! TypeBuilder trait - unified type construction and storage abstraction.
//!
//! This trait combines:
//! - High-level type constructors (signed(), pointer(), struct_type(), etc.)
//! - Low-level storage management (interning, identity)
//! - Pluggable storage strategies (arena, RC, etc.)

use crate::{FloatKind, Qualifiers, Scalar, TyData, TypeKind};
use crate::ir::AggregateKind;
use core::fmt::Debug;
use core::hash::Hash;

/// Abstraction over type construction and storage.
///
/// This trait allows different implementations to choose how types
/// are built and stored in memory (arena, reference counting, ...)
/// while keeping canonicalization and equivalence generic.
///
/// # Design
///
/// The builder pattern separates:
/// - **What a type is** (`TypeKind<B>`) - the logical structure
/// - **How types are stored** (`B::InternedTy`) - the representation
/// - **How to construct types** (`B::signed()`, `B::pointer()`, etc.) - the API
///
/// Stored nodes are immutable. Rewriting a type builds new nodes and shares
/// every untouched subtree with the input, which is what makes the
/// `same_ty` identity check a useful fast path.
///
/// # Requirements
///
/// Builders must be `Copy` so they can be passed around cheaply.
///
/// # Example
///
/// ```
/// use basetype_types::{TypeBuilder, ArenaBuilder};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let builder = ArenaBuilder::new(&arena);
///
/// let int_ty = builder.signed(32);
/// let ptr_ty = builder.pointer(int_ty);
/// assert!(ptr_ty.is_pointer(builder));
/// ```
pub trait TypeBuilder: Copy + Clone + Debug + Eq {
    /// The type handle returned by this builder.
    type TypeView: crate::TypeView<Self> + Clone + Debug + Eq + Hash;

    /// The internal interned representation of a type.
    ///
    /// This is opaque to generic code - could be:
    /// - `&'arena TyData<B>` (arena)
    /// - `Rc<TyData<B>>` (box/rc)
    type InternedTy: Clone + Debug + Eq + Hash;

    /// The interned representation of a string (identifiers, member names).
    type InternedStr: Clone + Debug + Eq + Hash + AsRef<str> + core::fmt::Display;

    /// Interned list of types (for function parameters).
    type InternedTypes: Clone + Debug + Eq + Hash;

    /// Interned list of aggregate members, in declaration order.
    type InternedMembers: Clone + Debug + Eq + Hash;

    // ========================================================================
    // High-level type constructors (ergonomic API)
    // ========================================================================

    fn void(self) -> Self::TypeView {
        self.scalar(Scalar::Void)
    }

    fn bool(self) -> Self::TypeView {
        self.scalar(Scalar::Bool)
    }

    /// Construct a signed integer of `width` bits.
    fn signed(self, width: u16) -> Self::TypeView {
        self.scalar(Scalar::SignedInt(width))
    }

    /// Construct an unsigned integer of `width` bits.
    fn unsigned(self, width: u16) -> Self::TypeView {
        self.scalar(Scalar::UnsignedInt(width))
    }

    fn float(self, kind: FloatKind) -> Self::TypeView {
        self.scalar(Scalar::Float(kind))
    }

    /// Construct any scalar type.
    fn scalar(self, scalar: Scalar) -> Self::TypeView;

    /// Construct a pointer to `pointee`.
    fn pointer(self, pointee: Self::TypeView) -> Self::TypeView;

    /// Construct an array with an optional declared length.
    fn array(self, elem: Self::TypeView, size: Option<u64>) -> Self::TypeView;

    /// Construct an array without a length.
    fn incomplete_array(self, elem: Self::TypeView) -> Self::TypeView;

    /// Construct a struct with the given members.
    ///
    /// Members are kept in the order given.
    fn struct_type(
        self,
        members: impl IntoIterator<Item = (impl AsRef<str>, Self::TypeView)>,
    ) -> Self::TypeView {
        self.aggregate(AggregateKind::Struct, members)
    }

    /// Construct a union with the given members.
    fn union_type(
        self,
        members: impl IntoIterator<Item = (impl AsRef<str>, Self::TypeView)>,
    ) -> Self::TypeView {
        self.aggregate(AggregateKind::Union, members)
    }

    fn aggregate(
        self,
        kind: AggregateKind,
        members: impl IntoIterator<Item = (impl AsRef<str>, Self::TypeView)>,
    ) -> Self::TypeView;

    /// Construct a forward-declared aggregate.
    fn incomplete_struct(self) -> Self::TypeView;

    /// Construct a function signature with parameters and return type.
    fn function(
        self,
        params: impl IntoIterator<Item = Self::TypeView>,
        ret: Self::TypeView,
    ) -> Self::TypeView;

    /// Construct a function signature that accepts trailing variadic arguments.
    fn variadic_function(
        self,
        params: impl IntoIterator<Item = Self::TypeView>,
        ret: Self::TypeView,
    ) -> Self::TypeView;

    /// Construct a reference to the type definition called `name`.
    fn named(self, name: impl AsRef<str>) -> Self::TypeView;

    /// Rebuild the outermost node of `ty` with different qualifiers.
    ///
    /// Children are shared with `ty`.
    fn with_qualifiers(self, ty: &Self::TypeView, quals: Qualifiers) -> Self::TypeView;

    /// Add `const` to the outermost node of `ty`.
    fn constant(self, ty: &Self::TypeView) -> Self::TypeView {
        let quals = crate::TypeView::data(ty, self).quals | Qualifiers::CONST;
        self.with_qualifiers(ty, quals)
    }

    // ========================================================================
    // Low-level internals (implementation details)
    // ========================================================================

    /// Intern a type kind, returning a handle.
    ///
    /// The implementation is responsible for:
    /// 1. Computing the type flags via `kind.compute_flags(self)`
    /// 2. Wrapping the kind in TyData { kind, quals, flags }
    /// 3. Storing the TyData and returning a handle
    fn intern_ty(self, kind: TypeKind<Self>, quals: Qualifiers) -> Self::InternedTy;

    /// Retrieve the type data for an interned type.
    fn ty_data(self, ty: &Self::InternedTy) -> &TyData<Self>;

    /// Returns true if both handles refer to the same stored node.
    ///
    /// This is identity, not equality: two separately built `int32` nodes
    /// are equal but not the same.
    fn same_ty(self, a: &Self::InternedTy, b: &Self::InternedTy) -> bool;

    /// Intern a string.
    fn intern_str(self, s: &str) -> Self::InternedStr;

    /// Intern a list of types (e.g., for function parameters).
    fn intern_types<E>(self, data: impl IntoIterator<Item = E>) -> Self::InternedTypes
    where
        E: Into<Self::TypeView>;

    /// Retrieve the interned type list.
    fn types_data(self, types: &Self::InternedTypes) -> &[Self::TypeView];

    /// Intern a list of members (name + type pairs), preserving order.
    fn intern_members(
        self,
        data: impl IntoIterator<Item = (impl AsRef<str>, Self::TypeView)>,
    ) -> Self::InternedMembers;

    /// Retrieve the interned member list.
    fn members_data(self, members: &Self::InternedMembers) -> &[(Self::InternedStr, Self::TypeView)];
}
