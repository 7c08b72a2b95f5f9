use crate::TypeView;
use crate::ir::{AggregateKind, Qualifiers, Scalar, TyData, TypeBuilder, TypeKind};
use alloc::vec::Vec;
use bumpalo::Bump;

/// Builder that uses arena allocation.
///
/// Types are allocated in a `Bump` arena. We don't do actual interning
/// (deduplication), just allocation: equivalence never relies on two equal
/// types sharing storage, only on shared storage implying equality.
///
/// Following Chalk's design, we compute type flags during interning and
/// wrap the TypeKind in TyData.
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
/// let elem = builder.unsigned(8);
/// let buf = builder.array(elem, Some(16));
/// assert!(buf.is_array(builder));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ArenaBuilder<'arena> {
    arena: &'arena Bump,
}

// Manual implementations since Bump doesn't implement PartialEq/Eq/Hash
// We use pointer equality - two builders are equal if they point to the same arena
impl<'arena> PartialEq for ArenaBuilder<'arena> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.arena, other.arena)
    }
}

impl<'arena> Eq for ArenaBuilder<'arena> {}

impl<'arena> core::hash::Hash for ArenaBuilder<'arena> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.arena, state)
    }
}

impl<'arena> ArenaBuilder<'arena> {
    /// Create a new arena builder.
    pub fn new(arena: &'arena Bump) -> Self {
        Self { arena }
    }
}

impl<'arena> TypeBuilder for ArenaBuilder<'arena> {
    type TypeView = crate::Ty<Self>;
    type InternedTy = &'arena TyData<Self>;
    type InternedStr = &'arena str;
    type InternedTypes = &'arena [crate::Ty<Self>];
    type InternedMembers = &'arena [(&'arena str, crate::Ty<Self>)];

    // ========================================================================
    // High-level type constructors
    // ========================================================================

    fn scalar(self, scalar: Scalar) -> Self::TypeView {
        TypeKind::Scalar(scalar).intern(self)
    }

    fn pointer(self, pointee: Self::TypeView) -> Self::TypeView {
        TypeKind::Pointer(pointee).intern(self)
    }

    fn array(self, elem: Self::TypeView, size: Option<u64>) -> Self::TypeView {
        TypeKind::Array { elem, size }.intern(self)
    }

    fn incomplete_array(self, elem: Self::TypeView) -> Self::TypeView {
        TypeKind::IncompleteArray(elem).intern(self)
    }

    fn aggregate(
        self,
        kind: AggregateKind,
        members: impl IntoIterator<Item = (impl AsRef<str>, Self::TypeView)>,
    ) -> Self::TypeView {
        TypeKind::Aggregate {
            kind,
            members: self.intern_members(members),
        }
        .intern(self)
    }

    fn incomplete_struct(self) -> Self::TypeView {
        TypeKind::IncompleteStruct.intern(self)
    }

    fn function(
        self,
        params: impl IntoIterator<Item = Self::TypeView>,
        ret: Self::TypeView,
    ) -> Self::TypeView {
        TypeKind::Function {
            params: self.intern_types(params),
            ret,
            variadic: false,
        }
        .intern(self)
    }

    fn variadic_function(
        self,
        params: impl IntoIterator<Item = Self::TypeView>,
        ret: Self::TypeView,
    ) -> Self::TypeView {
        TypeKind::Function {
            params: self.intern_types(params),
            ret,
            variadic: true,
        }
        .intern(self)
    }

    fn named(self, name: impl AsRef<str>) -> Self::TypeView {
        TypeKind::Named(self.intern_str(name.as_ref())).intern(self)
    }

    fn with_qualifiers(self, ty: &Self::TypeView, quals: Qualifiers) -> Self::TypeView {
        ty.view(self).clone().intern_with(self, quals)
    }

    // ========================================================================
    // Low-level internals
    // ========================================================================

    fn intern_ty(self, kind: TypeKind<Self>, quals: Qualifiers) -> Self::InternedTy {
        // Compute flags from the type kind
        let flags = kind.compute_flags(self);

        // No deduplication, see the type-level docs
        self.arena.alloc(TyData { kind, quals, flags })
    }

    fn ty_data(self, ty: &Self::InternedTy) -> &TyData<Self> {
        ty
    }

    fn same_ty(self, a: &Self::InternedTy, b: &Self::InternedTy) -> bool {
        core::ptr::eq(*a, *b)
    }

    fn intern_str(self, s: &str) -> Self::InternedStr {
        self.arena.alloc_str(s)
    }

    fn intern_types<E>(self, data: impl IntoIterator<Item = E>) -> Self::InternedTypes
    where
        E: Into<crate::Ty<Self>>,
    {
        let types: Vec<_> = data.into_iter().map(|e| e.into()).collect();
        self.arena.alloc_slice_copy(&types)
    }

    fn types_data(self, types: &Self::InternedTypes) -> &[crate::Ty<Self>] {
        types
    }

    fn intern_members(
        self,
        data: impl IntoIterator<Item = (impl AsRef<str>, crate::Ty<Self>)>,
    ) -> Self::InternedMembers {
        // Intern all member names in the arena
        let members: Vec<(&'arena str, crate::Ty<Self>)> = data
            .into_iter()
            .map(|(name, ty)| {
                let interned_name: &'arena str = self.arena.alloc_str(name.as_ref());
                (interned_name, ty)
            })
            .collect();

        self.arena.alloc_slice_copy(&members)
    }

    fn members_data(
        self,
        members: &Self::InternedMembers,
    ) -> &[(Self::InternedStr, crate::Ty<Self>)] {
        members
    }
}
