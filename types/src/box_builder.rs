use crate::ir::{AggregateKind, Qualifiers, Scalar, TyData, TypeBuilder, TypeKind};
use crate::TypeView;
use alloc::rc::Rc;
use alloc::vec::Vec;

/// Builder that uses reference counting (no deduplication).
///
/// Types are allocated with `Rc` and no interning is performed.
/// This is useful for:
/// - Tests and short-lived tools (no arena to thread through)
/// - Long-lived symbol tables where individual types are dropped over time
///
/// Following Chalk's design, we compute type flags during interning and
/// wrap the TypeKind in TyData.
///
/// # Example
///
/// ```
/// use basetype_types::{TypeBuilder, BoxBuilder};
///
/// let builder = BoxBuilder::new();
/// let node = builder.struct_type([("value", builder.signed(32))]);
/// assert!(node.is_aggregate(builder));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoxBuilder;

impl BoxBuilder {
    /// Create a new box builder.
    pub fn new() -> Self {
        Self
    }
}

impl TypeBuilder for BoxBuilder {
    type TypeView = crate::Ty<Self>;
    type InternedTy = Rc<TyData<Self>>;
    type InternedStr = Rc<str>;
    type InternedTypes = Rc<[crate::Ty<Self>]>;
    type InternedMembers = Rc<[(Rc<str>, crate::Ty<Self>)]>;

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

        // Wrap in TyData and allocate
        Rc::new(TyData { kind, quals, flags })
    }

    fn ty_data(self, ty: &Self::InternedTy) -> &TyData<Self> {
        ty
    }

    fn same_ty(self, a: &Self::InternedTy, b: &Self::InternedTy) -> bool {
        Rc::ptr_eq(a, b)
    }

    fn intern_str(self, s: &str) -> Self::InternedStr {
        Rc::from(s)
    }

    fn intern_types<E>(self, data: impl IntoIterator<Item = E>) -> Self::InternedTypes
    where
        E: Into<crate::Ty<Self>>,
    {
        let types: Vec<_> = data.into_iter().map(|e| e.into()).collect();
        types.into()
    }

    fn types_data(self, types: &Self::InternedTypes) -> &[crate::Ty<Self>] {
        types
    }

    fn intern_members(
        self,
        data: impl IntoIterator<Item = (impl AsRef<str>, crate::Ty<Self>)>,
    ) -> Self::InternedMembers {
        let members: Vec<(Rc<str>, crate::Ty<Self>)> = data
            .into_iter()
            .map(|(name, ty)| (Rc::from(name.as_ref()), ty))
            .collect();

        members.into()
    }

    fn members_data(
        self,
        members: &Self::InternedMembers,
    ) -> &[(Self::InternedStr, crate::Ty<Self>)] {
        members.as_ref()
    }
}
