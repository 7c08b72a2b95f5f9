use super::{Scalar, TypeBuilder};
use crate::TypeView;
use core::fmt;

// Import bitflags
use bitflags::bitflags;

bitflags! {
    /// Flags indicating various properties of a type.
    ///
    /// These flags are computed once when a type is interned and cached
    /// for efficient queries. This avoids repeated recursive traversals.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct TypeFlags: u16 {
        /// A `Named` reference is reachable without crossing a pointer or a
        /// function signature, i.e. canonicalization would rewrite this type.
        const HAS_NAMED_REF = 1;
    }
}

bitflags! {
    /// Qualifiers attached to a single type node.
    ///
    /// Qualifiers annotate a node without changing its structural identity:
    /// canonicalization carries them over verbatim and structural equality
    /// ignores them.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Qualifiers: u8 {
        const CONST = 1;
    }
}

/// Data for a type: kind + qualifiers + cached flags.
///
/// Following Chalk's design, this separates the type structure (kind)
/// from cached metadata (flags). The builder computes flags once
/// during interning.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TyData<B: TypeBuilder> {
    /// The actual type structure
    pub kind: TypeKind<B>,

    /// Qualifiers of this node (not of its children)
    pub quals: Qualifiers,

    /// Cached properties for efficient queries
    pub flags: TypeFlags,
}

/// Whether an aggregate is a struct or a union.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AggregateKind {
    Struct,
    Union,
}

/// Logical structure of a type.
///
/// This is generic over the `TypeBuilder` so the same type kind works
/// with different storage strategies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind<B: TypeBuilder> {
    /// Leaf types (void, bool, integers, floats)
    Scalar(Scalar),

    /// Pointer to the given type.
    ///
    /// Pointers are where recursive types close their cycles, so nothing
    /// that rewrites types ever looks through one.
    Pointer(B::TypeView),

    /// Array with element type and optional declared length
    Array {
        elem: B::TypeView,
        size: Option<u64>,
    },

    /// Array with element type and no length (`T x[]`)
    IncompleteArray(B::TypeView),

    /// Struct or union with named members.
    ///
    /// Members keep declaration order: unlike records in a structural
    /// language, layout is part of the type.
    Aggregate {
        kind: AggregateKind,
        members: B::InternedMembers,
    },

    /// Forward-declared aggregate whose members are unknown
    IncompleteStruct,

    /// Function signature.
    ///
    /// `variadic` is recorded for display but is not part of equivalence.
    Function {
        params: B::InternedTypes,
        ret: B::TypeView,
        variadic: bool,
    },

    /// Reference to a type definition in the namespace, by identifier
    Named(B::InternedStr),
}

impl<B: TypeBuilder> TypeKind<B> {
    /// Compute type flags for this type kind.
    ///
    /// This is called by the builder during type creation to build
    /// the TyData. Flags are cached to avoid repeated traversals.
    pub fn compute_flags(&self, builder: B) -> TypeFlags {
        match self {
            TypeKind::Named(_) => TypeFlags::HAS_NAMED_REF,

            // Element types are part of the canonical form
            TypeKind::Array { elem, .. } | TypeKind::IncompleteArray(elem) => {
                elem.data(builder).flags
            }

            TypeKind::Aggregate { members, .. } => {
                let mut flags = TypeFlags::empty();
                for (_name, member_ty) in builder.members_data(members) {
                    flags |= member_ty.data(builder).flags;
                }
                flags
            }

            // Indirection stops propagation
            TypeKind::Pointer(_) | TypeKind::Function { .. } => TypeFlags::empty(),

            TypeKind::Scalar(_) | TypeKind::IncompleteStruct => TypeFlags::empty(),
        }
    }

    /// Intern this type kind into an unqualified Ty handle.
    pub fn intern(self, builder: B) -> Ty<B> {
        self.intern_with(builder, Qualifiers::empty())
    }

    /// Intern this type kind with the given qualifiers.
    pub fn intern_with(self, builder: B, quals: Qualifiers) -> Ty<B> {
        Ty::new(builder.intern_ty(self, quals))
    }

    /// Returns true for kinds that have child types to compare structurally.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TypeKind::Pointer(_)
                | TypeKind::Array { .. }
                | TypeKind::IncompleteArray(_)
                | TypeKind::Aggregate { .. }
                | TypeKind::Function { .. }
        )
    }
}

/// Handle to an interned type.
///
/// This is a lightweight wrapper around the builder's representation.
/// It can be cloned and used to retrieve the full type data.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ty<B: TypeBuilder> {
    interned: B::InternedTy,
}

// Implement Copy when InternedTy is Copy (e.g., for ArenaBuilder)
impl<B: TypeBuilder> Copy for Ty<B> where B::InternedTy: Copy {}

impl<B: TypeBuilder> Ty<B> {
    /// Create a new type from an interned handle.
    pub fn new(interned: B::InternedTy) -> Self {
        Self { interned }
    }

    /// Get the interned representation (for internal use).
    pub fn interned(&self) -> &B::InternedTy {
        &self.interned
    }

    /// Get the full type data by looking up in the builder.
    pub fn data(&self, builder: B) -> &TyData<B> {
        builder.ty_data(&self.interned)
    }

    /// Get the type kind by looking up in the builder.
    pub fn kind(&self, builder: B) -> &TypeKind<B> {
        &self.data(builder).kind
    }

    /// Get the qualifiers of the outermost node.
    pub fn qualifiers(&self, builder: B) -> Qualifiers {
        self.data(builder).quals
    }

    /// Returns true if both handles point at the same stored node.
    pub fn ptr_eq(&self, other: &Self, builder: B) -> bool {
        builder.same_ty(&self.interned, &other.interned)
    }

    pub fn is_const(&self, builder: B) -> bool {
        self.qualifiers(builder).contains(Qualifiers::CONST)
    }

    /// Check if this is a named-type reference.
    pub fn is_named(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Named(_))
    }

    pub fn is_pointer(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Pointer(_))
    }

    /// Check if this is an array type, with or without a length.
    pub fn is_array(&self, builder: B) -> bool {
        matches!(
            self.kind(builder),
            TypeKind::Array { .. } | TypeKind::IncompleteArray(_)
        )
    }

    pub fn is_aggregate(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Aggregate { .. })
    }

    pub fn is_incomplete_struct(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::IncompleteStruct)
    }

    pub fn is_function(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Function { .. })
    }

    pub fn is_scalar(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Scalar(_))
    }

    pub fn is_bool(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Scalar(Scalar::Bool))
    }
}

impl<B: TypeBuilder> fmt::Debug for Ty<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ty({:?})", self.interned)
    }
}
