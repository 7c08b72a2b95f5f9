use super::{TypeBuilder, TypeKind};
use crate::TypeView;
use alloc::string::String;
use alloc::vec::Vec;

/// Trait for transforming types.
///
/// Implement this trait to create new types based on existing ones.
/// The default implementation handles recursion automatically, rebuilding
/// a node only when one of its children changed. Unchanged subtrees are
/// returned as the very same handles, and rebuilt nodes keep the qualifiers
/// of the node they replace.
///
/// # Example
///
/// ```
/// use basetype_types::{TypeBuilder, Ty, TypeKind, Scalar, TypeFolder, BoxBuilder};
///
/// // Widen every int32 to int64
/// struct Widen {
///     builder: BoxBuilder,
/// }
///
/// impl TypeFolder<BoxBuilder> for Widen {
///     fn builder(&self) -> BoxBuilder {
///         self.builder
///     }
///
///     fn fold_ty(&mut self, ty: Ty<BoxBuilder>) -> Ty<BoxBuilder> {
///         match ty.kind(self.builder) {
///             TypeKind::Scalar(Scalar::SignedInt(32)) => self.builder.signed(64),
///             _ => self.super_fold_ty(ty),
///         }
///     }
/// }
///
/// let builder = BoxBuilder::new();
/// let arr = builder.array(builder.signed(32), Some(2));
///
/// let mut folder = Widen { builder };
/// let result = folder.fold_ty(arr);
/// assert_eq!(result, builder.array(builder.signed(64), Some(2)));
/// ```
pub trait TypeFolder<B: TypeBuilder> {
    /// Get the builder for creating new types.
    fn builder(&self) -> B;

    /// Transform a type.
    ///
    /// Override this to customize behavior for all types.
    /// Call `super_fold_ty` to recurse into nested types.
    fn fold_ty(&mut self, ty: B::TypeView) -> B::TypeView
    where
        B::TypeView: From<crate::Ty<B>>,
    {
        self.super_fold_ty(ty)
    }

    /// Default recursion into nested types.
    ///
    /// Override `fold_ty` instead of this method.
    fn super_fold_ty(&mut self, ty: B::TypeView) -> B::TypeView
    where
        B::TypeView: From<crate::Ty<B>>,
    {
        let builder = self.builder();
        let quals = ty.data(builder).quals;

        match ty.view(builder) {
            // Base cases - return as-is
            TypeKind::Scalar(_) | TypeKind::IncompleteStruct | TypeKind::Named(_) => ty,

            // Recursive cases - extract data into owned values, then fold
            TypeKind::Pointer(pointee) => {
                let pointee = pointee.clone();
                let new_pointee = self.fold_ty(pointee.clone());
                if new_pointee.ptr_eq(&pointee, builder) {
                    return ty;
                }
                TypeKind::Pointer(new_pointee)
                    .intern_with(builder, quals)
                    .into()
            }

            TypeKind::Array { elem, size } => {
                let elem = elem.clone();
                let size = *size;
                let new_elem = self.fold_ty(elem.clone());
                if new_elem.ptr_eq(&elem, builder) {
                    return ty;
                }
                TypeKind::Array {
                    elem: new_elem,
                    size,
                }
                .intern_with(builder, quals)
                .into()
            }

            TypeKind::IncompleteArray(elem) => {
                let elem = elem.clone();
                let new_elem = self.fold_ty(elem.clone());
                if new_elem.ptr_eq(&elem, builder) {
                    return ty;
                }
                TypeKind::IncompleteArray(new_elem)
                    .intern_with(builder, quals)
                    .into()
            }

            TypeKind::Aggregate { kind, members } => {
                let kind = *kind;
                // Own the member data before folding; the folder needs &mut self
                let members: Vec<(String, B::TypeView)> = builder
                    .members_data(members)
                    .iter()
                    .map(|(name, member_ty)| (String::from(name.as_ref()), member_ty.clone()))
                    .collect();

                let mut changed = false;
                let folded: Vec<(String, B::TypeView)> = members
                    .into_iter()
                    .map(|(name, member_ty)| {
                        let new_ty = self.fold_ty(member_ty.clone());
                        changed |= !new_ty.ptr_eq(&member_ty, builder);
                        (name, new_ty)
                    })
                    .collect();

                if !changed {
                    return ty;
                }
                TypeKind::Aggregate {
                    kind,
                    members: builder.intern_members(folded),
                }
                .intern_with(builder, quals)
                .into()
            }

            TypeKind::Function {
                params,
                ret,
                variadic,
            } => {
                let variadic = *variadic;
                let param_data: Vec<B::TypeView> =
                    builder.types_data(params).iter().cloned().collect();
                let ret = ret.clone();

                let mut changed = false;
                let new_params: Vec<B::TypeView> = param_data
                    .into_iter()
                    .map(|param_ty| {
                        let new_ty = self.fold_ty(param_ty.clone());
                        changed |= !new_ty.ptr_eq(&param_ty, builder);
                        new_ty
                    })
                    .collect();
                let new_ret = self.fold_ty(ret.clone());

                if !changed && new_ret.ptr_eq(&ret, builder) {
                    return ty;
                }
                TypeKind::Function {
                    params: builder.intern_types(new_params),
                    ret: new_ret,
                    variadic,
                }
                .intern_with(builder, quals)
                .into()
            }
        }
    }
}
