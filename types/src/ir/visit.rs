use super::{TypeBuilder, TypeKind};
use crate::TypeView;

/// Trait for visiting types.
///
/// Implement this trait to traverse types without mutation.
/// The default implementation handles recursion automatically. It does not
/// resolve `Named` references, so it terminates on any type.
///
/// # Example
///
/// ```
/// use basetype_types::{TypeBuilder, TypeKind, TypeVisitor, BoxBuilder};
///
/// struct DepthCalculator {
///     builder: BoxBuilder,
///     max_depth: usize,
///     current_depth: usize,
/// }
///
/// impl TypeVisitor<BoxBuilder> for DepthCalculator {
///     fn builder(&self) -> BoxBuilder {
///         self.builder
///     }
///
///     fn visit(&mut self, ty: <BoxBuilder as TypeBuilder>::TypeView) {
///         self.current_depth += 1;
///         self.max_depth = self.max_depth.max(self.current_depth);
///
///         self.super_visit(ty);
///
///         self.current_depth -= 1;
///     }
/// }
///
/// let builder = BoxBuilder::new();
/// let ptr = builder.pointer(builder.pointer(builder.signed(32)));
///
/// let mut calc = DepthCalculator { builder, max_depth: 0, current_depth: 0 };
/// calc.visit(ptr);
/// assert_eq!(calc.max_depth, 3); // Pointer -> Pointer -> int32
/// ```
pub trait TypeVisitor<B: TypeBuilder> {
    /// Get the builder the visited types belong to.
    fn builder(&self) -> B;

    /// Visit a type.
    ///
    /// Override this to customize behavior for all types.
    /// Call `super_visit` to recurse into nested types.
    fn visit(&mut self, ty: B::TypeView) {
        self.super_visit(ty)
    }

    /// Default recursion into nested types.
    ///
    /// Override `visit` instead of this method.
    fn super_visit(&mut self, ty: B::TypeView) {
        let builder = self.builder();
        match ty.view(builder) {
            // Base cases - no recursion
            TypeKind::Scalar(_) | TypeKind::IncompleteStruct | TypeKind::Named(_) => {}

            TypeKind::Pointer(elem)
            | TypeKind::Array { elem, .. }
            | TypeKind::IncompleteArray(elem) => {
                self.visit(elem.clone());
            }

            TypeKind::Aggregate { members, .. } => {
                for (_name, member_ty) in builder.members_data(members) {
                    self.visit(member_ty.clone());
                }
            }

            TypeKind::Function { params, ret, .. } => {
                for param_ty in builder.types_data(params) {
                    self.visit(param_ty.clone());
                }
                self.visit(ret.clone());
            }
        }
    }
}

/// Collects every identifier referenced by a type, in visiting order.
///
/// Unlike canonicalization this also looks behind pointers and function
/// signatures, so it reports every definition a type depends on.
///
/// # Example
///
/// ```
/// use basetype_types::{NamedRefCollector, TypeBuilder, BoxBuilder};
///
/// let builder = BoxBuilder::new();
/// let node = builder.struct_type([
///     ("next", builder.pointer(builder.named("node"))),
///     ("value", builder.named("value_t")),
/// ]);
///
/// let names: Vec<String> = NamedRefCollector::collect(node, builder)
///     .iter()
///     .map(|name| name.to_string())
///     .collect();
/// assert_eq!(names, ["node", "value_t"]);
/// ```
pub struct NamedRefCollector<B: TypeBuilder> {
    builder: B,
    names: alloc::vec::Vec<B::InternedStr>,
}

impl<B: TypeBuilder> NamedRefCollector<B> {
    pub fn collect(ty: B::TypeView, builder: B) -> alloc::vec::Vec<B::InternedStr> {
        let mut collector = Self {
            builder,
            names: alloc::vec::Vec::new(),
        };
        collector.visit(ty);
        collector.names
    }
}

impl<B: TypeBuilder> TypeVisitor<B> for NamedRefCollector<B> {
    fn builder(&self) -> B {
        self.builder
    }

    fn visit(&mut self, ty: B::TypeView) {
        if let TypeKind::Named(name) = ty.view(self.builder) {
            self.names.push(name.clone());
        }
        self.super_visit(ty);
    }
}
