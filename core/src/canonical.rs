//! Canonical forms of types and expressions.
//!
//! Canonicalization replaces every `Named` reference reachable without
//! crossing a pointer by the definition it names, recursively, so that two
//! spellings of the same type compare equal by plain structural equality.
//! Pointers are left alone: recursive types close their cycles through a
//! pointer to a named type, and expanding it would never terminate.

use crate::{Namespace, Vec};
use basetype_types::{Expr, Ty, TypeBuilder, TypeFlags, TypeFolder, TypeKind, TypeView};
use tracing::{trace, warn};

/// Type folder that expands `Named` references through a namespace.
///
/// References that cannot be expanded (unknown identifiers, value symbols,
/// forward declarations) are left as they are; they stand for opaque
/// nominal types.
pub struct TypeCanonicalizer<'n, B: TypeBuilder, N: ?Sized> {
    namespace: &'n N,
    builder: B,
    /// Identifiers currently being expanded, outermost first, each flagged
    /// once its own expansion has come back to it.
    expanding: Vec<(B::InternedStr, bool)>,
}

impl<'n, B, N> TypeCanonicalizer<'n, B, N>
where
    B: TypeBuilder,
    B::TypeView: From<Ty<B>>,
    N: Namespace<B> + ?Sized,
{
    pub fn new(namespace: &'n N, builder: B) -> Self {
        Self {
            namespace,
            builder,
            expanding: Vec::new(),
        }
    }

    /// Canonicalize the static type of `expr` and of every operand below it.
    ///
    /// Kinds and operand counts are unchanged.
    pub fn canonicalize_expr(&mut self, expr: &Expr<B>) -> Expr<B> {
        let ty = self.fold_ty(expr.ty.clone());
        let operands = expr
            .operands
            .iter()
            .map(|operand| self.canonicalize_expr(operand))
            .collect();
        Expr::new(expr.kind.clone(), ty, operands)
    }

    fn expand(&mut self, reference: B::TypeView, name: B::InternedStr) -> B::TypeView {
        let builder = self.builder;

        // `typedef A B; typedef B A;` or a struct containing itself by value.
        // The outermost expansion of `name` is abandoned as well, so the
        // result is the same no matter how often it is canonicalized again.
        if let Some((_, looped)) = self
            .expanding
            .iter_mut()
            .find(|(n, _)| n.as_ref() == name.as_ref())
        {
            warn!(name = %name, "type definition refers to itself without indirection");
            *looped = true;
            return reference;
        }

        let definition = match self.namespace.resolve_type(name.as_ref()) {
            Ok(definition) => definition,
            Err(err) => {
                trace!(%err, "leaving reference unresolved");
                return reference;
            }
        };
        trace!(name = %name, "expanding type reference");

        self.expanding.push((name, false));
        let expanded = self.fold_ty(definition);
        if let Some((_, true)) = self.expanding.pop() {
            return reference;
        }

        // Qualifiers on the reference survive the expansion
        let quals = reference.data(builder).quals;
        let expanded_quals = expanded.data(builder).quals;
        if expanded_quals.contains(quals) {
            expanded
        } else {
            builder.with_qualifiers(&expanded, expanded_quals | quals)
        }
    }
}

impl<'n, B, N> TypeFolder<B> for TypeCanonicalizer<'n, B, N>
where
    B: TypeBuilder,
    B::TypeView: From<Ty<B>>,
    N: Namespace<B> + ?Sized,
{
    fn builder(&self) -> B {
        self.builder
    }

    fn fold_ty(&mut self, ty: B::TypeView) -> B::TypeView {
        let builder = self.builder;

        // Nothing to expand below this node, including every pointer and
        // function signature
        if !ty.data(builder).flags.contains(TypeFlags::HAS_NAMED_REF) {
            return ty;
        }

        let name = match ty.view(builder) {
            TypeKind::Named(name) => Some(name.clone()),
            _ => None,
        };
        match name {
            Some(name) => self.expand(ty, name),
            None => self.super_fold_ty(ty),
        }
    }
}

/// Canonical form of `ty`: every `Named` reference outside pointers expanded.
///
/// The result shares every subtree that needed no expansion with `ty`, and
/// is `ty` itself when nothing changed.
pub fn canonicalize_type<B, N>(ty: B::TypeView, namespace: &N, builder: B) -> B::TypeView
where
    B: TypeBuilder,
    B::TypeView: From<Ty<B>>,
    N: Namespace<B> + ?Sized,
{
    TypeCanonicalizer::new(namespace, builder).fold_ty(ty)
}

/// Canonical form of an expression tree: see [`canonicalize_type`].
pub fn canonicalize_expr<B, N>(expr: &Expr<B>, namespace: &N, builder: B) -> Expr<B>
where
    B: TypeBuilder,
    B::TypeView: From<Ty<B>>,
    N: Namespace<B> + ?Sized,
{
    TypeCanonicalizer::new(namespace, builder).canonicalize_expr(expr)
}
