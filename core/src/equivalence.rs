//! Structural equivalence of types and expressions.
//!
//! Two types are equivalent when they denote the same type once `Named`
//! references are looked through. Recursive definitions make the naive
//! comparison diverge, so a session remembers which pairs of identifiers it
//! has started comparing. Coming back to such a pair means every difference
//! would have been found on the way, and the pair is assumed equivalent.
//!
//! Rules per kind:
//!
//! - Aggregates: same kind, same member count, member types equivalent and
//!   member names equal, in declaration order.
//! - Functions: same parameter count, parameters and return type
//!   equivalent. Variadicity is not compared.
//! - Pointers: pointees equivalent.
//! - Arrays: element types equivalent. Lengths are not compared.
//! - `IncompleteStruct` is equivalent to any type.
//! - Anything else: canonical forms structurally equal.

use crate::{Error, Namespace, String, TypeCanonicalizer, UnionFind};
use basetype_types::{
    Expr, Mismatch, Ty, TypeBuilder, TypeFolder, TypeKind, TypeView, Zip, Zipper, types_equal,
};
use hashbrown::{HashMap, HashSet};
use tracing::{debug, trace, warn};

/// Why a comparison stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZipError {
    /// The two sides are not equivalent.
    Mismatch,
    /// The namespace is inconsistent; the query has no answer.
    Fatal(Error),
}

impl From<Mismatch> for ZipError {
    fn from(_: Mismatch) -> Self {
        ZipError::Mismatch
    }
}

/// A single equivalence query.
///
/// The session owns the cycle guard for one top-level comparison. The
/// `types` and `exprs` entry points consume it, so knowledge about
/// identifier pairs never leaks from one query into the next.
///
/// # Example
///
/// ```
/// use basetype_core::{Equivalence, SymbolTable};
/// use basetype_types::{BoxBuilder, TypeBuilder};
///
/// let builder = BoxBuilder::new();
/// let mut symbols = SymbolTable::new();
/// // struct list { int value; struct list *next; };
/// symbols.add_type(
///     "list",
///     builder.struct_type([
///         ("value", builder.signed(32)),
///         ("next", builder.pointer(builder.named("list"))),
///     ]),
/// );
/// symbols.add_type("list_t", builder.named("list"));
///
/// let session = Equivalence::new(&symbols, builder);
/// assert_eq!(
///     session.types(builder.named("list_t"), builder.named("list")),
///     Ok(true)
/// );
/// ```
pub struct Equivalence<'n, B: TypeBuilder, N: ?Sized> {
    namespace: &'n N,
    builder: B,
    identifiers: UnionFind,
    /// Whether the alias chain starting at an identifier loops, for every
    /// identifier on a chain walked so far.
    alias_loops: HashMap<String, bool>,
}

impl<'n, B, N> Equivalence<'n, B, N>
where
    B: TypeBuilder,
    B::TypeView: From<Ty<B>>,
    N: Namespace<B> + ?Sized,
{
    pub fn new(namespace: &'n N, builder: B) -> Self {
        Self {
            namespace,
            builder,
            identifiers: UnionFind::new(),
            alias_loops: HashMap::new(),
        }
    }

    /// Decide whether `a` and `b` are equivalent types.
    pub fn types(mut self, a: B::TypeView, b: B::TypeView) -> Result<bool, Error> {
        let result = self.zip_tys(a, b);
        self.finish("types", result)
    }

    /// Decide whether `a` and `b` are equivalent expressions.
    ///
    /// Expressions are compared syntactically: same kinds, equivalent
    /// static types, equivalent operands in order. Nothing is simplified.
    pub fn exprs(mut self, a: &Expr<B>, b: &Expr<B>) -> Result<bool, Error> {
        let result = Zip::zip_with(&mut self, a, b);
        self.finish("expressions", result)
    }

    fn finish(self, what: &str, result: Result<(), ZipError>) -> Result<bool, Error> {
        let outcome = match result {
            Ok(()) => Ok(true),
            Err(ZipError::Mismatch) => Ok(false),
            Err(ZipError::Fatal(err)) => Err(err),
        };
        debug!(
            what,
            identifiers = self.identifiers.len(),
            ?outcome,
            "equivalence query finished"
        );
        outcome
    }

    /// One alias step: the definition behind a `Named` type.
    ///
    /// Returns `None` when `ty` is not a reference, or is a reference that
    /// must be compared as an opaque nominal type.
    fn resolve_step(&mut self, ty: &B::TypeView) -> Result<Option<B::TypeView>, ZipError> {
        let builder = self.builder;
        let TypeKind::Named(name) = ty.view(builder) else {
            return Ok(None);
        };

        match self.namespace.resolve_type(name.as_ref()) {
            Ok(definition) => {
                if self.alias_cycle(name) {
                    warn!(name = %name, "type alias chain never reaches a definition");
                    return Ok(None);
                }
                trace!(name = %name, "resolved type reference");
                Ok(Some(definition))
            }
            Err(err) if err.is_fatal() => Err(ZipError::Fatal(err)),
            Err(err) => {
                trace!(%err, "comparing unresolved reference as opaque");
                Ok(None)
            }
        }
    }

    /// Returns true if following `name` through definitions that are
    /// themselves plain references comes back to an identifier already seen.
    ///
    /// Each chain is walked once per session; the answer is recorded for
    /// every identifier on it.
    fn alias_cycle(&mut self, name: &B::InternedStr) -> bool {
        let name: &str = name.as_ref();
        if let Some(&looped) = self.alias_loops.get(name) {
            return looped;
        }

        let builder = self.builder;
        let mut chain: HashSet<String> = HashSet::new();
        chain.insert(String::from(name));
        let mut current = self.namespace.resolve_type(name).ok();

        let looped = loop {
            let Some(ty) = current else {
                break false;
            };
            let TypeKind::Named(next) = ty.view(builder) else {
                break false;
            };
            let next: &str = next.as_ref();
            if let Some(&known) = self.alias_loops.get(next) {
                break known;
            }
            if !chain.insert(String::from(next)) {
                break true;
            }
            current = self.namespace.resolve_type(next).ok();
        };

        self.alias_loops
            .extend(chain.into_iter().map(|seen| (seen, looped)));
        looped
    }

    /// Leaf comparison: canonical forms must be structurally equal.
    fn canonical_equal(&self, a: B::TypeView, b: B::TypeView) -> Result<(), ZipError> {
        let builder = self.builder;
        let mut canonicalizer = TypeCanonicalizer::new(self.namespace, builder);
        let a = canonicalizer.fold_ty(a);
        let b = canonicalizer.fold_ty(b);

        if types_equal(a, builder, b, builder) {
            Ok(())
        } else {
            Err(ZipError::Mismatch)
        }
    }
}

impl<'n, B, N> Zipper<B> for Equivalence<'n, B, N>
where
    B: TypeBuilder,
    B::TypeView: From<Ty<B>>,
    N: Namespace<B> + ?Sized,
{
    type Error = ZipError;

    fn zip_tys(&mut self, a: B::TypeView, b: B::TypeView) -> Result<(), ZipError> {
        let builder = self.builder;

        if a.ptr_eq(&b, builder) {
            return Ok(());
        }

        // Cycle guard
        if let (TypeKind::Named(n1), TypeKind::Named(n2)) = (a.view(builder), b.view(builder)) {
            if self.identifiers.make_union(n1.as_ref(), n2.as_ref()) {
                trace!(a = %n1, b = %n2, "pair already under comparison");
                return Ok(());
            }
        }

        // Look through one alias at a time so every intermediate pair of
        // identifiers goes through the guard above
        if let Some(definition) = self.resolve_step(&a)? {
            return self.zip_tys(definition, b);
        }
        if let Some(definition) = self.resolve_step(&b)? {
            return self.zip_tys(a, definition);
        }

        let (kind_a, kind_b) = (a.view(builder), b.view(builder));

        // Forward-declared aggregates match anything
        if matches!(kind_a, TypeKind::IncompleteStruct)
            || matches!(kind_b, TypeKind::IncompleteStruct)
        {
            return Ok(());
        }

        if core::mem::discriminant(kind_a) != core::mem::discriminant(kind_b) {
            return Err(ZipError::Mismatch);
        }

        if kind_a.is_structural() {
            Zip::zip_with(self, kind_a, kind_b)
        } else {
            self.canonical_equal(a.clone(), b.clone())
        }
    }

    fn builder(&self) -> B {
        self.builder
    }
}

/// Decide whether two types are equivalent under `namespace`.
///
/// Fails only if a `Named` reference points at a value symbol.
pub fn type_equivalent<B, N>(
    a: B::TypeView,
    b: B::TypeView,
    namespace: &N,
    builder: B,
) -> Result<bool, Error>
where
    B: TypeBuilder,
    B::TypeView: From<Ty<B>>,
    N: Namespace<B> + ?Sized,
{
    Equivalence::new(namespace, builder).types(a, b)
}

/// Decide whether two expressions are equivalent under `namespace`.
///
/// Static types are compared with [`type_equivalent`]'s rules within a
/// single session shared by the whole tree.
pub fn expr_equivalent<B, N>(
    a: &Expr<B>,
    b: &Expr<B>,
    namespace: &N,
    builder: B,
) -> Result<bool, Error>
where
    B: TypeBuilder,
    B::TypeView: From<Ty<B>>,
    N: Namespace<B> + ?Sized,
{
    Equivalence::new(namespace, builder).exprs(a, b)
}
