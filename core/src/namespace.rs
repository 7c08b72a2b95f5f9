//! Identifier lookup.
//!
//! The engine never owns definitions. It asks a [`Namespace`] what an
//! identifier means and treats the answer as read-only for the duration of
//! a query.

use crate::{Error, String, ToString, Vec};
use basetype_types::{NamedRefCollector, TypeBuilder};
use hashbrown::HashMap;

/// A definition in a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol<B: TypeBuilder> {
    pub name: String,

    /// True for type definitions (typedefs, struct tags), false for
    /// variables and functions.
    pub is_type: bool,

    /// Defined type for type definitions, declared type for values.
    /// `None` for forward declarations.
    pub ty: Option<B::TypeView>,
}

impl<B: TypeBuilder> Symbol<B> {
    /// A type definition.
    pub fn type_def(name: impl Into<String>, ty: B::TypeView) -> Self {
        Self {
            name: name.into(),
            is_type: true,
            ty: Some(ty),
        }
    }

    /// A type definition whose body is not known (yet).
    pub fn forward_decl(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_type: true,
            ty: None,
        }
    }

    /// A variable or function of the given type.
    pub fn value(name: impl Into<String>, ty: B::TypeView) -> Self {
        Self {
            name: name.into(),
            is_type: false,
            ty: Some(ty),
        }
    }
}

/// Read-only identifier lookup.
pub trait Namespace<B: TypeBuilder> {
    /// Look up `name`, returning `None` if it is not defined.
    fn lookup(&self, name: &str) -> Option<&Symbol<B>>;

    /// The type a `Named` reference to `name` stands for.
    ///
    /// Fails with [`Error::MalformedSymbolReference`] if `name` is not a
    /// type definition, and with [`Error::UnresolvedReference`] if it is
    /// unknown or has no underlying type.
    fn resolve_type(&self, name: &str) -> Result<B::TypeView, Error> {
        let symbol = self.lookup(name).ok_or_else(|| Error::UnresolvedReference {
            name: name.to_string(),
        })?;

        if !symbol.is_type {
            return Err(Error::MalformedSymbolReference {
                name: name.to_string(),
            });
        }

        symbol.ty.clone().ok_or_else(|| Error::UnresolvedReference {
            name: name.to_string(),
        })
    }
}

/// Hash-map backed [`Namespace`].
#[derive(Debug, Clone)]
pub struct SymbolTable<B: TypeBuilder> {
    symbols: HashMap<String, Symbol<B>>,
}

impl<B: TypeBuilder> Default for SymbolTable<B> {
    fn default() -> Self {
        Self {
            symbols: HashMap::new(),
        }
    }
}

impl<B: TypeBuilder> SymbolTable<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol, returning the one it replaces.
    pub fn insert(&mut self, symbol: Symbol<B>) -> Option<Symbol<B>> {
        self.symbols.insert(symbol.name.clone(), symbol)
    }

    /// Define the type `name` as `ty`.
    pub fn add_type(&mut self, name: impl Into<String>, ty: B::TypeView) -> Option<Symbol<B>> {
        self.insert(Symbol::type_def(name, ty))
    }

    /// Declare a variable or function `name` of type `ty`.
    pub fn add_value(&mut self, name: impl Into<String>, ty: B::TypeView) -> Option<Symbol<B>> {
        self.insert(Symbol::value(name, ty))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol<B>> {
        self.symbols.values()
    }

    /// Identifiers referenced from some symbol's type that do not name a
    /// type definition in this table, sorted and deduplicated.
    ///
    /// References behind pointers and in function signatures count too.
    /// Forward declarations are type definitions, so references to them are
    /// not dangling.
    pub fn dangling_references(&self, builder: B) -> Vec<String> {
        let mut dangling: Vec<String> = self
            .symbols
            .values()
            .filter_map(|symbol| symbol.ty.clone())
            .flat_map(|ty| NamedRefCollector::collect(ty, builder))
            .filter(|name| {
                let name: &str = name.as_ref();
                !self.symbols.get(name).is_some_and(|symbol| symbol.is_type)
            })
            .map(|name| name.to_string())
            .collect();

        dangling.sort_unstable();
        dangling.dedup();
        dangling
    }
}

impl<B: TypeBuilder> Namespace<B> for SymbolTable<B> {
    fn lookup(&self, name: &str) -> Option<&Symbol<B>> {
        self.symbols.get(name)
    }
}

impl<B: TypeBuilder> FromIterator<Symbol<B>> for SymbolTable<B> {
    fn from_iter<I: IntoIterator<Item = Symbol<B>>>(iter: I) -> Self {
        let mut table = Self::new();
        for symbol in iter {
            table.insert(symbol);
        }
        table
    }
}
