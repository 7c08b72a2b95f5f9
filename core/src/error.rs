use crate::String;

/// Errors raised while consulting a [`Namespace`](crate::Namespace).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `Named` type reference points at a symbol that is not a type
    /// definition. The symbol table is inconsistent; no answer is possible.
    #[error("symbol '{name}' is referenced as a type but is not a type definition")]
    MalformedSymbolReference { name: String },

    /// The identifier is unknown, or its type definition has no underlying
    /// type. The reference is an opaque nominal type.
    #[error("type '{name}' has no definition")]
    UnresolvedReference { name: String },
}

impl Error {
    /// Returns true if the error must abort the current query.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::MalformedSymbolReference { .. } => true,
            Error::UnresolvedReference { .. } => false,
        }
    }

    /// Identifier the error is about.
    pub fn name(&self) -> &str {
        match self {
            Error::MalformedSymbolReference { name } | Error::UnresolvedReference { name } => name,
        }
    }
}
