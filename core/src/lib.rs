#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Canonicalization and structural equivalence of types and typed
//! expressions.
//!
//! Types may refer to definitions in a [`Namespace`] by identifier. The
//! [`canonical`] module expands those references up to the first pointer,
//! and the [`equivalence`] module decides whether two types or expressions
//! denote the same thing, terminating on recursive definitions.
//!
//! # Example
//!
//! ```
//! use basetype_core::{SymbolTable, type_equivalent};
//! use basetype_types::{BoxBuilder, TypeBuilder};
//!
//! let builder = BoxBuilder::new();
//! let mut symbols = SymbolTable::new();
//! symbols.add_type("myint", builder.unsigned(32));
//!
//! let equal = type_equivalent(
//!     builder.named("myint"),
//!     builder.unsigned(32),
//!     &symbols,
//!     builder,
//! );
//! assert_eq!(equal, Ok(true));
//! ```

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod canonical;
pub mod equivalence;
pub mod error;
pub mod namespace;
pub mod union_find;

pub use canonical::{TypeCanonicalizer, canonicalize_expr, canonicalize_type};
pub use equivalence::{Equivalence, ZipError, expr_equivalent, type_equivalent};
pub use error::Error;
pub use namespace::{Namespace, Symbol, SymbolTable};
pub use union_find::UnionFind;

#[cfg(test)]
mod namespace_test;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_alias_chain() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
