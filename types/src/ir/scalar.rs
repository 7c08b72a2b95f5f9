//! Scalar type variants.
//!
//! This module defines the Scalar enum which represents all leaf types of the
//! verification IR, following Chalk's pattern of consolidating scalar types
//! into a single enum.

/// Floating-point representations.
///
/// `Fixed` covers the fixed-point encodings some front-ends emit for
/// hardware models. Its layout is part of the type identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FloatKind {
    /// IEEE 754 binary32
    Single,

    /// IEEE 754 binary64
    Double,

    /// Target `long double`
    LongDouble,

    /// Fixed-point number with `integer_bits` of its `width` before the point
    Fixed { width: u16, integer_bits: u16 },
}

/// Scalar type variants.
///
/// Integer widths are in bits. Two integers are the same scalar only if both
/// signedness and width agree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    /// `void`
    Void,

    /// Single-bit boolean
    Bool,

    /// Two's complement integer of the given width
    SignedInt(u16),

    /// Unsigned integer of the given width
    UnsignedInt(u16),

    /// Floating or fixed-point number
    Float(FloatKind),
}

impl Scalar {
    /// Returns true if this scalar is an integer of either signedness
    pub fn is_integer(&self) -> bool {
        matches!(self, Scalar::SignedInt(_) | Scalar::UnsignedInt(_))
    }

    /// Returns true if this scalar is a numeric type
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || matches!(self, Scalar::Float(_))
    }

    /// Bit width, if the scalar has a fixed one.
    pub fn width(&self) -> Option<u16> {
        match self {
            Scalar::Void => None,
            Scalar::Bool => Some(1),
            Scalar::SignedInt(w) | Scalar::UnsignedInt(w) => Some(*w),
            Scalar::Float(FloatKind::Single) => Some(32),
            Scalar::Float(FloatKind::Double) => Some(64),
            Scalar::Float(FloatKind::LongDouble) => None,
            Scalar::Float(FloatKind::Fixed { width, .. }) => Some(*width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widths() {
        assert_eq!(Scalar::SignedInt(32).width(), Some(32));
        assert_eq!(Scalar::Bool.width(), Some(1));
        assert_eq!(Scalar::Void.width(), None);
        assert_ne!(Scalar::SignedInt(32), Scalar::UnsignedInt(32));
    }

    #[test]
    fn test_numeric() {
        assert!(Scalar::UnsignedInt(8).is_numeric());
        assert!(Scalar::Float(FloatKind::Double).is_numeric());
        assert!(!Scalar::Float(FloatKind::Double).is_integer());
        assert!(!Scalar::Bool.is_numeric());
    }
}
