//! Typed expression trees.
//!
//! Every expression node carries the static type the front-end assigned to
//! it and an ordered list of operands. The kind tag includes the leaf payload
//! (identifier, literal, operator, member name), so two nodes with the same
//! tag are the same syntactic construct.

use super::{TypeBuilder, types_equal};
use alloc::vec;
use alloc::vec::Vec;

/// Literal values.
///
/// Floating-point literals are stored as their IEEE bit pattern so that
/// constants have total equality.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Constant {
    Bool(bool),
    Int(i128),
    Float(u64),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
    BitNot,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    BitAnd,
    BitOr,
    BitXor,
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Operator or operand shape of an expression node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprKind<B: TypeBuilder> {
    /// Reference to a variable or function (leaf)
    Symbol(B::InternedStr),

    /// Literal (leaf)
    Constant(Constant),

    /// `op operands[0]`
    Unary(UnaryOp),

    /// `operands[0] op operands[1]`
    Binary(BinaryOp),

    /// `operands[0](operands[1..])`
    Call,

    /// `operands[0][operands[1]]`
    Index,

    /// `operands[0].name`
    Member(B::InternedStr),

    /// `&operands[0]`
    AddressOf,

    /// `*operands[0]`
    Dereference,

    /// `(ty) operands[0]`
    Typecast,

    /// `operands[0] ? operands[1] : operands[2]`
    IfThenElse,
}

/// An expression node with its static type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr<B: TypeBuilder> {
    pub kind: ExprKind<B>,
    pub ty: B::TypeView,
    pub operands: Vec<Expr<B>>,
}

impl<B: TypeBuilder> Expr<B> {
    pub fn new(kind: ExprKind<B>, ty: B::TypeView, operands: Vec<Expr<B>>) -> Self {
        Self { kind, ty, operands }
    }

    pub fn symbol(builder: B, name: impl AsRef<str>, ty: B::TypeView) -> Self {
        Self::new(
            ExprKind::Symbol(builder.intern_str(name.as_ref())),
            ty,
            Vec::new(),
        )
    }

    pub fn constant(value: Constant, ty: B::TypeView) -> Self {
        Self::new(ExprKind::Constant(value), ty, Vec::new())
    }

    /// Integer literal of the given type.
    pub fn int(value: i128, ty: B::TypeView) -> Self {
        Self::constant(Constant::Int(value), ty)
    }

    pub fn unary(op: UnaryOp, ty: B::TypeView, operand: Expr<B>) -> Self {
        Self::new(ExprKind::Unary(op), ty, vec![operand])
    }

    pub fn binary(op: BinaryOp, ty: B::TypeView, lhs: Expr<B>, rhs: Expr<B>) -> Self {
        Self::new(ExprKind::Binary(op), ty, vec![lhs, rhs])
    }

    pub fn call(ty: B::TypeView, function: Expr<B>, args: impl IntoIterator<Item = Expr<B>>) -> Self {
        let mut operands = vec![function];
        operands.extend(args);
        Self::new(ExprKind::Call, ty, operands)
    }

    pub fn index(ty: B::TypeView, array: Expr<B>, index: Expr<B>) -> Self {
        Self::new(ExprKind::Index, ty, vec![array, index])
    }

    pub fn member(builder: B, ty: B::TypeView, base: Expr<B>, name: impl AsRef<str>) -> Self {
        Self::new(
            ExprKind::Member(builder.intern_str(name.as_ref())),
            ty,
            vec![base],
        )
    }

    pub fn address_of(ty: B::TypeView, operand: Expr<B>) -> Self {
        Self::new(ExprKind::AddressOf, ty, vec![operand])
    }

    pub fn dereference(ty: B::TypeView, pointer: Expr<B>) -> Self {
        Self::new(ExprKind::Dereference, ty, vec![pointer])
    }

    pub fn typecast(ty: B::TypeView, operand: Expr<B>) -> Self {
        Self::new(ExprKind::Typecast, ty, vec![operand])
    }

    pub fn if_then_else(ty: B::TypeView, cond: Expr<B>, then: Expr<B>, otherwise: Expr<B>) -> Self {
        Self::new(ExprKind::IfThenElse, ty, vec![cond, then, otherwise])
    }

    /// Returns true if this node has no operands.
    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }

    /// Number of nodes in this tree.
    pub fn size(&self) -> usize {
        1 + self.operands.iter().map(Expr::size).sum::<usize>()
    }
}

/// Deep structural equality of two expression trees.
///
/// Tags must be identical, static types deeply equal (see [`types_equal`])
/// and operands equal pairwise. `Named` references in the static types are
/// compared by identifier, never resolved.
pub fn exprs_equal<B: TypeBuilder>(a: &Expr<B>, b: &Expr<B>, builder: B) -> bool {
    a.kind == b.kind
        && types_equal(a.ty.clone(), builder, b.ty.clone(), builder)
        && a.operands.len() == b.operands.len()
        && a
            .operands
            .iter()
            .zip(b.operands.iter())
            .all(|(a, b)| exprs_equal(a, b, builder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoxBuilder;

    #[test]
    fn test_leaf_payload_is_part_of_the_tag() {
        let builder = BoxBuilder::new();
        let int = builder.signed(32);
        let x = Expr::symbol(builder, "x", int.clone());
        let y = Expr::symbol(builder, "y", int.clone());

        assert!(exprs_equal(&x, &x.clone(), builder));
        assert!(!exprs_equal(&x, &y, builder));
        assert!(!exprs_equal(
            &Expr::int(1, int.clone()),
            &Expr::int(2, int.clone()),
            builder
        ));
    }

    #[test]
    fn test_static_types_are_compared() {
        let builder = BoxBuilder::new();
        let narrow = Expr::int(1, builder.signed(32));
        let wide = Expr::int(1, builder.signed(64));
        assert!(!exprs_equal(&narrow, &wide, builder));

        // No resolution: an alias is not its definition
        let aliased = Expr::int(1, builder.named("int32_t"));
        assert!(!exprs_equal(&narrow, &aliased, builder));
    }

    #[test]
    fn test_operands_in_order() {
        let builder = BoxBuilder::new();
        let int = builder.signed(32);
        let a = Expr::symbol(builder, "a", int.clone());
        let b = Expr::symbol(builder, "b", int.clone());

        let ab = Expr::binary(BinaryOp::Sub, int.clone(), a.clone(), b.clone());
        let ba = Expr::binary(BinaryOp::Sub, int.clone(), b, a);
        assert!(exprs_equal(&ab, &ab.clone(), builder));
        assert!(!exprs_equal(&ab, &ba, builder));
    }
}
