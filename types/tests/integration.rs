//! Integration tests for basetype-types.
//!
//! These tests verify that all components work together correctly
//! across both ArenaBuilder and BoxBuilder.

use bumpalo::Bump;
use basetype_types::{
    AggregateKind, ArenaBuilder, BinaryOp, BoxBuilder, Expr, ExprKind, NamedRefCollector,
    Qualifiers, Scalar, Ty, TyDisplay, TypeBuilder, TypeFlags, TypeFolder, TypeKind, TypeView,
    TypeVisitor,
};
use pretty_assertions::assert_eq;

#[test]
fn test_box_builder_scalars() {
    let builder = BoxBuilder::new();

    let int_ty = builder.signed(32);
    let uint_ty = builder.unsigned(32);
    let bool_ty = builder.bool();

    assert!(int_ty.is_scalar(builder));
    assert!(bool_ty.is_bool(builder));
    assert!(!int_ty.is_bool(builder));
    assert_ne!(int_ty, uint_ty);
    assert!(matches!(
        int_ty.view(builder),
        TypeKind::Scalar(Scalar::SignedInt(32))
    ));
}

#[test]
fn test_arena_builder_pointer_and_arrays() {
    let arena = Bump::new();
    let builder = ArenaBuilder::new(&arena);

    let elem = builder.unsigned(8);
    let buf = builder.array(elem, Some(16));
    let tail = builder.incomplete_array(elem);
    let ptr = builder.pointer(buf);

    assert!(buf.is_array(builder));
    assert!(tail.is_array(builder));
    assert!(ptr.is_pointer(builder));

    match ptr.view(builder) {
        TypeKind::Pointer(pointee) => match pointee.view(builder) {
            TypeKind::Array { elem: inner, size } => {
                assert_eq!(*size, Some(16));
                assert!(inner.ptr_eq(&elem, builder));
            }
            _ => panic!("Expected Array"),
        },
        _ => panic!("Expected Pointer"),
    }
}

#[test]
fn test_aggregate_kinds_differ() {
    let builder = BoxBuilder::new();
    let int = builder.signed(32);

    let s = builder.struct_type([("a", int.clone())]);
    let u = builder.union_type([("a", int)]);

    assert!(matches!(
        s.view(builder),
        TypeKind::Aggregate {
            kind: AggregateKind::Struct,
            ..
        }
    ));
    assert!(matches!(
        u.view(builder),
        TypeKind::Aggregate {
            kind: AggregateKind::Union,
            ..
        }
    ));
    assert_ne!(s, u);
}

#[test]
fn test_named_ref_flag_stops_at_pointers() {
    let builder = BoxBuilder::new();
    let named = builder.named("size_t");

    let direct = builder.struct_type([("len", named.clone())]);
    let in_array = builder.array(named.clone(), Some(3));
    let behind_pointer = builder.struct_type([("next", builder.pointer(named.clone()))]);
    let in_signature = builder.function([named.clone()], builder.void());

    let flags = |ty: &Ty<BoxBuilder>| ty.data(builder).flags;
    assert!(flags(&named).contains(TypeFlags::HAS_NAMED_REF));
    assert!(flags(&direct).contains(TypeFlags::HAS_NAMED_REF));
    assert!(flags(&in_array).contains(TypeFlags::HAS_NAMED_REF));
    assert!(!flags(&behind_pointer).contains(TypeFlags::HAS_NAMED_REF));
    assert!(!flags(&in_signature).contains(TypeFlags::HAS_NAMED_REF));
}

#[test]
fn test_qualifiers_are_per_node() {
    let builder = BoxBuilder::new();
    let const_int = builder.constant(&builder.signed(32));
    let ptr = builder.pointer(const_int.clone());

    assert_eq!(const_int.qualifiers(builder), Qualifiers::CONST);
    assert_eq!(ptr.qualifiers(builder), Qualifiers::empty());
    assert_eq!(ptr.display(builder), "Ptr[const Int32]");
}

#[test]
fn test_visitor_counting() {
    struct NodeCounter<B: TypeBuilder> {
        scalars: usize,
        pointers: usize,
        named: usize,
        builder: B,
    }

    impl<B: TypeBuilder> TypeVisitor<B> for NodeCounter<B> {
        fn builder(&self) -> B {
            self.builder
        }

        fn visit(&mut self, ty: B::TypeView) {
            match ty.view(self.builder) {
                TypeKind::Scalar(_) => self.scalars += 1,
                TypeKind::Pointer(_) => self.pointers += 1,
                TypeKind::Named(_) => self.named += 1,
                TypeKind::Array { .. }
                | TypeKind::IncompleteArray(_)
                | TypeKind::Aggregate { .. }
                | TypeKind::IncompleteStruct
                | TypeKind::Function { .. } => {}
            }
            self.super_visit(ty);
        }
    }

    let builder = BoxBuilder::new();
    // struct { int32 value; node *next; int32 (*cmp)(node *, node *); }
    let node_ptr = builder.pointer(builder.named("node"));
    let cmp = builder.pointer(builder.function(
        [node_ptr.clone(), node_ptr.clone()],
        builder.signed(32),
    ));
    let ty = builder.struct_type([
        ("value", builder.signed(32)),
        ("next", node_ptr),
        ("cmp", cmp),
    ]);

    let mut counter = NodeCounter {
        scalars: 0,
        pointers: 0,
        named: 0,
        builder,
    };
    counter.visit(ty);

    assert_eq!(counter.scalars, 2);
    assert_eq!(counter.pointers, 4);
    assert_eq!(counter.named, 3);
}

#[test]
fn test_named_ref_collector() {
    let builder = BoxBuilder::new();
    let ty = builder.function(
        [builder.pointer(builder.named("FILE")), builder.named("size_t")],
        builder.named("ssize_t"),
    );

    let names: Vec<String> = NamedRefCollector::collect(ty, builder)
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, ["FILE", "size_t", "ssize_t"]);
}

#[test]
fn test_folder_preserves_sharing_and_qualifiers() {
    struct RenameFolder {
        builder: BoxBuilder,
    }

    impl TypeFolder<BoxBuilder> for RenameFolder {
        fn builder(&self) -> BoxBuilder {
            self.builder
        }

        fn fold_ty(&mut self, ty: Ty<BoxBuilder>) -> Ty<BoxBuilder> {
            match ty.kind(self.builder) {
                TypeKind::Named(name) if &**name == "old" => self.builder.named("new"),
                _ => self.super_fold_ty(ty),
            }
        }
    }

    let builder = BoxBuilder::new();
    let untouched = builder.array(builder.signed(8), Some(4));
    let original = builder.constant(&builder.struct_type([
        ("buf", untouched.clone()),
        ("link", builder.named("old")),
    ]));

    let mut folder = RenameFolder { builder };
    let folded = folder.fold_ty(original.clone());

    assert_eq!(folded.display(builder), "const Struct[buf: Array[Int8; 4], link: new]");
    match folded.view(builder) {
        TypeKind::Aggregate { members, .. } => {
            let (_, buf) = &builder.members_data(members)[0];
            assert!(buf.ptr_eq(&untouched, builder));
        }
        _ => panic!("Expected aggregate"),
    }

    // Nothing to rewrite: the input comes back as-is
    let same = folder.fold_ty(untouched.clone());
    assert!(same.ptr_eq(&untouched, builder));
}

#[test]
fn test_expression_tree() {
    let builder = BoxBuilder::new();
    let int = builder.signed(32);

    // x + 1
    let x = Expr::symbol(builder, "x", int.clone());
    let one = Expr::int(1, int.clone());
    let sum = Expr::binary(BinaryOp::Add, int.clone(), x, one);

    assert_eq!(sum.kind, ExprKind::Binary(BinaryOp::Add));
    assert_eq!(sum.operands.len(), 2);
    assert!(sum.operands[0].is_leaf());
    assert_eq!(sum.size(), 3);

    // f(x + 1, &y)
    let f_ty = builder.function([int.clone(), builder.pointer(int.clone())], int.clone());
    let f = Expr::symbol(builder, "f", f_ty);
    let y = Expr::symbol(builder, "y", int.clone());
    let call = Expr::call(
        int.clone(),
        f,
        [sum, Expr::address_of(builder.pointer(int), y)],
    );
    assert_eq!(call.kind, ExprKind::Call);
    assert_eq!(call.operands.len(), 3);
    assert_eq!(call.size(), 7);
}
