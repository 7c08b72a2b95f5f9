use super::{AggregateKind, FloatKind, Qualifiers, Scalar, TypeBuilder, TypeKind, TypeVisitor};
use crate::TypeView;
use alloc::string::String;
use core::fmt::Write;

/// Visitor that formats types into strings.
///
/// `Named` references print as their identifier and are never expanded.
pub struct TypeFormatter<B: TypeBuilder> {
    output: String,
    builder: B,
}

impl<B: TypeBuilder> TypeFormatter<B> {
    pub fn new(builder: B) -> Self {
        Self {
            output: String::new(),
            builder,
        }
    }

    pub fn format(ty: B::TypeView, builder: B) -> String {
        let mut formatter = Self::new(builder);
        formatter.visit(ty);
        formatter.output
    }

    fn write_scalar(&mut self, scalar: Scalar) {
        let _ = match scalar {
            Scalar::Void => write!(self.output, "Void"),
            Scalar::Bool => write!(self.output, "Bool"),
            Scalar::SignedInt(width) => write!(self.output, "Int{}", width),
            Scalar::UnsignedInt(width) => write!(self.output, "UInt{}", width),
            Scalar::Float(FloatKind::Single) => write!(self.output, "Float"),
            Scalar::Float(FloatKind::Double) => write!(self.output, "Double"),
            Scalar::Float(FloatKind::LongDouble) => write!(self.output, "LongDouble"),
            Scalar::Float(FloatKind::Fixed {
                width,
                integer_bits,
            }) => write!(self.output, "Fixed[{}.{}]", width, integer_bits),
        };
    }
}

impl<B: TypeBuilder> TypeVisitor<B> for TypeFormatter<B> {
    fn builder(&self) -> B {
        self.builder
    }

    fn visit(&mut self, ty: B::TypeView) {
        let builder = self.builder;
        if ty.data(builder).quals.contains(Qualifiers::CONST) {
            let _ = write!(self.output, "const ");
        }
        match ty.view(builder) {
            TypeKind::Scalar(scalar) => self.write_scalar(*scalar),
            TypeKind::Named(name) => {
                let _ = write!(self.output, "{}", name);
            }
            TypeKind::Pointer(pointee) => {
                let _ = write!(self.output, "Ptr[");
                self.visit(pointee.clone());
                let _ = write!(self.output, "]");
            }
            TypeKind::Array { elem, size } => {
                let _ = write!(self.output, "Array[");
                self.visit(elem.clone());
                let _ = match size {
                    Some(size) => write!(self.output, "; {}]", size),
                    None => write!(self.output, "; ?]"),
                };
            }
            TypeKind::IncompleteArray(elem) => {
                let _ = write!(self.output, "Array[");
                self.visit(elem.clone());
                let _ = write!(self.output, "]");
            }
            TypeKind::Aggregate { kind, members } => {
                let _ = match kind {
                    AggregateKind::Struct => write!(self.output, "Struct["),
                    AggregateKind::Union => write!(self.output, "Union["),
                };
                let member_data = builder.members_data(members);
                for (i, (name, member_ty)) in member_data.iter().enumerate() {
                    if i > 0 {
                        let _ = write!(self.output, ", ");
                    }
                    let _ = write!(self.output, "{}: ", name);
                    self.visit(member_ty.clone());
                }
                let _ = write!(self.output, "]");
            }
            TypeKind::IncompleteStruct => {
                let _ = write!(self.output, "Struct[..]");
            }
            TypeKind::Function {
                params,
                ret,
                variadic,
            } => {
                let _ = write!(self.output, "(");
                let param_data = builder.types_data(params);
                for (i, param_ty) in param_data.iter().enumerate() {
                    if i > 0 {
                        let _ = write!(self.output, ", ");
                    }
                    self.visit(param_ty.clone());
                }
                if *variadic {
                    if !param_data.is_empty() {
                        let _ = write!(self.output, ", ");
                    }
                    let _ = write!(self.output, "...");
                }
                let _ = write!(self.output, ") => ");
                self.visit(ret.clone());
            }
        }
    }
}

/// Extension trait to add display methods to TypeKind.
pub trait TypeKindDisplay<B: TypeBuilder> {
    fn display(&self, builder: B) -> String;
}

impl<B: TypeBuilder> TypeKindDisplay<B> for TypeKind<B>
where
    B::TypeView: From<crate::Ty<B>>,
{
    fn display(&self, builder: B) -> String {
        // Just use the intern and format pattern for simplicity
        TypeFormatter::format(self.clone().intern(builder).into(), builder)
    }
}

/// Extension trait to add display methods to type handles.
pub trait TyDisplay<B: TypeBuilder> {
    fn display(&self, builder: B) -> String;
}

impl<B> TyDisplay<B> for crate::Ty<B>
where
    B: TypeBuilder<TypeView = crate::Ty<B>>,
{
    fn display(&self, builder: B) -> String {
        TypeFormatter::format(self.clone(), builder)
    }
}
