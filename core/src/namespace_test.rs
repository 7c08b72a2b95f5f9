use crate::namespace::{Namespace, Symbol, SymbolTable};
use crate::{Error, String, ToString, Vec};
use basetype_types::{BoxBuilder, TypeBuilder};
use pretty_assertions::assert_eq;

fn table(builder: BoxBuilder) -> SymbolTable<BoxBuilder> {
    let mut symbols = SymbolTable::new();
    symbols.add_type("myint", builder.unsigned(32));
    symbols.add_value("counter", builder.named("myint"));
    symbols.insert(Symbol::forward_decl("opaque"));
    symbols
}

#[test]
fn test_lookup() {
    let builder = BoxBuilder::new();
    let symbols = table(builder);

    assert_eq!(symbols.len(), 3);
    assert!(symbols.contains("myint"));
    assert!(!symbols.contains("missing"));

    let symbol = symbols.lookup("myint").unwrap();
    assert!(symbol.is_type);
    assert_eq!(symbol.ty, Some(builder.unsigned(32)));
    assert!(symbols.lookup("missing").is_none());
}

#[test]
fn test_resolve_type_outcomes() {
    let builder = BoxBuilder::new();
    let symbols = table(builder);

    assert_eq!(symbols.resolve_type("myint"), Ok(builder.unsigned(32)));
    assert_eq!(
        symbols.resolve_type("counter"),
        Err(Error::MalformedSymbolReference {
            name: "counter".to_string()
        })
    );
    assert_eq!(
        symbols.resolve_type("opaque"),
        Err(Error::UnresolvedReference {
            name: "opaque".to_string()
        })
    );
    assert_eq!(
        symbols.resolve_type("missing"),
        Err(Error::UnresolvedReference {
            name: "missing".to_string()
        })
    );
}

#[test]
fn test_insert_replaces() {
    let builder = BoxBuilder::new();
    let mut symbols = table(builder);

    let previous = symbols.add_type("myint", builder.signed(64));
    assert_eq!(previous.and_then(|symbol| symbol.ty), Some(builder.unsigned(32)));
    assert_eq!(symbols.resolve_type("myint"), Ok(builder.signed(64)));
    assert_eq!(symbols.len(), 3);
}

#[test]
fn test_from_iterator() {
    let builder = BoxBuilder::new();
    let symbols: SymbolTable<BoxBuilder> = [
        Symbol::type_def("a", builder.bool()),
        Symbol::value("b", builder.bool()),
    ]
    .into_iter()
    .collect();

    assert_eq!(symbols.len(), 2);
    let mut names: Vec<&str> = symbols.iter().map(|symbol| symbol.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn test_dangling_references() {
    let builder = BoxBuilder::new();
    let mut symbols = table(builder);
    symbols.add_type(
        "node",
        builder.struct_type([
            ("next", builder.pointer(builder.named("node"))),
            ("payload", builder.pointer(builder.named("opaque"))),
            ("cb", builder.pointer(builder.function([builder.named("event")], builder.void()))),
        ]),
    );
    symbols.add_value("handler", builder.named("counter"));
    symbols.add_value("other", builder.named("event"));

    // `opaque` is a forward declaration; `counter` is a value, not a type
    let dangling: Vec<String> = symbols.dangling_references(builder);
    assert_eq!(dangling, ["counter", "event"]);
    assert!(SymbolTable::<BoxBuilder>::new().dangling_references(builder).is_empty());
}
