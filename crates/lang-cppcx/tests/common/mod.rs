use cxscope_cppcx::parser::{CppParser, TranslationUnit};
use tree_sitter::Node;

#[allow(dead_code)]
pub fn parse(source: &str) -> TranslationUnit {
    let mut parser = CppParser::new().unwrap();
    parser.parse_source(source.to_string()).unwrap()
}

/// First descendant with the given kind, depth-first.
#[allow(dead_code)]
pub fn find_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    if node.kind() == kind {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_kind(child, kind) {
            return Some(found);
        }
    }
    None
}

/// All descendants with the given kind, depth-first document order.
#[allow(dead_code)]
pub fn find_all<'t>(node: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    let mut found = Vec::new();
    collect_kind(node, kind, &mut found);
    found
}

#[allow(dead_code)]
fn collect_kind<'t>(node: Node<'t>, kind: &str, found: &mut Vec<Node<'t>>) {
    if node.kind() == kind {
        found.push(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_kind(child, kind, found);
    }
}

/// The declaration-list body of the n-th namespace definition in the unit
/// (document order).
#[allow(dead_code)]
pub fn namespace_body<'t>(unit: &'t TranslationUnit, index: usize) -> Node<'t> {
    find_all(unit.root(), "namespace_definition")
        .get(index)
        .and_then(|ns| ns.child_by_field_name("body"))
        .expect("namespace body")
}

/// The first plain declaration statement in the unit.
#[allow(dead_code)]
pub fn first_declaration<'t>(unit: &'t TranslationUnit) -> Node<'t> {
    find_kind(unit.root(), "declaration").expect("declaration")
}
