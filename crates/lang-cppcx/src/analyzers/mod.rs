pub mod body;
pub mod function_decl;
pub mod function_def;
pub mod global_variable;
pub mod namespace;
pub mod parameters;
pub mod typed_name;

use cxscope_core::error::CxscopeError;
use tree_sitter::Node;

use crate::render;

/// All `declarator` fields of a declaration, in written order.
pub(crate) fn declarator_fields<'t>(decl: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = decl.walk();
    decl.children_by_field_name("declarator", &mut cursor).collect()
}

/// Peels pointer/reference wrappers off a declarator, reporting which
/// sigils the wrappers carried.
pub(crate) fn unwrap_declarator<'t>(mut node: Node<'t>) -> (Node<'t>, Vec<char>) {
    let mut sigils = Vec::new();
    loop {
        let sigil = match node.kind() {
            "pointer_declarator" => '*',
            "reference_declarator" => '&',
            _ => return (node, sigils),
        };
        let Some(inner) = inner_declarator(node) else {
            return (node, sigils);
        };
        sigils.push(sigil);
        node = inner;
    }
}

fn inner_declarator<'t>(node: Node<'t>) -> Option<Node<'t>> {
    node.child_by_field_name("declarator").or_else(|| {
        // reference declarators label no field; the declarator is the last
        // named child
        let count = node.named_child_count();
        if count == 0 { None } else { node.named_child(count as u32 - 1) }
    })
}

/// Text of every child before the first declarator field, joined with
/// single spaces: the declaration-specifier run (storage class included).
pub(crate) fn specifier_text(decl: Node<'_>, first_declarator: Node<'_>, source: &str) -> String {
    let mut cursor = decl.walk();
    decl.children(&mut cursor)
        .take_while(|child| *child != first_declarator)
        .map(|child| render::node_text(child, source))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn unsupported(message: &str, node: Node<'_>, source: &str) -> CxscopeError {
    CxscopeError::UnsupportedShape(format!("{message}: `{}`", render::node_text(node, source)))
}
