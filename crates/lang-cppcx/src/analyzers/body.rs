use cxscope_core::model::NamespaceBody;
use tracing::trace;
use tree_sitter::Node;

use super::{declarator_fields, unwrap_declarator};

/// Type specifiers a variable declaration can be recognized by. Class,
/// struct, and enum specifiers are deliberately not here: a declaration
/// built on one of those is left unclassified and descended instead.
const SIMPLE_TYPE_KINDS: [&str; 6] = [
    "primitive_type",
    "type_identifier",
    "qualified_identifier",
    "sized_type_specifier",
    "template_type",
    "auto",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclarationKind {
    Unknown,
    Variable,
    Function,
}

/// Classifies the direct contents of one namespace-opening occurrence.
///
/// Namespace definitions nested inside are excluded: they belong to a
/// different scope and are collected by the namespace tree builder.
/// Constructs this layer does not model (typedefs, using-declarations)
/// contribute nothing but never block their siblings. Classification is
/// purely structural, nothing is rendered or extracted here.
pub fn classify_namespace_body<'t>(decl_seq: Node<'t>) -> NamespaceBody<'t> {
    classify_children(decl_seq)
}

/// Returns `None` for namespace-definition children so the aggregation
/// absorbs them as a no-op.
fn classify_node<'t>(node: Node<'t>) -> Option<NamespaceBody<'t>> {
    match node.kind() {
        "namespace_definition" => None,
        "class_specifier" | "struct_specifier" | "union_specifier" => Some(NamespaceBody {
            classes: vec![node],
            ..NamespaceBody::default()
        }),
        "function_definition" => Some(NamespaceBody {
            function_definitions: vec![node],
            ..NamespaceBody::default()
        }),
        "declaration" => match disambiguate_declaration(node) {
            DeclarationKind::Variable => {
                trace!("classified declaration as variable");
                Some(NamespaceBody {
                    global_variables: vec![node],
                    ..NamespaceBody::default()
                })
            }
            DeclarationKind::Function => {
                trace!("classified declaration as function prototype");
                Some(NamespaceBody {
                    function_prototypes: vec![node],
                    ..NamespaceBody::default()
                })
            }
            DeclarationKind::Unknown => Some(classify_children(node)),
        },
        _ => Some(classify_children(node)),
    }
}

fn classify_children<'t>(node: Node<'t>) -> NamespaceBody<'t> {
    let mut aggregate = NamespaceBody::default();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(result) = classify_node(child) {
            aggregate.merge_from(result);
        }
    }
    aggregate
}

/// Disambiguates the syntactically overlapping declaration shapes: one
/// grammar production covers variable declarations, function prototypes,
/// and constructs this layer does not model.
fn disambiguate_declaration(decl: Node<'_>) -> DeclarationKind {
    let declarators = declarator_fields(decl);
    if declarators.len() == 1 {
        let (inner, _) = unwrap_declarator(declarators[0]);
        if inner.kind() == "function_declarator" {
            return DeclarationKind::Function;
        }
    }
    if declarators.is_empty() {
        return DeclarationKind::Unknown;
    }
    match decl.child_by_field_name("type") {
        Some(ty) if SIMPLE_TYPE_KINDS.contains(&ty.kind()) => DeclarationKind::Variable,
        _ => DeclarationKind::Unknown,
    }
}
