use cxscope_core::error::Result;
use cxscope_core::model::GlobalVariable;
use tree_sitter::Node;

use super::{declarator_fields, unsupported};
use crate::render;

/// Expands one declaration statement into zero or more global variables.
///
/// A single statement may declare one bare entity or a comma-separated
/// list of declarators sharing one type and storage-qualifier prefix; each
/// resulting variable carries the shared type, its own name, the shared
/// extern flag, and a reference to its own initializer sub-tree when it
/// has one.
pub fn extract_global_variables<'t>(
    decl: Node<'t>,
    source: &str,
) -> Result<Vec<GlobalVariable<'t>>> {
    if decl.kind() != "declaration" {
        return Err(unsupported("expected a declaration statement", decl, source));
    }
    let declarators = declarator_fields(decl);
    if declarators.is_empty() {
        return Err(unsupported(
            "a variable declaration needs both a type and a name",
            decl,
            source,
        ));
    }
    let Some(type_node) = decl.child_by_field_name("type") else {
        return Err(unsupported(
            "declaration carries no type specifier",
            decl,
            source,
        ));
    };

    let ty = render::node_text(type_node, source).to_string();
    let is_extern = leading_extern(decl, source);

    let mut variables = Vec::with_capacity(declarators.len());
    for declarator in declarators {
        let (name_node, initializer) = if declarator.kind() == "init_declarator" {
            (
                declarator
                    .child_by_field_name("declarator")
                    .unwrap_or(declarator),
                declarator.child_by_field_name("value"),
            )
        } else {
            (declarator, None)
        };
        variables.push(GlobalVariable {
            ty: ty.clone(),
            name: render::node_text(name_node, source).to_string(),
            is_extern,
            initializer,
        });
    }
    Ok(variables)
}

/// An `extern` storage qualifier is only recognized in leading position.
fn leading_extern(decl: Node<'_>, source: &str) -> bool {
    decl.child(0)
        .map(|child| {
            child.kind() == "storage_class_specifier" && render::node_text(child, source) == "extern"
        })
        .unwrap_or(false)
}
