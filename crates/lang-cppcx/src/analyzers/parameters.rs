use cxscope_core::error::Result;
use cxscope_core::model::Parameter;
use tree_sitter::Node;

use super::typed_name;
use crate::render;

/// Extracts the ordered parameter list of a function declarator. `None`
/// means the declarator carries no parameter clause at all: zero
/// parameters. Order is preserved as written; duplicate names are not
/// validated at this layer.
pub fn extract_parameters(clause: Option<Node<'_>>, source: &str) -> Result<Vec<Parameter>> {
    let Some(clause) = clause else {
        return Ok(Vec::new());
    };
    let mut parameters = Vec::new();
    let mut cursor = clause.walk();
    for child in clause.named_children(&mut cursor) {
        match child.kind() {
            "parameter_declaration" => {
                parameters.push(extract_parameter(child, None, source)?);
            }
            "optional_parameter_declaration" => {
                let default = child.child_by_field_name("default_value");
                parameters.push(extract_parameter(child, default, source)?);
            }
            // variadic markers and comments contribute no parameter
            _ => {}
        }
    }
    Ok(parameters)
}

fn extract_parameter(
    node: Node<'_>,
    default: Option<Node<'_>>,
    source: &str,
) -> Result<Parameter> {
    let mut cursor = node.walk();
    // the default-value sub-tree and its `=` token are not part of the
    // declarator token run
    let declarator_nodes: Vec<Node<'_>> = node
        .children(&mut cursor)
        .filter(|child| Some(*child) != default && child.kind() != "=")
        .collect();
    let typed_name = typed_name::extract_typed_name(declarator_nodes, source)?;
    let default_value = default.map(|node| render::node_text(node, source).to_string());
    Ok(Parameter {
        typed_name,
        default_value,
    })
}
