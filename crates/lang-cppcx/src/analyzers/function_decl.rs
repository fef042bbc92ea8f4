use cxscope_core::error::Result;
use cxscope_core::model::FunctionSignature;
use tree_sitter::Node;

use super::{declarator_fields, parameters, specifier_text, typed_name, unsupported, unwrap_declarator};
use crate::render;

/// Extracts a full function signature from a non-defining declaration.
///
/// The return type is the rendered declaration-specifier run; a storage
/// class present there is kept as written. Declarations with other than
/// exactly one declarator are not a supported input shape.
pub fn extract_function_prototype(decl: Node<'_>, source: &str) -> Result<FunctionSignature> {
    if decl.kind() != "declaration" {
        return Err(unsupported("expected a declaration statement", decl, source));
    }
    let declarators = declarator_fields(decl);
    if declarators.len() != 1 {
        return Err(unsupported(
            "function declarations must carry exactly one declarator",
            decl,
            source,
        ));
    }

    let (function, sigils) = unwrap_declarator(declarators[0]);
    if function.kind() != "function_declarator" {
        return Err(unsupported(
            "declarator carries no parameter clause",
            decl,
            source,
        ));
    }
    let Some(name_node) = function.child_by_field_name("declarator") else {
        return Err(unsupported("declarator carries no name", decl, source));
    };

    let mut return_type = specifier_text(decl, declarators[0], source);
    typed_name::fold_sigils(&mut return_type, &sigils);

    let parameters =
        parameters::extract_parameters(function.child_by_field_name("parameters"), source)?;

    Ok(FunctionSignature {
        name: render::node_text(name_node, source).to_string(),
        return_type,
        parameters,
    })
}
