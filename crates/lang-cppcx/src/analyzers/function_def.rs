use cxscope_core::error::Result;
use cxscope_core::model::FunctionDefinition;
use tree_sitter::Node;

use super::{parameters, specifier_text, typed_name, unsupported, unwrap_declarator};
use crate::render;

/// Extracts the signature parts of a function definition: the `Class::`
/// qualifier chain of an out-of-class member definition, the unqualified
/// name, the return type (absent for constructors and destructors), the
/// parameter list, and the statement body.
pub fn extract_function_definition<'t>(
    def: Node<'t>,
    source: &str,
) -> Result<FunctionDefinition<'t>> {
    if def.kind() != "function_definition" {
        return Err(unsupported("expected a function definition", def, source));
    }
    let Some(declarator) = def.child_by_field_name("declarator") else {
        return Err(unsupported("definition carries no declarator", def, source));
    };
    let (function, sigils) = unwrap_declarator(declarator);
    if function.kind() != "function_declarator" {
        return Err(unsupported(
            "definition carries no parameter clause",
            def,
            source,
        ));
    }
    let Some(name_node) = function.child_by_field_name("declarator") else {
        return Err(unsupported("definition carries no name", def, source));
    };
    let Some(body) = def.child_by_field_name("body") else {
        return Err(unsupported("definition carries no body", def, source));
    };

    let qualified = render::spaced_tokens(name_node, source);
    let (class_name, name) = match qualified.rsplit_once("::") {
        Some((scope, last)) => (Some(scope.to_string()), last.to_string()),
        None => (None, qualified),
    };

    let rendered = specifier_text(def, declarator, source);
    let mut return_type = if rendered.is_empty() { None } else { Some(rendered) };
    if let Some(ty) = return_type.as_mut() {
        typed_name::fold_sigils(ty, &sigils);
    }

    let parameters =
        parameters::extract_parameters(function.child_by_field_name("parameters"), source)?;

    Ok(FunctionDefinition {
        class_name,
        name,
        return_type,
        parameters,
        body,
    })
}
