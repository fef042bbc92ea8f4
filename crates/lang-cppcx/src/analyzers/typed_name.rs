use cxscope_core::error::{CxscopeError, Result};
use cxscope_core::model::TypedName;
use tree_sitter::Node;

use crate::render;

/// Fold order for declarator sigils: pointer, then reference, then handle.
/// The order is a tie-break with no semantic weight (a declarator carries
/// at most one sigil in practice) but it is fixed for output stability.
const SIGILS: [char; 3] = ['*', '&', '^'];

/// Extracts the `(type, name)` pair of a declarator spread across `nodes`:
/// type tokens followed by the declared name, optionally decorated with a
/// pointer, reference, or handle sigil.
pub fn extract_typed_name<'t>(
    nodes: impl IntoIterator<Item = Node<'t>>,
    source: &str,
) -> Result<TypedName> {
    split_typed_name(&render::spaced_tokens_of(nodes, source))
}

/// Splits a rendered declarator at its last space: everything before it is
/// the type, everything after it the name. A sigil prefixing the name is
/// stripped and appended to the type, once per sigil kind. Names are the
/// final whitespace-delimited token here; declarators with trailing array
/// or function-pointer syntax are not a supported input.
pub fn split_typed_name(rendered: &str) -> Result<TypedName> {
    let split = rendered
        .rfind(' ')
        .ok_or_else(|| CxscopeError::MalformedDeclarator {
            text: rendered.to_string(),
        })?;
    let mut ty = rendered[..split].to_string();
    let mut name = &rendered[split + 1..];
    for sigil in SIGILS {
        if name.starts_with(sigil) {
            name = name.trim_start_matches(sigil);
            ty.push(sigil);
        }
    }
    Ok(TypedName {
        ty,
        name: name.to_string(),
    })
}

/// Appends the sigils collected off a declarator's wrapper layers onto a
/// rendered type, in the fixed fold order, one per kind.
pub(crate) fn fold_sigils(ty: &mut String, seen: &[char]) {
    for sigil in SIGILS {
        if seen.contains(&sigil) {
            ty.push(sigil);
        }
    }
}
