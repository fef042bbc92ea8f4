use std::fmt;

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use crate::error::{CxscopeError, Result};

/// A declared entity's type and name. Any pointer/reference/handle sigil
/// written against the name is folded into the type, so `name` is always a
/// bare identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedName {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

impl fmt::Display for TypedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// One formal parameter. `default_value` of `None` means the parameter has
/// no default; an empty string is a (degenerate) default of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub typed_name: TypedName,
    pub default_value: Option<String>,
}

/// A full function signature extracted from a non-defining declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
}

/// One variable carved out of a declaration statement. Several variables
/// may come from the same statement (comma-separated declarator list);
/// each still carries the shared type and extern flag itself. Borrows its
/// initializer sub-tree from the parsed translation unit.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalVariable<'tree> {
    pub ty: String,
    pub name: String,
    pub is_extern: bool,
    pub initializer: Option<Node<'tree>>,
}

impl<'tree> GlobalVariable<'tree> {
    /// Materializes an owned record, rendering the initializer sub-tree to
    /// text. Constructor-style initializers drop their surrounding parens.
    pub fn resolve(&self, source: &str) -> GlobalVariableRecord {
        let init_value = self.initializer.map(|node| {
            let text = node.utf8_text(source.as_bytes()).unwrap_or_default();
            if node.kind() == "argument_list" {
                text.trim_start_matches('(').trim_end_matches(')').trim().to_string()
            } else {
                text.trim().to_string()
            }
        });
        GlobalVariableRecord {
            ty: self.ty.clone(),
            name: self.name.clone(),
            is_extern: self.is_extern,
            init_value,
        }
    }
}

/// Owned snapshot of a global variable, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalVariableRecord {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    pub is_extern: bool,
    pub init_value: Option<String>,
}

impl fmt::Display for GlobalVariableRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_extern {
            write!(f, "extern ")?;
        }
        write!(f, "{} {}", self.ty, self.name)?;
        if let Some(init) = &self.init_value {
            write!(f, " = {init}")?;
        }
        Ok(())
    }
}

/// A function definition: the signature parts plus the statement body.
/// `class_name` holds the `Class::` qualifier chain of out-of-class member
/// definitions; `return_type` is absent for constructors and destructors.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition<'tree> {
    pub class_name: Option<String>,
    pub name: String,
    pub return_type: Option<String>,
    pub parameters: Vec<Parameter>,
    pub body: Node<'tree>,
}

impl<'tree> FunctionDefinition<'tree> {
    pub fn resolve(&self) -> FunctionDefinitionRecord {
        FunctionDefinitionRecord {
            class_name: self.class_name.clone(),
            name: self.name.clone(),
            return_type: self.return_type.clone(),
            parameters: self.parameters.clone(),
        }
    }
}

/// Owned snapshot of a function definition, without the body sub-tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinitionRecord {
    pub class_name: Option<String>,
    pub name: String,
    pub return_type: Option<String>,
    pub parameters: Vec<Parameter>,
}

/// Merges groups of resolved global variables, rejecting any collision on
/// `(type, name)`. Callers that tolerate redeclarations should concatenate
/// instead.
pub fn merge_globals_strict(
    groups: impl IntoIterator<Item = Vec<GlobalVariableRecord>>,
) -> Result<Vec<GlobalVariableRecord>> {
    let mut merged: Vec<GlobalVariableRecord> = Vec::new();
    for group in groups {
        for record in group {
            if let Some(existing) = merged
                .iter()
                .find(|r| r.ty == record.ty && r.name == record.name)
            {
                return Err(CxscopeError::DuplicateGlobal {
                    first: existing.clone(),
                    second: record,
                });
            }
            merged.push(record);
        }
    }
    Ok(merged)
}
