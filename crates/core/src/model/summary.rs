use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::decl::{FunctionDefinitionRecord, FunctionSignature, GlobalVariableRecord};

/// A fully-extracted snapshot of one namespace scope: every declaration of
/// every reopening resolved to owned records, plus the nested scopes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamespaceSummary {
    pub name: String,
    pub global_variables: Vec<GlobalVariableRecord>,
    pub function_prototypes: Vec<FunctionSignature>,
    pub function_definitions: Vec<FunctionDefinitionRecord>,
    pub classes: Vec<String>,
    pub nested: Vec<NamespaceSummary>,
}

impl fmt::Display for NamespaceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
