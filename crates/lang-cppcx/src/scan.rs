use std::path::PathBuf;

use cxscope_core::error::Result;
use cxscope_core::model::{merge_globals_strict, GlobalVariableRecord, Namespace, NamespaceSummary};
use rayon::prelude::*;
use tracing::debug;
use tree_sitter::Node;

use crate::analyzers::{body, function_decl, function_def, global_variable, namespace};
use crate::parser::{CppParser, TranslationUnit};
use crate::render;

/// Parses a batch of `(path, text)` sources in parallel, one parser per
/// unit. The returned units own their trees; everything extracted later
/// borrows from them.
pub fn parse_sources(sources: &[(&str, &str)]) -> Result<Vec<TranslationUnit>> {
    sources
        .par_iter()
        .map(|(path, text)| {
            let mut parser = CppParser::new()?;
            let mut unit = parser.parse_source(text.to_string())?;
            unit.path = Some(PathBuf::from(path));
            Ok(unit)
        })
        .collect()
}

/// Merges the namespace trees of every unit into one project-wide
/// hierarchy. The reduction itself is sequential; only parsing fans out.
pub fn build_project_tree<'t>(units: &'t [TranslationUnit]) -> Namespace<'t> {
    let mut root = Namespace::root();
    for unit in units {
        root.merge_from(namespace::build_namespace_tree(unit));
    }
    debug!(units = units.len(), "merged project namespace tree");
    root
}

/// Resolves a namespace tree into fully-extracted records, classifying
/// each reopening's contents and extracting every classified declaration.
/// Redeclared globals are kept as-is; see [`summarize_strict`] to reject
/// them.
pub fn summarize(namespace: &Namespace<'_>) -> Result<NamespaceSummary> {
    let mut summary = NamespaceSummary {
        name: namespace.name.clone(),
        ..NamespaceSummary::default()
    };
    for context in &namespace.contexts {
        let body = body::classify_namespace_body(context.node);
        for decl in body.global_variables {
            let variables = global_variable::extract_global_variables(decl, context.source)?;
            summary
                .global_variables
                .extend(variables.iter().map(|v| v.resolve(context.source)));
        }
        for decl in body.function_prototypes {
            summary
                .function_prototypes
                .push(function_decl::extract_function_prototype(decl, context.source)?);
        }
        for def in body.function_definitions {
            summary
                .function_definitions
                .push(function_def::extract_function_definition(def, context.source)?.resolve());
        }
        for class in body.classes {
            summary.classes.push(class_name(class, context.source));
        }
    }
    for child in namespace.nested.values() {
        summary.nested.push(summarize(child)?);
    }
    Ok(summary)
}

/// Like [`summarize`], but rejects global variables that collide on
/// `(type, name)` anywhere in the tree, reporting both colliding records.
pub fn summarize_strict(namespace: &Namespace<'_>) -> Result<NamespaceSummary> {
    let summary = summarize(namespace)?;
    let mut groups = Vec::new();
    collect_global_groups(&summary, &mut groups);
    merge_globals_strict(groups)?;
    Ok(summary)
}

fn collect_global_groups(summary: &NamespaceSummary, groups: &mut Vec<Vec<GlobalVariableRecord>>) {
    groups.push(summary.global_variables.clone());
    for nested in &summary.nested {
        collect_global_groups(nested, groups);
    }
}

fn class_name(node: Node<'_>, source: &str) -> String {
    node.child_by_field_name("name")
        .map(|name| render::node_text(name, source).to_string())
        .unwrap_or_else(|| "<unnamed>".to_string())
}
