use cxscope_core::model::{Namespace, ScopeContext};
use tracing::debug;
use tree_sitter::Node;

use crate::parser::TranslationUnit;
use crate::render;

/// Builds the namespace hierarchy of one translation unit by threading an
/// explicit scope path through the walk: the path grows on entering a
/// namespace definition and is restored on leaving it.
pub fn build_namespace_tree<'t>(unit: &'t TranslationUnit) -> Namespace<'t> {
    let mut root = Namespace::root();
    let mut path = Vec::new();
    walk(unit.root(), &unit.source, &mut root, &mut path);
    debug!(
        namespaces = root.nested.len(),
        path = ?unit.path,
        "built namespace tree"
    );
    root
}

fn walk<'t>(node: Node<'t>, source: &'t str, root: &mut Namespace<'t>, path: &mut Vec<String>) {
    if node.kind() != "namespace_definition" {
        walk_children(node, source, root, path);
        return;
    }

    let segments = name_segments(node, source);
    let body = node.child_by_field_name("body");
    if segments.is_empty() {
        // anonymous namespace: no scope of its own, nested named
        // namespaces surface in the enclosing scope
        if let Some(body) = body {
            walk_children(body, source, root, path);
        }
        return;
    }

    let depth = segments.len();
    path.extend(segments);
    if let Some(body) = body {
        root.ensure_path(path).contexts.push(ScopeContext { node: body, source });
        walk_children(body, source, root, path);
    } else {
        root.ensure_path(path);
    }
    path.truncate(path.len() - depth);
}

fn walk_children<'t>(
    node: Node<'t>,
    source: &'t str,
    root: &mut Namespace<'t>,
    path: &mut Vec<String>,
) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, source, root, path);
    }
}

/// Builds the same hierarchy as a pure bottom-up fold: every
/// namespace-opening subtree yields its own path-from-the-root tree, and
/// sibling results merge by key union. Both styles produce the same tree
/// for the same input.
pub fn collect_namespace_tree<'t>(unit: &'t TranslationUnit) -> Namespace<'t> {
    collect(unit.root(), &unit.source).unwrap_or_else(Namespace::root)
}

fn collect<'t>(node: Node<'t>, source: &'t str) -> Option<Namespace<'t>> {
    if node.kind() != "namespace_definition" {
        return collect_children(node, source);
    }

    let body = node.child_by_field_name("body");
    let inner = body.and_then(|body| collect_children(body, source));

    let segments = name_segments(node, source);
    if segments.is_empty() {
        return inner;
    }

    let mut root = Namespace::root();
    let scope = root.ensure_path(&segments);
    if let Some(body) = body {
        scope.contexts.push(ScopeContext { node: body, source });
    }
    if let Some(inner) = inner {
        scope.adopt_nested(inner);
    }
    Some(root)
}

fn collect_children<'t>(node: Node<'t>, source: &'t str) -> Option<Namespace<'t>> {
    let mut aggregate: Option<Namespace<'t>> = None;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(next) = collect(child, source) {
            match aggregate.as_mut() {
                Some(current) => current.merge_from(next),
                None => aggregate = Some(next),
            }
        }
    }
    aggregate
}

/// Splits a namespace definition's name into `::`-separated segments. A
/// nameless definition yields no segments.
fn name_segments(node: Node<'_>, source: &str) -> Vec<String> {
    let Some(name) = node.child_by_field_name("name") else {
        return Vec::new();
    };
    render::node_text(name, source)
        .split("::")
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
