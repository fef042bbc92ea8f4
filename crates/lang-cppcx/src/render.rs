use tree_sitter::Node;

/// Raw text of a node's span.
pub fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

/// Renders the leaf tokens under `node`, joined by single spaces, except
/// that a `::` token glues to both of its neighbours: `Platform`, `::`,
/// `StringReference` renders as `Platform::StringReference`.
pub fn spaced_tokens(node: Node<'_>, source: &str) -> String {
    let mut out = String::new();
    append_tokens(node, source, &mut out);
    out.truncate(out.trim_end().len());
    out
}

/// Renders several nodes with [`spaced_tokens`] and joins the results with
/// single spaces.
pub fn spaced_tokens_of<'t>(
    nodes: impl IntoIterator<Item = Node<'t>>,
    source: &str,
) -> String {
    nodes
        .into_iter()
        .map(|node| spaced_tokens(node, source))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn append_tokens(node: Node<'_>, source: &str, out: &mut String) {
    if node.child_count() == 0 {
        let token = node_text(node, source).trim();
        if token.is_empty() {
            return;
        }
        if token.starts_with("::") && out.ends_with(' ') {
            out.pop();
        }
        out.push_str(token);
        if !token.ends_with("::") {
            out.push(' ');
        }
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        append_tokens(child, source, out);
    }
}
