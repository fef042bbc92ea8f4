use indexmap::IndexMap;
use indexmap::map::Entry;
use tree_sitter::Node;

/// One reopening of a namespace: the declaration-sequence node of that
/// occurrence, paired with the source text its tree was parsed from so the
/// scope stays renderable after trees from several translation units are
/// merged into one hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct ScopeContext<'tree> {
    pub node: Node<'tree>,
    pub source: &'tree str,
}

impl<'tree> PartialEq for ScopeContext<'tree> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

/// A node in the namespace hierarchy.
///
/// Identity is the name-segment path from the root: two nodes reached by
/// the same path are the same namespace, and merging is a key union over
/// `nested`. The root namespace has an empty name. `contexts` accumulates
/// one entry per reopening of the path, in the order the reopenings were
/// walked.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace<'tree> {
    pub name: String,
    pub contexts: Vec<ScopeContext<'tree>>,
    pub nested: IndexMap<String, Namespace<'tree>>,
}

impl<'tree> Namespace<'tree> {
    pub fn root() -> Self {
        Self::named(String::new())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Namespace {
            name: name.into(),
            contexts: Vec::new(),
            nested: IndexMap::new(),
        }
    }

    /// Walks `segments` downward from this node, creating nodes that do
    /// not exist yet and reusing the ones that do, and returns the node at
    /// the end of the path.
    pub fn ensure_path(&mut self, segments: &[String]) -> &mut Namespace<'tree> {
        let mut current = self;
        for segment in segments {
            current = current
                .nested
                .entry(segment.clone())
                .or_insert_with(|| Namespace::named(segment.clone()));
        }
        current
    }

    /// Looks a path up without creating anything.
    pub fn find_path(&self, segments: &[&str]) -> Option<&Namespace<'tree>> {
        let mut current = self;
        for segment in segments {
            current = current.nested.get(*segment)?;
        }
        Some(current)
    }

    /// Merges `other` into `self`: nested namespaces sharing a name merge
    /// recursively, names present on one side only are inserted (new names
    /// append after existing ones), and contexts concatenate in order.
    pub fn merge_from(&mut self, other: Namespace<'tree>) {
        debug_assert_eq!(self.name, other.name);
        tracing::trace!(
            name = %self.name,
            incoming = other.nested.len(),
            "merging namespace node"
        );
        self.union_nested(other.nested);
        self.contexts.extend(other.contexts);
    }

    /// Re-roots the nested namespaces of a sub-walk's root under `self`.
    /// The incoming node is a bare root: it never carries contexts of its
    /// own.
    pub fn adopt_nested(&mut self, other: Namespace<'tree>) {
        debug_assert!(other.contexts.is_empty());
        self.union_nested(other.nested);
    }

    fn union_nested(&mut self, nested: IndexMap<String, Namespace<'tree>>) {
        for (name, child) in nested {
            match self.nested.entry(name) {
                Entry::Occupied(slot) => slot.into_mut().merge_from(child),
                Entry::Vacant(slot) => {
                    slot.insert(child);
                }
            }
        }
    }

    /// Number of reopenings recorded for this node.
    pub fn reopenings(&self) -> usize {
        self.contexts.len()
    }
}
