use tree_sitter::Node;

/// The classified direct contents of one namespace-opening occurrence.
///
/// Each category stores references to the defining sub-trees; nothing is
/// extracted here, so enumerating a scope stays cheap and extraction cost
/// is only paid for declarations the caller actually inspects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamespaceBody<'tree> {
    pub global_variables: Vec<Node<'tree>>,
    pub classes: Vec<Node<'tree>>,
    pub function_prototypes: Vec<Node<'tree>>,
    pub function_definitions: Vec<Node<'tree>>,
}

impl<'tree> NamespaceBody<'tree> {
    /// Concatenates each category of `other` onto `self`, preserving the
    /// relative order within every category.
    pub fn merge_from(&mut self, other: NamespaceBody<'tree>) {
        self.global_variables.extend(other.global_variables);
        self.classes.extend(other.classes);
        self.function_prototypes.extend(other.function_prototypes);
        self.function_definitions.extend(other.function_definitions);
    }

    pub fn is_empty(&self) -> bool {
        self.global_variables.is_empty()
            && self.classes.is_empty()
            && self.function_prototypes.is_empty()
            && self.function_definitions.is_empty()
    }
}
