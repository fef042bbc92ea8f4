pub mod body;
pub mod decl;
pub mod namespace;
pub mod summary;

pub use body::NamespaceBody;
pub use decl::*;
pub use namespace::{Namespace, ScopeContext};
pub use summary::NamespaceSummary;
