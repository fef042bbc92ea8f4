use std::fs;
use std::path::{Path, PathBuf};

use cxscope_core::error::{CxscopeError, Result};
use tree_sitter::{Node, Tree};

/// A parsed translation unit. Owns both the source text and the tree so
/// that extracted model values can borrow from it for the unit's lifetime.
pub struct TranslationUnit {
    pub path: Option<PathBuf>,
    pub source: String,
    pub tree: Tree,
}

impl TranslationUnit {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }
}

/// Thin wrapper around a tree-sitter parser configured for the C++
/// grammar.
pub struct CppParser {
    parser: tree_sitter::Parser,
}

impl CppParser {
    pub fn new() -> Result<Self> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_cpp::LANGUAGE.into())
            .map_err(|e| CxscopeError::Parsing(format!("failed to load C++ grammar: {e}")))?;
        Ok(Self { parser })
    }

    pub fn parse_source(&mut self, source: impl Into<String>) -> Result<TranslationUnit> {
        let source = source.into();
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| CxscopeError::Parsing("parser produced no tree".to_string()))?;
        Ok(TranslationUnit {
            path: None,
            source,
            tree,
        })
    }

    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<TranslationUnit> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let mut unit = self.parse_source(source)?;
        unit.path = Some(path.to_path_buf());
        Ok(unit)
    }
}
