use thiserror::Error;

use crate::model::GlobalVariableRecord;

#[derive(Error, Debug)]
pub enum CxscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parsing error: {0}")]
    Parsing(String),
    /// The rendered declarator text carries no whitespace, so there is no
    /// type/name split to make.
    #[error("malformed declarator `{text}`: no type/name split")]
    MalformedDeclarator { text: String },
    /// The declaration does not match any input shape this extractor
    /// supports; callers should treat it as out of scope, not as corrupt.
    #[error("unsupported declaration shape: {0}")]
    UnsupportedShape(String),
    /// Two global variable records collided on `(type, name)` during a
    /// strict merge.
    #[error("duplicate global variable: `{first}` collides with `{second}`")]
    DuplicateGlobal {
        first: GlobalVariableRecord,
        second: GlobalVariableRecord,
    },
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CxscopeError>;
