use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unterminated placeholder: `%(` at position {offset} is never closed in pattern `{pattern}`")]
    UnterminatedPlaceholder { pattern: String, offset: usize },

    #[error("unterminated escape: pattern `{pattern}` ends with a lone `\\`")]
    UnterminatedEscape { pattern: String },

    #[error("pattern `{pattern}` compiled to an invalid match expression")]
    MatchSpecInvalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("filename `{filename}` does not match the pattern")]
    NoMatch { filename: String },

    #[error("filename `{filename}` has an empty value for tag `{field}`")]
    EmptyAssignment { field: String, filename: String },

    #[error("file {} has no usable name", path.display())]
    NoFileName { path: PathBuf },

    #[error("failed to read cover image {}", path.display())]
    ReadCover {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read tags from {}", path.display())]
    ReadTags {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },

    #[error("failed to write tags to {}", path.display())]
    WriteTags {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },
}
