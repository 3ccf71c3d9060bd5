use file_forest_domain::FileId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileQueryError {
    #[error("no root file among {file_count} files")]
    NoRoots { file_count: usize },

    #[error("unknown file id: {0}")]
    UnknownId(FileId),

    #[error("duplicate file id: {0}")]
    DuplicateId(FileId),

    #[error("file {id} references missing parent {parent}")]
    DanglingParent { id: FileId, parent: FileId },

    #[error("Configuration error: {0}")]
    Config(String),
}
