use crate::catalogue::CatalogueError;
use crate::ident::IdentError;
use crate::validate::Rejection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuntError {
    #[error(transparent)]
    Ident(#[from] IdentError),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backup file is not valid JSON. Kept apart from schema rejections.
    #[error("Backup file could not be read: {0}")]
    ImportParse(#[source] serde_json::Error),

    #[error("Import rejected: {0}")]
    ImportRejected(#[from] Rejection),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl HuntError {
    /// A follow-up line for the user, when the error has an obvious next step.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            HuntError::ImportRejected(rejection) if rejection.is_document_level() => Some(
                "The file is not a huntdesk backup. Nothing was imported.",
            ),
            HuntError::ImportRejected(_) => {
                Some("Nothing was imported. Fix the entry named above and import again.")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HuntError>;
