use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiscrateError>;

/// Every failure the crate surfaces to callers.
///
/// Storage-absent and storage-blank are deliberately NOT here: both are
/// recovered inside [`crate::storage::load`] and reported through
/// [`crate::storage::LoadStatus`] instead of an error path.
#[derive(Debug, Error, Diagnostic)]
pub enum DiscrateError {
    /// Raw user text that failed whole-number coercion. The `Display`
    /// output doubles as the message shown at the prompt.
    #[error("Please enter a whole number. You entered {raw}")]
    #[diagnostic(code(discrate::invalid_id), help("IDs are whole numbers, e.g. 42"))]
    InvalidId { raw: String },

    #[error("inventory storage I/O failed")]
    #[diagnostic(code(discrate::storage_io))]
    Io(#[from] std::io::Error),

    #[error("inventory encoding failed")]
    #[diagnostic(
        code(discrate::storage_codec),
        help("the storage file may be corrupt; remove it to start fresh")
    )]
    Codec(#[from] bincode::Error),
}
