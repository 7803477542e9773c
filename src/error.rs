use thiserror::Error;

/// Errors raised by the listing model and the browse session
#[derive(Debug, Error, PartialEq)]
pub enum BrowseError {
    /// A control value could not be turned into a filter criterion
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// A listing record breaks the data model invariants
    #[error("invalid listing {id}: {reason}")]
    InvalidListing { id: String, reason: String },
}

impl BrowseError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn invalid_listing(id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidListing {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
