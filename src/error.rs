use thiserror::Error;

/// Errors surfaced by the siting core.
#[derive(Debug, Error)]
pub enum SitingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown candidate site: {0}")]
    UnknownSite(String),

    #[error("unknown load center: {0}")]
    UnknownLoadCenter(String),

    #[error("primary hub '{0}' is not among the load centers")]
    MissingHub(String),

    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("dataset parse error: {0}")]
    DatasetParse(#[from] toml::de::Error),

    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

impl From<validator::ValidationErrors> for SitingError {
    fn from(errors: validator::ValidationErrors) -> Self {
        SitingError::InvalidInput(errors.to_string())
    }
}

pub type SitingResult<T> = Result<T, SitingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = SitingError::UnknownSite("mergui".to_string());
        assert_eq!(error.to_string(), "unknown candidate site: mergui");

        let error = SitingError::MissingHub("yangon".to_string());
        assert_eq!(
            error.to_string(),
            "primary hub 'yangon' is not among the load centers"
        );
    }
}
