use crate::errors::{Result, ValidationError};

/// Trims `user_id` and rejects it when nothing is left.
///
/// Every service keys records by the trimmed id, so writes and reads agree.
pub(crate) fn require_user_id(user_id: &str) -> Result<&str> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("userId".to_string()).into());
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_require_user_id_trims() {
        assert_eq!(require_user_id("  user-1\t").unwrap(), "user-1");
    }

    #[test]
    fn test_require_user_id_rejects_blank() {
        for raw in ["", "   ", "\n"] {
            assert!(matches!(
                require_user_id(raw),
                Err(Error::Validation(ValidationError::MissingField(_)))
            ));
        }
    }
}
