use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgeError {
    /// The date string is not a real `YYYY-MM-DD` calendar date.
    #[error("malformed date {input:?}: {reason}")]
    MalformedInput { input: String, reason: String },

    /// Reading the answer or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The report could not be serialized.
    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AgeError {
    pub fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_per_variant() {
        let malformed = AgeError::malformed("1990-3-15", "expected YYYY-MM-DD");
        assert_eq!(
            malformed.to_string(),
            "malformed date \"1990-3-15\": expected YYYY-MM-DD"
        );
        assert!(malformed.is_malformed_input());

        let io = AgeError::from(std::io::Error::other("closed"));
        assert_eq!(io.to_string(), "I/O error: closed");
        assert!(!io.is_malformed_input());

        let json = AgeError::from(serde_json::from_str::<i32>("x").unwrap_err());
        assert!(json.to_string().starts_with("failed to encode report as JSON: "));
        assert!(!json.is_malformed_input());
    }
}
