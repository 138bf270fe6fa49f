//! Primary-key parsing for path segments

use super::ValidationError;

/// A row id taken from a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(i64);

impl RecordId {
    /// Parse a path segment as a signed 64-bit integer.
    ///
    /// # Example
    /// ```
    /// use catalog_server::models::RecordId;
    ///
    /// assert_eq!(RecordId::parse("42").unwrap().get(), 42);
    /// assert!(RecordId::parse("abc").is_err());
    /// assert!(RecordId::parse("").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }

        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer",
            })
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers() {
        assert_eq!(RecordId::parse("1").unwrap().get(), 1);
        assert_eq!(RecordId::parse("-3").unwrap().get(), -3);
        assert_eq!(i64::from(RecordId::parse("9000").unwrap()), 9000);
    }

    #[test]
    fn rejects_non_integers() {
        for input in ["1.5", "one", "1e3", " 1", "99999999999999999999"] {
            let err = RecordId::parse(input).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { field: "id", .. }),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            RecordId::parse("").unwrap_err(),
            ValidationError::Empty { field: "id" }
        ));
    }
}
