use crate::error::CoreError;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a path segment into a [`DbId`].
///
/// The offending literal is kept in the error so clients can see what was
/// rejected.
pub fn parse_db_id(raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>()
        .map_err(|_| CoreError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_plain_integer() {
        assert_eq!(parse_db_id("42").unwrap(), 42);
    }

    #[test]
    fn rejects_non_numeric_literal() {
        let err = parse_db_id("abc").unwrap_err();
        assert_matches!(err, CoreError::InvalidId(ref s) if s == "abc");
        assert_eq!(err.to_string(), "invalid id given abc");
    }

    #[test]
    fn rejects_fractional_and_empty() {
        assert_matches!(parse_db_id("1.5"), Err(CoreError::InvalidId(_)));
        assert_matches!(parse_db_id(""), Err(CoreError::InvalidId(_)));
    }

    #[test]
    fn rejects_overflow() {
        assert_matches!(
            parse_db_id("99999999999999999999"),
            Err(CoreError::InvalidId(_))
        );
    }
}
