use std::fmt;
use thiserror::Error;

/// Required App Card fields, named as the host exposes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    SiteUsername,
    IPhone,
    IPad,
    GooglePlay,
}

impl CardField {
    /// Field name as reported in errors
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SiteUsername => "SiteUsername",
            Self::IPhone => "IPhone",
            Self::IPad => "IPad",
            Self::GooglePlay => "GooglePlay",
        }
    }
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("Missing required field: {0}")]
    MissingField(CardField),
}

impl CardError {
    /// The field that failed validation
    #[must_use]
    pub fn field(&self) -> CardField {
        match self {
            Self::MissingField(field) => *field,
        }
    }
}

pub type Result<T> = std::result::Result<T, CardError>;

/// Returns true when the value is empty or whitespace-only
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate that a required field carries a value
pub fn validate_required(field: CardField, value: &str) -> Result<()> {
    if is_blank(value) {
        return Err(CardError::MissingField(field));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        // Present values
        assert!(validate_required(CardField::IPhone, "307234931").is_ok());
        assert!(validate_required(CardField::GooglePlay, "com.android.app").is_ok());
        assert!(validate_required(CardField::SiteUsername, " acme ").is_ok());

        // Blank values
        assert_eq!(
            validate_required(CardField::IPad, ""),
            Err(CardError::MissingField(CardField::IPad))
        );
        assert_eq!(
            validate_required(CardField::SiteUsername, " \t\n"),
            Err(CardError::MissingField(CardField::SiteUsername))
        );
    }

    #[test]
    fn test_error_message_names_field() {
        let err = CardError::MissingField(CardField::GooglePlay);
        assert_eq!(err.to_string(), "Missing required field: GooglePlay");
        assert_eq!(err.field(), CardField::GooglePlay);
    }
}
