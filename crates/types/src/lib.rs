//! Validated primitive types shared across the Chartwell crates.
//!
//! Clinical record fields arrive as raw form text. The types here push the
//! cheap, always-true guarantees (non-empty, plausibly-an-email, carries at
//! least one digit) to the type level so the repository and store layers
//! never have to re-check them.

/// Errors that can occur when constructing validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input did not look like an email address
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    /// The input did not contain any digits usable as a phone number
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
}

/// A string type that guarantees non-empty content.
///
/// Wraps a `String` and ensures it contains at least one non-whitespace
/// character. Input is trimmed of leading and trailing whitespace during
/// construction. Used for values that must never be blank once accepted,
/// such as the store API key and uploaded document names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the
    /// trimmed result is empty, an error is returned.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A validated email address.
///
/// Validation is deliberately shallow: one `@` with non-empty local and
/// domain parts, and a dot somewhere in the domain. The backend store is
/// the authority on deliverability; this type only rejects inputs that
/// cannot possibly be addresses before they reach a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and validates an email address.
    ///
    /// The input is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` for blank input and
    /// `TextError::InvalidEmail` when the shape is not `local@domain.tld`.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }

        let mut parts = trimmed.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();

        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(TextError::InvalidEmail(trimmed.to_owned()));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A phone number kept in the form the user entered it.
///
/// Formatting varies wildly ("(555) 123-4567", "+44 20 7946 0958"), so the
/// raw text is preserved for display while [`digits`](Self::digits)
/// exposes the digit sequence for matching. Patient search compares digit
/// sequences, not formatted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses a phone number, requiring at least one digit.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        if !trimmed.chars().any(|c| c.is_ascii_digit()) {
            return Err(TextError::InvalidPhone(trimmed.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the number as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns only the digits, in order.
    pub fn digits(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_text_trims_and_accepts() {
        let text = NonEmptyText::new("  discharge summary  ").expect("should accept");
        assert_eq!(text.as_str(), "discharge summary");
    }

    #[test]
    fn test_non_empty_text_rejects_whitespace_only() {
        let err = NonEmptyText::new("   ").expect_err("should reject whitespace");
        assert!(matches!(err, TextError::Empty));
    }

    #[test]
    fn test_non_empty_text_serializes_as_plain_string() {
        let text = NonEmptyText::new("patient.pdf").expect("should accept");
        let json = serde_json::to_string(&text).expect("should serialize");
        assert_eq!(json, "\"patient.pdf\"");
    }

    #[test]
    fn test_email_accepts_plausible_address() {
        let email = EmailAddress::parse("ann.lee@example.com").expect("should accept");
        assert_eq!(email.as_str(), "ann.lee@example.com");
    }

    #[test]
    fn test_email_rejects_missing_domain_dot() {
        let err = EmailAddress::parse("ann@localhost").expect_err("should reject");
        assert!(matches!(err, TextError::InvalidEmail(_)));
    }

    #[test]
    fn test_email_rejects_missing_at() {
        let err = EmailAddress::parse("ann.example.com").expect_err("should reject");
        assert!(matches!(err, TextError::InvalidEmail(_)));
    }

    #[test]
    fn test_phone_extracts_digits() {
        let phone = PhoneNumber::parse("(555) 123-4567").expect("should accept");
        assert_eq!(phone.digits(), "5551234567");
        assert_eq!(phone.as_str(), "(555) 123-4567");
    }

    #[test]
    fn test_phone_rejects_digitless_input() {
        let err = PhoneNumber::parse("no number here").expect_err("should reject");
        assert!(matches!(err, TextError::InvalidPhone(_)));
    }
}
