use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A wrapper for pilgrim contact data (names, emails, phone numbers) that
/// masks its value in Debug and Display output.
///
/// Booking submissions travel through tracing spans on their way to the
/// gateway; wrapping contact fields keeps `{:?}` dumps of those payloads free
/// of PII while serialization still carries the real value.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Masked<T>(pub T);

impl<T: fmt::Display> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: fmt::Display> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // The gateway needs the real value; masking applies to log output only.
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }

    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Masked<T> {
    fn from(value: T) -> Self {
        Masked(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display_are_masked() {
        let email = Masked("devotee@example.com".to_string());
        assert_eq!(format!("{:?}", email), "********");
        assert_eq!(format!("{}", email), "********");
    }

    #[test]
    fn serialization_carries_the_real_value() {
        let phone = Masked("9876543210".to_string());
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"9876543210\"");
    }

    #[test]
    fn expose_returns_the_inner_value() {
        let name = Masked("Asha Sharma".to_string());
        assert_eq!(name.expose(), "Asha Sharma");
        assert_eq!(name.into_inner(), "Asha Sharma");
    }
}
