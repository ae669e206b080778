use crate::details::BookingDetails;
use std::fmt;

/// Field-keyed validation failures, in field order, for a form layer to
/// render next to inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for a field, if any
    pub fn field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|e| e.field).collect();
        write!(f, "Booking details failed validation: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a booking draft before submission.
///
/// This is a collaborator of the booking service, not part of it: the
/// service itself accepts whatever draft it holds, and callers decide when
/// to gate submission on these checks.
pub fn validate_details(details: &BookingDetails) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if details.name.trim().is_empty() {
        errors.push("name", "Name is required");
    }

    if details.email.trim().is_empty() {
        errors.push("email", "Email is required");
    } else if !is_well_formed_email(details.email.trim()) {
        errors.push("email", "Email is invalid");
    }

    if details.phone.trim().is_empty() {
        errors.push("phone", "Phone number is required");
    } else if digit_count(&details.phone) != 10 {
        errors.push("phone", "Phone number should be 10 digits");
    }

    if details.tour_date.trim().is_empty() {
        errors.push("tour_date", "Tour date is required");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// local-part@domain with at least one dot in a non-empty domain
fn is_well_formed_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !local.contains(char::is_whitespace)
                && domain.split('.').count() >= 2
                && domain
                    .split('.')
                    .all(|label| !label.is_empty() && !label.contains(char::is_whitespace))
        }
        _ => false,
    }
}

// Separators like spaces and dashes are ignored, digits are counted
fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::BookingDetailsPatch;

    fn complete_draft() -> BookingDetails {
        let mut details = BookingDetails::default();
        details.apply(BookingDetailsPatch {
            name: Some("Asha Sharma".to_string()),
            email: Some("asha@example.com".to_string()),
            phone: Some("98765 43210".to_string()),
            tour_date: Some("2024-05-20".to_string()),
            ..BookingDetailsPatch::default()
        });
        details
    }

    #[test]
    fn complete_draft_passes() {
        assert!(validate_details(&complete_draft()).is_ok());
    }

    #[test]
    fn empty_draft_fails_on_every_required_field() {
        let errors = validate_details(&BookingDetails::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.field("name"), Some("Name is required"));
        assert_eq!(errors.field("email"), Some("Email is required"));
        assert_eq!(errors.field("phone"), Some("Phone number is required"));
        assert_eq!(errors.field("tour_date"), Some("Tour date is required"));
    }

    #[test]
    fn malformed_email_is_flagged() {
        let mut details = complete_draft();
        details.email = "not-an-email".to_string();
        let errors = validate_details(&details).unwrap_err();
        assert_eq!(errors.field("email"), Some("Email is invalid"));

        details.email = "a@b".to_string();
        assert!(validate_details(&details).is_err());

        details.email = "a@b.co".to_string();
        assert!(validate_details(&details).is_ok());
    }

    #[test]
    fn phone_must_carry_exactly_ten_digits() {
        let mut details = complete_draft();

        details.phone = "12345".to_string();
        let errors = validate_details(&details).unwrap_err();
        assert_eq!(errors.field("phone"), Some("Phone number should be 10 digits"));

        // Separators are ignored
        details.phone = "098-765-43210".to_string();
        assert!(validate_details(&details).is_err());

        details.phone = "(987) 654-3210".to_string();
        assert!(validate_details(&details).is_ok());
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut details = complete_draft();
        details.name = "   ".to_string();
        let errors = validate_details(&details).unwrap_err();
        assert_eq!(errors.field("name"), Some("Name is required"));
    }
}
