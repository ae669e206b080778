use serde::{Deserialize, Serialize};

/// Tier preselected on a fresh booking form
pub const DEFAULT_PACKAGE_TYPE: &str = "standard";

/// The in-progress booking draft. Every field is always a concrete string;
/// an untouched form is all empty strings with the standard package type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tour_date: String,
    pub package_type: String,
    pub message: String,
}

impl Default for BookingDetails {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            tour_date: String::new(),
            package_type: DEFAULT_PACKAGE_TYPE.to_string(),
            message: String::new(),
        }
    }
}

impl BookingDetails {
    /// Shallow-merge a patch: present fields overwrite, absent fields stay.
    pub fn apply(&mut self, patch: BookingDetailsPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(tour_date) = patch.tour_date {
            self.tour_date = tour_date;
        }
        if let Some(package_type) = patch.package_type {
            self.package_type = package_type;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
    }
}

/// Any subset of draft fields, as produced by a form layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingDetailsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BookingDetailsPatch {
    pub fn name(value: impl Into<String>) -> Self {
        Self {
            name: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self {
            email: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn phone(value: impl Into<String>) -> Self {
        Self {
            phone: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn tour_date(value: impl Into<String>) -> Self {
        Self {
            tour_date: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn package_type(value: impl Into<String>) -> Self {
        Self {
            package_type: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn message(value: impl Into<String>) -> Self {
        Self {
            message: Some(value.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_has_standard_tier_and_empty_fields() {
        let details = BookingDetails::default();
        assert_eq!(details.package_type, "standard");
        assert!(details.name.is_empty());
        assert!(details.email.is_empty());
        assert!(details.phone.is_empty());
        assert!(details.tour_date.is_empty());
        assert!(details.message.is_empty());
    }

    #[test]
    fn patches_merge_shallowly_in_order() {
        let mut details = BookingDetails::default();
        details.apply(BookingDetailsPatch::name("Asha Sharma"));
        details.apply(BookingDetailsPatch::email("asha@example.com"));
        // A later patch for the same field wins
        details.apply(BookingDetailsPatch::email("asha.sharma@example.com"));

        assert_eq!(details.name, "Asha Sharma");
        assert_eq!(details.email, "asha.sharma@example.com");
        // Untouched fields keep their defaults
        assert_eq!(details.package_type, "standard");
        assert!(details.phone.is_empty());
    }

    #[test]
    fn multi_field_patch_leaves_absent_fields_alone() {
        let mut details = BookingDetails::default();
        details.apply(BookingDetailsPatch::name("Ravi"));
        details.apply(BookingDetailsPatch {
            phone: Some("9876543210".to_string()),
            tour_date: Some("2024-05-20".to_string()),
            ..BookingDetailsPatch::default()
        });

        assert_eq!(details.name, "Ravi");
        assert_eq!(details.phone, "9876543210");
        assert_eq!(details.tour_date, "2024-05-20");
    }

    #[test]
    fn patch_deserializes_from_a_partial_form_payload() {
        let patch: BookingDetailsPatch =
            serde_json::from_str(r#"{"email":"a@b.co"}"#).unwrap();
        assert_eq!(patch.email.as_deref(), Some("a@b.co"));
        assert!(patch.name.is_none());
    }
}
