use crate::post::{Draft, Location, NewPost};

pub const TITLE_MAX: usize = 300;
pub const BODY_MAX: usize = 5000;

pub(crate) const TITLE_REQUIRED: &str = "Title is required";
const TITLE_TOO_LONG: &str = "Title must be less than 300 characters";
const BODY_TOO_LONG: &str = "Description must be less than 5000 characters";
const LOCATION_UNKNOWN: &str = "Location must be one of the listed options";

/// One message per offending field, collected in a single pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub body: Option<String>,
    pub location: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.location.is_none()
    }

    pub(crate) fn title_required() -> Self {
        Self {
            title: Some(TITLE_REQUIRED.to_string()),
            ..Self::default()
        }
    }

    /// (field name, message) pairs for flat rendering.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("title", &self.title),
            ("body", &self.body),
            ("location", &self.location),
        ]
        .into_iter()
        .filter_map(|(name, message)| message.as_deref().map(|m| (name, m)))
    }
}

/// Check a draft against the field constraints and either normalize
/// it into a record ready for persistence or report every violation.
pub fn validate(draft: &Draft) -> Result<NewPost, FieldErrors> {
    let mut errors = FieldErrors::default();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.title = Some(TITLE_REQUIRED.to_string());
    } else if title.chars().count() > TITLE_MAX {
        errors.title = Some(TITLE_TOO_LONG.to_string());
    }

    if draft.body.chars().count() > BODY_MAX {
        errors.body = Some(BODY_TOO_LONG.to_string());
    }

    // The UI select restricts the value, but nothing stops another
    // caller from handing us an arbitrary string, so the enumerated
    // set is enforced here as well.
    let location = match draft.location.trim() {
        "" => None,
        raw => match raw.parse::<Location>() {
            Ok(location) => Some(location),
            Err(()) => {
                errors.location = Some(LOCATION_UNKNOWN.to_string());
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewPost {
        title: title.to_string(),
        body: (!draft.body.is_empty()).then(|| draft.body.clone()),
        location,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, body: &str, location: &str) -> Draft {
        Draft {
            title: title.to_string(),
            body: body.to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn blank_title_is_required() {
        for title in ["", "   ", "\t\n"] {
            let errors = validate(&draft(title, "", "")).unwrap_err();
            assert_eq!(errors.title.as_deref(), Some(TITLE_REQUIRED));
            assert!(errors.body.is_none());
            assert!(errors.location.is_none());
        }
    }

    #[test]
    fn overlong_fields_are_rejected() {
        let errors = validate(&draft(&"x".repeat(301), "", "")).unwrap_err();
        assert_eq!(errors.title.as_deref(), Some(TITLE_TOO_LONG));

        let errors = validate(&draft("ok", &"y".repeat(5001), "")).unwrap_err();
        assert_eq!(errors.body.as_deref(), Some(BODY_TOO_LONG));
    }

    #[test]
    fn boundary_lengths_pass() {
        let record = validate(&draft(&"x".repeat(300), &"y".repeat(5000), "")).unwrap();
        assert_eq!(record.title.chars().count(), 300);
        assert_eq!(record.body.as_deref().map(str::len), Some(5000));
    }

    #[test]
    fn all_violations_are_collected_together() {
        let errors = validate(&draft("", &"y".repeat(5001), "the moon")).unwrap_err();
        assert_eq!(errors.title.as_deref(), Some(TITLE_REQUIRED));
        assert_eq!(errors.body.as_deref(), Some(BODY_TOO_LONG));
        assert_eq!(errors.location.as_deref(), Some(LOCATION_UNKNOWN));
        assert_eq!(errors.iter().count(), 3);
    }

    #[test]
    fn title_is_trimmed_and_empty_optionals_normalize_to_none() {
        let record = validate(&draft("  Free pizza  ", "", "")).unwrap();
        assert_eq!(record.title, "Free pizza");
        assert_eq!(record.body, None);
        assert_eq!(record.location, None);
    }

    #[test]
    fn known_locations_normalize_to_the_enum() {
        let record = validate(&draft("hi", "come by", "memorial glade")).unwrap();
        assert_eq!(record.location, Some(Location::MemorialGlade));
        assert_eq!(record.body.as_deref(), Some("come by"));
    }

    #[test]
    fn unknown_location_is_a_field_error() {
        let errors = validate(&draft("hi", "", "dwinelle")).unwrap_err();
        assert_eq!(errors.location.as_deref(), Some(LOCATION_UNKNOWN));
    }
}
