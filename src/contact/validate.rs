use serde::Serialize;

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceInterest {
    WebDevelopment,
    MobileDevelopment,
    CloudSolutions,
    DataServices,
    UiUxDesign,
    Other,
}

impl ServiceInterest {
    pub const ALL: [ServiceInterest; 6] = [
        ServiceInterest::WebDevelopment,
        ServiceInterest::MobileDevelopment,
        ServiceInterest::CloudSolutions,
        ServiceInterest::DataServices,
        ServiceInterest::UiUxDesign,
        ServiceInterest::Other,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            ServiceInterest::WebDevelopment => "web-development",
            ServiceInterest::MobileDevelopment => "mobile-development",
            ServiceInterest::CloudSolutions => "cloud-solutions",
            ServiceInterest::DataServices => "data-services",
            ServiceInterest::UiUxDesign => "ui-ux-design",
            ServiceInterest::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceInterest::WebDevelopment => "Web Development",
            ServiceInterest::MobileDevelopment => "Mobile Development",
            ServiceInterest::CloudSolutions => "Cloud Solutions",
            ServiceInterest::DataServices => "Data Services",
            ServiceInterest::UiUxDesign => "UI/UX Design",
            ServiceInterest::Other => "Other",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        ServiceInterest::ALL
            .into_iter()
            .find(|interest| interest.wire_name() == value)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub service_interest: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

pub fn validate(fields: &ContactFields) -> FieldErrors {
    FieldErrors {
        name: (fields.name.chars().count() < 2).then_some("Name must be at least 2 characters"),
        email: (!is_valid_email(&fields.email)).then_some("Please enter a valid email address"),
        subject: (fields.subject.chars().count() < 5)
            .then_some("Subject must be at least 5 characters"),
        message: (fields.message.chars().count() < 10)
            .then_some("Message must be at least 10 characters"),
    }
}

// user@domain.tld shape: one @, non-empty user, dotted domain, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (local, domain) = match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

// The shape a real backend would receive; the submit path serializes this
// where the POST would go.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_interest: Option<ServiceInterest>,
}

impl From<&ContactFields> for ContactRequest {
    fn from(fields: &ContactFields) -> Self {
        ContactRequest {
            name: fields.name.clone(),
            email: fields.email.clone(),
            phone: (!fields.phone.is_empty()).then(|| fields.phone.clone()),
            subject: fields.subject.clone(),
            message: fields.message.clone(),
            service_interest: ServiceInterest::from_wire(&fields.service_interest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{validate, ContactFields, ContactRequest, ServiceInterest};

    fn valid_fields() -> ContactFields {
        ContactFields {
            name: "Priya Raman".into(),
            email: "priya@example.com".into(),
            phone: String::new(),
            subject: "Project inquiry".into(),
            message: "We need help rebuilding our storefront.".into(),
            service_interest: String::new(),
        }
    }

    #[test]
    fn a_fully_valid_payload_passes() {
        assert!(validate(&valid_fields()).is_empty());
    }

    #[test]
    fn boundary_name_passes_while_email_subject_and_message_fail() {
        let fields = ContactFields {
            name: "Al".into(),
            email: "bad".into(),
            subject: "Hi".into(),
            message: "short".into(),
            ..ContactFields::default()
        };
        let errors = validate(&fields);
        assert_eq!(errors.name, None);
        assert_eq!(errors.email, Some("Please enter a valid email address"));
        assert_eq!(errors.subject, Some("Subject must be at least 5 characters"));
        assert_eq!(errors.message, Some("Message must be at least 10 characters"));
        assert!(!errors.is_empty());
    }

    #[test]
    fn one_character_names_are_rejected() {
        let mut fields = valid_fields();
        fields.name = "A".into();
        assert_eq!(
            validate(&fields).name,
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn subject_and_message_pass_exactly_at_their_boundaries() {
        let mut fields = valid_fields();
        fields.subject = "Hello".into();
        fields.message = "Just right".into();
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn email_needs_a_user_an_at_sign_and_a_dotted_domain() {
        let mut fields = valid_fields();
        let rejected = [
            "plain",
            "@nouser.com",
            "user@",
            "user@nodot",
            "user@@double.com",
            "user name@example.com",
            "user@domain..com",
        ];
        for bad in rejected {
            fields.email = bad.into();
            assert!(validate(&fields).email.is_some(), "{bad} should fail");
        }
        for good in ["a@b.co", "first.last@sub.example.org"] {
            fields.email = good.into();
            assert!(validate(&fields).email.is_none(), "{good} should pass");
        }
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let request = ContactRequest::from(&valid_fields());
        assert_eq!(request.phone, None);
        assert_eq!(request.service_interest, None);
    }

    #[test]
    fn the_wire_payload_uses_camel_case_and_kebab_interests() {
        let mut fields = valid_fields();
        fields.phone = "+1 (234) 567-890".into();
        fields.service_interest = "ui-ux-design".into();
        let json = serde_json::to_string(&ContactRequest::from(&fields)).unwrap();
        assert!(json.contains("\"serviceInterest\":\"ui-ux-design\""));
        assert!(json.contains("\"phone\":\"+1 (234) 567-890\""));
    }

    #[test]
    fn unknown_interest_values_are_dropped() {
        let mut fields = valid_fields();
        fields.service_interest = "quantum".into();
        assert_eq!(ContactRequest::from(&fields).service_interest, None);
    }

    #[test]
    fn every_interest_round_trips_through_its_wire_name() {
        for interest in ServiceInterest::ALL {
            assert_eq!(ServiceInterest::from_wire(interest.wire_name()), Some(interest));
        }
    }
}
