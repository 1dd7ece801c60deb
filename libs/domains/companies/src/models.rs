use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Company entity - a legal business entity stored in the `companies`
/// collection.
///
/// Field names on the wire keep the camelCase/initialism forms the API has
/// always exposed (`EIN`, `startDate`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Company {
    /// Unique identifier, assigned at creation and immutable afterwards
    pub id: Uuid,
    /// Legal name
    pub name: String,
    /// Tax id; free-form string, no checksum enforced
    #[serde(rename = "EIN")]
    pub ein: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "stateIncorporated")]
    pub state_incorporated: String,
    #[serde(rename = "contactPersonName")]
    pub contact_person_name: String,
    #[serde(rename = "contactPersonPhNumber")]
    pub contact_person_ph_number: String,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new company.
///
/// Unknown fields are rejected at the boundary rather than silently
/// dropped.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCompany {
    #[validate(length(min = 1, max = 500))]
    pub name: String,
    #[serde(rename = "EIN")]
    #[validate(length(min = 1, max = 50))]
    pub ein: String,
    #[serde(rename = "startDate")]
    #[validate(length(min = 1, max = 50))]
    pub start_date: String,
    #[serde(rename = "stateIncorporated")]
    #[validate(length(min = 1, max = 50))]
    pub state_incorporated: String,
    #[serde(rename = "contactPersonName")]
    #[validate(length(min = 1, max = 200))]
    pub contact_person_name: String,
    #[serde(rename = "contactPersonPhNumber")]
    #[validate(length(min = 1, max = 50))]
    pub contact_person_ph_number: String,
    #[validate(length(min = 1, max = 500))]
    pub address1: String,
    #[validate(length(min = 1, max = 500))]
    pub address2: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub city: String,
    #[validate(length(min = 1, max = 50))]
    pub state: String,
    #[validate(length(min = 1, max = 20))]
    pub zip: String,
}

/// DTO for updating an existing company.
///
/// Every field is optional; present fields replace the stored value, absent
/// fields keep it.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCompany {
    #[validate(length(min = 1, max = 500))]
    pub name: Option<String>,
    #[serde(rename = "EIN")]
    #[validate(length(min = 1, max = 50))]
    pub ein: Option<String>,
    #[serde(rename = "startDate")]
    #[validate(length(min = 1, max = 50))]
    pub start_date: Option<String>,
    #[serde(rename = "stateIncorporated")]
    #[validate(length(min = 1, max = 50))]
    pub state_incorporated: Option<String>,
    #[serde(rename = "contactPersonName")]
    #[validate(length(min = 1, max = 200))]
    pub contact_person_name: Option<String>,
    #[serde(rename = "contactPersonPhNumber")]
    #[validate(length(min = 1, max = 50))]
    pub contact_person_ph_number: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub address1: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub address2: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub state: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub zip: Option<String>,
}

impl Company {
    /// Create a new company from a CreateCompany DTO
    pub fn new(input: CreateCompany) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            ein: input.ein,
            start_date: input.start_date,
            state_incorporated: input.state_incorporated,
            contact_person_name: input.contact_person_name,
            contact_person_ph_number: input.contact_person_ph_number,
            address1: input.address1,
            address2: input.address2,
            city: input.city,
            state: input.state,
            zip: input.zip,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from an UpdateCompany DTO
    pub fn apply_update(&mut self, update: UpdateCompany) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(ein) = update.ein {
            self.ein = ein;
        }
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
        if let Some(state_incorporated) = update.state_incorporated {
            self.state_incorporated = state_incorporated;
        }
        if let Some(contact_person_name) = update.contact_person_name {
            self.contact_person_name = contact_person_name;
        }
        if let Some(contact_person_ph_number) = update.contact_person_ph_number {
            self.contact_person_ph_number = contact_person_ph_number;
        }
        if let Some(address1) = update.address1 {
            self.address1 = address1;
        }
        if let Some(address2) = update.address2 {
            self.address2 = Some(address2);
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(state) = update.state {
            self.state = state;
        }
        if let Some(zip) = update.zip {
            self.zip = zip;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn create_input() -> CreateCompany {
        CreateCompany {
            name: "Acme".to_string(),
            ein: "12-3456789".to_string(),
            start_date: "2024-01-01".to_string(),
            state_incorporated: "CA".to_string(),
            contact_person_name: "John Doe".to_string(),
            contact_person_ph_number: "555-1234".to_string(),
            address1: "123 Main St".to_string(),
            address2: None,
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip: "94105".to_string(),
        }
    }

    #[test]
    fn test_new_assigns_id_and_timestamps() {
        let company = Company::new(create_input());
        assert!(!company.id.is_nil());
        assert_eq!(company.created_at, company.updated_at);
        assert_eq!(company.name, "Acme");
    }

    #[test]
    fn test_wire_field_names() {
        let company = Company::new(create_input());
        let json = serde_json::to_value(&company).unwrap();
        assert_eq!(json["EIN"], "12-3456789");
        assert_eq!(json["startDate"], "2024-01-01");
        assert_eq!(json["contactPersonPhNumber"], "555-1234");
        assert!(json.get("ein").is_none());
    }

    #[test]
    fn test_apply_update_changes_only_present_fields() {
        let mut company = Company::new(create_input());
        let created_at = company.created_at;

        company.apply_update(UpdateCompany {
            name: Some("Acme Holdings".to_string()),
            zip: Some("94107".to_string()),
            ..Default::default()
        });

        assert_eq!(company.name, "Acme Holdings");
        assert_eq!(company.zip, "94107");
        assert_eq!(company.ein, "12-3456789");
        assert_eq!(company.created_at, created_at);
        assert!(company.updated_at >= created_at);
    }

    #[test]
    fn test_empty_update_keeps_all_fields() {
        let mut company = Company::new(create_input());
        let before = company.clone();

        company.apply_update(UpdateCompany::default());

        assert_eq!(company.name, before.name);
        assert_eq!(company.address2, before.address2);
        assert_eq!(company.created_at, before.created_at);
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let input = CreateCompany {
            name: String::new(),
            ..create_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_rejects_unknown_fields() {
        let result: Result<CreateCompany, _> = serde_json::from_value(serde_json::json!({
            "name": "Acme",
            "EIN": "12-3456789",
            "startDate": "2024-01-01",
            "stateIncorporated": "CA",
            "contactPersonName": "John Doe",
            "contactPersonPhNumber": "555-1234",
            "address1": "123 Main St",
            "city": "San Francisco",
            "state": "CA",
            "zip": "94105",
            "surprise": true
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_rejects_empty_present_field() {
        let update = UpdateCompany {
            zip: Some(String::new()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
