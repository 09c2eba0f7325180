use serde::{Deserialize, Serialize};

/// A customer record as the backend stores it.
///
/// Every field is optional: the backend owns presence, and a DELETE echo is
/// usually an empty object. Ids may arrive as numbers and are kept as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(
        default,
        deserialize_with = "super::scalar::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(
        default,
        deserialize_with = "super::scalar::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "super::scalar::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,

    #[serde(
        default,
        deserialize_with = "super::scalar::int",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<i32>,

    #[serde(
        default,
        deserialize_with = "super::scalar::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub company_id: Option<String>,
}

/// Body of `POST /customers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Body of `PATCH /customers/{id}`. Unset fields are left out of the JSON so
/// the backend keeps their current values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerPatch {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl CustomerPatch {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
            age: None,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn with_age(mut self, age: Option<i32>) -> Self {
        self.age = age;
        self
    }
}
