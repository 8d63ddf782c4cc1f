use chrono::NaiveDate;

use crate::customer::Customer;

/// Body for both creating and updating a customer
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub date_of_birth: Option<NaiveDate>,
    pub ssn: String,
}

impl From<&Customer> for CustomerDraft {
    /// Starting point for editing an existing customer
    fn from(value: &Customer) -> Self {
        Self {
            first_name: value.first_name.clone(),
            last_name: value.last_name.clone(),
            email: value.email.clone(),
            phone_number: value.phone_number.clone(),
            address: value.address.clone(),
            date_of_birth: value.date_of_birth,
            ssn: value.ssn.clone(),
        }
    }
}
