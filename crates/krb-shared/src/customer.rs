use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::{
    account::{total_balance, Account},
    id::DbId,
};

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    pub ssn: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by_employee_id: DbId,
    pub created_by_employee_name: String,
    /// Only filled in by the endpoints that join accounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<Account>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_count: Option<u64>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn accounts(&self) -> &[Account] {
        self.accounts.as_deref().unwrap_or_default()
    }

    /// Client side sum of the joined accounts
    pub fn total_balance(&self) -> Decimal {
        total_balance(self.accounts())
    }
}
