use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use strum::{Display, EnumIter, EnumString};

use crate::id::DbId;

#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum AccountType {
    #[default]
    Savings,
    Checking,
    FixedDeposit,
    CreditCard,
    MoneyMarket,
    BusinessChecking,
}

#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum AccountStatus {
    Active,
    Inactive,
    Closed,
    Suspended,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: DbId,
    pub account_number: String,
    pub account_type: AccountType,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub interest_rate: Decimal,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub credit_limit: Option<Decimal>,
    pub status: AccountStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub customer_id: DbId,
    pub customer_name: String,
    pub created_by_employee_id: DbId,
    pub created_by_employee_name: String,
}

/// Aggregates shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountStats {
    pub count: u64,
    /// Sum of the balances of active accounts
    pub total_balance: Decimal,
    pub by_type: Vec<(AccountType, u64)>,
    pub by_status: Vec<(AccountStatus, u64)>,
}

impl AccountType {
    /// Human friendly name, for example "Fixed Deposit"
    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Savings => "Savings",
            AccountType::Checking => "Checking",
            AccountType::FixedDeposit => "Fixed Deposit",
            AccountType::CreditCard => "Credit Card",
            AccountType::MoneyMarket => "Money Market",
            AccountType::BusinessChecking => "Business Checking",
        }
    }

    /// Returns `true` if the account type is [`CreditCard`].
    ///
    /// [`CreditCard`]: AccountType::CreditCard
    #[must_use]
    pub fn is_credit_card(&self) -> bool {
        matches!(self, Self::CreditCard)
    }
}

impl AccountStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
            AccountStatus::Closed => "Closed",
            AccountStatus::Suspended => "Suspended",
        }
    }
}

/// Sums the balances for display, an empty slice gives zero
pub fn total_balance(accounts: &[Account]) -> Decimal {
    accounts.iter().map(|account| account.balance).sum()
}
