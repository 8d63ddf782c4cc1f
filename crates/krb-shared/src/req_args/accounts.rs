use rust_decimal::Decimal;

use crate::{account::AccountType, errors::ValidationError, id::DbId};

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountReqArgs {
    /// [`DbId::UNSET`] until a customer is chosen
    pub customer_id: DbId,
    pub account_type: AccountType,
    #[serde(with = "rust_decimal::serde::float")]
    pub initial_balance: Decimal,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub credit_limit: Option<Decimal>,
}

impl CreateAccountReqArgs {
    /// Checks what can be checked without the server
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.customer_id.is_unset() {
            return Err(ValidationError::CustomerNotSelected);
        }
        Ok(())
    }

    /// A credit limit only makes sense for credit cards so it is dropped for
    /// other account types
    pub fn normalized(mut self) -> Self {
        if !self.account_type.is_credit_card() {
            self.credit_limit = None;
        }
        self
    }
}
