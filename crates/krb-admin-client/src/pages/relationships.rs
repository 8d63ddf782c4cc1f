use std::io::{self, Write};

use krb_client_core::{wait_for, Client};
use krb_shared::customer::Customer;
use tracing::warn;

use super::{
    data_state::{AwaitingType, DataState},
    DisplayablePage, Notice,
};
use crate::{
    ui_helpers::{fmt_money, no_cb, write_details, write_heading, Table},
    AppContext,
};

#[derive(Debug, Default)]
pub struct UiRelationships {
    search_term: String,
    customers: DataState<Vec<Customer>>,
    notice: Notice,
}

impl UiRelationships {
    /// A blank `term` shows every customer with their accounts. Otherwise the
    /// matching customers are found first then all their accounts are
    /// fetched at the same time.
    #[tracing::instrument(skip(self, ctx))]
    pub async fn load(&mut self, ctx: &AppContext, term: Option<&str>) -> anyhow::Result<()> {
        Self::authorize(&ctx.session)?;
        let client = &ctx.client;
        self.search_term = term.unwrap_or_default().trim().to_string();
        self.customers.reset();
        if self.search_term.is_empty() {
            self.customers
                .get(|| AwaitingType(client.list_customers_with_accounts(no_cb)));
            self.customers.settle().await;
        } else {
            let found = wait_for(client.search_customers(&self.search_term, no_cb)).await;
            let with_accounts = match found {
                Ok(customers) => Ok(attach_accounts(client, customers).await),
                Err(e) => Err(e),
            };
            self.customers.set_result(with_accounts);
        }
        Ok(())
    }

    pub fn customers(&self) -> &DataState<Vec<Customer>> {
        &self.customers
    }
}

/// A customer whose accounts can not be fetched is shown without accounts
async fn attach_accounts(client: &Client, customers: Vec<Customer>) -> Vec<Customer> {
    let lookups = customers.into_iter().map(|mut customer| async move {
        let accounts = match wait_for(client.accounts_for_customer(customer.id, no_cb)).await {
            Ok(accounts) => accounts,
            Err(e) => {
                warn!(?e, customer_id = ?customer.id, "failed to get accounts for customer");
                Vec::new()
            }
        };
        customer.account_count = Some(accounts.len() as u64);
        customer.accounts = Some(accounts);
        customer
    });
    futures::future::join_all(lookups).await
}

impl DisplayablePage for UiRelationships {
    fn title_base() -> &'static str {
        "Customer Relationships"
    }

    fn show(&self, out: &mut dyn Write) -> io::Result<()> {
        write_heading(out, Self::title_base())?;
        if !self.search_term.is_empty() {
            writeln!(out, "Search: {}", self.search_term)?;
        }
        let customers = match &self.customers {
            DataState::Present(customers) => customers,
            DataState::Failed(e) => return writeln!(out, "Request failed: {e}"),
            DataState::None | DataState::AwaitingResponse(_) => return Ok(()),
        };
        if customers.is_empty() {
            return writeln!(out, "No customers found.");
        }
        for customer in customers {
            writeln!(out)?;
            writeln!(out, "{} (#{})", customer.full_name(), customer.id)?;
            write_details(
                out,
                &[
                    ("Email", customer.email.clone()),
                    ("Phone", customer.phone_number.clone()),
                    ("Accounts", customer.accounts().len().to_string()),
                    ("Total Balance", fmt_money(customer.total_balance())),
                ],
            )?;
            if customer.accounts().is_empty() {
                writeln!(out, "No accounts found for this customer.")?;
                continue;
            }
            let mut table = Table::new(["Number", "Type", "Balance", "Status", "Opened By"]);
            for account in customer.accounts() {
                table.row([
                    account.account_number.clone(),
                    account.account_type.label().to_string(),
                    fmt_money(account.balance),
                    account.status.label().to_string(),
                    account.created_by_employee_name.clone(),
                ]);
            }
            table.write_to(out)?;
        }
        Ok(())
    }

    fn notice(&self) -> &Notice {
        &self.notice
    }

    fn failure(&self) -> Option<&str> {
        self.customers.error()
    }
}
