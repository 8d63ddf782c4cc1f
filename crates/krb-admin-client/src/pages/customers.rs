use std::io::{self, Write};

use krb_client_core::wait_for;
use krb_shared::{customer::Customer, id::DbId, req_args::customers::CustomerDraft};
use tracing::info;

use super::{
    data_state::{AwaitingType, DataState},
    notice_failure, DisplayablePage, Notice, OpResult,
};
use crate::{
    confirm::Confirm,
    ui_helpers::{no_cb, write_details, write_heading, Table},
    AppContext,
};

#[derive(Debug, Default)]
pub struct UiCustomers {
    search_term: String,
    customers: DataState<Vec<Customer>>,
    selected: DataState<Customer>,
    notice: Notice,
}

impl UiCustomers {
    /// Lists the customers matching the current search term (all of them if
    /// the term is blank)
    #[tracing::instrument(skip(self, ctx))]
    pub async fn load(&mut self, ctx: &AppContext) -> anyhow::Result<()> {
        Self::authorize(&ctx.session)?;
        let client = &ctx.client;
        let term = self.search_term.trim();
        self.customers.reset();
        if term.is_empty() {
            self.customers
                .get(|| AwaitingType(client.list_customers(no_cb)));
        } else {
            self.customers
                .get(|| AwaitingType(client.search_customers(term, no_cb)));
        }
        self.customers.settle().await;
        Ok(())
    }

    pub async fn search(&mut self, ctx: &AppContext, term: &str) -> anyhow::Result<()> {
        self.search_term = term.to_string();
        self.load(ctx).await
    }

    #[tracing::instrument(skip(self, ctx))]
    pub async fn select(&mut self, ctx: &AppContext, id: DbId) -> anyhow::Result<()> {
        Self::authorize(&ctx.session)?;
        self.selected.reset();
        self.selected
            .get(|| AwaitingType(ctx.client.get_customer(id, no_cb)));
        self.selected.settle().await;
        Ok(())
    }

    /// Records the logged in employee as the creator
    #[tracing::instrument(skip(self, ctx))]
    pub async fn create(
        &mut self,
        ctx: &AppContext,
        draft: CustomerDraft,
    ) -> anyhow::Result<OpResult> {
        let identity = Self::authorize(&ctx.session)?;
        let outcome =
            wait_for(ctx.client.create_customer(&draft, identity.id, no_cb)).await;
        Ok(match outcome {
            Ok(customer) => {
                info!(id = ?customer.id, "customer created");
                self.notice = Notice::Success("Customer created successfully".to_string());
                self.selected.set_result(Ok(customer));
                OpResult::Reload
            }
            Err(e) => {
                self.notice = Notice::Error(e.to_string());
                OpResult::NoAction
            }
        })
    }

    /// Starts from the stored customer so only the fields in `apply` change
    #[tracing::instrument(skip(self, ctx, apply))]
    pub async fn update<F>(
        &mut self,
        ctx: &AppContext,
        id: DbId,
        apply: F,
    ) -> anyhow::Result<OpResult>
    where
        F: FnOnce(&mut CustomerDraft),
    {
        self.select(ctx, id).await?;
        let existing = match &self.selected {
            DataState::Present(customer) => customer,
            // The lookup error is already kept in `selected`
            DataState::Failed(_) | DataState::None | DataState::AwaitingResponse(_) => {
                return Ok(OpResult::NoAction)
            }
        };
        let mut draft = CustomerDraft::from(existing);
        apply(&mut draft);
        let outcome = wait_for(ctx.client.update_customer(id, &draft, no_cb)).await;
        Ok(match outcome {
            Ok(customer) => {
                self.notice = Notice::Success("Customer updated successfully".to_string());
                self.selected.set_result(Ok(customer));
                OpResult::Reload
            }
            Err(e) => {
                self.notice = Notice::Error(e.to_string());
                OpResult::NoAction
            }
        })
    }

    #[tracing::instrument(skip(self, ctx, confirm))]
    pub async fn delete(
        &mut self,
        ctx: &AppContext,
        id: DbId,
        confirm: &mut dyn Confirm,
    ) -> anyhow::Result<OpResult> {
        Self::authorize(&ctx.session)?;
        if !confirm.confirm("Are you sure you want to delete this customer?")? {
            info!("delete cancelled");
            return Ok(OpResult::NoAction);
        }
        let outcome = wait_for(ctx.client.delete_customer(id, no_cb)).await;
        Ok(match outcome {
            Ok(()) => {
                self.notice = Notice::Success("Customer deleted successfully".to_string());
                self.selected.reset();
                OpResult::Reload
            }
            Err(e) => {
                self.notice = Notice::Error(format!("Failed to delete customer: {e}"));
                OpResult::NoAction
            }
        })
    }

    pub fn customers(&self) -> &DataState<Vec<Customer>> {
        &self.customers
    }

    pub fn selected(&self) -> &DataState<Customer> {
        &self.selected
    }
}

impl DisplayablePage for UiCustomers {
    fn title_base() -> &'static str {
        "Customer Management"
    }

    fn show(&self, out: &mut dyn Write) -> io::Result<()> {
        write_heading(out, Self::title_base())?;
        self.notice.write_to(out)?;

        match &self.selected {
            DataState::Present(customer) => write_customer(out, customer)?,
            DataState::Failed(e) => writeln!(out, "Request failed: {e}")?,
            DataState::None | DataState::AwaitingResponse(_) => {}
        }

        match &self.customers {
            DataState::Present(customers) => {
                if !self.search_term.trim().is_empty() {
                    writeln!(out, "Search: {}", self.search_term.trim())?;
                }
                writeln!(out, "Customers ({})", customers.len())?;
                let mut table = Table::new(["ID", "Name", "Email", "Phone", "Created By"]);
                for customer in customers {
                    table.row([
                        customer.id.to_string(),
                        customer.full_name(),
                        customer.email.clone(),
                        customer.phone_number.clone(),
                        customer.created_by_employee_name.clone(),
                    ]);
                }
                table.write_to(out)?;
            }
            DataState::Failed(e) => writeln!(out, "Request failed: {e}")?,
            DataState::None | DataState::AwaitingResponse(_) => {}
        }
        Ok(())
    }

    fn notice(&self) -> &Notice {
        &self.notice
    }

    fn failure(&self) -> Option<&str> {
        notice_failure(&self.notice)
            .or(self.customers.error())
            .or(self.selected.error())
    }
}

fn write_customer(out: &mut dyn Write, customer: &Customer) -> io::Result<()> {
    write_details(
        out,
        &[
            ("Id", customer.id.to_string()),
            ("Name", customer.full_name()),
            ("Email", customer.email.clone()),
            ("Phone", customer.phone_number.clone()),
            ("Address", customer.address.clone()),
            (
                "Date of Birth",
                customer
                    .date_of_birth
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            ),
            ("SSN", customer.ssn.clone()),
            ("Created By", customer.created_by_employee_name.clone()),
            ("Created At", customer.created_at.to_string()),
        ],
    )?;
    writeln!(out)
}
