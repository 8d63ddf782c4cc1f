use std::io::{self, Write};

use krb_client_core::wait_for;
use krb_shared::{
    account::{Account, AccountStatus},
    customer::Customer,
    id::DbId,
    req_args::accounts::CreateAccountReqArgs,
};
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::{
    data_state::{AwaitingType, DataState},
    notice_failure, DisplayablePage, Notice, OpResult,
};
use crate::{
    confirm::Confirm,
    ui_helpers::{fmt_money, no_cb, write_details, write_heading, Table},
    AppContext,
};

#[derive(Debug, Default)]
pub struct UiAccounts {
    /// Set when only the accounts of one customer are listed
    customer_filter: Option<DbId>,
    accounts: DataState<Vec<Account>>,
    /// Choices for the owner of a new account
    customers: DataState<Vec<Customer>>,
    selected: DataState<Account>,
    notice: Notice,
}

impl UiAccounts {
    /// Fetches the accounts and the customers at the same time
    #[tracing::instrument(skip(self, ctx))]
    pub async fn load(&mut self, ctx: &AppContext) -> anyhow::Result<()> {
        Self::authorize(&ctx.session)?;
        let client = &ctx.client;
        self.accounts.reset();
        self.customers.reset();
        match self.customer_filter {
            Some(customer_id) => self
                .accounts
                .get(|| AwaitingType(client.accounts_for_customer(customer_id, no_cb))),
            None => self
                .accounts
                .get(|| AwaitingType(client.list_accounts(no_cb))),
        }
        self.customers
            .get(|| AwaitingType(client.list_customers(no_cb)));
        futures::join!(self.accounts.settle(), self.customers.settle());
        Ok(())
    }

    pub async fn load_for_customer(
        &mut self,
        ctx: &AppContext,
        customer_id: DbId,
    ) -> anyhow::Result<()> {
        self.customer_filter = Some(customer_id);
        self.load(ctx).await
    }

    #[tracing::instrument(skip(self, ctx))]
    pub async fn select(&mut self, ctx: &AppContext, id: DbId) -> anyhow::Result<()> {
        Self::authorize(&ctx.session)?;
        self.selected.reset();
        self.selected
            .get(|| AwaitingType(ctx.client.get_account(id, no_cb)));
        self.selected.settle().await;
        Ok(())
    }

    /// Nothing is sent if the form is not valid
    #[tracing::instrument(skip(self, ctx))]
    pub async fn create(
        &mut self,
        ctx: &AppContext,
        args: CreateAccountReqArgs,
    ) -> anyhow::Result<OpResult> {
        let identity = Self::authorize(&ctx.session)?;
        if let Err(e) = args.validate() {
            warn!(?e, "account form rejected");
            self.notice = Notice::Error(e.to_string());
            return Ok(OpResult::NoAction);
        }
        let args = args.normalized();
        let outcome = wait_for(ctx.client.create_account(&args, identity.id, no_cb)).await;
        Ok(match outcome {
            Ok(account) => {
                info!(account_number = %account.account_number, "account created");
                self.notice = Notice::Success("Account created successfully".to_string());
                self.selected.set_result(Ok(account));
                OpResult::Reload
            }
            Err(e) => {
                self.notice = Notice::Error(e.to_string());
                OpResult::NoAction
            }
        })
    }

    #[tracing::instrument(skip(self, ctx))]
    pub async fn set_status(
        &mut self,
        ctx: &AppContext,
        id: DbId,
        status: AccountStatus,
    ) -> anyhow::Result<OpResult> {
        Self::authorize(&ctx.session)?;
        let outcome = wait_for(ctx.client.update_account_status(id, status, no_cb)).await;
        Ok(self.after_update(
            outcome,
            "Account status updated successfully",
            "Failed to update account status",
        ))
    }

    /// Replaces the balance, it is not added to the current one
    #[tracing::instrument(skip(self, ctx))]
    pub async fn set_balance(
        &mut self,
        ctx: &AppContext,
        id: DbId,
        balance: Decimal,
    ) -> anyhow::Result<OpResult> {
        Self::authorize(&ctx.session)?;
        let outcome = wait_for(ctx.client.update_account_balance(id, balance, no_cb)).await;
        Ok(self.after_update(
            outcome,
            "Account balance updated successfully",
            "Failed to update account balance",
        ))
    }

    #[tracing::instrument(skip(self, ctx, confirm))]
    pub async fn delete(
        &mut self,
        ctx: &AppContext,
        id: DbId,
        confirm: &mut dyn Confirm,
    ) -> anyhow::Result<OpResult> {
        Self::authorize(&ctx.session)?;
        if !confirm.confirm("Are you sure you want to delete this account?")? {
            info!("delete cancelled");
            return Ok(OpResult::NoAction);
        }
        let outcome = wait_for(ctx.client.delete_account(id, no_cb)).await;
        Ok(match outcome {
            Ok(()) => {
                self.notice = Notice::Success("Account deleted successfully".to_string());
                self.selected.reset();
                OpResult::Reload
            }
            Err(e) => {
                self.notice = Notice::Error(format!("Failed to delete account: {e}"));
                OpResult::NoAction
            }
        })
    }

    fn after_update(
        &mut self,
        outcome: anyhow::Result<Account>,
        success_msg: &str,
        failure_msg: &str,
    ) -> OpResult {
        match outcome {
            Ok(account) => {
                self.notice = Notice::Success(success_msg.to_string());
                self.selected.set_result(Ok(account));
                OpResult::Reload
            }
            Err(e) => {
                self.notice = Notice::Error(format!("{failure_msg}: {e}"));
                OpResult::NoAction
            }
        }
    }

    pub fn accounts(&self) -> &DataState<Vec<Account>> {
        &self.accounts
    }

    pub fn customers(&self) -> &DataState<Vec<Customer>> {
        &self.customers
    }

    pub fn selected(&self) -> &DataState<Account> {
        &self.selected
    }
}

impl DisplayablePage for UiAccounts {
    fn title_base() -> &'static str {
        "Account Management"
    }

    fn show(&self, out: &mut dyn Write) -> io::Result<()> {
        write_heading(out, Self::title_base())?;
        self.notice.write_to(out)?;

        match &self.selected {
            DataState::Present(account) => write_account(out, account)?,
            DataState::Failed(e) => writeln!(out, "Request failed: {e}")?,
            DataState::None | DataState::AwaitingResponse(_) => {}
        }

        match &self.accounts {
            DataState::Present(accounts) => {
                writeln!(out, "Accounts ({})", accounts.len())?;
                let mut table = Table::new([
                    "ID", "Number", "Customer", "Type", "Balance", "Status", "Rate",
                ]);
                for account in accounts {
                    table.row([
                        account.id.to_string(),
                        account.account_number.clone(),
                        account.customer_name.clone(),
                        account.account_type.label().to_string(),
                        fmt_money(account.balance),
                        account.status.label().to_string(),
                        format!("{}%", account.interest_rate),
                    ]);
                }
                table.write_to(out)?;
            }
            DataState::Failed(e) => writeln!(out, "Request failed: {e}")?,
            DataState::None | DataState::AwaitingResponse(_) => {}
        }

        if let DataState::Failed(e) = &self.customers {
            writeln!(out, "Customers could not be loaded: {e}")?;
        }
        Ok(())
    }

    fn notice(&self) -> &Notice {
        &self.notice
    }

    fn failure(&self) -> Option<&str> {
        notice_failure(&self.notice)
            .or(self.accounts.error())
            .or(self.selected.error())
    }
}

fn write_account(out: &mut dyn Write, account: &Account) -> io::Result<()> {
    let mut fields = vec![
        ("Id", account.id.to_string()),
        ("Number", account.account_number.clone()),
        ("Customer", account.customer_name.clone()),
        ("Type", account.account_type.label().to_string()),
        ("Balance", fmt_money(account.balance)),
        ("Interest Rate", format!("{}%", account.interest_rate)),
        ("Status", account.status.label().to_string()),
        ("Created By", account.created_by_employee_name.clone()),
        ("Created At", account.created_at.to_string()),
    ];
    if let Some(limit) = account.credit_limit {
        fields.insert(5, ("Credit Limit", fmt_money(limit)));
    }
    write_details(out, &fields)?;
    writeln!(out)
}
