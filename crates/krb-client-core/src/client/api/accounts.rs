use futures::channel::oneshot;
use krb_shared::{
    account::{Account, AccountStats, AccountStatus, AccountType},
    const_config::path::{
        PATH_ACCOUNT, PATH_ACCOUNTS, PATH_ACCOUNTS_COUNT, PATH_ACCOUNTS_FOR_CUSTOMER,
        PATH_ACCOUNTS_STATS_BY_STATUS, PATH_ACCOUNTS_STATS_BY_TYPE, PATH_ACCOUNTS_TOTAL_BALANCE,
        PATH_ACCOUNT_BALANCE, PATH_ACCOUNT_CREATE, PATH_ACCOUNT_DELETE, PATH_ACCOUNT_STATUS,
    },
    id::DbId,
    req_args::accounts::CreateAccountReqArgs,
};
use rust_decimal::Decimal;

use crate::{
    client::{wait_for, UiCallBack},
    Client, RequestConfig,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_accounts<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Account>>> {
        self.send_request_expect_json(PATH_ACCOUNTS.resolve(), RequestConfig::default(), ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_account<F: UiCallBack>(
        &self,
        id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Account>> {
        self.send_request_expect_json(PATH_ACCOUNT.with_id(id), RequestConfig::default(), ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn accounts_for_customer<F: UiCallBack>(
        &self,
        customer_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Account>>> {
        self.send_request_expect_json(
            PATH_ACCOUNTS_FOR_CUSTOMER.with_id(customer_id),
            RequestConfig::default(),
            ui_notify,
        )
    }

    /// Does not validate `args`, callers are expected to have called
    /// [`CreateAccountReqArgs::validate`] already
    #[tracing::instrument(skip(ui_notify))]
    pub fn create_account<F: UiCallBack>(
        &self,
        args: &CreateAccountReqArgs,
        employee_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Account>> {
        self.send_body_expect_json(
            PATH_ACCOUNT_CREATE.resolve(),
            args,
            RequestConfig::default().with_query("employeeId", employee_id),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_account_status<F: UiCallBack>(
        &self,
        id: DbId,
        status: AccountStatus,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Account>> {
        self.send_request_expect_json(
            PATH_ACCOUNT_STATUS.with_id(id),
            RequestConfig::default().with_query("status", status),
            ui_notify,
        )
    }

    /// Overwrites the balance, no arithmetic is done on the client
    #[tracing::instrument(skip(ui_notify))]
    pub fn update_account_balance<F: UiCallBack>(
        &self,
        id: DbId,
        balance: Decimal,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Account>> {
        self.send_request_expect_json(
            PATH_ACCOUNT_BALANCE.with_id(id),
            RequestConfig::default().with_query("balance", balance),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_account<F: UiCallBack>(
        &self,
        id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            PATH_ACCOUNT_DELETE.with_id(id),
            RequestConfig::default(),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn account_count<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<u64>> {
        self.send_request_expect_json(
            PATH_ACCOUNTS_COUNT.resolve(),
            RequestConfig::default(),
            ui_notify,
        )
    }

    /// Sum of the balances of all active accounts
    #[tracing::instrument(skip(ui_notify))]
    pub fn total_active_balance<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Decimal>> {
        self.send_request_expect_json(
            PATH_ACCOUNTS_TOTAL_BALANCE.resolve(),
            RequestConfig::default(),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn account_count_by_type<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<(AccountType, u64)>>> {
        self.send_request_expect_json(
            PATH_ACCOUNTS_STATS_BY_TYPE.resolve(),
            RequestConfig::default(),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn account_count_by_status<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<(AccountStatus, u64)>>> {
        self.send_request_expect_json(
            PATH_ACCOUNTS_STATS_BY_STATUS.resolve(),
            RequestConfig::default(),
            ui_notify,
        )
    }

    /// Fetches the four stats endpoints concurrently, the first failure is
    /// returned
    #[tracing::instrument]
    pub async fn account_stats(&self) -> anyhow::Result<AccountStats> {
        let count = self.account_count(|| {});
        let total_balance = self.total_active_balance(|| {});
        let by_type = self.account_count_by_type(|| {});
        let by_status = self.account_count_by_status(|| {});
        let (count, total_balance, by_type, by_status) = futures::try_join!(
            wait_for(count),
            wait_for(total_balance),
            wait_for(by_type),
            wait_for(by_status)
        )?;
        Ok(AccountStats {
            count,
            total_balance,
            by_type,
            by_status,
        })
    }
}
