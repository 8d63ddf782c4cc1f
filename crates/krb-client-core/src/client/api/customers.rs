use futures::channel::oneshot;
use krb_shared::{
    const_config::path::{
        PATH_CUSTOMER, PATH_CUSTOMERS, PATH_CUSTOMERS_COUNT, PATH_CUSTOMERS_SEARCH,
        PATH_CUSTOMERS_WITH_ACCOUNTS, PATH_CUSTOMER_CREATE, PATH_CUSTOMER_DELETE,
        PATH_CUSTOMER_UPDATE,
    },
    customer::Customer,
    id::DbId,
    req_args::customers::CustomerDraft,
};

use crate::{client::UiCallBack, Client, RequestConfig};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_customers<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Customer>>> {
        self.send_request_expect_json(PATH_CUSTOMERS.resolve(), RequestConfig::default(), ui_notify)
    }

    /// Customers with their `accounts` filled in
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_customers_with_accounts<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Customer>>> {
        self.send_request_expect_json(
            PATH_CUSTOMERS_WITH_ACCOUNTS.resolve(),
            RequestConfig::default(),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_customer<F: UiCallBack>(
        &self,
        id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Customer>> {
        self.send_request_expect_json(PATH_CUSTOMER.with_id(id), RequestConfig::default(), ui_notify)
    }

    /// Server side substring search on first name, last name and email
    #[tracing::instrument(skip(ui_notify))]
    pub fn search_customers<F: UiCallBack>(
        &self,
        term: &str,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Customer>>> {
        self.send_request_expect_json(
            PATH_CUSTOMERS_SEARCH.resolve(),
            RequestConfig::default().with_query("term", term),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn create_customer<F: UiCallBack>(
        &self,
        customer: &CustomerDraft,
        employee_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Customer>> {
        self.send_body_expect_json(
            PATH_CUSTOMER_CREATE.resolve(),
            customer,
            RequestConfig::default().with_query("employeeId", employee_id),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_customer<F: UiCallBack>(
        &self,
        id: DbId,
        customer: &CustomerDraft,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Customer>> {
        self.send_body_expect_json(
            PATH_CUSTOMER_UPDATE.with_id(id),
            customer,
            RequestConfig::default(),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_customer<F: UiCallBack>(
        &self,
        id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            PATH_CUSTOMER_DELETE.with_id(id),
            RequestConfig::default(),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn customer_count<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<u64>> {
        self.send_request_expect_json(
            PATH_CUSTOMERS_COUNT.resolve(),
            RequestConfig::default(),
            ui_notify,
        )
    }
}
