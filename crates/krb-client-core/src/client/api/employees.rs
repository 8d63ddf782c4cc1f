use futures::channel::oneshot;
use krb_shared::{
    const_config::path::{
        PATH_EMPLOYEE, PATH_EMPLOYEES, PATH_EMPLOYEES_COUNT, PATH_EMPLOYEE_CREATE,
        PATH_EMPLOYEE_DELETE, PATH_EMPLOYEE_UPDATE,
    },
    id::DbId,
    req_args::employees::{EmployeeUpdateReqArgs, NewEmployeeReqArgs},
    uac::Employee,
};
use secrecy::ExposeSecret as _;

use crate::{client::UiCallBack, Client, RequestConfig};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_employees<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Employee>>> {
        self.send_request_expect_json(PATH_EMPLOYEES.resolve(), RequestConfig::default(), ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_employee<F: UiCallBack>(
        &self,
        id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Employee>> {
        self.send_request_expect_json(PATH_EMPLOYEE.with_id(id), RequestConfig::default(), ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn create_employee<F: UiCallBack>(
        &self,
        employee: NewEmployeeReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Employee>> {
        let args = serde_json::json!({
            "username": employee.username,
            "password": employee.password.expose_secret(),
            "firstName": employee.first_name,
            "lastName": employee.last_name,
            "email": employee.email,
            "role": employee.role,
        });
        self.send_request_expect_json(
            PATH_EMPLOYEE_CREATE.resolve(),
            RequestConfig::default().with_body(args),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_employee<F: UiCallBack>(
        &self,
        id: DbId,
        changes: &EmployeeUpdateReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Employee>> {
        self.send_body_expect_json(
            PATH_EMPLOYEE_UPDATE.with_id(id),
            changes,
            RequestConfig::default(),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_employee<F: UiCallBack>(
        &self,
        id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            PATH_EMPLOYEE_DELETE.with_id(id),
            RequestConfig::default(),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn employee_count<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<u64>> {
        self.send_request_expect_json(
            PATH_EMPLOYEES_COUNT.resolve(),
            RequestConfig::default(),
            ui_notify,
        )
    }
}
