use std::io::{self, Write};

use krb_client_core::wait_for;
use krb_shared::{
    id::DbId,
    req_args::employees::{EmployeeUpdateReqArgs, NewEmployeeReqArgs},
    uac::{Employee, Role},
};
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

/// Employee administration, only for administrators
#[derive(Debug, Default)]
pub struct UiEmployees {
    employees: DataState<Vec<Employee>>,
    selected: DataState<Employee>,
    notice: Notice,
}

impl UiEmployees {
    #[tracing::instrument(skip(self, ctx))]
    pub async fn load(&mut self, ctx: &AppContext) -> anyhow::Result<()> {
        Self::authorize(&ctx.session)?;
        self.employees.reset();
        self.employees
            .get(|| AwaitingType(ctx.client.list_employees(no_cb)));
        self.employees.settle().await;
        Ok(())
    }

    #[tracing::instrument(skip(self, ctx))]
    pub async fn select(&mut self, ctx: &AppContext, id: DbId) -> anyhow::Result<()> {
        Self::authorize(&ctx.session)?;
        self.selected.reset();
        self.selected
            .get(|| AwaitingType(ctx.client.get_employee(id, no_cb)));
        self.selected.settle().await;
        Ok(())
    }

    #[tracing::instrument(skip(self, ctx))]
    pub async fn create(
        &mut self,
        ctx: &AppContext,
        args: NewEmployeeReqArgs,
    ) -> anyhow::Result<OpResult> {
        Self::authorize(&ctx.session)?;
        let outcome = wait_for(ctx.client.create_employee(args, no_cb)).await;
        Ok(self.after_save(outcome, "Employee created successfully"))
    }

    /// Only names, email and role can be changed
    #[tracing::instrument(skip(self, ctx, apply))]
    pub async fn update<F>(
        &mut self,
        ctx: &AppContext,
        id: DbId,
        apply: F,
    ) -> anyhow::Result<OpResult>
    where
        F: FnOnce(&mut EmployeeUpdateReqArgs),
    {
        self.select(ctx, id).await?;
        let mut changes = match &self.selected {
            DataState::Present(employee) => EmployeeUpdateReqArgs {
                first_name: employee.first_name.clone(),
                last_name: employee.last_name.clone(),
                email: employee.email.clone(),
                role: employee.role,
            },
            // The lookup error is already kept in `selected`
            DataState::Failed(_) | DataState::None | DataState::AwaitingResponse(_) => {
                return Ok(OpResult::NoAction)
            }
        };
        apply(&mut changes);
        let outcome = wait_for(ctx.client.update_employee(id, &changes, no_cb)).await;
        Ok(self.after_save(outcome, "Employee updated successfully"))
    }

    #[tracing::instrument(skip(self, ctx, confirm))]
    pub async fn delete(
        &mut self,
        ctx: &AppContext,
        id: DbId,
        confirm: &mut dyn Confirm,
    ) -> anyhow::Result<OpResult> {
        Self::authorize(&ctx.session)?;
        if !confirm.confirm("Are you sure you want to delete this employee?")? {
            info!("delete cancelled");
            return Ok(OpResult::NoAction);
        }
        let outcome = wait_for(ctx.client.delete_employee(id, no_cb)).await;
        Ok(match outcome {
            Ok(()) => {
                self.notice = Notice::Success("Employee deleted successfully".to_string());
                self.selected.reset();
                OpResult::Reload
            }
            Err(e) => {
                self.notice = Notice::Error(format!("Failed to delete employee: {e}"));
                OpResult::NoAction
            }
        })
    }

    fn after_save(&mut self, outcome: anyhow::Result<Employee>, success_msg: &str) -> OpResult {
        match outcome {
            Ok(employee) => {
                info!(username = %employee.username, "employee saved");
                self.notice = Notice::Success(success_msg.to_string());
                self.selected.set_result(Ok(employee));
                OpResult::Reload
            }
            Err(e) => {
                self.notice = Notice::Error(e.to_string());
                OpResult::NoAction
            }
        }
    }

    pub fn employees(&self) -> &DataState<Vec<Employee>> {
        &self.employees
    }

    /// Number of employees with `role` in the loaded list
    pub fn count_with_role(&self, role: Role) -> usize {
        self.employees
            .present()
            .map(|employees| employees.iter().filter(|e| e.role == role).count())
            .unwrap_or_default()
    }
}

impl DisplayablePage for UiEmployees {
    fn title_base() -> &'static str {
        "Employee Administration"
    }

    fn required_role() -> Option<Role> {
        Some(Role::Admin)
    }

    fn show(&self, out: &mut dyn Write) -> io::Result<()> {
        write_heading(out, Self::title_base())?;
        self.notice.write_to(out)?;

        match &self.selected {
            DataState::Present(employee) => {
                write_details(
                    out,
                    &[
                        ("Id", employee.id.to_string()),
                        ("Username", employee.username.to_string()),
                        ("Name", employee.full_name()),
                        ("Email", employee.email.clone()),
                        ("Role", employee.role.to_string()),
                        ("Created At", employee.created_at.to_string()),
                    ],
                )?;
                writeln!(out)?;
            }
            DataState::Failed(e) => writeln!(out, "Request failed: {e}")?,
            DataState::None | DataState::AwaitingResponse(_) => {}
        }

        match &self.employees {
            DataState::Present(employees) => {
                write_details(
                    out,
                    &[
                        ("Total Employees", employees.len().to_string()),
                        ("Administrators", self.count_with_role(Role::Admin).to_string()),
                        ("Regular Employees", self.count_with_role(Role::Employee).to_string()),
                    ],
                )?;
                writeln!(out)?;
                writeln!(out, "Employees ({})", employees.len())?;
                let mut table = Table::new(["ID", "Username", "Name", "Email", "Role", "Customers"]);
                for employee in employees {
                    table.row([
                        employee.id.to_string(),
                        employee.username.to_string(),
                        employee.full_name(),
                        employee.email.clone(),
                        employee.role.to_string(),
                        employee
                            .customer_count
                            .map(|c| c.to_string())
                            .unwrap_or_default(),
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
            .or(self.employees.error())
            .or(self.selected.error())
    }
}
