use std::io::{self, Write};

use krb_shared::account::AccountStats;
use tracing::info;

use super::{
    data_state::{AwaitingType, DataState},
    DisplayablePage, Notice,
};
use crate::{
    ui_helpers::{fmt_money, no_cb, write_details, write_heading, Table},
    AppContext,
};

#[derive(Debug, Default)]
pub struct UiDashboard {
    first_name: String,
    is_admin: bool,
    customer_count: DataState<u64>,
    employee_count: DataState<u64>,
    account_stats: DataState<AccountStats>,
    /// Stays empty, the dashboard has no operations
    notice: Notice,
}

impl UiDashboard {
    /// Fetches all the figures at once, each one can fail on its own
    #[tracing::instrument(skip_all)]
    pub async fn load(ctx: &AppContext) -> anyhow::Result<Self> {
        let identity = Self::authorize(&ctx.session)?;
        let mut result = Self {
            first_name: identity.first_name.clone(),
            is_admin: identity.role.is_admin(),
            ..Default::default()
        };
        let client = &ctx.client;
        result
            .customer_count
            .get(|| AwaitingType(client.customer_count(no_cb)));
        result
            .employee_count
            .get(|| AwaitingType(client.employee_count(no_cb)));
        let (stats, (), ()) = futures::join!(
            client.account_stats(),
            result.customer_count.settle(),
            result.employee_count.settle()
        );
        result.account_stats.set_result(stats);
        info!("dashboard loaded");
        Ok(result)
    }

    pub fn account_stats(&self) -> &DataState<AccountStats> {
        &self.account_stats
    }
}

impl DisplayablePage for UiDashboard {
    fn title_base() -> &'static str {
        "Dashboard"
    }

    fn show(&self, out: &mut dyn Write) -> io::Result<()> {
        write_heading(out, Self::title_base())?;
        writeln!(out, "Welcome back, {}!", self.first_name)?;
        writeln!(out)?;

        let mut fields = vec![
            ("Total Customers", figure(&self.customer_count, u64::to_string)),
            (
                "Total Accounts",
                figure(&self.account_stats, |s| s.count.to_string()),
            ),
            (
                "Total Balance",
                figure(&self.account_stats, |s| fmt_money(s.total_balance)),
            ),
        ];
        if self.is_admin {
            fields.push(("Employees", figure(&self.employee_count, u64::to_string)));
        }
        write_details(out, &fields)?;

        if let Some(stats) = self.account_stats.present() {
            writeln!(out)?;
            let mut by_type = Table::new(["Account Type", "Count"]);
            for (account_type, count) in &stats.by_type {
                by_type.row([account_type.label().to_string(), count.to_string()]);
            }
            by_type.write_to(out)?;
            writeln!(out)?;
            let mut by_status = Table::new(["Status", "Count"]);
            for (status, count) in &stats.by_status {
                by_status.row([status.label().to_string(), count.to_string()]);
            }
            by_status.write_to(out)?;
        }
        Ok(())
    }

    fn notice(&self) -> &Notice {
        &self.notice
    }

    fn failure(&self) -> Option<&str> {
        self.customer_count
            .error()
            .or(self.account_stats.error())
            .or(if self.is_admin {
                self.employee_count.error()
            } else {
                None
            })
    }
}

fn figure<T>(state: &DataState<T>, fmt: impl FnOnce(&T) -> String) -> String {
    match state {
        DataState::Present(value) => fmt(value),
        DataState::Failed(e) => format!("unavailable ({e})"),
        DataState::None | DataState::AwaitingResponse(_) => "loading".to_string(),
    }
}
