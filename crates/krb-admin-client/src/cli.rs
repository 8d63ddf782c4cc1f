use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use krb_shared::{
    account::{AccountStatus, AccountType},
    uac::Role,
};
use rust_decimal::Decimal;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "stdout",
        action,
        global = true,
        help = "Controls if it logs to stdout/stderr instead of to a file"
    )]
    pub is_to_std_out: bool,

    #[arg(
        long,
        global = true,
        help = "Base url of the API, overrides the configured value"
    )]
    pub api_url: Option<String>,

    #[arg(
        short = 'y',
        long = "yes",
        action,
        global = true,
        help = "Answer yes to delete confirmations"
    )]
    pub assume_yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and remember the employee for later commands
    Login {
        username: String,
        /// Read from stdin if not supplied
        #[arg(long, env = "KRB_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Forget the logged in employee
    Logout,
    /// Show the logged in employee
    Whoami,
    Dashboard,
    #[command(subcommand)]
    Customers(CustomersCommand),
    #[command(subcommand)]
    Accounts(AccountsCommand),
    /// Customers with their accounts and total balances
    Relationships {
        #[arg(long)]
        search: Option<String>,
    },
    /// Employee administration (ADMIN only)
    #[command(subcommand)]
    Employees(EmployeesCommand),
}

#[derive(Debug, Subcommand)]
pub enum CustomersCommand {
    List,
    Show {
        id: u64,
    },
    /// Matches first name, last name and email. A blank term lists everyone.
    Search {
        term: String,
    },
    Create(NewCustomerArgs),
    Update {
        id: u64,
        #[command(flatten)]
        changes: CustomerChangeArgs,
    },
    Delete {
        id: u64,
    },
}

#[derive(Debug, Args)]
pub struct NewCustomerArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone_number: String,
    #[arg(long, default_value = "")]
    pub address: String,
    /// Format YYYY-MM-DD
    #[arg(long)]
    pub date_of_birth: Option<NaiveDate>,
    #[arg(long, default_value = "")]
    pub ssn: String,
}

/// Fields left out keep their current value
#[derive(Debug, Args)]
pub struct CustomerChangeArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub date_of_birth: Option<NaiveDate>,
    #[arg(long)]
    pub ssn: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum AccountsCommand {
    List,
    Show {
        id: u64,
    },
    ForCustomer {
        customer_id: u64,
    },
    Create {
        /// Id of the customer that will own the account
        #[arg(long, default_value_t = 0)]
        customer_id: u64,
        #[arg(long = "type", default_value_t = AccountType::Savings)]
        account_type: AccountType,
        #[arg(long, default_value_t = Decimal::ZERO, allow_negative_numbers = true)]
        initial_balance: Decimal,
        /// Only used for CREDIT_CARD accounts
        #[arg(long)]
        credit_limit: Option<Decimal>,
    },
    SetStatus {
        id: u64,
        status: AccountStatus,
    },
    /// Replaces the balance with the value given
    SetBalance {
        id: u64,
        #[arg(allow_negative_numbers = true)]
        balance: Decimal,
    },
    Delete {
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum EmployeesCommand {
    List,
    Show {
        id: u64,
    },
    Create {
        username: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value_t = Role::Employee)]
        role: Role,
        /// Read from stdin if not supplied
        #[arg(long, env = "KRB_NEW_EMPLOYEE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    Update {
        id: u64,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<Role>,
    },
    Delete {
        id: u64,
    },
}
