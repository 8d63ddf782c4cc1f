use std::io::{self, BufRead as _, Write};

use anyhow::{bail, Context as _};
use krb_client_core::{Client, FileStore, IdentityStore, Session};
use krb_shared::{
    id::DbId,
    req_args::{
        accounts::CreateAccountReqArgs, customers::CustomerDraft,
        employees::NewEmployeeReqArgs, LoginReqArgs,
    },
    uac::Username,
};
use secrecy::SecretString;
use tracing::info;

use crate::{
    cli::{AccountsCommand, Cli, Command, CustomersCommand, EmployeesCommand},
    configuration::{get_configuration, Configuration},
    confirm::{AssumeYes, Confirm, StdinConfirm},
    pages::{
        accounts::UiAccounts, customers::UiCustomers, dashboard::UiDashboard,
        employees::UiEmployees, relationships::UiRelationships, DisplayablePage, OpResult,
    },
};

/// Returned after a screen that reported a failure has been shown
#[derive(Debug, thiserror::Error)]
#[error("command failed")]
pub struct CommandFailed;

/// Everything the screens need, built once at startup
#[derive(Debug)]
pub struct AppContext {
    pub client: Client,
    pub session: Session,
}

impl AppContext {
    /// Restores the stored identity before any screen is shown
    pub fn new(configuration: &Configuration) -> anyhow::Result<Self> {
        let store = FileStore::new(configuration.session.resolved_storage_dir()?);
        Self::with_store(configuration, Box::new(store))
    }

    pub fn with_store(
        configuration: &Configuration,
        store: Box<dyn IdentityStore>,
    ) -> anyhow::Result<Self> {
        let client = Client::new(&configuration.api.base_url)?;
        let session = Session::bootstrap(store, configuration.session.on_corrupt_identity)?;
        Ok(Self { client, session })
    }
}

#[tracing::instrument(skip(cli))]
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let configuration = get_configuration(cli.api_url.as_deref())?;
    info!(?configuration, "configuration loaded");
    let mut ctx = AppContext::new(&configuration)?;
    let mut confirm: Box<dyn Confirm> = if cli.assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&mut ctx, cli.command, confirm.as_mut(), &mut out).await
}

/// Runs one command against the context and writes the resulting screen
pub async fn execute(
    ctx: &mut AppContext,
    command: Command,
    confirm: &mut dyn Confirm,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::Login { username, password } => login(ctx, username, password, out).await,
        Command::Logout => {
            ctx.session.logout(&ctx.client).await?;
            writeln!(out, "Logged out")?;
            Ok(())
        }
        Command::Whoami => {
            let identity = ctx.session.require_identity()?;
            writeln!(
                out,
                "{} ({}) {}",
                identity.full_name(),
                identity.username,
                identity.role
            )?;
            Ok(())
        }
        Command::Dashboard => {
            let page = UiDashboard::load(ctx).await?;
            finish(&page, out)
        }
        Command::Customers(command) => customers(ctx, command, confirm, out).await,
        Command::Accounts(command) => accounts(ctx, command, confirm, out).await,
        Command::Relationships { search } => {
            let mut page = UiRelationships::default();
            page.load(ctx, search.as_deref()).await?;
            finish(&page, out)
        }
        Command::Employees(command) => employees(ctx, command, confirm, out).await,
    }
}

async fn login(
    ctx: &mut AppContext,
    username: String,
    password: Option<String>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if let Some(identity) = ctx.session.identity() {
        bail!(
            "Already logged in as {}, log out first",
            identity.username
        );
    }
    let password = match password {
        Some(password) => SecretString::from(password),
        None => read_secret("Password")?,
    };
    let identity = ctx
        .session
        .login(&ctx.client, LoginReqArgs::new(username, password))
        .await?;
    writeln!(out, "Welcome back, {}!", identity.first_name)?;
    Ok(())
}

async fn customers(
    ctx: &AppContext,
    command: CustomersCommand,
    confirm: &mut dyn Confirm,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut page = UiCustomers::default();
    let op_result = match command {
        CustomersCommand::List => {
            page.load(ctx).await?;
            OpResult::NoAction
        }
        CustomersCommand::Show { id } => {
            page.select(ctx, id.into()).await?;
            OpResult::NoAction
        }
        CustomersCommand::Search { term } => {
            page.search(ctx, &term).await?;
            OpResult::NoAction
        }
        CustomersCommand::Create(args) => {
            let draft = CustomerDraft {
                first_name: args.first_name,
                last_name: args.last_name,
                email: args.email,
                phone_number: args.phone_number,
                address: args.address,
                date_of_birth: args.date_of_birth,
                ssn: args.ssn,
            };
            page.create(ctx, draft).await?
        }
        CustomersCommand::Update { id, changes } => {
            page.update(ctx, id.into(), |draft| {
                replace_if_some(&mut draft.first_name, changes.first_name);
                replace_if_some(&mut draft.last_name, changes.last_name);
                replace_if_some(&mut draft.email, changes.email);
                replace_if_some(&mut draft.phone_number, changes.phone_number);
                replace_if_some(&mut draft.address, changes.address);
                if changes.date_of_birth.is_some() {
                    draft.date_of_birth = changes.date_of_birth;
                }
                replace_if_some(&mut draft.ssn, changes.ssn);
            })
            .await?
        }
        CustomersCommand::Delete { id } => page.delete(ctx, id.into(), confirm).await?,
    };
    if op_result == OpResult::Reload {
        page.load(ctx).await?;
    }
    finish(&page, out)
}

async fn accounts(
    ctx: &AppContext,
    command: AccountsCommand,
    confirm: &mut dyn Confirm,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut page = UiAccounts::default();
    let op_result = match command {
        AccountsCommand::List => {
            page.load(ctx).await?;
            OpResult::NoAction
        }
        AccountsCommand::Show { id } => {
            page.select(ctx, id.into()).await?;
            OpResult::NoAction
        }
        AccountsCommand::ForCustomer { customer_id } => {
            page.load_for_customer(ctx, customer_id.into()).await?;
            OpResult::NoAction
        }
        AccountsCommand::Create {
            customer_id,
            account_type,
            initial_balance,
            credit_limit,
        } => {
            let args = CreateAccountReqArgs {
                customer_id: DbId::from(customer_id),
                account_type,
                initial_balance,
                credit_limit,
            };
            page.create(ctx, args).await?
        }
        AccountsCommand::SetStatus { id, status } => {
            page.set_status(ctx, id.into(), status).await?
        }
        AccountsCommand::SetBalance { id, balance } => {
            page.set_balance(ctx, id.into(), balance).await?
        }
        AccountsCommand::Delete { id } => page.delete(ctx, id.into(), confirm).await?,
    };
    if op_result == OpResult::Reload {
        page.load(ctx).await?;
    }
    finish(&page, out)
}

async fn employees(
    ctx: &AppContext,
    command: EmployeesCommand,
    confirm: &mut dyn Confirm,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    // Checked before anything else so no request is made without access
    UiEmployees::authorize(&ctx.session)?;
    let mut page = UiEmployees::default();
    let op_result = match command {
        EmployeesCommand::List => {
            page.load(ctx).await?;
            OpResult::NoAction
        }
        EmployeesCommand::Show { id } => {
            page.select(ctx, id.into()).await?;
            OpResult::NoAction
        }
        EmployeesCommand::Create {
            username,
            first_name,
            last_name,
            email,
            role,
            password,
        } => {
            let username = Username::try_from(username).context("invalid username")?;
            let password = match password {
                Some(password) => SecretString::from(password),
                None => read_secret("Password for the new employee")?,
            };
            let args = NewEmployeeReqArgs {
                username,
                password,
                first_name,
                last_name,
                email,
                role,
            };
            page.create(ctx, args).await?
        }
        EmployeesCommand::Update {
            id,
            first_name,
            last_name,
            email,
            role,
        } => {
            page.update(ctx, id.into(), |changes| {
                replace_if_some(&mut changes.first_name, first_name);
                replace_if_some(&mut changes.last_name, last_name);
                replace_if_some(&mut changes.email, email);
                replace_if_some(&mut changes.role, role);
            })
            .await?
        }
        EmployeesCommand::Delete { id } => page.delete(ctx, id.into(), confirm).await?,
    };
    if op_result == OpResult::Reload {
        page.load(ctx).await?;
    }
    finish(&page, out)
}

/// Shows the page then turns any failure on it into [`CommandFailed`]
fn finish<P: DisplayablePage>(page: &P, out: &mut dyn Write) -> anyhow::Result<()> {
    page.show(out).context("failed to write output")?;
    match page.failure() {
        Some(msg) => {
            info!(msg, "{} reported a failure", P::title_base());
            Err(CommandFailed.into())
        }
        None => Ok(()),
    }
}

fn replace_if_some<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Reads one line from stdin. The input is echoed.
fn read_secret(prompt: &str) -> anyhow::Result<SecretString> {
    eprint!("{prompt}: ");
    io::stderr().flush().context("failed to show prompt")?;
    let mut value = String::new();
    io::stdin()
        .lock()
        .read_line(&mut value)
        .context("failed to read from stdin")?;
    let value = value.trim_end_matches(['\r', '\n']).to_string();
    if value.is_empty() {
        bail!("{prompt} is required");
    }
    Ok(SecretString::from(value))
}
