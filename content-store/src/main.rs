//! qespace-admin - command line access to the QE.SPACE content store

use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use content_store::auth::{SessionGate, verifier_for};
use content_store::core::{Collection, Config, ContentStore, PersistNotice, PersistStatus, StoreObserver};
use content_store::leads::{DateRange, LeadFilter, export_csv, export_file_name};
use content_store::storage::{DurableStorage, RedbStorage};
use content_store::utils::init_logger;
use content_store::DashboardStats;
use shared::error::AppError;
use shared::models::{AdminRole, AdminUserDraft, LeadSource, LeadStatus, LeadSubmission};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "qespace-admin")]
#[command(about = "QE.SPACE content store administration")]
struct Cli {
    /// Overrides QESPACE_DATA_DIR
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Debug logging
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one collection as JSON
    Show { collection: Collection },
    /// Dashboard numbers and storage usage
    Stats,
    Leads {
        #[command(subcommand)]
        command: LeadsCommand,
    },
    Admins {
        #[command(subcommand)]
        command: AdminsCommand,
    },
    /// Wipe all stored content and return to the built-in defaults
    Reset {
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[derive(clap::Args)]
struct FilterArgs {
    #[arg(long)]
    source: Option<LeadSource>,
    /// First day (YYYY-MM-DD, inclusive)
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Last day (YYYY-MM-DD, inclusive)
    #[arg(long)]
    to: Option<NaiveDate>,
}

impl FilterArgs {
    fn build(&self) -> anyhow::Result<LeadFilter> {
        Ok(LeadFilter::new(self.source, DateRange::new(self.from, self.to)?))
    }
}

#[derive(Subcommand)]
enum LeadsCommand {
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "ContactPage")]
        source: LeadSource,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long, default_value = "")]
        message: String,
    },
    Status { id: String, status: LeadStatus },
    Delete { id: String },
    /// Write matching leads as CSV (default file: leads_export_<today>.csv)
    Export {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct LoginArgs {
    #[arg(long, env = "QESPACE_LOGIN_PHONE")]
    login_phone: Option<String>,
    #[arg(long, env = "QESPACE_LOGIN_PASSWORD", hide_env_values = true)]
    login_password: Option<String>,
}

#[derive(Subcommand)]
enum AdminsCommand {
    List,
    /// Log in and remember the session
    Login {
        #[command(flatten)]
        login: LoginArgs,
    },
    Logout,
    Add {
        #[command(flatten)]
        login: LoginArgs,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
    },
    Delete {
        #[command(flatten)]
        login: LoginArgs,
        id: String,
    },
}

/// Prints quota notices to stderr
struct ConsoleObserver;

impl StoreObserver for ConsoleObserver {
    fn persist_failed(&self, notice: &PersistNotice) {
        eprintln!("{notice}");
    }

    fn reload_requested(&self) {
        eprintln!("内容已重置为默认数据 (content reset to defaults)");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = dir;
    }
    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    let _guard = init_logger(&level, config.is_production(), config.log_dir.as_deref());

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

/// Print the error; rejected input exits with 2, everything else with 1
fn report(e: &anyhow::Error) -> ExitCode {
    let Some(app) = e.downcast_ref::<AppError>() else {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    };

    let category = app.code.category().name();
    tracing::debug!(code = %app.code, category, details = ?app.details, "Command rejected");
    eprintln!("error [{category} {}]: {e:#}", app.code);
    if app.is_validation() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}

fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    let path = config.database_path();
    let storage: Arc<dyn DurableStorage> = Arc::new(
        RedbStorage::open(&path, config.quota_bytes)
            .with_context(|| format!("failed to open {}", path.display()))?,
    );
    let store = Arc::new(ContentStore::open(storage.clone(), Arc::new(ConsoleObserver)));

    match command {
        Commands::Show { collection } => {
            let value = store.collection_json(collection)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Commands::Stats => {
            let stats = DashboardStats::collect(&store.snapshot());
            println!("leads      {} ({} new)", stats.leads, stats.new_leads);
            println!("products   {}", stats.products);
            println!("slides     {}", stats.slides);
            let used = store.usage_bytes()?;
            match config.quota_bytes {
                Some(limit) => println!("storage    {used} / {limit} bytes"),
                None => println!("storage    {used} bytes (no quota)"),
            }
        }
        Commands::Leads { command } => run_leads(command, &store)?,
        Commands::Admins { command } => {
            let gate = SessionGate::restore(store.clone(), storage, verifier_for(config.auth_mode));
            run_admins(command, &store, &gate)?;
        }
        Commands::Reset { yes } => {
            if !yes {
                bail!("reset deletes every stored collection; pass --yes to confirm");
            }
            store.reset_all()?;
        }
    }
    Ok(())
}

fn run_leads(command: LeadsCommand, store: &ContentStore) -> anyhow::Result<()> {
    match command {
        LeadsCommand::List { filter } => {
            for lead in filter.build()?.apply(&store.leads()) {
                println!(
                    "{:<22} {}  {:<11} {:<9} {} {}",
                    lead.id,
                    lead.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
                    lead.source,
                    lead.status,
                    lead.name,
                    lead.phone.as_deref().unwrap_or("-"),
                );
            }
        }
        LeadsCommand::Add {
            name,
            phone,
            source,
            email,
            company,
            message,
        } => {
            let mut submission = LeadSubmission::new(name, phone, source)
                .with_email(email)
                .with_message(message);
            submission.company = company;
            let lead = store.add_lead(submission)?;
            println!("{}", lead.id);
        }
        LeadsCommand::Status { id, status } => {
            store.find_lead(&id)?;
            ensure_saved(store.update_lead_status(&id, status))?;
        }
        LeadsCommand::Delete { id } => {
            if store.delete_lead(&id) == PersistStatus::Unchanged {
                eprintln!("no lead with id {id}");
            }
        }
        LeadsCommand::Export { filter, out } => {
            let leads = filter.build()?.apply(&store.leads());
            let out = out.unwrap_or_else(|| PathBuf::from(export_file_name(Local::now().date_naive())));
            std::fs::write(&out, export_csv(&leads))
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("{} leads -> {}", leads.len(), out.display());
        }
    }
    Ok(())
}

fn run_admins(command: AdminsCommand, store: &ContentStore, gate: &SessionGate) -> anyhow::Result<()> {
    match command {
        AdminsCommand::List => {
            for admin in store.admin_users() {
                let last = admin
                    .last_login
                    .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<20} {:<6} {:<14} {}  last login {last}",
                    admin.id,
                    admin.role.as_str(),
                    admin.phone,
                    admin.name
                );
            }
        }
        AdminsCommand::Login { login } => {
            let user = authenticate(gate, &login)?;
            println!("logged in as {} ({})", user.name, user.phone);
        }
        AdminsCommand::Logout => gate.logout(),
        AdminsCommand::Add {
            login,
            name,
            phone,
            password,
        } => {
            authenticate(gate, &login)?;
            let user = gate.add_admin(AdminUserDraft {
                name,
                phone,
                password,
                role: AdminRole::Admin,
            })?;
            println!("{}", user.id);
        }
        AdminsCommand::Delete { login, id } => {
            authenticate(gate, &login)?;
            ensure_saved(gate.delete_admin(&id)?)?;
        }
    }
    Ok(())
}

/// Use the remembered session unless credentials are given
fn authenticate(gate: &SessionGate, login: &LoginArgs) -> anyhow::Result<shared::models::AdminUser> {
    match (&login.login_phone, &login.login_password) {
        (Some(phone), Some(password)) => Ok(gate.login(phone, password)?),
        (None, None) => gate
            .current()
            .context("not logged in; pass --login-phone and --login-password"),
        _ => bail!("--login-phone and --login-password must be given together"),
    }
}

fn ensure_saved(status: PersistStatus) -> anyhow::Result<()> {
    if !status.is_durable() {
        bail!("change was not saved ({status:?})");
    }
    Ok(())
}
