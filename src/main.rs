//! realm-admin - user and role administration for Keycloak-style realms
//!
//! ```bash
//! # List users holding an assignable role, filtered
//! realm-admin --config config/realm-admin.yaml users --last-name Kikin --enabled enabled
//!
//! # Show a user with assigned and inherited roles
//! realm-admin user 22c8b4ba-b154-45f7-98d9-a4fe198623a1 --description manage
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use realm_admin::utils::logging::init_logging;
use realm_admin::{
    Config, ErrorBanner, KeycloakClient, Resolved, Role, RoleFilter, UserDetail, UserDetailService,
    UserEnabled, UserFilter, UserListService, UserRecord,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "realm-admin",
    version,
    long_version = realm_admin::LONG_VERSION,
    about = "Inspect users and roles of an identity provider realm"
)]
struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true, env = "REALM_ADMIN_CONFIG")]
    config: Option<PathBuf>,

    /// Identity provider base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Realm to administer
    #[arg(long, global = true)]
    realm: Option<String>,

    /// Bearer token forwarded to the admin API
    #[arg(long, global = true)]
    token: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List users holding any assignable role
    Users(UsersArgs),
    /// Show a user with assigned and inherited roles
    User(UserArgs),
}

#[derive(Args, Debug)]
struct UsersArgs {
    /// Username terms, all must match
    #[arg(long)]
    username: Option<String>,
    /// Last name terms, all must match
    #[arg(long)]
    last_name: Option<String>,
    /// First name terms, all must match
    #[arg(long)]
    first_name: Option<String>,
    /// Account states to keep (enabled, disabled)
    #[arg(long, value_delimiter = ',')]
    enabled: Vec<UserEnabled>,
    /// Roles to keep; a user matches when holding any of them
    #[arg(long = "role", value_delimiter = ',')]
    roles: Vec<String>,
}

#[derive(Args, Debug)]
struct UserArgs {
    /// User id
    id: String,
    /// Role name terms, all must match
    #[arg(long)]
    name: Option<String>,
    /// Role description terms, all must match
    #[arg(long)]
    description: Option<String>,
}

impl Cli {
    fn overrides(&self) -> Vec<(String, String)> {
        [
            ("REALM_ADMIN_BASE_URL", &self.base_url),
            ("REALM_ADMIN_REALM", &self.realm),
            ("REALM_ADMIN_TOKEN", &self.token),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key.to_string(), v)))
        .collect()
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let (cli, dotenv) = parse_args(|| dotenvy::dotenv().ok(), std::env::args_os());

    match run(cli, dotenv).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load `.env` first so clap's `env =` lookups see its variables
fn parse_args<L, I, T>(load_env: L, args: I) -> (Cli, Option<PathBuf>)
where
    L: FnOnce() -> Option<PathBuf>,
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let dotenv = load_env();
    (Cli::parse_from(args), dotenv)
}

async fn run(cli: Cli, dotenv: Option<PathBuf>) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref(), cli.overrides())
        .await
        .context("Failed to load configuration")?;
    init_logging(&config.logging)?;
    if let Some(path) = dotenv {
        debug!("Loaded environment from {:?}", path);
    }
    let build = realm_admin::build_info();
    info!(
        version = build.version,
        git = build.git_hash,
        realm = %config.idp.realm,
        "Starting realm-admin"
    );

    let client = Arc::new(KeycloakClient::new(&config).context("Failed to create client")?);

    match &cli.command {
        Commands::Users(args) => {
            let resolved = UserListService::new(client, &config).load().await;
            let mut filter = UserFilter::new(config.filter.debounce());
            apply_user_args(&mut filter, args);
            print_users(&resolved, &filter, cli.json)
        }
        Commands::User(args) => {
            let resolved = UserDetailService::new(client, &config)
                .load(&args.id)
                .await;
            let mut filter = RoleFilter::new(config.filter.debounce());
            if let Some(name) = &args.name {
                filter.set_name(name.as_str());
            }
            if let Some(description) = &args.description {
                filter.set_description(description.as_str());
            }
            filter.flush();
            print_user_detail(&resolved, &filter, cli.json)
        }
    }
}

fn apply_user_args(filter: &mut UserFilter, args: &UsersArgs) {
    if let Some(username) = &args.username {
        filter.set_username(username.as_str());
    }
    if let Some(last_name) = &args.last_name {
        filter.set_last_name(last_name.as_str());
    }
    if let Some(first_name) = &args.first_name {
        filter.set_first_name(first_name.as_str());
    }
    filter.set_enabled(args.enabled.clone());
    filter.set_roles(args.roles.clone());
    filter.flush();
}

fn print_users(
    resolved: &Resolved<Vec<UserRecord>>,
    filter: &UserFilter,
    json: bool,
) -> Result<ExitCode> {
    let records = filter.apply(&resolved.data);

    if json {
        let output = serde_json::json!({
            "users": records,
            "options": UserFilter::select_options(&resolved.data),
            "errors": resolved.banners(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{:<24} {:<24} {:<24} {:<9} ROLES",
            "USERNAME", "LAST NAME", "FIRST NAME", "STATUS"
        );
        for record in &records {
            println!(
                "{:<24} {:<24} {:<24} {:<9} {}",
                record.username,
                record.last_name,
                record.first_name,
                UserEnabled::from_enabled(record.enabled).label(),
                record.roles.join(", ")
            );
        }
        println!("{} of {} users", records.len(), resolved.data.len());
    }

    Ok(report(&resolved.banners()))
}

fn print_user_detail(
    resolved: &Resolved<UserDetail>,
    filter: &RoleFilter,
    json: bool,
) -> Result<ExitCode> {
    let detail = &resolved.data;
    let assigned = filter.apply(&detail.assigned_roles);
    let inherited = filter.apply(&detail.inherited_roles);

    if json {
        let output = serde_json::json!({
            "user": detail.user,
            "assignedRoles": assigned,
            "inheritedRoles": inherited,
            "errors": resolved.banners(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(report(&resolved.banners()));
    }

    if let Some(user) = &detail.user {
        println!("Username:   {}", user.username);
        println!("Last name:  {}", user.last_name.as_deref().unwrap_or_default());
        println!("First name: {}", user.first_name.as_deref().unwrap_or_default());
        println!("Email:      {}", user.email.as_deref().unwrap_or_default());
        println!("Status:     {}", UserEnabled::from_enabled(user.enabled).label());
        if let Some(created) = user.created_at() {
            println!("Created:    {}", created.format("%Y-%m-%d %H:%M:%S UTC"));
        }
    }

    print_roles("Assigned roles", &assigned);
    print_roles("Inherited roles", &inherited);

    Ok(report(&resolved.banners()))
}

fn print_roles(title: &str, roles: &[&Role]) {
    println!();
    println!("{} ({})", title, roles.len());
    for role in roles {
        println!("  {:<32} {}", role.name, role.description);
    }
}

/// Print error banners to stderr; any banner makes the run fail
fn report(banners: &[ErrorBanner]) -> ExitCode {
    for banner in banners {
        eprintln!("error: {}", banner);
    }
    if banners.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
