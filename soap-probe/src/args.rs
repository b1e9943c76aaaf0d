use crate::config::{DEFAULT_URL, EXAMPLE_AUTH_TOKEN, ProbeConfig};
use crate::models::pagination::{Pagination, SortDirection};
use crate::models::user_data::{NewUser, UserChanges};
use crate::soap_call::SoapCall;
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "soap-probe",
    version,
    about = "Sends one request to the news platform SOAP services and prints the exchange"
)]
pub struct Cli {
    /// SOAP endpoint
    #[arg(long, env = "SOAP_PROBE_URL", default_value = DEFAULT_URL)]
    pub url: String,
    /// Access token sent with user operations and logout
    #[arg(
        long,
        env = "SOAP_PROBE_TOKEN",
        default_value = EXAMPLE_AUTH_TOKEN,
        hide_default_value = true,
        hide_env_values = true
    )]
    pub token: String,
    /// Request timeout in seconds. Waits indefinitely when omitted.
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Print a summary of the decoded SOAP response
    #[arg(long)]
    pub decode: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List users (default)
    List(ListArgs),
    /// Add a user
    Add(AddArgs),
    /// Update a user
    Update(UpdateArgs),
    /// Deactivate a user
    Delete {
        user_id: String,
    },
    /// Authenticate with a username and password
    Login {
        username: String,
        password: String,
    },
    /// Revoke the access token
    Logout {
        #[arg(long)]
        refresh_token: Option<String>,
        /// Revoke every token of the user
        #[arg(long)]
        global: bool,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    #[arg(long, default_value_t = 100)]
    pub size: u32,
    #[arg(long, default_value = "username")]
    pub sort_by: String,
    #[arg(long, value_enum, default_value_t = SortDirection::Ascending)]
    pub sort_dir: SortDirection,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long, default_value = "VISITEUR")]
    pub role: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub user_id: String,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    /// Mark the user inactive
    #[arg(long)]
    pub inactive: bool,
}

impl Cli {
    pub fn config(&self) -> ProbeConfig {
        let config = ProbeConfig::new(self.url.as_str(), self.token.as_str());
        match self.timeout {
            Some(seconds) => config.with_timeout(Duration::from_secs(seconds)),
            None => config,
        }
    }

    pub fn call(&self) -> SoapCall {
        match &self.command {
            None => SoapCall::default(),
            Some(Commands::List(args)) => SoapCall::ListUsers(Pagination {
                page: args.page,
                size: args.size,
                sort_by: args.sort_by.clone(),
                sort_dir: args.sort_dir,
            }),

            Some(Commands::Add(args)) => SoapCall::AddUser(NewUser {
                username: args.username.clone(),
                email: args.email.clone(),
                password: args.password.clone(),
                first_name: args.first_name.clone(),
                last_name: args.last_name.clone(),
                role: args.role.clone(),
            }),

            Some(Commands::Update(args)) => SoapCall::UpdateUser {
                user_id: args.user_id.clone(),
                changes: UserChanges {
                    email: args.email.clone(),
                    first_name: args.first_name.clone(),
                    last_name: args.last_name.clone(),
                    role: args.role.clone(),
                    active: !args.inactive,
                    password: args.password.clone(),
                },
            },

            Some(Commands::Delete { user_id }) => SoapCall::DeleteUser {
                user_id: user_id.clone(),
            },

            Some(Commands::Login { username, password }) => SoapCall::Login {
                username: username.clone(),
                password: password.clone(),
            },

            Some(Commands::Logout {
                refresh_token,
                global,
            }) => SoapCall::Logout {
                refresh_token: refresh_token.clone(),
                global: *global,
            },
        }
    }
}
