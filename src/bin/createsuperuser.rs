//! Creates a staff + superuser account from the command line.

use account_auth::db::database_service::DatabaseService;
use account_auth::types::user::UserFields;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "createsuperuser")]
#[command(about = "Creates a superuser account", long_about = None)]
struct Args {
    /// Email address for the superuser
    #[arg(long, value_name = "EMAIL")]
    email: String,

    /// Display name
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Password; leave unset to create an account that cannot log in
    #[arg(long, env = "SUPERUSER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Database connection string
    #[arg(long, value_name = "DATABASE", env = "DATABASE_URL")]
    database: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let args = Args::parse();

    let db = match DatabaseService::new(&args.database).await {
        Ok(db) => db,
        Err(e) => {
            error!("failed to initialize database: {e}");
            return ExitCode::FAILURE;
        }
    };

    let fields = UserFields {
        name: args.name,
        ..Default::default()
    };

    match db
        .create_superuser(Some(args.email.as_str()), args.password.as_deref(), fields)
        .await
    {
        Ok(user) => {
            info!("Superuser {} created.", user.email);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("could not create superuser: {e}");
            ExitCode::FAILURE
        }
    }
}
