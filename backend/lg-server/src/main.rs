use lg_server::{
    AppState, admin, build_router,
    cli::{Cli, Command},
    logger, secret,
};

use lg_auth::{PasswordHasher, TokenConfig, TokenService};
use lg_db::{UserRepository, UserStore};

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let command = Cli::parse().command.unwrap_or(Command::Serve);

    if let Command::GenerateSecret { env_file } = &command {
        let secret = secret::generate_secret()?;
        secret::write_env_file(env_file, &secret)?;
        println!(
            "Wrote {} and {} to {}",
            secret::JWT_SECRET_ENV,
            secret::JWT_EXPIRES_IN_ENV,
            env_file.display()
        );
        return Ok(());
    }

    let config = lg_config::Config::load()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    match command {
        Command::GrantAdmin { email } => {
            config.database.validate()?;
            let pool = lg_db::connect(&config.database_path()?).await?;
            let user = admin::grant_admin(pool, &email).await?;
            println!("{} <{}> is now an admin", user.name, user.email);
            Ok(())
        }
        Command::Serve | Command::GenerateSecret { .. } => serve(config).await,
    }
}

async fn serve(config: lg_config::Config) -> Result<(), Box<dyn Error>> {
    config.validate()?;

    info!("Starting lg-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool (runs migrations)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = lg_db::connect(&database_path).await?;
    info!("Database ready");

    let tokens = TokenService::new(TokenConfig::new(
        config.auth.secret()?,
        config.auth.token_ttl()?,
    ));
    let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(pool));
    let app = build_router(AppState::new(store, PasswordHasher::new(), tokens));

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                let _ = shutdown_tx.send(());
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
                // Keep the sender alive so the server is not shut down
                std::future::pending::<()>().await;
            }
        }
    });

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
