//! CLI administration tool for product-service.
//!
//! Provides database maintenance and direct product inspection without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Show a product
//! cargo run --bin admin -- product show XSZ-000741
//!
//! # Delete a product (asks for confirmation unless --yes)
//! cargo run --bin admin -- product delete XSZ-000741
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` or the `DB_*` components, plus
//! `REQUEST_TIMEOUT_SECS` for product commands.

use product_service::application::use_cases::ProductUseCases;
use product_service::config::{self, Config};
use product_service::domain::call_context::CallContext;
use product_service::domain::errors::ProductError;
use product_service::domain::repositories::ProductRepository;
use product_service::infrastructure::persistence::PgProductRepository;
use product_service::server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing product-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Inspect or remove products
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and server version
    Check,

    /// Apply pending migrations
    Migrate,
}

/// Product subcommands.
#[derive(Subcommand)]
enum ProductAction {
    /// Show one product
    Show {
        /// Product code (case and whitespace are ignored)
        code: String,
    },

    /// Delete one product
    Delete {
        /// Product code (case and whitespace are ignored)
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = server::connect_pool(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Product { action } => handle_product_action(action, &config, pool).await?,
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            server::run_migrations(pool).await?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}

/// Dispatches product commands through the same use cases as the HTTP API.
async fn handle_product_action(action: ProductAction, config: &Config, pool: PgPool) -> Result<()> {
    let repository: Arc<dyn ProductRepository> = Arc::new(PgProductRepository::new(Arc::new(pool)));
    let products = ProductUseCases::new(repository, config.request_timeout());
    let ctx = CallContext::new();

    match action {
        ProductAction::Show { code } => match products.get.execute(&ctx, &code).await {
            Ok(product) => {
                println!("{}", "Product".bright_blue().bold());
                println!();
                println!("  Id:          {}", product.id);
                println!("  Code:        {}", product.code.cyan());
                println!("  Title:       {}", product.title);
                println!("  Description: {}", product.description);
                println!("  Reference:   {}", product.reference);
                println!(
                    "  Price:       {}",
                    format_price(product.price_in_cents).bright_green()
                );
                println!("  Created:     {}", product.created_at.to_rfc3339());
                println!("  Updated:     {}", product.updated_at.to_rfc3339());
                println!();
            }
            Err(ProductError::NotFound) => {
                println!("{} {}", "No product with code".yellow(), code.cyan());
            }
            Err(e) => return Err(e.into()),
        },
        ProductAction::Delete { code, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete product '{}'?", code))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            match products.delete.execute(&ctx, &code).await {
                Ok(_) => println!("{}", "Product deleted".green().bold()),
                Err(ProductError::NotFound) => {
                    println!("{} {}", "No product with code".yellow(), code.cyan());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

/// Renders cents as a decimal amount, e.g. `2500` as `25.00`.
fn format_price(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(2500), "25.00");
        assert_eq!(format_price(1), "0.01");
        assert_eq!(format_price(123456), "1234.56");
    }

    #[test]
    fn test_cli_parses_product_delete() {
        let cli =
            Cli::try_parse_from(["admin", "product", "delete", "XSZ-000741", "--yes"]).unwrap();
        match cli.command {
            Commands::Product {
                action: ProductAction::Delete { code, yes },
            } => {
                assert_eq!(code, "XSZ-000741");
                assert!(yes);
            }
            _ => panic!("unexpected command"),
        }
    }
}
