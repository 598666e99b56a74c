//! CLI administration tool for bloglist.
//!
//! Provides commands for managing users, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new user
//! cargo run --bin admin -- user create --username root --name Superuser
//!
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BCRYPT_COST` (optional): password hashing work factor (default: 10)

use bloglist::application::services::{StatsService, UserService};
use bloglist::infrastructure::persistence::{PgBlogRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing bloglist.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show blog statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Register a new user
    Create {
        /// Login name (3-64 characters)
        #[arg(short, long)]
        username: Option<String>,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users with their blog counts
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn user_service(pool: &PgPool) -> UserService {
    let pool = Arc::new(pool.clone());
    let bcrypt_cost = std::env::var("BCRYPT_COST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(bcrypt::DEFAULT_COST);

    UserService::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgBlogRepository::new(pool)),
        bcrypt_cost,
    )
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let service = user_service(pool);

    match action {
        UserAction::Create {
            username,
            name,
            yes,
        } => create_user(&service, username, name, yes).await?,
        UserAction::List => list_users(&service).await?,
    }

    Ok(())
}

/// Registers a user with interactive prompts.
///
/// The password is always read from the terminal without echo, with
/// confirmation. Registration goes through [`UserService::register`], so the
/// same length and uniqueness rules as `POST /api/users` apply.
async fn create_user(
    service: &UserService,
    username: Option<String>,
    name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Username: {}", username.cyan());
    println!("  Name:     {}", name.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = service
        .register(username, name, password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ User created successfully!".green().bold(),
        user.id.to_string().bright_black()
    );
    println!();
    println!("{}", "Log in with:".bright_white());
    println!(
        "  curl -X POST -H \"Content-Type: application/json\" -d '{{\"username\":\"{}\",\"password\":\"...\"}}' http://localhost:3003/api/login",
        user.username.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Username             Name                           Created              Blogs
///   ───────────────────────────────────────────────────────────────────────────────────
///   1   root                 Superuser                      2025-01-15 10:30     2
/// ```
async fn list_users(service: &UserService) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = service
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<20} {:<30} {:<20} {}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Blogs".bright_white().bold()
    );
    println!("  {}", "─".repeat(83).bright_black());

    for entry in &users {
        println!(
            "  {:<3} {:<20} {:<30} {:<20} {}",
            entry.user.id.to_string().bright_black(),
            entry.user.username.cyan(),
            entry.user.name,
            entry
                .user
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            entry.blogs.len()
        );
    }

    println!();
    println!(
        "  Total: {}",
        users.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays blog statistics.
///
/// Shows the blog count, total likes, the favorite blog and the authors with
/// the most blogs and the most likes.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let service = StatsService::new(Arc::new(PgBlogRepository::new(Arc::new(pool.clone()))));
    let summary = service
        .summary()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to compute statistics: {}", e))?;

    println!(
        "  Blogs:         {}",
        summary.blog_count.to_string().bright_green().bold()
    );
    println!(
        "  Total likes:   {}",
        summary.total_likes.to_string().bright_green().bold()
    );

    match &summary.favorite_blog {
        Some(fav) => println!(
            "  Favorite:      {} by {} ({} likes)",
            fav.title.cyan(),
            author_label(fav.author.as_deref()),
            fav.likes.to_string().bright_green()
        ),
        None => println!("  Favorite:      {}", "-".bright_black()),
    }

    match &summary.most_blogs {
        Some(top) => println!(
            "  Most blogs:    {} ({} blogs)",
            author_label(top.author.as_deref()),
            top.count.to_string().bright_green()
        ),
        None => println!("  Most blogs:    {}", "-".bright_black()),
    }

    match &summary.most_likes {
        Some(top) => println!(
            "  Most likes:    {} ({} likes)",
            author_label(top.author.as_deref()),
            top.total_likes.to_string().bright_green()
        ),
        None => println!("  Most likes:    {}", "-".bright_black()),
    }

    println!();

    Ok(())
}

fn author_label(author: Option<&str>) -> ColoredString {
    match author {
        Some(a) => a.bright_white(),
        None => "(no author)".bright_black(),
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;

            let blogs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Users:      {}", users.to_string().bright_white());
            println!("  Blogs:      {}", blogs.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
