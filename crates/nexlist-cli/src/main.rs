use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use nexlist_client::{AuthApi, NexListClient};
use nexlist_core::paths::{config_json_path, load_config_json, save_config_json};
use nexlist_core::{Bucket, Config, TodoId};
use nexlist_state::{MemoPad, PomodoroEvent, PomodoroTimer, TodoEntry, TodoManager};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "nexlist")]
#[command(about = "Today / storage to-do lists, memo and Pomodoro timer")]
#[command(version)]
struct Cli {
    /// Backend origin, overrides config and NEXLIST_API_BASE
    #[arg(long)]
    api_base: Option<String>,

    /// Config file (.json or .toml) instead of the default locations
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, default_value = "false")]
    debug: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show login state and item counts
    Status,
    /// Print or open the login page, or store a session token
    Login {
        /// Save this `access_token` cookie value to ~/.nexlist/config.json
        #[arg(long)]
        token: Option<String>,
    },
    /// End the session
    Logout,
    /// List today's items, or the storage bucket
    List {
        #[arg(long)]
        storage: bool,
    },
    /// Create an item
    Add {
        task: String,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: Option<NaiveDate>,
        /// File into storage instead of today
        #[arg(long)]
        storage: bool,
    },
    /// Toggle completion
    Done { id: i64 },
    /// Change text and due date
    Edit {
        id: i64,
        task: String,
        #[arg(long)]
        due: Option<NaiveDate>,
    },
    /// Move an item between today and storage
    Move {
        id: i64,
        #[arg(long)]
        to: Bucket,
    },
    /// Delete an item
    Rm { id: i64 },
    /// Delete every item
    Clear,
    /// Read or replace the memo
    Memo {
        #[command(subcommand)]
        action: MemoAction,
    },
    /// Run a Pomodoro countdown in the terminal
    Timer {
        #[arg(long, default_value_t = 25)]
        minutes: u32,
    },
}

#[derive(Subcommand)]
enum MemoAction {
    Show,
    Set { text: String },
}

fn init_logging(debug: bool, log_level: &str) {
    let default_filter = if debug { "debug" } else { log_level };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_line_number(debug)
                .with_file(false),
        )
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::new(),
    };
    if let Some(api_base) = &cli.api_base {
        config.api_base = api_base.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug, &cli.log_level);

    if let Err(e) = run(cli).await {
        eprintln!("{}", format!("⚠️  {:#}", e).yellow());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    tracing::debug!("Using backend {}", config.base_url());

    if let Commands::Timer { minutes } = cli.command {
        return run_timer(minutes).await;
    }

    let client = Arc::new(NexListClient::new(&config).context("invalid client configuration")?);
    let manager = TodoManager::new(client.clone());

    match cli.command {
        Commands::Status => status(&manager, client.as_ref()).await,
        Commands::Login { token } => login(&config, client.as_ref(), token).await,
        Commands::Logout => {
            if manager.logout(client.as_ref()).await? {
                println!("{}", "👋 Logged out".cyan());
            } else {
                println!("{}", "Server rejected the logout".yellow());
            }
            Ok(())
        }
        Commands::List { storage } => {
            let bucket = if storage { Bucket::Storage } else { Bucket::Today };
            manager.list(bucket).await?;
            print_bucket(bucket, &manager.render(bucket).await);
            Ok(())
        }
        Commands::Add { task, due, storage } => {
            let bucket = if storage { Bucket::Storage } else { Bucket::Today };
            let created = manager.create(&task, due, bucket).await?;
            println!(
                "{}",
                format!("✅ Added #{} to {}", created.id, created.bucket).green()
            );
            Ok(())
        }
        Commands::Done { id } => {
            let id = TodoId(id);
            require_login(&manager, client.as_ref()).await?;
            let is_done = manager.toggle(id).await?;
            let label = if is_done { "done" } else { "not done" };
            println!("{}", format!("✅ #{} marked {}", id, label).green());
            Ok(())
        }
        Commands::Edit { id, task, due } => {
            let id = TodoId(id);
            require_login(&manager, client.as_ref()).await?;
            let updated = manager.update(id, &task, due).await?;
            println!("{}", format!("✅ #{} is now \"{}\"", id, updated.task).green());
            Ok(())
        }
        Commands::Move { id, to } => {
            let moved = manager.move_to(TodoId(id), to).await?;
            println!(
                "{}",
                format!("✅ #{} moved to {}", moved.id, moved.bucket).green()
            );
            Ok(())
        }
        Commands::Rm { id } => {
            manager.delete(TodoId(id)).await?;
            println!("{}", format!("🗑  Deleted #{}", id).green());
            Ok(())
        }
        Commands::Clear => {
            manager.delete_all().await?;
            println!("{}", "🗑  Deleted every item".green());
            Ok(())
        }
        Commands::Memo { action } => memo(client.as_ref(), action).await,
        Commands::Timer { .. } => Ok(()),
    }
}

async fn require_login(manager: &TodoManager, auth: &dyn AuthApi) -> anyhow::Result<()> {
    if !manager.bootstrap(auth).await? {
        anyhow::bail!("Not logged in, run `nexlist login` first");
    }
    Ok(())
}

async fn status(manager: &TodoManager, client: &NexListClient) -> anyhow::Result<()> {
    println!("{}", format!("Backend: {}", client.base_url()).dimmed());
    if !manager.bootstrap(client).await? {
        println!("{}", "🔒 Not logged in".yellow());
        println!("{}", format!("   Log in at {}", client.login_url()).dimmed());
        return Ok(());
    }

    println!("{}", "🔓 Logged in".green());
    for bucket in Bucket::ALL {
        let entries = manager.view(bucket).await;
        let done = entries.iter().filter(|e| e.item.is_done).count();
        println!("   {:<8} {} items, {} done", bucket.as_str(), entries.len(), done);
    }
    Ok(())
}

async fn login(
    config: &Config,
    client: &NexListClient,
    token: Option<String>,
) -> anyhow::Result<()> {
    if let Some(token) = token {
        let path = config_json_path();
        store_token(&path, &token)?;
        client.set_session_token(&token);

        if client.is_logged_in().await {
            println!("{}", format!("🔓 Session saved to {}", path.display()).green());
        } else {
            println!(
                "{}",
                format!("Token saved to {}, but the server rejected it", path.display()).yellow()
            );
        }
        return Ok(());
    }

    let url = client.login_url();
    println!("{}", format!("🔑 Log in at {}", url).cyan());
    if config.open_browser {
        if let Err(e) = webbrowser::open(&url) {
            tracing::warn!("Could not open a browser: {}", e);
        }
    }
    println!(
        "{}",
        "Then copy the access_token cookie and run `nexlist login --token <value>`".dimmed()
    );
    Ok(())
}

/// Only the token changes; overrides from flags or the environment stay
/// out of the file.
fn store_token(path: &Path, token: &str) -> anyhow::Result<()> {
    let mut saved = if path.exists() {
        load_config_json::<Config>(path)?
    } else {
        Config::default()
    };
    saved.access_token = Some(token.trim().to_string());
    save_config_json(path, &saved)?;
    Ok(())
}

async fn memo(client: &NexListClient, action: MemoAction) -> anyhow::Result<()> {
    let mut pad = MemoPad::new();
    pad.load(client).await?;

    match action {
        MemoAction::Show => {
            if pad.content().is_empty() {
                println!("{}", "(empty memo)".dimmed());
            } else {
                println!("{}", pad.content());
            }
            if let Some(saved_at) = pad.saved_at() {
                println!("{}", format!("saved {}", saved_at).dimmed());
            }
        }
        MemoAction::Set { text } => {
            pad.edit(text);
            match pad.save(client).await? {
                Some(saved_at) => println!("{}", format!("📝 Memo saved {}", saved_at).green()),
                None => println!("{}", "📝 Memo saved".green()),
            }
        }
    }
    Ok(())
}

fn print_bucket(bucket: Bucket, entries: &[TodoEntry]) {
    let title = match bucket {
        Bucket::Today => "📅 Today",
        Bucket::Storage => "📦 Storage",
    };
    println!("{}", title.cyan().bold());

    if entries.is_empty() {
        println!("{}", "   nothing here".dimmed());
        return;
    }

    let today = Local::now().date_naive();
    for entry in entries {
        println!("{}", format_entry(entry, today));
    }
}

fn format_entry(entry: &TodoEntry, today: NaiveDate) -> String {
    let item = &entry.item;
    let check = if item.is_done { "[x]" } else { "[ ]" };
    let task = if item.is_done {
        item.task.dimmed().strikethrough().to_string()
    } else {
        item.task.clone()
    };

    let mut line = format!("   {} {:>4}  {}", check, format!("#{}", item.id), task);
    if let Some(due) = item.due_date {
        let due = format!("(due {})", due);
        if item.is_overdue(today) {
            line.push_str(&format!(" {}", due.red()));
        } else {
            line.push_str(&format!(" {}", due.dimmed()));
        }
    }
    if entry.is_new {
        line.push_str(&format!(" {}", "new".yellow()));
    }
    line
}

async fn run_timer(minutes: u32) -> anyhow::Result<()> {
    let mut timer = PomodoroTimer::with_minutes(minutes)?;
    timer.handle_event(PomodoroEvent::Start)?;
    println!(
        "{}",
        format!("🍅 {} minute Pomodoro, Ctrl-C to stop", minutes).cyan()
    );

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    // The first tick completes immediately
    ticker.tick().await;
    print_remaining(&timer)?;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let transition = timer.handle_event(PomodoroEvent::Tick)?;
                print_remaining(&timer)?;
                if transition.finished() {
                    println!();
                    println!("{}", "🔔 Time's up!".green().bold());
                    return Ok(());
                }
            }
            _ = tokio::signal::ctrl_c() => {
                timer.handle_event(PomodoroEvent::Pause)?;
                println!();
                println!("{}", format!("⏸  Stopped at {}", timer.state()).yellow());
                return Ok(());
            }
        }
    }
}

fn print_remaining(timer: &PomodoroTimer) -> io::Result<()> {
    print!("\r   {} ", timer.state().to_string().bold());
    io::stdout().flush()
}
