//! # CLI Layer
//!
//! This module is **one possible UI client** for carlot; it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Sets up logging and color output
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments become typed commands via clap
//! 2. **Context Setup**: resolve the data directory, load config, open the store
//! 3. **API Dispatch**: call the matching `CarlotApi` method
//! 4. **Output Formatting**: turn `CmdResult` into terminal output
//! 5. **Error Handling**: rejected forms and missing listings become a non-zero exit
//!
//! ## Structure
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: builds `AppContext` with the API over a `FileStore`
//! - `handle_*()`: per-command handlers that call the API and print results

use super::render::{
    render_config, render_field_errors, render_listing_cards, render_listing_details,
    render_messages, LINE_WIDTH,
};
use super::setup::{Cli, Commands, SellArgs};
use carlot::api::{CarlotApi, CarlotPaths, CmdResult, ConfigAction, MessageLevel};
use carlot::config::CarlotConfig;
use carlot::error::{CarlotError, Result};
use carlot::form::{ListingForm, LoginForm};
use carlot::store::fs::FileStore;
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Env var holding a `tracing` filter directive, e.g. `CARLOT_LOG=carlot=debug`.
const LOG_ENV: &str = "CARLOT_LOG";

struct AppContext {
    api: CarlotApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    colored::control::set_override(console::Term::stdout().features().colors_supported());

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { query }) => {
            let query = query.join(" ");
            handle_list(&mut ctx, (!query.trim().is_empty()).then_some(query))
        }
        Some(Commands::Search { term }) => handle_list(&mut ctx, Some(term.join(" "))),
        Some(Commands::Sell(args)) => handle_sell(&mut ctx, args),
        Some(Commands::View { reference }) => handle_view(&mut ctx, &reference),
        Some(Commands::Delete { reference }) => handle_delete(&mut ctx, &reference),
        Some(Commands::Login { email, password }) => handle_login(&mut ctx, email, password),
        Some(Commands::Logout) => handle_logout(&mut ctx),
        Some(Commands::Whoami) => handle_whoami(&mut ctx),
        Some(Commands::Reset) => handle_reset(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, None),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let config = CarlotConfig::load(&data_dir)?;
    let policy = config.on_corrupt_data;
    let store = FileStore::new(data_dir.clone()).with_corrupt_policy(policy);
    let paths = CarlotPaths { data_dir };

    Ok(AppContext {
        api: CarlotApi::new(store, paths, config),
    })
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "carlot", "carlot")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            CarlotError::Config(
                "could not determine a data directory; pass --data-dir or set CARLOT_DATA".into(),
            )
        })
}

fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(LINE_WIDTH)
}

fn handle_list(ctx: &mut AppContext, query: Option<String>) -> Result<()> {
    let result = ctx.api.get_listings(query.as_deref())?;
    print!(
        "{}",
        render_listing_cards(&result.listed_listings, terminal_width(), Utc::now())
    );
    print_messages(&result);
    Ok(())
}

fn handle_sell(ctx: &mut AppContext, args: SellArgs) -> Result<()> {
    let form = ListingForm {
        name: args.name,
        price: args.price,
        location: args.location,
        description: args.description,
        image: args.image,
        year: args.year,
        mileage: args.mileage,
        fuel: args.fuel,
    };

    let result = ctx.api.sell(form, args.dry_run)?;
    reject_invalid_form(&result, "Listing not saved")?;
    print_messages(&result);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, reference: &str) -> Result<()> {
    let result = match ctx.api.view_listing(reference) {
        Ok(result) => result,
        Err(err) if err.is_not_found() => {
            eprintln!("{}", "Run `carlot list` to see available cars.".dimmed());
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    let now = Utc::now();
    for listing in &result.listed_listings {
        print!("{}", render_listing_details(listing, now));
    }
    print_messages(&result);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, reference: &str) -> Result<()> {
    let result = ctx.api.delete_listing(reference)?;
    print_messages(&result);
    Ok(())
}

fn handle_login(ctx: &mut AppContext, email: String, password: String) -> Result<()> {
    let result = ctx.api.login(LoginForm::new(email, password))?;
    reject_invalid_form(&result, "Login failed")?;
    print_messages(&result);
    Ok(())
}

fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.logout()?;
    print_messages(&result);
    Ok(())
}

fn handle_whoami(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.whoami()?;
    print_messages(&result);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.reset()?;
    print_messages(&result);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }

    let failed = result
        .messages
        .iter()
        .find(|m| m.level == MessageLevel::Error)
        .map(|m| m.content.clone());
    match failed {
        Some(message) => Err(CarlotError::Config(message)),
        None => {
            print_messages(&result);
            Ok(())
        }
    }
}

/// Prints field errors to stderr and fails when a form was rejected.
fn reject_invalid_form(result: &CmdResult, what: &str) -> Result<()> {
    match &result.validation {
        Some(validation) if !validation.is_valid() => {
            eprint!("{}", render_field_errors(validation));
            let message = format!("{}: please fix the fields above", what);
            Err(CarlotError::Api(message))
        }
        _ => Ok(()),
    }
}

fn print_messages(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
}
