pub mod args;
pub mod config;
pub mod error;
pub mod formatting;
mod help;
pub mod note;
pub mod periodic;
pub mod template;
pub mod vault;

use crate::args::{ArgParser, ConfigArgs, NewArgs};
use crate::config::Config;
use crate::formatting::FormatContext;
use crate::periodic::Period;
use crate::vault::Vault;
use crate::template::Context;
use log::{debug, warn};
use std::env;
use std::error::Error;

pub use error::{Result, TemplateError, ZkError};

pub fn entry() -> std::result::Result<(), Box<dyn Error>> {
    init_logging();
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return help::run(Vec::new());
    }

    let cmd = args.remove(0);
    debug!("running command {cmd}");
    match cmd.as_str() {
        "new" => new_note(args)?,
        "day" | "daily" => open_periodic(args, Period::Daily)?,
        "week" | "weekly" => open_periodic(args, Period::Weekly)?,
        "config" => write_config(args)?,
        "path" => {
            ArgParser::new(args, "path").finish()?;
            println!("{}", load_vault()?.root().display());
        }
        "help" | "--help" | "-h" => help::run(args)?,
        other => {
            help::run(Vec::new())?;
            return Err(format!("Unknown command: {other}").into());
        }
    }

    Ok(())
}

fn init_logging() {
    let env = env_logger::Env::default().filter_or("ZK_LOG", "warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn load_vault() -> Result<Vault> {
    let vault = Vault::from_config(Config::load()?)?;
    debug!("zettelkasten root {}", vault.root().display());
    Ok(vault)
}

fn new_note(args: Vec<String>) -> std::result::Result<(), Box<dyn Error>> {
    let flags = NewArgs::parse(args)?;
    let vault = load_vault()?;
    let fmt = FormatContext::from_env();
    let ctx = Context::capture(flags.title.trim());

    let path = note::create_note(&vault, &ctx, flags.template.as_deref())?;
    println!("{}", fmt.format_status("New note created", &path, true));

    // The note is already on disk; a failed link must not report failure.
    match periodic::append_daily_link(&vault, ctx.title(), ctx.now()) {
        Ok(daily) => debug!("linked {} from {}", ctx.title(), daily.path.display()),
        Err(err) => warn!("note created but could not link it from the daily note: {err}"),
    }
    Ok(())
}

fn open_periodic(
    args: Vec<String>,
    period: Period,
) -> std::result::Result<(), Box<dyn Error>> {
    ArgParser::new(args, period.label()).finish()?;
    let vault = load_vault()?;
    let fmt = FormatContext::from_env();

    let note = periodic::ensure_periodic_note(&vault, period, note::now_fixed())?;
    let label = match (period, note.created) {
        (Period::Daily, true) => "Creating new daily note",
        (Period::Daily, false) => "Daily note already exists",
        (Period::Weekly, true) => "Creating new weekly note",
        (Period::Weekly, false) => "Weekly note already exists",
    };
    println!("{}", fmt.format_status(label, &note.path, note.created));
    println!("{}", note.path.display());
    Ok(())
}

fn write_config(args: Vec<String>) -> std::result::Result<(), Box<dyn Error>> {
    let flags = ConfigArgs::parse(args)?;
    let path = config::config_path()?;
    config::write_default(&path, flags.force)?;
    let fmt = FormatContext::from_env();
    println!("{}", fmt.format_status("Config written", &path, true));
    Ok(())
}
