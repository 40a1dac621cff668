//! # CLI Layer
//!
//! One possible UI client for huntdesk. This is the only place that knows
//! about stdout, stderr and exit codes.
//!
//! - `run()`: parse arguments, set up logging, dispatch (called by `main.rs`)
//! - `init_context()`: resolve the data directory and build the API
//! - `handle_*()`: call the API and print the `CmdResult`

use super::logging::{LogConfig, init_logging};
use super::render::{
    print_messages, render_chapters, render_item_list, render_task_details, render_task_list,
    render_text_list,
};
use super::setup::{Cli, Commands, ItemCommands, LogoCommands, MediaCommands, TaskFields};
use clap::Parser;
use huntdesk::api::HuntApi;
use huntdesk::commands::CmdResult;
use huntdesk::commands::config::ConfigAction;
use huntdesk::commands::logo::LogoAction;
use huntdesk::config::HuntConfig;
use huntdesk::error::Result;
use huntdesk::init::{initialize, resolve_data_dir};
use huntdesk::lookup::LookupOutcome;
use huntdesk::model::TaskEdit;
use huntdesk::store::fs::FileStore;
use std::path::{Path, PathBuf};
use tracing::debug;

const EASTER_EGG_MEDIA: &str = "easter-egg.mp4";

struct AppContext {
    api: HuntApi<FileStore>,
    use_color: Option<bool>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_ansi(!cli.no_color));

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Find { input }) => handle_find(&mut ctx, &input),
        Some(Commands::Format { input }) => handle_format(&mut ctx, &input),
        Some(Commands::List { chapter }) => handle_list(&mut ctx, chapter),
        Some(Commands::Chapters) => handle_chapters(&mut ctx),
        Some(Commands::Search { query }) => handle_search(&mut ctx, &query),
        Some(Commands::Items { query }) => handle_items(&mut ctx, query.as_deref()),
        Some(Commands::Add { id, fields }) => handle_add(&mut ctx, &id, fields),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, &id, fields),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, &id),
        Some(Commands::Item(cmd)) => handle_item(&mut ctx, cmd),
        Some(Commands::Media(cmd)) => handle_media(&mut ctx, cmd),
        Some(Commands::Export { out }) => handle_export(&mut ctx, &out),
        Some(Commands::Import { file }) => handle_import(&mut ctx, &file),
        Some(Commands::Logo(cmd)) => handle_logo(&mut ctx, cmd),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Init) => handle_init(&mut ctx),
        None => handle_list(&mut ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_dir = resolve_data_dir(cli.data_dir.clone(), &cwd)?;
    debug!(data_dir = %data_dir.display(), "using data directory");

    Ok(AppContext {
        api: initialize(data_dir),
        use_color: cli.no_color.then_some(false),
    })
}

fn print_result(ctx: &AppContext, result: &CmdResult) {
    print_messages(&result.messages, ctx.use_color);
}

fn handle_find(ctx: &mut AppContext, input: &str) -> Result<()> {
    let result = ctx.api.find(input)?;
    match &result.lookup {
        Some(LookupOutcome::Found(task)) => {
            print!("{}", render_task_details(std::slice::from_ref(task), ctx.use_color));
        }
        Some(LookupOutcome::EasterEgg) => println!("✨ {}", EASTER_EGG_MEDIA),
        _ => {}
    }
    print_result(ctx, &result);
    Ok(())
}

fn handle_format(ctx: &mut AppContext, input: &str) -> Result<()> {
    let result = ctx.api.format(input);
    print_result(ctx, &result);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, chapter: Option<u8>) -> Result<()> {
    let result = ctx.api.list_tasks(chapter)?;
    print!("{}", render_task_list(&result.tasks, ctx.use_color));
    print_result(ctx, &result);
    Ok(())
}

fn handle_chapters(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.chapters()?;
    print!("{}", render_chapters(&result.chapters, ctx.use_color));
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search(query)?;
    print!("{}", render_task_list(&result.tasks, ctx.use_color));
    if !result.tasks.is_empty() && !result.search_items.is_empty() {
        println!();
    }
    print!("{}", render_item_list(&result.search_items, ctx.use_color));
    print_result(ctx, &result);
    Ok(())
}

fn handle_items(ctx: &mut AppContext, query: Option<&str>) -> Result<()> {
    let result = ctx.api.list_items(query)?;
    print!("{}", render_item_list(&result.search_items, ctx.use_color));
    print_result(ctx, &result);
    Ok(())
}

fn into_edit(fields: TaskFields) -> TaskEdit {
    TaskEdit {
        question: fields.question,
        solution: fields.solution,
        room: fields.room,
        tip: fields.tip,
        key: fields.key,
    }
}

fn handle_add(ctx: &mut AppContext, id: &str, fields: TaskFields) -> Result<()> {
    let result = ctx.api.add_task(id, into_edit(fields))?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str, fields: TaskFields) -> Result<()> {
    let result = ctx.api.edit_task(id, into_edit(fields))?;
    print!("{}", render_task_details(&result.tasks, ctx.use_color));
    print_result(ctx, &result);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.remove_task(id)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_item(ctx: &mut AppContext, cmd: ItemCommands) -> Result<()> {
    let result = match cmd {
        ItemCommands::Add { item, location } => ctx.api.add_item(&item, &location)?,
        ItemCommands::Edit { item, location } => ctx.api.edit_item(&item, &location)?,
        ItemCommands::Remove { item } => ctx.api.remove_item(&item)?,
    };
    print_result(ctx, &result);
    Ok(())
}

fn handle_media(ctx: &mut AppContext, cmd: MediaCommands) -> Result<()> {
    let result = match cmd {
        MediaCommands::Add {
            id,
            reference,
            kind,
        } => ctx.api.attach_media(&id, &reference, kind)?,
        MediaCommands::Remove { id, position } => ctx.api.detach_media(&id, position)?,
    };
    print!("{}", render_task_details(&result.tasks, ctx.use_color));
    print_result(ctx, &result);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, out: &Path) -> Result<()> {
    let result = ctx.api.export(out)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: &Path) -> Result<()> {
    let result = ctx.api.import(file)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_logo(ctx: &mut AppContext, cmd: LogoCommands) -> Result<()> {
    let action = match cmd {
        LogoCommands::Show => LogoAction::Show,
        LogoCommands::Set { reference } => LogoAction::Set(reference),
        LogoCommands::Clear => LogoAction::Clear,
    };
    let show = matches!(action, LogoAction::Show);
    let result = ctx.api.logo(action)?;
    if show && let Some(logo) = &result.logo {
        println!("{}", logo);
    }
    print_result(ctx, &result);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if key.is_none()
        && let Some(config) = &result.config
    {
        let lines: Vec<String> = HuntConfig::KEYS
            .iter()
            .filter_map(|k| config.get(k).map(|v| format!("{} = {}", k, v)))
            .collect();
        print!(
            "{}",
            render_text_list(&lines, "No configuration values.", ctx.use_color)
        );
    }
    print_result(ctx, &result);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_result(ctx, &result);
    Ok(())
}
