use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use pillbox::api::{CmdMessage, ConfigAction, MessageLevel, PillboxApi, PillboxPaths};
use pillbox::config::PillboxConfig;
use pillbox::error::Result;
use pillbox::model::{Drawer, DrawerId, Medicine};
use pillbox::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PillboxApi<FileStore>,
    export_file: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            weight,
            quantity,
            cost,
            drawer,
        }) => handle_add(&mut ctx, name, weight, quantity, cost, drawer),
        Some(Commands::Remove { name, quantity }) => handle_remove(&mut ctx, name, quantity),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Init) => handle_init(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "pillbox", "pillbox")
                .expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = PillboxConfig::load(&data_dir).unwrap_or_default();
    let export_file = config.export_file.clone();

    let store = FileStore::new(data_dir.clone());
    let paths = PillboxPaths { data_dir };
    let api = PillboxApi::new(store, paths);

    Ok(AppContext { api, export_file })
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    weight: f64,
    quantity: u32,
    cost: f64,
    drawer: String,
) -> Result<()> {
    let result = ctx
        .api
        .add_medicine(name, weight, quantity, cost, DrawerId::new(drawer))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, name: String, quantity: u32) -> Result<()> {
    let result = ctx.api.remove_medicine(&name, quantity)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_medicines(&term)?;
    print_medicines(&result.listed_medicines);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_inventory()?;
    print_medicines(&result.listed_medicines);
    if !result.listed_drawers.is_empty() {
        println!();
        print_drawers(&result.listed_drawers);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| PathBuf::from(&ctx.export_file));
    let result = ctx.api.export_inventory(&output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import_inventory(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("export-file = {}", config.export_file);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const QTY_WIDTH: usize = 8;
const NUM_WIDTH: usize = 10;

fn print_medicines(medicines: &[Medicine]) {
    if medicines.is_empty() {
        println!("No medicines found.");
        return;
    }

    let name_width = medicines
        .iter()
        .map(|m| m.name.width())
        .max()
        .unwrap_or(0)
        .max("Name".width());

    let header = format!(
        "{}  {:>qty$}  {:>num$}  {:>num$}  Drawer",
        pad_to_width("Name", name_width),
        "Qty",
        "Unit wt",
        "Cost",
        qty = QTY_WIDTH,
        num = NUM_WIDTH,
    );
    println!("{}", header.bold());

    for m in medicines {
        println!(
            "{}  {:>qty$}  {:>num$}  {:>num$}  {}",
            pad_to_width(&m.name, name_width),
            m.quantity,
            m.weight,
            m.cost,
            m.drawer,
            qty = QTY_WIDTH,
            num = NUM_WIDTH,
        );
    }
}

fn print_drawers(drawers: &[Drawer]) {
    for d in drawers {
        let line = format!(
            "Drawer {}: {}/{}",
            d.drawer_number, d.current_weight, d.capacity
        );
        if d.free_space() <= 0.0 {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.dimmed());
        }
    }
}

// Pads by display width rather than char count so wide glyphs line up.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
