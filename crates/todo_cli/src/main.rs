//! Headless smoke runner.
//!
//! # Responsibility
//! - Open the configured store and render it once for a route.
//! - Optionally add one item, submitted as an Enter key-up on the entry field.
//! - Print each display region for quick local sanity checks.
//!
//! Usage: `todo_cli [route] [title]`.

use log::warn;
use std::process::ExitCode;
use todo_core::db::open_db;
use todo_core::{
    core_version, init_logging, AppConfig, Dispatch, HtmlTemplates, MemorySurface, Signal,
    SqliteKeyValueStore, TodoApp, TodoStore, ENTER_KEY,
};

fn main() -> ExitCode {
    let config = AppConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_ref().and_then(|dir| dir.to_str()) {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("todo_cli logging disabled: {err}");
        }
    }

    let mut args = std::env::args().skip(1);
    let route = args.next();
    let title = args.next();
    match run(&config, route.as_deref(), title.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("todo_cli failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig, route: Option<&str>, title: Option<&str>) -> Result<(), String> {
    let conn = open_db(&config.db_path).map_err(|err| format!("db open failed: {err}"))?;
    let backend =
        SqliteKeyValueStore::try_new(&conn).map_err(|err| format!("store init failed: {err}"))?;
    let mut app = TodoApp::new(TodoStore::new(backend, config.storage_key.as_str()), HtmlTemplates)
        .map_err(|err| format!("app init failed: {err}"))?;
    let mut surface = MemorySurface::new();

    app.start(&mut surface).map_err(|err| err.to_string())?;
    if let Some(route) = route {
        let matched = app
            .navigate(route, &mut surface)
            .map_err(|err| err.to_string())?;
        if !matched {
            warn!("event=cli_route module=cli status=skipped reason=no_route_match");
            eprintln!("todo_cli: route `{route}` does not match `/:filter`");
        }
    }
    if let Some(title) = title {
        let outcome = app
            .handle(&Signal::entry_key_up(ENTER_KEY, title), &mut surface)
            .map_err(|err| err.to_string())?;
        if outcome != Dispatch::Mutated {
            warn!("event=cli_add module=cli status=skipped reason=blank_title");
            eprintln!("todo_cli: blank title was not added");
        }
    }

    let state = app.state();
    println!("todo_core version={}", core_version());
    println!("store key={} db={}", config.storage_key, config.db_path.display());
    println!(
        "items total={} active={} completed={} filter={}",
        state.items.len(),
        state.items.active_count(),
        state.items.completed_count(),
        state.filter.as_str()
    );
    println!("main visible={}", surface.main_visible);
    println!("toggle_all checked={}", surface.toggle_all_checked);
    println!("list:\n{}", surface.list_markup);
    if surface.footer_visible {
        println!("footer:\n{}", surface.footer_markup);
    }
    Ok(())
}
