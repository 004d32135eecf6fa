//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `planboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use planboard_core::db::open_db_in_memory;
use planboard_core::{PlannerService, SqliteStateRepository, TextRenderer};

fn main() {
    println!("planboard_core ping={}", planboard_core::ping());
    println!("planboard_core version={}", planboard_core::core_version());

    // Exercise the full stack against throwaway storage so wiring breaks
    // show up here instead of inside a UI host.
    match smoke_render() {
        Ok(rendered) => println!("{rendered}"),
        Err(message) => {
            eprintln!("planboard_core smoke failed: {message}");
            std::process::exit(1);
        }
    }
}

fn smoke_render() -> Result<String, String> {
    let conn = open_db_in_memory().map_err(|err| err.to_string())?;
    let repo = SqliteStateRepository::try_new(conn).map_err(|err| err.to_string())?;
    let service = PlannerService::load(repo).map_err(|err| err.to_string())?;
    Ok(TextRenderer::new().render_timetable(service.timetable()))
}
