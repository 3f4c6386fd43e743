pub mod audition;
pub mod demo;
pub mod role;
pub mod show;

use castlist_store::errors::io_error;
use castlist_store::{db, migrations};
use rusqlite::Connection;
use std::path::Path;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Open the database at `path`, creating its directory and schema if absent
pub fn open_store(path: &Path) -> Result<Connection, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
    }

    let mut conn = db::open(path)?;
    migrations::apply_migrations(&mut conn)?;
    Ok(conn)
}
