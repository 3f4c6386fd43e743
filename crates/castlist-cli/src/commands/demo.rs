//! Demo command
//!
//! Usage: castlist demo

use super::CommandResult;
use castlist_core::render::render_role;
use castlist_engine::commands::demo::cast_demo;
use rusqlite::Connection;

/// Execute demo command
pub fn execute(conn: &mut Connection) -> CommandResult {
    let role = cast_demo(conn)?;
    print!("{}", render_role(&role));
    Ok(())
}
