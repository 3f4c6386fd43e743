//! Show command
//!
//! Usage: castlist show <CHARACTER_NAME> [--json]

use super::CommandResult;
use castlist_core::render::render_role;
use castlist_engine::commands::casting::role_get_by_character_name;
use clap::Args;
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Exact character name; the first matching role is shown
    pub character_name: String,

    /// Print the role and its auditions as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute show command
pub fn execute(args: ShowArgs, conn: &mut Connection) -> CommandResult {
    let role = role_get_by_character_name(&args.character_name, conn)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&role)?);
    } else {
        print!("{}", render_role(&role));
    }

    Ok(())
}
