//! Role commands
//!
//! Usage: castlist role add <CHARACTER_NAME>
//!        castlist role list

use super::CommandResult;
use castlist_core::render::{lead_text, understudy_text};
use castlist_engine::commands::casting::{role_create, role_list};
use clap::{Args, Subcommand};
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct RoleArgs {
    #[command(subcommand)]
    pub command: RoleCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoleCommand {
    /// Create a role
    Add(AddArgs),
    /// List all roles with their lead and understudy
    List,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Name of the character to cast
    pub character_name: String,
}

/// Execute role command
pub fn execute(args: RoleArgs, conn: &mut Connection) -> CommandResult {
    match args.command {
        RoleCommand::Add(add_args) => {
            let role = role_create(&add_args.character_name, conn)?;
            if let Some(id) = role.id {
                println!("Created role {} ({})", id, role.character_name);
            }
            Ok(())
        }
        RoleCommand::List => {
            for role in role_list(conn)? {
                println!(
                    "{}\t{}\tauditions: {}\tlead: {}\tunderstudy: {}",
                    role.id.unwrap_or_default(),
                    role.character_name,
                    role.auditions.len(),
                    lead_text(&role),
                    understudy_text(&role)
                );
            }
            Ok(())
        }
    }
}
