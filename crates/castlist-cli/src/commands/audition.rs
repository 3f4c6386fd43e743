//! Audition commands
//!
//! Usage: castlist audition add --role-id <ID> --actor <NAME> --location <PLACE> --phone <NUMBER>
//!        castlist audition call-back <AUDITION_ID>

use super::CommandResult;
use castlist_engine::commands::casting::{audition_add, audition_call_back};
use clap::{Args, Subcommand};
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct AuditionArgs {
    #[command(subcommand)]
    pub command: AuditionCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuditionCommand {
    /// Record an audition for a role
    Add(AddArgs),
    /// Mark an audition's actor as hired
    CallBack(CallBackArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Role the audition is for
    #[arg(long)]
    pub role_id: i64,

    /// Actor's name, stored as given
    #[arg(long)]
    pub actor: String,

    /// Audition venue or city
    #[arg(long)]
    pub location: String,

    /// Phone number, digits only
    #[arg(long)]
    pub phone: i64,
}

#[derive(Debug, Args)]
pub struct CallBackArgs {
    pub audition_id: i64,
}

/// Execute audition command
pub fn execute(args: AuditionArgs, conn: &mut Connection) -> CommandResult {
    match args.command {
        AuditionCommand::Add(add) => {
            let audition = audition_add(add.role_id, &add.actor, &add.location, add.phone, conn)?;
            if let Some(id) = audition.id {
                println!("Recorded audition {} for role {}", id, add.role_id);
            }
            Ok(())
        }
        AuditionCommand::CallBack(call_back) => {
            let audition = audition_call_back(call_back.audition_id, conn)?;
            println!("Called back {}", audition.actor);
            Ok(())
        }
    }
}
