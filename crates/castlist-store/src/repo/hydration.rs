//! Hydration layer - loads Roles together with their auditions
//!
//! Auditions are attached by an explicit `role_id` query, in storage order,
//! so a hydrated Role's collection is exactly the rows that reference it.

use crate::errors::Result;
use crate::repo::SqliteRepo;
use castlist_core::model::Role;
use rusqlite::Connection;

/// Load a Role and its auditions by id
pub fn load_role(conn: &Connection, role_id: i64) -> Result<Option<Role>> {
    match SqliteRepo::get_role(conn, role_id)? {
        Some(mut role) => {
            attach_auditions(conn, &mut role)?;
            Ok(Some(role))
        }
        None => Ok(None),
    }
}

/// Load the first Role with this exact character name, with its auditions
pub fn load_role_by_character_name(conn: &Connection, character_name: &str) -> Result<Option<Role>> {
    match SqliteRepo::find_role_by_character_name(conn, character_name)? {
        Some(mut role) => {
            attach_auditions(conn, &mut role)?;
            Ok(Some(role))
        }
        None => Ok(None),
    }
}

/// Load every Role with its auditions, ordered by role id
pub fn load_all_roles(conn: &Connection) -> Result<Vec<Role>> {
    let mut roles = SqliteRepo::list_roles(conn)?;
    for role in &mut roles {
        attach_auditions(conn, role)?;
    }
    Ok(roles)
}

fn attach_auditions(conn: &Connection, role: &mut Role) -> Result<()> {
    let Some(role_id) = role.id else {
        return Ok(());
    };

    role.auditions.clear();
    for audition in SqliteRepo::list_auditions_for_role(conn, role_id)? {
        role.add_audition(audition)?;
    }

    tracing::debug!(
        role_id,
        audition_count = role.auditions.len(),
        "hydrated role"
    );
    Ok(())
}
