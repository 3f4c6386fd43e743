//! SQLite repository implementation
//!
//! Maps `Role` and `Audition` records to the `roles` and `auditions` tables.
//! Roles are returned here without their auditions; see `hydration` for
//! fully populated roles.

use crate::errors::{from_rusqlite, not_persisted, Result};
use castlist_core::errors::CastingError;
use castlist_core::model::{Audition, Role};
use rusqlite::{Connection, OptionalExtension, Row, Transaction};

const ROLE_COLUMNS: &str = "id, character_name";
const AUDITION_COLUMNS: &str = "id, actor, location, phone, hired, role_id";

/// SQLite repository for Roles and Auditions
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a Role and store the generated id back into it
    ///
    /// Only the `roles` row is written; `role.auditions` is left untouched.
    /// A role that already carries an id is inserted under that id.
    pub fn insert_role(conn: &Connection, role: &mut Role) -> Result<i64> {
        conn.execute(
            "INSERT INTO roles (id, character_name) VALUES (?1, ?2)",
            rusqlite::params![role.id, role.character_name],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        role.id = Some(id);
        tracing::debug!(role_id = id, character_name = %role.character_name, "inserted role");

        Ok(id)
    }

    /// Insert a Role within a transaction
    pub fn insert_role_tx(tx: &Transaction, role: &mut Role) -> Result<i64> {
        Self::insert_role(tx, role)
    }

    /// Insert an Audition and store the generated id back into it
    ///
    /// With foreign keys enabled, a `role_id` that names no role fails with
    /// `ConstraintViolation`.
    pub fn insert_audition(conn: &Connection, audition: &mut Audition) -> Result<i64> {
        conn.execute(
            "INSERT INTO auditions (id, actor, location, phone, hired, role_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                audition.id,
                audition.actor,
                audition.location,
                audition.phone,
                audition.hired,
                audition.role_id,
            ],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        audition.id = Some(id);
        tracing::debug!(audition_id = id, role_id = ?audition.role_id, "inserted audition");

        Ok(id)
    }

    /// Insert an Audition within a transaction
    pub fn insert_audition_tx(tx: &Transaction, audition: &mut Audition) -> Result<i64> {
        Self::insert_audition(tx, audition)
    }

    /// Write an Audition's current field values over its stored row
    ///
    /// # Errors
    /// * `InvalidInput` - the audition was never inserted
    /// * `NotFound` - no row has the audition's id
    pub fn update_audition(conn: &Connection, audition: &Audition) -> Result<()> {
        let id = audition.id.ok_or_else(|| not_persisted("Audition"))?;

        let changed = conn
            .execute(
                "UPDATE auditions
                 SET actor = ?2, location = ?3, phone = ?4, hired = ?5, role_id = ?6
                 WHERE id = ?1",
                rusqlite::params![
                    id,
                    audition.actor,
                    audition.location,
                    audition.phone,
                    audition.hired,
                    audition.role_id,
                ],
            )
            .map_err(from_rusqlite)?;

        if changed == 0 {
            return Err(CastingError::AuditionNotFound { audition_id: id }.into());
        }

        tracing::debug!(audition_id = id, hired = audition.hired, "updated audition");
        Ok(())
    }

    /// Get a Role (without auditions) by id
    pub fn get_role(conn: &Connection, role_id: i64) -> Result<Option<Role>> {
        conn.query_row(
            &format!("SELECT {} FROM roles WHERE id = ?1", ROLE_COLUMNS),
            [role_id],
            role_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Find the first Role (lowest id) with exactly this character name
    ///
    /// Character names are not unique; later duplicates are ignored.
    pub fn find_role_by_character_name(
        conn: &Connection,
        character_name: &str,
    ) -> Result<Option<Role>> {
        conn.query_row(
            &format!(
                "SELECT {} FROM roles WHERE character_name = ?1 ORDER BY id LIMIT 1",
                ROLE_COLUMNS
            ),
            [character_name],
            role_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List all Roles (without auditions) ordered by id
    pub fn list_roles(conn: &Connection) -> Result<Vec<Role>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM roles ORDER BY id", ROLE_COLUMNS))
            .map_err(from_rusqlite)?;

        let roles = stmt
            .query_map([], role_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(roles)
    }

    /// Get an Audition by id
    pub fn get_audition(conn: &Connection, audition_id: i64) -> Result<Option<Audition>> {
        conn.query_row(
            &format!("SELECT {} FROM auditions WHERE id = ?1", AUDITION_COLUMNS),
            [audition_id],
            audition_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List the auditions for a role, in storage order
    pub fn list_auditions_for_role(conn: &Connection, role_id: i64) -> Result<Vec<Audition>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM auditions WHERE role_id = ?1 ORDER BY id",
                AUDITION_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let auditions = stmt
            .query_map([role_id], audition_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(auditions)
    }
}

// Adopted databases may hold NULL in any non-key column. NULL text reads
// as empty, a NULL phone as 0, a NULL hired as false.

fn role_from_row(row: &Row<'_>) -> rusqlite::Result<Role> {
    let id: i64 = row.get(0)?;
    let character_name: Option<String> = row.get(1)?;

    let mut role = Role::new(character_name.unwrap_or_default());
    role.id = Some(id);
    Ok(role)
}

fn audition_from_row(row: &Row<'_>) -> rusqlite::Result<Audition> {
    let id: i64 = row.get(0)?;
    let actor: Option<String> = row.get(1)?;
    let location: Option<String> = row.get(2)?;
    let phone: Option<i64> = row.get(3)?;
    let hired: Option<bool> = row.get(4)?;
    let role_id: Option<i64> = row.get(5)?;

    Ok(Audition {
        id: Some(id),
        actor: actor.unwrap_or_default(),
        location: location.unwrap_or_default(),
        phone: phone.unwrap_or(0),
        hired: hired.unwrap_or(false),
        role_id,
    })
}
