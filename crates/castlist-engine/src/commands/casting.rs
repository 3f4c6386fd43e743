//! Casting command handlers with boundary logging.
//!
//! This module provides command handlers for roles and auditions:
//! - Create roles, add auditions
//! - Call back (hire) an audition
//! - Look up and list hydrated roles
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for casting operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

use castlist_core::errors::CastingError;
use castlist_core::model::{Audition, Role};
use castlist_core::{log_op_end, log_op_error, log_op_start};
use castlist_store::errors::{from_rusqlite, Result};
use castlist_store::repo::hydration;
use castlist_store::SqliteRepo;
use rusqlite::Connection;
use std::time::Instant;

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Create and persist a new role
///
/// ## Returns
///
/// The role with its storage-assigned id and no auditions
pub fn role_create(character_name: &str, conn: &Connection) -> Result<Role> {
    log_op_start!("role_create", character_name = character_name);
    let start = Instant::now();

    let mut role = Role::new(character_name);
    let role_id = SqliteRepo::insert_role(conn, &mut role).map_err(|e| {
        log_op_error!("role_create", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "role_create",
        duration_ms = elapsed_ms(start),
        role_id = role_id
    );

    Ok(role)
}

/// Record a new audition for an existing role
///
/// The audition starts out not hired.
///
/// ## Errors
///
/// - `NotFound`: no role has `role_id`
/// - `Persistence`: database error
pub fn audition_add(
    role_id: i64,
    actor: &str,
    location: &str,
    phone: i64,
    conn: &Connection,
) -> Result<Audition> {
    log_op_start!("audition_add", role_id = role_id);
    let start = Instant::now();

    let result = audition_add_impl(role_id, actor, location, phone, conn).map_err(|e| {
        log_op_error!(
            "audition_add",
            e.clone(),
            duration_ms = elapsed_ms(start),
            role_id = role_id
        );
        e
    })?;

    log_op_end!(
        "audition_add",
        duration_ms = elapsed_ms(start),
        audition_id = result.id
    );

    Ok(result)
}

fn audition_add_impl(
    role_id: i64,
    actor: &str,
    location: &str,
    phone: i64,
    conn: &Connection,
) -> Result<Audition> {
    if SqliteRepo::get_role(conn, role_id)?.is_none() {
        return Err(CastingError::RoleNotFound {
            role: role_id.to_string(),
        }
        .into());
    }

    let mut audition = Audition::new(actor, location, phone, role_id);
    SqliteRepo::insert_audition(conn, &mut audition)?;
    Ok(audition)
}

/// Call back an audition: mark it hired and persist the change
///
/// Load, mutate and write happen in one transaction. Calling back an
/// already hired audition succeeds and leaves it hired.
///
/// ## Errors
///
/// - `NotFound`: no audition has `audition_id`
/// - `Persistence`: database error
pub fn audition_call_back(audition_id: i64, conn: &mut Connection) -> Result<Audition> {
    log_op_start!("audition_call_back", audition_id = audition_id);
    let start = Instant::now();

    let result = audition_call_back_impl(audition_id, conn).map_err(|e| {
        log_op_error!(
            "audition_call_back",
            e.clone(),
            duration_ms = elapsed_ms(start),
            audition_id = audition_id
        );
        e
    })?;

    log_op_end!(
        "audition_call_back",
        duration_ms = elapsed_ms(start),
        audition_id = audition_id,
        role_id = result.role_id
    );

    Ok(result)
}

fn audition_call_back_impl(audition_id: i64, conn: &mut Connection) -> Result<Audition> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    let mut audition = SqliteRepo::get_audition(&tx, audition_id)?
        .ok_or(CastingError::AuditionNotFound { audition_id })?;
    audition.call_back();
    SqliteRepo::update_audition(&tx, &audition)?;

    tx.commit().map_err(from_rusqlite)?;
    Ok(audition)
}

/// Fetch the first role with this exact character name, with its auditions
///
/// ## Errors
///
/// - `NotFound`: no role has this name
pub fn role_get_by_character_name(character_name: &str, conn: &Connection) -> Result<Role> {
    log_op_start!("role_get", character_name = character_name);
    let start = Instant::now();

    let result = hydration::load_role_by_character_name(conn, character_name)
        .and_then(|role| {
            role.ok_or_else(|| {
                CastingError::RoleNotFound {
                    role: character_name.to_string(),
                }
                .into()
            })
        })
        .map_err(|e| {
            log_op_error!("role_get", e.clone(), duration_ms = elapsed_ms(start));
            e
        })?;

    log_op_end!(
        "role_get",
        duration_ms = elapsed_ms(start),
        role_id = result.id,
        audition_count = result.auditions.len()
    );

    Ok(result)
}

/// List every role with its auditions, ordered by role id
pub fn role_list(conn: &Connection) -> Result<Vec<Role>> {
    log_op_start!("role_list");
    let start = Instant::now();

    let roles = hydration::load_all_roles(conn).map_err(|e| {
        log_op_error!("role_list", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "role_list",
        duration_ms = elapsed_ms(start),
        role_count = roles.len()
    );

    Ok(roles)
}
