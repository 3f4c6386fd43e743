//! Demonstration casting run.
//!
//! Casts Hamlet from two auditions: both are recorded, the first actor is
//! called back, and the role is re-read from storage. Two commits are issued,
//! one after the inserts and one after the call-back.

use castlist_core::errors::CastingError;
use castlist_core::model::{Audition, Role};
use castlist_core::{log_op_end, log_op_error, log_op_start};
use castlist_store::errors::{from_rusqlite, Result};
use castlist_store::repo::hydration;
use castlist_store::SqliteRepo;
use rusqlite::Connection;
use std::time::Instant;

pub const DEMO_CHARACTER_NAME: &str = "Hamlet";

/// (actor, location, phone) for each demo audition, in insertion order
pub const DEMO_AUDITIONS: [(&str, &str, i64); 2] = [
    ("jason Kamau ", "kakamega", 254738292456),
    ("jessica wairimu", "Nairobi", 254744258485),
];

/// Run the demonstration sequence and return the re-fetched role
///
/// The schema must already exist. Each run inserts a fresh Hamlet; the
/// re-fetch returns the first Hamlet on file.
pub fn cast_demo(conn: &mut Connection) -> Result<Role> {
    log_op_start!("cast_demo");
    let start = Instant::now();

    let role = cast_demo_impl(conn).map_err(|e| {
        log_op_error!(
            "cast_demo",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "cast_demo",
        duration_ms = start.elapsed().as_millis() as u64,
        role_id = role.id,
        audition_count = role.auditions.len()
    );

    Ok(role)
}

fn cast_demo_impl(conn: &mut Connection) -> Result<Role> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    let mut role = Role::new(DEMO_CHARACTER_NAME);
    let role_id = SqliteRepo::insert_role_tx(&tx, &mut role)?;
    let mut auditions = Vec::with_capacity(DEMO_AUDITIONS.len());
    for (actor, location, phone) in DEMO_AUDITIONS {
        let mut audition = Audition::new(actor, location, phone, role_id);
        SqliteRepo::insert_audition_tx(&tx, &mut audition)?;
        auditions.push(audition);
    }
    tx.commit().map_err(from_rusqlite)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;
    if let Some(first) = auditions.first_mut() {
        first.call_back();
        SqliteRepo::update_audition(&tx, first)?;
    }
    tx.commit().map_err(from_rusqlite)?;

    let role = hydration::load_role_by_character_name(conn, DEMO_CHARACTER_NAME)?.ok_or_else(
        || CastingError::RoleNotFound {
            role: DEMO_CHARACTER_NAME.to_string(),
        },
    )?;

    Ok(role)
}
