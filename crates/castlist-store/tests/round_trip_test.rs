// Integration tests for persist → re-fetch round trips on a file database
// Auditions must come back in insertion order with their hired state.

use castlist_core::model::{Audition, Role};
use castlist_core::render::role_render::NO_UNDERSTUDY_TEXT;
use castlist_core::render::{lead_text, understudy_text};
use castlist_store::repo::hydration;
use castlist_store::{db, migrations, SqliteRepo};
use rusqlite::Connection;
use tempfile::TempDir;

fn setup_db() -> (TempDir, Connection) {
    let temp_dir = TempDir::new().unwrap();
    let mut conn = db::open(temp_dir.path().join("theater.db")).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    (temp_dir, conn)
}

#[test]
fn test_hamlet_round_trip() {
    let (_tmp, mut conn) = setup_db();

    // Insert the role and two auditions, then commit
    let tx = conn.transaction().unwrap();
    let mut role = Role::new("Hamlet");
    let role_id = SqliteRepo::insert_role_tx(&tx, &mut role).unwrap();
    let mut jason = Audition::new("jason Kamau ", "kakamega", 254738292456, role_id);
    let mut jessica = Audition::new("jessica wairimu", "Nairobi", 254744258485, role_id);
    SqliteRepo::insert_audition_tx(&tx, &mut jason).unwrap();
    SqliteRepo::insert_audition_tx(&tx, &mut jessica).unwrap();
    tx.commit().unwrap();

    // Call back the first audition, then commit
    jason.call_back();
    let tx = conn.transaction().unwrap();
    SqliteRepo::update_audition(&tx, &jason).unwrap();
    tx.commit().unwrap();

    let loaded = hydration::load_role_by_character_name(&conn, "Hamlet")
        .unwrap()
        .unwrap();

    assert_eq!(loaded.actors(), vec!["jason Kamau ", "jessica wairimu"]);
    assert_eq!(loaded.locations(), vec!["kakamega", "Nairobi"]);
    assert_eq!(loaded.lead().map(|a| a.actor.as_str()), Some("jason Kamau "));
    assert!(loaded.understudy().is_none());
    assert_eq!(lead_text(&loaded), "jason Kamau ");
    assert_eq!(understudy_text(&loaded), NO_UNDERSTUDY_TEXT);
}

#[test]
fn test_round_trip_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("theater.db");
    {
        let mut conn = db::open(&path).unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        let mut role = Role::new("Ophelia");
        let role_id = SqliteRepo::insert_role(&conn, &mut role).unwrap();
        for (actor, location) in [("amina", "Kisumu"), ("brian", "Eldoret"), ("carol", "Thika")] {
            SqliteRepo::insert_audition(&conn, &mut Audition::new(actor, location, 1, role_id))
                .unwrap();
        }
    }

    let mut conn = db::open(&path).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    let loaded = hydration::load_role_by_character_name(&conn, "Ophelia")
        .unwrap()
        .unwrap();

    assert_eq!(loaded.actors(), vec!["amina", "brian", "carol"]);
    assert_eq!(loaded.locations(), vec!["Kisumu", "Eldoret", "Thika"]);
}

#[test]
fn test_uncommitted_transaction_rolls_back() {
    let (_tmp, mut conn) = setup_db();

    {
        let tx = conn.transaction().unwrap();
        SqliteRepo::insert_role_tx(&tx, &mut Role::new("Laertes")).unwrap();
        // dropped without commit
    }

    assert!(SqliteRepo::find_role_by_character_name(&conn, "Laertes")
        .unwrap()
        .is_none());
}

#[test]
fn test_second_and_third_hires() {
    let (_tmp, conn) = setup_db();
    let mut role = Role::new("Gertrude");
    let role_id = SqliteRepo::insert_role(&conn, &mut role).unwrap();
    let mut auditions: Vec<Audition> = ["a1", "a2", "a3"]
        .iter()
        .map(|actor| Audition::new(*actor, "Nairobi", 1, role_id))
        .collect();
    for audition in &mut auditions {
        SqliteRepo::insert_audition(&conn, audition).unwrap();
    }

    auditions[0].call_back();
    auditions[2].call_back();
    SqliteRepo::update_audition(&conn, &auditions[0]).unwrap();
    SqliteRepo::update_audition(&conn, &auditions[2]).unwrap();

    let loaded = hydration::load_role(&conn, role_id).unwrap().unwrap();
    assert_eq!(loaded.lead().map(|a| a.actor.as_str()), Some("a1"));
    assert_eq!(loaded.understudy().map(|a| a.actor.as_str()), Some("a3"));
}

#[test]
fn test_role_with_null_audition_cells_still_hydrates() {
    let (_tmp, conn) = setup_db();
    conn.execute_batch(
        "INSERT INTO roles (id, character_name) VALUES (1, 'Hamlet');
         INSERT INTO auditions (actor, location, phone, role_id)
         VALUES ('jason', 'kakamega', NULL, 1);
         INSERT INTO auditions (actor, location, phone, role_id)
         VALUES (NULL, 'Nairobi', 254744258485, 1);",
    )
    .unwrap();

    let role = hydration::load_role_by_character_name(&conn, "Hamlet")
        .unwrap()
        .unwrap();

    assert_eq!(role.actors(), vec!["jason", ""]);
    assert_eq!(role.locations(), vec!["kakamega", "Nairobi"]);
    assert!(role.lead().is_none());
}
