mod common;

#[test]
fn test_migrated_database_accepts_connections() {
    let test_db = common::TestDb::new("test_migrated_database.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}

#[test]
fn test_migrations_are_idempotent() {
    let test_db = common::TestDb::new("test_migrations_idempotent.db");
    assert!(teacher_registry::db::run_migrations(&test_db.pool()).is_ok());
}
