mod common;

#[test]
fn test_creates_database_and_applies_migrations() {
    let test_db = common::TestDb::new("test_creates_database.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}

#[test]
fn test_migrations_are_idempotent() {
    let test_db = common::TestDb::new("test_migrations_are_idempotent.db");
    let applied = advocate_directory::db::run_migrations(test_db.pool()).unwrap();
    assert_eq!(applied, 0);
}
