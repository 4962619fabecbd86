#![allow(dead_code)]

use advocate_directory::db::{DbPool, establish_connection_pool, run_migrations};
use advocate_directory::domain::advocate::NewAdvocate;
use advocate_directory::domain::types::PhoneNumber;
use advocate_directory::repository::DieselRepository;
use tempfile::TempDir;

/// SQLite database in a temporary directory with all migrations applied.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("non UTF-8 temp path"))
            .expect("failed to create pool");
        run_migrations(&pool).expect("failed to run migrations");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

pub fn new_advocate(
    first_name: &str,
    last_name: &str,
    city: &str,
    degree: &str,
    specialties: &[&str],
    years_of_experience: i32,
) -> NewAdvocate {
    NewAdvocate::new(
        first_name,
        last_name,
        city,
        degree,
        specialties,
        years_of_experience,
        PhoneNumber::new(5551234567).unwrap(),
    )
    .unwrap()
}

/// `count` advocates named `Advocate{n}` with no distinguishing filters.
pub fn numbered_advocates(count: usize) -> Vec<NewAdvocate> {
    (1..=count)
        .map(|n| new_advocate(&format!("Advocate{n}"), "Sample", "Boston", "MD", &["Bipolar"], 2))
        .collect()
}
