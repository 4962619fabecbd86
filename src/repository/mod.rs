use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::domain::filter::{AdvocateFilter, PageRequest};
use crate::repository::errors::RepositoryResult;

pub mod advocate;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Filter plus page window for an advocate listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvocateListQuery {
    pub filter: AdvocateFilter,
    pub page: PageRequest,
}

impl AdvocateListQuery {
    pub fn new(filter: AdvocateFilter) -> Self {
        Self {
            filter,
            page: PageRequest::default(),
        }
    }

    pub fn paginate(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}

pub trait AdvocateReader {
    /// Returns the number of advocates matching the filter and the requested page.
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)>;
}

pub trait AdvocateWriter {
    /// Stores the advocates with their specialties and returns the stored records.
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<Vec<Advocate>>;
}

/// Diesel-backed store shared by all request handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
