//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::repository::errors::RepositoryResult;
use crate::repository::{AdvocateListQuery, AdvocateReader, AdvocateWriter};

mock! {
    pub Repository {}

    impl AdvocateReader for Repository {
        fn list_advocates(
            &self,
            query: AdvocateListQuery,
        ) -> RepositoryResult<(usize, Vec<Advocate>)>;
    }

    impl AdvocateWriter for Repository {
        fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<Vec<Advocate>>;
    }
}
