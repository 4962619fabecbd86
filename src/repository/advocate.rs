//! Diesel implementation of the advocate listing and seeding queries.

use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel::sqlite::Sqlite;

use crate::db::unicode_lower;
use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::domain::filter::AdvocateFilter;
use crate::models::advocate::{
    Advocate as DbAdvocate, AdvocateSpecialty as DbAdvocateSpecialty,
    NewAdvocate as DbNewAdvocate,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{AdvocateListQuery, AdvocateReader, AdvocateWriter, DieselRepository};
use crate::schema::{advocate_specialties, advocates};

const LIKE_ESCAPE: char = '\\';

/// Escapes LIKE metacharacters so `term` only matches itself.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

/// Builds the predicate shared by the count and page queries.
///
/// Text comparisons go through `unicode_lower` on both sides, so the substring
/// search and the exact degree match ignore case beyond ASCII.
fn filtered_advocates(filter: &AdvocateFilter) -> advocates::BoxedQuery<'static, Sqlite> {
    let mut query = advocates::table.into_boxed();

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
        query = query.filter(
            unicode_lower(advocates::first_name)
                .like(pattern.clone())
                .escape(LIKE_ESCAPE)
                .or(unicode_lower(advocates::last_name)
                    .like(pattern.clone())
                    .escape(LIKE_ESCAPE))
                .or(unicode_lower(advocates::city)
                    .like(pattern)
                    .escape(LIKE_ESCAPE)),
        );
    }

    if !filter.specialties.is_empty() {
        let with_any_specialty = advocate_specialties::table
            .filter(advocate_specialties::specialty.eq_any(filter.specialties.clone()))
            .select(advocate_specialties::advocate_id);
        query = query.filter(advocates::id.eq_any(with_any_specialty));
    }

    if let Some(degree) = &filter.degree {
        query = query.filter(unicode_lower(advocates::degree).eq(degree.to_lowercase()));
    }

    if let Some(min_experience) = filter.min_experience {
        query = query.filter(advocates::years_of_experience.ge(min_experience));
    }

    query
}

fn attach_specialties(
    conn: &mut SqliteConnection,
    rows: Vec<DbAdvocate>,
) -> Result<Vec<(DbAdvocate, Vec<DbAdvocateSpecialty>)>, DieselError> {
    let specialties = DbAdvocateSpecialty::belonging_to(&rows)
        .select(DbAdvocateSpecialty::as_select())
        .order(advocate_specialties::specialty.asc())
        .load::<DbAdvocateSpecialty>(conn)?
        .grouped_by(&rows);

    Ok(rows.into_iter().zip(specialties).collect())
}

impl AdvocateReader for DieselRepository {
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)> {
        let mut conn = self.conn()?;

        let limit = query.page.limit().get() as i64;
        let offset = query.page.offset();

        // Count and page run in one read transaction so the total matches the rows.
        let (total, rows) = conn.transaction::<_, DieselError, _>(|conn| {
            let total: i64 = filtered_advocates(&query.filter)
                .count()
                .get_result(conn)?;

            let Some(offset) = offset.filter(|offset| *offset < total) else {
                return Ok((total, Vec::new()));
            };

            let rows = filtered_advocates(&query.filter)
                .order(advocates::id.asc())
                .limit(limit)
                .offset(offset)
                .select(DbAdvocate::as_select())
                .load::<DbAdvocate>(conn)?;

            Ok((total, attach_specialties(conn, rows)?))
        })?;

        let advocates = rows
            .into_iter()
            .map(|(row, specialties)| row.into_domain(specialties))
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)?;

        Ok((total as usize, advocates))
    }
}

impl AdvocateWriter for DieselRepository {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<Vec<Advocate>> {
        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let mut stored = Vec::with_capacity(new_advocates.len());

            for new_advocate in new_advocates {
                let row = diesel::insert_into(advocates::table)
                    .values(DbNewAdvocate::from(new_advocate))
                    .returning(DbAdvocate::as_returning())
                    .get_result::<DbAdvocate>(conn)?;

                let specialties = new_advocate
                    .specialties
                    .iter()
                    .map(|specialty| DbAdvocateSpecialty {
                        advocate_id: row.id,
                        specialty: specialty.clone(),
                    })
                    .collect::<Vec<_>>();

                if !specialties.is_empty() {
                    diesel::insert_into(advocate_specialties::table)
                        .values(&specialties)
                        .execute(conn)?;
                }

                stored.push(row.into_domain(specialties)?);
            }

            Ok(stored)
        })
    }
}
