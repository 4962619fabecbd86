use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::advocate::{Advocate as DomainAdvocate, NewAdvocate as DomainNewAdvocate};
use crate::domain::types::{AdvocateId, PhoneNumber, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::advocates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::advocate::Advocate`] without specialties.
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::advocates)]
/// Insertable form of [`Advocate`].
pub struct NewAdvocate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub city: &'a str,
    pub degree: &'a str,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations, Insertable)]
#[diesel(table_name = crate::schema::advocate_specialties)]
#[diesel(belongs_to(Advocate, foreign_key = advocate_id))]
#[diesel(primary_key(advocate_id, specialty))]
pub struct AdvocateSpecialty {
    pub advocate_id: i32,
    pub specialty: String,
}

impl Advocate {
    /// Combines the row with its specialty rows into a domain value.
    pub fn into_domain(
        self,
        specialties: Vec<AdvocateSpecialty>,
    ) -> Result<DomainAdvocate, TypeConstraintError> {
        Ok(DomainAdvocate {
            id: AdvocateId::new(self.id)?,
            first_name: self.first_name,
            last_name: self.last_name,
            city: self.city,
            degree: self.degree,
            specialties: specialties.into_iter().map(|s| s.specialty).collect(),
            years_of_experience: self.years_of_experience,
            phone_number: PhoneNumber::new(self.phone_number)?,
            created_at: self.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewAdvocate> for NewAdvocate<'a> {
    fn from(advocate: &'a DomainNewAdvocate) -> Self {
        Self {
            first_name: advocate.first_name.as_str(),
            last_name: advocate.last_name.as_str(),
            city: advocate.city.as_str(),
            degree: advocate.degree.as_str(),
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number.get(),
        }
    }
}
