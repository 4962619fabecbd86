use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AdvocateId, NonEmptyString, PhoneNumber, TypeConstraintError};

/// Degrees offered by the filter controls.
pub const DEGREES: [&str; 3] = ["MD", "PhD", "MSW"];

/// Specialty tags offered by the filter controls.
pub const SPECIALTIES: [&str; 20] = [
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "Suicide History/Attempts",
    "General Mental Health",
    "Men's Issues",
    "Relationship Issues",
    "Trauma & PTSD",
    "Personality Disorders",
    "Attention and Hyperactivity (ADHD)",
    "Sleep Issues",
    "Schizophrenia and Psychotic Disorders",
    "Learning Disorders",
    "Domestic Abuse",
    "Eating Disorders",
    "Chronic Pain",
    "Weight Loss & Nutrition",
    "Diabetic Diet and Nutrition",
    "Life Coaching",
    "Obsessive-Compulsive Disorders",
];

/// Healthcare advocate profile as stored in the directory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub id: AdvocateId,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// Areas of expertise in ascending order; always present, possibly empty.
    #[serde(default)]
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: PhoneNumber,
    pub created_at: NaiveDateTime,
}

impl Advocate {
    /// Display name used by listings and the detail view.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Advocate record that has not been stored yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: PhoneNumber,
}

impl NewAdvocate {
    /// Trims text fields, sorts specialties dropping blanks and repeats, and
    /// rejects negative experience.
    pub fn new(
        first_name: &str,
        last_name: &str,
        city: &str,
        degree: &str,
        specialties: &[&str],
        years_of_experience: i32,
        phone_number: PhoneNumber,
    ) -> Result<Self, TypeConstraintError> {
        if years_of_experience < 0 {
            return Err(TypeConstraintError::NegativeValue);
        }

        let mut unique: Vec<String> = specialties
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        unique.sort();
        unique.dedup();

        Ok(Self {
            first_name: NonEmptyString::new(first_name)?.into_inner(),
            last_name: NonEmptyString::new(last_name)?.into_inner(),
            city: NonEmptyString::new(city)?.into_inner(),
            degree: NonEmptyString::new(degree)?.into_inner(),
            specialties: unique,
            years_of_experience,
            phone_number,
        })
    }
}
