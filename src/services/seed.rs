//! Sample data used to populate an empty directory.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::domain::advocate::{Advocate, DEGREES, NewAdvocate, SPECIALTIES};
use crate::domain::types::{PhoneNumber, TypeConstraintError};
use crate::models::config::ServerConfig;
use crate::repository::AdvocateWriter;
use crate::services::{ServiceError, ServiceResult};

const FIRST_NAMES: [&str; 16] = [
    "John", "Jane", "Alice", "Michael", "Emily", "Chris", "Jessica", "David", "Laura", "Daniel",
    "Sarah", "James", "Megan", "Joshua", "Amanda", "Priya",
];

const LAST_NAMES: [&str; 16] = [
    "Doe", "Smith", "Johnson", "Brown", "Davis", "Martinez", "Taylor", "Harris", "Clark",
    "Lewis", "Lee", "King", "Green", "Walker", "Hall", "Patel",
];

const CITIES: [&str; 15] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
    "Austin",
    "Jacksonville",
    "San Francisco",
    "Columbus",
    "Fort Worth",
];

type SampleRow = (&'static str, &'static str, &'static str, &'static str, &'static [&'static str], i32, i64);

const SAMPLE_ADVOCATES: [SampleRow; 15] = [
    ("John", "Doe", "New York", "MD", &["Bipolar", "LGBTQ", "Medication/Prescribing"], 10, 5551234567),
    ("Jane", "Smith", "Los Angeles", "PhD", &["Trauma & PTSD", "Relationship Issues"], 8, 5559876543),
    ("Alice", "Johnson", "Chicago", "MSW", &["General Mental Health", "Sleep Issues"], 5, 5554567890),
    ("Michael", "Brown", "Houston", "MD", &["Chronic Pain", "Weight Loss & Nutrition"], 12, 5556543210),
    ("Emily", "Davis", "Phoenix", "PhD", &["Eating Disorders", "Personality Disorders"], 7, 5553210987),
    ("Chris", "Martinez", "Philadelphia", "MSW", &["Men's Issues", "Life Coaching"], 9, 5557890123),
    ("Jessica", "Taylor", "San Antonio", "MD", &["Attention and Hyperactivity (ADHD)"], 11, 5554561234),
    ("David", "Harris", "San Diego", "PhD", &["Learning Disorders", "Domestic Abuse"], 6, 5557896543),
    ("Laura", "Clark", "Dallas", "MSW", &["Suicide History/Attempts", "Bipolar"], 4, 5550123456),
    ("Daniel", "Lewis", "San Jose", "MD", &["Schizophrenia and Psychotic Disorders"], 13, 5553217654),
    ("Sarah", "Lee", "Austin", "PhD", &["Obsessive-Compulsive Disorders", "LGBTQ"], 10, 5551238765),
    ("James", "King", "Jacksonville", "MSW", &["Diabetic Diet and Nutrition"], 5, 5556540987),
    ("Megan", "Green", "San Francisco", "MD", &["General Mental Health", "Trauma & PTSD"], 14, 5553214321),
    ("Joshua", "Walker", "Columbus", "PhD", &["Relationship Issues", "Men's Issues"], 9, 5551239876),
    ("Amanda", "Hall", "Fort Worth", "MSW", &["Sleep Issues", "Chronic Pain"], 3, 5554565678),
];

/// The fixed advocates every seeded directory starts with.
pub fn sample_advocates() -> Result<Vec<NewAdvocate>, TypeConstraintError> {
    SAMPLE_ADVOCATES
        .iter()
        .map(|(first, last, city, degree, specialties, years, phone)| {
            NewAdvocate::new(
                first,
                last,
                city,
                degree,
                specialties,
                *years,
                PhoneNumber::new(*phone)?,
            )
        })
        .collect()
}

/// Generates `count` plausible advocates.
pub fn random_advocates<G>(rng: &mut G, count: usize) -> Result<Vec<NewAdvocate>, TypeConstraintError>
where
    G: Rng + ?Sized,
{
    (0..count)
        .map(|_| {
            let specialty_count = rng.random_range(1..=4);
            let specialties: Vec<&str> = SPECIALTIES
                .choose_multiple(rng, specialty_count)
                .copied()
                .collect();

            NewAdvocate::new(
                FIRST_NAMES.choose(rng).copied().unwrap_or("Alex"),
                LAST_NAMES.choose(rng).copied().unwrap_or("Morgan"),
                CITIES.choose(rng).copied().unwrap_or("Austin"),
                DEGREES.choose(rng).copied().unwrap_or("MD"),
                &specialties,
                rng.random_range(0..=30),
                PhoneNumber::new(rng.random_range(2_000_000_000..=9_999_999_999))?,
            )
        })
        .collect()
}

/// Inserts the sample dataset plus generated advocates.
///
/// Refuses to run when the server is configured for production.
pub fn seed_advocates<R, G>(
    repo: &R,
    config: &ServerConfig,
    rng: &mut G,
) -> ServiceResult<Vec<Advocate>>
where
    R: AdvocateWriter + ?Sized,
    G: Rng + ?Sized,
{
    if config.is_production() {
        log::warn!("Refusing to seed advocates in {}", config.environment);
        return Err(ServiceError::Forbidden(
            "cannot seed db in production".to_string(),
        ));
    }

    let mut new_advocates = sample_advocates()?;
    new_advocates.extend(random_advocates(rng, config.seed_random_records)?);

    let stored = repo.create_advocates(&new_advocates).map_err(|err| {
        log::error!("Failed to seed advocates: {err}");
        ServiceError::from(err)
    })?;

    log::info!("Seeded {} advocates", stored.len());

    Ok(stored)
}
