//! Random Address Generation
//!
//! Stateless: each call picks street, number, and city independently
//! and uniformly at random and pairs the result with a fresh v4
//! identifier. Nothing is persisted and no determinism is guaranteed.

use rand::Rng;
use uuid::Uuid;

use diak::AddressPayload;

const STREETS: &[&str] = &[
    "Kossuth",
    "Petőfi",
    "Rákóczi",
    "Andrássy",
    "Váci",
    "Bajcsy-Zsilinszky",
    "Rottenbiller",
];

const NUMBERS: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];

const CITIES: &[&str] = &[
    "Budapest",
    "Debrecen",
    "Szeged",
    "Miskolc",
    "Pécs",
    "Győr",
    "Nyíregyháza",
];

/// Produce one formatted address with a fresh identifier
pub fn random_address() -> AddressPayload {
    let mut rng = rand::thread_rng();
    let street = STREETS[rng.gen_range(0..STREETS.len())];
    let number = NUMBERS[rng.gen_range(0..NUMBERS.len())];
    let city = CITIES[rng.gen_range(0..CITIES.len())];

    AddressPayload {
        id: Uuid::new_v4(),
        address: format!("{street} utca {number}, {city}"),
    }
}
