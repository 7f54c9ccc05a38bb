//! Stateless hash helpers for mapping string keys to bucket indices.
pub mod bkdr;
