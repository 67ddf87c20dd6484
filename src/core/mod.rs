pub mod doghouse;
pub mod endpoints;
pub mod engine;
pub mod pagination;
pub mod stats;

pub use crate::domain::model::{Answer, Breed, BreedId, BreedRecord, Dog, DogId, DogRecord, Page};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::Result;
