#![forbid(unsafe_code)]

pub mod catalog;
pub mod repository;
pub mod sqlite;

pub use repository::{
    InMemoryRepository, PreferencesRepository, ProgressRepository, Storage, StorageError,
};
