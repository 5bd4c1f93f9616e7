#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod icons;
pub mod localization;
pub mod model;
pub mod time;

pub use time::Clock;
