#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod preferences_service;
pub mod progress;
pub mod sessions;
pub mod writer;

pub use lingua_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, PreferencesError, ProgressError, SessionError};
pub use preferences_service::PreferencesService;
pub use progress::ProgressAggregator;
pub use writer::{ProgressJob, ProgressWriter};

pub use sessions::{
    Attempt, BatchPlanner, SessionAnswerResult, SessionController, SessionLoopService,
    SessionPhase, SessionProgress, SessionSnapshot, SlideDirection,
};
