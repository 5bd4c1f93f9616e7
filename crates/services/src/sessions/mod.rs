mod plan;
mod progress;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use plan::BatchPlanner;
pub use progress::{SessionPhase, SessionProgress, SessionSnapshot, SlideDirection};
pub use service::{Attempt, SessionController};
pub use workflow::{SessionAnswerResult, SessionLoopService};
