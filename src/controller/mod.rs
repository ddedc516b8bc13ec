//! Match orchestration: setup, phase driving, AI execution, session resume.

pub mod manager;
pub mod session;
pub mod setup;

pub use manager::{MatchController, MatchObserver, NullObserver, VICTORY_REWARD};
pub use session::{AiBinding, SessionError, SessionSnapshot};
pub use setup::MatchSetup;
