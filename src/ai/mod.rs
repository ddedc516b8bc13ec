//! AI decision engine: strategy profiles and per-opponent planning.
//!
//! One [`AiSystem`] is bound to each AI-controlled country at match setup.
//! It proposes purchase and targeting intents; it never mutates match state.

pub mod engine;
pub mod strategy;

pub use engine::AiSystem;
pub use strategy::Strategy;
