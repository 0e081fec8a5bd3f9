//! The state machine engine and its error type.

mod engine;
pub mod error;

pub use engine::Fsm;
pub use error::FsmError;
