//! Trek path simulator.
//!
//! Turns a path string into the ordered states a walker passes through,
//! under either movement model, and measures how far it ended up.
//!
//! ```text
//! path text → tokenize → fold(step) → [State; tokens + 1] → distance
//! ```

pub mod error;
pub mod simulator;
pub mod step;

pub use error::{SimResult, SimulateError};
pub use simulator::{
    distance, simulate, simulate_from_origin, simulate_strict, simulate_tokens, Journey,
};
pub use step::step;
