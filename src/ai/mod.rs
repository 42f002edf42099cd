//! Move pickers: the [`Agent`] seam the UI and arena drive, and the
//! uniform-random [`RandomAgent`].

mod agent;
mod random;

pub use agent::Agent;
pub use random::RandomAgent;
