pub mod agent;
pub mod board;
pub mod evaluate;
pub mod game;
pub mod moves;
pub mod search;

#[cfg(feature = "instrumentation")]
pub mod instrumentation;
