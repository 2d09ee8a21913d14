//! Adversarial search for two-player, zero-sum, perfect-information games.
//!
//! # Algorithms
//!
//! ## Minimax
//! Explores every line of play to a fixed depth, alternating between the
//! searching player (who maximizes the evaluator's score) and its opponent
//! (who minimizes it). It is the reference the other searches are checked
//! against.
//!
//! ## Alpha-Beta Pruning
//! Same result as minimax at the same depth, but a node stops enumerating
//! moves as soon as it is proven unable to affect the decision at an
//! ancestor.
//!
//! ## Iterative Deepening
//! Runs a depth-limited search at depth 1, 2, 3, ... and keeps the move from
//! the deepest search that finished before the deadline.
//!
//! # Cancellation
//!
//! Every node polls a `TimeLeft` clock before doing any work. When the time
//! left drops below the context's threshold the search returns
//! `SearchError::Timeout`, which every recursive layer propagates with `?`.
//! Only `iterative_deepening` (and the agents built on the searches) turn it
//! back into a move.
//!
//! # Tie-breaking
//!
//! Moves are visited in the order the `GameState` enumerates them. The first
//! move becomes the incumbent and is only replaced by a strictly better one,
//! so equal scores resolve to the earliest move.

pub mod alpha_beta;
pub mod context;
pub mod iterative_deepening;
pub mod minimax;
pub mod timer;
pub mod traits;


pub use alpha_beta::{alpha_beta, alpha_beta_window};
pub use context::{SearchContext, SearchError, SearchStats, DEFAULT_TIMER_THRESHOLD};
pub use iterative_deepening::{iterative_deepening, DeepeningResult, SearchStrategy, Termination};
pub use minimax::minimax;
pub use timer::MoveTimer;
pub use traits::{Evaluator, GameState, TimeLeft};
