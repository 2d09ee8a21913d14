//! Game-playing agents built on the search engine.
//!
//! An agent is handed a position and a clock and must answer with a move
//! before the clock runs out. Timeouts never escape an agent: when the search
//! is interrupted the agent falls back to whatever it has, which may be
//! `Move::NONE`.

mod alpha_beta_agent;
mod minimax_agent;
mod random_agent;


use std::fmt;
use std::str::FromStr;

pub use alpha_beta_agent::AlphaBetaAgent;
pub use minimax_agent::MinimaxAgent;
pub use random_agent::RandomAgent;

use crate::board::Board;
use crate::evaluate::Heuristic;
use crate::moves::Move;
use crate::search::{GameState, SearchStrategy, TimeLeft, DEFAULT_TIMER_THRESHOLD};

pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

pub trait Agent<S: GameState> {
    fn name(&self) -> String;

    /// Picks a move for the active player of `state`, returning before
    /// `time_left` reports less than the agent's threshold. Returns
    /// `Move::NONE` if there is no legal move or nothing was found in time.
    fn select_move(&mut self, state: &S, time_left: &dyn TimeLeft) -> Move;
}

/// Search agent configuration
#[derive(Clone, Debug)]
pub struct AgentConfig<E> {
    /// Depth of the fixed-depth minimax agent.
    pub search_depth: u32,
    pub evaluator: E,
    /// Milliseconds of remaining time at which a search is abandoned.
    pub timer_threshold: f64,
    /// Search run at each iteration of iterative deepening.
    pub strategy: SearchStrategy,
    /// Deepest iteration of iterative deepening, unbounded if `None`.
    pub max_depth: Option<u32>,
}

impl<E: Default> Default for AgentConfig<E> {
    fn default() -> Self {
        Self::with_evaluator(E::default())
    }
}

impl<E> AgentConfig<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            evaluator,
            timer_threshold: DEFAULT_TIMER_THRESHOLD,
            strategy: SearchStrategy::default(),
            max_depth: None,
        }
    }
}

/// The agents available from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentKind {
    Minimax,
    AlphaBeta,
    Random,
}

impl AgentKind {
    pub fn build(&self, config: AgentConfig<Heuristic>) -> Box<dyn Agent<Board>> {
        match self {
            AgentKind::Minimax => Box::new(MinimaxAgent::new(config)),
            AgentKind::AlphaBeta => Box::new(AlphaBetaAgent::new(config)),
            AgentKind::Random => Box::new(RandomAgent::new()),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            AgentKind::Minimax => "minimax",
            AgentKind::AlphaBeta => "alpha-beta",
            AgentKind::Random => "random",
        };
        write!(f, "{}", kind)
    }
}

impl FromStr for AgentKind {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(AgentKind::Minimax),
            "alpha-beta" => Ok(AgentKind::AlphaBeta),
            "random" => Ok(AgentKind::Random),
            _ => Err("invalid agent; options are: minimax, alpha-beta, random"),
        }
    }
}
