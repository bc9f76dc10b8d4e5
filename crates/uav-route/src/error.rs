use thiserror::Error;
use uav_core::CoreError;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("grid has no bases but {agents} agents need one")]
    NoBases { agents: usize },

    #[error("assignment has {found} sequences, planner expects {expected}")]
    AgentCountMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type RouteResult<T> = Result<T, RouteError>;
