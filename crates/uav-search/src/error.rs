use thiserror::Error;
use uav_route::RouteError;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("route planning error: {0}")]
    Route(#[from] RouteError),
}

pub type SearchResult<T> = Result<T, SearchError>;
