//! Error types for grid construction and search setup.
//!
//! A search that exhausts its frontier is not an error: it reports
//! [SearchStatus::Exhausted](crate::search::SearchStatus::Exhausted) and yields no path.
use thiserror::Error;

/// Result type for grid construction and cell access.
pub type GridResult<T> = Result<T, GridError>;

/// Result type for starting a search.
pub type SearchResult<T> = Result<T, SearchError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("obstacle density must lie in [0, 1], got {0}")]
    InvalidDensity(f64),
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
    #[error("at least two free cells are needed to place start and target, found {0}")]
    NotEnoughFreeCells(usize),
    #[error("cell ({row}, {col}) is an obstacle and cannot be an endpoint")]
    BlockedEndpoint { row: usize, col: usize },
    #[error("start and target must be distinct cells, both are ({row}, {col})")]
    SameEndpoints { row: usize, col: usize },
    #[error("could not parse grid: {0}")]
    Parse(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("grid still holds {visited} visited cells from an earlier search, call reset() first")]
    StaleGrid { visited: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy {0:?}, expected one of dfs, bfs, astar, wall")]
pub struct ParseStrategyError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown heading {0:?}, expected north, east, south, west or their initials")]
pub struct ParseHeadingError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_error_converts_into_search_error() {
        let err: SearchError = GridError::SameEndpoints { row: 1, col: 2 }.into();
        assert_eq!(err, SearchError::Grid(GridError::SameEndpoints { row: 1, col: 2 }));
        assert_eq!(
            err.to_string(),
            "start and target must be distinct cells, both are (1, 2)"
        );
    }
}
