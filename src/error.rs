use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Why a single input line did not become an edge.
#[derive(Debug, Error, PartialEq)]
pub enum LineError {
    #[error("expected 3 comma separated fields, found {0}")]
    FieldCount(usize),
    #[error("invalid station id {field:?}: {source}")]
    Node {
        field: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid distance {field:?}: {source}")]
    Distance {
        field: String,
        #[source]
        source: ParseFloatError,
    },
}
