use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::error::LineError;

pub type NodeId = i64;

/// One directed, weighted hop between two stations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: f64,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.from, self.to, self.distance)
    }
}

/// Parse every well-formed `from,to,distance` line of `input`, in order.
///
/// Line breaks may be CRLF, the escaped text `\r\n`, or any single Unicode
/// line boundary (LF, CR, VT, FF, the ASCII separators, NEL, LS, PS).
/// Lines that do not hold exactly three fields, or whose fields do not parse,
/// are dropped without being reported.
pub fn parse_edges(input: &str) -> Vec<Edge> {
    lazy_static! {
        // the escaped form goes first so `\r\n` typed out is never half-consumed
        static ref LINE_BREAK: Regex = Regex::new(r"\\r\\n|\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]").unwrap();
    }
    LINE_BREAK
        .split(input)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match parse_line(line) {
            Ok(edge) => Some(edge),
            Err(e) => {
                trace!("skipping line {line:?}: {e}");
                None
            }
        })
        .collect()
}

pub fn parse_line(line: &str) -> Result<Edge, LineError> {
    let fields = line.split(',').map(str::trim).collect::<Vec<_>>();
    let [from, to, distance] = fields[..] else {
        return Err(LineError::FieldCount(fields.len()));
    };
    Ok(Edge {
        from: parse_node(from)?,
        to: parse_node(to)?,
        distance: distance.parse().map_err(|source| LineError::Distance {
            field: distance.to_string(),
            source,
        })?,
    })
}

fn parse_node(field: &str) -> Result<NodeId, LineError> {
    field.parse().map_err(|source| LineError::Node {
        field: field.to_string(),
        source,
    })
}
