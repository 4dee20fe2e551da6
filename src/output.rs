use std::io::{self, Write};

use crate::edge::NodeId;

const LINE_END: &str = "\r\n";

/// Render a route as one station id per line, every line ended by CRLF.
pub fn render(path: &[NodeId]) -> String {
    let mut s = path
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(LINE_END);
    s.push_str(LINE_END);
    s
}

pub fn write_route<W: Write>(mut out: W, path: &[NodeId]) -> io::Result<()> {
    out.write_all(render(path).as_bytes())?;
    out.flush()
}
