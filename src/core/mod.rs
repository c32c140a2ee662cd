pub mod error;
pub mod graph;
pub mod models;

use crate::core::error::{DepsortError, DepsortResult};
use crate::core::graph::TaskGraph;
use crate::core::models::Schedule;
use std::io::BufRead;

/// Build the dependency graph from paired input lines and sort it.
///
/// Lines come in pairs: line 2i names a task, line 2i+1 the prerequisite it
/// depends on. An odd line count leaves a dangling half-pair and is rejected
/// before any graph construction, so malformed input can never be mistaken
/// for a cycle.
pub fn plan(lines: &[String]) -> DepsortResult<Schedule> {
    if lines.len() % 2 != 0 {
        return Err(DepsortError::OddLineCount(lines.len()));
    }

    let mut graph = TaskGraph::new();
    for pair in lines.chunks_exact(2) {
        graph.add_dependency(&pair[0], &pair[1]);
    }

    Ok(graph.toposort())
}

/// Read all input lines up front, line endings stripped.
pub fn read_lines<R: BufRead>(reader: R) -> DepsortResult<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}
