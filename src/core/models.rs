use serde::Serialize;

/// Terminal outcome of a scheduling run.
///
/// A cycle is a normal result, not a failure: the tool ran to completion and
/// the input simply admits no valid order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum Schedule {
    /// Every task was placed; identifiers in emission order.
    Order { tasks: Vec<String> },
    /// The unscheduled remainder contains a dependency cycle.
    Cycle,
}

impl Schedule {
    pub fn is_cycle(&self) -> bool {
        matches!(self, Schedule::Cycle)
    }

    /// Number of scheduled tasks (zero for a cycle).
    pub fn len(&self) -> usize {
        match self {
            Schedule::Order { tasks } => tasks.len(),
            Schedule::Cycle => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
