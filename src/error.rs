use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::types::Label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("pop from an empty queue")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node label {label} is already in use")]
    DuplicateLabel { label: Label },
    #[error("node {label} is not part of the graph")]
    UnknownNode { label: Label },
    #[error("edge {start} -> {end} references unknown node {missing}")]
    UnknownEndpoint {
        start: Label,
        end: Label,
        missing: Label,
    },
    #[error("edge {start} -> {end} has a negative or undefined capacity")]
    InvalidCapacity { start: Label, end: Label },
    #[error("no free node label left above the largest one in use")]
    LabelsExhausted,
}

/// Which distinguished node of a flow network is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Source,
    Sink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("the {missing} of the flow network is not set")]
    Unconfigured { missing: Terminal },
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("breadth-first search lost track of its frontier: {0}")]
    Queue(#[from] QueueError),
    #[error("total flow exceeds the range of the capacity type")]
    Overflow,
}

/// Returned instead of an error when a link would duplicate an existing
/// ordered pair. The existing edge is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeConflict {
    pub start: Label,
    pub end: Label,
}

impl Display for Terminal {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Terminal::Source => write!(f, "source"),
            Terminal::Sink => write!(f, "sink"),
        }
    }
}

impl Display for EdgeConflict {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "edge {} -> {} already exists, new link ignored",
            self.start, self.end
        )
    }
}
