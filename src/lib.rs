//! Maximum flow between a source and a sink of a capacitated directed graph,
//! computed with the Edmonds-Karp variant of Ford-Fulkerson.

pub mod error;
pub mod graph;
pub mod queue;
pub mod types;

pub use crate::error::{EdgeConflict, FlowError, GraphError, QueueError, Terminal};
pub use crate::graph::{AugmentingPath, FlowNetwork, FlowOutcome, Graph};
pub use crate::types::{Capacity, Edge, Label, Node, Role};
