mod augmenting_path;
mod flow;
#[allow(clippy::module_inception)]
mod graph;
mod network;

pub use crate::graph::augmenting_path::{augmenting_path, AugmentingPath};
pub use crate::graph::flow::FlowOutcome;
pub use crate::graph::graph::Graph;
pub use crate::graph::network::FlowNetwork;
