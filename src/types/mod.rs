pub mod capacity;
pub mod edge;
pub mod node;

pub use capacity::Capacity;
pub use edge::Edge;
pub use node::{Label, Node, Role};
