use std::fmt::{Display, Formatter};

use crate::types::{Capacity, Label};

#[derive(Clone, Debug, PartialEq)]
pub struct Edge<C> {
    pub start: Label,
    pub end: Label,
    pub capacity: C,
    pub flow: C,
}

impl<C: Capacity> Edge<C> {
    pub fn new(start: Label, end: Label, capacity: C) -> Self {
        Edge {
            start,
            end,
            capacity,
            flow: C::zero(),
        }
    }

    /// Capacity not yet used by flow on this edge. Flow on the opposite edge
    /// that could be cancelled is not included, see `Graph::residual_of`.
    pub fn residual(&self) -> C {
        self.capacity.clone() - self.flow.clone()
    }
}

impl<C: Display> Display for Edge<C> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({}/{})",
            self.start, self.end, self.flow, self.capacity
        )
    }
}
