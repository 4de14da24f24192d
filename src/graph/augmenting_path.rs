use std::collections::{HashMap, HashSet};

use log::trace;

use crate::error::{FlowError, GraphError};
use crate::graph::Graph;
use crate::queue::Queue;
use crate::types::capacity::min;
use crate::types::{Capacity, Edge, Label};

/// A source-to-sink path with strictly positive residual capacity on every
/// edge, together with the amount of flow it can carry.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentingPath<C> {
    /// `(start, end)` pairs in order from the source to the sink.
    pub edges: Vec<(Label, Label)>,
    pub bottleneck: C,
}

impl<C> AugmentingPath<C> {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Labels visited by the path, source and sink included.
    pub fn nodes(&self) -> Vec<Label> {
        let mut nodes: Vec<Label> = self.edges.iter().map(|(start, _)| *start).collect();
        nodes.extend(self.edges.last().map(|(_, end)| *end));
        nodes
    }
}

/// Breadth-first search for a shortest (by edge count) augmenting path in
/// `residual`. Returns `None` if the sink cannot be reached.
pub fn augmenting_path<C: Capacity>(
    residual: &Graph<C>,
    source: Label,
    sink: Label,
) -> Result<Option<AugmentingPath<C>>, FlowError> {
    for label in [source, sink] {
        if !residual.contains_node(label) {
            return Err(GraphError::UnknownNode { label }.into());
        }
    }
    if source == sink {
        return Ok(None);
    }
    let mut visited = HashSet::from([source]);
    let mut parent: HashMap<Label, &Edge<C>> = HashMap::new();
    let mut queue = Queue::new();
    queue.push(source);
    while !queue.is_empty() {
        let node = queue.pop()?;
        trace!("Visiting {node}");
        if node == sink {
            break;
        }
        for edge in residual.outgoing(node) {
            if !visited.contains(&edge.end) && residual.residual_of(edge) > C::zero() {
                visited.insert(edge.end);
                parent.insert(edge.end, edge);
                queue.push(edge.end);
            }
        }
    }
    if !parent.contains_key(&sink) {
        return Ok(None);
    }
    Ok(trace_path(residual, &parent, sink))
}

fn trace_path<C: Capacity>(
    residual: &Graph<C>,
    parent: &HashMap<Label, &Edge<C>>,
    sink: Label,
) -> Option<AugmentingPath<C>> {
    let mut edges = Vec::new();
    let mut bottleneck: Option<C> = None;
    let mut node = sink;
    // The source is the only visited node without a parent edge.
    while let Some(edge) = parent.get(&node) {
        edges.push((edge.start, edge.end));
        let available = residual.residual_of(edge);
        bottleneck = Some(match bottleneck {
            Some(b) => min(b, available),
            None => available,
        });
        node = edge.start;
    }
    edges.reverse();
    bottleneck.map(|bottleneck| AugmentingPath { edges, bottleneck })
}
