use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::error::FlowError;
use crate::graph::augmenting_path::augmenting_path;
use crate::graph::{FlowNetwork, Graph};
use crate::queue::Queue;
use crate::types::capacity::min;
use crate::types::{Capacity, Edge, Label};

/// Result of a flow computation.
#[derive(Debug, Clone)]
pub struct FlowOutcome<C> {
    pub value: C,
    /// Number of augmenting paths applied.
    pub augmentations: usize,
    /// Residual graph left over when the computation stopped.
    pub residual: Graph<C>,
    source: Label,
}

impl<C: Capacity> FlowNetwork<C> {
    /// Maximum flow from the source to the sink.
    ///
    /// The flow carried by each of this network's edges is updated to the
    /// computed assignment.
    pub fn max_flow(&mut self) -> Result<C, FlowError> {
        Ok(self.compute_flow(None)?.value)
    }

    /// Edmonds-Karp: repeatedly push flow along shortest augmenting paths of a
    /// private residual copy until none is left, or until `requested` is met.
    pub fn compute_flow(&mut self, requested: Option<C>) -> Result<FlowOutcome<C>, FlowError> {
        let (source, sink) = self.terminals()?;
        for edge in self.edges_mut() {
            edge.flow = C::zero();
        }
        let mut residual = self.graph().clone();
        let mut value = C::zero();
        let mut augmentations = 0;

        if source != sink {
            loop {
                if let Some(limit) = &requested {
                    if value >= *limit {
                        break;
                    }
                }
                let Some(path) = augmenting_path(&residual, source, sink)? else {
                    break;
                };
                let amount = match &requested {
                    Some(limit) => min(path.bottleneck.clone(), limit.clone() - value.clone()),
                    None => path.bottleneck.clone(),
                };
                debug!(
                    "Augmenting path of {} edges, pushing {amount}",
                    path.len()
                );
                for (start, end) in &path.edges {
                    // The opposite edge must exist for later searches to
                    // walk back along it.
                    residual.edge_or_insert(*end, *start)?;
                    push_flow(&mut residual, *start, *end, amount.clone());
                    let dropped = push_flow(self, *start, *end, amount.clone());
                    debug_assert!(dropped.is_zero(), "{start} -> {end} lost {dropped}");
                }
                value = value.checked_add(&amount).ok_or(FlowError::Overflow)?;
                augmentations += 1;
            }
        }

        info!("Max flow: {value} ({augmentations} augmenting paths)");
        Ok(FlowOutcome {
            value,
            augmentations,
            residual,
            source,
        })
    }
}

/// Moves `amount` along `start -> end`, first cancelling flow on the opposite
/// edge and then adding the rest to the edge itself.
///
/// Returns the part of `amount` that had no edge to land on. Every edge of an
/// augmenting path has residual capacity `capacity - flow + opposite flow`,
/// so this is zero unless `start -> end` is missing while its opposite edge
/// cannot absorb the whole amount. On the residual copy the edge always
/// exists; on the caller's network a missing edge only ever carries pushes
/// that cancel earlier flow. This is the only place flow could be dropped.
fn push_flow<C: Capacity>(graph: &mut Graph<C>, start: Label, end: Label, amount: C) -> C {
    let mut remaining = amount;
    if let Some(reverse) = graph.find_edge_mut(end, start) {
        let cancelled = min(remaining.clone(), reverse.flow.clone());
        reverse.flow = reverse.flow.clone() - cancelled.clone();
        remaining = remaining - cancelled;
    }
    if remaining.is_zero() {
        return remaining;
    }
    match graph.find_edge_mut(start, end) {
        Some(edge) => {
            edge.flow = edge.flow.clone() + remaining;
            C::zero()
        }
        None => {
            warn!("No edge {start} -> {end} to carry {remaining}");
            remaining
        }
    }
}

impl<C: Capacity> FlowOutcome<C> {
    /// Labels reachable from the source through edges with remaining
    /// residual capacity. After a maximum flow this is the source side of a
    /// minimum cut.
    pub fn source_side(&self) -> Result<BTreeSet<Label>, FlowError> {
        let mut reached = BTreeSet::from([self.source]);
        let mut queue = Queue::new();
        queue.push(self.source);
        while !queue.is_empty() {
            let node = queue.pop()?;
            for edge in self.residual.outgoing(node) {
                if self.residual.residual_of(edge) > C::zero() && reached.insert(edge.end) {
                    queue.push(edge.end);
                }
            }
        }
        Ok(reached)
    }

    /// Edges of `network` leaving the source side. Their capacities sum up to
    /// the flow value when the flow is maximal.
    pub fn cut_edges<'a>(&self, network: &'a Graph<C>) -> Result<Vec<&'a Edge<C>>, FlowError> {
        let side = self.source_side()?;
        Ok(network
            .edges()
            .filter(|e| side.contains(&e.start) && !side.contains(&e.end))
            .collect())
    }
}
