use std::collections::HashMap;

use log::{trace, warn};

use crate::error::{EdgeConflict, GraphError};
use crate::types::{Capacity, Edge, Label, Node, Role};

/// Directed graph with at most one edge per ordered pair of nodes.
///
/// Nodes live in an arena addressed by dense indices; caller labels are
/// translated once through `index`. Edges are stored in insertion order and
/// referenced by position from the adjacency lists and the pair lookup.
#[derive(Debug, Clone)]
pub struct Graph<C> {
    nodes: Vec<Node<C>>,
    index: HashMap<Label, usize>,
    edges: Vec<Edge<C>>,
    outgoing: Vec<Vec<usize>>,
    lookup: HashMap<(usize, usize), usize>,
    /// One past the largest label in use; `None` once `Label::MAX` is taken.
    next_label: Option<Label>,
}

impl<C> Default for Graph<C> {
    fn default() -> Self {
        Graph {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            lookup: HashMap::new(),
            next_label: Some(0),
        }
    }
}

impl<C: Capacity> Graph<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node<C>) -> Result<(), GraphError> {
        if self.index.contains_key(&node.label) {
            return Err(GraphError::DuplicateLabel { label: node.label });
        }
        trace!("Adding node {node}");
        if self.next_label.is_some_and(|next| node.label >= next) {
            self.next_label = node.label.checked_add(1);
        }
        self.index.insert(node.label, self.nodes.len());
        self.nodes.push(node);
        self.outgoing.push(Vec::new());
        Ok(())
    }

    /// Registers all nodes in order, stopping at the first label clash.
    pub fn add_nodes(
        &mut self,
        nodes: impl IntoIterator<Item = Node<C>>,
    ) -> Result<(), GraphError> {
        for node in nodes {
            self.add_node(node)?;
        }
        Ok(())
    }

    /// Adds a node under a fresh label, one past the largest label in use.
    pub fn insert_node(&mut self, role: Role, value: Option<C>) -> Result<Label, GraphError> {
        let label = self.next_label.ok_or(GraphError::LabelsExhausted)?;
        self.add_node(Node::new(label, role, value))?;
        Ok(label)
    }

    /// Adds the edge `start -> end`.
    ///
    /// A second link for an ordered pair that already has an edge does not
    /// replace it: the call is a no-op and the conflict is returned.
    pub fn add_link(
        &mut self,
        start: Label,
        end: Label,
        capacity: C,
    ) -> Result<Option<EdgeConflict>, GraphError> {
        let (from, to) = self.endpoints(start, end)?;
        if !capacity.is_valid_capacity() {
            return Err(GraphError::InvalidCapacity { start, end });
        }
        if self.lookup.contains_key(&(from, to)) {
            let conflict = EdgeConflict { start, end };
            warn!("{conflict}");
            return Ok(Some(conflict));
        }
        self.push_edge(from, to, Edge::new(start, end, capacity));
        Ok(None)
    }

    /// Adds one link from `start` for every `(end, capacity)` pair and
    /// returns the conflicts encountered.
    pub fn add_links(
        &mut self,
        start: Label,
        links: impl IntoIterator<Item = (Label, C)>,
    ) -> Result<Vec<EdgeConflict>, GraphError> {
        let mut conflicts = Vec::new();
        for (end, capacity) in links {
            conflicts.extend(self.add_link(start, end, capacity)?);
        }
        Ok(conflicts)
    }

    pub fn contains_node(&self, label: Label) -> bool {
        self.index.contains_key(&label)
    }

    pub fn node(&self, label: Label) -> Option<&Node<C>> {
        self.position(label).map(|i| &self.nodes[i])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<C>> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_edge(&self, start: Label, end: Label) -> bool {
        self.edge_position(start, end).is_some()
    }

    pub fn find_edge(&self, start: Label, end: Label) -> Option<&Edge<C>> {
        self.edge_position(start, end).map(|i| &self.edges[i])
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<C>> {
        self.edges.iter()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Flow that can still be pushed along `edge`: its unused capacity plus
    /// the flow on the opposite edge that could be cancelled.
    pub fn residual_of(&self, edge: &Edge<C>) -> C {
        let cancellable = self
            .find_edge(edge.end, edge.start)
            .map_or_else(C::zero, |reverse| reverse.flow.clone());
        edge.residual().saturating_add(&cancellable)
    }

    /// Edges leaving `label`, in insertion order. Empty for unknown labels.
    pub fn outgoing(&self, label: Label) -> impl Iterator<Item = &Edge<C>> {
        self.position(label)
            .map(|i| self.outgoing[i].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|e| &self.edges[*e])
    }

    pub(crate) fn find_edge_mut(&mut self, start: Label, end: Label) -> Option<&mut Edge<C>> {
        self.edge_position(start, end).map(|i| &mut self.edges[i])
    }

    pub(crate) fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge<C>> {
        self.edges.iter_mut()
    }

    /// Returns the edge `start -> end`, creating it with zero capacity if
    /// both endpoints exist but the pair has no edge yet.
    pub(crate) fn edge_or_insert(
        &mut self,
        start: Label,
        end: Label,
    ) -> Result<&mut Edge<C>, GraphError> {
        let (from, to) = self.endpoints(start, end)?;
        let i = match self.lookup.get(&(from, to)).copied() {
            Some(i) => i,
            None => self.push_edge(from, to, Edge::new(start, end, C::zero())),
        };
        Ok(&mut self.edges[i])
    }

    fn push_edge(&mut self, from: usize, to: usize, edge: Edge<C>) -> usize {
        let i = self.edges.len();
        self.outgoing[from].push(i);
        self.lookup.insert((from, to), i);
        self.edges.push(edge);
        i
    }

    fn endpoints(&self, start: Label, end: Label) -> Result<(usize, usize), GraphError> {
        let missing = |missing| GraphError::UnknownEndpoint {
            start,
            end,
            missing,
        };
        let from = self.position(start).ok_or(missing(start))?;
        let to = self.position(end).ok_or(missing(end))?;
        Ok((from, to))
    }

    fn position(&self, label: Label) -> Option<usize> {
        self.index.get(&label).copied()
    }

    fn edge_position(&self, start: Label, end: Label) -> Option<usize> {
        let from = self.position(start)?;
        let to = self.position(end)?;
        self.lookup.get(&(from, to)).copied()
    }
}
