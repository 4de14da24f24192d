use std::ops::{Deref, DerefMut};

use log::warn;

use crate::error::{FlowError, GraphError, Terminal};
use crate::graph::augmenting_path::{augmenting_path, AugmentingPath};
use crate::graph::Graph;
use crate::types::{Capacity, Label};

/// A graph with a designated source and sink.
///
/// Construction goes through the underlying [`Graph`] (reachable via deref);
/// the terminals are set once the nodes exist.
#[derive(Debug, Clone)]
pub struct FlowNetwork<C> {
    graph: Graph<C>,
    source: Option<Label>,
    sink: Option<Label>,
}

impl<C> Default for FlowNetwork<C> {
    fn default() -> Self {
        FlowNetwork {
            graph: Graph::default(),
            source: None,
            sink: None,
        }
    }
}

impl<C: Capacity> FlowNetwork<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<Label> {
        self.source
    }

    pub fn sink(&self) -> Option<Label> {
        self.sink
    }

    /// Designates the source, returning the previous one if it is replaced.
    pub fn set_source(&mut self, label: Label) -> Result<Option<Label>, GraphError> {
        self.check_terminal(Terminal::Source, label)?;
        Ok(self.source.replace(label))
    }

    /// Designates the sink, returning the previous one if it is replaced.
    pub fn set_sink(&mut self, label: Label) -> Result<Option<Label>, GraphError> {
        self.check_terminal(Terminal::Sink, label)?;
        Ok(self.sink.replace(label))
    }

    pub fn graph(&self) -> &Graph<C> {
        &self.graph
    }

    /// Searches for a shortest augmenting path using the residual capacities
    /// of this network's own edges.
    pub fn find_augmenting_path(&self) -> Result<Option<AugmentingPath<C>>, FlowError> {
        let (source, sink) = self.terminals()?;
        augmenting_path(&self.graph, source, sink)
    }

    pub(crate) fn terminals(&self) -> Result<(Label, Label), FlowError> {
        let source = self.source.ok_or(FlowError::Unconfigured {
            missing: Terminal::Source,
        })?;
        let sink = self.sink.ok_or(FlowError::Unconfigured {
            missing: Terminal::Sink,
        })?;
        Ok((source, sink))
    }

    fn check_terminal(&self, terminal: Terminal, label: Label) -> Result<(), GraphError> {
        if !self.graph.contains_node(label) {
            return Err(GraphError::UnknownNode { label });
        }
        let current = match terminal {
            Terminal::Source => self.source,
            Terminal::Sink => self.sink,
        };
        if let Some(current) = current {
            if current != label {
                warn!("Redefining the {terminal} of the flow network: {current} -> {label}");
            }
        }
        Ok(())
    }
}

impl<C> Deref for FlowNetwork<C> {
    type Target = Graph<C>;

    fn deref(&self) -> &Graph<C> {
        &self.graph
    }
}

impl<C> DerefMut for FlowNetwork<C> {
    fn deref_mut(&mut self) -> &mut Graph<C> {
        &mut self.graph
    }
}
