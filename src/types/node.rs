use std::fmt::{Display, Formatter};

/// Caller-assigned node identifier, unique within a graph.
pub type Label = u64;

/// Presentation tag of a node. Never consulted by the flow computation.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Role {
    Source,
    Consumer,
    #[default]
    Neutral,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node<C> {
    pub label: Label,
    pub role: Role,
    pub value: Option<C>,
}

impl<C> Node<C> {
    pub fn new(label: Label, role: Role, value: Option<C>) -> Self {
        Node { label, role, value }
    }

    /// A node producing `value`.
    pub fn source(label: Label, value: C) -> Self {
        Node::new(label, Role::Source, Some(value))
    }

    /// A node consuming `value`.
    pub fn consumer(label: Label, value: C) -> Self {
        Node::new(label, Role::Consumer, Some(value))
    }

    pub fn neutral(label: Label) -> Self {
        Node::new(label, Role::Neutral, None)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Role::Source => write!(f, "source"),
            Role::Consumer => write!(f, "consumer"),
            Role::Neutral => write!(f, "neutral"),
        }
    }
}

impl<C: Display> Display for Node<C> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "({} {} {value})", self.role, self.label),
            None => write!(f, "({} {})", self.role, self.label),
        }
    }
}
