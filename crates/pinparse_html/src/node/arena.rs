use crate::node::Node;
use pinparse_shared::node::NodeId;
use std::collections::HashMap;

/// The node arena is the single source for nodes in a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeArena {
    /// Current nodes stored as <id, node>
    nodes: HashMap<NodeId, Node>,
    /// Next node ID to use
    next_id: NodeId,
}

impl NodeArena {
    /// Creates a new NodeArena
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gets the node with the given id
    pub fn node_ref(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get the node with the given id as a mutable reference
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Registers a node into the arena and returns the id it was given
    pub fn register_node(&mut self, mut node: Node) -> NodeId {
        let id = self.next_id;
        self.next_id = id.next();

        node.id = id;
        self.nodes.insert(id, node);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{FragmentData, NodeData};

    #[test]
    fn register_node() {
        let mut arena = NodeArena::new();
        let first = arena.register_node(Node::new(NodeData::Fragment(FragmentData::default())));
        let second = arena.register_node(Node::new(NodeData::Fragment(FragmentData::default())));

        assert!(first.is_root());
        assert_eq!(second, first.next());
        assert_eq!(arena.node_count(), 2);
        assert_eq!(arena.node_ref(second).map(|node| node.id), Some(second));
        assert!(arena.node_ref(second.next()).is_none());
    }

    #[test]
    fn mutate_node() {
        let mut arena = NodeArena::new();
        let id = arena.register_node(Node::new(NodeData::Fragment(FragmentData::default())));
        arena.node_mut(id).unwrap().children.push(NodeId::from(5usize));
        assert_eq!(arena.node_ref(id).unwrap().children, vec![NodeId::from(5usize)]);
    }
}
