//! Explicit game graphs.
//!
//! A game written out node by node: each node has a side to move, a static
//! score, an optional payoff (which makes it terminal) and an ordered list
//! of successor nodes. Edges may point anywhere, including back up the
//! graph, so cycles and transpositions are easy to build.
//!
//! The position key is the node id. Reaching a node twice on one path is a
//! repetition.
//!
//! ```
//! use rust_alphabeta::core::{AdversarialState, Side};
//! use rust_alphabeta::games::graph::GraphBuilder;
//!
//! let mut graph = GraphBuilder::new();
//! let root = graph.add_node(Side::Max, 0.0);
//! let left = graph.add_node(Side::Min, 1.0);
//! graph.add_edge(root, left).add_edge(left, root);
//!
//! let state = graph.build(root);
//! assert_eq!(state.legal_actions(), vec![left]);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AdversarialState, Payoff, Side};
use crate::heuristic::Heuristic;

/// Index of a node in a game graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One node of a game graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Side to move here.
    pub side: Side,

    /// Static score from the maximizer's perspective.
    pub score: f64,

    /// Set on terminal nodes.
    pub payoff: Option<Payoff>,

    /// Successors in action order.
    pub edges: SmallVec<[NodeId; 4]>,
}

/// Builder for a shared, immutable game graph.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<GraphNode>,
}

impl GraphBuilder {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a non-terminal node.
    pub fn add_node(&mut self, side: Side, score: f64) -> NodeId {
        self.push(GraphNode {
            side,
            score,
            payoff: None,
            edges: SmallVec::new(),
        })
    }

    /// Add a terminal node with the given payoff.
    pub fn add_terminal(&mut self, payoff: Payoff) -> NodeId {
        self.push(GraphNode {
            side: Side::Max,
            score: 0.0,
            payoff: Some(payoff),
            edges: SmallVec::new(),
        })
    }

    /// Add an action from `from` leading to `to`.
    ///
    /// # Panics
    /// If `from` was not created by this builder.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> &mut Self {
        self.nodes[from.index()].edges.push(to);
        self
    }

    /// Number of nodes added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// No nodes added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freeze the graph and start a game at `root`.
    #[must_use]
    pub fn build(&self, root: NodeId) -> GraphState {
        GraphState {
            graph: Arc::new(self.nodes.clone()),
            node: root,
        }
    }

    fn push(&mut self, node: GraphNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }
}

/// Current node in a shared game graph.
///
/// Cloning shares the graph.
#[derive(Clone, Debug)]
pub struct GraphState {
    graph: Arc<Vec<GraphNode>>,
    node: NodeId,
}

impl GraphState {
    /// The current node.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Static score of the current node.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.current().score
    }

    /// The same graph positioned at `node`.
    #[must_use]
    pub fn at(&self, node: NodeId) -> Self {
        Self {
            graph: Arc::clone(&self.graph),
            node,
        }
    }

    fn current(&self) -> &GraphNode {
        &self.graph[self.node.index()]
    }
}

impl AdversarialState for GraphState {
    type Action = NodeId;
    type Key = NodeId;

    fn is_terminal(&self) -> bool {
        self.current().payoff.is_some()
    }

    fn payoff(&self) -> Payoff {
        self.current().payoff.unwrap_or(Payoff::Draw)
    }

    fn actor(&self) -> Side {
        self.current().side
    }

    fn legal_actions(&self) -> Vec<NodeId> {
        self.current().edges.to_vec()
    }

    fn apply(&self, action: &NodeId) -> Self {
        self.at(*action)
    }

    fn position_key(&self) -> NodeId {
        self.node
    }
}

/// Heuristic returning each node's static score.
#[derive(Clone, Copy, Debug, Default)]
pub struct NodeScore;

impl Heuristic<GraphState> for NodeScore {
    fn evaluate(&self, state: &GraphState) -> f64 {
        state.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_nodes() {
        let mut graph = GraphBuilder::new();
        let root = graph.add_node(Side::Max, 0.5);
        let won = graph.add_terminal(Payoff::MinWins);
        graph.add_edge(root, won);

        let state = graph.build(root);
        assert!(!state.is_terminal());
        assert_eq!(state.score(), 0.5);

        let next = state.apply(&won);
        assert!(next.is_terminal());
        assert_eq!(next.payoff(), Payoff::MinWins);
        assert!(next.legal_actions().is_empty());
    }

    #[test]
    fn test_cycles_share_keys() {
        let mut graph = GraphBuilder::new();
        let a = graph.add_node(Side::Max, 0.0);
        let b = graph.add_node(Side::Min, 0.0);
        graph.add_edge(a, b).add_edge(b, a);

        let start = graph.build(a);
        let back = start.apply(&b).apply(&a);
        assert_eq!(start.position_key(), back.position_key());
        assert_eq!(back.actor(), Side::Max);
    }

    #[test]
    fn test_edges_keep_insertion_order() {
        let mut graph = GraphBuilder::new();
        let root = graph.add_node(Side::Max, 0.0);
        let children: Vec<_> = (0..6).map(|i| graph.add_node(Side::Min, i as f64)).collect();
        for &child in &children {
            graph.add_edge(root, child);
        }

        assert_eq!(graph.len(), 7);
        assert_eq!(graph.build(root).legal_actions(), children);
    }
}
