//! Search node arena entries and the frontier ordering key.

use gripper_kernel::operators::action::Action;
use gripper_kernel::world::state::WorldState;

/// A node in the search arena.
///
/// Nodes are never mutated after creation. `node_id` is the node's index
/// in the arena, so parent links are plain indices.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Arena index.
    pub node_id: usize,
    /// Parent arena index (`None` for the root).
    pub parent_id: Option<usize>,
    pub state: WorldState,
    /// `WorldState::identity_bytes()`; the closed-set key.
    pub state_key: Vec<u8>,
    /// Actions from the root (root = 0).
    pub depth: u32,
    /// Cumulative path cost.
    pub g_cost: u64,
    /// Heuristic estimate at creation.
    pub h_cost: u64,
    /// Frontier priority under the active strategy.
    pub priority: u64,
    /// Global counter for deterministic tie-breaking.
    pub creation_order: u64,
    /// The action that produced this node from its parent.
    pub action: Option<Action>,
}

impl SearchNode {
    /// `g + h`, independent of the strategy used to order the frontier.
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.g_cost.saturating_add(self.h_cost)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Frontier ordering: `(priority, depth, creation_order)`, lower first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: u64,
    pub depth: u32,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.depth.cmp(&other.depth))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            priority: node.priority,
            depth: node.depth,
            creation_order: node.creation_order,
        }
    }
}
