//! `SearchGraph`: expansion-event audit log.
//!
//! The ordered list of [`ExpandEvent`]s is the decision record. Node
//! summaries are a derived index over the arena.

use gripper_kernel::operators::action::Action;
use gripper_kernel::operators::apply::ApplyFailure;
use gripper_kernel::operators::physics::PlacementRule;
use gripper_kernel::proof::canon::{canonical_json_bytes, CanonError};
use gripper_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_GRAPH};

use crate::node::FrontierKey;

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraph {
    /// Ordered expansion events.
    pub expansions: Vec<ExpandEvent>,
    /// One summary per arena node, in `node_id` order.
    pub node_summaries: Vec<NodeSummary>,
    pub metadata: SearchGraphMetadata,
}

/// One frontier pop that led to successor generation.
#[derive(Debug, Clone)]
pub struct ExpandEvent {
    /// 0-based count of expansions before this one.
    pub expansion_order: u64,
    pub node_id: usize,
    /// Hex digest of the expanded state's fingerprint.
    pub state_fingerprint: String,
    pub pop_key: FrontierKey,
    /// One record per action in `Action::ALL` order.
    pub successors: Vec<SuccessorRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessorRecord {
    pub action: Action,
    pub outcome: SuccessorOutcome,
}

/// What happened to one candidate action during an expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessorOutcome {
    /// Legal and new; pushed as `to_node`.
    Applied { to_node: usize },
    /// Legal, but the resulting state was already expanded.
    ClosedSuppressed,
    /// Not applicable in this state.
    Rejected(RejectionKind),
}

/// Serializable mirror of kernel [`ApplyFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    ArmAtEdge,
    HandOccupied,
    StackEmpty,
    HandEmpty,
    Placement(PlacementRule),
    UnknownObject,
}

impl From<&ApplyFailure> for RejectionKind {
    fn from(failure: &ApplyFailure) -> Self {
        match failure {
            ApplyFailure::ArmAtLeftEdge | ApplyFailure::ArmAtRightEdge => Self::ArmAtEdge,
            ApplyFailure::HandOccupied { .. } => Self::HandOccupied,
            ApplyFailure::StackEmpty { .. } => Self::StackEmpty,
            ApplyFailure::HandEmpty => Self::HandEmpty,
            ApplyFailure::UnsupportedPlacement { rule, .. } => Self::Placement(*rule),
            ApplyFailure::UnknownObject { .. } => Self::UnknownObject,
        }
    }
}

/// Derived per-node index.
#[derive(Debug, Clone)]
pub struct NodeSummary {
    pub node_id: usize,
    pub parent_id: Option<usize>,
    pub action: Option<Action>,
    pub state_fingerprint: String,
    pub depth: u32,
    pub g_cost: u64,
    pub h_cost: u64,
    pub is_goal: bool,
    /// Set when the node was expanded.
    pub expansion_order: Option<u64>,
}

/// Counters, bindings and the termination reason.
#[derive(Debug, Clone)]
pub struct SearchGraphMetadata {
    pub heuristic: String,
    /// Echo of [`crate::policy::SearchPolicy::to_json`].
    pub policy: serde_json::Value,
    pub root_state_fingerprint: String,
    pub total_expansions: u64,
    pub total_nodes_generated: u64,
    pub total_closed_suppressed: u64,
    /// Popped entries discarded because their state was already closed.
    pub total_stale_pops: u64,
    pub total_rejected: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A popped node satisfied the goal.
    GoalReached { node_id: usize },
    /// Every reachable state was expanded without meeting the goal.
    FrontierExhausted,
    /// The expansion count went past `limit`.
    IterationLimitExceeded { limit: u64 },
    /// The heuristic panicked; the panic was caught.
    HeuristicPanicked,
}

impl TerminationReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::IterationLimitExceeded { .. } => "iteration_limit_exceeded",
            Self::HeuristicPanicked => "heuristic_panicked",
        }
    }
}

impl SearchGraph {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the value contains a non-integer number,
    /// which the graph never produces.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Domain-separated SHA-256 over the canonical JSON.
    ///
    /// # Errors
    ///
    /// See [`SearchGraph::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_GRAPH, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": self.node_summaries.iter().map(node_summary_to_json).collect::<Vec<_>>(),
        })
    }
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "expansion_order": e.expansion_order,
        "node_id": e.node_id,
        "pop_key": {
            "creation_order": e.pop_key.creation_order,
            "depth": e.pop_key.depth,
            "priority": e.pop_key.priority,
        },
        "state_fingerprint": e.state_fingerprint,
        "successors": e.successors.iter().map(successor_to_json).collect::<Vec<_>>(),
    })
}

fn successor_to_json(r: &SuccessorRecord) -> serde_json::Value {
    serde_json::json!({
        "action": r.action.token(),
        "outcome": outcome_to_json(r.outcome),
    })
}

fn outcome_to_json(o: SuccessorOutcome) -> serde_json::Value {
    match o {
        SuccessorOutcome::Applied { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "applied"})
        }
        SuccessorOutcome::ClosedSuppressed => serde_json::json!({"type": "closed_suppressed"}),
        SuccessorOutcome::Rejected(kind) => {
            serde_json::json!({"reason": rejection_str(kind), "type": "rejected"})
        }
    }
}

fn rejection_str(k: RejectionKind) -> &'static str {
    match k {
        RejectionKind::ArmAtEdge => "arm_at_edge",
        RejectionKind::HandOccupied => "hand_occupied",
        RejectionKind::StackEmpty => "stack_empty",
        RejectionKind::HandEmpty => "hand_empty",
        RejectionKind::Placement(rule) => rule.as_str(),
        RejectionKind::UnknownObject => "unknown_object",
    }
}

fn node_summary_to_json(n: &NodeSummary) -> serde_json::Value {
    serde_json::json!({
        "action": n.action.map(Action::token),
        "depth": n.depth,
        "expansion_order": n.expansion_order,
        "g_cost": n.g_cost,
        "h_cost": n.h_cost,
        "is_goal": n.is_goal,
        "node_id": n.node_id,
        "parent_id": n.parent_id,
        "state_fingerprint": n.state_fingerprint,
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "frontier_high_water": m.frontier_high_water,
        "heuristic": m.heuristic,
        "policy": m.policy,
        "root_state_fingerprint": m.root_state_fingerprint,
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_closed_suppressed": m.total_closed_suppressed,
        "total_expansions": m.total_expansions,
        "total_nodes_generated": m.total_nodes_generated,
        "total_rejected": m.total_rejected,
        "total_stale_pops": m.total_stale_pops,
    })
}

fn termination_reason_to_json(r: TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": r.as_str()})
        }
        TerminationReason::IterationLimitExceeded { limit } => {
            serde_json::json!({"limit": limit, "type": r.as_str()})
        }
        TerminationReason::FrontierExhausted | TerminationReason::HeuristicPanicked => {
            serde_json::json!({"type": r.as_str()})
        }
    }
}
