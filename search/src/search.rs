//! Search entry point and expansion loop.

use std::panic::{catch_unwind, AssertUnwindSafe};

use gripper_kernel::goal::eval::satisfies;
use gripper_kernel::goal::formula::Goal;
use gripper_kernel::operators::action::Action;
use gripper_kernel::operators::apply::{apply, TRANSITION_COST};
use gripper_kernel::world::objects::ObjectCatalog;
use gripper_kernel::world::state::WorldState;

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::graph::{
    ExpandEvent, NodeSummary, RejectionKind, SearchGraph, SearchGraphMetadata, SuccessorOutcome,
    SuccessorRecord, TerminationReason,
};
use crate::heuristic::Heuristic;
use crate::node::SearchNode;
use crate::policy::{SearchPolicy, SearchStrategy};

/// Result of a search execution.
///
/// Always carries the full node arena and audit graph, however the search
/// ended. Check [`SearchResult::is_goal_reached`] or `termination`.
#[derive(Debug)]
pub struct SearchResult {
    pub termination: TerminationReason,
    /// Arena index of the goal node, if one was reached.
    pub goal_node: Option<usize>,
    /// Every node created, indexed by `node_id`.
    pub nodes: Vec<SearchNode>,
    pub graph: SearchGraph,
}

impl SearchResult {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.goal_node.is_some()
    }

    /// Actions from the root to the goal node.
    #[must_use]
    pub fn actions(&self) -> Option<Vec<Action>> {
        self.goal_node.map(|id| reconstruct_actions(&self.nodes, id))
    }

    /// Path cost of the goal node.
    #[must_use]
    pub fn cost(&self) -> Option<u64> {
        self.goal_node
            .and_then(|id| self.nodes.get(id))
            .map(|n| n.g_cost)
    }

    /// Number of expansions performed.
    #[must_use]
    pub fn expansions(&self) -> u64 {
        self.graph.metadata.total_expansions
    }
}

/// Run best-first search from `initial` until a state satisfies `goal`.
///
/// The loop pops the lowest `(priority, depth, creation_order)` entry,
/// discards it if its state was already expanded, closes it, tests the
/// goal, and otherwise expands it. `policy.max_iterations` expansions are
/// allowed; the search aborts when one more would be needed.
///
/// All runtime outcomes, including a panicking heuristic, return
/// `Ok(SearchResult)`.
///
/// # Errors
///
/// Returns [`SearchError`] only for pre-flight failures: an invalid policy,
/// an initial state that does not match `catalog`, or a malformed goal. No
/// graph is produced in that case.
#[allow(clippy::too_many_lines)]
pub fn search(
    initial: &WorldState,
    goal: &Goal,
    catalog: &ObjectCatalog,
    policy: &SearchPolicy,
    heuristic: &dyn Heuristic,
) -> Result<SearchResult, SearchError> {
    policy.validate()?;
    initial.validate(catalog)?;
    goal.validate(initial)?;

    tracing::debug!(
        heuristic = heuristic.name(),
        strategy = policy.strategy.as_str(),
        max_iterations = policy.max_iterations,
        multi_path_pruning = policy.multi_path_pruning,
        "search started"
    );

    let mut frontier = Frontier::new();
    let mut nodes: Vec<SearchNode> = Vec::new();
    let mut expansions: Vec<ExpandEvent> = Vec::new();
    let mut counters = Counters::default();

    let Some(root_h) = estimate(heuristic, policy.strategy, initial, goal) else {
        return Ok(finish(
            nodes,
            expansions,
            counters,
            &frontier,
            TerminationReason::HeuristicPanicked,
            initial,
            policy,
            heuristic,
        ));
    };
    nodes.push(SearchNode {
        node_id: 0,
        parent_id: None,
        state_key: initial.identity_bytes(),
        state: initial.clone(),
        depth: 0,
        g_cost: 0,
        h_cost: root_h,
        priority: policy.strategy.priority(0, root_h),
        creation_order: 0,
        action: None,
    });
    frontier.push(&nodes[0]);

    let termination = 'search: loop {
        let Some((pop_key, id)) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };

        if policy.multi_path_pruning && !frontier.close(&nodes[id].state_key) {
            counters.stale_pops += 1;
            continue;
        }

        if satisfies(&nodes[id].state, goal) {
            break TerminationReason::GoalReached { node_id: id };
        }

        let parent = &nodes[id];
        tracing::trace!(
            node_id = id,
            depth = parent.depth,
            g_cost = parent.g_cost,
            priority = pop_key.priority,
            frontier = frontier.len(),
            "expanding"
        );
        let (depth, g_cost) = (parent.depth + 1, parent.g_cost + TRANSITION_COST);
        let fingerprint = parent.state.fingerprint().hex_digest().to_string();
        let attempts: Vec<_> = Action::ALL
            .iter()
            .map(|&action| (action, apply(&parent.state, action, catalog)))
            .collect();

        let mut successors = Vec::with_capacity(attempts.len());
        for (action, attempt) in attempts {
            let outcome = match attempt {
                Err(failure) => {
                    counters.rejected += 1;
                    SuccessorOutcome::Rejected(RejectionKind::from(&failure))
                }
                Ok(child) => {
                    let state_key = child.identity_bytes();
                    if policy.multi_path_pruning && frontier.is_closed(&state_key) {
                        counters.closed_suppressed += 1;
                        SuccessorOutcome::ClosedSuppressed
                    } else {
                        let Some(h_cost) = estimate(heuristic, policy.strategy, &child, goal)
                        else {
                            break 'search TerminationReason::HeuristicPanicked;
                        };
                        let node_id = nodes.len();
                        nodes.push(SearchNode {
                            node_id,
                            parent_id: Some(id),
                            state_key,
                            state: child,
                            depth,
                            g_cost,
                            h_cost,
                            priority: policy.strategy.priority(g_cost, h_cost),
                            creation_order: node_id as u64,
                            action: Some(action),
                        });
                        frontier.push(&nodes[node_id]);
                        SuccessorOutcome::Applied { to_node: node_id }
                    }
                }
            };
            successors.push(SuccessorRecord { action, outcome });
        }

        expansions.push(ExpandEvent {
            expansion_order: counters.expansions,
            node_id: id,
            state_fingerprint: fingerprint,
            pop_key,
            successors,
        });
        counters.expansions += 1;
        if counters.expansions > policy.max_iterations {
            break TerminationReason::IterationLimitExceeded {
                limit: policy.max_iterations,
            };
        }
    };

    Ok(finish(
        nodes,
        expansions,
        counters,
        &frontier,
        termination,
        initial,
        policy,
        heuristic,
    ))
}

/// Heuristic value under `strategy`. `None` if the heuristic panicked.
fn estimate(
    heuristic: &dyn Heuristic,
    strategy: SearchStrategy,
    state: &WorldState,
    goal: &Goal,
) -> Option<u64> {
    if strategy == SearchStrategy::UniformCost {
        return Some(0);
    }
    catch_unwind(AssertUnwindSafe(|| heuristic.estimate(state, goal))).ok()
}

#[derive(Debug, Default)]
struct Counters {
    expansions: u64,
    stale_pops: u64,
    closed_suppressed: u64,
    rejected: u64,
}

#[allow(clippy::too_many_arguments)]
fn finish(
    nodes: Vec<SearchNode>,
    expansions: Vec<ExpandEvent>,
    counters: Counters,
    frontier: &Frontier,
    termination: TerminationReason,
    initial: &WorldState,
    policy: &SearchPolicy,
    heuristic: &dyn Heuristic,
) -> SearchResult {
    let goal_node = match termination {
        TerminationReason::GoalReached { node_id } => Some(node_id),
        _ => None,
    };
    tracing::debug!(
        termination = termination.as_str(),
        expansions = counters.expansions,
        nodes = nodes.len(),
        frontier_high_water = frontier.high_water(),
        "search finished"
    );

    let mut expansion_order = vec![None; nodes.len()];
    for event in &expansions {
        expansion_order[event.node_id] = Some(event.expansion_order);
    }
    let node_summaries = nodes
        .iter()
        .zip(expansion_order)
        .map(|(n, expansion_order)| NodeSummary {
            node_id: n.node_id,
            parent_id: n.parent_id,
            action: n.action,
            state_fingerprint: n.state.fingerprint().hex_digest().to_string(),
            depth: n.depth,
            g_cost: n.g_cost,
            h_cost: n.h_cost,
            is_goal: goal_node == Some(n.node_id),
            expansion_order,
        })
        .collect();

    let graph = SearchGraph {
        expansions,
        node_summaries,
        metadata: SearchGraphMetadata {
            heuristic: heuristic.name().to_string(),
            policy: policy.to_json(),
            root_state_fingerprint: initial.fingerprint().hex_digest().to_string(),
            total_expansions: counters.expansions,
            total_nodes_generated: nodes.len() as u64,
            total_closed_suppressed: counters.closed_suppressed,
            total_stale_pops: counters.stale_pops,
            total_rejected: counters.rejected,
            frontier_high_water: frontier.high_water() as u64,
            termination_reason: termination,
        },
    };

    SearchResult {
        termination,
        goal_node,
        nodes,
        graph,
    }
}

/// Arena indices from the root to `goal_node_id`, root first.
///
/// Walks parent links iteratively; an index outside the arena yields an
/// empty path.
#[must_use]
pub fn reconstruct_path(nodes: &[SearchNode], goal_node_id: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = nodes.get(goal_node_id);
    while let Some(node) = current {
        path.push(node.node_id);
        current = node.parent_id.and_then(|p| nodes.get(p));
    }
    path.reverse();
    path
}

/// Actions along the path to `goal_node_id`. The root contributes none, so
/// a goal at the root yields an empty plan.
#[must_use]
pub fn reconstruct_actions(nodes: &[SearchNode], goal_node_id: usize) -> Vec<Action> {
    reconstruct_path(nodes, goal_node_id)
        .into_iter()
        .filter_map(|id| nodes[id].action)
        .collect()
}
