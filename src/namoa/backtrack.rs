//! Path reconstruction from closed label sets.
//!
//! An edge `(p, v)` lies on a path realizing cost `w` at `v` iff some
//! closed label `l` of `p` satisfies `l + weight(p, v) == w`. The walk
//! runs backwards from the destination and ends at the source with the
//! zero label.
//!
//! The walk uses an explicit stack. A state `(node, label)` that produced
//! no path is remembered and never explored again. A node already on the
//! current path is never re-entered.

use std::collections::HashSet;

use tracing::trace;

use crate::error::Result;
use crate::graph::{Annotator, EdgeId, EdgeKind, Graph, NodeId};
use crate::weight::{LabelSet, Weight, WeightKey};

struct Frame {
    node: NodeId,
    label: Weight,
    /// `(edge, predecessor, predecessor label)` candidates.
    preds: Vec<(EdgeId, NodeId, Weight)>,
    next: usize,
    found_at_entry: usize,
    /// Some branch was cut by the cycle guard.
    blocked: bool,
}

/// Reconstructs up to `limit` edge sequences realizing `cost` at
/// `destination`, each listed from source to destination.
pub(crate) fn backtrack<Ty: EdgeKind>(
    graph: &Graph<Ty>,
    weights: &Annotator<EdgeId, Weight>,
    closed: &[LabelSet],
    source: NodeId,
    destination: NodeId,
    cost: &Weight,
    limit: Option<usize>,
) -> Result<Vec<Vec<EdgeId>>> {
    if destination == source && cost.is_zero() {
        return Ok(vec![Vec::new()]);
    }

    let mut found: Vec<Vec<EdgeId>> = Vec::new();
    let mut dead: HashSet<(NodeId, WeightKey)> = HashSet::new();
    let mut on_path = vec![false; graph.node_bound()];
    let mut edges: Vec<EdgeId> = Vec::new();

    on_path[destination.index()] = true;
    let mut stack = vec![frame(graph, weights, closed, destination, cost.clone(), 0)?];

    while let Some(top) = stack.last_mut() {
        if limit.is_some_and(|l| found.len() >= l) {
            break;
        }

        let Some((edge, pred, pred_label)) = top.preds.get(top.next).cloned() else {
            let Some(done) = stack.pop() else { break };
            if found.len() == done.found_at_entry {
                if done.blocked {
                    if let Some(parent) = stack.last_mut() {
                        parent.blocked = true;
                    }
                } else {
                    dead.insert((done.node, done.label.key()));
                }
            }
            on_path[done.node.index()] = false;
            edges.pop();
            continue;
        };
        top.next += 1;

        if pred == source && pred_label.is_zero() {
            found.push(
                std::iter::once(edge)
                    .chain(edges.iter().rev().copied())
                    .collect(),
            );
            continue;
        }
        if on_path[pred.index()] {
            top.blocked = true;
            continue;
        }
        if dead.contains(&(pred, pred_label.key())) {
            continue;
        }

        edges.push(edge);
        on_path[pred.index()] = true;
        let child = frame(graph, weights, closed, pred, pred_label, found.len())?;
        stack.push(child);
    }

    trace!(
        cost = %cost,
        paths = found.len(),
        memoized = dead.len(),
        "backtracking finished"
    );
    Ok(found)
}

fn frame<Ty: EdgeKind>(
    graph: &Graph<Ty>,
    weights: &Annotator<EdgeId, Weight>,
    closed: &[LabelSet],
    node: NodeId,
    label: Weight,
    found_at_entry: usize,
) -> Result<Frame> {
    let mut preds = Vec::new();
    for (edge, pred) in graph.in_neighbors(node)? {
        let w = weights.get(&edge)?;
        for candidate in closed[pred.index()].iter() {
            if candidate.add(w) == label {
                preds.push((edge, pred, candidate.clone()));
            }
        }
    }
    Ok(Frame {
        node,
        label,
        preds,
        next: 0,
        found_at_entry,
        blocked: false,
    })
}
