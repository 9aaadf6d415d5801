//! Pass 5: cycle detection and emission order.
//!
//! Tokens form a graph whose edges run from each token to the tokens named
//! in its metadata. A token must be emitted after everything it references,
//! so the emission order is a depth-first post-order over registry order.
//! Any back edge is a fatal cycle.

use crate::context::ResolutionContext;
use crate::registry::TokenRegistry;
use diwire_domain::ResolveError;
use diwire_domain::value_objects::{TokenId, TypeMetadata};
use indexmap::IndexMap;
use tracing::debug;

/// Order tokens so that every token follows the tokens it references
pub fn order_tokens(mut ctx: ResolutionContext<'_>) -> Result<ResolutionContext<'_>, ResolveError> {
    let graph = TokenGraph::build(&ctx.registry, &ctx.token_metadata);
    ctx.order = graph.topological_order()?;
    debug!(tokens = ctx.order.len(), edges = graph.edge_count(), "ordered tokens");
    Ok(ctx)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Dependency graph over registered tokens
#[derive(Debug, Clone)]
pub struct TokenGraph {
    nodes: Vec<TokenId>,
    edges: Vec<Vec<usize>>,
}

impl TokenGraph {
    /// Build the graph from metadata; self-references carry no edge
    pub fn build(registry: &TokenRegistry, metadata: &IndexMap<TokenId, TypeMetadata>) -> Self {
        let nodes: Vec<TokenId> = registry.iter().map(|r| r.token.id.clone()).collect();
        let edges = nodes
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let mut targets = Vec::new();
                for reference in metadata.get(id).into_iter().flat_map(TypeMetadata::references) {
                    if let Some(target) = registry.index_of(reference)
                        && target != index
                        && !targets.contains(&target)
                    {
                        targets.push(target);
                    }
                }
                targets
            })
            .collect();
        Self { nodes, edges }
    }

    /// Number of distinct edges
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Post-order over all nodes, or the first cycle found
    pub fn topological_order(&self) -> Result<Vec<TokenId>, ResolveError> {
        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        let mut order = Vec::with_capacity(self.nodes.len());
        // (node, index of the next edge to follow)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..self.nodes.len() {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            marks[root] = Mark::InProgress;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let node = frame.0;
                if let Some(&target) = self.edges[node].get(frame.1) {
                    frame.1 += 1;
                    match marks[target] {
                        Mark::Unvisited => {
                            marks[target] = Mark::InProgress;
                            stack.push((target, 0));
                        }
                        Mark::InProgress => return Err(self.cycle(&stack, target)),
                        Mark::Done => {}
                    }
                } else {
                    marks[node] = Mark::Done;
                    order.push(self.nodes[node].clone());
                    stack.pop();
                }
            }
        }
        Ok(order)
    }

    fn cycle(&self, stack: &[(usize, usize)], target: usize) -> ResolveError {
        let start = stack.iter().position(|&(node, _)| node == target).unwrap_or(0);
        let chain = stack[start..]
            .iter()
            .map(|&(node, _)| self.nodes[node].clone())
            .chain(std::iter::once(self.nodes[target].clone()))
            .collect();
        ResolveError::cycle(chain)
    }
}
