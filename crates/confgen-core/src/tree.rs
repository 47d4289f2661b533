//! Random tree construction.
//!
//! A document is a single root node. Nodes are written to the output text as
//! they are drawn, depth-first, so only the chain of open nodes is kept
//! around, never a node tree. Two limits bound the output:
//!
//! - a [`NodeBudget`] shared by the whole build caps the total number of
//!   nodes regardless of shape;
//! - a maximum depth stops admitting children, and the per-node branching
//!   factor narrows as the remaining depth runs out.

use crate::attrs::build_attributes;
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::rng::RandomSource;
use crate::token::token;
use tracing::{debug, trace};

/// Remaining number of nodes that may still be created in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeBudget {
    remaining: usize,
}

impl NodeBudget {
    /// A budget allowing `nodes` nodes in total.
    pub const fn new(nodes: usize) -> Self {
        Self { remaining: nodes }
    }

    /// Nodes still available.
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns `true` once every node has been claimed.
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Claim one node. Returns `false` if the budget is already spent.
    pub fn claim(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Validated size parameters for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLimits {
    /// Total node budget.
    pub num_nodes: usize,
    /// Requested maximum depth.
    pub max_depth: usize,
}

impl TreeLimits {
    /// Validate raw user input; both values must be strictly positive.
    pub fn new(num_nodes: i64, max_depth: i64) -> Result<Self> {
        if num_nodes <= 0 || max_depth <= 0 {
            return Err(GenerateError::InvalidArguments);
        }
        let num_nodes =
            usize::try_from(num_nodes).map_err(|_| GenerateError::InvalidArguments)?;
        let max_depth =
            usize::try_from(max_depth).map_err(|_| GenerateError::InvalidArguments)?;
        Ok(Self {
            num_nodes,
            max_depth,
        })
    }

    /// The depth limit actually used: a tree can never be deeper than its
    /// node count.
    pub fn effective_depth(&self) -> usize {
        self.max_depth.min(self.num_nodes)
    }
}

/// A generated document and what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Serialized root node.
    pub text: String,
    /// Nodes created, including the root.
    pub nodes: usize,
    /// Attributes across all nodes.
    pub attributes: usize,
    /// Deepest level a node was created at (root is 0).
    pub deepest: usize,
}

/// A node whose children are still being built.
struct Frame {
    children_left: usize,
    depth: usize,
}

/// Builds nodes from a random source.
pub struct TreeBuilder<'a, R: ?Sized> {
    rng: &'a mut R,
    config: &'a GeneratorConfig,
    attributes: usize,
    deepest: usize,
}

impl<'a, R: RandomSource + ?Sized> TreeBuilder<'a, R> {
    /// Create a builder drawing from `rng`.
    pub fn new(rng: &'a mut R, config: &'a GeneratorConfig) -> Self {
        Self {
            rng,
            config,
            attributes: 0,
            deepest: 0,
        }
    }

    /// Build one node at `depth` and serialize it.
    ///
    /// Returns an empty string, without drawing anything, when `depth` has
    /// reached `max_depth` or the budget is spent. Otherwise claims one node
    /// from `budget`, draws a name and attributes, then up to
    /// `min(max_children, max_depth - depth)` children, each built depth-first
    /// before the next is attempted.
    ///
    /// Open nodes live on a heap-allocated stack, so the depth of the tree is
    /// not limited by the thread's call stack.
    pub fn build_node(
        &mut self,
        depth: usize,
        max_depth: usize,
        budget: &mut NodeBudget,
    ) -> String {
        if depth >= max_depth || !budget.claim() {
            return String::new();
        }
        let mut text = String::new();
        let mut stack = vec![self.open(depth, max_depth, &mut text)];

        while let Some(top) = stack.last_mut() {
            if top.children_left > 0 && !budget.is_exhausted() {
                top.children_left -= 1;
                let child_depth = top.depth + 1;
                // A child past the depth limit is an attempt that yields nothing.
                if child_depth < max_depth && budget.claim() {
                    text.push(' ');
                    let child = self.open(child_depth, max_depth, &mut text);
                    stack.push(child);
                }
            } else {
                stack.pop();
                text.push(']');
            }
        }
        text
    }

    /// Draw a claimed node's name, attributes and child count, writing its
    /// opening bracket, name and attributes to `text`.
    fn open(&mut self, depth: usize, max_depth: usize, text: &mut String) -> Frame {
        self.deepest = self.deepest.max(depth);

        let name = token(
            &mut *self.rng,
            self.config.node_name_len,
            &self.config.name_charset,
        );
        let attrs = build_attributes(&mut *self.rng, self.config);
        self.attributes += attrs.count;
        trace!(depth, name = %name, attributes = attrs.count, "building node");

        text.push('[');
        text.push_str(&name);
        if !attrs.is_empty() {
            text.push(' ');
            text.push_str(&attrs.rendered);
        }

        let child_limit = self.config.max_children.min(max_depth - depth);
        Frame {
            children_left: self.rng.next_in_range(0, child_limit),
            depth,
        }
    }

    /// Total attributes generated so far.
    pub const fn attributes(&self) -> usize {
        self.attributes
    }

    /// Deepest level reached so far.
    pub const fn deepest(&self) -> usize {
        self.deepest
    }
}

/// Generate a complete document within `limits`.
pub fn generate<R: RandomSource + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    limits: TreeLimits,
) -> Generated {
    let mut budget = NodeBudget::new(limits.num_nodes);
    let mut builder = TreeBuilder::new(rng, config);
    let text = builder.build_node(0, limits.effective_depth(), &mut budget);

    let generated = Generated {
        text,
        nodes: limits.num_nodes - budget.remaining(),
        attributes: builder.attributes(),
        deepest: builder.deepest(),
    };
    debug!(
        nodes = generated.nodes,
        attributes = generated.attributes,
        deepest = generated.deepest,
        bytes = generated.text.len(),
        "generated document"
    );
    generated
}
