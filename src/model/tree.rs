//! Arena-backed tree model.
//!
//! Nodes live in a flat arena and are addressed by [`NodeId`], a stable
//! integer index. Node identity is the id, never the title (titles may
//! repeat). Topology is fixed once built: [`TreeBuilder`] can only attach
//! children to nodes it already created, so the forest is acyclic and
//! single-parent by construction, and [`Tree`] exposes no structural
//! mutation — only the per-node expansion flag changes at runtime.

use serde::Deserialize;

/// Stable identity of a node within its [`Tree`]'s arena.
///
/// Ids are only meaningful for the tree that issued them. Two nodes with
/// identical titles still have distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One entry in the hierarchy: a display label, an ordered child list, and
/// an expansion flag. The flag is only meaningful for nodes with children;
/// leaves carry it but every consumer ignores it.
#[derive(Debug, Clone)]
struct Node {
    title: String,
    children: Vec<NodeId>,
    expanded: bool,
}

/// Declarative description of a node, used for the built-in sample forest
/// and for TOML outline files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    /// Display label.
    pub title: String,
    /// Start expanded (only meaningful with non-empty `children`).
    #[serde(default)]
    pub expanded: bool,
    /// Ordered child specs.
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// A childless node.
    pub fn leaf(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            expanded: false,
            children: Vec::new(),
        }
    }

    /// A node with children, initially collapsed.
    pub fn branch(title: impl Into<String>, children: Vec<NodeSpec>) -> Self {
        Self {
            title: title.into(),
            expanded: false,
            children,
        }
    }
}

/// Incremental constructor for a [`Tree`].
///
/// Children can only be attached to ids this builder issued, which makes
/// cycles and shared parents unrepresentable.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl TreeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new root node, initially collapsed.
    pub fn add_root(&mut self, title: impl Into<String>) -> NodeId {
        let id = self.push(title);
        self.roots.push(id);
        id
    }

    /// Append a new child under `parent`, initially collapsed.
    ///
    /// `parent` must be an id issued by this builder.
    pub fn add_child(&mut self, parent: NodeId, title: impl Into<String>) -> NodeId {
        let id = self.push(title);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Finish construction; the topology is frozen from here on.
    pub fn build(self) -> Tree {
        Tree {
            nodes: self.nodes,
            roots: self.roots,
        }
    }

    fn push(&mut self, title: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            title: title.into(),
            children: Vec::new(),
            expanded: false,
        });
        id
    }
}

/// An ordered forest of nodes in a flat arena.
///
/// Structural queries only; the sole mutation is [`Tree::set_expanded`].
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Tree {
    /// Build a tree from declarative specs, honoring their `expanded` flags.
    pub fn from_specs(specs: &[NodeSpec]) -> Self {
        let mut builder = TreeBuilder::new();
        for spec in specs {
            let id = builder.add_root(&spec.title);
            Self::insert_spec_children(&mut builder, id, spec);
        }
        let mut tree = builder.build();
        // Flags are applied post-build in the same DFS order the builder
        // issued ids, so spec order and id order agree.
        let mut next = 0usize;
        Self::apply_spec_flags(&mut tree, specs, &mut next);
        tree
    }

    fn insert_spec_children(builder: &mut TreeBuilder, parent: NodeId, spec: &NodeSpec) {
        for child in &spec.children {
            let id = builder.add_child(parent, &child.title);
            Self::insert_spec_children(builder, id, child);
        }
    }

    fn apply_spec_flags(tree: &mut Tree, specs: &[NodeSpec], next: &mut usize) {
        for spec in specs {
            let id = NodeId(*next);
            *next += 1;
            tree.nodes[id.0].expanded = spec.expanded && !spec.children.is_empty();
            Self::apply_spec_flags(tree, &spec.children, next);
        }
    }

    /// Total number of nodes in the arena (visible or not).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the forest has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ordered root ids.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Display label of a node.
    pub fn title(&self, id: NodeId) -> &str {
        &self.nodes[id.0].title
    }

    /// Ordered child ids of a node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// True if the node has at least one child.
    pub fn has_children(&self, id: NodeId) -> bool {
        !self.nodes[id.0].children.is_empty()
    }

    /// Current expansion flag.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.nodes[id.0].expanded
    }

    /// Set the expansion flag. Structural no-op for leaves (callers gate on
    /// [`Tree::has_children`], but the flag itself is harmless either way).
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        self.nodes[id.0].expanded = expanded;
    }

    /// Root-relative depth of a node (roots are depth 0), found by
    /// depth-first identity search over the forest.
    ///
    /// Returns `None` when the id is not reachable from any root. That
    /// indicates a desync between the tree and whoever held the id, so it
    /// never happens under correct usage, but it is reported rather than
    /// panicking.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        fn search(tree: &Tree, ids: &[NodeId], target: NodeId, level: usize) -> Option<usize> {
            for &candidate in ids {
                if candidate == target {
                    return Some(level);
                }
                if let Some(found) = search(tree, tree.children(candidate), target, level + 1) {
                    return Some(found);
                }
            }
            None
        }
        search(self, &self.roots, id, 0)
    }
}
