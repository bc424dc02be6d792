//! Retained leaf tree built from display data.
//!
//! Rendering is a pure projection: every call builds a fresh [`RenderedTree`]
//! and the host [`Container`] swaps it in as a whole. Leaves are stored in
//! document order, so a leaf's descendants always follow it in the arena.

use std::fmt;

use smallvec::SmallVec;

use crate::glyphs::LeafGlyphs;
use crate::model::Node;

/// Index path from the display data down to one node.
pub type NodePath = SmallVec<[usize; 8]>;

/// Stable identity of a rendered leaf within one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LeafId(usize);

impl LeafId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LeafId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The clickable `+`/`-` glyph in front of a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affix {
    pub text: &'static str,
    /// Set for leaves without children.
    pub hidden: bool,
}

/// Holder of a leaf's child leaves; `hidden` is the collapsed state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildrenWrapper {
    pub hidden: bool,
    pub leaves: SmallVec<[LeafId; 8]>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedLeaf {
    pub depth: u16,
    pub label: String,
    pub affix: Affix,
    pub children: Option<ChildrenWrapper>,
}

impl RenderedLeaf {
    /// Returns `true` when the leaf has a children wrapper that is shown.
    pub fn is_expanded(&self) -> bool {
        self.children.as_ref().is_some_and(|wrapper| !wrapper.hidden)
    }
}

/// Rendered leaves plus the side table back to their source nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedTree {
    leaves: Vec<RenderedLeaf>,
    roots: Vec<LeafId>,
    sources: Vec<NodePath>,
}

impl RenderedTree {
    pub const fn len(&self) -> usize {
        self.leaves.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn roots(&self) -> &[LeafId] {
        &self.roots
    }

    pub fn leaf(&self, id: LeafId) -> Option<&RenderedLeaf> {
        self.leaves.get(id.0)
    }

    pub(crate) fn leaf_mut(&mut self, id: LeafId) -> Option<&mut RenderedLeaf> {
        self.leaves.get_mut(id.0)
    }

    /// All leaves in document order.
    pub fn leaves(&self) -> impl Iterator<Item = (LeafId, &RenderedLeaf)> {
        self.leaves
            .iter()
            .enumerate()
            .map(|(idx, leaf)| (LeafId(idx), leaf))
    }

    /// Index path of the node that produced `id`.
    pub fn source(&self, id: LeafId) -> Option<&[usize]> {
        self.sources.get(id.0).map(SmallVec::as_slice)
    }

    /// Resolves the node behind `id` in the display data it was rendered from.
    pub fn resolve<'a>(&self, display: &'a [Node], id: LeafId) -> Option<&'a Node> {
        let (first, rest) = self.source(id)?.split_first()?;
        let mut node = display.get(*first)?;
        for idx in rest {
            node = node.children.get(*idx)?;
        }
        Some(node)
    }

    /// Leaves not inside a hidden wrapper, in document order.
    pub fn visible_leaves(&self) -> Vec<LeafId> {
        let mut visible = Vec::with_capacity(self.leaves.len());
        let mut stack: Vec<LeafId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            visible.push(id);
            if let Some(wrapper) = &self.leaves[id.0].children
                && !wrapper.hidden
            {
                stack.extend(wrapper.leaves.iter().rev().copied());
            }
        }
        visible
    }

    pub fn find_by_label(&self, label: &str) -> Option<LeafId> {
        self.leaves()
            .find(|(_, leaf)| leaf.label == label)
            .map(|(id, _)| id)
    }

    fn render_leaf(
        &mut self,
        node: &Node,
        depth: u16,
        path: &mut NodePath,
        glyphs: &LeafGlyphs<'static>,
    ) -> LeafId {
        let id = LeafId(self.leaves.len());
        self.leaves.push(RenderedLeaf {
            depth,
            label: node.label().to_string(),
            affix: Affix {
                text: glyphs.affix(node.expanded),
                hidden: node.is_leaf(),
            },
            children: None,
        });
        self.sources.push(path.clone());

        if !node.is_leaf() {
            let mut leaves = SmallVec::with_capacity(node.children.len());
            for (idx, child) in node.children.iter().enumerate() {
                path.push(idx);
                leaves.push(self.render_leaf(child, depth.saturating_add(1), path, glyphs));
                path.pop();
            }
            self.leaves[id.0].children = Some(ChildrenWrapper {
                hidden: !node.expanded,
                leaves,
            });
        }
        id
    }
}

/// Builds the leaf tree for `display`, seeding each wrapper from `Node::expanded`.
pub fn render(display: &[Node], glyphs: &LeafGlyphs<'static>) -> RenderedTree {
    let mut tree = RenderedTree::default();
    let mut path = NodePath::new();
    for (idx, node) in display.iter().enumerate() {
        path.push(idx);
        let id = tree.render_leaf(node, 0, &mut path, glyphs);
        path.pop();
        tree.roots.push(id);
    }
    tree
}

/// What a host container currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerContent {
    Placeholder(String),
    Tree(RenderedTree),
}

/// Host element addressed by an opaque id. Its content is only ever replaced whole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    id: String,
    content: ContainerContent,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: ContainerContent::Placeholder(String::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub const fn content(&self) -> &ContainerContent {
        &self.content
    }

    pub fn replace(&mut self, content: ContainerContent) {
        self.content = content;
    }

    pub const fn tree(&self) -> Option<&RenderedTree> {
        match &self.content {
            ContainerContent::Tree(tree) => Some(tree),
            ContainerContent::Placeholder(_) => None,
        }
    }

    pub(crate) const fn tree_mut(&mut self) -> Option<&mut RenderedTree> {
        match &mut self.content {
            ContainerContent::Tree(tree) => Some(tree),
            ContainerContent::Placeholder(_) => None,
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match &self.content {
            ContainerContent::Placeholder(text) => Some(text),
            ContainerContent::Tree(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Node> {
        vec![
            Node::new("a.b.C")
                .expanded(true)
                .child(Node::with_value("a.b.C.d", "Hi"))
                .child(Node::new("a.b.C.e").child(Node::new("a.b.C.e.f"))),
            Node::new("a.b.G"),
        ]
    }

    #[test]
    fn leaves_follow_document_order() {
        let display = sample();
        let tree = render(&display, &LeafGlyphs::ascii());

        let labels: Vec<_> = tree.leaves().map(|(_, leaf)| leaf.label.as_str()).collect();
        let depths: Vec<_> = tree.leaves().map(|(_, leaf)| leaf.depth).collect();

        assert_eq!(labels, vec!["C", "Hi", "e", "f", "G"]);
        assert_eq!(depths, vec![0, 1, 1, 2, 0]);
        assert_eq!(tree.roots().len(), 2);
    }

    #[test]
    fn wrapper_and_affix_are_seeded_from_node() {
        let display = sample();
        let tree = render(&display, &LeafGlyphs::ascii());

        let root = tree.leaf(tree.roots()[0]).expect("root leaf");
        assert_eq!(root.affix.text, "-");
        assert!(!root.affix.hidden);
        assert!(root.is_expanded());

        let e = tree.find_by_label("e").and_then(|id| tree.leaf(id)).expect("leaf e");
        assert_eq!(e.affix.text, "+");
        assert!(e.children.as_ref().is_some_and(|wrapper| wrapper.hidden));

        let hi = tree.find_by_label("Hi").and_then(|id| tree.leaf(id)).expect("leaf Hi");
        assert!(hi.affix.hidden);
        assert!(hi.children.is_none());
    }

    #[test]
    fn side_table_resolves_source_nodes() {
        let display = sample();
        let tree = render(&display, &LeafGlyphs::ascii());

        for (id, leaf) in tree.leaves() {
            let node = tree.resolve(&display, id).expect("source node");
            assert_eq!(node.label(), leaf.label);
        }
        let f = tree.find_by_label("f").expect("leaf f");
        assert_eq!(tree.source(f), Some(&[0, 1, 0][..]));
    }

    #[test]
    fn visible_leaves_skip_hidden_wrappers() {
        let display = sample();
        let tree = render(&display, &LeafGlyphs::ascii());

        let visible: Vec<_> = tree
            .visible_leaves()
            .into_iter()
            .filter_map(|id| tree.leaf(id).map(|leaf| leaf.label.as_str()))
            .collect();

        assert_eq!(visible, vec!["C", "Hi", "e", "G"]);
    }

    #[test]
    fn empty_display_renders_no_leaves() {
        let tree = render(&[], &LeafGlyphs::ascii());

        assert!(tree.is_empty());
        assert!(tree.visible_leaves().is_empty());
    }
}
