use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One stack frame or log entry.
///
/// Nodes are produced outside the widget and are never mutated by it:
/// the `expanded` flag only seeds the first render.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    /// Dot-delimited path, e.g. `com.acme.Foo.bar`.
    #[cfg_attr(feature = "serde", serde(alias = "stack"))]
    pub stack_path: String,
    /// Message that replaces the path-derived label when non-empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: Option<String>,
    /// Child entries in display order.
    #[cfg_attr(feature = "serde", serde(default, alias = "nodes"))]
    pub children: Vec<Node>,
    /// Initial open/closed intent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub expanded: bool,
}

impl Node {
    pub fn new(stack_path: impl Into<String>) -> Self {
        Self {
            stack_path: stack_path.into(),
            ..Self::default()
        }
    }

    pub fn with_value(stack_path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            stack_path: stack_path.into(),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns `true` when the node has no children.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Display label: the value if set and non-empty, else the last path segment.
    pub fn label(&self) -> &str {
        match self.value.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => self
                .stack_path
                .rsplit('.')
                .next()
                .unwrap_or(self.stack_path.as_str()),
        }
    }

    /// Finds the first descendant whose path equals `path`, depth first.
    pub fn search(&self, path: &str) -> Option<&Self> {
        search_in(&self.children, path)
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        f.write_str(&self.stack_path)?;
        if let Some(value) = &self.value {
            write!(f, ":{value}")?;
        }
        if self.children.is_empty() {
            return Ok(());
        }
        let indent = "  ".repeat(depth + 1);
        f.write_str("[\n")?;
        for (idx, child) in self.children.iter().enumerate() {
            if idx > 0 {
                f.write_str(",\n")?;
            }
            f.write_str(&indent)?;
            child.write_outline(f, depth + 1)?;
        }
        write!(f, "\n{indent}]")
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

/// Full dataset handed to the widget.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree {
    #[cfg_attr(feature = "serde", serde(default, alias = "nodes"))]
    pub children: Vec<Node>,
}

impl Tree {
    pub const fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of top-level entries.
    #[inline]
    pub const fn len(&self) -> usize {
        self.children.len()
    }

    pub fn search(&self, path: &str) -> Option<&Node> {
        search_in(&self.children, path)
    }
}

impl From<Vec<Node>> for Tree {
    fn from(children: Vec<Node>) -> Self {
        Self::new(children)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, child) in self.children.iter().enumerate() {
            if idx > 0 {
                f.write_str(",\n")?;
            }
            child.write_outline(f, 0)?;
        }
        Ok(())
    }
}

fn search_in<'a>(nodes: &'a [Node], path: &str) -> Option<&'a Node> {
    for node in nodes {
        if node.stack_path == path {
            return Some(node);
        }
        if let Some(found) = search_in(&node.children, path) {
            return Some(found);
        }
    }
    None
}
