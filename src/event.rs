use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::LogViewError;
use crate::model::Node;
use crate::render::LeafId;

/// Names of the events a log view publishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A single leaf was expanded by a click or `LogView::expand`.
    Expand,
    /// Every leaf with children was expanded.
    ExpandAll,
    /// A single leaf was collapsed by a click or `LogView::collapse`.
    Collapse,
    /// Every leaf with children was collapsed.
    CollapseAll,
    /// A leaf without children was clicked.
    Select,
}

impl EventKind {
    pub const ALL: [Self; 5] = [
        Self::Expand,
        Self::ExpandAll,
        Self::Collapse,
        Self::CollapseAll,
        Self::Select,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expand => "expand",
            Self::ExpandAll => "expandAll",
            Self::Collapse => "collapse",
            Self::CollapseAll => "collapseAll",
            Self::Select => "select",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = LogViewError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| LogViewError::UnsupportedEvent(name.to_string()))
    }
}

/// Part of a leaf that received a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeafPart {
    /// The `+`/`-` expand affix.
    Affix,
    /// The text label.
    Label,
}

/// A click on one of the leaf's click targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    pub leaf: LeafId,
    pub part: LeafPart,
}

impl ClickEvent {
    pub const fn label(leaf: LeafId) -> Self {
        Self {
            leaf,
            part: LeafPart::Label,
        }
    }

    pub const fn affix(leaf: LeafId) -> Self {
        Self {
            leaf,
            part: LeafPart::Affix,
        }
    }
}

/// Payload of `Expand` and `Collapse`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleEvent {
    /// The leaf whose children wrapper changed.
    pub target: LeafId,
    /// Child leaves held by the wrapper.
    pub leaves: SmallVec<[LeafId; 8]>,
}

/// Payload of `Select`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectEvent {
    /// The click that selected the leaf.
    pub target: ClickEvent,
    /// Copy of the node that produced the leaf.
    pub data: Node,
}

/// An event delivered to subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogViewEvent {
    Expand(ToggleEvent),
    ExpandAll,
    Collapse(ToggleEvent),
    CollapseAll,
    Select(SelectEvent),
}

impl LogViewEvent {
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Expand(_) => EventKind::Expand,
            Self::ExpandAll => EventKind::ExpandAll,
            Self::Collapse(_) => EventKind::Collapse,
            Self::CollapseAll => EventKind::CollapseAll,
            Self::Select(_) => EventKind::Select,
        }
    }
}
