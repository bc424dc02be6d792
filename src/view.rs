use crate::bus::{EventBus, Handler, TaskQueue};
use crate::config::LogViewConfig;
use crate::error::LogViewError;
use crate::event::{ClickEvent, EventKind, LogViewEvent, SelectEvent, ToggleEvent};
use crate::model::{Node, Tree};
use crate::render::{Container, ContainerContent, LeafId, RenderedTree, render};

/// Whether a single expand/collapse publishes its own event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Emit {
    #[default]
    Yes,
    Suppress,
}

/// Log tree bound to one host container.
///
/// Construction filters and renders synchronously. Afterwards the
/// expand/collapse state lives on the rendered leaves, and every interaction
/// publishes through the view's event bus. Published events are delivered
/// when the [`TaskQueue`] returned by [`LogView::tasks`] is drained.
pub struct LogView {
    display: Option<Vec<Node>>,
    container: Container,
    bus: EventBus,
    config: LogViewConfig,
}

impl LogView {
    /// Filters `tree` by `scope` and renders the result into the container `host_id`.
    pub fn new(tree: &Tree, host_id: impl Into<String>, scope: Option<&str>) -> Self {
        Self::with_config(tree, host_id, scope, LogViewConfig::default())
    }

    pub fn with_config(
        tree: &Tree,
        host_id: impl Into<String>,
        scope: Option<&str>,
        config: LogViewConfig,
    ) -> Self {
        let mut container = Container::new(host_id);
        let display = crate::scope::filter(tree, scope)
            .filter(|nodes| !nodes.is_empty())
            .map(<[Node]>::to_vec);

        if let Some(nodes) = &display {
            let rendered = render(nodes, &config.glyphs);
            log::debug!(
                "log view {}: scope {:?}, {} top-level entries, {} leaves",
                container.id(),
                scope,
                nodes.len(),
                rendered.len()
            );
            container.replace(ContainerContent::Tree(rendered));
        } else {
            log::debug!(
                "log view {}: nothing to display for scope {:?}",
                container.id(),
                scope
            );
            container.replace(ContainerContent::Placeholder(config.placeholder.to_string()));
        }

        Self {
            display,
            container,
            bus: EventBus::new(),
            config,
        }
    }

    pub const fn container(&self) -> &Container {
        &self.container
    }

    pub const fn tree(&self) -> Option<&RenderedTree> {
        self.container.tree()
    }

    /// Nodes selected for display, `None` when the placeholder is shown.
    pub fn display_data(&self) -> Option<&[Node]> {
        self.display.as_deref()
    }

    pub const fn config(&self) -> &LogViewConfig {
        &self.config
    }

    /// Handle to the queue that delivers this view's events.
    pub fn tasks(&self) -> TaskQueue {
        self.bus.queue().clone()
    }

    /// Node that produced `leaf`.
    pub fn node(&self, leaf: LeafId) -> Option<&Node> {
        let display = self.display.as_deref()?;
        self.tree()?.resolve(display, leaf)
    }

    /// `Some(true)` for a shown wrapper, `Some(false)` for a hidden one,
    /// `None` for leaves without children.
    pub fn is_expanded(&self, leaf: LeafId) -> Option<bool> {
        let wrapper = self.tree()?.leaf(leaf)?.children.as_ref()?;
        Some(!wrapper.hidden)
    }

    pub fn expand(&mut self, leaf: LeafId, emit: Emit) -> Result<(), LogViewError> {
        self.set_expanded(leaf, true, emit)
    }

    pub fn collapse(&mut self, leaf: LeafId, emit: Emit) -> Result<(), LogViewError> {
        self.set_expanded(leaf, false, emit)
    }

    /// Expands every leaf with children and publishes a single `ExpandAll`.
    ///
    /// Returns the number of leaves visited.
    pub fn expand_all(&mut self) -> usize {
        let visited = self.set_all(true);
        self.bus.emit(LogViewEvent::ExpandAll);
        visited
    }

    /// Collapses every leaf with children and publishes a single `CollapseAll`.
    pub fn collapse_all(&mut self) -> usize {
        let visited = self.set_all(false);
        self.bus.emit(LogViewEvent::CollapseAll);
        visited
    }

    /// Handles a click on a leaf's label or affix.
    ///
    /// Leaves with children toggle; other leaves publish `Select` with a copy
    /// of their node.
    pub fn click(&mut self, click: ClickEvent) -> Result<(), LogViewError> {
        let leaf = click.leaf;
        let hidden = self
            .tree()
            .and_then(|tree| tree.leaf(leaf))
            .ok_or(LogViewError::UnknownLeaf(leaf))?
            .children
            .as_ref()
            .map(|wrapper| wrapper.hidden);

        match hidden {
            Some(true) => self.expand(leaf, Emit::Yes),
            Some(false) => self.collapse(leaf, Emit::Yes),
            None => {
                let data = self.node(leaf).cloned().ok_or(LogViewError::UnknownLeaf(leaf))?;
                self.bus.emit(LogViewEvent::Select(SelectEvent {
                    target: click,
                    data,
                }));
                Ok(())
            }
        }
    }

    pub fn on(&mut self, kind: EventKind, handler: Handler) {
        self.bus.subscribe(kind, handler);
    }

    pub fn off(&mut self, kind: EventKind, handler: &Handler) -> bool {
        self.bus.unsubscribe(kind, handler)
    }

    pub fn on_named(&mut self, name: &str, handler: Handler) -> Result<(), LogViewError> {
        self.bus.subscribe_named(name, handler)
    }

    pub fn off_named(&mut self, name: &str, handler: &Handler) -> Result<bool, LogViewError> {
        self.bus.unsubscribe_named(name, handler)
    }

    fn set_expanded(&mut self, leaf: LeafId, expanded: bool, emit: Emit) -> Result<(), LogViewError> {
        let affix = self.config.glyphs.affix(expanded);
        let rendered = self
            .container
            .tree_mut()
            .and_then(|tree| tree.leaf_mut(leaf))
            .ok_or(LogViewError::UnknownLeaf(leaf))?;
        let wrapper = rendered
            .children
            .as_mut()
            .ok_or(LogViewError::NoChildren(leaf))?;
        wrapper.hidden = !expanded;
        let leaves = wrapper.leaves.clone();
        rendered.affix.text = affix;

        if emit == Emit::Yes {
            let payload = ToggleEvent {
                target: leaf,
                leaves,
            };
            self.bus.emit(if expanded {
                LogViewEvent::Expand(payload)
            } else {
                LogViewEvent::Collapse(payload)
            });
        }
        Ok(())
    }

    fn set_all(&mut self, expanded: bool) -> usize {
        let targets: Vec<LeafId> = self.tree().map_or_else(Vec::new, |tree| {
            tree.leaves()
                .filter(|(id, leaf)| leaf.children.is_some() && tree.source(*id).is_some())
                .map(|(id, _)| id)
                .collect()
        });
        targets
            .into_iter()
            .filter(|id| self.set_expanded(*id, expanded, Emit::Suppress).is_ok())
            .count()
    }
}
