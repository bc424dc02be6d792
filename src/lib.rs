//! Collapsible log / stack-trace tree view for ratatui.
//!
//! A [`LogView`] narrows a [`Tree`] of log entries to an optional scope,
//! renders it into its host [`Container`], and publishes expand, collapse
//! and select interactions to subscribers. Delivery is deferred: handlers run
//! when the view's [`TaskQueue`] is drained by the embedding loop.
//!
//! Feature flags:
//! - `mouse`: crossterm mouse routing through [`HitMap`] and `LogView::handle_mouse`.
//! - `serde`: serde support for [`Node`] and [`Tree`].

mod bus;
mod config;
mod context;
mod error;
mod event;
mod glyphs;
mod model;
#[cfg(feature = "mouse")]
mod mouse;
pub mod prelude;
mod render;
mod scope;
mod style;
mod view;
mod widget;

pub use bus::{EventBus, EventHandler, Handler, TaskQueue};
pub use config::{DEFAULT_PLACEHOLDER, LogViewConfig};
pub use context::LeafRowContext;
pub use error::LogViewError;
pub use event::{ClickEvent, EventKind, LeafPart, LogViewEvent, SelectEvent, ToggleEvent};
pub use glyphs::{LeafGlyphs, leaf_line};
pub use model::{Node, Tree};
pub use render::{
    Affix, ChildrenWrapper, Container, ContainerContent, LeafId, NodePath, RenderedLeaf,
    RenderedTree, render,
};
pub use scope::filter;
pub use style::LogViewStyle;
pub use view::{Emit, LogView};
pub use widget::{HitMap, HitRow, LogTreeView};
