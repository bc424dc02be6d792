pub use crate::{
    ClickEvent, Emit, EventKind, EventHandler, Handler, HitMap, LeafGlyphs, LeafId, LogTreeView,
    LogView, LogViewConfig, LogViewError, LogViewEvent, LogViewStyle, Node, TaskQueue, Tree,
};
