// Minimal example: scope a small stack-trace tree, paint it, click a frame.
use std::rc::Rc;

use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::widgets::StatefulWidget;

use tui_logview::prelude::*;

// Two request traces; the scope keeps only the one under `billing`.
fn trace() -> Tree {
    Tree::new(vec![
        Node::new("acme.orders").child(Node::with_value("acme.orders.create", "order 17 created")),
        Node::new("acme.billing")
            .expanded(true)
            .child(
                Node::new("acme.billing.Invoice")
                    .expanded(true)
                    .child(Node::with_value("acme.billing.Invoice.total", "total = 42.00")),
            )
            .child(Node::with_value("acme.billing.mail", "receipt sent")),
    ])
}

fn main() -> Result<(), LogViewError> {
    let mut view = LogView::new(&trace(), "billing-log", Some("billing"));

    // Handlers run later, when the task queue is drained.
    view.on(
        EventKind::Select,
        Rc::new(|event: &LogViewEvent| {
            if let LogViewEvent::Select(select) = event {
                println!("selected {}", select.data.stack_path);
            }
        }),
    );
    view.on_named(
        "collapseAll",
        Rc::new(|_: &LogViewEvent| println!("everything collapsed")),
    )?;

    // Paint into an in-memory buffer (no terminal required for the example).
    let area = Rect::new(0, 0, 40, 8);
    let mut buffer = Buffer::empty(area);
    let mut hits = HitMap::new();
    LogTreeView::new(&view, LogViewStyle::default()).render(area, &mut buffer, &mut hits);

    // Click the first painted frame without children; that selects it.
    if let Some(click) = hits
        .rows()
        .iter()
        .filter(|row| row.affix.is_none())
        .find_map(|row| hits.target_at(row.label.0, row.y))
    {
        view.click(click)?;
    }
    view.collapse_all();

    let ran = view.tasks().run_pending();
    println!("delivered {ran} events");
    Ok(())
}
