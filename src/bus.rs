//! Per-view publish/subscribe with deferred delivery.
//!
//! `emit` never calls a handler directly. Every (handler, event) pair becomes
//! its own task on a [`TaskQueue`], which the embedding loop drains after the
//! triggering call has returned.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::error::LogViewError;
use crate::event::{EventKind, LogViewEvent};

/// Receiver of log view events.
///
/// The implementing value is the handler's context: state the handler needs
/// lives on `self`. Closures implement the trait directly.
pub trait EventHandler {
    fn handle(&self, event: &LogViewEvent);
}

impl<F> EventHandler for F
where
    F: Fn(&LogViewEvent),
{
    #[inline]
    fn handle(&self, event: &LogViewEvent) {
        self(event);
    }
}

/// Shared handle to a registered handler. Identity is the allocation.
pub type Handler = Rc<dyn EventHandler>;

struct Task {
    handler: Handler,
    event: Rc<LogViewEvent>,
}

/// FIFO of pending handler invocations.
///
/// Clones share the same queue. Running a task holds no borrow of the queue,
/// so handlers may emit again or call back into the view.
#[derive(Clone, Default)]
pub struct TaskQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn schedule(&self, task: Task) {
        self.tasks.borrow_mut().push_back(task);
    }

    /// Runs the oldest pending task. Returns `false` if the queue was empty.
    pub fn run_next(&self) -> bool {
        let task = self.tasks.borrow_mut().pop_front();
        let Some(task) = task else {
            return false;
        };
        log::trace!("dispatching {} event", task.event.kind());
        task.handler.handle(&task.event);
        true
    }

    /// Runs tasks until the queue is empty, including tasks scheduled meanwhile.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }

    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }
}

/// Handlers registered on one view, keyed by event kind.
#[derive(Default)]
pub struct EventBus {
    handlers: FxHashMap<EventKind, Vec<Handler>>,
    queue: TaskQueue,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn queue(&self) -> &TaskQueue {
        &self.queue
    }

    /// Appends `handler` to the handlers of `kind`.
    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    pub fn subscribe_named(&mut self, name: &str, handler: Handler) -> Result<(), LogViewError> {
        let kind = name.parse()?;
        self.subscribe(kind, handler);
        Ok(())
    }

    /// Removes the earliest registration of `handler` under `kind`.
    ///
    /// Returns `false` if the handler was not registered.
    pub fn unsubscribe(&mut self, kind: EventKind, handler: &Handler) -> bool {
        let Some(handlers) = self.handlers.get_mut(&kind) else {
            return false;
        };
        let Some(pos) = handlers
            .iter()
            .position(|registered| same_handler(registered, handler))
        else {
            return false;
        };
        handlers.remove(pos);
        true
    }

    pub fn unsubscribe_named(&mut self, name: &str, handler: &Handler) -> Result<bool, LogViewError> {
        let kind = name.parse()?;
        Ok(self.unsubscribe(kind, handler))
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Schedules one task per handler of the event's kind.
    ///
    /// Returns the number of scheduled tasks.
    pub fn emit(&self, event: LogViewEvent) -> usize {
        let kind = event.kind();
        let Some(handlers) = self.handlers.get(&kind).filter(|h| !h.is_empty()) else {
            log::trace!("{kind} emitted without subscribers");
            return 0;
        };
        let event = Rc::new(event);
        for handler in handlers {
            self.queue.schedule(Task {
                handler: Rc::clone(handler),
                event: Rc::clone(&event),
            });
        }
        log::trace!("{kind} scheduled for {} handlers", handlers.len());
        handlers.len()
    }
}

fn same_handler(a: &Handler, b: &Handler) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
