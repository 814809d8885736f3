//! Operation feed
//!
//! Algorithms emit comparisons and changes into a feed while they sort;
//! any number of listeners can be attached to it. Emission is synchronous,
//! so a listener has seen every operation by the time `sort` returns.

use crate::item::SortableItem;
use crate::operation::Operation;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle of an attached listener
    pub struct ListenerId;
}

/// Operation handler function type
pub type OperationHandler<'a> = Box<dyn FnMut(&Operation) + 'a>;

/// Dispatches emitted operations to attached listeners
#[derive(Default)]
pub struct OperationFeed<'a> {
    handlers: SlotMap<ListenerId, OperationHandler<'a>>,
}

impl<'a> OperationFeed<'a> {
    pub fn new() -> Self {
        Self {
            handlers: SlotMap::with_key(),
        }
    }

    /// Attach a listener, returning the handle needed to detach it
    pub fn attach<F>(&mut self, handler: F) -> ListenerId
    where
        F: FnMut(&Operation) + 'a,
    {
        self.handlers.insert(Box::new(handler))
    }

    /// Detach a listener. Returns false if it was not attached.
    pub fn detach(&mut self, id: ListenerId) -> bool {
        self.handlers.remove(id).is_some()
    }

    pub fn has_listeners(&self) -> bool {
        !self.handlers.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit a comparison between `a` and `b`
    pub fn comparison(&mut self, a: &SortableItem, b: &SortableItem) {
        if self.handlers.is_empty() {
            return;
        }
        self.dispatch(&Operation::Comparison { a: *a, b: *b });
    }

    /// Emit a snapshot of the working sequence after a mutation
    pub fn change(&mut self, items: &[SortableItem]) {
        if self.handlers.is_empty() {
            return;
        }
        self.dispatch(&Operation::Change {
            sequence: items.to_vec(),
        });
    }

    /// Dispatch an operation to all attached listeners
    pub fn dispatch(&mut self, operation: &Operation) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(operation);
        }
    }
}

impl std::fmt::Debug for OperationFeed<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationFeed")
            .field("listeners", &self.handlers.len())
            .finish()
    }
}
