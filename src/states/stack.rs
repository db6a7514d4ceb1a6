//! Pushdown automaton of application screens.
//!
//! Stack order is z-order: the most recently pushed state receives input
//! first and draws last. Structural changes requested during a dispatch
//! pass are only logged into a pending list and applied at the pass
//! boundary, so iteration and mutation never interleave.

use log::{debug, warn};

use crate::platform::{InputEvent, InputQuery};
use crate::render::RenderTarget;
use crate::states::{Context, State, StateId};

/// One requested stack mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Push(StateId),
    Pop,
    Clear,
}

/// FIFO log of requested stack mutations.
///
/// States receive this during dispatch; the stack drains it afterwards.
#[derive(Debug, Default)]
pub struct PendingChanges {
    list: Vec<PendingAction>,
}

impl PendingChanges {
    pub fn push_state(&mut self, id: StateId) {
        self.list.push(PendingAction::Push(id));
    }

    pub fn pop_state(&mut self) {
        self.list.push(PendingAction::Pop);
    }

    pub fn clear_states(&mut self) {
        self.list.push(PendingAction::Clear);
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    fn take(&mut self) -> Vec<PendingAction> {
        std::mem::take(&mut self.list)
    }
}

type StateFactory = Box<dyn Fn(&mut Context) -> Box<dyn State>>;

/// Ordered stack of active states with deferred push/pop/clear.
#[derive(Default)]
pub struct StateStack {
    stack: Vec<(StateId, Box<dyn State>)>,
    pending: PendingChanges,
    factories: rustc_hash::FxHashMap<StateId, StateFactory>,
}

impl StateStack {
    pub fn new() -> Self {
        StateStack::default()
    }

    /// Associate `id` with a constructor. Pushing an id without a factory
    /// is ignored with a warning.
    pub fn register_state(
        &mut self,
        id: StateId,
        factory: impl Fn(&mut Context) -> Box<dyn State> + 'static,
    ) {
        if self.factories.insert(id, Box::new(factory)).is_some() {
            warn!("state {id:?} was already registered and has been replaced");
        }
    }

    fn create_state(&self, id: StateId, ctx: &mut Context) -> Option<Box<dyn State>> {
        match self.factories.get(&id) {
            Some(factory) => Some(factory(ctx)),
            None => {
                warn!("no factory registered for state {id:?}");
                None
            }
        }
    }

    /// Request a push. Applied at the next pending-change flush.
    pub fn push_state(&mut self, id: StateId) {
        self.pending.push_state(id);
    }

    pub fn pop_state(&mut self) {
        self.pending.pop_state();
    }

    pub fn clear_states(&mut self) {
        self.pending.clear_states();
    }

    /// Dispatch one event top-down, stopping at the first state that
    /// returns `false`, then flush pending changes.
    pub fn handle_event(&mut self, ctx: &mut Context, event: &InputEvent) {
        for (_, state) in self.stack.iter_mut().rev() {
            if !state.handle_event(ctx, event, &mut self.pending) {
                break;
            }
        }
        self.apply_pending_changes(ctx);
    }

    /// Advance the active states top-down with the same short-circuiting,
    /// then flush pending changes.
    pub fn update(&mut self, ctx: &mut Context, input: &dyn InputQuery, dt: f32) {
        for (_, state) in self.stack.iter_mut().rev() {
            if !state.update(ctx, input, dt, &mut self.pending) {
                break;
            }
        }
        self.apply_pending_changes(ctx);
    }

    /// Draw bottom-to-top so overlays render on top.
    pub fn draw(&mut self, ctx: &Context, target: &mut dyn RenderTarget) {
        for (_, state) in self.stack.iter_mut() {
            state.draw(ctx, target);
        }
    }

    /// Apply every pending change in request order, exactly once.
    pub fn apply_pending_changes(&mut self, ctx: &mut Context) {
        for action in self.pending.take() {
            match action {
                PendingAction::Push(id) => {
                    debug!("pushing state {id:?}");
                    if let Some(state) = self.create_state(id, ctx) {
                        self.stack.push((id, state));
                    }
                }
                PendingAction::Pop => {
                    if let Some((id, _)) = self.stack.pop() {
                        debug!("popped state {id:?}");
                    }
                }
                PendingAction::Clear => {
                    debug!("clearing all states");
                    self.stack.clear();
                }
            }
        }
    }

    /// Empty stack is the application's termination signal.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Current stack composition, bottom to top.
    pub fn ids(&self) -> Vec<StateId> {
        self.stack.iter().map(|(id, _)| *id).collect()
    }
}
