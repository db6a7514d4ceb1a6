//! Deferred, targeted scene mutations.
//!
//! Input handling never touches the scene tree directly; it queues
//! [`Command`]s that the world drains once per simulation step, before
//! entity integration. That keeps "what happened" (input) and "what it
//! does to the scene" (mutation) in separate phases.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::category::Category;
use crate::scene::node::Node;

/// Action applied to every matching node. Clonable so a bound command can
/// be queued many times.
pub type CommandAction = Arc<dyn Fn(&mut Node, f32)>;

/// An action plus the category filter selecting its targets.
#[derive(Clone)]
pub struct Command {
    pub category: Category,
    pub action: CommandAction,
}

impl Command {
    pub fn new(category: Category, action: impl Fn(&mut Node, f32) + 'static) -> Self {
        Command {
            category,
            action: Arc::new(action),
        }
    }
}

/// Strict FIFO queue of commands, filled during the input phase and
/// drained by `World::update`.
#[derive(Default)]
pub struct CommandQueue {
    queue: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        CommandQueue::default()
    }

    pub fn push(&mut self, command: Command) {
        self.queue.push_back(command);
    }

    /// Remove and return the oldest command.
    ///
    /// Panics when empty; callers check [`is_empty`] first.
    ///
    /// [`is_empty`]: CommandQueue::is_empty
    pub fn pop(&mut self) -> Command {
        self.queue
            .pop_front()
            .expect("pop on an empty command queue")
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_queue_is_fifo() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut queue = CommandQueue::new();
        for tag in 0..4 {
            let order = Rc::clone(&order);
            queue.push(Command::new(Category::SCENE, move |_, _| {
                order.borrow_mut().push(tag);
            }));
        }
        let mut node = crate::scene::node::Node::container();
        while !queue.is_empty() {
            let cmd = queue.pop();
            (cmd.action)(&mut node, 0.0);
        }
        assert_eq!(*order.borrow(), vec![0, 1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "empty command queue")]
    fn test_pop_empty_panics() {
        CommandQueue::new().pop();
    }

    #[test]
    fn test_len_tracks_pushes() {
        let mut queue = CommandQueue::new();
        assert!(queue.is_empty());
        queue.push(Command::new(Category::NONE, |_, _| {}));
        queue.push(Command::new(Category::NONE, |_, _| {}));
        assert_eq!(queue.len(), 2);
        queue.pop();
        assert_eq!(queue.len(), 1);
    }
}
