use crate::ast::NodeId;

/// Expressions whose type computation is in progress on the current
/// inference request.
///
/// One guard belongs to one top-level request and is threaded by `&mut`
/// through every nested query, including queries the semantic model makes
/// back into the core. Markers are pushed and popped in stack order and are
/// released on every exit path, unwinding included.
#[derive(Debug, Default)]
pub struct RecursionGuard {
    in_flight: Vec<NodeId>,
}

impl RecursionGuard {
    pub fn new() -> Self {
        RecursionGuard { in_flight: Vec::new() }
    }

    /// Run `compute` with `key` marked in flight.
    ///
    /// Returns `None` without running anything if `key` is already being
    /// computed further up the stack.
    pub fn run<R>(&mut self, key: NodeId, compute: impl FnOnce(&mut RecursionGuard) -> R) -> Option<R> {
        if self.in_flight.contains(&key) {
            log::trace!("recursion guard: {} re-entered at depth {}, short-circuiting", key, self.in_flight.len());
            return None;
        }
        log::trace!("recursion guard: entering {} at depth {}", key, self.in_flight.len());
        let entered = Entered::push(self, key);
        Some(compute(&mut *entered.guard))
    }

    pub fn is_in_flight(&self, key: NodeId) -> bool {
        self.in_flight.contains(&key)
    }

    /// Number of computations currently in flight.
    pub fn depth(&self) -> usize {
        self.in_flight.len()
    }
}

/// Pops its marker on drop.
struct Entered<'g> {
    guard: &'g mut RecursionGuard,
    depth: usize,
}

impl<'g> Entered<'g> {
    fn push(guard: &'g mut RecursionGuard, key: NodeId) -> Self {
        let depth = guard.in_flight.len();
        guard.in_flight.push(key);
        Entered { guard, depth }
    }
}

impl Drop for Entered<'_> {
    fn drop(&mut self) {
        self.guard.in_flight.truncate(self.depth);
    }
}
