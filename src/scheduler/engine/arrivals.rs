/*!
 * Arrival Cursor
 * Admits processes into a ready queue in arrival order as the clock passes them
 */

use super::state::RunState;
use std::collections::VecDeque;

/// Walks the processes in (arrival, pid) order exactly once per run
#[derive(Debug)]
pub(crate) struct Arrivals {
    order: Vec<usize>,
    next: usize,
}

impl Arrivals {
    pub fn new(state: &RunState) -> Self {
        Self {
            order: state.arrival_order(),
            next: 0,
        }
    }

    /// Append every process that has arrived by `state.now()` to `queue`
    pub fn admit(&mut self, state: &RunState, queue: &mut VecDeque<usize>) -> usize {
        let now = state.now();
        let start = self.next;
        while let Some(&idx) = self.order.get(self.next) {
            if state.entry(idx).arrival > now {
                break;
            }
            queue.push_back(idx);
            self.next += 1;
        }
        self.next - start
    }
}
