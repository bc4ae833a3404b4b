use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::time::Duration;

/// Blocking FIFO hand-off between one pushing thread and one popping thread.
///
/// With a single consumer, nothing can be taken between a successful `wait_for_item` and the
/// following `pop_value`.
pub struct CommandQueue<T> {
   items: Mutex<VecDeque<T>>,
   available: Condvar,
}

impl<T> CommandQueue<T> {
   pub fn new() -> CommandQueue<T> {
      CommandQueue {
         items: Mutex::new(VecDeque::new()),
         available: Condvar::new(),
      }
   }

   pub fn push(&self, item: T) {
      {
         let mut items = self.items.lock();
         items.push_back(item);
      }
      self.available.notify_all();
   }

   /// Blocks until an item is queued or `timeout` elapses. Returns whether an item is available.
   pub fn wait_for_item(&self, timeout: Duration) -> bool {
      let mut items = self.items.lock();
      if !items.is_empty() {
         return true;
      }
      // waiting on the condition absorbs spurious wakeups
      let _ = self.available.wait_while_for(&mut items, |items| items.is_empty(), timeout);
      !items.is_empty()
   }

   /// Removes the head. Only meaningful after `wait_for_item` returned true.
   pub fn pop_value(&self) -> Option<T> {
      self.items.lock().pop_front()
   }

   // may be stale by the time the caller looks at it
   pub fn len(&self) -> usize {
      self.items.lock().len()
   }

   pub fn is_empty(&self) -> bool {
      self.items.lock().is_empty()
   }
}

impl<T> Default for CommandQueue<T> {
   fn default() -> CommandQueue<T> {
      CommandQueue::new()
   }
}
