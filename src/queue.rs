use crate::error::QueueError;

/// FIFO queue built from two stacks.
///
/// Pushes land on `incoming`. Pops are served from `outgoing`, which is
/// refilled by reversing all of `incoming` in one go once it runs dry, so
/// every element is moved at most twice.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    incoming: Vec<T>,
    outgoing: Vec<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue {
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.incoming.push(item);
    }

    pub fn pop(&mut self) -> Result<T, QueueError> {
        if self.outgoing.is_empty() {
            self.incoming.reverse();
            std::mem::swap(&mut self.incoming, &mut self.outgoing);
        }
        self.outgoing.pop().ok_or(QueueError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.incoming.is_empty() && self.outgoing.is_empty()
    }

    pub fn len(&self) -> usize {
        self.incoming.len() + self.outgoing.len()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.incoming.extend(items);
    }
}

#[cfg(test)]
mod test {
    use super::Queue;
    use crate::error::QueueError;

    #[test]
    fn fifo_across_interleaving() {
        let mut queue = Queue::new();
        queue.push(1);
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.pop(), Ok(1));
        assert_eq!(queue.pop(), Ok(2));
        queue.push(4);
        assert_eq!(queue.pop(), Ok(3));
        assert_eq!(queue.pop(), Ok(4));
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_pop() {
        let mut queue: Queue<u64> = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), Err(QueueError::Empty));
        queue.push(7);
        assert_eq!(queue.pop(), Ok(7));
        assert_eq!(queue.pop(), Err(QueueError::Empty));
    }

    #[test]
    fn extend() {
        let mut queue = Queue::new();
        queue.push('a');
        queue.extend(vec!['b', 'c']);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Ok('a'));
        queue.extend(vec!['d']);
        assert_eq!(queue.pop(), Ok('b'));
        assert_eq!(queue.pop(), Ok('c'));
        assert_eq!(queue.pop(), Ok('d'));
        assert!(queue.is_empty());
    }
}
