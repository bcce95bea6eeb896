use crate::grid::Item;
use std::collections::VecDeque;

/// Where an ant notes the items it walked over without collecting
pub trait ItemMemory {
    fn record(&mut self, item: Item);
}

/// Bounded log that forgets the oldest entry once full
#[derive(Clone, Debug, Default)]
pub struct ItemLog {
    capacity: usize,
    items: VecDeque<Item>,
}

impl ItemLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Items currently remembered
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemMemory for ItemLog {
    fn record(&mut self, item: Item) {
        if self.capacity == 0 {
            return;
        }
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }
}
