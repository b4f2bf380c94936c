use item::Item;

// Dense per-item support accumulator, indexed by item id.
pub struct ItemCounter {
    counts: Vec<u32>,
}

impl ItemCounter {
    pub fn new() -> ItemCounter {
        ItemCounter { counts: vec![] }
    }
    pub fn add(&mut self, item: &Item, count: u32) {
        let index = item.as_index();
        if self.counts.len() <= index {
            self.counts.resize(index + 1, 0);
        }
        self.counts[index] += count;
    }
    pub fn get(&self, item: &Item) -> u32 {
        let index = item.as_index();
        if index >= self.counts.len() {
            0
        } else {
            self.counts[index]
        }
    }
    pub fn max_count(&self) -> u32 {
        self.counts.iter().cloned().max().unwrap_or(0)
    }
}
