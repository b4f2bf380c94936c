use fnv::FnvHashMap;
use item::Item;

pub struct Itemizer {
    next_item_id: u32,
    item_str_to_id: FnvHashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Itemizer {
    pub fn new() -> Itemizer {
        Itemizer {
            next_item_id: 1,
            item_str_to_id: FnvHashMap::default(),
            item_id_to_str: vec![],
        }
    }
    pub fn id_of(&mut self, item: &str) -> Item {
        if let Some(id) = self.item_str_to_id.get(item) {
            return *id;
        }
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.item_str_to_id
            .insert(String::from(item), Item::with_id(id));
        self.item_id_to_str.push(String::from(item));
        assert_eq!(self.item_id_to_str.len(), id as usize);
        Item::with_id(id)
    }
    pub fn str_of(&self, id: Item) -> &str {
        &self.item_id_to_str[id.as_index() - 1]
    }
    // Interns one record of raw tokens. Miner output sometimes repeats an
    // item within a record; duplicates collapse here.
    pub fn id_vec_of(&mut self, tokens: &[&str]) -> Vec<Item> {
        let mut ids: Vec<Item> = tokens.iter().map(|t| self.id_of(t.trim())).collect();
        ids.sort();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::Itemizer;

    #[test]
    fn test_round_trip() {
        let mut itemizer = Itemizer::new();
        let beer = itemizer.id_of("beer");
        let wine = itemizer.id_of("wine");
        assert_eq!(itemizer.id_of("beer"), beer);
        assert_eq!(itemizer.str_of(beer), "beer");
        assert_eq!(itemizer.str_of(wine), "wine");
    }

    #[test]
    fn test_id_vec_of_sorts_and_dedupes() {
        let mut itemizer = Itemizer::new();
        let ids = itemizer.id_vec_of(&["b", " a ", "b"]);
        assert_eq!(ids, vec![itemizer.id_of("b"), itemizer.id_of("a")]);
    }
}
