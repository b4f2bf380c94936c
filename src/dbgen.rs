use collection::{satisfies_containment, Collection, ContainmentError};
use item::Item;
use item_counter::ItemCounter;
use itemset::Itemset;

// The five cardinality-assignment policies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Variant {
    Basic,
    BasicOptimized,
    Gamma,
    GammaOptimized,
    Hypergraph,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match *self {
            Variant::Basic => "basic",
            Variant::BasicOptimized => "basic-optimized",
            Variant::Gamma => "gamma",
            Variant::GammaOptimized => "gamma-optimized",
            Variant::Hypergraph => "hypergraph",
        }
    }
}

// Engine state: the ordered collections, loaded once and immutable in
// membership afterwards. Construction refuses collections that violate the
// containment property, so no generation algorithm ever runs on such input.
pub struct DbGen {
    collections: Vec<Collection>,
}

impl DbGen {
    pub fn new(collections: Vec<Collection>) -> Result<DbGen, ContainmentError> {
        satisfies_containment(&collections)?;
        Ok(DbGen { collections: collections })
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn num_collections(&self) -> usize {
        self.collections.len()
    }

    // Union of items over every loaded collection.
    pub fn item_universe(&self) -> Itemset {
        let mut items: Vec<Item> = vec![];
        for collection in &self.collections {
            items.extend(collection.elements().items().iter().cloned());
        }
        Itemset::new(items)
    }
}

// One generation run: a cardinality per itemset per collection, plus the
// absolute minimum support level achieved at each step. Each run owns its
// own table; running two algorithms on the same engine is valid and the
// results are independent.
pub struct Generated {
    pub variant: Variant,
    pub cardinalities: Vec<Vec<u32>>,
    pub min_sup_levels: Vec<u32>,
}

impl Generated {
    // Cardinalities default to 1 until the owning step assigns them.
    pub fn new_default(variant: Variant, collections: &[Collection]) -> Generated {
        Generated {
            variant: variant,
            cardinalities: collections.iter().map(|c| vec![1; c.len()]).collect(),
            min_sup_levels: vec![0; collections.len()],
        }
    }

    pub fn collection_size(&self, step: usize) -> u64 {
        self.cardinalities[step].iter().map(|&c| u64::from(c)).sum()
    }

    pub fn total_size(&self) -> u64 {
        (0..self.cardinalities.len())
            .map(|step| self.collection_size(step))
            .sum()
    }

    // Items still contributing transactions under this run.
    pub fn elements(&self, collections: &[Collection]) -> Itemset {
        let mut items: Vec<Item> = vec![];
        for (step, collection) in collections.iter().enumerate() {
            for (i, itemset) in collection.itemsets.iter().enumerate() {
                if self.cardinalities[step][i] > 0 {
                    items.extend(itemset.items().iter().cloned());
                }
            }
        }
        Itemset::new(items)
    }

    // Achieved levels relative to the generated database size.
    pub fn relative_levels(&self) -> Vec<f64> {
        let total = self.total_size();
        if total == 0 {
            return vec![0.0; self.min_sup_levels.len()];
        }
        self.min_sup_levels
            .iter()
            .map(|&level| f64::from(level) / total as f64)
            .collect()
    }

    // Two runs generate the same database exactly when their cardinality
    // tables agree, since collection membership never changes.
    pub fn same_database(&self, other: &Generated) -> bool {
        self.cardinalities == other.cardinalities
    }
}

// Support already spent on `itemset`: the summed cardinalities, over
// collections 0..=upto, of every member itemset covering it.
pub fn support_upto(
    itemset: &Itemset,
    collections: &[Collection],
    cardinalities: &[Vec<u32>],
    upto: usize,
) -> u32 {
    let mut sum = 0;
    for step in 0..upto + 1 {
        for (i, member) in collections[step].itemsets.iter().enumerate() {
            if itemset.is_subset_of(member) {
                sum += cardinalities[step][i];
            }
        }
    }
    sum
}

// Folds one step's assigned cardinalities into the per-item accumulator.
pub fn count_step_items(counter: &mut ItemCounter, collection: &Collection, cardinalities: &[u32]) {
    for (i, itemset) in collection.itemsets.iter().enumerate() {
        for item in itemset.items() {
            counter.add(item, cardinalities[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{count_step_items, support_upto, DbGen};
    use collection::Collection;
    use item::Item;
    use item_counter::ItemCounter;
    use itemset::Itemset;
    use miner::Support;

    fn itemset(ids: &[u32]) -> Itemset {
        Itemset::new(ids.iter().map(|&id| Item::with_id(id)).collect())
    }

    fn collection(itemsets: &[&[u32]]) -> Collection {
        Collection::new(itemsets.iter().map(|ids| itemset(ids)).collect(), Support::Count(1))
    }

    #[test]
    fn test_support_upto_sums_covering_cardinalities() {
        let collections = vec![collection(&[&[1, 2], &[1, 3]])];
        let cardinalities = vec![vec![2, 3]];
        assert_eq!(support_upto(&itemset(&[1]), &collections, &cardinalities, 0), 5);
        assert_eq!(support_upto(&itemset(&[1, 2]), &collections, &cardinalities, 0), 2);
        assert_eq!(support_upto(&itemset(&[4]), &collections, &cardinalities, 0), 0);
    }

    #[test]
    fn test_count_step_items() {
        let c = collection(&[&[1, 2], &[1, 3]]);
        let mut counter = ItemCounter::new();
        count_step_items(&mut counter, &c, &[2, 3]);
        assert_eq!(counter.get(&Item::with_id(1)), 5);
        assert_eq!(counter.get(&Item::with_id(2)), 2);
        assert_eq!(counter.get(&Item::with_id(3)), 3);
        assert_eq!(counter.max_count(), 5);
    }

    #[test]
    fn test_engine_refuses_containment_violation() {
        let collections = vec![
            collection(&[&[1, 2]]),
            collection(&[&[3]]),
        ];
        assert!(DbGen::new(collections).is_err());
    }

    #[test]
    fn test_item_universe() {
        let engine = DbGen::new(vec![
            collection(&[&[1, 2], &[1, 3]]),
            collection(&[&[1]]),
        ]).unwrap();
        assert_eq!(engine.item_universe(), itemset(&[1, 2, 3]));
    }
}
