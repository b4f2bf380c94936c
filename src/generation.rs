use dbgen::{count_step_items, support_upto, DbGen, Generated, Variant};
use gamma::{Gamma, GammaOptimized, Hypergraph};
use item_counter::ItemCounter;

// A cardinality-assignment policy: decides, collection by collection, how
// many duplicate transactions of each itemset the generated database needs
// so that re-mining it at the achieved levels reproduces the collections.
pub trait GenerationAlgorithm {
    fn variant(&self) -> Variant;
    fn generate(&self, engine: &DbGen) -> Generated;
}

pub fn algorithm_named(name: &str) -> Option<Box<GenerationAlgorithm>> {
    match name {
        "basic" => Some(Box::new(Basic)),
        "basic-optimized" => Some(Box::new(BasicOptimized)),
        "gamma" => Some(Box::new(Gamma)),
        "gamma-optimized" => Some(Box::new(GammaOptimized)),
        "hypergraph" => Some(Box::new(Hypergraph)),
        _ => None,
    }
}

// Collection 0 seeds the database: every itemset kept at its default
// cardinality of 1, support level fixed at 1.
pub fn base_step(generated: &mut Generated) {
    generated.min_sup_levels[0] = 1;
}

// One more than the highest accumulated per-item support: a uniform bump
// past everything the earlier steps contributed, so nothing the new
// collection adds can look frequent at the previous threshold.
fn next_level(counter: &ItemCounter) -> u32 {
    counter.max_count() + 1
}

pub struct Basic;

impl GenerationAlgorithm for Basic {
    fn variant(&self) -> Variant {
        Variant::Basic
    }

    fn generate(&self, engine: &DbGen) -> Generated {
        let collections = engine.collections();
        let mut generated = Generated::new_default(self.variant(), collections);
        if collections.is_empty() {
            return generated;
        }
        base_step(&mut generated);
        let mut counter = ItemCounter::new();
        count_step_items(&mut counter, &collections[0], &generated.cardinalities[0]);
        for step in 1..collections.len() {
            let level = next_level(&counter);
            for cardinality in generated.cardinalities[step].iter_mut() {
                *cardinality = level;
            }
            generated.min_sup_levels[step] = level;
            count_step_items(&mut counter, &collections[step], &generated.cardinalities[step]);
        }
        generated
    }
}

pub struct BasicOptimized;

impl GenerationAlgorithm for BasicOptimized {
    fn variant(&self) -> Variant {
        Variant::BasicOptimized
    }

    // Same target level as Basic, but each itemset is only topped up to it:
    // support already spent by the earlier collections is not restated.
    fn generate(&self, engine: &DbGen) -> Generated {
        let collections = engine.collections();
        let mut generated = Generated::new_default(self.variant(), collections);
        if collections.is_empty() {
            return generated;
        }
        base_step(&mut generated);
        let mut counter = ItemCounter::new();
        count_step_items(&mut counter, &collections[0], &generated.cardinalities[0]);
        for step in 1..collections.len() {
            let level = next_level(&counter);
            for (i, itemset) in collections[step].itemsets.iter().enumerate() {
                let spent = support_upto(itemset, collections, &generated.cardinalities, step - 1);
                generated.cardinalities[step][i] = if spent >= level { 0 } else { level - spent };
            }
            generated.min_sup_levels[step] = level;
            count_step_items(&mut counter, &collections[step], &generated.cardinalities[step]);
        }
        generated
    }
}
