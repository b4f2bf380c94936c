use collection::Collection;
use fnv::FnvHashSet;
use hypergraph::minimal_transversals;
use itemset::Itemset;
use rayon::prelude::*;

// P(c): the union of every non-empty sub-itemset of c's members.
pub fn subset_family(collection: &Collection) -> FnvHashSet<Itemset> {
    let mut family = FnvHashSet::default();
    for itemset in &collection.itemsets {
        for subset in itemset.subsets() {
            family.insert(subset);
        }
    }
    family
}

// Itemsets covered at the previous step but no longer at the current one:
// P(previous) - P(current). Empty exactly when the two collections induce
// the same closure.
pub fn border_difference(previous: &Collection, current: &Collection) -> Vec<Itemset> {
    let current_family = subset_family(current);
    subset_family(previous)
        .into_iter()
        .filter(|itemset| !current_family.contains(itemset))
        .collect()
}

// Keeps the members that are not strict supersets of another member.
pub fn minimal_elements(sets: &[Itemset]) -> Vec<Itemset> {
    sets.par_iter()
        .filter(|candidate| {
            !sets
                .iter()
                .any(|other| *other != **candidate && other.is_subset_of(candidate))
        })
        .map(|candidate| candidate.clone())
        .collect()
}

// Negative-border candidates by hitting-set duality: the minimal
// transversals of the complement hypergraph of `current` are the minimal
// itemsets not covered by it; those the previous collection covers are the
// border. An empty hyperedge means some member spans the whole universe,
// which covers every candidate, so no border exists.
pub fn transversal_border(
    universe: &Itemset,
    previous: &Collection,
    current: &Collection,
) -> Vec<Itemset> {
    let edges: Vec<Itemset> = current
        .itemsets
        .iter()
        .map(|itemset| universe.minus(itemset))
        .collect();
    let transversals = match minimal_transversals(&edges) {
        Ok(transversals) => transversals,
        Err(_) => return vec![],
    };
    transversals
        .into_iter()
        .filter(|t| previous.itemsets.iter().any(|p| t.is_subset_of(p)))
        .collect()
}
