use item::Item;
use itemset::Itemset;
use miner::Support;
use std::error::Error;
use std::fmt;

// One mined itemset collection, tied to the support threshold it was
// requested at. Membership never changes after loading.
pub struct Collection {
    pub itemsets: Vec<Itemset>,
    pub threshold: Support,
}

impl Collection {
    pub fn new(itemsets: Vec<Itemset>, threshold: Support) -> Collection {
        Collection {
            itemsets: itemsets,
            threshold: threshold,
        }
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    // Union of the items of every member itemset.
    pub fn elements(&self) -> Itemset {
        let items: Vec<Item> = self.itemsets
            .iter()
            .flat_map(|itemset| itemset.items().iter().cloned())
            .collect();
        Itemset::new(items)
    }
}

#[derive(Debug)]
pub struct ContainmentError {
    pub step: usize,
    pub itemset: String,
}

impl fmt::Display for ContainmentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "containment property violated: itemset {} of collection {} is not \
             covered by any itemset of collection {}",
            self.itemset,
            self.step,
            self.step - 1
        )
    }
}

impl Error for ContainmentError {
    fn description(&self) -> &str {
        "containment property violated"
    }
}

// Mk within Mk-1 within ... within M0: every itemset of a collection must be
// a subset of some itemset of the preceding collection. A single collection
// is trivially valid.
pub fn satisfies_containment(collections: &[Collection]) -> Result<(), ContainmentError> {
    for step in 1..collections.len() {
        let previous = &collections[step - 1];
        for itemset in &collections[step].itemsets {
            if !previous.itemsets.iter().any(|p| itemset.is_subset_of(p)) {
                let ids: Vec<usize> = itemset.items().iter().map(|i| i.as_index()).collect();
                return Err(ContainmentError {
                    step: step,
                    itemset: format!("{:?}", ids),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{satisfies_containment, Collection};
    use item::Item;
    use itemset::Itemset;
    use miner::Support;

    fn itemset(ids: &[u32]) -> Itemset {
        Itemset::new(ids.iter().map(|&id| Item::with_id(id)).collect())
    }

    fn collection(itemsets: &[&[u32]]) -> Collection {
        Collection::new(itemsets.iter().map(|ids| itemset(ids)).collect(), Support::Count(1))
    }

    #[test]
    fn test_nested_collections_satisfy_containment() {
        let collections = vec![
            collection(&[&[1, 2], &[1, 3]]),
            collection(&[&[1]]),
        ];
        assert!(satisfies_containment(&collections).is_ok());
    }

    #[test]
    fn test_single_collection_is_trivially_valid() {
        let collections = vec![collection(&[&[1, 2]])];
        assert!(satisfies_containment(&collections).is_ok());
    }

    #[test]
    fn test_uncovered_itemset_violates_containment() {
        let collections = vec![
            collection(&[&[1, 2], &[1, 3]]),
            collection(&[&[1], &[4]]),
        ];
        let err = satisfies_containment(&collections).unwrap_err();
        assert_eq!(err.step, 1);
    }

    #[test]
    fn test_elements_unions_member_items() {
        let c = collection(&[&[1, 2], &[2, 3]]);
        assert_eq!(c.elements(), itemset(&[1, 2, 3]));
    }
}
