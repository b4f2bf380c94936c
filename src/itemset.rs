// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use item::Item;
use itertools::Itertools;

// A set of distinct items, kept as a sorted vector. Set operations below are
// merge-walks over the sorted representation.
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Itemset {
    items: Vec<Item>,
}

impl Itemset {
    pub fn new(items: Vec<Item>) -> Itemset {
        let mut items = items.into_iter().sorted();
        items.dedup();
        Itemset { items: items }
    }

    pub fn empty() -> Itemset {
        Itemset { items: vec![] }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        let mut bp = 0;
        for &item in &self.items {
            while bp < other.items.len() && other.items[bp] < item {
                bp += 1;
            }
            if bp == other.items.len() || other.items[bp] != item {
                return false;
            }
            bp += 1;
        }
        true
    }

    pub fn intersects(&self, other: &Itemset) -> bool {
        let mut ap = 0;
        let mut bp = 0;
        while ap < self.items.len() && bp < other.items.len() {
            if self.items[ap] < other.items[bp] {
                ap += 1;
            } else if other.items[bp] < self.items[ap] {
                bp += 1;
            } else {
                return true;
            }
        }
        false
    }

    // Sorted insert; no-op when the item is already present.
    pub fn with_item(&self, item: Item) -> Itemset {
        match self.items.binary_search(&item) {
            Ok(_) => self.clone(),
            Err(pos) => {
                let mut items = self.items.clone();
                items.insert(pos, item);
                Itemset { items: items }
            }
        }
    }

    // Items of self that are not in other.
    pub fn minus(&self, other: &Itemset) -> Itemset {
        let mut out = Vec::with_capacity(self.items.len());
        let mut bp = 0;
        for &item in &self.items {
            while bp < other.items.len() && other.items[bp] < item {
                bp += 1;
            }
            if bp == other.items.len() || other.items[bp] != item {
                out.push(item);
            }
        }
        Itemset { items: out }
    }

    // Every non-empty sub-itemset, the full set included. Bitmask
    // enumeration; collections whose itemsets are too wide for this are what
    // the transversal-based border computation is for.
    pub fn subsets(&self) -> Vec<Itemset> {
        let n = self.items.len();
        let mut out = Vec::with_capacity((1usize << n) - 1);
        for mask in 1..(1usize << n) {
            let mut items = Vec::with_capacity(mask.count_ones() as usize);
            for i in 0..n {
                if mask & (1 << i) != 0 {
                    items.push(self.items[i]);
                }
            }
            out.push(Itemset { items: items });
        }
        out
    }
}
