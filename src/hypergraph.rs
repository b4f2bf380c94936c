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

use itemset::Itemset;
use rayon::prelude::*;
use std::error::Error;
use std::fmt;

// An empty hyperedge cannot be hit: the hypergraph has no transversal at
// all. Reported as its own outcome so callers can branch on it.
#[derive(Debug, PartialEq)]
pub struct EmptyEdge;

impl fmt::Display for EmptyEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "hypergraph contains an empty hyperedge")
    }
}

impl Error for EmptyEdge {
    fn description(&self) -> &str {
        "empty hyperedge"
    }
}

// All inclusion-minimal sets intersecting every edge, built incrementally:
// seed with the singletons of the first edge, then for each further edge
// extend every transversal that misses it with each of the edge's elements
// and prune non-minimal sets. Invariant: after k edges the family is exactly
// the minimal-transversal set of those k edges.
pub fn minimal_transversals(edges: &[Itemset]) -> Result<Vec<Itemset>, EmptyEdge> {
    if edges.is_empty() {
        return Ok(vec![Itemset::empty()]);
    }
    if edges.iter().any(|edge| edge.is_empty()) {
        return Err(EmptyEdge);
    }
    let mut family: Vec<Itemset> = edges[0]
        .items()
        .iter()
        .map(|&item| Itemset::new(vec![item]))
        .collect();
    for edge in &edges[1..] {
        let (hitting, missing): (Vec<Itemset>, Vec<Itemset>) =
            family.into_iter().partition(|t| t.intersects(edge));
        let mut extended = hitting;
        for transversal in &missing {
            for &item in edge.items() {
                extended.push(transversal.with_item(item));
            }
        }
        family = prune_non_minimal(extended);
    }
    Ok(family)
}

// Drops duplicates and every set that strictly contains another member.
fn prune_non_minimal(mut family: Vec<Itemset>) -> Vec<Itemset> {
    family.sort();
    family.dedup();
    family
        .par_iter()
        .filter(|t| {
            !family
                .iter()
                .any(|other| *other != **t && other.is_subset_of(t))
        })
        .map(|t| t.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{minimal_transversals, EmptyEdge};
    use item::Item;
    use itemset::Itemset;

    fn itemset(ids: &[u32]) -> Itemset {
        Itemset::new(ids.iter().map(|&id| Item::with_id(id)).collect())
    }

    fn transversals(edges: &[&[u32]]) -> Vec<Itemset> {
        let edges: Vec<Itemset> = edges.iter().map(|ids| itemset(ids)).collect();
        let mut family = minimal_transversals(&edges).unwrap();
        family.sort();
        family
    }

    #[test]
    fn test_two_edges() {
        assert_eq!(
            transversals(&[&[1, 2], &[2, 3]]),
            vec![itemset(&[1, 3]), itemset(&[2])]
        );
    }

    #[test]
    fn test_triangle() {
        assert_eq!(
            transversals(&[&[1, 2], &[2, 3], &[1, 3]]),
            vec![itemset(&[1, 2]), itemset(&[1, 3]), itemset(&[2, 3])]
        );
    }

    #[test]
    fn test_single_edge_yields_singletons() {
        assert_eq!(transversals(&[&[4, 7]]), vec![itemset(&[4]), itemset(&[7])]);
    }

    #[test]
    fn test_no_edges_yields_the_empty_transversal() {
        assert_eq!(minimal_transversals(&[]).unwrap(), vec![Itemset::empty()]);
    }

    #[test]
    fn test_empty_edge_is_a_distinct_outcome() {
        let edges = vec![itemset(&[1]), itemset(&[])];
        assert_eq!(minimal_transversals(&edges).unwrap_err(), EmptyEdge);
    }

    #[test]
    fn test_no_transversal_contains_another() {
        let family = transversals(&[&[1, 2, 3], &[3, 4], &[1, 4], &[2, 5]]);
        for a in &family {
            for b in &family {
                assert!(a == b || !a.is_subset_of(b));
            }
        }
    }
}
