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

use collection::Collection;
use dbgen::Generated;
use fnv::FnvHashSet;
use item::item_vec_to_line;
use itemizer::Itemizer;
use itemset::Itemset;
use miner::{Miner, Support};
use std::error::Error;
use std::fs::File;
use std::io::Write;

// Materializes a generated database: every itemset expanded by its
// cardinality into duplicate transaction rows, one per line. Returns the
// number of rows written.
pub fn write_database(
    path: &str,
    collections: &[Collection],
    generated: &Generated,
    itemizer: &Itemizer,
    delimiter: &str,
) -> Result<u64, Box<Error>> {
    let mut file = File::create(path)?;
    let mut rows = 0;
    for (step, collection) in collections.iter().enumerate() {
        for (i, itemset) in collection.itemsets.iter().enumerate() {
            let cardinality = generated.cardinalities[step][i];
            if cardinality == 0 {
                continue;
            }
            let line = item_vec_to_line(itemset.items(), itemizer, delimiter);
            for _ in 0..cardinality {
                writeln!(file, "{}", line)?;
            }
            rows += u64::from(cardinality);
        }
    }
    Ok(rows)
}

// The inverse mining property: re-mining the generated database at the
// achieved levels, always passed as exact counts, must reproduce the input
// collections. Collections compare as sets of itemsets, cardinalities
// ignored; a collection-count mismatch is a false verdict, not an error.
pub fn satisfies_inverse_mining(
    collections: &[Collection],
    generated: &Generated,
    miner: &Miner,
    itemizer: &mut Itemizer,
    database_path: &str,
    delimiter: &str,
) -> Result<bool, Box<Error>> {
    write_database(database_path, collections, generated, itemizer, delimiter)?;
    let mut remined: Vec<FnvHashSet<Itemset>> = vec![];
    for &level in &generated.min_sup_levels {
        let raw = miner.mine(database_path, &Support::Count(level))?;
        let mut mined = FnvHashSet::default();
        for record in &raw {
            let tokens: Vec<&str> = record.iter().map(|t| t.as_str()).collect();
            mined.insert(Itemset::new(itemizer.id_vec_of(&tokens)));
        }
        remined.push(mined);
    }
    if remined.len() != collections.len() {
        return Ok(false);
    }
    for (step, collection) in collections.iter().enumerate() {
        let original: FnvHashSet<Itemset> =
            collection.itemsets.iter().map(|itemset| itemset.clone()).collect();
        if original != remined[step] {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::{satisfies_inverse_mining, write_database};
    use collection::Collection;
    use dbgen::DbGen;
    use generation::{BasicOptimized, GenerationAlgorithm};
    use itemizer::Itemizer;
    use itemset::Itemset;
    use miner::{Miner, Support};
    use std::collections::HashMap;
    use std::env;
    use std::error::Error;

    // Canned miner: answers exact-count requests from a fixed table, the way
    // the inverse-mining check derives its thresholds.
    struct StubMiner {
        responses: HashMap<u32, Vec<Vec<String>>>,
    }

    impl Miner for StubMiner {
        fn mine(&self, _dataset: &str, support: &Support) -> Result<Vec<Vec<String>>, Box<Error>> {
            match *support {
                Support::Count(n) => Ok(self.responses.get(&n).cloned().unwrap_or(vec![])),
                Support::Percent(_) => Ok(vec![]),
            }
        }
    }

    fn records(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    // M0 = {ab, ac} at 50%, M1 = {a} at 90%: BasicOptimized reaches levels
    // [1, 3] and the expanded database is {ab, ac, a}.
    fn load(itemizer: &mut Itemizer) -> DbGen {
        let a = itemizer.id_of("a");
        let b = itemizer.id_of("b");
        let c = itemizer.id_of("c");
        let m0 = Collection::new(
            vec![Itemset::new(vec![a, b]), Itemset::new(vec![a, c])],
            Support::Percent(50.0),
        );
        let m1 = Collection::new(vec![Itemset::new(vec![a])], Support::Percent(90.0));
        DbGen::new(vec![m0, m1]).unwrap()
    }

    fn temp_path(name: &str) -> String {
        let path = env::temp_dir().join(name);
        path.to_str().unwrap().to_owned()
    }

    #[test]
    fn test_round_trip_succeeds() {
        let mut itemizer = Itemizer::new();
        let engine = load(&mut itemizer);
        let generated = BasicOptimized.generate(&engine);
        assert_eq!(generated.min_sup_levels, vec![1, 3]);

        let mut responses = HashMap::new();
        responses.insert(1, records(&[&["a", "b"], &["a", "c"]]));
        responses.insert(3, records(&[&["a"]]));
        let miner = StubMiner { responses: responses };

        let path = temp_path("dbgen-round-trip.tab");
        let ok = satisfies_inverse_mining(
            engine.collections(),
            &generated,
            &miner,
            &mut itemizer,
            &path,
            ",",
        ).unwrap();
        assert!(ok);
    }

    #[test]
    fn test_mismatch_is_a_verdict_not_an_error() {
        let mut itemizer = Itemizer::new();
        let engine = load(&mut itemizer);
        let generated = BasicOptimized.generate(&engine);

        let mut responses = HashMap::new();
        responses.insert(1, records(&[&["a", "b"], &["a", "c"]]));
        responses.insert(3, records(&[&["a"], &["b"]]));
        let miner = StubMiner { responses: responses };

        let path = temp_path("dbgen-mismatch.tab");
        let ok = satisfies_inverse_mining(
            engine.collections(),
            &generated,
            &miner,
            &mut itemizer,
            &path,
            ",",
        ).unwrap();
        assert!(!ok);
    }

    #[test]
    fn test_write_database_expands_cardinalities() {
        let mut itemizer = Itemizer::new();
        let engine = load(&mut itemizer);
        let generated = BasicOptimized.generate(&engine);
        let path = temp_path("dbgen-write.tab");
        let rows =
            write_database(&path, engine.collections(), &generated, &itemizer, ",").unwrap();
        assert_eq!(rows, generated.total_size());
        assert_eq!(rows, 3);
    }
}
