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

use std::env;
use std::io;
use std::process;

use argparse::{ArgumentParser, Store, StoreTrue};
use generation::algorithm_named;
use miner::Support;

pub struct Arguments {
    pub input_file_path: String,
    pub output_db_path: String,
    pub min_supports: Vec<Support>,
    pub algorithm: String,
    pub miner_path: String,
    pub target_type: String,
    pub delimiter: String,
    pub verify: bool,
}

pub fn parse_args_or_exit() -> Arguments {
    let mut input_file_path = String::new();
    let mut output_db_path = String::new();
    let mut min_supports_arg = String::new();
    let mut algorithm = String::from("all");
    let mut miner_path = String::from("apriori");
    let mut target_type = String::from("m");
    let mut delimiter = String::from(",");
    let mut verify = false;

    {
        let mut parser = ArgumentParser::new();
        parser.set_description(
            "Generates a synthetic transactional database whose frequent \
             itemset collections, re-mined at the achieved support levels, \
             reproduce the collections of the input dataset.",
        );

        parser
            .refer(&mut input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input dataset, one delimiter-separated transaction per line.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut output_db_path)
            .add_option(
                &["--output"],
                Store,
                "File path in which to store the generated database. With \
                 --algorithm all, the variant name is appended.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut min_supports_arg)
            .add_option(
                &["--min-supports"],
                Store,
                "Comma-separated support thresholds, one mined collection \
                 each. Positive: percentage of transactions; negative: exact \
                 transaction count (use --min-supports=<list> for negatives).",
            )
            .metavar("list")
            .required();

        parser
            .refer(&mut algorithm)
            .add_option(
                &["--algorithm"],
                Store,
                "Cardinality assignment: basic, basic-optimized, gamma, \
                 gamma-optimized, hypergraph, or all.",
            )
            .metavar("name");

        parser
            .refer(&mut miner_path)
            .add_option(
                &["--miner"],
                Store,
                "External itemset miner executable (Borgelt-style flags).",
            )
            .metavar("path");

        parser
            .refer(&mut target_type)
            .add_option(
                &["--target-type"],
                Store,
                "Miner target type: s (frequent), m (maximal), c (closed).",
            )
            .metavar("type");

        parser
            .refer(&mut delimiter)
            .add_option(
                &["--delimiter"],
                Store,
                "Item delimiter of the dataset and the generated database.",
            )
            .metavar("string");

        parser.refer(&mut verify).add_option(
            &["--verify"],
            StoreTrue,
            "Re-mine the generated database and report whether the inverse \
             mining property holds.",
        );

        if env::args().count() == 1 {
            parser.print_help("Usage:", &mut io::stderr()).unwrap();
            process::exit(1);
        }

        match parser.parse_args() {
            Ok(()) => {}
            Err(err) => {
                process::exit(err);
            }
        }
    }

    let mut min_supports = vec![];
    for token in min_supports_arg.split(',') {
        match Support::parse(token) {
            Ok(support) => min_supports.push(support),
            Err(message) => {
                eprintln!("{}", message);
                process::exit(1);
            }
        }
    }
    if min_supports.is_empty() {
        eprintln!("At least one support threshold is required");
        process::exit(1);
    }

    match target_type.as_str() {
        "s" | "m" | "c" => {}
        _ => {
            eprintln!("Miner target type must be one of: s, m, c");
            process::exit(1);
        }
    }

    if algorithm != "all" && algorithm_named(&algorithm).is_none() {
        eprintln!("Unknown algorithm: {}", algorithm);
        process::exit(1);
    }

    Arguments {
        input_file_path: input_file_path,
        output_db_path: output_db_path,
        min_supports: min_supports,
        algorithm: algorithm,
        miner_path: miner_path,
        target_type: target_type,
        delimiter: delimiter,
        verify: verify,
    }
}
