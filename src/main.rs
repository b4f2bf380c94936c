extern crate argparse;
extern crate fnv;
extern crate itertools;
extern crate rayon;

mod border;
mod collection;
mod command_line_args;
mod dbgen;
mod gamma;
mod generation;
mod hypergraph;
mod item;
mod item_counter;
mod itemizer;
mod itemset;
mod miner;
mod verify;

use command_line_args::parse_args_or_exit;
use command_line_args::Arguments;
use dbgen::DbGen;
use dbgen::Generated;
use dbgen::Variant;
use generation::algorithm_named;
use generation::GenerationAlgorithm;
use itemizer::Itemizer;
use miner::load_collections;
use miner::ExternalMiner;
use verify::satisfies_inverse_mining;
use verify::write_database;

use std::error::Error;
use std::process;
use std::time::Duration;
use std::time::Instant;

const ALL_ALGORITHMS: [&'static str; 5] = [
    "basic",
    "basic-optimized",
    "gamma",
    "gamma-optimized",
    "hypergraph",
];

fn seconds(elapsed: Duration) -> f64 {
    elapsed.as_secs() as f64 + f64::from(elapsed.subsec_nanos()) / 1e9
}

fn output_path_for(args: &Arguments, variant: Variant) -> String {
    if args.algorithm == "all" {
        format!("{}.{}", args.output_db_path, variant.name())
    } else {
        args.output_db_path.clone()
    }
}

fn run_generation(args: &Arguments) -> Result<(), Box<Error>> {
    println!(
        "Mining {} collections from data set: {}",
        args.min_supports.len(),
        args.input_file_path
    );
    let miner = ExternalMiner {
        executable: args.miner_path.clone(),
        input_delimiter: args.delimiter.clone(),
        output_delimiter: String::from(","),
        target_type: args.target_type.clone(),
        output_format: String::new(),
    };
    let mut itemizer = Itemizer::new();
    let timer = Instant::now();
    let collections = load_collections(
        &miner,
        &args.input_file_path,
        &args.min_supports,
        &mut itemizer,
    )?;
    println!(
        "Loading collections took {:.3} seconds.",
        seconds(timer.elapsed())
    );
    for (step, collection) in collections.iter().enumerate() {
        println!(
            "Collection {} (support {}): {} itemsets.",
            step,
            collection.threshold.to_token(),
            collection.len()
        );
    }

    let engine = DbGen::new(collections)?;
    println!("Containment property satisfied.");
    println!(
        "Item universe: {} distinct items.",
        engine.item_universe().len()
    );

    let names: Vec<&str> = if args.algorithm == "all" {
        ALL_ALGORITHMS.to_vec()
    } else {
        vec![args.algorithm.as_str()]
    };

    let mut results: Vec<Generated> = vec![];
    for name in &names {
        let algorithm = match algorithm_named(name) {
            Some(algorithm) => algorithm,
            None => continue,
        };
        let variant = algorithm.variant();
        let timer = Instant::now();
        let generated = algorithm.generate(&engine);
        println!(
            "{}: generated {} transactions in {:.3} seconds.",
            variant.name(),
            generated.total_size(),
            seconds(timer.elapsed())
        );
        let sizes: Vec<u64> = (0..engine.num_collections())
            .map(|step| generated.collection_size(step))
            .collect();
        println!("{}: transactions per collection: {:?}", variant.name(), sizes);
        println!(
            "{}: absolute minimum support levels: {:?}",
            variant.name(),
            generated.min_sup_levels
        );
        println!(
            "{}: relative minimum support levels: {:?}",
            variant.name(),
            generated.relative_levels()
        );
        println!(
            "{}: {} distinct items in the generated database.",
            variant.name(),
            generated.elements(engine.collections()).len()
        );
        let path = output_path_for(args, variant);
        let rows = write_database(
            &path,
            engine.collections(),
            &generated,
            &itemizer,
            &args.delimiter,
        )?;
        println!("{}: wrote {} rows to {}.", variant.name(), rows, path);
        if args.verify {
            let ok = satisfies_inverse_mining(
                engine.collections(),
                &generated,
                &miner,
                &mut itemizer,
                &path,
                &args.delimiter,
            )?;
            println!(
                "{}: satisfies the inverse mining property: {}",
                variant.name(),
                ok
            );
        }
        results.push(generated);
    }

    if args.algorithm == "all" {
        let gamma = results.iter().find(|g| g.variant == Variant::Gamma);
        let hypergraph = results.iter().find(|g| g.variant == Variant::Hypergraph);
        if let (Some(gamma), Some(hypergraph)) = (gamma, hypergraph) {
            println!(
                "gamma and hypergraph generate the same database: {}",
                gamma.same_database(hypergraph)
            );
        }
    }

    Ok(())
}

fn main() {
    let arguments = parse_args_or_exit();

    if let Err(err) = run_generation(&arguments) {
        println!("Error: {}", err);
        process::exit(1);
    }
}
