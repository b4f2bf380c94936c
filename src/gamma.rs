use border::{border_difference, minimal_elements, transversal_border};
use collection::Collection;
use dbgen::{support_upto, DbGen, Generated, Variant};
use generation::{base_step, GenerationAlgorithm};
use std::cmp;
use std::collections::BTreeSet;

// How the negative-border candidates of a step are obtained.
enum Border {
    // Power-set difference of the two adjacent collections.
    PowerSet,
    // Minimal transversals of the complement hypergraph; avoids enumerating
    // full power sets when itemsets are wide.
    Transversal,
}

enum Assignment {
    // Every itemset of the step gets the level, after snapping the level up
    // to the smallest current support of the step's own itemsets.
    Uniform,
    // Each itemset is topped up to the level, as in BasicOptimized.
    TopUp,
}

fn generate_border_family(
    engine: &DbGen,
    variant: Variant,
    border: Border,
    assignment: Assignment,
) -> Generated {
    let collections = engine.collections();
    let mut generated = Generated::new_default(variant, collections);
    if collections.is_empty() {
        return generated;
    }
    base_step(&mut generated);
    let universe = engine.item_universe();
    for step in 1..collections.len() {
        let previous_level = generated.min_sup_levels[step - 1];
        let candidates = match border {
            Border::PowerSet => {
                let diff = border_difference(&collections[step - 1], &collections[step]);
                minimal_elements(&diff)
            }
            Border::Transversal => {
                transversal_border(&universe, &collections[step - 1], &collections[step])
            }
        };
        if candidates.is_empty() {
            // The two steps induce the same closure: no new support
            // constraint exists, the level decreases by one and the step
            // contributes no transactions.
            generated.min_sup_levels[step] = previous_level.saturating_sub(1);
            for cardinality in generated.cardinalities[step].iter_mut() {
                *cardinality = 0;
            }
            continue;
        }
        let bound = candidates
            .iter()
            .map(|itemset| support_upto(itemset, collections, &generated.cardinalities, step - 1))
            .max()
            .unwrap_or(0);
        let level = cmp::max(previous_level, bound);
        match assignment {
            Assignment::Uniform => {
                let level = snap_to_support(level, step, collections, &generated.cardinalities);
                for cardinality in generated.cardinalities[step].iter_mut() {
                    *cardinality = level;
                }
                generated.min_sup_levels[step] = level;
            }
            Assignment::TopUp => {
                for (i, itemset) in collections[step].itemsets.iter().enumerate() {
                    let spent =
                        support_upto(itemset, collections, &generated.cardinalities, step - 1);
                    generated.cardinalities[step][i] =
                        if spent >= level { 0 } else { level - spent };
                }
                generated.min_sup_levels[step] = level;
            }
        }
    }
    generated
}

// The smallest current support of the step's own itemsets that reaches
// `level`; `level` itself when none does. Supports are taken over
// collections 0..=step with the step still at its default cardinalities.
fn snap_to_support(
    level: u32,
    step: usize,
    collections: &[Collection],
    cardinalities: &[Vec<u32>],
) -> u32 {
    let supports: BTreeSet<u32> = collections[step]
        .itemsets
        .iter()
        .map(|itemset| support_upto(itemset, collections, cardinalities, step))
        .collect();
    supports.into_iter().find(|&s| s >= level).unwrap_or(level)
}

pub struct Gamma;

impl GenerationAlgorithm for Gamma {
    fn variant(&self) -> Variant {
        Variant::Gamma
    }

    fn generate(&self, engine: &DbGen) -> Generated {
        generate_border_family(engine, self.variant(), Border::PowerSet, Assignment::Uniform)
    }
}

pub struct GammaOptimized;

impl GenerationAlgorithm for GammaOptimized {
    fn variant(&self) -> Variant {
        Variant::GammaOptimized
    }

    fn generate(&self, engine: &DbGen) -> Generated {
        generate_border_family(engine, self.variant(), Border::PowerSet, Assignment::TopUp)
    }
}

pub struct Hypergraph;

impl GenerationAlgorithm for Hypergraph {
    fn variant(&self) -> Variant {
        Variant::Hypergraph
    }

    fn generate(&self, engine: &DbGen) -> Generated {
        generate_border_family(
            engine,
            self.variant(),
            Border::Transversal,
            Assignment::Uniform,
        )
    }
}
