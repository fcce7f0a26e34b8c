//! A genetic search over the binary activation mask of candidate terminals.

use crate::evaluation::PricingInputs;
use crate::models::{Shipment, Terminal};
use crate::utils::{Environment, GenericResult};

mod population;
pub use self::population::{Individual, Population};

mod selection;
pub use self::selection::{select_parents, SelectionKind};

mod crossover;
pub use self::crossover::{crossover, CrossoverKind};

mod mutation;
pub use self::mutation::{mutate, MutationKind};

#[cfg(test)]
#[path = "../../tests/unit/search/engine_test.rs"]
mod engine_test;

/// The probability a mutation operator is applied to an offspring mask.
const MUTATION_PROBABILITY: f64 = 0.1;

/// Tunable parameters of one genetic search run.
#[derive(Clone, Copy, Debug)]
pub struct GaSettings {
    /// The generation budget.
    pub num_generations: u32,
    /// The population size.
    pub num_individuals: u32,
    /// Amount of consecutive generations without a strict improvement after which the
    /// search stops early.
    pub stopping_criterion: u32,
    /// The parent selection method.
    pub selection: SelectionKind,
    /// The crossover method.
    pub crossover: CrossoverKind,
    /// The mutation method.
    pub mutation: MutationKind,
}

/// Runs the genetic search over terminal activation masks and returns the best individual
/// observed across all generations.
///
/// The search stops on the generation budget, on the stagnation window, or with an error when
/// the environment quota is exhausted.
pub fn run_terminal_search(
    settings: &GaSettings,
    terminals: &[Terminal],
    shipments: &[Shipment],
    pricing: PricingInputs,
    environment: &Environment,
) -> GenericResult<Individual> {
    let random = environment.random.as_ref();

    let masks = Population::random_masks(settings.num_individuals as usize, terminals.len(), random);
    let mut population = Population::from_masks(masks, terminals, shipments, pricing)?;

    let mut best = population.best().cloned().ok_or("population is empty")?;
    let mut stagnant_generations = 0;

    for generation in 0..settings.num_generations {
        if let Some(quota) = environment.quota.as_ref() {
            if quota.is_reached() {
                return Err("terminal search cancelled".into());
            }
        }

        let current_best = population.best().cloned().ok_or("population is empty")?;
        if current_best.fitness() < best.fitness() {
            best = current_best;
            stagnant_generations = 0;
        } else {
            stagnant_generations += 1;
        }

        if stagnant_generations >= settings.stopping_criterion {
            (environment.logger)(&format!(
                "terminal search stopped early at generation {generation}: no improvement over {stagnant_generations} generations"
            ));
            break;
        }

        let parents = select_parents(population.individuals(), population.size(), settings.selection, random);

        let mut offspring = Vec::with_capacity(population.size());
        for pair in (0..parents.len()).step_by(2) {
            let first = &population.individuals()[parents[pair]];
            let second = &population.individuals()[parents[(pair + 1) % parents.len()]];

            let (mut child1, mut child2) =
                crossover(&first.terminal_mask, &second.terminal_mask, settings.crossover, random);
            mutate(&mut child1, MUTATION_PROBABILITY, settings.mutation, random);
            mutate(&mut child2, MUTATION_PROBABILITY, settings.mutation, random);

            offspring.push(child1);
            offspring.push(child2);
        }
        offspring.truncate(population.size());

        population = Population::from_masks(offspring, terminals, shipments, pricing)?;
    }

    Ok(best)
}
