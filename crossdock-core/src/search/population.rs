#[cfg(test)]
#[path = "../../tests/unit/search/population_test.rs"]
mod population_test;

use crate::evaluation::{evaluate_activation_mask, PlanEvaluation, PricingInputs};
use crate::models::{Shipment, Terminal};
use crate::utils::{GenericResult, Random};

/// The probability a terminal is activated in a freshly sampled mask. Sparse activation is
/// usually optimal, so masks start mostly empty.
const INITIAL_ACTIVATION_PROBABILITY: f64 = 0.3;

/// One point of the search space: an activation mask together with its evaluation.
#[derive(Clone, Debug)]
pub struct Individual {
    /// The activation mask, one bit per candidate terminal in catalog order.
    pub terminal_mask: Vec<bool>,
    /// The evaluation of the mask against the run's shipments.
    pub evaluation: PlanEvaluation,
}

impl Individual {
    /// Returns the fitness of the individual, lower is better.
    pub fn fitness(&self) -> f64 {
        self.evaluation.fitness
    }
}

/// A fully evaluated generation of individuals.
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Samples `count` random activation masks of the given length.
    pub fn random_masks(count: usize, mask_len: usize, random: &dyn Random) -> Vec<Vec<bool>> {
        (0..count)
            .map(|_| (0..mask_len).map(|_| random.is_hit(INITIAL_ACTIVATION_PROBABILITY)).collect())
            .collect()
    }

    /// Evaluates the given masks and builds a population out of them.
    pub fn from_masks(
        masks: Vec<Vec<bool>>,
        terminals: &[Terminal],
        shipments: &[Shipment],
        pricing: PricingInputs,
    ) -> GenericResult<Self> {
        let individuals = masks
            .into_iter()
            .map(|mask| {
                evaluate_activation_mask(&mask, terminals, shipments, pricing)
                    .map(|evaluation| Individual { terminal_mask: mask, evaluation })
            })
            .collect::<GenericResult<Vec<_>>>()?;

        Ok(Self { individuals })
    }

    /// Returns all individuals of the population.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Returns the population size.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Returns the individual with the lowest fitness; ties keep the earliest individual.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.iter().fold(None, |best, individual| match best {
            Some(current) if individual.fitness() < current.fitness() => Some(individual),
            None => Some(individual),
            _ => best,
        })
    }
}
