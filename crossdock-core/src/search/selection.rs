#[cfg(test)]
#[path = "../../tests/unit/search/selection_test.rs"]
mod selection_test;

use crate::search::Individual;
use crate::utils::Random;

/// The number of candidates drawn into one tournament.
const TOURNAMENT_SIZE: usize = 3;

/// A closed set of parent selection methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionKind {
    /// Three-way tournament, the lowest fitness wins, sampled with replacement.
    Tournament,
    /// Fitness-proportional draw with weights `1 / (1 + fitness)`.
    Roulette,
    /// Rank-proportional draw: position `j` of the ascending order is weighted by `n - j`.
    Rank,
}

/// Selects `count` parent indices out of the population using the given method.
pub fn select_parents(
    individuals: &[Individual],
    count: usize,
    kind: SelectionKind,
    random: &dyn Random,
) -> Vec<usize> {
    match kind {
        SelectionKind::Tournament => tournament_selection(individuals, count, random),
        SelectionKind::Roulette => roulette_wheel_selection(individuals, count, random),
        SelectionKind::Rank => rank_selection(individuals, count, random),
    }
}

fn tournament_selection(individuals: &[Individual], count: usize, random: &dyn Random) -> Vec<usize> {
    (0..count)
        .map(|_| {
            let mut winner = random.uniform_int(0, individuals.len() as i32 - 1) as usize;
            for _ in 1..TOURNAMENT_SIZE {
                let challenger = random.uniform_int(0, individuals.len() as i32 - 1) as usize;
                if individuals[challenger].fitness() < individuals[winner].fitness() {
                    winner = challenger;
                }
            }
            winner
        })
        .collect()
}

fn roulette_wheel_selection(individuals: &[Individual], count: usize, random: &dyn Random) -> Vec<usize> {
    let weight = |individual: &Individual| 1. / (1. + individual.fitness());
    let total: f64 = individuals.iter().map(weight).sum();

    (0..count)
        .map(|_| {
            let threshold = random.uniform_real(0., total);
            let mut cumulative = 0.;
            for (index, individual) in individuals.iter().enumerate() {
                cumulative += weight(individual);
                if cumulative >= threshold {
                    return index;
                }
            }
            individuals.len() - 1
        })
        .collect()
}

fn rank_selection(individuals: &[Individual], count: usize, random: &dyn Random) -> Vec<usize> {
    let mut order = (0..individuals.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| individuals[a].fitness().total_cmp(&individuals[b].fitness()));

    let n = order.len();
    let rank_sum = (n * (n + 1)) as f64 / 2.;

    (0..count)
        .map(|_| {
            let threshold = random.uniform_real(0., rank_sum);
            let mut cumulative = 0.;
            for (position, &index) in order.iter().enumerate() {
                cumulative += (n - position) as f64;
                if cumulative >= threshold {
                    return index;
                }
            }
            order[n - 1]
        })
        .collect()
}
