use super::*;
use crate::helpers::*;

fn population_with_fitness(fitness: &[f64]) -> Vec<Individual> {
    fitness.iter().map(|&value| create_individual(value)).collect()
}

#[test]
fn can_pick_tournament_winner_by_lowest_fitness() {
    let individuals = population_with_fitness(&[5., 1., 9.]);
    let random = FakeRandom::new(vec![0, 1, 2], vec![]);

    let parents = select_parents(&individuals, 1, SelectionKind::Tournament, &random);

    assert_eq!(parents, vec![1]);
}

#[test]
fn can_sample_tournament_with_replacement() {
    let individuals = population_with_fitness(&[5., 1., 9.]);
    let random = FakeRandom::new(vec![2, 2, 2, 0, 0, 0], vec![]);

    let parents = select_parents(&individuals, 2, SelectionKind::Tournament, &random);

    assert_eq!(parents, vec![2, 0]);
}

#[test]
fn can_draw_roulette_proportionally_to_inverse_fitness() {
    // Weights are 1 / (1 + fitness): [1.0, 0.5], cumulative [1.0, 1.5].
    let individuals = population_with_fitness(&[0., 1.]);
    let random = FakeRandom::new(vec![], vec![0.4, 1.2]);

    let parents = select_parents(&individuals, 2, SelectionKind::Roulette, &random);

    assert_eq!(parents, vec![0, 1]);
}

#[test]
fn can_draw_rank_proportionally_to_position() {
    // Ascending order is [1, 0] with rank weights [2, 1], cumulative [2, 3].
    let individuals = population_with_fitness(&[10., 5.]);
    let random = FakeRandom::new(vec![], vec![2.5, 1.0]);

    let parents = select_parents(&individuals, 2, SelectionKind::Rank, &random);

    assert_eq!(parents, vec![0, 1]);
}
