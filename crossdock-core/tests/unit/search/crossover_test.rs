use super::*;
use crate::helpers::*;

const T: bool = true;
const F: bool = false;

#[test]
fn can_cross_uniformly_per_bit() {
    let random = FakeRandom::with_hits(vec![], vec![], vec![true, false, true, false]);

    let (child1, child2) = crossover(&[T, T, T, T], &[F, F, F, F], CrossoverKind::Uniform, &random);

    assert_eq!(child1, vec![T, F, T, F]);
    assert_eq!(child2, vec![F, T, F, T]);
}

#[test]
fn can_cross_at_single_point() {
    let random = FakeRandom::new(vec![2], vec![]);

    let (child1, child2) = crossover(&[T, T, T, T], &[F, F, F, F], CrossoverKind::SinglePoint, &random);

    assert_eq!(child1, vec![T, T, F, F]);
    assert_eq!(child2, vec![F, F, T, T]);
}

#[test]
fn can_keep_single_bit_parents_unchanged_on_single_point() {
    let random = FakeRandom::new(vec![], vec![]);

    let (child1, child2) = crossover(&[T], &[F], CrossoverKind::SinglePoint, &random);

    assert_eq!(child1, vec![T]);
    assert_eq!(child2, vec![F]);
}

#[test]
fn can_cross_at_two_points() {
    let random = FakeRandom::new(vec![1, 3], vec![]);

    let (child1, child2) = crossover(&[T, T, T, T], &[F, F, F, F], CrossoverKind::TwoPoint, &random);

    assert_eq!(child1, vec![T, F, F, T]);
    assert_eq!(child2, vec![F, T, T, F]);
}

#[test]
fn can_order_two_point_cuts() {
    let random = FakeRandom::new(vec![3, 1], vec![]);

    let (child1, child2) = crossover(&[T, T, T, T], &[F, F, F, F], CrossoverKind::TwoPoint, &random);

    assert_eq!(child1, vec![T, F, F, T]);
    assert_eq!(child2, vec![F, T, T, F]);
}

#[test]
fn can_keep_short_parents_unchanged_on_two_point() {
    let random = FakeRandom::new(vec![], vec![]);

    let (child1, child2) = crossover(&[T, F], &[F, T], CrossoverKind::TwoPoint, &random);

    assert_eq!(child1, vec![T, F]);
    assert_eq!(child2, vec![F, T]);
}
