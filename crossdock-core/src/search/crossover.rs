#[cfg(test)]
#[path = "../../tests/unit/search/crossover_test.rs"]
mod crossover_test;

use crate::utils::Random;

/// A closed set of crossover methods over activation masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrossoverKind {
    /// Independent per-bit coin flip decides which parent donates to which child.
    Uniform,
    /// A single cut point, tails swapped between the children.
    SinglePoint,
    /// Two cut points, the middle segment swapped between the children.
    TwoPoint,
}

/// Produces two children masks out of two parents using the given method. Masks too short for
/// the method are returned unchanged.
pub fn crossover(a: &[bool], b: &[bool], kind: CrossoverKind, random: &dyn Random) -> (Vec<bool>, Vec<bool>) {
    match kind {
        CrossoverKind::Uniform => uniform_crossover(a, b, random),
        CrossoverKind::SinglePoint => single_point_crossover(a, b, random),
        CrossoverKind::TwoPoint => two_point_crossover(a, b, random),
    }
}

fn uniform_crossover(a: &[bool], b: &[bool], random: &dyn Random) -> (Vec<bool>, Vec<bool>) {
    let mut child1 = Vec::with_capacity(a.len());
    let mut child2 = Vec::with_capacity(a.len());

    for (&bit_a, &bit_b) in a.iter().zip(b.iter()) {
        if random.is_hit(0.5) {
            child1.push(bit_a);
            child2.push(bit_b);
        } else {
            child1.push(bit_b);
            child2.push(bit_a);
        }
    }

    (child1, child2)
}

fn single_point_crossover(a: &[bool], b: &[bool], random: &dyn Random) -> (Vec<bool>, Vec<bool>) {
    if a.len() <= 1 {
        return (a.to_vec(), b.to_vec());
    }

    let cut = random.uniform_int(1, a.len() as i32 - 1) as usize;

    let child1 = [&a[..cut], &b[cut..]].concat();
    let child2 = [&b[..cut], &a[cut..]].concat();

    (child1, child2)
}

fn two_point_crossover(a: &[bool], b: &[bool], random: &dyn Random) -> (Vec<bool>, Vec<bool>) {
    let n = a.len();
    if n <= 2 {
        return (a.to_vec(), b.to_vec());
    }

    let first = random.uniform_int(0, n as i32 - 1) as usize;
    let second = random.uniform_int(0, n as i32 - 1) as usize;
    let (i, j) = if first > second { (second, first) } else { (first, second) };

    let child1 = [&a[..i], &b[i..j], &a[j..]].concat();
    let child2 = [&b[..i], &a[i..j], &b[j..]].concat();

    (child1, child2)
}
