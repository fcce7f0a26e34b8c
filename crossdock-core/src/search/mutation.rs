#[cfg(test)]
#[path = "../../tests/unit/search/mutation_test.rs"]
mod mutation_test;

use crate::utils::Random;

/// A closed set of mutation methods over activation masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    /// Reverses the bit range between two random indices.
    Inversion,
    /// Swaps two random bits.
    Swap,
}

/// Applies the given mutation to the mask with the given probability. A no-op for masks
/// shorter than two bits.
pub fn mutate(mask: &mut [bool], probability: f64, kind: MutationKind, random: &dyn Random) {
    if !random.is_hit(probability) {
        return;
    }

    match kind {
        MutationKind::Inversion => inversion(mask, random),
        MutationKind::Swap => swap(mask, random),
    }
}

fn inversion(mask: &mut [bool], random: &dyn Random) {
    if mask.len() < 2 {
        return;
    }

    let first = random.uniform_int(0, mask.len() as i32 - 1) as usize;
    let second = random.uniform_int(0, mask.len() as i32 - 1) as usize;
    let (i, j) = if first > second { (second, first) } else { (first, second) };

    mask[i..=j].reverse();
}

fn swap(mask: &mut [bool], random: &dyn Random) {
    if mask.len() < 2 {
        return;
    }

    let i = random.uniform_int(0, mask.len() as i32 - 1) as usize;
    let j = random.uniform_int(0, mask.len() as i32 - 1) as usize;

    mask.swap(i, j);
}
