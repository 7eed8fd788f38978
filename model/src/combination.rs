use std::iter::FusedIterator;

/// An unordered outcome of rolling several dice of the same class, given as non-decreasing face
/// indices, together with the number of ordered rolls that produce it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct WeightedCombination {
    pub face_indices: Vec<usize>,
    pub weight: u64,
}

/// The number of distinct orderings of a multiset with the given multiplicities, i.e.
/// `n! / (c_1! * ... * c_k!)` where `n` is the sum of all `c_i`.
pub fn multinomial(counts: impl IntoIterator<Item = usize>) -> u64 {
    let mut result = 1;
    let mut placed = 0u64;

    for count in counts {
        let mut binomial = 1u64;

        for i in 1..=count as u64 {
            binomial = binomial * (placed + i) / i;
        }

        placed += count as u64;
        result *= binomial;
    }

    result
}

fn run_lengths(sorted: &[usize]) -> impl Iterator<Item = usize> + use<'_> {
    sorted.chunk_by(|a, b| a == b).map(<[usize]>::len)
}

/// The total weight of all combinations of `dice` dice with `sides` sides each.
pub fn total_weight(dice: usize, sides: usize) -> u64 {
    (sides as u64).pow(dice as u32)
}

/// Iterates over every multiset of `dice` face indices from `0..sides`, in lexicographic order.
/// The weights of all combinations sum to `sides ^ dice`.
pub fn multiset_combinations(dice: usize, sides: usize) -> MultisetCombinations {
    let next = if sides == 0 && dice > 0 {
        None
    }
    else {
        Some(vec![0; dice])
    };

    MultisetCombinations { sides, next }
}

pub struct MultisetCombinations {
    sides: usize,
    next: Option<Vec<usize>>,
}

impl MultisetCombinations {
    fn successor(&self, current: &[usize]) -> Option<Vec<usize>> {
        let max_index = self.sides.checked_sub(1)?;
        let position = current.iter().rposition(|&index| index < max_index)?;
        let mut successor = current.to_vec();
        let value = successor[position] + 1;

        successor[position..].fill(value);
        Some(successor)
    }
}

impl Iterator for MultisetCombinations {
    type Item = WeightedCombination;

    fn next(&mut self) -> Option<WeightedCombination> {
        let current = self.next.take()?;
        self.next = self.successor(&current);
        let weight = multinomial(run_lengths(&current));

        Some(WeightedCombination {
            face_indices: current,
            weight,
        })
    }
}

impl FusedIterator for MultisetCombinations {}

/// Lists all `size`-element subsets of `0..len` as increasing index lists, in lexicographic order.
pub fn index_combinations(len: usize, size: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    let mut current = Vec::with_capacity(size);
    collect_index_combinations(0, len, size, &mut current, &mut result);
    result
}

fn collect_index_combinations(
    start: usize,
    len: usize,
    size: usize,
    current: &mut Vec<usize>,
    result: &mut Vec<Vec<usize>>,
) {
    let missing = size - current.len();

    if missing == 0 {
        result.push(current.clone());
        return;
    }

    for index in start..len {
        if len - index < missing {
            break;
        }

        current.push(index);
        collect_index_combinations(index + 1, len, size, current, result);
        current.pop();
    }
}
