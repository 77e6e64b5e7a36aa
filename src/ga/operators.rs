//! Selection, crossover and mutation operators.

use rand::seq::index;
use rand::Rng;

use crate::matrix::ArcCost;

use super::Tour;

/// Tournament selection: samples `k` distinct members of `population` and
/// returns the two cheapest as parents.
///
/// # Panics
///
/// Panics if `k < 2` or `k > population.len()`; the genetic search
/// validates both before running.
pub fn tournament<'a, R, C>(
    population: &'a [Tour],
    k: usize,
    costs: &C,
    rng: &mut R,
) -> (&'a Tour, &'a Tour)
where
    R: Rng + ?Sized,
    C: ArcCost + ?Sized,
{
    assert!(k >= 2 && k <= population.len(), "tournament size out of range");

    let mut sampled: Vec<(f64, usize)> = index::sample(rng, population.len(), k)
        .iter()
        .map(|i| (population[i].cost(costs), i))
        .collect();
    sampled.sort_by(|a, b| a.0.total_cmp(&b.0));

    (&population[sampled[0].1], &population[sampled[1].1])
}

/// Single-cut order-preserving crossover at a random cut in `[1, len-1]`.
///
/// Tours with fewer than two stops have no valid cut and are copied.
pub fn single_cut_crossover<R: Rng + ?Sized>(
    parent1: &Tour,
    parent2: &Tour,
    rng: &mut R,
) -> (Tour, Tour) {
    let len = parent1.len();
    if len < 2 {
        return (parent1.clone(), parent2.clone());
    }
    let cut = rng.random_range(1..len);
    crossover_at(parent1, parent2, cut)
}

/// Crossover at a fixed cut.
///
/// Child A takes `parent1[..cut]` followed by the stops of `parent2` not
/// already in that prefix, in `parent2`'s order. Child B is symmetric.
///
/// # Examples
///
/// ```
/// use u_delivery::ga::{crossover_at, Tour};
///
/// let p1 = Tour::new(vec![1, 2, 3, 4, 5]);
/// let p2 = Tour::new(vec![5, 3, 1, 4, 2]);
/// let (a, b) = crossover_at(&p1, &p2, 2);
/// assert_eq!(a.stops(), &[1, 2, 5, 3, 4]);
/// assert_eq!(b.stops(), &[5, 3, 1, 2, 4]);
/// ```
pub fn crossover_at(parent1: &Tour, parent2: &Tour, cut: usize) -> (Tour, Tour) {
    (
        prefix_then_rest(parent1.stops(), parent2.stops(), cut),
        prefix_then_rest(parent2.stops(), parent1.stops(), cut),
    )
}

fn prefix_then_rest(head: &[usize], tail: &[usize], cut: usize) -> Tour {
    let prefix = &head[..cut.min(head.len())];
    let bound = head.iter().chain(tail).copied().max().map_or(0, |m| m + 1);
    let mut taken = vec![false; bound];
    for &stop in prefix {
        taken[stop] = true;
    }

    let mut child = Vec::with_capacity(head.len());
    child.extend_from_slice(prefix);
    child.extend(tail.iter().copied().filter(|&stop| !taken[stop]));

    debug_assert_eq!(child.len(), head.len(), "crossover changed the stop set");
    Tour::new(child)
}

/// Swaps two distinct, uniformly chosen positions.
///
/// Tours with fewer than two stops are left unchanged.
pub fn swap_mutation<R: Rng + ?Sized>(tour: &mut Tour, rng: &mut R) {
    let len = tour.len();
    if len < 2 {
        return;
    }
    let i = rng.random_range(0..len);
    let mut j = rng.random_range(0..len - 1);
    if j >= i {
        j += 1;
    }
    tour.stops_mut().swap(i, j);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::CostMatrix;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted(tour: &Tour) -> Vec<usize> {
        let mut stops = tour.stops().to_vec();
        stops.sort_unstable();
        stops
    }

    #[test]
    fn test_crossover_at_extremes() {
        let p1 = Tour::new(vec![1, 2, 3]);
        let p2 = Tour::new(vec![3, 2, 1]);
        let (a, b) = crossover_at(&p1, &p2, 1);
        assert_eq!(a.stops(), &[1, 3, 2]);
        assert_eq!(b.stops(), &[3, 1, 2]);
        let (a, b) = crossover_at(&p1, &p2, 2);
        assert_eq!(a.stops(), &[1, 2, 3]);
        assert_eq!(b.stops(), &[3, 2, 1]);
    }

    #[test]
    fn test_crossover_single_stop() {
        let p = Tour::new(vec![1]);
        let mut rng = StdRng::seed_from_u64(3);
        let (a, b) = single_cut_crossover(&p, &p, &mut rng);
        assert_eq!(a.stops(), &[1]);
        assert_eq!(b.stops(), &[1]);
    }

    #[test]
    fn test_mutation_changes_exactly_two_positions() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut tour = Tour::new(vec![1, 2, 3, 4, 5]);
            swap_mutation(&mut tour, &mut rng);
            let moved = tour
                .stops()
                .iter()
                .zip([1, 2, 3, 4, 5])
                .filter(|(a, b)| **a != *b)
                .count();
            assert_eq!(moved, 2);
        }
    }

    #[test]
    fn test_mutation_short_tour_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut tour = Tour::new(vec![4]);
        swap_mutation(&mut tour, &mut rng);
        assert_eq!(tour.stops(), &[4]);
    }

    #[test]
    fn test_tournament_full_sample_picks_two_cheapest() {
        // Depot and stops on a line: [1, 2, 3] is optimal, [3, 1, 2] is not.
        let m = CostMatrix::from_lookups(4, true, |i, j| Some((i as f64 - j as f64).abs()))
            .expect("valid");
        let population = vec![
            Tour::new(vec![3, 1, 2]),
            Tour::new(vec![1, 2, 3]),
            Tour::new(vec![2, 1, 3]),
            Tour::new(vec![1, 3, 2]),
        ];
        let mut rng = StdRng::seed_from_u64(9);
        let (a, b) = tournament(&population, 4, &m, &mut rng);
        assert_eq!(a.cost(&m), 6.0);
        assert!(b.cost(&m) <= 8.0);
        assert!(a.cost(&m) <= b.cost(&m));
    }

    #[test]
    fn test_tournament_returns_distinct_members() {
        let m = CostMatrix::new(3);
        let population = vec![Tour::new(vec![1, 2]), Tour::new(vec![2, 1])];
        let mut rng = StdRng::seed_from_u64(5);
        let (a, b) = tournament(&population, 2, &m, &mut rng);
        assert!(!std::ptr::eq(a, b));
    }

    proptest! {
        #[test]
        fn prop_crossover_preserves_stop_set(
            p1 in Just((1..10usize).collect::<Vec<_>>()).prop_shuffle(),
            p2 in Just((1..10usize).collect::<Vec<_>>()).prop_shuffle(),
            cut in 1usize..9,
        ) {
            let (a, b) = crossover_at(&Tour::new(p1), &Tour::new(p2), cut);
            let expected: Vec<usize> = (1..10).collect();
            prop_assert_eq!(sorted(&a), expected.clone());
            prop_assert_eq!(sorted(&b), expected);
        }

        #[test]
        fn prop_mutation_preserves_stop_set(
            stops in Just((1..12usize).collect::<Vec<_>>()).prop_shuffle(),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut tour = Tour::new(stops);
            swap_mutation(&mut tour, &mut rng);
            prop_assert_eq!(sorted(&tour), (1..12).collect::<Vec<_>>());
        }
    }
}
