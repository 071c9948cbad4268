//! RNG module - bag randomizer with repeat avoidance
//!
//! A fresh game deals one shuffled bag holding every catalog index exactly once, in bag
//! order. Once that bag is exhausted the randomizer does not refill it; it draws uniformly
//! at random instead, redrawing whenever the result would repeat the previous piece.
//! Resetting deals a new bag.
//!
//! Shuffling is Fisher-Yates via [`rand::seq::SliceRandom`], so every permutation is
//! equally likely. A fixed seed makes the whole sequence reproducible.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct BagRandomizer {
    /// Remaining indices of the current bag, front is dealt next
    queue: VecDeque<usize>,
    /// Most recently dealt index
    last: Option<usize>,
    piece_count: usize,
    rng: StdRng,
}

impl BagRandomizer {
    /// Create a randomizer over indices `0..piece_count` and deal the first bag
    ///
    /// `seed = None` seeds from the operating system.
    pub fn new(piece_count: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut bag = Self {
            queue: VecDeque::with_capacity(piece_count),
            last: None,
            piece_count,
            rng,
        };
        bag.reset();
        bag
    }

    /// A uniformly random permutation of every index
    pub fn new_bag(&mut self) -> Vec<usize> {
        let mut bag: Vec<usize> = (0..self.piece_count).collect();
        bag.shuffle(&mut self.rng);
        bag
    }

    /// Deal the next piece index
    ///
    /// Pops the front of the current bag while it lasts; afterwards draws uniformly,
    /// rejecting a draw equal to the previous index (unless there is only one kind).
    pub fn next(&mut self) -> usize {
        let index = match self.queue.pop_front() {
            Some(index) => index,
            None => self.draw_avoiding_repeat(),
        };
        self.last = Some(index);
        index
    }

    fn draw_avoiding_repeat(&mut self) -> usize {
        if self.piece_count <= 1 {
            return 0;
        }
        loop {
            let index = self.rng.gen_range(0..self.piece_count);
            if Some(index) != self.last {
                return index;
            }
        }
    }

    /// Replace the queue with a fresh bag and forget the previous piece
    pub fn reset(&mut self) {
        let bag = self.new_bag();
        self.queue.clear();
        self.queue.extend(bag);
        self.last = None;
    }

    /// Indices still waiting in the current bag, in deal order
    pub fn remaining(&self) -> impl Iterator<Item = usize> + '_ {
        self.queue.iter().copied()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.last
    }

    pub fn piece_count(&self) -> usize {
        self.piece_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seven_draws_are_a_permutation() {
        let mut bag = BagRandomizer::new(7, Some(12345));

        let mut drawn: Vec<usize> = (0..7).map(|_| bag.next()).collect();
        drawn.sort_unstable();
        assert_eq!(drawn, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_bag_is_dealt_front_first() {
        let mut bag = BagRandomizer::new(7, Some(1));
        let expected: Vec<usize> = bag.remaining().collect();

        let drawn: Vec<usize> = (0..7).map(|_| bag.next()).collect();
        assert_eq!(drawn, expected);
        assert_eq!(bag.remaining().count(), 0);
    }

    #[test]
    fn test_no_immediate_repeat_after_bag() {
        let mut bag = BagRandomizer::new(7, Some(99));
        for _ in 0..7 {
            bag.next();
        }

        let mut prev = bag.last_index().unwrap();
        for _ in 0..500 {
            let next = bag.next();
            assert_ne!(next, prev);
            assert!(next < 7);
            prev = next;
        }
    }

    #[test]
    fn test_reset_deals_full_bag_and_clears_last() {
        let mut bag = BagRandomizer::new(7, Some(5));
        for _ in 0..10 {
            bag.next();
        }
        assert!(bag.last_index().is_some());

        bag.reset();
        assert_eq!(bag.last_index(), None);
        assert_eq!(bag.remaining().count(), 7);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = BagRandomizer::new(7, Some(42));
        let mut b = BagRandomizer::new(7, Some(42));
        for _ in 0..50 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_single_kind_repeats_freely() {
        let mut bag = BagRandomizer::new(1, Some(3));
        for _ in 0..5 {
            assert_eq!(bag.next(), 0);
        }
    }

    #[test]
    fn test_new_bag_contains_each_index_once() {
        let mut bag = BagRandomizer::new(7, Some(8));
        let mut fresh = bag.new_bag();
        fresh.sort_unstable();
        assert_eq!(fresh, (0..7).collect::<Vec<_>>());
    }
}
