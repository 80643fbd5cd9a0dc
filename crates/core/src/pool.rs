//! Image pool and dealing.
//!
//! The pool holds the distinct image keys available to a game. Dealing a level
//! samples `pair_count` keys without replacement, duplicates them, and shuffles
//! the result uniformly.

use rand::seq::{index, SliceRandom};
use rand::Rng;
use thiserror::Error;

use crate::level::Level;

/// Dealing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    /// The pool cannot serve the requested number of distinct images.
    #[error(
        "configuration error: {requested} distinct images requested but the pool only has {available}"
    )]
    PoolTooSmall { requested: usize, available: usize },
}

/// Derive a tile key from an image file name: everything before the first `.`.
///
/// # Examples
///
/// ```
/// use mixel_memory_core::key_from_file_name;
///
/// assert_eq!(key_from_file_name("tabby.txt"), "tabby");
/// assert_eq!(key_from_file_name("tabby.small.txt"), "tabby");
/// assert_eq!(key_from_file_name("tabby"), "tabby");
/// ```
pub fn key_from_file_name(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Distinct image keys available for dealing (sorted, deduplicated).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePool {
    keys: Vec<String>,
}

impl ImagePool {
    /// Build a pool. Empty keys are dropped and duplicate keys collapse, so a
    /// dealt key always appears exactly twice.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keys: Vec<String> = keys
            .into_iter()
            .map(Into::into)
            .filter(|k| !k.is_empty())
            .collect();
        keys.sort();
        keys.dedup();
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Fail unless the pool can deal `level`.
    pub fn ensure_serves(&self, level: Level) -> Result<(), DealError> {
        let requested = level.pair_count();
        if requested > self.keys.len() {
            return Err(DealError::PoolTooSmall {
                requested,
                available: self.keys.len(),
            });
        }
        Ok(())
    }

    /// Pick `count` distinct keys uniformly at random without replacement.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, DealError> {
        if count > self.keys.len() {
            return Err(DealError::PoolTooSmall {
                requested: count,
                available: self.keys.len(),
            });
        }
        Ok(index::sample(rng, self.keys.len(), count)
            .into_iter()
            .map(|i| self.keys[i].clone())
            .collect())
    }

    /// Keys for a full level: each sampled key twice, shuffled.
    pub fn deal<R: Rng + ?Sized>(&self, level: Level, rng: &mut R) -> Result<Vec<String>, DealError> {
        let picked = self.sample(level.pair_count(), rng)?;
        let mut deck: Vec<String> = picked
            .iter()
            .cloned()
            .chain(picked.iter().cloned())
            .collect();
        deck.shuffle(rng);
        Ok(deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn pool(n: usize) -> ImagePool {
        ImagePool::new((0..n).map(|i| format!("cat{i}")))
    }

    #[test]
    fn duplicate_and_empty_keys_collapse() {
        let pool = ImagePool::new(["b", "a", "b", ""]);
        assert_eq!(pool.keys(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn sample_is_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut picked = pool(10).sample(6, &mut rng).unwrap();
        picked.sort();
        picked.dedup();
        assert_eq!(picked.len(), 6);
    }

    #[test]
    fn sample_larger_than_pool_fails() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            pool(2).sample(3, &mut rng),
            Err(DealError::PoolTooSmall {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn empty_pool_fails_first_level() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(ImagePool::default().deal(Level::FIRST, &mut rng).is_err());
        assert!(ImagePool::default().ensure_serves(Level::FIRST).is_err());
    }

    #[test]
    fn every_level_deals_each_key_twice() {
        let pool = pool(8);
        let mut rng = StdRng::seed_from_u64(42);
        for level in Level::all() {
            let deck = pool.deal(level, &mut rng).unwrap();
            assert_eq!(deck.len(), level.tile_count());
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for key in &deck {
                *counts.entry(key.as_str()).or_default() += 1;
            }
            assert_eq!(counts.len(), level.pair_count());
            assert!(counts.values().all(|&c| c == 2));
        }
    }

    #[test]
    fn same_seed_same_deal() {
        let pool = pool(8);
        let a = pool.deal(Level::LAST, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = pool.deal(Level::LAST, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn error_message_names_the_shortfall() {
        let err = DealError::PoolTooSmall {
            requested: 3,
            available: 2,
        };
        assert!(err.to_string().contains("configuration error"));
        assert!(err.to_string().contains('3'));
    }
}
