use crate::IntegerList;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

/// Largest value a generated element can take (2^31 - 1).
pub const MAX_RANDOM_VALUE: u32 = i32::MAX as u32;

/// Elements generated between progress bar updates.
const PROGRESS_CHUNK: usize = 1 << 16;

pub struct RandomGenerator {
    progress_threshold: usize,
}

impl RandomGenerator {
    /// `progress_threshold` is the smallest count that shows a progress bar;
    /// zero never shows one.
    pub fn new(progress_threshold: usize) -> Self {
        Self { progress_threshold }
    }

    pub fn generate(&self, count: usize) -> IntegerList {
        self.generate_with(&mut rand::rng(), count)
    }

    /// Draw `count` independent values uniformly from `0..=MAX_RANDOM_VALUE`.
    pub fn generate_with<R: Rng>(&self, rng: &mut R, count: usize) -> IntegerList {
        let progress = self.progress_bar(count);
        let mut values = Vec::with_capacity(count);

        for generated in 0..count {
            values.push(rng.random_range(0..=MAX_RANDOM_VALUE));
            if let Some(bar) = &progress {
                if (generated + 1) % PROGRESS_CHUNK == 0 {
                    bar.inc(PROGRESS_CHUNK as u64);
                }
            }
        }

        if let Some(bar) = progress {
            bar.finish_and_clear();
        }
        tracing::debug!(count, "generated random list");
        values
    }

    fn progress_bar(&self, count: usize) -> Option<ProgressBar> {
        if self.progress_threshold == 0 || count < self.progress_threshold {
            return None;
        }

        let bar = ProgressBar::new(count as u64);
        if let Ok(style) =
            ProgressStyle::with_template("{spinner} generating {pos}/{len} [{bar:40}] {eta}")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        Some(bar)
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_requested_count_in_range() {
        let values = RandomGenerator::default().generate(5);
        assert_eq!(values.len(), 5);
        assert!(values.iter().all(|&v| v <= MAX_RANDOM_VALUE));
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(RandomGenerator::default().generate(0).is_empty());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let generator = RandomGenerator::default();
        let first = generator.generate_with(&mut StdRng::seed_from_u64(7), 64);
        let second = generator.generate_with(&mut StdRng::seed_from_u64(7), 64);
        assert_eq!(first, second);
    }

    #[test]
    fn successive_calls_are_independent() {
        let generator = RandomGenerator::default();
        let mut rng = StdRng::seed_from_u64(11);
        let first = generator.generate_with(&mut rng, 32);
        let second = generator.generate_with(&mut rng, 32);
        assert_ne!(first, second);
    }

    #[test]
    fn progress_bar_only_above_threshold() {
        let generator = RandomGenerator::new(100);
        assert!(generator.progress_bar(99).is_none());
        assert!(generator.progress_bar(100).is_some());
        assert!(RandomGenerator::new(0).progress_bar(usize::MAX).is_none());
    }
}
