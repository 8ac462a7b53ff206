//! Random payload generation.
//!
//! Every generator draws from a single owned RNG so a seeded run produces
//! the same sequence of URLs, tags, snippets and send decisions.
mod vocab;

#[cfg(test)]
mod tests;

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::args::PositiveUsize;

pub use vocab::{OBJECTS, QUOTES, SUBJECTS, TAGS, TOP_DOMAINS, VERBS};

/// Knobs that shape generated payloads.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorSettings {
    /// Upper bound on tags per item, clamped to the vocabulary size.
    pub max_tags: usize,
    /// Length of the random path segment appended to each URL.
    pub path_length: PositiveUsize,
}

/// One iteration's worth of generated data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedItem {
    pub url: String,
    pub tags: Vec<&'static str>,
    pub snippet: String,
}

/// Generator backed by the standard seedable RNG.
pub type SeedGenerator = Generator<StdRng>;

pub struct Generator<R> {
    rng: R,
    settings: GeneratorSettings,
}

impl SeedGenerator {
    /// Builds a generator, seeded for reproducible runs or from OS entropy.
    #[must_use]
    pub fn from_seed(settings: GeneratorSettings, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self::with_rng(rng, settings)
    }
}

impl<R: Rng> Generator<R> {
    pub const fn with_rng(rng: R, settings: GeneratorSettings) -> Self {
        Self { rng, settings }
    }

    #[must_use]
    pub const fn settings(&self) -> GeneratorSettings {
        self.settings
    }

    /// Random alphanumeric string of exactly `length` characters.
    pub fn random_string(&mut self, length: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }

    pub fn random_sentence(&mut self) -> String {
        let subject = self.pick(&SUBJECTS);
        let verb = self.pick(&VERBS);
        let object = self.pick(&OBJECTS);
        format!("{} {} {}.", subject, verb, object)
    }

    pub fn random_quote(&mut self) -> &'static str {
        self.pick(&QUOTES)
    }

    /// Draws between zero and `max_tags` distinct tags.
    pub fn random_tags(&mut self, max_tags: usize) -> Vec<&'static str> {
        let upper = max_tags.min(TAGS.len());
        let count = self.rng.gen_range(0..=upper);
        TAGS.choose_multiple(&mut self.rng, count)
            .copied()
            .collect()
    }

    pub fn random_url(&mut self) -> String {
        let domain = self.pick(&TOP_DOMAINS);
        let length = self.settings.path_length.get();
        let path = self.random_string(length);
        format!("https://{}/{}", domain, path)
    }

    /// Either a templated sentence or a fixed quote, with equal odds.
    pub fn random_snippet(&mut self) -> String {
        if self.coin_flip() {
            self.random_sentence()
        } else {
            self.random_quote().to_owned()
        }
    }

    pub fn next_item(&mut self) -> SeedItem {
        let url = self.random_url();
        let max_tags = self.settings.max_tags;
        let tags = self.random_tags(max_tags);
        let snippet = self.random_snippet();
        SeedItem { url, tags, snippet }
    }

    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        pool.choose(&mut self.rng).copied().unwrap_or_default()
    }
}
