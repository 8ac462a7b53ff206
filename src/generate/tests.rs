use std::collections::BTreeSet;

use super::*;

const SAMPLES: usize = 500;

fn settings(max_tags: usize, path_length: usize) -> Result<GeneratorSettings, String> {
    let path_length = PositiveUsize::try_from(path_length).map_err(|err| err.to_string())?;
    Ok(GeneratorSettings {
        max_tags,
        path_length,
    })
}

fn seeded(seed: u64) -> Result<SeedGenerator, String> {
    Ok(SeedGenerator::from_seed(settings(5, 5)?, Some(seed)))
}

#[test]
fn random_string_is_alphanumeric_with_requested_length() -> Result<(), String> {
    let mut generator = seeded(1)?;
    for length in [0usize, 1, 5, 32] {
        let value = generator.random_string(length);
        if value.len() != length {
            return Err(format!("Expected length {}, got '{}'", length, value));
        }
        if !value.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(format!("Non-alphanumeric output: '{}'", value));
        }
    }
    Ok(())
}

#[test]
fn tags_are_bounded_unique_and_from_vocabulary() -> Result<(), String> {
    let mut generator = seeded(7)?;
    let mut seen_sizes = BTreeSet::new();
    for _ in 0..SAMPLES {
        let tags = generator.random_tags(5);
        if tags.len() > 5 {
            return Err(format!("Too many tags: {:?}", tags));
        }
        let unique: BTreeSet<&str> = tags.iter().copied().collect();
        if unique.len() != tags.len() {
            return Err(format!("Duplicate tags: {:?}", tags));
        }
        if let Some(unknown) = tags.iter().find(|tag| !TAGS.contains(*tag)) {
            return Err(format!("Unknown tag '{}'", unknown));
        }
        seen_sizes.insert(tags.len());
    }
    if !seen_sizes.contains(&0) || !seen_sizes.contains(&5) {
        return Err(format!("Expected both empty and full sets, saw {:?}", seen_sizes));
    }
    Ok(())
}

#[test]
fn tag_bound_is_clamped_to_vocabulary() -> Result<(), String> {
    let mut generator = seeded(11)?;
    for _ in 0..SAMPLES {
        let tags = generator.random_tags(usize::MAX);
        if tags.len() > TAGS.len() {
            return Err(format!("Tag count {} exceeds vocabulary", tags.len()));
        }
    }
    if !generator.random_tags(0).is_empty() {
        return Err("max_tags = 0 must yield no tags".to_owned());
    }
    Ok(())
}

#[test]
fn urls_use_known_domain_and_fixed_length_path() -> Result<(), String> {
    let mut generator = SeedGenerator::from_seed(settings(5, 8)?, Some(3));
    for _ in 0..SAMPLES {
        let url = generator.random_url();
        let rest = url
            .strip_prefix("https://")
            .ok_or_else(|| format!("Missing https scheme: {}", url))?;
        let (domain, path) = rest
            .split_once('/')
            .ok_or_else(|| format!("Missing path: {}", url))?;
        if !TOP_DOMAINS.contains(&domain) {
            return Err(format!("Unexpected domain '{}'", domain));
        }
        if path.len() != 8 || !path.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(format!("Unexpected path '{}'", path));
        }
        reqwest::Url::parse(&url).map_err(|err| format!("Invalid URL {}: {}", url, err))?;
    }
    Ok(())
}

#[test]
fn snippets_are_sentences_or_quotes() -> Result<(), String> {
    let mut generator = seeded(5)?;
    let mut saw_sentence = false;
    let mut saw_quote = false;
    for _ in 0..SAMPLES {
        let snippet = generator.random_snippet();
        if QUOTES.contains(&snippet.as_str()) {
            saw_quote = true;
            continue;
        }
        let starts = SUBJECTS.iter().any(|subject| snippet.starts_with(subject));
        let ends = OBJECTS
            .iter()
            .any(|object| snippet.ends_with(&format!("{}.", object)));
        let has_verb = VERBS.iter().any(|verb| snippet.contains(verb));
        if !(starts && ends && has_verb) {
            return Err(format!("Unexpected snippet '{}'", snippet));
        }
        saw_sentence = true;
    }
    if !(saw_sentence && saw_quote) {
        return Err("Expected both sentences and quotes".to_owned());
    }
    Ok(())
}

#[test]
fn seeded_generators_are_reproducible() -> Result<(), String> {
    let mut left = seeded(42)?;
    let mut right = seeded(42)?;
    for _ in 0..50 {
        let a = left.next_item();
        let b = right.next_item();
        if a != b {
            return Err(format!("Diverged: {:?} vs {:?}", a, b));
        }
        if left.coin_flip() != right.coin_flip() {
            return Err("Coin flips diverged".to_owned());
        }
    }
    Ok(())
}

#[test]
fn different_seeds_diverge() -> Result<(), String> {
    let mut left = seeded(1)?;
    let mut right = seeded(2)?;
    let first: Vec<SeedItem> = (0..10).map(|_| left.next_item()).collect();
    let second: Vec<SeedItem> = (0..10).map(|_| right.next_item()).collect();
    if first == second {
        return Err("Different seeds produced identical items".to_owned());
    }
    Ok(())
}
