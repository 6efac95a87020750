use std::{
    collections::HashMap,
    env,
    error::Error,
    sync::{OnceLock, RwLock},
};

use rand::{random, rngs::StdRng, Rng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

const LOREM: &str = "Lorem ipsum dolor sit amet. ";

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn seeds() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn seed_for(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = seeds().write()?;
    let seed = *seeds.entry(key).or_insert_with(|| {
        let seed = env::var(key)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {} for {}", seed, key);
        seed
    });
    Ok(seed)
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(seed_for(key)?))
}

pub fn repeated_text(text: &str, times: usize) -> Vec<u8> {
    text.repeat(times).into_bytes()
}

pub fn random_payload(rng: &mut impl Rng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}

pub fn low_entropy_payload(rng: &mut impl Rng, len: usize, alphabet: &[u8]) -> Vec<u8> {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

pub fn sample_payloads(rng: &mut impl Rng) -> Vec<Vec<u8>> {
    let random_len = rng.gen_range(1..4096);
    vec![
        vec![],
        vec![0x42],
        b"ab".to_vec(),
        repeated_text(LOREM, 100),
        vec![0; 70_000],
        random_payload(rng, random_len),
        low_entropy_payload(rng, 20_000, b"ACGT"),
        (0..=u8::MAX).cycle().take(3000).collect(),
    ]
}

#[cfg(test)]
mod tests {
    use std::env;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::{
        get_seeded_rng_from_scope, low_entropy_payload, random_payload, repeated_text,
        sample_payloads, seeds,
    };

    #[test]
    fn test_env_seed_should_drive_the_generator() {
        // Given
        let key = "test_env_seed_should_drive_the_generator";
        env::set_var(key, "20240607");

        // When
        let drawn = get_seeded_rng_from_scope(key).unwrap().gen::<u64>();

        // Then
        assert_eq!(Some(&20240607), seeds().read().unwrap().get(key));
        assert_eq!(StdRng::seed_from_u64(20240607).gen::<u64>(), drawn);
    }

    #[test]
    fn test_same_scope_should_replay_same_sequence() {
        let key = "test_same_scope_should_replay_same_sequence";
        let first = get_seeded_rng_from_scope(key).unwrap().gen::<u64>();
        let second = get_seeded_rng_from_scope(key).unwrap().gen::<u64>();
        assert_eq!(first, second);
    }

    #[test]
    fn test_payload_builders() {
        let mut rng = get_seeded_rng_from_scope("test_payload_builders").unwrap();

        assert_eq!(b"abab".to_vec(), repeated_text("ab", 2));
        assert_eq!(17, random_payload(&mut rng, 17).len());
        assert!(low_entropy_payload(&mut rng, 100, b"xy")
            .iter()
            .all(|b| *b == b'x' || *b == b'y'));
        assert!(sample_payloads(&mut rng).iter().any(Vec::is_empty));
    }
}
