//! BWST integration tests.

use oxibwst::{
    BlockTransform, Bwst, BwstConfig, TrailingRun, factor_bounds, inverse_transform,
    is_lyndon_word, lyndon_factors, transform, transform_with_config,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const VERSE: &str = "Along the harbour wall the lamps come on,
one after one, like beads of amber thread;
the gulls have gone to wherever gulls have gone,
and the tide writes slowly what the moon has said.";

fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; len];
    rng.fill(&mut data[..]);
    data
}

fn text_bytes(len: usize, seed: u64) -> Vec<u8> {
    let words: &[&[u8]] = &[
        b"the", b"quick", b"brown", b"fox", b"jumps", b"over", b"lazy", b"dog", b"and", b"runs",
        b"through", b"forest", b"near", b"river",
    ];
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(len + 8);
    while data.len() < len {
        data.extend_from_slice(words[rng.gen_range(0..words.len())]);
        data.push(b' ');
    }
    data.truncate(len);
    data
}

#[test]
fn test_absorption_text() {
    let original = VERSE.as_bytes();

    let recovered = inverse_transform(&transform(original));
    assert_eq!(recovered, original);

    let recovered = transform(&inverse_transform(original));
    assert_eq!(recovered, original);
}

#[test]
fn test_absorption_random() {
    let original = random_bytes(1 << 15, 0x5eed);

    let recovered = inverse_transform(&transform(&original));
    assert_eq!(recovered.len(), original.len());
    assert_eq!(recovered, original, "inverse(forward(s)) != s");

    let recovered = transform(&inverse_transform(&original));
    assert_eq!(recovered, original, "forward(inverse(s)) != s");
}

#[test]
fn test_absorption_random_small() {
    // Short strings over tiny alphabets hit ties and wraparound often.
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let len = rng.gen_range(0..40);
        let data: Vec<u8> = (0..len).map(|_| rng.gen_range(b'a'..=b'c')).collect();
        assert_eq!(inverse_transform(&transform(&data)), data, "{:?}", data);
        assert_eq!(transform(&inverse_transform(&data)), data, "{:?}", data);
    }
}

#[test]
fn test_absorption_text_like() {
    let original = text_bytes(20_000, 42);
    assert_eq!(inverse_transform(&transform(&original)), original);
}

#[test]
fn test_empty_input() {
    assert!(transform(b"").is_empty());
    assert!(inverse_transform(b"").is_empty());
    assert!(lyndon_factors(b"").is_empty());
}

#[test]
fn test_length_preserved() {
    for len in [1, 2, 3, 255, 256, 1000] {
        let data = random_bytes(len, len as u64);
        assert_eq!(transform(&data).len(), len);
        assert_eq!(inverse_transform(&data).len(), len);
    }
}

#[test]
fn test_single_byte_runs() {
    for byte in [0u8, b'a', 0xff] {
        let data = vec![byte; 1024];
        assert_eq!(transform(&data), data);
        assert_eq!(inverse_transform(&data), data);
    }
}

#[test]
fn test_banana() {
    let factors = lyndon_factors(b"banana");
    assert_eq!(factors.concat(), b"banana");
    assert!(factors.iter().all(|w| is_lyndon_word(w)));

    let bwst = transform(b"banana");
    assert_eq!(bwst, b"annbaa");
    assert_eq!(inverse_transform(&bwst), b"banana");
}

#[test]
fn test_factorization_properties() {
    let data = random_bytes(4096, 99);
    let factors = lyndon_factors(&data);

    assert_eq!(factors.concat(), data);
    for pair in factors.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
    assert!(factors.iter().all(|w| is_lyndon_word(w)));

    let text = text_bytes(4096, 3);
    let factors = lyndon_factors(&text);
    assert_eq!(factors.concat(), text);
    assert!(factors.iter().all(|w| is_lyndon_word(w)));
}

#[test]
fn test_factors_alias_input() {
    let data = b"cabcab".to_vec();
    let factors = lyndon_factors(&data);
    let base = data.as_ptr() as usize;
    let mut offset = 0;
    for factor in factors {
        assert_eq!(factor.as_ptr() as usize, base + offset);
        offset += factor.len();
    }
    assert_eq!(offset, data.len());
}

#[test]
fn test_configs_agree() {
    let data = text_bytes(10_000, 11);
    let reference = transform_with_config(&data, &BwstConfig::SEQUENTIAL);

    let split = BwstConfig::SEQUENTIAL.with_trailing_run(TrailingRun::Split);
    assert_eq!(transform_with_config(&data, &split), reference);

    let eager = BwstConfig::DEFAULT.with_parallel_threshold(0);
    assert_eq!(transform_with_config(&data, &eager), reference);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_absorption() {
    let config = BwstConfig::DEFAULT.with_parallel_threshold(1);
    let original = random_bytes(1 << 15, 0xbeef);

    let bwst = transform_with_config(&original, &config);
    assert_eq!(bwst, transform_with_config(&original, &BwstConfig::SEQUENTIAL));
    assert_eq!(inverse_transform(&bwst), original);
}

#[test]
fn test_block_transform_verified() {
    let bwst = Bwst::new(BwstConfig::SEQUENTIAL);
    let data = text_bytes(2048, 5);
    let output = bwst.forward_verified(&data).unwrap();
    assert_eq!(output, transform(&data));
}

#[test]
fn test_trailing_run_boundaries() {
    let data = b"dcbaaaaa";
    assert_eq!(factor_bounds(data, TrailingRun::Merge), [0, 1, 2, 3, 8]);
    assert_eq!(
        factor_bounds(data, TrailingRun::Split),
        [0, 1, 2, 3, 4, 5, 6, 7, 8]
    );
}
