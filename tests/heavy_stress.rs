#![cfg(feature = "heavy")]
use rand::{rngs::StdRng, Rng, SeedableRng};
use scanfold::{count_anagrams, fold_series_sum, max_window_cost, series_sum, AnagramIndex};

fn random_word(rng: &mut StdRng) -> String {
    const ALPHABET: &[u8] = b"abcdefg";
    let len = rng.gen_range(1..=7);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[test]
fn heavy_stress_quota_window_large_scan() {
    let mut rng = StdRng::seed_from_u64(11);
    let n = 5_000_000usize;
    let costs: Vec<i64> = (0..n).map(|_| rng.gen_range(0..100)).collect();
    let labels: Vec<&str> = (0..n)
        .map(|_| {
            if rng.gen_range(0..3) == 0 {
                "legal"
            } else {
                "illegal"
            }
        })
        .collect();

    // Reference segmentation over the same input.
    let mut boundaries = Vec::new();
    let mut legal = 0usize;
    for (i, label) in labels.iter().enumerate() {
        if *label == "legal" {
            legal += 1;
        }
        if legal == 5 {
            boundaries.push(i);
            legal = 0;
        }
    }
    let mut expected = 0i64;
    let mut start = 0usize;
    for &end in &boundaries {
        expected = expected.max(costs[start..=end].iter().sum());
        start = end + 1;
    }

    assert_eq!(max_window_cost(&costs, &labels, 5), expected);
}

#[test]
fn heavy_stress_anagram_large_dictionary() {
    let mut rng = StdRng::seed_from_u64(23);
    let dictionary: Vec<String> = (0..200_000).map(|_| random_word(&mut rng)).collect();
    let queries: Vec<String> = (0..1_000).map(|_| random_word(&mut rng)).collect();

    let index = AnagramIndex::from_words(&dictionary);
    let counts = count_anagrams(&dictionary, &queries);
    assert_eq!(counts.len(), queries.len());
    for (query, count) in queries.iter().zip(&counts) {
        assert_eq!(index.count(query), *count);
    }
}

#[test]
fn heavy_stress_series_fold_agreement() {
    assert_eq!(series_sum(10_000_000), fold_series_sum(10_000_000));
}
