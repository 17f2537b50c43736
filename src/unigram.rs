//  Copyright 2026 Robert Zavalczki
//  Copyright 2013 Google Inc. All Rights Reserved.
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

//! Negative-sampling draw table: `count^0.75`-weighted unigram distribution
//! flattened into a fixed-size lookup table so a sample is one array index,
//! ported from `InitUnigramTable`.

use crate::vocab::Vocabulary;

const TABLE_SIZE: usize = 100_000_000;
const POWER: f64 = 0.75;

pub struct UnigramSampler {
    table: Vec<i32>,
}

impl UnigramSampler {
    /// Builds the table from `vocab`'s raw counts. Each word's share of the
    /// table is proportional to `count^0.75`; rounding always leaves the
    /// last word's share to soak up the remainder, so the cursor is
    /// clamped to `vocab.len() - 1` rather than ever running off the end.
    pub fn build(vocab: &Vocabulary) -> UnigramSampler {
        let vocab_size = vocab.len();
        let mut table = vec![0i32; TABLE_SIZE];
        if vocab_size == 0 {
            return UnigramSampler { table };
        }

        let train_words_pow: f64 = (0..vocab_size)
            .map(|i| (vocab.count(i) as f64).powf(POWER))
            .sum();

        let mut i = 0usize;
        let mut d1 = (vocab.count(0) as f64).powf(POWER) / train_words_pow;
        for (a, slot) in table.iter_mut().enumerate() {
            *slot = i as i32;
            if a as f64 / TABLE_SIZE as f64 > d1 {
                i += 1;
                if i < vocab_size {
                    d1 += (vocab.count(i) as f64).powf(POWER) / train_words_pow;
                }
            }
            if i >= vocab_size {
                i = vocab_size - 1;
            }
        }

        UnigramSampler { table }
    }

    /// Draws a vocabulary index from the table using bits `[16, 63]` of
    /// `random_state`, matching the original's `(next_random >> 16) %
    /// table_size` derivation from the same LCG state used for window
    /// sizing and subsampling. The shift is logical because `random_state`
    /// is unsigned; a signed type here would sign-extend the top bits and
    /// skew which table slot `% TABLE_SIZE` lands on.
    pub fn sample(&self, random_state: u64) -> i32 {
        let idx = ((random_state >> 16) % TABLE_SIZE as u64) as usize;
        self.table[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab_with_counts(counts: &[u64]) -> Vocabulary {
        let mut vocab = Vocabulary::new_for_test();
        for (i, &c) in counts.iter().enumerate() {
            vocab.push_test_word(format!("w{i}").into_bytes(), c);
        }
        vocab
    }

    #[test]
    fn every_table_entry_indexes_a_real_word() {
        let vocab = vocab_with_counts(&[1000, 50, 1, 1, 1]);
        let sampler = UnigramSampler::build(&vocab);
        for &idx in sampler.table.iter().step_by(9973) {
            assert!((idx as usize) < vocab.len());
        }
    }

    #[test]
    fn more_frequent_words_get_more_table_mass() {
        let vocab = vocab_with_counts(&[1000, 1]);
        let sampler = UnigramSampler::build(&vocab);
        let common = sampler.table.iter().filter(|&&w| w == 0).count();
        let rare = sampler.table.iter().filter(|&&w| w == 1).count();
        assert!(common > rare * 10);
    }

    #[test]
    fn sample_is_deterministic_for_a_given_state() {
        let vocab = vocab_with_counts(&[10, 5, 1]);
        let sampler = UnigramSampler::build(&vocab);
        assert_eq!(sampler.sample(123456789), sampler.sample(123456789));
    }
}
