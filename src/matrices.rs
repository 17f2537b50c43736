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

//! The shared, mutably-aliased embedding matrices. Every worker thread
//! holds a reference to the same [`EmbeddingMatrices`] and writes into it
//! without synchronization (Hogwild!): two threads can race on the same
//! row and one update can be lost. That's accepted, not a bug — adding a
//! per-row lock here would change what the trained vectors converge to,
//! which the design explicitly forbids. [`SharedMatrix`] exists to pierce
//! the aliasing/borrow-checking discipline exactly once, at this boundary,
//! rather than scattering `unsafe` through the training kernel.

use std::cell::UnsafeCell;

use crate::error::{Error, Result};
use crate::pins::PinAssignment;
use crate::vocab::Vocabulary;

/// The linear congruential generator used everywhere in training: window
/// size jitter, negative-sample target draws, and subsampling decisions
/// all advance the same per-thread state, seeded with the thread id so
/// distinct threads (not distinct runs) get distinct streams. The state is
/// unsigned, matching the original's `unsigned long long next_random`: a
/// signed `i64` would turn `>>` into an arithmetic (sign-extending) shift
/// instead of the logical shift the original's bit manipulation relies on.
pub struct LcRandomGen {
    state: u64,
}

impl LcRandomGen {
    pub fn new(seed: u64) -> LcRandomGen {
        LcRandomGen { state: seed }
    }

    pub fn next_rand(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(25214903917).wrapping_add(11);
        self.state
    }
}

/// Reserves `len` `f32` slots tagged with `site` for error reporting, then
/// fills them with `value`. Mirrors the original's `Alloc(bytes, memo)`,
/// which checks the allocator's return value against `NULL` and exits with
/// the same site/size pair on failure; `try_reserve_exact` is the safe-Rust
/// equivalent of that check.
fn try_alloc_filled(site: &'static str, len: usize, value: f32) -> Result<Vec<f32>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|_| Error::AllocationFailed {
        site,
        bytes: (len * std::mem::size_of::<f32>()) as u64,
    })?;
    v.resize(len, value);
    Ok(v)
}

/// A flat `f32` buffer that every worker thread can mutate concurrently
/// through a shared reference. Rows are `layer1_size` wide; callers are
/// responsible for only touching disjoint or intentionally-racy regions.
pub struct SharedMatrix {
    data: UnsafeCell<Vec<f32>>,
}

// SAFETY: training intentionally lets multiple threads write into
// overlapping rows without locking (Hogwild!). Each write is a plain f32
// store, never a read-modify-write across threads that must be atomic;
// torn updates are indistinguishable from ordinary SGD noise at this
// learning rate.
unsafe impl Sync for SharedMatrix {}

impl SharedMatrix {
    fn zeros(site: &'static str, len: usize) -> Result<SharedMatrix> {
        Ok(SharedMatrix {
            data: UnsafeCell::new(try_alloc_filled(site, len, 0.0)?),
        })
    }

    fn from_vec(v: Vec<f32>) -> SharedMatrix {
        SharedMatrix {
            data: UnsafeCell::new(v),
        }
    }

    /// Borrows `len` floats starting at `offset` for read/write. Caller
    /// must ensure `offset + len <= self.len()`.
    #[allow(clippy::mut_from_ref)]
    pub fn row_mut(&self, offset: usize, len: usize) -> &mut [f32] {
        let ptr = self.data.get();
        unsafe { &mut (*ptr)[offset..offset + len] }
    }

    pub fn row(&self, offset: usize, len: usize) -> &[f32] {
        self.row_mut(offset, len)
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.data.into_inner()
    }

    pub fn as_slice(&self) -> &[f32] {
        unsafe { &*self.data.get() }
    }
}

/// The full set of matrices a training run needs: `syn0` always exists,
/// `syn1`/`syn1neg` exist only for the paths actually enabled (hierarchical
/// softmax / negative sampling), and `pins` is always allocated but only
/// meaningfully non-1.0 when `-pin` is set.
pub struct EmbeddingMatrices {
    pub vocab_size: usize,
    pub layer1_size: usize,
    pub syn0: SharedMatrix,
    pub syn1: Option<SharedMatrix>,
    pub syn1neg: Option<SharedMatrix>,
    pub pins: SharedMatrix,
}

impl EmbeddingMatrices {
    /// Allocates and randomly initializes `syn0` the same way the original
    /// does: a single LCG seeded with 1, walked in vocabulary order so the
    /// initial embedding is reproducible across runs regardless of thread
    /// count. `syn1`/`syn1neg` start at zero; `pins` starts all-ones
    /// (nothing frozen) until [`Self::apply_pins`] is called.
    pub fn new(vocab_size: usize, layer1_size: usize, use_hs: bool, use_negative: bool) -> Result<EmbeddingMatrices> {
        let size = vocab_size * layer1_size;
        let mut lc_rand = LcRandomGen::new(1);
        let mut syn0 = Vec::new();
        syn0.try_reserve_exact(size).map_err(|_| Error::AllocationFailed {
            site: "syn0",
            bytes: (size * std::mem::size_of::<f32>()) as u64,
        })?;
        for _ in 0..size {
            let r = lc_rand.next_rand();
            syn0.push((((r & 0xffff) as f32 / 65536.0) - 0.5) / layer1_size as f32);
        }

        let syn1 = match use_hs {
            true => Some(SharedMatrix::zeros("syn1", size)?),
            false => None,
        };
        let syn1neg = match use_negative {
            true => Some(SharedMatrix::zeros("syn1neg", size)?),
            false => None,
        };

        Ok(EmbeddingMatrices {
            vocab_size,
            layer1_size,
            syn0: SharedMatrix::from_vec(syn0),
            syn1,
            syn1neg,
            pins: SharedMatrix::from_vec(try_alloc_filled("pins", size, 1.0)?),
        })
    }

    /// Writes each pin's value directly into `syn0` and zeroes its mask in
    /// `pins`, matching `Pin()`'s `syn0[v + dim] = value; pins[v + dim] =
    /// 0;`. Called once after the matrices exist and before training
    /// starts.
    pub fn apply_pins(&self, assignments: &[PinAssignment]) {
        for a in assignments {
            let v = a.word_index * self.layer1_size;
            self.syn0.row_mut(v, self.layer1_size)[a.dimension] = a.value;
            self.pins.row_mut(v, self.layer1_size)[a.dimension] = 0.0;
        }
    }

    /// True if word `idx` has any frozen dimension among the first few
    /// pinnable slots, matching `IsPinned`'s "any of dims 0..5 is 0" check.
    pub fn is_pinned(&self, idx: usize) -> bool {
        let v = idx * self.layer1_size;
        let row = self.pins.row(v, self.layer1_size.min(crate::pins::NUM_PINNED_DIMENSIONS));
        row.iter().any(|&p| p == 0.0)
    }
}

pub const MAX_EXP: f32 = 6.0;
const EXP_TABLE_SIZE: usize = 1000;

/// Precomputed sigmoid lookup, `expTable` in the original: index `i` holds
/// `sigmoid(MAX_EXP * (2*i/EXP_TABLE_SIZE - 1))` over `[-MAX_EXP, MAX_EXP]`.
/// Outside that range the caller clamps to 0 or 1 instead of indexing.
pub struct SigmoidTable {
    table: Vec<f32>,
}

impl SigmoidTable {
    pub fn new() -> SigmoidTable {
        let table = (0..EXP_TABLE_SIZE)
            .map(|i| {
                let x = (i as f32 / EXP_TABLE_SIZE as f32 * 2.0 - 1.0) * MAX_EXP;
                let e = x.exp();
                e / (e + 1.0)
            })
            .collect();
        SigmoidTable { table }
    }

    /// Returns `None` when `f` saturates past `[-MAX_EXP, MAX_EXP]` — the
    /// caller's cue to skip the update entirely, as the original does with
    /// its `if (f <= -MAX_EXP) continue;` guards.
    pub fn sigmoid(&self, f: f32) -> Option<f32> {
        if f <= -MAX_EXP || f >= MAX_EXP {
            return None;
        }
        let idx = ((f + MAX_EXP) * (EXP_TABLE_SIZE as f32 / MAX_EXP / 2.0)) as usize;
        Some(self.table[idx.min(EXP_TABLE_SIZE - 1)])
    }

    /// Negative-sampling's saturated gradient doesn't skip the update; it
    /// just clamps the label error to `label - 1` or `label - 0`.
    pub fn sigmoid_or_saturate(&self, f: f32) -> f32 {
        if f > MAX_EXP {
            1.0
        } else if f < -MAX_EXP {
            0.0
        } else {
            self.sigmoid(f).unwrap()
        }
    }
}

impl Default for SigmoidTable {
    fn default() -> Self {
        SigmoidTable::new()
    }
}

/// Discards frequent words with probability depending on `sample` and the
/// word's relative frequency, preserving their rank. `random_state` is
/// threaded through like the LCG everywhere else in training. The draw uses
/// the low 16 bits of the raw state directly — no `>> 16` shift — matching
/// `(next_random & 0xFFFF) / (real)65536`; the right-shifted slice of the
/// stream is reserved for the unigram-table lookup, a separate draw.
pub fn subsample_keep(count: u64, train_words: u64, sample: f64, random_state: u64) -> bool {
    if sample <= 0.0 {
        return true;
    }
    let ratio = count as f64 / (sample * train_words as f64);
    let keep_prob = (ratio.sqrt() + 1.0) * (sample * train_words as f64) / count as f64;
    let draw = (random_state & 0xffff) as f64 / 65536.0;
    keep_prob >= draw
}

pub fn assert_vocab_consistency(vocab: &Vocabulary, matrices: &EmbeddingMatrices) {
    assert_eq!(vocab.len(), matrices.vocab_size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_table_is_monotonic_and_bounded() {
        let table = SigmoidTable::new();
        let mut prev = 0.0;
        for i in 0..100 {
            let x = -MAX_EXP + (2.0 * MAX_EXP * i as f32 / 100.0);
            let y = table.sigmoid(x).unwrap();
            assert!(y >= prev - 1e-6);
            assert!((0.0..=1.0).contains(&y));
            prev = y;
        }
    }

    #[test]
    fn sigmoid_saturates_outside_max_exp() {
        let table = SigmoidTable::new();
        assert_eq!(table.sigmoid(100.0), None);
        assert_eq!(table.sigmoid(-100.0), None);
        assert_eq!(table.sigmoid_or_saturate(100.0), 1.0);
        assert_eq!(table.sigmoid_or_saturate(-100.0), 0.0);
    }

    #[test]
    fn pins_mask_frozen_dimension_and_leaves_others_free() {
        let matrices = EmbeddingMatrices::new(3, 4, false, true).unwrap();
        matrices.apply_pins(&[PinAssignment { word_index: 1, dimension: 2, value: 0.5 }]);
        assert_eq!(matrices.syn0.row(1 * 4, 4)[2], 0.5);
        assert_eq!(matrices.pins.row(1 * 4, 4)[2], 0.0);
        assert_eq!(matrices.pins.row(1 * 4, 4)[0], 1.0);
        assert!(matrices.is_pinned(1));
        assert!(!matrices.is_pinned(0));
    }

    #[test]
    fn subsample_always_keeps_when_sample_is_zero() {
        assert!(subsample_keep(5, 1000, 0.0, 42));
    }

    #[test]
    fn subsample_draw_uses_low_bits_without_shifting() {
        // random_state with only high bits set must draw 0.0, not the
        // shifted-and-masked value a `>> 16` would have produced.
        let random_state: u64 = 0xffff_0000;
        assert_eq!((random_state & 0xffff) as f64 / 65536.0, 0.0);
        assert!(subsample_keep(1, 1000, 1e-3, random_state));
    }
}
