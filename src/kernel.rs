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

//! The CBOW and skip-gram training steps: hierarchical softmax and
//! negative sampling against the shared embedding matrices. Ported
//! instruction-for-instruction from the `cbow`/else branches of
//! `TrainModelThread`.

use crate::matrices::{EmbeddingMatrices, LcRandomGen, SigmoidTable};
use crate::unigram::UnigramSampler;
use crate::vocab::Vocabulary;

pub struct TrainingKernel<'a> {
    matrices: &'a EmbeddingMatrices,
    sigmoid: &'a SigmoidTable,
    vocab: &'a Vocabulary,
    unigram: Option<&'a UnigramSampler>,
    negative: i32,
    pin_repeats: i32,
    layer1_size: usize,
}

impl<'a> TrainingKernel<'a> {
    pub fn new(
        matrices: &'a EmbeddingMatrices,
        sigmoid: &'a SigmoidTable,
        vocab: &'a Vocabulary,
        unigram: Option<&'a UnigramSampler>,
        negative: i32,
        pin_repeats: i32,
    ) -> TrainingKernel<'a> {
        TrainingKernel {
            matrices,
            sigmoid,
            vocab,
            unigram,
            negative,
            pin_repeats,
            layer1_size: matrices.layer1_size,
        }
    }

    /// Draws a negative sample, retrying the "table landed on `</s>`"
    /// case by falling back to a uniform draw over `1..vocab_size`, same
    /// as `if (target == 0) target = next_random % (vocab_size - 1) + 1`.
    /// Both draws use `r`'s unsigned bit pattern directly, matching the
    /// original's unsigned `next_random % (vocab_size - 1)`.
    fn draw_negative_target(&self, rand: &mut LcRandomGen) -> i32 {
        let r = rand.next_rand();
        let mut target = self.unigram.expect("negative sampling requires a unigram table").sample(r);
        if target == 0 {
            target = (r % (self.matrices.vocab_size as u64 - 1) + 1) as i32;
        }
        target
    }

    /// Hierarchical softmax pass over `word`'s Huffman path: for each
    /// internal node on the path, propagate `hidden -> output`, compute
    /// the gradient against the node's bit, accumulate it into
    /// `error_acc`, and update the node's `syn1` row in place.
    fn hs_update(&self, word: usize, hidden: &[f32], error_acc: &mut [f32], alpha: f32) {
        let syn1 = self.matrices.syn1.as_ref().expect("hierarchical softmax requires syn1");
        let code = self.vocab.code(word);
        let point = self.vocab.point(word);
        for d in 0..code.len() {
            let l2 = point[d] as usize * self.layer1_size;
            let output_row = syn1.row_mut(l2, self.layer1_size);
            let f: f32 = hidden.iter().zip(output_row.iter()).map(|(&h, &w)| h * w).sum();
            let Some(sigmoid) = self.sigmoid.sigmoid(f) else {
                continue;
            };
            let g = (1.0 - code[d] as f32 - sigmoid) * alpha;
            for (e, &w) in error_acc.iter_mut().zip(output_row.iter()) {
                *e += g * w;
            }
            for (w, &h) in output_row.iter_mut().zip(hidden.iter()) {
                *w += g * h;
            }
        }
    }

    /// Negative sampling pass: one positive example (`word` itself) plus
    /// `negative` drawn counterexamples, each updating its own `syn1neg`
    /// row and contributing to `error_acc`.
    fn ns_update(&self, word: i32, hidden: &[f32], error_acc: &mut [f32], alpha: f32, rand: &mut LcRandomGen) {
        if self.negative <= 0 {
            return;
        }
        let syn1neg = self.matrices.syn1neg.as_ref().expect("negative sampling requires syn1neg");
        for d in 0..self.negative + 1 {
            let (target, label) = if d == 0 {
                (word, 1.0)
            } else {
                let target = self.draw_negative_target(rand);
                if target == word {
                    continue;
                }
                (target, 0.0)
            };

            let l2 = target as usize * self.layer1_size;
            let output_row = syn1neg.row_mut(l2, self.layer1_size);
            let f: f32 = hidden.iter().zip(output_row.iter()).map(|(&h, &w)| h * w).sum();
            let g = (label - self.sigmoid.sigmoid_or_saturate(f)) * alpha;
            for (e, &w) in error_acc.iter_mut().zip(output_row.iter()) {
                *e += g * w;
            }
            for (w, &h) in output_row.iter_mut().zip(hidden.iter()) {
                *w += g * h;
            }
        }
    }

    /// CBOW step: `hidden` is the already-averaged sum of the context
    /// word vectors. The resulting error is added to every context
    /// word's `syn0` row *unmasked* — pins only gate the skip-gram path,
    /// per the original's asymmetry.
    pub fn train_cbow(&self, word: usize, context_words: &[usize], hidden: &[f32], alpha: f32, rand: &mut LcRandomGen) {
        let mut error_acc = vec![0.0f32; self.layer1_size];

        if self.matrices.syn1.is_some() {
            self.hs_update(word, hidden, &mut error_acc, alpha);
        }
        self.ns_update(word as i32, hidden, &mut error_acc, alpha, rand);

        for &ctx in context_words {
            let row = self.matrices.syn0.row_mut(ctx * self.layer1_size, self.layer1_size);
            for (s, &e) in row.iter_mut().zip(error_acc.iter()) {
                *s += e;
            }
        }
    }

    /// Skip-gram step for one (target, context) pair. Repeats the whole
    /// update `pin_repeats` times when either word has a pinned
    /// dimension, giving pinned words' context extra gradient weight;
    /// the `syn0` update for `context_word` is masked by `pins` so frozen
    /// dimensions never move.
    pub fn train_skipgram(&self, word: usize, context_word: usize, alpha: f32, rand: &mut LcRandomGen) {
        let repeats = if self.matrices.is_pinned(word) || self.matrices.is_pinned(context_word) {
            self.pin_repeats
        } else {
            1
        };

        let l1 = context_word * self.layer1_size;
        for _ in 0..repeats.max(1) {
            let mut error_acc = vec![0.0f32; self.layer1_size];
            let hidden = self.matrices.syn0.row(l1, self.layer1_size).to_vec();

            if self.matrices.syn1.is_some() {
                self.hs_update(word, &hidden, &mut error_acc, alpha);
            }
            self.ns_update(word as i32, &hidden, &mut error_acc, alpha, rand);

            let syn0_row = self.matrices.syn0.row_mut(l1, self.layer1_size);
            let mask = self.matrices.pins.row(l1, self.layer1_size);
            for ((s, &e), &m) in syn0_row.iter_mut().zip(error_acc.iter()).zip(mask.iter()) {
                *s += e * m;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman;

    fn make_vocab() -> Vocabulary {
        let mut vocab = Vocabulary::new_for_test();
        for (w, c) in [("</s>", 5u64), ("the", 10), ("cat", 4), ("sat", 3), ("mat", 2)] {
            vocab.push_test_word(w.as_bytes().to_vec(), c);
        }
        huffman::build(&mut vocab);
        vocab
    }

    #[test]
    fn cbow_step_updates_only_context_rows() {
        let vocab = make_vocab();
        let matrices = EmbeddingMatrices::new(vocab.len(), 4, true, true).unwrap();
        let unigram = UnigramSampler::build(&vocab);
        let sigmoid = SigmoidTable::new();
        let kernel = TrainingKernel::new(&matrices, &sigmoid, &vocab, Some(&unigram), 2, 1);
        let mut rand = LcRandomGen::new(7);

        let before_untouched = matrices.syn0.row(3 * 4, 4).to_vec();
        let hidden = matrices.syn0.row(1 * 4, 4).to_vec();
        kernel.train_cbow(1, &[2], &hidden, 0.025, &mut rand);
        let after_untouched = matrices.syn0.row(3 * 4, 4).to_vec();
        assert_eq!(before_untouched, after_untouched);
    }

    #[test]
    fn skipgram_step_respects_pin_mask() {
        let vocab = make_vocab();
        let matrices = EmbeddingMatrices::new(vocab.len(), 4, false, true).unwrap();
        matrices.apply_pins(&[crate::pins::PinAssignment { word_index: 2, dimension: 1, value: 0.7 }]);
        let unigram = UnigramSampler::build(&vocab);
        let sigmoid = SigmoidTable::new();
        let kernel = TrainingKernel::new(&matrices, &sigmoid, &vocab, Some(&unigram), 3, 1);
        let mut rand = LcRandomGen::new(11);

        kernel.train_skipgram(1, 2, 0.025, &mut rand);
        assert_eq!(matrices.syn0.row(2 * 4, 4)[1], 0.7);
    }

    #[test]
    fn pin_repeats_multiplies_updates_for_pinned_words() {
        let vocab = make_vocab();
        let matrices = EmbeddingMatrices::new(vocab.len(), 4, false, true).unwrap();
        matrices.apply_pins(&[crate::pins::PinAssignment { word_index: 2, dimension: 0, value: 0.0 }]);
        let unigram = UnigramSampler::build(&vocab);
        let sigmoid = SigmoidTable::new();
        let kernel = TrainingKernel::new(&matrices, &sigmoid, &vocab, Some(&unigram), 2, 5);
        let mut rand = LcRandomGen::new(3);

        assert!(matrices.is_pinned(2));
        let before = matrices.syn0.row(2 * 4, 4).to_vec();
        kernel.train_skipgram(1, 2, 0.1, &mut rand);
        let after = matrices.syn0.row(2 * 4, 4).to_vec();
        // dim 0 is frozen regardless of how many times the repeat loop runs.
        assert_eq!(before[0], after[0]);
        assert_ne!(before[1..], after[1..]);
    }
}
