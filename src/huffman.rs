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

//! Static Huffman tree over vocabulary counts, used by hierarchical softmax
//! to assign each word a root-to-leaf `code`/`point` pair. Ported from the
//! two-cursor merge in the original tool's `CreateBinaryTree`: `count` is
//! sorted descending by construction (the vocabulary is sorted that way),
//! so the two smallest unmerged nodes are always found by walking two
//! monotone cursors rather than a heap — O(V) instead of O(V log V).

use crate::vocab::{MAX_CODE, Vocabulary};

/// Values this large stand in for "infinity" among the internal-node
/// counts, so real leaves are always merged first.
const HUGE_COUNT: u64 = 1_000_000_000_000_000;

/// Builds Huffman codes/paths for every word in `vocab` and stores them
/// back via [`Vocabulary::set_code_and_point`]. A no-op on an empty or
/// single-word vocabulary (no internal nodes to build).
pub fn build(vocab: &mut Vocabulary) {
    let vocab_size = vocab.len();
    if vocab_size < 2 {
        return;
    }

    let mut count = vec![0u64; vocab_size * 2 - 1];
    let mut binary = vec![0u8; vocab_size * 2 - 1];
    let mut parent_node = vec![0usize; vocab_size * 2 - 1];

    for i in 0..vocab_size {
        count[i] = vocab.count(i);
    }
    for slot in count.iter_mut().skip(vocab_size) {
        *slot = HUGE_COUNT;
    }

    let mut pos1 = vocab_size as isize - 1;
    let mut pos2 = vocab_size;

    for a in 0..vocab_size - 1 {
        let min1i = if pos1 >= 0 && count[pos1 as usize] < count[pos2] {
            let i = pos1 as usize;
            pos1 -= 1;
            i
        } else {
            let i = pos2;
            pos2 += 1;
            i
        };
        let min2i = if pos1 >= 0 && count[pos1 as usize] < count[pos2] {
            let i = pos1 as usize;
            pos1 -= 1;
            i
        } else {
            let i = pos2;
            pos2 += 1;
            i
        };

        count[vocab_size + a] = count[min1i] + count[min2i];
        parent_node[min1i] = vocab_size + a;
        parent_node[min2i] = vocab_size + a;
        binary[min2i] = 1;
    }

    let root = vocab_size * 2 - 2;
    let mut code = [0u8; MAX_CODE];
    let mut point = [0usize; MAX_CODE];

    for a in 0..vocab_size {
        let mut b = a;
        let mut i = 0usize;
        loop {
            code[i] = binary[b];
            point[i] = b;
            i += 1;
            b = parent_node[b];
            if b == root || i >= MAX_CODE {
                break;
            }
        }

        let mut out_code = Vec::with_capacity(i);
        let mut out_point = Vec::with_capacity(i + 1);
        out_point.push((vocab_size - 2) as u32);
        for b in 0..i {
            out_code.push(code[i - b - 1]);
            out_point.push((point[b] - vocab_size) as u32);
        }
        vocab.set_code_and_point(a, out_code, out_point);
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
    fn codes_form_a_valid_prefix_free_set() {
        let mut vocab = vocab_with_counts(&[5, 1, 6, 1, 1, 5]);
        build(&mut vocab);

        // Kraft's inequality: sum(2^-len) <= 1, with equality for a
        // complete binary tree (every internal node has exactly two
        // children, which is how CreateBinaryTree always builds it).
        let mut kraft = 0.0f64;
        for i in 0..vocab.len() {
            let len = vocab.code(i).len();
            assert!(len > 0 && len <= MAX_CODE);
            kraft += 2f64.powi(-(len as i32));
        }
        assert!((kraft - 1.0).abs() < 1e-9);
    }

    #[test]
    fn more_frequent_words_get_shorter_or_equal_codes() {
        let mut vocab = vocab_with_counts(&[100, 50, 10, 1, 1, 1, 1]);
        build(&mut vocab);
        for i in 0..vocab.len() - 1 {
            assert!(vocab.code(i).len() <= vocab.code(i + 1).len());
        }
    }

    #[test]
    fn two_word_vocabulary_gets_single_bit_codes() {
        let mut vocab = vocab_with_counts(&[3, 1]);
        build(&mut vocab);
        assert_eq!(vocab.code(0).len(), 1);
        assert_eq!(vocab.code(1).len(), 1);
        assert_ne!(vocab.code(0)[0], vocab.code(1)[0]);
    }
}
