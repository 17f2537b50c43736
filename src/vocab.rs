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

//! Word lookup table: open-addressed hash index, frequency sort/prune, and
//! the Huffman code/path slots filled in later by [`crate::huffman`].

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use crate::error::{Error, Result};
use crate::tokenizer::read_file_by_tokens;

/// Word token is truncated to this many bytes (including the trailing nul the
/// original C buffer reserves).
pub const MAX_STRING: usize = 100;
/// Longest Huffman code/path we will ever assign.
pub const MAX_CODE: usize = 40;

/// Open-addressed hash table capacity. Linear probing keeps the load factor
/// under 0.7 by triggering `reduce` in the caller.
const VOCAB_HASH_SIZE: usize = 30_000_000;

/// End-of-sentence sentinel, forcibly kept at index 0.
pub const EOS: &str = "</s>";

pub struct WordRecord {
    pub word: Vec<u8>,
    pub count: u64,
    /// Huffman code, root-to-leaf bit sequence (bit per entry), filled by `HuffmanCoder`.
    pub code: Vec<u8>,
    /// Huffman path, inner-node indices from root (`point[0]`) to parent-of-leaf.
    pub point: Vec<u32>,
}

impl WordRecord {
    fn new(word: Vec<u8>, count: u64) -> Self {
        WordRecord {
            word,
            count,
            code: Vec::new(),
            point: Vec::new(),
        }
    }
}

/// The same multiplicative hash the original C tool uses (`hash = hash*257 +
/// byte`). The training loop's hit rate on real corpora was tuned against this
/// specific hash and table size; a generic hasher changes collision behavior.
fn word_hash(word: &[u8]) -> usize {
    let mut hash: u64 = 0;
    for &b in word {
        hash = hash.wrapping_mul(257).wrapping_add(b as u64);
    }
    (hash % VOCAB_HASH_SIZE as u64) as usize
}

pub struct Vocabulary {
    words: Vec<WordRecord>,
    hash_table: Vec<i32>,
    train_words: u64,
    min_reduce: u64,
}

impl Vocabulary {
    fn new() -> Self {
        Vocabulary {
            words: Vec::new(),
            hash_table: vec![-1; VOCAB_HASH_SIZE],
            train_words: 0,
            min_reduce: 1,
        }
    }

    /// Build the vocabulary by scanning `training_file` once, always putting
    /// `</s>` at index 0, then sort, prune by `min_count`.
    pub fn learn_from_training_file(training_file: &str, min_count: u32) -> Result<Vocabulary> {
        if !std::path::Path::new(training_file).exists() {
            return Err(Error::TrainingFileNotFound(training_file.to_string()));
        }
        let mut vocab = Vocabulary::new();
        vocab.add_word(EOS.as_bytes());

        let mut reduce_count = 0u64;
        read_file_by_tokens(training_file, |word| {
            vocab.add_word(word);
            if vocab.words.len() as f64 > 0.7 * VOCAB_HASH_SIZE as f64 {
                vocab.reduce();
                reduce_count += 1;
            }
        })?;
        if reduce_count > 0 {
            log::debug!("vocabulary load factor exceeded 0.7 {reduce_count} time(s) during scan");
        }

        vocab.sort_and_prune(min_count);
        log::info!(
            "vocab size: {}, words in train file: {}",
            vocab.len(),
            vocab.train_words
        );
        Ok(vocab)
    }

    pub fn save_to_file(&self, vocab_file: &str) -> Result<()> {
        let mut w = BufWriter::new(File::create(vocab_file)?);
        for rec in &self.words {
            w.write_all(&rec.word)?;
            writeln!(w, " {}", rec.count)?;
        }
        Ok(())
    }

    /// Reads `<word> <count>\n` lines written by `save_to_file`. Per the
    /// round-trip law, `sort_and_prune(1)` reproduces an identical table.
    pub fn load_from_file(vocab_file: &str) -> Result<Vocabulary> {
        if !std::path::Path::new(vocab_file).exists() {
            return Err(Error::VocabFileNotFound(vocab_file.to_string()));
        }
        let mut reader = BufReader::new(File::open(vocab_file)?);
        let mut vocab = Vocabulary::new();
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            while line.last() == Some(&b'\n') || line.last() == Some(&b'\r') {
                line.pop();
            }
            if line.is_empty() {
                continue;
            }
            let sep = line
                .iter()
                .rposition(|b| b.is_ascii_whitespace())
                .ok_or_else(|| Error::CorruptVocabFile(String::from_utf8_lossy(&line).into_owned()))?;
            let (word, rest) = line.split_at(sep);
            let count_str = std::str::from_utf8(&rest[1..])
                .map_err(|_| Error::CorruptVocabFile("non UTF-8 count field".to_string()))?;
            // A corrupt/truncated count parses to 0 rather than aborting the load,
            // matching the known ambiguity documented for this round trip.
            let count: u64 = count_str.trim().parse().unwrap_or(0);
            vocab.add_word_with_count(word, count);
        }
        if vocab.is_empty() {
            return Err(Error::EmptyVocabulary);
        }
        vocab.sort_and_prune(1);
        Ok(vocab)
    }

    /// Returns the index of `word`, or `-1` if absent.
    pub fn lookup(&self, word: &[u8]) -> i32 {
        let mut idx = word_hash(word);
        loop {
            let widx = self.hash_table[idx];
            if widx == -1 {
                return -1;
            }
            if self.words[widx as usize].word == word {
                return widx;
            }
            idx = (idx + 1) % VOCAB_HASH_SIZE;
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn train_words(&self) -> u64 {
        self.train_words
    }

    pub fn count(&self, idx: usize) -> u64 {
        self.words[idx].count
    }

    pub fn word_bytes(&self, idx: usize) -> &[u8] {
        &self.words[idx].word
    }

    pub fn code(&self, idx: usize) -> &[u8] {
        &self.words[idx].code
    }

    pub fn point(&self, idx: usize) -> &[u32] {
        &self.words[idx].point
    }

    pub fn set_code_and_point(&mut self, idx: usize, code: Vec<u8>, point: Vec<u32>) {
        self.words[idx].code = code;
        self.words[idx].point = point;
    }

    pub fn iter_words(&self) -> impl Iterator<Item = &[u8]> {
        self.words.iter().map(|w| w.word.as_slice())
    }

    pub fn iter_counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.words.iter().map(|w| w.count)
    }

    fn find_slot(&self, word: &[u8]) -> (usize, i32) {
        let mut idx = word_hash(word);
        loop {
            let widx = self.hash_table[idx];
            if widx == -1 {
                return (idx, -1);
            }
            if self.words[widx as usize].word == word {
                return (idx, widx);
            }
            idx = (idx + 1) % VOCAB_HASH_SIZE;
        }
    }

    /// Appends a new word with count 1, or increments the count if it is
    /// already present. Truncates tokens longer than `MAX_STRING - 1` bytes.
    fn add_word(&mut self, word: &[u8]) {
        let word = &word[..word.len().min(MAX_STRING - 1)];
        let (slot, widx) = self.find_slot(word);
        if widx == -1 {
            let new_idx = self.words.len() as i32;
            self.words.push(WordRecord::new(word.to_vec(), 1));
            self.hash_table[slot] = new_idx;
        } else {
            self.words[widx as usize].count += 1;
        }
        self.train_words += 1;
    }

    fn add_word_with_count(&mut self, word: &[u8], count: u64) -> i32 {
        let word = &word[..word.len().min(MAX_STRING - 1)];
        let (slot, widx) = self.find_slot(word);
        if widx == -1 {
            let new_idx = self.words.len() as i32;
            self.words.push(WordRecord::new(word.to_vec(), count));
            self.hash_table[slot] = new_idx;
            self.train_words += count;
            new_idx
        } else {
            self.words[widx as usize].count += count;
            self.train_words += count;
            widx
        }
    }

    fn rebuild_hash_table(&mut self) {
        self.hash_table.fill(-1);
        for (idx, rec) in self.words.iter().enumerate() {
            let mut slot = word_hash(&rec.word);
            while self.hash_table[slot] != -1 {
                slot = (slot + 1) % VOCAB_HASH_SIZE;
            }
            self.hash_table[slot] = idx as i32;
        }
    }

    /// Sorts indices 1..N by descending count, drops everything (but `</s>`)
    /// below `min_count`, recomputes `train_words`, rebuilds the hash table.
    fn sort_and_prune(&mut self, min_count: u32) {
        let eos = self.words.remove(0);
        self.words.sort_by(|a, b| b.count.cmp(&a.count));
        self.words.retain(|w| w.count >= min_count as u64);
        self.words.insert(0, eos);
        self.train_words = self.words.iter().map(|w| w.count).sum();
        for rec in &mut self.words {
            rec.code = Vec::new();
            rec.point = Vec::new();
        }
        self.rebuild_hash_table();
    }

    /// Called opportunistically when the hash table's load factor exceeds
    /// 0.7. Compacts in place, drops anything at or below `min_reduce`
    /// (except `</s>`), bumps `min_reduce` monotonically, rebuilds the table.
    fn reduce(&mut self) {
        let threshold = self.min_reduce;
        let mut kept = Vec::with_capacity(self.words.len());
        for (i, rec) in self.words.drain(..).enumerate() {
            if i == 0 || rec.count > threshold {
                kept.push(rec);
            }
        }
        self.words = kept;
        self.min_reduce += 1;
        self.rebuild_hash_table();
    }
}

#[cfg(test)]
impl Vocabulary {
    /// Builds an empty vocabulary for unit tests in other modules (e.g.
    /// [`crate::huffman`]) that need specific word counts without going
    /// through a training file.
    pub(crate) fn new_for_test() -> Vocabulary {
        Vocabulary::new()
    }

    /// Appends a word directly, skipping the hash table (tests that only
    /// need `count`/`word_bytes`/`code`/`point` by index, not `lookup`).
    pub(crate) fn push_test_word(&mut self, word: Vec<u8>, count: u64) {
        self.train_words += count;
        self.words.push(WordRecord::new(word, count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eos_stays_at_index_zero_after_prune() {
        let mut vocab = Vocabulary::new();
        vocab.add_word(EOS.as_bytes());
        for w in ["the", "the", "the", "cat", "cat", "sat"] {
            vocab.add_word(w.as_bytes());
        }
        vocab.sort_and_prune(1);
        assert_eq!(vocab.word_bytes(0), EOS.as_bytes());
        for i in 1..vocab.len() - 1 {
            assert!(vocab.count(i) >= vocab.count(i + 1));
        }
    }

    #[test]
    fn min_count_prunes_rare_words() {
        let mut vocab = Vocabulary::new();
        vocab.add_word(EOS.as_bytes());
        vocab.add_word(b"common");
        vocab.add_word(b"common");
        vocab.add_word(b"common");
        vocab.add_word(b"rare");
        vocab.sort_and_prune(2);
        assert_eq!(vocab.lookup(b"rare"), -1);
        assert!(vocab.lookup(b"common") >= 0);
    }

    #[test]
    fn lookup_of_absent_word_is_negative_one() {
        let mut vocab = Vocabulary::new();
        vocab.add_word(EOS.as_bytes());
        vocab.sort_and_prune(1);
        assert_eq!(vocab.lookup(b"never-added"), -1);
    }

    #[test]
    fn save_then_load_round_trips_at_min_count_one() {
        let mut vocab = Vocabulary::new();
        vocab.add_word(EOS.as_bytes());
        for w in ["the", "cat", "sat", "the", "dog"] {
            vocab.add_word(w.as_bytes());
        }
        vocab.sort_and_prune(1);

        let dir = std::env::temp_dir();
        let path = dir.join(format!("vecpin-vocab-test-{}.txt", std::process::id()));
        let path_str = path.to_str().unwrap();
        vocab.save_to_file(path_str).unwrap();
        let reloaded = Vocabulary::load_from_file(path_str).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(reloaded.len(), vocab.len());
        for i in 0..vocab.len() {
            assert_eq!(vocab.word_bytes(i), reloaded.word_bytes(i));
            assert_eq!(vocab.count(i), reloaded.count(i));
        }
    }
}
