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

//! Writes the trained `syn0` rows out as either a text/binary vector file
//! or, with `-classes`, as K-means cluster assignments. Ported from the
//! `classes == 0` / `else` branches at the end of `TrainModel`.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::Result;
use crate::matrices::EmbeddingMatrices;
use crate::vocab::Vocabulary;

pub fn write_vectors(vocab: &Vocabulary, matrices: &EmbeddingMatrices, output_file: &str, binary: bool) -> Result<()> {
    let mut w = BufWriter::new(File::create(output_file)?);
    writeln!(w, "{} {}", matrices.vocab_size, matrices.layer1_size)?;
    for idx in 0..vocab.len() {
        w.write_all(vocab.word_bytes(idx))?;
        w.write_all(b" ")?;
        let row = matrices.syn0.row(idx * matrices.layer1_size, matrices.layer1_size);
        if binary {
            for &f in row {
                w.write_all(&f.to_le_bytes())?;
            }
        } else {
            for &f in row {
                write!(w, "{f:.6} ")?;
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

const KMEANS_ITERATIONS: usize = 10;

/// 10 rounds of Lloyd's algorithm with cosine-similarity assignment:
/// words start in `index % classes`, each round recomputes a unit-norm
/// centroid per cluster then reassigns every word to its highest-dot-
/// product centroid.
pub fn write_classes(vocab: &Vocabulary, matrices: &EmbeddingMatrices, output_file: &str, classes: usize) -> Result<()> {
    let vocab_size = matrices.vocab_size;
    let layer1_size = matrices.layer1_size;
    let syn0 = matrices.syn0.as_slice();

    let mut assignment: Vec<usize> = (0..vocab_size).map(|i| i % classes).collect();
    let mut centroid = vec![0.0f32; classes * layer1_size];

    for _ in 0..KMEANS_ITERATIONS {
        centroid.fill(0.0);
        let mut count = vec![1usize; classes];

        for word in 0..vocab_size {
            let cluster = assignment[word];
            let word_row = &syn0[word * layer1_size..(word + 1) * layer1_size];
            let cent_row = &mut centroid[cluster * layer1_size..(cluster + 1) * layer1_size];
            for (c, &v) in cent_row.iter_mut().zip(word_row.iter()) {
                *c += v;
            }
            count[cluster] += 1;
        }

        for cluster in 0..classes {
            let cent_row = &mut centroid[cluster * layer1_size..(cluster + 1) * layer1_size];
            for c in cent_row.iter_mut() {
                *c /= count[cluster] as f32;
            }
            let norm = cent_row.iter().map(|&v| v * v).sum::<f32>().sqrt();
            if norm > 0.0 {
                for c in cent_row.iter_mut() {
                    *c /= norm;
                }
            }
        }

        for word in 0..vocab_size {
            let word_row = &syn0[word * layer1_size..(word + 1) * layer1_size];
            let mut best_score = -10.0f32;
            let mut best_cluster = 0usize;
            for cluster in 0..classes {
                let cent_row = &centroid[cluster * layer1_size..(cluster + 1) * layer1_size];
                let score: f32 = cent_row.iter().zip(word_row.iter()).map(|(&c, &v)| c * v).sum();
                if score > best_score {
                    best_score = score;
                    best_cluster = cluster;
                }
            }
            assignment[word] = best_cluster;
        }
    }

    let mut w = BufWriter::new(File::create(output_file)?);
    for word in 0..vocab_size {
        w.write_all(vocab.word_bytes(word))?;
        writeln!(w, " {}", assignment[word])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab_with(words: &[&str]) -> Vocabulary {
        let mut vocab = Vocabulary::new_for_test();
        for (i, w) in words.iter().enumerate() {
            vocab.push_test_word(w.as_bytes().to_vec(), 10 - i as u64);
        }
        vocab
    }

    #[test]
    fn write_vectors_text_header_matches_vocab_and_layer_size() {
        let vocab = vocab_with(&["</s>", "a", "b"]);
        let matrices = EmbeddingMatrices::new(vocab.len(), 4, false, true).unwrap();
        let dir = std::env::temp_dir();
        let path = dir.join(format!("vecpin-writer-test-{}.txt", std::process::id()));
        write_vectors(&vocab, &matrices, path.to_str().unwrap(), false).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        let header = contents.lines().next().unwrap();
        assert_eq!(header, "3 4");
        assert_eq!(contents.lines().count(), 4);
    }

    #[test]
    fn write_classes_assigns_every_word_to_a_valid_cluster() {
        let vocab = vocab_with(&["</s>", "a", "b", "c", "d"]);
        let matrices = EmbeddingMatrices::new(vocab.len(), 3, false, true).unwrap();
        let dir = std::env::temp_dir();
        let path = dir.join(format!("vecpin-writer-classes-test-{}.txt", std::process::id()));
        write_classes(&vocab, &matrices, path.to_str().unwrap(), 2).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(contents.lines().count(), 5);
        for line in contents.lines() {
            let class: usize = line.rsplit(' ').next().unwrap().parse().unwrap();
            assert!(class < 2);
        }
    }
}
