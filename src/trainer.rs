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

//! Orchestrates a full training run: vocabulary construction, matrix
//! allocation, pin application, the `std::thread::scope` worker fan-out,
//! and dispatch to the vector/K-means writer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::huffman;
use crate::kernel::TrainingKernel;
use crate::matrices::{EmbeddingMatrices, LcRandomGen, SigmoidTable, assert_vocab_consistency, subsample_keep};
use crate::pins::PinRegistry;
use crate::tokenizer::{FileTokenIterator, read_word_index};
use crate::unigram::UnigramSampler;
use crate::vocab::Vocabulary;
use crate::writer;

pub struct TrainingConfig {
    pub training_file: String,
    pub vocab_file: String,
    pub save_vocab_file: String,
    pub output_file: String,
    pub layer1_size: usize,
    pub window: usize,
    pub total_iter: u64,
    pub negative_samples: i32,
    pub num_threads: usize,
    pub starting_alpha: f32,
    pub sample: f64,
    pub min_count: u32,
    pub binary: bool,
    pub cbow: bool,
    pub hs: bool,
    pub classes: usize,
    pub pin: bool,
    pub pin_repeats: i32,
    pub pin_csv: Option<String>,
    pub debug_mode: i32,
}

struct Progress {
    word_count_actual: AtomicU64,
}

const MAX_SENTENCE_LENGTH: usize = 1000;

pub struct Trainer;

impl Trainer {
    pub fn run(config: &TrainingConfig) -> Result<()> {
        let vocab = if config.vocab_file.is_empty() {
            Vocabulary::learn_from_training_file(&config.training_file, config.min_count)?
        } else {
            Vocabulary::load_from_file(&config.vocab_file)?
        };

        if !config.save_vocab_file.is_empty() {
            vocab.save_to_file(&config.save_vocab_file)?;
            log::info!("saved vocabulary to {}", config.save_vocab_file);
        }

        if config.output_file.is_empty() {
            log::warn!("no output file specified, skipping training");
            return Ok(());
        }

        let training_file_size = std::fs::metadata(&config.training_file)
            .map_err(|_| Error::TrainingFileNotFound(config.training_file.clone()))?
            .len();

        let mut vocab = vocab;
        if config.hs {
            huffman::build(&mut vocab);
        }
        let unigram = (config.negative_samples > 0).then(|| UnigramSampler::build(&vocab));

        let matrices = EmbeddingMatrices::new(vocab.len(), config.layer1_size, config.hs, config.negative_samples > 0)?;
        assert_vocab_consistency(&vocab, &matrices);

        let mut pins = PinRegistry::new();
        if config.pin {
            pins.apply_builtins(&vocab);
        }
        if let Some(csv) = &config.pin_csv {
            pins.load_pins_from_csv(csv, &vocab)?;
        }
        matrices.apply_pins(pins.assignments());

        let sigmoid = SigmoidTable::new();
        let progress = Progress {
            word_count_actual: AtomicU64::new(0),
        };

        let vocab = &vocab;
        let matrices = &matrices;
        let sigmoid = &sigmoid;
        let unigram_ref = unigram.as_ref();
        let progress = &progress;

        std::thread::scope(|scope| -> Result<()> {
            let mut handles = Vec::with_capacity(config.num_threads);
            for thread_id in 0..config.num_threads {
                handles.push(scope.spawn(move || {
                    worker_loop(
                        thread_id,
                        training_file_size,
                        config,
                        vocab,
                        matrices,
                        sigmoid,
                        unigram_ref,
                        progress,
                    )
                }));
            }
            for h in handles {
                h.join().expect("training worker panicked")?;
            }
            Ok(())
        })?;

        if config.classes > 0 {
            writer::write_classes(vocab, matrices, &config.output_file, config.classes)?;
        } else {
            writer::write_vectors(vocab, matrices, &config.output_file, config.binary)?;
        }

        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn worker_loop(
    thread_id: usize,
    training_file_size: u64,
    config: &TrainingConfig,
    vocab: &Vocabulary,
    matrices: &EmbeddingMatrices,
    sigmoid: &SigmoidTable,
    unigram: Option<&UnigramSampler>,
    progress: &Progress,
) -> Result<()> {
    let kernel = TrainingKernel::new(matrices, sigmoid, vocab, unigram, config.negative_samples, config.pin_repeats);
    let layer1_size = config.layer1_size;

    let offset = training_file_size / config.num_threads as u64 * thread_id as u64;
    let mut fi = FileTokenIterator::new(&config.training_file, offset)?;
    let mut rand = LcRandomGen::new(thread_id as u64);

    let total_train_units = config.total_iter * vocab.train_words().max(1) + 1;
    let mut word_count: u64 = 0;
    let mut last_word_count: u64 = 0;
    let mut local_iter = config.total_iter;
    let mut alpha = config.starting_alpha;
    let start = Instant::now();

    let mut sentence: Vec<i32> = Vec::with_capacity(MAX_SENTENCE_LENGTH);
    let mut sentence_position = 0usize;
    let mut eof_reached = false;

    loop {
        if word_count.saturating_sub(last_word_count) > 10000 {
            progress.word_count_actual.fetch_add(word_count - last_word_count, Ordering::Relaxed);
            last_word_count = word_count;
            let wc = progress.word_count_actual.load(Ordering::Relaxed) as f64;

            if config.debug_mode > 1 {
                print!(
                    "\rAlpha: {alpha:.06} Progress: {:.02}%  Words/sec: {:.02}k ",
                    wc / total_train_units as f64 * 100.0,
                    (wc / 1000.0) / start.elapsed().as_secs_f64().max(1e-9)
                );
                use std::io::Write;
                std::io::stdout().flush().ok();
            }

            alpha = config.starting_alpha * (1.0 - (wc / total_train_units as f64) as f32);
            if alpha < config.starting_alpha * 0.0001 {
                alpha = config.starting_alpha * 0.0001;
            }
        }

        if sentence.is_empty() {
            loop {
                let idx = match read_word_index(&mut fi, vocab) {
                    None => {
                        eof_reached = true;
                        break;
                    }
                    Some(x) if x < 0 => continue,
                    Some(0) => {
                        word_count += 1;
                        break;
                    }
                    Some(x) => x,
                };
                word_count += 1;
                if config.sample > 0.0 {
                    let r = rand.next_rand();
                    if !subsample_keep(vocab.count(idx as usize), vocab.train_words(), config.sample, r) {
                        continue;
                    }
                }
                sentence.push(idx);
                if sentence.len() >= MAX_SENTENCE_LENGTH {
                    break;
                }
            }
            sentence_position = 0;
        }

        if eof_reached || word_count > vocab.train_words() / config.num_threads as u64 {
            local_iter -= 1;
            if local_iter == 0 {
                break;
            }
            word_count = 0;
            last_word_count = 0;
            sentence.clear();
            fi.reset(offset)?;
            eof_reached = false;
            continue;
        }

        if sentence.is_empty() {
            continue;
        }

        let window = config.window;
        let b = (rand.next_rand() as usize) % window.max(1);
        let word = sentence[sentence_position] as usize;

        let context_positions: Vec<usize> = (b..window * 2 + 1 - b)
            .filter(|&a| a != window)
            .filter_map(|a| {
                let c = sentence_position as isize - window as isize + a as isize;
                (c >= 0 && (c as usize) < sentence.len()).then_some(c as usize)
            })
            .collect();

        if config.cbow {
            let context_words: Vec<usize> = context_positions.iter().map(|&c| sentence[c] as usize).collect();
            if !context_words.is_empty() {
                let mut hidden = vec![0.0f32; layer1_size];
                for &ctx in &context_words {
                    let row = matrices.syn0.row(ctx * layer1_size, layer1_size);
                    for (h, &v) in hidden.iter_mut().zip(row.iter()) {
                        *h += v;
                    }
                }
                for h in &mut hidden {
                    *h /= context_words.len() as f32;
                }
                kernel.train_cbow(word, &context_words, &hidden, alpha, &mut rand);
            }
        } else {
            for &c in &context_positions {
                let context_word = sentence[c] as usize;
                kernel.train_skipgram(word, context_word, alpha, &mut rand);
            }
        }

        sentence_position += 1;
        if sentence_position >= sentence.len() {
            sentence.clear();
        }
    }

    Ok(())
}
