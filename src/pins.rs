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

//! Coordinate pinning: freezes chosen `(word, dimension)` cells of the
//! embedding matrix so training never moves them. Ported from `Pin`,
//! `IsPinned`, `InitPins` and `PinFromBlackboxData` in the original tool.
//! Dimension 0 encodes gender, 1 latitude, 2 (log-scaled) mass, 3
//! has-wheels, 4 is-dangerous — the same five-slot layout the original
//! hardcodes.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::Result;
use crate::vocab::Vocabulary;

/// Number of leading embedding dimensions the built-in pin sets ever touch.
pub const NUM_PINNED_DIMENSIONS: usize = 5;

include!("pin_tables.rs");

/// Encodes a mass in kilograms onto a log scale centered on 1 kg, so
/// 1000 kg -> 0.3, 1 kg -> 0, 1 g -> -0.3, 1 mg -> -0.6.
pub fn encode_mass(mass_in_kg: f32) -> f32 {
    mass_in_kg.log10() * 0.1
}

/// One `(word index, dimension, value)` assignment, applied to `syn0` and
/// masked out of `pins` by [`crate::trainer::Trainer`] once the matrices
/// exist.
pub struct PinAssignment {
    pub word_index: usize,
    pub dimension: usize,
    pub value: f32,
}

#[derive(Default)]
pub struct PinRegistry {
    assignments: Vec<PinAssignment>,
}

impl PinRegistry {
    pub fn new() -> PinRegistry {
        PinRegistry::default()
    }

    pub fn assignments(&self) -> &[PinAssignment] {
        &self.assignments
    }

    /// Looks `word` up in `vocab`; silently skipped (with a `warn!` log, not
    /// a fatal error) if it is out of vocabulary, matching the original's
    /// "Can't pin ... because it is not found" notice-and-continue behavior.
    fn pin(&mut self, vocab: &Vocabulary, word: &str, dimension: usize, value: f32) {
        let idx = vocab.lookup(word.as_bytes());
        if idx < 0 {
            log::warn!("can't pin \"{word}\" because it is not found in vocabulary");
            return;
        }
        self.assignments.push(PinAssignment {
            word_index: idx as usize,
            dimension,
            value,
        });
    }

    /// Registers the built-in demonstration pin sets: gender pairs on
    /// dimension 0, city latitudes on 1, animal masses (already
    /// log-encoded by the table) on 2, and the has-wheels / is-dangerous
    /// word lists on 3 and 4.
    pub fn apply_builtins(&mut self, vocab: &Vocabulary) {
        for &(word, value) in GENDER_PINS {
            self.pin(vocab, word, 0, value);
        }
        for &(word, value) in CITY_LATITUDE_PINS {
            self.pin(vocab, word, 1, value);
        }
        for &(word, value) in ANIMAL_MASS_PINS {
            self.pin(vocab, word, 2, value);
        }
        for &(word, value) in HAS_WHEELS_PINS {
            self.pin(vocab, word, 3, value);
        }
        for &(word, value) in IS_DANGEROUS_PINS {
            self.pin(vocab, word, 4, value);
        }
    }

    /// Loads additional pins from a blackbox CSV export: a header line
    /// followed by `id,property,word,value` rows. Only `has_wheels` (dim 3)
    /// and `is_dangerous` (dim 4) properties are recognized; everything
    /// else is ignored, same as `PinFromBlackboxData`.
    pub fn load_pins_from_csv(&mut self, path: &str, vocab: &Vocabulary) -> Result<()> {
        let reader = BufReader::new(File::open(path)?);
        let mut lines = reader.lines();
        lines.next(); // header

        let mut processed = 0u64;
        for line in lines {
            let line = line?;
            let fields: Vec<&str> = line.splitn(4, ',').collect();
            if fields.len() != 4 {
                continue;
            }
            let (_id, property, word, value) = (fields[0], fields[1], fields[2], fields[3]);
            let Ok(value): std::result::Result<i32, _> = value.trim().parse() else {
                continue;
            };
            match property {
                "has_wheels" => self.pin(vocab, word, 3, value as f32),
                "is_dangerous" => self.pin(vocab, word, 4, value as f32),
                _ => continue,
            }
            processed += 1;
        }
        log::info!("processed {processed} line(s) from {path}");
        Ok(())
    }
}
