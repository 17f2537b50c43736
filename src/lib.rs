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

//! Word2vec-family embedding trainer (CBOW / skip-gram, hierarchical
//! softmax / negative sampling) with a coordinate-pinning mechanism that
//! freezes chosen `(word, dimension)` cells of the embedding matrix to
//! externally supplied values during training.

pub mod error;
pub mod huffman;
pub mod kernel;
pub mod matrices;
pub mod pins;
pub mod tokenizer;
pub mod trainer;
pub mod unigram;
pub mod vocab;
pub mod writer;
