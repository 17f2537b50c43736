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

/// Fatal errors. Anything that reaches `main` as an `Err` is printed and the
/// process exits with status 1.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("training data file not found: {0}")]
    TrainingFileNotFound(String),

    #[error("vocabulary file not found: {0}")]
    VocabFileNotFound(String),

    #[error("memory allocation failed for {site} ({bytes} bytes)")]
    AllocationFailed { site: &'static str, bytes: u64 },

    #[error("vocabulary file is corrupt: {0}")]
    CorruptVocabFile(String),

    #[error("no value specified for parameter {0}")]
    MissingArgument(String),

    #[error("empty vocabulary")]
    EmptyVocabulary,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
