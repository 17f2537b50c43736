//  Copyright 2026 Robert Zavalczki
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

//! Tokenizes the training file into sentence-bounded streams. Tokens are
//! split on SPACE/TAB/LF, carriage returns are discarded, and every LF that
//! terminates a non-empty run of bytes also emits the `</s>` sentinel.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};

use crate::vocab::{MAX_STRING, Vocabulary};

#[inline]
fn is_token_separator(byte: u8) -> bool {
    byte == b'\n' || byte == b' ' || byte == b'\t' || byte == b'\r'
}

#[inline]
fn is_doc_separator(byte: u8) -> bool {
    byte == b'\n'
}

fn truncate(word: &[u8]) -> &[u8] {
    &word[..word.len().min(MAX_STRING - 1)]
}

/// Reads the whole file once and invokes `token_callback` for each token
/// (including synthesized `</s>` sentinels). Used to build the vocabulary.
/// A trailing, LF-less final word is still emitted at EOF; a final `</s>` is
/// only emitted when the file itself ends in LF.
pub fn read_file_by_tokens<T: FnMut(&[u8])>(
    file_name: &str,
    mut token_callback: T,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(File::open(file_name)?);
    let mut rest: Vec<u8> = Vec::new();

    loop {
        let data = reader.fill_buf()?;
        if data.is_empty() {
            if !rest.is_empty() {
                token_callback(truncate(&rest));
            }
            break;
        }
        let data_len = data.len();
        let mut start = 0usize;
        while let Some(rel) = data[start..data_len].iter().position(|&b| is_token_separator(b)) {
            let i = start + rel;
            let byte = data[i];
            rest.extend_from_slice(&data[start..i]);
            start = i + 1;
            if !rest.is_empty() {
                token_callback(truncate(&rest));
                rest.clear();
            }
            if is_doc_separator(byte) {
                token_callback(b"</s>");
            }
        }
        rest.extend_from_slice(&data[start..data_len]);
        reader.consume(data_len);
    }

    Ok(())
}

const READ_BUFFER_SIZE: usize = 8192;

/// Per-worker, seekable token reader. Each worker owns one of these, opened
/// independently of the others and seeked to its own byte offset. Sentence
/// boundaries are rediscovered from scratch after a seek; the worker starts
/// mid-sentence and the leading partial sentence is absorbed into its first
/// batch (accepted loss, see the corpus reader notes in the design doc).
pub struct FileTokenIterator {
    file: File,
    start_pos: usize,
    end_pos: usize,
    read_buffer: Vec<u8>,
    rest: Vec<u8>,
    pending_eos: bool,
    eof: bool,
}

impl FileTokenIterator {
    pub fn new(file_name: &str, offset: u64) -> std::io::Result<FileTokenIterator> {
        let mut file = File::open(file_name)?;
        file.seek(SeekFrom::Start(offset))?;
        Ok(FileTokenIterator {
            file,
            start_pos: 0,
            end_pos: 0,
            read_buffer: vec![0u8; READ_BUFFER_SIZE],
            rest: Vec::new(),
            pending_eos: false,
            eof: false,
        })
    }

    /// Restart iteration from `offset` (used between training epochs).
    pub fn reset(&mut self, offset: u64) -> std::io::Result<()> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.start_pos = 0;
        self.end_pos = 0;
        self.rest.clear();
        self.pending_eos = false;
        self.eof = false;
        Ok(())
    }

    /// Returns the next token, or `None` on EOF. `</s>` is synthesized right
    /// after the token that precedes an LF; a final `</s>` is only produced
    /// if the stream itself ended with LF (EOF alone does not synthesize
    /// one).
    pub fn read_token(&mut self) -> Option<Vec<u8>> {
        if self.pending_eos {
            self.pending_eos = false;
            return Some(b"</s>".to_vec());
        }

        loop {
            if let Some(rel) = self.read_buffer[self.start_pos..self.end_pos]
                .iter()
                .position(|&b| is_token_separator(b))
            {
                let i = self.start_pos + rel;
                let byte = self.read_buffer[i];
                self.rest.extend_from_slice(&self.read_buffer[self.start_pos..i]);
                self.start_pos = i + 1;
                let doc_sep = is_doc_separator(byte);

                if !self.rest.is_empty() {
                    let tok = truncate(&self.rest).to_vec();
                    self.rest.clear();
                    if doc_sep {
                        self.pending_eos = true;
                    }
                    return Some(tok);
                }
                if doc_sep {
                    return Some(b"</s>".to_vec());
                }
                continue;
            }

            self.rest.extend_from_slice(&self.read_buffer[self.start_pos..self.end_pos]);
            if self.eof {
                return if self.rest.is_empty() {
                    None
                } else {
                    let tok = truncate(&self.rest).to_vec();
                    self.rest.clear();
                    Some(tok)
                };
            }
            self.start_pos = 0;
            self.end_pos = self.file.read(&mut self.read_buffer[..]).unwrap_or(0);
            if self.end_pos == 0 {
                self.eof = true;
            }
        }
    }
}

/// Composes [`FileTokenIterator`] with a vocabulary lookup: `None` on EOF,
/// `Some(-1)` if the token is out of vocabulary, `Some(idx)` otherwise.
pub fn read_word_index(fi: &mut FileTokenIterator, vocab: &Vocabulary) -> Option<i32> {
    fi.read_token().map(|tok| vocab.lookup(&tok))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("vecpin-tok-test-{}-{name}.txt", std::process::id()));
        let mut f = File::create(&path).unwrap();
        f.write_all(contents).unwrap();
        path
    }

    #[test]
    fn emits_eos_on_every_lf_and_drops_trailing_cr() {
        let mut tokens: Vec<Vec<u8>> = Vec::new();
        let path = write_temp("cr", b"a b\r\nc");
        read_file_by_tokens(path.to_str().unwrap(), |w| tokens.push(w.to_vec())).unwrap();
        std::fs::remove_file(&path).ok();
        let as_strs: Vec<&str> = tokens.iter().map(|t| std::str::from_utf8(t).unwrap()).collect();
        assert_eq!(as_strs, vec!["a", "b", "</s>", "c"]);
    }

    #[test]
    fn scenario_a_b_lf_c_via_iterator() {
        let path = write_temp("iter1", b"a b\nc");
        let mut it = FileTokenIterator::new(path.to_str().unwrap(), 0).unwrap();
        let mut out = Vec::new();
        while let Some(tok) = it.read_token() {
            out.push(String::from_utf8(tok).unwrap());
        }
        std::fs::remove_file(&path).ok();
        assert_eq!(out, vec!["a", "b", "</s>", "c"]);
    }

    #[test]
    fn trailing_lf_yields_final_eos() {
        let path = write_temp("iter2", b"a b\nc\n");
        let mut it = FileTokenIterator::new(path.to_str().unwrap(), 0).unwrap();
        let mut out = Vec::new();
        while let Some(tok) = it.read_token() {
            out.push(String::from_utf8(tok).unwrap());
        }
        std::fs::remove_file(&path).ok();
        assert_eq!(out, vec!["a", "b", "</s>", "c", "</s>"]);
    }

    #[test]
    fn long_token_is_truncated_to_max_string_minus_one() {
        // Both readers must truncate the same way, or a word learned by
        // read_file_by_tokens could go unrecognized by read_word_index.
        let long = "x".repeat(150);
        let path = write_temp("trunc", long.as_bytes());
        let mut it = FileTokenIterator::new(path.to_str().unwrap(), 0).unwrap();
        let tok = it.read_token().unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(tok.len(), MAX_STRING - 1);
    }
}
