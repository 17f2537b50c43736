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

use vecpin::error::Error;
use vecpin::trainer::{Trainer, TrainingConfig};

fn print_usage() {
    println!("Parameters for training:");
    println!("\t-train <file>\n\t\tUse text data from <file> to train the model");
    println!("\t-output <file>\n\t\tUse <file> to save the resulting word vectors / word clusters");
    println!("\t-size <int>\n\t\tSet size of word vectors; default is 100");
    println!("\t-window <int>\n\t\tSet max skip length between words; default is 5");
    println!("\t-sample <float>\n\t\tThreshold for downsampling frequent words; default is 1e-3");
    println!("\t-hs <int>\n\t\tUse Hierarchical Softmax; default is 0 (not used)");
    println!("\t-negative <int>\n\t\tNumber of negative examples; default is 5 (0 = not used)");
    println!("\t-threads <int>\n\t\tUse <int> threads; default is 12");
    println!("\t-iter <int>\n\t\tRun more training iterations; default is 5");
    println!("\t-min-count <int>\n\t\tDiscard words that appear less than <int> times; default is 5");
    println!("\t-alpha <float>\n\t\tSet the starting learning rate; default 0.025 (skip-gram) / 0.05 (CBOW)");
    println!("\t-classes <int>\n\t\tOutput word classes rather than word vectors; default is 0");
    println!("\t-debug <int>\n\t\tSet the debug mode; default is 2");
    println!("\t-binary <int>\n\t\tSave the resulting vectors in binary mode; default is 0");
    println!("\t-save-vocab <file>\n\t\tThe vocabulary will be saved to <file>");
    println!("\t-read-vocab <file>\n\t\tThe vocabulary will be read from <file>, not learned from the training data");
    println!("\t-cbow <int>\n\t\tUse the continuous bag-of-words model; default is 1 (use 0 for skip-gram)");
    println!("\t-pin <int>\n\t\tPin the built-in demonstration words/features; default is 0");
    println!("\t-pin-repeats <int>\n\t\tRepeat training examples involving pinned words this many times; default is 1");
    println!("\t-pin-csv <file>\n\t\tLoad additional has_wheels/is_dangerous pins from a blackbox CSV export");
    println!("\nExample:");
    println!("vecpin -train data.txt -output vec.txt -size 200 -window 5 -sample 1e-4 -negative 5 -hs 0 -binary 0 -cbow 1 -iter 3");
}

struct RawArgs {
    train: Option<String>,
    output: String,
    save_vocab: String,
    read_vocab: String,
    size: usize,
    window: usize,
    sample: f64,
    hs: bool,
    negative: i32,
    threads: usize,
    iter: u64,
    min_count: u32,
    alpha: Option<f32>,
    classes: usize,
    debug: i32,
    binary: bool,
    cbow: bool,
    pin: bool,
    pin_repeats: i32,
    pin_csv: Option<String>,
}

impl Default for RawArgs {
    fn default() -> Self {
        RawArgs {
            train: None,
            output: String::new(),
            save_vocab: String::new(),
            read_vocab: String::new(),
            size: 100,
            window: 5,
            sample: 1e-3,
            hs: false,
            negative: 5,
            threads: 12,
            iter: 5,
            min_count: 5,
            alpha: None,
            classes: 0,
            debug: 2,
            binary: false,
            cbow: true,
            pin: false,
            pin_repeats: 1,
            pin_csv: None,
        }
    }
}

/// Pulls the value following `flag` out of `args`, or a `MissingArgument`
/// error if `flag` was the last token. Unknown flags are the caller's
/// problem to report; this only handles "recognized flag, no value".
fn take_value(flag: &str, args: &mut std::iter::Peekable<std::env::Args>) -> Result<String, Error> {
    args.next().ok_or_else(|| Error::MissingArgument(flag.to_string()))
}

fn parse_args() -> Result<RawArgs, Error> {
    let mut parsed = RawArgs::default();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-train" => parsed.train = Some(take_value(&arg, &mut args)?),
            "-output" => parsed.output = take_value(&arg, &mut args)?,
            "-save-vocab" => parsed.save_vocab = take_value(&arg, &mut args)?,
            "-read-vocab" => parsed.read_vocab = take_value(&arg, &mut args)?,
            "-size" => parsed.size = take_value(&arg, &mut args)?.parse().unwrap_or(parsed.size),
            "-window" => parsed.window = take_value(&arg, &mut args)?.parse().unwrap_or(parsed.window),
            "-sample" => parsed.sample = take_value(&arg, &mut args)?.parse().unwrap_or(parsed.sample),
            "-hs" => parsed.hs = take_value(&arg, &mut args)?.parse::<i32>().unwrap_or(0) != 0,
            "-negative" => parsed.negative = take_value(&arg, &mut args)?.parse().unwrap_or(parsed.negative),
            "-threads" => parsed.threads = take_value(&arg, &mut args)?.parse().unwrap_or(parsed.threads),
            "-iter" => parsed.iter = take_value(&arg, &mut args)?.parse().unwrap_or(parsed.iter),
            "-min-count" => parsed.min_count = take_value(&arg, &mut args)?.parse().unwrap_or(parsed.min_count),
            "-alpha" => parsed.alpha = take_value(&arg, &mut args)?.parse().ok(),
            "-classes" => parsed.classes = take_value(&arg, &mut args)?.parse().unwrap_or(parsed.classes),
            "-debug" => parsed.debug = take_value(&arg, &mut args)?.parse().unwrap_or(parsed.debug),
            "-binary" => parsed.binary = take_value(&arg, &mut args)?.parse::<i32>().unwrap_or(0) != 0,
            "-cbow" => parsed.cbow = take_value(&arg, &mut args)?.parse::<i32>().unwrap_or(1) != 0,
            "-pin" => parsed.pin = take_value(&arg, &mut args)?.parse::<i32>().unwrap_or(0) != 0,
            "-pin-repeats" => parsed.pin_repeats = take_value(&arg, &mut args)?.parse().unwrap_or(parsed.pin_repeats),
            "-pin-csv" => parsed.pin_csv = Some(take_value(&arg, &mut args)?),
            "-help" | "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                log::warn!("ignoring unrecognized argument {other}");
            }
        }
    }

    Ok(parsed)
}

fn main() {
    env_logger::init();

    let result = run();
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args = parse_args()?;

    let Some(train_file) = args.train else {
        print_usage();
        return Ok(());
    };

    log::info!("training mode: {}{}", if args.cbow { "CBOW" } else { "skip-gram" }, if args.pin {
        format!(" with pinned words; pin-repeats = {}", args.pin_repeats)
    } else {
        String::new()
    });

    let starting_alpha = args.alpha.unwrap_or(if args.cbow { 0.05 } else { 0.025 });

    let config = TrainingConfig {
        training_file: train_file,
        vocab_file: args.read_vocab,
        save_vocab_file: args.save_vocab,
        output_file: args.output,
        layer1_size: args.size,
        window: args.window,
        total_iter: args.iter,
        negative_samples: args.negative,
        num_threads: args.threads,
        starting_alpha,
        sample: args.sample,
        min_count: args.min_count,
        binary: args.binary,
        cbow: args.cbow,
        hs: args.hs,
        classes: args.classes,
        pin: args.pin,
        pin_repeats: args.pin_repeats,
        pin_csv: args.pin_csv,
        debug_mode: args.debug,
    };

    Trainer::run(&config)
}
