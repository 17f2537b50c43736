use assert_cmd::prelude::*;
use std::io::Write;
use std::process::Command;

type StdResult = Result<(), Box<dyn std::error::Error>>;

/// A small repeating corpus, big enough that every word clears the default
/// min-count once `-min-count 1` is passed and that CBOW/skip-gram windows
/// have real context to chew on.
const CORPUS: &str = "the quick brown fox jumps over the lazy dog \
the quick brown fox runs past the lazy dog \
the dog barks at the fox and the fox runs away \
";

fn write_corpus(dir: &tempfile::TempDir) -> StdResult {
    let path = dir.path().join("corpus.txt");
    let mut f = std::fs::File::create(&path)?;
    f.write_all(CORPUS.as_bytes())?;
    Ok(())
}

fn read_vectors(path: &std::path::Path) -> StdResult<(usize, usize, Vec<String>)> {
    let contents = std::fs::read_to_string(path)?;
    let mut lines = contents.lines();
    let header = lines.next().ok_or("missing header")?;
    let mut parts = header.split_whitespace();
    let vocab_size: usize = parts.next().ok_or("missing vocab size")?.parse()?;
    let dims: usize = parts.next().ok_or("missing dims")?.parse()?;
    let words: Vec<String> = lines.map(|l| l.split_whitespace().next().unwrap_or("").to_string()).collect();
    Ok((vocab_size, dims, words))
}

#[test]
fn cbow_training_produces_a_vector_file_with_matching_header() -> StdResult {
    let dir = tempfile::tempdir()?;
    write_corpus(&dir)?;
    let out = dir.path().join("vectors.txt");

    Command::cargo_bin("vecpin")?
        .arg("-train").arg(dir.path().join("corpus.txt"))
        .arg("-output").arg(&out)
        .arg("-size").arg("8")
        .arg("-min-count").arg("1")
        .arg("-iter").arg("2")
        .arg("-threads").arg("2")
        .arg("-debug").arg("0")
        .assert()
        .success();

    let (vocab_size, dims, words) = read_vectors(&out)?;
    assert_eq!(dims, 8);
    assert_eq!(vocab_size, words.len());
    assert!(words.contains(&"fox".to_string()));
    assert!(words.contains(&"</s>".to_string()));
    Ok(())
}

#[test]
fn skipgram_with_hierarchical_softmax_trains_without_negative_sampling() -> StdResult {
    let dir = tempfile::tempdir()?;
    write_corpus(&dir)?;
    let out = dir.path().join("vectors.txt");

    Command::cargo_bin("vecpin")?
        .arg("-train").arg(dir.path().join("corpus.txt"))
        .arg("-output").arg(&out)
        .arg("-size").arg("6")
        .arg("-min-count").arg("1")
        .arg("-cbow").arg("0")
        .arg("-hs").arg("1")
        .arg("-negative").arg("0")
        .arg("-iter").arg("2")
        .arg("-threads").arg("1")
        .arg("-debug").arg("0")
        .assert()
        .success();

    let (_, dims, words) = read_vectors(&out)?;
    assert_eq!(dims, 6);
    assert!(!words.is_empty());
    Ok(())
}

#[test]
fn pinned_word_dimension_stays_fixed_after_training() -> StdResult {
    let dir = tempfile::tempdir()?;
    write_corpus(&dir)?;
    let out = dir.path().join("vectors.txt");

    Command::cargo_bin("vecpin")?
        .arg("-train").arg(dir.path().join("corpus.txt"))
        .arg("-output").arg(&out)
        .arg("-size").arg("5")
        .arg("-min-count").arg("1")
        .arg("-pin").arg("1")
        .arg("-pin-repeats").arg("3")
        .arg("-iter").arg("3")
        .arg("-threads").arg("1")
        .arg("-debug").arg("0")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out)?;
    let dog_line = contents.lines().find(|l| l.starts_with("dog ")).ok_or("dog not in vocabulary")?;
    let values: Vec<f32> = dog_line.split_whitespace().skip(1).map(|v| v.parse().unwrap()).collect();
    // "dog" is pinned on dimension 2 (animal mass) by the built-in table.
    assert!((values[2] - 0.147712).abs() < 1e-5, "dog's mass pin (dim 2) must stay fixed, got {}", values[2]);
    Ok(())
}

#[test]
fn classes_mode_outputs_one_cluster_id_per_word() -> StdResult {
    let dir = tempfile::tempdir()?;
    write_corpus(&dir)?;
    let out = dir.path().join("classes.txt");

    Command::cargo_bin("vecpin")?
        .arg("-train").arg(dir.path().join("corpus.txt"))
        .arg("-output").arg(&out)
        .arg("-size").arg("4")
        .arg("-min-count").arg("1")
        .arg("-classes").arg("3")
        .arg("-iter").arg("1")
        .arg("-threads").arg("1")
        .arg("-debug").arg("0")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out)?;
    for line in contents.lines() {
        let class: usize = line.rsplit(' ').next().ok_or("missing class id")?.parse()?;
        assert!(class < 3);
    }
    Ok(())
}

#[test]
fn save_and_read_vocab_round_trip_skips_relearning() -> StdResult {
    let dir = tempfile::tempdir()?;
    write_corpus(&dir)?;
    let vocab_path = dir.path().join("vocab.txt");
    let out1 = dir.path().join("vectors1.txt");

    Command::cargo_bin("vecpin")?
        .arg("-train").arg(dir.path().join("corpus.txt"))
        .arg("-output").arg(&out1)
        .arg("-save-vocab").arg(&vocab_path)
        .arg("-min-count").arg("1")
        .arg("-size").arg("4")
        .arg("-iter").arg("1")
        .arg("-debug").arg("0")
        .assert()
        .success();
    assert!(vocab_path.exists());

    let out2 = dir.path().join("vectors2.txt");
    Command::cargo_bin("vecpin")?
        .arg("-train").arg(dir.path().join("corpus.txt"))
        .arg("-output").arg(&out2)
        .arg("-read-vocab").arg(&vocab_path)
        .arg("-size").arg("4")
        .arg("-iter").arg("1")
        .arg("-debug").arg("0")
        .assert()
        .success();

    let (v1, _, _) = read_vectors(&out1)?;
    let (v2, _, _) = read_vectors(&out2)?;
    assert_eq!(v1, v2);
    Ok(())
}

#[test]
fn running_with_no_arguments_prints_usage_and_exits_successfully() -> StdResult {
    Command::cargo_bin("vecpin")?.assert().success();
    Ok(())
}

#[test]
fn disabling_hs_and_negative_leaves_syn0_unchanged_by_training() -> StdResult {
    let dir = tempfile::tempdir()?;
    write_corpus(&dir)?;

    let run = |iter: &str, out_name: &str| -> StdResult<std::path::PathBuf> {
        let out = dir.path().join(out_name);
        Command::cargo_bin("vecpin")?
            .arg("-train").arg(dir.path().join("corpus.txt"))
            .arg("-output").arg(&out)
            .arg("-size").arg("5")
            .arg("-min-count").arg("1")
            .arg("-hs").arg("0")
            .arg("-negative").arg("0")
            .arg("-sample").arg("0")
            .arg("-iter").arg(iter)
            .arg("-threads").arg("1")
            .arg("-binary").arg("1")
            .arg("-debug").arg("0")
            .assert()
            .success();
        Ok(out)
    };

    // With both update paths disabled, training is a no-op regardless of how
    // many passes run: the vectors after 1 iteration and after 5 must be the
    // same bytes as the untrained initialization.
    let out_one_pass = run("1", "one_pass.bin")?;
    let out_five_passes = run("5", "five_passes.bin")?;

    let bytes_one = std::fs::read(&out_one_pass)?;
    let bytes_five = std::fs::read(&out_five_passes)?;
    assert_eq!(bytes_one, bytes_five, "syn0 must not move when hs=0 and negative=0");
    Ok(())
}
