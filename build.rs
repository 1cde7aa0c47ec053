//! Build script to embed the default word list
//!
//! Reads `data/wordlist.txt` and writes a const slice into `OUT_DIR` so the
//! binary works without any file on disk.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const SOURCE: &str = "data/wordlist.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR");

    embed_word_list(
        SOURCE,
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Default guess/answer word list, in tie-breaking order",
    );

    println!("cargo:rerun-if-changed={SOURCE}");
}

fn embed_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    let mut source = String::new();
    source.push_str(&format!("/// {doc_comment}\n"));
    source.push_str(&format!("pub const {const_name}: &[&str] = &[\n"));
    for word in &words {
        source.push_str(&format!("    \"{word}\",\n"));
    }
    source.push_str("];\n\n");
    source.push_str(&format!("/// Number of words in {const_name}\n"));
    source.push_str(&format!(
        "pub const {const_name}_COUNT: usize = {};\n",
        words.len()
    ));

    output
        .write_all(source.as_bytes())
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
