//! Build script to generate embedded word lists
//!
//! Reads the bundled word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LISTS: &[(&str, &str, &str, &str)] = &[
    (
        "data/4letters.txt",
        "four_letters.rs",
        "FOUR_LETTERS",
        "Bundled four letter words",
    ),
    (
        "data/5letters.txt",
        "five_letters.rs",
        "FIVE_LETTERS",
        "Bundled five letter words",
    ),
    (
        "data/6letters.txt",
        "six_letters.rs",
        "SIX_LETTERS",
        "Bundled six letter words",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for &(input, output, const_name, doc_comment) in LISTS {
        generate_word_list(
            input,
            &Path::new(&out_dir).join(output),
            const_name,
            doc_comment,
        );
        println!("cargo:rerun-if-changed={input}");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} words)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
