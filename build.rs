//! Build script to generate the embedded word bank
//!
//! Reads the tab-separated word bank and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_bank(
        "data/words.tsv",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Embedded word bank entries as (category, difficulty, word, hint)",
    );

    // Rebuild if the word bank changes
    println!("cargo:rerun-if-changed=data/words.tsv");
}

fn generate_word_bank(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<Vec<&str>> = content
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        // Split before trimming so an empty trailing hint stays a field
        .map(|line| line.splitn(4, '\t').map(str::trim).collect())
        .collect();

    for (i, fields) in entries.iter().enumerate() {
        assert!(
            fields.len() == 4,
            "{input_path}: entry {} has {} fields, expected 4",
            i + 1,
            fields.len()
        );
    }

    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word bank").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str, &str, &str)] = &[").unwrap();

    for fields in entries {
        // Debug formatting of &str yields a valid Rust string literal
        writeln!(
            output,
            "    ({:?}, {:?}, {:?}, {:?}),",
            fields[0], fields[1], fields[2], fields[3]
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
