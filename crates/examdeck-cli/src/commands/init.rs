//! The `examdeck init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create examdeck.toml
    if std::path::Path::new("examdeck.toml").exists() {
        println!("examdeck.toml already exists, skipping.");
    } else {
        std::fs::write("examdeck.toml", SAMPLE_CONFIG)?;
        println!("Created examdeck.toml");
    }

    // Create example exam file
    std::fs::create_dir_all("exams")?;
    let sample_path = std::path::Path::new("exams/sample.txt");
    if sample_path.exists() {
        println!("exams/sample.txt already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_EXAM)?;
        println!("Created exams/sample.txt");
    }

    println!("\nNext steps:");
    println!("  1. Run: examdeck validate exams/sample.txt");
    println!("  2. Run: examdeck import exams/sample.txt --name \"European Capitals\"");
    println!("  3. Run: examdeck practice \"European Capitals\"");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# examdeck configuration

# Where exams and attempt history are stored. Supports ${VAR} references.
data_dir = "./examdeck-data"

# Simulated latency of the mock generation and auth backends.
mock_latency_ms = 500

# Defaults for `examdeck generate`.
default_question_count = 20
default_difficulty = "medium"
"#;

const SAMPLE_EXAM: &str = "What is the capital of France?
A) Berlin
B) Madrid
C) Paris
D) Rome
ANSWER: C

What is the capital of Spain?
A) Madrid
B) Lisbon
C) Seville
D) Barcelona
ANSWER: A

Which river flows through London?
A) Seine
B) Thames
C) Danube
D) Rhine
ANSWER: B

What is the capital of Italy?
A) Milan
B) Naples
C) Venice
D) Rome
ANSWER: D

Which country has Vienna as its capital?
A) Austria
B) Switzerland
C) Hungary
D) Germany
ANSWER: A
";
