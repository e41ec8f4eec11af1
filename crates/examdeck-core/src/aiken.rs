//! Aiken text-format parser.
//!
//! Converts raw multi-line text into an ordered sequence of [`Question`]
//! records, tolerating minor formatting variance. The parser is lenient and
//! has no error channel: malformed blocks degrade to partially-populated
//! records, and validation is a caller concern (see [`validate_questions`]).

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::model::{OptionKey, Question};

/// Classification of a single non-blank input line.
///
/// Lines are classified by an ordered list of predicates, first match wins:
/// question start, then option line, then answer line, then ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A line ending in `?` that is not an option or answer line.
    QuestionStart(&'a str),
    /// A line starting with `A)`, `B)`, `C)`, or `D)`.
    Option(OptionKey, &'a str),
    /// A line starting with `ANSWER:`. The payload is the raw trimmed text
    /// after the marker, which may or may not be a valid letter.
    Answer(&'a str),
    /// Anything else. Ignored without error.
    Ignored,
}

/// Classify one trimmed, non-blank line.
pub fn classify_line(line: &str) -> LineClass<'_> {
    let option_prefix = [
        (OptionKey::A, "A)"),
        (OptionKey::B, "B)"),
        (OptionKey::C, "C)"),
        (OptionKey::D, "D)"),
    ]
    .into_iter()
    .find(|(_, prefix)| line.starts_with(prefix));

    if line.ends_with('?') && option_prefix.is_none() && !line.starts_with("ANSWER:") {
        return LineClass::QuestionStart(line);
    }
    if let Some((key, prefix)) = option_prefix {
        return LineClass::Option(key, line[prefix.len()..].trim());
    }
    if let Some(rest) = line.strip_prefix("ANSWER:") {
        return LineClass::Answer(rest.trim());
    }
    LineClass::Ignored
}

/// In-progress question accumulated while folding over classified lines.
struct QuestionBuilder {
    text: String,
    options: BTreeMap<OptionKey, String>,
    correct: Option<OptionKey>,
}

impl QuestionBuilder {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            options: BTreeMap::new(),
            correct: None,
        }
    }

    fn finish(self, id: u32) -> Question {
        Question {
            id,
            text: self.text,
            options: self.options,
            correct: self.correct,
        }
    }
}

/// Parse Aiken-format text into an ordered sequence of questions.
///
/// Blank and whitespace-only lines are discarded before classification. A
/// question is emitted once its terminator is reached: either the start of
/// the next question or the end of input. Empty input yields an empty
/// sequence, not an error. Question ids are assigned sequentially from 1 in
/// emission order.
pub fn parse_aiken(text: &str) -> Vec<Question> {
    let mut questions = Vec::new();
    let mut current: Option<QuestionBuilder> = None;

    let mut emit = |builder: Option<QuestionBuilder>, questions: &mut Vec<Question>| {
        if let Some(b) = builder {
            let id = questions.len() as u32 + 1;
            questions.push(b.finish(id));
        }
    };

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match classify_line(line) {
            LineClass::QuestionStart(prompt) => {
                emit(current.take(), &mut questions);
                current = Some(QuestionBuilder::new(prompt));
            }
            LineClass::Option(key, option_text) => {
                // Option lines before any question start are dropped.
                if let Some(b) = current.as_mut() {
                    b.options.insert(key, option_text.to_string());
                }
            }
            LineClass::Answer(payload) => {
                if let Some(b) = current.as_mut() {
                    b.correct = OptionKey::from_str(payload).ok();
                }
            }
            LineClass::Ignored => {
                tracing::debug!("ignoring unclassified line: {line}");
            }
        }
    }

    emit(current.take(), &mut questions);
    questions
}

/// Read a `.txt` file and parse its contents as Aiken format.
///
/// Only `.txt` files are accepted; content is assumed UTF-8.
pub fn parse_aiken_file(path: &Path) -> Result<Vec<Question>> {
    let is_txt = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if !is_txt {
        anyhow::bail!(
            "only .txt files with Aiken format are accepted: {}",
            path.display()
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read Aiken file: {}", path.display()))?;
    Ok(parse_aiken(&content))
}

/// Serialize questions back to canonical Aiken text.
///
/// Inverse of [`parse_aiken`] for well-formed input: options are written in
/// letter order and questions are separated by blank lines. Missing options
/// and missing answer markers are simply omitted.
pub fn to_aiken(questions: &[Question]) -> String {
    let mut out = String::new();
    for (i, q) in questions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&q.text);
        out.push('\n');
        for key in OptionKey::ALL {
            if let Some(text) = q.options.get(&key) {
                out.push_str(&format!("{key}) {text}\n"));
            }
        }
        if let Some(correct) = q.correct {
            out.push_str(&format!("ANSWER: {correct}\n"));
        }
    }
    out
}

/// A warning from question validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Id of the question the warning applies to.
    pub question_id: u32,
    /// Warning message.
    pub message: String,
}

/// Validate parsed questions for common authoring issues.
///
/// The parser never rejects malformed records; this pass surfaces what it
/// silently tolerated so a caller can warn the user.
pub fn validate_questions(questions: &[Question]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for q in questions {
        let missing: Vec<String> = OptionKey::ALL
            .iter()
            .filter(|key| !q.options.contains_key(key))
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            warnings.push(ValidationWarning {
                question_id: q.id,
                message: format!("missing option(s): {}", missing.join(", ")),
            });
        }

        match q.correct {
            None => warnings.push(ValidationWarning {
                question_id: q.id,
                message: "no ANSWER: line (or unrecognized answer letter)".into(),
            }),
            Some(key) if !q.options.contains_key(&key) => {
                warnings.push(ValidationWarning {
                    question_id: q.id,
                    message: format!("ANSWER: {key} refers to a missing option"),
                });
            }
            Some(_) => {}
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "¿Cuál es la capital de España?
A) Barcelona
B) Madrid
C) Valencia
D) Sevilla
ANSWER: B
";

    const TWO_QUESTIONS: &str = "¿Cuál es la capital de España?
A) Barcelona
B) Madrid
C) Valencia
D) Sevilla
ANSWER: B

¿En qué año se descubrió América?
A) 1491
B) 1492
C) 1493
D) 1494
ANSWER: B
";

    #[test]
    fn classify_precedence() {
        assert_eq!(
            classify_line("What is Rust?"),
            LineClass::QuestionStart("What is Rust?")
        );
        // An option line ending in '?' is still an option line.
        assert_eq!(
            classify_line("A) Is it this?"),
            LineClass::Option(OptionKey::A, "Is it this?")
        );
        assert_eq!(classify_line("ANSWER: B"), LineClass::Answer("B"));
        // An answer line ending in '?' is still an answer line.
        assert_eq!(classify_line("ANSWER: B?"), LineClass::Answer("B?"));
        assert_eq!(classify_line("some stray note"), LineClass::Ignored);
    }

    #[test]
    fn parse_well_formed_sample() {
        let questions = parse_aiken(SAMPLE);
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.id, 1);
        assert_eq!(q.text, "¿Cuál es la capital de España?");
        assert_eq!(q.options.len(), 4);
        assert_eq!(q.options.get(&OptionKey::B).unwrap(), "Madrid");
        assert_eq!(q.correct, Some(OptionKey::B));
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse_aiken("").is_empty());
        assert!(parse_aiken("\n\n   \n\t\n").is_empty());
    }

    #[test]
    fn parse_two_question_blocks() {
        let questions = parse_aiken(TWO_QUESTIONS);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[1].id, 2);
        assert_eq!(questions[0].text, "¿Cuál es la capital de España?");
        assert_eq!(questions[1].text, "¿En qué año se descubrió América?");
        assert_eq!(questions[1].options.get(&OptionKey::A).unwrap(), "1491");
        assert_eq!(questions[1].correct, Some(OptionKey::B));
    }

    #[test]
    fn parse_missing_answer_is_lenient() {
        let input = "Is this emitted anyway?\nA) yes\nB) no\n";
        let questions = parse_aiken(input);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct, None);
        assert_eq!(questions[0].options.len(), 2);
    }

    #[test]
    fn parse_invalid_answer_letter_left_unset() {
        let input = "Which one?\nA) this\nB) that\nANSWER: X\n";
        let questions = parse_aiken(input);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct, None);
    }

    #[test]
    fn parse_ignores_stray_lines_and_leading_options() {
        let input = "A) orphan option\nANSWER: C\nnot a question line\nReal question?\nB) kept\n";
        let questions = parse_aiken(input);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "Real question?");
        assert_eq!(questions[0].options.len(), 1);
        assert_eq!(questions[0].options.get(&OptionKey::B).unwrap(), "kept");
        assert_eq!(questions[0].correct, None);
    }

    #[test]
    fn answer_overwrites_previous_marker() {
        let input = "Which one?\nA) this\nANSWER: A\nANSWER: B\nB) that\n";
        let questions = parse_aiken(input);
        assert_eq!(questions[0].correct, Some(OptionKey::B));
    }

    #[test]
    fn roundtrip_through_aiken_text() {
        let questions = parse_aiken(TWO_QUESTIONS);
        let text = to_aiken(&questions);
        let reparsed = parse_aiken(&text);
        assert_eq!(reparsed, questions);
    }

    #[test]
    fn file_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exam.pdf");
        std::fs::write(&path, SAMPLE).unwrap();
        assert!(parse_aiken_file(&path).is_err());

        let ok_path = dir.path().join("exam.txt");
        std::fs::write(&ok_path, SAMPLE).unwrap();
        let questions = parse_aiken_file(&ok_path).unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn validate_flags_missing_pieces() {
        let input = "Complete question?\nA) a\nB) b\nC) c\nD) d\nANSWER: B\n\nSparse question?\nA) only one\n";
        let questions = parse_aiken(input);
        let warnings = validate_questions(&questions);

        assert!(warnings.iter().all(|w| w.question_id == 2));
        assert!(warnings.iter().any(|w| w.message.contains("missing option")));
        assert!(warnings.iter().any(|w| w.message.contains("ANSWER")));
    }

    #[test]
    fn validate_flags_dangling_answer() {
        let input = "Dangling?\nA) a\nANSWER: D\n";
        let questions = parse_aiken(input);
        let warnings = validate_questions(&questions);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("refers to a missing option")));
    }

    #[test]
    fn validate_clean_input_has_no_warnings() {
        let questions = parse_aiken(SAMPLE);
        assert!(validate_questions(&questions).is_empty());
    }
}
