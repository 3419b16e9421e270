use serde::Serialize;

/// Separator between a multiple-choice prompt and its options.
const OPTION_SEPARATOR: char = '|';
/// Separator between a plain prompt and its true/false flag.
const FLAG_SEPARATOR: &str = " = ";
/// Prefix marking the correct multiple-choice option.
const CORRECT_MARKER: char = '*';
/// Lines starting with this are comments.
const COMMENT_PREFIX: char = '#';

/// A single trivia prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    /// Free-form prompt, optionally flagged true or false.
    Plain {
        prompt: String,
        answer: Option<bool>,
    },

    /// Prompt with a list of options; `correct` indexes into `options`.
    MultipleChoice {
        prompt: String,
        options: Vec<String>,
        correct: Option<usize>,
    },
}

impl Question {
    /// Build a question from one line of a question file.
    ///
    /// Accepted shapes:
    ///
    /// * `prompt`
    /// * `prompt = true` / `prompt = false`
    /// * `prompt | option | *correct option | option`
    ///
    /// Returns `None` for blank lines and `#` comments.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return None;
        }

        if let Some(question) = parse_multiple_choice(line) {
            return Some(question);
        }

        if let Some((prompt, flag)) = line.rsplit_once(FLAG_SEPARATOR) {
            let prompt = prompt.trim();
            if !prompt.is_empty() {
                match flag.trim().to_lowercase().as_str() {
                    "true" => return Some(Self::plain(prompt, Some(true))),
                    "false" => return Some(Self::plain(prompt, Some(false))),
                    _ => {}
                }
            }
        }

        Some(Self::plain(line, None))
    }

    fn plain(prompt: &str, answer: Option<bool>) -> Self {
        Self::Plain {
            prompt: prompt.to_string(),
            answer,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Self::Plain { prompt, .. } | Self::MultipleChoice { prompt, .. } => prompt,
        }
    }

    /// Text shown to a player. Options are numbered from 1.
    pub fn render(&self) -> String {
        match self {
            Self::Plain { prompt, .. } => prompt.clone(),
            Self::MultipleChoice {
                prompt, options, ..
            } => {
                let mut text = prompt.clone();
                for (i, option) in options.iter().enumerate() {
                    text.push_str(&format!("\n  {}) {}", i + 1, option));
                }
                text
            }
        }
    }
}

fn parse_multiple_choice(line: &str) -> Option<Question> {
    let mut parts = line.split(OPTION_SEPARATOR).map(str::trim);
    let prompt = parts.next()?;
    if prompt.is_empty() {
        return None;
    }

    let mut options = Vec::new();
    let mut correct = None;
    for part in parts.filter(|p| !p.is_empty()) {
        match part.strip_prefix(CORRECT_MARKER) {
            Some(option) => {
                if correct.is_none() {
                    correct = Some(options.len());
                }
                options.push(option.trim().to_string());
            }
            None => options.push(part.to_string()),
        }
    }

    if options.len() < 2 {
        return None;
    }

    Some(Question::MultipleChoice {
        prompt: prompt.to_string(),
        options,
        correct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_and_comment_lines() {
        assert_eq!(Question::parse_line(""), None);
        assert_eq!(Question::parse_line("   \t"), None);
        assert_eq!(Question::parse_line("# not a question"), None);
    }

    #[test]
    fn test_plain_prompt() {
        let q = Question::parse_line("What is the capital of France?\n").unwrap();
        assert_eq!(
            q,
            Question::Plain {
                prompt: "What is the capital of France?".to_string(),
                answer: None,
            }
        );
        assert_eq!(q.render(), "What is the capital of France?");
    }

    #[test]
    fn test_plain_prompt_with_flag() {
        let q = Question::parse_line("The sun is a star = TRUE").unwrap();
        assert_eq!(q.prompt(), "The sun is a star");
        assert!(matches!(q, Question::Plain { answer: Some(true), .. }));

        let q = Question::parse_line("Bats are birds = false").unwrap();
        assert!(matches!(q, Question::Plain { answer: Some(false), .. }));

        // Unknown flag keeps the whole line as the prompt.
        let q = Question::parse_line("2 + 2 = 4").unwrap();
        assert_eq!(q.prompt(), "2 + 2 = 4");
        assert!(matches!(q, Question::Plain { answer: None, .. }));
    }

    #[test]
    fn test_multiple_choice() {
        let q = Question::parse_line("Largest planet? | Mars | *Jupiter | Venus").unwrap();
        assert_eq!(
            q,
            Question::MultipleChoice {
                prompt: "Largest planet?".to_string(),
                options: vec![
                    "Mars".to_string(),
                    "Jupiter".to_string(),
                    "Venus".to_string()
                ],
                correct: Some(1),
            }
        );
        assert_eq!(q.render(), "Largest planet?\n  1) Mars\n  2) Jupiter\n  3) Venus");
    }

    #[test]
    fn test_single_option_falls_back_to_plain() {
        let q = Question::parse_line("Either | or").unwrap();
        assert_eq!(q.prompt(), "Either | or");
        assert!(matches!(q, Question::Plain { .. }));
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let q = Question::parse_line("Pick one | a | b").unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"kind\":\"multiple_choice\""));
    }
}
