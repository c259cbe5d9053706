//! Self-assessment quizzes.
//!
//! A quiz is a list of questions with scored options and a list of result
//! brackets. Scoring sums the chosen option scores and matches the total
//! against the first bracket whose upper bound covers it. Quizzes are
//! informational only and nothing about a run is persisted.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One answer option with its score contribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub score: u32,
}

/// One quiz question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// A result bracket: matched when the total score is at most `max_score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultBracket {
    pub max_score: u32,
    pub profile: String,
    pub description: String,
}

/// A complete quiz definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub title: String,
    pub disclaimer: String,
    pub questions: Vec<Question>,
    pub results: Vec<ResultBracket>,
}

/// The outcome of a completed quiz run.
#[derive(Debug, Clone, Serialize)]
pub struct QuizOutcome {
    pub total_score: u32,
    pub profile: String,
    pub description: String,
}

impl Quiz {
    /// Score a complete set of answers, one option index per question.
    ///
    /// # Errors
    /// Returns an error when the answer count doesn't match the question
    /// count or an option index is out of range for its question.
    pub fn score(&self, answers: &[usize]) -> Result<QuizOutcome, ValidationError> {
        if answers.len() != self.questions.len() {
            return Err(ValidationError::AnswerCount {
                expected: self.questions.len(),
                got: answers.len(),
            });
        }
        let mut total_score = 0;
        for (question_idx, (&choice, question)) in
            answers.iter().zip(&self.questions).enumerate()
        {
            let option = question.options.get(choice).ok_or(
                ValidationError::OptionOutOfRange {
                    question: question_idx + 1,
                    index: choice,
                },
            )?;
            total_score += option.score;
        }
        let bracket = self
            .result_for(total_score)
            .ok_or_else(|| ValidationError::EmptyCollection("quiz results".to_string()))?;
        Ok(QuizOutcome {
            total_score,
            profile: bracket.profile.clone(),
            description: bracket.description.clone(),
        })
    }

    /// The first bracket whose upper bound covers `total`, falling back to
    /// the last bracket when the total exceeds all bounds. Bounds are
    /// inclusive, so a total of exactly `max_score` matches that bracket.
    pub fn result_for(&self, total: u32) -> Option<&ResultBracket> {
        self.results
            .iter()
            .find(|bracket| total <= bracket.max_score)
            .or_else(|| self.results.last())
    }

    /// The built-in stress profile quiz.
    pub fn stress_profile() -> Self {
        fn question(text: &str, options: [(&str, u32); 4]) -> Question {
            Question {
                text: text.to_string(),
                options: options
                    .iter()
                    .map(|&(text, score)| AnswerOption {
                        text: text.to_string(),
                        score,
                    })
                    .collect(),
            }
        }
        fn bracket(max_score: u32, profile: &str, description: &str) -> ResultBracket {
            ResultBracket {
                max_score,
                profile: profile.to_string(),
                description: description.to_string(),
            }
        }

        Quiz {
            title: "What's Your Stress Profile?".to_string(),
            disclaimer: "This is not a diagnostic tool. It's for informational purposes only."
                .to_string(),
            questions: vec![
                question(
                    "How often do you feel overwhelmed by your responsibilities?",
                    [
                        ("Rarely or never", 1),
                        ("Sometimes", 2),
                        ("Often", 3),
                        ("Almost always", 4),
                    ],
                ),
                question(
                    "How well do you sleep at night?",
                    [
                        ("Very well, I feel rested", 1),
                        ("Fairly well, with some interruptions", 2),
                        ("Poorly, I often wake up tired", 3),
                        ("Very poorly, I struggle with insomnia", 4),
                    ],
                ),
                question(
                    "How often do you experience physical symptoms of stress (e.g., headaches, stomach issues)?",
                    [
                        ("Rarely", 1),
                        ("Occasionally", 2),
                        ("Frequently", 3),
                        ("Daily", 4),
                    ],
                ),
                question(
                    "How easily do you get irritated or angered?",
                    [
                        ("Not easily at all", 1),
                        ("Sometimes", 2),
                        ("Fairly easily", 3),
                        ("Very easily", 4),
                    ],
                ),
                question(
                    "How much time do you make for relaxing activities you enjoy?",
                    [
                        ("Plenty of time", 1),
                        ("Some time, but not enough", 2),
                        ("Very little time", 3),
                        ("Almost no time", 4),
                    ],
                ),
            ],
            results: vec![
                bracket(
                    5,
                    "Low Stress",
                    "You seem to have a good handle on your stress levels. Keep up the great work with your healthy coping strategies!",
                ),
                bracket(
                    10,
                    "Mild Stress",
                    "You're experiencing some stress, which is normal. It might be helpful to incorporate more relaxation techniques into your routine.",
                ),
                bracket(
                    15,
                    "Moderate Stress",
                    "Your stress levels are notable. It's important to actively manage this through self-care, and consider exploring new coping strategies.",
                ),
                bracket(
                    20,
                    "High Stress",
                    "Your stress levels are high and may be impacting your well-being. Prioritizing stress management is crucial. Consider talking to a professional for support.",
                ),
            ],
        }
    }
}
