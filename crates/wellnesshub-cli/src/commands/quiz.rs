use clap::Subcommand;
use wellnesshub_core::Quiz;

#[derive(Subcommand)]
pub enum QuizAction {
    /// Print the stress profile quiz as JSON
    Show,
    /// Score a completed quiz
    Answer {
        /// Chosen option per question, 1-based, comma separated (e.g. 1,2,3,2,1)
        #[arg(long)]
        answers: String,
    },
}

pub fn run(action: QuizAction) -> Result<(), Box<dyn std::error::Error>> {
    let quiz = Quiz::stress_profile();

    match action {
        QuizAction::Show => {
            println!("{}", serde_json::to_string_pretty(&quiz)?);
        }
        QuizAction::Answer { answers } => {
            let choices = parse_answers(&answers)?;
            let outcome = quiz.score(&choices)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}

/// Parse "1,2,3" into zero-based option indexes.
fn parse_answers(raw: &str) -> Result<Vec<usize>, Box<dyn std::error::Error>> {
    let mut choices = Vec::new();
    for part in raw.split(',') {
        let number: usize = part.trim().parse().map_err(|_| {
            format!("invalid answer '{}': expected a number", part.trim())
        })?;
        if number == 0 {
            return Err("answers are numbered from 1".into());
        }
        choices.push(number - 1);
    }
    Ok(choices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_are_one_based() {
        assert_eq!(parse_answers("1,2,3").unwrap(), vec![0, 1, 2]);
        assert_eq!(parse_answers(" 4 , 1 ").unwrap(), vec![3, 0]);
        assert!(parse_answers("0,1").is_err());
        assert!(parse_answers("one").is_err());
    }
}
