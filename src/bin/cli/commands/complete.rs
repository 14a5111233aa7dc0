use anyhow::Result;

use dsaflow_lib::packets::{ChallengeContent, PacketContent, PACKETS_PER_CONCEPT};
use dsaflow_lib::progress::CompletionOutcome;

use crate::app::App;
use crate::render::terminal::{self, paint, Color};
use crate::OutputFormat;

/// Map an option letter ("b") to the option text; anything else is taken as typed
fn resolve_answer<'a>(challenge: &'a ChallengeContent, answer: &'a str) -> &'a str {
    let trimmed = answer.trim();
    let mut chars = trimmed.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        if letter.is_ascii_alphabetic() {
            let index = (letter.to_ascii_lowercase() as u8 - b'a') as usize;
            if let Some(option) = challenge.options.get(index) {
                return option;
            }
        }
    }
    trimmed
}

/// "3 of 5 for arrays"
fn concept_progress(completed_in_concept: usize, concept_id: &str) -> String {
    format!("{} of {} for {}", completed_in_concept, PACKETS_PER_CONCEPT, concept_id)
}

pub fn run(
    app: &mut App,
    packet_query: &str,
    answer: Option<&str>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let packet = app.find_packet(packet_query)?;

    let answer_check = match (&packet.content, answer) {
        (PacketContent::Challenge(challenge), Some(answer)) => {
            let answer = resolve_answer(challenge, answer);
            Some((challenge, answer, challenge.is_correct(answer)))
        }
        _ => None,
    };

    let outcome = app.session.complete_packet(packet.id, packet.concept_id);
    app.save_progress()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "packet": packet.id,
                "correct": answer_check.map(|(_, _, correct)| correct),
                "result": outcome,
                "summary": app.session.tracker().summary(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if let Some((challenge, answer, _)) = answer_check {
                println!("{}", terminal::render_answer(challenge, answer, use_color));
                println!();
            }

            match &outcome {
                CompletionOutcome::AlreadyCompleted => {
                    println!("{} was already completed.", packet.id);
                }
                CompletionOutcome::Recorded { completed_in_concept } => {
                    println!(
                        "{} {} ({})",
                        paint("Completed", Color::GREEN, use_color),
                        packet.id,
                        concept_progress(*completed_in_concept, packet.concept_id)
                    );
                }
                CompletionOutcome::ConceptCompleted {
                    concept_id,
                    next_concept_id,
                } => {
                    let next_name = app
                        .graph()
                        .lookup(next_concept_id)
                        .map_or(next_concept_id.as_str(), |n| n.name);
                    println!(
                        "{}",
                        paint(&format!("Concept {} mastered!", concept_id), Color::BOLD, use_color)
                    );
                    println!("Next up: {}", next_name);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHALLENGE: ChallengeContent = ChallengeContent {
        question: "Index 3 of [2, 4, 6, 8, 10]?",
        options: &["6", "8", "4", "10"],
        correct: "8",
        explanation: "",
    };

    #[test]
    fn test_resolve_answer() {
        assert_eq!(resolve_answer(&CHALLENGE, "b"), "8");
        assert_eq!(resolve_answer(&CHALLENGE, " B "), "8");
        assert_eq!(resolve_answer(&CHALLENGE, "10"), "10");
        assert_eq!(resolve_answer(&CHALLENGE, "z"), "z");
    }

    #[test]
    fn test_concept_progress_counts_against_packets_per_concept() {
        assert_eq!(
            concept_progress(2, "arrays"),
            format!("2 of {} for arrays", PACKETS_PER_CONCEPT)
        );
    }
}
