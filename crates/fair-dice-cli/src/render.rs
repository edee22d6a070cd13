//! Text rendering for the console.

use fair_dice_core::{
    Actor, GameOutcome, GameReport, NegotiationResult, ProbabilityMatrix, RoundPurpose,
};
use tabled::{builder::Builder, Style};

/// Win probability grid: rows are the user's die, columns the opponent's
pub fn probability_table(matrix: &ProbabilityMatrix, precision: usize) -> String {
    let mut builder = Builder::default();
    builder.set_columns(
        std::iter::once("User dice v".to_string()).chain(matrix.labels().iter().cloned()),
    );
    for (row, label) in matrix.labels().iter().enumerate() {
        builder.add_record(
            std::iter::once(label.clone())
                .chain((0..matrix.size()).map(|col| matrix.format_cell(row, col, precision))),
        );
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

pub fn commitment_line(purpose: RoundPurpose, max: u64, digest: &str) -> String {
    match purpose {
        RoundPurpose::FirstMove => format!(
            "Let's determine who makes the first move.\n\
             I selected a random value in the range 0..{max} (HMAC={digest}).\n\
             Try to guess my selection."
        ),
        RoundPurpose::UserRoll | RoundPurpose::ComputerRoll => format!(
            "It's time for the {purpose}.\n\
             I selected a random value in the range 0..{max} (HMAC={digest}).\n\
             Add your number modulo {}.",
            max + 1
        ),
    }
}

pub fn reveal_line(result: &NegotiationResult) -> String {
    let opening = format!("My selection: {} (KEY={}).", result.secret, result.key);
    match result.purpose {
        RoundPurpose::FirstMove => opening,
        RoundPurpose::UserRoll | RoundPurpose::ComputerRoll => format!(
            "{opening}\nThe fair number generation result is {} + {} = {} (mod {}).",
            result.secret, result.counterpart_value, result.value, result.range
        ),
    }
}

pub fn first_move_line(actor: Actor) -> &'static str {
    match actor {
        Actor::User => "You make the first move.",
        Actor::Computer => "I make the first move.",
    }
}

pub fn outcome_line(report: &GameReport) -> String {
    match report.outcome {
        GameOutcome::UserWins => format!(
            "You win ({} > {})!",
            report.user_face, report.computer_face
        ),
        GameOutcome::ComputerWins => format!(
            "I win ({} > {})!",
            report.computer_face, report.user_face
        ),
        GameOutcome::Draw => format!("Draw ({} = {}).", report.user_face, report.computer_face),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fair_dice_core::{Commitment, CommitmentKey, DiceSet, RoundId};

    fn classic() -> DiceSet {
        DiceSet::parse(["2,2,4,4,9,9", "1,1,6,6,8,8", "3,3,5,5,7,7"]).unwrap()
    }

    #[test]
    fn test_table_has_headers_and_diagonal_marker() {
        let table = probability_table(&classic().probability_matrix(), 4);

        assert!(table.contains("User dice v"));
        assert!(table.contains("[2,2,4,4,9,9]"));
        assert!(table.contains("[3,3,5,5,7,7]"));
        assert!(table.contains("0.5556"));
        assert!(table.contains("0.4444"));
        assert!(table.contains(" - "));
    }

    #[test]
    fn test_table_respects_precision() {
        let table = probability_table(&classic().probability_matrix(), 2);
        assert!(table.contains("0.56"));
        assert!(!table.contains("0.5556"));
    }

    #[test]
    fn test_reveal_line_shows_formula() {
        let key = CommitmentKey::from_bytes([0xaa; 32]);
        let result = NegotiationResult {
            round: RoundId::new(),
            purpose: RoundPurpose::UserRoll,
            commitment: Commitment::new(4, &key),
            secret: 4,
            key,
            counterpart_value: 5,
            range: 6,
            value: 3,
        };

        let line = reveal_line(&result);
        assert!(line.contains(&format!("KEY={}", "aa".repeat(32))));
        assert!(line.contains("4 + 5 = 3 (mod 6)"));
    }

    #[test]
    fn test_commitment_line_for_first_move() {
        let line = commitment_line(RoundPurpose::FirstMove, 1, "abc");
        assert!(line.contains("range 0..1"));
        assert!(line.contains("HMAC=abc"));
        assert!(line.contains("guess"));
    }
}
