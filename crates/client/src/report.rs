//! Human-readable round log.

use game_content::MoveCatalog;
use game_core::{Outcome, Side};
use runtime::{MatchStatus, RoundReport, Selection};

/// One line per round: both choices, both outcomes, and health afterwards.
pub fn round_line(report: &RoundReport, catalog: &MoveCatalog) -> String {
    let voided = |side: Side| {
        !matches!(report.exchange.by(side), Outcome::NoAttack)
            && !report.applied.iter().any(|applied| applied.attacker == side)
    };

    format!(
        "round {:>3} | player {:<38} {:<12} | opponent {:<38} {:<12} | hp {:>6.1} / {:>6.1}",
        report.round,
        choice(report.player, catalog),
        outcome(report.exchange.player, voided(Side::Player)),
        choice(report.opponent, catalog),
        outcome(report.exchange.opponent, voided(Side::Opponent)),
        report.player_health.current,
        report.opponent_health.current,
    )
}

pub fn summary_line(report: &RoundReport) -> String {
    match report.status {
        MatchStatus::Finished {
            winner: Some(winner),
        } => format!("{} wins after {} rounds", winner, report.round),
        MatchStatus::Finished { winner: None } => format!("draw after {} rounds", report.round),
        MatchStatus::InProgress => format!("in progress after {} rounds", report.round),
    }
}

fn choice(selection: Selection, catalog: &MoveCatalog) -> String {
    let attack = selection
        .attack
        .and_then(|i| catalog.attacks().get(i))
        .map_or("-", |a| a.id.as_str());
    let defense = selection
        .defense
        .and_then(|i| catalog.defenses().get(i))
        .map_or("-", |d| d.id.as_str());
    format!("{} / {}", attack, defense)
}

fn outcome(outcome: Outcome, voided: bool) -> String {
    if voided {
        return "voided".to_string();
    }
    match outcome {
        Outcome::Damage(amount) | Outcome::Kill(amount) => {
            format!("{} {:.1}", outcome.as_str(), amount)
        }
        _ => outcome.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Exchange, Health};
    use runtime::AppliedOutcome;

    fn report(
        exchange: Exchange,
        applied: Vec<AppliedOutcome>,
        status: MatchStatus,
    ) -> RoundReport {
        RoundReport {
            round: 4,
            player: Selection::new(Some(0), None),
            opponent: Selection::attack(1),
            exchange,
            applied,
            player_health: Health::full(100.0),
            opponent_health: Health { current: 0.0, max: 100.0 },
            status,
        }
    }

    #[test]
    fn round_line_names_moves_and_marks_voided_replies() {
        let catalog = game_content::MoveLoader::embedded().unwrap();
        let exchange = Exchange {
            player: Outcome::Kill(25.0),
            opponent: Outcome::Damage(10.0),
            first_striker: Some(Side::Player),
        };
        let applied = vec![AppliedOutcome {
            attacker: Side::Player,
            outcome: exchange.player,
        }];
        let line = round_line(
            &report(exchange, applied, MatchStatus::Finished { winner: Some(Side::Player) }),
            &catalog,
        );

        assert!(line.contains(catalog.attacks()[0].id.as_str()));
        assert!(line.contains(catalog.attacks()[1].id.as_str()));
        assert!(line.contains("kill 25.0"));
        assert!(line.contains("voided"));
    }

    #[test]
    fn summary_line_reports_draws() {
        let exchange = Exchange {
            player: Outcome::NoAttack,
            opponent: Outcome::NoAttack,
            first_striker: None,
        };
        let finished = MatchStatus::Finished { winner: None };
        let line = summary_line(&report(exchange, Vec::new(), finished));
        assert_eq!(line, "draw after 4 rounds");
    }
}
