//! Aggregate statistics over the stored match history

use crate::storage::{MatchOutcome, Storage, StorageError};

/// Lifetime totals shown on the menu screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub games: u32,
    pub human_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
    pub best_score: Option<u32>,
}

impl Summary {
    /// One-line rendering for the menu footer.
    pub fn line(&self) -> String {
        if self.games == 0 {
            return "No games recorded yet".to_string();
        }
        let mut line = format!(
            "{} games played, {} won, {} lost",
            self.games, self.human_wins, self.opponent_wins
        );
        if self.draws > 0 {
            line.push_str(&format!(", {} drawn", self.draws));
        }
        if let Some(best) = self.best_score {
            line.push_str(&format!(", best score {}", best));
        }
        line
    }
}

/// Compute lifetime totals from the database.
pub fn summary(storage: &Storage) -> Result<Summary, StorageError> {
    Ok(Summary {
        games: storage.match_count()?,
        human_wins: storage.outcome_count(MatchOutcome::HumanWin)?,
        opponent_wins: storage.outcome_count(MatchOutcome::OpponentWin)?,
        draws: storage.outcome_count(MatchOutcome::Draw)?,
        best_score: storage.best_human_score()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MatchRecord;

    #[test]
    fn test_empty_history() {
        let storage = Storage::open_in_memory().unwrap();
        let summary = summary(&storage).unwrap();
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.line(), "No games recorded yet");
    }

    #[test]
    fn test_totals_add_up() {
        let storage = Storage::open_in_memory().unwrap();
        storage.record_match(&MatchRecord::new(42, 17, 6)).unwrap();
        storage.record_match(&MatchRecord::new(10, 30, 4)).unwrap();
        storage.record_match(&MatchRecord::new(20, 20, 5)).unwrap();

        let summary = summary(&storage).unwrap();
        assert_eq!(summary.games, 3);
        assert_eq!(summary.human_wins, 1);
        assert_eq!(summary.opponent_wins, 1);
        assert_eq!(summary.draws, 1);
        assert_eq!(summary.best_score, Some(42));
        assert_eq!(
            summary.line(),
            "3 games played, 1 won, 1 lost, 1 drawn, best score 42"
        );
    }
}
