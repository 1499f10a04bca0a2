use crate::character::battle::BattleRegistry;
use crate::character::Character;

pub const WIN_POINTS: u32 = 5;
pub const LOSS_POINTS: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub opponent_name: String,
    pub won: bool,
    pub points: u32
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Score {
    pub character_name: String,
    pub entries: Vec<ScoreEntry>,
    pub total: u32
}

/*
    Scores every battle the character fought: a win is worth 5, anything else 2.
 */
pub fn score_for(character: &Character, registry: &BattleRegistry) -> Score {
    let character_id = character.get_id();
    let entries: Vec<ScoreEntry> = registry.records_for(character)
        .map(|record| {
            let won = record.was_won_by(character_id);
            let points = if won { WIN_POINTS } else { LOSS_POINTS };
            let opponent_name = record.opponent_name_of(character_id).unwrap_or_default().to_string();
            ScoreEntry { opponent_name, won, points }
        })
        .collect();
    let total = entries.iter().map(|e| e.points).sum();
    Score { character_name: character.get_name().to_string(), entries, total }
}
