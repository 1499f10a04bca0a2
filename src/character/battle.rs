use std::io;

use uuid::Uuid;

use crate::character::Character;
use crate::engine::combat::{Round, Side};
use crate::engine::random::RandomSource;
use crate::view::BattlePresenter;

/*
    A complete fight between two characters, from start to finish.
    Both characters are borrowed for the length of the fight, once it's over the Battle can be archived as a BattleRecord.
 */
pub struct Battle<'a> {
    id: Uuid,
    player: &'a mut Character,
    opponent: &'a mut Character,
    rounds: Vec<Round>,
    finished: bool
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleSummary {
    pub player_name: String,
    pub opponent_name: String,
    pub round_count: usize,
    pub winner: Option<Side>,
    pub winner_name: Option<String>
}

impl<'a> Battle<'a> {
    pub fn new(player: &'a mut Character, opponent: &'a mut Character) -> Battle<'a> {
        let id = Uuid::new_v4();
        if player.is_dead() || opponent.is_dead() {
            log::warn!("Starting battle {} with a dead combatant: {} vs {}", id, player, opponent);
        }
        player.add_battle(id);
        opponent.add_battle(id);
        log::info!("Battle {} started: {} vs {}", id, player, opponent);
        Battle { id, player, opponent, rounds: Vec::new(), finished: false }
    }

    pub fn get_id(&self) -> Uuid {
        self.id
    }

    pub fn get_player(&self) -> &Character {
        self.player
    }

    pub fn get_opponent(&self) -> &Character {
        self.opponent
    }

    pub fn get_rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn last_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn winner(&self) -> Option<Side> {
        self.last_round().filter(|round| round.is_final()).and_then(|round| round.winner())
    }

    /*
        Runs the whole fight until a round is final.
        When confirmation is required the presenter is waited on after every round and once more after the outcome.
        Returns the number of rounds fought, a finished battle fights none.
     */
    pub fn run_fight(&mut self, rng: &mut (impl RandomSource + ?Sized), presenter: &mut (impl BattlePresenter + ?Sized),
                     require_confirmation: bool) -> Result<usize, io::Error> {
        if self.finished {
            log::warn!("Battle {} is already finished, not fighting again.", self.id);
            return Ok(0);
        }

        let mut round_count = 0;
        while !self.finished {
            self.fight_round(rng, true);
            round_count += 1;
            if let Some(round) = self.rounds.last() {
                presenter.show_round(&round.summary(self.player, self.opponent))?;
            }
            if require_confirmation {
                presenter.wait_for_confirmation()?;
            }
        }

        presenter.show_outcome(&self.summary())?;
        if require_confirmation {
            presenter.wait_for_confirmation()?;
        }
        Ok(round_count)
    }

    pub fn fight_round(&mut self, rng: &mut (impl RandomSource + ?Sized), roll_dice: bool) -> &Round {
        let round = Round::resolve(self.player, self.opponent, rng, roll_dice);
        self.finished = round.is_final();
        self.rounds.push(round);
        if self.finished {
            log::info!("Battle {} finished after {} rounds, winner: {:?}", self.id, self.rounds.len(), self.winner());
        }
        &self.rounds[self.rounds.len() - 1]
    }

    pub fn summary(&self) -> BattleSummary {
        let winner = self.winner();
        let winner_name = winner.map(|side| match side {
            Side::Player => self.player.get_name().to_string(),
            Side::Opponent => self.opponent.get_name().to_string()
        });
        BattleSummary {
            player_name: self.player.get_name().to_string(),
            opponent_name: self.opponent.get_name().to_string(),
            round_count: self.rounds.len(),
            winner,
            winner_name
        }
    }

    pub fn into_record(self) -> BattleRecord {
        let winner_id = self.winner().map(|side| match side {
            Side::Player => self.player.get_id(),
            Side::Opponent => self.opponent.get_id()
        });
        BattleRecord {
            id: self.id,
            player_id: self.player.get_id(),
            player_name: self.player.get_name().to_string(),
            opponent_id: self.opponent.get_id(),
            opponent_name: self.opponent.get_name().to_string(),
            rounds: self.rounds,
            finished: self.finished,
            winner_id
        }
    }
}

/*
    The archived form of a Battle, holding ids and names instead of the characters themselves.
 */
#[derive(Clone, Debug)]
pub struct BattleRecord {
    pub id: Uuid,
    pub player_id: Uuid,
    pub player_name: String,
    pub opponent_id: Uuid,
    pub opponent_name: String,
    pub rounds: Vec<Round>,
    pub finished: bool,
    pub winner_id: Option<Uuid>
}

impl BattleRecord {
    pub fn last_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn winner_name(&self) -> Option<&str> {
        match self.winner_id {
            Some(id) if id == self.player_id => Some(&self.player_name),
            Some(id) if id == self.opponent_id => Some(&self.opponent_name),
            _ => None
        }
    }

    pub fn was_won_by(&self, character_id: Uuid) -> bool {
        self.winner_id == Some(character_id)
    }

    // The name of whoever fought the given character in this battle
    pub fn opponent_name_of(&self, character_id: Uuid) -> Option<&str> {
        if character_id == self.player_id {
            Some(&self.opponent_name)
        } else if character_id == self.opponent_id {
            Some(&self.player_name)
        } else {
            None
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct BattleRegistry {
    records: Vec<BattleRecord>
}

impl BattleRegistry {
    pub fn add(&mut self, record: BattleRecord) {
        self.records.push(record);
    }

    pub fn get(&self, id: Uuid) -> Option<&BattleRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[BattleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records_for<'b>(&'b self, character: &'b Character) -> impl Iterator<Item = &'b BattleRecord> + 'b {
        character.get_battles().iter().filter_map(move |id| self.get(*id))
    }
}
