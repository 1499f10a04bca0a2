use std::collections::VecDeque;
use std::io::Error;

use rand_pcg::Pcg64;
use rand_seeder::Seeder;

use crate::character::battle::BattleSummary;
use crate::character::Character;
use crate::engine::combat::RoundSummary;
use crate::engine::random::RandomSource;
use crate::view::score::Score;
use crate::view::{ConfirmationGate, GameView, MenuChoice, PresentationSink};

pub fn test_rng() -> Pcg64 {
    Seeder::from("test".to_string()).into_rng()
}

/*
    Hands out the given values in order, panicking once they run out or if one falls outside the requested range.
 */
pub struct ScriptedRandom {
    values: VecDeque<i32>
}

impl ScriptedRandom {
    pub fn new(values: Vec<i32>) -> ScriptedRandom {
        ScriptedRandom { values: values.into_iter().collect() }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        let value = self.values.pop_front().expect("ScriptedRandom ran out of values");
        assert!(value >= low && value <= high, "Scripted value {} is outside of {}..={}", value, low, high);
        value
    }
}

#[derive(Default)]
pub struct RecordingPresenter {
    pub rounds: Vec<RoundSummary>,
    pub outcomes: Vec<BattleSummary>,
    pub confirmations: usize
}

impl PresentationSink for RecordingPresenter {
    fn show_round(&mut self, summary: &RoundSummary) -> Result<(), Error> {
        self.rounds.push(summary.clone());
        Ok(())
    }

    fn show_outcome(&mut self, summary: &BattleSummary) -> Result<(), Error> {
        self.outcomes.push(summary.clone());
        Ok(())
    }
}

impl ConfirmationGate for RecordingPresenter {
    fn wait_for_confirmation(&mut self) -> Result<(), Error> {
        self.confirmations += 1;
        Ok(())
    }
}

/*
    A GameView that answers with a fixed name and menu choices, retiring once the choices run out.
 */
pub struct ScriptedView {
    pub name: String,
    pub choices: VecDeque<MenuChoice>,
    pub rounds: Vec<RoundSummary>,
    pub outcomes: Vec<BattleSummary>,
    pub messages: Vec<String>,
    pub characters_shown: Vec<String>,
    pub scores: Vec<Score>,
    pub confirmations: usize,
    pub menus_shown: usize
}

impl ScriptedView {
    pub fn new(name: &str, choices: Vec<MenuChoice>) -> ScriptedView {
        ScriptedView {
            name: name.to_string(),
            choices: choices.into_iter().collect(),
            rounds: Vec::new(),
            outcomes: Vec::new(),
            messages: Vec::new(),
            characters_shown: Vec::new(),
            scores: Vec::new(),
            confirmations: 0,
            menus_shown: 0
        }
    }
}

impl PresentationSink for ScriptedView {
    fn show_round(&mut self, summary: &RoundSummary) -> Result<(), Error> {
        self.rounds.push(summary.clone());
        Ok(())
    }

    fn show_outcome(&mut self, summary: &BattleSummary) -> Result<(), Error> {
        self.outcomes.push(summary.clone());
        Ok(())
    }
}

impl ConfirmationGate for ScriptedView {
    fn wait_for_confirmation(&mut self) -> Result<(), Error> {
        self.confirmations += 1;
        Ok(())
    }
}

impl GameView for ScriptedView {
    fn read_player_name(&mut self) -> Result<String, Error> {
        Ok(self.name.clone())
    }

    fn read_menu_choice(&mut self) -> Result<MenuChoice, Error> {
        Ok(self.choices.pop_front().unwrap_or(MenuChoice::Retire))
    }

    fn clear(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn show_character(&mut self, _title: Option<&str>, character: &Character) -> Result<(), Error> {
        self.characters_shown.push(character.get_name().to_string());
        Ok(())
    }

    fn show_menu(&mut self) -> Result<(), Error> {
        self.menus_shown += 1;
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> Result<(), Error> {
        self.messages.push(message.to_string());
        Ok(())
    }

    fn show_score(&mut self, score: &Score) -> Result<(), Error> {
        self.scores.push(score.clone());
        Ok(())
    }
}
