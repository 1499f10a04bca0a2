use std::io::Error;

use log::info;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;

use crate::character::battle::{Battle, BattleRegistry};
use crate::character::builder::character_builder::{build_player, generate_batch};
use crate::character::characters::Characters;
use crate::engine::random::FirstNameGenerator;
use crate::error::errors::GenericError;
use crate::settings::Settings;
use crate::view::score::{score_for, Score};
use crate::view::{GameView, MenuChoice};

pub const NO_OPPONENTS_MESSAGE: &str = "There is no one left alive. You monster!";
pub const RETIRE_MESSAGE: &str = "You have ended the violence by not fighting.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HuntResult {
    OpponentKilled,
    PlayerKilled,
    NoOpponents
}

pub struct GameEngine<V: GameView> {
    view: V,
    settings: Settings,
    rng: Pcg64,
    battles: BattleRegistry,
    game_running: bool
}

impl<V: GameView> GameEngine<V> {
    /*
        Runs a whole game: creates the characters, loops over the hunt / retire menu and finally shows the score board.
        Returns the player's final score.
     */
    pub fn start(&mut self) -> Result<Score, Error> {
        let name = self.view.read_player_name()?;
        let player = build_player(&name, &mut self.rng);
        let opponent_count = self.settings.get_opponent_count() as usize;
        let opponents = generate_batch(opponent_count, &mut self.rng, &mut FirstNameGenerator);
        let mut characters = Characters::new(player, opponents);
        info!("Game started for {}", characters.get_player());
        self.view.clear()?;

        self.game_running = true;
        while self.game_running {
            self.view.show_character(None, characters.get_player())?;
            self.view.show_menu()?;

            match self.view.read_menu_choice()? {
                MenuChoice::Hunt => {
                    let result = self.hunt(&mut characters)?;
                    info!("Hunt result: {:?}", result);
                    if result != HuntResult::OpponentKilled {
                        self.game_running = false;
                    }
                },
                MenuChoice::Retire => {
                    self.view.show_message(RETIRE_MESSAGE)?;
                    self.pause()?;
                    self.game_running = false;
                },
                MenuChoice::Unknown => {}
            }
            self.view.clear()?;
        }

        self.view.show_message("Final Statistics:")?;
        self.view.show_message("")?;
        self.view.show_character(None, characters.get_player())?;
        let score = score_for(characters.get_player(), &self.battles);
        self.view.show_score(&score)?;
        self.pause()?;
        info!("Game over, {} scored {}", score.character_name, score.total);
        Ok(score)
    }

    fn hunt(&mut self, characters: &mut Characters) -> Result<HuntResult, Error> {
        let pausing = self.settings.is_pausing();
        let (player, opponent) = match characters.player_and_next_opponent() {
            Some(pair) => pair,
            None => {
                self.view.show_message(NO_OPPONENTS_MESSAGE)?;
                self.pause()?;
                return Ok(HuntResult::NoOpponents);
            }
        };

        self.view.clear()?;
        self.view.show_character(Some("Player"), player)?;
        self.view.show_character(Some("Opponent"), opponent)?;
        self.pause()?;

        let mut battle = Battle::new(player, opponent);
        battle.run_fight(&mut self.rng, &mut self.view, pausing)?;
        let record = battle.into_record();
        self.battles.add(record);

        if opponent.is_dead() {
            Ok(HuntResult::OpponentKilled)
        } else {
            Ok(HuntResult::PlayerKilled)
        }
    }

    fn pause(&mut self) -> Result<(), Error> {
        if self.settings.is_pausing() {
            self.view.wait_for_confirmation()?;
        }
        Ok(())
    }

    pub fn get_battles(&self) -> &BattleRegistry {
        &self.battles
    }

    pub fn get_view(&self) -> &V {
        &self.view
    }
}

pub fn build_game_engine<V: GameView>(view: V, settings: Settings) -> Result<GameEngine<V>, GenericError> {
    let rng_seed = settings.get_rng_seed().ok_or_else(|| GenericError::new(String::from("Failed to retrieve the RNG seed value!")))?;
    info!("Using RNG seed: {}", rng_seed);
    let rng = Seeder::from(rng_seed).into_rng();
    Ok(GameEngine { view, settings, rng, battles: BattleRegistry::default(), game_running: false })
}

#[cfg(test)]
mod tests {
    use crate::engine::game_engine::{build_game_engine, NO_OPPONENTS_MESSAGE, RETIRE_MESSAGE};
    use crate::settings::{build_settings, Settings, SETTING_OPPONENT_COUNT, SETTING_PAUSE, SETTING_RNG_SEED};
    use crate::test::utils::test_utils::ScriptedView;
    use crate::view::score::{LOSS_POINTS, WIN_POINTS};
    use crate::view::MenuChoice;

    fn test_settings(opponents: u32, pausing: bool) -> Settings {
        let mut settings = build_settings();
        settings.set_string_setting_value(SETTING_RNG_SEED, String::from("test"));
        settings.set_u32_setting_value(SETTING_OPPONENT_COUNT, opponents);
        settings.set_bool_setting_value(SETTING_PAUSE, pausing);
        settings
    }

    #[test]
    fn test_retire_straight_away() {
        // GIVEN a player who retires before fighting
        let view = ScriptedView::new("Sigrid", vec![MenuChoice::Retire]);
        let mut engine = build_game_engine(view, test_settings(5, true)).unwrap();

        // WHEN the game is played
        let score = engine.start().unwrap();

        // THEN nothing was fought and the score is zero
        assert_eq!("Sigrid", score.character_name);
        assert_eq!(0, score.total);
        assert!(engine.get_battles().is_empty());
        let view = engine.get_view();
        assert!(view.messages.contains(&RETIRE_MESSAGE.to_string()));
        assert!(view.messages.contains(&String::from("Final Statistics:")));
        // Once for the retirement, once for the final statistics
        assert_eq!(2, view.confirmations);
    }

    #[test]
    fn test_hunt_with_no_opponents() {
        let view = ScriptedView::new("Sigrid", vec![MenuChoice::Hunt]);
        let mut engine = build_game_engine(view, test_settings(0, false)).unwrap();

        let score = engine.start().unwrap();

        assert_eq!(0, score.total);
        assert!(engine.get_view().messages.contains(&NO_OPPONENTS_MESSAGE.to_string()));
        assert_eq!(0, engine.get_view().confirmations);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let view = ScriptedView::new("Sigrid", vec![MenuChoice::Unknown, MenuChoice::Unknown, MenuChoice::Retire]);
        let mut engine = build_game_engine(view, test_settings(1, false)).unwrap();
        engine.start().unwrap();
        assert_eq!(3, engine.get_view().menus_shown);
    }

    #[test]
    fn test_hunt_until_the_game_ends() {
        // GIVEN a player who keeps hunting
        let choices = vec![MenuChoice::Hunt; 10];
        let view = ScriptedView::new("Sigrid", choices);
        let mut engine = build_game_engine(view, test_settings(3, false)).unwrap();

        // WHEN the game is played out
        let score = engine.start().unwrap();

        // THEN every battle fought is scored
        let battles = engine.get_battles();
        assert!(battles.len() >= 1 && battles.len() <= 3);
        for record in battles.records() {
            assert!(record.finished);
            assert!(record.last_round().unwrap().is_final());
        }
        let wins = score.entries.iter().filter(|e| e.won).count() as u32;
        let losses = score.entries.len() as u32 - wins;
        assert_eq!(battles.len(), score.entries.len());
        assert_eq!(wins * WIN_POINTS + losses * LOSS_POINTS, score.total);
        assert_eq!(battles.records().iter().map(|r| r.rounds.len()).sum::<usize>(), engine.get_view().rounds.len());
        assert_eq!(battles.len(), engine.get_view().outcomes.len());
    }

    #[test]
    fn test_same_seed_same_game() {
        let play = || {
            let view = ScriptedView::new("Sigrid", vec![MenuChoice::Hunt; 10]);
            let mut engine = build_game_engine(view, test_settings(4, false)).unwrap();
            let score = engine.start().unwrap();
            (score, engine.get_view().rounds.clone())
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_pausing_waits_on_every_round() {
        let view = ScriptedView::new("Sigrid", vec![MenuChoice::Hunt, MenuChoice::Retire]);
        let mut engine = build_game_engine(view, test_settings(1, true)).unwrap();
        engine.start().unwrap();

        let view = engine.get_view();
        let rounds = view.rounds.len();
        let retired = view.messages.contains(&RETIRE_MESSAGE.to_string());
        // Before the fight, each round, the outcome, the retirement if the player lived, and the final statistics
        let expected = 1 + rounds + 1 + if retired { 1 } else { 0 } + 1;
        assert_eq!(expected, view.confirmations);
    }
}
