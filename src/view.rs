use std::io::Error;

use crate::character::battle::BattleSummary;
use crate::character::Character;
use crate::engine::combat::RoundSummary;
use crate::view::score::Score;

pub mod console_view;
pub mod score;

/*
    Receives the summaries produced by the combat core for rendering.
 */
pub trait PresentationSink {
    fn show_round(&mut self, summary: &RoundSummary) -> Result<(), Error>;
    fn show_outcome(&mut self, summary: &BattleSummary) -> Result<(), Error>;
}

/*
    A blocking "proceed" signal, used to pace a fight.
 */
pub trait ConfirmationGate {
    fn wait_for_confirmation(&mut self) -> Result<(), Error>;
}

pub trait BattlePresenter: PresentationSink + ConfirmationGate {}

impl<T: PresentationSink + ConfirmationGate + ?Sized> BattlePresenter for T {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Hunt,
    Retire,
    Unknown
}

/*
    Everything the game engine needs from the console: reading the player's input and rendering the game.
 */
pub trait GameView: BattlePresenter {
    fn read_player_name(&mut self) -> Result<String, Error>;
    fn read_menu_choice(&mut self) -> Result<MenuChoice, Error>;
    fn clear(&mut self) -> Result<(), Error>;
    fn show_character(&mut self, title: Option<&str>, character: &Character) -> Result<(), Error>;
    fn show_menu(&mut self) -> Result<(), Error>;
    fn show_message(&mut self, message: &str) -> Result<(), Error>;
    fn show_score(&mut self, score: &Score) -> Result<(), Error>;
}
