use std::io::{self, BufRead, Error, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};

use crate::character::battle::BattleSummary;
use crate::character::Character;
use crate::engine::combat::{RoundSummary, Side};
use crate::view::score::Score;
use crate::view::{ConfirmationGate, GameView, MenuChoice, PresentationSink};

const SEPARATOR: &str = "--------------";

/*
    Plain line based console rendering, using crossterm for colours, clearing and single key presses.
 */
pub struct ConsoleView<W: Write> {
    out: W
}

impl ConsoleView<io::Stdout> {
    pub fn stdout() -> ConsoleView<io::Stdout> {
        ConsoleView { out: io::stdout() }
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> ConsoleView<W> {
        ConsoleView { out }
    }

    fn line(&mut self, text: &str) -> Result<(), Error> {
        writeln!(self.out, "{}", text)
    }

    fn coloured_line(&mut self, colour: Color, text: &str) -> Result<(), Error> {
        queue!(self.out, SetForegroundColor(colour), Print(text), ResetColor, Print("\n"))?;
        self.out.flush()
    }
}

const DRAW_MESSAGE: &str = "Evenly matched, the combatants circle each other, looking for a better opportunity.";

fn victory_line(winner_name: Option<&str>) -> String {
    match winner_name {
        Some(name) => format!("{} is victorious!", name),
        None => String::from("Nobody is victorious.")
    }
}

pub fn format_rolls(summary: &RoundSummary) -> String {
    format!("Rolls: {} {} ({}+{}) vs {} {} ({}+{})",
            summary.player_name, summary.player_total, summary.player_strength, summary.player_roll,
            summary.opponent_name, summary.opponent_total, summary.opponent_strength, summary.opponent_roll)
}

pub fn format_attack(summary: &RoundSummary) -> Option<String> {
    let winner = summary.winner_name.as_ref()?;
    let loser = summary.loser_name.as_ref()?;
    let death = if summary.loser_died { ", and falls to the ground, dead" } else { "" };
    Some(format!("{} attacks {}! {} takes {} damage{}.", winner, loser, loser, summary.damage, death))
}

pub fn format_remaining_health(summary: &RoundSummary) -> String {
    format!("Remaining Health: {} ({}), {} ({})",
            summary.player_name, summary.player_health, summary.opponent_name, summary.opponent_health)
}

pub fn parse_menu_key(code: KeyCode) -> MenuChoice {
    match code {
        KeyCode::Char('h') | KeyCode::Char('H') => MenuChoice::Hunt,
        KeyCode::Char('r') | KeyCode::Char('R') => MenuChoice::Retire,
        _ => MenuChoice::Unknown
    }
}

/*
    Blocks until a key is pressed, in raw mode so no Enter is needed.
 */
fn read_key() -> Result<KeyEvent, Error> {
    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(key),
            Ok(_) => continue,
            Err(e) => break Err(e)
        }
    };
    terminal::disable_raw_mode()?;
    result
}

impl<W: Write> PresentationSink for ConsoleView<W> {
    fn show_round(&mut self, summary: &RoundSummary) -> Result<(), Error> {
        self.line("")?;
        self.line(SEPARATOR)?;
        self.line(&format_rolls(summary))?;
        match format_attack(summary) {
            Some(attack) => {
                let colour = if summary.winner == Some(Side::Player) { Color::Green } else { Color::Red };
                self.coloured_line(colour, &attack)?;
            },
            None => self.line(DRAW_MESSAGE)?
        }
        self.line(&format_remaining_health(summary))
    }

    fn show_outcome(&mut self, summary: &BattleSummary) -> Result<(), Error> {
        self.line("")?;
        self.line(SEPARATOR)?;
        self.line(&victory_line(summary.winner_name.as_deref()))
    }
}

impl<W: Write> ConfirmationGate for ConsoleView<W> {
    fn wait_for_confirmation(&mut self) -> Result<(), Error> {
        self.out.flush()?;
        read_key().map(|_| ())
    }
}

impl<W: Write> GameView for ConsoleView<W> {
    fn read_player_name(&mut self) -> Result<String, Error> {
        self.line("Enter the name of your character")?;
        self.out.flush()?;
        let mut name = String::new();
        io::stdin().lock().read_line(&mut name)?;
        Ok(name.trim().to_string())
    }

    fn read_menu_choice(&mut self) -> Result<MenuChoice, Error> {
        self.out.flush()?;
        let key = read_key()?;
        Ok(parse_menu_key(key.code))
    }

    fn clear(&mut self) -> Result<(), Error> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn show_character(&mut self, title: Option<&str>, character: &Character) -> Result<(), Error> {
        if let Some(t) = title {
            self.line("")?;
            self.line(&format!("{}:", t))?;
        }
        self.line(&format!("Name: {}", character.get_name()))?;
        self.line(&format!("Strength: {}", character.get_strength()))?;
        self.line(&format!("Damage: {}", character.damage()))?;
        self.line(&format!("Health: {}", character.health_display()))
    }

    fn show_menu(&mut self) -> Result<(), Error> {
        self.line("")?;
        self.line("What do you want to do?")?;
        self.line("H - Hunt for an opponent")?;
        self.line("R - Retire from fighting")
    }

    fn show_message(&mut self, message: &str) -> Result<(), Error> {
        self.line(message)
    }

    fn show_score(&mut self, score: &Score) -> Result<(), Error> {
        for entry in &score.entries {
            if entry.won {
                self.line(&format!("{} fought and killed {}.", score.character_name, entry.opponent_name))?;
            } else {
                self.line(&format!("{} was killed by {}.", score.character_name, entry.opponent_name))?;
            }
        }
        self.line(&format!("{} total score is {}.", score.character_name, score.total))
    }
}
