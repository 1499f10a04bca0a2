use std::fmt::{Display, Formatter};

use crate::character::Character;
use crate::engine::random::{roll_die, RandomSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Opponent")
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Draw,
    // Damage is the winner's damage at the start of the round
    Decided { winner: Side, damage: i32 }
}

/*
    A single opposed roll between two combatants.
    The round is resolved as it is built: rolls are drawn, the winner is decided and the loser takes the winner's damage.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    player_roll: i32,
    opponent_roll: i32,
    player_strength: i32,
    opponent_strength: i32,
    outcome: RoundOutcome,
    is_final: bool
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub player_name: String,
    pub opponent_name: String,
    pub player_strength: i32,
    pub opponent_strength: i32,
    pub player_roll: i32,
    pub opponent_roll: i32,
    pub player_total: i32,
    pub opponent_total: i32,
    pub winner: Option<Side>,
    pub winner_name: Option<String>,
    pub loser_name: Option<String>,
    pub damage: i32,
    pub loser_died: bool,
    pub player_health: String,
    pub opponent_health: String
}

impl Round {
    pub fn resolve(player: &mut Character, opponent: &mut Character, rng: &mut (impl RandomSource + ?Sized), roll_dice: bool) -> Round {
        let (player_roll, opponent_roll) = if roll_dice {
            let player_roll = roll_die(rng);
            (player_roll, roll_die(rng))
        } else {
            (0, 0)
        };
        Round::resolve_with_rolls(player, opponent, player_roll, opponent_roll)
    }

    pub fn resolve_with_rolls(player: &mut Character, opponent: &mut Character, player_roll: i32, opponent_roll: i32) -> Round {
        let player_strength = player.get_strength();
        let opponent_strength = opponent.get_strength();
        let player_total = player_strength + player_roll;
        let opponent_total = opponent_strength + opponent_roll;

        let outcome = if player_total > opponent_total {
            let damage = player.damage();
            opponent.apply_damage(damage);
            RoundOutcome::Decided { winner: Side::Player, damage }
        } else if opponent_total > player_total {
            let damage = opponent.damage();
            player.apply_damage(damage);
            RoundOutcome::Decided { winner: Side::Opponent, damage }
        } else {
            RoundOutcome::Draw
        };

        // A participant already dead before a draw still makes this final
        let is_final = player.is_dead() || opponent.is_dead();
        log::debug!("Round: {} {}+{} vs {} {}+{} -> {:?}, final: {}",
            player.get_name(), player_strength, player_roll,
            opponent.get_name(), opponent_strength, opponent_roll,
            outcome, is_final);

        Round { player_roll, opponent_roll, player_strength, opponent_strength, outcome, is_final }
    }

    pub fn get_player_roll(&self) -> i32 {
        self.player_roll
    }

    pub fn get_opponent_roll(&self) -> i32 {
        self.opponent_roll
    }

    pub fn player_total(&self) -> i32 {
        self.player_strength + self.player_roll
    }

    pub fn opponent_total(&self) -> i32 {
        self.opponent_strength + self.opponent_roll
    }

    pub fn get_outcome(&self) -> RoundOutcome {
        self.outcome
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == RoundOutcome::Draw
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn winner(&self) -> Option<Side> {
        match self.outcome {
            RoundOutcome::Decided { winner, .. } => Some(winner),
            RoundOutcome::Draw => None
        }
    }

    pub fn loser(&self) -> Option<Side> {
        self.winner().map(|winner| winner.other())
    }

    pub fn damage_dealt(&self) -> i32 {
        match self.outcome {
            RoundOutcome::Decided { damage, .. } => damage,
            RoundOutcome::Draw => 0
        }
    }

    /*
        Builds the data the presentation layer needs to render this round.
        Health values are read from the characters as they are now.
     */
    pub fn summary(&self, player: &Character, opponent: &Character) -> RoundSummary {
        let name_of = |side: Side| match side {
            Side::Player => player.get_name().to_string(),
            Side::Opponent => opponent.get_name().to_string()
        };
        let loser_died = match self.loser() {
            Some(Side::Player) => player.is_dead(),
            Some(Side::Opponent) => opponent.is_dead(),
            None => false
        };

        RoundSummary {
            player_name: player.get_name().to_string(),
            opponent_name: opponent.get_name().to_string(),
            player_strength: self.player_strength,
            opponent_strength: self.opponent_strength,
            player_roll: self.player_roll,
            opponent_roll: self.opponent_roll,
            player_total: self.player_total(),
            opponent_total: self.opponent_total(),
            winner: self.winner(),
            winner_name: self.winner().map(name_of),
            loser_name: self.loser().map(name_of),
            damage: self.damage_dealt(),
            loser_died,
            player_health: player.health_display(),
            opponent_health: opponent.health_display()
        }
    }
}
