use std::fmt::{Display, Formatter, Result};

use uuid::Uuid;

pub mod battle;
pub mod builder;
pub mod characters;

pub const DEFAULT_NAME: &str = "Tester";
pub const DEFAULT_STRENGTH: i32 = 5;
pub const DEFAULT_HEALTH: i32 = 5;

#[derive(Clone, Debug)]
pub struct Character {
    id: Uuid,
    name: String,
    strength: i32,
    health: i32,
    battles: Vec<Uuid>
}

impl Default for Character {
    fn default() -> Self {
        Character::new(DEFAULT_NAME.to_string(), DEFAULT_STRENGTH, DEFAULT_HEALTH)
    }
}

impl Character {
    pub fn new(name: String, strength: i32, health: i32) -> Character {
        Character { id: Uuid::new_v4(), name, strength, health, battles: Vec::new() }
    }

    pub fn named(name: String) -> Character {
        Character::new(name, DEFAULT_STRENGTH, DEFAULT_HEALTH)
    }

    pub fn get_id(&self) -> Uuid {
        self.id
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_strength(&self) -> i32 {
        self.strength
    }

    pub fn get_health(&self) -> i32 {
        self.health
    }

    pub fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    /*
        Strength halved, truncated toward zero. A strength of -3 deals -1.
     */
    pub fn damage(&self) -> i32 {
        self.strength / 2
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    // Health is not clamped, it may go well below zero
    pub fn apply_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn health_display(&self) -> String {
        if self.is_dead() {
            String::from("Dead")
        } else {
            self.health.to_string()
        }
    }

    pub fn get_battles(&self) -> &[Uuid] {
        &self.battles
    }

    pub(crate) fn add_battle(&mut self, battle_id: Uuid) {
        self.battles.push(battle_id);
    }
}

impl Display for Character {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{} (Strength: {}, Damage: {}, Health: {})", self.name, self.strength, self.damage(), self.health_display())
    }
}
