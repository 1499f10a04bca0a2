use crate::character::{Character, DEFAULT_NAME};
use crate::engine::random::{NameGenerator, RandomSource};

/*
    Attribute ranges a character is rolled from: a die of `die_size` sides plus a flat bonus.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeRoll {
    pub die_size: i32,
    pub bonus: i32
}

impl AttributeRoll {
    pub fn roll(&self, rng: &mut dyn RandomSource) -> i32 {
        rng.next_in_range(1, self.die_size) + self.bonus
    }

    pub fn min(&self) -> i32 {
        1 + self.bonus
    }

    pub fn max(&self) -> i32 {
        self.die_size + self.bonus
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterType {
    Player,
    Opponent
}

#[derive(Clone, Debug)]
pub struct CharacterPattern {
    pub character_type: CharacterType,
    pub strength: AttributeRoll,
    pub health: AttributeRoll
}

impl CharacterPattern {
    // 5 to 8 in both attributes
    pub fn player() -> CharacterPattern {
        let roll = AttributeRoll { die_size: 4, bonus: 4 };
        CharacterPattern { character_type: CharacterType::Player, strength: roll, health: roll }
    }

    // 3 to 10 in both attributes
    pub fn opponent() -> CharacterPattern {
        let roll = AttributeRoll { die_size: 8, bonus: 2 };
        CharacterPattern { character_type: CharacterType::Opponent, strength: roll, health: roll }
    }
}

pub struct CharacterBuilder {
    pattern: CharacterPattern
}

impl CharacterBuilder {
    pub fn new(pattern: CharacterPattern) -> CharacterBuilder {
        CharacterBuilder { pattern }
    }

    /*
        Strength is always rolled before health, so a seeded source gives the same character every time.
     */
    pub fn build(&self, name: String, rng: &mut dyn RandomSource) -> Character {
        let strength = self.pattern.strength.roll(rng);
        let health = self.pattern.health.roll(rng);
        log::debug!("Built {:?} {} with strength {} and health {}", self.pattern.character_type, name, strength, health);
        Character::new(name, strength, health)
    }
}

pub fn build_player(name: &str, rng: &mut dyn RandomSource) -> Character {
    let trimmed = name.trim();
    let name = if trimmed.is_empty() { DEFAULT_NAME } else { trimmed };
    CharacterBuilder::new(CharacterPattern::player()).build(name.to_string(), rng)
}

pub fn generate_batch(count: usize, rng: &mut dyn RandomSource, names: &mut dyn NameGenerator) -> Vec<Character> {
    let builder = CharacterBuilder::new(CharacterPattern::opponent());
    let mut characters = Vec::with_capacity(count);
    for _ in 0..count {
        let name = names.next_name(rng);
        characters.push(builder.build(name, rng));
    }
    log::info!("Generated {} opponents.", characters.len());
    characters
}
