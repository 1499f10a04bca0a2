use crate::character::Character;

/*
    The player and every opponent generated for them. Dead opponents are kept, they're just never hunted again.
 */
#[derive(Debug, Clone)]
pub struct Characters {
    player: Character,
    npcs: Vec<Character>
}

impl Characters {
    pub fn new(player: Character, npcs: Vec<Character>) -> Characters {
        Characters { player, npcs }
    }

    pub fn get_player(&self) -> &Character { &self.player }
    pub fn get_player_mut(&mut self) -> &mut Character { &mut self.player }
    pub fn get_npcs(&self) -> &Vec<Character> { &self.npcs }

    pub fn get_living_npcs(&self) -> impl Iterator<Item = &Character> {
        self.npcs.iter().filter(|npc| !npc.is_dead())
    }

    pub fn next_opponent(&self) -> Option<&Character> {
        self.get_living_npcs().next()
    }

    /*
        Borrows the player alongside the next living opponent, ready for a Battle.
     */
    pub fn player_and_next_opponent(&mut self) -> Option<(&mut Character, &mut Character)> {
        let player = &mut self.player;
        self.npcs.iter_mut()
            .find(|npc| !npc.is_dead())
            .map(|npc| (player, npc))
    }
}
