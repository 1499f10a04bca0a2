use rand::Rng;

/*
    Supplies uniform integers in the closed range [low, high].
    Anything implementing rand::Rng is a RandomSource, so seeded generators work directly.
 */
pub trait RandomSource {
    fn next_in_range(&mut self, low: i32, high: i32) -> i32;
}

impl<R: Rng> RandomSource for R {
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        self.random_range(low..=high)
    }
}

pub const DIE_SIDES: i32 = 6;

pub fn roll_die(rng: &mut (impl RandomSource + ?Sized)) -> i32 {
    rng.next_in_range(1, DIE_SIDES)
}

pub trait NameGenerator {
    fn next_name(&mut self, rng: &mut dyn RandomSource) -> String;
}

const FIRST_NAMES: [&str; 32] = [
    "ada", "bjorn", "cassia", "dorian", "edda", "fenris", "greta", "halvard",
    "ingrid", "jorah", "katla", "leif", "magda", "nils", "odile", "per",
    "quintus", "ragna", "sigrid", "torvald", "ulla", "viggo", "wenche", "xander",
    "yrsa", "zoltan", "astrid", "brand", "cora", "dagny", "erik", "frida"
];

/*
    Picks first names from a fixed list using the supplied RandomSource.
 */
#[derive(Default)]
pub struct FirstNameGenerator;

impl NameGenerator for FirstNameGenerator {
    fn next_name(&mut self, rng: &mut dyn RandomSource) -> String {
        let index = rng.next_in_range(0, FIRST_NAMES.len() as i32 - 1) as usize;
        capitalise(FIRST_NAMES[index])
    }
}

pub fn capitalise(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new()
    }
}
