//! Category and difficulty menus
//!
//! Both menus share one lenient parsing policy: a numeric choice inside the menu
//! selects that entry, anything else picks an entry uniformly at random.

use rand::Rng;
use std::fmt;

/// An entry of a numbered selection menu
pub trait MenuChoice: Copy + 'static {
    /// All entries, in menu order (entry `n` is shown as `n + 1`)
    const ALL: &'static [Self];

    /// Human-readable label shown in the menu
    fn label(self) -> &'static str;

    /// Pick an entry uniformly at random
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Word category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Animals,
    Fruits,
    Countries,
}

impl Category {
    /// Create a category from its name
    ///
    /// Supported names: "animals", "fruits", "countries" (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "animals" => Some(Self::Animals),
            "fruits" => Some(Self::Fruits),
            "countries" => Some(Self::Countries),
            _ => None,
        }
    }
}

impl MenuChoice for Category {
    const ALL: &'static [Self] = &[Self::Animals, Self::Fruits, Self::Countries];

    fn label(self) -> &'static str {
        match self {
            Self::Animals => "Animals",
            Self::Fruits => "Fruits",
            Self::Countries => "Countries",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Create a difficulty from its name
    ///
    /// Supported names: "easy", "medium", "hard" (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl MenuChoice for Difficulty {
    const ALL: &'static [Self] = &[Self::Easy, Self::Medium, Self::Hard];

    fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Resolve a menu answer to an entry, falling back to a random one
///
/// `"1"` selects the first entry, `"2"` the second and so on. Empty input,
/// non-numeric input and numbers outside the menu all resolve to a uniformly
/// random entry. This never fails.
///
/// # Examples
/// ```
/// use hangman::core::{Category, parse_choice_or_random};
///
/// let mut rng = rand::rng();
/// let category: Category = parse_choice_or_random("2", &mut rng);
/// assert_eq!(category, Category::Fruits);
/// ```
pub fn parse_choice_or_random<T: MenuChoice, R: Rng + ?Sized>(input: &str, rng: &mut R) -> T {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| T::ALL.get(index).copied())
        .unwrap_or_else(|| T::random(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn numeric_choices_select_entries() {
        let mut rng = StdRng::seed_from_u64(1);
        let picks: Vec<Category> = ["1", "2", "3"]
            .iter()
            .map(|input| parse_choice_or_random(input, &mut rng))
            .collect();
        assert_eq!(
            picks,
            vec![Category::Animals, Category::Fruits, Category::Countries]
        );

        let hard: Difficulty = parse_choice_or_random(" 3 ", &mut rng);
        assert_eq!(hard, Difficulty::Hard);
    }

    #[test]
    fn invalid_input_falls_back_to_random() {
        // Over many seeds every fallback must still cover all three entries
        for input in ["", "abc", "9", "0", "-1", "1.5"] {
            let seen: HashSet<Category> = (0..64)
                .map(|seed| {
                    let mut rng = StdRng::seed_from_u64(seed);
                    parse_choice_or_random::<Category, _>(input, &mut rng)
                })
                .collect();
            assert_eq!(seen.len(), 3, "input {input:?} did not randomize");
        }
    }

    #[test]
    fn fallback_matches_random_draw() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let parsed: Difficulty = parse_choice_or_random("nope", &mut a);
        assert_eq!(parsed, Difficulty::random(&mut b));
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Category::from_name("Animals"), Some(Category::Animals));
        assert_eq!(Category::from_name("COUNTRIES"), Some(Category::Countries));
        assert_eq!(Category::from_name("cars"), None);
        assert_eq!(Difficulty::from_name("medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_name(""), None);
    }

    #[test]
    fn labels_display() {
        assert_eq!(Category::Fruits.to_string(), "Fruits");
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(format!("{:<7}|", Category::Fruits), "Fruits |");
    }
}
