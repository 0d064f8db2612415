pub(crate) mod analysis;
pub(crate) mod detector;
pub(crate) mod rank_groups;
pub(crate) mod run_info;
pub(crate) mod suit_info;

use crate::cards::Card;

/// Hand categories a 2–5 card group can form, ordered by point value.
///
/// Declaration order is ascending value, so `Ord` compares worth directly.
/// Sizes never mix: a 4-card group can only classify to the quad/nearly/two
/// pair family, a 3-card group to the trips/mini family, and so on. The
/// selection IS the hand; there are no kickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum HandKind {
    Pair,
    MiniStraight,
    MiniFlush,
    MiniStraightFlush,
    MiniRoyalFlush,
    ThreeOfAKind,
    TwoPair,
    NearlyStraight,
    NearlyFlush,
    NearlyStraightFlush,
    NearlyRoyalFlush,
    FourOfAKind,
    Straight,
    Flush,
    FullHouse,
    StraightFlush,
    RoyalFlush,
}

impl HandKind {
    /// Fixed score awarded for playing this hand.
    pub const fn points(self) -> u32 {
        match self {
            HandKind::Pair => 10,
            HandKind::MiniStraight => 20,
            HandKind::MiniFlush => 30,
            HandKind::MiniStraightFlush => 40,
            HandKind::MiniRoyalFlush => 50,
            HandKind::ThreeOfAKind => 60,
            HandKind::TwoPair => 70,
            HandKind::NearlyStraight => 80,
            HandKind::NearlyFlush => 90,
            HandKind::NearlyStraightFlush => 110,
            HandKind::NearlyRoyalFlush => 130,
            HandKind::FourOfAKind => 160,
            HandKind::Straight => 200,
            HandKind::Flush => 220,
            HandKind::FullHouse => 260,
            HandKind::StraightFlush => 320,
            HandKind::RoyalFlush => 500,
        }
    }

    /// Number of cards this category is made of.
    pub const fn card_count(self) -> usize {
        match self {
            HandKind::Pair => 2,
            HandKind::MiniStraight
            | HandKind::MiniFlush
            | HandKind::MiniStraightFlush
            | HandKind::MiniRoyalFlush
            | HandKind::ThreeOfAKind => 3,
            HandKind::TwoPair
            | HandKind::NearlyStraight
            | HandKind::NearlyFlush
            | HandKind::NearlyStraightFlush
            | HandKind::NearlyRoyalFlush
            | HandKind::FourOfAKind => 4,
            HandKind::Straight
            | HandKind::Flush
            | HandKind::FullHouse
            | HandKind::StraightFlush
            | HandKind::RoyalFlush => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            HandKind::Pair => "Pair",
            HandKind::MiniStraight => "Mini Straight",
            HandKind::MiniFlush => "Mini Flush",
            HandKind::MiniStraightFlush => "Mini Straight Flush",
            HandKind::MiniRoyalFlush => "Mini Royal Flush",
            HandKind::ThreeOfAKind => "Three of a Kind",
            HandKind::TwoPair => "Two Pair",
            HandKind::NearlyStraight => "Nearly Straight",
            HandKind::NearlyFlush => "Nearly Flush",
            HandKind::NearlyStraightFlush => "Nearly Straight Flush",
            HandKind::NearlyRoyalFlush => "Nearly Royal Flush",
            HandKind::FourOfAKind => "Four of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::RoyalFlush => "Royal Flush",
        }
    }
}

impl std::fmt::Display for HandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a group of 2–5 distinct cards to its highest-value category.
///
/// Returns `None` when the count is outside 2–5 or no pattern matches; both
/// are everyday outcomes, not errors. Input order never affects the result.
///
/// ```
/// use poker_grid::cards::parse_cards;
/// use poker_grid::classify::{classify, HandKind};
///
/// let royal = parse_cards("10s Js Qs Ks As").unwrap();
/// assert_eq!(classify(&royal), Some(HandKind::RoyalFlush));
///
/// let bridge = parse_cards("Kc Ad 2h").unwrap();
/// assert_eq!(classify(&bridge), Some(HandKind::MiniStraight));
///
/// let nothing = parse_cards("2c 9h").unwrap();
/// assert_eq!(classify(&nothing), None);
/// ```
pub fn classify(cards: &[Card]) -> Option<HandKind> {
    if !(2..=5).contains(&cards.len()) {
        return None;
    }
    debug_assert!(
        {
            let set: std::collections::HashSet<Card> = cards.iter().copied().collect();
            set.len() == cards.len()
        },
        "duplicate card identity in classification input"
    );

    let analysis = analysis::HandAnalysis::new(cards);
    detector::detectors_for(cards.len())
        .iter()
        .find(|d| d.matches(&analysis))
        .map(|d| d.kind())
}
