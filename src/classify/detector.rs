use super::analysis::HandAnalysis;
use super::HandKind;
use crate::cards::Rank;

/// Strategy pattern: one detector per category, consulted in descending
/// point order; the first match wins so flush variants never have to
/// re-check that a straight was not already claimed above them.
pub trait KindDetector: Sync {
    fn kind(&self) -> HandKind;
    fn matches(&self, analysis: &HandAnalysis) -> bool;
}

// ============================================================================
// Five-card categories
// ============================================================================

/// Royal Flush: 10-J-Q-K-A, one suit.
struct RoyalFlush;

impl KindDetector for RoyalFlush {
    fn kind(&self) -> HandKind {
        HandKind::RoyalFlush
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.suit.is_uniform
            && a.ranks_are_exactly(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace])
    }
}

/// Straight Flush: five-rank run, one suit.
struct StraightFlush;

impl KindDetector for StraightFlush {
    fn kind(&self) -> HandKind {
        HandKind::StraightFlush
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.suit.is_uniform && a.run.is_run
    }
}

/// Full House: two ranks split 3 + 2.
struct FullHouse;

impl KindDetector for FullHouse {
    fn kind(&self) -> HandKind {
        HandKind::FullHouse
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.groups.is_full_house()
    }
}

/// Flush: one suit (runs were claimed above).
struct Flush;

impl KindDetector for Flush {
    fn kind(&self) -> HandKind {
        HandKind::Flush
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.suit.is_uniform
    }
}

/// Straight: five-rank run, mixed suits.
struct Straight;

impl KindDetector for Straight {
    fn kind(&self) -> HandKind {
        HandKind::Straight
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.run.is_run
    }
}

// ============================================================================
// Four-card categories
// ============================================================================

struct FourOfAKind;

impl KindDetector for FourOfAKind {
    fn kind(&self) -> HandKind {
        HandKind::FourOfAKind
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.groups.quad().is_some()
    }
}

/// Nearly Royal Flush: J-Q-K-A, one suit.
struct NearlyRoyalFlush;

impl KindDetector for NearlyRoyalFlush {
    fn kind(&self) -> HandKind {
        HandKind::NearlyRoyalFlush
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.suit.is_uniform && a.ranks_are_exactly(&[Rank::Jack, Rank::Queen, Rank::King, Rank::Ace])
    }
}

struct NearlyStraightFlush;

impl KindDetector for NearlyStraightFlush {
    fn kind(&self) -> HandKind {
        HandKind::NearlyStraightFlush
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.suit.is_uniform && a.run.is_run
    }
}

struct NearlyFlush;

impl KindDetector for NearlyFlush {
    fn kind(&self) -> HandKind {
        HandKind::NearlyFlush
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.suit.is_uniform
    }
}

struct NearlyStraight;

impl KindDetector for NearlyStraight {
    fn kind(&self) -> HandKind {
        HandKind::NearlyStraight
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.run.is_run
    }
}

/// Two Pair: exactly two ranks, each exactly twice.
struct TwoPair;

impl KindDetector for TwoPair {
    fn kind(&self) -> HandKind {
        HandKind::TwoPair
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.groups.is_two_pair()
    }
}

// ============================================================================
// Three-card categories
// ============================================================================

struct ThreeOfAKind;

impl KindDetector for ThreeOfAKind {
    fn kind(&self) -> HandKind {
        HandKind::ThreeOfAKind
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.groups.trips().is_some()
    }
}

/// Mini Royal Flush: J-Q-K, one suit.
struct MiniRoyalFlush;

impl KindDetector for MiniRoyalFlush {
    fn kind(&self) -> HandKind {
        HandKind::MiniRoyalFlush
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.suit.is_uniform && a.ranks_are_exactly(&[Rank::Jack, Rank::Queen, Rank::King])
    }
}

struct MiniStraightFlush;

impl KindDetector for MiniStraightFlush {
    fn kind(&self) -> HandKind {
        HandKind::MiniStraightFlush
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.suit.is_uniform && a.run.is_run
    }
}

struct MiniFlush;

impl KindDetector for MiniFlush {
    fn kind(&self) -> HandKind {
        HandKind::MiniFlush
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.suit.is_uniform
    }
}

struct MiniStraight;

impl KindDetector for MiniStraight {
    fn kind(&self) -> HandKind {
        HandKind::MiniStraight
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.run.is_run
    }
}

// ============================================================================
// Two-card category
// ============================================================================

struct Pair;

impl KindDetector for Pair {
    fn kind(&self) -> HandKind {
        HandKind::Pair
    }
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.groups.pairs().len() == 1
    }
}

// ============================================================================
// Per-size priority lists (descending point value)
// ============================================================================

const FIVE_CARD: [&dyn KindDetector; 5] =
    [&RoyalFlush, &StraightFlush, &FullHouse, &Flush, &Straight];

const FOUR_CARD: [&dyn KindDetector; 6] =
    [&FourOfAKind, &NearlyRoyalFlush, &NearlyStraightFlush, &NearlyFlush, &NearlyStraight, &TwoPair];

const THREE_CARD: [&dyn KindDetector; 5] =
    [&ThreeOfAKind, &MiniRoyalFlush, &MiniStraightFlush, &MiniFlush, &MiniStraight];

const TWO_CARD: [&dyn KindDetector; 1] = [&Pair];

/// The priority-ordered detector list for a group size. Callers guarantee
/// `len` is 2–5.
pub fn detectors_for(len: usize) -> &'static [&'static dyn KindDetector] {
    match len {
        2 => &TWO_CARD,
        3 => &THREE_CARD,
        4 => &FOUR_CARD,
        5 => &FIVE_CARD,
        _ => unreachable!("classify screens group sizes"),
    }
}
