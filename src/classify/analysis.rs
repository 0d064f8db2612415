use super::rank_groups::RankGroups;
use super::run_info::RunInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed facts about a 2–5 card group, built once and consulted by
/// every category detector.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub count: usize,
    /// Ranks present, one bit per cycle index.
    rank_mask: u16,
    pub groups: RankGroups,
    pub suit: SuitInfo,
    pub run: RunInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let ranks: Vec<Rank> = cards.iter().map(|c| c.rank()).collect();

        let mut rank_counts = [0u8; 15];
        let mut rank_mask: u16 = 0;
        for &rank in &ranks {
            rank_counts[rank.value() as usize] += 1;
            rank_mask |= 1 << rank.cycle_index();
        }

        Self {
            count: cards.len(),
            rank_mask,
            groups: RankGroups::from_counts(&rank_counts),
            suit: SuitInfo::detect(cards),
            run: RunInfo::detect(&ranks),
        }
    }

    /// Whether the group's ranks are exactly `set` (each present once).
    pub fn ranks_are_exactly(&self, set: &[Rank]) -> bool {
        if self.count != set.len() || self.groups.distinct() != set.len() {
            return false;
        }
        let mut mask: u16 = 0;
        for &rank in set {
            mask |= 1 << rank.cycle_index();
        }
        self.rank_mask == mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn analysis_of_royal_group() {
        let cards = parse_cards("10s Js Qs Ks As").unwrap();
        let a = HandAnalysis::new(&cards);
        assert!(a.suit.is_uniform);
        assert!(a.run.is_run);
        assert!(a.ranks_are_exactly(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]));
        assert_eq!(a.groups.distinct(), 5);
    }

    #[test]
    fn analysis_of_quads() {
        let cards = parse_cards("7c 7d 7h 7s").unwrap();
        let a = HandAnalysis::new(&cards);
        assert_eq!(a.groups.quad(), Some(Rank::Seven));
        assert!(!a.suit.is_uniform);
        assert!(!a.run.is_run);
    }

    #[test]
    fn ranks_are_exactly_rejects_multiplicity_tricks() {
        // J-J-Q covers the {J,Q} bitmask but is not exactly {J,Q,K}.
        let cards = parse_cards("Jc Jd Qh").unwrap();
        let a = HandAnalysis::new(&cards);
        assert!(!a.ranks_are_exactly(&[Rank::Jack, Rank::Queen, Rank::King]));
        assert!(!a.ranks_are_exactly(&[Rank::Jack, Rank::Queen]));
    }

    #[test]
    fn bridge_run_analysis() {
        let cards = parse_cards("Qc Kd Ah 2s").unwrap();
        let a = HandAnalysis::new(&cards);
        assert!(a.run.is_run);
        assert!(!a.suit.is_uniform);
    }
}
