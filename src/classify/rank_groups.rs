use crate::cards::Rank;

/// Ranks grouped by their multiplicity, sorted by (count desc, rank desc).
///
/// Example: 9-9-9-4 groups as [(Nine, 3), (Four, 1)].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Build from a rank count array indexed by rank value (2–14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = rank_counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    /// Number of distinct ranks present.
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    /// Rank appearing four times, if any.
    pub fn quad(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, n)| *n == 4).map(|(r, _)| *r)
    }

    /// Rank appearing three times, if any.
    pub fn trips(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, n)| *n == 3).map(|(r, _)| *r)
    }

    /// Ranks appearing exactly twice, descending.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, n)| *n == 2).map(|(r, _)| *r).collect()
    }

    /// Exactly two distinct ranks with counts {3,2} in either order.
    pub fn is_full_house(&self) -> bool {
        self.trips().is_some() && self.pairs().len() == 1
    }

    /// Exactly two distinct ranks, each appearing exactly twice. Guards
    /// against the 3+1 split of two ranks, which is not two pair.
    pub fn is_two_pair(&self) -> bool {
        self.pairs().len() == 2
    }
}
