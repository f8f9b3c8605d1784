//! Fuzzy logical relationship groups.

/// All consequents observed for one antecedent.
///
/// Sets are referenced by their index in the partition. The consequents are
/// kept in chronological order, repeats included, so that every weighting
/// scheme (plain, chronological, frequency) can be derived from the same group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Flrg {
    /// Antecedent sets, oldest lag first
    pub lhs: Vec<usize>,
    rhs: Vec<usize>,
}

impl Flrg {
    pub fn new(lhs: Vec<usize>) -> Self {
        Self {
            lhs,
            rhs: Vec::new(),
        }
    }

    /// Record one more consequent.
    pub fn append(&mut self, rhs: usize) {
        self.rhs.push(rhs);
    }

    /// Every recorded consequent in chronological order.
    pub fn occurrences(&self) -> &[usize] {
        &self.rhs
    }

    /// Total number of recorded transitions.
    pub fn count(&self) -> usize {
        self.rhs.len()
    }

    /// Distinct consequents in order of first appearance.
    pub fn distinct(&self) -> Vec<usize> {
        let mut seen = Vec::new();
        for &r in &self.rhs {
            if !seen.contains(&r) {
                seen.push(r);
            }
        }
        seen
    }

    /// Number of distinct consequents.
    pub fn len(&self) -> usize {
        self.distinct().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Distinct consequents with their relative frequency.
    pub fn frequencies(&self) -> Vec<(usize, f64)> {
        let total = self.rhs.len() as f64;
        self.distinct()
            .into_iter()
            .map(|r| {
                let hits = self.rhs.iter().filter(|&&x| x == r).count() as f64;
                (r, hits / total)
            })
            .collect()
    }

    /// Each occurrence with linearly increasing weight (1, 2, ..., k), normalised.
    pub fn chronological_weights(&self) -> Vec<(usize, f64)> {
        let k = self.rhs.len() as f64;
        let total = k * (k + 1.0) / 2.0;
        self.rhs
            .iter()
            .enumerate()
            .map(|(i, &r)| (r, (i as f64 + 1.0) / total))
            .collect()
    }
}
