//! Pairwise win probabilities between dice.
//!
//! Every comparison is a full cross product of faces, so a matrix over `n`
//! dice of `f` faces costs `O(n^2 * f^2)`. Dice are small; nothing smarter
//! is needed.

use super::die::Die;
use serde::{Deserialize, Serialize};

/// Outcome counts of `a` against `b` over all face pairs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
    pub total: u64,
}

impl Matchup {
    pub fn between(a: &Die, b: &Die) -> Self {
        let (mut wins, mut losses, mut ties) = (0u64, 0u64, 0u64);
        for fa in a.faces() {
            for fb in b.faces() {
                match fa.cmp(fb) {
                    std::cmp::Ordering::Greater => wins += 1,
                    std::cmp::Ordering::Less => losses += 1,
                    std::cmp::Ordering::Equal => ties += 1,
                }
            }
        }
        Self {
            wins,
            losses,
            ties,
            total: (a.len() * b.len()) as u64,
        }
    }

    /// Probability that `a` strictly beats `b`
    pub fn win_probability(&self) -> f64 {
        self.wins as f64 / self.total as f64
    }

    pub fn loss_probability(&self) -> f64 {
        self.losses as f64 / self.total as f64
    }

    pub fn tie_probability(&self) -> f64 {
        self.ties as f64 / self.total as f64
    }
}

/// Probability that a random face of `a` is strictly greater than a random
/// face of `b`. Ties count for neither side.
pub fn win_probability(a: &Die, b: &Die) -> f64 {
    Matchup::between(a, b).win_probability()
}

/// Probability that random faces of `a` and `b` are equal
pub fn tie_probability(a: &Die, b: &Die) -> f64 {
    Matchup::between(a, b).tie_probability()
}

/// Square table of win probabilities, row die against column die. The
/// diagonal has no value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityMatrix {
    labels: Vec<String>,
    cells: Vec<Vec<Option<f64>>>,
}

impl ProbabilityMatrix {
    pub fn from_dice(dice: &[Die]) -> Self {
        let labels = dice.iter().map(|d| d.to_string()).collect();
        let cells = dice
            .iter()
            .enumerate()
            .map(|(i, a)| {
                dice.iter()
                    .enumerate()
                    .map(|(j, b)| (i != j).then(|| win_probability(a, b)))
                    .collect()
            })
            .collect();
        Self { labels, cells }
    }

    /// Number of dice (rows and columns)
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Row and column headers, one per die
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Probability that die `row` beats die `col`; `None` on the diagonal or
    /// out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Cell text with `precision` decimals; the diagonal renders as `-`
    pub fn format_cell(&self, row: usize, col: usize, precision: usize) -> String {
        match self.cell(row, col) {
            Some(p) => format!("{p:.precision$}"),
            None => "-".to_string(),
        }
    }

    /// Whether die `row` beats die `col` more often than not
    pub fn beats(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).map_or(false, |p| p > 0.5)
    }

    /// True when every die is beaten by at least one other die, so no die
    /// is a safe first pick
    pub fn is_non_transitive(&self) -> bool {
        let n = self.size();
        n >= 2 && (0..n).all(|target| (0..n).any(|other| self.beats(other, target)))
    }

    /// Die with the highest win probability against `against`, skipping
    /// `taken`
    pub fn best_response(&self, against: usize, taken: &[usize]) -> Option<usize> {
        (0..self.size())
            .filter(|i| *i != against && !taken.contains(i))
            .filter_map(|i| self.cell(i, against).map(|p| (i, p)))
            .fold(None, |best: Option<(usize, f64)>, (i, p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((i, p)),
            })
            .map(|(i, _)| i)
    }

    /// Die whose worst matchup against any other die is best
    pub fn maximin_choice(&self) -> Option<usize> {
        (0..self.size())
            .map(|i| {
                let worst = (0..self.size())
                    .filter_map(|j| self.cell(i, j))
                    .fold(f64::INFINITY, f64::min);
                (i, worst)
            })
            .fold(None, |best: Option<(usize, f64)>, (i, w)| match best {
                Some((_, bw)) if bw >= w => best,
                _ => Some((i, w)),
            })
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn die(spec: &str) -> Die {
        Die::parse(spec).unwrap()
    }

    fn classic() -> Vec<Die> {
        vec![die("2,2,4,4,9,9"), die("1,1,6,6,8,8"), die("3,3,5,5,7,7")]
    }

    #[test]
    fn test_classic_dice_form_a_cycle() {
        let [a, b, c] = <[Die; 3]>::try_from(classic()).unwrap();

        assert!(win_probability(&a, &b) > 0.5);
        assert!(win_probability(&b, &c) > 0.5);
        assert!(win_probability(&c, &a) > 0.5);
        assert!((win_probability(&a, &b) - 5.0 / 9.0).abs() < EPS);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let dice = vec![die("1,2,3,4,5,6"), die("3,3,3,3,3,3"), die("0,3,6")];
        for a in &dice {
            for b in &dice {
                let sum = win_probability(a, b) + win_probability(b, a) + tie_probability(a, b);
                assert!((sum - 1.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_matchup_counts() {
        let m = Matchup::between(&die("1,2,3"), &die("2,2"));
        assert_eq!(m, Matchup { wins: 2, losses: 2, ties: 2, total: 6 });
        assert!((m.loss_probability() - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_identical_dice_never_win() {
        let d = die("4,4,4");
        assert_eq!(win_probability(&d, &d), 0.0);
        assert_eq!(tie_probability(&d, &d), 1.0);
    }

    #[test]
    fn test_matrix_diagonal_is_empty() {
        let m = ProbabilityMatrix::from_dice(&classic());
        assert_eq!(m.size(), 3);
        for i in 0..3 {
            assert_eq!(m.cell(i, i), None);
            assert_eq!(m.format_cell(i, i, 4), "-");
        }
        assert_eq!(m.cell(0, 3), None);
    }

    #[test]
    fn test_matrix_cells_and_format() {
        let m = ProbabilityMatrix::from_dice(&classic());
        assert_eq!(m.format_cell(0, 1, 4), "0.5556");
        assert_eq!(m.format_cell(1, 0, 4), "0.4444");
        assert_eq!(m.format_cell(0, 1, 2), "0.56");
        assert_eq!(m.labels()[2], "[3,3,5,5,7,7]");
    }

    #[test]
    fn test_non_transitivity_detection() {
        assert!(ProbabilityMatrix::from_dice(&classic()).is_non_transitive());

        let ordered = vec![die("1,1,1"), die("2,2,2"), die("3,3,3")];
        assert!(!ProbabilityMatrix::from_dice(&ordered).is_non_transitive());
    }

    #[test]
    fn test_best_response_beats_choice() {
        let m = ProbabilityMatrix::from_dice(&classic());
        // C beats A, A beats B, B beats C
        assert_eq!(m.best_response(0, &[0]), Some(2));
        assert_eq!(m.best_response(1, &[1]), Some(0));
        assert_eq!(m.best_response(2, &[2]), Some(1));
        assert_eq!(m.best_response(0, &[0, 1, 2]), None);
    }

    #[test]
    fn test_maximin_picks_strongest_die_in_ordered_set() {
        let ordered = vec![die("1,1,1"), die("3,3,3"), die("2,2,2")];
        assert_eq!(ProbabilityMatrix::from_dice(&ordered).maximin_choice(), Some(1));
    }
}
