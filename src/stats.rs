use crate::error::{Error, Result};
use crate::models::{Problem, StandingsRow};
use serde::{Deserialize, Serialize};

/// Number of problems in a row with a positive point value.
pub fn solved_count(row: &StandingsRow) -> u32 {
    row.problem_results.iter().filter(|r| r.is_solved()).count() as u32
}

/// `part / total` as a percentage rounded to one decimal place (0 when `total` is 0).
///
/// Rounding goes through `{:.1}` formatting of the exact binary value, so a quotient
/// like `6.25` (1 of 16) becomes `6.2`.
pub fn percent_1dp(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    format!("{:.1}", raw).parse().unwrap_or(raw)
}

/// One integer bin of the solved-count distribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistogramBin {
    pub solved: u32,
    pub count: usize,
    pub percent: f64,
    /// Share of rows that solved `<= solved` problems.
    pub cumulative_percent: f64,
    /// Share of rows that solved `>= solved` problems.
    pub reverse_cumulative_percent: f64,
}

/// Distribution of solved counts over a standings table, bins `0..=max`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolvedHistogram {
    pub total: usize,
    pub bins: Vec<HistogramBin>,
}

impl SolvedHistogram {
    pub fn from_rows(rows: &[StandingsRow]) -> Self {
        let counts: Vec<u32> = rows.iter().map(solved_count).collect();
        Self::from_solved_counts(&counts)
    }

    pub fn from_solved_counts(solved: &[u32]) -> Self {
        let total = solved.len();
        let max = solved.iter().copied().max().unwrap_or(0) as usize;
        let mut counts = vec![0usize; max + 1];
        for &s in solved {
            counts[s as usize] += 1;
        }

        let mut at_least = vec![0usize; counts.len()];
        let mut running = 0;
        for (k, c) in counts.iter().enumerate().rev() {
            running += c;
            at_least[k] = running;
        }

        let mut cumulative = 0;
        let bins = counts
            .iter()
            .enumerate()
            .map(|(k, &count)| {
                cumulative += count;
                HistogramBin {
                    solved: k as u32,
                    count,
                    percent: percent_1dp(count, total),
                    cumulative_percent: percent_1dp(cumulative, total),
                    reverse_cumulative_percent: percent_1dp(at_least[k], total),
                }
            })
            .collect();

        Self { total, bins }
    }

    pub fn max_solved(&self) -> u32 {
        self.bins.last().map(|b| b.solved).unwrap_or(0)
    }
}

/// Solver count for one problem of a contest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProblemSolves {
    pub index: String,
    pub solvers: usize,
    /// Solvers as a share of all rows.
    pub percent: f64,
}

/// Count, for each problem position, the rows whose result at that position is solved.
///
/// Results are matched to problems by position. A row holding fewer results than there
/// are problems yields [`Error::MisalignedRow`].
pub fn problem_solver_counts(
    problems: &[Problem],
    rows: &[StandingsRow],
) -> Result<Vec<ProblemSolves>> {
    if let Some(short) = rows
        .iter()
        .find(|r| r.problem_results.len() < problems.len())
    {
        return Err(Error::MisalignedRow {
            rank: short.rank,
            expected: problems.len(),
            found: short.problem_results.len(),
        });
    }

    let total = rows.len();
    Ok(problems
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let solvers = rows
                .iter()
                .filter(|r| r.problem_results[i].is_solved())
                .count();
            ProblemSolves {
                index: p.index.clone(),
                solvers,
                percent: percent_1dp(solvers, total),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_one_decimal() {
        assert_eq!(percent_1dp(1, 3), 33.3);
        assert_eq!(percent_1dp(2, 3), 66.7);
        assert_eq!(percent_1dp(0, 0), 0.0);
        assert_eq!(percent_1dp(7, 7), 100.0);
    }

    #[test]
    fn percent_ties_follow_the_binary_value() {
        assert_eq!(percent_1dp(1, 16), 6.2);
        assert_eq!(percent_1dp(3, 16), 18.8);
        assert_eq!(percent_1dp(1, 8), 12.5);
    }

    #[test]
    fn empty_input_has_single_zero_bin() {
        let h = SolvedHistogram::from_solved_counts(&[]);
        assert_eq!(h.total, 0);
        assert_eq!(h.bins.len(), 1);
        assert_eq!(h.bins[0].count, 0);
        assert_eq!(h.bins[0].reverse_cumulative_percent, 0.0);
    }
}
