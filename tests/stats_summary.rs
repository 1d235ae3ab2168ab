use cf_contest_stats::Error;
use cf_contest_stats::models::{Member, Party, Problem, ProblemResult, StandingsRow};
use cf_contest_stats::stats::{SolvedHistogram, problem_solver_counts, solved_count};

fn row(rank: u32, points: &[f64]) -> StandingsRow {
    StandingsRow {
        rank,
        party: Party {
            members: vec![Member {
                handle: format!("user{rank}"),
            }],
            participant_type: None,
        },
        problem_results: points.iter().map(|&points| ProblemResult { points }).collect(),
    }
}

fn problems(indices: &[&str]) -> Vec<Problem> {
    indices
        .iter()
        .map(|i| Problem {
            index: i.to_string(),
            name: None,
        })
        .collect()
}

#[test]
fn solved_count_counts_positive_points_only() {
    assert_eq!(solved_count(&row(1, &[500.0, 0.0, 0.5, -1.0])), 2);
    assert_eq!(solved_count(&row(1, &[])), 0);
}

#[test]
fn histogram_bins_cover_zero_to_max() {
    let h = SolvedHistogram::from_solved_counts(&[3, 3, 0, 5]);
    assert_eq!(h.total, 4);
    assert_eq!(h.max_solved(), 5);
    let counts: Vec<usize> = h.bins.iter().map(|b| b.count).collect();
    assert_eq!(counts, [1, 0, 0, 2, 0, 1]);
    assert_eq!(counts.iter().sum::<usize>(), h.total);

    let b3 = &h.bins[3];
    assert_eq!(b3.percent, 50.0);
    assert_eq!(b3.cumulative_percent, 75.0);
    assert_eq!(b3.reverse_cumulative_percent, 75.0);
    // solved >= 4 is the single 5-solver
    assert_eq!(h.bins[4].reverse_cumulative_percent, 25.0);
}

#[test]
fn histogram_boundary_percentages() {
    let solved: Vec<u32> = (0..997).map(|i| (i * 7 % 11) as u32).collect();
    let h = SolvedHistogram::from_solved_counts(&solved);
    assert_eq!(h.bins.iter().map(|b| b.count).sum::<usize>(), solved.len());
    assert_eq!(h.bins[0].reverse_cumulative_percent, 100.0);
    assert_eq!(h.bins.last().unwrap().cumulative_percent, 100.0);
    for w in h.bins.windows(2) {
        assert!(w[0].cumulative_percent <= w[1].cumulative_percent);
        assert!(w[0].reverse_cumulative_percent >= w[1].reverse_cumulative_percent);
    }
}

#[test]
fn histogram_percentages_have_one_decimal() {
    let h = SolvedHistogram::from_solved_counts(&[0, 1, 2]);
    assert_eq!(h.bins[0].percent, 33.3);
    assert_eq!(h.bins[1].cumulative_percent, 66.7);
    assert_eq!(h.bins[1].reverse_cumulative_percent, 66.7);
}

#[test]
fn histogram_from_rows_uses_solved_counts() {
    let rows = vec![row(1, &[1.0, 1.0]), row(2, &[1.0, 0.0]), row(3, &[0.0, 0.0])];
    let h = SolvedHistogram::from_rows(&rows);
    let counts: Vec<usize> = h.bins.iter().map(|b| b.count).collect();
    assert_eq!(counts, [1, 1, 1]);
}

#[test]
fn solvers_per_problem_by_position() {
    let rows = vec![
        row(1, &[500.0, 1000.0, 0.0]),
        row(2, &[500.0, 0.0, 0.0]),
        row(3, &[0.0, 0.0, 0.0]),
        row(4, &[250.0, 0.0, 0.0]),
    ];
    let got = problem_solver_counts(&problems(&["A", "B", "C"]), &rows).unwrap();
    let counts: Vec<(&str, usize)> = got.iter().map(|p| (p.index.as_str(), p.solvers)).collect();
    assert_eq!(counts, [("A", 3), ("B", 1), ("C", 0)]);
    assert_eq!(got[0].percent, 75.0);
    assert_eq!(got[2].percent, 0.0);
}

#[test]
fn short_row_is_misaligned_error() {
    let rows = vec![row(1, &[1.0, 1.0]), row(7, &[1.0])];
    let err = problem_solver_counts(&problems(&["A", "B"]), &rows).unwrap_err();
    match err {
        Error::MisalignedRow {
            rank,
            expected,
            found,
        } => {
            assert_eq!((rank, expected, found), (7, 2, 1));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn no_rows_gives_zero_solvers() {
    let got = problem_solver_counts(&problems(&["A"]), &[]).unwrap();
    assert_eq!(got[0].solvers, 0);
    assert_eq!(got[0].percent, 0.0);
}
