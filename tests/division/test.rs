use std::path::Path;

use itertools::Itertools;

use pennant::algorithm::elimination::{Certifier, Method};
use pennant::data::league::League;
use pennant::io::error::ImportError;
use pennant::io::import;

use super::{get_test_file_path, league};

/// Try every way of dividing the games left between the teams other than the target.
///
/// The target is assumed to win all of its games.
fn can_finish_first(league: &League, target: &str) -> bool {
    let ceiling = league.max_wins(target).unwrap();
    let others = league.teams().filter(|&team| team != target).collect::<Vec<_>>();
    let games = others.iter()
        .tuple_combinations()
        .map(|(&first, &second)| {
            let first_index = others.iter().position(|&team| team == first).unwrap();
            let second_index = others.iter().position(|&team| team == second).unwrap();
            (first_index, second_index, u64::from(league.against(first, second).unwrap()))
        })
        .collect::<Vec<_>>();
    let mut wins = others.iter()
        .map(|&team| u64::from(league.wins(team).unwrap()))
        .collect::<Vec<_>>();

    fn divide(games: &[(usize, usize, u64)], wins: &mut [u64], ceiling: u64) -> bool {
        if wins.iter().any(|&total| total > ceiling) {
            return false;
        }
        match games.split_first() {
            None => true,
            Some((&(i, j, count), rest)) => (0..=count).any(|won_by_i| {
                wins[i] += won_by_i;
                wins[j] += count - won_by_i;
                let feasible = divide(rest, wins, ceiling);
                wins[i] -= won_by_i;
                wins[j] -= count - won_by_i;
                feasible
            }),
        }
    }

    divide(&games, &mut wins, ceiling)
}

/// Properties every answer should have, whatever the division.
fn check_answers(league: &League) {
    let certifier = Certifier::new(league);

    for team in league.teams() {
        let status = certifier.status(team).unwrap();
        assert_eq!(status.is_eliminated(), status.certificate().is_some());
        assert_eq!(certifier.is_eliminated(team), Ok(status.is_eliminated()));

        if let Some(certificate) = status.certificate() {
            assert!(!certificate.is_empty());
            assert!(!certificate.contains(team));
            assert_eq!(certificate.proves(league, team), Ok(true), "{} for {}", certificate, team);
        }

        let ceiling = league.max_wins(team).unwrap();
        for other in league.teams().filter(|&other| other != team) {
            assert_eq!(league.against(team, other), league.against(other, team));
            if u64::from(league.wins(other).unwrap()) > ceiling {
                assert_eq!(status.method(), Some(Method::Trivial));
                assert!(status.certificate().unwrap().contains(other));
            }
        }
    }
}

fn eliminated(league: &League) -> Vec<(String, Vec<String>)> {
    Certifier::new(league).eliminated()
        .map(|(team, certificate)| (team.to_string(), certificate.iter().map(str::to_string).collect()))
        .collect()
}

fn owned(team: &str, certificate: &[&str]) -> (String, Vec<String>) {
    (team.to_string(), certificate.iter().map(|&name| name.to_string()).collect())
}

#[test]
fn teams1() {
    let league = league("teams1");

    assert_eq!(league.nr_teams(), 1);
    assert!(eliminated(&league).is_empty());
    check_answers(&league);
}

#[test]
fn teams2() {
    let league = league("teams2");

    assert!(eliminated(&league).is_empty());
    check_answers(&league);
}

#[test]
fn teams2b() {
    let league = league("teams2b");

    // Leiden can reach 32 wins at most, Delft already has 34
    assert_eq!(eliminated(&league), vec![owned("Leiden", &["Delft"])]);
    let certifier = Certifier::new(&league);
    assert_eq!(certifier.status("Leiden").unwrap().method(), Some(Method::Trivial));
    assert_eq!(certifier.is_eliminated("Delft"), Ok(false));
    check_answers(&league);
}

#[test]
fn teams4() {
    let league = league("teams4");

    assert_eq!(
        eliminated(&league),
        vec![
            owned("Philadelphia", &["Atlanta", "New_York"]),
            owned("Montreal", &["Atlanta"]),
        ],
    );
    let certifier = Certifier::new(&league);
    assert_eq!(certifier.status("Philadelphia").unwrap().method(), Some(Method::NonTrivial));
    assert_eq!(certifier.status("Montreal").unwrap().method(), Some(Method::Trivial));
    check_answers(&league);
}

#[test]
fn teams4b() {
    let league = league("teams4b");

    assert_eq!(eliminated(&league), vec![owned("Detroit", &["Chicago"])]);
    let certifier = Certifier::new(&league);
    assert_eq!(certifier.status("Detroit").unwrap().method(), Some(Method::Trivial));
    check_answers(&league);
}

#[test]
fn teams5() {
    let league = league("teams5");

    assert_eq!(
        eliminated(&league),
        vec![owned("Detroit", &["New_York", "Baltimore", "Boston", "Toronto"])],
    );
    check_answers(&league);
}

#[test]
fn teams6() {
    let league = league("teams6");

    // Ajax, Feyenoord and PSV alone would also do; the cut doesn't give the smallest certificate.
    assert_eq!(
        eliminated(&league),
        vec![owned("Utrecht", &["Ajax", "Feyenoord", "PSV", "AZ"])],
    );
    check_answers(&league);
}

#[test]
fn exhaustive() {
    for name in ["teams1", "teams2", "teams2b", "teams4", "teams4b", "teams5"] {
        let league = league(name);
        let certifier = Certifier::new(&league);

        for team in league.teams() {
            assert_eq!(
                certifier.is_eliminated(team).unwrap(),
                !can_finish_first(&league, team),
                "{} in {}", team, name,
            );
        }
    }
}

#[test]
fn malformed() {
    match import(&get_test_file_path("malformed")) {
        Err(ImportError::Parse(error)) => assert_eq!(error.line_number(), Some(3)),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn missing_file() {
    assert!(matches!(import(&get_test_file_path("teams0")), Err(ImportError::IO(_))));
    assert!(matches!(import(Path::new("")), Err(ImportError::InvalidArgument(_))));
}
