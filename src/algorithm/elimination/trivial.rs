//! # Trivial elimination
//!
//! A team is out of the race as soon as a single other team has already won more games than it can
//! possibly reach.
use crate::data::league::League;

/// All teams that have more wins than the target team can still reach.
///
/// # Arguments
///
/// * `league`: Division containing the target.
/// * `target`: Position of the team to check.
///
/// # Return value
///
/// Positions of the teams eliminating the target on their own, in league order. When this is not
/// empty, the target is eliminated.
pub(crate) fn witnesses(league: &League, target: usize) -> Vec<usize> {
    debug_assert!(target < league.nr_teams());

    let ceiling = league.team_at(target).max_wins();

    league.records().iter()
        .enumerate()
        .filter(|&(i, team)| i != target && u64::from(team.wins) > ceiling)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod test {
    use crate::algorithm::elimination::trivial::witnesses;
    use crate::data::league::{League, Team};

    #[test]
    fn strictly_more_wins() {
        let league = League::new(
            vec![
                Team::new("Chicago", 55, 0, 3),
                Team::new("Detroit", 49, 4, 5),
                Team::new("Cleveland", 54, 2, 3),
                Team::new("Toledo", 53, 3, 3),
            ],
            vec![
                vec![0, 1, 1, 1],
                vec![1, 0, 2, 2],
                vec![1, 2, 0, 0],
                vec![1, 2, 0, 0],
            ],
        ).unwrap();

        // Detroit can reach 54: Cleveland ties, which doesn't eliminate
        assert_eq!(witnesses(&league, 1), vec![0]);
        assert!(witnesses(&league, 0).is_empty());
        assert!(witnesses(&league, 2).is_empty());
    }

    #[test]
    fn single_team() {
        let league = League::new(vec![Team::new("Turing", 38, 26, 98)], vec![vec![0]]).unwrap();

        assert!(witnesses(&league, 0).is_empty());
    }
}
