//! # Division standings format
//!
//! A division is described by a line holding the number of teams, followed by one line per team:
//!
//! ```text
//! 4
//! Atlanta       83 71  8  0 1 6 1
//! Philadelphia  80 79  3  1 0 0 2
//! New_York      78 78  6  6 0 0 0
//! Montreal      77 82  3  1 2 0 0
//! ```
//!
//! Each team line holds the name, wins, losses and remaining games, followed by the games left
//! against every team in the division in file order. Only the entries against teams listed on
//! earlier lines are read; the table is symmetric, so the rest can be derived from those.
use std::str::FromStr;

use crate::data::league::{League, Team};
use crate::io::error::{FileLocation, ImportError, ParseError};

/// Number of fields on a team line before the games left against other teams.
const RECORD_FIELDS: usize = 4;

/// Parse the text representation of a division.
///
/// # Arguments
///
/// * `division`: Complete contents of a division file.
///
/// # Errors
///
/// A `ParseError` if the text is not well-formed and an `InconsistencyError` if the records don't
/// form a single division (a team name that appears twice, for example).
pub fn parse(division: &str) -> Result<League, ImportError> {
    let mut lines = (1..).zip(division.lines());

    let nr_teams = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((line_number, line)) => break parse_number::<usize>(line.trim(), "team count", (line_number, line))?,
            None => return Err(ParseError::new("Missing team count").into()),
        }
    };

    // Sizes are only trusted once that many lines have been read
    let rows = lines.by_ref()
        .take(nr_teams)
        .enumerate()
        .map(|(row, (line_number, line))| parse_team(line, row, (line_number, line)))
        .collect::<Result<Vec<_>, _>>()?;
    if rows.len() < nr_teams {
        return Err(ParseError::new(format!(
            "Expected {} teams, but the input ends after {}", nr_teams, rows.len(),
        )).into());
    }
    if let Some((line_number, line)) = lines.find(|(_, line)| !line.trim().is_empty()) {
        return Err(ParseError::with_file_location(
            format!("More team lines than the {} announced", nr_teams),
            (line_number, line),
        ).into());
    }

    let mut teams = Vec::with_capacity(nr_teams);
    let mut against = vec![vec![0; nr_teams]; nr_teams];
    for (row, (team, lower_triangle)) in rows.into_iter().enumerate() {
        for (column, games) in lower_triangle.into_iter().enumerate() {
            against[row][column] = games;
            against[column][row] = games;
        }
        teams.push(team);
    }

    tracing::trace!(nr_teams, "parsed division");
    Ok(League::new(teams, against)?)
}

/// Parse a single team line.
///
/// # Arguments
///
/// * `line`: The team line.
/// * `row`: Zero based position of this team; as many matchup fields are read.
/// * `file_location`: Used for error reporting only.
///
/// # Return value
///
/// The team record and the games left against each of the teams on earlier lines.
fn parse_team(line: &str, row: usize, file_location: FileLocation) -> Result<(Team, Vec<u32>), ParseError> {
    let fields = line.split_whitespace().collect::<Vec<_>>();
    if fields.len() < RECORD_FIELDS + row {
        return Err(ParseError::with_file_location(
            format!(
                "Team line {} should have at least {} fields, found {}",
                row + 1, RECORD_FIELDS + row, fields.len(),
            ),
            file_location,
        ));
    }

    let team = Team::new(
        fields[0],
        parse_number(fields[1], "wins", file_location)?,
        parse_number(fields[2], "losses", file_location)?,
        parse_number(fields[3], "remaining games", file_location)?,
    );
    let lower_triangle = fields[RECORD_FIELDS..(RECORD_FIELDS + row)].iter()
        .map(|field| parse_number(field, "games left against another team", file_location))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((team, lower_triangle))
}

fn parse_number<T: FromStr>(field: &str, what: &str, file_location: FileLocation) -> Result<T, ParseError> {
    field.parse().map_err(|_| ParseError::with_file_location(
        format!("Value \"{}\" for {} is not a non-negative integer", field, what),
        file_location,
    ))
}
