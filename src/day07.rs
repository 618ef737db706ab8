// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use num_integer::Integer;


fn linear_cost(distance: u64) -> u64 {
	distance
}

fn triangular_cost(distance: u64) -> u64 {
	distance * (distance + 1) / 2
}

fn total_fuel(positions: &[i64], target: i64, cost: fn(u64) -> u64) -> u64 {
	positions.iter().map(|&p| cost(p.abs_diff(target))).sum()
}


fn part1_impl(input_positions: &[i64]) -> u64 {
	// Any position between the two middle ones is optimal for an even count
	let mut sorted = input_positions.to_vec();
	sorted.sort_unstable();
	let median = sorted[sorted.len() / 2];
	total_fuel(input_positions, median, linear_cost)
}

fn part2_impl(input_positions: &[i64]) -> u64 {
	// The continuous optimum is within ½ of the mean, so the
	// discrete one is within `floor(mean) - 1..=floor(mean) + 2`.
	let sum: i64 = input_positions.iter().sum();
	let mean = Integer::div_floor(&sum, &(input_positions.len() as i64));
	tracing::debug!(mean, "searching around mean");
	(mean - 1..=mean + 2)
		.map(|target| total_fuel(input_positions, target, triangular_cost))
		.min()
		.unwrap_or_default()
}

pub fn solve(s: &str) -> Result<(u64, u64), PositionsError> {
	let positions = parsing::try_positions_from_str(s)?;
	tracing::debug!(crabs = positions.len(), "parsed");
	Ok((part1_impl(&positions), part2_impl(&positions)))
}


pub use parsing::PositionsError;

mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	pub enum PositionsError {
		#[error("no positions")]
		Empty,
		#[error("position {offset}: invalid number")]
		Number { offset: usize, source: ParseIntError },
	}

	pub(super) fn try_positions_from_str(s: &str) -> Result<Vec<i64>, PositionsError> {
		let s = s.trim();
		if s.is_empty() { return Err(PositionsError::Empty) }
		s.split(',')
			.enumerate()
			.map(|(o, pos)| pos.trim().parse()
				.map_err(|e| PositionsError::Number { offset: o + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	let positions = parsing::try_positions_from_str("16,1,2,0,4,2,7,1,2,14\n").unwrap();
	assert_eq!(part1_impl(&positions), 37);
	assert_eq!(total_fuel(&positions, 1, linear_cost), 41);
	assert_eq!(total_fuel(&positions, 10, linear_cost), 71);
	assert_eq!(part2_impl(&positions), 168);
	assert_eq!(total_fuel(&positions, 2, triangular_cost), 206);

	// Exhaustive search agrees
	let cases: [&[i64]; 4] = [&positions, &[0, 0, 0, 100], &[5], &[1, 1000, 1001]];
	for positions in cases {
		let (min, max) = (*positions.iter().min().unwrap(), *positions.iter().max().unwrap());
		let best = |cost: fn(u64) -> u64| (min..=max).map(|t| total_fuel(positions, t, cost)).min().unwrap();
		assert_eq!(part1_impl(positions), best(linear_cost));
		assert_eq!(part2_impl(positions), best(triangular_cost));
	}

	assert!(matches!(parsing::try_positions_from_str("1,,2"),
		Err(PositionsError::Number { offset: 2, .. })));
}
