// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Counts how often the sum of a sliding window of `window` depths
/// increases from one position to the next.
///
/// Consecutive windows share all but their first and last depth, so
/// only those two need comparing.
fn count_increases(depths: &[u32], window: usize) -> usize {
	depths.iter()
		.zip(depths.iter().skip(window))
		.filter(|(prev, next)| next > prev)
		.count()
}


fn part1_impl(input_depths: &[u32]) -> usize {
	count_increases(input_depths, 1)
}

fn part2_impl(input_depths: &[u32]) -> usize {
	count_increases(input_depths, 3)
}

pub fn solve(s: &str) -> Result<(usize, usize), DepthsError> {
	let depths = parsing::try_depths_from_str(s)?;
	tracing::debug!(depths = depths.len(), "parsed");
	Ok((part1_impl(&depths), part2_impl(&depths)))
}


pub use parsing::DepthsError;

mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	pub enum DepthsError {
		#[error("no depths")]
		Empty,
		#[error("line {line}: invalid depth")]
		Depth { line: usize, source: ParseIntError },
	}

	pub(super) fn try_depths_from_str(s: &str) -> Result<Vec<u32>, DepthsError> {
		let depths = s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.trim().parse()
				.map_err(|e| DepthsError::Depth { line: l + 1, source: e }))
			.collect::<Result<Vec<_>, _>>()?;
		if depths.is_empty() { return Err(DepthsError::Empty) }
		Ok(depths)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		199
		200
		208
		210
		200
		207
		240
		269
		260
		263
	" };
	let depths = parsing::try_depths_from_str(INPUT).unwrap();
	assert_eq!(part1_impl(&depths), 7);
	assert_eq!(part2_impl(&depths), 5);

	let depths = [1, 2, 3, 2, 1, 2, 3];
	let increasing_pairs = depths.windows(2).filter(|w| w[1] > w[0]).count();
	assert_eq!(increasing_pairs, 4);
	assert_eq!(count_increases(&depths, 1), increasing_pairs);
	assert_eq!(count_increases(&depths, 7), 0);
	assert_eq!(count_increases(&depths, 10), 0);

	assert!(matches!(parsing::try_depths_from_str("1\nx\n"),
		Err(DepthsError::Depth { line: 2, .. })));
}
