// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Report {
	numbers: Vec<u32>,
	width: usize,
}

impl Report {
	fn mask(&self) -> u32 {
		u32::MAX >> (32 - self.width)
	}
}

/// Whether at least as many of `numbers` have bit `bit` set as unset.
fn ones_prevail<'a>(numbers: impl IntoIterator<Item = &'a u32>, bit: usize) -> bool {
	let (ones, total) = numbers.into_iter()
		.fold((0, 0), |(ones, total), n| (ones + (n >> bit & 1) as usize, total + 1));
	ones * 2 >= total
}


fn part1_impl(input_report: &Report) -> u64 {
	let gamma = (0..input_report.width)
		.filter(|&bit| ones_prevail(&input_report.numbers, bit))
		.fold(0, |gamma, bit| gamma | 1 << bit);
	let epsilon = !gamma & input_report.mask();
	gamma as u64 * epsilon as u64
}


/// Filters numbers bit by bit, from the most significant one, keeping those
/// whose bit agrees with `keep(ones_prevail)` until only one remains.
fn rating(report: &Report, keep: fn(bool) -> bool) -> u32 {
	let mut remaining = report.numbers.clone();
	for bit in (0..report.width).rev() {
		if remaining.len() <= 1 { break }
		let want = keep(ones_prevail(&remaining, bit)) as u32;
		remaining.retain(|n| n >> bit & 1 == want);
	}
	remaining.first().copied().unwrap_or_default()
}

fn part2_impl(input_report: &Report) -> u64 {
	let oxygen = rating(input_report, |ones| ones);
	let co2 = rating(input_report, |ones| !ones);
	tracing::debug!(oxygen, co2, "ratings");
	oxygen as u64 * co2 as u64
}

pub fn solve(s: &str) -> Result<(u64, u64), ReportError> {
	let report = parsing::try_report_from_str(s)?;
	tracing::debug!(numbers = report.numbers.len(), width = report.width, "parsed");
	Ok((part1_impl(&report), part2_impl(&report)))
}


pub use parsing::ReportError;

mod parsing {
	use super::Report;

	#[derive(Debug, thiserror::Error)]
	pub enum ReportError {
		#[error("no numbers")]
		Empty,
		#[error("line {line}: expected {expected} binary digits, found {found}")]
		Width { line: usize, expected: usize, found: usize },
		#[error("line {line}, column {column}: invalid binary digit “{found}”")]
		Digit { line: usize, column: usize, found: char },
	}

	pub(super) fn try_report_from_str(s: &str) -> Result<Report, ReportError> {
		let mut width = None;
		let numbers = s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| {
				let expected = *width.get_or_insert(line.len());
				if line.len() != expected || !(1..=32).contains(&line.len()) {
					return Err(ReportError::Width { line: l + 1, expected, found: line.len() })
				}
				line.chars().enumerate().try_fold(0, |n, (c, chr)| match chr {
					'0' => Ok(n << 1),
					'1' => Ok(n << 1 | 1),
					found => Err(ReportError::Digit { line: l + 1, column: c + 1, found }),
				})
			})
			.collect::<Result<Vec<_>, _>>()?;
		match width {
			Some(width) if !numbers.is_empty() => Ok(Report { numbers, width }),
			_ => Err(ReportError::Empty),
		}
	}

	#[test]
	fn tests() {
		let report = try_report_from_str("0101\n1100\n").unwrap();
		assert_eq!((report.numbers.as_slice(), report.width), (&[0b0101, 0b1100][..], 4));
		assert!(matches!(try_report_from_str("0101\n110"),
			Err(ReportError::Width { line: 2, expected: 4, found: 3 })));
		assert!(matches!(try_report_from_str("01x1"),
			Err(ReportError::Digit { line: 1, column: 3, found: 'x' })));
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		00100
		11110
		10110
		10111
		10101
		01111
		00111
		11100
		10000
		11001
		00010
		01010
	" };
	let report = parsing::try_report_from_str(INPUT).unwrap();
	assert_eq!(part1_impl(&report), 198);
	assert_eq!(rating(&report, |ones| ones), 23);
	assert_eq!(rating(&report, |ones| !ones), 10);
	assert_eq!(part2_impl(&report), 230);
}
