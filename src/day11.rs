// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const FLASH_LEVEL: u8 = 9;
const SYNC_STEP_LIMIT: usize = 100_000;

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Cavern {
	energy: Vec<u8>,
	width: usize,
}

impl Cavern {
	fn neighbors(&self, from: usize) -> impl Iterator<Item = usize> {
		let (w, h) = (self.width as isize, (self.energy.len() / self.width) as isize);
		let (x, y) = ((from % self.width) as isize, (from / self.width) as isize);
		itertools::iproduct!(-1..=1, -1..=1)
			.filter(|&d| d != (0, 0))
			.map(move |(dx, dy)| (x + dx, y + dy))
			.filter(move |&(x, y)| (0..w).contains(&x) && (0..h).contains(&y))
			.map(move |(x, y)| (y * w + x) as usize)
	}

	/// Advances one step and returns how many octopuses flashed.
	fn step(&mut self) -> usize {
		let mut flashing = Vec::new();
		for (pos, energy) in self.energy.iter_mut().enumerate() {
			*energy += 1;
			if *energy == FLASH_LEVEL + 1 { flashing.push(pos) }
		}

		let mut flashes = 0;
		while let Some(pos) = flashing.pop() {
			flashes += 1;
			for adj in self.neighbors(pos) {
				let energy = &mut self.energy[adj];
				// Only the increment crossing the level triggers a flash
				*energy = energy.saturating_add(1);
				if *energy == FLASH_LEVEL + 1 { flashing.push(adj) }
			}
		}

		for energy in self.energy.iter_mut().filter(|e| **e > FLASH_LEVEL) {
			*energy = 0;
		}
		flashes
	}
}


fn part1_impl(mut input_cavern: Cavern) -> usize {
	(0..100).map(|_| input_cavern.step()).sum()
}

/// The first step in which all octopuses flash, if any within `limit` steps.
fn first_synchronized_step(mut cavern: Cavern, limit: usize) -> Option<usize> {
	let all = cavern.energy.len();
	(1..=limit).find(|&step| {
		let flashes = cavern.step();
		tracing::trace!(step, flashes, "stepped");
		flashes == all
	})
}

fn part2_impl(input_cavern: Cavern) -> Option<usize> {
	first_synchronized_step(input_cavern, SYNC_STEP_LIMIT)
}

pub fn solve(s: &str) -> Result<(usize, usize), CavernError> {
	let cavern = parsing::try_cavern_from_str(s)?;
	tracing::debug!(octopuses = cavern.energy.len(), "parsed");
	let synchronized = part2_impl(cavern.clone())
		.ok_or(CavernError::Unsynchronized { steps: SYNC_STEP_LIMIT })?;
	Ok((part1_impl(cavern), synchronized))
}


pub use parsing::CavernError;

mod parsing {
	use super::{Cavern, FLASH_LEVEL};

	#[derive(Debug, thiserror::Error)]
	pub enum CavernError {
		#[error("no octopuses")]
		Empty,
		#[error("line {line}: expected {expected} octopuses, found {found}")]
		Width { line: usize, expected: usize, found: usize },
		#[error("line {line}, column {column}: invalid energy level “{found}”")]
		Energy { line: usize, column: usize, found: char },
		#[error("octopuses not synchronized within {steps} steps")]
		Unsynchronized { steps: usize },
	}

	pub(super) fn try_cavern_from_str(s: &str) -> Result<Cavern, CavernError> {
		let mut width = None;
		let mut energy = Vec::new();
		for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.is_empty()) {
			let expected = *width.get_or_insert(line.len());
			if line.len() != expected {
				return Err(CavernError::Width { line: l + 1, expected, found: line.len() })
			}
			for (c, chr) in line.chars().enumerate() {
				match chr.to_digit(10) {
					Some(level) if level <= FLASH_LEVEL as u32 => energy.push(level as u8),
					_ => return Err(CavernError::Energy { line: l + 1, column: c + 1, found: chr }),
				}
			}
		}
		match width {
			Some(width) if width > 0 => Ok(Cavern { energy, width }),
			_ => Err(CavernError::Empty),
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		5483143223
		2745854711
		5264556173
		6141336146
		6357385478
		4167524645
		2176841721
		6882881134
		4846848554
		5283751526
	" };
	let cavern = parsing::try_cavern_from_str(INPUT).unwrap();

	let mut stepped = cavern.clone();
	assert_eq!(stepped.step(), 0);
	assert_eq!(stepped.step(), 35);
	let mut small = parsing::try_cavern_from_str("11111\n19991\n19191\n19991\n11111").unwrap();
	assert_eq!(small.step(), 9);
	assert_eq!(small, parsing::try_cavern_from_str("34543\n40004\n50005\n40004\n34543").unwrap());

	let mut ten = cavern.clone();
	assert_eq!((0..10).map(|_| ten.step()).sum::<usize>(), 204);
	assert_eq!(part1_impl(cavern.clone()), 1656);
	assert_eq!(part2_impl(cavern.clone()), Some(195));
	assert_eq!(first_synchronized_step(cavern.clone(), 195), Some(195));
	assert_eq!(first_synchronized_step(cavern.clone(), 194), None);

	// A lone octopus flashes every tenth step
	let lone = parsing::try_cavern_from_str("0").unwrap();
	assert_eq!(first_synchronized_step(lone.clone(), 9), None);
	assert_eq!(first_synchronized_step(lone, 10), Some(10));
}
