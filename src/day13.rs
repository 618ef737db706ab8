// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{collections::BTreeSet, fmt::{self, Display, Write as _}};


type Dot = [u32; 2];

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Axis { X, Y }

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Fold(Axis, u32);

/// Dots on a sheet of `size[0]` × `size[1]`.
#[derive(Clone)]
struct Paper {
	dots: BTreeSet<Dot>,
	size: [u32; 2],
}

impl Paper {
	/// Sizes the sheet to just fit `dots`.
	fn new(dots: BTreeSet<Dot>) -> Self {
		let extent = |i: usize| dots.iter().map(|dot| dot[i] + 1).max().unwrap_or(0);
		let size = [extent(0), extent(1)];
		Paper { dots, size }
	}

	/// Folds the sheet along the line, merging the halves. Both halves are
	/// aligned at the line, so when the far half is longer the near one
	/// is shifted. Dots on the line are lost.
	fn fold(&self, Fold(axis, line): Fold) -> Self {
		let i = match axis { Axis::X => 0, Axis::Y => 1 };
		let mut size = self.size;
		size[i] = line.max(self.size[i].saturating_sub(line + 1));
		let dots = self.dots.iter()
			.filter(|dot| dot[i] != line)
			.map(|&dot| {
				let mut folded = dot;
				folded[i] = size[i] - dot[i].abs_diff(line);
				folded
			})
			.collect();
		Paper { dots, size }
	}
}

impl Display for Paper {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let [width, height] = self.size;
		for y in 0..height {
			for x in 0..width {
				f.write_char(if self.dots.contains(&[x, y]) { '#' } else { ' ' })?
			}
			if y < height - 1 { f.write_char('\n')? }
		}
		Ok(())
	}
}

struct Manual {
	paper: Paper,
	folds: Vec<Fold>,
}


fn part1_impl(input_manual: &Manual) -> usize {
	match input_manual.folds.first() {
		Some(&fold) => input_manual.paper.fold(fold).dots.len(),
		None => input_manual.paper.dots.len(),
	}
}

fn part2_impl(input_manual: &Manual) -> String {
	input_manual.folds.iter()
		.fold(input_manual.paper.clone(), |paper, &fold| paper.fold(fold))
		.to_string()
}

pub fn solve(s: &str) -> Result<(usize, String), ManualError> {
	let manual = parsing::try_manual_from_str(s)?;
	let [width, height] = manual.paper.size;
	tracing::debug!(dots = manual.paper.dots.len(), width, height, folds = manual.folds.len(), "parsed");
	Ok((part1_impl(&manual), part2_impl(&manual)))
}


pub use parsing::ManualError;

mod parsing {
	use std::num::ParseIntError;
	use super::{Dot, Axis, Fold, Paper, Manual};

	#[derive(Debug, thiserror::Error)]
	pub enum ManualError {
		#[error("no dots")]
		Empty,
		#[error("line {line}: expected “x,y”")]
		DotFormat { line: usize },
		#[error("line {line}: expected “fold along <x|y>=<n>”")]
		FoldFormat { line: usize },
		#[error("line {line}: invalid coordinate")]
		Coordinate { line: usize, source: ParseIntError },
	}

	pub(super) fn try_manual_from_str(s: &str) -> Result<Manual, ManualError> {
		let mut lines = s.lines().enumerate();

		let dots = lines.by_ref()
			.take_while(|(_, line)| !line.is_empty())
			.map(|(l, line)| -> Result<Dot, ManualError> {
				let (x, y) = line.split_once(',').ok_or(ManualError::DotFormat { line: l + 1 })?;
				let coordinate = |c: &str| c.trim().parse::<u32>()
					.map_err(|e| ManualError::Coordinate { line: l + 1, source: e });
				Ok([coordinate(x)?, coordinate(y)?])
			})
			.collect::<Result<_, _>>()?;

		let folds = lines
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| {
				let (axis, at) = line.strip_prefix("fold along ")
					.and_then(|fold| fold.split_once('='))
					.ok_or(ManualError::FoldFormat { line: l + 1 })?;
				let axis = match axis {
					"x" => Axis::X,
					"y" => Axis::Y,
					_ => return Err(ManualError::FoldFormat { line: l + 1 }),
				};
				let at = at.trim().parse()
					.map_err(|e| ManualError::Coordinate { line: l + 1, source: e })?;
				Ok(Fold(axis, at))
			})
			.collect::<Result<Vec<_>, _>>()?;

		let paper = Paper::new(dots);
		if paper.dots.is_empty() { return Err(ManualError::Empty) }
		Ok(Manual { paper, folds })
	}

	#[test]
	fn tests() {
		let manual = try_manual_from_str("1,2\n3,4\n\nfold along y=3\nfold along x=2\n").unwrap();
		assert_eq!((manual.paper.dots.len(), manual.paper.size), (2, [4, 5]));
		assert_eq!(manual.folds, [Fold(Axis::Y, 3), Fold(Axis::X, 2)]);
		assert!(matches!(try_manual_from_str("1;2"), Err(ManualError::DotFormat { line: 1 })));
		assert!(matches!(try_manual_from_str("1,2\n\nfold along z=3"),
			Err(ManualError::FoldFormat { line: 3 })));
		assert!(matches!(try_manual_from_str("1,2\n\nfold along y=-1"),
			Err(ManualError::Coordinate { line: 3, .. })));
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		6,10
		0,14
		9,10
		0,3
		10,4
		4,11
		6,0
		6,12
		4,1
		0,13
		10,12
		3,4
		3,0
		8,4
		1,10
		2,14
		8,10
		9,0

		fold along y=7
		fold along x=5
	" };
	let manual = parsing::try_manual_from_str(INPUT).unwrap();
	assert_eq!(part1_impl(&manual), 17);
	assert_eq!(part2_impl(&manual), [
		"#####",
		"#   #",
		"#   #",
		"#   #",
		"#####",
		"     ",
		"     ",
	].join("\n"));

	let paper = Paper::new([[0, 0], [4, 0], [2, 1]].into());
	assert_eq!(paper.size, [5, 2]);
	assert_eq!(paper.fold(Fold(Axis::X, 2)).to_string(), "# \n  ");
	// Longer right half: the left half lands at its far end
	assert_eq!(paper.fold(Fold(Axis::X, 1)).to_string(), "# #\n  #");
	assert_eq!(paper.fold(Fold(Axis::Y, 1)).to_string(), "#   #");
	assert_eq!(Paper::new(BTreeSet::new()).to_string(), "");

	// Longer bottom half keeps both dots
	let manual = parsing::try_manual_from_str("0,0\n0,4\n\nfold along y=1").unwrap();
	assert_eq!(part1_impl(&manual), 2);
	let folded = manual.paper.fold(manual.folds[0]);
	assert_eq!(folded.size, [1, 3]);
	assert_eq!(folded.dots, BTreeSet::from([[0, 0], [0, 2]]));
}
