// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;


const BASIN_RIM: u8 = 9;

struct Heightmap {
	heights: Vec<u8>,
	width: usize,
}

impl Heightmap {
	fn adjacent_positions(&self, from: usize) -> impl Iterator<Item = usize> {
		let (w, len) = (self.width, self.heights.len());
		let top = (from >= w).then(|| from - w);
		let left = (from % w > 0).then(|| from - 1);
		let right = (from % w < w - 1).then(|| from + 1);
		let bottom = (from + w < len).then(|| from + w);
		[top, left, right, bottom].into_iter().flatten()
	}

	fn low_points(&self) -> impl Iterator<Item = usize> + '_ {
		(0..self.heights.len()).filter(|&pos| self.adjacent_positions(pos)
			.all(|adj| self.heights[adj] > self.heights[pos]))
	}

	/// Breadth-first flood fill from `low_point` up to the rim.
	fn basin_size(&self, low_point: usize) -> usize {
		use std::collections::VecDeque;

		let mut seen = vec![false; self.heights.len()];
		let mut queue = VecDeque::from([low_point]);
		seen[low_point] = true;
		let mut size = 0;
		while let Some(pos) = queue.pop_front() {
			size += 1;
			for adj in self.adjacent_positions(pos) {
				if seen[adj] || self.heights[adj] == BASIN_RIM { continue }
				seen[adj] = true;
				queue.push_back(adj);
			}
		}
		size
	}
}


fn part1_impl(input_heightmap: &Heightmap) -> u32 {
	input_heightmap.low_points()
		.map(|pos| input_heightmap.heights[pos] as u32 + 1)
		.sum()
}

fn part2_impl(input_heightmap: &Heightmap) -> usize {
	input_heightmap.low_points()
		.map(|pos| input_heightmap.basin_size(pos))
		.sorted_by(|l, r| r.cmp(l))
		.take(3)
		.product()
}

pub fn solve(s: &str) -> Result<(u32, usize), HeightmapError> {
	let heightmap = parsing::try_heightmap_from_str(s)?;
	tracing::debug!(width = heightmap.width, height = heightmap.heights.len() / heightmap.width, "parsed");
	Ok((part1_impl(&heightmap), part2_impl(&heightmap)))
}


pub use parsing::HeightmapError;

mod parsing {
	use super::Heightmap;

	#[derive(Debug, thiserror::Error)]
	pub enum HeightmapError {
		#[error("no heights")]
		Empty,
		#[error("line {line}: expected {expected} heights, found {found}")]
		Width { line: usize, expected: usize, found: usize },
		#[error("line {line}, column {column}: invalid height “{found}”")]
		Height { line: usize, column: usize, found: char },
	}

	pub(super) fn try_heightmap_from_str(s: &str) -> Result<Heightmap, HeightmapError> {
		let mut width = None;
		let mut heights = Vec::new();
		for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.is_empty()) {
			let expected = *width.get_or_insert(line.len());
			if line.len() != expected {
				return Err(HeightmapError::Width { line: l + 1, expected, found: line.len() })
			}
			for (c, chr) in line.chars().enumerate() {
				let height = chr.to_digit(10)
					.ok_or(HeightmapError::Height { line: l + 1, column: c + 1, found: chr })?;
				heights.push(height as u8);
			}
		}
		match width {
			Some(width) if width > 0 => Ok(Heightmap { heights, width }),
			_ => Err(HeightmapError::Empty),
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2199943210
		3987894921
		9856789892
		8767896789
		9899965678
	" };
	let heightmap = parsing::try_heightmap_from_str(INPUT).unwrap();
	assert_eq!(heightmap.low_points().collect::<Vec<_>>(), [1, 9, 22, 46]);
	assert_eq!(part1_impl(&heightmap), 15);
	assert_eq!([1, 9, 22, 46].map(|pos| heightmap.basin_size(pos)), [3, 9, 14, 9]);
	assert_eq!(part2_impl(&heightmap), 1134);

	assert!(matches!(parsing::try_heightmap_from_str("123\n45"),
		Err(HeightmapError::Width { line: 2, expected: 3, found: 2 })));
	assert!(matches!(parsing::try_heightmap_from_str("1a3"),
		Err(HeightmapError::Height { line: 1, column: 2, found: 'a' })));
}
