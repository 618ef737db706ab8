// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct RiskGrid {
	risks: Vec<u8>,
	width: usize,
}

impl RiskGrid {
	fn height(&self) -> usize {
		self.risks.len() / self.width
	}

	fn adjacent_positions(&self, from: usize) -> impl Iterator<Item = usize> {
		let (w, len) = (self.width, self.risks.len());
		let top = (from >= w).then(|| from - w);
		let left = (from % w > 0).then(|| from - 1);
		let right = (from % w < w - 1).then(|| from + 1);
		let bottom = (from + w < len).then(|| from + w);
		[top, left, right, bottom].into_iter().flatten()
	}

	/// Tiles the grid `factor` × `factor` times, each tile’s risks
	/// increased by its distance from the top-left tile, wrapping 9 to 1.
	fn expanded(&self, factor: usize) -> Self {
		let (width, height) = (self.width * factor, self.height() * factor);
		let risks = itertools::iproduct!(0..height, 0..width)
			.map(|(y, x)| {
				let (tile_x, tile_y) = (x / self.width, y / self.height());
				let risk = self.risks[(y % self.height()) * self.width + x % self.width];
				((risk as usize - 1 + tile_x + tile_y) % 9 + 1) as u8
			})
			.collect();
		RiskGrid { risks, width }
	}

	/// Dijkstra’s from the top-left to the bottom-right position.
	fn lowest_total_risk(&self) -> Option<u64> {
		use std::{cmp::Reverse, collections::BinaryHeap};

		let target = self.risks.len().checked_sub(1)?;
		let mut totals = vec![u64::MAX; self.risks.len()];
		let mut heap = BinaryHeap::new();
		totals[0] = 0;
		heap.push((Reverse(0), 0));

		while let Some((Reverse(total), pos)) = heap.pop() {
			if pos == target { return Some(total) }
			// Stale entry, superseded by a lower total
			if total > totals[pos] { continue }
			for adj in self.adjacent_positions(pos) {
				let adj_total = total + self.risks[adj] as u64;
				if adj_total < totals[adj] {
					totals[adj] = adj_total;
					heap.push((Reverse(adj_total), adj));
				}
			}
		}
		None
	}
}


fn part1_impl(input_grid: &RiskGrid) -> u64 {
	input_grid.lowest_total_risk().unwrap_or_default()
}

fn part2_impl(input_grid: &RiskGrid) -> u64 {
	let expanded = input_grid.expanded(5);
	tracing::debug!(width = expanded.width, height = expanded.height(), "expanded");
	expanded.lowest_total_risk().unwrap_or_default()
}

pub fn solve(s: &str) -> Result<(u64, u64), RiskGridError> {
	let grid = parsing::try_grid_from_str(s)?;
	tracing::debug!(width = grid.width, height = grid.height(), "parsed");
	Ok((part1_impl(&grid), part2_impl(&grid)))
}


pub use parsing::RiskGridError;

mod parsing {
	use super::RiskGrid;

	#[derive(Debug, thiserror::Error)]
	pub enum RiskGridError {
		#[error("no risk levels")]
		Empty,
		#[error("line {line}: expected {expected} risk levels, found {found}")]
		Width { line: usize, expected: usize, found: usize },
		#[error("line {line}, column {column}: invalid risk level “{found}”")]
		Risk { line: usize, column: usize, found: char },
	}

	pub(super) fn try_grid_from_str(s: &str) -> Result<RiskGrid, RiskGridError> {
		let mut width = None;
		let mut risks = Vec::new();
		for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.is_empty()) {
			let expected = *width.get_or_insert(line.len());
			if line.len() != expected {
				return Err(RiskGridError::Width { line: l + 1, expected, found: line.len() })
			}
			for (c, chr) in line.chars().enumerate() {
				match chr.to_digit(10) {
					Some(risk @ 1..=9) => risks.push(risk as u8),
					_ => return Err(RiskGridError::Risk { line: l + 1, column: c + 1, found: chr }),
				}
			}
		}
		match width {
			Some(width) if width > 0 => Ok(RiskGrid { risks, width }),
			_ => Err(RiskGridError::Empty),
		}
	}

	#[test]
	fn tests() {
		assert!(matches!(try_grid_from_str("12\n3"), Err(RiskGridError::Width { line: 2, expected: 2, found: 1 })));
		assert!(matches!(try_grid_from_str("120"), Err(RiskGridError::Risk { line: 1, column: 3, found: '0' })));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		1163751742
		1381373672
		2136511328
		3694931569
		7463417111
		1319128137
		1359912421
		3125421639
		1293138521
		2311944581
	" };

	#[test]
	fn expansion() {
		let grid = parsing::try_grid_from_str("8").unwrap();
		let expanded = grid.expanded(5);
		assert_eq!(expanded, parsing::try_grid_from_str(indoc::indoc! { "
			89123
			91234
			12345
			23456
			34567
		" }).unwrap());

		let grid = parsing::try_grid_from_str(INPUT).unwrap();
		let expanded = grid.expanded(5);
		assert_eq!((expanded.width, expanded.height()), (50, 50));
		assert!(expanded.risks.iter().all(|r| (1..=9).contains(r)));
		assert_eq!(&expanded.risks[..10], &grid.risks[..10]);
		assert_eq!(&expanded.risks[10..20], &[2, 2, 7, 4, 8, 6, 2, 8, 5, 3]);
		assert_eq!(grid.expanded(1), grid);
	}

	#[test]
	fn lowest_total_risk() {
		let single = parsing::try_grid_from_str("7").unwrap();
		assert_eq!(single.lowest_total_risk(), Some(0));

		// Uniform risk: any shortest path enters `width + height - 2` positions
		for (w, h, c) in [(1, 5, 3), (4, 4, 1), (6, 3, 9)] {
			let grid = RiskGrid { risks: vec![c; w * h], width: w };
			assert_eq!(grid.lowest_total_risk(), Some(((w + h - 2) * c as usize) as u64));
		}

		// Cheapest path doubles back
		let detour = parsing::try_grid_from_str(indoc::indoc! { "
			19111
			19191
			11191
		" }).unwrap();
		assert_eq!(detour.lowest_total_risk(), Some(10));
	}

	#[test]
	fn tests() {
		let grid = parsing::try_grid_from_str(INPUT).unwrap();
		assert_eq!(part1_impl(&grid), 40);
		assert_eq!(part2_impl(&grid), 315);
	}
}
