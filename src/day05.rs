// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


type Point = [i32; 2];

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Segment {
	from: Point,
	to: Point,
}

impl Segment {
	fn is_axis_aligned(&self) -> bool {
		self.from[0] == self.to[0] || self.from[1] == self.to[1]
	}

	/// Walks from `from` through `to` (inclusive), horizontally, vertically
	/// or diagonally at 45°.
	fn points(&self) -> impl Iterator<Item = Point> {
		let step = [(self.to[0] - self.from[0]).signum(), (self.to[1] - self.from[1]).signum()];
		let len = (self.to[0] - self.from[0]).abs().max((self.to[1] - self.from[1]).abs());
		let from = self.from;
		(0..=len).map(move |i| [from[0] + i * step[0], from[1] + i * step[1]])
	}
}


/// Counts the points covered by at least two of `segments`.
fn count_overlaps<'a>(segments: impl Iterator<Item = &'a Segment>) -> usize {
	let mut covered = HashMap::<Point, usize>::new();
	for point in segments.flat_map(Segment::points) {
		*covered.entry(point).or_default() += 1;
	}
	covered.values().filter(|&&n| n >= 2).count()
}

fn part1_impl(input_segments: &[Segment]) -> usize {
	count_overlaps(input_segments.iter().filter(|s| s.is_axis_aligned()))
}

fn part2_impl(input_segments: &[Segment]) -> usize {
	count_overlaps(input_segments.iter())
}

pub fn solve(s: &str) -> Result<(usize, usize), VentsError> {
	let segments = parsing::try_segments_from_str(s)?;
	tracing::debug!(segments = segments.len(), "parsed");
	Ok((part1_impl(&segments), part2_impl(&segments)))
}


pub use parsing::{SegmentError, VentsError};

mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Point, Segment};

	#[derive(Debug, thiserror::Error)]
	pub enum SegmentError {
		#[error("expected “x1,y1 -> x2,y2”")]
		Format,
		#[error("invalid coordinate")]
		Coordinate(#[source] ParseIntError),
		#[error("neither horizontal, vertical nor diagonal at 45°")]
		Slope,
	}

	fn try_point_from_str(s: &str) -> Result<Point, SegmentError> {
		let (x, y) = s.trim().split_once(',').ok_or(SegmentError::Format)?;
		Ok([
			x.parse().map_err(SegmentError::Coordinate)?,
			y.parse().map_err(SegmentError::Coordinate)?,
		])
	}

	impl FromStr for Segment {
		type Err = SegmentError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (from, to) = s.split_once("->").ok_or(SegmentError::Format)?;
			let segment = Segment { from: try_point_from_str(from)?, to: try_point_from_str(to)? };
			let (dx, dy) = (segment.to[0] - segment.from[0], segment.to[1] - segment.from[1]);
			if dx != 0 && dy != 0 && dx.abs() != dy.abs() { return Err(SegmentError::Slope) }
			Ok(segment)
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub enum VentsError {
		#[error("no line segments")]
		Empty,
		#[error("line {line}")]
		Segment { line: usize, source: SegmentError },
	}

	pub(super) fn try_segments_from_str(s: &str) -> Result<Vec<Segment>, VentsError> {
		let segments = s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| VentsError::Segment { line: l + 1, source: e }))
			.collect::<Result<Vec<_>, _>>()?;
		if segments.is_empty() { return Err(VentsError::Empty) }
		Ok(segments)
	}

	#[test]
	fn tests() {
		assert_eq!("0,9 -> 5,9".parse::<Segment>().unwrap(), Segment { from: [0, 9], to: [5, 9] });
		assert!(matches!("0,9 -> 5,8".parse::<Segment>(), Err(SegmentError::Slope)));
		assert!(matches!("0,9 - 5,9".parse::<Segment>(), Err(SegmentError::Format)));
		assert!(matches!(try_segments_from_str("1,1 -> 3,3\n1,a -> 1,2"),
			Err(VentsError::Segment { line: 2, source: SegmentError::Coordinate(_) })));
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		0,9 -> 5,9
		8,0 -> 0,8
		9,4 -> 3,4
		2,2 -> 2,1
		7,0 -> 7,4
		6,4 -> 2,0
		0,9 -> 2,9
		3,4 -> 1,4
		0,0 -> 8,8
		5,5 -> 8,2
	" };
	let segments = parsing::try_segments_from_str(INPUT).unwrap();
	assert_eq!(part1_impl(&segments), 5);
	assert_eq!(part2_impl(&segments), 12);

	let diagonal = Segment { from: [9, 7], to: [7, 9] };
	assert_eq!(diagonal.points().collect::<Vec<_>>(), [[9, 7], [8, 8], [7, 9]]);
	let point = Segment { from: [3, 3], to: [3, 3] };
	assert_eq!(point.points().count(), 1);
}
