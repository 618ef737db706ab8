// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;


/// Target area, to the right of and below the launcher at the origin.
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Target {
	x: RangeInclusive<i32>,
	y: RangeInclusive<i32>,
}

impl Target {
	/// Whether the probe launched at `velocity` is ever within the target
	/// after some step. Drag pulls the horizontal velocity toward 0 and
	/// gravity lowers the vertical one by 1 per step.
	fn hits(&self, velocity: [i32; 2]) -> bool {
		let ([mut x, mut y], [mut vx, mut vy]) = ([0, 0], velocity);
		while x <= *self.x.end() && y >= *self.y.start() {
			if self.x.contains(&x) && self.y.contains(&y) { return true }
			x += vx;
			y += vy;
			vx -= vx.signum();
			vy -= 1;
		}
		false
	}

	/// All initial velocities that hit. Faster horizontally than the far edge
	/// overshoots in one step; faster upward than `-y.start() - 1` falls back
	/// through `y = 0` too fast to stop in the area, as does anything faster
	/// downward than `y.start()`.
	fn hitting_velocities(&self) -> impl Iterator<Item = [i32; 2]> + '_ {
		let (x_max, y_min) = (*self.x.end(), *self.y.start());
		itertools::iproduct!(1..=x_max, y_min..=-y_min - 1)
			.map(|(vx, vy)| [vx, vy])
			.filter(|&velocity| self.hits(velocity))
	}
}

fn apex(vy: i32) -> i32 {
	if vy > 0 { vy * (vy + 1) / 2 } else { 0 }
}


fn part1_impl(input_target: &Target) -> i32 {
	input_target.hitting_velocities()
		.map(|[_, vy]| apex(vy))
		.max()
		.unwrap_or_default()
}

fn part2_impl(input_target: &Target) -> usize {
	input_target.hitting_velocities().count()
}

pub fn solve(s: &str) -> Result<(i32, usize), TargetError> {
	let target = parsing::try_target_from_str(s)?;
	tracing::debug!(x = ?target.x, y = ?target.y, "parsed");
	Ok((part1_impl(&target), part2_impl(&target)))
}


pub use parsing::TargetError;

mod parsing {
	use std::{num::ParseIntError, ops::RangeInclusive};
	use super::Target;

	#[derive(Debug, thiserror::Error)]
	pub enum TargetError {
		#[error("expected “target area: x=<min>..<max>, y=<min>..<max>”")]
		Format,
		#[error("invalid bound")]
		Bound(#[source] ParseIntError),
		#[error("range {0}..{1} is reversed")]
		Reversed(i32, i32),
		#[error("target area must lie right of and below the launcher")]
		Placement,
	}

	fn try_range_from_str(s: &str) -> Result<RangeInclusive<i32>, TargetError> {
		let (min, max) = s.split_once("..").ok_or(TargetError::Format)?;
		let min = min.trim().parse().map_err(TargetError::Bound)?;
		let max = max.trim().parse().map_err(TargetError::Bound)?;
		if min > max { return Err(TargetError::Reversed(min, max)) }
		Ok(min..=max)
	}

	pub(super) fn try_target_from_str(s: &str) -> Result<Target, TargetError> {
		let (x, y) = s.trim()
			.strip_prefix("target area: x=")
			.and_then(|ranges| ranges.split_once(", y="))
			.ok_or(TargetError::Format)?;
		let target = Target { x: try_range_from_str(x)?, y: try_range_from_str(y)? };
		if *target.x.start() <= 0 || *target.y.end() >= 0 { return Err(TargetError::Placement) }
		Ok(target)
	}

	#[test]
	fn tests() {
		assert_eq!(try_target_from_str("target area: x=20..30, y=-10..-5\n").unwrap(),
			Target { x: 20..=30, y: -10..=-5 });
		assert!(matches!(try_target_from_str("x=20..30, y=-10..-5"), Err(TargetError::Format)));
		assert!(matches!(try_target_from_str("target area: x=30..20, y=-10..-5"),
			Err(TargetError::Reversed(30, 20))));
		assert!(matches!(try_target_from_str("target area: x=20..30, y=-10..5"),
			Err(TargetError::Placement)));
		assert!(matches!(try_target_from_str("target area: x=a..30, y=-10..-5"),
			Err(TargetError::Bound(_))));
	}
}


#[test]
fn tests() {
	let target = parsing::try_target_from_str("target area: x=20..30, y=-10..-5").unwrap();
	for velocity in [[7, 2], [6, 3], [9, 0], [6, 9]] {
		assert!(target.hits(velocity), "{velocity:?}");
	}
	assert!(!target.hits([17, -4]));
	assert_eq!(apex(9), 45);
	assert_eq!(part1_impl(&target), 45);
	assert_eq!(part2_impl(&target), 112);

	// Nothing outside the searched velocities hits
	let hitting = target.hitting_velocities().collect::<Vec<_>>();
	let exhaustive = itertools::iproduct!(-50..=50, -50..=50)
		.map(|(vx, vy)| [vx, vy])
		.filter(|&velocity| target.hits(velocity))
		.collect::<Vec<_>>();
	assert_eq!(hitting, exhaustive);
}
