// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const SPAWN_TIMER: usize = 8;
const RESET_TIMER: usize = 6;

/// Number of lanternfish per internal timer value.
#[derive(Clone, Copy)]
struct School([u64; SPAWN_TIMER + 1]);

impl School {
	fn from_timers(timers: &[u8]) -> Self {
		let mut counts = [0; SPAWN_TIMER + 1];
		for &timer in timers { counts[timer as usize] += 1 }
		School(counts)
	}

	fn tick(&mut self) {
		// Fish at timer 0 end up at `SPAWN_TIMER` (as their offspring)…
		self.0.rotate_left(1);
		// …and (as themselves) at `RESET_TIMER`
		self.0[RESET_TIMER] += self.0[SPAWN_TIMER];
	}

	fn population_after(mut self, days: usize) -> u64 {
		for _ in 0..days { self.tick() }
		self.0.iter().sum()
	}
}


fn part1_impl(input_timers: &[u8]) -> u64 {
	School::from_timers(input_timers).population_after(80)
}

fn part2_impl(input_timers: &[u8]) -> u64 {
	School::from_timers(input_timers).population_after(256)
}

pub fn solve(s: &str) -> Result<(u64, u64), TimersError> {
	let timers = parsing::try_timers_from_str(s)?;
	tracing::debug!(fish = timers.len(), "parsed");
	Ok((part1_impl(&timers), part2_impl(&timers)))
}


pub use parsing::TimersError;

mod parsing {
	use std::num::ParseIntError;
	use super::SPAWN_TIMER;

	#[derive(Debug, thiserror::Error)]
	pub enum TimersError {
		#[error("no timers")]
		Empty,
		#[error("expected all timers on one line")]
		Lines,
		#[error("timer {offset}: invalid number")]
		Number { offset: usize, source: ParseIntError },
		#[error("timer {offset}: {found} exceeds 8")]
		Range { offset: usize, found: u8 },
	}

	pub(super) fn try_timers_from_str(s: &str) -> Result<Vec<u8>, TimersError> {
		let s = s.trim();
		if s.is_empty() { return Err(TimersError::Empty) }
		if s.contains('\n') { return Err(TimersError::Lines) }
		s.split(',')
			.enumerate()
			.map(|(o, timer)| match timer.trim().parse::<u8>() {
				Ok(found) if found as usize > SPAWN_TIMER =>
					Err(TimersError::Range { offset: o + 1, found }),
				res => res.map_err(|e| TimersError::Number { offset: o + 1, source: e }),
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	/// Simulates every fish individually.
	fn brute_force_population(timers: &[u8], days: usize) -> u64 {
		let mut fish = timers.to_vec();
		for _ in 0..days {
			let spawned = fish.iter().filter(|&&t| t == 0).count();
			for t in fish.iter_mut() {
				*t = if *t == 0 { RESET_TIMER as u8 } else { *t - 1 };
			}
			fish.extend(std::iter::repeat(SPAWN_TIMER as u8).take(spawned));
		}
		fish.len() as u64
	}

	#[test]
	fn tests() {
		let timers = parsing::try_timers_from_str("3,4,3,1,2\n").unwrap();
		assert_eq!(School::from_timers(&timers).population_after(18), 26);
		assert_eq!(part1_impl(&timers), 5934);
		assert_eq!(part2_impl(&timers), 26984457539);

		for days in 0..=20 {
			assert_eq!(School::from_timers(&timers).population_after(days),
				brute_force_population(&timers, days));
			assert_eq!(School::from_timers(&[0]).population_after(days),
				brute_force_population(&[0], days));
		}

		// A lone fish at timer 0 spawns on day 1, then every 7 days, while its
		// offspring start spawning 9 days after being spawned
		let lone = School::from_timers(&[0]);
		assert_eq!(lone.population_after(0), 1);
		assert_eq!(lone.population_after(1), 2);
		assert_eq!(lone.population_after(8), 3);
		assert_eq!(lone.population_after(10), 4);

		assert!(matches!(parsing::try_timers_from_str("3,9"),
			Err(TimersError::Range { offset: 2, found: 9 })));
		assert!(matches!(parsing::try_timers_from_str("3,x"),
			Err(TimersError::Number { offset: 2, .. })));
		assert!(matches!(parsing::try_timers_from_str("3\n4"), Err(TimersError::Lines)));
	}
}
