// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Command {
	Forward(u32),
	Down(u32),
	Up(u32),
}

#[derive(Default)]
struct Position {
	horizontal: i64,
	depth: i64,
	aim: i64,
}

impl Position {
	/// Follows `command` the naive way, with up & down moving the submarine.
	fn moved(self, command: Command) -> Self {
		use Command::*;
		match command {
			Forward(x) => Position { horizontal: self.horizontal + x as i64, ..self },
			Down(x) => Position { depth: self.depth + x as i64, ..self },
			Up(x) => Position { depth: self.depth - x as i64, ..self },
		}
	}

	/// Follows `command` the manual’s way, with up & down adjusting the aim.
	fn aimed(self, command: Command) -> Self {
		use Command::*;
		match command {
			Forward(x) => Position {
				horizontal: self.horizontal + x as i64,
				depth: self.depth + self.aim * x as i64,
				..self
			},
			Down(x) => Position { aim: self.aim + x as i64, ..self },
			Up(x) => Position { aim: self.aim - x as i64, ..self },
		}
	}
}


/// Depth and aim may go negative; the submarine is not stopped by the surface.
fn navigate(commands: &[Command], step: fn(Position, Command) -> Position) -> i64 {
	let Position { horizontal, depth, .. } = commands.iter()
		.fold(Position::default(), |pos, &cmd| step(pos, cmd));
	horizontal * depth
}

fn part1_impl(input_commands: &[Command]) -> i64 {
	navigate(input_commands, Position::moved)
}

fn part2_impl(input_commands: &[Command]) -> i64 {
	navigate(input_commands, Position::aimed)
}

pub fn solve(s: &str) -> Result<(i64, i64), CourseError> {
	let commands = parsing::try_commands_from_str(s)?;
	tracing::debug!(commands = commands.len(), "parsed");
	Ok((part1_impl(&commands), part2_impl(&commands)))
}


pub use parsing::{CommandError, CourseError};

mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Command;

	#[derive(Debug, thiserror::Error)]
	pub enum CommandError {
		#[error("expected “<command> <amount>”")]
		Format,
		#[error("unknown command “{0}”")]
		Command(String),
		#[error("invalid amount")]
		Amount(#[source] ParseIntError),
	}

	impl FromStr for Command {
		type Err = CommandError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (command, amount) = s.split_once(' ')
				.ok_or(CommandError::Format)?;
			let amount = amount.parse().map_err(CommandError::Amount)?;
			match command {
				"forward" => Ok(Command::Forward(amount)),
				"down" => Ok(Command::Down(amount)),
				"up" => Ok(Command::Up(amount)),
				other => Err(CommandError::Command(other.to_owned())),
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub enum CourseError {
		#[error("no commands")]
		Empty,
		#[error("line {line}")]
		Command { line: usize, source: CommandError },
	}

	pub(super) fn try_commands_from_str(s: &str) -> Result<Vec<Command>, CourseError> {
		let commands = s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| CourseError::Command { line: l + 1, source: e }))
			.collect::<Result<Vec<_>, _>>()?;
		if commands.is_empty() { return Err(CourseError::Empty) }
		Ok(commands)
	}

	#[test]
	fn tests() {
		use Command::*;
		assert_eq!(try_commands_from_str("forward 5\nup 3\ndown 0").unwrap(),
			[Forward(5), Up(3), Down(0)]);
		assert!(matches!(try_commands_from_str("forward 5\nbackward 2"),
			Err(CourseError::Command { line: 2, source: CommandError::Command(c) }) if c == "backward"));
		assert!(matches!(try_commands_from_str("down"),
			Err(CourseError::Command { line: 1, source: CommandError::Format })));
		assert!(matches!(try_commands_from_str("up -1"),
			Err(CourseError::Command { source: CommandError::Amount(_), .. })));
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		forward 5
		down 5
		forward 8
		up 3
		down 8
		forward 2
	" };
	let commands = parsing::try_commands_from_str(INPUT).unwrap();
	assert_eq!(part1_impl(&commands), 150);
	assert_eq!(part2_impl(&commands), 900);

	// Rising above the surface
	let commands = parsing::try_commands_from_str("forward 2\nup 3\ndown 5\nforward 1").unwrap();
	assert_eq!(part1_impl(&commands), 3 * 2);
	let commands = parsing::try_commands_from_str("down 1\nup 3\nforward 2\ndown 5\nforward 1").unwrap();
	assert_eq!(part2_impl(&commands), 3 * -1);
}
