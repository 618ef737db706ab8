// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fmt::{self, Display}, fs, path::{Path, PathBuf}, process::ExitCode};
use anyhow::Context as _;


#[derive(Debug, clap::Parser)]
#[command(version, about = "Solves one day of Advent of Code 2021")]
struct Args {
	/// Path to the puzzle input
	input: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
	#[error("cannot read {}", .path.display())]
	Read { path: PathBuf, source: std::io::Error },
	#[error("{} contains no input", .0.display())]
	Empty(PathBuf),
}


/// Both answers of a day, rendered.
#[derive(Debug, PartialEq, Eq)]
pub struct Answers {
	pub part1: String,
	pub part2: String,
}

impl Display for Answers {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		// Multi-line answers (i.e. rendered grids) start on their own line
		fn write_part(f: &mut fmt::Formatter<'_>, part: u8, answer: &str) -> fmt::Result {
			if answer.contains('\n') { write!(f, "part {part}:\n{answer}") }
			else { write!(f, "part {part}: {answer}") }
		}
		write_part(f, 1, &self.part1)?;
		f.write_str("\n")?;
		write_part(f, 2, &self.part2)
	}
}


/// Reads the input at `path` and solves both parts.
pub fn solve_file<P1, P2, E>(
	path: &Path,
	solve: impl FnOnce(&str) -> Result<(P1, P2), E>,
) -> anyhow::Result<Answers>
where P1: Display, P2: Display, E: std::error::Error + Send + Sync + 'static {
	let input = fs::read_to_string(path)
		.map_err(|source| InputError::Read { path: path.to_owned(), source })?;
	if input.trim().is_empty() { return Err(InputError::Empty(path.to_owned()).into()) }
	tracing::debug!(bytes = input.len(), lines = input.lines().count(), "read input");

	let (part1, part2) = solve(&input)
		.with_context(|| format!("malformed input in {}", path.display()))?;
	Ok(Answers { part1: part1.to_string(), part2: part2.to_string() })
}


fn init_tracing() {
	use tracing_subscriber::EnvFilter;
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

/// Entry point shared by the `dayNN` executables.
pub fn main<P1, P2, E>(day: &str, solve: impl FnOnce(&str) -> Result<(P1, P2), E>) -> ExitCode
where P1: Display, P2: Display, E: std::error::Error + Send + Sync + 'static {
	use clap::Parser as _;

	let args = Args::parse();
	init_tracing();

	let _span = tracing::info_span!("solve", day).entered();
	match solve_file(&args.input, solve) {
		Ok(answers) => {
			println!("{answers}");
			ExitCode::SUCCESS
		}
		Err(error) => {
			eprintln!("{day}: error: {error:#}");
			ExitCode::FAILURE
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn temp_input(name: &str, contents: &str) -> PathBuf {
		let path = std::env::temp_dir()
			.join(format!("advent21-{}-{name}.txt", std::process::id()));
		fs::write(&path, contents).unwrap();
		path
	}

	#[test]
	fn args() {
		use clap::{CommandFactory as _, Parser as _, error::ErrorKind};
		Args::command().debug_assert();
		let err = Args::try_parse_from(["day01"]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
		let args = Args::try_parse_from(["day01", "input.txt"]).unwrap();
		assert_eq!(args.input, PathBuf::from("input.txt"));
	}

	#[test]
	fn answers() {
		let path = temp_input("answers", "1\n2\n");
		let answers = solve_file(&path, crate::day01::solve).unwrap();
		assert_eq!(answers.to_string(), "part 1: 1\npart 2: 0");
		fs::remove_file(path).unwrap();

		let rendered = Answers { part1: "17".to_owned(), part2: "# #\n ##".to_owned() };
		assert_eq!(rendered.to_string(), "part 1: 17\npart 2:\n# #\n ##");
	}

	#[test]
	fn errors() {
		let path = temp_input("empty", "\n  \n");
		let err = solve_file(&path, crate::day01::solve).unwrap_err();
		assert!(matches!(err.downcast_ref::<InputError>(), Some(InputError::Empty(_))));
		fs::remove_file(&path).unwrap();

		let err = solve_file(&path, crate::day01::solve).unwrap_err();
		assert!(matches!(err.downcast_ref::<InputError>(), Some(InputError::Read { .. })));

		let path = temp_input("malformed", "forward 5\nsideways 3\n");
		let err = solve_file(&path, crate::day02::solve).unwrap_err();
		assert!(format!("{err:#}").contains("line 2"));
		fs::remove_file(path).unwrap();
	}
}
