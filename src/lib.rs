// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Solutions to the Advent of Code 2021 puzzles, one module per day.
//!
//! Every `dayNN` module exposes a `solve` function that parses the day’s
//! input and returns both answers; `src/bin/dayNN.rs` wraps it into an
//! executable via [`day_main!`].

pub mod cli;

macro_rules! days { ( $( $day:literal ),+ $(,)? ) => {
	paste::paste! { $( pub mod [<day $day>]; )+ }
} }

days!(01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12, 13, 14, 15, 16, 17, 18);


/// Defines `main` for the executable solving day `$day`.
#[macro_export]
macro_rules! day_main { ( $day:ident ) => {
	fn main() -> std::process::ExitCode {
		$crate::cli::main(stringify!($day), $crate::$day::solve)
	}
} }
