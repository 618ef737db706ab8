// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{iter::Peekable, str::Chars};


fn closer(opener: char) -> Option<char> {
	match opener {
		'(' => Some(')'),
		'[' => Some(']'),
		'{' => Some('}'),
		'<' => Some('>'),
		_ => None,
	}
}

#[derive(Debug, PartialEq, Eq)]
enum Status {
	Valid,
	/// Holds the first closer not matching its opener.
	Corrupted(char),
	/// Holds the openers left unclosed, innermost first.
	Incomplete(Vec<char>),
}

/// Consumes the rest of the chunk opened by `opener` (which
/// has already been consumed), including its closer.
fn consume_chunk(chars: &mut Peekable<Chars<'_>>, opener: char) -> Result<(), Status> {
	let expected = closer(opener);
	while let Some(&next) = chars.peek() {
		if closer(next).is_none() { break }
		chars.next();
		consume_chunk(chars, next).map_err(|status| match status {
			Status::Incomplete(mut unclosed) => {
				unclosed.push(opener);
				Status::Incomplete(unclosed)
			}
			other => other,
		})?;
	}
	match chars.next() {
		None => Err(Status::Incomplete(vec![opener])),
		Some(found) if Some(found) == expected => Ok(()),
		Some(found) => Err(Status::Corrupted(found)),
	}
}

fn check(line: &str) -> Status {
	let mut chars = line.chars().peekable();
	while let Some(c) = chars.next() {
		if closer(c).is_none() { return Status::Corrupted(c) }
		if let Err(status) = consume_chunk(&mut chars, c) { return status }
	}
	Status::Valid
}


fn syntax_error_score(corrupted: char) -> u64 {
	match corrupted { ')' => 3, ']' => 57, '}' => 1197, '>' => 25137, _ => 0 }
}

/// Scores the closers completing `unclosed` (innermost first) as a base-5 numeral.
fn completion_score(unclosed: &[char]) -> u64 {
	unclosed.iter()
		.filter_map(|&opener| closer(opener))
		.fold(0, |score, c| score * 5 + match c { ')' => 1, ']' => 2, '}' => 3, _ => 4 })
}

fn median(mut scores: Vec<u64>) -> Option<u64> {
	scores.sort_unstable();
	scores.get(scores.len() / 2).copied()
}


fn part1_impl<'a>(input_lines: impl IntoIterator<Item = &'a str>) -> u64 {
	input_lines.into_iter()
		.filter_map(|line| match check(line) {
			Status::Corrupted(c) => Some(syntax_error_score(c)),
			_ => None,
		})
		.sum()
}

fn part2_impl<'a>(input_lines: impl IntoIterator<Item = &'a str>) -> u64 {
	let scores = input_lines.into_iter()
		.filter_map(|line| match check(line) {
			Status::Incomplete(unclosed) => Some(completion_score(&unclosed)),
			_ => None,
		})
		.collect::<Vec<_>>();
	if scores.len() % 2 == 0 {
		tracing::warn!(incomplete = scores.len(), "even number of incomplete lines");
	}
	median(scores).unwrap_or_default()
}

pub fn solve(s: &str) -> Result<(u64, u64), NavigationError> {
	let lines = parsing::try_lines_from_str(s)?;
	tracing::debug!(lines = lines.len(), "parsed");
	Ok((part1_impl(lines.iter().copied()), part2_impl(lines)))
}


pub use parsing::NavigationError;

mod parsing {
	#[derive(Debug, thiserror::Error)]
	pub enum NavigationError {
		#[error("no lines")]
		Empty,
		#[error("line {line}, column {column}: “{found}” is not a bracket")]
		Char { line: usize, column: usize, found: char },
	}

	pub(super) fn try_lines_from_str(s: &str) -> Result<Vec<&str>, NavigationError> {
		let lines = s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| match line.chars().position(|c| !"()[]{}<>".contains(c)) {
				Some(c) => Err(NavigationError::Char {
					line: l + 1, column: c + 1, found: line[c..].chars().next().unwrap_or_default() }),
				None => Ok(line),
			})
			.collect::<Result<Vec<_>, _>>()?;
		if lines.is_empty() { return Err(NavigationError::Empty) }
		Ok(lines)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		[({(<(())[]>[[{[]{<()<>>
		[(()[<>])]({[<{<<[]>>(
		{([(<{}[<>[]}>{[]{[(<()>
		(((({<>}<{<{<>}{[]{[]{}
		[[<[([]))<([[{}[[()]]]
		[{[{({}]{}}([{[{{{}}([]
		{<[[]]>}<{[{[{[]{()[[[]
		[<(<(<(<{}))><([]([]()
		<{([([[(<>()){}]>(<<{{
		<{([{{}}[<[[[<>{}]]]>[]]
	" };

	#[test]
	fn check() {
		use Status::*;
		assert_eq!(super::check("([]{<>})"), Valid);
		assert_eq!(super::check("()[]<>{}"), Valid);
		assert_eq!(super::check("(]"), Corrupted(']'));
		assert_eq!(super::check("{()()()>"), Corrupted('>'));
		assert_eq!(super::check("<([]){()}[{}])"), Corrupted(')'));
		assert_eq!(super::check(")"), Corrupted(')'));
		assert_eq!(super::check("([{"), Incomplete(vec!['{', '[', '(']));
		assert_eq!(super::check("[<>({}"), Incomplete(vec!['(', '[']));
		assert_eq!(super::check("{([(<{}[<>[]}>{[]{[(<()>"), Corrupted('}'));
	}

	#[test]
	fn scores() {
		// Innermost first: `)` then `]` then `}`
		assert_eq!(completion_score(&['(', '[', '{']), (1 * 5 + 2) * 5 + 3);
		assert_eq!(completion_score(&['{', '[', '(']), (3 * 5 + 2) * 5 + 1);
		assert_eq!(median(vec![5, 1, 4, 2, 3]), Some(3));
		assert_eq!(median(vec![7]), Some(7));
		assert_eq!(median(vec![]), None);

		let Status::Incomplete(unclosed) = super::check("<{([{{}}[<[[[<>{}]]]>[]]") else { panic!() };
		assert_eq!(completion_score(&unclosed), 294);
	}

	#[test]
	fn tests() {
		let lines = parsing::try_lines_from_str(INPUT).unwrap();
		assert_eq!(part1_impl(lines.iter().copied()), 26397);
		assert_eq!(part2_impl(lines), 288957);
		assert!(matches!(parsing::try_lines_from_str("()\n(x)"),
			Err(NavigationError::Char { line: 2, column: 2, found: 'x' })));
	}
}
