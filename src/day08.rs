// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Set of lit segments, `a` being bit 0 through `g` being bit 6.
type Pattern = u8;

fn contains(pattern: Pattern, other: Pattern) -> bool {
	pattern & other == other
}

fn num_segments(pattern: Pattern) -> u32 {
	pattern.count_ones()
}

/// Segment counts of the digits that have a unique segment count:
/// 1, 4, 7 & 8 respectively.
const UNIQUE_LENGTHS: [u32; 4] = [2, 4, 3, 7];

struct Note {
	patterns: [Pattern; 10],
	outputs: [Pattern; 4],
}

impl Note {
	fn unique(&self, len: u32) -> Pattern {
		// Parsing ensured presence
		self.patterns.iter().copied().find(|&p| num_segments(p) == len).unwrap_or_default()
	}

	/// Returns the pattern of each digit, indexed by digit.
	fn wiring(&self) -> [Pattern; 10] {
		let one = self.unique(2);
		let four = self.unique(4);
		let seven = self.unique(3);
		let eight = self.unique(7);
		// `b` & `d`, which distinguish 5 from 2 & 3
		let four_arm = four & !one;

		let mut wiring = [0; 10];
		for &p in &self.patterns {
			let digit = match num_segments(p) {
				2 => 1,
				3 => 7,
				4 => 4,
				7 => 8,
				6 if contains(p, four) => 9,
				6 if contains(p, one) => 0,
				6 => 6,
				_ if contains(p, one) => 3,
				_ if contains(p, four_arm) => 5,
				_ => 2,
			};
			wiring[digit] = p;
		}
		debug_assert_eq!([wiring[1], wiring[4], wiring[7], wiring[8]], [one, four, seven, eight]);
		wiring
	}

	fn output_value(&self) -> u32 {
		let wiring = self.wiring();
		self.outputs.iter().fold(0, |value, &output| {
			let digit = wiring.iter().position(|&p| p == output).unwrap_or_default();
			value * 10 + digit as u32
		})
	}
}


fn part1_impl(input_notes: &[Note]) -> usize {
	input_notes.iter()
		.flat_map(|note| note.outputs.iter())
		.filter(|&&output| UNIQUE_LENGTHS.contains(&num_segments(output)))
		.count()
}

fn part2_impl(input_notes: &[Note]) -> u32 {
	input_notes.iter().map(Note::output_value).sum()
}

pub fn solve(s: &str) -> Result<(usize, u32), NotesError> {
	let notes = parsing::try_notes_from_str(s)?;
	tracing::debug!(notes = notes.len(), "parsed");
	Ok((part1_impl(&notes), part2_impl(&notes)))
}


pub use parsing::{NoteError, NotesError};

mod parsing {
	use std::str::FromStr;
	use super::{Pattern, Note, UNIQUE_LENGTHS, num_segments};

	#[derive(Debug, thiserror::Error)]
	pub enum NoteError {
		#[error("expected “<10 patterns> | <4 outputs>”")]
		Format,
		#[error("invalid segment “{0}”")]
		Segment(char),
		#[error("no unique pattern with {0} segments")]
		Unique(u32),
		#[error("output {0} matches no pattern")]
		Output(usize),
	}

	fn try_pattern_from_str(s: &str) -> Result<Pattern, NoteError> {
		s.chars().try_fold(0, |p, c| match c {
			'a'..='g' => Ok(p | 1 << (c as u8 - b'a')),
			c => Err(NoteError::Segment(c)),
		})
	}

	fn try_patterns_from_str<const N: usize>(s: &str) -> Result<[Pattern; N], NoteError> {
		let patterns = s.split_whitespace()
			.map(try_pattern_from_str)
			.collect::<Result<Vec<_>, _>>()?;
		patterns.try_into().map_err(|_| NoteError::Format)
	}

	impl FromStr for Note {
		type Err = NoteError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (patterns, outputs) = s.split_once('|').ok_or(NoteError::Format)?;
			let note = Note {
				patterns: try_patterns_from_str(patterns)?,
				outputs: try_patterns_from_str(outputs)?,
			};
			for len in UNIQUE_LENGTHS {
				if note.patterns.iter().filter(|&&p| num_segments(p) == len).count() != 1 {
					return Err(NoteError::Unique(len))
				}
			}
			if let Some(o) = note.outputs.iter().position(|o| !note.patterns.contains(o)) {
				return Err(NoteError::Output(o + 1))
			}
			Ok(note)
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub enum NotesError {
		#[error("no notes")]
		Empty,
		#[error("line {line}")]
		Note { line: usize, source: NoteError },
	}

	pub(super) fn try_notes_from_str(s: &str) -> Result<Vec<Note>, NotesError> {
		let notes = s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| NotesError::Note { line: l + 1, source: e }))
			.collect::<Result<Vec<_>, _>>()?;
		if notes.is_empty() { return Err(NotesError::Empty) }
		Ok(notes)
	}

	#[test]
	fn tests() {
		assert_eq!(try_pattern_from_str("gab").unwrap(), 0b1000011);
		assert!(matches!(try_pattern_from_str("abh"), Err(NoteError::Segment('h'))));
		assert!(matches!("ab cd | ab".parse::<Note>(), Err(NoteError::Format)));
		assert!(matches!(
			"abcefg cf acdeg acdfg bcdf abdfg abdefg acf abcdefg abcdfg | cf acf bcdf ab".parse::<Note>(),
			Err(NoteError::Output(4))));
		assert!(matches!(
			"abcefg cf acdeg acdfg bcdf abdfg abdefg acf abcdefg ab | cf acf bcdf cf".parse::<Note>(),
			Err(NoteError::Unique(2))));
	}
}


#[test]
fn tests() {
	// Unscrambled wiring
	let notes = parsing::try_notes_from_str(
		"abcefg cf acdeg acdfg bcdf abdfg abdefg acf abcdefg abcdfg | cf acf bcdf abcdefg\n").unwrap();
	assert_eq!(part1_impl(&notes), 4);
	assert_eq!(part2_impl(&notes), 1748);

	let notes = parsing::try_notes_from_str(indoc::indoc! { "
		acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf
		acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | ab dab eafb acedgfb
	" }).unwrap();
	let wiring = notes[0].wiring();
	assert_eq!(wiring.map(num_segments), [6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
	assert_eq!(notes[0].output_value(), 5353);
	assert_eq!(notes[1].output_value(), 1478);
	assert_eq!(part1_impl(&notes), 4);
	assert_eq!(part2_impl(&notes), 5353 + 1478);
}
