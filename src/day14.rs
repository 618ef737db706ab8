// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use itertools::{Itertools as _, MinMaxResult};


type Element = u8;
type Pair = [Element; 2];

struct Instructions {
	template: Vec<Element>,
	rules: HashMap<Pair, Element>,
}

/// Polymer as a multiset of adjacent element pairs, plus its last element
/// (the only one not counted as the first element of some pair).
struct Polymer {
	pairs: HashMap<Pair, u64>,
	last: Element,
}

impl Polymer {
	fn new(template: &[Element]) -> Option<Self> {
		let mut pairs = HashMap::new();
		for pair in template.windows(2) {
			*pairs.entry([pair[0], pair[1]]).or_default() += 1;
		}
		Some(Polymer { pairs, last: *template.last()? })
	}

	fn step(&mut self, rules: &HashMap<Pair, Element>) {
		let mut next = HashMap::with_capacity(self.pairs.len() * 2);
		for (&pair, &count) in &self.pairs {
			if let Some(&insert) = rules.get(&pair) {
				let [l, r] = pair;
				*next.entry([l, insert]).or_default() += count;
				*next.entry([insert, r]).or_default() += count;
			} else {
				*next.entry(pair).or_default() += count;
			}
		}
		self.pairs = next;
	}

	fn element_counts(&self) -> HashMap<Element, u64> {
		let mut counts = HashMap::from([(self.last, 1)]);
		for (&[first, _], &count) in &self.pairs {
			*counts.entry(first).or_default() += count;
		}
		counts
	}
}


fn most_minus_least_common_after(instructions: &Instructions, steps: usize) -> u64 {
	let Some(mut polymer) = Polymer::new(&instructions.template) else { return 0 };
	for _ in 0..steps { polymer.step(&instructions.rules) }
	let counts = polymer.element_counts();
	tracing::trace!(steps, elements = counts.len(), "grown");
	match counts.values().minmax() {
		MinMaxResult::MinMax(min, max) => max - min,
		_ => 0,
	}
}

fn part1_impl(input_instructions: &Instructions) -> u64 {
	most_minus_least_common_after(input_instructions, 10)
}

fn part2_impl(input_instructions: &Instructions) -> u64 {
	most_minus_least_common_after(input_instructions, 40)
}

pub fn solve(s: &str) -> Result<(u64, u64), InstructionsError> {
	let instructions = parsing::try_instructions_from_str(s)?;
	tracing::debug!(template = instructions.template.len(), rules = instructions.rules.len(), "parsed");
	Ok((part1_impl(&instructions), part2_impl(&instructions)))
}


pub use parsing::InstructionsError;

mod parsing {
	use std::collections::HashMap;
	use super::{Element, Pair, Instructions};

	#[derive(Debug, thiserror::Error)]
	pub enum InstructionsError {
		#[error("no template")]
		Empty,
		#[error("line {line}, column {column}: invalid element “{found}”")]
		Element { line: usize, column: usize, found: char },
		#[error("line 2: expected a blank line after the template")]
		Separator,
		#[error("line {line}: expected “AB -> C”")]
		Rule { line: usize },
		#[error("line {line}: duplicate rule")]
		Duplicate { line: usize },
	}

	fn try_elements_from_str(s: &str, line: usize) -> Result<Vec<Element>, InstructionsError> {
		s.chars().enumerate().map(|(c, chr)| if chr.is_ascii_uppercase() { Ok(chr as u8) } else {
			Err(InstructionsError::Element { line, column: c + 1, found: chr })
		}).collect()
	}

	pub(super) fn try_instructions_from_str(s: &str) -> Result<Instructions, InstructionsError> {
		let mut lines = s.lines().enumerate();
		let template = lines.next()
			.filter(|(_, line)| !line.is_empty())
			.ok_or(InstructionsError::Empty)
			.and_then(|(_, line)| try_elements_from_str(line, 1))?;
		if !matches!(lines.next(), None | Some((_, ""))) { return Err(InstructionsError::Separator) }

		let mut rules = HashMap::new();
		for (l, line) in lines.filter(|(_, line)| !line.is_empty()) {
			let (pair, insert) = line.split_once(" -> ")
				.ok_or(InstructionsError::Rule { line: l + 1 })?;
			let pair: Pair = try_elements_from_str(pair, l + 1)?.try_into()
				.map_err(|_| InstructionsError::Rule { line: l + 1 })?;
			let [insert]: [Element; 1] = try_elements_from_str(insert, l + 1)?.try_into()
				.map_err(|_| InstructionsError::Rule { line: l + 1 })?;
			if rules.insert(pair, insert).is_some() { return Err(InstructionsError::Duplicate { line: l + 1 }) }
		}

		Ok(Instructions { template, rules })
	}

	#[test]
	fn tests() {
		assert!(matches!(try_instructions_from_str("NNCB\nCH -> B"), Err(InstructionsError::Separator)));
		assert!(matches!(try_instructions_from_str("NNCB\n\nCH -> BB"), Err(InstructionsError::Rule { line: 3 })));
		assert!(matches!(try_instructions_from_str("NNCB\n\nCH => B"), Err(InstructionsError::Rule { line: 3 })));
		assert!(matches!(try_instructions_from_str("NNcB\n\nCH -> B"),
			Err(InstructionsError::Element { line: 1, column: 3, found: 'c' })));
		assert!(matches!(try_instructions_from_str("NN\n\nNN -> C\nNN -> B"),
			Err(InstructionsError::Duplicate { line: 4 })));
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		NNCB

		CH -> B
		HH -> N
		CB -> H
		NH -> C
		HB -> C
		HC -> B
		HN -> C
		NN -> C
		BH -> H
		NC -> B
		NB -> B
		BN -> B
		BB -> N
		BC -> B
		CC -> N
		CN -> C
	" };
	let instructions = parsing::try_instructions_from_str(INPUT).unwrap();

	// “NCNBCHB” after one step
	let mut polymer = Polymer::new(&instructions.template).unwrap();
	polymer.step(&instructions.rules);
	assert_eq!(polymer.pairs.values().sum::<u64>(), 6);
	assert_eq!(polymer.element_counts(), HashMap::from([(b'N', 2), (b'C', 2), (b'B', 2), (b'H', 1)]));

	assert_eq!(part1_impl(&instructions), 1588);
	assert_eq!(part2_impl(&instructions), 2188189693529);

	let single = parsing::try_instructions_from_str("N\n").unwrap();
	assert_eq!(part1_impl(&single), 0);
}
