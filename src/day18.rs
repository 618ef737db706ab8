// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fmt::{self, Display}, ops::Add};


/// Pairs nested this deep explode.
const EXPLODE_DEPTH: usize = 4;
/// Regular numbers this large split.
const SPLIT_VALUE: u32 = 10;

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Number {
	Regular(u32),
	Pair(Box<Number>, Box<Number>),
}

impl Number {
	fn pair(left: Number, right: Number) -> Self {
		Number::Pair(Box::new(left), Box::new(right))
	}

	fn add_to_leftmost(&mut self, value: u32) {
		match self {
			Number::Regular(n) => *n += value,
			Number::Pair(left, _) => left.add_to_leftmost(value),
		}
	}

	fn add_to_rightmost(&mut self, value: u32) {
		match self {
			Number::Regular(n) => *n += value,
			Number::Pair(_, right) => right.add_to_rightmost(value),
		}
	}

	/// Explodes the leftmost pair of two regular numbers nested at least
	/// `EXPLODE_DEPTH` deep, if any. Returns the halves of its debris that
	/// still need adding to the nearest regular number to either side.
	fn explode(&mut self, depth: usize) -> Option<[Option<u32>; 2]> {
		let debris = match self {
			Number::Pair(left, right) if depth >= EXPLODE_DEPTH => match (&**left, &**right) {
				(Number::Regular(l), Number::Regular(r)) => Some([Some(*l), Some(*r)]),
				_ => None,
			},
			_ => None,
		};
		if let Some(debris) = debris {
			*self = Number::Regular(0);
			return Some(debris)
		}

		let Number::Pair(left, right) = self else { return None };
		if let Some([l, r]) = left.explode(depth + 1) {
			if let Some(r) = r { right.add_to_leftmost(r) }
			return Some([l, None])
		}
		if let Some([l, r]) = right.explode(depth + 1) {
			if let Some(l) = l { left.add_to_rightmost(l) }
			return Some([None, r])
		}
		None
	}

	/// Splits the leftmost regular number of at least `SPLIT_VALUE`, if any.
	fn split(&mut self) -> bool {
		match self {
			Number::Regular(n) if *n >= SPLIT_VALUE => {
				let n = *n;
				*self = Number::pair(Number::Regular(n / 2), Number::Regular((n + 1) / 2));
				true
			}
			Number::Regular(_) => false,
			Number::Pair(left, right) => left.split() || right.split(),
		}
	}

	fn reduce(&mut self) {
		while self.explode(0).is_some() || self.split() {}
	}

	fn magnitude(&self) -> u64 {
		match self {
			Number::Regular(n) => *n as u64,
			Number::Pair(left, right) => 3 * left.magnitude() + 2 * right.magnitude(),
		}
	}
}

impl Add for Number {
	type Output = Number;

	fn add(self, rhs: Self) -> Self::Output {
		let mut sum = Number::pair(self, rhs);
		sum.reduce();
		sum
	}
}

impl Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Number::Regular(n) => write!(f, "{n}"),
			Number::Pair(left, right) => write!(f, "[{left},{right}]"),
		}
	}
}


fn part1_impl(input_numbers: &[Number]) -> u64 {
	input_numbers.iter()
		.cloned()
		.reduce(Add::add)
		.map_or(0, |sum| sum.magnitude())
}

fn part2_impl(input_numbers: &[Number]) -> u64 {
	let n = input_numbers.len();
	itertools::iproduct!(0..n, 0..n)
		.filter(|(i, j)| i != j)
		.map(|(i, j)| (input_numbers[i].clone() + input_numbers[j].clone()).magnitude())
		.max()
		.unwrap_or_default()
}

pub fn solve(s: &str) -> Result<(u64, u64), HomeworkError> {
	let numbers = parsing::try_numbers_from_str(s)?;
	tracing::debug!(numbers = numbers.len(), "parsed");
	Ok((part1_impl(&numbers), part2_impl(&numbers)))
}


pub use parsing::{NumberError, HomeworkError};

mod parsing {
	use std::{iter::Peekable, str::{CharIndices, FromStr}};
	use super::Number;

	#[derive(Debug, thiserror::Error)]
	pub enum NumberError {
		#[error("column {column}: expected {expected}, found “{found}”")]
		Unexpected { column: usize, expected: &'static str, found: char },
		#[error("unexpected end of number")]
		End,
		#[error("column {column}: regular number too large")]
		Overflow { column: usize },
		#[error("column {column}: trailing input after number")]
		Trailing { column: usize },
	}

	fn expect(chars: &mut Peekable<CharIndices<'_>>, expected: char) -> Result<(), NumberError> {
		match chars.next() {
			Some((_, c)) if c == expected => Ok(()),
			Some((i, found)) => Err(NumberError::Unexpected {
				column: i + 1,
				expected: if expected == ',' { "“,”" } else { "“]”" },
				found,
			}),
			None => Err(NumberError::End),
		}
	}

	fn try_number_from_chars(chars: &mut Peekable<CharIndices<'_>>) -> Result<Number, NumberError> {
		match chars.next() {
			Some((_, '[')) => {
				let left = try_number_from_chars(chars)?;
				expect(chars, ',')?;
				let right = try_number_from_chars(chars)?;
				expect(chars, ']')?;
				Ok(Number::pair(left, right))
			}
			Some((i, c)) if c.is_ascii_digit() => {
				let mut n = c as u32 - '0' as u32;
				while let Some(d) = chars.peek().and_then(|&(_, c)| c.to_digit(10)) {
					chars.next();
					n = n.checked_mul(10).and_then(|n| n.checked_add(d))
						.ok_or(NumberError::Overflow { column: i + 1 })?;
				}
				Ok(Number::Regular(n))
			}
			Some((i, found)) => Err(NumberError::Unexpected {
				column: i + 1,
				expected: "“[” or a digit",
				found,
			}),
			None => Err(NumberError::End),
		}
	}

	impl FromStr for Number {
		type Err = NumberError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut chars = s.char_indices().peekable();
			let number = try_number_from_chars(&mut chars)?;
			match chars.next() {
				Some((i, _)) => Err(NumberError::Trailing { column: i + 1 }),
				None => Ok(number),
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub enum HomeworkError {
		#[error("no snailfish numbers")]
		Empty,
		#[error("line {line}")]
		Number { line: usize, source: NumberError },
	}

	pub(super) fn try_numbers_from_str(s: &str) -> Result<Vec<Number>, HomeworkError> {
		let numbers = s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| line.trim().parse()
				.map_err(|e| HomeworkError::Number { line: l + 1, source: e }))
			.collect::<Result<Vec<_>, _>>()?;
		if numbers.is_empty() { return Err(HomeworkError::Empty) }
		Ok(numbers)
	}

	#[test]
	fn tests() {
		use Number::*;
		assert_eq!("[11,2]".parse::<Number>().unwrap(),
			Number::pair(Regular(11), Regular(2)));
		assert_eq!("[[1,2],3]".parse::<Number>().unwrap().to_string(), "[[1,2],3]");
		assert!(matches!("[1,2".parse::<Number>(), Err(NumberError::End)));
		assert!(matches!("[1,2],1".parse::<Number>(), Err(NumberError::Trailing { column: 6 })));
		assert!(matches!("[1;2]".parse::<Number>(),
			Err(NumberError::Unexpected { column: 3, found: ';', .. })));
		assert!(matches!("[x,2]".parse::<Number>(),
			Err(NumberError::Unexpected { column: 2, found: 'x', .. })));
		assert!(matches!("[99999999999,1]".parse::<Number>(), Err(NumberError::Overflow { column: 2 })));
		assert!(matches!(try_numbers_from_str("[1,2]\n[3,4"),
			Err(HomeworkError::Number { line: 2, source: NumberError::End })));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn number(s: &str) -> Number {
		s.parse().unwrap()
	}

	fn sum(lines: &str) -> Number {
		parsing::try_numbers_from_str(lines).unwrap().into_iter().reduce(Add::add).unwrap()
	}

	#[test]
	fn explode() {
		for (before, after) in [
			("[[[[[9,8],1],2],3],4]", "[[[[0,9],2],3],4]"),
			("[7,[6,[5,[4,[3,2]]]]]", "[7,[6,[5,[7,0]]]]"),
			("[[6,[5,[4,[3,2]]]],1]", "[[6,[5,[7,0]]],3]"),
			("[[3,[2,[1,[7,3]]]],[6,[5,[4,[3,2]]]]]", "[[3,[2,[8,0]]],[9,[5,[4,[3,2]]]]]"),
			("[[3,[2,[8,0]]],[9,[5,[4,[3,2]]]]]", "[[3,[2,[8,0]]],[9,[5,[7,0]]]]"),
		] {
			let mut n = number(before);
			assert!(n.explode(0).is_some(), "{before}");
			assert_eq!(n.to_string(), after);
		}
		assert!(number("[[[[0,9],2],3],4]").explode(0).is_none());
	}

	#[test]
	fn split() {
		let mut n = number("[[[[0,7],4],[15,[0,13]]],[1,1]]");
		assert!(n.split());
		assert_eq!(n.to_string(), "[[[[0,7],4],[[7,8],[0,13]]],[1,1]]");
		assert!(n.split());
		assert_eq!(n.to_string(), "[[[[0,7],4],[[7,8],[0,[6,7]]]],[1,1]]");
		assert!(!number("[9,[1,2]]").split());
	}

	#[test]
	fn addition() {
		assert_eq!(number("[[[[4,3],4],4],[7,[[8,4],9]]]") + number("[1,1]"),
			number("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]"));
		assert_eq!(sum("[1,1]\n[2,2]\n[3,3]\n[4,4]\n").to_string(), "[[[[1,1],[2,2]],[3,3]],[4,4]]");
		assert_eq!(sum("[1,1]\n[2,2]\n[3,3]\n[4,4]\n[5,5]\n").to_string(), "[[[[3,0],[5,3]],[4,4]],[5,5]]");
		assert_eq!(sum("[1,1]\n[2,2]\n[3,3]\n[4,4]\n[5,5]\n[6,6]\n").to_string(), "[[[[5,0],[7,4]],[5,5]],[6,6]]");
		assert_eq!(sum(indoc::indoc! { "
			[[[0,[4,5]],[0,0]],[[[4,5],[2,6]],[9,5]]]
			[7,[[[3,7],[4,3]],[[6,3],[8,8]]]]
			[[2,[[0,8],[3,4]]],[[[6,7],1],[7,[1,6]]]]
			[[[[2,4],7],[6,[0,5]]],[[[6,8],[2,8]],[[2,1],[4,5]]]]
			[7,[5,[[3,8],[1,4]]]]
			[[2,[2,2]],[8,[8,1]]]
			[2,9]
			[1,[[[9,3],9],[[9,0],[0,7]]]]
			[[[5,[7,4]],7],1]
			[[[[4,2],2],6],[8,7]]
		" }).to_string(), "[[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]");
	}

	#[test]
	fn magnitude() {
		for (n, magnitude) in [
			("[9,1]", 29),
			("[[1,2],[[3,4],5]]", 143),
			("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]", 1384),
			("[[[[1,1],[2,2]],[3,3]],[4,4]]", 445),
			("[[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]", 3488),
		] {
			assert_eq!(number(n).magnitude(), magnitude);
		}
	}

	#[test]
	fn tests() {
		const INPUT: &str = indoc::indoc! { "
			[[[0,[5,8]],[[1,7],[9,6]]],[[4,[1,2]],[[1,4],2]]]
			[[[5,[2,8]],4],[5,[[9,9],0]]]
			[6,[[[6,2],[5,6]],[[7,6],[4,7]]]]
			[[[6,[0,7]],[0,9]],[4,[9,[9,0]]]]
			[[[7,[6,4]],[3,[1,3]]],[[[5,5],1],9]]
			[[6,[[7,3],[3,2]]],[[[3,8],[5,7]],4]]
			[[[[5,4],[7,7]],8],[[8,3],8]]
			[[9,3],[[9,9],[6,[4,9]]]]
			[[2,[[7,7],7]],[[5,8],[[9,3],[0,2]]]]
			[[[[5,2],5],[8,[3,7]]],[[5,[7,5]],[4,4]]]
		" };
		let numbers = parsing::try_numbers_from_str(INPUT).unwrap();
		assert_eq!(numbers.iter().cloned().reduce(Add::add).unwrap().to_string(),
			"[[[[6,6],[7,6]],[[7,7],[7,0]]],[[[7,7],[7,7]],[[7,8],[9,9]]]]");
		assert_eq!(part1_impl(&numbers), 4140);
		assert_eq!(part2_impl(&numbers), 3993);

		let single = parsing::try_numbers_from_str("[9,1]").unwrap();
		assert_eq!((part1_impl(&single), part2_impl(&single)), (29, 0));
	}
}
