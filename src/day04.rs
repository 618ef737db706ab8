// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const W: usize = 5;

#[derive(Clone)]
struct Board {
	numbers: [u8; W * W],
	/// Bit `i` is set once `numbers[i]` has been drawn.
	marked: u32,
}

impl Board {
	const ROW: u32 = (1 << W) - 1;
	const COLUMN: u32 = {
		let (mut col, mut i) = (0, 0);
		while i < W { col |= 1 << (i * W); i += 1 }
		col
	};

	/// Marks `number` and returns whether that completed a row or column.
	fn mark(&mut self, number: u8) -> bool {
		let Some(pos) = self.numbers.iter().position(|&n| n == number) else { return false };
		self.marked |= 1 << pos;
		let (row, col) = (pos / W, pos % W);
		self.marked & Self::ROW << (row * W) == Self::ROW << (row * W)
			|| self.marked & Self::COLUMN << col == Self::COLUMN << col
	}

	fn unmarked_sum(&self) -> u32 {
		self.numbers.iter()
			.enumerate()
			.filter(|&(i, _)| self.marked & 1 << i == 0)
			.map(|(_, &n)| n as u32)
			.sum()
	}
}

struct Bingo {
	draws: Vec<u8>,
	boards: Vec<Board>,
}

impl Bingo {
	/// Plays all draws and yields the score of each board as it wins.
	fn winning_scores(&self) -> impl Iterator<Item = u32> + '_ {
		let mut boards = self.boards.clone();
		self.draws.iter().flat_map(move |&draw| {
			let mut scores = Vec::new();
			boards.retain_mut(|board| {
				if !board.mark(draw) { return true }
				scores.push(board.unmarked_sum() * draw as u32);
				false
			});
			scores
		})
	}
}


fn part1_impl(input_bingo: &Bingo) -> u32 {
	input_bingo.winning_scores().next().unwrap_or_default()
}

fn part2_impl(input_bingo: &Bingo) -> u32 {
	input_bingo.winning_scores().last().unwrap_or_default()
}

pub fn solve(s: &str) -> Result<(u32, u32), BingoError> {
	let bingo = parsing::try_bingo_from_str(s)?;
	tracing::debug!(draws = bingo.draws.len(), boards = bingo.boards.len(), "parsed");
	Ok((part1_impl(&bingo), part2_impl(&bingo)))
}


pub use parsing::BingoError;

mod parsing {
	use std::num::ParseIntError;
	use super::{W, Board, Bingo};

	#[derive(Debug, thiserror::Error)]
	pub enum BingoError {
		#[error("no draws")]
		Empty,
		#[error("line 1, draw {draw}: invalid number")]
		Draw { draw: usize, source: ParseIntError },
		#[error("line {line}: expected a blank line between boards")]
		Separator { line: usize },
		#[error("line {line}: expected 5 numbers, found {found}")]
		RowWidth { line: usize, found: usize },
		#[error("line {line}: invalid number")]
		Number { line: usize, source: ParseIntError },
		#[error("line {line}: board has fewer than 5 rows")]
		Rows { line: usize },
		#[error("no boards")]
		NoBoards,
	}

	pub(super) fn try_bingo_from_str(s: &str) -> Result<Bingo, BingoError> {
		let mut lines = s.lines().enumerate().peekable();
		let draws = lines.next()
			.filter(|(_, line)| !line.is_empty())
			.ok_or(BingoError::Empty)?.1
			.split(',')
			.enumerate()
			.map(|(d, draw)| draw.trim().parse()
				.map_err(|e| BingoError::Draw { draw: d + 1, source: e }))
			.collect::<Result<Vec<_>, _>>()?;

		let mut boards = Vec::new();
		while let Some((l, line)) = lines.next() {
			if !line.trim().is_empty() { return Err(BingoError::Separator { line: l + 1 }) }
			// Tolerate trailing blank lines
			if lines.peek().map_or(true, |(_, line)| line.trim().is_empty()) { continue }

			let mut numbers = [0; W * W];
			for row in 0..W {
				let (l, line) = lines.next()
					.filter(|(_, line)| !line.trim().is_empty())
					.ok_or(BingoError::Rows { line: l + 2 + row })?;
				let row_numbers = line.split_whitespace()
					.map(|n| n.parse()
						.map_err(|e| BingoError::Number { line: l + 1, source: e }))
					.collect::<Result<Vec<u8>, _>>()?;
				if row_numbers.len() != W {
					return Err(BingoError::RowWidth { line: l + 1, found: row_numbers.len() })
				}
				numbers[row * W..(row + 1) * W].copy_from_slice(&row_numbers);
			}
			boards.push(Board { numbers, marked: 0 });
		}

		if boards.is_empty() { return Err(BingoError::NoBoards) }
		Ok(Bingo { draws, boards })
	}

	#[test]
	fn tests() {
		assert!(matches!(try_bingo_from_str("1,2,x"), Err(BingoError::Draw { draw: 3, .. })));
		assert!(matches!(try_bingo_from_str("1,2\n"), Err(BingoError::NoBoards)));
		assert!(matches!(try_bingo_from_str("1,2\n\n1 2 3 4 5\n1 2 3 4\n"),
			Err(BingoError::RowWidth { line: 4, found: 4 })));
		assert!(matches!(try_bingo_from_str("1,2\n\n1 2 3 4 5\n\n"),
			Err(BingoError::Rows { line: 4 })));
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

		22 13 17 11  0
		 8  2 23  4 24
		21  9 14 16  7
		 6 10  3 18  5
		 1 12 20 15 19

		 3 15  0  2 22
		 9 18 13 17  5
		19  8  7 25 23
		20 11 10 24  4
		14 21 16 12  6

		14 21 17 24  4
		10 16 15  9 19
		18  8 23 26 20
		22 11 13  6  5
		 2  0 12  3  7
	" };
	let bingo = parsing::try_bingo_from_str(INPUT).unwrap();
	assert_eq!(bingo.boards.len(), 3);
	assert_eq!(part1_impl(&bingo), 4512);
	assert_eq!(part2_impl(&bingo), 1924);
	assert_eq!(bingo.winning_scores().count(), 3);

	let mut board = bingo.boards[0].clone();
	assert!(![22, 8, 21, 6].into_iter().any(|n| board.mark(n)));
	assert!(board.mark(1));
}
