// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const START: &str = "start";
const END: &str = "end";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Size { Small, Large }

impl Size {
	fn of(name: &str) -> Self {
		if name.chars().all(|c| c.is_ascii_uppercase()) { Size::Large } else { Size::Small }
	}
}

struct Caves<'a> {
	names: Vec<&'a str>,
	sizes: Vec<Size>,
	/// Adjacent caves, per cave.
	tunnels: Vec<Vec<usize>>,
	start: usize,
	end: usize,
}

impl<'a> Caves<'a> {
	/// Calls `visit` with every path from start to end, in which small caves
	/// are visited at most once, except for a single small cave that may be
	/// visited twice if `revisit` is set.
	fn for_each_path(&self, revisit: bool, mut visit: impl FnMut(&[usize])) {
		fn walk(caves: &Caves, path: &mut Vec<usize>, revisit: bool, visit: &mut impl FnMut(&[usize])) {
			let Some(&here) = path.last() else { return };
			if here == caves.end { return visit(path) }
			for &next in &caves.tunnels[here] {
				if next == caves.start { continue }
				let revisit = if caves.sizes[next] == Size::Small && path.contains(&next) {
					if !revisit { continue }
					false
				} else {
					revisit
				};
				path.push(next);
				walk(caves, path, revisit, visit);
				path.pop();
			}
		}

		let mut path = vec![self.start];
		walk(self, &mut path, revisit, &mut visit);
	}

	fn count_paths(&self, revisit: bool) -> usize {
		let mut count = 0;
		self.for_each_path(revisit, |_| count += 1);
		count
	}
}


fn part1_impl(input_caves: &Caves) -> usize {
	input_caves.count_paths(false)
}

fn part2_impl(input_caves: &Caves) -> usize {
	input_caves.count_paths(true)
}

pub fn solve(s: &str) -> Result<(usize, usize), CavesError> {
	let caves = parsing::try_caves_from_str(s)?;
	tracing::debug!(caves = caves.names.len(), "parsed");
	Ok((part1_impl(&caves), part2_impl(&caves)))
}


pub use parsing::CavesError;

mod parsing {
	use std::collections::HashMap;
	use super::{START, END, Size, Caves};

	#[derive(Debug, thiserror::Error)]
	pub enum CavesError {
		#[error("no tunnels")]
		Empty,
		#[error("line {line}: expected “<cave>-<cave>”")]
		Format { line: usize },
		#[error("line {line}: invalid cave name “{name}”")]
		Name { line: usize, name: String },
		#[error("line {line}: tunnel between large caves {from} & {to}")]
		LargeTunnel { line: usize, from: String, to: String },
		#[error("missing “{0}” cave")]
		Missing(&'static str),
	}

	pub(super) fn try_caves_from_str(s: &str) -> Result<Caves<'_>, CavesError> {
		let mut caves = Caves { names: Vec::new(), sizes: Vec::new(), tunnels: Vec::new(), start: 0, end: 0 };
		let mut indices = HashMap::new();
		for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.is_empty()) {
			let (from, to) = line.split_once('-').ok_or(CavesError::Format { line: l + 1 })?;
			let [from, to] = [from, to].map(|name| -> Result<usize, CavesError> {
				if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
					return Err(CavesError::Name { line: l + 1, name: name.to_owned() })
				}
				Ok(*indices.entry(name).or_insert_with(|| {
					caves.names.push(name);
					caves.sizes.push(Size::of(name));
					caves.tunnels.push(Vec::new());
					caves.names.len() - 1
				}))
			});
			let (from, to) = (from?, to?);
			if caves.sizes[from] == Size::Large && caves.sizes[to] == Size::Large {
				return Err(CavesError::LargeTunnel {
					line: l + 1,
					from: caves.names[from].to_owned(),
					to: caves.names[to].to_owned(),
				})
			}
			caves.tunnels[from].push(to);
			caves.tunnels[to].push(from);
		}
		if caves.names.is_empty() { return Err(CavesError::Empty) }
		caves.start = *indices.get(START).ok_or(CavesError::Missing(START))?;
		caves.end = *indices.get(END).ok_or(CavesError::Missing(END))?;
		Ok(caves)
	}

	#[test]
	fn tests() {
		assert!(matches!(try_caves_from_str("start-A\nA"), Err(CavesError::Format { line: 2 })));
		assert!(matches!(try_caves_from_str("start-b-c"), Err(CavesError::Name { line: 1, .. })));
		assert!(matches!(try_caves_from_str("start-A\nA-B"), Err(CavesError::LargeTunnel { line: 2, .. })));
		assert!(matches!(try_caves_from_str("start-A\nA-b"), Err(CavesError::Missing(END))));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUTS: [&str; 3] = [
		indoc::indoc! { "
			start-A
			start-b
			A-c
			A-b
			b-d
			A-end
			b-end
		" },
		indoc::indoc! { "
			dc-end
			HN-start
			start-kj
			dc-start
			dc-HN
			LN-dc
			HN-end
			kj-sj
			kj-HN
			kj-dc
		" },
		indoc::indoc! { "
			fs-end
			he-DX
			fs-he
			start-DX
			pj-DX
			end-zg
			zg-sl
			zg-pj
			pj-he
			RW-he
			fs-DX
			pj-RW
			zg-RW
			start-pj
			he-WI
			zg-he
			pj-fs
			start-RW
		" },
	];

	#[test]
	fn paths() {
		let caves = parsing::try_caves_from_str(INPUTS[0]).unwrap();
		let mut paths = Vec::new();
		caves.for_each_path(false, |path| paths.push(path.iter()
			.map(|&cave| caves.names[cave])
			.collect::<Vec<_>>()
			.join(",")));
		paths.sort();
		assert_eq!(paths, [
			"start,A,b,A,c,A,end",
			"start,A,b,A,end",
			"start,A,b,end",
			"start,A,c,A,b,A,end",
			"start,A,c,A,b,end",
			"start,A,c,A,end",
			"start,A,end",
			"start,b,A,c,A,end",
			"start,b,A,end",
			"start,b,end",
		]);
	}

	#[test]
	fn revisits() {
		// Only large caves in between
		let caves = parsing::try_caves_from_str("start-A\nA-end\nstart-B\nB-end\nstart-end").unwrap();
		assert_eq!(caves.count_paths(false), 3);
		assert_eq!(caves.count_paths(true), 3);

		for input in INPUTS {
			let caves = parsing::try_caves_from_str(input).unwrap();
			assert!(caves.count_paths(true) >= caves.count_paths(false));
		}
	}

	#[test]
	fn tests() {
		for (input, answers) in INPUTS.into_iter().zip([(10, 36), (19, 103), (226, 3509)]) {
			let caves = parsing::try_caves_from_str(input).unwrap();
			assert_eq!((part1_impl(&caves), part2_impl(&caves)), answers);
		}
	}
}
