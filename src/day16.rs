// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const LITERAL_TYPE_ID: u64 = 4;

/// Bit stream, consumed front to back.
struct Bits {
	bits: Vec<bool>,
	pos: usize,
}

impl Bits {
	fn remaining(&self) -> usize {
		self.bits.len() - self.pos
	}

	/// Reads `n` (at most 64) bits as a big-endian number.
	fn read(&mut self, n: usize) -> Result<u64, DecodeError> {
		if self.remaining() < n { return Err(DecodeError::Truncated { at: self.bits.len() }) }
		let value = self.bits[self.pos..self.pos + n].iter()
			.fold(0, |value, &bit| value << 1 | bit as u64);
		self.pos += n;
		Ok(value)
	}
}


/// Operator packet types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
	Sum,
	Product,
	Minimum,
	Maximum,
	GreaterThan,
	LessThan,
	EqualTo,
}

impl Op {
	fn accepts(&self, num_operands: usize) -> bool {
		use Op::*;
		match self {
			Sum | Product | Minimum | Maximum => num_operands >= 1,
			GreaterThan | LessThan | EqualTo => num_operands == 2,
		}
	}
}

#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Payload {
	Literal(u64),
	Operator(Op, Vec<Packet>),
}

#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Packet {
	version: u8,
	payload: Payload,
}

impl Packet {
	fn version_sum(&self) -> u64 {
		self.version as u64 + match &self.payload {
			Payload::Literal(_) => 0,
			Payload::Operator(_, subpackets) => subpackets.iter().map(Packet::version_sum).sum(),
		}
	}

	/// Evaluates the expression, or returns `None` on overflow.
	fn value(&self) -> Option<u64> {
		use Op::*;
		let (op, subpackets) = match &self.payload {
			Payload::Literal(value) => return Some(*value),
			Payload::Operator(op, subpackets) => (op, subpackets),
		};
		let mut values = subpackets.iter().map(Packet::value);
		Some(match op {
			Sum => values.try_fold(0u64, |acc, v| acc.checked_add(v?))?,
			Product => values.try_fold(1u64, |acc, v| acc.checked_mul(v?))?,
			Minimum => values.collect::<Option<Vec<_>>>()?.into_iter().min()?,
			Maximum => values.collect::<Option<Vec<_>>>()?.into_iter().max()?,
			GreaterThan | LessThan | EqualTo => {
				let (lhs, rhs) = (values.next()??, values.next()??);
				match op {
					GreaterThan => (lhs > rhs) as u64,
					LessThan => (lhs < rhs) as u64,
					_ => (lhs == rhs) as u64,
				}
			}
		})
	}
}


#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
	#[error("stream ends at bit {at} in the middle of a packet")]
	Truncated { at: usize },
	#[error("literal starting at bit {at} exceeds 64 bits")]
	LiteralOverflow { at: usize },
	#[error("subpackets of packet at bit {at} span {consumed} bits instead of {declared}")]
	Overrun { at: usize, declared: usize, consumed: usize },
	#[error("{op:?} packet at bit {at} cannot take {found} operands")]
	Arity { at: usize, op: Op, found: usize },
	#[error("non-zero bits follow the outermost packet at bit {at}")]
	Trailing { at: usize },
}

fn decode_packet(bits: &mut Bits) -> Result<Packet, DecodeError> {
	let at = bits.pos;
	let version = bits.read(3)? as u8;
	let type_id = bits.read(3)?;

	if type_id == LITERAL_TYPE_ID {
		let mut value = 0u64;
		loop {
			let more = bits.read(1)? == 1;
			if value >> 60 != 0 { return Err(DecodeError::LiteralOverflow { at }) }
			value = value << 4 | bits.read(4)?;
			if !more { break }
		}
		return Ok(Packet { version, payload: Payload::Literal(value) })
	}

	let op = match type_id {
		0 => Op::Sum,
		1 => Op::Product,
		2 => Op::Minimum,
		3 => Op::Maximum,
		5 => Op::GreaterThan,
		6 => Op::LessThan,
		// 3 bits leave only 7
		_ => Op::EqualTo,
	};

	let subpackets = if bits.read(1)? == 0 {
		let declared = bits.read(15)? as usize;
		let start = bits.pos;
		if bits.remaining() < declared { return Err(DecodeError::Truncated { at: bits.bits.len() }) }
		let mut subpackets = Vec::new();
		while bits.pos < start + declared {
			subpackets.push(decode_packet(bits)?);
		}
		if bits.pos != start + declared {
			return Err(DecodeError::Overrun { at, declared, consumed: bits.pos - start })
		}
		subpackets
	} else {
		let count = bits.read(11)?;
		(0..count).map(|_| decode_packet(bits)).collect::<Result<Vec<_>, _>>()?
	};

	if !op.accepts(subpackets.len()) {
		return Err(DecodeError::Arity { at, op, found: subpackets.len() })
	}
	Ok(Packet { version, payload: Payload::Operator(op, subpackets) })
}

/// Decodes the outermost packet, which may only be followed by zero padding.
fn decode_transmission(mut bits: Bits) -> Result<Packet, DecodeError> {
	let packet = decode_packet(&mut bits)?;
	if let Some(offset) = bits.bits[bits.pos..].iter().position(|&bit| bit) {
		return Err(DecodeError::Trailing { at: bits.pos + offset })
	}
	Ok(packet)
}


fn part1_impl(input_packet: &Packet) -> u64 {
	input_packet.version_sum()
}

fn part2_impl(input_packet: &Packet) -> Option<u64> {
	input_packet.value()
}

pub fn solve(s: &str) -> Result<(u64, u64), TransmissionError> {
	let bits = parsing::try_bits_from_str(s)?;
	tracing::debug!(bits = bits.bits.len(), "parsed");
	let packet = decode_transmission(bits)?;
	Ok((part1_impl(&packet), part2_impl(&packet).ok_or(TransmissionError::ValueOverflow)?))
}


pub use parsing::TransmissionError;

mod parsing {
	use super::{Bits, DecodeError};

	#[derive(Debug, thiserror::Error)]
	pub enum TransmissionError {
		#[error("no transmission")]
		Empty,
		#[error("column {column}: invalid hexadecimal digit “{found}”")]
		Hex { column: usize, found: char },
		#[error("invalid packet")]
		Decode(#[from] DecodeError),
		#[error("expression value exceeds 64 bits")]
		ValueOverflow,
	}

	pub(super) fn try_bits_from_str(s: &str) -> Result<Bits, TransmissionError> {
		let s = s.trim();
		if s.is_empty() { return Err(TransmissionError::Empty) }
		let mut bits = Vec::with_capacity(s.len() * 4);
		for (c, chr) in s.chars().enumerate() {
			let nibble = chr.to_digit(16)
				.ok_or(TransmissionError::Hex { column: c + 1, found: chr })?;
			bits.extend((0..4).rev().map(|i| nibble >> i & 1 == 1));
		}
		Ok(Bits { bits, pos: 0 })
	}

	#[test]
	fn tests() {
		let bits = try_bits_from_str("D2FE28\n").unwrap();
		assert_eq!(bits.bits.iter().map(|&b| if b { '1' } else { '0' }).collect::<String>(),
			"110100101111111000101000");
		assert!(matches!(try_bits_from_str("D2FG28"), Err(TransmissionError::Hex { column: 4, found: 'G' })));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn bits_from_binary(s: &str) -> Bits {
		Bits { bits: s.chars().filter(|c| !c.is_whitespace()).map(|c| c == '1').collect(), pos: 0 }
	}

	fn decode_hex(s: &str) -> Result<Packet, DecodeError> {
		decode_transmission(parsing::try_bits_from_str(s).unwrap())
	}

	/// Encodes `value` in as few 5-bit groups as possible.
	fn literal_binary(version: u8, value: u64) -> String {
		let nibbles = (0..16).rev()
			.map(|i| value >> (i * 4) & 0xf)
			.skip_while(|&n| n == 0)
			.collect::<Vec<_>>();
		let nibbles = if nibbles.is_empty() { vec![0] } else { nibbles };
		let mut s = format!("{version:03b}100");
		for (i, nibble) in nibbles.iter().enumerate() {
			s += if i + 1 < nibbles.len() { "1" } else { "0" };
			s += &format!("{nibble:04b}");
		}
		s
	}

	fn operator_binary(version: u8, type_id: u8, subpackets: &[String], by_count: bool) -> String {
		let body = subpackets.concat();
		if by_count { format!("{version:03b}{type_id:03b}1{:011b}{body}", subpackets.len()) }
		else { format!("{version:03b}{type_id:03b}0{:015b}{body}", body.len()) }
	}

	#[test]
	fn literals() {
		use Payload::*;
		assert_eq!(decode_hex("D2FE28").unwrap(), Packet { version: 6, payload: Literal(2021) });
		for value in [0, 1, 15, 16, 2021, u32::MAX as u64, u64::MAX] {
			let mut bits = bits_from_binary(&literal_binary(5, value));
			assert_eq!(decode_packet(&mut bits).unwrap(), Packet { version: 5, payload: Literal(value) });
			assert_eq!(bits.remaining(), 0);
		}

		// 17 nibbles
		let too_long = format!("000100{}0{:04b}", "10001".repeat(16), 1);
		assert!(matches!(decode_packet(&mut bits_from_binary(&too_long)),
			Err(DecodeError::LiteralOverflow { at: 0 })));
		assert!(matches!(decode_packet(&mut bits_from_binary("110100101111")),
			Err(DecodeError::Truncated { .. })));
	}

	#[test]
	fn operators() {
		use {Payload::*, Op::*};
		let literal = |value| Packet { version: 0, payload: Literal(value) };

		let lt = decode_hex("38006F45291200").unwrap();
		assert_eq!(lt, Packet { version: 1, payload: Operator(LessThan, vec![
			Packet { version: 6, payload: Literal(10) },
			Packet { version: 2, payload: Literal(20) },
		]) });
		assert_eq!(lt.value(), Some(1));

		let max = decode_hex("EE00D40C823060").unwrap();
		let Operator(Maximum, subpackets) = &max.payload else { panic!("{max:?}") };
		assert_eq!(subpackets.iter().map(|p| p.value().unwrap()).collect::<Vec<_>>(), [1, 2, 3]);

		let children = [literal_binary(0, 7), literal_binary(0, 300)];
		for by_count in [false, true] {
			let mut bits = bits_from_binary(&operator_binary(3, 0, &children, by_count));
			let total = bits.bits.len();
			assert_eq!(decode_packet(&mut bits).unwrap(),
				Packet { version: 3, payload: Operator(Sum, vec![literal(7), literal(300)]) });
			assert_eq!(bits.pos, total);
		}

		// Declaring one bit less than the subpackets span
		let body = children.concat();
		let short = format!("000000{}{:015b}{body}", 0, body.len() - 1);
		assert!(matches!(decode_packet(&mut bits_from_binary(&short)),
			Err(DecodeError::Overrun { at: 0, declared, consumed }) if consumed == declared + 1));

		// Counting fewer subpackets than follow
		let three = [literal_binary(0, 1), literal_binary(0, 2), literal_binary(0, 3)];
		let mut binary = format!("000001{}{:011b}", 1, 2);
		binary.push_str(&three.concat());
		let mut bits = bits_from_binary(&binary);
		let product = decode_packet(&mut bits).unwrap();
		assert_eq!(product.value(), Some(2));
		assert_eq!(bits.remaining(), literal_binary(0, 3).len());
		assert!(matches!(decode_transmission(bits_from_binary(&binary)), Err(DecodeError::Trailing { .. })));

		let lonely = operator_binary(0, 5, &children[..1], true);
		assert!(matches!(decode_packet(&mut bits_from_binary(&lonely)),
			Err(DecodeError::Arity { op: GreaterThan, found: 1, .. })));
		let empty = operator_binary(0, 0, &[], false);
		assert!(matches!(decode_packet(&mut bits_from_binary(&empty)),
			Err(DecodeError::Arity { op: Sum, found: 0, .. })));
	}

	#[test]
	fn tests() {
		for (input, version_sum) in [
			("8A004A801A8002F478", 16),
			("620080001611562C8802118E34", 12),
			("C0015000016115A2E0802F182340", 23),
			("A0016C880162017C3686B18A3D4780", 31),
		] {
			assert_eq!(part1_impl(&decode_hex(input).unwrap()), version_sum);
		}
		for (input, value) in [
			("C200B40A82", 3),
			("04005AC33890", 54),
			("880086C3E88112", 7),
			("CE00C43D881120", 9),
			("D8005AC2A8F0", 1),
			("F600BC2D8F", 0),
			("9C005AC2F8F0", 0),
			("9C0141080250320F1802104A08", 1),
		] {
			assert_eq!(part2_impl(&decode_hex(input).unwrap()), Some(value));
		}
		assert_eq!(solve("9C0141080250320F1802104A08\n").unwrap().1, 1);
	}
}
