//! Typed fixture arguments.
//!
//! Fixtures describe each template argument as a tagged JSON object, e.g.
//! `{"kind": "be_u32", "value": 2155971203}`. The CLI accepts the same
//! arguments as `kind:value` strings. Both forms materialize into boxed
//! [`Format`] values for the engine.

use std::str::FromStr;

use bumpfmt_core::{BigEndian, Format, Hex, LittleEndian, UpperHex};
use serde::{Deserialize, Serialize};

use crate::encoding::decode_hex;
use crate::error::HarnessError;

/// One template argument as recorded in a fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FixtureArg {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Bool(bool),
    Str(String),
    /// Raw bytes, written as a hex string.
    Bytes(String),
    BeU16(u16),
    BeU32(u32),
    BeU64(u64),
    BeI32(i32),
    BeF32(f32),
    BeF64(f64),
    LeU16(u16),
    LeU32(u32),
    LeU64(u64),
    LeI32(i32),
    LeF32(f32),
    LeF64(f64),
    Hex(u64),
    UpperHex(u64),
}

impl FixtureArg {
    /// Materialize into a formattable value.
    pub fn to_format(&self) -> Result<Box<dyn Format>, HarnessError> {
        let format: Box<dyn Format> = match self {
            Self::U8(v) => Box::new(*v),
            Self::U16(v) => Box::new(*v),
            Self::U32(v) => Box::new(*v),
            Self::U64(v) => Box::new(*v),
            Self::I8(v) => Box::new(*v),
            Self::I16(v) => Box::new(*v),
            Self::I32(v) => Box::new(*v),
            Self::I64(v) => Box::new(*v),
            Self::Bool(v) => Box::new(*v),
            Self::Str(s) => Box::new(s.clone()),
            Self::Bytes(hex) => Box::new(decode_hex(hex)?),
            Self::BeU16(v) => Box::new(BigEndian(*v)),
            Self::BeU32(v) => Box::new(BigEndian(*v)),
            Self::BeU64(v) => Box::new(BigEndian(*v)),
            Self::BeI32(v) => Box::new(BigEndian(*v)),
            Self::BeF32(v) => Box::new(BigEndian(*v)),
            Self::BeF64(v) => Box::new(BigEndian(*v)),
            Self::LeU16(v) => Box::new(LittleEndian(*v)),
            Self::LeU32(v) => Box::new(LittleEndian(*v)),
            Self::LeU64(v) => Box::new(LittleEndian(*v)),
            Self::LeI32(v) => Box::new(LittleEndian(*v)),
            Self::LeF32(v) => Box::new(LittleEndian(*v)),
            Self::LeF64(v) => Box::new(LittleEndian(*v)),
            Self::Hex(v) => Box::new(Hex(*v)),
            Self::UpperHex(v) => Box::new(UpperHex(*v)),
        };
        Ok(format)
    }
}

/// Materialize a whole argument list.
pub fn materialize(args: &[FixtureArg]) -> Result<Vec<Box<dyn Format>>, HarnessError> {
    args.iter().map(FixtureArg::to_format).collect()
}

/// Parse an integer literal, decimal or `0x`-prefixed hex, `_` separators allowed.
fn parse_int<T>(raw: &str, value: &str) -> Result<T, HarnessError>
where
    T: TryFrom<i128>,
{
    let s = value.trim().replace('_', "");
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.as_str()),
    };
    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i128::from_str_radix(hex, 16)
    } else {
        digits.parse::<i128>()
    }
    .map_err(|e| HarnessError::argument(raw, e.to_string()))?;
    let signed = if negative { -magnitude } else { magnitude };
    T::try_from(signed).map_err(|_| HarnessError::argument(raw, "value out of range"))
}

fn parse_float<T: FromStr>(raw: &str, value: &str) -> Result<T, HarnessError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| HarnessError::argument(raw, "invalid float"))
}

impl FromStr for FixtureArg {
    type Err = HarnessError;

    /// Parse `kind:value`, e.g. `u32:123`, `be_u32:0x80818283`, `str:hello`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (kind, value) = raw
            .split_once(':')
            .ok_or_else(|| HarnessError::argument(raw, "expected kind:value"))?;
        let arg = match kind.trim().to_ascii_lowercase().as_str() {
            "u8" => Self::U8(parse_int(raw, value)?),
            "u16" => Self::U16(parse_int(raw, value)?),
            "u32" => Self::U32(parse_int(raw, value)?),
            "u64" => Self::U64(parse_int(raw, value)?),
            "i8" => Self::I8(parse_int(raw, value)?),
            "i16" => Self::I16(parse_int(raw, value)?),
            "i32" => Self::I32(parse_int(raw, value)?),
            "i64" => Self::I64(parse_int(raw, value)?),
            "bool" => Self::Bool(
                value
                    .trim()
                    .parse()
                    .map_err(|_| HarnessError::argument(raw, "expected true or false"))?,
            ),
            "str" => Self::Str(value.to_string()),
            "bytes" => {
                decode_hex(value)?;
                Self::Bytes(value.to_string())
            }
            "be_u16" => Self::BeU16(parse_int(raw, value)?),
            "be_u32" => Self::BeU32(parse_int(raw, value)?),
            "be_u64" => Self::BeU64(parse_int(raw, value)?),
            "be_i32" => Self::BeI32(parse_int(raw, value)?),
            "be_f32" => Self::BeF32(parse_float(raw, value)?),
            "be_f64" => Self::BeF64(parse_float(raw, value)?),
            "le_u16" => Self::LeU16(parse_int(raw, value)?),
            "le_u32" => Self::LeU32(parse_int(raw, value)?),
            "le_u64" => Self::LeU64(parse_int(raw, value)?),
            "le_i32" => Self::LeI32(parse_int(raw, value)?),
            "le_f32" => Self::LeF32(parse_float(raw, value)?),
            "le_f64" => Self::LeF64(parse_float(raw, value)?),
            "hex" => Self::Hex(parse_int(raw, value)?),
            "upper_hex" => Self::UpperHex(parse_int(raw, value)?),
            other => {
                return Err(HarnessError::argument(
                    raw,
                    format!("unknown argument kind '{other}'"),
                ));
            }
        };
        Ok(arg)
    }
}
