// SPDX-License-Identifier: MIT OR Apache-2.0

// Text builtins. Positions and lengths count characters, not bytes.

use super::builtin_wrapper::{int_arg, text_arg, FunctionRegistry};
use crate::core::config::eval_context::EvalContext;
use crate::core::error::{PgError, PgResult, SqlState};
use crate::core::value::Datum;
use crate::query_api::definition::attribute::Type;

const TEXT: &[Type] = &[Type::Text];
const TEXT_TEXT: &[Type] = &[Type::Text, Type::Text];
const TEXT_INT: &[Type] = &[Type::Text, Type::Int4];
const TEXT_INT_INT: &[Type] = &[Type::Text, Type::Int4, Type::Int4];
const TEXT_INT_TEXT: &[Type] = &[Type::Text, Type::Int4, Type::Text];
const TEXT_TEXT_TEXT: &[Type] = &[Type::Text, Type::Text, Type::Text];

pub(super) fn register_string_functions(registry: &mut FunctionRegistry) {
    registry.add_function("btrim", TEXT, Type::Text, btrim);
    registry.add_function("btrim", TEXT_TEXT, Type::Text, btrim);
    registry.add_function("ltrim", TEXT, Type::Text, ltrim);
    registry.add_function("ltrim", TEXT_TEXT, Type::Text, ltrim);
    registry.add_function("rtrim", TEXT, Type::Text, rtrim);
    registry.add_function("rtrim", TEXT_TEXT, Type::Text, rtrim);

    registry.add_function("left", TEXT_INT, Type::Text, left);
    registry.add_function("right", TEXT_INT, Type::Text, right);
    for name in ["substr", "substring"] {
        registry.add_function(name, TEXT_INT, Type::Text, substr);
        registry.add_function(name, TEXT_INT_INT, Type::Text, substr);
    }

    registry.add_function("strpos", TEXT_TEXT, Type::Int4, strpos);
    registry.add_function("position", TEXT_TEXT, Type::Int4, strpos);
    registry.add_function("replace", TEXT_TEXT_TEXT, Type::Text, replace);
    registry.add_function(
        "split_part",
        &[Type::Text, Type::Text, Type::Int4],
        Type::Text,
        split_part,
    );
    registry.add_function("translate", TEXT_TEXT_TEXT, Type::Text, translate);
    registry.add_function("starts_with", TEXT_TEXT, Type::Bool, starts_with);

    for name in ["length", "char_length", "character_length"] {
        registry.add_function(name, TEXT, Type::Int4, char_length);
    }
    registry.add_function("octet_length", TEXT, Type::Int4, octet_length);

    registry.add_function("lower", TEXT, Type::Text, lower);
    registry.add_function("upper", TEXT, Type::Text, upper);
    registry.add_function("initcap", TEXT, Type::Text, initcap);
    registry.add_function("reverse", TEXT, Type::Text, reverse);
    registry.add_function("repeat", TEXT_INT, Type::Text, repeat);
    registry.add_function("lpad", TEXT_INT, Type::Text, lpad);
    registry.add_function("lpad", TEXT_INT_TEXT, Type::Text, lpad);
    registry.add_function("rpad", TEXT_INT, Type::Text, rpad);
    registry.add_function("rpad", TEXT_INT_TEXT, Type::Text, rpad);

    registry.add_function("ascii", TEXT, Type::Int4, ascii);
    registry.add_function("chr", &[Type::Int4], Type::Text, chr);
}

fn text(value: String) -> PgResult<Datum> {
    Ok(Datum::Text(value))
}

fn check_length(bytes: usize, ctx: &EvalContext) -> PgResult<()> {
    if bytes > ctx.max_text_length {
        return Err(PgError::program_limit("requested length too large"));
    }
    Ok(())
}

/// Number of characters as an `int4` count
fn char_count(value: &str) -> i64 {
    value.chars().count() as i64
}

/// Substring covering characters `[from, to)`, clamped to the string
fn char_slice(value: &str, from: i64, to: i64) -> String {
    let from = from.max(0) as usize;
    let to = to.max(0) as usize;
    if to <= from {
        return String::new();
    }
    value.chars().skip(from).take(to - from).collect()
}

// === Trimming ===

#[derive(Clone, Copy)]
enum TrimSide {
    Both,
    Leading,
    Trailing,
}

fn trim(args: &[Datum], side: TrimSide) -> PgResult<Datum> {
    let value = text_arg(args, 0)?;
    let set: Vec<char> = if args.len() > 1 {
        text_arg(args, 1)?.chars().collect()
    } else {
        vec![' ']
    };
    let in_set = |c: char| set.contains(&c);
    let trimmed = match side {
        TrimSide::Both => value.trim_matches(in_set),
        TrimSide::Leading => value.trim_start_matches(in_set),
        TrimSide::Trailing => value.trim_end_matches(in_set),
    };
    text(trimmed.to_string())
}

fn btrim(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    trim(args, TrimSide::Both)
}

fn ltrim(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    trim(args, TrimSide::Leading)
}

fn rtrim(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    trim(args, TrimSide::Trailing)
}

// === Extraction ===

/// Negative `n` keeps all but the last `|n|` characters
fn left(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = text_arg(args, 0)?;
    let n = int_arg(args, 1)?;
    let end = if n < 0 { char_count(value) + n } else { n };
    text(char_slice(value, 0, end))
}

/// Negative `n` drops the first `|n|` characters
fn right(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = text_arg(args, 0)?;
    let n = int_arg(args, 1)?;
    let len = char_count(value);
    let start = if n < 0 { -n } else { len - n };
    text(char_slice(value, start, len))
}

/// `substr(string, start [, count])` with 1-based `start`; characters before
/// position 1 count against `count`
fn substr(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = text_arg(args, 0)?;
    let start = int_arg(args, 1)?;
    let first = start.max(1);
    if args.len() < 3 {
        return text(char_slice(value, first - 1, char_count(value)));
    }

    let count = int_arg(args, 2)?;
    if count < 0 {
        return Err(PgError::new(
            SqlState::SubstringError,
            "negative substring length not allowed",
        ));
    }
    let end = start + count;
    if end <= first {
        return text(String::new());
    }
    text(char_slice(value, first - 1, end - 1))
}

/// 1-based character position of the first match, 0 when absent
fn strpos(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = text_arg(args, 0)?;
    let needle = text_arg(args, 1)?;
    let position = match value.find(needle) {
        Some(byte_index) => char_count(&value[..byte_index]) + 1,
        None => 0,
    };
    Ok(Datum::Int4(position as i32))
}

fn replace(args: &[Datum], ctx: &EvalContext) -> PgResult<Datum> {
    let value = text_arg(args, 0)?;
    let from = text_arg(args, 1)?;
    let to = text_arg(args, 2)?;
    if from.is_empty() {
        return text(value.to_string());
    }
    let replaced = value.replace(from, to);
    check_length(replaced.len(), ctx)?;
    text(replaced)
}

/// Field `n` of `value` split on `delimiter`; negative `n` counts from the end
fn split_part(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let value = text_arg(args, 0)?;
    let delimiter = text_arg(args, 1)?;
    let n = int_arg(args, 2)?;
    if n == 0 {
        return Err(PgError::invalid_parameter("field position must not be zero"));
    }
    if value.is_empty() {
        return text(String::new());
    }
    if delimiter.is_empty() {
        let whole = if n == 1 || n == -1 { value } else { "" };
        return text(whole.to_string());
    }

    let fields: Vec<&str> = value.split(delimiter).collect();
    let index = if n > 0 {
        n - 1
    } else {
        fields.len() as i64 + n
    };
    let field = usize::try_from(index)
        .ok()
        .and_then(|i| fields.get(i))
        .copied()
        .unwrap_or("");
    text(field.to_string())
}

/// Replace each character found in `from` with the character at the same
/// position in `to`, deleting it when `to` is shorter
fn translate(args: &[Datum], ctx: &EvalContext) -> PgResult<Datum> {
    let value = text_arg(args, 0)?;
    let from: Vec<char> = text_arg(args, 1)?.chars().collect();
    let to: Vec<char> = text_arg(args, 2)?.chars().collect();
    let translated: String = value
        .chars()
        .filter_map(|c| match from.iter().position(|f| *f == c) {
            Some(index) => to.get(index).copied(),
            None => Some(c),
        })
        .collect();
    check_length(translated.len(), ctx)?;
    text(translated)
}

fn starts_with(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    Ok(Datum::Bool(text_arg(args, 0)?.starts_with(text_arg(args, 1)?)))
}

// === Length and case ===

fn char_length(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    Ok(Datum::Int4(char_count(text_arg(args, 0)?) as i32))
}

fn octet_length(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    Ok(Datum::Int4(text_arg(args, 0)?.len() as i32))
}

fn lower(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    text(text_arg(args, 0)?.to_lowercase())
}

fn upper(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    text(text_arg(args, 0)?.to_uppercase())
}

/// Uppercase the first letter of every alphanumeric run, lowercase the rest
fn initcap(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let mut result = String::new();
    let mut in_word = false;
    for c in text_arg(args, 0)?.chars() {
        if in_word {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        in_word = c.is_alphanumeric();
    }
    text(result)
}

fn reverse(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    text(text_arg(args, 0)?.chars().rev().collect())
}

// === Construction ===

fn repeat(args: &[Datum], ctx: &EvalContext) -> PgResult<Datum> {
    let value = text_arg(args, 0)?;
    let count = int_arg(args, 1)?.max(0) as usize;
    let bytes = value
        .len()
        .checked_mul(count)
        .ok_or_else(|| PgError::program_limit("requested length too large"))?;
    check_length(bytes, ctx)?;
    text(value.repeat(count))
}

#[derive(Clone, Copy, PartialEq)]
enum PadSide {
    Left,
    Right,
}

/// Pad (or truncate) `value` to `length` characters with repetitions of `fill`
fn pad(args: &[Datum], ctx: &EvalContext, side: PadSide) -> PgResult<Datum> {
    let value = text_arg(args, 0)?;
    let length = int_arg(args, 1)?.max(0) as usize;
    let fill: Vec<char> = if args.len() > 2 {
        text_arg(args, 2)?.chars().collect()
    } else {
        vec![' ']
    };

    let chars: Vec<char> = value.chars().collect();
    if chars.len() >= length || fill.is_empty() {
        return text(chars.into_iter().take(length).collect());
    }
    let max_char_len = fill.iter().map(|c| c.len_utf8()).max().unwrap_or(1);
    check_length(value.len() + (length - chars.len()) * max_char_len, ctx)?;

    let padding: String = fill.iter().cycle().take(length - chars.len()).collect();
    let result = match side {
        PadSide::Left => padding + value,
        PadSide::Right => value.to_string() + &padding,
    };
    text(result)
}

fn lpad(args: &[Datum], ctx: &EvalContext) -> PgResult<Datum> {
    pad(args, ctx, PadSide::Left)
}

fn rpad(args: &[Datum], ctx: &EvalContext) -> PgResult<Datum> {
    pad(args, ctx, PadSide::Right)
}

// === Code points ===

fn ascii(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let code = text_arg(args, 0)?.chars().next().map(|c| c as i32).unwrap_or(0);
    Ok(Datum::Int4(code))
}

fn chr(args: &[Datum], _ctx: &EvalContext) -> PgResult<Datum> {
    let code = int_arg(args, 0)?;
    if code == 0 {
        return Err(PgError::program_limit("null character not permitted"));
    }
    if code < 0 {
        return Err(PgError::program_limit("character number must be positive"));
    }
    if code > 0x10FFFF {
        return Err(PgError::program_limit(format!(
            "requested character too large for encoding: {}",
            code
        )));
    }
    let c = u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| {
            PgError::program_limit(format!(
                "requested character not valid for encoding: {}",
                code
            ))
        })?;
    text(c.to_string())
}
