// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQL Data Types
//!
//! The scalar types understood by the engine, with their PostgreSQL names,
//! OIDs, type categories and type modifiers (`numeric(p,s)`, `varchar(n)`).

use crate::core::error::{PgError, PgResult, SqlState};
use std::fmt;

/// PostgreSQL scalar type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    Int2,
    Int4,
    Int8,
    Float4,
    Float8,
    Numeric,
    Text,
    Varchar,
    /// Type of a quoted literal (or NULL) whose type is decided by context
    Unknown,
}

/// Type category used by overload resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Boolean,
    Numeric,
    String,
    Unknown,
}

impl Type {
    /// Canonical name, as used in error messages (`format_type`)
    pub const fn name(&self) -> &'static str {
        match self {
            Type::Bool => "boolean",
            Type::Int2 => "smallint",
            Type::Int4 => "integer",
            Type::Int8 => "bigint",
            Type::Float4 => "real",
            Type::Float8 => "double precision",
            Type::Numeric => "numeric",
            Type::Text => "text",
            Type::Varchar => "character varying",
            Type::Unknown => "unknown",
        }
    }

    /// Internal name (`pg_type.typname`), also used for cast column names
    pub const fn short_name(&self) -> &'static str {
        match self {
            Type::Bool => "bool",
            Type::Int2 => "int2",
            Type::Int4 => "int4",
            Type::Int8 => "int8",
            Type::Float4 => "float4",
            Type::Float8 => "float8",
            Type::Numeric => "numeric",
            Type::Text => "text",
            Type::Varchar => "varchar",
            Type::Unknown => "unknown",
        }
    }

    pub const fn oid(&self) -> u32 {
        match self {
            Type::Bool => 16,
            Type::Int8 => 20,
            Type::Int2 => 21,
            Type::Int4 => 23,
            Type::Text => 25,
            Type::Float4 => 700,
            Type::Float8 => 701,
            Type::Unknown => 705,
            Type::Varchar => 1043,
            Type::Numeric => 1700,
        }
    }

    pub const fn category(&self) -> TypeCategory {
        match self {
            Type::Bool => TypeCategory::Boolean,
            Type::Int2 | Type::Int4 | Type::Int8 | Type::Float4 | Type::Float8 | Type::Numeric => {
                TypeCategory::Numeric
            }
            Type::Text | Type::Varchar => TypeCategory::String,
            Type::Unknown => TypeCategory::Unknown,
        }
    }

    /// Whether this is the preferred type of its category
    pub const fn is_preferred(&self) -> bool {
        matches!(self, Type::Bool | Type::Float8 | Type::Text)
    }

    pub const fn is_integer(&self) -> bool {
        matches!(self, Type::Int2 | Type::Int4 | Type::Int8)
    }

    /// Resolve a type name as written in SQL (`int8`, `double precision`,
    /// `numeric(10,2)`, `varchar(5)`, ...)
    pub fn from_sql_name(raw: &str) -> PgResult<(Type, Option<TypeModifier>)> {
        let lowered = raw.trim().to_lowercase();
        let (base, args) = match lowered.find('(') {
            Some(open) => {
                let close = lowered.rfind(')').ok_or_else(|| {
                    PgError::syntax_error(format!("invalid type name \"{}\"", raw))
                })?;
                (lowered[..open].trim().to_string(), Some(&lowered[open + 1..close]))
            }
            None => (lowered.clone(), None),
        };
        let base = base.trim_start_matches("pg_catalog.").trim_matches('"');
        let base = base.split_whitespace().collect::<Vec<_>>().join(" ");

        let modifiers = match args {
            Some(list) => list
                .split(',')
                .map(|part| {
                    part.trim().parse::<i64>().map_err(|_| {
                        PgError::syntax_error(format!("invalid type modifier in \"{}\"", raw))
                    })
                })
                .collect::<PgResult<Vec<i64>>>()?,
            None => Vec::new(),
        };

        let ty = match base.as_str() {
            "bool" | "boolean" => Type::Bool,
            "int2" | "smallint" => Type::Int2,
            "int" | "int4" | "integer" => Type::Int4,
            "int8" | "bigint" => Type::Int8,
            "float4" | "real" => Type::Float4,
            "float8" | "double precision" | "double" => Type::Float8,
            "float" => match modifiers.first() {
                Some(p) if *p < 1 => {
                    return Err(PgError::invalid_parameter(
                        "precision for type float must be at least 1 bit",
                    ))
                }
                Some(p) if *p <= 24 => Type::Float4,
                Some(p) if *p <= 53 => Type::Float8,
                Some(_) => {
                    return Err(PgError::invalid_parameter(
                        "precision for type float must be less than 54 bits",
                    ))
                }
                None => Type::Float8,
            },
            "numeric" | "decimal" | "dec" => Type::Numeric,
            "text" => Type::Text,
            "varchar" | "character varying" | "char varying" => Type::Varchar,
            "unknown" => Type::Unknown,
            _ => {
                return Err(PgError::new(
                    SqlState::UndefinedObject,
                    format!("type \"{}\" does not exist", base),
                ))
            }
        };

        let modifier = match (ty, modifiers.as_slice()) {
            (_, []) => None,
            (Type::Float4 | Type::Float8, [_]) if base == "float" => None,
            (Type::Numeric, [precision]) => Some(TypeModifier::numeric(*precision, 0)?),
            (Type::Numeric, [precision, scale]) => Some(TypeModifier::numeric(*precision, *scale)?),
            (Type::Varchar, [length]) => Some(TypeModifier::varchar(*length)?),
            _ => {
                return Err(PgError::syntax_error(format!(
                    "type modifier is not allowed for type \"{}\"",
                    base
                )))
            }
        };
        Ok((ty, modifier))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type modifier (`atttypmod`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeModifier {
    Numeric { precision: u32, scale: u32 },
    Varchar { length: usize },
}

/// Largest numeric precision representable by the fixed-point backend
pub const NUMERIC_MAX_PRECISION: i64 = 28;

impl TypeModifier {
    pub fn numeric(precision: i64, scale: i64) -> PgResult<Self> {
        if !(1..=NUMERIC_MAX_PRECISION).contains(&precision) {
            return Err(PgError::invalid_parameter(format!(
                "NUMERIC precision {} must be between 1 and {}",
                precision, NUMERIC_MAX_PRECISION
            )));
        }
        if scale < 0 || scale > precision {
            return Err(PgError::invalid_parameter(format!(
                "NUMERIC scale {} must be between 0 and precision {}",
                scale, precision
            )));
        }
        Ok(TypeModifier::Numeric {
            precision: precision as u32,
            scale: scale as u32,
        })
    }

    pub fn varchar(length: i64) -> PgResult<Self> {
        if length < 1 {
            return Err(PgError::invalid_parameter(
                "length for type varchar must be at least 1",
            ));
        }
        Ok(TypeModifier::Varchar {
            length: length as usize,
        })
    }
}

impl fmt::Display for TypeModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeModifier::Numeric { precision, scale } => write!(f, "({},{})", precision, scale),
            TypeModifier::Varchar { length } => write!(f, "({})", length),
        }
    }
}
