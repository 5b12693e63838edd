// SPDX-License-Identifier: MIT OR Apache-2.0

//! Overload Resolution
//!
//! Picks the builtin to call for a given list of argument types, following
//! PostgreSQL's `func_select_candidate` heuristics:
//!
//! 1. keep overloads with the right number of parameters
//! 2. an exact match wins outright
//! 3. drop overloads some argument cannot reach through an implicit cast
//! 4. keep the overloads with the most exact matches
//! 5. keep the overloads accepting preferred types at the most positions
//! 6. resolve `unknown` arguments by type category
//! 7. assume `unknown` arguments share the type of the known ones

use super::builtin_wrapper::{BuiltinFunction, Overloads};
use crate::core::cast::can_coerce_implicitly;
use crate::query_api::definition::attribute::{Type, TypeCategory};

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(BuiltinFunction),
    NotFound,
    Ambiguous,
}

impl PartialEq for BuiltinFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.params == other.params && self.ret == other.ret
    }
}

pub fn select_candidate(overloads: &Overloads, arg_types: &[Type]) -> Resolution {
    let arity: Vec<&BuiltinFunction> = overloads
        .candidates()
        .iter()
        .filter(|f| f.params.len() == arg_types.len())
        .collect();

    if let Some(exact) = arity.iter().find(|f| f.params == arg_types) {
        return Resolution::Found(**exact);
    }

    // Binary operators: an unknown operand is assumed to have the other operand's type
    if arg_types.len() == 2 {
        let assumed = match (arg_types[0], arg_types[1]) {
            (Type::Unknown, known) | (known, Type::Unknown) if known != Type::Unknown => {
                Some([known, known])
            }
            _ => None,
        };
        if let Some(assumed) = assumed {
            if let Some(exact) = arity.iter().find(|f| f.params == assumed) {
                return Resolution::Found(**exact);
            }
        }
    }

    let mut candidates: Vec<&BuiltinFunction> = arity
        .into_iter()
        .filter(|f| {
            f.params
                .iter()
                .zip(arg_types)
                .all(|(param, arg)| can_coerce_implicitly(*arg, *param))
        })
        .collect();
    if let Some(found) = settled(&candidates) {
        return found;
    }

    // Most exact matches on known argument types
    candidates = keep_best(candidates, |f| {
        f.params
            .iter()
            .zip(arg_types)
            .filter(|(param, arg)| **arg != Type::Unknown && *param == *arg)
            .count()
    });
    if let Some(found) = settled(&candidates) {
        return found;
    }

    // Most preferred types where a conversion is required
    candidates = keep_best(candidates, |f| {
        f.params
            .iter()
            .zip(arg_types)
            .filter(|(param, arg)| {
                **arg != Type::Unknown && (*param == *arg || param.is_preferred())
            })
            .count()
    });
    if let Some(found) = settled(&candidates) {
        return found;
    }

    candidates = resolve_unknowns(candidates, arg_types);
    if let Some(found) = settled(&candidates) {
        return found;
    }

    // Unknowns take the type shared by all known arguments
    let known: Vec<Type> = arg_types
        .iter()
        .copied()
        .filter(|t| *t != Type::Unknown)
        .collect();
    if !known.is_empty() && known.len() < arg_types.len() && known.iter().all(|t| *t == known[0]) {
        let assumed: Vec<Type> = arg_types
            .iter()
            .map(|t| if *t == Type::Unknown { known[0] } else { *t })
            .collect();
        let matching: Vec<&BuiltinFunction> = candidates
            .iter()
            .copied()
            .filter(|f| {
                f.params
                    .iter()
                    .zip(&assumed)
                    .all(|(param, arg)| can_coerce_implicitly(*arg, *param))
            })
            .collect();
        if matching.len() == 1 {
            return Resolution::Found(*matching[0]);
        }
    }

    Resolution::Ambiguous
}

fn settled(candidates: &[&BuiltinFunction]) -> Option<Resolution> {
    match candidates {
        [] => Some(Resolution::NotFound),
        [only] => Some(Resolution::Found(**only)),
        _ => None,
    }
}

fn keep_best<'a>(
    candidates: Vec<&'a BuiltinFunction>,
    score: impl Fn(&BuiltinFunction) -> usize,
) -> Vec<&'a BuiltinFunction> {
    let best = candidates.iter().map(|f| score(f)).max().unwrap_or(0);
    candidates.into_iter().filter(|f| score(f) == best).collect()
}

/// Decide a category (and possibly the preferred type) for every unknown
/// argument position, then keep the candidates that agree at all of them
fn resolve_unknowns<'a>(
    candidates: Vec<&'a BuiltinFunction>,
    arg_types: &[Type],
) -> Vec<&'a BuiltinFunction> {
    let mut slots: Vec<(usize, TypeCategory, bool)> = Vec::new();
    for (position, arg) in arg_types.iter().enumerate() {
        if *arg != Type::Unknown {
            continue;
        }
        let categories: Vec<TypeCategory> = candidates
            .iter()
            .map(|f| f.params[position].category())
            .collect();
        let category = if categories.contains(&TypeCategory::String) {
            TypeCategory::String
        } else if categories.iter().all(|c| *c == categories[0]) {
            categories[0]
        } else {
            // Conflicting categories leave this position undecided
            continue;
        };
        let has_preferred = candidates.iter().any(|f| {
            let param = f.params[position];
            param.category() == category && param.is_preferred()
        });
        slots.push((position, category, has_preferred));
    }
    if slots.is_empty() {
        return candidates;
    }

    let kept: Vec<&BuiltinFunction> = candidates
        .iter()
        .copied()
        .filter(|f| {
            slots.iter().all(|(position, category, has_preferred)| {
                let param = f.params[*position];
                param.category() == *category && (!has_preferred || param.is_preferred())
            })
        })
        .collect();
    if kept.is_empty() {
        candidates
    } else {
        kept
    }
}
