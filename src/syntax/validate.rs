//! Alphabet validation
//!
//! Checks run in a fixed order and stop at the first violation:
//! 1. field presence (every field exactly once, no unknown names)
//! 2. cardinality of `equality`, `connectives` and `quantifiers`
//! 3. character sets and predicate arity markers
//! 4. pairwise disjointness of the symbol roles

use indexmap::{IndexMap, IndexSet};
use smol_str::SmolStr;
use tracing::debug;

use super::alphabet::{Alphabet, PredicateSymbol};
use super::declaration::RawDeclaration;
use super::symbols::{self, PredicateShape};
use crate::base::Field;
use crate::base::constants::{CONNECTIVE_COUNT, EQUALITY_COUNT, QUANTIFIER_COUNT};
use crate::errors::{DeclarationDefect, ValidationError};

/// Validate a raw declaration into an [`Alphabet`].
pub fn validate(declaration: &RawDeclaration) -> Result<Alphabet, ValidationError> {
    let fields = collect_fields(declaration)?;
    let tokens = |field: Field| -> Vec<SmolStr> {
        fields
            .get(&field)
            .map(|value| value.split_whitespace().map(SmolStr::new).collect())
            .unwrap_or_default()
    };

    let variables = tokens(Field::Variables);
    let constants = tokens(Field::Constants);
    let predicates = tokens(Field::Predicates);
    let equality = tokens(Field::Equality);
    let connectives = tokens(Field::Connectives);
    let quantifiers = tokens(Field::Quantifiers);
    let formula = tokens(Field::Formula);

    check_count(Field::Equality, &equality, EQUALITY_COUNT)?;
    check_count(Field::Connectives, &connectives, CONNECTIVE_COUNT)?;
    check_count(Field::Quantifiers, &quantifiers, QUANTIFIER_COUNT)?;

    check_symbols(Field::Variables, &variables, symbols::is_plain_name)?;
    check_symbols(Field::Constants, &constants, symbols::is_plain_name)?;
    let predicates = predicates
        .iter()
        .map(predicate_symbol)
        .collect::<Result<Vec<_>, _>>()?;
    check_symbols(Field::Equality, &equality, symbols::is_equality_symbol)?;
    check_symbols(Field::Connectives, &connectives, symbols::is_connective_symbol)?;
    check_symbols(Field::Quantifiers, &quantifiers, symbols::is_connective_symbol)?;

    let variables: IndexSet<SmolStr> = variables.into_iter().collect();
    let constants: IndexSet<SmolStr> = constants.into_iter().collect();
    let predicate_names: IndexSet<SmolStr> =
        predicates.iter().map(|p| SmolStr::new(p.name())).collect();
    let equality_set: IndexSet<SmolStr> = equality.iter().cloned().collect();
    let connective_set: IndexSet<SmolStr> = connectives.iter().cloned().collect();

    check_disjoint(&[
        (Field::Variables, &variables),
        (Field::Constants, &constants),
        (Field::Predicates, &predicate_names),
        (Field::Equality, &equality_set),
        (Field::Connectives, &connective_set),
    ])?;

    let equality = equality
        .into_iter()
        .next()
        .ok_or_else(|| arity_mismatch(Field::Equality, EQUALITY_COUNT, 0))?;
    let connectives = <[SmolStr; CONNECTIVE_COUNT]>::try_from(connectives)
        .map_err(|rest| arity_mismatch(Field::Connectives, CONNECTIVE_COUNT, rest.len()))?;
    let quantifiers = <[SmolStr; QUANTIFIER_COUNT]>::try_from(quantifiers)
        .map_err(|rest| arity_mismatch(Field::Quantifiers, QUANTIFIER_COUNT, rest.len()))?;

    debug!(
        variables = variables.len(),
        constants = constants.len(),
        predicates = predicates.len(),
        formula_words = formula.len(),
        "alphabet validated"
    );

    Ok(Alphabet {
        variables,
        constants,
        predicates,
        equality,
        connectives,
        quantifiers,
        formula,
    })
}

/// Map each field to its value, rejecting unknown, duplicate and missing names
fn collect_fields(declaration: &RawDeclaration) -> Result<IndexMap<Field, &str>, ValidationError> {
    let mut fields = IndexMap::new();
    for entry in declaration.entries() {
        let name = entry.name.trim();
        let field = Field::from_name(name)
            .ok_or_else(|| DeclarationDefect::UnknownField(SmolStr::new(name)))?;
        if fields.insert(field, entry.value.as_str()).is_some() {
            return Err(DeclarationDefect::DuplicateField(field).into());
        }
    }

    if let Some(missing) = Field::ALL.into_iter().find(|field| !fields.contains_key(field)) {
        return Err(DeclarationDefect::MissingField(missing).into());
    }
    Ok(fields)
}

fn arity_mismatch(field: Field, expected: usize, actual: usize) -> ValidationError {
    ValidationError::ArityMismatch {
        field,
        expected,
        actual,
    }
}

fn check_count(field: Field, tokens: &[SmolStr], expected: usize) -> Result<(), ValidationError> {
    if tokens.len() == expected {
        Ok(())
    } else {
        Err(arity_mismatch(field, expected, tokens.len()))
    }
}

fn check_symbols(
    field: Field,
    tokens: &[SmolStr],
    allowed: fn(&str) -> bool,
) -> Result<(), ValidationError> {
    match tokens.iter().find(|token| !allowed(token)) {
        Some(token) => Err(ValidationError::InvalidSymbol {
            field,
            token: token.clone(),
        }),
        None => Ok(()),
    }
}

fn predicate_symbol(token: &SmolStr) -> Result<PredicateSymbol, ValidationError> {
    match symbols::scan_predicate(token) {
        PredicateShape::Valid { name, arity } => Ok(PredicateSymbol::new(name, arity)),
        PredicateShape::BadArity => Err(ValidationError::InvalidPredicateArity(token.clone())),
        PredicateShape::BadCharacters => Err(ValidationError::InvalidSymbol {
            field: Field::Predicates,
            token: token.clone(),
        }),
    }
}

fn check_disjoint(roles: &[(Field, &IndexSet<SmolStr>)]) -> Result<(), ValidationError> {
    for (i, (first, first_names)) in roles.iter().enumerate() {
        for (second, second_names) in &roles[i + 1..] {
            let shared: Vec<SmolStr> = first_names
                .iter()
                .filter(|name| second_names.contains(*name))
                .cloned()
                .collect();
            if !shared.is_empty() {
                return Err(ValidationError::NameCollision {
                    first: *first,
                    second: *second,
                    shared,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration() -> RawDeclaration {
        RawDeclaration::new()
            .with("variables", "x y")
            .with("constants", "a")
            .with("predicates", "P[2] Q[1]")
            .with("equality", "=")
            .with("connectives", "\\land \\lor \\implies \\iff \\neg")
            .with("quantifiers", "\\forall \\exists")
            .with("formula", "P(x,y)")
    }

    fn replace(field: Field, value: &str) -> RawDeclaration {
        let mut out = RawDeclaration::new();
        for entry in declaration().entries() {
            if entry.name == field.as_str() {
                out.push(entry.name.clone(), value);
            } else {
                out.push(entry.name.clone(), entry.value.clone());
            }
        }
        out
    }

    #[test]
    fn test_valid_declaration() {
        let alphabet = validate(&declaration()).unwrap();
        assert_eq!(alphabet.variables().len(), 2);
        assert_eq!(alphabet.predicates()[0].name(), "P");
        assert_eq!(alphabet.predicates()[0].arity(), 2);
        assert_eq!(alphabet.negation(), "\\neg");
        assert_eq!(alphabet.binary_connectives().len(), 4);
        assert_eq!(alphabet.formula_source(), "P(x,y)");
    }

    #[test]
    fn test_field_order_does_not_matter() {
        let mut reversed = RawDeclaration::new();
        for entry in declaration().entries().iter().rev() {
            reversed.push(entry.name.clone(), entry.value.clone());
        }
        assert!(validate(&reversed).is_ok());
    }

    #[test]
    fn test_missing_field() {
        let mut decl = RawDeclaration::new();
        for entry in declaration().entries() {
            if entry.name != "quantifiers" {
                decl.push(entry.name.clone(), entry.value.clone());
            }
        }
        assert_eq!(
            validate(&decl),
            Err(ValidationError::MalformedDeclaration(
                DeclarationDefect::MissingField(Field::Quantifiers)
            ))
        );
    }

    #[test]
    fn test_duplicate_field() {
        let decl = declaration().with("constants", "b");
        assert_eq!(
            validate(&decl),
            Err(ValidationError::MalformedDeclaration(
                DeclarationDefect::DuplicateField(Field::Constants)
            ))
        );
    }

    #[test]
    fn test_unknown_field() {
        let decl = declaration().with("functions", "f");
        assert!(matches!(
            validate(&decl),
            Err(ValidationError::MalformedDeclaration(DeclarationDefect::UnknownField(name))) if name == "functions"
        ));
    }

    #[test]
    fn test_cardinality_checked_before_characters() {
        let decl = replace(Field::Quantifiers, "\\forall ex-ists \\nexists");
        assert_eq!(
            validate(&decl),
            Err(ValidationError::ArityMismatch {
                field: Field::Quantifiers,
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_invalid_quantifier_symbol() {
        let decl = replace(Field::Quantifiers, "\\forall ex-ists");
        assert_eq!(
            validate(&decl),
            Err(ValidationError::InvalidSymbol {
                field: Field::Quantifiers,
                token: SmolStr::new("ex-ists")
            })
        );
    }

    #[test]
    fn test_predicate_without_marker() {
        let decl = replace(Field::Predicates, "P[2] Q");
        assert_eq!(
            validate(&decl),
            Err(ValidationError::InvalidPredicateArity(SmolStr::new("Q")))
        );
    }

    #[test]
    fn test_disjointness_reports_first_pair() {
        let decl = replace(Field::Constants, "a x");
        assert_eq!(
            validate(&decl),
            Err(ValidationError::NameCollision {
                first: Field::Variables,
                second: Field::Constants,
                shared: vec![SmolStr::new("x")],
            })
        );
    }

    #[test]
    fn test_predicate_name_collides_with_connective() {
        let mut decl = RawDeclaration::new();
        for entry in replace(Field::Predicates, "and[1]").entries() {
            if entry.name == "connectives" {
                decl.push("connectives", "and or implies iff not");
            } else {
                decl.push(entry.name.clone(), entry.value.clone());
            }
        }
        assert_eq!(
            validate(&decl),
            Err(ValidationError::NameCollision {
                first: Field::Predicates,
                second: Field::Connectives,
                shared: vec![SmolStr::new("and")],
            })
        );
    }

    #[test]
    fn test_empty_optional_sets_are_allowed() {
        let decl = replace(Field::Constants, "");
        let alphabet = validate(&decl).unwrap();
        assert!(alphabet.constants().is_empty());
    }
}
