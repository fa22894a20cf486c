use std::fmt;

/// One of the seven named fields of an alphabet declaration.
///
/// The five symbol-bearing fields (everything except `Quantifiers` and
/// `Formula`) double as the roles checked for name collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Variables,
    Constants,
    Predicates,
    Equality,
    Connectives,
    Quantifiers,
    Formula,
}

impl Field {
    /// All fields, in the order they conventionally appear in a declaration file.
    pub const ALL: [Field; 7] = [
        Field::Variables,
        Field::Constants,
        Field::Predicates,
        Field::Equality,
        Field::Connectives,
        Field::Quantifiers,
        Field::Formula,
    ];

    /// The field name as written in a declaration
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Variables => "variables",
            Self::Constants => "constants",
            Self::Predicates => "predicates",
            Self::Equality => "equality",
            Self::Connectives => "connectives",
            Self::Quantifiers => "quantifiers",
            Self::Formula => "formula",
        }
    }

    /// Look a field up by its declared name (exact, case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.as_str()), Some(field));
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Field::from_name("Variables"), None);
        assert_eq!(Field::from_name("variable"), None);
    }
}
