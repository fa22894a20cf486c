use std::fmt;

/// A position in a declaration file (1-indexed, as editors display it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position of the first column of `line`
    pub fn line_start(line: usize) -> Self {
        Self::new(line, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 7).to_string(), "3:7");
        assert_eq!(Position::line_start(2).to_string(), "2:1");
    }

    #[test]
    fn test_ordering() {
        assert!(Position::new(1, 9) < Position::new(2, 1));
        assert!(Position::new(2, 1) < Position::new(2, 4));
    }
}
