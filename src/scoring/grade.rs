use std::fmt;

/// Coarse label for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    Weak,
    Fair,
    Good,
    Excellent,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => Grade::Weak,
            40..=59 => Grade::Fair,
            60..=79 => Grade::Good,
            _ => Grade::Excellent,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::Fair => "Fair",
            Grade::Weak => "Weak",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_bands() {
        assert_eq!(Grade::from_score(100), Grade::Excellent);
        assert_eq!(Grade::from_score(80), Grade::Excellent);
        assert_eq!(Grade::from_score(79), Grade::Good);
        assert_eq!(Grade::from_score(60), Grade::Good);
        assert_eq!(Grade::from_score(59), Grade::Fair);
        assert_eq!(Grade::from_score(40), Grade::Fair);
        assert_eq!(Grade::from_score(39), Grade::Weak);
        assert_eq!(Grade::from_score(0), Grade::Weak);
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::Excellent.to_string(), "Excellent");
        assert_eq!(Grade::Weak.to_string(), "Weak");
    }
}
