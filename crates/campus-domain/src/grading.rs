//! Canonical grading policy.
//!
//! The five-tier scale below is the only scale in the system. Derived fields
//! stored on a grade row (`percentage`, letter) are always produced here.

use serde::{Deserialize, Serialize};

/// Letter grade on the five-tier scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Map a percentage to a letter: >= 90 A+, >= 80 A, >= 70 B, >= 60 C,
    /// >= 50 D, else F. Boundary values take the higher tier.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::APlus
        } else if percentage >= 80.0 {
            Self::A
        } else if percentage >= 70.0 {
            Self::B
        } else if percentage >= 60.0 {
            Self::C
        } else if percentage >= 50.0 {
            Self::D
        } else {
            Self::F
        }
    }

    /// Convert to the wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

/// Derived fields stored on a grade row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedGrade {
    pub percentage: f64,
    pub letter: LetterGrade,
}

/// Compute percentage and letter from raw marks.
///
/// The percentage is not rounded before the tier comparison, so 89.999
/// stays an A. Callers must validate `marks >= 0` and `total_marks > 0`
/// before calling.
pub fn compute_grade(marks: f64, total_marks: f64) -> ComputedGrade {
    let percentage = (marks / total_marks) * 100.0;
    ComputedGrade {
        percentage,
        letter: LetterGrade::from_percentage(percentage),
    }
}
