//! Attendance status and aggregation.

use serde::{Deserialize, Serialize};

/// Credit a late mark earns toward the attendance rate.
const LATE_CREDIT: f64 = 0.5;

/// Per-date attendance status.
///
/// Wire format: lowercase string (`"present"`, `"absent"`, `"late"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    /// Convert from the wire string. Returns `None` for unknown values.
    pub fn from_str(v: &str) -> Option<Self> {
        match v {
            "present" => Some(Self::Present),
            "absent" => Some(Self::Absent),
            "late" => Some(Self::Late),
            _ => None,
        }
    }

    /// Convert to the wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
        }
    }
}

/// Tallied counts over a set of attendance records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendanceSummary {
    pub present: u64,
    pub absent: u64,
    pub late: u64,
}

impl AttendanceSummary {
    /// Tally statuses from any iterator. Order is irrelevant.
    pub fn tally<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = AttendanceStatus>,
    {
        let mut summary = Self::default();
        for status in statuses {
            match status {
                AttendanceStatus::Present => summary.present += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::Late => summary.late += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> u64 {
        self.present + self.absent + self.late
    }

    /// Attendance rate in percent: `(present + late * 0.5) / total * 100`.
    ///
    /// Late is worth exactly half credit. An empty set yields 0.0, not NaN.
    pub fn rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.present as f64 + self.late as f64 * LATE_CREDIT) / total as f64 * 100.0
    }
}
