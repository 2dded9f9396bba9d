//! Core types for the vocabulary drill.

use serde::{Deserialize, Serialize};

/// A dictionary word with its derived reading and romanization.
///
/// `reading` and `romanization` are space-delimited per token and are fixed
/// when the entry is derived from its surface form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub surface: String,
    pub reading: String,
    pub meaning: String,
    pub romanization: String,
}

/// Correct/wrong counters kept by the caller of the matcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyStats {
    pub correct: u32,
    pub wrong: u32,
}

impl StudyStats {
    /// Record the outcome of one answer.
    pub fn record(&mut self, is_correct: bool) {
        if is_correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.correct + self.wrong
    }

    /// Share of correct answers, 0.0 when nothing has been answered yet.
    pub fn accuracy(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.correct as f64 / total as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_record() {
        let mut stats = StudyStats::default();
        stats.record(true);
        stats.record(true);
        stats.record(false);
        assert_eq!(stats.correct, 2);
        assert_eq!(stats.wrong, 1);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_stats_accuracy() {
        assert_eq!(StudyStats::default().accuracy(), 0.0);

        let stats = StudyStats { correct: 3, wrong: 1 };
        assert_eq!(stats.accuracy(), 0.75);
    }
}
