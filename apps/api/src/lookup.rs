//! Lookup tables from the short codes the frontend sends to the phrases used in search queries.

use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Institutions that can be searched for. Codes match the frontend's select values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum University {
    Guelph,
    Conestoga,
    Laurier,
    Waterloo,
}

impl University {
    pub const ALL: [University; 4] = [
        University::Guelph,
        University::Conestoga,
        University::Laurier,
        University::Waterloo,
    ];

    pub fn code(self) -> &'static str {
        match self {
            University::Guelph => "Guelph",
            University::Conestoga => "Conestoga",
            University::Laurier => "Laurier",
            University::Waterloo => "Waterloo",
        }
    }

    /// Canonical institution name as it appears on profiles.
    pub fn full_name(self) -> &'static str {
        match self {
            University::Guelph => "University of Guelph",
            University::Conestoga => "Conestoga College",
            University::Laurier => "Wilfrid Laurier University",
            University::Waterloo => "University of Waterloo",
        }
    }
}

impl FromStr for University {
    type Err = AppError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        University::ALL
            .into_iter()
            .find(|u| u.code() == code)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "unknown university '{code}' (expected one of: {})",
                    codes(University::ALL.iter().map(|u| u.code()))
                ))
            })
    }
}

impl fmt::Display for University {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeStatus {
    Bachelors,
    Masters,
    Phd,
    Alumni,
}

impl DegreeStatus {
    pub const ALL: [DegreeStatus; 4] = [
        DegreeStatus::Bachelors,
        DegreeStatus::Masters,
        DegreeStatus::Phd,
        DegreeStatus::Alumni,
    ];

    pub fn code(self) -> &'static str {
        match self {
            DegreeStatus::Bachelors => "Bachelor's",
            DegreeStatus::Masters => "Master's",
            DegreeStatus::Phd => "PhD",
            DegreeStatus::Alumni => "Alumni",
        }
    }

    /// Phrase appended unquoted to the keyword query.
    pub fn phrase(self) -> &'static str {
        match self {
            DegreeStatus::Bachelors => "Bachelor's student",
            DegreeStatus::Masters => "Master's student",
            DegreeStatus::Phd => "PhD student",
            DegreeStatus::Alumni => "Alumni",
        }
    }
}

impl FromStr for DegreeStatus {
    type Err = AppError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        DegreeStatus::ALL
            .into_iter()
            .find(|d| d.code() == code)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "unknown degree status '{code}' (expected one of: {})",
                    codes(DegreeStatus::ALL.iter().map(|d| d.code()))
                ))
            })
    }
}

impl fmt::Display for DegreeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn codes<'a>(iter: impl Iterator<Item = &'a str>) -> String {
    iter.collect::<Vec<_>>().join(", ")
}
