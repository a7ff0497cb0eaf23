use serde::{Deserialize, Serialize};

/// Timeline width preset, ordered from most narrow to widest.
///
/// The UI layer projects a future reference date from one of these to
/// scale its timeline; this crate only does the projection (see
/// [`crate::util::dates::next_interval`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timescale {
    Week,
    TwoWeeks,
    Month,
}

impl Timescale {
    /// The timescale a fresh board opens with.
    pub const DEFAULT: Timescale = Timescale::Month;

    /// One step narrower. Already-narrowest stays put.
    pub fn zoom_in(self) -> Timescale {
        match self {
            Timescale::Week | Timescale::TwoWeeks => Timescale::Week,
            Timescale::Month => Timescale::TwoWeeks,
        }
    }

    /// One step wider. Already-widest stays put.
    pub fn zoom_out(self) -> Timescale {
        match self {
            Timescale::Week => Timescale::TwoWeeks,
            Timescale::TwoWeeks | Timescale::Month => Timescale::Month,
        }
    }

    /// Human-readable label for timescale buttons.
    pub fn label(self) -> &'static str {
        match self {
            Timescale::Week => "1 Week",
            Timescale::TwoWeeks => "2 Weeks",
            Timescale::Month => "1 Month",
        }
    }
}
