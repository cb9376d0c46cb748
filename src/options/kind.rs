// src/options/kind.rs
//! The twelve concrete option kinds
//!
//! Every kind decomposes into two independent axes: a [`Flavor`] (call or put)
//! and an optional [`BarrierSpec`] (direction × knock type). Lookback kinds
//! carry no barrier and compare the strike with the running extreme instead
//! of spot.

use crate::error::LatticeError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Call,
    Put,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarrierDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnockType {
    /// Activated once the barrier has been touched
    In,
    /// Cancelled once the barrier has been touched
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BarrierSpec {
    pub direction: BarrierDirection,
    pub knock: KnockType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    Call,
    Put,
    LookbackCall,
    LookbackPut,
    UpAndInCall,
    UpAndOutCall,
    DownAndInCall,
    DownAndOutCall,
    UpAndInPut,
    UpAndOutPut,
    DownAndInPut,
    DownAndOutPut,
}

impl OptionKind {
    /// All kinds, in menu order
    pub const ALL: [OptionKind; 12] = [
        OptionKind::Call,
        OptionKind::Put,
        OptionKind::LookbackCall,
        OptionKind::LookbackPut,
        OptionKind::UpAndInCall,
        OptionKind::UpAndOutCall,
        OptionKind::DownAndInCall,
        OptionKind::DownAndOutCall,
        OptionKind::UpAndInPut,
        OptionKind::UpAndOutPut,
        OptionKind::DownAndInPut,
        OptionKind::DownAndOutPut,
    ];

    pub fn flavor(self) -> Flavor {
        use OptionKind::*;
        match self {
            Call | LookbackCall | UpAndInCall | UpAndOutCall | DownAndInCall | DownAndOutCall => {
                Flavor::Call
            }
            Put | LookbackPut | UpAndInPut | UpAndOutPut | DownAndInPut | DownAndOutPut => {
                Flavor::Put
            }
        }
    }

    pub fn barrier(self) -> Option<BarrierSpec> {
        use BarrierDirection::*;
        use KnockType::*;
        let (direction, knock) = match self {
            OptionKind::UpAndInCall | OptionKind::UpAndInPut => (Up, In),
            OptionKind::UpAndOutCall | OptionKind::UpAndOutPut => (Up, Out),
            OptionKind::DownAndInCall | OptionKind::DownAndInPut => (Down, In),
            OptionKind::DownAndOutCall | OptionKind::DownAndOutPut => (Down, Out),
            OptionKind::Call
            | OptionKind::Put
            | OptionKind::LookbackCall
            | OptionKind::LookbackPut => return None,
        };
        Some(BarrierSpec { direction, knock })
    }

    pub fn is_barrier(self) -> bool {
        self.barrier().is_some()
    }

    pub fn is_lookback(self) -> bool {
        matches!(self, OptionKind::LookbackCall | OptionKind::LookbackPut)
    }

    /// Payoff depends on the price history, not only on spot
    pub fn is_path_dependent(self) -> bool {
        self.is_barrier() || self.is_lookback()
    }

    pub fn label(self) -> &'static str {
        match self {
            OptionKind::Call => "Call",
            OptionKind::Put => "Put",
            OptionKind::LookbackCall => "Lookback Call",
            OptionKind::LookbackPut => "Lookback Put",
            OptionKind::UpAndInCall => "Up and In Call",
            OptionKind::UpAndOutCall => "Up and Out Call",
            OptionKind::DownAndInCall => "Down and In Call",
            OptionKind::DownAndOutCall => "Down and Out Call",
            OptionKind::UpAndInPut => "Up and In Put",
            OptionKind::UpAndOutPut => "Up and Out Put",
            OptionKind::DownAndInPut => "Down and In Put",
            OptionKind::DownAndOutPut => "Down and Out Put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize(label: &str) -> String {
    let compact: String = label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    let compact = compact.strip_prefix("barrier").unwrap_or(&compact);
    compact.replace("loopback", "lookback")
}

impl FromStr for OptionKind {
    type Err = LatticeError;

    /// Accepts labels case-insensitively, ignoring spaces and punctuation:
    /// `"up and in call"`, `"UpAndInCall"`, `"Barrier Down and Out Put"`, `"loopback call"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        OptionKind::ALL
            .into_iter()
            .find(|kind| normalize(kind.label()) == wanted)
            .ok_or_else(|| LatticeError::invalid("kind", format!("unknown option kind '{}'", s)))
    }
}
