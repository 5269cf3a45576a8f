//! Troop types and per-type containers

use anyhow::{bail, Result};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Troop type fielded in a rally.
///
/// The declaration order is significant: it is the tie-break order used when
/// rounding remainders are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TroopType {
    Infantry,
    Cavalry,
    Archer,
}

impl TroopType {
    pub const COUNT: usize = 3;

    pub fn all() -> [TroopType; Self::COUNT] {
        [TroopType::Infantry, TroopType::Cavalry, TroopType::Archer]
    }

    /// Slot of this type in a [`TroopArray`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Protocol keyword for this type
    pub fn keyword(self) -> &'static str {
        match self {
            TroopType::Infantry => "infantry",
            TroopType::Cavalry => "cavalry",
            TroopType::Archer => "archers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TroopType::Infantry => "Infantry",
            TroopType::Cavalry => "Cavalry",
            TroopType::Archer => "Archers",
        }
    }
}

impl FromStr for TroopType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "infantry" | "inf" => Ok(TroopType::Infantry),
            "cavalry" | "cav" => Ok(TroopType::Cavalry),
            "archer" | "archers" | "arch" => Ok(TroopType::Archer),
            _ => bail!("Unknown troop type: {}", s),
        }
    }
}

/// One value per troop type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TroopArray<T> {
    pub values: [T; TroopType::COUNT],
}

impl<T> TroopArray<T> {
    pub fn new(infantry: T, cavalry: T, archers: T) -> Self {
        Self {
            values: [infantry, cavalry, archers],
        }
    }

    pub fn from_fn(mut f: impl FnMut(TroopType) -> T) -> Self {
        let [i, c, a] = TroopType::all();
        Self::new(f(i), f(c), f(a))
    }

    pub fn iter(&self) -> impl Iterator<Item = (TroopType, &T)> {
        TroopType::all().into_iter().zip(self.values.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> TroopArray<U> {
        TroopArray::from_fn(|t| f(&self[t]))
    }
}

impl<T> Index<TroopType> for TroopArray<T> {
    type Output = T;

    fn index(&self, index: TroopType) -> &Self::Output {
        &self.values[index.index()]
    }
}

impl<T> IndexMut<TroopType> for TroopArray<T> {
    fn index_mut(&mut self, index: TroopType) -> &mut Self::Output {
        &mut self.values[index.index()]
    }
}
