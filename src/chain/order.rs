//! Operation orders.
//!
//! Four operations give 4! = 24 sequences. Clip and rectify commute (see
//! `dsp::rectify`), so every sequence with R before C has a twin with the
//! two swapped that produces the same output. Only the 12 orders with C at or
//! before R are kept as selectable values; the other 12 resolve to them.
//!
//! Each order is data: a row in [`SEQUENCES`] listing the four operations in
//! application order. The chain walks that row with one loop.

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// One elementary operation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Attenuvert,
    Offset,
    Clip,
    Rectify,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Attenuvert, Op::Offset, Op::Clip, Op::Rectify];

    pub fn letter(self) -> char {
        match self {
            Self::Attenuvert => 'A',
            Self::Offset => 'O',
            Self::Clip => 'C',
            Self::Rectify => 'R',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Self::Attenuvert),
            'O' => Some(Self::Offset),
            'C' => Some(Self::Clip),
            'R' => Some(Self::Rectify),
            _ => None,
        }
    }
}

/// The 12 distinct operation orders, named by application order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    #[default]
    Aocr, // == AORC
    Acor, // == AROC
    Acro, // == ARCO
    Oacr, // == OARC
    Ocar, // == ORAC
    Ocra, // == ORCA
    Caor, // == RAOC
    Caro, // == RACO
    Coar, // == ROAC
    Cora, // == ROCA
    Crao, // == RCAO
    Croa, // == RCOA
}

use self::Op::{Attenuvert as A, Clip as C, Offset as O, Rectify as R};

/// Application sequence for each order, indexed by [`Order::index`].
pub const SEQUENCES: [[Op; 4]; 12] = [
    [A, O, C, R],
    [A, C, O, R],
    [A, C, R, O],
    [O, A, C, R],
    [O, C, A, R],
    [O, C, R, A],
    [C, A, O, R],
    [C, A, R, O],
    [C, O, A, R],
    [C, O, R, A],
    [C, R, A, O],
    [C, R, O, A],
];

impl Order {
    /// All orders in switch position order.
    pub const ALL: [Order; 12] = [
        Order::Aocr,
        Order::Acor,
        Order::Acro,
        Order::Oacr,
        Order::Ocar,
        Order::Ocra,
        Order::Caor,
        Order::Caro,
        Order::Coar,
        Order::Cora,
        Order::Crao,
        Order::Croa,
    ];

    /// Switch position to order. Anything outside 0..=11 is `Aocr`.
    pub fn from_index(index: i32) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or_default()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The four operations in the order they are applied.
    #[inline]
    pub fn sequence(self) -> [Op; 4] {
        SEQUENCES[self.index()]
    }

    /// The equivalent sequence with clip and rectify swapped.
    pub fn mirror_sequence(self) -> [Op; 4] {
        self.sequence().map(|op| match op {
            Op::Clip => Op::Rectify,
            Op::Rectify => Op::Clip,
            other => other,
        })
    }

    /// Resolve any of the 24 permutations to its canonical order.
    ///
    /// Returns `None` unless `sequence` uses each operation exactly once.
    pub fn from_sequence(sequence: [Op; 4]) -> Option<Self> {
        if !Op::ALL.iter().all(|op| sequence.contains(op)) {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|order| order.sequence() == sequence || order.mirror_sequence() == sequence)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Aocr => "AOCR",
            Self::Acor => "ACOR",
            Self::Acro => "ACRO",
            Self::Oacr => "OACR",
            Self::Ocar => "OCAR",
            Self::Ocra => "OCRA",
            Self::Caor => "CAOR",
            Self::Caro => "CARO",
            Self::Coar => "COAR",
            Self::Cora => "CORA",
            Self::Crao => "CRAO",
            Self::Croa => "CROA",
        }
    }

    /// Step through the switch positions, wrapping at either end.
    pub fn cycle(self, step: i32) -> Self {
        let len = Self::ALL.len() as i32;
        Self::from_index((self.index() as i32 + step).rem_euclid(len))
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Order {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::Order(s.to_string());
        let letters: Vec<char> = s.trim().chars().collect();
        if letters.len() != 4 {
            return Err(err());
        }

        let mut sequence = [Op::Attenuvert; 4];
        for (slot, &letter) in sequence.iter_mut().zip(&letters) {
            *slot = Op::from_letter(letter).ok_or_else(err)?;
        }
        Self::from_sequence(sequence).ok_or_else(err)
    }
}
