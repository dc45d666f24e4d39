//! Static description of every control and jack on the panel.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Panel controls, in preset index order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    Attenuverter,
    AttenuverterCvTrim,
    Offset,
    OffsetCvTrim,
    Order,
    Clip,
    Rectify,
    RectifyDirection,
}

pub const NUM_PARAMS: usize = 8;

impl ParamId {
    pub const ALL: [ParamId; NUM_PARAMS] = [
        ParamId::Attenuverter,
        ParamId::AttenuverterCvTrim,
        ParamId::Offset,
        ParamId::OffsetCvTrim,
        ParamId::Order,
        ParamId::Clip,
        ParamId::Rectify,
        ParamId::RectifyDirection,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static ParamSpec {
        &PARAMS[self.index()]
    }
}

/// CV and signal jacks.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputId {
    Signal,
    AttenuverterCv,
    OffsetCv,
}

pub const NUM_INPUTS: usize = 3;

impl InputId {
    pub const ALL: [InputId; NUM_INPUTS] =
        [InputId::Signal, InputId::AttenuverterCv, InputId::OffsetCv];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        INPUT_NAMES[self.index()]
    }
}

pub const INPUT_NAMES: [&str; NUM_INPUTS] = ["[Poly] Signal", "Attenuverter CV", "Offset CV"];
pub const OUTPUT_NAME: &str = "[Poly] Signal";

/// Range, default and labelling of one control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub unit: &'static str,
    /// Position labels for switches, empty for continuous knobs.
    pub labels: &'static [&'static str],
}

impl ParamSpec {
    const fn knob(
        name: &'static str,
        min: f32,
        max: f32,
        default: f32,
        unit: &'static str,
    ) -> Self {
        Self {
            name,
            min,
            max,
            default,
            unit,
            labels: &[],
        }
    }

    const fn switch(name: &'static str, max: f32, labels: &'static [&'static str]) -> Self {
        Self {
            name,
            min: 0.0,
            max,
            default: 0.0,
            unit: "",
            labels,
        }
    }

    pub fn is_switch(&self) -> bool {
        !self.labels.is_empty()
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Label for a switch position, if this is a switch and the position exists.
    pub fn label(&self, value: f32) -> Option<&'static str> {
        usize::try_from(value as i32)
            .ok()
            .and_then(|i| self.labels.get(i).copied())
    }
}

pub const ORDER_LABELS: [&str; 12] = [
    "AOCR", "ACOR", "ACRO", "OACR", "OCAR", "OCRA", "CAOR", "CARO", "COAR", "CORA", "CRAO", "CROA",
];

pub const PARAMS: [ParamSpec; NUM_PARAMS] = [
    ParamSpec::knob("Signal Attenuverter", -2.0, 2.0, 1.0, ""),
    ParamSpec::knob("Attenuverter CV attenuverter", -2.0, 2.0, 1.0, "x"),
    ParamSpec::knob("Signal Offset", -10.0, 10.0, 0.0, "V"),
    ParamSpec::knob("Offset CV attenuverter", -2.0, 2.0, 1.0, "x"),
    ParamSpec::switch("Operation order", 11.0, &ORDER_LABELS),
    ParamSpec::switch("Clipping", 2.0, &["None", "±10 volts", "±5 volts"]),
    ParamSpec::switch("Rectify", 2.0, &["None", "Half", "Full"]),
    ParamSpec::switch("Rectify direction", 1.0, &["Positive", "Negative"]),
];
