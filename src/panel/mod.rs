//! Panel controls → chain options.
//!
//! Once per tick the module reads its knobs, switches and CV jacks and turns
//! them into an [`Options`] bundle. Continuous controls combine the knob
//! with its attenuverted CV:
//!
//! ```text
//! effective = knob + cv × trim
//! ```
//!
//! Switches are read as whole positions (truncated toward zero) and mapped
//! through total `from_index` conversions. A position that does not exist,
//! for instance from a widget that is briefly out of sync with the engine,
//! selects the first option instead of failing.

pub mod message;
pub mod params;
pub mod state;

pub use message::{ControlMessage, MessageReceiver, NoMessages};
pub use params::{InputId, ParamId, ParamSpec, PARAMS};
pub use state::PanelState;

use crate::{
    chain::{Options, Order},
    dsp::{ClipLevel, RectifyDirection, RectifyLevel},
};

/// Where control values come from: a host, a test, a `PanelState`.
pub trait ControlSource {
    /// Current knob or switch position.
    fn param(&self, id: ParamId) -> f32;

    /// Voltage at a jack, or `normal` when nothing is patched.
    fn normal_voltage(&self, input: InputId, normal: f32) -> f32;
}

/// Switch value to position index. `as` truncates toward zero and maps NaN to 0.
#[inline]
pub fn switch_position(value: f32) -> i32 {
    value as i32
}

#[inline]
fn knob_plus_cv<C: ControlSource + ?Sized>(
    controls: &C,
    knob: ParamId,
    cv: InputId,
    trim: ParamId,
) -> f32 {
    controls.param(knob) + controls.normal_voltage(cv, 0.0) * controls.param(trim)
}

pub fn read_attenuversion<C: ControlSource + ?Sized>(controls: &C) -> f32 {
    knob_plus_cv(
        controls,
        ParamId::Attenuverter,
        InputId::AttenuverterCv,
        ParamId::AttenuverterCvTrim,
    )
}

pub fn read_offset<C: ControlSource + ?Sized>(controls: &C) -> f32 {
    knob_plus_cv(controls, ParamId::Offset, InputId::OffsetCv, ParamId::OffsetCvTrim)
}

pub fn read_order<C: ControlSource + ?Sized>(controls: &C) -> Order {
    Order::from_index(switch_position(controls.param(ParamId::Order)))
}

pub fn read_clip<C: ControlSource + ?Sized>(controls: &C) -> ClipLevel {
    ClipLevel::from_index(switch_position(controls.param(ParamId::Clip)))
}

pub fn read_rectify<C: ControlSource + ?Sized>(controls: &C) -> RectifyLevel {
    RectifyLevel::from_index(switch_position(controls.param(ParamId::Rectify)))
}

pub fn read_direction<C: ControlSource + ?Sized>(controls: &C) -> RectifyDirection {
    RectifyDirection::from_index(switch_position(controls.param(ParamId::RectifyDirection)))
}

/// Build this tick's options from the live controls.
pub fn derive_options<C: ControlSource + ?Sized>(controls: &C) -> Options {
    Options {
        order: read_order(controls),
        attenuversion: read_attenuversion(controls),
        offset: read_offset(controls),
        clip: read_clip(controls),
        rectify: read_rectify(controls),
        direction: read_direction(controls),
    }
}
