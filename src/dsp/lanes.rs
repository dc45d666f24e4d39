//! Fixed-width lane vector shared by every shaping primitive.

/*
Lanes
=====

A polyphonic cable carries up to 16 voltages. The shaping code never looks
at a channel on its own: it works on groups of four consecutive channels at
once, one value per "lane".

    channels:  [ 0  1  2  3 | 4  5  6  7 | 8  9 10 11 | 12 13 14 15 ]
    groups:    [  group 0   |  group 1   |  group 2   |  group 3    ]

Every operation on a `Float4` is lane-wise. Lane 2 of the output depends
only on lane 2 of the input, so the four lanes can live in one SIMD register
and the compiler is free to vectorise the loops below.

Float semantics are plain IEEE: a NaN in one lane stays a NaN in that lane,
and never leaks into its neighbours.
*/

use std::ops::{Add, Index, IndexMut, Mul, Neg};

/// Number of lanes in one channel group.
pub const LANES: usize = 4;

/// Four parallel `f32` samples processed as one unit.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[repr(transparent)]
pub struct Float4(pub [f32; LANES]);

impl Float4 {
    pub const ZERO: Self = Self([0.0; LANES]);

    #[inline(always)]
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self([a, b, c, d])
    }

    /// Broadcast one value to every lane.
    #[inline(always)]
    pub const fn splat(value: f32) -> Self {
        Self([value; LANES])
    }

    #[inline(always)]
    pub const fn from_array(lanes: [f32; LANES]) -> Self {
        Self(lanes)
    }

    #[inline(always)]
    pub const fn to_array(self) -> [f32; LANES] {
        self.0
    }

    /// Apply `f` to every lane.
    #[inline(always)]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        let [a, b, c, d] = self.0;
        Self([f(a), f(b), f(c), f(d)])
    }

    #[inline(always)]
    pub fn abs(self) -> Self {
        self.map(f32::abs)
    }

    /// Lane-wise clamp to `[lo, hi]`, bounds inclusive.
    ///
    /// NaN lanes stay NaN.
    #[inline(always)]
    pub fn clamp(self, lo: f32, hi: f32) -> Self {
        debug_assert!(lo <= hi);
        self.map(|x| x.clamp(lo, hi))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.0.iter()
    }
}

impl From<[f32; LANES]> for Float4 {
    fn from(lanes: [f32; LANES]) -> Self {
        Self(lanes)
    }
}

impl From<Float4> for [f32; LANES] {
    fn from(v: Float4) -> Self {
        v.0
    }
}

impl Add for Float4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]])
    }
}

impl Add<f32> for Float4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: f32) -> Self {
        self + Self::splat(rhs)
    }
}

impl Mul for Float4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] * b[0], a[1] * b[1], a[2] * b[2], a[3] * b[3]])
    }
}

impl Mul<f32> for Float4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f32) -> Self {
        self * Self::splat(rhs)
    }
}

impl Neg for Float4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl Index<usize> for Float4 {
    type Output = f32;

    fn index(&self, lane: usize) -> &f32 {
        &self.0[lane]
    }
}

impl IndexMut<usize> for Float4 {
    fn index_mut(&mut self, lane: usize) -> &mut f32 {
        &mut self.0[lane]
    }
}
