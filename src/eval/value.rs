use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};

#[rustfmt::skip]
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash,
    Add, AddAssign, Sub, SubAssign, Neg, Display
)]
pub struct Value(i32);

impl Value {
    pub const ZERO: Value = Value(0);
    pub const INF: Value = Value(30000);
    pub const MIN_MATE_SCORE: Value = Value(Self::INF.0 - 100);

    pub const fn new(value: i32) -> Self {
        Value(value)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    // Static evaluations never reach the mate band
    pub const fn is_static_eval(self) -> bool {
        self.0 > -Self::MIN_MATE_SCORE.0 && self.0 < Self::MIN_MATE_SCORE.0
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value(value)
    }
}

impl From<Value> for i32 {
    fn from(value: Value) -> Self {
        value.0
    }
}
