use std::{
    cmp::Ordering,
    fmt,
    iter::Sum,
    marker::PhantomData,
    ops::{Add, Sub},
};

use serde::{Serialize, Serializer};

pub trait DistanceUnit: Copy + Eq {
    const NAME: &'static str;
    const NANOMETERS_IN_UNIT: i64;
}

/// A distance stored as whole nanometers.
///
/// Integer storage keeps sums exact and gives a total order, which the search
/// frontier relies on for deterministic tie-breaking.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Distance<T: DistanceUnit> {
    nm: i64,
    unit: PhantomData<T>,
}

macro_rules! create_distance_unit {
    ($struct_name:ident, $string_name:expr , $nm_conv:expr) => {
        #[derive(Debug, Copy, Clone, Eq, PartialEq)]
        pub struct $struct_name; // unit-like struct

        impl DistanceUnit for $struct_name {
            const NAME: &'static str = $string_name;
            const NANOMETERS_IN_UNIT: i64 = $nm_conv;
        }

        impl Distance<$struct_name> {
            pub fn new(value: i64) -> Distance<$struct_name> {
                Distance {
                    nm: value * $struct_name::NANOMETERS_IN_UNIT,
                    unit: PhantomData,
                }
            }
        }
    };
}

create_distance_unit!(Meters, "meter", 1_000_000_000);
create_distance_unit!(Kilometers, "kilometer", 1_000_000_000_000);

impl<T: DistanceUnit> Distance<T> {
    pub const ZERO: Distance<T> = Distance {
        nm: 0,
        unit: PhantomData,
    };

    /// Stands in for an infinite distance. Additions saturate at this value.
    pub const MAX: Distance<T> = Distance {
        nm: i64::MAX,
        unit: PhantomData,
    };

    #[inline(always)]
    pub fn value(&self) -> f64 {
        (self.nm as f64) / (T::NANOMETERS_IN_UNIT as f64)
    }

    pub fn is_infinite(&self) -> bool {
        self.nm == i64::MAX
    }

    pub fn saturating_add(self, other: Distance<T>) -> Distance<T> {
        Distance {
            nm: self.nm.saturating_add(other.nm),
            unit: PhantomData,
        }
    }

    /// Rounds half up to `decimals` decimal places of the unit.
    pub fn round(self, decimals: u32) -> Distance<T> {
        if self.is_infinite() {
            return self;
        }

        let step = T::NANOMETERS_IN_UNIT / 10_i64.pow(decimals);
        if step <= 1 {
            return self;
        }

        Distance {
            nm: (self.nm + step / 2).div_euclid(step) * step,
            unit: PhantomData,
        }
    }

    pub fn convert<U: DistanceUnit>(self) -> Distance<U> {
        Distance {
            nm: self.nm,
            unit: PhantomData,
        }
    }
}

impl<T> From<Distance<T>> for f64
where
    T: DistanceUnit,
{
    fn from(value: Distance<T>) -> Self {
        value.value()
    }
}

impl<T> fmt::Display for Distance<T>
where
    T: DistanceUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_infinite() {
            return write!(f, "infinite {}s", T::NAME);
        }

        let value = self.value();

        write!(
            f,
            "{} {}{}",
            value,
            T::NAME,
            match value {
                1_f64 => "",
                _ => "s",
            }
        )
    }
}

impl<T> Ord for Distance<T>
where
    T: DistanceUnit,
{
    fn cmp(&self, other: &Distance<T>) -> Ordering {
        self.nm.cmp(&other.nm)
    }
}

impl<T1, T2> PartialEq<Distance<T2>> for Distance<T1>
where
    T1: DistanceUnit,
    T2: DistanceUnit,
{
    fn eq(&self, other: &Distance<T2>) -> bool {
        self.nm == other.nm
    }
}

// implement PartialOrd for ordering Lengths with different units
impl<T1, T2> PartialOrd<Distance<T2>> for Distance<T1>
where
    T1: DistanceUnit,
    T2: DistanceUnit,
{
    fn partial_cmp(&self, other: &Distance<T2>) -> Option<Ordering> {
        Some(self.nm.cmp(&other.nm))
    }
}

impl<T> From<f64> for Distance<T>
where
    T: DistanceUnit,
{
    fn from(value: f64) -> Self {
        Distance {
            nm: (value * (T::NANOMETERS_IN_UNIT as f64)).round() as i64,
            unit: PhantomData,
        }
    }
}

impl<T> From<i64> for Distance<T>
where
    T: DistanceUnit,
{
    fn from(value: i64) -> Self {
        Distance {
            nm: value * T::NANOMETERS_IN_UNIT,
            unit: PhantomData,
        }
    }
}

impl<T1, T2> Add<Distance<T2>> for Distance<T1>
where
    T1: DistanceUnit,
    T2: DistanceUnit,
{
    type Output = Distance<T1>;

    fn add(self, other: Distance<T2>) -> Distance<T1> {
        Distance {
            nm: self.nm + other.nm,
            unit: PhantomData,
        }
    }
}

impl<T1, T2> Sub<Distance<T2>> for Distance<T1>
where
    T1: DistanceUnit,
    T2: DistanceUnit,
{
    type Output = Distance<T1>;

    fn sub(self, other: Distance<T2>) -> Distance<T1> {
        Distance {
            nm: self.nm - other.nm,
            unit: PhantomData,
        }
    }
}

impl<T: DistanceUnit> Sum for Distance<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Distance::ZERO, |acc, distance| acc.saturating_add(distance))
    }
}

impl<T: DistanceUnit> Serialize for Distance<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(test)]
macro_rules! meters {
    ($num:expr) => {
        $crate::distance::Distance::<$crate::distance::Meters>::from($num)
    };
}

#[cfg(test)]
macro_rules! kilometers {
    ($num:expr) => {
        $crate::distance::Distance::<$crate::distance::Kilometers>::from($num)
    };
}

#[cfg(test)]
pub(crate) use kilometers;
#[cfg(test)]
#[allow(unused_imports)]
pub(crate) use meters;
