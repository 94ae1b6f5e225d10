use chrono::{DateTime, SubsecRound, Utc};

pub trait DateTimeExt {
    /// Returns the instant halfway between `self` and `other`.
    fn midpoint(&self, other: &Self) -> Self;

    /// Formats as `2024/6/21 12:00:00`, the layout ephemeris tables usually print.
    fn to_ephem_string(&self) -> String;
}

impl DateTimeExt for DateTime<Utc> {
    fn midpoint(&self, other: &Self) -> Self {
        *self + (*other - *self) / 2
    }

    fn to_ephem_string(&self) -> String {
        self.trunc_subsecs(0).format("%Y/%-m/%-d %H:%M:%S").to_string()
    }
}
