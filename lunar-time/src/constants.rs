/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00).
pub const J2000_JD: f64 = 2451545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2440587.5;

/// Zero point of the Modified Julian Date scale.
pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const SECONDS_TO_DAYS: f64 = 1.0 / 86_400.0;

pub const NANOSECONDS_PER_SECOND_F64: f64 = 1_000_000_000.0;
