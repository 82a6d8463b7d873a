//! Site/home wall-clock pair for crews coordinating across the Pacific.

use chrono::{DateTime, Utc};
use chrono_tz::{America, Asia, Tz};

pub const SITE_TZ: Tz = America::New_York;
pub const HOME_TZ: Tz = Asia::Seoul;

#[derive(Debug, Clone, Copy)]
pub struct WorldClock {
    pub site: DateTime<Tz>,
    pub home: DateTime<Tz>,
}

impl WorldClock {
    pub fn at(utc: DateTime<Utc>) -> Self {
        Self {
            site: utc.with_timezone(&SITE_TZ),
            home: utc.with_timezone(&HOME_TZ),
        }
    }

    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}
