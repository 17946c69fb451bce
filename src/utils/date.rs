use chrono::{Local, NaiveDateTime};

/// Current local wall-clock time, without timezone.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
