use time::OffsetDateTime;

#[cfg(not(test))]
pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

#[cfg(test)]
pub fn now_utc() -> OffsetDateTime {
    match current_time() {
        0 => OffsetDateTime::now_utc(),
        ts => OffsetDateTime::from_unix_timestamp(ts as i64).unwrap(),
    }
}


#[cfg(test)]
pub use mocked_time::*;
