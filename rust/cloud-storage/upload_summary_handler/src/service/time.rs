use chrono::{DateTime, Utc};

/// port for getting the current system time so tests can pin it
pub trait TimeGetter: Send + Sync + 'static {
    /// get the current system time
    fn now(&self) -> DateTime<Utc>;
}

/// The default implementation of time
pub struct DefaultTime;

impl TimeGetter for DefaultTime {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[cfg(test)]
pub struct FixedTime(pub DateTime<Utc>);

#[cfg(test)]
impl TimeGetter for FixedTime {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
