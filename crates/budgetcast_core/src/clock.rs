use jiff::civil::Date;

/// Clock abstracts access to the current date so "today" defaults stay
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Current civil date
    fn today(&self) -> Date;
}

/// Reads the system clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        jiff::Zoned::now().date()
    }
}

/// Always returns the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
