use chrono::{DateTime, Local, NaiveDate, Utc};

/// Source of wall-clock time for the session.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date in the user's timezone.
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
pub mod manual {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::{DateTime, Duration, NaiveDate, Utc};

    use super::Clock;

    /// Test clock advanced by hand. Clones share the same instant.
    #[derive(Clone)]
    pub struct ManualClock(Rc<Cell<DateTime<Utc>>>);

    impl ManualClock {
        pub fn at(now: DateTime<Utc>) -> Self {
            Self(Rc::new(Cell::new(now)))
        }

        pub fn advance(&self, by: Duration) {
            self.0.set(self.0.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            self.0.get()
        }

        fn today(&self) -> NaiveDate {
            self.0.get().date_naive()
        }
    }
}
