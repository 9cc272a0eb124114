use std::time::{Duration, Instant};

/// A value together with the wall-clock time spent to compute it.
#[derive(Clone, Debug, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Run a computation and measure its duration, the result is passed through unchanged
    pub fn measure(f: impl FnOnce() -> T) -> Self {
        let start = Instant::now();
        let value = f();
        Self {
            value,
            elapsed: start.elapsed(),
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }
}

impl<T, E> Timed<Result<T, E>> {
    /// Keep the measure only for successful computations
    pub fn transpose(self) -> Result<Timed<T>, E> {
        let elapsed = self.elapsed;
        self.value.map(|value| Timed { value, elapsed })
    }
}
