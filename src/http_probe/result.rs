use std::time::Duration;

/// Outcome of a single GET request.
#[derive(Debug)]
pub enum Attempt {
    /// A response with status < 400 arrived after the given elapsed time.
    Success(Duration),
    /// A response with status >= 400 arrived after the given elapsed time.
    Failed(Duration),
    /// No response was received (timeout, refused connection, DNS, TLS, ...).
    Error(reqwest::Error),
}

impl Attempt {
    pub fn from_status(status: u16, elapsed: Duration) -> Self {
        if status < 400 {
            Attempt::Success(elapsed)
        } else {
            Attempt::Failed(elapsed)
        }
    }
}

/// Counters and latency samples for one host.
///
/// Every attempt that produced a response contributes one latency sample,
/// whatever its status code. Transport errors only bump `error_count`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostStats {
    pub success_count: u32,
    pub failed_count: u32,
    pub error_count: u32,
    pub latencies: Vec<Duration>,
}

impl HostStats {
    pub fn record(&mut self, attempt: &Attempt) {
        match attempt {
            Attempt::Success(elapsed) => {
                self.success_count += 1;
                self.latencies.push(*elapsed);
            }
            Attempt::Failed(elapsed) => {
                self.failed_count += 1;
                self.latencies.push(*elapsed);
            }
            Attempt::Error(_) => self.error_count += 1,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.success_count + self.failed_count + self.error_count
    }

    pub fn min(&self) -> Duration {
        self.latencies.iter().min().copied().unwrap_or_default()
    }

    pub fn max(&self) -> Duration {
        self.latencies.iter().max().copied().unwrap_or_default()
    }

    pub fn avg(&self) -> Duration {
        if self.latencies.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.latencies.iter().sum();
        total / self.latencies.len() as u32
    }
}
