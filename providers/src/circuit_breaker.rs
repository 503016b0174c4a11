use crate::domain::{POI, SearchQuery};
use crate::provider::{Provider, ProviderError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::time::{Duration, Instant};

const FAILURE_THRESHOLD: u32 = 3;
const OPEN_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Closed,
    Open,
    HalfOpen,
}

struct Breaker {
    state: State,
    failures: u32,
    last_failure: Option<Instant>,
}

/// A circuit breaker wrapping a Provider. All state is guarded by a single mutex;
/// `allow`/`on_success`/`on_failure` are the only mutating operations. HalfOpen does
/// not limit concurrency: several probes may run at once and the last one to finish
/// decides the next state.
pub struct CircuitBreaker<P> {
    inner: P,
    state: Mutex<Breaker>,
}

impl<P> CircuitBreaker<P> {
    pub fn new(inner: P) -> Self {
        CircuitBreaker {
            inner,
            state: Mutex::new(Breaker {
                state: State::Closed,
                failures: 0,
                last_failure: None,
            }),
        }
    }

    fn allow(&self) -> bool {
        let mut guard = self.state.lock();
        match guard.state {
            State::Closed => true,
            State::HalfOpen => true,
            State::Open => {
                let elapsed = guard
                    .last_failure
                    .map(|t| t.elapsed())
                    .unwrap_or(Duration::MAX);
                if elapsed > OPEN_TIMEOUT {
                    guard.state = State::HalfOpen;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn on_success(&self) {
        let mut guard = self.state.lock();
        guard.failures = 0;
        guard.state = State::Closed;
    }

    fn on_failure(&self) {
        let mut guard = self.state.lock();
        guard.failures += 1;
        guard.last_failure = Some(Instant::now());
        if guard.state == State::HalfOpen || guard.failures >= FAILURE_THRESHOLD {
            guard.state = State::Open;
        }
    }
}

#[async_trait]
impl<P> Provider for CircuitBreaker<P>
where
    P: Provider,
{
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<POI>, ProviderError> {
        if !self.allow() {
            return Err(ProviderError::CircuitOpen {
                provider: self.inner.name().to_string(),
            });
        }

        match self.inner.search(query).await {
            Ok(result) => {
                self.on_success();
                Ok(result)
            }
            Err(err) => {
                self.on_failure();
                Err(err)
            }
        }
    }
}
