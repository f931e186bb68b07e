use async_trait::async_trait;

/// Port for the wait between two polls.
///
/// Production code uses a wall-clock interval that never runs out; tests
/// inject tickers that fire a fixed number of times without sleeping.
#[async_trait]
pub trait Ticker: Send {
    /// Wait for the next tick boundary.
    ///
    /// Returns `false` once the ticker is exhausted and no further tick will
    /// ever fire.
    async fn tick(&mut self) -> bool;
}
