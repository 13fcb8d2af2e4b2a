use crate::domain::errors::FetchError;
use crate::domain::market_data::Chain;

/// Per-chain fetch lifecycle. Created `Pending` at mount and transitions at
/// most once; later completions for an already-resolved slot are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Pending,
    Loaded(T),
    Failed,
}

impl<T> LoadState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Record a fetch completion. Returns whether the slot transitioned;
    /// a slot that already left `Pending` stays as it is.
    pub fn resolve(&mut self, outcome: Result<T, FetchError>) -> bool {
        if !self.is_pending() {
            return false;
        }

        *self = match outcome {
            Ok(value) => LoadState::Loaded(value),
            Err(_) => LoadState::Failed,
        };
        true
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Pending
    }
}

/// Shared sink for the two independent chain fetches. The slots never block
/// on one another; the only cross-chain coupling is the `is_ready` gate that
/// decides between the charts and the loading placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState<T> {
    pub ethereum: LoadState<T>,
    pub polygon: LoadState<T>,
}

impl<T> DashboardState<T> {
    pub fn new() -> Self {
        Self { ethereum: LoadState::Pending, polygon: LoadState::Pending }
    }

    pub fn slot(&self, chain: Chain) -> &LoadState<T> {
        match chain {
            Chain::Ethereum => &self.ethereum,
            Chain::Polygon => &self.polygon,
        }
    }

    pub fn slot_mut(&mut self, chain: Chain) -> &mut LoadState<T> {
        match chain {
            Chain::Ethereum => &mut self.ethereum,
            Chain::Polygon => &mut self.polygon,
        }
    }

    /// Deliver one chain's completion into its slot.
    pub fn apply(&mut self, chain: Chain, outcome: Result<T, FetchError>) -> bool {
        self.slot_mut(chain).resolve(outcome)
    }

    /// Both charts or neither: ready only once every chain has loaded.
    pub fn is_ready(&self) -> bool {
        Chain::ALL.iter().all(|chain| self.slot(*chain).is_loaded())
    }
}

impl<T> Default for DashboardState<T> {
    fn default() -> Self {
        Self::new()
    }
}
