//! Result-card state.
//!
//! `WeatherCard` owns the loading flag and the most recently fetched payload.
//! Every fetch is tagged with a generation token; a settle only applies when
//! its token still matches the latest generation, so a slow response from a
//! superseded fetch can never overwrite newer state.

use crate::model::WeatherPayload;

/// Identifies one fetch. Obtained from [`WeatherCard::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

#[derive(Debug, Default)]
pub struct WeatherCard {
    generation: u64,
    loading: bool,
    data: Option<WeatherPayload>,
}

/// What the result view should render right now.
#[derive(Debug, PartialEq)]
pub enum CardView<'a> {
    Loading,
    NoData,
    Weather(&'a WeatherPayload),
}

impl WeatherCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch: raises the loading flag and returns the token the
    /// matching [`settle`](Self::settle) must present.
    pub fn begin(&mut self) -> FetchToken {
        self.generation += 1;
        self.loading = true;
        FetchToken(self.generation)
    }

    /// Apply a fetch outcome. `None` means "no data" (logical or transport
    /// failure, already collapsed by the client). Returns `false` and leaves
    /// all state untouched when the token is stale.
    pub fn settle(&mut self, token: FetchToken, outcome: Option<WeatherPayload>) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.data = outcome;
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn view(&self) -> CardView<'_> {
        if self.loading {
            return CardView::Loading;
        }
        match &self.data {
            Some(payload) => CardView::Weather(payload),
            None => CardView::NoData,
        }
    }
}
