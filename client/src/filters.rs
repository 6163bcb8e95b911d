//! Stato dei filtri di ricerca
//!
//! Cambiare un vincolo o la dimensione di pagina riporta sempre alla prima pagina.

use crate::types::{DEFAULT_PAGE_NUMBER, FilterParams};

/// Singolo vincolo modificabile dall'utente
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    Name(String),
    Address(String),
    MinPrice(Option<f64>),
    MaxPrice(Option<f64>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    filters: FilterParams,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterParams {
        &self.filters
    }

    pub fn update(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Name(name) => self.filters.name = name,
            FilterUpdate::Address(address) => self.filters.address = address,
            FilterUpdate::MinPrice(price) => self.filters.min_price = price,
            FilterUpdate::MaxPrice(price) => self.filters.max_price = price,
        }
        self.filters.page_number = DEFAULT_PAGE_NUMBER;
    }

    pub fn set_page_number(&mut self, page_number: u32) {
        self.filters.page_number = page_number;
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.filters.page_size = page_size;
        self.filters.page_number = DEFAULT_PAGE_NUMBER;
    }

    pub fn reset(&mut self) {
        self.filters = FilterParams::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_resets_page() {
        let mut state = FilterState::new();
        state.set_page_number(4);
        state.update(FilterUpdate::Name("Luxury".to_string()));

        assert_eq!(state.filters().name, "Luxury");
        assert_eq!(state.filters().page_number, 1);
    }

    #[test]
    fn test_page_change_keeps_constraints() {
        let mut state = FilterState::new();
        state.update(FilterUpdate::MinPrice(Some(100000.0)));
        state.set_page_number(2);

        assert_eq!(state.filters().min_price, Some(100000.0));
        assert_eq!(state.filters().page_number, 2);
    }

    #[test]
    fn test_page_size_resets_page() {
        let mut state = FilterState::new();
        state.set_page_number(3);
        state.set_page_size(50);

        assert_eq!(state.filters().page_size, 50);
        assert_eq!(state.filters().page_number, 1);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = FilterState::new();
        state.update(FilterUpdate::Address("Park".to_string()));
        state.set_page_size(20);
        state.reset();

        assert_eq!(state, FilterState::default());
    }
}
