//! Envelope di paginazione per le risposte a lista

use crate::repositories::PageRequest;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedDTO<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl<T> PaginatedDTO<T> {
    /// Costruisce l'envelope dalla pagina *richiesta*, anche se oltre l'ultima
    pub fn new(items: Vec<T>, total_count: u64, page: PageRequest) -> Self {
        let total_pages = if page.page_size == 0 {
            0
        } else {
            total_count.div_ceil(u64::from(page.page_size))
        };

        Self {
            items,
            total_count,
            page_number: page.page_number,
            page_size: page.page_size,
            total_pages,
            has_previous_page: page.page_number > 1,
            has_next_page: u64::from(page.page_number) < total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedDTO<U> {
        PaginatedDTO {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
        }
    }
}
