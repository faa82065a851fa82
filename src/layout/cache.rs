//! Memoized pagination.
//!
//! The designer recomputes its preview on every state change, most of which
//! (colors, fonts, prices) cannot move an item to another page. The cache
//! keeps the last key and its pages and only re-runs the packer when a
//! pagination input actually differs. A newer key simply replaces the old
//! result.

use log::debug;

use super::capacity::{compute_available_height, LayoutConstants, PageGeometry};
use super::paginate::Paginator;
use crate::model::{Item, Page};

/// Every input that can change the partition.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationKey {
    pub items: Vec<Item>,
    pub geometry: PageGeometry,
    pub columns: u32,
    pub row_height: f64,
    pub constants: LayoutConstants,
}

impl PaginationKey {
    fn paginator(&self) -> Paginator {
        let available = compute_available_height(&self.geometry, &self.constants);
        Paginator::new(available, self.row_height, self.columns)
            .with_divider_height(self.constants.divider_height)
    }
}

#[derive(Debug, Default)]
pub struct PaginationCache {
    last: Option<(PaginationKey, Vec<Page>)>,
    recomputations: usize,
}

impl PaginationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pages for `key`, recomputed only if `key` differs from the last one.
    pub fn get_or_compute(&mut self, key: PaginationKey) -> &[Page] {
        let stale = self.last.as_ref().map_or(true, |(last, _)| *last != key);
        if stale {
            self.recomputations += 1;
            debug!("pagination inputs changed; recomputing ({} items)", key.items.len());
            let pages = key.paginator().paginate(&key.items);
            self.last = Some((key, pages));
        }
        match &self.last {
            Some((_, pages)) => pages.as_slice(),
            None => &[],
        }
    }

    /// Number of times the packer actually ran.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Orientation, PaperFormat};

    fn key(items: usize, columns: u32) -> PaginationKey {
        PaginationKey {
            items: (0..items).map(|i| Item::product(i.to_string())).collect(),
            geometry: PageGeometry::new(PaperFormat::A4, Orientation::Portrait),
            columns,
            row_height: 296.0,
            constants: LayoutConstants::default(),
        }
    }

    #[test]
    fn same_key_reuses_pages() {
        let mut cache = PaginationCache::new();
        let first = cache.get_or_compute(key(10, 3)).to_vec();
        let second = cache.get_or_compute(key(10, 3)).to_vec();
        assert_eq!(first, second);
        assert_eq!(cache.recomputations(), 1);
    }

    #[test]
    fn changed_input_recomputes() {
        let mut cache = PaginationCache::new();
        cache.get_or_compute(key(10, 3));
        let pages = cache.get_or_compute(key(10, 2)).len();
        assert_eq!(cache.recomputations(), 2);
        // 1394px holds 4 rows of 296px; 10 items in 2 columns need 5 rows
        assert_eq!(pages, 2);

        cache.clear();
        cache.get_or_compute(key(10, 2));
        assert_eq!(cache.recomputations(), 3);
    }
}
