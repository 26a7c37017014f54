//! Incremental photo gallery with a lightbox.
//!
//! Images are revealed in batches as the visitor scrolls. Loading is split in
//! two steps so the frontend can delay the reveal: [`GalleryFeed::begin_load`]
//! reserves the next batch, [`GalleryFeed::finish_load`] makes it visible.

use log::debug;

use crate::GalleryImage;

pub const FIRST_BATCH_DESKTOP: usize = 18;
pub const FIRST_BATCH_MOBILE: usize = 12;
pub const NEXT_BATCH_DESKTOP: usize = 9;
pub const NEXT_BATCH_MOBILE: usize = 6;

/// Distance from the bottom of the page that triggers the next batch
pub const SCROLL_THRESHOLD_PX: f64 = 500.0;

/// Whether a scroll position is close enough to the end of the page
pub fn near_page_end(viewport_height: f64, scroll_y: f64, page_height: f64) -> bool {
    viewport_height + scroll_y >= page_height - SCROLL_THRESHOLD_PX
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryFeed {
    images: Vec<GalleryImage>,
    shown: usize,
    pending_end: Option<usize>,
    selected: Option<u32>,
}

impl GalleryFeed {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            images,
            ..Self::default()
        }
    }

    pub fn displayed(&self) -> &[GalleryImage] {
        &self.images[..self.shown]
    }

    pub fn total(&self) -> usize {
        self.images.len()
    }

    pub fn has_more(&self) -> bool {
        self.shown < self.images.len()
    }

    pub fn is_loading(&self) -> bool {
        self.pending_end.is_some()
    }

    pub fn batch_size(&self, is_mobile: bool) -> usize {
        match (self.shown == 0, is_mobile) {
            (true, false) => FIRST_BATCH_DESKTOP,
            (true, true) => FIRST_BATCH_MOBILE,
            (false, false) => NEXT_BATCH_DESKTOP,
            (false, true) => NEXT_BATCH_MOBILE,
        }
    }

    /// Reserves the next batch. Returns `false` when a load is already
    /// running or everything is shown.
    pub fn begin_load(&mut self, is_mobile: bool) -> bool {
        if self.is_loading() || !self.has_more() {
            return false;
        }
        let end = (self.shown + self.batch_size(is_mobile)).min(self.images.len());
        debug!("Gallery loading images {}..{}", self.shown, end);
        self.pending_end = Some(end);
        true
    }

    pub fn finish_load(&mut self) {
        if let Some(end) = self.pending_end.take() {
            self.shown = end;
        }
    }

    pub fn selected(&self) -> Option<&GalleryImage> {
        let id = self.selected?;
        self.displayed().iter().find(|image| image.id == id)
    }

    pub fn open(&mut self, id: u32) {
        if self.displayed().iter().any(|image| image.id == id) {
            self.selected = Some(id);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn previous(&mut self) {
        if let Some(index) = self.selected_index() {
            if index > 0 {
                self.selected = Some(self.images[index - 1].id);
            }
        }
    }

    pub fn next(&mut self) {
        if let Some(index) = self.selected_index() {
            if index + 1 < self.shown {
                self.selected = Some(self.images[index + 1].id);
            }
        }
    }

    fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.displayed().iter().position(|image| image.id == id)
    }
}
