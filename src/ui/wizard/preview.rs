// SPDX-License-Identifier: MPL-2.0
//! Decoded preview handles for the records on screen.

use crate::domain::image::{ImageRecord, RecordId};
use iced::widget::image;
use std::collections::HashMap;

/// Image handles keyed by record, so a record is handed to the renderer
/// once rather than on every frame.
#[derive(Debug, Default)]
pub struct PreviewCache {
    handles: HashMap<RecordId, image::Handle>,
}

impl PreviewCache {
    /// Keeps handles for exactly `records`, creating missing ones.
    pub fn sync<'a>(&mut self, records: impl IntoIterator<Item = &'a ImageRecord>) {
        let mut live = HashMap::with_capacity(self.handles.len());
        for record in records {
            let handle = self
                .handles
                .remove(&record.id())
                .unwrap_or_else(|| image::Handle::from_bytes(record.bytes().to_vec()));
            live.insert(record.id(), handle);
        }
        self.handles = live;
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&image::Handle> {
        self.handles.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
