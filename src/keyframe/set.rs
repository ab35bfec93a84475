use crate::{
    curve::hermite::smooth_tangents,
    foundation::core::KeyId,
    keyframe::key::{EditableKey, Field, Keyframe},
};

/// One slot of a [`KeyframeSet`].
#[derive(Clone, Debug, PartialEq)]
pub struct KeyEntry {
    pub id: KeyId,
    pub key: EditableKey,
}

/// Ordered keyframe collection owning the sort policy and the rebuild dirty flag.
///
/// Times need not be unique or ordered. Mutations only mark the set dirty; sorting (when enabled)
/// happens in [`KeyframeSet::prepare_rebuild`], never at insertion time.
#[derive(Clone, Debug)]
pub struct KeyframeSet {
    entries: Vec<KeyEntry>,
    next_id: u64,
    sort: bool,
    dirty: bool,
}

impl Default for KeyframeSet {
    fn default() -> Self {
        Self::new(true)
    }
}

impl KeyframeSet {
    pub fn new(sort: bool) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            sort,
            dirty: false,
        }
    }

    pub fn from_keys(sort: bool, keys: impl IntoIterator<Item = Keyframe>) -> Self {
        let mut set = Self::new(sort);
        for k in keys {
            set.add(k);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[KeyEntry] {
        &self.entries
    }

    /// Float tuples in current order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &Keyframe> + '_ {
        self.entries.iter().map(|e| e.key.key())
    }

    pub fn ids(&self) -> impl ExactSizeIterator<Item = KeyId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    pub fn get(&self, id: KeyId) -> Option<&KeyEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn last(&self) -> Option<&Keyframe> {
        self.entries.last().map(|e| e.key.key())
    }

    pub fn is_sorted_mode(&self) -> bool {
        self.sort
    }

    pub fn set_sort_mode(&mut self, sort: bool) {
        if self.sort != sort {
            self.sort = sort;
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Append a key. Sorting is deferred to the next rebuild.
    pub fn add(&mut self, key: Keyframe) -> KeyId {
        let id = KeyId(self.next_id);
        self.next_id += 1;
        self.entries.push(KeyEntry {
            id,
            key: EditableKey::new(key),
        });
        self.dirty = true;
        id
    }

    /// Append a flat continuation of the last key, or the zero key when empty.
    pub fn add_derived_from_last(&mut self) -> KeyId {
        let key = self
            .last()
            .map(Keyframe::successor)
            .unwrap_or(Keyframe::ZERO);
        self.add(key)
    }

    /// Remove by identity. Absent ids are a no-op.
    pub fn remove(&mut self, id: KeyId) -> Option<Keyframe> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        let entry = self.entries.remove(pos);
        self.dirty = true;
        Some(*entry.key.key())
    }

    /// Overwrite one text field of a key and reconcile its floats.
    ///
    /// Returns `true` when the text changed (and the set became dirty).
    pub fn edit_field(&mut self, id: KeyId, field: Field, text: &str) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        if !entry.key.set_text(field, text) {
            return false;
        }
        entry.key.update_floats();
        self.dirty = true;
        true
    }

    /// Replace the float tuple of a key in place, refreshing its text.
    pub fn set_key(&mut self, id: KeyId, key: Keyframe) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        entry.key.set_key(key);
        self.dirty = true;
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.dirty = true;
    }

    /// Bulk replace. Every key gets a fresh id.
    pub fn replace(&mut self, keys: impl IntoIterator<Item = Keyframe>) {
        self.entries.clear();
        for k in keys {
            self.add(k);
        }
        self.dirty = true;
    }

    /// Stable ascending sort by time; ties keep insertion order.
    pub fn sort_by_time(&mut self) {
        self.entries
            .sort_by(|a, b| a.key.key().cmp_by_time(Some(b.key.key())));
    }

    /// Apply the sort policy and return keys in evaluator order.
    pub fn prepare_rebuild(&mut self) -> Vec<Keyframe> {
        if self.sort {
            self.sort_by_time();
        }
        self.keys().copied().collect()
    }

    /// Recompute every tangent from `(time, value)` alone and bulk replace the contents.
    #[tracing::instrument(skip(self), fields(keys = self.entries.len()))]
    pub fn smooth_tangents(&mut self) {
        let keys = self.prepare_rebuild();
        self.replace(smooth_tangents(&keys));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/keyframe/set.rs"]
mod tests;
