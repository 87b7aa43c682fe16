//! Resources staged by the prepare phase.

/// Transaction-scoped slots, one per change, holding what prepare
/// acquired until apply consumes it or abort releases it.
#[derive(Debug)]
pub struct ResourceBuffer<R> {
    slots: Vec<Option<R>>,
    /// Indices of changes that prepared successfully, in order.
    prepared: Vec<usize>,
}

impl<R> ResourceBuffer<R> {
    /// Create a buffer for `len` changes.
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| None).collect(),
            prepared: Vec::new(),
        }
    }

    /// Record a successful prepare and its resource, if any.
    pub fn stage(&mut self, index: usize, resource: Option<R>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = resource;
            self.prepared.push(index);
        }
    }

    /// Take the resource staged for a change.
    pub fn take(&mut self, index: usize) -> Option<R> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Number of changes that prepared successfully.
    pub fn prepared_count(&self) -> usize {
        self.prepared.len()
    }

    /// Drain the prepared changes, most recent first.
    pub fn drain_reverse(&mut self) -> Vec<(usize, Option<R>)> {
        let prepared = std::mem::take(&mut self.prepared);
        prepared
            .into_iter()
            .rev()
            .map(|i| (i, self.slots.get_mut(i).and_then(Option::take)))
            .collect()
    }
}
