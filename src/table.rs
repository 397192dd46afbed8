// src/table.rs
use ahash::RandomState;
use dashmap::DashMap;

use crate::atom::Atom;

/// Content-keyed atom storage: at most one [`Atom`] per distinct text, for
/// the life of the table.
///
/// The table is append-only (there is no un-intern) and safe to share
/// across threads: `intern` is an atomic lookup-or-insert, so two threads
/// racing on the same fresh text still end up sharing one atom.
pub struct AtomTable {
    map: DashMap<Box<str>, Atom, RandomState>,
}

impl Default for AtomTable {
    fn default() -> Self {
        Self {
            map: DashMap::with_hasher(RandomState::default()),
        }
    }
}

impl AtomTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The atom for `text`, created on first request.
    ///
    /// Called twice with content-equal inputs, from any threads, this
    /// returns the same atom both times. The only failure mode is
    /// allocation failure, which aborts rather than handing back a wrong
    /// atom.
    pub fn intern(&self, text: &str) -> Atom {
        if let Some(atom) = self.map.get(text) {
            return atom.clone();
        }
        // Missed the read; entry() holds the shard lock, so a racing
        // interner either finds our atom or we find theirs.
        self.map
            .entry(text.into())
            .or_insert_with(|| Atom::new(text))
            .clone()
    }

    /// Widen a narrow (Latin-1) buffer to the canonical representation,
    /// then intern it. Input adaptation only; same guarantees as `intern`.
    pub fn intern_latin1(&self, bytes: &[u8]) -> Atom {
        let text: String = bytes.iter().map(|&b| b as char).collect();
        self.intern(&text)
    }

    /// Number of distinct atoms interned so far.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
