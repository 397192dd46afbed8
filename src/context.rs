// src/context.rs
use crate::table::AtomTable;

/// Session-wide owner of the interning state.
///
/// One context per compilation/execution session, built at startup and torn
/// down with the session; the table it owns is valid for the context's whole
/// lifetime. Deliberately a plain value rather than a global, so tests and
/// embedders can run independent sessions without sharing atoms.
#[derive(Default)]
pub struct Context {
    identifiers: AtomTable,
}

impl Context {
    /// Fresh session with an empty `identifiers` table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The one atom table for identifiers and keywords.
    #[inline]
    pub fn identifiers(&self) -> &AtomTable {
        &self.identifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contexts_do_not_share_atoms() {
        let cx1 = Context::new();
        let cx2 = Context::new();
        let a = cx1.identifiers().intern("name");
        let b = cx2.identifiers().intern("name");
        assert_ne!(a, b);
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn table_reference_is_stable() {
        let cx = Context::new();
        let a = cx.identifiers().intern("stable");
        let b = cx.identifiers().intern("stable");
        assert_eq!(a, b);
        assert_eq!(cx.identifiers().len(), 1);
    }
}
