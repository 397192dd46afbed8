// src/atom.rs
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::keyword::TokenKind;

/// One canonical interned string.
///
/// Atoms with the same character sequence are the same atom: the owning
/// [`AtomTable`](crate::AtomTable) hands out one allocation per distinct
/// text, so `==` is an identity check, never a character comparison. The
/// handle is cheap to clone; the text is write-once and lives as long as
/// any handle to it.
#[derive(Clone)]
pub struct Atom(Arc<AtomData>);

struct AtomData {
    text: Box<str>,
    // TokenKind discriminant; Identifier until keyword bootstrap re-tags it.
    kind: AtomicU8,
}

impl Atom {
    // Only the table creates atoms; uniqueness lives there.
    pub(crate) fn new(text: &str) -> Self {
        Atom(Arc::new(AtomData {
            text: text.into(),
            kind: AtomicU8::new(TokenKind::Identifier as u8),
        }))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0.text
    }

    /// Current classification. `Identifier` unless bootstrap tagged this
    /// text as a reserved word.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        TokenKind::from_raw(self.0.kind.load(Ordering::Acquire))
    }

    /// Re-tag this atom. The text never changes; only the classification
    /// is mutable. Expected to run during single-threaded keyword
    /// bootstrap, before concurrent lexing begins.
    #[inline]
    pub fn set_kind(&self, kind: TokenKind) {
        self.0.kind.store(kind as u8, Ordering::Release);
    }
}

// Identity, never content: two atoms for distinct texts stay unequal no
// matter what their characters look like.
impl PartialEq for Atom {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Atom {}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl Deref for Atom {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Atom").field(&self.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_is_identity_not_content() {
        // Two raw constructions of the same text: equal content, distinct
        // allocations, so they must not compare equal.
        let a = Atom::new("x");
        let b = Atom::new("x");
        assert_eq!(a.as_str(), b.as_str());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn defaults_to_identifier() {
        let a = Atom::new("foo");
        assert_eq!(a.kind(), TokenKind::Identifier);
        assert!(!a.kind().is_keyword());
    }

    #[test]
    fn kind_is_the_only_mutable_field() {
        let a = Atom::new("if");
        a.set_kind(TokenKind::If);
        assert_eq!(a.kind(), TokenKind::If);
        assert_eq!(a.as_str(), "if");
        // clones share the tag
        let b = a.clone();
        assert_eq!(b.kind(), TokenKind::If);
    }

    #[test]
    fn hash_follows_identity() {
        let a = Atom::new("y");
        let b = Atom::new("y");
        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(a.clone());
        set.insert(b);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }

    #[test]
    fn reads_like_a_str() {
        let a = Atom::new("hello");
        assert_eq!(a.len(), 5);
        assert!(a.starts_with("he"));
        assert_eq!(format!("{a}"), "hello");
        assert_eq!(format!("{a:?}"), "Atom(\"hello\")");
    }
}
