// src/lib.rs

//! Atom table for a language front end.
//!
//! Every distinct piece of source text interns to exactly one [`Atom`], so
//! identifier equality anywhere downstream is a pointer-identity check, not
//! a character comparison. Each atom also carries its [`TokenKind`], letting
//! a lexer classify reserved words in the same lookup that canonicalizes
//! them.
//!
//! ```
//! use lexatom::{Context, TokenKind, keyword};
//!
//! let cx = Context::new();
//! keyword::register(cx.identifiers());
//!
//! let a = cx.identifiers().intern("foo");
//! let b = cx.identifiers().intern(&"foo".to_string());
//! assert_eq!(a, b); // one atom per text, identity equality
//! assert_eq!(a.kind(), TokenKind::Identifier);
//!
//! assert_eq!(cx.identifiers().intern("if").kind(), TokenKind::If);
//! ```
//!
//! [`AtomTable::intern`] is safe for concurrent use; see the table docs for
//! the uniqueness guarantee under races.

mod atom;
mod context;
pub mod keyword;
mod table;

pub use atom::Atom;
pub use context::Context;
pub use keyword::TokenKind;
pub use table::AtomTable;
