// src/keyword.rs
use once_cell::sync::Lazy;

use crate::table::AtomTable;

type FastMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Classification carried by every atom. `Identifier` is the default for
/// any interned text; the remaining kinds are the reserved words of the
/// grammar, assigned during keyword bootstrap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Identifier = 0,
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Export,
    Extends,
    False,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    New,
    Null,
    Return,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,
}

/// The reserved-word vocabulary, one entry per keyword kind.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("catch", TokenKind::Catch),
    ("class", TokenKind::Class),
    ("const", TokenKind::Const),
    ("continue", TokenKind::Continue),
    ("debugger", TokenKind::Debugger),
    ("default", TokenKind::Default),
    ("delete", TokenKind::Delete),
    ("do", TokenKind::Do),
    ("else", TokenKind::Else),
    ("export", TokenKind::Export),
    ("extends", TokenKind::Extends),
    ("false", TokenKind::False),
    ("finally", TokenKind::Finally),
    ("for", TokenKind::For),
    ("function", TokenKind::Function),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("in", TokenKind::In),
    ("instanceof", TokenKind::Instanceof),
    ("new", TokenKind::New),
    ("null", TokenKind::Null),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("switch", TokenKind::Switch),
    ("this", TokenKind::This),
    ("throw", TokenKind::Throw),
    ("true", TokenKind::True),
    ("try", TokenKind::Try),
    ("typeof", TokenKind::Typeof),
    ("var", TokenKind::Var),
    ("void", TokenKind::Void),
    ("while", TokenKind::While),
    ("with", TokenKind::With),
];

// Every variant in discriminant order; keep in sync with the enum.
const ALL: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::Break,
    TokenKind::Case,
    TokenKind::Catch,
    TokenKind::Class,
    TokenKind::Const,
    TokenKind::Continue,
    TokenKind::Debugger,
    TokenKind::Default,
    TokenKind::Delete,
    TokenKind::Do,
    TokenKind::Else,
    TokenKind::Export,
    TokenKind::Extends,
    TokenKind::False,
    TokenKind::Finally,
    TokenKind::For,
    TokenKind::Function,
    TokenKind::If,
    TokenKind::Import,
    TokenKind::In,
    TokenKind::Instanceof,
    TokenKind::New,
    TokenKind::Null,
    TokenKind::Return,
    TokenKind::Super,
    TokenKind::Switch,
    TokenKind::This,
    TokenKind::Throw,
    TokenKind::True,
    TokenKind::Try,
    TokenKind::Typeof,
    TokenKind::Var,
    TokenKind::Void,
    TokenKind::While,
    TokenKind::With,
];

impl TokenKind {
    /// Inverse of `kind as u8`, for the atom's atomic tag storage.
    pub(crate) fn from_raw(raw: u8) -> TokenKind {
        ALL[raw as usize]
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        self != TokenKind::Identifier
    }
}

static KEYWORD_MAP: Lazy<FastMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m =
        FastMap::with_capacity_and_hasher(KEYWORDS.len(), ahash::RandomState::default());
    for &(text, kind) in KEYWORDS {
        m.insert(text, kind);
    }
    m
});

/// Kind for `text` if it is a reserved word.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    KEYWORD_MAP.get(text).copied()
}

/// Intern every reserved word into `table` and tag it with its kind.
/// Run once per table, before lexing starts.
pub fn register(table: &AtomTable) {
    for &(text, kind) in KEYWORDS {
        table.intern(text).set_kind(kind);
    }
}
