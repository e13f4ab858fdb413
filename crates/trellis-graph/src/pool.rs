//! Interning of commit hashes.
//!
//! Every hash that takes part in a render is interned once into a
//! [`HashPool`]. The resulting [`Hash`] tokens compare by identity, which
//! keeps the per-row membership tests of the layout engine cheap no matter
//! how long the underlying hash strings are.

use std::collections::HashMap;
use std::fmt;

/// Object id of git's empty tree.
///
/// Root commits start their single pipe towards this hash so the layout
/// engine never has to special-case a commit without parents.
pub const EMPTY_TREE_COMMIT_HASH: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

/// An interned commit hash.
///
/// Tokens are only meaningful for the pool that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash(usize);

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Append-only string interner for commit hashes.
#[derive(Debug, Clone)]
pub struct HashPool {
    strings: Vec<Box<str>>,
    lookup: HashMap<Box<str>, Hash>,
}

impl HashPool {
    /// Create a pool holding only the empty-tree sentinel.
    #[must_use]
    pub fn new() -> Self {
        let mut pool = Self {
            strings: Vec::new(),
            lookup: HashMap::new(),
        };
        pool.intern(EMPTY_TREE_COMMIT_HASH);
        pool
    }

    /// Intern a hash, returning the existing token if it was seen before.
    pub fn intern(&mut self, hash: &str) -> Hash {
        if let Some(&token) = self.lookup.get(hash) {
            return token;
        }

        let token = Hash(self.strings.len());
        self.strings.push(hash.into());
        self.lookup.insert(hash.into(), token);
        token
    }

    /// Look up a hash without interning it.
    #[must_use]
    pub fn get(&self, hash: &str) -> Option<Hash> {
        self.lookup.get(hash).copied()
    }

    /// The string a token was interned from.
    ///
    /// Tokens from a different pool resolve to an empty string.
    #[must_use]
    pub fn resolve(&self, hash: Hash) -> &str {
        self.strings.get(hash.0).map_or("", |s| &**s)
    }

    /// Token of the empty-tree sentinel.
    #[must_use]
    pub const fn empty_tree(&self) -> Hash {
        Hash(0)
    }

    /// Number of interned hashes, the sentinel included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always false: the sentinel is interned on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for HashPool {
    fn default() -> Self {
        Self::new()
    }
}
