use std::collections::{BTreeMap, BTreeSet};

use super::lexicon::{canonical_words, Lexicon};
use crate::error::Result;

/// Prefix tree node
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    next: BTreeMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Adds a word below this node. Returns false if it was already present.
    pub fn add_word(&mut self, word: &str) -> bool {
        let mut node = self;
        for c in word.chars() {
            node = node.next.entry(c).or_default();
        }
        !std::mem::replace(&mut node.terminal, true)
    }

    pub fn next_node(&self, c: char) -> Option<&TrieNode> {
        self.next.get(&c)
    }

    /// Follows `path` one letter at a time
    pub fn walk(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(self, |node, c| node.next_node(c))
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn collect(&self, prefix: &mut String, out: &mut Vec<String>) {
        if self.terminal {
            out.push(prefix.clone());
        }
        for (&c, child) in &self.next {
            prefix.push(c);
            child.collect(prefix, out);
            prefix.pop();
        }
    }
}

/// Prefix tree alternative to the fst backed dictionary. Nodes only exist on
/// the way to some word, so reaching a node means the prefix is valid.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Lexicon for Trie {
    fn from_words(words: BTreeSet<String>) -> Result<Self> {
        let mut trie = Trie::default();
        for word in &canonical_words(words) {
            if trie.root.add_word(word) {
                trie.len += 1;
            }
        }
        Ok(trie)
    }

    fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.root.walk(word).map_or(false, TrieNode::is_terminal)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        self.len > 0 && self.root.walk(prefix).is_some()
    }

    fn words(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect(&mut String::new(), &mut out);
        out
    }

    fn len(&self) -> usize {
        self.len
    }
}
