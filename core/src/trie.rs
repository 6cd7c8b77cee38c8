//! Prefix index over a fixed lowercase alphabet.
use std::collections::BTreeMap;

/// Error returned when a word cannot be inserted into a [`PrefixIndex`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
    #[error("cannot insert an empty word")]
    EmptyWord,

    #[error("invalid symbol {symbol:?} at position {position} in {word:?}")]
    InvalidSymbol {
        word: String,
        symbol: char,
        position: usize,
    },
}

/// Returns true if `ch` belongs to the index alphabet (`a`..=`z`).
pub fn is_alphabet_symbol(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

/// One position along some inserted word(s).
///
/// Children are kept in an ordered map so a depth-first walk visits them in
/// ascending alphabet order.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_end: bool,
}

impl TrieNode {
    /// Create a new empty node.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            is_end: false,
        }
    }

    /// Whether a complete word ends at this node.
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// The child reached through `symbol`, if any.
    pub fn child(&self, symbol: char) -> Option<&TrieNode> {
        self.children.get(&symbol)
    }

    fn count_nodes(&self) -> usize {
        1 + self.children.values().map(TrieNode::count_nodes).sum::<usize>()
    }
}

/// Prefix index holding a set of lowercase words.
///
/// # Example
/// ```
/// use wordcomplete_core::trie::PrefixIndex;
///
/// let mut index = PrefixIndex::new();
/// for word in ["cat", "car", "cart", "dog"] {
///     index.insert(word).unwrap();
/// }
///
/// assert_eq!(index.all_with_prefix("ca"), vec!["car", "cart", "cat"]);
/// assert_eq!(index.first_completion("ca"), "car");
/// assert_eq!(index.first_completion("z"), "z");
/// assert_eq!(index.complete("z"), None);
/// ```
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    root: TrieNode,
    words: usize,
    nodes: usize,
}

impl PrefixIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            words: 0,
            nodes: 1,
        }
    }

    /// Build an index from a sequence of words, stopping at the first
    /// rejected one.
    pub fn from_words<I, S>(words: I) -> Result<Self, InsertError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for word in words {
            index.insert(word.as_ref())?;
        }
        Ok(index)
    }

    /// Insert a word.
    ///
    /// The whole word is validated before the tree is touched, so a rejected
    /// word leaves no partial path behind. Returns `Ok(true)` if the word was
    /// not present before and `Ok(false)` for a repeat insertion.
    ///
    /// # Example
    /// ```
    /// use wordcomplete_core::trie::{InsertError, PrefixIndex};
    ///
    /// let mut index = PrefixIndex::new();
    /// assert_eq!(index.insert("hello"), Ok(true));
    /// assert_eq!(index.insert("hello"), Ok(false));
    /// assert!(matches!(
    ///     index.insert("don't"),
    ///     Err(InsertError::InvalidSymbol { symbol: '\'', position: 3, .. })
    /// ));
    /// ```
    pub fn insert(&mut self, word: &str) -> Result<bool, InsertError> {
        if word.is_empty() {
            return Err(InsertError::EmptyWord);
        }
        if let Some((position, symbol)) = word
            .chars()
            .enumerate()
            .find(|(_, ch)| !is_alphabet_symbol(*ch))
        {
            return Err(InsertError::InvalidSymbol {
                word: word.to_string(),
                symbol,
                position,
            });
        }

        let mut created = 0;
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_insert_with(|| {
                created += 1;
                TrieNode::new()
            });
        }
        self.nodes += created;

        let is_new = !node.is_end;
        node.is_end = true;
        if is_new {
            self.words += 1;
        }
        Ok(is_new)
    }

    /// Check whether the index contains exactly the given word.
    ///
    /// Returns `true` only if `word` was inserted as a complete word,
    /// not just as a prefix of a longer one.
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(TrieNode::is_end)
    }

    /// Number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Check if the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Recount nodes by walking the tree. Used to check the cached count.
    pub fn count_nodes(&self) -> usize {
        self.root.count_nodes()
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }

    /// Lazily enumerate every word starting with `prefix`, in ascending
    /// lexicographic order.
    ///
    /// An absent prefix (including one with symbols outside the alphabet)
    /// yields nothing.
    pub fn completions(&self, prefix: &str) -> Completions<'_> {
        match self.find_node(prefix) {
            Some(node) => Completions::new(node, prefix),
            None => Completions::empty(),
        }
    }

    /// All words starting with `prefix`, sorted ascending.
    ///
    /// The empty prefix returns every word in the index.
    pub fn all_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.completions(prefix).collect()
    }

    /// At most `limit` words starting with `prefix`, sorted ascending.
    ///
    /// Enumeration stops once `limit` words have been produced.
    pub fn suggestions(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.completions(prefix).take(limit).collect()
    }

    /// The first word starting with `prefix`, or `None` if there is none.
    pub fn complete(&self, prefix: &str) -> Option<String> {
        self.completions(prefix).next()
    }

    /// The first word starting with `prefix`, or `prefix` itself when nothing
    /// matches.
    ///
    /// Callers that must tell "no match" apart from a completion equal to the
    /// input should use [`PrefixIndex::complete`].
    pub fn first_completion(&self, prefix: &str) -> String {
        self.complete(prefix).unwrap_or_else(|| prefix.to_string())
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the words below one node, in ascending order.
///
/// Produced by [`PrefixIndex::completions`]. The walk keeps an explicit stack
/// of child iterators and a single word buffer that grows and shrinks with the
/// current depth.
#[derive(Debug)]
pub struct Completions<'a> {
    start: Option<&'a TrieNode>,
    stack: Vec<std::collections::btree_map::Iter<'a, char, TrieNode>>,
    word: String,
}

impl<'a> Completions<'a> {
    fn new(node: &'a TrieNode, prefix: &str) -> Self {
        Self {
            start: Some(node),
            stack: Vec::new(),
            word: prefix.to_string(),
        }
    }

    fn empty() -> Self {
        Self {
            start: None,
            stack: Vec::new(),
            word: String::new(),
        }
    }
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        // The start node's own word comes before anything below it.
        if let Some(node) = self.start.take() {
            self.stack.push(node.children.iter());
            if node.is_end {
                return Some(self.word.clone());
            }
        }

        while let Some(children) = self.stack.last_mut() {
            match children.next() {
                Some((&ch, child)) => {
                    self.word.push(ch);
                    self.stack.push(child.children.iter());
                    if child.is_end {
                        return Some(self.word.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // The start node has no symbol of its own to remove.
                    if !self.stack.is_empty() {
                        self.word.pop();
                    }
                }
            }
        }
        None
    }
}
