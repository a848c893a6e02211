use std::io;

use super::tree::{CritBitTree, Node};

impl<V> CritBitTree<V> {
    /// Visit stored keys in lexicographic order, starting at `start` if one
    /// is given.
    ///
    /// `None` walks every key. `Some(key)` seeks the stored key equal to
    /// `key` (an empty slice seeks the empty key), visits it, and continues
    /// in order from there; if no stored key equals the seek key the walk
    /// visits nothing and returns false. Returns true when all applicable
    /// leaves were visited, false when the visitor aborted by returning
    /// false or the seek failed.
    ///
    /// The visitor must not mutate the tree.
    pub fn walk<F>(&self, start: Option<&[u8]>, mut visit: F) -> bool
    where
        F: FnMut(&[u8], &V) -> bool,
    {
        let Some(root) = self.root.as_ref() else {
            return true;
        };
        let mut seeking = start.is_some();
        Self::walk_in(root, start.unwrap_or_default(), &mut seeking, &mut visit)
    }

    fn walk_in<F>(
        node: &Node<V>,
        key: &[u8],
        seeking: &mut bool,
        visit: &mut F,
    ) -> bool
    where
        F: FnMut(&[u8], &V) -> bool,
    {
        match node {
            Node::Internal(int) => {
                // while seeking, follow the seek key; afterwards always
                // take the smaller side first
                let d = if *seeking { int.direction(key) } else { 0 };
                if !Self::walk_in(&int.child[d], key, seeking, visit) {
                    return false;
                }
                if !*seeking && d == 0 {
                    return Self::walk_in(&int.child[1], key, seeking, visit);
                }
                true
            }
            Node::Leaf(leaf) => {
                if *seeking {
                    if *leaf.key == *key {
                        *seeking = false;
                    } else {
                        // seek key is not stored
                        return false;
                    }
                }
                visit(&leaf.key, &leaf.value)
            }
        }
    }

    /// The longest stored key that `query` begins with, byte for byte.
    pub fn longest_prefix(&self, query: &[u8]) -> Option<(&[u8], &V)> {
        let root = self.root.as_ref()?;
        Self::longest_prefix_in(root, query)
    }

    // Descend on the query's direction; if the chosen subtree holds no
    // match and the direction was right, the shorter keys of a containment
    // split live on the left, so try those too.
    fn longest_prefix_in<'a>(
        node: &'a Node<V>,
        query: &[u8],
    ) -> Option<(&'a [u8], &'a V)> {
        match node {
            Node::Internal(int) => {
                let d = int.direction(query);
                if let Some(found) =
                    Self::longest_prefix_in(&int.child[d], query)
                {
                    return Some(found);
                }
                if d == 1 {
                    return Self::longest_prefix_in(&int.child[0], query);
                }
                None
            }
            Node::Leaf(leaf) => {
                if query.starts_with(&leaf.key) {
                    Some((&*leaf.key, &leaf.value))
                } else {
                    None
                }
            }
        }
    }

    /// Write an indented rendering of the tree. For debugging.
    pub fn dump<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        let Some(root) = self.root.as_ref() else {
            return Ok(());
        };
        Self::dump_in(w, root, true, "")
    }

    fn dump_in<W: io::Write>(
        w: &mut W,
        node: &Node<V>,
        first: bool,
        prefix: &str,
    ) -> io::Result<()> {
        let own = if first {
            prefix.to_string()
        } else {
            format!("{}`", &prefix[..prefix.len() - 1])
        };

        match node {
            Node::Internal(int) => {
                writeln!(
                    w,
                    "{}-- off={}, bit={:08b}({:02x}), cont={}",
                    own, int.offset, int.bit, int.bit, int.cont
                )?;
                Self::dump_in(w, &int.child[0], true, &format!("{} |", prefix))?;
                Self::dump_in(w, &int.child[1], false, &format!("{}  ", prefix))
            }
            Node::Leaf(leaf) => writeln!(
                w,
                "{}-- key={:?} ({})",
                own,
                leaf.key,
                printable_key(&leaf.key)
            ),
        }
    }
}

// Keys render as text when every byte is printable, hex otherwise.
fn printable_key(key: &[u8]) -> String {
    if key.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        String::from_utf8_lossy(key).into_owned()
    } else {
        key.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
