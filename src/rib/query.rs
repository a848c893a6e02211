use crate::critbit::{CritBitTree, Leaf, Node};

//------------ Masked longest-prefix match -----------------------------------

// A guided backtracking walk, not a plain crit-bit search. Every stored key
// ends in a prefix-length byte, and a route matches the probe when its
// network bits agree with the probe up to that stored length. Descending
// prefers the more-specific side; when a branch comes up empty the walk
// retries the less-specific side with `backtracking` set, so the first leaf
// accepted is the longest match the tree holds for the probe.
//
// The probe key must have the same size as the stored keys of this tree:
// the full address bytes followed by the probe's own prefix-length byte.
pub(crate) fn lookup<'a, V>(
    tree: &'a CritBitTree<V>,
    key: &[u8],
) -> Option<(&'a [u8], &'a V)> {
    let root = tree.root.as_ref()?;
    lookup_in(root, key, false).map(|leaf| (&*leaf.key, &leaf.value))
}

fn lookup_in<'a, V>(
    node: &'a Node<V>,
    key: &[u8],
    backtracking: bool,
) -> Option<&'a Leaf<V>> {
    match node {
        Node::Internal(int) => {
            let d = if int.offset == key.len() - 1 {
                // the branch discriminates inside the prefix-length byte
                // itself; the larger mask is the more specific route
                1
            } else if backtracking {
                0
            } else {
                int.direction(key)
            };

            if let Some(found) = lookup_in(&int.child[d], key, backtracking)
            {
                return Some(found);
            }
            if d == 1 {
                // nothing on the specific side; retry the other one,
                // shortest-mask-first from here on
                return lookup_in(&int.child[0], key, true);
            }
            None
        }
        Node::Leaf(leaf) => leaf_matches(leaf, key),
    }
}

fn leaf_matches<'a, V>(leaf: &'a Leaf<V>, key: &[u8]) -> Option<&'a Leaf<V>> {
    // per-family trees hold keys of one size only
    debug_assert_eq!(leaf.key.len(), key.len());
    if leaf.key.len() != key.len() {
        return None;
    }

    // the stored route must not be more specific than the probe allows
    let mask = leaf.key[leaf.key.len() - 1];
    if mask > key[key.len() - 1] {
        return None;
    }

    // compare network bits up to the stored mask
    let whole = (mask >> 3) as usize;
    if leaf.key[..whole] != key[..whole] {
        return None;
    }
    let rem = mask & 0x07;
    if rem > 0 {
        let shift = 8 - rem;
        if leaf.key[whole] != key[whole] & (0xff >> shift << shift) {
            return None;
        }
    }
    Some(leaf)
}
