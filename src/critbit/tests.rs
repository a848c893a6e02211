use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::CritBitTree;

const KEYS: &[&str] = &["", "a", "aa", "b", "bb", "ab", "ba", "aba", "bab"];

fn build_trie(keys: &[&str]) -> CritBitTree<String> {
    let mut trie = CritBitTree::new();
    for key in keys {
        assert!(
            trie.insert(key.as_bytes(), key.to_string()),
            "insert failed for {:?}",
            key
        );
    }
    trie
}

fn dump_trie(trie: &CritBitTree<String>) -> String {
    let mut buf = Vec::new();
    trie.dump(&mut buf).expect("write to a Vec");
    String::from_utf8(buf).expect("dump output is utf-8")
}

#[test]
fn test_insert() {
    let mut trie = build_trie(KEYS);
    let dump = dump_trie(&trie);

    // the shape must not depend on insertion order
    let mut rng = StdRng::seed_from_u64(0);
    let mut keys = KEYS.to_vec();
    for _ in 0..10 {
        keys.shuffle(&mut rng);
        let shuffled = build_trie(&keys);
        assert_eq!(
            dump,
            dump_trie(&shuffled),
            "different tries for key order {:?}",
            keys
        );
    }

    assert!(!trie.insert(b"a", "a".to_string()), "key already stored");
    assert!(trie.insert(b"c", "c".to_string()));
}

#[test]
fn test_upsert() {
    let mut trie = build_trie(KEYS);

    trie.upsert(b"a", "replaced".to_string());
    assert_eq!(trie.get(b"a").map(String::as_str), Some("replaced"));
    assert_eq!(trie.len(), KEYS.len());

    trie.upsert(b"new", "new".to_string());
    assert_eq!(trie.len(), KEYS.len() + 1);
}

#[test]
fn test_contains() {
    let trie = build_trie(KEYS);

    for key in KEYS {
        assert!(trie.contains(key.as_bytes()), "not found: {:?}", key);
    }
    assert!(!trie.contains(b"aaa"), "phantom found");
}

#[test]
fn test_get() {
    let trie = build_trie(KEYS);

    for key in KEYS {
        assert_eq!(
            trie.get(key.as_bytes()).map(String::as_str),
            Some(*key),
            "not found: {:?}",
            key
        );
    }
    assert_eq!(trie.get(b"aaa"), None, "phantom found");
}

#[test]
fn test_remove() {
    let mut trie = build_trie(KEYS);

    for (i, key) in KEYS.iter().enumerate() {
        assert!(trie.contains(key.as_bytes()));
        assert_eq!(trie.remove(key.as_bytes()), Some(key.to_string()));
        assert!(!trie.contains(key.as_bytes()), "still stored: {:?}", key);
        assert_eq!(trie.remove(key.as_bytes()), None);

        // every other key must survive the splice
        for other in &KEYS[i + 1..] {
            assert!(
                trie.contains(other.as_bytes()),
                "lost {:?} while removing {:?}",
                other,
                key
            );
        }
    }
    assert!(trie.is_empty());
}

#[test]
fn test_len() {
    let mut trie = build_trie(KEYS);
    assert_eq!(trie.len(), KEYS.len());

    for (i, key) in KEYS.iter().enumerate() {
        trie.remove(key.as_bytes());
        assert_eq!(trie.len(), KEYS.len() - (i + 1));
    }
}

#[test]
fn test_clear() {
    let mut trie = build_trie(KEYS);
    trie.clear();
    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);
    assert_eq!(trie.get(b"a"), None);
}

#[test]
fn test_longest_prefix() {
    let keys = &["a", "aa", "b", "bb", "ab", "ba", "aba", "bab"];
    let trie = build_trie(keys);

    let expect = &[
        ("a", "a"),
        ("a^", "a"),
        ("aaa", "aa"),
        ("abc", "ab"),
        ("bac", "ba"),
        ("bbb", "bb"),
        ("bc", "b"),
    ];
    for (given, want) in expect {
        let (key, value) = trie
            .longest_prefix(given.as_bytes())
            .unwrap_or_else(|| panic!("no match for {:?}", given));
        assert_eq!(key, want.as_bytes());
        assert_eq!(value, want);
    }

    assert!(trie.longest_prefix(b"").is_none());
    assert!(trie.longest_prefix(b"^").is_none());
    assert!(trie.longest_prefix(b"c").is_none());
}

#[test]
fn test_walk() {
    let trie = build_trie(KEYS);
    let in_order = ["", "a", "aa", "ab", "aba", "b", "ba", "bab", "bb"];

    // seeking the empty key visits everything: it is stored and sorts first
    let mut elems: Vec<String> = Vec::new();
    assert!(trie.walk(Some(b"".as_slice()), |key, value| {
        assert_eq!(key, value.as_bytes());
        elems.push(value.clone());
        true
    }));
    assert_eq!(elems, in_order);

    let mut elems: Vec<String> = Vec::new();
    assert!(trie.walk(Some(b"ab".as_slice()), |_, value| {
        elems.push(value.clone());
        true
    }));
    assert_eq!(elems, ["ab", "aba", "b", "ba", "bab", "bb"]);

    let mut elems: Vec<String> = Vec::new();
    assert!(trie.walk(None, |_, value| {
        elems.push(value.clone());
        true
    }));
    assert_eq!(elems, in_order);

    // aborting visitor
    let mut elems: Vec<String> = Vec::new();
    assert!(!trie.walk(Some(b"a".as_slice()), |key, value| {
        elems.push(value.clone());
        key != b"aa"
    }));
    assert_eq!(elems, ["a", "aa"]);

    // seeds that are not stored visit nothing
    for seed in [b"^".as_slice(), b"aaa", b"c"] {
        assert!(
            !trie.walk(Some(seed), |_, _| panic!("visited on failed seek")),
            "seek {:?} reported success",
            seed
        );
    }
}

#[test]
fn test_empty_tree() {
    let mut trie: CritBitTree<u32> = CritBitTree::new();
    let key: &[u8] = &[0, 1, 2];

    assert!(!trie.contains(key));
    assert_eq!(trie.get(key), None);
    assert_eq!(trie.remove(key), None);
    assert!(trie.longest_prefix(key).is_none());
    assert!(trie.walk(Some(key), |_, _| true));
    assert!(trie.walk(None, |_, _| true));
    assert_eq!(dump_trie(&build_trie(&[])), "");
    trie.clear();
}

#[test]
fn test_dump_key_rendering() {
    let mut trie = CritBitTree::new();
    trie.upsert(b"ab", 1_u32);
    let mut buf = Vec::new();
    trie.dump(&mut buf).expect("write to a Vec");
    let out = String::from_utf8(buf).expect("dump output is utf-8");
    assert_eq!(out, "-- key=[97, 98] (ab)\n");

    // non-printable keys render as hex
    let mut trie = CritBitTree::new();
    trie.upsert(&[0x0a_u8, 0xff], 1_u32);
    let mut buf = Vec::new();
    trie.dump(&mut buf).expect("write to a Vec");
    let out = String::from_utf8(buf).expect("dump output is utf-8");
    assert_eq!(out, "-- key=[10, 255] (0aff)\n");
}
