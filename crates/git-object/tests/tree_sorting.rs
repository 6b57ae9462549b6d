use git_hash::ObjectId;
use git_object::{EntryKind, Tree, TreeEntry};

fn entry(name: &str, kind: EntryKind) -> TreeEntry {
    TreeEntry {
        kind,
        name: name.into(),
        oid: ObjectId::NULL,
    }
}

fn file(name: &str) -> TreeEntry {
    entry(name, EntryKind::Blob)
}

fn dir(name: &str) -> TreeEntry {
    entry(name, EntryKind::Tree)
}

#[test]
fn sorting_is_plain_lexicographic_by_name() {
    use std::cmp::Ordering;
    // Unlike git, a directory entry does not get an implicit trailing '/'
    // for comparison purposes — only the name bytes are compared.
    assert_eq!(file("foo").cmp(&dir("foo.c")), Ordering::Less);
    assert_eq!(dir("foo").cmp(&file("foo-bar")), Ordering::Greater);
}

#[test]
fn identical_names_are_equal_regardless_of_kind() {
    use std::cmp::Ordering;
    assert_eq!(file("README").cmp(&dir("README")), Ordering::Equal);
}

#[test]
fn alphabetical_order() {
    use std::cmp::Ordering;
    assert_eq!(file("a").cmp(&file("b")), Ordering::Less);
    assert_eq!(file("z").cmp(&file("a")), Ordering::Greater);
}

#[test]
fn prefix_relationship() {
    use std::cmp::Ordering;
    assert_eq!(file("ab").cmp(&file("abc")), Ordering::Less);
}

#[test]
fn tree_serialize_sorts_entries() {
    let oid = ObjectId::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80709").unwrap();

    let tree = Tree {
        entries: vec![
            TreeEntry {
                kind: EntryKind::Blob,
                name: "z.txt".into(),
                oid,
            },
            TreeEntry {
                kind: EntryKind::Tree,
                name: "a-dir".into(),
                oid,
            },
            TreeEntry {
                kind: EntryKind::Blob,
                name: "m.sh".into(),
                oid,
            },
        ],
    };

    let serialized = tree.serialize_content();
    let parsed = Tree::parse(&serialized).unwrap();

    assert_eq!(parsed.entries[0].name, "a-dir");
    assert_eq!(parsed.entries[1].name, "m.sh");
    assert_eq!(parsed.entries[2].name, "z.txt");
}

#[test]
fn mixed_dirs_and_files_sort_by_name_only() {
    let oid = ObjectId::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80709").unwrap();

    let tree = Tree {
        entries: vec![
            TreeEntry {
                kind: EntryKind::Blob,
                name: "foo.c".into(),
                oid,
            },
            TreeEntry {
                kind: EntryKind::Tree,
                name: "foo".into(),
                oid,
            },
            TreeEntry {
                kind: EntryKind::Blob,
                name: "foo-bar".into(),
                oid,
            },
            TreeEntry {
                kind: EntryKind::Blob,
                name: "foo0".into(),
                oid,
            },
        ],
    };

    let serialized = tree.serialize_content();
    let parsed = Tree::parse(&serialized).unwrap();

    // Plain byte order of the names themselves: "foo" < "foo-bar" < "foo.c" < "foo0"
    // ('-' = 0x2D, '.' = 0x2E, '0' = 0x30, and "foo" is a strict prefix of all three).
    assert_eq!(parsed.entries[0].name, "foo");
    assert_eq!(parsed.entries[1].name, "foo-bar");
    assert_eq!(parsed.entries[2].name, "foo.c");
    assert_eq!(parsed.entries[3].name, "foo0");
}
