use git_hash::ObjectId;
use git_object::{Blob, Commit, EntryKind, Object, ObjectType, Tree, TreeEntry};

#[test]
fn blob_roundtrip() {
    let obj = Object::Blob(Blob::new(b"hello world\n".to_vec()));
    let serialized = obj.serialize();
    let parsed = Object::parse(&serialized).unwrap();
    assert_eq!(parsed, obj);
}

#[test]
fn empty_blob_roundtrip() {
    let obj = Object::Blob(Blob::new(vec![]));
    let serialized = obj.serialize();
    let parsed = Object::parse(&serialized).unwrap();
    assert_eq!(parsed, obj);
}

#[test]
fn blob_with_null_bytes_roundtrip() {
    let obj = Object::Blob(Blob::new(b"\0\0\0binary\0data\0".to_vec()));
    let serialized = obj.serialize();
    let parsed = Object::parse(&serialized).unwrap();
    assert_eq!(parsed, obj);
}

#[test]
fn tree_roundtrip() {
    let oid1 = ObjectId::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80709").unwrap();
    let oid2 = ObjectId::from_hex("0000000000000000000000000000000000000001").unwrap();

    let obj = Object::Tree(Tree {
        entries: vec![
            TreeEntry {
                kind: EntryKind::Blob,
                name: "README.md".into(),
                oid: oid1,
            },
            TreeEntry {
                kind: EntryKind::Blob,
                name: "run.sh".into(),
                oid: oid2,
            },
            TreeEntry {
                kind: EntryKind::Tree,
                name: "src".into(),
                oid: oid1,
            },
        ],
    });

    let serialized = obj.serialize();
    let parsed = Object::parse(&serialized).unwrap();
    if let Object::Tree(t) = &parsed {
        assert_eq!(t.entries.len(), 3);
    } else {
        panic!("expected Tree");
    }
}

#[test]
fn empty_tree_roundtrip() {
    let obj = Object::Tree(Tree::new());
    let serialized = obj.serialize();
    let parsed = Object::parse(&serialized).unwrap();
    assert_eq!(parsed, obj);
}

#[test]
fn commit_roundtrip() {
    let tree_oid = ObjectId::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80709").unwrap();
    let parent_oid = ObjectId::from_hex("0000000000000000000000000000000000000001").unwrap();

    let obj = Object::Commit(Commit::new(
        tree_oid,
        vec![parent_oid],
        b"Test commit\n\nWith body.\n".to_vec(),
    ));

    let serialized = obj.serialize();
    let parsed = Object::parse(&serialized).unwrap();
    assert_eq!(parsed, obj);
}

#[test]
fn root_commit_roundtrip() {
    let tree_oid = ObjectId::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80709").unwrap();

    let obj = Object::Commit(Commit::new(tree_oid, vec![], b"Initial commit\n".to_vec()));

    let serialized = obj.serialize();
    let parsed = Object::parse(&serialized).unwrap();
    assert_eq!(parsed, obj);
}

#[test]
fn merge_commit_roundtrip() {
    let tree_oid = ObjectId::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80709").unwrap();

    let obj = Object::Commit(Commit::new(
        tree_oid,
        vec![
            ObjectId::from_hex("0000000000000000000000000000000000000001").unwrap(),
            ObjectId::from_hex("0000000000000000000000000000000000000002").unwrap(),
        ],
        b"Merge\n".to_vec(),
    ));

    let serialized = obj.serialize();
    let parsed = Object::parse(&serialized).unwrap();
    assert_eq!(parsed, obj);
}

#[test]
fn object_type_preserved() {
    let blob = Object::Blob(Blob::new(b"x".to_vec()));
    assert_eq!(blob.object_type(), ObjectType::Blob);

    let tree = Object::Tree(Tree::new());
    assert_eq!(tree.object_type(), ObjectType::Tree);
}

#[test]
fn compute_oid_matches_hash_object() {
    let obj = Object::Blob(Blob::new(vec![]));
    let oid = obj.compute_oid();
    assert_eq!(oid, git_hash::hasher::Hasher::hash_object("blob", b""));
}

#[test]
fn compute_oid_hello_world() {
    let obj = Object::Blob(Blob::new(b"hello world".to_vec()));
    let oid = obj.compute_oid();
    assert_eq!(
        oid,
        git_hash::hasher::Hasher::hash_object("blob", b"hello world")
    );
}
