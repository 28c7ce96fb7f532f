use mapline::io::output::{EntryWriter, PlainWriter};
use mapline::{assign, entries, insert_pair, seed, Registry};
use pretty_assertions::assert_eq;

#[test]
fn seeded_registry_iterates_in_ascending_key_order() {
    let mut registry = Registry::new();
    seed(&mut registry);

    let collected: Vec<_> = entries(&registry).collect();
    assert_eq!(collected, vec![(1, 2), (2, 3)]);
}

#[test]
fn seeded_registry_prints_exact_lines() {
    let mut registry = Registry::new();
    seed(&mut registry);

    let mut out = Vec::new();
    PlainWriter::new(&mut out).write_entries(&registry).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "1 2\n2 3\n");
}

#[test]
fn reassigning_existing_key_overwrites_in_place() {
    let mut registry = Registry::new();
    seed(&mut registry);

    assign(&mut registry, 1, 42);

    let collected: Vec<_> = entries(&registry).collect();
    assert_eq!(collected, vec![(1, 42), (2, 3)]);
}

#[test]
fn pair_insert_on_existing_key_is_a_no_op() {
    let mut registry = Registry::new();
    seed(&mut registry);

    let inserted = insert_pair(&mut registry, 2, 100);

    assert!(!inserted);
    assert_eq!(registry.get(&2), Some(&3));
}

#[test]
fn ascending_order_holds_for_reverse_insertion() {
    let mut registry = Registry::new();
    insert_pair(&mut registry, 9, 1);
    insert_pair(&mut registry, 3, 1);
    insert_pair(&mut registry, 7, 1);

    let keys: Vec<_> = entries(&registry).map(|(key, _)| key).collect();
    assert_eq!(keys, vec![3, 7, 9]);
}
