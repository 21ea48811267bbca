use phub_kernel::safe_nanoid;

#[test]
fn default_length_is_twelve() {
    assert_eq!(safe_nanoid!().len(), 12);
}

#[test]
fn custom_length_is_respected() {
    assert_eq!(safe_nanoid!(21).len(), 21);
}

#[test]
fn ids_avoid_ambiguous_characters() {
    let id = safe_nanoid!(256);
    for forbidden in ['I', 'O', 'l', '0', '1'] {
        assert!(!id.contains(forbidden), "id contains ambiguous '{forbidden}': {id}");
    }
}
