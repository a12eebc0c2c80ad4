use scalarvo_core::{
    DeclaredType, ScalarValue, StoreConfig, ValueObjectError, ValueObjectRef, ValueObjectStore,
};
use scalarvo_refined::{NonEmptyText, PositiveInt, positive_int};
use serde_json::json;

fn store() -> ValueObjectStore {
    scalarvo_observability::init();
    ValueObjectStore::with_config(StoreConfig::from_env())
}

#[test]
fn base_type_scenario() {
    let store = store();
    let base = DeclaredType::base();

    let int_one = store.instance(&base, 1).unwrap();
    let text_one = store.instance(&base, "1").unwrap();
    assert_ne!(int_one, text_one);
    assert_eq!(int_one.value(), &ScalarValue::Int(1));
    assert_eq!(text_one.value(), &ScalarValue::Text("1".into()));

    let int_one_again = store.instance(&base, 1).unwrap();
    assert!(ValueObjectRef::ptr_eq(&int_one, &int_one_again));

    let err = store.instance(&base, json!([])).unwrap_err();
    assert!(matches!(err, ValueObjectError::InvalidValue(_)));
}

#[test]
fn subclass_chain_never_shares_instances() {
    let store = store();
    let example = DeclaredType::base().extend("ValueObjectExample");
    let level2 = example.extend("ValueObjectExampleLevel2");
    let level3 = level2.extend("ValueObjectExampleLevel3");

    let base_one = store.instance(&DeclaredType::base(), 1).unwrap();
    let level2_one = store.instance(&level2, 1).unwrap();
    let level3_one = store.instance(&level3, 1).unwrap();

    assert_ne!(base_one, store.instance(&example, 1).unwrap());
    assert_ne!(base_one, level2_one);
    assert_ne!(base_one, level3_one);
    assert_ne!(level2_one, level3_one);

    // Every level still enforces the base scalar rule.
    for ty in [&example, &level2, &level3] {
        assert!(store.instance(ty, json!({ "a": 1 })).is_err());
    }
}

#[test]
fn refinements_keep_separate_namespaces() {
    let store = store();
    let example = positive_int().extend("PositiveIntExample");

    let positive = PositiveInt::instance(&store, "5").unwrap();
    let nested = PositiveInt::instance_of(&store, &example, 5).unwrap();
    let base = store.instance(&DeclaredType::base(), 5).unwrap();

    assert_eq!(positive.get(), 5);
    assert_ne!(positive, nested);
    assert_ne!(positive.as_ref(), &base);
    assert_eq!(positive.as_ref().declared_type().path(), "ValueObject/PositiveInt");
    assert_eq!(
        nested.as_ref().declared_type().path(),
        "ValueObject/PositiveInt/PositiveIntExample"
    );
}

#[test]
fn handles_survive_further_interning() {
    let store = store();
    let status = NonEmptyText::instance(&store, "pending").unwrap();
    for n in 0..500 {
        store.instance(&DeclaredType::base(), n).unwrap();
    }
    let again = NonEmptyText::instance(&store, " pending ").unwrap();
    assert_eq!(status, again);
    assert_eq!(store.len(), 501);
}

#[test]
fn stores_are_independent() {
    let first = store();
    let second = store();
    let a = first.instance(&DeclaredType::base(), "x").unwrap();
    let b = second.instance(&DeclaredType::base(), "x").unwrap();
    assert_ne!(a, b);
    assert_eq!(a.value(), b.value());
}
