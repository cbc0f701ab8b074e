use singleton_di::{DiError, Resolver, ServiceCollection};
use std::sync::Arc;

#[test]
fn test_concrete_singleton() {
    let mut sc = ServiceCollection::new();
    sc.add_singleton(42usize);
    sc.add_singleton("hello".to_string());

    let sp = sc.build();

    let num1 = sp.get_required::<usize>();
    let num2 = sp.get_required::<usize>();
    let str1 = sp.get_required::<String>();
    let str2 = sp.get_required::<String>();

    assert_eq!(*num1, 42);
    assert_eq!(*str1, "hello");
    assert!(Arc::ptr_eq(&num1, &num2)); // Same instance
    assert!(Arc::ptr_eq(&str1, &str2)); // Same instance
}

#[test]
fn test_arc_binding_keeps_caller_allocation() {
    let shared = Arc::new(String::from("shared"));

    let mut sc = ServiceCollection::new();
    sc.add_singleton_arc(shared.clone());
    let sp = sc.build();

    assert!(Arc::ptr_eq(&shared, &sp.get_required::<String>()));
}

#[test]
fn test_not_found_error() {
    struct UnregisteredType;

    let sp = ServiceCollection::new().build();

    match sp.get::<UnregisteredType>() {
        Err(DiError::NotFound(name)) => assert!(name.ends_with("UnregisteredType")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("resolved an unregistered type"),
    }
}

#[test]
fn test_replace_semantics() {
    let mut sc = ServiceCollection::new();

    sc.add_singleton(1usize);
    sc.add_singleton(2usize);
    assert_eq!(sc.len(), 1);

    let sp = sc.build();
    assert_eq!(*sp.get_required::<usize>(), 2);
}

#[test]
fn test_try_add_does_not_replace() {
    trait Label: Send + Sync {
        fn label(&self) -> &'static str;
    }
    struct First;
    impl Label for First {
        fn label(&self) -> &'static str {
            "first"
        }
    }
    struct Second;
    impl Label for Second {
        fn label(&self) -> &'static str {
            "second"
        }
    }

    let mut sc = ServiceCollection::new();
    assert!(!sc.contains_trait::<dyn Label>());
    assert!(sc.try_add_singleton_trait::<dyn Label>(Arc::new(First)));
    assert!(!sc.try_add_singleton_trait::<dyn Label>(Arc::new(Second)));
    assert!(sc.contains_trait::<dyn Label>());

    let sp = sc.build();
    assert_eq!(sp.get_required_trait::<dyn Label>().label(), "first");
}

#[test]
fn test_type_and_trait_bindings_are_independent() {
    trait Answer: Send + Sync {
        fn value(&self) -> u32;
    }
    impl Answer for u32 {
        fn value(&self) -> u32 {
            *self
        }
    }

    let mut sc = ServiceCollection::new();
    sc.add_singleton(1u32);
    sc.add_singleton_trait::<dyn Answer>(Arc::new(2u32));
    assert_eq!(sc.len(), 2);

    let sp = sc.build();
    assert_eq!(*sp.get_required::<u32>(), 1);
    assert_eq!(sp.get_required_trait::<dyn Answer>().value(), 2);
}

#[test]
fn test_empty_collection() {
    let sc = ServiceCollection::default();
    assert!(sc.is_empty());
    assert!(!sc.contains(&singleton_di::key_of_type::<u8>()));
}
