//! Tests for container construction, accessors, and conversions.

use error_or::{Error, ErrorOr, ErrorVec};

#[derive(Clone, Debug, PartialEq)]
struct Person {
    name: &'static str,
}

impl Person {
    fn new(name: &'static str) -> Self {
        Self { name }
    }
}

#[test]
fn from_value_is_success() {
    let outcome = ErrorOr::from_value(Person::new("Amichai"));

    assert!(!outcome.is_error());
    assert_eq!(*outcome.value(), Person::new("Amichai"));
    assert!(outcome.errors().is_empty());
    assert_eq!(outcome.try_first_error(), None);
}

#[test]
fn from_error_is_single_element_failure() {
    let outcome: ErrorOr<Person> = ErrorOr::from_error(Error::unauthorized());

    assert!(outcome.is_error());
    assert_eq!(outcome.errors().len(), 1);
    assert_eq!(*outcome.first_error(), Error::unauthorized());
}

#[test]
fn from_errors_preserves_supplied_order() {
    let supplied = vec![
        Error::validation(),
        Error::conflict(),
        Error::not_found(),
    ];
    let outcome: ErrorOr<Person> = ErrorOr::from_errors(supplied.clone());

    assert!(outcome.is_error());
    assert_eq!(outcome.errors(), supplied.as_slice());
    assert_eq!(*outcome.first_error(), supplied[0]);
    assert_eq!(outcome.try_value(), None);
}

#[test]
#[should_panic(expected = "at least one error")]
fn from_errors_rejects_empty_sequence() {
    let _ = ErrorOr::<Person>::from_errors(Vec::new());
}

#[test]
#[should_panic(expected = "at least one error")]
fn from_empty_vec_conversion_rejects_empty_sequence() {
    let _: ErrorOr<Person> = Vec::new().into();
}

#[test]
#[should_panic(expected = "failure container")]
fn value_on_failure_fails_fast() {
    let outcome: ErrorOr<Person> = Error::failure().into();
    let _ = outcome.value();
}

#[test]
#[should_panic(expected = "success container")]
fn first_error_on_success_fails_fast() {
    let outcome = ErrorOr::from_value(Person::new("Amichai"));
    let _ = outcome.first_error();
}

#[test]
fn try_accessors_never_panic() {
    let success = ErrorOr::from_value(1);
    let failure: ErrorOr<i32> = Error::failure().into();

    assert_eq!(success.try_value(), Some(&1));
    assert_eq!(success.try_first_error(), None);
    assert_eq!(failure.try_value(), None);
    assert_eq!(failure.try_first_error(), Some(&Error::failure()));
}

#[test]
fn consuming_extractors() {
    let success = ErrorOr::from_value(Person::new("Amichai"));
    assert_eq!(success.into_value(), Some(Person::new("Amichai")));

    let failure: ErrorOr<Person> = Error::conflict().into();
    let errors = failure.into_errors().expect("failure holds errors");
    assert_eq!(errors.as_slice(), &[Error::conflict()]);

    let success = ErrorOr::from_value(7);
    assert_eq!(success.into_errors(), None);
}

#[test]
fn result_conversions_round_trip() {
    let outcome = ErrorOr::from_result(Ok::<_, Error>(5));
    assert_eq!(outcome.into_result(), Ok(5));

    let outcome = ErrorOr::<i32>::from_result(Err(Error::not_found()));
    let errors = outcome.into_result().expect_err("failure side");
    assert_eq!(errors.as_slice(), &[Error::not_found()]);
}

#[test]
fn from_error_vec_conversion() {
    let mut errors: ErrorVec<Error> = ErrorVec::new();
    errors.push(Error::validation());
    errors.push(Error::forbidden());

    let outcome: ErrorOr<Person> = errors.into();
    assert_eq!(outcome.errors().len(), 2);
}

#[test]
fn containers_compare_structurally() {
    assert_eq!(ErrorOr::from_value(3), ErrorOr::from_value(3));
    assert_ne!(ErrorOr::from_value(3), ErrorOr::from_value(4));

    let a: ErrorOr<i32> = Error::validation().into();
    let b: ErrorOr<i32> = Error::validation().into();
    let c: ErrorOr<i32> = Error::conflict().into();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, ErrorOr::from_value(0));
}

#[test]
fn clone_is_independent_and_equal() {
    let original: ErrorOr<Person> =
        ErrorOr::from_errors([Error::validation(), Error::conflict()]);
    let copy = original.clone();

    assert_eq!(copy, original);
    assert_eq!(copy.errors(), original.errors());
}

#[test]
fn container_is_send_and_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<ErrorOr<String>>();
    assert_sync::<ErrorOr<String>>();
    assert_send::<Error>();
    assert_sync::<Error>();
}
