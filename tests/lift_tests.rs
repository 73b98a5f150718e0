//! Integration tests for `lift`, `lift_m`, `lift_constructor` and `lift_bimap`.

use liftkit::Error;
use liftkit::control::{Optional, Validation, fail, succeed};
use liftkit::dynamic::{ArgumentsExt, Container, Function, Value, concat, map};
use liftkit::lift::{Construct, lift, lift_bimap, lift_constructor, lift_m};
use rstest::rstest;

// =============================================================================
// Helpers
// =============================================================================

fn add() -> Function {
    Function::new(|arguments| concat(arguments.to_vec()))
}

fn to_upper_case() -> Function {
    Function::new(|arguments| Ok(Value::from(arguments.string(0)?.to_uppercase())))
}

fn split() -> Function {
    Function::new(|arguments| {
        let letters: Vec<char> = arguments.string(0)?.chars().collect();
        Ok(Value::from(letters))
    })
}

#[derive(Debug, PartialEq)]
struct Person {
    first: String,
    last: String,
}

impl Container for Person {
    fn type_name(&self) -> &'static str {
        "Person"
    }
}

impl Construct for Person {
    fn construct(arguments: &[Value]) -> liftkit::Result<Self> {
        Ok(Self {
            first: arguments.string(0)?.to_string(),
            last: arguments.string(1)?.to_string(),
        })
    }
}

fn has_length(name: &'static str, min: usize, value: &str) -> Value {
    if value.chars().count() > min {
        Value::succeed(value)
    } else {
        Value::fail([format!("\"{name}\" must have length > {min}")])
    }
}

// =============================================================================
// lift
// =============================================================================

#[rstest]
fn lift_over_sequences_varies_first_argument_slowest() {
    let result = lift(add()).call(&[Value::from(vec![1, 2]), Value::from(vec![3, 4])]);
    assert_eq!(result, Ok(Value::from(vec![4, 5, 5, 6])));
}

#[rstest]
#[case(&[Value::from("a"), Value::from("b")], Value::from("ab"))]
#[case(&[Value::from(10), Value::from(5)], Value::from(15))]
#[case(&[Value::from("a"), Value::Null], Value::Null)]
#[case(&[Value::Null, Value::from("b")], Value::Null)]
#[case(&[Value::Null, Value::Null], Value::Null)]
fn lift_over_primitives(#[case] arguments: &[Value], #[case] expected: Value) {
    assert_eq!(lift(add()).call(arguments), Ok(expected));
}

#[rstest]
fn lift_over_three_sequences() {
    let result = lift(add()).call(&[
        Value::from(vec!["a", "b"]),
        Value::from(vec!["-"]),
        Value::from(vec!["x", "y"]),
    ]);
    assert_eq!(result, Ok(Value::from(vec!["a-x", "a-y", "b-x", "b-y"])));
}

#[rstest]
fn lift_over_optional_short_circuits() {
    let upper = lift(to_upper_case());
    assert_eq!(upper.call(&[Value::absent()]), Ok(Value::absent()));
    assert_eq!(upper.call(&[Value::present("hello")]), Ok(Value::present("HELLO")));
}

#[rstest]
fn lift_over_unions() {
    let sum = lift(add());
    assert_eq!(sum.call(&[Value::right(1), Value::right(2)]), Ok(Value::right(3)));
    assert_eq!(sum.call(&[Value::right(1), Value::left("no")]), Ok(Value::left("no")));
}

#[rstest]
fn lift_propagates_function_errors() {
    let upper = lift(to_upper_case());
    assert!(matches!(
        upper.call(&[Value::present(1)]),
        Err(Error::ArgumentType { index: 0, .. })
    ));
}

#[rstest]
fn lift_does_not_touch_its_arguments() {
    let original = Value::present("x");
    let doubled = Function::unary(|x| concat(vec![x.clone(), x]));
    let once = map(&doubled, original.clone()).and_then(|value| map(&doubled, value));
    assert_eq!(once, Ok(Value::present("xxxx")));
    assert_eq!(original, Value::present("x"));
}

// =============================================================================
// lift_m
// =============================================================================

#[rstest]
fn lift_m_flattens_sequences() {
    let result = lift_m(split()).call(&[Value::from(vec!["Hello", "World"])]);
    let expected: Vec<Value> = "HelloWorld".chars().map(Value::from).collect();
    assert_eq!(result, Ok(Value::Seq(expected)));
}

#[rstest]
fn lift_m_over_optionals() {
    let checked_add = lift_m(Function::new(|arguments| {
        let total = arguments.number(0)? + arguments.number(1)?;
        Ok(if total > 10.0 { Value::absent() } else { Value::present(total) })
    }));
    assert_eq!(
        checked_add.call(&[Value::present(2), Value::present(3)]),
        Ok(Value::present(5))
    );
    assert_eq!(
        checked_add.call(&[Value::present(8), Value::present(3)]),
        Ok(Value::absent())
    );
}

// =============================================================================
// lift_constructor
// =============================================================================

#[rstest]
fn lift_constructor_accumulates_validation_errors() {
    let person = lift_constructor::<Person>();

    let result = person.call(&[has_length("First", 5, "Remy"), has_length("Last", 2, "D")]);
    assert_eq!(
        result,
        Ok(Value::fail([
            "\"First\" must have length > 5",
            "\"Last\" must have length > 2",
        ]))
    );
}

#[rstest]
#[case(Value::succeed("Remy"), Value::fail(["B"]), Value::fail(["B"]))]
#[case(Value::fail(["A"]), Value::succeed("Doe"), Value::fail(["A"]))]
#[case(Value::fail(["A"]), Value::fail(["B"]), Value::fail(["A", "B"]))]
fn lift_constructor_failure_table(
    #[case] first: Value,
    #[case] last: Value,
    #[case] expected: Value,
) {
    assert_eq!(lift_constructor::<Person>().call(&[first, last]), Ok(expected));
}

#[rstest]
fn lift_constructor_builds_the_instance() {
    let result = lift_constructor::<Person>()
        .call(&[Value::succeed("Remy"), Value::succeed("Doe")])
        .unwrap();
    let Value::Validation(validation) = result else {
        panic!("expected a validation, got {result:?}");
    };
    let person = validation.value().and_then(Value::downcast_ref::<Person>);
    assert_eq!(
        person,
        Some(&Person {
            first: "Remy".to_string(),
            last: "Doe".to_string(),
        })
    );
}

#[rstest]
fn lift_constructor_over_plain_values() {
    let result = lift_constructor::<Person>()
        .call(&[Value::from("Ada"), Value::from("Lovelace")])
        .unwrap();
    assert!(result.downcast_ref::<Person>().is_some());
    assert!(result.downcast_ref::<Person>().is_some_and(|person| person.last == "Lovelace"));
}

// =============================================================================
// lift_bimap
// =============================================================================

#[rstest]
fn lift_bimap_reports_validation_errors() {
    let on_error = Function::new(|arguments| {
        let count = arguments.value(0).as_seq().map_or(0, <[Value]>::len);
        Ok(Value::from(format!("{count} errors")))
    });
    let on_success = Function::unary(|_| Ok(Value::from("valid")));
    let report = lift_bimap(on_error, on_success);

    assert_eq!(report.call(&[Value::fail(["a", "b"])]), Ok(Value::from("2 errors")));
    assert_eq!(report.call(&[Value::succeed(1)]), Ok(Value::from("valid")));
    assert_eq!(report.call(&[Value::Null]), Ok(Value::from("0 errors")));
}

// =============================================================================
// Typed counterparts
// =============================================================================

#[rstest]
fn typed_validation_zip_matches_dynamic_lift() {
    let first: Validation<&str, &str> = fail(["A"]);
    let last: Validation<&str, &str> = fail(["B"]);
    assert_eq!(first.zip(last).errors(), ["A", "B"]);

    let ok: Validation<&str, &str> = succeed("Remy");
    assert_eq!(ok.zip(fail::<&str, &str>(["B"])).errors(), ["B"]);
}

#[rstest]
fn typed_optional_chain_short_circuits() {
    let present = Optional::present(2).chain(|n| Optional::present(n * 10));
    let absent = Optional::<i32>::absent().chain(|n| Optional::present(n * 10));
    assert_eq!(present, Optional::present(20));
    assert_eq!(absent, Optional::absent());
}
