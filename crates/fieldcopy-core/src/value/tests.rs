use super::*;
use crate::traits::{FromValue, ToValue};

#[derive(Debug)]
struct Shared(u32);

#[test]
fn options_map_to_null() {
    let none: Option<String> = None;

    assert_eq!(none.to_value(), Value::Null);
    assert_eq!(Some("x".to_string()).to_value(), Value::from("x"));
    assert_eq!(Option::<u8>::from_value(&Value::Null), Some(None));
    assert_eq!(Option::<u8>::from_value(&Value::Uint(3)), Some(Some(3)));
}

#[test]
fn null_does_not_fit_a_required_field() {
    assert_eq!(String::from_value(&Value::Null), None);
    assert_eq!(bool::from_value(&Value::Null), None);
}

#[test]
fn integers_cross_signedness_when_in_range() {
    assert_eq!(5_u8.to_value(), Value::Uint(5));
    assert_eq!((-5_i32).to_value(), Value::Int(-5));

    assert_eq!(i32::from_value(&Value::Uint(78)), Some(78));
    assert_eq!(u16::from_value(&Value::Int(78)), Some(78));
    assert_eq!(u8::from_value(&Value::Int(-1)), None);
    assert_eq!(u8::from_value(&Value::Uint(256)), None);
    assert_eq!(i64::from_value(&Value::Uint(u64::MAX)), None);
}

#[test]
fn pointer_sized_integers_convert() {
    assert_eq!(42_usize.to_value(), Value::Uint(42));
    assert_eq!((-42_isize).to_value(), Value::Int(-42));

    assert_eq!(usize::from_value(&Value::Uint(42)), Some(42));
    assert_eq!(usize::from_value(&Value::Int(42)), Some(42));
    assert_eq!(isize::from_value(&Value::Int(-42)), Some(-42));
    assert_eq!(isize::from_value(&Value::Uint(7)), Some(7));
    assert_eq!(usize::from_value(&Value::Int(-1)), None);
    assert_eq!(usize::from_value(&Value::Bool(true)), None);
    assert_eq!(Option::<usize>::from_value(&Value::Null), Some(None));
}

#[test]
fn kinds_never_coerce() {
    assert_eq!(i32::from_value(&Value::Bool(true)), None);
    assert_eq!(bool::from_value(&Value::Int(1)), None);
    assert_eq!(String::from_value(&Value::Int(1)), None);
    assert_eq!(f64::from_value(&Value::Int(1)), None);
}

#[test]
fn chars_are_single_character_text() {
    assert_eq!('x'.to_value(), Value::from("x"));
    assert_eq!(char::from_value(&Value::from("y")), Some('y'));
    assert_eq!(char::from_value(&Value::from("yz")), None);
    assert_eq!(char::from_value(&Value::from("")), None);
}

#[test]
fn lists_convert_element_wise() {
    let value = vec![1_u32, 2, 3].to_value();

    assert_eq!(
        value,
        Value::List(vec![Value::Uint(1), Value::Uint(2), Value::Uint(3)])
    );
    assert_eq!(Vec::<u64>::from_value(&value), Some(vec![1, 2, 3]));

    let mixed = Value::List(vec![Value::Uint(1), Value::from("two")]);
    assert_eq!(Vec::<u64>::from_value(&mixed), None);
}

#[test]
fn objects_keep_identity() {
    let shared = Arc::new(Shared(7));
    let value = shared.to_value();

    let back = Arc::<Shared>::from_value(&value).expect("same type");
    assert!(Arc::ptr_eq(&shared, &back));
    assert_eq!(back.0, 7);

    let object = value.as_object().expect("object");
    assert!(object.is::<Shared>());
    assert!(object.type_name().ends_with("Shared"));
    assert_eq!(Arc::<String>::from_value(&value), None);
}

#[test]
fn object_equality_is_pointer_identity() {
    let a = Value::object(Arc::new(Shared(1)));
    let b = Value::object(Arc::new(Shared(1)));

    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

#[test]
fn borrowed_forms_convert_like_owned() {
    let text = String::from("abc");
    let borrowed: &str = &text;

    assert_eq!(borrowed.to_value(), text.to_value());
    assert_eq!(Box::new(4_i8).to_value(), Value::Int(4));
    assert_eq!(Box::<i8>::from_value(&Value::Int(4)), Some(Box::new(4)));
}

#[test]
fn kind_names() {
    assert_eq!(Value::Null.kind_name(), "null");
    assert_eq!(Value::Float(1.5).kind_name(), "float");
    assert_eq!(Value::List(Vec::new()).kind_name(), "list");
    assert!(Value::Null.is_null());
    assert!(!Value::Bool(false).is_null());
}
