//! End-to-end scenarios, reproducing spec.md §8 verbatim.

use rule_engine::{MapContext, Rule, Value};

#[test]
fn scenario_1_and_both_true() {
    let rule = Rule::new("1 == 1 and 2 == 2").unwrap();
    assert_eq!(rule.evaluate_null().unwrap(), Value::Bool(true));
}

#[test]
fn scenario_2_and_one_false() {
    let rule = Rule::new("1 == 1 and 2 == 3").unwrap();
    assert_eq!(rule.evaluate_null().unwrap(), Value::Bool(false));
}

#[test]
fn scenario_3_or_with_context() {
    let ctx = MapContext::new()
        .insert("num1", Value::Int(1))
        .insert("num2", Value::Int(2))
        .insert("num3", Value::Int(3))
        .insert("num4", Value::Int(4));
    let rule = Rule::new("num1 > num2 or num3 < num4").unwrap();
    assert!(rule.matches(&ctx).unwrap());
}

#[test]
fn scenario_4_case_sensitive_string_equality() {
    let ctx = MapContext::new().insert("name", Value::Str("hank".into()));
    let rule = Rule::new("name == \"Hank\"").unwrap();
    assert_eq!(rule.evaluate(&ctx).unwrap(), Value::Bool(false));
}

#[test]
fn scenario_5_integer_division() {
    let ctx = MapContext::new().insert("age", Value::Int(1));
    let rule = Rule::new("(age + 3) / 2").unwrap();
    assert_eq!(rule.evaluate(&ctx).unwrap(), Value::Int(2));
}

#[test]
fn scenario_6_mixed_division_is_float() {
    let rule = Rule::new("1 / 2.5").unwrap();
    assert_eq!(rule.evaluate_null().unwrap(), Value::Float(0.4));
}

#[test]
fn scenario_7_leading_dot_is_parse_error() {
    assert!(Rule::new(".identifier == 1").is_err());
}

#[test]
fn scenario_8_undefined_symbol_is_eval_error() {
    let ctx = MapContext::new().insert("name", Value::Str("Hank".into()));
    let rule = Rule::new("1 == age").unwrap();
    assert!(rule.evaluate(&ctx).is_err());
}

#[test]
fn scenario_9_division_by_zero_is_eval_error() {
    let rule = Rule::new("255 / 0").unwrap();
    assert!(rule.evaluate_null().is_err());
}

#[test]
fn boundary_no_integer_truncation() {
    assert_eq!(
        Rule::new("255 + 1").unwrap().evaluate_null().unwrap(),
        Value::Int(256)
    );
}

#[test]
fn boundary_unary_minus_binds_tighter_than_binary_minus() {
    assert_eq!(
        Rule::new("-1 - 1").unwrap().evaluate_null().unwrap(),
        Value::Int(-2)
    );
}

#[test]
fn boundary_integer_and_float_modulo_by_zero_are_errors() {
    assert!(Rule::new("1 % 0").unwrap().evaluate_null().is_err());
    assert!(Rule::new("1.0 % 0.0").unwrap().evaluate_null().is_err());
}

#[test]
fn boundary_int_equals_float() {
    assert_eq!(
        Rule::new("1 == 1.0").unwrap().evaluate_null().unwrap(),
        Value::Bool(true)
    );
    let ctx = MapContext::new().insert("age", Value::Int(1));
    assert_eq!(
        Rule::new("age == 1.0").unwrap().evaluate(&ctx).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn boundary_six_deep_attribute_nesting() {
    use rule_engine::Owned;
    fn leaf(v: Value) -> Owned {
        Owned::Leaf(v)
    }
    fn map(pairs: Vec<(&str, Owned)>) -> Owned {
        Owned::Map(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    let l6 = map(vec![("l6", leaf(Value::Int(1)))]);
    let l5 = map(vec![("l5", l6)]);
    let l4 = map(vec![("l4", l5)]);
    let l3 = map(vec![("l3", l4)]);
    let l2 = map(vec![("l2", l3)]);
    let ctx = MapContext::new().insert("l1", l2);

    let rule = Rule::new("l1.l2.l3.l4.l5.l6 == 1").unwrap();
    assert_eq!(rule.evaluate(&ctx).unwrap(), Value::Bool(true));
}
