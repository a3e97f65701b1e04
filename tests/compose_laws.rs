#![cfg(feature = "compose")]
//! Property-based tests for function composition laws.
//!
//! ## Composition Laws
//! - **Definition**: `compose!(f, g, h)(x) == f(g(h(x)))`
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(f, g, h) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!()(x) == x`, `compose!(identity, f) == f == compose!(f, identity)`
//!
//! ## Flow Laws
//! - **Duality**: `flow!(f, g, h)(x) == compose!(h, g, f)(x)`
//!
//! ## Run-time Composition Laws
//! - **Agreement**: `Composition` and `compose_all` agree with `compose!`
//! - **Fallible Agreement**: `try_compose!` agrees with `Result::and_then` chains

use flowright::compose::{Composition, TryComposition, compose_all, identity, try_identity};
use flowright::{compose, flow, try_compose};
use proptest::prelude::*;

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_compose_definition(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let composed = compose!(function1, function2, function3);

        prop_assert_eq!(composed(x), function1(function2(function3(x))));
    }

    #[test]
    fn prop_compose_empty_identity(x in any::<String>()) {
        let composed = compose!();
        prop_assert_eq!(composed(x.clone()), x);
    }

    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);
        prop_assert_eq!(compose!(identity, function)(x), function(x));
    }

    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);
        prop_assert_eq!(compose!(function, identity)(x), function(x));
    }

    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let flat = compose!(function1, function2, function3);
        let nested_right = compose!(function1, compose!(function2, function3));
        let nested_left = compose!(compose!(function1, function2), function3);

        prop_assert_eq!(flat(x), nested_right(x));
        prop_assert_eq!(flat(x), nested_left(x));
    }

    #[test]
    fn prop_compose_associativity_across_types(x in any::<u16>()) {
        let to_text = |n: u16| n.to_string();
        let digit_count = |text: String| text.len();
        let is_long = |count: usize| count > 3;

        let flat = compose!(is_long, digit_count, to_text);
        let nested = compose!(is_long, compose!(digit_count, to_text));

        prop_assert_eq!(flat(x), nested(x));
        prop_assert_eq!(flat(x), x > 999);
    }
}

// =============================================================================
// Flow Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_flow_is_reversed_compose(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(7);
        let function2 = |n: i32| n.wrapping_mul(3);
        let function3 = |n: i32| n.rotate_left(5);

        prop_assert_eq!(
            flow!(function1, function2, function3)(x),
            compose!(function3, function2, function1)(x)
        );
    }
}

// =============================================================================
// Run-time Composition Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_composition_agrees_with_macro(x in any::<i64>()) {
        let function1 = |n: i64| n.wrapping_add(1);
        let function2 = |n: i64| n.wrapping_mul(5);
        let function3 = |n: i64| n.wrapping_neg();

        let composition = Composition::new()
            .then(function1)
            .then(function2)
            .then(function3);

        prop_assert_eq!(composition.apply(x), compose!(function1, function2, function3)(x));
    }

    #[test]
    fn prop_compose_all_folds_right(
        x in any::<i64>(),
        addends in prop::collection::vec(any::<i64>(), 0..16)
    ) {
        let multiply_add = |addend: i64| move |n: i64| n.wrapping_mul(3).wrapping_add(addend);

        let expected = addends
            .iter()
            .rev()
            .fold(x, |accumulator, addend| multiply_add(*addend)(accumulator));

        prop_assert_eq!(compose_all(addends.iter().copied().map(multiply_add))(x), expected);
    }

    #[test]
    fn prop_nested_composition_is_associative(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let inner = Composition::new().then(function2).then(function3).into_fn();
        let nested = Composition::new().then(function1).then(inner);
        let flat = Composition::from_functions([
            Box::new(function1) as Box<dyn Fn(i32) -> i32>,
            Box::new(function2),
            Box::new(function3),
        ]);

        prop_assert_eq!(nested.apply(x), flat.apply(x));
    }

    #[test]
    fn prop_try_compose_agrees_with_and_then(x in any::<u8>()) {
        let double = |n: u8| n.checked_mul(2).ok_or("double");
        let add_ten = |n: u8| n.checked_add(10).ok_or("add_ten");

        let composed = try_compose!(double, add_ten);
        let runtime = TryComposition::new().then(double).then(add_ten);

        prop_assert_eq!(composed(x), add_ten(x).and_then(double));
        prop_assert_eq!(runtime.apply(x), add_ten(x).and_then(double));
    }

    #[test]
    fn prop_try_identity_is_neutral(x in any::<u8>()) {
        let add_ten = |n: u8| n.checked_add(10).ok_or("add_ten");

        prop_assert_eq!(try_compose!(try_identity, add_ten)(x), add_ten(x));
        prop_assert_eq!(try_compose!(add_ten, try_identity)(x), add_ten(x));
    }
}
