use proptest::prelude::*;


pub(crate) fn integer_strategy() -> impl Strategy<Value = String> {
    (0u32..=1000).prop_map(|n| n.to_string())
}

pub(crate) fn decimal_strategy() -> impl Strategy<Value = String> {
    (0u32..=1000, 0u32..=999)
        .prop_map(|(whole, frac)| format!("{whole}.{frac}"))
}

pub(crate) fn exponent_strategy() -> impl Strategy<Value = String> {
    (1u32..=9, 0u32..=6, prop_oneof!["e", "E"])
        .prop_map(|(mantissa, exponent, marker)| format!("{mantissa}{marker}{exponent}"))
}

pub(crate) fn parenthesized_strategy(inner: impl Strategy<Value = String>) -> impl Strategy<Value = String> {
    (inner, any::<bool>())
        .prop_map(|(expr, negated)| {
            if negated {
                format!("-({expr})")
            } else {
                format!("({expr})")
            }
        })
}

pub(crate) fn implicit_product_strategy(
    left: impl Strategy<Value = String>,
    right: impl Strategy<Value = String>
) -> impl Strategy<Value = String> {
    (left, right).prop_map(|(l, r)| format!("{l}({r})"))
}

pub(crate) fn binary_operation_strategy(
    left: impl Strategy<Value = String>,
    right: impl Strategy<Value = String>
) -> impl Strategy<Value = String> {
    (
        left,
        prop_oneof![Just("+"), Just("-"), Just("*"), Just("/"), Just("÷")],
        right
    ).prop_map(|(l, op, r)| format!("{l} {op} {r}"))
}

/// Syntactically valid calculator expressions; values may still be infinite or NaN.
pub(crate) fn arithmetic_expression_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        integer_strategy(),
        decimal_strategy(),
        exponent_strategy(),
        integer_strategy().prop_map(|n| format!("-{n}")),
    ];

    leaf.prop_recursive(4, 32, 10, |inner| {
        prop_oneof![
            parenthesized_strategy(inner.clone()),
            implicit_product_strategy(inner.clone(), inner.clone()),
            binary_operation_strategy(inner.clone(), inner),
        ]
    })
}
