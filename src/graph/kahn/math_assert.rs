//! Debug-only invariant assertions for the scheduler.
//!
//! Release builds compile these checks away entirely.

/// Debug-asserts an ordering invariant with a message.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
#[inline(always)]
pub(crate) fn math_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Ordering invariant violated: {}", message);
}

/// Checks that `order` is a permutation of the keys and respects every retained
/// prerequisite edge.
#[cfg(debug_assertions)]
pub(crate) fn validate_order(
    order: &[usize],
    prerequisites: &[Vec<usize>],
    member: &[bool],
    key_count: usize,
) {
    math_assert_msg(order.len() == key_count, "order must contain every key");

    let mut position = vec![usize::MAX; member.len()];
    for (pos, &v) in order.iter().enumerate() {
        math_assert_msg(member[v], "only keys may be emitted");
        math_assert_msg(position[v] == usize::MAX, "a key was emitted twice");
        position[v] = pos;
    }

    for &v in order {
        for &p in &prerequisites[v] {
            if member[p] {
                math_assert_msg(
                    position[p] < position[v],
                    "a prerequisite must precede its dependent",
                );
            }
        }
    }
}
