//! Reusable form widgets
//!
//! Self-contained, stateful primitives composed by the wizard screens. Widgets never
//! read or write configuration and never decide on their own whether they hold focus:
//! the owning screen tells them.

mod button;
mod checkbox;
mod checkbox_group;
mod dropdown;
mod radio_group;
pub mod selection;
mod text_field;

pub use button::Button;
pub use checkbox::Checkbox;
pub use checkbox_group::CheckboxGroup;
pub use dropdown::Dropdown;
pub use radio_group::RadioGroup;
pub use text_field::TextField;

/// Advance a cyclic index over `len` positions
///
/// Returns 0 when `len` is 0.
pub fn cycle_next(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

/// Step a cyclic index backwards over `len` positions
///
/// Returns 0 when `len` is 0.
pub fn cycle_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle_next(2, 3), 0);
        assert_eq!(cycle_prev(0, 3), 2);
        assert_eq!(cycle_next(0, 0), 0);
        assert_eq!(cycle_prev(0, 0), 0);
    }

    #[test]
    fn test_cycle_inverse() {
        for len in 1..6 {
            for index in 0..len {
                assert_eq!(cycle_prev(cycle_next(index, len), len), index);
                assert_eq!(cycle_next(cycle_prev(index, len), len), index);
            }
        }
    }
}
