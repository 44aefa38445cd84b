//! Focus targets and the transition rings.
//!
//! Focus moves over a closed set: the item list and up to three buttons.
//! Two independent rings exist, both pure functions of the current target
//! and whether a Back button is configured:
//!
//! - the **full ring** walks list and buttons alike (`List → Select → Back
//!   → Exit → List`). It is wired to the cycle control, which the
//!   controller keeps as a reserved no-op until screens hold more than one
//!   element, so today only tests walk it.
//! - the **button ring** is what Left/Right drive: it enters the buttons
//!   from the list and then cycles `Select → Back → Exit` (and mirrored).
//!
//! Up/Down never consult either ring; the controller forces focus back to
//! the list for those.

/// One focusable element of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// The item list.
    #[default]
    List,
    /// The Select button.
    Select,
    /// The Back button (present only when a back action is configured).
    Back,
    /// The Exit button.
    Exit,
}

impl FocusTarget {
    /// Whether this target is one of the buttons.
    pub const fn is_button(&self) -> bool {
        !matches!(self, Self::List)
    }
}

/// Full ring, forward: list and buttons in one cycle.
pub fn cycle_next(current: FocusTarget, has_back: bool) -> FocusTarget {
    use FocusTarget::*;
    match current {
        List => Select,
        Select if has_back => Back,
        Select => Exit,
        Back => Exit,
        Exit => List,
    }
}

/// Full ring, backward: exact mirror of [`cycle_next`].
pub fn cycle_prev(current: FocusTarget, has_back: bool) -> FocusTarget {
    use FocusTarget::*;
    match current {
        List => Exit,
        Exit if has_back => Back,
        Exit => Select,
        Back => Select,
        Select => List,
    }
}

/// Button ring, "next": enters at Select, then walks the buttons.
pub fn button_next(current: FocusTarget, has_back: bool) -> FocusTarget {
    use FocusTarget::*;
    match current {
        List | Exit => Select,
        Select if has_back => Back,
        Select => Exit,
        Back => Exit,
    }
}

/// Button ring, "previous": exact mirror of [`button_next`].
pub fn button_prev(current: FocusTarget, has_back: bool) -> FocusTarget {
    use FocusTarget::*;
    match current {
        List | Select => Exit,
        Exit if has_back => Back,
        Exit => Select,
        Back => Select,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use FocusTarget::*;

    #[test]
    fn full_ring_closes_with_back() {
        let mut focus = List;
        for _ in 0..4 {
            focus = cycle_next(focus, true);
        }
        assert_eq!(focus, List);
    }

    #[test]
    fn full_ring_skips_back_when_absent() {
        assert_eq!(cycle_next(Select, false), Exit);
        assert_eq!(cycle_prev(Exit, false), Select);

        let mut focus = List;
        for _ in 0..3 {
            focus = cycle_next(focus, false);
        }
        assert_eq!(focus, List);
    }

    #[test]
    fn full_ring_mirror() {
        for has_back in [false, true] {
            for start in [List, Select, Back, Exit] {
                if start == Back && !has_back {
                    continue;
                }
                let there = cycle_next(start, has_back);
                assert_eq!(cycle_prev(there, has_back), start);
            }
        }
    }

    #[test]
    fn button_ring_enters_at_select() {
        assert_eq!(button_next(List, true), Select);
        assert_eq!(button_next(List, false), Select);
    }

    #[test]
    fn button_ring_cycles_buttons() {
        // Three buttons: Select -> Back -> Exit -> Select.
        assert_eq!(button_next(Select, true), Back);
        assert_eq!(button_next(Back, true), Exit);
        assert_eq!(button_next(Exit, true), Select);

        // Two buttons: Select -> Exit -> Select.
        assert_eq!(button_next(Select, false), Exit);
        assert_eq!(button_next(Exit, false), Select);
    }

    #[test]
    fn button_ring_previous_walk() {
        // From Exit, previous lands on Back, then Select.
        let step1 = button_prev(Exit, true);
        assert_eq!(step1, Back);
        let step2 = button_prev(step1, true);
        assert_eq!(step2, Select);
    }

    #[test]
    fn button_ring_previous_enters_at_exit() {
        assert_eq!(button_prev(List, true), Exit);
        assert_eq!(button_prev(List, false), Exit);
        assert_eq!(button_prev(Exit, false), Select);
    }

    #[test]
    fn button_ring_closure() {
        for has_back in [false, true] {
            let n = if has_back { 3 } else { 2 };
            let mut focus = Select;
            for _ in 0..n {
                focus = button_next(focus, has_back);
            }
            assert_eq!(focus, Select);

            let mut focus = Exit;
            for _ in 0..n {
                focus = button_prev(focus, has_back);
            }
            assert_eq!(focus, Exit);
        }
    }
}
