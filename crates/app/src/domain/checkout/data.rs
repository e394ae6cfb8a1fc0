//! Checkout Data

use crate::domain::lessons::records::LessonUuid;

/// One requested line of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub lesson: LessonUuid,
    pub quantity: u32,
}

/// Why a cart line left the lesson untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,

    /// The conditional decrement found fewer spaces than requested.
    ///
    /// `available` is read after the failed decrement, so a concurrent
    /// update may leave it at or above the requested quantity.
    InsufficientSpaces { available: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Fulfilled,
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutLine {
    pub item: CartItem,
    pub outcome: CheckoutOutcome,
}

/// Per-line outcomes of a checkout, in cart order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutReceipt {
    pub lines: Vec<CheckoutLine>,
}

impl CheckoutReceipt {
    pub fn all_fulfilled(&self) -> bool {
        self.lines
            .iter()
            .all(|line| line.outcome == CheckoutOutcome::Fulfilled)
    }

    pub fn skipped(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line.outcome, CheckoutOutcome::Skipped(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(outcome: CheckoutOutcome) -> CheckoutLine {
        CheckoutLine {
            item: CartItem {
                lesson: LessonUuid::new(),
                quantity: 1,
            },
            outcome,
        }
    }

    #[test]
    fn receipt_with_a_skipped_line_is_not_all_fulfilled() {
        let receipt = CheckoutReceipt {
            lines: vec![
                line(CheckoutOutcome::Fulfilled),
                line(CheckoutOutcome::Skipped(SkipReason::NotFound)),
            ],
        };

        assert!(!receipt.all_fulfilled());
        assert_eq!(receipt.skipped(), 1);
    }
}
