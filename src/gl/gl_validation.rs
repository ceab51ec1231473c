use rust_decimal::Decimal;
use std::collections::HashSet;

use super::gl_errors::{LedgerError, Result};
use super::gl_model::{EntrySide, LineInput};

/// Total debit amount of a candidate line set
pub fn total_debit(lines: &[LineInput]) -> Decimal {
    lines
        .iter()
        .filter(|l| l.side == EntrySide::Debit)
        .map(|l| l.amount)
        .sum()
}

/// Total credit amount of a candidate line set
pub fn total_credit(lines: &[LineInput]) -> Decimal {
    lines
        .iter()
        .filter(|l| l.side == EntrySide::Credit)
        .map(|l| l.amount)
        .sum()
}

/// Validates that entry lines are balanced (total debits = total credits).
///
/// Amounts are decimals, so the comparison is exact; there is no rounding
/// tolerance to absorb drift.
pub fn ensure_balanced(lines: &[LineInput]) -> Result<()> {
    let debit = total_debit(lines);
    let credit = total_credit(lines);

    if debit != credit {
        return Err(LedgerError::NotBalanced { debit, credit });
    }
    Ok(())
}

/// Validates that all entry lines use the same currency (v1 rule: no
/// mixed-currency entries).
pub fn ensure_single_currency(lines: &[LineInput]) -> Result<()> {
    let currencies: HashSet<&str> = lines.iter().map(|l| l.currency.as_str()).collect();
    if currencies.len() != 1 {
        return Err(LedgerError::MixedCurrency);
    }
    Ok(())
}

/// Validates entry lines (balanced and same currency)
pub fn validate_lines(lines: &[LineInput]) -> Result<()> {
    ensure_balanced(lines)?;
    ensure_single_currency(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn debit(amount: Decimal, currency: &str) -> LineInput {
        LineInput::debit("acc-d", amount, currency, "d")
    }

    fn credit(amount: Decimal, currency: &str) -> LineInput {
        LineInput::credit("acc-c", amount, currency, "c")
    }

    #[test]
    fn accepts_balanced_single_currency_lines() {
        let lines = vec![debit(dec!(1000), "TWD"), credit(dec!(1000), "TWD")];
        assert!(validate_lines(&lines).is_ok());
    }

    #[test]
    fn accepts_multi_leg_balanced_lines() {
        let lines = vec![
            debit(dec!(1599), "TWD"),
            credit(dec!(1500), "TWD"),
            credit(dec!(99), "TWD"),
        ];
        assert!(validate_lines(&lines).is_ok());
    }

    #[test]
    fn rejects_unbalanced_lines_with_totals() {
        let lines = vec![debit(dec!(100), "USD"), credit(dec!(99.99), "USD")];
        match ensure_balanced(&lines) {
            Err(LedgerError::NotBalanced { debit, credit }) => {
                assert_eq!(debit, dec!(100));
                assert_eq!(credit, dec!(99.99));
            }
            other => panic!("expected NotBalanced, got {:?}", other),
        }
    }

    #[test]
    fn balance_check_is_exact() {
        // A drift of one millionth would have slipped through a float
        // tolerance; decimals reject it.
        let lines = vec![debit(dec!(100.000001), "USD"), credit(dec!(100), "USD")];
        assert!(matches!(
            ensure_balanced(&lines),
            Err(LedgerError::NotBalanced { .. })
        ));
    }

    #[test]
    fn rejects_mixed_currencies() {
        let lines = vec![debit(dec!(100), "USD"), credit(dec!(100), "TWD")];
        assert!(matches!(
            validate_lines(&lines),
            Err(LedgerError::MixedCurrency)
        ));
    }

    #[test]
    fn rejects_empty_line_set() {
        assert!(matches!(
            ensure_single_currency(&[]),
            Err(LedgerError::MixedCurrency)
        ));
    }

    #[test]
    fn totals_sum_per_side() {
        let lines = vec![
            debit(dec!(40), "USD"),
            debit(dec!(60), "USD"),
            credit(dec!(100), "USD"),
        ];
        assert_eq!(total_debit(&lines), dec!(100));
        assert_eq!(total_credit(&lines), dec!(100));
    }
}
