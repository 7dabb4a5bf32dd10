//! Monthly payment estimates for buying on credit or leasing.

use thiserror::Error;

/// Share of the price a leased car is assumed to keep at term end
const LEASE_RESIDUAL_RATIO: f64 = 0.6;

#[derive(Debug, Error, PartialEq)]
pub enum FinanceError {
    #[error("term must be at least one month")]
    InvalidTerm,
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoanQuote {
    pub principal: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaseQuote {
    pub residual_value: f64,
    pub monthly_payment: f64,
    pub total_cost: f64,
}

fn check_finite(name: &'static str, value: f64) -> Result<(), FinanceError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FinanceError::NotFinite(name))
    }
}

/// Amortized loan over `months` at `annual_rate_pct` percent.
///
/// Nothing left to borrow (down payment and trade-in cover the price) gives a
/// zero payment. A zero rate spreads the principal evenly.
pub fn loan(
    price: f64,
    down_payment: f64,
    trade_in: f64,
    annual_rate_pct: f64,
    months: u32,
) -> Result<LoanQuote, FinanceError> {
    check_finite("price", price)?;
    check_finite("down payment", down_payment)?;
    check_finite("trade-in", trade_in)?;
    check_finite("rate", annual_rate_pct)?;
    if months == 0 {
        return Err(FinanceError::InvalidTerm);
    }

    let principal = price - down_payment - trade_in;
    let n = f64::from(months);
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;

    let monthly_payment = if principal <= 0.0 {
        0.0
    } else if monthly_rate == 0.0 {
        principal / n
    } else {
        let growth = (1.0 + monthly_rate).powf(n);
        principal * monthly_rate * growth / (growth - 1.0)
    };

    let total_interest = (monthly_payment * n - principal.max(0.0)).max(0.0);
    Ok(LoanQuote {
        principal,
        monthly_payment,
        total_interest,
        total_cost: price + total_interest - trade_in,
    })
}

/// Simplified lease: depreciation to a 60% residual plus a finance charge on
/// price plus residual.
pub fn lease(
    price: f64,
    down_payment: f64,
    annual_rate_pct: f64,
    months: u32,
) -> Result<LeaseQuote, FinanceError> {
    check_finite("price", price)?;
    check_finite("down payment", down_payment)?;
    check_finite("rate", annual_rate_pct)?;
    if months == 0 {
        return Err(FinanceError::InvalidTerm);
    }

    let n = f64::from(months);
    let residual_value = price * LEASE_RESIDUAL_RATIO;
    let depreciation = (price - residual_value) / n;
    let finance_charge = (price + residual_value) * (annual_rate_pct / 100.0) / 12.0;
    let monthly_payment = depreciation + finance_charge;

    Ok(LeaseQuote {
        residual_value,
        monthly_payment,
        total_cost: monthly_payment * n + down_payment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_loan_standard() {
        // 30000 price, 6000 down, 3.5% over 60 months
        let quote = loan(30000.0, 6000.0, 0.0, 3.5, 60).unwrap();
        assert_eq!(quote.principal, 24000.0);
        assert!(close(quote.monthly_payment, 436.60), "got {}", quote.monthly_payment);
        assert!(close(quote.total_interest, quote.monthly_payment * 60.0 - 24000.0));
        assert!(close(quote.total_cost, 30000.0 + quote.total_interest));
    }

    #[test]
    fn test_loan_zero_rate() {
        let quote = loan(12000.0, 0.0, 0.0, 0.0, 12).unwrap();
        assert_eq!(quote.monthly_payment, 1000.0);
        assert_eq!(quote.total_interest, 0.0);
        assert_eq!(quote.total_cost, 12000.0);
    }

    #[test]
    fn test_loan_fully_covered() {
        let quote = loan(10000.0, 6000.0, 5000.0, 4.0, 36).unwrap();
        assert_eq!(quote.monthly_payment, 0.0);
        assert_eq!(quote.total_interest, 0.0);
        assert_eq!(quote.total_cost, 5000.0);
    }

    #[test]
    fn test_trade_in_reduces_cost() {
        let without = loan(30000.0, 0.0, 0.0, 3.5, 48).unwrap();
        let with = loan(30000.0, 0.0, 5000.0, 3.5, 48).unwrap();
        assert!(with.monthly_payment < without.monthly_payment);
        assert!(with.total_cost < without.total_cost);
    }

    #[test]
    fn test_zero_months_rejected() {
        assert_eq!(loan(1.0, 0.0, 0.0, 1.0, 0), Err(FinanceError::InvalidTerm));
        assert_eq!(lease(1.0, 0.0, 1.0, 0), Err(FinanceError::InvalidTerm));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(
            loan(f64::NAN, 0.0, 0.0, 1.0, 12),
            Err(FinanceError::NotFinite("price"))
        );
    }

    #[test]
    fn test_lease() {
        // 40000 price: residual 24000, depreciation 16000/48, charge 64000*0.03/12
        let quote = lease(40000.0, 2000.0, 3.0, 48).unwrap();
        assert_eq!(quote.residual_value, 24000.0);
        assert!(close(quote.monthly_payment, 493.33));
        assert!(close(quote.total_cost, quote.monthly_payment * 48.0 + 2000.0));
    }
}
