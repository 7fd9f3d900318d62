//! VAT calculation for agreement values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net amount, derived tax, and the resulting gross total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub net: Decimal,
    pub tax: Decimal,
    pub gross: Decimal,
}

/// Computes the tax breakdown for a net amount and a fractional rate.
/// Pure and deterministic; the gross always equals net plus tax.
pub fn breakdown(net: Decimal, rate: Decimal) -> TaxBreakdown {
    let tax = net * rate;
    TaxBreakdown {
        net,
        tax,
        gross: net + tax,
    }
}
