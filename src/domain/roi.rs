use super::entities::{Calculation, PriceQuote, Recommendation, RoiResult};

/// Computes the return on sending a raw card for grading and selling it graded.
///
/// All inputs are dollar amounts `>= 0`. The function is total: a zero
/// investment yields a zero ROI instead of dividing by zero.
pub fn compute_roi(ungraded_price: f64, graded_price: f64, grading_cost: f64) -> RoiResult {
    let investment = ungraded_price + grading_cost;
    let profit = graded_price - investment;
    let roi_percent = if investment > 0.0 {
        (profit / investment) * 100.0
    } else {
        0.0
    };

    RoiResult {
        investment,
        profit,
        roi_percent,
        recommendation: Recommendation::from_roi_percent(roi_percent),
    }
}

pub fn compute_roi_for_quote(quote: &PriceQuote, grading_cost: f64) -> RoiResult {
    compute_roi(quote.ungraded_price, quote.graded_price, grading_cost)
}

/// Bundles a fresh quote with its ROI at the given fee.
pub fn calculate(
    query: &str,
    quote: PriceQuote,
    grading_cost: f64,
    affiliate_url: String,
) -> Calculation {
    let roi = compute_roi_for_quote(&quote, grading_cost);
    Calculation {
        query: query.trim().to_string(),
        quote,
        grading_cost,
        roi,
        affiliate_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PSA_BULK: f64 = 21.99;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_high_flip_scenario() {
        let result = compute_roi(20.00, 150.00, PSA_BULK);
        assert_close(result.investment, 41.99, 1e-9);
        assert_close(result.profit, 108.01, 1e-9);
        assert_close(result.roi_percent, 257.3, 0.1);
        assert_eq!(result.recommendation, Recommendation::HighFlip);
    }

    #[test]
    fn test_loss_scenarios() {
        let result = compute_roi(30.00, 40.00, PSA_BULK);
        assert_close(result.investment, 51.99, 1e-9);
        assert_close(result.profit, -11.99, 1e-9);
        assert_close(result.roi_percent, -23.1, 0.05);
        assert_eq!(result.recommendation, Recommendation::Loss);

        let result = compute_roi(10.00, 30.00, PSA_BULK);
        assert_close(result.investment, 31.99, 1e-9);
        assert_close(result.profit, -1.99, 1e-9);
        assert_close(result.roi_percent, -6.2, 0.05);
        assert_eq!(result.recommendation, Recommendation::Loss);
    }

    #[test]
    fn test_zero_investment_does_not_divide() {
        let result = compute_roi(0.0, 0.0, 0.0);
        assert_eq!(result.investment, 0.0);
        assert_eq!(result.profit, 0.0);
        assert_eq!(result.roi_percent, 0.0);
        assert_eq!(result.recommendation, Recommendation::LowMargin);

        // Free card, free grading, but a graded sale still reports zero ROI.
        let result = compute_roi(0.0, 50.0, 0.0);
        assert_eq!(result.profit, 50.0);
        assert_eq!(result.roi_percent, 0.0);
    }

    #[test]
    fn test_recommendation_boundaries() {
        // 50 + 0 invested, 100 back: exactly +100%.
        let result = compute_roi(50.0, 100.0, 0.0);
        assert_eq!(result.roi_percent, 100.0);
        assert_eq!(result.recommendation, Recommendation::HighFlip);

        let result = compute_roi(25.0, 50.0, 25.0);
        assert_eq!(result.roi_percent, 0.0);
        assert_eq!(result.recommendation, Recommendation::LowMargin);

        assert_eq!(
            Recommendation::from_roi_percent(99.999),
            Recommendation::LowMargin
        );
        assert_eq!(
            Recommendation::from_roi_percent(-0.001),
            Recommendation::Loss
        );
    }

    #[test]
    fn test_break_even_matches_investment() {
        let result = compute_roi(12.5, 80.0, PSA_BULK);
        assert_eq!(result.break_even(), result.investment);
        let at_break_even = compute_roi(12.5, result.break_even(), PSA_BULK);
        assert_eq!(at_break_even.profit, 0.0);
        assert_eq!(at_break_even.recommendation, Recommendation::LowMargin);
    }

    #[test]
    fn test_quote_helper_uses_quote_prices() {
        let quote = PriceQuote::new(20.0, 150.0, "Michael Jordan 1986 Fleer #57");
        assert_eq!(
            compute_roi_for_quote(&quote, PSA_BULK),
            compute_roi(20.0, 150.0, PSA_BULK)
        );
    }

    #[test]
    fn test_calculation_serializes_for_renderers() {
        let quote = PriceQuote::new(10.0, 30.0, "Test Card #1");
        let calculation = calculate(" test card ", quote, PSA_BULK, "https://example.test".into());
        assert_eq!(calculation.query, "test card");
        assert_eq!(calculation.roi.recommendation, Recommendation::Loss);

        let json = serde_json::to_value(&calculation).unwrap();
        assert_eq!(json["roi"]["recommendation"], "loss");
        assert_eq!(json["quote"]["item_label"], "Test Card #1");
    }

    proptest! {
        #[test]
        fn prop_investment_and_profit_identities(
            ungraded in 0.0f64..100_000.0,
            graded in 0.0f64..100_000.0,
            cost in 0.0f64..1_000.0,
        ) {
            let result = compute_roi(ungraded, graded, cost);
            prop_assert_eq!(result.investment, ungraded + cost);
            prop_assert_eq!(result.profit, graded - (ungraded + cost));
            prop_assert_eq!(
                result.recommendation,
                Recommendation::from_roi_percent(result.roi_percent)
            );
        }

        #[test]
        fn prop_roi_increases_with_graded_price(
            ungraded in 0.01f64..10_000.0,
            cost in 0.0f64..500.0,
            graded in 0.0f64..10_000.0,
            bump in 1.0f64..1_000.0,
        ) {
            let lower = compute_roi(ungraded, graded, cost);
            let higher = compute_roi(ungraded, graded + bump, cost);
            prop_assert!(higher.roi_percent > lower.roi_percent);
        }
    }
}
