use crate::models::{InsightLabel, InsightView, RecommendationSummary};

/// A label wins only as the strict maximum of the three counts. Any tie at
/// the top, including all zeros, is no consensus.
pub fn classify(summary: &RecommendationSummary) -> InsightLabel {
    let RecommendationSummary { buy, hold, sell } = *summary;

    if buy > hold && buy > sell {
        InsightLabel::StrongBuy
    } else if hold > buy && hold > sell {
        InsightLabel::Hold
    } else if sell > buy && sell > hold {
        InsightLabel::Sell
    } else {
        InsightLabel::NoConsensus
    }
}

pub fn insight_view(summary: RecommendationSummary) -> InsightView {
    let label = classify(&summary);
    InsightView {
        label,
        text: label.text().to_string(),
        tone: label.tone(),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InsightTone;

    fn label(buy: u64, hold: u64, sell: u64) -> InsightLabel {
        classify(&RecommendationSummary::new(buy, hold, sell))
    }

    #[test]
    fn test_known_cases() {
        assert_eq!(label(10, 3, 2), InsightLabel::StrongBuy);
        assert_eq!(label(3, 3, 3), InsightLabel::NoConsensus);
        assert_eq!(label(0, 0, 0), InsightLabel::NoConsensus);
        assert_eq!(label(5, 5, 1), InsightLabel::NoConsensus);
        assert_eq!(label(1, 9, 4), InsightLabel::Hold);
        assert_eq!(label(0, 1, 2), InsightLabel::Sell);
        assert_eq!(label(1, 4, 4), InsightLabel::NoConsensus);
        assert_eq!(label(7, 0, 7), InsightLabel::NoConsensus);
    }

    #[test]
    fn test_unique_strict_maximum_exhaustive() {
        for buy in 0..8u64 {
            for hold in 0..8u64 {
                for sell in 0..8u64 {
                    let expected = if buy > hold && buy > sell {
                        InsightLabel::StrongBuy
                    } else if hold > buy && hold > sell {
                        InsightLabel::Hold
                    } else if sell > buy && sell > hold {
                        InsightLabel::Sell
                    } else {
                        InsightLabel::NoConsensus
                    };
                    assert_eq!(label(buy, hold, sell), expected, "({buy},{hold},{sell})");

                    let max = buy.max(hold).max(sell);
                    let at_max = [buy, hold, sell].iter().filter(|&&c| c == max).count();
                    assert_eq!(
                        expected == InsightLabel::NoConsensus,
                        at_max > 1,
                        "({buy},{hold},{sell})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_insight_view_for_empty_summary() {
        let view = insight_view(RecommendationSummary::default());
        assert_eq!(view.label, InsightLabel::NoConsensus);
        assert_eq!(view.text, "No clear recommendation");
        assert_eq!(view.tone, InsightTone::Warning);
    }
}
