//! Rating aggregates computed from a product's reviews.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::products::ProductId;
use crate::repository::CatalogRepository;
use crate::rounding::round_to_decimal;

const RATING_PLACES: u32 = 1;

/// Mean rating (one decimal place) and review count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingSummary {
    pub average: Decimal,
    pub count: usize,
}

impl RatingSummary {
    /// Average is `0.0` when there are no ratings.
    pub fn from_ratings<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = Decimal>,
    {
        let (sum, count) = ratings
            .into_iter()
            .fold((Decimal::ZERO, 0usize), |(sum, count), rating| {
                (sum + rating, count + 1)
            });

        if count == 0 {
            return Self {
                average: Decimal::ZERO,
                count,
            };
        }

        let mean = sum / Decimal::from(count);
        Self {
            average: round_to_decimal(mean, RATING_PLACES),
            count,
        }
    }
}

/// Review counts per star bucket.
///
/// Buckets use the raw rating: `[4.5, 5]` five, `[3.5, 4.5)` four,
/// `[2.5, 3.5)` three, `[1.5, 2.5)` two, `[0, 1.5)` one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingDistribution {
    pub five_stars: usize,
    pub four_stars: usize,
    pub three_stars: usize,
    pub two_stars: usize,
    pub one_star: usize,
}

impl RatingDistribution {
    pub fn from_ratings<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = Decimal>,
    {
        let five = Decimal::new(45, 1);
        let four = Decimal::new(35, 1);
        let three = Decimal::new(25, 1);
        let two = Decimal::new(15, 1);

        ratings
            .into_iter()
            .fold(Self::default(), |mut dist, rating| {
                if rating >= five {
                    dist.five_stars += 1;
                } else if rating >= four {
                    dist.four_stars += 1;
                } else if rating >= three {
                    dist.three_stars += 1;
                } else if rating >= two {
                    dist.two_stars += 1;
                } else {
                    dist.one_star += 1;
                }
                dist
            })
    }
}

/// Average rating and review count for `product_id`.
pub fn compute_rating<R>(repo: &R, product_id: ProductId) -> RatingSummary
where
    R: CatalogRepository + ?Sized,
{
    RatingSummary::from_ratings(
        repo.find_reviews_by_product_id(product_id)
            .into_iter()
            .map(|r| r.rating),
    )
}

pub fn compute_distribution<R>(repo: &R, product_id: ProductId) -> RatingDistribution
where
    R: CatalogRepository + ?Sized,
{
    RatingDistribution::from_ratings(
        repo.find_reviews_by_product_id(product_id)
            .into_iter()
            .map(|r| r.rating),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::sample_catalog;

    fn ratings(tenths: &[i64]) -> Vec<Decimal> {
        tenths.iter().map(|t| Decimal::new(*t, 1)).collect()
    }

    #[test]
    fn rating_of_product_with_five_reviews() {
        let summary = compute_rating(&sample_catalog(), 1);
        assert_eq!(summary.average, Decimal::new(46, 1));
        assert_eq!(summary.count, 5);
    }

    #[test]
    fn rating_without_reviews_is_zero() {
        let summary = compute_rating(&sample_catalog(), 3);
        assert_eq!(summary.average, Decimal::ZERO);
        assert_eq!(summary.count, 0);
    }

    #[test]
    fn rating_average_rounds_half_up() {
        // mean 4.75
        let summary = RatingSummary::from_ratings(ratings(&[48, 45, 50, 47]));
        assert_eq!(summary.average, Decimal::new(48, 1));

        // mean 4.15
        let summary = RatingSummary::from_ratings(ratings(&[43, 40]));
        assert_eq!(summary.average, Decimal::new(42, 1));
    }

    #[test]
    fn rating_average_rounds_repeating_mean() {
        // 13.9 / 3 = 4.633...
        let summary = RatingSummary::from_ratings(ratings(&[46, 48, 45]));
        assert_eq!(summary.average, Decimal::new(46, 1));
    }

    #[test]
    fn distribution_puts_high_ratings_in_five_stars() {
        let dist = compute_distribution(&sample_catalog(), 2);
        assert_eq!(
            dist,
            RatingDistribution {
                five_stars: 4,
                ..RatingDistribution::default()
            }
        );
    }

    #[test]
    fn distribution_bucket_edges_are_half_open() {
        let dist = RatingDistribution::from_ratings(ratings(&[
            50, 45, 44, 35, 34, 25, 24, 15, 14, 0,
        ]));
        assert_eq!(dist.five_stars, 2);
        assert_eq!(dist.four_stars, 2);
        assert_eq!(dist.three_stars, 2);
        assert_eq!(dist.two_stars, 2);
        assert_eq!(dist.one_star, 2);
    }

    #[test]
    fn distribution_covers_every_review() {
        let input = ratings(&[42, 40, 45, 13, 27]);
        let dist = RatingDistribution::from_ratings(input.clone());
        let counted =
            dist.five_stars + dist.four_stars + dist.three_stars + dist.two_stars + dist.one_star;
        assert_eq!(counted, input.len());
    }

    #[test]
    fn distribution_serializes_with_star_keys() {
        let dist = RatingDistribution::from_ratings(ratings(&[42, 50]));
        let json = serde_json::to_value(dist).expect("serialize");
        assert_eq!(json["fiveStars"], 1);
        assert_eq!(json["fourStars"], 1);
        assert_eq!(json["oneStar"], 0);
    }
}
