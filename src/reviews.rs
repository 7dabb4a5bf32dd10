//! Owner reviews and their rating summary.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const BUILTIN_REVIEWS: &str = include_str!("../data/reviews.json");

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Review {
    pub id: String,
    pub vehicle_id: String,
    pub author: String,
    pub rating: f64, // out of 5, halves allowed
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub verified: bool,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub helpful: u32,
}

/// How many reviews fall in one whole-star band
#[derive(Debug, Clone, PartialEq)]
pub struct RatingBucket {
    pub stars: u8,
    pub count: usize,
    pub percentage: f64,
}

/// The reviews bundled with the binary
pub fn builtin_reviews() -> Result<Vec<Review>> {
    serde_json::from_str(BUILTIN_REVIEWS).context("Failed to parse built-in reviews")
}

/// Reviews of one vehicle, newest first
pub fn reviews_for<'a>(reviews: &'a [Review], vehicle_id: &str) -> Vec<&'a Review> {
    let mut found: Vec<&Review> = reviews.iter().filter(|r| r.vehicle_id == vehicle_id).collect();
    found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    found
}

/// Mean rating, or None when there are no reviews
pub fn average_rating(reviews: &[&Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    Some(reviews.iter().map(|r| r.rating).sum::<f64>() / reviews.len() as f64)
}

/// Counts per star band from 5 down to 1. A review lands in the band of its
/// rating rounded down, so 4.5 counts as 4 stars. None when there are no reviews.
pub fn rating_distribution(reviews: &[&Review]) -> Option<Vec<RatingBucket>> {
    if reviews.is_empty() {
        return None;
    }
    let total = reviews.len() as f64;
    let buckets = (1..=5u8)
        .rev()
        .map(|stars| {
            let count = reviews
                .iter()
                .filter(|r| r.rating.floor() == f64::from(stars))
                .count();
            RatingBucket {
                stars,
                count,
                percentage: count as f64 / total * 100.0,
            }
        })
        .collect();
    Some(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_review(id: &str, vehicle_id: &str, rating: f64, date: &str) -> Review {
        Review {
            id: id.to_string(),
            vehicle_id: vehicle_id.to_string(),
            author: "Tester".to_string(),
            rating,
            title: "Title".to_string(),
            content: "Content".to_string(),
            pros: vec![],
            cons: vec![],
            verified: false,
            created_at: date.parse().unwrap(),
            helpful: 0,
        }
    }

    #[test]
    fn test_builtin_reviews_parse() {
        let reviews = builtin_reviews().unwrap();
        assert!(!reviews.is_empty());
        assert!(reviews.iter().all(|r| (0.0..=5.0).contains(&r.rating)));
    }

    #[test]
    fn test_builtin_reviews_reference_catalog() {
        let vehicles = crate::catalog::builtin_catalog().unwrap();
        for review in builtin_reviews().unwrap() {
            assert!(
                crate::catalog::find_vehicle(&vehicles, &review.vehicle_id).is_some(),
                "review {} points at unknown vehicle {}",
                review.id,
                review.vehicle_id
            );
        }
    }

    #[test]
    fn test_reviews_for_newest_first() {
        let reviews = vec![
            create_test_review("1", "golf", 4.0, "2024-01-10"),
            create_test_review("2", "zoe", 3.0, "2024-02-01"),
            create_test_review("3", "golf", 5.0, "2024-03-05"),
        ];
        let golf = reviews_for(&reviews, "golf");
        let ids: Vec<&str> = golf.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
        assert!(reviews_for(&reviews, "unknown").is_empty());
    }

    #[test]
    fn test_average_rating() {
        let reviews = vec![
            create_test_review("1", "208", 4.5, "2024-01-15"),
            create_test_review("2", "208", 4.0, "2024-01-10"),
            create_test_review("3", "208", 5.0, "2024-01-05"),
        ];
        let refs: Vec<&Review> = reviews.iter().collect();
        assert_eq!(average_rating(&refs), Some(4.5));
    }

    #[test]
    fn test_empty_reviews_have_no_summary() {
        assert_eq!(average_rating(&[]), None);
        assert_eq!(rating_distribution(&[]), None);
    }

    #[test]
    fn test_rating_distribution_floors_ratings() {
        let reviews = vec![
            create_test_review("1", "208", 4.5, "2024-01-15"),
            create_test_review("2", "208", 4.0, "2024-01-10"),
            create_test_review("3", "208", 5.0, "2024-01-05"),
            create_test_review("4", "208", 1.5, "2024-01-01"),
        ];
        let refs: Vec<&Review> = reviews.iter().collect();
        let buckets = rating_distribution(&refs).unwrap();

        let stars: Vec<u8> = buckets.iter().map(|b| b.stars).collect();
        assert_eq!(stars, vec![5, 4, 3, 2, 1]);
        let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 2, 0, 0, 1]);
        assert_eq!(buckets[1].percentage, 50.0);
        assert_eq!(buckets[2].percentage, 0.0);
    }
}
