pub mod formatter;

pub use formatter::{
    format_breakdown, format_comparison, format_dealers, format_lease, format_loan, format_price,
    format_review_summary, format_reviews, format_scored_table, format_tsv, format_vehicle_detail,
    should_use_colors, ScoredVehicle,
};
