use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::catalog::Vehicle;
use crate::compare::ComparisonSummary;
use crate::dealers::Dealer;
use crate::finance::{LeaseQuote, LoanQuote};
use crate::reviews::{average_rating, rating_distribution, Review};
use crate::scoring::{Grade, ScoreResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Whole currency units with thousands separators: 27500.0 -> "27,500"
pub fn format_price(price: f64) -> String {
    let rounded = price.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Signed points with one decimal: "+12.5", "-10.0"
fn format_points(points: f64) -> String {
    format!("{:+.1}", points)
}

/// A vehicle with its score for display
pub struct ScoredVehicle<'a> {
    pub vehicle: &'a Vehicle,
    pub score: u8,
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn color_score(score: u8) -> String {
    let text = format!("{:>3}", score);
    match Grade::from_score(score) {
        Grade::Excellent => text.green().bold().to_string(),
        Grade::Good => text.cyan().bold().to_string(),
        Grade::Fair => text.yellow().to_string(),
        Grade::Weak => text.red().to_string(),
    }
}

/// Format vehicles as scored table with columns: Index, Score, Grade, Name, Price, Consumption
/// No headers
pub fn format_scored_table(vehicles: &[ScoredVehicle], use_colors: bool) -> String {
    if vehicles.is_empty() {
        return "No vehicles match.".to_string();
    }

    let term_width = get_terminal_width();

    // " 1." + space, score 3, grade 9, price 9, consumption 14, four separators
    let separator = "  ";
    let fixed_width = 4 + 3 + 9 + 9 + 14 + separator.len() * 4;

    vehicles
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>2}.", idx + 1);
            let grade_str = format!("{:<9}", Grade::from_score(scored.score).to_string());
            let price_str = format!("{:>9}", format_price(scored.vehicle.price));
            let consumption_str = format!("{:>14}", scored.vehicle.consumption_label());

            let full_name = scored.vehicle.display_name();
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_name(&full_name, width - fixed_width),
                Some(_) => truncate_name(&full_name, 20),
                None => full_name,
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    color_score(scored.score),
                    separator,
                    grade_str.dimmed(),
                    separator,
                    name.bold(),
                    separator,
                    price_str,
                    separator,
                    consumption_str.dimmed()
                )
            } else {
                format!(
                    "{} {:>3}{}{}{}{}{}{}{}{}",
                    index_str,
                    scored.score,
                    separator,
                    grade_str,
                    separator,
                    name,
                    separator,
                    price_str,
                    separator,
                    consumption_str
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format vehicles as tab-separated values for scripting
/// Columns: score, id, brand model, price, consumption, fuel type (no headers, no colors)
pub fn format_tsv(vehicles: &[ScoredVehicle]) -> String {
    if vehicles.is_empty() {
        return String::new();
    }

    vehicles
        .iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                scored.score,
                scored.vehicle.id,
                scored.vehicle.display_name(),
                scored.vehicle.price,
                scored.vehicle.consumption,
                scored.vehicle.fuel_type
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-line description of one vehicle plus its score breakdown
pub fn format_vehicle_detail(vehicle: &Vehicle, result: &ScoreResult, use_colors: bool) -> String {
    let grade = Grade::from_score(result.score);
    let mut lines = Vec::new();

    let title = format!("{} ({})", vehicle.display_name(), vehicle.year);
    let headline = format!("Score: {}/100 ({})", result.score, grade);
    if use_colors {
        lines.push(title.bold().to_string());
        lines.push(format!("  {}", headline.bold()));
    } else {
        lines.push(title);
        lines.push(format!("  {}", headline));
    }

    lines.push(format!("  Id: {}", vehicle.id));
    lines.push(format!("  Category: {}", vehicle.category));
    lines.push(format!("  Price: {}", format_price(vehicle.price)));
    lines.push(format!(
        "  Fuel: {}, {}",
        vehicle.fuel_type,
        vehicle.consumption_label()
    ));
    lines.push(format!("  Power: {} hp, {} seats", vehicle.power, vehicle.seats));
    lines.push(format!(
        "  Ratings: reliability {:.1}, safety {:.1}, comfort {:.1}",
        vehicle.reliability, vehicle.safety, vehicle.comfort
    ));
    if !vehicle.features.is_empty() {
        lines.push(format!("  Features: {}", vehicle.features.join(", ")));
    }
    if !vehicle.pros.is_empty() {
        lines.push(format!("  Pros: {}", vehicle.pros.join(", ")));
    }
    if !vehicle.cons.is_empty() {
        lines.push(format!("  Cons: {}", vehicle.cons.join(", ")));
    }

    lines.push(String::new());
    lines.push(format_breakdown(result, use_colors));
    lines.join("\n")
}

/// One line per factor, then the raw total and the clamped score
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let label_width = result
        .breakdown
        .factors
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec!["Breakdown:".to_string()];
    for factor in &result.breakdown.factors {
        let points = format!("{:>6}", format_points(factor.points));
        let points = if !use_colors {
            points
        } else if factor.points < 0.0 {
            points.red().to_string()
        } else if factor.points > 0.0 {
            points.green().to_string()
        } else {
            points.dimmed().to_string()
        };
        lines.push(format!(
            "  {:<width$}  {}  {}",
            factor.label,
            points,
            factor.description,
            width = label_width
        ));
    }
    lines.push(format!(
        "  Total {:.1} -> {}",
        result.breakdown.raw_total, result.score
    ));
    lines.join("\n")
}

/// Side-by-side lines for the compared vehicles, then the summary
pub fn format_comparison(
    vehicles: &[ScoredVehicle],
    summary: &ComparisonSummary,
    use_colors: bool,
) -> String {
    let mut out = format_scored_table(vehicles, use_colors);
    out.push_str("\n\n");

    let best = format!(
        "Best match: {} ({}/100)",
        summary.best.display_name(),
        summary.best_score
    );
    if use_colors {
        out.push_str(&best.green().bold().to_string());
    } else {
        out.push_str(&best);
    }
    out.push_str(&format!(
        "\nAverage price: {}\nAverage consumption: {:.1}/100km",
        format_price(summary.average_price),
        summary.average_consumption
    ));
    out
}

pub fn format_loan(quote: &LoanQuote, months: u32) -> String {
    format!(
        "Loan over {} months\n  Borrowed: {}\n  Monthly payment: {:.2}\n  Total interest: {}\n  Total cost: {}",
        months,
        format_price(quote.principal.max(0.0)),
        quote.monthly_payment,
        format_price(quote.total_interest),
        format_price(quote.total_cost)
    )
}

pub fn format_lease(quote: &LeaseQuote, months: u32) -> String {
    format!(
        "Lease over {} months\n  Residual value: {}\n  Monthly payment: {:.2}\n  Total cost: {}",
        months,
        format_price(quote.residual_value),
        quote.monthly_payment,
        format_price(quote.total_cost)
    )
}

/// Average rating and the 5-to-1 star distribution
pub fn format_review_summary(reviews: &[&Review]) -> String {
    let (Some(average), Some(buckets)) = (average_rating(reviews), rating_distribution(reviews)) else {
        return "No reviews yet.".to_string();
    };

    let mut lines = vec![format!(
        "Rating: {:.1}/5 from {} review{}",
        average,
        reviews.len(),
        if reviews.len() == 1 { "" } else { "s" }
    )];
    for bucket in buckets {
        // 20-char bar at 100%
        let filled = (bucket.percentage / 5.0).round() as usize;
        lines.push(format!(
            "  {}* {:<20} {}",
            bucket.stars,
            "#".repeat(filled),
            bucket.count
        ));
    }
    lines.join("\n")
}

/// Full text of each review, as listed
pub fn format_reviews(reviews: &[&Review], use_colors: bool) -> String {
    reviews
        .iter()
        .map(|review| {
            let verified = if review.verified { " (verified)" } else { "" };
            let heading = format!("{:.1}/5  {}", review.rating, review.title);
            let heading = if use_colors {
                heading.bold().to_string()
            } else {
                heading
            };
            let mut lines = vec![
                heading,
                format!("  {}{}, {}", review.author, verified, review.created_at),
                format!("  {}", review.content),
            ];
            if !review.pros.is_empty() {
                lines.push(format!("  Pros: {}", review.pros.join(", ")));
            }
            if !review.cons.is_empty() {
                lines.push(format!("  Cons: {}", review.cons.join(", ")));
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn format_dealers(dealers: &[&Dealer], use_colors: bool) -> String {
    if dealers.is_empty() {
        return "No dealers found.".to_string();
    }

    dealers
        .iter()
        .map(|dealer| {
            let name = if use_colors {
                dealer.name.bold().to_string()
            } else {
                dealer.name.clone()
            };
            let distance = dealer
                .distance_km
                .map(|d| format!(", {:.1} km", d))
                .unwrap_or_default();
            let mut lines = vec![
                format!("{} ({:.1}/5{})", name, dealer.rating, distance),
                format!("  {}, {}", dealer.address, dealer.city),
                format!("  {}  {}", dealer.phone, dealer.email),
                format!("  Brands: {}", dealer.brands.join(", ")),
            ];
            if !dealer.services.is_empty() {
                lines.push(format!("  Services: {}", dealer.services.join(", ")));
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
