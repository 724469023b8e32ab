use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use diary_sentiment_core::{highlight, SentimentScorer};
use diary_sentiment_models::{AnalysisReport, Polarity, ReviewSentiment, SentimentResult, WordCloudEntry};
use owo_colors::OwoColorize;

pub fn print_report(title: &str, report: &AnalysisReport, scorer: &dyn SentimentScorer) {
    println!("\n{}", "╔════════════════════════════════════════════════════════════╗".bright_white());
    println!("{} {}", "║".bright_white(), title.bright_cyan().bold());
    println!("{}", "╚════════════════════════════════════════════════════════════╝".bright_white());
    println!();

    println!("{}", overall_line(&report.overall_sentiment));
    println!();

    for review in &report.reviews {
        print_review(review, scorer);
    }

    if report.word_cloud.is_empty() {
        println!("{}", "Word cloud: no words to show".bright_black());
    } else {
        println!("{}", word_cloud_table(&report.word_cloud));
    }
    println!();
}

fn overall_line(sentiment: &SentimentResult) -> String {
    format!(
        "{} {} (score {}, comparative {:.3})",
        "Overall sentiment:".bold(),
        polarity_label(sentiment.polarity()),
        sentiment.score,
        sentiment.comparative
    )
}

fn print_review(review_sentiment: &ReviewSentiment, scorer: &dyn SentimentScorer) {
    let review = &review_sentiment.review;
    let sentiment = &review_sentiment.sentiment;

    let mut heading = review.movie_title.bold().to_string();
    if let Some(year) = review.entry.film.as_ref().and_then(|f| f.year.as_deref()) {
        heading.push_str(&format!(" ({})", year));
    }
    if let Some(published) = review.published_datetime() {
        heading.push_str(&format!(" · {}", published.format("%Y-%m-%d")).bright_black().to_string());
    }
    if review.entry.is_rewatch {
        heading.push_str(&" ↻".bright_black().to_string());
    }

    println!("{}", heading);
    println!(
        "  {} score {}, comparative {:.3}",
        polarity_label(sentiment.polarity()),
        sentiment.score,
        sentiment.comparative
    );
    println!("  {}", highlighted_text(&review.review_text, sentiment, scorer));
    println!();
}

fn polarity_label(polarity: Polarity) -> String {
    match polarity {
        Polarity::Positive => "positive".green().bold().to_string(),
        Polarity::Negative => "negative".red().bold().to_string(),
        Polarity::Neutral => "neutral".bright_black().to_string(),
    }
}

/// Review text with scored words colored green or red
pub fn highlighted_text(text: &str, result: &SentimentResult, scorer: &dyn SentimentScorer) -> String {
    highlight(text, result, scorer)
        .into_iter()
        .map(|word| match word.polarity {
            Polarity::Positive => word.word.green().to_string(),
            Polarity::Negative => word.word.red().to_string(),
            Polarity::Neutral => word.word,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn word_cloud_table(entries: &[WordCloudEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Word").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
    ]);

    for (rank, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(&entry.token),
            Cell::new(entry.count).set_alignment(CellAlignment::Right),
        ]);
    }

    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}
