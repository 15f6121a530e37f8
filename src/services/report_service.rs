use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::database::repositories::kamus_alay::KamusAlayRepository;
use crate::interfaces::repositories::kamus_alay::KamusAlayRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use crate::services::cleaning_service;
use crate::utils::{chart, encoding};

pub const TWEET_COLUMN: &str = "Tweet";

pub const ANNOTATION_COLUMNS: [&str; 11] = [
    "Abusive",
    "HS_Individual",
    "HS_Group",
    "HS_Religion",
    "HS_Race",
    "HS_Physical",
    "HS_Gender",
    "HS_Other",
    "HS_Weak",
    "HS_Moderate",
    "HS_Strong",
];

pub const CHART_LABELS: [&str; 11] = [
    "Abusive", "Individual", "Group", "Religion", "Race", "Physical", "Gender", "Other", "Weak",
    "Moderate", "Strong",
];

// The upstream datasets are exported with this three character delimiter so
// free text can carry commas unquoted. The csv crate only takes single byte
// delimiters, so it gets folded to an unused control byte before parsing.
const DATASET_DELIMITER: &str = "~!~";
const FOLDED_DELIMITER: u8 = 0x1f;

#[derive(Debug)]
pub struct AnnotationDataset {
    pub tweets: Vec<String>,
    pub counts: [u64; 11],
}

/// Decodes and parses an uploaded dataset: the `Tweet` text column plus the
/// per-row sums of the eleven annotation flag columns. A header missing any
/// expected column is a request error.
pub fn parse_dataset(bytes: &[u8]) -> AppResult<AnnotationDataset> {
    let text = encoding::decode(bytes);
    let folded = text.replace(DATASET_DELIMITER, "\u{1f}");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(FOLDED_DELIMITER)
        .flexible(true)
        .from_reader(folded.as_bytes());

    let headers = reader.headers()?.clone();
    let column_index = |name: &str| -> AppResult<usize> {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .ok_or(AppError::ColumnMissing {
                column: name.to_string(),
            })
    };

    let tweet_index = column_index(TWEET_COLUMN)?;
    let mut flag_indexes = [0usize; 11];
    for (slot, column) in ANNOTATION_COLUMNS.iter().enumerate() {
        flag_indexes[slot] = column_index(column)?;
    }

    let mut tweets = Vec::new();
    let mut counts = [0u64; 11];
    for record in reader.records() {
        let record = record?;
        tweets.push(record.get(tweet_index).unwrap_or_default().to_string());
        for (slot, index) in flag_indexes.iter().enumerate() {
            let flag: u64 = record
                .get(*index)
                .map(str::trim)
                .and_then(|value| value.parse().ok())
                .unwrap_or(0);
            counts[slot] += flag;
        }
    }

    Ok(AnnotationDataset { tweets, counts })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CleaningReport {
    /// Cleaned tweet texts, one row per line.
    pub text: String,
    /// Base64 encoded bar chart of the annotation totals.
    pub image: String,
}

pub struct ReportService<'a> {
    kamus: &'a KamusAlayRepository,
}

impl<'a> ReportService<'a> {
    pub fn new(kamus: &'a KamusAlayRepository) -> Self {
        Self { kamus }
    }

    pub async fn build(&self, bytes: &[u8]) -> AppResult<CleaningReport> {
        let dataset = parse_dataset(bytes)?;
        let dictionary = self.kamus.get_map().await?;

        let cleaned: Vec<String> = dataset
            .tweets
            .iter()
            .map(|tweet| cleaning_service::normalize(tweet, &dictionary))
            .collect();

        let svg = chart::render_bar_chart(&CHART_LABELS, &dataset.counts)?;

        Ok(CleaningReport {
            text: cleaned.join("\n"),
            image: STANDARD.encode(svg.as_bytes()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_dataset, ANNOTATION_COLUMNS, TWEET_COLUMN};
    use crate::middleware::error::AppError;

    fn dataset_with_rows(rows: &[(&str, [u8; 11])]) -> Vec<u8> {
        let mut header = vec![TWEET_COLUMN.to_string()];
        header.extend(ANNOTATION_COLUMNS.iter().map(|c| c.to_string()));
        let mut lines = vec![header.join("~!~")];
        for (tweet, flags) in rows {
            let mut fields = vec![tweet.to_string()];
            fields.extend(flags.iter().map(|f| f.to_string()));
            lines.push(fields.join("~!~"));
        }
        lines.join("\n").into_bytes()
    }

    #[test]
    fn sums_all_zero_columns_to_zero() {
        let bytes = dataset_with_rows(&[("halo", [0; 11]), ("dunia", [0; 11])]);
        let dataset = parse_dataset(&bytes).unwrap();
        assert_eq!(dataset.counts, [0; 11]);
        assert_eq!(dataset.tweets.len(), 2);
    }

    #[test]
    fn sums_all_one_columns_to_row_count() {
        let rows: Vec<(&str, [u8; 11])> = (0..5).map(|_| ("kata", [1; 11])).collect();
        let bytes = dataset_with_rows(&rows);
        let dataset = parse_dataset(&bytes).unwrap();
        assert_eq!(dataset.counts, [5; 11]);
    }

    #[test]
    fn sums_each_column_independently() {
        let mut flags_a = [0u8; 11];
        flags_a[0] = 1; // Abusive
        let mut flags_b = [0u8; 11];
        flags_b[0] = 1;
        flags_b[10] = 1; // HS_Strong
        let bytes = dataset_with_rows(&[("a", flags_a), ("b", flags_b)]);
        let dataset = parse_dataset(&bytes).unwrap();
        assert_eq!(dataset.counts[0], 2);
        assert_eq!(dataset.counts[10], 1);
        assert_eq!(dataset.counts[1..10], [0; 9]);
    }

    #[test]
    fn keeps_free_text_with_commas_intact() {
        let bytes = dataset_with_rows(&[("halo, apa kabar?", [0; 11])]);
        let dataset = parse_dataset(&bytes).unwrap();
        assert_eq!(dataset.tweets[0], "halo, apa kabar?");
    }

    #[test]
    fn missing_annotation_column_is_an_error() {
        let bytes = b"Tweet~!~Abusive\nhalo~!~1".to_vec();
        let err = parse_dataset(&bytes).unwrap_err();
        assert_eq!(
            err,
            AppError::ColumnMissing {
                column: "HS_Individual".to_string()
            }
        );
    }

    #[test]
    fn missing_tweet_column_is_an_error() {
        let bytes = b"Text~!~Abusive\nhalo~!~1".to_vec();
        let err = parse_dataset(&bytes).unwrap_err();
        assert_eq!(
            err,
            AppError::ColumnMissing {
                column: TWEET_COLUMN.to_string()
            }
        );
    }

    #[test]
    fn empty_dataset_sums_to_zero() {
        let bytes = dataset_with_rows(&[]);
        let dataset = parse_dataset(&bytes).unwrap();
        assert_eq!(dataset.counts, [0; 11]);
        assert!(dataset.tweets.is_empty());
    }
}
