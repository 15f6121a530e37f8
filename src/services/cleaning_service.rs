use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::database::repositories::kamus_alay::KamusAlayRepository;
use crate::interfaces::repositories::kamus_alay::KamusAlayRepositoryInterface;
use crate::middleware::error::AppResult;

static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new("[^0-9a-zA-Z]+").unwrap());
// Leftovers of the scraping pipeline: retweet markers, anonymized mentions
// and \xNN escape fragments of stripped emoji.
static SCRAPE_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new("user|rt").unwrap());
static BYTE_ESCAPE: Lazy<Regex> = Lazy::new(|| Regex::new("x[a-z0-9]{2}").unwrap());
static REPEATED_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(" +").unwrap());

/// Regex half of the cleaning pass: lowercase, fold newlines, strip
/// everything that is not alphanumeric, drop scraping artifacts and collapse
/// the spaces left behind. Pure, no dictionary involved.
pub fn scrub(text: &str) -> String {
    let text = text.to_lowercase();
    let text = text.trim();
    let text = text.replace('\n', " ");
    let text = NON_ALPHANUMERIC.replace_all(&text, " ");
    let text = SCRAPE_NOISE.replace_all(&text, " ");
    let text = BYTE_ESCAPE.replace_all(&text, " ");
    let text = REPEATED_SPACES.replace_all(&text, " ");
    text.into_owned()
}

/// Full normalization: scrub, then rewrite every token that has a dictionary
/// entry. Unknown tokens pass through unchanged.
pub fn normalize(text: &str, dictionary: &HashMap<String, String>) -> String {
    let scrubbed = scrub(text);
    let words: Vec<&str> = scrubbed
        .split(' ')
        .map(|word| match dictionary.get(word) {
            Some(formal) => formal.as_str(),
            None => word,
        })
        .collect();
    words.join(" ")
}

pub struct CleaningService<'a> {
    kamus: &'a KamusAlayRepository,
}

impl<'a> CleaningService<'a> {
    pub fn new(kamus: &'a KamusAlayRepository) -> Self {
        Self { kamus }
    }

    /// Cleans one piece of text against the current dictionary. The
    /// dictionary is re-read from the store on every call; there is no cache
    /// to invalidate when entries change.
    pub async fn clean(&self, text: &str) -> AppResult<String> {
        let dictionary = self.kamus.get_map().await?;
        Ok(normalize(text, &dictionary))
    }
}
