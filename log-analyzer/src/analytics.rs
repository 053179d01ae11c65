use std::collections::BTreeMap;

use csv::StringRecord;
use tracing::trace;

use crate::{
    invariants::{Browser, Hour},
    models::LogRecord,
    worker::{detect_browser, is_image_path, parse_hour},
};

/// Counters accumulated over one pass of the log.
///
/// Image, browser and hour tallies are independent of one another; each is
/// bounded above by `total_hits` but none of them has to add up to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    image_hits: usize,
    total_hits: usize,
    // first-seen order, used to break ties in `most_popular_browser`
    browser_counts: Vec<(Browser, usize)>,
    hourly_hits: BTreeMap<Hour, usize>,
}

impl AnalysisResult {
    pub fn record(&mut self, record: &LogRecord<'_>) {
        self.total_hits += 1;
        if is_image_path(record.path) {
            self.image_hits += 1;
        }
        if let Some(browser) = detect_browser(record.user_agent) {
            self.record_browser(browser);
        }
        match parse_hour(record.timestamp) {
            Some(hour) => self.record_hour_hit(hour),
            None => trace!(timestamp = record.timestamp, "skipping hour for row"),
        }
    }
    fn record_browser(&mut self, name: &str) {
        match self
            .browser_counts
            .iter_mut()
            .find(|(browser, _)| browser.as_str() == name)
        {
            Some((_, count)) => *count += 1,
            None => self.browser_counts.push((name.into(), 1)),
        }
    }
    fn record_hour_hit(&mut self, hour: Hour) {
        *self.hourly_hits.entry(hour).or_default() += 1;
    }

    pub fn image_hits(&self) -> usize {
        self.image_hits
    }
    pub fn total_hits(&self) -> usize {
        self.total_hits
    }
    pub fn browser_counts(&self) -> impl Iterator<Item = (&Browser, usize)> {
        self.browser_counts.iter().map(|(b, n)| (b, *n))
    }
    pub fn hourly_hits(&self) -> &BTreeMap<Hour, usize> {
        &self.hourly_hits
    }
    pub fn hits_at(&self, hour: Hour) -> usize {
        self.hourly_hits.get(&hour).copied().unwrap_or_default()
    }

    /// `None` until at least one row has been counted.
    pub fn image_percentage(&self) -> Option<f64> {
        (self.total_hits > 0).then(|| self.image_hits as f64 / self.total_hits as f64 * 100.0)
    }

    /// Browser with the most hits. On a tie the one seen first in the log wins.
    pub fn most_popular_browser(&self) -> Option<(&Browser, usize)> {
        self.browser_counts()
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
    }
}

/// Single pass over the rows. Rows with fewer than five fields are dropped
/// without touching any counter. A failing row source aborts the pass and
/// nothing accumulated so far is returned.
pub fn analyze<I, E>(rows: I) -> Result<AnalysisResult, E>
where
    I: IntoIterator<Item = Result<StringRecord, E>>,
{
    rows.into_iter()
        .try_fold(AnalysisResult::default(), |mut result, row| {
            let row = row?;
            match LogRecord::from_fields(&row) {
                Some(record) => result.record(&record),
                None => trace!(fields = row.len(), "skipping short row"),
            }
            Ok(result)
        })
}
