use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::{Rng, seq::IndexedRandom};

const PATHS: [(&str, u8); 9] = [
    ("/", 10),
    ("/index.html", 20),
    ("/login", 10),
    ("/api/items", 30),
    ("/css/site.css", 10),
    ("/images/logo.png", 15),
    ("/images/banner.JPG", 5),
    ("/images/spinner.gif", 5),
    ("/photos/cat.Png", 3),
];
const USER_AGENTS: [(&str, u8); 7] = [
    (
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
        25,
    ),
    (
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        40,
    ),
    (
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_2) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
        20,
    ),
    ("Mozilla/4.0 (compatible; MSIE 8.0; Internet Explorer 8)", 5),
    ("mozilla firefox 1.0", 2),
    ("Opera/9.80 (X11; Linux x86_64) Presto/2.12.388", 5),
    ("curl/8.4.0", 3),
];
const STATUS: [(u16, u8); 5] = [(200, 70), (304, 10), (404, 10), (401, 5), (500, 5)];
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

pub const BAD_TIMESTAMPS: [&str; 3] = [
    "not-a-date",
    "2024-01-01T10:00:00Z",
    "13/45/2024 99:99:99",
];

// Timestamp format for log rows: 01/31/2024 13:05:59
const TS_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// One generated row, in the column order log-analyzer reads.
pub type Row = Vec<String>;

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid base date")
}

pub fn generate_access_row<R: Rng + ?Sized>(rng: &mut R) -> Row {
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let user_agent = USER_AGENTS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let offset = Duration::seconds(rng.random_range(0..7 * SECONDS_PER_DAY));
    let timestamp = (base_time() + offset).format(TS_FORMAT);
    let size = if status == 304 { 0 } else { rng.random_range(100..20_000) };

    vec![
        path.to_string(),
        timestamp.to_string(),
        user_agent.to_string(),
        status.to_string(),
        size.to_string(),
    ]
}

/// A row log-analyzer will skip in full (too few fields) or only for the
/// hour-of-day tally (unparseable timestamp).
pub fn generate_malformed_row<R: Rng + ?Sized>(rng: &mut R) -> Row {
    let mut row = generate_access_row(rng);
    if rng.random_bool(0.5) {
        row.truncate(rng.random_range(1..5));
    } else {
        row[1] = BAD_TIMESTAMPS
            .choose(rng)
            .copied()
            .unwrap_or("not-a-date")
            .to_string();
    }
    row
}
