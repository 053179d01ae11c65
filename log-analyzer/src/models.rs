/// One access-log row, bound positionally: `path, timestamp, userAgent, status, size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub path: &'a str,
    pub timestamp: &'a str,
    pub user_agent: &'a str,
    // not used by the summary
    #[allow(dead_code)]
    pub status: &'a str,
    #[allow(dead_code)]
    pub size: &'a str,
}

impl<'a> LogRecord<'a> {
    /// Binds the first five fields. Rows with fewer fields yield `None`; extra
    /// fields are ignored.
    pub fn from_fields<I>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter();
        Some(Self {
            path: fields.next()?,
            timestamp: fields.next()?,
            user_agent: fields.next()?,
            status: fields.next()?,
            size: fields.next()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    #[test]
    fn short_rows_are_rejected() {
        assert_that!(LogRecord::from_fields(["a.jpg", "01/01/2024 10:00:00", "Firefox"]))
            .is_none();
        assert_that!(LogRecord::from_fields(Vec::<&str>::new())).is_none();
    }

    #[test]
    fn extra_fields_are_ignored() {
        let record =
            LogRecord::from_fields(["/a", "ts", "ua", "200", "512", "extra", "more"]).unwrap();
        assert_eq!(
            record,
            LogRecord {
                path: "/a",
                timestamp: "ts",
                user_agent: "ua",
                status: "200",
                size: "512",
            }
        );
    }
}
