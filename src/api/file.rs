//! Offline source backed by a JSON dump of the feed.

use crate::api::SosApi;
use crate::api::error::ApiError;
use crate::sos::aggregate::stats_from_records;
use crate::sos::{ApiResponse, ApiStats, Pagination, SosRecord};
use std::fs;
use std::path::{Path, PathBuf};

/// Serves a local dump page by page, the same way the feed would.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    records: Vec<SosRecord>,
    stats: ApiStats,
}

impl FileSource {
    pub fn load(path: &Path) -> Result<Self, ApiError> {
        let buf = fs::read(path)?;
        Self::from_slice(path, &buf)
    }

    fn from_slice(path: &Path, buf: &[u8]) -> Result<Self, ApiError> {
        // A dump is either a bare array of records or a saved feed page.
        let (records, stats) = if starts_with_array(buf) {
            (serde_json::from_slice::<Vec<SosRecord>>(buf)?, None)
        } else {
            let page: ApiResponse = serde_json::from_slice(buf)?;
            (page.data, page.stats)
        };
        // A dump is a complete result set, so stats are recomputed unless it carried its own.
        let stats = stats.unwrap_or_else(|| stats_from_records(&records));
        Ok(Self {
            path: path.to_path_buf(),
            records,
            stats,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn starts_with_array(buf: &[u8]) -> bool {
    buf.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'[')
}

#[async_trait::async_trait]
impl SosApi for FileSource {
    fn source_label(&self) -> String {
        format!("File ({})", self.path.display())
    }

    async fn fetch_page(&self, page: u32, limit: u32) -> Result<ApiResponse, ApiError> {
        let limit = limit.max(1);
        let total_count = self.records.len();
        let total_pages = total_count.div_ceil(limit as usize).max(1) as u32;
        let start = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
        let data: Vec<SosRecord> = self
            .records
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(ApiResponse {
            success: true,
            data,
            pagination: Pagination {
                current_page: page,
                total_pages,
                total_count: total_count as u64,
                limit,
                has_next_page: page < total_pages,
                has_prev_page: page > 1,
            },
            stats: Some(self.stats.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn records_json(count: usize) -> String {
        let records: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"id": {}, "district": "D{}", "status": "PENDING", "numberOfPeople": 1}}"#,
                    i,
                    i % 2
                )
            })
            .collect();
        format!("[{}]", records.join(","))
    }

    #[tokio::test]
    async fn test_bare_array_is_paged() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", records_json(5)).unwrap();

        let source = FileSource::load(file.path()).unwrap();
        assert_eq!(source.len(), 5);

        let first = source.fetch_page(1, 2).await.unwrap();
        assert!(first.success);
        assert_eq!(first.data.len(), 2);
        assert_eq!(first.pagination.total_pages, 3);
        assert!(first.pagination.has_next_page);
        assert!(!first.pagination.has_prev_page);

        let last = source.fetch_page(3, 2).await.unwrap();
        assert_eq!(last.data.len(), 1);
        assert_eq!(last.data[0].id, 4);
        assert!(!last.pagination.has_next_page);
        assert!(!last.exceeds_limit());

        // Stats are computed over the whole dump, not the page.
        let stats = last.stats.unwrap();
        assert_eq!(stats.total_people, 5);
        assert_eq!(stats.by_status.get("PENDING"), Some(&5));
    }

    #[tokio::test]
    async fn test_envelope_keeps_its_stats() {
        let json = r#"{
            "success": true,
            "data": [{"id": 1, "district": "A"}],
            "stats": {"totalPeople": 77, "missingPeopleCount": 0, "byStatus": {}, "byPriority": {}}
        }"#;
        let source = FileSource::from_slice(Path::new("dump.json"), json.as_bytes()).unwrap();
        let page = source.fetch_page(1, 100).await.unwrap();
        assert_eq!(page.stats.unwrap().total_people, 77);
        assert_eq!(source.source_label(), "File (dump.json)");
    }

    #[tokio::test]
    async fn test_empty_dump_still_has_one_page() {
        let source = FileSource::from_slice(Path::new("empty.json"), b"[]").unwrap();
        let page = source.fetch_page(1, 100).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.pagination.total_count, 0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FileSource::load(Path::new("/nonexistent/dump.json")).unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }

    #[test]
    fn test_bad_record_reports_the_real_cause() {
        let json = br#"  [{"id": 1, "district": "A"}, {"id": 2, "numberOfPeople": "many"}]"#;
        let err = FileSource::from_slice(Path::new("bad.json"), json).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(message.contains("invalid type"), "{}", message);
        assert!(!message.contains("untagged"), "{}", message);

        let envelope = br#"{"success": true, "data": [{"id": "x"}]}"#;
        let message = FileSource::from_slice(Path::new("bad.json"), envelope)
            .unwrap_err()
            .to_string();
        assert!(message.contains("invalid type"), "{}", message);
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = FileSource::from_slice(Path::new("bad.json"), b"not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
