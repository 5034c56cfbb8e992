//! Record sources: the seam between the host's catalog query and the model.
//!
//! The catalog query itself (statement text, driver, result set) is owned by
//! the enclosing database component. The model layer only drains records
//! through the `RecordSource` trait, one at a time, so hosts can stream rows
//! straight off a driver cursor or hand over a prefetched batch.

use std::collections::VecDeque;
use std::future::Future;

use futures::Stream;

use crate::error::Result;
use crate::record::CatalogRecord;

/// Asynchronous source of catalog records.
///
/// A source yields records until exhausted; a failing source surfaces a
/// data-access error and the load in progress is abandoned.
pub trait RecordSource: Send {
    /// Get the next record.
    ///
    /// Returns `Ok(None)` when exhausted.
    fn next(&mut self) -> impl Future<Output = Result<Option<CatalogRecord>>> + Send;

    /// Drain all remaining records into a vector.
    fn fetch_all(&mut self) -> impl Future<Output = Result<Vec<CatalogRecord>>> + Send {
        async move {
            let mut records = Vec::new();
            while let Some(record) = self.next().await? {
                records.push(record);
            }
            Ok(records)
        }
    }
}

/// In-memory record source over a prefetched batch.
///
/// Also the natural way to feed authored or synthetic records through the
/// same load path in tests. Each queued entry may be an error, letting hosts
/// replay a mid-query driver failure at the position it occurred.
#[derive(Debug, Default)]
pub struct VecSource {
    records: VecDeque<Result<CatalogRecord>>,
}

impl VecSource {
    /// Create a source over prefetched records.
    pub fn new(records: impl IntoIterator<Item = CatalogRecord>) -> Self {
        Self {
            records: records.into_iter().map(Ok).collect(),
        }
    }

    /// Create a source over per-record results.
    pub fn from_results(results: impl IntoIterator<Item = Result<CatalogRecord>>) -> Self {
        Self {
            records: results.into_iter().collect(),
        }
    }

    /// Number of records not yet drained.
    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

impl RecordSource for VecSource {
    async fn next(&mut self) -> Result<Option<CatalogRecord>> {
        match self.records.pop_front() {
            Some(Ok(record)) => Ok(Some(record)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }
}

/// Extension trait for converting a RecordSource to a Stream.
pub trait RecordSourceStreamExt: RecordSource + Sized {
    /// Convert this source into a Stream yielding `Result<CatalogRecord>`.
    fn into_stream(self) -> impl Stream<Item = Result<CatalogRecord>>;
}

impl<S: RecordSource + Unpin> RecordSourceStreamExt for S {
    fn into_stream(self) -> impl Stream<Item = Result<CatalogRecord>> {
        use futures::stream;

        stream::unfold(Some(self), |opt_source| async move {
            let mut source = opt_source?;
            match source.next().await {
                Ok(Some(record)) => Some((Ok(record), Some(source))),
                Ok(None) => None,
                Err(e) => Some((Err(e), Some(source))),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_vec_source_drains_in_order() {
        let mut source = VecSource::new(vec![
            CatalogRecord::new().with_str("name", "a"),
            CatalogRecord::new().with_str("name", "b"),
        ]);

        assert_eq!(source.remaining(), 2);
        let first = source.next().await.unwrap().unwrap();
        assert_eq!(first.safe_get_str("name"), Some("a"));

        let rest = source.fetch_all().await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].safe_get_str("name"), Some("b"));
        assert!(source.next().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_vec_source_surfaces_errors_in_place() {
        let mut source = VecSource::from_results(vec![
            Ok(CatalogRecord::new().with_str("name", "a")),
            Err(Error::data_access("connection reset")),
        ]);

        assert!(source.next().await.unwrap().is_some());
        assert!(matches!(
            source.next().await,
            Err(Error::DataAccess { .. })
        ));
    }

    #[tokio::test]
    async fn test_into_stream() {
        use futures::TryStreamExt;

        let source = VecSource::new(vec![
            CatalogRecord::new().with_str("name", "a"),
            CatalogRecord::new().with_str("name", "b"),
        ]);

        let names: Vec<String> = source
            .into_stream()
            .map_ok(|rec| rec.safe_get_str("name").unwrap_or_default().to_string())
            .try_collect()
            .await
            .unwrap();

        assert_eq!(names, vec!["a", "b"]);
    }
}
