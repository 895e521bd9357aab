//! Stream-to-file download primitive.

use std::fs::FileTimes;
use std::path::Path;
use std::time::{Duration, UNIX_EPOCH};

use futures::{Stream, StreamExt};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::Result;

/// Copy a byte stream into a file at `path`, overwriting any existing file.
///
/// When `timestamp` (unix seconds) is given, the call returns only after the
/// file's access and modification times have been set to it. On a stream or
/// io error the partially written file is left in place.
pub async fn stream_to_file<S, B>(mut stream: S, path: &Path, timestamp: Option<i64>) -> Result<()>
where
    S: Stream<Item = Result<B>> + Unpin,
    B: AsRef<[u8]>,
{
    let mut file = File::create(path).await?;

    while let Some(chunk) = stream.next().await {
        file.write_all(chunk?.as_ref()).await?;
    }

    file.flush().await?;
    drop(file);

    if let Some(timestamp) = timestamp {
        set_file_times(path, timestamp)?;
    }

    Ok(())
}

/// Set a file's access and modification times to a unix timestamp.
/// Timestamps before 1970 clamp to the epoch.
fn set_file_times(path: &Path, timestamp: i64) -> std::io::Result<()> {
    let time = if timestamp >= 0 {
        UNIX_EPOCH + Duration::from_secs(timestamp as u64)
    } else {
        UNIX_EPOCH
    };

    let times = FileTimes::new().set_accessed(time).set_modified(time);
    std::fs::File::options().write(true).open(path)?.set_times(times)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use futures::stream;

    fn chunks(parts: &[&[u8]]) -> Vec<Result<Vec<u8>>> {
        parts.iter().map(|part| Ok(part.to_vec())).collect()
    }

    #[tokio::test]
    async fn writes_all_chunks_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");

        let input = chunks(&[b"hello", b" ", b"world"]);
        stream_to_file(stream::iter(input), &path, None)
            .await
            .unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"hello world");
    }

    #[tokio::test]
    async fn sets_modification_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stamped.bin");
        let timestamp = 1_601_500_000i64;

        let input = chunks(&[b"data"]);
        stream_to_file(stream::iter(input), &path, Some(timestamp))
            .await
            .unwrap();

        let modified = std::fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(
            modified,
            UNIX_EPOCH + Duration::from_secs(timestamp as u64)
        );
    }

    #[tokio::test]
    async fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        std::fs::write(&path, b"previous contents, longer than the new ones").unwrap();

        let input = chunks(&[b"new"]);
        stream_to_file(stream::iter(input), &path, None)
            .await
            .unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn stream_error_leaves_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.bin");

        let input: Vec<Result<Vec<u8>>> = vec![
            Ok(b"par".to_vec()),
            Err(Error::Download("stream interrupted".into())),
        ];
        let result = stream_to_file(stream::iter(input), &path, Some(1_601_500_000)).await;

        assert!(result.is_err());
        assert_eq!(std::fs::read(&path).unwrap(), b"par");
    }
}
