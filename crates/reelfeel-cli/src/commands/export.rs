use color_eyre::eyre::Context;
use color_eyre::Result;
use diary_sentiment_models::WordCloudEntry;
use std::path::Path;

/// Write the ranked word cloud as `token,count` rows
pub fn write_word_cloud_csv(path: &Path, entries: &[WordCloudEntry]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(["token", "count"])?;
    for entry in entries {
        writer.write_record([entry.token.as_str(), entry.count.to_string().as_str()])?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), rows = entries.len(), "Wrote word cloud CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_word_cloud_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloud.csv");
        let entries = vec![
            WordCloudEntry::new("movie", 2),
            WordCloudEntry::new("great", 1),
            WordCloudEntry::new("comma,word", 1),
        ];

        write_word_cloud_csv(&path, &entries).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "token,count\nmovie,2\ngreat,1\n\"comma,word\",1\n");
    }

    #[test]
    fn test_empty_word_cloud_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_word_cloud_csv(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "token,count\n");
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("cloud.csv");
        assert!(write_word_cloud_csv(&path, &[]).is_err());
    }
}
