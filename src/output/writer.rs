//! Output writer for videos, ingest summaries and source listings

use serde::Serialize;

use crate::app::{IngestSummary, SourceStatus};
use crate::domain::model::Video;
use crate::error::{AerialError, AerialResult};
use crate::manifest::schema::VideoAsset;
use crate::output::OutputFormat;

/// Result of an ingest command as serialized for json/yaml
#[derive(Debug, Serialize)]
struct IngestDocument<'a> {
    sources: &'a [IngestSummary],
    videos: &'a [Video],
}

/// Renders command results in the selected format
#[derive(Debug, Clone, Copy)]
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> AerialResult<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => serde_yaml::to_string(value).map_err(|e| AerialError::OutputError {
                message: format!("YAML serialization failed: {}", e),
            }),
            OutputFormat::Text => Err(AerialError::OutputError {
                message: "text output is not structured".to_string(),
            }),
        }
    }

    /// Catalog built by an ingest run
    pub fn render_ingest(&self, summaries: &[IngestSummary], videos: &[Video]) -> AerialResult<String> {
        if self.format != OutputFormat::Text {
            return self.serialize(&IngestDocument { sources: summaries, videos });
        }

        let mut output = String::new();
        for summary in summaries {
            output.push_str(&format!(
                "# {}: {}, {} videos ({} decoded, {} merged, {} skipped)\n",
                summary.source,
                summary.status,
                summary.videos,
                summary.stats.decoded,
                summary.stats.merged,
                summary.stats.skipped.len()
            ));
        }
        output.push_str(&self.render_videos(videos)?);
        Ok(output)
    }

    /// Video list, one line per video in text mode
    pub fn render_videos(&self, videos: &[Video]) -> AerialResult<String> {
        if self.format != OutputFormat::Text {
            return self.serialize(videos);
        }

        let mut output = String::new();
        for video in videos {
            let formats: Vec<&str> = video
                .urls
                .available()
                .iter()
                .map(|format| format.label())
                .collect();
            output.push_str(&format!(
                "{}  {}  [{}, {}]  {}\n",
                video.id,
                video.display_name(),
                video.time_of_day,
                video.scene,
                formats.join(" ")
            ));
        }
        output.push_str(&format!("{} videos\n", videos.len()));
        Ok(output)
    }

    /// Raw asset records of a cached document
    pub fn render_assets(&self, assets: &[VideoAsset]) -> AerialResult<String> {
        if self.format != OutputFormat::Text {
            return self.serialize(assets);
        }

        let mut output = String::new();
        for asset in assets {
            output.push_str(&format!("{}  {}\n", asset.id, asset.accessibility_label));
        }
        output.push_str(&format!("{} assets\n", assets.len()));
        Ok(output)
    }

    /// Configured sources with their cache state
    pub fn render_sources(&self, statuses: &[SourceStatus]) -> AerialResult<String> {
        if self.format != OutputFormat::Text {
            return self.serialize(statuses);
        }

        let mut output = String::new();
        for status in statuses {
            let state = match (status.enabled, status.cached) {
                (false, _) => "disabled",
                (true, true) => "cached",
                (true, false) => "not cached",
            };
            output.push_str(&format!(
                "{:<24} {:<8} {:<10} {:<10} {:>10}  {}\n",
                status.name,
                status.schema.to_string(),
                state,
                status.last_updated,
                status.disk_usage_display(),
                status.description
            ));
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::IngestStatus;
    use crate::domain::model::*;

    fn video() -> Video {
        let mut urls = VideoUrls::with_slots(&VideoFormat::ALL);
        urls.set(VideoFormat::V1080pH264, "http://a/1.mov");
        Video {
            id: "A".to_string(),
            name: "Hawaii".to_string(),
            secondary_name: "Waikiki".to_string(),
            kind: "video".to_string(),
            time_of_day: "day".to_string(),
            scene: "landscape".to_string(),
            urls,
            source: "tvOS 12".to_string(),
            poi: PoiMap::new(),
            community_poi: PoiMap::new(),
        }
    }

    #[test]
    fn test_text_videos() {
        let output = OutputWriter::new(OutputFormat::Text)
            .render_videos(&[video()])
            .unwrap();
        assert!(output.contains("A  Hawaii - Waikiki  [day, landscape]  1080p-H264"));
        assert!(output.ends_with("1 videos\n"));
    }

    #[test]
    fn test_json_videos_keep_every_slot() {
        let output = OutputWriter::new(OutputFormat::Json)
            .render_videos(&[video()])
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed[0]["urls"]["1080p-H264"], "http://a/1.mov");
        assert_eq!(parsed[0]["urls"]["4K-SDR-240FPS"], "");
        assert_eq!(parsed[0]["type"], "video");
    }

    #[test]
    fn test_text_ingest_summary_status() {
        let summary = IngestSummary {
            source: "tvOS 12".to_string(),
            status: IngestStatus::ParseFailure("tvOS 12: expected value".to_string()),
            videos: 0,
            stats: Default::default(),
        };
        let output = OutputWriter::new(OutputFormat::Text)
            .render_ingest(&[summary], &[])
            .unwrap();

        assert!(output.starts_with("# tvOS 12: parse failure (tvOS 12: expected value), 0 videos"));
        assert!(!output.contains("ParseFailure("));
    }

    #[test]
    fn test_yaml_videos() {
        let output = OutputWriter::new(OutputFormat::Yaml)
            .render_videos(&[video()])
            .unwrap();
        assert!(output.contains("id: A"));
        assert!(output.contains("secondary_name: Waikiki"));
    }
}
