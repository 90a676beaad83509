use crate::types::{ProcessedVideo, VideoRecord};

/// Format a processed video as human-readable markdown.
pub fn format_result_readable(video: &ProcessedVideo) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# {} {} video\n\n",
        video.source_type.badge(),
        video.source_type.label()
    ));

    output.push_str("## Transcript\n\n");
    output.push_str(video.transcript.trim());
    output.push_str("\n\n");

    output.push_str("## Summary\n\n");
    output.push_str(&video.summary.brief);
    output.push_str("\n\n");

    output.push_str("## Key Points\n\n");
    for (i, point) in video.summary.key_points.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, point));
    }

    output
}

/// Format one search hit as a compact single-record block.
pub fn format_record_readable(record: &VideoRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}  {}\n",
        record.source_type.badge(),
        record.source_type.label(),
        record.url
    ));
    output.push_str(&format!("   processed: {}\n", record.processed_at));

    if let Some(preview) = record
        .transcript_preview
        .as_deref()
        .or(record.transcript.as_deref())
    {
        output.push_str(&format!("   {}\n", preview.trim()));
    }
    if let Some(summary) = &record.summary {
        if !summary.brief.is_empty() {
            output.push_str(&format!("   summary: {}\n", summary.brief));
        }
    }

    output
}
