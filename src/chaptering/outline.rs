use crate::types::{Marker, Segment};

/// Render every visible segment as a titled marker, in order.
pub fn format(segments: &[Segment]) -> Vec<Marker> {
    segments
        .iter()
        .filter(|segment| !segment.omit)
        .map(|segment| Marker {
            title: title(segment),
            offset: segment.offset.clone(),
        })
        .collect()
}

fn title(segment: &Segment) -> String {
    match segment.part_num {
        Some(part) if part != 0 => format!("Chapter {}, part {}", segment.chapter_num, part),
        _ => format!("Chapter {}", segment.chapter_num),
    }
}
