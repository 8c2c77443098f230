use tracing::trace;

use crate::types::Segment;

/// Second pass: fold chapters that ended up shorter than
/// `max_chapter_duration` back into the chapter before them.
///
/// A short chapter is dissolved in place. Its opening segments lose their
/// part number and become visible again, its later parts are hidden.
/// Chapter numbers and running totals are left untouched.
pub fn merge(mut segments: Vec<Segment>, max_chapter_duration: f64) -> Vec<Segment> {
    let mut current_chapter = 1;

    for index in 0..segments.len() {
        let chapter_num = segments[index].chapter_num;
        if chapter_num != current_chapter
            && index != 0
            && segments[index - 1].total_chapter_duration < max_chapter_duration
        {
            trace!(
                chapter = current_chapter,
                total = segments[index - 1].total_chapter_duration,
                "dissolving short chapter"
            );
            dissolve_chapter(&mut segments[..index], current_chapter);
        }
        current_chapter = chapter_num;
    }

    segments
}

/// Walk backward from the end of `segments` over the trailing run that
/// belongs to `chapter_num`.
fn dissolve_chapter(segments: &mut [Segment], chapter_num: u32) {
    for segment in segments.iter_mut().rev() {
        if segment.chapter_num != chapter_num {
            break;
        }
        match segment.part_num {
            None | Some(1) => {
                segment.part_num = None;
                segment.omit = false;
            }
            Some(_) => segment.omit = true,
        }
    }
}
