use crate::types::{Segment, SilenceInterval, START_OFFSET};

/// What a silence means for the outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Boundary {
    Chapter,
    Part,
    Insignificant,
}

impl Boundary {
    pub(super) fn classify(pause_duration: f64, chapter_timeout: f64, part_timeout: f64) -> Self {
        if pause_duration >= chapter_timeout {
            Boundary::Chapter
        } else if pause_duration >= part_timeout {
            Boundary::Part
        } else {
            Boundary::Insignificant
        }
    }
}

/// Position of the span that is currently open
struct Cursor {
    offset: String,
    offset_seconds: f64,
    chapter_num: u32,
    part_num: u32,
    running_chapter_duration: f64,
}

impl Cursor {
    fn new() -> Self {
        Self {
            offset: START_OFFSET.to_string(),
            offset_seconds: 0.0,
            chapter_num: 1,
            part_num: 1,
            running_chapter_duration: 0.0,
        }
    }

    /// Close the open span at the start of `silence`.
    fn close(&mut self, silence: &SilenceInterval) -> Segment {
        let duration = silence.from_seconds - self.offset_seconds;
        self.running_chapter_duration += duration;
        Segment {
            offset: std::mem::take(&mut self.offset),
            offset_seconds: self.offset_seconds,
            chapter_num: self.chapter_num,
            part_num: Some(self.part_num),
            duration,
            total_chapter_duration: self.running_chapter_duration,
            omit: false,
        }
    }

    fn apply(&mut self, boundary: Boundary, closed: &mut Segment) {
        match boundary {
            Boundary::Chapter => {
                self.chapter_num += 1;
                if closed.part_num == Some(1) {
                    closed.part_num = None;
                }
                self.part_num = 1;
                self.running_chapter_duration = 0.0;
            }
            Boundary::Part => self.part_num += 1,
            Boundary::Insignificant => closed.omit = true,
        }
    }

    fn reopen_after(&mut self, silence: &SilenceInterval) {
        self.offset = silence.until_offset.clone();
        self.offset_seconds = silence.until_seconds;
    }
}

/// First pass: one segment per silence, each covering the content that ends
/// where the silence begins. The content after the last silence is not
/// emitted.
pub fn segment(
    intervals: &[SilenceInterval],
    chapter_timeout: f64,
    part_timeout: f64,
) -> Vec<Segment> {
    let mut cursor = Cursor::new();
    let mut segments = Vec::with_capacity(intervals.len());

    for silence in intervals {
        let mut closed = cursor.close(silence);
        let boundary = Boundary::classify(silence.pause_duration, chapter_timeout, part_timeout);
        cursor.apply(boundary, &mut closed);
        segments.push(closed);
        cursor.reopen_after(silence);
    }

    segments
}
