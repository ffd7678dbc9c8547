use super::hex::HexBytes;

/// Find the offset of the first exact occurrence of `window` within `data`.
/// Returns None if it occurs nowhere, including when `window` is longer than
/// `data`.
pub fn find_window(data: &[u8], window: &[u8]) -> Option<usize> {
    log::trace!(
        "find_window: data: {}  w: {}",
        HexBytes(data),
        HexBytes(window)
    );
    let last = data.len().checked_sub(window.len())?;
    for pos in 0..=last {
        if &data[pos..pos + window.len()] == window {
            log::debug!("found window @ {:4}: {}", pos, HexBytes(window));
            return Some(pos);
        }
    }
    None
}

/// Find the smallest offset whose `window_len`-byte window does not recur
/// anywhere after its own start offset. Returns None if every window recurs,
/// or when `window_len` exceeds the data length.
pub fn find_unique(data: &[u8], window_len: usize) -> Option<usize> {
    let last = data.len().checked_sub(window_len)?;
    for pos in 0..=last {
        let window = &data[pos..pos + window_len];
        log::debug!("checking window[{:4}]: {}", pos, HexBytes(window));
        // The remainder starts one past the window's own start, not past its
        // end, so a recurrence overlapping the window still disqualifies it.
        let remainder = data.get(pos + 1..).unwrap_or(&[]);
        match find_window(remainder, window) {
            None => return Some(pos),
            Some(rel) => {
                // rel is relative to pos + 1.
                log::debug!(
                    "found match @ {:4}: {}",
                    pos + 1 + rel,
                    HexBytes(&remainder[rel..rel + window_len])
                );
            }
        }
    }
    None
}
