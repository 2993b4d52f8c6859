use heapless::String;

/// Copy `value` into a fixed-capacity string, cutting at the last char
/// boundary that fits. Returns `true` when the value was cut.
pub(crate) fn copy_truncated<const N: usize>(out: &mut String<N>, value: &str) -> bool {
    out.clear();
    let mut end = value.len().min(N);
    while end > 0 && !value.is_char_boundary(end) {
        end -= 1;
    }
    // `end <= N` and lies on a char boundary, so the push cannot fail.
    let _ = out.push_str(&value[..end]);
    end < value.len()
}

pub(crate) fn truncated<const N: usize>(value: &str) -> (String<N>, bool) {
    let mut out = String::new();
    let cut = copy_truncated(&mut out, value);
    (out, cut)
}
