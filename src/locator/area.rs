use std::borrow::Cow;

/// Remove the first `start_marker ... end_marker` span (markers included)
/// from `buffer`, but only when `file_name` contains `class_name`.
///
/// Used to exclude generated sections of a particular class from checks.
/// Missing markers leave the buffer untouched.
#[must_use]
pub fn remove_named_area<'a>(
    file_name: &str,
    buffer: &'a str,
    class_name: &str,
    start_marker: &str,
    end_marker: &str,
) -> Cow<'a, str> {
    if class_name.is_empty()
        || start_marker.is_empty()
        || end_marker.is_empty()
        || !file_name.contains(class_name)
    {
        return Cow::Borrowed(buffer);
    }
    let Some(start) = buffer.find(start_marker) else {
        return Cow::Borrowed(buffer);
    };
    let search_from = start + start_marker.len();
    let Some(end) = buffer[search_from..]
        .find(end_marker)
        .map(|p| search_from + p + end_marker.len())
    else {
        return Cow::Borrowed(buffer);
    };

    let mut out = String::with_capacity(buffer.len() - (end - start));
    out.push_str(&buffer[..start]);
    out.push_str(&buffer[end..]);
    Cow::Owned(out)
}
