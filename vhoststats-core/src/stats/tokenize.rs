/// Split an access-log line into fields.
///
/// Fields are separated by whitespace, except that `[...]` and `"..."` groups
/// are kept whole (delimiters stripped) so timestamps and request lines
/// survive as single fields. An unterminated group runs to the end of line.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut rest = line.trim_start();

    while let Some(first) = rest.chars().next() {
        let close = match first {
            '[' => Some(']'),
            '"' => Some('"'),
            _ => None,
        };

        let (field, remainder) = match close {
            Some(close) => {
                let body = &rest[1..];
                match body.find(close) {
                    Some(end) => (&body[..end], &body[end + 1..]),
                    None => (body.trim_end(), ""),
                }
            }
            None => match rest.find(char::is_whitespace) {
                Some(end) => (&rest[..end], &rest[end..]),
                None => (rest, ""),
            },
        };

        fields.push(field);
        rest = remainder.trim_start();
    }

    fields
}
