//! Pretty-printing for raw tag records.

/// Render an already-filtered field list as a `ctag=` line.
///
/// Each field prints as `name => "value"`; fields past the first continue on
/// their own line, indented with a tab. An empty list renders `ctag=[]`.
pub fn ctag_line<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::from("ctag=[");
    for (i, (name, value)) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push_str(",\n\t");
        }
        out.push_str(name);
        out.push_str(" => \"");
        out.push_str(value);
        out.push('"');
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_field() {
        assert_eq!(ctag_line([("name", "parse")]), "ctag=[name => \"parse\"]");
    }

    #[test]
    fn test_multiple_fields_break_onto_indented_lines() {
        let line = ctag_line([("name", "parse"), ("kind", "function")]);
        assert_eq!(line, "ctag=[name => \"parse\",\n\tkind => \"function\"]");
    }

    #[test]
    fn test_empty_field_list() {
        assert_eq!(ctag_line(std::iter::empty::<(&str, &str)>()), "ctag=[]");
    }
}
