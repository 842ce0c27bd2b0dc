/// Value of the first `name` pair in a decoded query string. Later repeats of
/// the same key are ignored.
pub fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_key_is_none() {
        assert_eq!(first_param(&params(&[("other", "1")]), "pageNumber"), None);
    }

    #[test]
    fn repeated_key_takes_first_value() {
        let params = params(&[("q", "alice"), ("q", "bob")]);
        assert_eq!(first_param(&params, "q"), Some("alice"));
    }

    #[test]
    fn key_match_is_exact() {
        let params = params(&[("pagenumber", "4"), ("pageNumber", "2")]);
        assert_eq!(first_param(&params, "pageNumber"), Some("2"));
    }
}
