//! Iterator over `name=value` pairs of a URI query.

/// Borrowed `(name, value)` pairs of a URI query, in order.
///
/// Every `&`-terminated pair is yielded, including empty ones. The final
/// pair is yielded only when its name or value is non-empty, so a trailing
/// `&` does not produce an extra pair.
#[derive(Debug, Clone)]
pub struct QueryPairs<'a> {
    rest: Option<&'a str>,
}

/// Iterates the query pairs of `uri`. Yields nothing if `uri` has no `?`.
pub fn query_pairs(uri: &str) -> QueryPairs<'_> {
    QueryPairs {
        rest: uri.split_once('?').map(|(_, query)| query),
    }
}

impl<'a> Iterator for QueryPairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.rest?;
            let (pair, terminated) = match rest.split_once('&') {
                Some((pair, tail)) => {
                    self.rest = Some(tail);
                    (pair, true)
                }
                None => {
                    self.rest = None;
                    (rest, false)
                }
            };
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            if terminated || !name.is_empty() || !value.is_empty() {
                return Some((name, value));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(uri: &str) -> Vec<(&str, &str)> {
        query_pairs(uri).collect()
    }

    #[test]
    fn no_query() {
        assert!(collect("https://h/p").is_empty());
    }

    #[test]
    fn empty_query() {
        assert!(collect("https://h/p?").is_empty());
    }

    #[test]
    fn terminated_empty_pairs_are_kept() {
        assert_eq!(collect("https://h/p?&a=1"), vec![("", ""), ("a", "1")]);
        assert_eq!(collect("https://h/p?a=1&"), vec![("a", "1")]);
    }

    #[test]
    fn trailing_pair_with_only_name_or_value() {
        assert_eq!(collect("https://h/p?flag"), vec![("flag", "")]);
        assert_eq!(collect("https://h/p?=v"), vec![("", "v")]);
        assert!(collect("https://h/p?=").is_empty());
    }

    #[test]
    fn first_equals_splits() {
        assert_eq!(collect("https://h/p?a=b=c"), vec![("a", "b=c")]);
    }
}
