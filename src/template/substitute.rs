use super::scan::Placeholders;
use crate::error::TemplateError;
use std::collections::VecDeque;

/// Replace the Nth placeholder of `text` with the Nth queued result.
///
/// Results are consumed strictly front to back; identical command text at two
/// positions still receives two independent values. The span count must match
/// the queue length exactly.
pub fn substitute(
    text: &str,
    mut results: VecDeque<String>,
) -> Result<String, TemplateError> {
    let available = results.len();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut spans = 0;

    for span in Placeholders::new(text) {
        let span = span?;
        spans += 1;
        let Some(result) = results.pop_front() else {
            continue;
        };
        out.push_str(&text[cursor..span.start]);
        out.push_str(&result);
        cursor = span.end;
    }

    if spans != available {
        return Err(TemplateError::SubstitutionMismatch {
            spans,
            results: available,
        });
    }
    out.push_str(&text[cursor..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(items: &[&str]) -> VecDeque<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_placeholders_is_identity() {
        let text = "# Title\n\nplain text with 100% coverage %>\n";
        assert_eq!(substitute(text, VecDeque::new()).unwrap(), text);
    }

    #[test]
    fn test_results_consumed_in_order() {
        let text = "A <% x %> B <% x %> C";
        let out = substitute(text, queue(&["first", "second"])).unwrap();
        assert_eq!(out, "A first B second C");
    }

    #[test]
    fn test_adjacent_and_edge_spans() {
        let out = substitute("<% a %><% b %>", queue(&["1", "2"])).unwrap();
        assert_eq!(out, "12");
    }

    #[test]
    fn test_result_text_is_not_rescanned() {
        let out = substitute("<% a %>!", queue(&["<% b %>"])).unwrap();
        assert_eq!(out, "<% b %>!");
    }

    #[test]
    fn test_too_few_results() {
        let err = substitute("<% a %> <% b %>", queue(&["1"])).unwrap_err();
        assert_eq!(err, TemplateError::SubstitutionMismatch { spans: 2, results: 1 });
    }

    #[test]
    fn test_too_many_results() {
        let err = substitute("<% a %>", queue(&["1", "2"])).unwrap_err();
        assert_eq!(err, TemplateError::SubstitutionMismatch { spans: 1, results: 2 });
    }

    #[test]
    fn test_malformed_during_substitution() {
        let err = substitute("<% a", VecDeque::new()).unwrap_err();
        assert_eq!(err, TemplateError::Malformed { offset: 0 });
    }
}
