use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a candidate to be suggested.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Find the candidate closest to `input` (case-insensitive), if any is close enough.
pub fn closest_match<'a, I>(input: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let input = input.to_lowercase();

    candidates
        .into_iter()
        .map(|c| (c, jaro_winkler(&c.to_lowercase(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_match() {
        let codes = ["sedentary", "light", "moderate", "active", "very_active"];
        assert_eq!(closest_match("moderat", codes), Some("moderate".to_string()));
        assert_eq!(closest_match("VERY_ACTIV", codes), Some("very_active".to_string()));
        assert_eq!(closest_match("zzz", codes), None);
    }
}
