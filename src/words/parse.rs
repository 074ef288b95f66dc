use super::WordPair;

const SEPARATOR: char = '-';

/// Turns `<source> - <target>` lines into word pairs.
///
/// Lines without a separator are skipped. A line with several separators
/// keeps only the first two pieces.
pub fn parse(text: &str) -> Vec<WordPair> {
    text.split('\n')
        .map(str::trim)
        .filter_map(|line| {
            if !line.contains(SEPARATOR) {
                if !line.is_empty() {
                    tracing::debug!(line, "skipping line without separator");
                }
                return None;
            }
            let mut parts = line.split(SEPARATOR).map(str::trim);
            match (parts.next(), parts.next()) {
                (Some(source), Some(target)) => Some(WordPair::new(source, target)),
                _ => {
                    tracing::debug!(line, "skipping incomplete pair");
                    None
                }
            }
        })
        .collect()
}
