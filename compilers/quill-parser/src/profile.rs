//! Plain-text author profile records.
//!
//! A record is the author label on the first line followed by the five
//! statistics, one per line, in [`Metric::ALL`] order:
//!
//! ```text
//! Jane Austen
//! 4.41
//! 0.085
//! 0.043
//! 26.43
//! 3.31
//! ```

use std::fmt::Write as _;
use std::path::Path;

use nom::{
    character::complete::space0,
    combinator::{all_consuming, verify},
    number::complete::double,
    sequence::delimited,
    IResult,
};
use quill_protocol::{AuthorProfile, Metric, StyleMetrics};
use tracing::debug;

use crate::error::{ProfileError, ProfileFormatError};
use crate::source::read_source;

/// One statistic line: a finite decimal value with optional surrounding
/// blanks. `inf` and `nan` spellings are refused.
fn statistic(input: &str) -> IResult<&str, f64> {
    verify(all_consuming(delimited(space0, double, space0)), |v: &f64| v.is_finite())(input)
}

pub fn parse_profile_record(text: &str) -> Result<AuthorProfile, ProfileFormatError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let label = match lines.next() {
        Some((_, line)) if !line.trim().is_empty() => line.trim().to_string(),
        _ => return Err(ProfileFormatError::MissingLabel),
    };

    let mut values = [0.0; Metric::COUNT];
    for (slot, metric) in values.iter_mut().zip(Metric::ALL) {
        let line = metric.index() + 2;
        let (_, raw) = lines
            .next()
            .ok_or(ProfileFormatError::MissingStatistic { line, metric })?;
        let (_, value) = statistic(raw).map_err(|_| ProfileFormatError::InvalidStatistic {
            line,
            metric,
            text: raw.trim().to_string(),
        })?;
        *slot = value;
    }

    if let Some((line, _)) = lines.find(|(_, l)| !l.trim().is_empty()) {
        return Err(ProfileFormatError::TrailingContent { line });
    }

    Ok(AuthorProfile::new(label, StyleMetrics::from_array(values)))
}

/// Formats `profile` so that [`parse_profile_record`] reads it back.
///
/// Labels must fit on one line and every statistic must be finite; an
/// empty document's NaN metrics therefore cannot become a profile.
pub fn render_profile_record(profile: &AuthorProfile) -> Result<String, ProfileFormatError> {
    let label = profile.label.trim();
    if label.is_empty() {
        return Err(ProfileFormatError::MissingLabel);
    }
    if label.contains(|c: char| c == '\n' || c == '\r') {
        return Err(ProfileFormatError::MultiLineLabel);
    }

    let mut out = String::new();
    out.push_str(label);
    out.push('\n');
    for (metric, value) in profile.metrics.iter() {
        if !value.is_finite() {
            return Err(ProfileFormatError::NonFiniteStatistic { metric });
        }
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}", value);
    }
    Ok(out)
}

pub fn load_profile(path: impl AsRef<Path>) -> Result<AuthorProfile, ProfileError> {
    let path = path.as_ref();
    let text = read_source(path)?;
    let profile = parse_profile_record(&text).map_err(|source| ProfileError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), label = %profile.label, "loaded profile");
    Ok(profile)
}

/// Loads profiles in the given order; the first failure aborts the load.
pub fn load_profiles<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
) -> Result<Vec<AuthorProfile>, ProfileError> {
    paths.into_iter().map(load_profile).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const AUSTEN: &str = "Jane Austen\n4.41\n0.085\n0.043\n26.43\n3.31\n";

    #[test]
    fn test_parse_record() {
        let profile = parse_profile_record(AUSTEN).unwrap();
        assert_eq!(profile.label, "Jane Austen");
        assert_eq!(profile.metrics.to_array(), [4.41, 0.085, 0.043, 26.43, 3.31]);
    }

    #[test]
    fn test_tolerates_blanks_and_crlf() {
        let text = "  Mark Twain \r\n 4.2\r\n0.11 \r\n6e-2\r\n19.8\r\n2.6\r\n\r\n\n";
        let profile = parse_profile_record(text).unwrap();
        assert_eq!(profile.label, "Mark Twain");
        assert_eq!(profile.metrics.hapax_legomenon_ratio, 0.06);
    }

    #[test]
    fn test_missing_label() {
        assert_eq!(parse_profile_record(""), Err(ProfileFormatError::MissingLabel));
        assert_eq!(parse_profile_record("   \n1\n2\n3\n4\n5"), Err(ProfileFormatError::MissingLabel));
    }

    #[test]
    fn test_missing_statistic() {
        let err = parse_profile_record("Emily Bronte\n4.3\n0.1\n0.05\n").unwrap_err();
        assert_eq!(
            err,
            ProfileFormatError::MissingStatistic { line: 5, metric: Metric::AverageWordsPerSentence }
        );
    }

    #[test]
    fn test_invalid_statistic() {
        let err = parse_profile_record("Emily Bronte\n4.3\nlots\n0.05\n20\n3\n").unwrap_err();
        assert_eq!(
            err,
            ProfileFormatError::InvalidStatistic {
                line: 3,
                metric: Metric::TypeTokenRatio,
                text: "lots".to_string(),
            }
        );

        // Two numbers on one line are not one statistic
        assert!(parse_profile_record("X\n1 2\n1\n1\n1\n1\n").is_err());
    }

    #[test]
    fn test_trailing_content() {
        let text = format!("{}7.0\n", AUSTEN);
        assert_eq!(
            parse_profile_record(&text),
            Err(ProfileFormatError::TrailingContent { line: 7 })
        );
    }

    #[test]
    fn test_render_reads_back() {
        let profile = AuthorProfile::new(
            "Charles Dickens",
            StyleMetrics::from_array([4.3236, 0.0768, 0.0398, 23.145, 3.0005]),
        );
        let text = render_profile_record(&profile).unwrap();
        assert!(text.starts_with("Charles Dickens\n4.3236\n"));
        assert_eq!(parse_profile_record(&text).unwrap(), profile);
    }

    #[test]
    fn test_render_refuses_unreadable_records() {
        let metrics = StyleMetrics::from_array([4.0, 0.1, 0.05, 20.0, 3.0]);

        for label in ["two\nlines", "carriage\rreturn", "Mixed\r\nbreak"] {
            let profile = AuthorProfile::new(label, metrics);
            assert_eq!(render_profile_record(&profile), Err(ProfileFormatError::MultiLineLabel));
        }
        assert_eq!(
            render_profile_record(&AuthorProfile::new("  ", metrics)),
            Err(ProfileFormatError::MissingLabel)
        );

        let empty = AuthorProfile::new("Nobody", StyleMetrics::from_array([f64::NAN; 5]));
        assert_eq!(
            render_profile_record(&empty),
            Err(ProfileFormatError::NonFiniteStatistic { metric: Metric::AverageWordLength })
        );
        let endless = AuthorProfile::new(
            "Nobody",
            StyleMetrics::from_array([4.0, 0.1, 0.05, f64::NEG_INFINITY, 3.0]),
        );
        assert_eq!(
            render_profile_record(&endless),
            Err(ProfileFormatError::NonFiniteStatistic { metric: Metric::AverageWordsPerSentence })
        );
    }

    #[test]
    fn test_non_finite_statistics_are_invalid() {
        for spelling in ["inf", "-inf", "nan", "NaN", "infinity"] {
            let text = format!("Someone\n{spelling}\n0.1\n0.05\n20\n3\n");
            assert_eq!(
                parse_profile_record(&text),
                Err(ProfileFormatError::InvalidStatistic {
                    line: 2,
                    metric: Metric::AverageWordLength,
                    text: spelling.to_string(),
                }),
                "{spelling}"
            );
        }
    }

    #[test]
    fn test_load_profiles_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let austen = dir.path().join("jane.austen.stats");
        let twain = dir.path().join("mark.twain.stats");
        fs::write(&austen, AUSTEN).unwrap();
        fs::write(&twain, "Mark Twain\n4.2\n0.11\n0.06\n19.8\n2.6\n").unwrap();

        let profiles = load_profiles([&twain, &austen]).unwrap();
        let labels: Vec<&str> = profiles.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Mark Twain", "Jane Austen"]);
    }

    #[test]
    fn test_load_profile_errors() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.stats");
        fs::write(&broken, "Nobody\n1\n2\n").unwrap();

        match load_profile(&broken) {
            Err(ProfileError::Format { path, source }) => {
                assert_eq!(path, broken);
                assert!(matches!(source, ProfileFormatError::MissingStatistic { line: 4, .. }));
            }
            other => panic!("expected format error, got {:?}", other),
        }

        let missing = dir.path().join("missing.stats");
        assert!(matches!(load_profile(&missing), Err(ProfileError::Source(_))));
    }
}
