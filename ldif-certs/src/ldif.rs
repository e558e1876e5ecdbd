//! Certificate extraction from LDIF dumps.
//!
//! LDIF exporters wrap long lines: a physical line starting with a single space
//! continues the previous one. Folding happens anywhere, including in the middle
//! of a base64 value, so the whole content is unfolded before it is split into
//! logical lines.

use crate::error::DumpError;
use std::fs;
use std::path::Path;

/// Attribute prefix of a base64-encoded user certificate value.
pub const USER_CERTIFICATE_PREFIX: &str = "userCertificate:: ";

const FOLD_MARKER: &str = "\n ";

/// Joins folded continuation lines onto their logical line.
///
/// CRLF line endings are first normalized to LF. Each newline immediately followed by
/// a space is then removed along with that one space, in a single pass, so the result
/// only depends on the logical content and not on the line ending style.
pub fn unfold(content: &str) -> String {
    content.replace("\r\n", "\n").replace(FOLD_MARKER, "")
}

/// Collects every `userCertificate:: ` value of the dump, in file order.
///
/// Values are returned as found; base64 validity is checked when they are formatted.
pub fn extract_certificates_from_str(content: &str) -> Vec<String> {
    unfold(content)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter_map(|line| line.strip_prefix(USER_CERTIFICATE_PREFIX))
        .map(str::to_owned)
        .collect()
}

/// Reads the dump at `path` and extracts its certificate values.
pub fn extract_certificates<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DumpError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| DumpError::Read {
        path: path.to_owned(),
        source,
    })?;

    let certificates = extract_certificates_from_str(&content);
    log::debug!(
        "found {} certificate value(s) in {}",
        certificates.len(),
        path.display()
    );

    Ok(certificates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn fold(line: &str, width: usize) -> String {
        let mut folded = String::new();
        let mut rest = line;
        let mut first = true;

        while !rest.is_empty() {
            let take = if first { width } else { width - 1 };
            let (head, tail) = rest.split_at(take.min(rest.len()));
            if !first {
                folded.push_str("\n ");
            }
            folded.push_str(head);
            rest = tail;
            first = false;
        }

        folded
    }

    #[test]
    fn unfold_joins_continuation_without_separator() {
        assert_eq!(unfold("description: relyi\n ng parties\ncn: x"), "description: relying parties\ncn: x");
    }

    #[test]
    fn unfold_removes_only_one_leading_space() {
        assert_eq!(unfold("description: two\n  words"), "description: two words");
    }

    #[rstest]
    #[case("a\n\n  b", "a\n b")]
    #[case("a\r\n\r\n  b", "a\n b")]
    #[case("a\r\n \r\n b", "ab")]
    #[case("a\r\n \r\n  b", "a b")]
    fn unfold_normalizes_line_endings_first(#[case] content: &str, #[case] expected: &str) {
        assert_eq!(unfold(content), expected);
    }

    #[test]
    fn crlf_unfolds_like_lf() {
        let lf = "dn: cn=x\n\n  userCertificate:: AAAA\nuserCertificate:: BB\n BB\n";
        let crlf = lf.replace('\n', "\r\n");

        assert_eq!(unfold(&crlf), unfold(lf));
        assert_eq!(extract_certificates_from_str(&crlf), extract_certificates_from_str(lf));
        assert_eq!(extract_certificates_from_str(&crlf), vec!["BBBB"]);
    }

    #[test]
    fn unfold_is_idempotent() {
        let once = unfold(ldif_certs_test_data::STS_DUMP);
        assert_eq!(unfold(&once), once);
    }

    #[rstest]
    #[case(76)]
    #[case(64)]
    #[case(20)]
    #[case(2)]
    fn folded_value_reconstructs_exactly(#[case] width: usize) {
        let line = format!("{}{}", USER_CERTIFICATE_PREFIX, ldif_certs_test_data::STS_SERVER_B64);
        let dump = format!("dn: cn=sts\n{}\ncn: sts\n", fold(&line, width));

        let values = extract_certificates_from_str(&dump);

        assert_eq!(values, vec![ldif_certs_test_data::STS_SERVER_B64.to_owned()]);
    }

    #[test]
    fn extracts_every_value_in_file_order() {
        let values = extract_certificates_from_str(ldif_certs_test_data::STS_DUMP);

        assert_eq!(
            values,
            vec![
                ldif_certs_test_data::STS_SERVER_B64.to_owned(),
                ldif_certs_test_data::TEST_CA_EXAMPLE_B64.to_owned(),
                ldif_certs_test_data::NO_EXTENSIONS_B64.to_owned(),
                ldif_certs_test_data::ISSUING_CA_B64.to_owned(),
            ]
        );
    }

    #[test]
    fn duplicated_values_are_kept() {
        let dump = "userCertificate:: AAAA\nuserCertificate:: AAAA\n";
        assert_eq!(extract_certificates_from_str(dump), vec!["AAAA", "AAAA"]);
    }

    #[rstest]
    #[case("cACertificate:: AAAA")]
    #[case("userCertificate;binary:: AAAA")]
    #[case("usercertificate:: AAAA")]
    #[case(" userCertificate:: AAAA")]
    #[case("userCertificate: AAAA")]
    fn other_attributes_are_ignored(#[case] line: &str) {
        assert!(extract_certificates_from_str(line).is_empty());
    }

    #[test]
    fn dump_without_certificates_yields_nothing() {
        assert!(extract_certificates_from_str(ldif_certs_test_data::NO_CERTIFICATES_DUMP).is_empty());
    }

    #[test]
    fn crlf_dump_matches_lf_dump() {
        let crlf = ldif_certs_test_data::STS_DUMP.replace('\n', "\r\n");
        assert_eq!(
            extract_certificates_from_str(&crlf),
            extract_certificates_from_str(ldif_certs_test_data::STS_DUMP)
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_certificates(dir.path().join("missing.ldif")).unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("missing.ldif"));
    }

    #[test]
    fn reads_dump_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sts-certificates.txt");
        std::fs::write(&path, ldif_certs_test_data::STS_DUMP).unwrap();

        let values = extract_certificates(&path).unwrap();

        assert_eq!(values.len(), 4);
    }
}
