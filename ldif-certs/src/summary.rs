use crate::date::CertDate;
use crate::error::DumpError;
use crate::extension::{colon_pairs, ExtensionRenderer, OpensslStyle};
use crate::name::render_name;
use base64::alphabet;
use base64::engine::{general_purpose, GeneralPurpose};
use base64::Engine as _;
use sha1::{Digest, Sha1};
use std::fmt;
use x509_parser::parse_x509_certificate;

// Non-zero unused bits in the last symbol are accepted.
const CERT_VALUE_ENGINE: GeneralPurpose =
    GeneralPurpose::new(&alphabet::STANDARD, general_purpose::PAD.with_decode_allow_trailing_bits(true));

/// One extension as listed in a summary block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionLine {
    pub short_name: String,
    pub value: String,
}

/// Human-readable digest of one certificate.
///
/// `Display` renders the block printed for each certificate of a dump: a leading blank
/// line, then one line per field, without a trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateSummary {
    pub fingerprint: String,
    pub issuer: String,
    pub subject: String,
    pub not_before: CertDate,
    pub not_after: CertDate,
    pub serial: String,
    pub extensions: Vec<ExtensionLine>,
}

impl CertificateSummary {
    pub fn from_base64(cert_b64: &str) -> Result<Self, DumpError> {
        Self::from_base64_with(cert_b64, &OpensslStyle)
    }

    /// Decodes a base64 certificate value, surrounding whitespace ignored.
    pub fn from_base64_with<R: ExtensionRenderer + ?Sized>(cert_b64: &str, renderer: &R) -> Result<Self, DumpError> {
        let der = CERT_VALUE_ENGINE.decode(cert_b64.trim())?;
        Self::from_der_with(&der, renderer)
    }

    pub fn from_der_with<R: ExtensionRenderer + ?Sized>(der: &[u8], renderer: &R) -> Result<Self, DumpError> {
        let (_, cert) = parse_x509_certificate(der)?;

        let extensions = cert
            .extensions()
            .iter()
            .map(|extension| {
                let short_name = renderer.short_name(extension);
                let value = renderer.render_extension(&short_name, extension);
                ExtensionLine { short_name, value }
            })
            .collect();

        let validity = cert.validity();

        Ok(Self {
            fingerprint: fingerprint_sha1(der),
            issuer: render_name(cert.issuer()),
            subject: render_name(cert.subject()),
            not_before: validity.not_before.into(),
            not_after: validity.not_after.into(),
            serial: format_serial_hex(&format!("{:X}", cert.serial)),
            extensions,
        })
    }
}

impl fmt::Display for CertificateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "SHA1 Fingerprint={}", self.fingerprint)?;
        writeln!(f, "    Issuer: {}", self.issuer)?;
        writeln!(f, "    Subject: {}", self.subject)?;
        writeln!(f, "    Not Before: {}", self.not_before)?;
        writeln!(f, "    Not After : {}", self.not_after)?;
        writeln!(f, "    Serial Number: {}", self.serial)?;
        // lists every extension, not only key usage
        write!(f, "    X509v3 Key Usage:")?;
        for extension in &self.extensions {
            write!(f, "\n        {}: {}", extension.short_name, extension.value)?;
        }
        Ok(())
    }
}

/// Decodes a base64 certificate value and renders its summary block.
pub fn parse_certificate(cert_b64: &str) -> Result<String, DumpError> {
    CertificateSummary::from_base64(cert_b64).map(|summary| summary.to_string())
}

/// SHA-1 of the DER encoding, as 40 uppercase hex characters.
pub fn fingerprint_sha1(der: &[u8]) -> String {
    hex::encode_upper(Sha1::digest(der))
}

/// Formats the hex representation of a serial number as `:`-separated pairs.
///
/// At least two digits are shown. Pairs are counted from the right, so an odd-length
/// representation starts with a lone digit: `ABC` gives `A:BC`.
pub fn format_serial_hex(hex: &str) -> String {
    let hex = hex.to_ascii_uppercase();
    if hex.len() < 2 {
        colon_pairs(&format!("{hex:0>2}"))
    } else {
        colon_pairs(&hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("1A2B3C", "1A:2B:3C")]
    #[case("ABC", "A:BC")]
    #[case("1", "01")]
    #[case("0", "00")]
    #[case("100", "1:00")]
    #[case("abcdef", "AB:CD:EF")]
    #[case("7F3A9C0D5E21B4680F1A2B3C4D5E6F7081928374", "7F:3A:9C:0D:5E:21:B4:68:0F:1A:2B:3C:4D:5E:6F:70:81:92:83:74")]
    fn serial_formatting(#[case] hex: &str, #[case] expected: &str) {
        assert_eq!(format_serial_hex(hex), expected);
    }

    #[rstest]
    #[case(ldif_certs_test_data::STS_SERVER_B64, "FDF8C54F866CD7F36C8629F8297C6C53B18363D0")]
    #[case(ldif_certs_test_data::TEST_CA_EXAMPLE_B64, "A0E934200645A3D84D12605462FF8EAF7BC726F0")]
    #[case(ldif_certs_test_data::NO_EXTENSIONS_B64, "376AD2D82049F2260E90147237F0D5A0EFFA61D9")]
    #[case(ldif_certs_test_data::ISSUING_CA_B64, "D3B1E6A7D757FD88D72F481616C36CEDB98286AD")]
    #[case(ldif_certs_test_data::RICH_EXTENSIONS_B64, "CDB1B2F7F02FE185E3E68A9676278C2C40CE909F")]
    fn fingerprint_of_fixtures(#[case] cert_b64: &str, #[case] expected: &str) {
        let der = general_purpose::STANDARD.decode(cert_b64).unwrap();
        let fingerprint = fingerprint_sha1(&der);

        assert_eq!(fingerprint, expected);
        assert_eq!(fingerprint.len(), 40);
        assert!(fingerprint.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_ca_example_block() {
        let block = parse_certificate(ldif_certs_test_data::TEST_CA_EXAMPLE_B64).unwrap();

        expect![[r#"

            SHA1 Fingerprint=A0E934200645A3D84D12605462FF8EAF7BC726F0
                Issuer: CN = Test CA
                Subject: CN = Example
                Not Before: 2023-01-01 00:00:00
                Not After : 2024-01-01 00:00:00
                Serial Number: 01
                X509v3 Key Usage:
                    keyUsage: Digital Signature, Key Encipherment
        "#]]
        .assert_eq(&format!("{block}\n"));
    }

    #[test]
    fn header_is_printed_without_extensions() {
        let block = parse_certificate(ldif_certs_test_data::NO_EXTENSIONS_B64).unwrap();

        assert!(block.starts_with('\n'));
        assert!(block.ends_with("    Serial Number: 1:00\n    X509v3 Key Usage:"));
    }

    #[test]
    fn generalized_time_validity() {
        let summary = CertificateSummary::from_base64(ldif_certs_test_data::ISSUING_CA_B64).unwrap();

        assert_eq!(summary.not_before, CertDate::new(2020, 6, 15, 12, 0, 0).unwrap());
        assert_eq!(summary.not_after, CertDate::new(2050, 6, 15, 12, 0, 0).unwrap());
        assert_eq!(summary.serial, "A:BC");
    }

    #[test]
    fn odd_length_serial_and_unicode_subject() {
        let summary = CertificateSummary::from_base64(ldif_certs_test_data::RICH_EXTENSIONS_B64).unwrap();

        assert_eq!(summary.serial, "F:ED:CB:A9:87");
        assert_eq!(summary.not_before, CertDate::new(2024, 7, 1, 0, 0, 0).unwrap());
        assert!(summary.subject.starts_with("C = JP, O = Exämple Örg, OU = Réseau"));
        assert_eq!(summary.extensions.len(), 13);
    }

    #[test]
    fn multi_line_extension_values_keep_newlines() {
        let block = parse_certificate(ldif_certs_test_data::STS_SERVER_B64).unwrap();

        assert!(block.contains("\n        crlDistributionPoints: Full Name:\n  URI:http://crl.example.jp/ca.crl\n"));
        assert!(!block.ends_with('\n'));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let padded = format!("  {}\r\n", ldif_certs_test_data::TEST_CA_EXAMPLE_B64);

        assert_eq!(
            parse_certificate(&padded).unwrap(),
            parse_certificate(ldif_certs_test_data::TEST_CA_EXAMPLE_B64).unwrap()
        );
    }

    #[test]
    fn base64_round_trips() {
        let der = general_purpose::STANDARD
            .decode(ldif_certs_test_data::STS_SERVER_B64)
            .unwrap();
        assert_eq!(general_purpose::STANDARD.encode(der), ldif_certs_test_data::STS_SERVER_B64);
    }

    #[test]
    fn non_zero_trailing_bits_are_accepted() {
        const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

        let b64 = ldif_certs_test_data::TEST_CA_EXAMPLE_B64;
        let body = b64.trim_end_matches('=');
        let last = body.chars().last().unwrap();
        let index = ALPHABET.find(last).unwrap();
        let tweaked_symbol = ALPHABET.as_bytes()[index | 1] as char;
        assert_ne!(tweaked_symbol, last);

        let tweaked = format!("{}{}{}", &body[..body.len() - 1], tweaked_symbol, &b64[body.len()..]);
        assert!(general_purpose::STANDARD.decode(&tweaked).is_err());

        assert_eq!(parse_certificate(&tweaked).unwrap(), parse_certificate(b64).unwrap());
    }

    #[rstest]
    #[case("not base64!")]
    #[case("QUJD=")]
    fn invalid_base64_is_a_decode_error(#[case] value: &str) {
        let err = parse_certificate(value).unwrap_err();
        assert!(matches!(err, DumpError::Decode(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn truncated_certificate_is_a_decode_error() {
        let b64 = ldif_certs_test_data::TEST_CA_EXAMPLE_B64;
        let err = parse_certificate(&b64[..b64.len() - 5]).unwrap_err();
        assert!(matches!(err, DumpError::Decode(_)), "unexpected error: {err:?}");
    }

    #[rstest]
    #[case("AAAA")]
    #[case("MAA=")]
    fn garbage_der_is_a_parse_error(#[case] value: &str) {
        let err = parse_certificate(value).unwrap_err();
        assert!(matches!(err, DumpError::CertificateParse(_)), "unexpected error: {err:?}");
    }
}
