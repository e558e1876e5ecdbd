//! Test data shared between the ldif-certs crates.

// base64 DER, single line

// CN=Test CA -> CN=Example, serial 0x01, key usage only
pub const TEST_CA_EXAMPLE_B64: &str = include_str!("../test_assets/certificates/test_ca_example.b64");
// TLS server certificate with the usual web PKI extensions
pub const STS_SERVER_B64: &str = include_str!("../test_assets/certificates/sts_server.b64");
// v1 certificate, serial 0x100
pub const NO_EXTENSIONS_B64: &str = include_str!("../test_assets/certificates/no_extensions.b64");
// GeneralizedTime validity, serial 0xABC, private extension 1.2.3.4.5
pub const ISSUING_CA_B64: &str = include_str!("../test_assets/certificates/issuing_ca.b64");
// BMPString, T61String and UniversalString subject values, multi-valued RDN,
// every extension with a dedicated rendering that the others lack
pub const RICH_EXTENSIONS_B64: &str = include_str!("../test_assets/certificates/rich_extensions.b64");

// ldapsearch output, folded at 76 columns
pub const STS_DUMP: &str = include_str!("../test_assets/dumps/sts-certificates.ldif");
pub const STS_DUMP_EXPECTED: &str = include_str!("../test_assets/dumps/sts-certificates.expected");

// second value truncated by five characters
pub const CORRUPTED_DUMP: &str = include_str!("../test_assets/dumps/corrupted.ldif");
pub const CORRUPTED_DUMP_SKIP_EXPECTED: &str = include_str!("../test_assets/dumps/corrupted.skip.expected");

pub const NO_CERTIFICATES_DUMP: &str = include_str!("../test_assets/dumps/no-certificates.ldif");
