//! # ldif-certs
//!
//! Summaries of the X.509 certificates published in LDIF directory dumps.

pub mod date;
pub mod dump;
pub mod error;
pub mod extension;
pub mod ldif;
pub mod name;
pub mod oids;
pub mod summary;

pub use date::CertDate;
pub use dump::{summarize_dump, summarize_dump_str, DumpReport, ErrorPolicy, UnknownPolicyError};
pub use error::DumpError;
pub use extension::{general_name, ExtensionRenderer, OpensslStyle};
pub use ldif::{extract_certificates, extract_certificates_from_str, unfold, USER_CERTIFICATE_PREFIX};
pub use name::{render_name, render_name_oneline};
pub use summary::{fingerprint_sha1, format_serial_hex, parse_certificate, CertificateSummary, ExtensionLine};
