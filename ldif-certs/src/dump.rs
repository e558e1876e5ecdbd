use crate::error::DumpError;
use crate::extension::ExtensionRenderer;
use crate::ldif::{extract_certificates, extract_certificates_from_str};
use crate::summary::CertificateSummary;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// What to do with a certificate value that can't be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop at the first invalid value.
    #[default]
    FailFast,
    /// Log the invalid value and carry on with the next one.
    Skip,
}

#[derive(Debug, Error)]
#[error("unknown error policy `{0}` (expected `fail-fast` or `skip`)")]
pub struct UnknownPolicyError(String);

impl FromStr for ErrorPolicy {
    type Err = UnknownPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fail-fast" => Ok(ErrorPolicy::FailFast),
            "skip" => Ok(ErrorPolicy::Skip),
            unknown => Err(UnknownPolicyError(unknown.to_owned())),
        }
    }
}

/// Counters of a dump run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DumpReport {
    /// `userCertificate` values found in the dump
    pub extracted: usize,
    /// summary blocks written
    pub printed: usize,
    /// invalid values left out (skip policy only)
    pub skipped: usize,
}

/// Summarizes every certificate of the dump at `path` into `out`, in file order.
///
/// Each block is written as soon as it is formatted, so with [`ErrorPolicy::FailFast`]
/// the blocks preceding an invalid value are already in `out` when the error is returned.
pub fn summarize_dump<P, R, W>(path: P, policy: ErrorPolicy, renderer: &R, out: &mut W) -> Result<DumpReport, DumpError>
where
    P: AsRef<Path>,
    R: ExtensionRenderer + ?Sized,
    W: Write + ?Sized,
{
    let values = extract_certificates(path)?;
    summarize_values(&values, policy, renderer, out)
}

/// Same as [`summarize_dump`], over dump content already in memory.
pub fn summarize_dump_str<R, W>(
    content: &str,
    policy: ErrorPolicy,
    renderer: &R,
    out: &mut W,
) -> Result<DumpReport, DumpError>
where
    R: ExtensionRenderer + ?Sized,
    W: Write + ?Sized,
{
    let values = extract_certificates_from_str(content);
    log::debug!("found {} certificate value(s)", values.len());
    summarize_values(&values, policy, renderer, out)
}

fn summarize_values<R, W>(
    values: &[String],
    policy: ErrorPolicy,
    renderer: &R,
    out: &mut W,
) -> Result<DumpReport, DumpError>
where
    R: ExtensionRenderer + ?Sized,
    W: Write + ?Sized,
{
    let mut report = DumpReport {
        extracted: values.len(),
        ..DumpReport::default()
    };

    for (index, value) in values.iter().enumerate() {
        match CertificateSummary::from_base64_with(value, renderer) {
            Ok(summary) => {
                log::debug!("certificate #{index}: {}", summary.subject);
                writeln!(out, "{summary}").map_err(DumpError::Write)?;
                report.printed += 1;
            }
            Err(e) => match policy {
                ErrorPolicy::FailFast => return Err(e.at_entry(index)),
                ErrorPolicy::Skip => {
                    log::warn!("skipping certificate #{index}: {e}");
                    report.skipped += 1;
                }
            },
        }
    }

    out.flush().map_err(DumpError::Write)?;

    Ok(report)
}
