//! Display text of certificate extensions.
//!
//! Extensions are decoded by `x509-parser`; this module only turns the decoded values
//! into text. [`OpensslStyle`] mimics what `openssl x509 -text` shows.

use crate::date::CertDate;
use crate::name::{render_attributes_oneline, render_name_oneline};
use crate::oids;
use time::OffsetDateTime;
use x509_parser::der_parser::parse_der;
use x509_parser::extensions::{
    AuthorityInfoAccess, AuthorityKeyIdentifier, BasicConstraints, CRLDistributionPoint, DistributionPointName,
    ExtendedKeyUsage, GeneralName, GeneralSubtree, KeyUsage, NSCertType, NameConstraints, ParsedExtension,
    PolicyConstraints, PolicyInformation, PolicyMappings, ReasonFlags, SignedCertificateTimestamp, X509Extension,
};

const ANY_POLICY: &str = "2.5.29.32.0";

/// Turns a certificate extension into the text printed next to its short name.
pub trait ExtensionRenderer {
    /// Name the extension is listed under.
    ///
    /// Defaults to the OpenSSL short name, or the dotted identifier when there is none.
    fn short_name(&self, extension: &X509Extension<'_>) -> String {
        let oid = extension.oid.to_id_string();
        match oids::extension_short_name(&oid) {
            Some(short_name) => short_name.to_owned(),
            None => oid,
        }
    }

    /// Display value of `extension`. Multi-line values are separated by `\n`, without a trailing newline.
    fn render_extension(&self, short_name: &str, extension: &X509Extension<'_>) -> String;
}

/// Renders extensions the way `openssl x509 -text` does.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpensslStyle;

impl ExtensionRenderer for OpensslStyle {
    fn render_extension(&self, short_name: &str, extension: &X509Extension<'_>) -> String {
        match extension.parsed_extension() {
            ParsedExtension::KeyUsage(usage) => key_usage(usage),
            ParsedExtension::BasicConstraints(constraints) => basic_constraints(constraints),
            ParsedExtension::ExtendedKeyUsage(usage) => extended_key_usage(extension.value, usage),
            ParsedExtension::SubjectKeyIdentifier(key_id) => colon_hex(key_id.0),
            ParsedExtension::AuthorityKeyIdentifier(aki) => authority_key_identifier(aki),
            ParsedExtension::SubjectAlternativeName(san) => general_names(&san.general_names),
            ParsedExtension::IssuerAlternativeName(ian) => general_names(&ian.general_names),
            ParsedExtension::CRLDistributionPoints(points) => crl_distribution_points(&points.points),
            ParsedExtension::AuthorityInfoAccess(aia) => authority_info_access(aia),
            ParsedExtension::CertificatePolicies(policies) => certificate_policies(policies),
            ParsedExtension::NameConstraints(constraints) => name_constraints(constraints),
            ParsedExtension::PolicyConstraints(constraints) => policy_constraints(constraints),
            ParsedExtension::PolicyMappings(mappings) => policy_mappings(mappings),
            ParsedExtension::InhibitAnyPolicy(inhibit) => inhibit.skip_certs.to_string(),
            ParsedExtension::NSCertType(cert_type) => ns_cert_type(cert_type),
            ParsedExtension::NsCertComment(comment) => (*comment).to_owned(),
            ParsedExtension::SCT(timestamps) => signed_certificate_timestamps(timestamps),
            ParsedExtension::ParseError { error } => {
                log::debug!("couldn't decode {short_name} extension ({error}), showing raw value");
                printable_bytes(extension.value)
            }
            _ => printable_bytes(extension.value),
        }
    }
}

/// Splits a hex string into `:`-separated pairs.
///
/// An odd-length string starts with a single-character group: `ABC` gives `A:BC`.
pub(crate) fn colon_pairs(hex: &str) -> String {
    let chars: Vec<char> = hex.chars().collect();
    let head = chars.len() % 2;

    let mut groups: Vec<String> = Vec::with_capacity(chars.len() / 2 + head);
    if head == 1 {
        groups.push(chars[0].to_string());
    }
    groups.extend(chars[head..].chunks(2).map(|pair| pair.iter().collect::<String>()));

    groups.join(":")
}

fn colon_hex(bytes: &[u8]) -> String {
    colon_pairs(&hex::encode_upper(bytes))
}

/// Bytes as ASCII text, anything outside the printable range shown as `.`.
fn printable_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if (0x20..0x7f).contains(&b) { char::from(b) } else { '.' })
        .collect()
}

fn key_usage(usage: &KeyUsage) -> String {
    let flags = [
        (usage.digital_signature(), "Digital Signature"),
        (usage.non_repudiation(), "Non Repudiation"),
        (usage.key_encipherment(), "Key Encipherment"),
        (usage.data_encipherment(), "Data Encipherment"),
        (usage.key_agreement(), "Key Agreement"),
        (usage.key_cert_sign(), "Certificate Sign"),
        (usage.crl_sign(), "CRL Sign"),
        (usage.encipher_only(), "Encipher Only"),
        (usage.decipher_only(), "Decipher Only"),
    ];
    join_set_flags(&flags)
}

fn ns_cert_type(cert_type: &NSCertType) -> String {
    let flags = [
        (cert_type.ssl_client(), "SSL Client"),
        (cert_type.ssl_server(), "SSL Server"),
        (cert_type.smime(), "S/MIME"),
        (cert_type.object_signing(), "Object Signing"),
        (cert_type.ssl_ca(), "SSL CA"),
        (cert_type.smime_ca(), "S/MIME CA"),
        (cert_type.object_signing_ca(), "Object Signing CA"),
    ];
    join_set_flags(&flags)
}

fn reason_flags(reasons: &ReasonFlags) -> String {
    let flags = [
        (reasons.key_compromise(), "Key Compromise"),
        (reasons.ca_compromise(), "CA Compromise"),
        (reasons.affilation_changed(), "Affiliation Changed"),
        (reasons.superseded(), "Superseded"),
        (reasons.cessation_of_operation(), "Cessation Of Operation"),
        (reasons.certificate_hold(), "Certificate Hold"),
        (reasons.privelege_withdrawn(), "Privilege Withdrawn"),
        (reasons.aa_compromise(), "AA Compromise"),
    ];
    join_set_flags(&flags)
}

fn join_set_flags(flags: &[(bool, &str)]) -> String {
    flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, label)| *label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn basic_constraints(constraints: &BasicConstraints) -> String {
    let ca = if constraints.ca { "CA:TRUE" } else { "CA:FALSE" };
    match constraints.path_len_constraint {
        Some(path_len) => format!("{ca}, pathlen:{path_len}"),
        None => ca.to_owned(),
    }
}

/// Key purposes in the order they are encoded, long names where known.
fn extended_key_usage(raw: &[u8], usage: &ExtendedKeyUsage<'_>) -> String {
    let purposes = encoded_key_purposes(raw).unwrap_or_else(|| declared_key_purposes(usage));

    purposes
        .into_iter()
        .map(|oid| match oids::key_purpose_long_name(&oid) {
            Some(long_name) => long_name.to_owned(),
            None => oid,
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn encoded_key_purposes(raw: &[u8]) -> Option<Vec<String>> {
    let (_, purposes) = parse_der(raw).ok()?;
    purposes
        .as_sequence()
        .ok()?
        .iter()
        .map(|purpose| purpose.as_oid().ok().map(|oid| oid.to_id_string()))
        .collect()
}

// Flags lose the encoding order: known purposes first, in declaration order.
fn declared_key_purposes(usage: &ExtendedKeyUsage<'_>) -> Vec<String> {
    let flags = [
        (usage.any, oids::KP_ANY_EXTENDED_KEY_USAGE),
        (usage.server_auth, oids::KP_SERVER_AUTH),
        (usage.client_auth, oids::KP_CLIENT_AUTH),
        (usage.code_signing, oids::KP_CODE_SIGNING),
        (usage.email_protection, oids::KP_EMAIL_PROTECTION),
        (usage.time_stamping, oids::KP_TIME_STAMPING),
        (usage.ocsp_signing, oids::KP_OCSP_SIGNING),
    ];

    flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, oid)| (*oid).to_owned())
        .chain(usage.other.iter().map(|oid| oid.to_id_string()))
        .collect()
}

fn authority_key_identifier(aki: &AuthorityKeyIdentifier<'_>) -> String {
    let mut lines = Vec::new();

    if let Some(key_id) = &aki.key_identifier {
        lines.push(colon_hex(key_id.0));
    }
    if let Some(issuer) = &aki.authority_cert_issuer {
        lines.extend(issuer.iter().map(general_name));
    }
    if let Some(serial) = aki.authority_cert_serial {
        lines.push(format!("serial:{}", colon_hex(serial)));
    }

    lines.join("\n")
}

/// Renders one general name with its OpenSSL label, e.g. `DNS:example.jp`.
pub fn general_name(name: &GeneralName<'_>) -> String {
    match name {
        GeneralName::DNSName(dns) => format!("DNS:{dns}"),
        GeneralName::RFC822Name(email) => format!("email:{email}"),
        GeneralName::URI(uri) => format!("URI:{uri}"),
        GeneralName::IPAddress(bytes) => format!("IP Address:{}", ip_address(bytes)),
        GeneralName::DirectoryName(dir_name) => format!("DirName:{}", render_name_oneline(dir_name)),
        GeneralName::RegisteredID(oid) => format!("Registered ID:{}", oid.to_id_string()),
        GeneralName::OtherName(oid, _) => format!("othername:{}:<unsupported>", oid.to_id_string()),
        GeneralName::X400Address(_) => "X400Name:<unsupported>".to_owned(),
        GeneralName::EDIPartyName(_) => "EdiPartyName:<unsupported>".to_owned(),
    }
}

fn general_names(names: &[GeneralName<'_>]) -> String {
    names.iter().map(general_name).collect::<Vec<_>>().join(", ")
}

/// IPv4 in dotted decimal, IPv6 as eight uppercase hex groups.
///
/// Name constraints carry an address followed by its mask, rendered as `address/mask`.
fn ip_address(bytes: &[u8]) -> String {
    match bytes.len() {
        4 => bytes.iter().map(u8::to_string).collect::<Vec<_>>().join("."),
        16 => bytes
            .chunks_exact(2)
            .map(|pair| format!("{:X}", u16::from_be_bytes([pair[0], pair[1]])))
            .collect::<Vec<_>>()
            .join(":"),
        8 | 32 => {
            let (address, mask) = bytes.split_at(bytes.len() / 2);
            format!("{}/{}", ip_address(address), ip_address(mask))
        }
        _ => "<invalid>".to_owned(),
    }
}

fn crl_distribution_points(points: &[CRLDistributionPoint<'_>]) -> String {
    points
        .iter()
        .map(crl_distribution_point)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn crl_distribution_point(point: &CRLDistributionPoint<'_>) -> String {
    let mut lines = Vec::new();

    match &point.distribution_point {
        Some(DistributionPointName::FullName(names)) => {
            lines.push("Full Name:".to_owned());
            lines.extend(names.iter().map(|name| format!("  {}", general_name(name))));
        }
        Some(DistributionPointName::NameRelativeToCRLIssuer(rdn)) => {
            lines.push("Relative Name:".to_owned());
            lines.push(format!("  {}", render_attributes_oneline(rdn.iter())));
        }
        None => {}
    }

    if let Some(reasons) = &point.reasons {
        lines.push(format!("Reasons: {}", reason_flags(reasons)));
    }

    if let Some(issuer) = &point.crl_issuer {
        lines.push("CRL Issuer:".to_owned());
        lines.extend(issuer.iter().map(|name| format!("  {}", general_name(name))));
    }

    lines.join("\n")
}

fn authority_info_access(aia: &AuthorityInfoAccess<'_>) -> String {
    aia.accessdescs
        .iter()
        .map(|desc| {
            let method = desc.access_method.to_id_string();
            let method = oids::access_method_long_name(&method).map(str::to_owned).unwrap_or(method);
            format!("{} - {}", method, general_name(&desc.access_location))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn certificate_policies(policies: &[PolicyInformation<'_>]) -> String {
    let mut lines = Vec::new();

    for policy in policies {
        let policy_id = policy.policy_id.to_id_string();
        if policy_id == ANY_POLICY {
            lines.push("Policy: X509v3 Any Policy".to_owned());
        } else {
            lines.push(format!("Policy: {policy_id}"));
        }

        for qualifier in policy.policy_qualifiers.iter().flatten() {
            let qualifier_id = qualifier.policy_qualifier_id.to_id_string();
            match qualifier_id.as_str() {
                oids::QT_CPS => lines.push(format!("  CPS: {}", qualifier_text(qualifier.qualifier))),
                oids::QT_UNOTICE => {
                    lines.push("  User Notice:".to_owned());
                    lines.extend(user_notice(qualifier.qualifier));
                }
                _ => lines.push(format!("  {}: {}", qualifier_id, printable_bytes(qualifier.qualifier))),
            }
        }
    }

    lines.join("\n")
}

fn qualifier_text(raw: &[u8]) -> String {
    match parse_der(raw) {
        Ok((_, obj)) => match obj.as_str() {
            Ok(text) => text.to_owned(),
            Err(_) => printable_bytes(raw),
        },
        Err(_) => printable_bytes(raw),
    }
}

fn user_notice(raw: &[u8]) -> Vec<String> {
    let Ok((_, notice)) = parse_der(raw) else {
        return vec![format!("    {}", printable_bytes(raw))];
    };
    let Ok(fields) = notice.as_sequence() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    for field in fields {
        if let Ok(text) = field.as_str() {
            lines.push(format!("    Explicit Text: {text}"));
        } else if let Ok(notice_ref) = field.as_sequence() {
            if let Some(organization) = notice_ref.first().and_then(|org| org.as_str().ok()) {
                lines.push(format!("    Organization: {organization}"));
            }
            let numbers: Vec<String> = notice_ref
                .get(1)
                .and_then(|numbers| numbers.as_sequence().ok())
                .map(|numbers| {
                    numbers
                        .iter()
                        .filter_map(|n| n.as_u32().ok())
                        .map(|n| n.to_string())
                        .collect()
                })
                .unwrap_or_default();
            if !numbers.is_empty() {
                lines.push(format!("    Number{}: {}", if numbers.len() > 1 { "s" } else { "" }, numbers.join(", ")));
            }
        }
    }
    lines
}

fn name_constraints(constraints: &NameConstraints<'_>) -> String {
    fn subtrees(label: &str, subtrees: &[GeneralSubtree<'_>], lines: &mut Vec<String>) {
        lines.push(format!("{label}:"));
        lines.extend(subtrees.iter().map(|subtree| {
            // subtrees use the short `IP:` label
            let name = match &subtree.base {
                GeneralName::IPAddress(bytes) => format!("IP:{}", ip_address(bytes)),
                other => general_name(other),
            };
            format!("  {name}")
        }));
    }

    let mut lines = Vec::new();
    if let Some(permitted) = &constraints.permitted_subtrees {
        subtrees("Permitted", permitted, &mut lines);
    }
    if let Some(excluded) = &constraints.excluded_subtrees {
        subtrees("Excluded", excluded, &mut lines);
    }
    lines.join("\n")
}

fn policy_constraints(constraints: &PolicyConstraints) -> String {
    let mut parts = Vec::new();
    if let Some(skip) = constraints.require_explicit_policy {
        parts.push(format!("Require Explicit Policy:{skip}"));
    }
    if let Some(skip) = constraints.inhibit_policy_mapping {
        parts.push(format!("Inhibit Policy Mapping:{skip}"));
    }
    parts.join(", ")
}

fn policy_mappings(mappings: &PolicyMappings<'_>) -> String {
    mappings
        .mappings
        .iter()
        .map(|mapping| {
            format!(
                "{}:{}",
                mapping.issuer_domain_policy.to_id_string(),
                mapping.subject_domain_policy.to_id_string()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn signed_certificate_timestamps(timestamps: &[SignedCertificateTimestamp<'_>]) -> String {
    let mut lines = Vec::new();

    for sct in timestamps {
        lines.push("Signed Certificate Timestamp:".to_owned());
        let version = if sct.version.0 == 0 {
            "v1 (0x0)".to_owned()
        } else {
            format!("unknown (0x{:X})", sct.version.0)
        };
        lines.push(format!("    Version   : {version}"));
        lines.push(format!("    Log ID    : {}", colon_hex(sct.id.key_id)));
        lines.push(format!("    Timestamp : {}", sct_timestamp(sct.timestamp)));
    }

    lines.join("\n")
}

// milliseconds since the epoch
fn sct_timestamp(millis: u64) -> String {
    let nanos = i128::from(millis) * 1_000_000;
    match OffsetDateTime::from_unix_timestamp_nanos(nanos) {
        Ok(dt) => format!("{}.{:03} UTC", CertDate::from(dt), millis % 1000),
        Err(_) => format!("{millis} ms"),
    }
}
