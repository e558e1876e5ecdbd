//! Object identifiers and the OpenSSL short names they are displayed with.

macro_rules! define_oid {
    ( $( $uppercase:ident => $str_value:literal, )+ ) => {
        $( pub const $uppercase: &str = $str_value; )+
    };
}

// attribute types
define_oid! {
    AT_COMMON_NAME => "2.5.4.3",
    AT_SURNAME => "2.5.4.4",
    AT_SERIAL_NUMBER => "2.5.4.5",
    AT_COUNTRY_NAME => "2.5.4.6",
    AT_LOCALITY_NAME => "2.5.4.7",
    AT_STATE_OR_PROVINCE_NAME => "2.5.4.8",
    AT_STREET_ADDRESS => "2.5.4.9",
    AT_ORGANIZATION_NAME => "2.5.4.10",
    AT_ORGANIZATIONAL_UNIT_NAME => "2.5.4.11",
    AT_TITLE => "2.5.4.12",
    AT_DESCRIPTION => "2.5.4.13",
    AT_BUSINESS_CATEGORY => "2.5.4.15",
    AT_POSTAL_CODE => "2.5.4.17",
    AT_NAME => "2.5.4.41",
    AT_GIVEN_NAME => "2.5.4.42",
    AT_INITIALS => "2.5.4.43",
    AT_GENERATION_QUALIFIER => "2.5.4.44",
    AT_DN_QUALIFIER => "2.5.4.46",
    AT_PSEUDONYM => "2.5.4.65",
    AT_ORGANIZATION_IDENTIFIER => "2.5.4.97",
    EMAIL_ADDRESS => "1.2.840.113549.1.9.1",
    DOMAIN_COMPONENT => "0.9.2342.19200300.100.1.25",
    USER_ID => "0.9.2342.19200300.100.1.1",
    JURISDICTION_LOCALITY => "1.3.6.1.4.1.311.60.2.1.1",
    JURISDICTION_STATE_OR_PROVINCE => "1.3.6.1.4.1.311.60.2.1.2",
    JURISDICTION_COUNTRY => "1.3.6.1.4.1.311.60.2.1.3",
}

// extensions
define_oid! {
    SUBJECT_DIRECTORY_ATTRIBUTES => "2.5.29.9",
    SUBJECT_KEY_IDENTIFIER => "2.5.29.14",
    KEY_USAGE => "2.5.29.15",
    PRIVATE_KEY_USAGE_PERIOD => "2.5.29.16",
    SUBJECT_ALTERNATIVE_NAME => "2.5.29.17",
    ISSUER_ALTERNATIVE_NAME => "2.5.29.18",
    BASIC_CONSTRAINTS => "2.5.29.19",
    NAME_CONSTRAINTS => "2.5.29.30",
    CRL_DISTRIBUTION_POINTS => "2.5.29.31",
    CERTIFICATE_POLICIES => "2.5.29.32",
    POLICY_MAPPINGS => "2.5.29.33",
    AUTHORITY_KEY_IDENTIFIER => "2.5.29.35",
    POLICY_CONSTRAINTS => "2.5.29.36",
    EXTENDED_KEY_USAGE => "2.5.29.37",
    FRESHEST_CRL => "2.5.29.46",
    INHIBIT_ANY_POLICY => "2.5.29.54",
    AUTHORITY_INFO_ACCESS => "1.3.6.1.5.5.7.1.1",
    SUBJECT_INFO_ACCESS => "1.3.6.1.5.5.7.1.11",
    TLS_FEATURE => "1.3.6.1.5.5.7.1.24",
    OCSP_NO_CHECK => "1.3.6.1.5.5.7.48.1.5",
    NETSCAPE_CERT_TYPE => "2.16.840.1.113730.1.1",
    NETSCAPE_COMMENT => "2.16.840.1.113730.1.13",
    CT_PRECERT_SCTS => "1.3.6.1.4.1.11129.2.4.2",
    CT_PRECERT_POISON => "1.3.6.1.4.1.11129.2.4.3",
}

// extended key usages
define_oid! {
    KP_SERVER_AUTH => "1.3.6.1.5.5.7.3.1",
    KP_CLIENT_AUTH => "1.3.6.1.5.5.7.3.2",
    KP_CODE_SIGNING => "1.3.6.1.5.5.7.3.3",
    KP_EMAIL_PROTECTION => "1.3.6.1.5.5.7.3.4",
    KP_IPSEC_END_SYSTEM => "1.3.6.1.5.5.7.3.5",
    KP_IPSEC_TUNNEL => "1.3.6.1.5.5.7.3.6",
    KP_IPSEC_USER => "1.3.6.1.5.5.7.3.7",
    KP_TIME_STAMPING => "1.3.6.1.5.5.7.3.8",
    KP_OCSP_SIGNING => "1.3.6.1.5.5.7.3.9",
    KP_ANY_EXTENDED_KEY_USAGE => "2.5.29.37.0",
    KP_KDC_RESPONSE => "1.3.6.1.5.2.3.5",
    KP_MS_SMARTCARD_LOGIN => "1.3.6.1.4.1.311.20.2.2",
    KP_MS_EFS => "1.3.6.1.4.1.311.10.3.4",
    KP_MS_CODE_COM => "1.3.6.1.4.1.311.2.1.22",
}

// access methods and policy qualifiers
define_oid! {
    AD_OCSP => "1.3.6.1.5.5.7.48.1",
    AD_CA_ISSUERS => "1.3.6.1.5.5.7.48.2",
    AD_TIME_STAMPING => "1.3.6.1.5.5.7.48.3",
    AD_CA_REPOSITORY => "1.3.6.1.5.5.7.48.5",
    QT_CPS => "1.3.6.1.5.5.7.2.1",
    QT_UNOTICE => "1.3.6.1.5.5.7.2.2",
}

/// Short name of a distinguished name attribute type.
pub fn attribute_short_name(oid: &str) -> Option<&'static str> {
    let name = match oid {
        AT_COMMON_NAME => "CN",
        AT_SURNAME => "SN",
        AT_SERIAL_NUMBER => "serialNumber",
        AT_COUNTRY_NAME => "C",
        AT_LOCALITY_NAME => "L",
        AT_STATE_OR_PROVINCE_NAME => "ST",
        AT_STREET_ADDRESS => "street",
        AT_ORGANIZATION_NAME => "O",
        AT_ORGANIZATIONAL_UNIT_NAME => "OU",
        AT_TITLE => "title",
        AT_DESCRIPTION => "description",
        AT_BUSINESS_CATEGORY => "businessCategory",
        AT_POSTAL_CODE => "postalCode",
        AT_NAME => "name",
        AT_GIVEN_NAME => "GN",
        AT_INITIALS => "initials",
        AT_GENERATION_QUALIFIER => "generationQualifier",
        AT_DN_QUALIFIER => "dnQualifier",
        AT_PSEUDONYM => "pseudonym",
        AT_ORGANIZATION_IDENTIFIER => "organizationIdentifier",
        EMAIL_ADDRESS => "emailAddress",
        DOMAIN_COMPONENT => "DC",
        USER_ID => "UID",
        JURISDICTION_LOCALITY => "jurisdictionL",
        JURISDICTION_STATE_OR_PROVINCE => "jurisdictionST",
        JURISDICTION_COUNTRY => "jurisdictionC",
        _ => return None,
    };
    Some(name)
}

/// Short name of a certificate extension.
pub fn extension_short_name(oid: &str) -> Option<&'static str> {
    let name = match oid {
        SUBJECT_DIRECTORY_ATTRIBUTES => "subjectDirectoryAttributes",
        SUBJECT_KEY_IDENTIFIER => "subjectKeyIdentifier",
        KEY_USAGE => "keyUsage",
        PRIVATE_KEY_USAGE_PERIOD => "privateKeyUsagePeriod",
        SUBJECT_ALTERNATIVE_NAME => "subjectAltName",
        ISSUER_ALTERNATIVE_NAME => "issuerAltName",
        BASIC_CONSTRAINTS => "basicConstraints",
        NAME_CONSTRAINTS => "nameConstraints",
        CRL_DISTRIBUTION_POINTS => "crlDistributionPoints",
        CERTIFICATE_POLICIES => "certificatePolicies",
        POLICY_MAPPINGS => "policyMappings",
        AUTHORITY_KEY_IDENTIFIER => "authorityKeyIdentifier",
        POLICY_CONSTRAINTS => "policyConstraints",
        EXTENDED_KEY_USAGE => "extendedKeyUsage",
        FRESHEST_CRL => "freshestCRL",
        INHIBIT_ANY_POLICY => "inhibitAnyPolicy",
        AUTHORITY_INFO_ACCESS => "authorityInfoAccess",
        SUBJECT_INFO_ACCESS => "subjectInfoAccess",
        TLS_FEATURE => "tlsfeature",
        OCSP_NO_CHECK => "noCheck",
        NETSCAPE_CERT_TYPE => "nsCertType",
        NETSCAPE_COMMENT => "nsComment",
        CT_PRECERT_SCTS => "ct_precert_scts",
        CT_PRECERT_POISON => "ct_precert_poison",
        _ => return None,
    };
    Some(name)
}

/// Long name of an extended key usage purpose.
pub fn key_purpose_long_name(oid: &str) -> Option<&'static str> {
    let name = match oid {
        KP_SERVER_AUTH => "TLS Web Server Authentication",
        KP_CLIENT_AUTH => "TLS Web Client Authentication",
        KP_CODE_SIGNING => "Code Signing",
        KP_EMAIL_PROTECTION => "E-mail Protection",
        KP_IPSEC_END_SYSTEM => "IPSec End System",
        KP_IPSEC_TUNNEL => "IPSec Tunnel",
        KP_IPSEC_USER => "IPSec User",
        KP_TIME_STAMPING => "Time Stamping",
        KP_OCSP_SIGNING => "OCSP Signing",
        KP_ANY_EXTENDED_KEY_USAGE => "Any Extended Key Usage",
        KP_KDC_RESPONSE => "Signing KDC Response",
        KP_MS_SMARTCARD_LOGIN => "Microsoft Smartcard Login",
        KP_MS_EFS => "Microsoft Encrypted File System",
        KP_MS_CODE_COM => "Microsoft Commercial Code Signing",
        _ => return None,
    };
    Some(name)
}

/// Long name of an information access method.
pub fn access_method_long_name(oid: &str) -> Option<&'static str> {
    let name = match oid {
        AD_OCSP => "OCSP",
        AD_CA_ISSUERS => "CA Issuers",
        AD_TIME_STAMPING => "AD Time Stamping",
        AD_CA_REPOSITORY => "CA Repository",
        _ => return None,
    };
    Some(name)
}
