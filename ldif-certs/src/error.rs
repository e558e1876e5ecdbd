use std::io;
use std::path::PathBuf;
use thiserror::Error;
use x509_parser::error::X509Error;
use x509_parser::nom;

#[derive(Debug, Error)]
pub enum DumpError {
    /// dump file couldn't be read
    #[error("couldn't read dump file `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// attribute value is not valid base64
    #[error("couldn't decode base64 certificate value: {0}")]
    Decode(#[from] base64::DecodeError),

    /// decoded bytes are not a DER X.509 certificate
    #[error("couldn't parse DER certificate: {0}")]
    CertificateParse(#[from] nom::Err<X509Error>),

    /// a certificate value failed to decode or parse
    #[error("certificate #{index} is invalid: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: Box<DumpError>,
    },

    /// summaries couldn't be written out
    #[error("couldn't write certificate summary: {0}")]
    Write(#[source] io::Error),
}

impl DumpError {
    /// `true` when the dump file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DumpError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    pub(crate) fn at_entry(self, index: usize) -> Self {
        DumpError::InvalidEntry {
            index,
            source: Box::new(self),
        }
    }
}
