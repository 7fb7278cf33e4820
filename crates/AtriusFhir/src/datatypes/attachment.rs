use atrius_macros::FhirModel;

use crate::datatypes::Extension;
use crate::primitives::{
    Base64Binary, Code, DateTime, Decimal, Integer64, PositiveInt, String, Url,
};

/// Content in a format defined elsewhere.
///
/// See: [Attachment](http://hl7.org/fhir/StructureDefinition/Attachment)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Attachment", kind = "datatype")]
pub struct Attachment {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Mime type of the content, with charset etc.
    #[fhir(summary, binding = "MimeType")]
    content_type: Option<Code>,
    /// Human language of the content (BCP-47)
    #[fhir(summary, binding = "AllLanguages")]
    language: Option<Code>,
    /// Data inline, base64ed
    data: Option<Base64Binary>,
    /// Uri where the data can be found
    #[fhir(summary)]
    url: Option<Url>,
    /// Number of bytes of content (if url provided)
    #[fhir(summary)]
    size: Option<Integer64>,
    /// Hash of the data (sha-1, base64ed)
    #[fhir(summary)]
    hash: Option<Base64Binary>,
    #[fhir(summary)]
    title: Option<String>,
    /// Date attachment was first created
    #[fhir(summary)]
    creation: Option<DateTime>,
    height: Option<PositiveInt>,
    width: Option<PositiveInt>,
    frames: Option<PositiveInt>,
    /// Length in seconds (audio / video)
    duration: Option<Decimal>,
    pages: Option<PositiveInt>,
}
