use atrius_macros::FhirModel;

use crate::datatypes::{Attachment, CodeableConcept, Extension, Reference};
use crate::primitives::{Canonical, Code, Date, Markdown, String};

/// Related artifacts such as additional documentation, justification, or
/// bibliographic references.
///
/// See: [RelatedArtifact](http://hl7.org/fhir/StructureDefinition/RelatedArtifact)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "RelatedArtifact", kind = "datatype")]
pub struct RelatedArtifact {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// documentation | justification | citation | predecessor | successor | derived-from | depends-on | composed-of | part-of | +
    #[fhir(rename = "type", required, summary, binding = "RelatedArtifactType")]
    type_: Option<Code>,
    /// Additional classifiers
    #[fhir(summary, binding = "CitationArtifactClassifier")]
    classifier: Vec<CodeableConcept>,
    /// Short label
    #[fhir(summary)]
    label: Option<String>,
    /// Brief description of the related artifact
    #[fhir(summary)]
    display: Option<String>,
    /// Bibliographic citation for the artifact
    #[fhir(summary)]
    citation: Option<Markdown>,
    /// What document is being referenced
    #[fhir(summary)]
    document: Option<Attachment>,
    /// What artifact is being referenced
    #[fhir(summary)]
    resource: Option<Canonical>,
    /// What artifact, if not a conformance resource
    #[fhir(summary, reference = "Resource")]
    resource_reference: Option<Reference>,
    /// draft | active | retired | unknown
    #[fhir(summary, binding = "PublicationStatus")]
    publication_status: Option<Code>,
    /// Date of publication of the artifact being referred to
    #[fhir(summary)]
    publication_date: Option<Date>,
}
