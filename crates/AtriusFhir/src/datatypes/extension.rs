use atrius_macros::FhirModel;

use crate::choice::ChoiceValue;

/// Optional extension element.
///
/// `url` identifies the meaning of the extension and is carried as a plain
/// attribute, like `id`. An extension holds either a `value[x]` or nested
/// extensions, never neither.
///
/// See: [Extension](http://hl7.org/fhir/StructureDefinition/Extension)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Extension", kind = "datatype")]
pub struct Extension {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Identifies the meaning of the extension
    #[fhir(attribute, required)]
    url: Option<std::string::String>,
    /// Value of extension
    #[fhir(choice = "base64Binary, boolean, canonical, code, date, dateTime, decimal, id, instant, integer, integer64, markdown, positiveInt, string, time, unsignedInt, uri, url, Address, Annotation, Attachment, CodeableConcept, CodeableReference, Coding, ContactPoint, Count, Duration, HumanName, Identifier, Meta, Period, Quantity, Range, Ratio, Reference, RelatedArtifact, Timing")]
    value: Option<ChoiceValue>,
}
