use atrius_macros::FhirModel;

use crate::choice::ChoiceValue;
use crate::datatypes::{Coding, Extension};
use crate::primitives::{PositiveInt, String, Url};

/// Virtual Service Contact Details.
///
/// See: [VirtualServiceDetail](http://hl7.org/fhir/StructureDefinition/VirtualServiceDetail)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "VirtualServiceDetail", kind = "datatype")]
pub struct VirtualServiceDetail {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Channel Type
    #[fhir(summary, binding = "VirtualServiceType")]
    channel_type: Option<Coding>,
    /// Contact address/number
    #[fhir(summary, choice = "url, string, ContactPoint")]
    address: Option<ChoiceValue>,
    /// Address to see alternative connection details
    #[fhir(summary)]
    additional_info: Vec<Url>,
    /// Maximum number of participants supported by the virtual service
    #[fhir(summary)]
    max_participants: Option<PositiveInt>,
    /// Session Key required by the virtual service
    #[fhir(summary)]
    session_key: Option<String>,
}
