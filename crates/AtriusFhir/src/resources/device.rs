use atrius_macros::FhirModel;

use crate::choice::ChoiceValue;
use crate::datatypes::{
    Annotation, CodeableConcept, CodeableReference, ContactPoint, Count, Duration, Extension,
    Identifier, Meta, Narrative, Reference,
};
use crate::primitives::{Base64Binary, Boolean, Code, DateTime, Id, String, Uri};
use crate::resources::Resource;

/// A type of a manufactured item that is used in the provision of healthcare
/// without being substantially changed through that activity.
///
/// The device may be a medical or non-medical device.
///
/// See: [Device](http://hl7.org/fhir/StructureDefinition/Device)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Device", kind = "resource")]
pub struct Device {
    #[fhir(summary)]
    id: Option<Id>,
    #[fhir(summary)]
    meta: Option<Meta>,
    #[fhir(summary)]
    implicit_rules: Option<Uri>,
    #[fhir(binding = "AllLanguages")]
    language: Option<Code>,
    text: Option<Narrative>,
    contained: Vec<Resource>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Instance identifier
    identifier: Vec<Identifier>,
    /// The name used to display by default when the device is referenced
    display_name: Option<String>,
    /// The reference to the definition for the device
    definition: Option<CodeableReference>,
    /// Unique Device Identifier (UDI) Barcode string
    #[fhir(summary)]
    udi_carrier: Vec<DeviceUdiCarrier>,
    /// active | inactive | entered-in-error
    #[fhir(summary, binding = "FHIRDeviceStatus")]
    status: Option<Code>,
    /// lost | damaged | destroyed | available
    #[fhir(binding = "FHIRDeviceAvailabilityStatus")]
    availability_status: Option<CodeableConcept>,
    /// An identifier that supports traceability to the event during which material in this product from one or more biological entities was obtained or pooled
    biological_source_event: Option<Identifier>,
    /// Name of device manufacturer
    manufacturer: Option<String>,
    /// Date when the device was made
    manufacture_date: Option<DateTime>,
    /// Date and time of expiry of this device (if applicable)
    expiration_date: Option<DateTime>,
    /// Lot number of manufacture
    lot_number: Option<String>,
    /// Serial number assigned by the manufacturer
    serial_number: Option<String>,
    /// The name or names of the device as known to the manufacturer and/or patient
    name: Vec<DeviceName>,
    /// The manufacturer's model number for the device
    model_number: Option<String>,
    /// The part number or catalog number of the device
    part_number: Option<String>,
    /// Indicates a high-level grouping of the device
    #[fhir(binding = "DeviceCategory")]
    category: Vec<CodeableConcept>,
    /// The kind or type of device
    #[fhir(rename = "type", binding = "DeviceType")]
    type_: Vec<CodeableConcept>,
    /// The actual design of the device or software version running on the device
    version: Vec<DeviceVersion>,
    /// Identifies the standards, specifications, or formal guidances for the capabilities supported by the device
    conforms_to: Vec<DeviceConformsTo>,
    /// Inherent, essentially fixed, characteristics of the device.  e.g., time properties, size, material, etc.
    property: Vec<DeviceProperty>,
    /// The designated condition for performing a task
    #[fhir(binding = "FHIRDeviceOperationMode")]
    mode: Option<CodeableConcept>,
    /// The series of occurrences that repeats during the operation of the device
    cycle: Option<Count>,
    /// A measurement of time during the device's operation (e.g., days, hours, mins, etc.)
    duration: Option<Duration>,
    /// Organization responsible for device
    #[fhir(reference = "Organization")]
    owner: Option<Reference>,
    /// Details for human/organization for support
    contact: Vec<ContactPoint>,
    /// Where the device is found
    #[fhir(reference = "Location")]
    location: Option<Reference>,
    /// Network address to contact device
    url: Option<Uri>,
    /// Technical endpoints providing access to electronic services provided by the device
    #[fhir(reference = "Endpoint")]
    endpoint: Vec<Reference>,
    /// Linked device acting as a communication/data collector, translator or controller
    gateway: Vec<CodeableReference>,
    /// Device notes and comments
    note: Vec<Annotation>,
    /// Safety Characteristics of Device
    #[fhir(summary, binding = "DeviceSafety")]
    safety: Vec<CodeableConcept>,
    /// The higher level or encompassing device that this device is a logical part of
    #[fhir(reference = "Device")]
    parent: Option<Reference>,
}

/// Unique Device Identifier (UDI) Barcode string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Device.UdiCarrier", kind = "backbone")]
pub struct DeviceUdiCarrier {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Mandatory fixed portion of UDI
    #[fhir(required, summary)]
    device_identifier: Option<String>,
    /// UDI Issuing Organization
    #[fhir(required, summary)]
    issuer: Option<Uri>,
    /// Regional UDI authority
    jurisdiction: Option<Uri>,
    /// UDI Machine Readable Barcode String
    #[fhir(rename = "carrierAIDC", summary)]
    carrier_aidc: Option<Base64Binary>,
    /// UDI Human Readable Barcode String
    #[fhir(rename = "carrierHRF", summary)]
    carrier_hrf: Option<String>,
    /// barcode | rfid | manual | card | self-reported | electronic-transmission | unknown
    #[fhir(binding = "UDIEntryType")]
    entry_type: Option<Code>,
}

/// The name or names of the device as known to the manufacturer and/or
/// patient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Device.Name", kind = "backbone")]
pub struct DeviceName {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// The term that names the device
    #[fhir(required, summary)]
    value: Option<String>,
    /// registered-name | user-friendly-name | patient-reported-name
    #[fhir(rename = "type", required, summary, binding = "DeviceNameType")]
    type_: Option<Code>,
    /// The preferred device name
    #[fhir(summary)]
    display: Option<Boolean>,
}

/// The actual design of the device or software version running on the device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Device.Version", kind = "backbone")]
pub struct DeviceVersion {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// The type of the device version, e.g. manufacturer, approved, internal
    #[fhir(rename = "type", binding = "DeviceVersionType")]
    type_: Option<CodeableConcept>,
    /// The hardware or software module of the device to which the version applies
    component: Option<Identifier>,
    /// The date the version was installed on the device
    install_date: Option<DateTime>,
    /// The version text
    #[fhir(required)]
    value: Option<String>,
}

/// Identifies the standards, specifications, or formal guidances for the
/// capabilities supported by the device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Device.ConformsTo", kind = "backbone")]
pub struct DeviceConformsTo {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Describes the common type of the standard, specification, or formal guidance.  communication | performance | measurement
    #[fhir(binding = "DeviceSpecificationCategory")]
    category: Option<CodeableConcept>,
    /// Identifies the standard, specification, or formal guidance that the device adheres to
    #[fhir(required, binding = "DeviceSpecification-type")]
    specification: Option<CodeableConcept>,
    /// Specific form or variant of the standard
    version: Option<String>,
}

/// Inherent, essentially fixed, characteristics of the device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Device.Property", kind = "backbone")]
pub struct DeviceProperty {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Code that specifies the property being represented
    #[fhir(rename = "type", required, binding = "DevicePropertyType")]
    type_: Option<CodeableConcept>,
    /// Value of the property
    #[fhir(
        required,
        choice = "Quantity, CodeableConcept, string, boolean, integer, Range, Attachment"
    )]
    value: Option<ChoiceValue>,
}
