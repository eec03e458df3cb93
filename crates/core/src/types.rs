/// Job identifiers are opaque strings assigned by the provider.
pub type JobId = String;

/// Model identifiers are opaque, provider-defined strings.
pub type ModelId = String;
