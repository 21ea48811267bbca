//! String constants shared across slices.
//! Hub name tokens must stay in sync with [`crate::hub::Hub`] string forms.

/// Hub name tokens (lowercase, stable, closed set).
pub const GNYMBLE: &str = "gnymble";
pub const PERCYTECH: &str = "percytech";
pub const PERCYMD: &str = "percymd";
pub const PERCYTEXT: &str = "percytext";

/// Document-level attribute carrying the resolved hub name.
pub const HUB_ATTRIBUTE: &str = "data-hub";

/// Response header mirroring the resolved hub for HTTP clients.
pub const HUB_HEADER: &str = "x-hub";

/// `OpenAPI` tags.
pub const SYSTEM_TAG: &str = "System";
pub const HUB_TAG: &str = "Hub";
pub const LEADS_TAG: &str = "Leads";
