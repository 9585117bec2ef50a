// Error codes implementation
// Stable codes attached to log records and CLI error output

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
}

pub mod dataset {
    pub const SOURCE_UNAVAILABLE: &str = "DATASET_5001";
    pub const UNREADABLE_CONTENT: &str = "DATASET_5002";
}

pub mod configuration {
    pub const INVALID_CONFIGURATION: &str = "CONFIG_6001";
}

pub mod serialization {
    pub const ENCODING_FAILED: &str = "SERIALIZATION_7001";
}

pub mod system {
    pub const INTERNAL: &str = "SYSTEM_9001";
}
