pub mod compile_time {
    pub mod input {
        /// Maximum ARF file size accepted for conversion (256MB)
        /// SECURITY: Bounds memory use, the whole document is held as a tree
        pub const MAX_INPUT_SIZE: u64 = 256 * 1024 * 1024;

        /// Name of the optional configuration file looked up in the working directory
        pub const CONFIG_FILE_NAME: &str = "arf2oscal.toml";
    }

    pub mod arf {
        /// Reference links under this prefix name NIST SP 800-53 controls
        pub const NIST_REFERENCE_PREFIX: &str = "http://nvlpubs.nist.gov/nistpubs/";

        /// Placeholder subject title when the ARF document has no target
        pub const UNKNOWN_HOST: &str = "unknown-host";
    }

    pub mod oscal {
        /// Name of the JSON document written next to the working directory
        pub const OUTPUT_FILE_NAME: &str = "assessment-results-changed.json";

        /// Namespace stamped on every property the converter emits
        pub const PROPERTY_NAMESPACE: &str =
            "https://oscal-compass.github.io/compliance-trestle/schemas/oscal";

        pub const OSCAL_VERSION: &str = "1.1.2";

        pub const DOCUMENT_VERSION: &str = "0.1.0";

        /// Assessment plan the results are imported against
        pub const ASSESSMENT_PLAN_HREF: &str = "file://complytime/assessment-plan.json";

        /// Observation method tag for scanner-produced evidence
        pub const AUTOMATED_METHOD: &str = "AUTOMATED";

        /// Description of the relevant-evidence link back to the ARF file
        pub const EVIDENCE_DESCRIPTION: &str = "ARF_FILE";

        pub const RESULT_TITLE: &str = "OpenSCAP ARF Scan Automated Assessment";

        pub const RESULT_DESCRIPTION: &str =
            "Assessment Results Automatically Generated from OpenSCAP ARF";
    }
}
