//! Shared constants: known-insecure template secrets, deprecated and
//! conflicting environment variables, and the current config schema version.

/// Current version of the custom config schema
pub const CONFIG_VERSION: &str = "1.2.1";

/// A secret-bearing environment variable and the insecure value shipped in
/// the example templates
#[derive(Debug, Clone, Copy)]
pub struct SecretDefault {
    /// Environment variable name
    pub key: &'static str,
    /// The template value, insecure if still in use
    pub default_value: &'static str,
}

/// Template secrets checked against the live environment at startup
pub const SECRET_DEFAULTS: &[SecretDefault] = &[
    SecretDefault {
        key: "CREDS_KEY",
        default_value: "b460d9867a26d092464f58abd9970b6585c17bf350a9e21274296e8883fd0557",
    },
    SecretDefault {
        key: "CREDS_IV",
        default_value: "66473f98e42bfab07f83f811497e42e7",
    },
    SecretDefault {
        key: "JWT_SECRET",
        default_value: "115454fa6bb0c5e641008d4e9c14918cccf2514bd607d9697229d1f8a6a501c1",
    },
    SecretDefault {
        key: "JWT_REFRESH_SECRET",
        default_value: "6e616c539ee43bdf677ecc04fb59efa5c5ee7abf01ce3e0b6c510219b0a656d3",
    },
];

/// An environment variable descriptor with a human-readable subject
#[derive(Debug, Clone, Copy)]
pub struct VariableDescriptor {
    /// Environment variable name
    pub key: &'static str,
    /// What the variable relates to, embedded in the warning text
    pub description: &'static str,
}

/// Variables deprecated when the `azureOpenAI` endpoint configuration is used
pub const DEPRECATED_AZURE_VARIABLES: &[VariableDescriptor] = &[
    VariableDescriptor {
        key: "AZURE_OPENAI_DEFAULT_MODEL",
        description: "the Azure OpenAI default model",
    },
    VariableDescriptor {
        key: "AZURE_OPENAI_MODELS",
        description: "the Azure OpenAI models",
    },
    VariableDescriptor {
        key: "AZURE_USE_MODEL_AS_DEPLOYMENT_NAME",
        description: "the Azure OpenAI model-as-deployment-name fallback",
    },
    VariableDescriptor {
        key: "AZURE_API_KEY",
        description: "the singular Azure API key",
    },
    VariableDescriptor {
        key: "AZURE_OPENAI_API_INSTANCE_NAME",
        description: "the singular Azure instance name",
    },
    VariableDescriptor {
        key: "AZURE_OPENAI_API_DEPLOYMENT_NAME",
        description: "the singular Azure deployment name",
    },
    VariableDescriptor {
        key: "AZURE_OPENAI_API_VERSION",
        description: "the singular Azure API version",
    },
    VariableDescriptor {
        key: "AZURE_OPENAI_API_COMPLETIONS_DEPLOYMENT_NAME",
        description: "the singular Azure completions deployment name",
    },
    VariableDescriptor {
        key: "AZURE_OPENAI_API_EMBEDDINGS_DEPLOYMENT_NAME",
        description: "the singular Azure embeddings deployment name",
    },
    VariableDescriptor {
        key: "PLUGINS_USE_AZURE",
        description: "the Azure plugins flag",
    },
];

/// Variables that conflict with the `azureOpenAI` endpoint's model-group
/// placeholder mapping
pub const CONFLICTING_AZURE_VARIABLES: &[&str] = &[
    "AZURE_OPENAI_API_INSTANCE_NAME",
    "AZURE_OPENAI_API_DEPLOYMENT_NAME",
];
