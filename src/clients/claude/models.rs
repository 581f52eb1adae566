pub struct ClaudeModels;

impl ClaudeModels {
    // Claude 3.5 Models
    pub const SONNET_3_5_V2: &'static str = "claude-3-5-sonnet-20241022";
    pub const SONNET_3_5: &'static str = "claude-3-5-sonnet-20240620";
    pub const HAIKU_3_5: &'static str = "claude-3-5-haiku-20241022";

    // Claude 3 Models
    pub const SONNET_3: &'static str = "claude-3-sonnet-20240229";
    pub const HAIKU_3: &'static str = "claude-3-haiku-20240307";
}

pub struct BedrockModels;

impl BedrockModels {
    // Claude 3.5 Models
    pub const SONNET_3_5_V2: &'static str = "anthropic.claude-3-5-sonnet-20241022-v2:0";
    pub const SONNET_3_5: &'static str = "anthropic.claude-3-5-sonnet-20240620-v1:0";
    pub const HAIKU_3_5: &'static str = "anthropic.claude-3-5-haiku-20241022-v1:0";

    // Claude 3 Models
    pub const SONNET_3: &'static str = "anthropic.claude-3-sonnet-20240229-v1:0";
    pub const HAIKU_3: &'static str = "anthropic.claude-3-haiku-20240307-v1:0";
}
